use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Duration, Utc};
use warehouse_catalog::{Category, MAX_RATING, MIN_RATING, Product, Warehouse};
use warehouse_core::ProductId;

fn stocked_warehouse(size: usize) -> Warehouse {
    let warehouse = Warehouse::new();
    let today = Utc::now().date_naive();

    for i in 0..size {
        let category = Category::ALL[i % Category::ALL.len()];
        let rating = MIN_RATING + (i as u8 % MAX_RATING);
        let created = today - Duration::days((i % 60) as i64);
        let product = Product::new(
            ProductId::new(format!("p-{i}")).unwrap(),
            format!("Product {i}"),
            category,
            rating,
            created,
            created,
        )
        .unwrap();
        warehouse.add(product).unwrap();
    }

    warehouse
}

fn bench_add_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("warehouse_add");
    let today = Utc::now().date_naive();

    for size in [100usize, 1_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            // Each add scans for a duplicate id, so cost grows with the
            // collection; measure against a pre-stocked warehouse.
            let warehouse = stocked_warehouse(size);
            let mut next = size;
            b.iter(|| {
                let product = Product::new(
                    ProductId::new(format!("p-{next}")).unwrap(),
                    "Benchmark Shirt",
                    Category::Shirt,
                    8,
                    today,
                    today,
                )
                .unwrap();
                warehouse.add(black_box(product)).unwrap();
                next += 1;
            });
        });
    }

    group.finish();
}

fn bench_query_scans(c: &mut Criterion) {
    let mut group = c.benchmark_group("warehouse_queries");

    for size in [100usize, 1_000] {
        let warehouse = stocked_warehouse(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::new("get_by_category", size),
            &warehouse,
            |b, warehouse| b.iter(|| black_box(warehouse.get_by_category(Category::Jeans))),
        );

        group.bench_with_input(
            BenchmarkId::new("group_by_first_letter", size),
            &warehouse,
            |b, warehouse| b.iter(|| black_box(warehouse.group_by_first_letter())),
        );

        group.bench_with_input(
            BenchmarkId::new("top_rated_recent", size),
            &warehouse,
            |b, warehouse| b.iter(|| black_box(warehouse.top_rated_recent())),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_add_throughput, bench_query_scans);
criterion_main!(benches);
