use std::sync::Arc;

use warehouse_catalog::Warehouse;

#[tokio::main]
async fn main() {
    warehouse_observability::init();

    let addr = std::env::var("WAREHOUSE_ADDR").unwrap_or_else(|_| {
        tracing::info!("WAREHOUSE_ADDR not set; using 0.0.0.0:8080");
        "0.0.0.0:8080".to_string()
    });

    // The warehouse lives here, at the composition root, and is handed to the
    // HTTP layer by reference; there is no ambient singleton.
    let warehouse = Arc::new(Warehouse::new());
    let app = warehouse_api::app::build_app(warehouse);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
