use chrono::NaiveDate;
use serde::Deserialize;

use warehouse_catalog::Product;
use warehouse_core::{DomainResult, ProductId};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub id: String,
    pub name: String,
    pub category: String,
    pub rating: u8,
    pub creation_date: NaiveDate,
    /// Defaults to `creation_date` when omitted: a fresh product starts out
    /// unmodified.
    pub last_modified_date: Option<NaiveDate>,
}

/// Validate a create request into a domain product.
pub fn to_product(req: CreateProductRequest) -> DomainResult<Product> {
    let id = ProductId::new(req.id)?;
    let category = req.category.parse()?;
    let last_modified = req.last_modified_date.unwrap_or(req.creation_date);
    Product::new(
        id,
        req.name,
        category,
        req.rating,
        req.creation_date,
        last_modified,
    )
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(product: Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id().as_str(),
        "name": product.name(),
        "category": product.category(),
        "rating": product.rating(),
        "creation_date": product.creation_date(),
        "last_modified_date": product.last_modified_date(),
    })
}
