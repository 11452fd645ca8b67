use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use warehouse_catalog::{Category, Warehouse};
use warehouse_core::ProductId;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(add_product).get(list_products))
        .route("/:id", get(get_product))
        .route("/category/:category", get(list_by_category))
}

pub async fn add_product(
    Extension(warehouse): Extension<Arc<Warehouse>>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    let product = match dto::to_product(body) {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let id = product.id().to_string();
    if let Err(e) = warehouse.add(product) {
        return errors::domain_error_to_response(e);
    }

    (StatusCode::CREATED, Json(serde_json::json!({ "id": id }))).into_response()
}

pub async fn list_products(
    Extension(warehouse): Extension<Arc<Warehouse>>,
) -> axum::response::Response {
    let items = warehouse
        .get_all()
        .into_iter()
        .map(dto::product_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_product(
    Extension(warehouse): Extension<Arc<Warehouse>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match ProductId::new(id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match warehouse.get_by_id(&id) {
        Some(product) => (StatusCode::OK, Json(dto::product_to_json(product))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}

pub async fn list_by_category(
    Extension(warehouse): Extension<Arc<Warehouse>>,
    Path(category): Path<String>,
) -> axum::response::Response {
    let category: Category = match category.parse() {
        Ok(v) => v,
        Err(e) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_category", e.to_string());
        }
    };

    let items = warehouse
        .get_by_category(category)
        .into_iter()
        .map(dto::product_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
