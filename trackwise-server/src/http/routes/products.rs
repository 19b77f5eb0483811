//! Product endpoints - low-stock listing and creation

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Product, ProductRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::NewProduct;

/// Create product request
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub product_name: Option<String>,
    pub description: Option<String>,
    pub initial_quantity: Option<i64>,
    pub sale_price: Option<f64>,
    pub purchase_price: Option<f64>,
    pub supplier_id: Option<i64>,
}

/// Create product response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductResponse {
    pub success: bool,
    pub message: &'static str,
    pub product_id: i64,
}

/// Product response carrying all stored fields
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub product_id: i64,
    pub product_name: String,
    pub description: Option<String>,
    pub quantity_in_stock: i64,
    pub sale_price: f64,
    pub purchase_price: f64,
    pub supplier_id: Option<i64>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            product_id: p.product_id,
            product_name: p.name,
            description: p.description,
            quantity_in_stock: p.quantity_in_stock,
            sale_price: p.sale_price,
            purchase_price: p.purchase_price,
            supplier_id: p.supplier_id,
        }
    }
}

/// GET /api/products/lowstock - products at or below the threshold,
/// lowest stock first
async fn list_low_stock(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = ProductRepo::new(&state.pool).list_low_stock().await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// POST /api/products - insert a product row
async fn create_product(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateProductResponse>), ApiError> {
    let Json(req) = body.map_err(|_| ApiError::MalformedBody)?;
    let product = NewProduct::new(
        req.product_name,
        req.description,
        req.initial_quantity,
        req.sale_price,
        req.purchase_price,
        req.supplier_id,
    )?;

    let product_id = ProductRepo::new(&state.pool).insert(&product).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateProductResponse {
            success: true,
            message: "Product added successfully",
            product_id,
        }),
    ))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/products/lowstock", get(list_low_stock))
        .route("/api/products", post(create_product))
}
