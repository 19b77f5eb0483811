//! Recent sales endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{Sale, SaleRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Sale response carrying all stored fields
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleResponse {
    pub sale_id: i64,
    pub sale_date: String,
    pub total_amount: f64,
    pub product_id: Option<i64>,
    pub employee_id: Option<i64>,
}

impl From<Sale> for SaleResponse {
    fn from(s: Sale) -> Self {
        Self {
            sale_id: s.sale_id,
            sale_date: s.sale_date,
            total_amount: s.total_amount,
            product_id: s.product_id,
            employee_id: s.employee_id,
        }
    }
}

/// GET /api/sales/recent - the 5 most recently dated sales, newest first
async fn list_recent(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SaleResponse>>, ApiError> {
    let sales = SaleRepo::new(&state.pool).list_recent().await?;
    Ok(Json(sales.into_iter().map(SaleResponse::from).collect()))
}

/// Sales routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/sales/recent", get(list_recent))
}
