//! Dashboard KPI endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::Local;
use serde::Serialize;

use crate::db::repos::{ProductRepo, SaleRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Dashboard KPI response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpis {
    pub total_sales_today: f64,
    pub total_items_in_stock: i64,
    pub total_inventory_value: f64,
}

/// Round a monetary aggregate to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// GET /api/kpi/dashboard - three independent scalar aggregates
///
/// Each aggregate is its own query; an empty result defaults to zero, but
/// any query error fails the whole request.
async fn dashboard(State(state): State<Arc<AppState>>) -> Result<Json<DashboardKpis>, ApiError> {
    let today = Local::now().date_naive();

    let total_sales_today = SaleRepo::new(&state.pool).total_for_day(today).await?;

    let products = ProductRepo::new(&state.pool);
    let total_items_in_stock = products.total_stock().await?;
    let total_inventory_value = products.inventory_value().await?;

    Ok(Json(DashboardKpis {
        total_sales_today: round2(total_sales_today),
        total_items_in_stock,
        total_inventory_value: round2(total_inventory_value),
    }))
}

/// KPI routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/kpi/dashboard", get(dashboard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(1.236), 1.24);
        assert_eq!(round2(3.333_333), 3.33);
        assert_eq!(round2(0.0), 0.0);
    }
}
