//! Sale repository - recent listing and daily total

use chrono::NaiveDate;
use sqlx::{Row, SqlitePool};

use super::DbError;

/// How many sales the recent listing returns.
pub const RECENT_SALES_LIMIT: i64 = 5;

/// Sale record from the store.
///
/// `sale_date` is carried as the store's text timestamp; equal-date
/// ordering is whatever the store yields.
#[derive(Debug, Clone)]
pub struct Sale {
    pub sale_id: i64,
    pub sale_date: String,
    pub total_amount: f64,
    pub product_id: Option<i64>,
    pub employee_id: Option<i64>,
}

/// Sale repository
pub struct SaleRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SaleRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List the most recently dated sales, newest first.
    pub async fn list_recent(&self) -> Result<Vec<Sale>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT SaleID, SaleDate, TotalAmount, ProductID, EmployeeID
            FROM Sale
            ORDER BY SaleDate DESC
            LIMIT ?
            "#,
        )
        .bind(RECENT_SALES_LIMIT)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Sale {
                sale_id: r.get("SaleID"),
                sale_date: r.get("SaleDate"),
                total_amount: r.get("TotalAmount"),
                product_id: r.get("ProductID"),
                employee_id: r.get("EmployeeID"),
            })
            .collect())
    }

    /// Sum of sale totals for the given calendar day (time-of-day
    /// ignored); 0.0 when no sales match.
    pub async fn total_for_day(&self, day: NaiveDate) -> Result<f64, DbError> {
        let total: Option<f64> =
            sqlx::query_scalar("SELECT SUM(TotalAmount) FROM Sale WHERE date(SaleDate) = ?")
                .bind(day.format("%Y-%m-%d").to_string())
                .fetch_one(self.pool)
                .await?;

        Ok(total.unwrap_or(0.0))
    }
}
