//! Product repository - low-stock listing, insertion, stock aggregates

use sqlx::{Row, SqlitePool};

use crate::models::NewProduct;

use super::{classify, DbError};

/// A product counts as low stock at or below this many units.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Product record from the store
#[derive(Debug, Clone)]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub quantity_in_stock: i64,
    pub sale_price: f64,
    pub purchase_price: f64,
    pub supplier_id: Option<i64>,
}

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List products at or below the low-stock threshold, lowest stock
    /// first so the most urgent restocking needs sort to the top.
    pub async fn list_low_stock(&self) -> Result<Vec<Product>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT ProductID, ProductName, Description, QuantityInStock,
                   SalePrice, PurchasePrice, SupplierID
            FROM Product
            WHERE QuantityInStock <= ?
            ORDER BY QuantityInStock ASC
            "#,
        )
        .bind(LOW_STOCK_THRESHOLD)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Product {
                product_id: r.get("ProductID"),
                name: r.get("ProductName"),
                description: r.get("Description"),
                quantity_in_stock: r.get("QuantityInStock"),
                sale_price: r.get("SalePrice"),
                purchase_price: r.get("PurchasePrice"),
                supplier_id: r.get("SupplierID"),
            })
            .collect())
    }

    /// Insert a new product and return the store-assigned id.
    ///
    /// Constraint failures (e.g. a supplier reference that does not exist)
    /// come back as `DbError::Integrity` with the store's diagnostic text.
    pub async fn insert(&self, product: &NewProduct) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO Product (ProductName, Description, QuantityInStock,
                                 SalePrice, PurchasePrice, SupplierID)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.quantity_in_stock)
        .bind(product.sale_price)
        .bind(product.purchase_price)
        .bind(product.supplier_id)
        .execute(self.pool)
        .await
        .map_err(classify)?;

        Ok(result.last_insert_rowid())
    }

    /// Total units in stock across all products; 0 when there are none.
    pub async fn total_stock(&self) -> Result<i64, DbError> {
        let total: Option<i64> = sqlx::query_scalar("SELECT SUM(QuantityInStock) FROM Product")
            .fetch_one(self.pool)
            .await?;

        Ok(total.unwrap_or(0))
    }

    /// Total inventory valuation at purchase cost; 0.0 when there are no
    /// products.
    pub async fn inventory_value(&self) -> Result<f64, DbError> {
        let total: Option<f64> =
            sqlx::query_scalar("SELECT SUM(PurchasePrice * QuantityInStock) FROM Product")
                .fetch_one(self.pool)
                .await?;

        Ok(total.unwrap_or(0.0))
    }
}
