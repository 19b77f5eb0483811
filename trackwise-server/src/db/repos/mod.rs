//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues parameterized queries
//! against the externally-owned schema. Constraint failures raised by the
//! store on write are surfaced as `DbError::Integrity` so handlers can map
//! them to a client error.

pub mod employees;
pub mod products;
pub mod sales;

pub use employees::{Employee, EmployeeRepo};
pub use products::{Product, ProductRepo};
pub use sales::{Sale, SaleRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("integrity violation: {detail}")]
    Integrity { detail: String },
}

/// Classify a sqlx error, pulling constraint violations out as integrity
/// failures with the store's diagnostic text.
pub(crate) fn classify(err: sqlx::Error) -> DbError {
    use sqlx::error::ErrorKind;

    if let sqlx::Error::Database(ref db_err) = err {
        match db_err.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => {
                return DbError::Integrity {
                    detail: db_err.message().to_string(),
                };
            }
            _ => {}
        }
    }

    DbError::Sqlx(err)
}
