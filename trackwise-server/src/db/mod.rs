//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Parameterized queries only
//! - Schema is owned externally; this layer never creates or migrates tables

pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
