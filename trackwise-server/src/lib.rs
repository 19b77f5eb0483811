//! trackwise-server: HTTP backend for TrackWise inventory and sales tracking
//!
//! Exposes employee login, low-stock and recent-sales listings, dashboard
//! KPI aggregation, and product creation over an externally-owned SQLite
//! schema.

pub mod db;
pub mod http;
pub mod models;
