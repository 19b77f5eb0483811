//! Liveness endpoint

use axum::{routing::get, Router};

/// GET / - plain-text liveness check, no store access
async fn index() -> &'static str {
    "TrackWise API is running!"
}

/// Liveness routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn index_reports_running() {
        assert_eq!(index().await, "TrackWise API is running!");
    }
}
