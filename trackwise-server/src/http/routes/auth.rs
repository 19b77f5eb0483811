//! Login endpoint

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::EmployeeRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::LoginCredentials;

/// Login request
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login response
#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
}

/// POST /api/login - stateless credential check, no session token
///
/// Unknown username and wrong password produce identical responses.
async fn login(
    State(state): State<Arc<AppState>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(req) = body.map_err(|_| ApiError::MalformedBody)?;
    let creds = LoginCredentials::new(req.username, req.password)?;

    let employee = EmployeeRepo::new(&state.pool)
        .find_by_username(creds.username())
        .await?;

    let Some(employee) = employee else {
        tracing::warn!(username = %creds.username(), "login failed - user not found");
        return Err(ApiError::InvalidCredentials);
    };

    let password_valid = employee
        .verify_password(creds.password())
        .map_err(|e| ApiError::Internal {
            message: format!("password verification failed: {}", e),
        })?;

    if !password_valid {
        tracing::warn!(username = %creds.username(), "login failed - invalid credentials");
        return Err(ApiError::InvalidCredentials);
    }

    Ok(Json(LoginResponse { success: true }))
}

/// Login routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/login", post(login))
}
