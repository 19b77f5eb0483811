//! Login credentials validated at construction

use super::validation::ValidationError;

/// A username/password pair with both fields present and non-empty.
///
/// Construction is the only validation the login path performs before
/// touching the store; matching is delegated to the Employee row lookup.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    username: String,
    password: String,
}

impl LoginCredentials {
    pub fn new(
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self, ValidationError> {
        let username = match username {
            Some(u) if !u.is_empty() => u,
            _ => return Err(ValidationError::Empty { field: "username" }),
        };
        let password = match password {
            Some(p) if !p.is_empty() => p,
            _ => return Err(ValidationError::Empty { field: "password" }),
        };
        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
