//! Employee repository and credential verification

use sqlx::{Row, SqlitePool};

use super::DbError;

/// Employee record from the store.
///
/// `password_hash` holds a salted argon2 PHC string, never a plaintext
/// credential.
#[derive(Debug, Clone)]
pub struct Employee {
    pub employee_id: i64,
    pub username: String,
    pub password_hash: String,
}

impl Employee {
    /// Verify a submitted password against the stored hash using argon2.
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            password_hash::{PasswordHash, PasswordVerifier},
            Argon2,
        };

        let parsed_hash = PasswordHash::new(&self.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password with a fresh random salt using argon2.
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
            Argon2,
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

/// Employee repository
pub struct EmployeeRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EmployeeRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Look up an employee by username. Usernames are unique in the store,
    /// so at most one row matches.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Employee>, DbError> {
        let row = sqlx::query(
            r#"
            SELECT EmployeeID, Username, PasswordHash
            FROM Employee
            WHERE Username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|r| Employee {
            employee_id: r.get("EmployeeID"),
            username: r.get("Username"),
            password_hash: r.get("PasswordHash"),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_own_password_only() {
        let hash = Employee::hash_password("hunter2").expect("hashing failed");
        let employee = Employee {
            employee_id: 1,
            username: "alice".into(),
            password_hash: hash,
        };

        assert!(employee.verify_password("hunter2").unwrap());
        assert!(!employee.verify_password("other").unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = Employee::hash_password("hunter2").unwrap();
        let b = Employee::hash_password("hunter2").unwrap();
        assert_ne!(a, b);
    }
}
