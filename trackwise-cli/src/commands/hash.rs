//! Credential hashing command
//!
//! Employee rows are seeded externally; this prints the argon2 PHC string
//! to store in `Employee.PasswordHash`.

use anyhow::{anyhow, Result};
use clap::Parser;

use trackwise_server::db::repos::Employee;

/// Arguments for the hash-password command
#[derive(Parser, Debug)]
pub struct HashPasswordArgs {
    /// Password to hash
    pub password: String,
}

/// Print the argon2 hash for a password
pub fn run_hash_password(args: HashPasswordArgs) -> Result<()> {
    let hash = Employee::hash_password(&args.password)
        .map_err(|e| anyhow!("Failed to hash password: {}", e))?;
    println!("{hash}");
    Ok(())
}
