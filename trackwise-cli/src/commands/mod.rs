//! Subcommand implementations

pub mod hash;
pub mod serve;

pub use hash::run_hash_password;
pub use serve::run_serve;
