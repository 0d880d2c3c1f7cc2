//! Persistence for extension lists and file metadata.
//!
//! Every store is a set of associated functions over `&impl ConnectionTrait`, so the
//! same calls run against the pool or inside a transaction.

use sea_orm::{DbErr, SqlErr};

pub mod custom_extension_store;
pub mod file_store;
pub mod fixed_extension_store;

pub use custom_extension_store::CustomExtensionStore;
pub use file_store::{FileStore, NewFile};
pub use fixed_extension_store::FixedExtensionStore;

/// True when `err` was raised by a unique index (Postgres 23505, SQLite 2067).
pub fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }
    // Driver messages that reach us without a classified SqlErr
    let msg = err.to_string();
    msg.contains("UNIQUE constraint failed")
        || msg.contains("duplicate key value violates unique constraint")
}
