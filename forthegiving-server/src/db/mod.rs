//! Database layer - connection pool, row mapping, and repositories
//!
//! # Design Principles
//!
//! - Connection pool with bounded size - no shared single connection
//! - Reads surface rows as JSON objects keyed by column name; the service
//!   never assumes the external schema
//! - Writes are parameterized statements, values are always bound

pub mod pool;
pub mod repos;
pub mod rows;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::{DonorRepo, HospitalRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("failed to decode column '{column}': {source}")]
    Decode {
        column: String,
        source: sqlx::Error,
    },

    #[error("unsupported column type {type_name} in column '{column}'")]
    UnsupportedType {
        column: String,
        type_name: String,
    },
}
