//! Hospital repository
//!
//! The hospital table is read-only from this service; rows are returned
//! exactly as the schema defines them.

use serde_json::Value;
use sqlx::MySqlPool;

use crate::db::rows::rows_to_json;
use crate::db::DbError;

/// Hospital repository
pub struct HospitalRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> HospitalRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List every hospital row, in whatever order the database yields.
    pub async fn list(&self) -> Result<Vec<Value>, DbError> {
        let rows = sqlx::query("SELECT * FROM Hospital")
            .fetch_all(self.pool)
            .await?;

        rows_to_json(&rows)
    }
}
