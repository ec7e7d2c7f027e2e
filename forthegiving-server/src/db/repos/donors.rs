//! Donor repository
//!
//! Reads mirror the hospital repo; the insert is the only write path in the
//! service. Values are always bound, never concatenated into SQL text.

use forthegiving_core::NewDonor;
use serde_json::Value;
use sqlx::MySqlPool;

use crate::db::rows::rows_to_json;
use crate::db::DbError;

/// Donor repository
pub struct DonorRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> DonorRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List every donor row, in whatever order the database yields.
    pub async fn list(&self) -> Result<Vec<Value>, DbError> {
        let rows = sqlx::query("SELECT * FROM Donor")
            .fetch_all(self.pool)
            .await?;

        rows_to_json(&rows)
    }

    /// Insert one validated donor.
    ///
    /// Runs in autocommit: the row is committed iff the execute succeeds.
    pub async fn insert(&self, donor: &NewDonor) -> Result<(), DbError> {
        sqlx::query(
            "INSERT INTO Donor (name, gender, age, phone, email, address) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&donor.name)
        .bind(&donor.gender)
        .bind(donor.age)
        .bind(&donor.phone)
        .bind(&donor.email)
        .bind(&donor.address)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p forthegiving-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_list_round_trip() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).expect("pool creation failed");
        let repo = DonorRepo::new(&pool);

        let donor = NewDonor::new(
            "Jane Doe",
            "F",
            34,
            "555-0100",
            "jane@example.com",
            "1 Main St",
        )
        .expect("valid donor");

        repo.insert(&donor).await.expect("insert failed");

        let donors = repo.list().await.expect("list failed");
        let found = donors.iter().any(|row| {
            row["name"] == "Jane Doe"
                && row["email"] == "jane@example.com"
                && row["age"] == 34
        });
        assert!(found, "inserted donor missing from listing");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn repeated_list_is_stable_without_writes() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).expect("pool creation failed");
        let repo = DonorRepo::new(&pool);

        let first = repo.list().await.expect("list failed");
        let second = repo.list().await.expect("list failed");
        assert_eq!(first, second);
    }
}
