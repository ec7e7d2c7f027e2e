//! Service identity endpoint

use axum::{routing::get, Router};

/// Fixed identity string; answers whether the backend is up without touching
/// the database.
const IDENTITY: &str = "ForTheGiving backend connected to MySQL successfully!";

/// GET /
async fn home() -> &'static str {
    IDENTITY
}

/// Home routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn home_returns_identity() {
        let body = home().await;
        assert_eq!(body, IDENTITY);
    }
}
