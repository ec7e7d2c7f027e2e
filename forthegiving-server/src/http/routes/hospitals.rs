//! Hospital endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde_json::Value;

use crate::db::HospitalRepo;
use crate::http::error::ApiError;
use crate::state::AppState;

/// GET /hospitals - list all hospitals
///
/// Response is a JSON array of objects, column names as keys, in whatever
/// order the database yields.
async fn list_hospitals(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    let hospitals = HospitalRepo::new(state.pool()).list().await?;
    Ok(Json(hospitals))
}

/// Hospital routes
pub fn router() -> Router<AppState> {
    Router::new().route("/hospitals", get(list_hospitals))
}
