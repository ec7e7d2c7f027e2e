//! Donor endpoints

use axum::http::StatusCode;
use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use forthegiving_core::NewDonor;

use crate::db::DonorRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::state::AppState;

/// Add-donor request; all six fields are required
#[derive(Deserialize)]
pub struct CreateDonorRequest {
    pub name: String,
    pub gender: String,
    pub age: i32,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Add-donor response
#[derive(Serialize)]
pub struct DonorCreatedResponse {
    pub message: &'static str,
}

/// GET /donors - list all donors
///
/// Same shape as the hospital listing: array of objects keyed by column name.
async fn list_donors(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    let donors = DonorRepo::new(state.pool()).list().await?;
    Ok(Json(donors))
}

/// POST /donors - register one donor
///
/// Validation happens before any database call; a rejected body never
/// touches the pool.
async fn create_donor(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateDonorRequest>,
) -> Result<(StatusCode, Json<DonorCreatedResponse>), ApiError> {
    let donor = NewDonor::new(
        &req.name,
        &req.gender,
        req.age,
        &req.phone,
        &req.email,
        &req.address,
    )?;

    DonorRepo::new(state.pool()).insert(&donor).await?;

    Ok((
        StatusCode::CREATED,
        Json(DonorCreatedResponse {
            message: "Donor added successfully!",
        }),
    ))
}

/// Donor routes
pub fn router() -> Router<AppState> {
    Router::new().route("/donors", get(list_donors).post(create_donor))
}
