use axum::{extract::State, Json};
use std::sync::Arc;

use crate::models::*;
use crate::AppState;

use super::{created, required_field, ApiError};

/// List all locations
pub async fn list_locations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Location>>, ApiError> {
    let locations = state.store.list_locations().await?;
    Ok(Json(locations))
}

/// Create a new location
pub async fn create_location(
    State(state): State<Arc<AppState>>,
    Json(mut req): Json<CreateLocationRequest>,
) -> Result<(axum::http::StatusCode, Json<Location>), ApiError> {
    req.name = required_field(&req.name, "name")?;
    req.shortname = required_field(&req.shortname, "shortname")?;

    let location = state.store.create_location(&req).await?;
    Ok(created(location))
}

/// List all cabinets
pub async fn list_cabinets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Cabinet>>, ApiError> {
    let cabinets = state.store.list_cabinets().await?;
    Ok(Json(cabinets))
}

/// Create a new cabinet at an existing location
pub async fn create_cabinet(
    State(state): State<Arc<AppState>>,
    Json(mut req): Json<CreateCabinetRequest>,
) -> Result<(axum::http::StatusCode, Json<Cabinet>), ApiError> {
    req.name = required_field(&req.name, "name")?;
    req.colocation = required_field(&req.colocation, "colocation")?;

    if state.store.get_location(req.location_id).await?.is_none() {
        return Err(ApiError::bad_request("location_id does not reference a location"));
    }

    let cabinet = state.store.create_cabinet(&req).await?;
    Ok(created(cabinet))
}
