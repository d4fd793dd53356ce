use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::models::*;
use crate::AppState;

use super::{created, required_field, ApiError};

/// List all vendors
pub async fn list_vendors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Vendor>>, ApiError> {
    let vendors = state.store.list_vendors().await?;
    Ok(Json(vendors))
}

/// Get a single vendor by ID
pub async fn get_vendor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vendor>, ApiError> {
    let vendor = state
        .store
        .get_vendor(id)
        .await?
        .ok_or_else(|| ApiError::not_found("vendor"))?;
    Ok(Json(vendor))
}

/// Create a new vendor
pub async fn create_vendor(
    State(state): State<Arc<AppState>>,
    Json(mut req): Json<CreateVendorRequest>,
) -> Result<(axum::http::StatusCode, Json<Vendor>), ApiError> {
    req.name = required_field(&req.name, "name")?;
    req.shortname = required_field(&req.shortname, "shortname")?;

    // Check for duplicate
    if state.store.get_vendor_by_shortname(&req.shortname).await?.is_some() {
        return Err(ApiError::conflict("vendor with this shortname already exists"));
    }

    let vendor = state.store.create_vendor(&req).await?;
    Ok(created(vendor))
}
