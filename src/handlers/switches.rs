use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::models::*;
use crate::utils::{is_valid_hostname, is_valid_ipv4, trimmed};
use crate::AppState;

use super::{created, printable_field, ApiError};

/// List all switches
pub async fn list_switches(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Switch>>, ApiError> {
    let switches = state.store.list_switches().await?;
    Ok(Json(switches))
}

/// Get a single switch by ID
pub async fn get_switch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Switch>, ApiError> {
    let switch = state
        .store
        .get_switch(id)
        .await?
        .ok_or_else(|| ApiError::not_found("switch"))?;
    Ok(Json(switch))
}

/// Create a new switch
pub async fn create_switch(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSwitchRequest>,
) -> Result<(axum::http::StatusCode, Json<Switch>), ApiError> {
    let req = validate_switch_request(&state, req).await?;

    // Check for duplicate
    if state.store.get_switch_by_hostname(&req.hostname).await?.is_some() {
        return Err(ApiError::conflict("switch with this hostname already exists"));
    }

    let switch = state.store.create_switch(&req).await?;
    tracing::info!("Created switch {} ({})", switch.hostname, switch.id);
    Ok(created(switch))
}

/// Update an existing switch
pub async fn update_switch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<CreateSwitchRequest>,
) -> Result<Json<Switch>, ApiError> {
    let req = validate_switch_request(&state, req).await?;

    if let Some(existing) = state.store.get_switch_by_hostname(&req.hostname).await? {
        if existing.id != id {
            return Err(ApiError::conflict("switch with this hostname already exists"));
        }
    }

    let switch = state.store.update_switch(id, &req).await?;
    Ok(Json(switch))
}

/// Delete a switch
pub async fn delete_switch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<axum::http::StatusCode, ApiError> {
    state.store.delete_switch(id).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

/// Normalise optional fields and check references. Optional attributes may
/// stay empty here; the Nagios export rejects active switches missing them.
async fn validate_switch_request(
    state: &AppState,
    mut req: CreateSwitchRequest,
) -> Result<CreateSwitchRequest, ApiError> {
    req.hostname = req.hostname.trim().to_string();
    if !is_valid_hostname(&req.hostname) {
        return Err(ApiError::bad_request("invalid hostname"));
    }

    req.name = trimmed(req.name);
    req.model = trimmed(req.model);
    for (field, value) in [("name", &req.name), ("model", &req.model)] {
        if let Some(value) = value {
            printable_field(value, field)?;
        }
    }
    req.ipv4addr = trimmed(req.ipv4addr);
    if let Some(ip) = &req.ipv4addr {
        if !is_valid_ipv4(ip) {
            return Err(ApiError::bad_request("invalid ipv4addr"));
        }
    }

    if state.store.get_infrastructure(req.infrastructure_id).await?.is_none() {
        return Err(ApiError::bad_request("infrastructure_id does not reference an infrastructure"));
    }
    if let Some(vendor_id) = req.vendor_id {
        if state.store.get_vendor(vendor_id).await?.is_none() {
            return Err(ApiError::bad_request("vendor_id does not reference a vendor"));
        }
    }
    if let Some(cabinet_id) = req.cabinet_id {
        if state.store.get_cabinet(cabinet_id).await?.is_none() {
            return Err(ApiError::bad_request("cabinet_id does not reference a cabinet"));
        }
    }

    Ok(req)
}
