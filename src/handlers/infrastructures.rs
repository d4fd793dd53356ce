use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::models::*;
use crate::AppState;

use super::{created, required_field, ApiError};

/// List all infrastructures
pub async fn list_infrastructures(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Infrastructure>>, ApiError> {
    let infrastructures = state.store.list_infrastructures().await?;
    Ok(Json(infrastructures))
}

/// Get a single infrastructure by ID
pub async fn get_infrastructure(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Infrastructure>, ApiError> {
    let infra = state
        .store
        .get_infrastructure(id)
        .await?
        .ok_or_else(|| ApiError::not_found("infrastructure"))?;
    Ok(Json(infra))
}

/// List the switches of one infrastructure in export order
pub async fn list_infrastructure_switches(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Switch>>, ApiError> {
    if state.store.get_infrastructure(id).await?.is_none() {
        return Err(ApiError::not_found("infrastructure"));
    }
    let switches = state.store.list_switches_by_infrastructure(id).await?;
    Ok(Json(switches))
}

/// Create a new infrastructure
pub async fn create_infrastructure(
    State(state): State<Arc<AppState>>,
    Json(mut req): Json<CreateInfrastructureRequest>,
) -> Result<(axum::http::StatusCode, Json<Infrastructure>), ApiError> {
    req.name = required_field(&req.name, "name")?;
    req.shortname = required_field(&req.shortname, "shortname")?;

    let infra = state.store.create_infrastructure(&req).await?;
    tracing::info!("Created infrastructure {} ({})", infra.id, infra.name);
    Ok(created(infra))
}

/// Delete an infrastructure and its switches
pub async fn delete_infrastructure(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<axum::http::StatusCode, ApiError> {
    state.store.delete_infrastructure(id).await?;
    tracing::info!("Deleted infrastructure {}", id);
    Ok(axum::http::StatusCode::NO_CONTENT)
}
