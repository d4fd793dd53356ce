use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::nagios::{RenderOptions, DEFAULT_TEMPLATE};
use crate::utils::{is_valid_nagios_token, is_valid_template_name};
use crate::AppState;

use super::ApiError;

#[derive(Debug, Deserialize)]
pub struct NagiosSwitchesQuery {
    /// Overrides the configured Nagios host template name
    #[serde(default)]
    pub host_definition: Option<String>,
}

/// Nagios configuration for the switches of an infrastructure
pub async fn switches(
    State(state): State<Arc<AppState>>,
    Path(infraid): Path<i64>,
    Query(query): Query<NagiosSwitchesQuery>,
) -> Result<Response, ApiError> {
    render_switches(&state, infraid, DEFAULT_TEMPLATE, query).await
}

/// Same as `switches`, rendered with a named skin
pub async fn switches_with_template(
    State(state): State<Arc<AppState>>,
    Path((infraid, template)): Path<(i64, String)>,
    Query(query): Query<NagiosSwitchesQuery>,
) -> Result<Response, ApiError> {
    render_switches(&state, infraid, &template, query).await
}

async fn render_switches(
    state: &AppState,
    infraid: i64,
    template: &str,
    query: NagiosSwitchesQuery,
) -> Result<Response, ApiError> {
    // Security: template names map to files on disk
    if !is_valid_template_name(template) {
        return Err(ApiError::bad_request("invalid template name"));
    }
    if !state.renderer.has_template(template) {
        return Err(ApiError::not_found("template"));
    }

    let host_definition = query
        .host_definition
        .unwrap_or_else(|| state.config.host_definition.clone());
    if !is_valid_nagios_token(&host_definition) {
        return Err(ApiError::bad_request("invalid host_definition"));
    }

    let infra = state
        .store
        .get_infrastructure(infraid)
        .await?
        .ok_or_else(|| ApiError::not_found("infrastructure"))?;
    let switches = state.store.list_switches_by_infrastructure(infraid).await?;

    let options = RenderOptions {
        host_definition,
        generated_at: chrono::Local::now().naive_local(),
    };
    let body = state
        .renderer
        .render_switches(template, &infra, &switches, &options)
        .map_err(|e| {
            tracing::warn!("Nagios export for infrastructure {} failed: {:#}", infraid, e);
            ApiError::from(e)
        })?;

    tracing::info!(
        "Rendered Nagios switch config for infrastructure {} ({} switches, template {})",
        infraid,
        switches.len(),
        template
    );

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response())
}
