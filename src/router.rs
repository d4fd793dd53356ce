use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::AppState;

/// Build the application router with all routes
pub fn build(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handlers::healthcheck))
        // Nagios export routes
        .route("/api/v4/nagios/switches/:infraid", get(handlers::nagios::switches))
        .route(
            "/api/v4/nagios/switches/:infraid/:template",
            get(handlers::nagios::switches_with_template),
        )
        // Infrastructure routes
        .route(
            "/api/infrastructures",
            get(handlers::infrastructures::list_infrastructures)
                .post(handlers::infrastructures::create_infrastructure),
        )
        .route(
            "/api/infrastructures/:id",
            get(handlers::infrastructures::get_infrastructure)
                .delete(handlers::infrastructures::delete_infrastructure),
        )
        .route(
            "/api/infrastructures/:id/switches",
            get(handlers::infrastructures::list_infrastructure_switches),
        )
        // Location and cabinet routes
        .route(
            "/api/locations",
            get(handlers::locations::list_locations).post(handlers::locations::create_location),
        )
        .route(
            "/api/cabinets",
            get(handlers::locations::list_cabinets).post(handlers::locations::create_cabinet),
        )
        // Vendor routes
        .route(
            "/api/vendors",
            get(handlers::vendors::list_vendors).post(handlers::vendors::create_vendor),
        )
        .route("/api/vendors/:id", get(handlers::vendors::get_vendor))
        // Switch routes
        .route(
            "/api/switches",
            get(handlers::switches::list_switches).post(handlers::switches::create_switch),
        )
        .route(
            "/api/switches/:id",
            get(handlers::switches::get_switch)
                .put(handlers::switches::update_switch)
                .delete(handlers::switches::delete_switch),
        )
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
