use axum::routing::{delete, get, post};
use axum::Router;
use kinship_core::PersonStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the application router
///
/// Serves the resource routes under `/person` plus the legacy
/// `/api/person/{add,view,delete,all}` paths.
pub fn router<S>(state: AppState<S>) -> Router
where
    S: PersonStore + Send + 'static,
{
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/person",
            get(handlers::list_people::<S>).post(handlers::add_person::<S>),
        )
        .route(
            "/person/:name",
            get(handlers::find_person::<S>).delete(handlers::delete_person::<S>),
        )
        .route("/api/person/add", post(handlers::add_person::<S>))
        .route("/api/person/view/:name", get(handlers::find_person::<S>))
        .route("/api/person/delete/:name", delete(handlers::delete_person::<S>))
        .route("/api/person/all", get(handlers::list_people::<S>))
        .layer(axum::middleware::from_fn(middleware::request_id))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
