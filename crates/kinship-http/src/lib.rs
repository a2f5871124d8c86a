//! Kinship HTTP - JSON API over the person graph
//!
//! - `routes`: the axum router
//! - `handlers`: one handler per operation
//! - `error`: error kind to status code mapping
//! - `state`: the shared, mutex-guarded service
//! - `settings`: environment configuration for the server binary

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod settings;
pub mod state;

pub use error::ApiError;
pub use routes::router;
pub use settings::Settings;
pub use state::AppState;
