// HTTP Module
// REST surface of the credential service

pub mod error;
pub mod handlers;
mod middleware;

use axum::middleware::from_fn;
use axum::routing::{delete, get};
use axum::Router;

use crate::SharedState;

pub use error::ApiError;

pub const PASSWORDS_PATH: &str = "/api/passwords";

pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route(
            PASSWORDS_PATH,
            get(handlers::list_passwords).post(handlers::create_password),
        )
        .route("/api/passwords/:id", delete(handlers::delete_password))
        .layer(from_fn(middleware::cors_middleware))
        .layer(from_fn(middleware::request_tracing_middleware))
        .with_state(state)
}
