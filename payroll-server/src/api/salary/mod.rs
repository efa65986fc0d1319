//! Salary API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Salary router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/salary", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/calculate/{id}", get(handler::calculate))
        .route("/metrics/by-country", get(handler::metrics_by_country))
        .route("/metrics/by-job-title", get(handler::metrics_by_job_title))
}
