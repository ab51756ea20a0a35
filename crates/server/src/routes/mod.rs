//! API route handlers
//!
//! - `animals`: list/filter, lookup by id, create
//! - `health`: liveness, readiness and metrics
//! - `pages`: fixed HTML pages and static assets

pub mod animals;
pub mod health;
pub mod pages;

use crate::error::ServerError;
use axum::http::Uri;

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found(uri: Uri) -> ServerError {
    ServerError::RouteNotFound(uri.path().to_string())
}
