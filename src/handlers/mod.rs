//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod auth;
pub mod github;
pub mod health;
pub mod pages;
pub mod problems;
pub mod submissions;

use axum::{Router, middleware};

use crate::{
    middleware::identity::{identity_middleware, require_login},
    state::AppState,
};

/// Create all application routes
///
/// Identity resolution wraps every route; the login gate only wraps the
/// routes that need an account, and redirects instead of failing.
pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .merge(problems::routes())
        .merge(submissions::routes())
        .route_layer(middleware::from_fn(require_login));

    Router::new()
        .merge(health::routes())
        .merge(pages::routes())
        .merge(auth::routes())
        .merge(github::routes())
        .merge(protected)
        .layer(middleware::from_fn_with_state(state, identity_middleware))
        .layer(middleware::from_fn(crate::middleware::logging_middleware))
}
