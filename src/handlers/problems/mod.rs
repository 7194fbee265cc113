//! Problem browsing handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Problem routes (login required)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/problems", get(handler::list_problems))
        .route("/problem", get(handler::problem_detail))
}
