//! Submission intake and history handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Submission routes (login required)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/submit",
            get(handler::submission_form).post(handler::create_submission),
        )
        .route("/submissions", get(handler::list_submissions))
}
