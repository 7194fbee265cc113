//! Authentication handlers (GitHub OAuth flow)

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Authentication routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(handler::login))
        .route("/github-callback", get(handler::github_callback))
        .route("/logout", get(handler::logout))
}
