//! GitHub passthrough handlers
//!
//! `/user` and `/repo` return the provider's JSON verbatim: the former for
//! the session's token, the latter for a fixed showcase repository.

use axum::{Json, Router, extract::State, routing::get};

use crate::{
    constants::SHOWCASE_REPO, error::AppResult, middleware::identity::CurrentUser,
    state::AppState,
};

/// The provider's view of the logged-in user
async fn current_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<serde_json::Value>> {
    let value = state
        .github()
        .current_user_raw(&user.github_access_token)
        .await?;

    Ok(Json(value))
}

/// Metadata of the showcase repository
async fn showcase_repo(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let value = state.github().repo(SHOWCASE_REPO).await?;

    Ok(Json(value))
}

/// GitHub passthrough routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(current_user))
        .route("/repo", get(showcase_repo))
}
