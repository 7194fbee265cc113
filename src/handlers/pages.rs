//! Landing page handler

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::{middleware::identity::OptionalIdentity, state::AppState};

/// Greeting shown at the site root, varying by login state
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: String,
    pub links: IndexLinks,
}

/// Navigation links offered from the landing page
#[derive(Debug, Serialize)]
pub struct IndexLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problems: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submissions: Option<String>,
}

/// Landing page
async fn index(OptionalIdentity(user): OptionalIdentity) -> Json<IndexResponse> {
    let response = match user {
        Some(user) => IndexResponse {
            message: format!("Hello, {}!", user.github_login),
            links: IndexLinks {
                login: None,
                logout: Some("/logout".to_string()),
                problems: Some("/problems".to_string()),
                submissions: Some("/submissions".to_string()),
            },
        },
        None => IndexResponse {
            message: "Hello! Sign in with GitHub to play.".to_string(),
            links: IndexLinks {
                login: Some("/login".to_string()),
                logout: None,
                problems: None,
                submissions: None,
            },
        },
    };

    Json(response)
}

/// Landing page routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}
