//! Identity resolution middleware
//!
//! Before every request the session cookie is resolved to a `User` row and
//! stashed in the request extensions. Anonymous requests pass through
//! untouched; protected routes are gated separately by [`require_login`],
//! which redirects to `/login` instead of failing with 401.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use crate::{
    constants::SESSION_COOKIE_NAME, db::repositories::UserRepository, error::AppError,
    models::User, state::AppState,
};

/// The logged-in user for the current request
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Optional identity wrapper (never fails)
pub struct OptionalIdentity(pub Option<User>);

impl<S> FromRequestParts<S> for OptionalIdentity
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalIdentity(
            parts.extensions.get::<CurrentUser>().cloned().map(|u| u.0),
        ))
    }
}

/// Identity resolution middleware
///
/// Session-store or database failures are real errors; a missing cookie,
/// an expired session, or a deleted user just mean anonymous.
pub async fn identity_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let jar = CookieJar::from_headers(request.headers());

    if let Some(cookie) = jar.get(SESSION_COOKIE_NAME) {
        let token = cookie.value();

        if let Some(user_id) = state.sessions().resolve(token).await? {
            match UserRepository::find_by_id(state.db(), user_id).await? {
                Some(user) => {
                    debug!(user_id, login = %user.github_login, "Resolved session identity");
                    request.extensions_mut().insert(CurrentUser(user));
                }
                None => {
                    debug!(user_id, "Session references a missing user, treating as anonymous");
                }
            }
        }
    }

    Ok(next.run(request).await)
}

/// Login gate for protected routes
///
/// Applied as a route layer after [`identity_middleware`] has run.
pub async fn require_login(request: Request<Body>, next: Next) -> Response {
    if request.extensions().get::<CurrentUser>().is_none() {
        debug!(path = %request.uri().path(), "Anonymous access to protected route, redirecting to /login");
        return Redirect::to("/login").into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        http::{Request as HttpRequest, StatusCode, header::LOCATION},
        middleware,
        routing::get,
    };
    use chrono::Utc;
    use tower::ServiceExt;

    async fn list_stub() -> &'static str {
        "ok"
    }

    fn protected_app() -> Router {
        Router::new()
            .route("/problems", get(list_stub))
            .route_layer(middleware::from_fn(require_login))
    }

    fn test_user() -> User {
        User {
            id: 1,
            github_access_token: "token".to_string(),
            github_login: "octocat".to_string(),
            github_link: "https://github.com/octocat".to_string(),
            github_avatar: "https://avatars.example/octocat".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_anonymous_access_redirects_to_login() {
        // Without a resolved identity (logged out or never logged in),
        // protected routes bounce to /login rather than returning 401
        let response = protected_app()
            .oneshot(
                HttpRequest::builder()
                    .uri("/problems")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/login");
    }

    #[tokio::test]
    async fn test_resolved_identity_passes_through() {
        let mut request = HttpRequest::builder()
            .uri("/problems")
            .body(Body::empty())
            .unwrap();
        request.extensions_mut().insert(CurrentUser(test_user()));

        let response = protected_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
