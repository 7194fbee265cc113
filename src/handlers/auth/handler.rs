//! Authentication handler implementations

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    constants::SESSION_COOKIE_NAME,
    error::AppResult,
    middleware::identity::OptionalIdentity,
    services::{AuthService, auth_service::SignInOutcome},
    state::AppState,
};

use super::{request::CallbackQuery, response::AlreadyLoggedInResponse};

/// Start the OAuth flow, or report an existing session
pub async fn login(
    State(state): State<AppState>,
    OptionalIdentity(user): OptionalIdentity,
) -> Response {
    match user {
        Some(user) => Json(AlreadyLoggedInResponse {
            message: "Already logged in".to_string(),
            login: user.github_login,
        })
        .into_response(),
        None => Redirect::to(&state.github().authorize_url()).into_response(),
    }
}

/// OAuth redirect target
///
/// A missing or declined code redirects back silently; a granted token
/// creates or refreshes the user and starts a session.
pub async fn github_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<CallbackQuery>,
) -> AppResult<Response> {
    let next = query.next_url();

    let Some(code) = query.code.as_deref() else {
        return Ok(Redirect::to(next).into_response());
    };

    let outcome =
        AuthService::sign_in_with_code(state.db(), state.sessions(), state.github(), code).await?;

    match outcome {
        SignInOutcome::Denied => Ok(Redirect::to(next).into_response()),
        SignInOutcome::SignedIn { session_token, .. } => {
            let cookie = session_cookie(session_token);
            Ok((jar.add(cookie), Redirect::to(next)).into_response())
        }
    }
}

/// Clear the session and return to the landing page
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> AppResult<Response> {
    if let Some(cookie) = jar.get(SESSION_COOKIE_NAME) {
        AuthService::sign_out(state.sessions(), cookie.value()).await?;
    }

    let removal = Cookie::build((SESSION_COOKIE_NAME, "")).path("/").build();

    Ok((jar.remove(removal), Redirect::to("/")).into_response())
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("tok".to_string());
        assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }
}
