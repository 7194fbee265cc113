//! Authentication service
//!
//! Implements the GitHub sign-in flow: the authorization code is exchanged
//! for an access token, the user row for that token is created or its
//! profile refreshed, and a server-side session is started. "Logged in" is
//! keyed by the session-stored user id; the access token is only used to
//! talk to GitHub.

use sqlx::PgPool;
use tracing::info;

use crate::{
    db::repositories::UserRepository,
    error::AppResult,
    github::GitHubClient,
    models::User,
    session::SessionStore,
};

/// Result of an OAuth callback
pub enum SignInOutcome {
    /// GitHub did not grant a token; the caller redirects silently
    Denied,

    /// Signed in; the token goes into the session cookie
    SignedIn { user: User, session_token: String },
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Complete the OAuth callback for an authorization code
    pub async fn sign_in_with_code(
        pool: &PgPool,
        sessions: &SessionStore,
        github: &GitHubClient,
        code: &str,
    ) -> AppResult<SignInOutcome> {
        let Some(access_token) = github.exchange_code(code).await? else {
            return Ok(SignInOutcome::Denied);
        };

        // Not strictly necessary to fetch the profile here, but it lets
        // humans identify users on the leaderboards.
        let profile = github.current_user(&access_token).await?;

        let user = UserRepository::upsert_by_access_token(
            pool,
            &access_token,
            &profile.login,
            &profile.html_url,
            &profile.avatar_url,
        )
        .await?;

        let session_token = sessions.create(user.id).await?;

        info!(user_id = user.id, login = %user.github_login, "User signed in via GitHub");

        Ok(SignInOutcome::SignedIn {
            user,
            session_token,
        })
    }

    /// End the session behind a token
    pub async fn sign_out(sessions: &SessionStore, session_token: &str) -> AppResult<()> {
        sessions.destroy(session_token).await
    }
}
