//! GitHub API client
//!
//! Wraps the two GitHub surfaces the application touches: the OAuth
//! code-for-token exchange and the REST API (current user, repository
//! metadata). All calls are authenticated per request with the caller's
//! bearer token; the client itself only holds the app credentials.

use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;

use crate::{config::GitHubConfig, error::AppResult};

/// GitHub API client
#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    config: GitHubConfig,
}

/// Profile fields of the authenticated GitHub user
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub html_url: String,
    pub avatar_url: String,
}

/// Token endpoint response
///
/// GitHub reports denial through an `error` field with status 200, so the
/// token is optional rather than the request failing.
#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: Option<String>,
    error: Option<String>,
}

impl GitHubClient {
    /// Create a new client for the given OAuth app
    pub fn new(config: GitHubConfig) -> Self {
        // GitHub rejects requests without a User-Agent
        let http = reqwest::Client::builder()
            .user_agent(concat!("golfboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { http, config }
    }

    /// URL to send a user to when starting the OAuth flow
    pub fn authorize_url(&self) -> String {
        format!(
            "{}?client_id={}",
            self.config.authorize_url, self.config.client_id
        )
    }

    /// Exchange an authorization code for an access token
    ///
    /// Returns `Ok(None)` when GitHub declines the code (expired, revoked,
    /// user cancelled); transport and decoding failures are errors.
    pub async fn exchange_code(&self, code: &str) -> AppResult<Option<String>> {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("code", code),
        ];

        let response = self
            .http
            .post(&self.config.token_url)
            .header(ACCEPT, "application/json")
            .form(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<AccessTokenResponse>()
            .await?;

        if let Some(error) = response.error {
            tracing::debug!(error = %error, "GitHub declined authorization code");
            return Ok(None);
        }

        Ok(response.access_token)
    }

    /// Fetch the authenticated user's profile fields
    pub async fn current_user(&self, token: &str) -> AppResult<GitHubUser> {
        let user = self
            .get("/user", Some(token))
            .await?
            .json::<GitHubUser>()
            .await?;

        Ok(user)
    }

    /// Fetch the authenticated user's profile as the provider returns it
    pub async fn current_user_raw(&self, token: &str) -> AppResult<serde_json::Value> {
        let value = self
            .get("/user", Some(token))
            .await?
            .json::<serde_json::Value>()
            .await?;

        Ok(value)
    }

    /// Fetch a repository's metadata as the provider returns it
    pub async fn repo(&self, full_name: &str) -> AppResult<serde_json::Value> {
        let value = self
            .get(&format!("/repos/{}", full_name), None)
            .await?
            .json::<serde_json::Value>()
            .await?;

        Ok(value)
    }

    async fn get(&self, path: &str, token: Option<&str>) -> AppResult<reqwest::Response> {
        let mut request = self
            .http
            .get(format!("{}{}", self.config.api_base, path))
            .header(ACCEPT, "application/vnd.github+json");

        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        Ok(request.send().await?.error_for_status()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        DEFAULT_GITHUB_API_BASE, DEFAULT_GITHUB_AUTHORIZE_URL, DEFAULT_GITHUB_TOKEN_URL,
    };

    fn test_config() -> GitHubConfig {
        GitHubConfig {
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
            authorize_url: DEFAULT_GITHUB_AUTHORIZE_URL.to_string(),
            token_url: DEFAULT_GITHUB_TOKEN_URL.to_string(),
            api_base: DEFAULT_GITHUB_API_BASE.to_string(),
        }
    }

    #[test]
    fn test_authorize_url() {
        let client = GitHubClient::new(test_config());
        assert_eq!(
            client.authorize_url(),
            "https://github.com/login/oauth/authorize?client_id=client-id"
        );
    }

    #[test]
    fn test_token_response_with_token() {
        let response: AccessTokenResponse =
            serde_json::from_str(r#"{"access_token":"gho_abc","token_type":"bearer","scope":""}"#)
                .unwrap();
        assert_eq!(response.access_token.as_deref(), Some("gho_abc"));
        assert!(response.error.is_none());
    }

    #[test]
    fn test_token_response_with_error() {
        let response: AccessTokenResponse = serde_json::from_str(
            r#"{"error":"bad_verification_code","error_description":"The code is incorrect."}"#,
        )
        .unwrap();
        assert!(response.access_token.is_none());
        assert_eq!(response.error.as_deref(), Some("bad_verification_code"));
    }

    #[test]
    fn test_github_user_deserializes() {
        let user: GitHubUser = serde_json::from_str(
            r#"{
                "login": "octocat",
                "id": 1,
                "html_url": "https://github.com/octocat",
                "avatar_url": "https://avatars.githubusercontent.com/u/1",
                "type": "User"
            }"#,
        )
        .unwrap();
        assert_eq!(user.login, "octocat");
        assert_eq!(user.html_url, "https://github.com/octocat");
    }
}
