//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User database model
///
/// A row is created the first time GitHub grants a token for an identity
/// and the profile fields are refreshed on every subsequent sign-in.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(skip_serializing)]
    pub github_access_token: String,
    pub github_login: String,
    pub github_link: String,
    pub github_avatar: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
