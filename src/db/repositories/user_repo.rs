//! User repository

use sqlx::PgPool;

use crate::{error::AppResult, models::User};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Create the user for an access token, or refresh the profile fields
    /// of the existing one. Runs on every OAuth callback.
    pub async fn upsert_by_access_token(
        pool: &PgPool,
        token: &str,
        login: &str,
        link: &str,
        avatar: &str,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (github_access_token, github_login, github_link, github_avatar)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (github_access_token) DO UPDATE
            SET
                github_login = EXCLUDED.github_login,
                github_link = EXCLUDED.github_link,
                github_avatar = EXCLUDED.github_avatar,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(token)
        .bind(login)
        .bind(link)
        .bind(avatar)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }
}
