//! Submission repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{LeaderboardRow, Submission, SubmissionEntry, UserSubmission},
};

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Create a new submission
    pub async fn create(
        pool: &PgPool,
        problem_id: i64,
        user_id: i64,
        check_result: &str,
        size: i32,
        submitted_at: i64,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissionsbin (problem_id, user_id, check_result, size, submitted_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(problem_id)
        .bind(user_id)
        .bind(check_result)
        .bind(size)
        .bind(submitted_at)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// Smallest passing submissions for a problem
    ///
    /// Ties on size break towards the earlier submission.
    pub async fn leaderboard(
        pool: &PgPool,
        problem_id: i64,
        limit: i64,
    ) -> AppResult<Vec<LeaderboardRow>> {
        let rows = sqlx::query_as::<_, LeaderboardRow>(
            r#"
            SELECT
                s.id, s.user_id, u.github_login, u.github_avatar,
                s.size, s.submitted_at
            FROM submissionsbin s
            JOIN users u ON u.id = s.user_id
            WHERE s.problem_id = $1 AND s.check_result = 'pass'
            ORDER BY s.size ASC, s.id ASC
            LIMIT $2
            "#,
        )
        .bind(problem_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Most recent submissions site-wide, newest first
    ///
    /// Joined to the problem name and the submitter's profile. Descending
    /// id is the recency proxy since rows are insert-only.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> AppResult<Vec<SubmissionEntry>> {
        let rows = sqlx::query_as::<_, SubmissionEntry>(
            r#"
            SELECT
                s.id, s.problem_id, p.name AS problem_name,
                s.user_id, u.github_login, u.github_link, u.github_avatar,
                s.check_result, s.size, s.submitted_at
            FROM submissionsbin s
            JOIN problems p ON p.id = s.problem_id
            JOIN users u ON u.id = s.user_id
            ORDER BY s.id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// All submissions belonging to one user, newest first
    pub async fn list_by_user(pool: &PgPool, user_id: i64) -> AppResult<Vec<UserSubmission>> {
        let rows = sqlx::query_as::<_, UserSubmission>(
            r#"
            SELECT
                s.id, s.problem_id, p.name AS problem_name,
                s.check_result, s.size, s.submitted_at
            FROM submissionsbin s
            JOIN problems p ON p.id = s.problem_id
            WHERE s.user_id = $1
            ORDER BY s.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}
