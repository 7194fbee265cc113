//! Problem service

use sqlx::PgPool;

use crate::{
    constants::LEADERBOARD_LIMIT,
    db::repositories::{ProblemRepository, SubmissionRepository},
    error::{AppError, AppResult},
    models::{LeaderboardRow, Problem},
};

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// List the whole problem catalog
    pub async fn list_problems(pool: &PgPool) -> AppResult<Vec<Problem>> {
        ProblemRepository::list_all(pool).await
    }

    /// Get a problem together with its smallest-passing leaderboard
    pub async fn problem_detail(
        pool: &PgPool,
        id: i64,
    ) -> AppResult<(Problem, Vec<LeaderboardRow>)> {
        let problem = ProblemRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        let leaderboard =
            SubmissionRepository::leaderboard(pool, problem.id, LEADERBOARD_LIMIT).await?;

        Ok((problem, leaderboard))
    }
}
