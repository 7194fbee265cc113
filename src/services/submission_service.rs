//! Submission service

use sqlx::PgPool;
use tracing::info;

use crate::{
    constants::RECENT_SUBMISSIONS_LIMIT,
    db::repositories::{ProblemRepository, SubmissionRepository},
    error::{AppError, AppResult},
    models::{CheckResult, Problem, Submission, SubmissionEntry, UserSubmission},
    utils::time::epoch_seconds,
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// The problem a submission form targets
    pub async fn form_target(pool: &PgPool, problem_id: i64) -> AppResult<Problem> {
        ProblemRepository::find_by_id(pool, problem_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))
    }

    /// Record a submission for the current user
    ///
    /// The problem must exist and the check result must be a known value;
    /// the timestamp is always taken server-side.
    pub async fn submit(
        pool: &PgPool,
        user_id: i64,
        problem_id: i64,
        check: &str,
        size: i32,
    ) -> AppResult<Submission> {
        let check_result = CheckResult::parse(check).ok_or_else(|| {
            AppError::InvalidInput(format!("Unknown check result: {:?}", check))
        })?;

        let problem = ProblemRepository::find_by_id(pool, problem_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        let submission = SubmissionRepository::create(
            pool,
            problem.id,
            user_id,
            check_result.as_str(),
            size,
            epoch_seconds(),
        )
        .await?;

        info!(
            submission_id = submission.id,
            problem_id = problem.id,
            user_id,
            check = %check_result,
            size,
            "Submission recorded"
        );

        Ok(submission)
    }

    /// The recent site-wide feed plus everything the user submitted
    pub async fn overview(
        pool: &PgPool,
        user_id: i64,
    ) -> AppResult<(Vec<SubmissionEntry>, Vec<UserSubmission>)> {
        let recent = SubmissionRepository::list_recent(pool, RECENT_SUBMISSIONS_LIMIT).await?;
        let mine = SubmissionRepository::list_by_user(pool, user_id).await?;

        Ok((recent, mine))
    }
}
