//! Submission response DTOs

use serde::Serialize;

use crate::{
    models::{Problem, Submission, SubmissionEntry, UserSubmission},
    utils::time::format_epoch,
};

/// Descriptor for the submission form of one problem
#[derive(Debug, Serialize)]
pub struct SubmissionFormResponse {
    pub problem: Problem,
    pub fields: &'static [&'static str],
    pub accepted_checks: &'static [&'static str],
}

impl SubmissionFormResponse {
    pub fn for_problem(problem: Problem) -> Self {
        Self {
            problem,
            fields: &["problem_id", "check", "size"],
            accepted_checks: &["pass", "fail"],
        }
    }
}

/// Created submission
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub id: i64,
    pub problem_id: i64,
    pub user_id: i64,
    pub check_result: String,
    pub size: i32,
    pub submitted_at: i64,
    pub submitted_at_text: String,
}

impl From<Submission> for SubmissionResponse {
    fn from(s: Submission) -> Self {
        Self {
            id: s.id,
            problem_id: s.problem_id,
            user_id: s.user_id,
            check_result: s.check_result,
            size: s.size,
            submitted_at: s.submitted_at,
            submitted_at_text: format_epoch(s.submitted_at),
        }
    }
}

/// One entry of the site-wide recent feed
#[derive(Debug, Serialize)]
pub struct RecentSubmissionResponse {
    pub id: i64,
    pub problem_id: i64,
    pub problem_name: String,
    pub user_id: i64,
    pub github_login: String,
    pub github_link: String,
    pub github_avatar: String,
    pub check_result: String,
    pub size: i32,
    pub submitted_at: i64,
    pub submitted_at_text: String,
}

impl From<SubmissionEntry> for RecentSubmissionResponse {
    fn from(e: SubmissionEntry) -> Self {
        Self {
            id: e.id,
            problem_id: e.problem_id,
            problem_name: e.problem_name,
            user_id: e.user_id,
            github_login: e.github_login,
            github_link: e.github_link,
            github_avatar: e.github_avatar,
            check_result: e.check_result,
            size: e.size,
            submitted_at: e.submitted_at,
            submitted_at_text: format_epoch(e.submitted_at),
        }
    }
}

/// One of the current user's own submissions
#[derive(Debug, Serialize)]
pub struct UserSubmissionResponse {
    pub id: i64,
    pub problem_id: i64,
    pub problem_name: String,
    pub check_result: String,
    pub size: i32,
    pub submitted_at: i64,
    pub submitted_at_text: String,
}

impl From<UserSubmission> for UserSubmissionResponse {
    fn from(s: UserSubmission) -> Self {
        Self {
            id: s.id,
            problem_id: s.problem_id,
            problem_name: s.problem_name,
            check_result: s.check_result,
            size: s.size,
            submitted_at: s.submitted_at,
            submitted_at_text: format_epoch(s.submitted_at),
        }
    }
}

/// Recent feed plus the current user's history
#[derive(Debug, Serialize)]
pub struct SubmissionsOverviewResponse {
    pub recent: Vec<RecentSubmissionResponse>,
    pub mine: Vec<UserSubmissionResponse>,
}
