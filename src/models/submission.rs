//! Submission model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Submission database model
///
/// Rows are insert-only: a submission is never updated or deleted.
/// `submitted_at` is seconds since the Unix epoch.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub problem_id: i64,
    pub user_id: i64,
    pub check_result: String,
    pub size: i32,
    pub submitted_at: i64,
}

/// Check result enum
///
/// The column is free text for forward compatibility; only the literal
/// "pass" counts towards leaderboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckResult {
    Pass,
    Fail,
}

impl CheckResult {
    /// Get check result as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
        }
    }

    /// Parse a check result from free text (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pass" => Some(Self::Pass),
            "fail" => Some(Self::Fail),
            _ => None,
        }
    }

    /// Check if this result counts towards the leaderboard
    pub fn is_passing(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl std::fmt::Display for CheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of a problem's smallest-passing leaderboard
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LeaderboardRow {
    pub id: i64,
    pub user_id: i64,
    pub github_login: String,
    pub github_avatar: String,
    pub size: i32,
    pub submitted_at: i64,
}

/// Submission joined with its problem name and submitter profile,
/// as shown in the site-wide recent feed
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubmissionEntry {
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
}

/// Submission joined with its problem name, scoped to one user
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserSubmission {
    pub id: i64,
    pub problem_id: i64,
    pub problem_name: String,
    pub check_result: String,
    pub size: i32,
    pub submitted_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_result_parse() {
        assert_eq!(CheckResult::parse("pass"), Some(CheckResult::Pass));
        assert_eq!(CheckResult::parse(" PASS "), Some(CheckResult::Pass));
        assert_eq!(CheckResult::parse("fail"), Some(CheckResult::Fail));
        assert_eq!(CheckResult::parse("maybe"), None);
        assert_eq!(CheckResult::parse(""), None);
    }

    #[test]
    fn test_check_result_passing() {
        assert!(CheckResult::Pass.is_passing());
        assert!(!CheckResult::Fail.is_passing());
    }

    #[test]
    fn test_check_result_roundtrip() {
        for r in [CheckResult::Pass, CheckResult::Fail] {
            assert_eq!(CheckResult::parse(r.as_str()), Some(r));
        }
    }
}
