//! Submission request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_SUBMISSION_SIZE, MIN_SUBMISSION_SIZE};

/// Query parameters for the submission form
#[derive(Debug, Deserialize)]
pub struct SubmissionFormQuery {
    pub id: i64,
}

/// Submission form fields
///
/// Every field comes from the request body; the timestamp is assigned
/// server-side.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubmissionRequest {
    /// Problem being attempted
    pub problem_id: i64,

    /// Check outcome reported for the solution ("pass" or "fail")
    #[validate(length(min = 1, max = 16))]
    pub check: String,

    /// Solution size in bytes
    #[validate(range(min = MIN_SUBMISSION_SIZE, max = MAX_SUBMISSION_SIZE))]
    pub size: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(check: &str, size: i32) -> CreateSubmissionRequest {
        CreateSubmissionRequest {
            problem_id: 1,
            check: check.to_string(),
            size,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("pass", 120).validate().is_ok());
    }

    #[test]
    fn test_size_must_be_positive() {
        assert!(request("pass", 0).validate().is_err());
        assert!(request("pass", -5).validate().is_err());
    }

    #[test]
    fn test_size_bounds_follow_the_configured_limits() {
        assert!(request("pass", MIN_SUBMISSION_SIZE).validate().is_ok());
        assert!(request("pass", MAX_SUBMISSION_SIZE).validate().is_ok());
        assert!(request("pass", MIN_SUBMISSION_SIZE - 1).validate().is_err());
        assert!(request("pass", MAX_SUBMISSION_SIZE + 1).validate().is_err());
    }

    #[test]
    fn test_check_must_not_be_empty() {
        assert!(request("", 120).validate().is_err());
    }
}
