//! Problem request DTOs

use serde::Deserialize;

/// Query parameters for the problem detail view
#[derive(Debug, Deserialize)]
pub struct ProblemDetailQuery {
    pub problem_id: i64,
}
