//! Problem response DTOs

use serde::Serialize;

use crate::models::{LeaderboardRow, Problem};

/// Problem list response
#[derive(Debug, Serialize)]
pub struct ProblemsListResponse {
    pub problems: Vec<Problem>,
    pub total: usize,
}

/// Problem detail with its smallest-passing leaderboard
#[derive(Debug, Serialize)]
pub struct ProblemDetailResponse {
    pub problem: Problem,
    pub leaderboard: Vec<LeaderboardRow>,
}
