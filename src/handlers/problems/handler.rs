//! Problem handler implementations

use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    error::AppResult, middleware::identity::CurrentUser, services::ProblemService,
    state::AppState,
};

use super::{
    request::ProblemDetailQuery,
    response::{ProblemDetailResponse, ProblemsListResponse},
};

/// List all problems
pub async fn list_problems(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> AppResult<Json<ProblemsListResponse>> {
    let problems = ProblemService::list_problems(state.db()).await?;
    let total = problems.len();

    Ok(Json(ProblemsListResponse { problems, total }))
}

/// Problem detail with the top smallest passing submissions
pub async fn problem_detail(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<ProblemDetailQuery>,
) -> AppResult<Json<ProblemDetailResponse>> {
    let (problem, leaderboard) =
        ProblemService::problem_detail(state.db(), query.problem_id).await?;

    Ok(Json(ProblemDetailResponse {
        problem,
        leaderboard,
    }))
}
