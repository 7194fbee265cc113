//! Submission handler implementations

use axum::{
    Json,
    extract::{Form, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult, middleware::identity::CurrentUser, services::SubmissionService,
    state::AppState,
};

use super::{
    request::{CreateSubmissionRequest, SubmissionFormQuery},
    response::{
        SubmissionFormResponse, SubmissionResponse, SubmissionsOverviewResponse,
    },
};

/// Describe the submission form for a problem
pub async fn submission_form(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<SubmissionFormQuery>,
) -> AppResult<Json<SubmissionFormResponse>> {
    let problem = SubmissionService::form_target(state.db(), query.id).await?;

    Ok(Json(SubmissionFormResponse::for_problem(problem)))
}

/// Record a submission from the form body
pub async fn create_submission(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(payload): Form<CreateSubmissionRequest>,
) -> AppResult<(StatusCode, Json<SubmissionResponse>)> {
    payload.validate()?;

    let submission = SubmissionService::submit(
        state.db(),
        user.id,
        payload.problem_id,
        &payload.check,
        payload.size,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(submission.into())))
}

/// Recent feed plus the current user's history
pub async fn list_submissions(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<SubmissionsOverviewResponse>> {
    let (recent, mine) = SubmissionService::overview(state.db(), user.id).await?;

    Ok(Json(SubmissionsOverviewResponse {
        recent: recent.into_iter().map(Into::into).collect(),
        mine: mine.into_iter().map(Into::into).collect(),
    }))
}
