//! Handlers for form submission endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::submission::{SubmissionResponse, SubmitRequest};
use crate::domain::entities::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Records a response to a published form.
///
/// # Endpoint
///
/// `POST /api/forms/{form_id}/submissions`
///
/// Any authenticated caller may submit, not only the owner. The submission is
/// attributed to the caller.
///
/// # Request Body
///
/// ```json
/// { "values": { "name": "Alice", "rating": "5" } }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the form doesn't exist.
/// Returns 400 Bad Request if the form is not published.
pub async fn submit_form_handler(
    Path(form_id): Path<String>,
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<SubmitRequest>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let submission = state
        .submission_service
        .submit(&form_id, Some(&user), payload.values)
        .await?;

    Ok(Json(submission.into()))
}

/// Lists submissions of a form, most recent first.
///
/// # Endpoint
///
/// `GET /api/forms/{form_id}/submissions`
///
/// # Query Parameters
///
/// - `skip` (optional): Number of submissions to skip (default: 0)
/// - `limit` (optional): Maximum number of submissions (default: 100, max: 1000)
///
/// # Errors
///
/// Returns 404 Not Found if the form doesn't exist.
/// Returns 403 Forbidden if the caller is not the owner.
pub async fn list_submissions_handler(
    Path(form_id): Path<String>,
    State(state): State<AppState>,
    user: CurrentUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<SubmissionResponse>>, AppError> {
    let (offset, limit) = params.offset_limit()?;

    let submissions = state
        .submission_service
        .list_submissions(&form_id, &user, offset, limit)
        .await?;

    Ok(Json(
        submissions
            .into_iter()
            .map(SubmissionResponse::from)
            .collect(),
    ))
}
