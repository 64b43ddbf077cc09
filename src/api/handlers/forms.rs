//! Handlers for form definition endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::form::{CreateFormRequest, FormResponse, UpdateFormRequest};
use crate::api::dto::pagination::PaginationParams;
use crate::domain::entities::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists forms created by the caller.
///
/// # Endpoint
///
/// `GET /api/forms`
///
/// # Query Parameters
///
/// - `skip` (optional): Number of forms to skip (default: 0)
/// - `limit` (optional): Maximum number of forms (default: 100, max: 1000)
///
/// Forms are ordered newest first. Other users' forms are never included.
pub async fn list_forms_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<FormResponse>>, AppError> {
    let (offset, limit) = params.offset_limit()?;

    let forms = state.form_service.list_forms(&user, offset, limit).await?;

    Ok(Json(forms.into_iter().map(FormResponse::from).collect()))
}

/// Creates a new unpublished form owned by the caller.
///
/// # Endpoint
///
/// `POST /api/forms`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Customer feedback",
///   "description": "Tell us how we did",
///   "fields": [
///     { "type": "text", "label": "Name", "required": true },
///     { "id": "rating", "type": "select", "label": "Rating",
///       "options": [{ "value": "5", "label": "Great" }] }
///   ],
///   "settings": { "submitLabel": "Send" }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or two fields share an id.
pub async fn create_form_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<CreateFormRequest>,
) -> Result<(StatusCode, Json<FormResponse>), AppError> {
    payload.validate()?;

    let form = state
        .form_service
        .create_form(&user, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(form.into())))
}

/// Returns a single form with its fields.
///
/// # Endpoint
///
/// `GET /api/forms/{form_id}`
///
/// # Errors
///
/// Returns 404 Not Found if the form doesn't exist.
/// Returns 403 Forbidden if the caller is not the owner.
pub async fn get_form_handler(
    Path(form_id): Path<String>,
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<FormResponse>, AppError> {
    let form = state.form_service.get_form(&form_id, &user).await?;

    Ok(Json(form.into()))
}

/// Partially updates a form.
///
/// # Endpoint
///
/// `PATCH /api/forms/{form_id}`
///
/// # Request Body
///
/// All attributes are optional. `fields`, when present, replaces the whole
/// field list. Setting `published` to `true` for the first time records
/// `publishedAt`.
///
/// ```json
/// { "title": "Renamed", "published": true }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the form doesn't exist.
/// Returns 403 Forbidden if the caller is not the owner.
/// Returns 400 Bad Request if validation fails.
pub async fn update_form_handler(
    Path(form_id): Path<String>,
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<UpdateFormRequest>,
) -> Result<Json<FormResponse>, AppError> {
    payload.validate()?;

    let form = state
        .form_service
        .update_form(&form_id, &user, payload.into())
        .await?;

    Ok(Json(form.into()))
}

/// Deletes a form together with its fields and submissions.
///
/// # Endpoint
///
/// `DELETE /api/forms/{form_id}`
///
/// # Errors
///
/// Returns 404 Not Found if the form doesn't exist.
/// Returns 403 Forbidden if the caller is not the owner.
pub async fn delete_form_handler(
    Path(form_id): Path<String>,
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<StatusCode, AppError> {
    state.form_service.delete_form(&form_id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}
