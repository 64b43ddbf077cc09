//! Ownership policy for owner-scoped form operations.
//!
//! A form's creator is its only reader and writer. Existence is checked
//! before ownership, so a non-owner gets `403 Forbidden` rather than
//! `404 Not Found` for a form that exists.

use serde_json::json;

use crate::domain::entities::{CurrentUser, Form};
use crate::error::AppError;

/// Resolves a form lookup result for an owner-scoped operation.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if `form` is `None`.
/// Returns [`AppError::Forbidden`] if `user` did not create the form.
pub fn require_owner(
    form_id: &str,
    form: Option<Form>,
    user: &CurrentUser,
) -> Result<Form, AppError> {
    let form = form.ok_or_else(|| form_not_found(form_id))?;

    if !form.is_owned_by(user) {
        tracing::debug!(form_id, user_id = %user.id, "Rejected access by non-owner");
        return Err(AppError::forbidden(
            "Not enough permissions",
            json!({ "form_id": form_id }),
        ));
    }

    Ok(form)
}

/// Error returned for a form id that does not exist.
pub fn form_not_found(form_id: &str) -> AppError {
    AppError::not_found("Form not found", json!({ "form_id": form_id }))
}
