//! Submission intake and listing service.

use std::sync::Arc;

use serde_json::{Map, Value, json};

use crate::application::metrics::{SUBMISSIONS_ACCEPTED, SUBMISSIONS_REJECTED};
use crate::application::policy::{form_not_found, require_owner};
use crate::domain::entities::{CurrentUser, FormSubmission, NewSubmission};
use crate::domain::repositories::{FormRepository, SubmissionRepository};
use crate::error::AppError;
use crate::utils::id::{generate_id, now};

/// Service for recording responses to published forms and reading them back.
///
/// Anyone with a resolved identity may submit to a published form; only the
/// form's owner may list its submissions.
pub struct SubmissionService<F: FormRepository, S: SubmissionRepository> {
    form_repository: Arc<F>,
    submission_repository: Arc<S>,
}

impl<F: FormRepository, S: SubmissionRepository> SubmissionService<F, S> {
    /// Creates a new submission service.
    pub fn new(form_repository: Arc<F>, submission_repository: Arc<S>) -> Self {
        Self {
            form_repository,
            submission_repository,
        }
    }

    /// Records a submission against a published form.
    ///
    /// `values` is stored verbatim. Ownership of the form is not required.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the form does not exist.
    /// Returns [`AppError::Validation`] if the form is not published.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn submit(
        &self,
        form_id: &str,
        user: Option<&CurrentUser>,
        values: Map<String, Value>,
    ) -> Result<FormSubmission, AppError> {
        let form = self
            .form_repository
            .find_by_id(form_id)
            .await?
            .ok_or_else(|| form_not_found(form_id))?;

        if !form.accepts_submissions() {
            return Err(not_published(form_id));
        }

        let new_submission = NewSubmission {
            id: generate_id(),
            form_id: form.id,
            submitted_at: now(),
            submitted_by: user.map(|u| u.id.clone()),
            values,
        };

        // The form may have been unpublished since it was read.
        let submission = self
            .submission_repository
            .create_if_published(new_submission)
            .await?
            .ok_or_else(|| not_published(form_id))?;

        metrics::counter!(SUBMISSIONS_ACCEPTED).increment(1);
        tracing::info!(form_id, submission_id = %submission.id, "Submission recorded");

        Ok(submission)
    }

    /// Lists submissions of a form owned by `user`, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the form does not exist.
    /// Returns [`AppError::Forbidden`] if `user` is not the owner.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_submissions(
        &self,
        form_id: &str,
        user: &CurrentUser,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<FormSubmission>, AppError> {
        let form = self.form_repository.find_by_id(form_id).await?;
        require_owner(form_id, form, user)?;

        self.submission_repository
            .list_by_form(form_id, offset, limit)
            .await
    }
}

fn not_published(form_id: &str) -> AppError {
    metrics::counter!(SUBMISSIONS_REJECTED).increment(1);
    AppError::bad_request("Form is not published", json!({ "form_id": form_id }))
}
