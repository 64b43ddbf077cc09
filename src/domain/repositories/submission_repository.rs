//! Repository trait for form submissions.

use crate::domain::entities::{FormSubmission, NewSubmission};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the append-only submission log.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSubmissionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Records a submission if, and only if, its form is published.
    ///
    /// The published check and the insert happen in a single statement.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(FormSubmission))` if the row was written
    /// - `Ok(None)` if the form does not exist or is not published
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_if_published(
        &self,
        new_submission: NewSubmission,
    ) -> Result<Option<FormSubmission>, AppError>;

    /// Lists submissions for a form, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_form(
        &self,
        form_id: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<FormSubmission>, AppError>;
}
