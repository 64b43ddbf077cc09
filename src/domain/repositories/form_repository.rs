//! Repository trait for form data access.

use crate::domain::entities::{Form, FormChanges, NewForm};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for forms and their fields.
///
/// Forms are always returned hydrated with their fields in stored order.
/// Multi-row writes (form + fields) must be atomic.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgFormRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_form.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormRepository: Send + Sync {
    /// Creates a form together with its fields in one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the form id already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_form: NewForm) -> Result<Form, AppError>;

    /// Finds a form by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Form))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<Form>, AppError>;

    /// Lists forms created by `owner`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_owner(
        &self,
        owner: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Form>, AppError>;

    /// Applies `changes` to the stored form in one transaction.
    ///
    /// Only supplied attributes are written, against the current row rather
    /// than a previously read copy. `updated_at` is set to `now`, and
    /// `published_at` is set to `now` only when the form is published while it
    /// is still unset. `changes.fields` replaces the stored field list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the form no longer exists.
    /// Returns [`AppError::Validation`] if the field list is too long to index.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(
        &self,
        id: &str,
        changes: FormChanges,
        now: DateTime<Utc>,
    ) -> Result<Form, AppError>;

    /// Deletes a form with all of its fields and submissions.
    ///
    /// Does not report whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
