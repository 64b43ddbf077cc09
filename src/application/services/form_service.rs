//! Form lifecycle service.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::json;

use crate::application::metrics::{FORMS_CREATED, FORMS_DELETED};
use crate::application::policy::require_owner;
use crate::domain::entities::{
    CurrentUser, FieldDraft, Form, FormChanges, FormDraft, FormField, FormPatch, NewForm,
};
use crate::domain::repositories::FormRepository;
use crate::error::AppError;
use crate::utils::id::{generate_id, now};

/// Service for creating, reading, updating and deleting forms.
///
/// Every operation on a single form is restricted to its owner. Listing is
/// scoped to the caller's own forms.
pub struct FormService<R: FormRepository> {
    repository: Arc<R>,
}

impl<R: FormRepository> FormService<R> {
    /// Creates a new form service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists the caller's forms.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_forms(
        &self,
        user: &CurrentUser,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Form>, AppError> {
        self.repository.list_by_owner(&user.id, offset, limit).await
    }

    /// Creates a new unpublished form owned by `user`.
    ///
    /// The form gets a fresh id and `created_at == updated_at`. Fields without
    /// an id are assigned one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if two fields share an id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_form(&self, user: &CurrentUser, draft: FormDraft) -> Result<Form, AppError> {
        let fields = resolve_fields(draft.fields)?;

        let new_form = NewForm {
            id: generate_id(),
            title: draft.title,
            description: draft.description,
            created_by: user.id.clone(),
            created_at: now(),
            settings: draft.settings,
            fields,
        };

        let form = self.repository.create(new_form).await?;

        metrics::counter!(FORMS_CREATED).increment(1);
        tracing::info!(form_id = %form.id, owner = %form.created_by, fields = form.fields.len(), "Form created");

        Ok(form)
    }

    /// Returns a form owned by `user`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the form does not exist.
    /// Returns [`AppError::Forbidden`] if `user` is not the owner.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_form(&self, form_id: &str, user: &CurrentUser) -> Result<Form, AppError> {
        let form = self.repository.find_by_id(form_id).await?;
        require_owner(form_id, form, user)
    }

    /// Partially updates a form owned by `user`.
    ///
    /// Omitted attributes are unchanged. A supplied field list replaces the
    /// existing one entirely. `updated_at` is always refreshed; `published_at`
    /// is stamped on the first publish only.
    ///
    /// Ownership is checked on a prior read; `created_by` never changes. The
    /// write touches only the supplied attributes of the current row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the form does not exist.
    /// Returns [`AppError::Forbidden`] if `user` is not the owner.
    /// Returns [`AppError::Validation`] if two fields share an id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_form(
        &self,
        form_id: &str,
        user: &CurrentUser,
        patch: FormPatch,
    ) -> Result<Form, AppError> {
        let current = self.get_form(form_id, user).await?;

        let changes = FormChanges {
            title: patch.title,
            description: patch.description,
            fields: patch.fields.map(resolve_fields).transpose()?,
            published: patch.published,
            settings: patch.settings,
        };

        let form = self.repository.update(form_id, changes, now()).await?;

        if form.published != current.published {
            tracing::info!(form_id, published = form.published, "Form publish state changed");
        }

        Ok(form)
    }

    /// Deletes a form owned by `user` along with its fields and submissions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the form does not exist.
    /// Returns [`AppError::Forbidden`] if `user` is not the owner.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_form(&self, form_id: &str, user: &CurrentUser) -> Result<(), AppError> {
        self.get_form(form_id, user).await?;
        self.repository.delete(form_id).await?;

        metrics::counter!(FORMS_DELETED).increment(1);
        tracing::info!(form_id, "Form deleted");

        Ok(())
    }
}

/// Assigns missing field ids and rejects duplicates, preserving order.
fn resolve_fields(drafts: Vec<FieldDraft>) -> Result<Vec<FormField>, AppError> {
    let fields: Vec<FormField> = drafts.into_iter().map(FieldDraft::into_field).collect();

    let mut seen = HashSet::with_capacity(fields.len());
    for field in &fields {
        if !seen.insert(field.id.as_str()) {
            return Err(AppError::bad_request(
                "Duplicate field id",
                json!({ "field_id": field.id }),
            ));
        }
    }

    Ok(fields)
}
