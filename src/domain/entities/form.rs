//! Form entity and the inputs used to create and modify it.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::form_field::{FieldDraft, FormField};
use super::user::CurrentUser;

/// A form definition with its ordered fields.
///
/// `published_at` records the first time the form was published and is never
/// cleared afterwards, even if the form is later unpublished.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub settings: Option<Value>,
    pub fields: Vec<FormField>,
}

impl Form {
    /// Returns true if `user` created this form.
    pub fn is_owned_by(&self, user: &CurrentUser) -> bool {
        self.created_by == user.id
    }

    /// Returns true if the form currently accepts submissions.
    pub fn accepts_submissions(&self) -> bool {
        self.published
    }
}

/// Input data for creating a new form.
#[derive(Debug, Clone)]
pub struct NewForm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub settings: Option<Value>,
    pub fields: Vec<FormField>,
}

/// Client input for a new form, before ids and timestamps are assigned.
#[derive(Debug, Clone)]
pub struct FormDraft {
    pub title: String,
    pub description: String,
    pub settings: Option<Value>,
    pub fields: Vec<FieldDraft>,
}

/// Client input for a partial update, before field ids are assigned.
#[derive(Debug, Clone, Default)]
pub struct FormPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub fields: Option<Vec<FieldDraft>>,
    pub published: Option<bool>,
    pub settings: Option<Value>,
}

/// Partial update for an existing form, ready to persist.
///
/// `None` fields are left unchanged. `fields: Some(..)` replaces the whole
/// field list.
#[derive(Debug, Clone, Default)]
pub struct FormChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub fields: Option<Vec<FormField>>,
    pub published: Option<bool>,
    pub settings: Option<Value>,
}
