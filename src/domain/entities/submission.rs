//! Submission entity: one recorded response to a published form.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// An immutable response to a form.
///
/// `values` maps field ids to whatever the client submitted; it is not checked
/// against the form's field definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSubmission {
    pub id: String,
    pub form_id: String,
    pub submitted_at: DateTime<Utc>,
    pub submitted_by: Option<String>,
    pub values: Map<String, Value>,
}

/// Input data for recording a new submission.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub id: String,
    pub form_id: String,
    pub submitted_at: DateTime<Utc>,
    pub submitted_by: Option<String>,
    pub values: Map<String, Value>,
}
