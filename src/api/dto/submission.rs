//! DTOs for form submission endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::entities::FormSubmission;

/// Request body for `POST /api/forms/{form_id}/submissions`.
///
/// `values` maps field ids to submitted values and is stored verbatim.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub values: Map<String, Value>,
}

/// JSON representation of a recorded submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub id: String,
    pub form_id: String,
    pub submitted_at: DateTime<Utc>,
    pub submitted_by: Option<String>,
    pub values: Map<String, Value>,
}

impl From<FormSubmission> for SubmissionResponse {
    fn from(s: FormSubmission) -> Self {
        SubmissionResponse {
            id: s.id,
            form_id: s.form_id,
            submitted_at: s.submitted_at,
            submitted_by: s.submitted_by,
            values: s.values,
        }
    }
}
