//! DTOs for form definition endpoints.
//!
//! JSON keys are camelCase to match the form builder frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::domain::entities::{FieldDraft, Form, FormDraft, FormField, FormPatch};

/// A field as sent by the client on create or update.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FieldPayload {
    /// Client-supplied id, generated when absent.
    pub id: Option<String>,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 64, message = "Field type must not be empty"))]
    pub field_type: String,

    #[validate(length(min = 1, message = "Field label must not be empty"))]
    pub label: String,

    pub placeholder: Option<String>,

    #[serde(default)]
    pub required: bool,

    pub options: Option<Vec<Map<String, Value>>>,

    pub validation: Option<Map<String, Value>>,

    pub default_value: Option<String>,

    pub help_text: Option<String>,

    pub disabled: Option<bool>,

    pub class_name: Option<String>,
}

impl From<FieldPayload> for FieldDraft {
    fn from(p: FieldPayload) -> Self {
        FieldDraft {
            id: p.id,
            field_type: p.field_type,
            label: p.label,
            placeholder: p.placeholder,
            required: p.required,
            options: p.options,
            validation: p.validation,
            default_value: p.default_value,
            help_text: p.help_text,
            disabled: p.disabled,
            class_name: p.class_name,
        }
    }
}

/// Request body for `POST /api/forms`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFormRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    #[validate(nested)]
    pub fields: Vec<FieldPayload>,

    pub settings: Option<Map<String, Value>>,
}

impl From<CreateFormRequest> for FormDraft {
    fn from(r: CreateFormRequest) -> Self {
        FormDraft {
            title: r.title,
            description: r.description,
            settings: r.settings.map(Value::Object),
            fields: r.fields.into_iter().map(FieldDraft::from).collect(),
        }
    }
}

/// Request body for `PATCH /api/forms/{form_id}`.
///
/// Every attribute is optional. Absent and `null` both mean "leave unchanged".
/// `fields` replaces the whole field list when present.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFormRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(nested)]
    pub fields: Option<Vec<FieldPayload>>,

    pub published: Option<bool>,

    pub settings: Option<Map<String, Value>>,
}

impl From<UpdateFormRequest> for FormPatch {
    fn from(r: UpdateFormRequest) -> Self {
        FormPatch {
            title: r.title,
            description: r.description,
            fields: r
                .fields
                .map(|fields| fields.into_iter().map(FieldDraft::from).collect()),
            published: r.published,
            settings: r.settings.map(Value::Object),
        }
    }
}

/// JSON representation of a form field.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub label: String,
    pub placeholder: Option<String>,
    pub required: bool,
    pub options: Option<Vec<Map<String, Value>>>,
    pub validation: Option<Map<String, Value>>,
    pub default_value: Option<String>,
    pub help_text: Option<String>,
    pub disabled: Option<bool>,
    pub class_name: Option<String>,
}

impl From<FormField> for FieldResponse {
    fn from(f: FormField) -> Self {
        FieldResponse {
            id: f.id,
            field_type: f.field_type,
            label: f.label,
            placeholder: f.placeholder,
            required: f.required,
            options: f.options,
            validation: f.validation,
            default_value: f.default_value,
            help_text: f.help_text,
            disabled: f.disabled,
            class_name: f.class_name,
        }
    }
}

/// JSON representation of a form with its fields.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub fields: Vec<FieldResponse>,
    pub settings: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

impl From<Form> for FormResponse {
    fn from(f: Form) -> Self {
        FormResponse {
            id: f.id,
            title: f.title,
            description: f.description,
            fields: f.fields.into_iter().map(FieldResponse::from).collect(),
            settings: f.settings,
            created_at: f.created_at,
            updated_at: f.updated_at,
            created_by: f.created_by,
            published: f.published,
            published_at: f.published_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_defaults() {
        let req: CreateFormRequest = serde_json::from_value(json!({ "title": "Survey" })).unwrap();
        assert_eq!(req.description, "");
        assert!(req.fields.is_empty());
        assert!(req.settings.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_empty_title() {
        let req: CreateFormRequest = serde_json::from_value(json!({ "title": "" })).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_field_payload_camel_case() {
        let field: FieldPayload = serde_json::from_value(json!({
            "type": "select",
            "label": "Colour",
            "defaultValue": "r",
            "helpText": "Pick one",
            "className": "wide",
            "options": [{ "value": "r", "label": "Red" }]
        }))
        .unwrap();

        assert!(field.id.is_none());
        assert_eq!(field.field_type, "select");
        assert!(!field.required);
        assert_eq!(field.default_value.as_deref(), Some("r"));
        assert_eq!(field.help_text.as_deref(), Some("Pick one"));
        assert_eq!(field.class_name.as_deref(), Some("wide"));
        assert_eq!(field.options.unwrap()[0]["label"], "Red");
    }

    #[test]
    fn test_nested_field_validation() {
        let req: CreateFormRequest = serde_json::from_value(json!({
            "title": "Survey",
            "fields": [{ "type": "", "label": "Name" }]
        }))
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_null_means_unchanged() {
        let req: UpdateFormRequest = serde_json::from_value(json!({
            "title": null,
            "settings": null,
            "published": true
        }))
        .unwrap();
        let patch = FormPatch::from(req);
        assert!(patch.title.is_none());
        assert!(patch.settings.is_none());
        assert!(patch.fields.is_none());
        assert_eq!(patch.published, Some(true));
    }

    #[test]
    fn test_form_response_shape() {
        let now = Utc::now();
        let form = Form {
            id: "f1".to_string(),
            title: "Survey".to_string(),
            description: String::new(),
            created_by: "alice".to_string(),
            created_at: now,
            updated_at: now,
            published: false,
            published_at: None,
            settings: Some(json!({ "collectEmail": true })),
            fields: vec![FormField {
                id: "name".to_string(),
                field_type: "text".to_string(),
                label: "Name".to_string(),
                placeholder: None,
                required: true,
                options: None,
                validation: None,
                default_value: None,
                help_text: None,
                disabled: None,
                class_name: None,
            }],
        };

        let body = serde_json::to_value(FormResponse::from(form)).unwrap();

        assert_eq!(body["createdBy"], "alice");
        assert!(body["publishedAt"].is_null());
        assert_eq!(body["createdAt"], body["updatedAt"]);
        assert_eq!(body["settings"]["collectEmail"], true);
        assert_eq!(body["fields"][0]["type"], "text");
        assert!(body["fields"][0].get("helpText").is_some());
    }
}
