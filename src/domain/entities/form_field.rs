//! Form field entity: one typed input control inside a form.

use serde_json::{Map, Value};

use crate::utils::id::generate_id;

/// A field belonging to a form.
///
/// `field_type` is an open discriminator (`text`, `select`, `checkbox`, ...).
/// Type-specific configuration lives in the opaque `options` and `validation`
/// documents, which are stored verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub id: String,
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

/// Field definition as supplied by a client, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDraft {
    pub id: Option<String>,
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

impl FieldDraft {
    /// Finalizes the draft, generating an id when the client did not send one.
    ///
    /// Blank ids are treated as missing.
    pub fn into_field(self) -> FormField {
        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(generate_id);

        FormField {
            id,
            field_type: self.field_type,
            label: self.label,
            placeholder: self.placeholder,
            required: self.required,
            options: self.options,
            validation: self.validation,
            default_value: self.default_value,
            help_text: self.help_text,
            disabled: self.disabled,
            class_name: self.class_name,
        }
    }
}
