//! Core domain entities representing the form data model.
//!
//! # Entity Types
//!
//! - [`Form`] - A form definition owning an ordered list of fields
//! - [`FormField`] - One typed input control within a form
//! - [`FormSubmission`] - An immutable response recorded against a published form
//! - [`CurrentUser`] - The identity resolved for the current request
//!
//! # Design Pattern
//!
//! Entities have separate structs for creation and modification:
//! - `FormDraft`, `FieldDraft` - Client input before ids are assigned
//! - `NewForm`, `NewSubmission` - Fully resolved records ready to persist
//! - `FormPatch`, `FormChanges` - Partial updates before and after field resolution

pub mod form;
pub mod form_field;
pub mod submission;
pub mod user;

pub use form::{Form, FormChanges, FormDraft, FormPatch, NewForm};
pub use form_field::{FieldDraft, FormField};
pub use submission::{FormSubmission, NewSubmission};
pub use user::CurrentUser;
