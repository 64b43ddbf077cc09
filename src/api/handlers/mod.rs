//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod forms;
pub mod health;
pub mod submissions;

pub use forms::{
    create_form_handler, delete_form_handler, get_form_handler, list_forms_handler,
    update_form_handler,
};
pub use health::health_handler;
pub use submissions::{list_submissions_handler, submit_form_handler};
