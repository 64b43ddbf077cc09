//! Business logic services for the application layer.

pub mod auth_service;
pub mod form_service;
pub mod submission_service;

pub use auth_service::AuthService;
pub use form_service::FormService;
pub use submission_service::SubmissionService;
