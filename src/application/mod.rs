//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! authorization and business rules. Services consume repository traits and
//! provide a clean API for HTTP handlers.
//!
//! # Modules
//!
//! - [`metrics`] - Business counter names (inert until a recorder is installed)
//! - [`policy`] - Owner-only access rule shared by the services
//! - [`services::form_service::FormService`] - Form lifecycle (list, create, get, update, delete)
//! - [`services::submission_service::SubmissionService`] - Accepting and listing submissions
//! - [`services::auth_service::AuthService`] - Resolving bearer tokens to callers

pub mod metrics;
pub mod policy;
pub mod services;
