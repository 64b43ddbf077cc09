//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access and are implemented by the PostgreSQL
//! repositories in `crate::infrastructure::persistence`. Mock implementations
//! are generated with `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`FormRepository`] - Forms and their ordered fields
//! - [`SubmissionRepository`] - Append-only form submissions
//! - [`TokenRepository`] - API tokens used to identify callers

pub mod form_repository;
pub mod submission_repository;
pub mod token_repository;

pub use form_repository::FormRepository;
pub use submission_repository::SubmissionRepository;
pub use token_repository::{ApiToken, TokenRepository};

#[cfg(test)]
pub use form_repository::MockFormRepository;
#[cfg(test)]
pub use submission_repository::MockSubmissionRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
