//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries
//! are checked at runtime and mapped through `sqlx::FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgFormRepository`] - Forms and ordered fields
//! - [`PgSubmissionRepository`] - Append-only submissions
//! - [`PgTokenRepository`] - API token storage and lookup

pub mod pg_form_repository;
pub mod pg_submission_repository;
pub mod pg_token_repository;

pub use pg_form_repository::PgFormRepository;
pub use pg_submission_repository::PgSubmissionRepository;
pub use pg_token_repository::PgTokenRepository;
