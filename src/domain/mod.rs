//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Forms, fields, submissions and the caller identity
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business rules that need no I/O (publish transition, ownership) live on
//!   the entities; orchestration lives in [`crate::application::services`]

pub mod entities;
pub mod repositories;
