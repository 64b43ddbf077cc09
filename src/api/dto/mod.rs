//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Domain conversions are `From` impls on the DTOs.

pub mod form;
pub mod health;
pub mod pagination;
pub mod submission;
