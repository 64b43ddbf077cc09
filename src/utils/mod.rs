//! Utility functions shared across layers.
//!
//! - [`id`] - Identifier generation and database-precision timestamps
//! - [`token`] - API token generation and hashing

pub mod id;
pub mod token;
