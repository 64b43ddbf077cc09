//! Identifier and timestamp helpers.

use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

/// Generates a new opaque unique identifier (UUIDv4, hyphenated).
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current time truncated to microseconds.
///
/// PostgreSQL stores `TIMESTAMPTZ` with microsecond precision; truncating up
/// front keeps in-memory values equal to what is read back.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
