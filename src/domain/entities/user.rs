//! Authenticated caller identity.

/// The identity resolved for the current request.
///
/// Inserted into request extensions by the auth middleware and read by
/// handlers through the [`axum::extract::FromRequestParts`] implementation in
/// [`crate::api::middleware::auth`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: String,
}

impl CurrentUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
