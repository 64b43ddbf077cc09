//! Offset pagination query parameters.

use serde::Deserialize;
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};

use crate::error::AppError;

/// Number of records returned when `limit` is not given.
pub const DEFAULT_LIMIT: u32 = 100;

/// Largest accepted `limit`.
pub const MAX_LIMIT: u32 = 1000;

/// `skip`/`limit` query parameters shared by list endpoints.
///
/// Uses `serde_with` to parse numbers from query strings.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub skip: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl PaginationParams {
    /// Validates the parameters and returns `(offset, limit)` for SQL queries.
    ///
    /// # Defaults
    ///
    /// - `skip`: 0
    /// - `limit`: 100
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `limit` exceeds [`MAX_LIMIT`].
    pub fn offset_limit(&self) -> Result<(i64, i64), AppError> {
        let skip = self.skip.unwrap_or(0);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);

        if limit > MAX_LIMIT {
            return Err(AppError::bad_request(
                "Invalid pagination parameters",
                json!({ "limit": limit, "max": MAX_LIMIT }),
            ));
        }

        Ok((i64::from(skip), i64::from(limit)))
    }
}
