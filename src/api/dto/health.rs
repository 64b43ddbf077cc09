//! Body of `GET /health`.
//!
//! The form service has one dependency to check: the PostgreSQL pool
//! that stores forms, fields and submissions.

use serde::Serialize;

/// Overall service state plus the result of each dependency check.
///
/// `status` is `"healthy"` only when every check passed, otherwise
/// `"degraded"`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

impl HealthResponse {
    /// Builds the response for the running crate version.
    pub fn from_checks(checks: HealthChecks) -> Self {
        let status = if checks.all_ok() { "healthy" } else { "degraded" };

        Self {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            checks,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.checks.all_ok()
    }
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    /// Form storage.
    pub database: CheckStatus,
}

impl HealthChecks {
    fn all_ok(&self) -> bool {
        self.database.is_ok()
    }
}

/// Outcome of a single dependency check: `"ok"` or `"error"`.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healthy_when_database_ok() {
        let response = HealthResponse::from_checks(HealthChecks {
            database: CheckStatus::ok("Connected"),
        });

        assert!(response.is_healthy());
        assert_eq!(response.status, "healthy");
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_degraded_when_database_fails() {
        let response = HealthResponse::from_checks(HealthChecks {
            database: CheckStatus::failed("Database error: pool closed"),
        });

        assert!(!response.is_healthy());

        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["checks"]["database"]["status"], "error");
        assert_eq!(body["checks"]["database"]["message"], "Database error: pool closed");
    }
}
