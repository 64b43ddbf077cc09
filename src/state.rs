//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, FormService, SubmissionService};
use crate::infrastructure::persistence::{
    PgFormRepository, PgSubmissionRepository, PgTokenRepository,
};

/// Services and resources shared by all request handlers.
///
/// Cloned per request; every member is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub form_service: Arc<FormService<PgFormRepository>>,
    pub submission_service: Arc<SubmissionService<PgFormRepository, PgSubmissionRepository>>,
    pub auth_service: Arc<AuthService<PgTokenRepository>>,
}

impl AppState {
    /// Wires repositories and services on top of a connection pool.
    ///
    /// `token_signing_secret` must match the secret the admin CLI used when
    /// issuing tokens.
    pub fn new(pool: Arc<PgPool>, token_signing_secret: String) -> Self {
        let form_repository = Arc::new(PgFormRepository::new(pool.clone()));
        let submission_repository = Arc::new(PgSubmissionRepository::new(pool.clone()));
        let token_repository = Arc::new(PgTokenRepository::new(pool.clone()));

        Self {
            form_service: Arc::new(FormService::new(form_repository.clone())),
            submission_service: Arc::new(SubmissionService::new(
                form_repository,
                submission_repository,
            )),
            auth_service: Arc::new(AuthService::new(token_repository, token_signing_secret)),
            db: pool,
        }
    }
}
