//! PostgreSQL implementation of submission repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use crate::domain::entities::{FormSubmission, NewSubmission};
use crate::domain::repositories::SubmissionRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct SubmissionRow {
    id: String,
    form_id: String,
    submitted_at: DateTime<Utc>,
    submitted_by: Option<String>,
    values: Json<Map<String, Value>>,
}

impl From<SubmissionRow> for FormSubmission {
    fn from(row: SubmissionRow) -> Self {
        FormSubmission {
            id: row.id,
            form_id: row.form_id,
            submitted_at: row.submitted_at,
            submitted_by: row.submitted_by,
            values: row.values.0,
        }
    }
}

/// PostgreSQL repository for form submissions.
///
/// Submissions are append-only; there is no update path.
pub struct PgSubmissionRepository {
    pool: Arc<PgPool>,
}

impl PgSubmissionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionRepository for PgSubmissionRepository {
    async fn create_if_published(
        &self,
        new_submission: NewSubmission,
    ) -> Result<Option<FormSubmission>, AppError> {
        let row = sqlx::query_as::<_, SubmissionRow>(
            r#"
            INSERT INTO form_submissions (id, form_id, submitted_at, submitted_by, "values")
            SELECT $1, f.id, $3, $4, $5
            FROM forms f
            WHERE f.id = $2 AND f.published = TRUE
            RETURNING id, form_id, submitted_at, submitted_by, "values"
            "#,
        )
        .bind(&new_submission.id)
        .bind(&new_submission.form_id)
        .bind(new_submission.submitted_at)
        .bind(&new_submission.submitted_by)
        .bind(Json(&new_submission.values))
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(FormSubmission::from))
    }

    async fn list_by_form(
        &self,
        form_id: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<FormSubmission>, AppError> {
        let rows = sqlx::query_as::<_, SubmissionRow>(
            r#"
            SELECT id, form_id, submitted_at, submitted_by, "values"
            FROM form_submissions
            WHERE form_id = $1
            ORDER BY submitted_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(form_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(FormSubmission::from).collect())
    }
}
