//! PostgreSQL implementation of form repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Form, FormChanges, FormField, NewForm};
use crate::domain::repositories::FormRepository;
use crate::error::AppError;

const FORM_COLUMNS: &str = "id, title, description, created_by, created_at, updated_at, \
                            published, published_at, settings";

const FIELD_COLUMNS: &str = "form_id, id, field_type, label, placeholder, required, options, \
                             validation, default_value, help_text, disabled, class_name";

#[derive(sqlx::FromRow)]
struct FormRow {
    id: String,
    title: String,
    description: String,
    created_by: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    settings: Option<Json<Value>>,
}

impl FormRow {
    fn into_form(self, fields: Vec<FormField>) -> Form {
        Form {
            id: self.id,
            title: self.title,
            description: self.description,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
            published: self.published,
            published_at: self.published_at,
            settings: self.settings.map(|s| s.0),
            fields,
        }
    }
}

#[derive(sqlx::FromRow)]
struct FieldRow {
    form_id: String,
    id: String,
    field_type: String,
    label: String,
    placeholder: Option<String>,
    required: bool,
    options: Option<Json<Vec<Map<String, Value>>>>,
    validation: Option<Json<Map<String, Value>>>,
    default_value: Option<String>,
    help_text: Option<String>,
    disabled: Option<bool>,
    class_name: Option<String>,
}

impl From<FieldRow> for FormField {
    fn from(row: FieldRow) -> Self {
        FormField {
            id: row.id,
            field_type: row.field_type,
            label: row.label,
            placeholder: row.placeholder,
            required: row.required,
            options: row.options.map(|o| o.0),
            validation: row.validation.map(|v| v.0),
            default_value: row.default_value,
            help_text: row.help_text,
            disabled: row.disabled,
            class_name: row.class_name,
        }
    }
}

/// PostgreSQL repository for forms and their fields.
///
/// Field order is kept in an explicit `position` column. Every multi-statement
/// write runs in a transaction that rolls back when dropped uncommitted.
pub struct PgFormRepository {
    pool: Arc<PgPool>,
}

impl PgFormRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Converts a field's index in the list into its stored `position`.
fn field_position(index: usize) -> Result<i32, AppError> {
    i32::try_from(index).map_err(|_| {
        AppError::bad_request("Too many fields", json!({ "max_fields": i32::MAX }))
    })
}

async fn insert_fields(
    conn: &mut PgConnection,
    form_id: &str,
    fields: &[FormField],
) -> Result<(), AppError> {
    for (index, field) in fields.iter().enumerate() {
        let position = field_position(index)?;

        sqlx::query(
            r#"
            INSERT INTO form_fields (
                form_id, id, position, field_type, label, placeholder, required,
                options, validation, default_value, help_text, disabled, class_name
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(form_id)
        .bind(&field.id)
        .bind(position)
        .bind(&field.field_type)
        .bind(&field.label)
        .bind(&field.placeholder)
        .bind(field.required)
        .bind(field.options.as_ref().map(Json))
        .bind(field.validation.as_ref().map(Json))
        .bind(&field.default_value)
        .bind(&field.help_text)
        .bind(field.disabled)
        .bind(&field.class_name)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

async fn load_fields(conn: &mut PgConnection, form_id: &str) -> Result<Vec<FormField>, sqlx::Error> {
    let rows = sqlx::query_as::<_, FieldRow>(&format!(
        "SELECT {FIELD_COLUMNS} FROM form_fields WHERE form_id = $1 ORDER BY position"
    ))
    .bind(form_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows.into_iter().map(FormField::from).collect())
}

#[async_trait]
impl FormRepository for PgFormRepository {
    async fn create(&self, new_form: NewForm) -> Result<Form, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, FormRow>(&format!(
            r#"
            INSERT INTO forms (id, title, description, created_by, created_at, updated_at, published, settings)
            VALUES ($1, $2, $3, $4, $5, $5, FALSE, $6)
            RETURNING {FORM_COLUMNS}
            "#
        ))
        .bind(&new_form.id)
        .bind(&new_form.title)
        .bind(&new_form.description)
        .bind(&new_form.created_by)
        .bind(new_form.created_at)
        .bind(new_form.settings.as_ref().map(Json))
        .fetch_one(&mut *tx)
        .await?;

        insert_fields(&mut tx, &row.id, &new_form.fields).await?;
        let fields = load_fields(&mut tx, &row.id).await?;

        tx.commit().await?;

        Ok(row.into_form(fields))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Form>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let row = sqlx::query_as::<_, FormRow>(&format!(
            "SELECT {FORM_COLUMNS} FROM forms WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let fields = load_fields(&mut conn, &row.id).await?;
        Ok(Some(row.into_form(fields)))
    }

    async fn list_by_owner(
        &self,
        owner: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Form>, AppError> {
        let rows = sqlx::query_as::<_, FormRow>(&format!(
            r#"
            SELECT {FORM_COLUMNS}
            FROM forms
            WHERE created_by = $1
            ORDER BY created_at DESC, id
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(owner)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = rows.iter().map(|r| r.id.clone()).collect();

        let field_rows = sqlx::query_as::<_, FieldRow>(&format!(
            "SELECT {FIELD_COLUMNS} FROM form_fields WHERE form_id = ANY($1) ORDER BY form_id, position"
        ))
        .bind(&ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut fields_by_form: HashMap<String, Vec<FormField>> = HashMap::new();
        for field in field_rows {
            fields_by_form
                .entry(field.form_id.clone())
                .or_default()
                .push(field.into());
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let fields = fields_by_form.remove(&row.id).unwrap_or_default();
                row.into_form(fields)
            })
            .collect())
    }

    async fn update(
        &self,
        id: &str,
        changes: FormChanges,
        now: DateTime<Utc>,
    ) -> Result<Form, AppError> {
        let mut tx = self.pool.begin().await?;

        // NULL parameters keep the stored value. The row lock taken by UPDATE
        // is held until commit, so the field replacement below sees this row.
        let row = sqlx::query_as::<_, FormRow>(&format!(
            r#"
            UPDATE forms SET
                title        = COALESCE($2, title),
                description  = COALESCE($3, description),
                published    = COALESCE($4, published),
                published_at = CASE WHEN $4 THEN COALESCE(published_at, $6) ELSE published_at END,
                settings     = COALESCE($5, settings),
                updated_at   = $6
            WHERE id = $1
            RETURNING {FORM_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(changes.published)
        .bind(changes.settings.as_ref().map(Json))
        .bind(now)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::not_found("Form not found", json!({ "form_id": id })))?;

        if let Some(fields) = &changes.fields {
            sqlx::query("DELETE FROM form_fields WHERE form_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;

            insert_fields(&mut tx, id, fields).await?;
        }

        let fields = load_fields(&mut tx, id).await?;

        tx.commit().await?;

        Ok(row.into_form(fields))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM form_fields WHERE form_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM form_submissions WHERE form_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM forms WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
