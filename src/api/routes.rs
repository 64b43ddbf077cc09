//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_form_handler, delete_form_handler, get_form_handler, list_forms_handler,
    list_submissions_handler, submit_form_handler, update_form_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /forms`                        - List the caller's forms (paginated)
/// - `POST   /forms`                        - Create a form
/// - `GET    /forms/{form_id}`              - Get a form with its fields
/// - `PATCH  /forms/{form_id}`              - Partially update or publish a form
/// - `DELETE /forms/{form_id}`              - Delete a form and its submissions
/// - `POST   /forms/{form_id}/submissions`  - Submit a response to a published form
/// - `GET    /forms/{form_id}/submissions`  - List submissions (owner only, paginated)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/forms", get(list_forms_handler).post(create_form_handler))
        .route(
            "/forms/{form_id}",
            get(get_form_handler)
                .patch(update_form_handler)
                .delete(delete_form_handler),
        )
        .route(
            "/forms/{form_id}/submissions",
            get(list_submissions_handler).post(submit_form_handler),
        )
}
