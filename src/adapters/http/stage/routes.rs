//! Axum router configuration for stage endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_stage, delete_stage, get_stage, list_stages, update_stage, StageAppState,
};

/// Create the stage API router.
///
/// # Routes
///
/// - `GET /etapas` - List every stage
/// - `POST /etapas` - Create a stage
/// - `GET /etapas/:id` - Get one stage
/// - `PUT /etapas/:id`, `PATCH /etapas/:id` - Update some fields of a stage
/// - `DELETE /etapas/:id` - Delete a stage
pub fn stage_routes() -> Router<StageAppState> {
    Router::new()
        .route("/etapas", get(list_stages).post(create_stage))
        .route(
            "/etapas/:id",
            get(get_stage)
                .put(update_stage)
                .patch(update_stage)
                .delete(delete_stage),
        )
}
