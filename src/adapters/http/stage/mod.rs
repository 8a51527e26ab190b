//! HTTP adapter for stage endpoints.
//!
//! Exposes the stage domain via REST API:
//! - `GET /etapas` - List every stage
//! - `GET /etapas/:id` - Get one stage
//! - `POST /etapas` - Create a stage
//! - `PUT|PATCH /etapas/:id` - Update a stage
//! - `DELETE /etapas/:id` - Delete a stage

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateStageRequest, ErrorResponse, StageResponse, UpdateStageRequest};
pub use handlers::{StageApiError, StageAppState, ValidatedJson};
pub use routes::stage_routes;
