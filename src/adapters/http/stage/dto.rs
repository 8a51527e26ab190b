//! HTTP DTOs for stage endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::application::CreateStageCommand;
use crate::domain::stage::{Stage, StagePatch};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new stage.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStageRequest {
    pub titulo: String,
    pub descricao: String,
    #[serde(default, deserialize_with = "present")]
    pub detalhes: Option<Vec<Value>>,
}

impl From<CreateStageRequest> for CreateStageCommand {
    fn from(req: CreateStageRequest) -> Self {
        Self {
            titulo: req.titulo,
            descricao: req.descricao,
            detalhes: req.detalhes,
        }
    }
}

/// Request to update some fields of a stage.
///
/// Every field is optional, but a field that is present must have the right
/// type; an explicit `null` is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStageRequest {
    #[serde(default, deserialize_with = "present")]
    pub titulo: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub descricao: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub detalhes: Option<Vec<Value>>,
}

impl From<UpdateStageRequest> for StagePatch {
    fn from(req: UpdateStageRequest) -> Self {
        Self {
            titulo: req.titulo,
            descricao: req.descricao,
            detalhes: req.detalhes,
        }
    }
}

/// Absent fields fall back to `None` via `#[serde(default)]`; present ones
/// must deserialize as `T`, so `null` fails.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Stage representation returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageResponse {
    pub id: i64,
    pub titulo: String,
    pub descricao: String,
    pub detalhes: Vec<Value>,
}

impl From<Stage> for StageResponse {
    fn from(stage: Stage) -> Self {
        Self {
            id: stage.id().value(),
            titulo: stage.titulo().to_string(),
            descricao: stage.descricao().to_string(),
            detalhes: stage.detalhes().to_vec(),
        }
    }
}

/// Error body: `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
