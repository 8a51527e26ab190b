//! Stage entity and its validated inputs.
//!
//! A stage ("etapa") is a named step of a workflow with a free-form
//! description and an ordered list of opaque detail items.
//!
//! # Ownership
//!
//! Stages are persisted by a [`crate::ports::StageService`]. This module only
//! defines the shapes that cross that port: the stored [`Stage`], the
//! [`StageDraft`] used to create one, and the [`StagePatch`] used to update it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{StageId, ValidationError};

/// A persisted stage.
///
/// # Invariants
///
/// - `id` is assigned by storage and never changes
/// - `titulo` is unique across all stages (enforced by the service)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    id: StageId,
    titulo: String,
    descricao: String,
    #[serde(default)]
    detalhes: Vec<Value>,
}

impl Stage {
    /// Reconstitute a stage from persistence (no validation).
    pub fn reconstitute(
        id: StageId,
        titulo: String,
        descricao: String,
        detalhes: Vec<Value>,
    ) -> Self {
        Self {
            id,
            titulo,
            descricao,
            detalhes,
        }
    }

    /// Materialize a draft under the identifier chosen by storage.
    pub fn from_draft(id: StageId, draft: StageDraft) -> Self {
        Self {
            id,
            titulo: draft.titulo,
            descricao: draft.descricao,
            detalhes: draft.detalhes,
        }
    }

    pub fn id(&self) -> StageId {
        self.id
    }

    pub fn titulo(&self) -> &str {
        &self.titulo
    }

    pub fn descricao(&self) -> &str {
        &self.descricao
    }

    pub fn detalhes(&self) -> &[Value] {
        &self.detalhes
    }

    /// Overwrite every field the patch carries; absent fields are kept.
    pub fn apply(&mut self, patch: StagePatch) {
        if let Some(titulo) = patch.titulo {
            self.titulo = titulo;
        }
        if let Some(descricao) = patch.descricao {
            self.descricao = descricao;
        }
        if let Some(detalhes) = patch.detalhes {
            self.detalhes = detalhes;
        }
    }
}

/// Validated input for creating a stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageDraft {
    titulo: String,
    descricao: String,
    detalhes: Vec<Value>,
}

impl StageDraft {
    /// Build a draft from the creation fields.
    ///
    /// Missing `detalhes` is stored as an empty list.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `titulo` or `descricao` is empty
    pub fn new(
        titulo: String,
        descricao: String,
        detalhes: Option<Vec<Value>>,
    ) -> Result<Self, ValidationError> {
        if titulo.is_empty() {
            return Err(ValidationError::empty_field("titulo"));
        }
        if descricao.is_empty() {
            return Err(ValidationError::empty_field("descricao"));
        }

        Ok(Self {
            titulo,
            descricao,
            detalhes: detalhes.unwrap_or_default(),
        })
    }

    pub fn titulo(&self) -> &str {
        &self.titulo
    }

    pub fn descricao(&self) -> &str {
        &self.descricao
    }

    pub fn detalhes(&self) -> &[Value] {
        &self.detalhes
    }
}

/// Partial update of a stage. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StagePatch {
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    pub detalhes: Option<Vec<Value>>,
}

impl StagePatch {
    /// True when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.titulo.is_none() && self.descricao.is_none() && self.detalhes.is_none()
    }
}
