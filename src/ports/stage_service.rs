//! Stage service port.
//!
//! Defines the contract for persisting and retrieving stages. The HTTP layer
//! only ever talks to storage through this trait.
//!
//! # Design
//!
//! - **Typed failures**: every operation reports *why* it produced no stage
//!   (`NotFound`, `DuplicateName`) instead of returning an empty value
//! - **Infrastructure separated**: storage outages surface as
//!   `StageError::Infrastructure`, never as a missing record
//! - **Uniqueness**: implementations enforce that no two stages share a `titulo`

use async_trait::async_trait;

use crate::domain::foundation::StageId;
use crate::domain::stage::{Stage, StageDraft, StageError, StagePatch};

/// Persistence collaborator for stages.
#[async_trait]
pub trait StageService: Send + Sync {
    /// All stages, ordered by ascending id. Empty store yields an empty list.
    async fn list(&self) -> Result<Vec<Stage>, StageError>;

    /// Fetch one stage.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no stage has this id
    async fn get(&self, id: StageId) -> Result<Stage, StageError>;

    /// Persist a new stage and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `DuplicateName` if the draft's `titulo` is already used
    async fn create(&self, draft: StageDraft) -> Result<Stage, StageError>;

    /// Apply a partial update and return the updated stage.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no stage has this id
    /// - `DuplicateName` if the new `titulo` belongs to another stage
    async fn update(&self, id: StageId, patch: StagePatch) -> Result<Stage, StageError>;

    /// Remove a stage and return its last representation.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no stage has this id
    async fn delete(&self, id: StageId) -> Result<Stage, StageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_service_is_object_safe() {
        fn _accepts_dyn(_service: &dyn StageService) {}
    }
}
