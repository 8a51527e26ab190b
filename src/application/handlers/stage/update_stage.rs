//! UpdateStageHandler - Command handler for partial stage updates.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::StageId;
use crate::domain::stage::{Stage, StageError, StagePatch};
use crate::ports::StageService;

/// Command to update some fields of a stage.
#[derive(Debug, Clone)]
pub struct UpdateStageCommand {
    pub id: StageId,
    pub patch: StagePatch,
}

/// Handler for updating stages.
pub struct UpdateStageHandler {
    service: Arc<dyn StageService>,
}

impl UpdateStageHandler {
    pub fn new(service: Arc<dyn StageService>) -> Self {
        Self { service }
    }

    /// An empty patch is still forwarded: it doubles as an existence check.
    pub async fn handle(&self, cmd: UpdateStageCommand) -> Result<Stage, StageError> {
        if cmd.patch.is_empty() {
            debug!(id = %cmd.id, "stage update carries no fields");
        }
        let stage = self.service.update(cmd.id, cmd.patch).await?;
        info!(id = %stage.id(), "stage updated");
        Ok(stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::stage::test_support::{stage, MockStageService};

    #[tokio::test]
    async fn updates_only_provided_fields() {
        let service = Arc::new(MockStageService::with_stages(vec![stage(1, "Planning")]));
        let handler = UpdateStageHandler::new(service);

        let cmd = UpdateStageCommand {
            id: StageId::new(1),
            patch: StagePatch {
                titulo: Some("Discovery".to_string()),
                ..Default::default()
            },
        };

        let updated = handler.handle(cmd).await.unwrap();
        assert_eq!(updated.titulo(), "Discovery");
        assert_eq!(updated.descricao(), "Planning description");
    }

    #[tokio::test]
    async fn empty_patch_still_invokes_service() {
        let service = Arc::new(MockStageService::with_stages(vec![stage(1, "Planning")]));
        let handler = UpdateStageHandler::new(service.clone());

        let cmd = UpdateStageCommand {
            id: StageId::new(1),
            patch: StagePatch::default(),
        };

        let unchanged = handler.handle(cmd).await.unwrap();
        assert_eq!(unchanged, stage(1, "Planning"));
        assert_eq!(service.calls(), 1);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let handler = UpdateStageHandler::new(Arc::new(MockStageService::new()));
        let cmd = UpdateStageCommand {
            id: StageId::new(42),
            patch: StagePatch::default(),
        };

        let result = handler.handle(cmd).await;
        assert!(matches!(result, Err(StageError::NotFound(_))));
    }
}
