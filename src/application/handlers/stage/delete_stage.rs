//! DeleteStageHandler - Command handler for removing stages.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::StageId;
use crate::domain::stage::{Stage, StageError};
use crate::ports::StageService;

/// Command to delete a stage.
#[derive(Debug, Clone)]
pub struct DeleteStageCommand {
    pub id: StageId,
}

/// Handler for deleting stages. Returns the removed stage.
pub struct DeleteStageHandler {
    service: Arc<dyn StageService>,
}

impl DeleteStageHandler {
    pub fn new(service: Arc<dyn StageService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, cmd: DeleteStageCommand) -> Result<Stage, StageError> {
        let removed = self.service.delete(cmd.id).await?;
        info!(id = %removed.id(), titulo = removed.titulo(), "stage deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::stage::test_support::{stage, MockStageService};

    #[tokio::test]
    async fn returns_removed_stage() {
        let service = Arc::new(MockStageService::with_stages(vec![
            stage(1, "Planning"),
            stage(2, "Execution"),
        ]));
        let handler = DeleteStageHandler::new(service.clone());

        let removed = handler
            .handle(DeleteStageCommand { id: StageId::new(1) })
            .await
            .unwrap();

        assert_eq!(removed.titulo(), "Planning");
        assert_eq!(service.stages(), vec![stage(2, "Execution")]);
    }

    #[tokio::test]
    async fn deleting_twice_is_not_found() {
        let service = Arc::new(MockStageService::with_stages(vec![stage(1, "Planning")]));
        let handler = DeleteStageHandler::new(service);

        handler
            .handle(DeleteStageCommand { id: StageId::new(1) })
            .await
            .unwrap();
        let again = handler.handle(DeleteStageCommand { id: StageId::new(1) }).await;

        assert_eq!(again, Err(StageError::NotFound("1".to_string())));
    }
}
