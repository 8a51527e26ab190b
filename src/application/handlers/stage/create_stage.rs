//! CreateStageHandler - Command handler for creating new stages.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::domain::stage::{Stage, StageDraft, StageError};
use crate::ports::StageService;

/// Command to create a new stage.
#[derive(Debug, Clone)]
pub struct CreateStageCommand {
    pub titulo: String,
    pub descricao: String,
    pub detalhes: Option<Vec<Value>>,
}

/// Handler for creating stages.
pub struct CreateStageHandler {
    service: Arc<dyn StageService>,
}

impl CreateStageHandler {
    pub fn new(service: Arc<dyn StageService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, cmd: CreateStageCommand) -> Result<Stage, StageError> {
        // Invalid input never reaches the service
        let draft = StageDraft::new(cmd.titulo, cmd.descricao, cmd.detalhes)?;

        match self.service.create(draft).await {
            Ok(stage) => {
                info!(id = %stage.id(), titulo = stage.titulo(), "stage created");
                Ok(stage)
            }
            Err(e) => {
                debug!(error = %e, "stage creation rejected");
                Err(e)
            }
        }
    }
}
