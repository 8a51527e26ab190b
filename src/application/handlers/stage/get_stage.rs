//! GetStageHandler - Query handler for retrieving a single stage.

use std::sync::Arc;

use crate::domain::foundation::StageId;
use crate::domain::stage::{Stage, StageError};
use crate::ports::StageService;

/// Query to get a stage by ID.
#[derive(Debug, Clone)]
pub struct GetStageQuery {
    pub id: StageId,
}

/// Handler for retrieving a stage.
pub struct GetStageHandler {
    service: Arc<dyn StageService>,
}

impl GetStageHandler {
    pub fn new(service: Arc<dyn StageService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, query: GetStageQuery) -> Result<Stage, StageError> {
        self.service.get(query.id).await
    }
}
