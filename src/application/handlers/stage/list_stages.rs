//! ListStagesHandler - Query handler for listing every stage.

use std::sync::Arc;

use crate::domain::stage::{Stage, StageError};
use crate::ports::StageService;

/// Query to list all stages.
#[derive(Debug, Clone, Default)]
pub struct ListStagesQuery;

/// Handler for listing stages.
pub struct ListStagesHandler {
    service: Arc<dyn StageService>,
}

impl ListStagesHandler {
    pub fn new(service: Arc<dyn StageService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, _query: ListStagesQuery) -> Result<Vec<Stage>, StageError> {
        self.service.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::stage::test_support::{stage, MockStageService};

    #[tokio::test]
    async fn returns_empty_list_for_empty_store() {
        let handler = ListStagesHandler::new(Arc::new(MockStageService::new()));
        let stages = handler.handle(ListStagesQuery).await.unwrap();
        assert!(stages.is_empty());
    }

    #[tokio::test]
    async fn returns_stages_in_service_order() {
        let service = Arc::new(MockStageService::with_stages(vec![
            stage(1, "Planning"),
            stage(2, "Execution"),
        ]));
        let handler = ListStagesHandler::new(service);

        let stages = handler.handle(ListStagesQuery).await.unwrap();
        let titles: Vec<_> = stages.iter().map(|s| s.titulo()).collect();
        assert_eq!(titles, vec!["Planning", "Execution"]);
    }

    #[tokio::test]
    async fn propagates_infrastructure_failure() {
        let handler = ListStagesHandler::new(Arc::new(MockStageService::failing()));
        let result = handler.handle(ListStagesQuery).await;
        assert!(matches!(result, Err(StageError::Infrastructure(_))));
    }
}
