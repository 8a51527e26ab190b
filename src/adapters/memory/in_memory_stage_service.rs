//! In-Memory Stage Service Adapter
//!
//! Stores stages in process memory. Used by default when no database is
//! configured, and by tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::StageId;
use crate::domain::stage::{Stage, StageDraft, StageError, StagePatch};
use crate::ports::StageService;

#[derive(Debug)]
struct Store {
    stages: BTreeMap<StageId, Stage>,
    next_id: i64,
}

impl Store {
    fn titulo_taken(&self, titulo: &str, except: Option<StageId>) -> bool {
        self.stages
            .values()
            .any(|s| s.titulo() == titulo && Some(s.id()) != except)
    }
}

/// In-memory storage for stages.
///
/// Identifiers are handed out sequentially from 1 and never reused, even
/// after a delete.
#[derive(Debug, Clone)]
pub struct InMemoryStageService {
    store: Arc<RwLock<Store>>,
}

impl InMemoryStageService {
    /// Create an empty service
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store {
                stages: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.store.read().await.stages.len()
    }
}

impl Default for InMemoryStageService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StageService for InMemoryStageService {
    async fn list(&self) -> Result<Vec<Stage>, StageError> {
        let store = self.store.read().await;
        Ok(store.stages.values().cloned().collect())
    }

    async fn get(&self, id: StageId) -> Result<Stage, StageError> {
        let store = self.store.read().await;
        store
            .stages
            .get(&id)
            .cloned()
            .ok_or_else(|| StageError::not_found(id))
    }

    async fn create(&self, draft: StageDraft) -> Result<Stage, StageError> {
        let mut store = self.store.write().await;
        if store.titulo_taken(draft.titulo(), None) {
            return Err(StageError::duplicate_name(draft.titulo()));
        }

        let id = StageId::new(store.next_id);
        store.next_id += 1;

        let stage = Stage::from_draft(id, draft);
        store.stages.insert(id, stage.clone());
        Ok(stage)
    }

    async fn update(&self, id: StageId, patch: StagePatch) -> Result<Stage, StageError> {
        let mut store = self.store.write().await;
        if !store.stages.contains_key(&id) {
            return Err(StageError::not_found(id));
        }
        if let Some(titulo) = patch.titulo.as_deref() {
            if store.titulo_taken(titulo, Some(id)) {
                return Err(StageError::duplicate_name(titulo));
            }
        }

        let stage = store
            .stages
            .get_mut(&id)
            .ok_or_else(|| StageError::not_found(id))?;
        stage.apply(patch);
        Ok(stage.clone())
    }

    async fn delete(&self, id: StageId) -> Result<Stage, StageError> {
        let mut store = self.store.write().await;
        store
            .stages
            .remove(&id)
            .ok_or_else(|| StageError::not_found(id))
    }
}
