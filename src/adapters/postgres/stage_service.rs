//! PostgreSQL implementation of StageService.
//!
//! Persists stages to the `etapas` table. The unique index on `titulo`
//! backs the duplicate-name rule, so concurrent creates cannot both win.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, StageId};
use crate::domain::stage::{Stage, StageDraft, StageError, StagePatch};
use crate::ports::StageService;

/// PostgreSQL implementation of StageService.
#[derive(Clone)]
pub struct PostgresStageService {
    pool: PgPool,
}

impl PostgresStageService {
    /// Creates a new PostgresStageService.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StageService for PostgresStageService {
    async fn list(&self) -> Result<Vec<Stage>, StageError> {
        let rows = sqlx::query(
            r#"
            SELECT id, titulo, descricao, detalhes
            FROM etapas
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("Failed to list stages", e))?;

        let stages = rows
            .into_iter()
            .map(row_to_stage)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(stages)
    }

    async fn get(&self, id: StageId) -> Result<Stage, StageError> {
        let row = sqlx::query(
            r#"
            SELECT id, titulo, descricao, detalhes
            FROM etapas
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("Failed to fetch stage", e))?;

        match row {
            Some(row) => Ok(row_to_stage(row)?),
            None => Err(StageError::not_found(id)),
        }
    }

    async fn create(&self, draft: StageDraft) -> Result<Stage, StageError> {
        let row = sqlx::query(
            r#"
            INSERT INTO etapas (titulo, descricao, detalhes)
            VALUES ($1, $2, $3)
            ON CONFLICT (titulo) DO NOTHING
            RETURNING id, titulo, descricao, detalhes
            "#,
        )
        .bind(draft.titulo())
        .bind(draft.descricao())
        .bind(Json(draft.detalhes().to_vec()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("Failed to insert stage", e))?;

        match row {
            Some(row) => Ok(row_to_stage(row)?),
            None => Err(StageError::duplicate_name(draft.titulo())),
        }
    }

    async fn update(&self, id: StageId, patch: StagePatch) -> Result<Stage, StageError> {
        let titulo = patch.titulo.clone();
        let result = sqlx::query(
            r#"
            UPDATE etapas SET
                titulo = COALESCE($2, titulo),
                descricao = COALESCE($3, descricao),
                detalhes = COALESCE($4, detalhes)
            WHERE id = $1
            RETURNING id, titulo, descricao, detalhes
            "#,
        )
        .bind(id.value())
        .bind(patch.titulo)
        .bind(patch.descricao)
        .bind(patch.detalhes.map(Json))
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(Some(row)) => Ok(row_to_stage(row)?),
            Ok(None) => Err(StageError::not_found(id)),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StageError::duplicate_name(titulo.unwrap_or_default()))
            }
            Err(e) => Err(database_error("Failed to update stage", e)),
        }
    }

    async fn delete(&self, id: StageId) -> Result<Stage, StageError> {
        let row = sqlx::query(
            r#"
            DELETE FROM etapas
            WHERE id = $1
            RETURNING id, titulo, descricao, detalhes
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("Failed to delete stage", e))?;

        match row {
            Some(row) => Ok(row_to_stage(row)?),
            None => Err(StageError::not_found(id)),
        }
    }
}

fn database_error(context: &str, e: sqlx::Error) -> StageError {
    tracing::error!("{}: {}", context, e);
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e)).into()
}

fn row_to_stage(row: sqlx::postgres::PgRow) -> Result<Stage, DomainError> {
    let id: i64 = row.try_get("id").map_err(|e| column_error("id", e))?;
    let titulo: String = row.try_get("titulo").map_err(|e| column_error("titulo", e))?;
    let descricao: String = row
        .try_get("descricao")
        .map_err(|e| column_error("descricao", e))?;
    let Json(detalhes): Json<Vec<Value>> = row
        .try_get("detalhes")
        .map_err(|e| column_error("detalhes", e))?;

    Ok(Stage::reconstitute(
        StageId::new(id),
        titulo,
        descricao,
        detalhes,
    ))
}

fn column_error(column: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to get {}: {}", column, e),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_becomes_infrastructure() {
        let err = database_error("Failed to list stages", sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StageError::Infrastructure(ref msg) if msg.contains("list stages")));
    }

    #[test]
    fn column_error_names_the_column() {
        let err = column_error("detalhes", sqlx::Error::RowNotFound);
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(err.message.contains("detalhes"));
    }
}
