//! HTTP handlers for stage endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Json, Path, Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;

use crate::application::{
    CreateStageHandler, DeleteStageCommand, DeleteStageHandler, GetStageHandler, GetStageQuery,
    ListStagesHandler, ListStagesQuery, UpdateStageCommand, UpdateStageHandler,
};
use crate::domain::foundation::StageId;
use crate::domain::stage::StageError;
use crate::ports::StageService;

use super::dto::{CreateStageRequest, ErrorResponse, StageResponse, UpdateStageRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct StageAppState {
    pub stage_service: Arc<dyn StageService>,
}

impl StageAppState {
    pub fn new(stage_service: Arc<dyn StageService>) -> Self {
        Self { stage_service }
    }

    /// Create handlers on demand from the shared state.
    pub fn list_handler(&self) -> ListStagesHandler {
        ListStagesHandler::new(self.stage_service.clone())
    }

    pub fn get_handler(&self) -> GetStageHandler {
        GetStageHandler::new(self.stage_service.clone())
    }

    pub fn create_handler(&self) -> CreateStageHandler {
        CreateStageHandler::new(self.stage_service.clone())
    }

    pub fn update_handler(&self) -> UpdateStageHandler {
        UpdateStageHandler::new(self.stage_service.clone())
    }

    pub fn delete_handler(&self) -> DeleteStageHandler {
        DeleteStageHandler::new(self.stage_service.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Request validation
// ════════════════════════════════════════════════════════════════════════════════

/// JSON body extractor whose every rejection is a stage validation failure.
///
/// An empty body reads as `{}`, with or without a `Content-Type`. Otherwise
/// the body must be declared as JSON and deserialize into `T`: malformed
/// JSON, a missing `Content-Type`, a non-object body and any field of the
/// wrong type all produce `400 {"error": "Falha na validação"}`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = StageApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| body_rejection(rejection.body_text()))?;

        let bytes: &[u8] = if bytes.is_empty() {
            b"{}"
        } else if declared_json {
            &bytes
        } else {
            return Err(body_rejection(
                "Expected request with `Content-Type: application/json`",
            ));
        };

        match Json::<T>::from_bytes(bytes) {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(body_rejection(rejection.body_text())),
        }
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            let mime = value.split(';').next().unwrap_or_default().trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

fn body_rejection(message: impl Into<String>) -> StageApiError {
    StageApiError(StageError::validation("body", message))
}

/// Path ids are opaque: one that does not parse cannot name a stage.
fn parse_stage_id(raw: &str) -> Result<StageId, StageApiError> {
    raw.parse::<StageId>()
        .map_err(|_| StageApiError(StageError::not_found(raw)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /etapas - List every stage
pub async fn list_stages(
    State(state): State<StageAppState>,
) -> Result<Json<Vec<StageResponse>>, StageApiError> {
    let stages = state.list_handler().handle(ListStagesQuery).await?;
    Ok(Json(stages.into_iter().map(StageResponse::from).collect()))
}

/// GET /etapas/:id - Get one stage
pub async fn get_stage(
    State(state): State<StageAppState>,
    Path(id): Path<String>,
) -> Result<Json<StageResponse>, StageApiError> {
    let id = parse_stage_id(&id)?;
    let stage = state.get_handler().handle(GetStageQuery { id }).await?;
    Ok(Json(stage.into()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/PUT/PATCH/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /etapas - Create a new stage
pub async fn create_stage(
    State(state): State<StageAppState>,
    ValidatedJson(request): ValidatedJson<CreateStageRequest>,
) -> Result<Json<StageResponse>, StageApiError> {
    let stage = state.create_handler().handle(request.into()).await?;
    Ok(Json(stage.into()))
}

/// PUT|PATCH /etapas/:id - Update some fields of a stage
pub async fn update_stage(
    State(state): State<StageAppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateStageRequest>,
) -> Result<Json<StageResponse>, StageApiError> {
    let cmd = UpdateStageCommand {
        id: parse_stage_id(&id)?,
        patch: request.into(),
    };
    let stage = state.update_handler().handle(cmd).await?;
    Ok(Json(stage.into()))
}

/// DELETE /etapas/:id - Delete a stage, returning it
pub async fn delete_stage(
    State(state): State<StageAppState>,
    Path(id): Path<String>,
) -> Result<Json<StageResponse>, StageApiError> {
    let cmd = DeleteStageCommand {
        id: parse_stage_id(&id)?,
    };
    let stage = state.delete_handler().handle(cmd).await?;
    Ok(Json(stage.into()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper for converting domain errors to HTTP responses.
#[derive(Debug)]
pub struct StageApiError(pub StageError);

impl From<StageError> for StageApiError {
    fn from(err: StageError) -> Self {
        Self(err)
    }
}

impl IntoResponse for StageApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            StageError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            StageError::DuplicateName(_) => StatusCode::BAD_REQUEST,
            StageError::NotFound(_) => StatusCode::NOT_FOUND,
            StageError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(code = %self.0.code(), "{}", self.0);
        } else {
            tracing::debug!(code = %self.0.code(), "{}", self.0);
        }

        let body = ErrorResponse::new(self.0.user_message());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStageService;
    use crate::domain::stage::StagePatch;

    fn state() -> StageAppState {
        StageAppState::new(Arc::new(InMemoryStageService::new()))
    }

    #[test]
    fn api_error_maps_validation_to_400() {
        let err = StageApiError(StageError::validation("titulo", "missing"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_maps_duplicate_name_to_400() {
        let err = StageApiError(StageError::duplicate_name("Planning"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_maps_not_found_to_404() {
        let err = StageApiError(StageError::not_found(999));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn api_error_maps_infrastructure_to_500() {
        let err = StageApiError(StageError::infrastructure("pool closed"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unparseable_path_id_is_not_found() {
        let err = parse_stage_id("abc").unwrap_err();
        assert_eq!(err.0, StageError::NotFound("abc".to_string()));
    }

    #[test]
    fn padded_path_id_is_not_found() {
        let err = parse_stage_id(" 1").unwrap_err();
        assert_eq!(err.0, StageError::NotFound(" 1".to_string()));
    }

    #[test]
    fn json_content_type_accepts_parameters_and_suffixes() {
        let mut headers = HeaderMap::new();
        assert!(!has_json_content_type(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            "application/json; charset=utf-8".parse().unwrap(),
        );
        assert!(has_json_content_type(&headers));

        headers.insert(header::CONTENT_TYPE, "application/merge-patch+json".parse().unwrap());
        assert!(has_json_content_type(&headers));

        headers.insert(header::CONTENT_TYPE, "text/plain".parse().unwrap());
        assert!(!has_json_content_type(&headers));
    }

    #[tokio::test]
    async fn empty_body_reads_as_empty_object() {
        let request = axum::http::Request::builder()
            .method("PUT")
            .uri("/etapas/1")
            .body(axum::body::Body::empty())
            .unwrap();

        let ValidatedJson(update) = ValidatedJson::<UpdateStageRequest>::from_request(request, &())
            .await
            .unwrap();
        assert!(StagePatch::from(update).is_empty());
    }

    #[tokio::test]
    async fn non_empty_body_without_json_content_type_is_rejected() {
        let request = axum::http::Request::builder()
            .method("PUT")
            .uri("/etapas/1")
            .body(axum::body::Body::from("{}"))
            .unwrap();

        let err = ValidatedJson::<UpdateStageRequest>::from_request(request, &())
            .await
            .unwrap_err();
        assert!(matches!(err.0, StageError::ValidationFailed { .. }));
    }

    #[tokio::test]
    async fn create_then_get_returns_same_stage() {
        let state = state();
        let request = CreateStageRequest {
            titulo: "Planning".to_string(),
            descricao: "Initial planning phase".to_string(),
            detalhes: None,
        };

        let Json(created) = create_stage(State(state.clone()), ValidatedJson(request))
            .await
            .unwrap();
        let Json(fetched) = get_stage(State(state), Path(created.id.to_string()))
            .await
            .unwrap();

        assert_eq!(created, fetched);
    }

    #[tokio::test]
    async fn create_with_empty_descricao_is_validation_failure() {
        let request = CreateStageRequest {
            titulo: "Planning".to_string(),
            descricao: String::new(),
            detalhes: None,
        };

        let err = create_stage(State(state()), ValidatedJson(request))
            .await
            .unwrap_err();
        assert!(matches!(err.0, StageError::ValidationFailed { .. }));
    }

    #[tokio::test]
    async fn delete_unknown_stage_is_not_found() {
        let err = delete_stage(State(state()), Path("12".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.0, StageError::NotFound("12".to_string()));
    }
}
