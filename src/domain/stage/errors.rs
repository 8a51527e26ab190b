//! Stage-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Message returned when a request body fails validation.
pub const VALIDATION_FAILED_MESSAGE: &str = "Falha na validação";
/// Message returned when a `titulo` is already taken.
pub const DUPLICATE_NAME_MESSAGE: &str = "Já existe uma etapa com este nome";
/// Message returned when an id does not resolve to a stage.
pub const NOT_FOUND_MESSAGE: &str = "Id da etapa não encontrado";
/// Message returned for storage failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

/// Stage-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    /// Request input does not match the expected shape.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// Another stage already uses this titulo.
    #[error("Stage titulo already in use: {0}")]
    DuplicateName(String),

    /// The identifier does not resolve to a stage.
    #[error("Stage not found: {0}")]
    NotFound(String),

    /// Storage failed independently of the request.
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl StageError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        StageError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn duplicate_name(titulo: impl Into<String>) -> Self {
        StageError::DuplicateName(titulo.into())
    }

    /// Not-found for a raw path segment, which may not even parse as an id.
    pub fn not_found(id: impl ToString) -> Self {
        StageError::NotFound(id.to_string())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        StageError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            StageError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            StageError::DuplicateName(_) => ErrorCode::DuplicateStageTitle,
            StageError::NotFound(_) => ErrorCode::StageNotFound,
            StageError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Client-facing message for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            StageError::ValidationFailed { .. } => VALIDATION_FAILED_MESSAGE,
            StageError::DuplicateName(_) => DUPLICATE_NAME_MESSAGE,
            StageError::NotFound(_) => NOT_FOUND_MESSAGE,
            StageError::Infrastructure(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl From<ValidationError> for StageError {
    fn from(err: ValidationError) -> Self {
        StageError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for StageError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::StageNotFound => StageError::NotFound(
                err.details
                    .get("id")
                    .cloned()
                    .unwrap_or_else(|| err.message.clone()),
            ),
            ErrorCode::DuplicateStageTitle => StageError::DuplicateName(
                err.details
                    .get("titulo")
                    .cloned()
                    .unwrap_or_else(|| err.message.clone()),
            ),
            ErrorCode::ValidationFailed => StageError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.to_string(),
            },
            _ => StageError::Infrastructure(err.to_string()),
        }
    }
}
