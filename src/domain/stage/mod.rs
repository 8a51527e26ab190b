//! Stage domain module.
//!
//! A stage ("etapa") is the single resource managed by this service. Stages
//! are created, read, partially updated and deleted; their `titulo` is unique.

mod aggregate;
mod errors;

pub use aggregate::{Stage, StageDraft, StagePatch};
pub use errors::{
    StageError, DUPLICATE_NAME_MESSAGE, INTERNAL_ERROR_MESSAGE, NOT_FOUND_MESSAGE,
    VALIDATION_FAILED_MESSAGE,
};
