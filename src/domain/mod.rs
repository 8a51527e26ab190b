//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, errors)
//! - `stage` - The stage ("etapa") entity, its inputs and its errors

pub mod foundation;
pub mod stage;
