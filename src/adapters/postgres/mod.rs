//! PostgreSQL adapters - Database implementations for service ports.
//!
//! - `PostgresStageService` - Stage persistence in the `etapas` table
//! - `connect` / `run_migrations` - Pool setup for the binary

mod pool;
mod stage_service;

pub use pool::{connect, run_migrations};
pub use stage_service::PostgresStageService;
