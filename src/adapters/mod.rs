//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST API
//! - `memory` - In-process stage storage
//! - `postgres` - PostgreSQL stage storage

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryStageService;
pub use postgres::PostgresStageService;
