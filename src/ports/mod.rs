//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `StageService` - Persistence of stages (in-memory, PostgreSQL)

mod stage_service;

pub use stage_service::StageService;
