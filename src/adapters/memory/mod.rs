//! In-process adapters.

mod in_memory_stage_service;

pub use in_memory_stage_service::InMemoryStageService;
