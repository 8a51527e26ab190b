//! Etapas - Stage Management Service
//!
//! This crate exposes the stages ("etapas") of a project workflow as a REST
//! resource: list, fetch, create, update and delete, with input validation
//! in front of a pluggable storage service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
