//! Todolist: a task-list RPC service.
//!
//! This crate exposes create/read/update/delete operations over task records
//! through an HTTP JSON interface, persisted in `PostgreSQL`.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: the task entity and its mutation rules, with no
//!   infrastructure dependencies
//! - **Ports**: abstract trait interfaces for persistence
//! - **Adapters**: concrete implementations of ports (database, HTTP, memory)
//! - **Services**: orchestration of domain rules over the ports
//!
//! # Modules
//!
//! - [`config`]: configuration file loading and connection-string assembly
//! - [`todo`]: the task-list domain, persistence, and transport

pub mod config;
pub mod todo;
