//! Task-list pipeline: transport adapter, business service, persistence
//! gateway.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! A request enters through the HTTP adapter, is decoded into domain values,
//! passes through [`services::TaskService`] which enforces the creation,
//! update, and deletion invariants, and reaches the store through the
//! [`ports::TaskRepository`] contract.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
