//! Adapter implementations for the task-list ports.
//!
//! - [`postgres`]: the production persistence gateway
//! - [`memory`]: an in-memory gateway for tests
//! - [`http`]: the inbound HTTP transport adapter

pub mod http;
pub mod memory;
pub mod postgres;
