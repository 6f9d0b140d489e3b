//! # Server Runtime Library
//!
//! Exposes the runtime modules for testing. The entry point is the
//! `server-runtime` binary.
//!
//! - `container/` - configuration and dependency injection
//! - `handlers/` - event-bus subscribers
//! - `runtime` - startup and graceful shutdown

pub mod container;
pub mod handlers;
pub mod runtime;

pub use container::{ConfigError, ServerConfig, ServiceContainer};
pub use runtime::ServerRuntime;
