//! # Service Container
//!
//! Configuration and dependency injection for the BART server.

pub mod config;
pub mod services;

pub use config::{BusConfig, ConfigError, LoggingConfig, ServerConfig};
pub use services::{ConcreteBartService, ConcreteNotifier, ServiceContainer};
