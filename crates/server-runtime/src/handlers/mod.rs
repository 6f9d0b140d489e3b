//! # Event Handlers
//!
//! Subscribers reacting to events the BART service publishes.

pub mod presence;

pub use presence::PresenceLogHandler;
