//! Ports Layer
//!
//! - Driving Port (inbound): `BartApi`, called by the SNAC router
//! - Driven Ports (outbound): `ContentStore`, `PresenceNotifier`

pub mod inbound;
pub mod outbound;

pub use inbound::BartApi;
pub use outbound::{ContentStore, PresenceNotifier};
