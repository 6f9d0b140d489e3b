//! Adapters Layer
//!
//! - `InMemoryContentStore`: `ContentStore` backed by a locked `HashMap`
//! - `BusPresenceNotifier`: `PresenceNotifier` publishing on the shared bus

pub mod bus_notifier;
pub mod memory_store;

pub use bus_notifier::BusPresenceNotifier;
pub use memory_store::InMemoryContentStore;
