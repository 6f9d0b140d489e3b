//! # Shared Bus - Presence Event Bus
//!
//! Services announce presence changes here instead of calling the
//! buddy-list relay directly. Whoever fans events out to online contacts
//! subscribes with an [`EventFilter`].
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │ BART (0x10)  │                    │ Buddy relay  │
//! │              │    publish()       │              │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```
//!
//! Publishing with no subscribers is not an error: it means nobody is
//! listening for presence right now.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{EventFilter, EventTopic, PresenceEvent};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{EventStream, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before lagging.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
