//! # Presence Events
//!
//! Event types that flow through the shared bus.

use serde::{Deserialize, Serialize};
use shared_types::entities::{ScreenName, SessionId};

/// Everything a service can announce on the bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresenceEvent {
    /// A user's buddy icon changed; their online contacts should receive
    /// a fresh arrival notice carrying the new icon.
    BuddyIconChanged {
        /// Sign-on that uploaded the icon.
        session_id: SessionId,
        /// Whose icon changed.
        screen_name: ScreenName,
    },
}

impl PresenceEvent {
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            PresenceEvent::BuddyIconChanged { .. } => EventTopic::Presence,
        }
    }

    /// Screen name the event is about.
    #[must_use]
    pub fn screen_name(&self) -> &ScreenName {
        match self {
            PresenceEvent::BuddyIconChanged { screen_name, .. } => screen_name,
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Arrival and profile changes visible to buddies.
    Presence,
}

/// Which topics a subscriber wants. No topics means every event.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub topics: Vec<EventTopic>,
}

impl EventFilter {
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self { topics }
    }

    #[must_use]
    pub fn matches(&self, event: &PresenceEvent) -> bool {
        self.topics.is_empty() || self.topics.contains(&event.topic())
    }
}
