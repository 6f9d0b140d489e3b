//! # Event Publisher
//!
//! The sending half of the bus and its in-process implementation.

use crate::events::{EventFilter, PresenceEvent};
use crate::subscriber::{EventStream, Subscription};
use crate::DEFAULT_CHANNEL_CAPACITY;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::debug;

/// Anything presence changes can be announced to.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Hand `event` to every current subscriber.
    ///
    /// Returns how many subscribers it reached; zero is not a failure.
    async fn publish(&self, event: PresenceEvent) -> usize;
}

/// Single-process bus on a `tokio::sync::broadcast` channel.
///
/// Each subscriber buffers up to `capacity` events; a subscriber that falls
/// further behind skips the oldest ones.
pub struct InMemoryEventBus {
    sender: broadcast::Sender<PresenceEvent>,
    published: AtomicU64,
    capacity: usize,
}

impl InMemoryEventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// # Panics
    ///
    /// If `capacity` is zero. `ServerConfig` validation rejects that first.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            published: AtomicU64::new(0),
            capacity,
        }
    }

    /// Events published after this call are delivered to the returned
    /// subscription if they pass `filter`.
    #[must_use]
    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        debug!(topics = ?filter.topics, "presence subscriber added");
        Subscription::new(self.sender.subscribe(), filter)
    }

    #[must_use]
    pub fn event_stream(&self, filter: EventFilter) -> EventStream {
        self.subscribe(filter).into_stream()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Events published since creation, delivered or not.
    #[must_use]
    pub fn published_count(&self) -> u64 {
        self.published.load(Ordering::Relaxed)
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: PresenceEvent) -> usize {
        self.published.fetch_add(1, Ordering::Relaxed);
        let screen_name = event.screen_name().clone();

        // `send` only errors when nobody is subscribed
        let receivers = self.sender.send(event).unwrap_or(0);
        debug!(%screen_name, receivers, "presence event published");
        receivers
    }
}
