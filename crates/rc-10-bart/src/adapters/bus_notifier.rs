//! Presence notifier backed by the shared event bus.
//!
//! The BART service does not know who a user's buddies are. It publishes a
//! `BuddyIconChanged` event and the buddy-list relay, subscribed to the
//! presence topic, sends arrival notices to whoever is online.

use async_trait::async_trait;
use shared_bus::{EventPublisher, PresenceEvent};
use shared_types::entities::Session;
use std::sync::Arc;
use tracing::debug;

use crate::error::NotifyError;
use crate::ports::outbound::PresenceNotifier;

/// Publishes icon changes to the shared bus.
pub struct BusPresenceNotifier<P: EventPublisher> {
    bus: Arc<P>,
}

impl<P: EventPublisher> BusPresenceNotifier<P> {
    pub fn new(bus: Arc<P>) -> Self {
        Self { bus }
    }
}

#[async_trait]
impl<P: EventPublisher + 'static> PresenceNotifier for BusPresenceNotifier<P> {
    async fn announce(&self, session: &Session) -> Result<(), NotifyError> {
        let event = PresenceEvent::BuddyIconChanged {
            session_id: session.id,
            screen_name: session.screen_name.clone(),
        };

        // Zero receivers just means no relay is listening right now
        let receivers = self.bus.publish(event).await;
        debug!(
            screen_name = %session.screen_name,
            receivers,
            "announced buddy icon change"
        );
        Ok(())
    }
}
