//! # Presence Handler
//!
//! Stand-in for the buddy-list relay: subscribes to presence events and logs
//! each icon change that would be fanned out to online buddies.

use tokio::sync::watch;
use tracing::info;

use shared_bus::{PresenceEvent, Subscription};

/// Handler for presence events published by the BART service.
pub struct PresenceLogHandler {
    /// Subscriber for presence events.
    subscription: Subscription,
    /// Flips to `true` when the server shuts down.
    shutdown: watch::Receiver<bool>,
}

impl PresenceLogHandler {
    pub fn new(subscription: Subscription, shutdown: watch::Receiver<bool>) -> Self {
        Self {
            subscription,
            shutdown,
        }
    }

    /// Run until shutdown is signalled or the bus closes.
    ///
    /// Events already queued when shutdown arrives are still handled.
    /// Returns the number of events handled.
    pub async fn run(mut self) -> u64 {
        info!("[presence] handler started");
        let mut handled = 0u64;

        loop {
            tokio::select! {
                biased;

                event = self.subscription.recv() => {
                    let Some(event) = event else {
                        info!("[presence] event bus closed");
                        break;
                    };
                    handled += 1;
                    log_event(&event);
                }
                changed = self.shutdown.changed() => {
                    if changed.is_err() || *self.shutdown.borrow() {
                        handled += self.drain();
                        break;
                    }
                }
            }
        }

        info!(handled, "[presence] handler stopped");
        handled
    }

    fn drain(&mut self) -> u64 {
        let mut drained = 0;
        while let Ok(Some(event)) = self.subscription.try_recv() {
            drained += 1;
            log_event(&event);
        }
        drained
    }
}

fn log_event(event: &PresenceEvent) {
    match event {
        PresenceEvent::BuddyIconChanged {
            session_id,
            screen_name,
        } => {
            info!(
                screen_name = %screen_name,
                ident = %screen_name.ident(),
                session_id = %session_id.0,
                "[presence] buddy icon changed, notifying buddies"
            );
        }
    }
}
