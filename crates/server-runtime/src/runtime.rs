//! # Server Runtime
//!
//! Owns the service container and the background handlers.
//!
//! ## Startup Sequence
//!
//! 1. Build the container (event bus, content store, BART service)
//! 2. Subscribe the presence handler to the bus
//! 3. Signal ready
//!
//! A runtime starts at most once. Shutdown flips a `watch` flag and waits for
//! handlers to drain the events already queued.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use shared_bus::{EventFilter, EventTopic};

use crate::container::{ServerConfig, ServiceContainer};
use crate::handlers::PresenceLogHandler;

/// How long shutdown waits for a handler before giving up on it.
const HANDLER_DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

/// The BART server runtime.
pub struct ServerRuntime {
    /// Service container with all initialized services.
    container: Arc<ServiceContainer>,
    /// Shutdown signal sender.
    shutdown_tx: watch::Sender<bool>,
    /// Shutdown signal receiver, cloned into each handler.
    shutdown_rx: watch::Receiver<bool>,
    /// Spawned handler tasks.
    handlers: Mutex<Vec<JoinHandle<u64>>>,
    started: AtomicBool,
}

impl ServerRuntime {
    pub fn new(config: ServerConfig) -> Self {
        info!("Creating BART server runtime");
        let container = Arc::new(ServiceContainer::new(config));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            container,
            shutdown_tx,
            shutdown_rx,
            handlers: Mutex::new(Vec::new()),
            started: AtomicBool::new(false),
        }
    }

    /// Start the background handlers.
    pub fn start(&self) -> Result<()> {
        if *self.shutdown_rx.borrow() {
            bail!("runtime already shut down");
        }
        if self.started.swap(true, Ordering::SeqCst) {
            bail!("runtime already started");
        }

        info!("===========================================");
        info!("  Retro-Chat BART Server v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");

        let subscription = self
            .container
            .event_bus
            .subscribe(EventFilter::topics(vec![EventTopic::Presence]));
        let handler = PresenceLogHandler::new(subscription, self.shutdown_rx.clone());
        self.handlers.lock().push(tokio::spawn(handler.run()));

        info!(
            subscribers = self.container.event_bus.subscriber_count(),
            "Server ready"
        );
        Ok(())
    }

    /// Shut down gracefully.
    ///
    /// Returns the total number of events the handlers processed.
    pub async fn shutdown(&self) -> u64 {
        info!("Initiating graceful shutdown...");

        if let Err(e) = self.shutdown_tx.send(true) {
            error!("Failed to send shutdown signal: {}", e);
        }

        let handlers = std::mem::take(&mut *self.handlers.lock());
        let mut handled = 0;
        for handle in handlers {
            match tokio::time::timeout(HANDLER_DRAIN_TIMEOUT, handle).await {
                Ok(Ok(count)) => handled += count,
                Ok(Err(e)) => error!("Handler task failed: {}", e),
                Err(_) => warn!("Handler did not stop within {:?}", HANDLER_DRAIN_TIMEOUT),
            }
        }

        let snapshot = self.container.bart.metrics().snapshot();
        info!(
            uploads = snapshot.uploads,
            downloads = snapshot.downloads,
            blank_served = snapshot.blank_served,
            blank_ratio = snapshot.blank_ratio(),
            not_found = snapshot.not_found,
            "Shutdown complete"
        );
        handled
    }

    /// Get a reference to the service container.
    pub fn container(&self) -> Arc<ServiceContainer> {
        Arc::clone(&self.container)
    }
}
