//! # Service Container
//!
//! Holds the BART service and the shared infrastructure it is wired to.
//!
//! ```text
//! InMemoryContentStore ──┐
//!                        ├──→ BartService ──announce──→ InMemoryEventBus ──→ presence handlers
//! BusPresenceNotifier ───┘
//! ```

use std::sync::Arc;

use tracing::{info, instrument};

use rc_10_bart::{BartService, BusPresenceNotifier, InMemoryContentStore};
use shared_bus::InMemoryEventBus;

use crate::container::config::ServerConfig;

/// Concrete notifier publishing onto the in-process bus.
pub type ConcreteNotifier = BusPresenceNotifier<InMemoryEventBus>;

/// Concrete BART service with in-memory backends.
pub type ConcreteBartService = BartService<InMemoryContentStore, ConcreteNotifier>;

/// Central container holding all service instances.
pub struct ServiceContainer {
    /// Event bus carrying presence changes.
    pub event_bus: Arc<InMemoryEventBus>,

    /// Icon blob storage, shared with the BART service.
    pub content_store: Arc<InMemoryContentStore>,

    /// Buddy-icon upload and retrieval.
    pub bart: Arc<ConcreteBartService>,

    /// Server configuration (immutable after initialization).
    pub config: ServerConfig,
}

impl ServiceContainer {
    /// Build the container from configuration.
    #[instrument(name = "container_init", skip(config))]
    pub fn new(config: ServerConfig) -> Self {
        info!("Initializing service container");

        let event_bus = Arc::new(InMemoryEventBus::with_capacity(config.bus.capacity));
        info!("  Event bus created (capacity={})", config.bus.capacity);

        let content_store = Arc::new(InMemoryContentStore::new());
        let notifier = Arc::new(BusPresenceNotifier::new(Arc::clone(&event_bus)));

        let bart = Arc::new(BartService::with_config(
            Arc::clone(&content_store),
            notifier,
            config.bart.clone(),
        ));
        info!(
            "  BART service initialized (notify_failure_policy={})",
            config.bart.notify_failure_policy
        );

        Self {
            event_bus,
            content_store,
            bart,
            config,
        }
    }
}
