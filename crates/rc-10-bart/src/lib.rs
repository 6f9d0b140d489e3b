//! # RC-10 BART (Buddy Art)
//!
//! Buddy-icon service for food group 0x10. Clients upload icon images, the
//! server files them under their MD5 digest, and other clients later fetch
//! them knowing only that digest.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `IconHash`: MD5 content address of an icon blob
//!   - `BartId`: icon descriptor (type, flags, hash) and the cleared-icon predicate
//!   - `BLANK_GIF`: the transparent placeholder served for cleared icons
//!   - `BartConfig`: notify-failure policy
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `BartApi`: Driving port (upload/retrieve)
//!   - `ContentStore`: Driven port (blob storage keyed by hash)
//!   - `PresenceNotifier`: Driven port (tell buddies the icon changed)
//!
//! - **Service Layer** (`service/`): `BartService` implements `BartApi`
//!
//! - **Adapters Layer** (`adapters/`)
//!   - `InMemoryContentStore`: concurrent in-process store
//!   - `BusPresenceNotifier`: publishes `BuddyIconChanged` on the shared bus
//!
//! ## Flows
//!
//! ```text
//! Upload:   data ──md5──→ put(hash, data) ──→ announce(session) ──→ UploadReply{Known, hash}
//! Retrieve: flags≠Known ──→ UnsupportedRequest
//!           clear-icon hash ──→ BLANK_GIF (store untouched)
//!           otherwise get(hash) ──→ DownloadReply{screen name, id, data} | NotFound
//! ```
//!
//! ## Invariants
//!
//! - Identical bytes always produce the identical hash and store key.
//! - Retrieval never consults the store for non-known flags or cleared icons.
//! - The service holds no per-request state; concurrency is the store's job.
//!
//! ## Usage Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use rc_10_bart::{BartApi, BartService, InMemoryContentStore, BartUploadQuery, BartType, SnacFrame};
//!
//! let store = Arc::new(InMemoryContentStore::new());
//! let service = BartService::new(store, notifier);
//!
//! let reply = service
//!     .upsert_item(&session, frame, BartUploadQuery::new(BartType::BUDDY_ICON, gif))
//!     .await?;
//! assert!(reply.body.code.is_success());
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-exports for convenience
pub use adapters::{BusPresenceNotifier, InMemoryContentStore};
pub use domain::{
    BartConfig, BartDownloadQuery, BartDownloadReply, BartFlags, BartId, BartReplyCode,
    BartType, BartUploadQuery, BartUploadReply, IconHash, NotifyFailurePolicy, SnacFrame,
    SnacMessage, BLANK_GIF, CLEAR_ICON_HASH,
};
pub use error::{BartError, NotifyError, StoreError};
pub use metrics::{BartMetrics, MetricsSnapshot};
pub use ports::{BartApi, ContentStore, PresenceNotifier};
pub use service::BartService;
