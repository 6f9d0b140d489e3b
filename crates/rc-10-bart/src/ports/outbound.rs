//! Outbound Ports (Driven Ports)
//!
//! Dependencies the BART service needs from the host server.

use async_trait::async_trait;
use shared_types::entities::Session;

use crate::domain::IconHash;
use crate::error::{NotifyError, StoreError};

/// Blob storage keyed by content hash (Driven Port)
///
/// Implementations must tolerate concurrent `get`/`put` on the same and
/// different keys; per-key linearizability is enough. Eviction, if any, is
/// the implementation's business.
///
/// Production: whatever the server persists icons in
/// Testing: `InMemoryContentStore`, `test_utils::CountingStore`
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Store `blob` under `hash`, overwriting any previous value.
    async fn put(&self, hash: &IconHash, blob: &[u8]) -> Result<(), StoreError>;

    /// Fetch the blob stored under `hash`, `None` if there is none.
    async fn get(&self, hash: &IconHash) -> Result<Option<Vec<u8>>, StoreError>;
}

/// Announces a user's icon change to their online buddies (Driven Port)
///
/// Who counts as a buddy and how the arrival notice is framed is up to the
/// implementation.
#[async_trait]
pub trait PresenceNotifier: Send + Sync {
    async fn announce(&self, session: &Session) -> Result<(), NotifyError>;
}
