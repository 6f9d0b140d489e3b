use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::domain::IconHash;
use crate::error::StoreError;
use crate::ports::outbound::ContentStore;

/// In-memory content store.
///
/// A single `RwLock` makes every `get`/`put` linearizable. Icons live until
/// the process exits.
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    data: RwLock<HashMap<IconHash, Vec<u8>>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct icons stored.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    pub fn contains(&self, hash: &IconHash) -> bool {
        self.data.read().contains_key(hash)
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn put(&self, hash: &IconHash, blob: &[u8]) -> Result<(), StoreError> {
        self.data.write().insert(*hash, blob.to_vec());
        Ok(())
    }

    async fn get(&self, hash: &IconHash) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.data.read().get(hash).cloned())
    }
}
