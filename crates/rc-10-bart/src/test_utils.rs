//! Test doubles for the BART driven ports.

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::entities::{ScreenName, Session};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::adapters::InMemoryContentStore;
use crate::domain::{subgroups, IconHash, SnacFrame, FOOD_GROUP_BART};
use crate::error::{NotifyError, StoreError};
use crate::ports::outbound::{ContentStore, PresenceNotifier};

pub fn session(screen_name: &str) -> Session {
    Session::new(screen_name)
}

pub fn upload_frame(request_id: u32) -> SnacFrame {
    SnacFrame::new(FOOD_GROUP_BART, subgroups::UPLOAD_QUERY, request_id)
}

pub fn download_frame(request_id: u32) -> SnacFrame {
    SnacFrame::new(FOOD_GROUP_BART, subgroups::DOWNLOAD_QUERY, request_id)
}

/// In-memory store that counts calls and can be told to fail.
#[derive(Default)]
pub struct CountingStore {
    inner: InMemoryContentStore,
    puts: AtomicUsize,
    gets: AtomicUsize,
    fail_puts: AtomicBool,
    fail_gets: AtomicBool,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_puts() -> Self {
        let store = Self::default();
        store.fail_puts.store(true, Ordering::SeqCst);
        store
    }

    pub fn failing_gets() -> Self {
        let store = Self::default();
        store.fail_gets.store(true, Ordering::SeqCst);
        store
    }

    /// Seed a blob without counting it as a call.
    pub async fn seed(&self, hash: &IconHash, blob: &[u8]) {
        let _ = self.inner.put(hash, blob).await;
    }

    pub fn put_calls(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.put_calls() + self.get_calls()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[async_trait]
impl ContentStore for CountingStore {
    async fn put(&self, hash: &IconHash, blob: &[u8]) -> Result<(), StoreError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailed("injected put failure".into()));
        }
        self.inner.put(hash, blob).await
    }

    async fn get(&self, hash: &IconHash) -> Result<Option<Vec<u8>>, StoreError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.fail_gets.load(Ordering::SeqCst) {
            return Err(StoreError::ReadFailed("injected get failure".into()));
        }
        self.inner.get(hash).await
    }
}

/// Store whose calls never complete, for cancellation tests.
#[derive(Default)]
pub struct HangingStore {
    started: AtomicUsize,
    finished: AtomicUsize,
}

impl HangingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }

    async fn hang(&self) {
        self.started.fetch_add(1, Ordering::SeqCst);
        std::future::pending::<()>().await;
        self.finished.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ContentStore for HangingStore {
    async fn put(&self, _hash: &IconHash, _blob: &[u8]) -> Result<(), StoreError> {
        self.hang().await;
        Ok(())
    }

    async fn get(&self, _hash: &IconHash) -> Result<Option<Vec<u8>>, StoreError> {
        self.hang().await;
        Ok(None)
    }
}

/// Notifier whose announcements never complete, for cancellation tests.
#[derive(Default)]
pub struct HangingNotifier {
    started: AtomicUsize,
    finished: AtomicUsize,
}

impl HangingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PresenceNotifier for HangingNotifier {
    async fn announce(&self, _session: &Session) -> Result<(), NotifyError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        std::future::pending::<()>().await;
        self.finished.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Notifier that records who was announced and can be told to fail.
#[derive(Default)]
pub struct RecordingNotifier {
    announced: Mutex<Vec<ScreenName>>,
    fail: AtomicBool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let notifier = Self::default();
        notifier.fail.store(true, Ordering::SeqCst);
        notifier
    }

    pub fn announced(&self) -> Vec<ScreenName> {
        self.announced.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.announced.lock().len()
    }
}

#[async_trait]
impl PresenceNotifier for RecordingNotifier {
    async fn announce(&self, session: &Session) -> Result<(), NotifyError> {
        self.announced.lock().push(session.screen_name.clone());
        if self.fail.load(Ordering::SeqCst) {
            return Err(NotifyError::RelayFailed("injected notify failure".into()));
        }
        Ok(())
    }
}
