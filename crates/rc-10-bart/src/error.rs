//! Error types for the BART subsystem

use thiserror::Error;

use crate::domain::BartFlags;

/// Errors surfaced by `BartApi` operations.
///
/// None of these are retried inside the service; every one fails the request
/// and no reply is produced.
#[derive(Debug, Error)]
pub enum BartError {
    /// The content store could not persist or read a blob.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// Retrieval asked for something other than a known icon.
    #[error("Can only satisfy requests for known icons (flags {flags})")]
    UnsupportedRequest { flags: BartFlags },

    /// No icon is registered under the requested hash.
    #[error("Icon not found: {hash}")]
    NotFound { hash: String },

    /// The icon was stored but buddies could not be told about it.
    #[error("Presence notification failed: {0}")]
    Notify(#[from] NotifyError),
}

/// Errors from content store backends
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),
}

/// Errors from presence notifiers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("Buddy list lookup failed: {0}")]
    BuddyListUnavailable(String),

    #[error("Relay failed: {0}")]
    RelayFailed(String),
}
