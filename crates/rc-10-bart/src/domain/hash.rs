//! Content addressing for icon blobs.
//!
//! Legacy clients identify icons by MD5, so that is the digest used here.
//! It is a storage key only and carries no security weight.

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Length of an icon hash in bytes.
pub const ICON_HASH_LEN: usize = 16;

/// MD5 digest of an icon blob, used as its store key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IconHash([u8; ICON_HASH_LEN]);

/// A wire hash had the wrong length to be an icon hash.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Icon hash must be {expected} bytes, got {actual}", expected = ICON_HASH_LEN)]
pub struct InvalidHashLength {
    pub actual: usize,
}

impl IconHash {
    /// Hash an icon blob. Deterministic: equal bytes give equal hashes.
    #[must_use]
    pub fn digest(blob: &[u8]) -> Self {
        Self(Md5::digest(blob).into())
    }

    #[must_use]
    pub const fn from_bytes(bytes: [u8; ICON_HASH_LEN]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; ICON_HASH_LEN] {
        &self.0
    }

    /// Lowercase hex, the form used in logs.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl TryFrom<&[u8]> for IconHash {
    type Error = InvalidHashLength;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; ICON_HASH_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| InvalidHashLength {
                actual: bytes.len(),
            })
    }
}

impl From<IconHash> for Vec<u8> {
    fn from(hash: IconHash) -> Self {
        hash.0.to_vec()
    }
}

impl fmt::Display for IconHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for IconHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IconHash({})", self.to_hex())
    }
}
