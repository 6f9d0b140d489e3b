//! # Core Entities
//!
//! - **Identity**: `ScreenName`, `IdentScreenName`
//! - **Sessions**: `Session`, `SessionId`

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// IDENTITY
// =============================================================================

/// A screen name as the user typed it ("Chatty Cathy").
///
/// Clients display this spelling; lookups use [`ScreenName::ident`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ScreenName(String);

impl ScreenName {
    /// Wrap a display screen name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The display spelling.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Normalized form: lowercase with spaces removed.
    #[must_use]
    pub fn ident(&self) -> IdentScreenName {
        IdentScreenName(
            self.0
                .chars()
                .filter(|c| *c != ' ')
                .flat_map(char::to_lowercase)
                .collect(),
        )
    }
}

impl fmt::Display for ScreenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScreenName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Normalized screen name ("chattycathy") used as a lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IdentScreenName(String);

impl IdentScreenName {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentScreenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// SESSIONS
// =============================================================================

/// Unique identifier for one sign-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Generate a fresh random session ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A signed-on user as seen by food-group services.
///
/// Session lifecycle is owned by the sign-on layer; services only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique ID of this sign-on.
    pub id: SessionId,
    /// Screen name the user signed on with.
    pub screen_name: ScreenName,
}

impl Session {
    /// Create a session with a freshly generated ID.
    pub fn new(screen_name: impl Into<ScreenName>) -> Self {
        Self {
            id: SessionId::generate(),
            screen_name: screen_name.into(),
        }
    }
}
