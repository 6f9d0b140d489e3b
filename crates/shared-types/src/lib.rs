//! # Shared Types Crate
//!
//! Entities that cross crate boundaries: the screen name a user signs on
//! with and the `Session` handed to every food-group service.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: services never define their own notion of
//!   a signed-on user.
//! - **Two Spellings**: a screen name keeps the user's display spelling; all
//!   comparisons go through the normalized ident form.

pub mod entities;

pub use entities::*;
