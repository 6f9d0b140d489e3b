//! # Integration Tests
//!
//! Cross-crate flows: upload and retrieval through the service container,
//! presence events observed on the shared bus.

pub mod flows;
