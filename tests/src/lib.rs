//! # Retro-Chat Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # criterion benchmarks (hashing, store, service)
//! └── src/
//!     └── integration/  # BART service wired to the bus and runtime
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p rc-tests
//! cargo bench -p rc-tests
//! ```

pub mod integration;
