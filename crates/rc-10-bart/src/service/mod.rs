//! Service Layer
//!
//! Orchestrates hashing, storage and presence for food group 0x10.

pub mod bart_service;


pub use bart_service::BartService;
