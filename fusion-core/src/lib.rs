//! # Fusion Core
//!
//! Core types, errors, and constants for the Binary Fusion Tap derivation
//! pipeline.
//!
//! This crate provides the foundational building blocks used by all other
//! fusion crates:
//!
//! - **Types**: the immutable [`DerivationResult`] value object
//! - **Errors**: boundary error types with context
//! - **Constants**: fixed design constants of the pipeline
//!
//! ## Example
//!
//! ```rust
//! use fusion_core::{DerivationResult, DEFAULT_K};
//!
//! let result = DerivationResult::new(DEFAULT_K, 1234567891011, 9876543128099, 59);
//! let json = serde_json::to_string(&result).unwrap();
//! assert!(json.contains("\"zpe_overflow\":59"));
//! ```
//!
//! ## Not a security primitive
//!
//! The pipeline is a deterministic numeric transform. It has no entropy source
//! and no resistance properties, and must not be used for key material.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{FusionError, Result};
pub use types::*;
