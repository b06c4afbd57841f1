//! Domain types for the fusion pipeline.
//!
//! - [`DerivationResult`]: the value object produced by one pipeline run

mod derivation;

pub use derivation::*;
