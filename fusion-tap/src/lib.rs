//! # Fusion Tap
//!
//! The Binary Fusion Tap derivation pipeline.
//!
//! This crate provides:
//!
//! - **Seed**: concatenated-sequence seeding (`1..=k` read as one numeral)
//! - **Tap**: the 8-fold heartbeat shift plus the `k` phase offset
//! - **Overflow**: gated ZPE overflow extraction
//! - **Binary**: minimal MSB-first binary rendering
//! - **Checksum**: SHA-2 integrity digests of derived values
//! - **Pipeline**: orchestration and the text report
//!
//! ## Arithmetic
//!
//! Everything is native `u64` with wraparound. For `k` above
//! [`MAX_EXACT_K`](fusion_core::MAX_EXACT_K) the seed and tap state are the
//! low 64 bits of the true values. Nothing panics and nothing saturates.
//!
//! ## Example
//!
//! ```rust
//! use fusion_tap::{derive, render_report};
//!
//! let result = derive(11);
//! assert_eq!(result.seed_value(), 1234567891011);
//! assert_eq!(result.zpe_overflow(), 59);
//!
//! let report = render_report(&result);
//! assert!(report.starts_with("K Parameter: 11\n"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod binary;
pub mod checksum;
pub mod overflow;
pub mod pipeline;
pub mod seed;
pub mod tap;

// Re-export main functions at crate root
pub use binary::{bit_length, to_binary, to_prefixed_binary};
pub use checksum::{checksum, verify_integrity, ChecksumAlgorithm, IntegrityReport};
pub use overflow::extract_overflow;
pub use pipeline::{derive, derive_range, render_report, DerivationView, Report};
pub use seed::{checked_seed, concat_numeral, generate_seed, is_exact, numeral_len, SeedSequence};
pub use tap::{heartbeat, tap_transform};
