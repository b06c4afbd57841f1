//! Error types for the fusion crates.
//!
//! The derivation stages themselves are total and never fail. These errors
//! only arise at the boundaries: range validation, checksum verification,
//! configuration, and I/O.

use thiserror::Error;

/// Result type alias using `FusionError`.
pub type Result<T> = std::result::Result<T, FusionError>;

/// Main error type for all fusion boundary operations.
#[derive(Debug, Error)]
pub enum FusionError {
    // ═══════════════════════════════════════════════════════════════════════════
    // VALIDATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Exploration range is empty or starts below 1.
    #[error("Invalid k range {start}..={end}: {reason}")]
    InvalidRange {
        /// First k of the requested range
        start: i64,
        /// Last k of the requested range
        end: i64,
        /// Why the range was rejected
        reason: String,
    },

    /// Unknown checksum algorithm name.
    #[error("Unsupported checksum algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // INTEGRITY ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// A computed checksum did not match the expected one.
    #[error("Checksum mismatch for {field}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        /// Which value was checked (`seed` or `tap_state`)
        field: &'static str,
        /// Caller-supplied digest
        expected: String,
        /// Computed digest
        actual: String,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // SERIALIZATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid hex encoding.
    #[error("Invalid hex encoding: {0}")]
    HexError(#[from] hex::FromHexError),

    // ═══════════════════════════════════════════════════════════════════════════
    // STORAGE ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// File I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FusionError {
    /// Returns true if this error was caused by bad caller input.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            FusionError::InvalidRange { .. }
                | FusionError::UnsupportedAlgorithm(_)
                | FusionError::ConfigError(_)
                | FusionError::HexError(_)
        )
    }

    /// Returns true if this error reports a failed integrity check.
    pub fn is_integrity_error(&self) -> bool {
        matches!(self, FusionError::ChecksumMismatch { .. })
    }
}
