//! CLI configuration from the environment and `.env`.

use fusion_core::constants::{DEFAULT_K, ENV_CHECKSUM_ALGORITHM, ENV_TAP_K};
use fusion_core::error::{FusionError, Result};
use fusion_tap::ChecksumAlgorithm;

/// Disables coloured output when set to any non-empty value.
const ENV_NO_COLOR: &str = "NO_COLOR";

/// Settings read from the environment.
///
/// `FUSION_TAP_K` and `FUSION_TAP_CHECKSUM` are kept as raw text and parsed
/// on first use, so a bad value only fails the subcommand that reads it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FusionConfig {
    /// Raw `FUSION_TAP_K`, if set
    pub tap_k: Option<String>,
    /// Raw `FUSION_TAP_CHECKSUM`, if set
    pub checksum_algorithm: Option<String>,
    /// Whether coloured output is allowed (`NO_COLOR` unset or empty)
    pub color: bool,
}

impl FusionConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            tap_k: lookup(ENV_TAP_K),
            checksum_algorithm: lookup(ENV_CHECKSUM_ALGORITHM),
            color: lookup(ENV_NO_COLOR).map_or(true, |v| v.is_empty()),
        }
    }

    /// Tap parameter used when no `-k` is given.
    pub fn default_k(&self) -> Result<i64> {
        match &self.tap_k {
            None => Ok(DEFAULT_K),
            Some(raw) => raw.trim().parse().map_err(|_| {
                FusionError::ConfigError(format!("{ENV_TAP_K} must be an integer, got {raw:?}"))
            }),
        }
    }

    /// Tap parameter for a command: the flag if given, else the configured default.
    pub fn resolve_k(&self, flag: Option<i64>) -> Result<i64> {
        flag.map_or_else(|| self.default_k(), Ok)
    }

    /// Checksum algorithm used when no `--algorithm` is given.
    pub fn default_checksum_algorithm(&self) -> Result<ChecksumAlgorithm> {
        self.checksum_algorithm
            .as_deref()
            .map_or(Ok(ChecksumAlgorithm::default()), str::parse)
    }
}
