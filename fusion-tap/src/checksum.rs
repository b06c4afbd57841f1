//! SHA-2 integrity checksums for derived values.
//!
//! A value is hashed as its minimal big-endian byte string: no leading zero
//! bytes, and `0` hashes as the empty string.
//!
//! ```text
//! 1234567891011  ->  01 1f 71 fb 08 43  ->  SHA-256(...)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha512};

use fusion_core::error::{FusionError, Result};

/// Digest used for integrity checksums.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumAlgorithm {
    /// SHA-256 (32-byte digest)
    #[default]
    Sha256,
    /// SHA-512 (64-byte digest)
    Sha512,
}

impl ChecksumAlgorithm {
    /// Digest length in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            ChecksumAlgorithm::Sha256 => 32,
            ChecksumAlgorithm::Sha512 => 64,
        }
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChecksumAlgorithm::Sha256 => write!(f, "sha256"),
            ChecksumAlgorithm::Sha512 => write!(f, "sha512"),
        }
    }
}

impl FromStr for ChecksumAlgorithm {
    type Err = FusionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(ChecksumAlgorithm::Sha256),
            "sha512" | "sha-512" => Ok(ChecksumAlgorithm::Sha512),
            _ => Err(FusionError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Minimal big-endian encoding of `value`.
pub fn to_minimal_be_bytes(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let skip = (value.leading_zeros() / 8) as usize;
    bytes[skip..].to_vec()
}

/// Hex-encoded checksum of `value`.
pub fn checksum(value: u64, algorithm: ChecksumAlgorithm) -> String {
    let bytes = to_minimal_be_bytes(value);
    match algorithm {
        ChecksumAlgorithm::Sha256 => hex::encode(Sha256::digest(&bytes)),
        ChecksumAlgorithm::Sha512 => hex::encode(Sha512::digest(&bytes)),
    }
}

/// Outcome of checking a seed and tap state against expected checksums.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityReport {
    /// Digest algorithm used for both values
    pub algorithm: ChecksumAlgorithm,
    /// Computed checksum of the seed
    pub seed_checksum: String,
    /// Computed checksum of the tap state
    pub tap_checksum: String,
    /// Expected seed checksum, if one was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_seed: Option<String>,
    /// Expected tap-state checksum, if one was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_tap: Option<String>,
    /// False only when an expected seed checksum was supplied and differs
    pub seed_valid: bool,
    /// False only when an expected tap checksum was supplied and differs
    pub tap_valid: bool,
}

impl IntegrityReport {
    /// True when every supplied expectation matched.
    pub fn is_valid(&self) -> bool {
        self.seed_valid && self.tap_valid
    }

    /// Converts the first failed check into [`FusionError::ChecksumMismatch`].
    pub fn ensure_valid(&self) -> Result<()> {
        if let (false, Some(expected)) = (self.seed_valid, &self.expected_seed) {
            return Err(FusionError::ChecksumMismatch {
                field: "seed",
                expected: expected.clone(),
                actual: self.seed_checksum.clone(),
            });
        }
        if let (false, Some(expected)) = (self.tap_valid, &self.expected_tap) {
            return Err(FusionError::ChecksumMismatch {
                field: "tap_state",
                expected: expected.clone(),
                actual: self.tap_checksum.clone(),
            });
        }
        Ok(())
    }
}

/// Computes checksums of `seed` and `tap_state` and compares them against
/// optional expectations.
///
/// Expectations are compared case-insensitively, and an empty or blank one is
/// treated as not supplied. An expectation that is not
/// valid hex is rejected with [`FusionError::HexError`] rather than reported
/// as a mismatch.
pub fn verify_integrity(
    seed: u64,
    tap_state: u64,
    algorithm: ChecksumAlgorithm,
    expected_seed: Option<&str>,
    expected_tap: Option<&str>,
) -> Result<IntegrityReport> {
    let expected_seed = normalize_expected(expected_seed)?;
    let expected_tap = normalize_expected(expected_tap)?;

    let seed_checksum = checksum(seed, algorithm);
    let tap_checksum = checksum(tap_state, algorithm);

    let seed_valid = expected_seed.as_deref().map_or(true, |e| e == seed_checksum);
    let tap_valid = expected_tap.as_deref().map_or(true, |e| e == tap_checksum);

    Ok(IntegrityReport {
        algorithm,
        seed_checksum,
        tap_checksum,
        expected_seed,
        expected_tap,
        seed_valid,
        tap_valid,
    })
}

/// Blank expectations count as absent.
fn normalize_expected(expected: Option<&str>) -> Result<Option<String>> {
    let Some(expected) = expected.map(str::trim).filter(|e| !e.is_empty()) else {
        return Ok(None);
    };
    let expected = expected.to_ascii_lowercase();
    hex::decode(&expected)?;
    Ok(Some(expected))
}
