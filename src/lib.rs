//! `sha3sw` -- software SHA3-256 and a throughput driver for it.
//!
//! The permutation and sponge live in [`keccak`] (`no_std`, allocation-free).
//! This crate adds the [`Digest`] value type, the single-shot hash entry
//! points and the [`bench`] driver behind the `sha3-bench` binary.

#![deny(unsafe_code)]

pub mod bench;
mod digest;

pub use digest::Digest;
pub use sha3sw_keccak as keccak;
pub use sha3sw_keccak::{CAPACITY, DIGEST_BYTES, RATE};

/// SHA3-256 of `input`.
#[inline]
#[must_use]
pub fn sha3_256(input: impl AsRef<[u8]>) -> Digest {
    Digest(keccak::sha3_256(input))
}

/// SHA3-256 of `input` into the first [`DIGEST_BYTES`] of `out`.
///
/// # Panics
///
/// Panics if `out` is shorter than [`DIGEST_BYTES`].
#[inline]
pub fn sha3_256_into(input: impl AsRef<[u8]>, out: &mut [u8]) {
    keccak::sha3_256_into(input, out);
}

/// Errors from digest parsing and benchmark configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A benchmark parameter is out of range.
    InvalidConfig {
        /// Offending field.
        field: &'static str,
        /// Why it was rejected.
        reason: &'static str,
    },
    /// Digest text is not 64 hex characters.
    InvalidDigest(hex::FromHexError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config: `{field}` {reason}")
            }
            Self::InvalidDigest(e) => write!(f, "invalid digest: {e}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidDigest(e) => Some(e),
            Self::InvalidConfig { .. } => None,
        }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Self::InvalidDigest(e)
    }
}
