//! Portable Keccak-f[1600] and the SHA3-256 sponge built on it.
//!
//! Single-shot only: the whole message is absorbed in one call and the
//! 32-byte digest is squeezed straight out of the first four lanes. State and
//! scratch block live on the stack; nothing allocates.

#![no_std]
#![deny(unsafe_code)]

mod permute;
mod sponge;

/// Lanes in the Keccak-f[1600] state.
pub const PLEN: usize = 25;

/// Bytes in the full permutation state.
pub const STATE_BYTES: usize = PLEN * 8;

/// SHA3-256 rate in bytes (1088 bits).
pub const RATE: usize = 136;

/// SHA3-256 capacity in bytes (512 bits).
pub const CAPACITY: usize = 64;

/// SHA3-256 digest length in bytes.
pub const DIGEST_BYTES: usize = 32;

/// Domain-separation suffix `01` plus the first padding bit.
const SHA3_PAD: u8 = 0x06;

const _: () = assert!(RATE + CAPACITY == STATE_BYTES);
const _: () = assert!(RATE.is_multiple_of(8));
// One permutation yields RATE bytes; the digest must fit without a second squeeze.
const _: () = assert!(DIGEST_BYTES <= RATE);

pub use permute::{ROUNDS, keccak_f1600, keccak_round};
pub use sponge::{sha3_256, sha3_256_into};
