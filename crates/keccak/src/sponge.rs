//! SHA3-256 sponge: absorb rate-sized blocks, pad the tail, squeeze 32 bytes.

use zeroize::Zeroize;

use crate::{DIGEST_BYTES, PLEN, RATE, SHA3_PAD, permute::keccak_f1600};

#[inline]
fn absorb_block(state: &mut [u64; PLEN], block: &[u8; RATE]) {
    for (b, s) in block.chunks_exact(8).zip(state.iter_mut()) {
        *s ^= u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]);
    }
    keccak_f1600(state);
}

fn absorb_padded(state: &mut [u64; PLEN], input: &[u8]) {
    let (blocks, tail) = input.as_chunks::<RATE>();
    for block in blocks {
        absorb_block(state, block);
    }

    // Always runs, so an input that is a whole number of blocks still gets
    // an all-padding final block.
    let mut last = [0u8; RATE];
    last[..tail.len()].copy_from_slice(tail);
    last[tail.len()] = SHA3_PAD;
    last[RATE - 1] |= 0x80;
    absorb_block(state, &last);
    last.zeroize();
}

#[inline]
fn squeeze(state: &[u64; PLEN], out: &mut [u8; DIGEST_BYTES]) {
    for (chunk, word) in out.chunks_exact_mut(8).zip(state) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}

/// SHA3-256(input) -> 32 bytes.
#[inline]
pub fn sha3_256(input: impl AsRef<[u8]>) -> [u8; DIGEST_BYTES] {
    let mut state = [0u64; PLEN];
    absorb_padded(&mut state, input.as_ref());
    let mut out = [0u8; DIGEST_BYTES];
    squeeze(&state, &mut out);
    state.zeroize();
    out
}

/// SHA3-256(input) written into the first 32 bytes of `out`.
///
/// Bytes past the digest are left untouched.
///
/// # Panics
///
/// Panics if `out` is shorter than [`DIGEST_BYTES`].
pub fn sha3_256_into(input: impl AsRef<[u8]>, out: &mut [u8]) {
    assert!(
        out.len() >= DIGEST_BYTES,
        "sha3_256_into: output buffer holds {} bytes, need {DIGEST_BYTES}",
        out.len()
    );
    out[..DIGEST_BYTES].copy_from_slice(&sha3_256(input));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lanes_of(block: &[u8; RATE]) -> [u64; PLEN] {
        let mut state = [0u64; PLEN];
        for (b, s) in block.chunks_exact(8).zip(state.iter_mut()) {
            *s = u64::from_le_bytes(b.try_into().unwrap());
        }
        state
    }

    #[test]
    fn empty_input_is_single_padding_block() {
        let mut block = [0u8; RATE];
        block[0] = 0x06;
        block[RATE - 1] = 0x80;
        let mut expected = lanes_of(&block);
        keccak_f1600(&mut expected);

        let mut state = [0u64; PLEN];
        absorb_padded(&mut state, b"");
        assert_eq!(state, expected);
    }

    #[test]
    fn pad_bytes_merge_at_rate_minus_one() {
        let input = [0xAAu8; RATE - 1];
        let mut block = [0xAAu8; RATE];
        block[RATE - 1] = 0x86;
        let mut expected = lanes_of(&block);
        keccak_f1600(&mut expected);

        let mut state = [0u64; PLEN];
        absorb_padded(&mut state, &input);
        assert_eq!(state, expected);
    }

    #[test]
    fn full_block_gets_trailing_padding_block() {
        let input = [0x5Cu8; RATE];
        let mut expected = lanes_of(&input);
        keccak_f1600(&mut expected);
        let mut pad = [0u8; RATE];
        pad[0] = 0x06;
        pad[RATE - 1] = 0x80;
        for (s, p) in expected.iter_mut().zip(lanes_of(&pad)) {
            *s ^= p;
        }
        keccak_f1600(&mut expected);

        let mut state = [0u64; PLEN];
        absorb_padded(&mut state, &input);
        assert_eq!(state, expected);
    }

    #[test]
    fn squeeze_is_little_endian_lane_order() {
        let mut state = [0u64; PLEN];
        state[0] = 0x0706_0504_0302_0100;
        state[1] = 0x0f0e_0d0c_0b0a_0908;
        state[2] = 0x1716_1514_1312_1110;
        state[3] = 0x1f1e_1d1c_1b1a_1918;
        state[4] = u64::MAX;
        let mut out = [0u8; DIGEST_BYTES];
        squeeze(&state, &mut out);
        let expected: [u8; DIGEST_BYTES] = core::array::from_fn(|i| i as u8);
        assert_eq!(out, expected);
    }

    #[test]
    fn into_leaves_trailing_bytes() {
        let mut out = [0xEEu8; 40];
        sha3_256_into(b"abc", &mut out);
        assert_eq!(out[..DIGEST_BYTES], sha3_256(b"abc"));
        assert!(out[DIGEST_BYTES..].iter().all(|&b| b == 0xEE));
    }

    #[test]
    #[should_panic(expected = "need 32")]
    fn into_rejects_short_buffer() {
        let mut out = [0u8; 31];
        sha3_256_into(b"abc", &mut out);
    }
}
