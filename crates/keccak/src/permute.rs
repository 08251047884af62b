//! Keccak-f[1600]: 24 rounds of θ, ρ+π, χ, ι over 25 little-endian lanes.
//!
//! Lane `(x, y)` lives at index `x + 5 * y`.

use crate::PLEN;

/// Number of rounds for the 1600-bit permutation.
pub const ROUNDS: usize = 24;

/// ι round constants.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// ρ rotation amounts, in the order the ρ+π chain visits lanes.
pub const RHO_OFFSETS: [u32; ROUNDS] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// π destinations: step `i` of the chain writes lane `PI_LANES[i]`.
pub const PI_LANES: [usize; ROUNDS] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// One round of Keccak-f[1600] with the ι constant of round `round`.
///
/// # Panics
///
/// Panics if `round >= ROUNDS`.
#[inline(always)]
pub fn keccak_round(state: &mut [u64; PLEN], round: usize) {
    theta(state);
    rho_pi(state);
    chi(state);
    state[0] ^= ROUND_CONSTANTS[round];
}

/// Full 24-round Keccak-f[1600], in place.
pub fn keccak_f1600(state: &mut [u64; PLEN]) {
    for round in 0..ROUNDS {
        keccak_round(state, round);
    }
}

#[inline(always)]
fn theta(state: &mut [u64; PLEN]) {
    let mut parity = [0u64; 5];
    for (x, c) in parity.iter_mut().enumerate() {
        *c = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
    }
    for x in 0..5 {
        let d = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
        for y in (0..PLEN).step_by(5) {
            state[y + x] ^= d;
        }
    }
}

/// ρ and π fused: walk the 24-lane cycle starting at lane 1, carrying one lane.
/// Lane 0 is a fixed point of both steps.
#[inline(always)]
fn rho_pi(state: &mut [u64; PLEN]) {
    let mut carry = state[1];
    for (&dst, &offset) in PI_LANES.iter().zip(RHO_OFFSETS.iter()) {
        let next = state[dst];
        // rotate_left is total over the shift amount, no shift-by-64 case.
        state[dst] = carry.rotate_left(offset);
        carry = next;
    }
}

#[inline(always)]
fn chi(state: &mut [u64; PLEN]) {
    for y in (0..PLEN).step_by(5) {
        let row = [
            state[y],
            state[y + 1],
            state[y + 2],
            state[y + 3],
            state[y + 4],
        ];
        for x in 0..5 {
            state[y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }
}
