// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-level helpers shared by rampart crates.
//!
//! - [`constant_time_eq`]: tag comparison whose timing does not depend on
//!   where the first differing byte sits
//! - [`xor_in_place`] / [`xor_into`]: byte-wise XOR over equal-length prefixes
//! - [`hex_to_bytes`]: test vector decoding (`test-utils` feature)

#![no_std]

#[cfg(feature = "test-utils")]
extern crate alloc;

use subtle::ConstantTimeEq;

/// Compares two byte slices in constant time.
///
/// Slices of different length compare unequal; the length itself is not
/// treated as secret. For equal lengths every byte is visited regardless of
/// mismatches.
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    bool::from(a.ct_eq(b))
}

/// XORs `src` into `dst` over their common prefix.
#[inline]
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= *s;
    }
}

/// Writes `a XOR b` into `out` over the shortest of the three lengths.
#[inline]
pub fn xor_into(out: &mut [u8], a: &[u8], b: &[u8]) {
    for ((o, x), y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
        *o = x ^ y;
    }
}

/// Decodes a hex string into bytes.
///
/// # Panics
///
/// Panics on odd length or on non-hex characters. Intended for test vectors.
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> alloc::vec::Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string must have even length");

    hex.as_bytes()
        .chunks(2)
        .map(|pair| {
            let hi = nibble(pair[0]);
            let lo = nibble(pair[1]);
            (hi << 4) | lo
        })
        .collect()
}

#[cfg(feature = "test-utils")]
fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex character: {:?}", c as char),
    }
}
