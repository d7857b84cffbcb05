// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Doubling in GF(2^128) with the polynomial x^128 + x^7 + x^2 + x + 1.

use rampart_eax_core::Block;

/// Low byte of the reduction polynomial (binary 10000111)
const R128: u8 = 0x87;

/// Multiplies `block` by x, treating it as a big-endian 128-bit integer.
///
/// The reduction is applied through a mask so the running time does not
/// depend on the top bit of the input.
pub fn dbl(block: &Block) -> Block {
    let mut out = [0u8; 16];
    let mut carry = 0u8;

    for i in (0..16).rev() {
        out[i] = (block[i] << 1) | carry;
        carry = block[i] >> 7;
    }

    // carry now holds the input's most significant bit
    out[15] ^= R128 & carry.wrapping_neg();
    out
}
