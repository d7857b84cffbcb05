// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Counter mode with a 128-bit big-endian counter.

use zeroize::Zeroize;

use rampart_eax_core::{BLOCK_SIZE, Block, BlockCipher};
use rampart_util::xor_in_place;

/// XORs the keystream `E(ctr), E(ctr + 1), ..` into `data`.
///
/// Encryption and decryption are the same operation. The caller's counter
/// is copied, never advanced. Empty input performs no cipher call.
pub fn apply_keystream<C: BlockCipher>(cipher: &C, initial: &Block, data: &mut [u8]) {
    let mut counter = *initial;
    let mut keystream = [0u8; BLOCK_SIZE];

    for chunk in data.chunks_mut(BLOCK_SIZE) {
        keystream.copy_from_slice(&counter);
        cipher.encrypt_block(&mut keystream);
        xor_in_place(chunk, &keystream);
        increment_be(&mut counter);
    }

    counter.zeroize();
    keystream.zeroize();
}

/// Adds one to `counter` as a big-endian integer, wrapping at 2^128.
#[inline]
pub fn increment_be(counter: &mut Block) {
    *counter = u128::from_be_bytes(*counter).wrapping_add(1).to_be_bytes();
}
