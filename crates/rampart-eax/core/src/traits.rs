// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block cipher trait definitions.

use crate::consts::{BLOCK_SIZE, KEY_SIZE};
use crate::error::BlockCipherError;

/// One cipher block.
pub type Block = [u8; BLOCK_SIZE];

/// One cipher key.
pub type Key = [u8; KEY_SIZE];

/// Keyed 128-bit block permutation, forward direction only.
///
/// EAX never inverts the permutation: the MAC chains forward and counter
/// mode decrypts by regenerating the same keystream. Backends therefore
/// expose `encrypt_block` and nothing else.
pub trait BlockCipher: Sized {
    /// Expand `key` into a ready-to-use cipher.
    fn new(key: &Key) -> Result<Self, BlockCipherError>;

    /// Encrypt a single block in place.
    fn encrypt_block(&self, block: &mut Block);
}
