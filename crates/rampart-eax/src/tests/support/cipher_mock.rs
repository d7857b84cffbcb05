// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block cipher doubles for exercising the EAX seam.

use core::cell::Cell;

use rampart_eax_core::{BLOCK_SIZE, Block, BlockCipher, BlockCipherError, Key};

use crate::Aes128;

/// AES-128 that counts forward invocations.
pub(crate) struct CountingCipher {
    inner: Aes128,
    calls: Cell<usize>,
}

impl CountingCipher {
    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }

    pub(crate) fn reset(&self) {
        self.calls.set(0);
    }
}

impl BlockCipher for CountingCipher {
    fn new(key: &Key) -> Result<Self, BlockCipherError> {
        Ok(Self {
            inner: Aes128::new(key)?,
            calls: Cell::new(0),
        })
    }

    fn encrypt_block(&self, block: &mut Block) {
        self.calls.set(self.calls.get() + 1);
        self.inner.encrypt_block(block);
    }
}

/// Keyed mixing function that is NOT a permutation.
///
/// Bits are combined with AND, so distinct inputs collide and no inverse
/// exists. EAX still round-trips over it.
pub(crate) struct LossyCipher {
    key: Key,
}

impl BlockCipher for LossyCipher {
    fn new(key: &Key) -> Result<Self, BlockCipherError> {
        Ok(Self { key: *key })
    }

    fn encrypt_block(&self, block: &mut Block) {
        let input = *block;
        for i in 0..BLOCK_SIZE {
            let mixed = input[i] & input[(i + 1) % BLOCK_SIZE];
            block[i] = mixed.rotate_left(3) ^ self.key[i] ^ (i as u8).wrapping_mul(0x1d);
        }
    }
}

/// Backend that refuses every key.
pub(crate) struct RejectingCipher;

impl RejectingCipher {
    pub(crate) const REASON: &'static str = "rejected by test backend";
}

impl BlockCipher for RejectingCipher {
    fn new(_key: &Key) -> Result<Self, BlockCipherError> {
        Err(BlockCipherError::new(Self::REASON))
    }

    fn encrypt_block(&self, _block: &mut Block) {
        unreachable!("RejectingCipher is never constructed")
    }
}
