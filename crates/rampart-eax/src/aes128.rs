// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-128 backend.

use aes::cipher::{BlockEncrypt, KeyInit, generic_array::GenericArray};

use rampart_eax_core::{Block, BlockCipher, BlockCipherError, Key};

/// AES-128 restricted to the forward direction.
///
/// Round keys are wiped on drop by the `aes` crate.
#[derive(Clone)]
pub struct Aes128 {
    inner: aes::Aes128,
}

impl BlockCipher for Aes128 {
    fn new(key: &Key) -> Result<Self, BlockCipherError> {
        Ok(Self {
            inner: aes::Aes128::new(GenericArray::from_slice(key)),
        })
    }

    #[inline]
    fn encrypt_block(&self, block: &mut Block) {
        self.inner.encrypt_block(GenericArray::from_mut_slice(block));
    }
}

impl core::fmt::Debug for Aes128 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Aes128 {{ [protected] }}")
    }
}
