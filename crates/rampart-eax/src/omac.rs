// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! OMAC1 (CMAC) and its domain-tagged variant.
//!
//! The input is split into 16-byte blocks and chained through the cipher
//! starting from an all-zero digest. Before the last block is absorbed it is
//! masked with one of two subkeys:
//!
//! - input length a positive multiple of 16: last block used as-is, masked with `B = 2L`
//! - otherwise: last block padded with `0x80 || 0x00..`, masked with `P = 4L`
//!
//! where `L = E_K(0^128)`.

use zeroize::{Zeroize, ZeroizeOnDrop};

use rampart_eax_core::{BLOCK_SIZE, Block, BlockCipher};
use rampart_util::xor_in_place;

use crate::field::dbl;
use crate::trace::trace_value;

/// First byte of the padding appended to incomplete final blocks
const PAD_MARKER: u8 = 0x80;

/// One-byte domain tags separating the three OMAC invocations of EAX.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Domain {
    /// MAC over the nonce; its digest seeds the counter
    Nonce = 0,
    /// MAC over the associated data
    Header = 1,
    /// MAC over the ciphertext
    Ciphertext = 2,
}

impl Domain {
    /// Prefix block: fifteen zero bytes followed by the tag byte.
    pub fn prefix(self) -> Block {
        let mut prefix = [0u8; BLOCK_SIZE];
        prefix[BLOCK_SIZE - 1] = self as u8;
        prefix
    }
}

/// Subkeys `L`, `B = 2L`, `P = 4L`, derived from the cipher alone.
///
/// Deriving once per key and reusing is equivalent to recomputing on every
/// call. Wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Subkeys {
    l: Block,
    b: Block,
    p: Block,
}

impl Subkeys {
    /// Derives the subkeys for `cipher`.
    pub fn derive<C: BlockCipher>(cipher: &C) -> Self {
        let mut l = [0u8; BLOCK_SIZE];
        cipher.encrypt_block(&mut l);
        let b = dbl(&l);
        let p = dbl(&b);

        trace_value!("L", l);
        trace_value!("B", b);
        trace_value!("P", p);

        Self { l, b, p }
    }

    /// `L = E_K(0^128)`
    pub fn l(&self) -> &Block {
        &self.l
    }

    /// Mask for unpadded final blocks
    pub fn b(&self) -> &Block {
        &self.b
    }

    /// Mask for padded final blocks
    pub fn p(&self) -> &Block {
        &self.p
    }
}

impl core::fmt::Debug for Subkeys {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Subkeys {{ [protected] }}")
    }
}

/// OMAC over a borrowed cipher and its cached subkeys.
pub struct Omac<'a, C> {
    cipher: &'a C,
    subkeys: &'a Subkeys,
}

impl<'a, C: BlockCipher> Omac<'a, C> {
    /// Binds a cipher to subkeys previously derived from it.
    pub fn new(cipher: &'a C, subkeys: &'a Subkeys) -> Self {
        Self { cipher, subkeys }
    }

    /// Plain OMAC over `message`.
    pub fn mac(&self, message: &[u8]) -> Block {
        let mut digest = [0u8; BLOCK_SIZE];
        self.absorb_with_final(&mut digest, message);
        digest
    }

    /// OMAC over `prefix(domain) || message`.
    ///
    /// The prefix block is chained directly, so no concatenated copy of the
    /// message is made.
    pub fn tagged_mac(&self, domain: Domain, message: &[u8]) -> Block {
        let mut digest = [0u8; BLOCK_SIZE];
        let mut prefix = domain.prefix();

        if message.is_empty() {
            // Total length is exactly one block: the prefix is the final block.
            self.finalize(&mut digest, &prefix);
        } else {
            self.absorb(&mut digest, &prefix);
            self.absorb_with_final(&mut digest, message);
        }

        prefix.zeroize();
        digest
    }

    /// Chains every block of `message`, treating its last block as final.
    ///
    /// An empty `message` yields a single padded block.
    fn absorb_with_final(&self, digest: &mut Block, message: &[u8]) {
        let last_len = if message.is_empty() {
            0
        } else {
            (message.len() - 1) % BLOCK_SIZE + 1
        };
        let (body, last) = message.split_at(message.len() - last_len);

        for chunk in body.chunks_exact(BLOCK_SIZE) {
            self.absorb(digest, chunk);
        }

        self.finalize(digest, last);
    }

    #[inline]
    fn absorb(&self, digest: &mut Block, block: &[u8]) {
        xor_in_place(digest, block);
        self.cipher.encrypt_block(digest);
    }

    /// Masks and absorbs the final (possibly partial) block.
    fn finalize(&self, digest: &mut Block, last: &[u8]) {
        debug_assert!(last.len() <= BLOCK_SIZE);

        let mut block = [0u8; BLOCK_SIZE];
        block[..last.len()].copy_from_slice(last);

        let mask = if last.len() == BLOCK_SIZE {
            self.subkeys.b()
        } else {
            block[last.len()] = PAD_MARKER;
            self.subkeys.p()
        };
        trace_value!("PADDED", block);

        xor_in_place(&mut block, mask);
        self.absorb(digest, &block);
        block.zeroize();

        trace_value!("C_m", digest);
    }
}
