// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rand_core::CryptoRng;

use rampart_eax_core::NONCE_SIZE;

/// Conventional EAX nonce.
pub type Nonce = [u8; NONCE_SIZE];

/// Draws a fresh nonce from a caller-supplied RNG.
///
/// The construction itself is deterministic; randomness only enters here,
/// through the RNG the caller passes in. Never reuse a nonce under one key.
pub fn generate_nonce<R: CryptoRng + ?Sized>(rng: &mut R) -> Nonce {
    let mut nonce = [0u8; NONCE_SIZE];
    rng.fill_bytes(&mut nonce);
    nonce
}
