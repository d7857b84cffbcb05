// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Key-slice entry points over AES-128.
//!
//! Each call expands the key afresh. Hold an [`Eax`] to amortize key
//! setup across messages.

use rampart_eax_core::{Block, EaxError};

use crate::aes128::Aes128;
use crate::ctr::apply_keystream;
use crate::eax::{Eax, Sealed};
use crate::omac::Domain;

/// EAX encryption: returns the ciphertext and a `tag_len`-byte tag.
///
/// # Errors
///
/// [`EaxError::InvalidKeyLength`] if `key` is not 16 bytes,
/// [`EaxError::InvalidTagLength`] if `tag_len > 16`.
pub fn encrypt(
    key: &[u8],
    nonce: &[u8],
    header: &[u8],
    plaintext: &[u8],
    tag_len: usize,
) -> Result<Sealed, EaxError> {
    Eax::<Aes128>::new(key)?.encrypt(nonce, header, plaintext, tag_len)
}

/// EAX decryption with constant-time tag verification.
///
/// # Errors
///
/// [`EaxError::InvalidKeyLength`], [`EaxError::InvalidTagLength`], or
/// [`EaxError::AuthenticationFailed`] when any input was altered.
pub fn decrypt(
    key: &[u8],
    nonce: &[u8],
    header: &[u8],
    ciphertext: &[u8],
    tag: &[u8],
) -> Result<Vec<u8>, EaxError> {
    Eax::<Aes128>::new(key)?.decrypt(nonce, header, ciphertext, tag)
}

/// OMAC1 (CMAC) of `message` under AES-128.
pub fn omac(key: &[u8], message: &[u8]) -> Result<Block, EaxError> {
    Ok(Eax::<Aes128>::new(key)?.omac().mac(message))
}

/// OMAC of `prefix(domain) || message` under AES-128.
pub fn tagged_omac(key: &[u8], domain: Domain, message: &[u8]) -> Result<Block, EaxError> {
    Ok(Eax::<Aes128>::new(key)?.omac().tagged_mac(domain, message))
}

/// AES-128 counter mode starting at `initial`; returns a new buffer.
pub fn ctr(key: &[u8], initial: &Block, data: &[u8]) -> Result<Vec<u8>, EaxError> {
    let eax = Eax::<Aes128>::new(key)?;
    let mut out = data.to_vec();
    apply_keystream(eax.cipher(), initial, &mut out);
    Ok(out)
}
