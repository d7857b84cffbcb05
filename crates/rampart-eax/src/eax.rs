// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! EAX authenticated encryption (Bellare, Rogaway, Wagner).
//!
//! ```text
//! N' = OMAC_0(nonce)
//! H' = OMAC_1(header)
//! C  = CTR(N', plaintext)
//! C' = OMAC_2(C)
//! T  = (N' ^ H' ^ C')[..tag_len]
//! ```
//!
//! Decryption recomputes `T` over the received ciphertext, compares it in
//! constant time, and only then runs the keystream.

use zeroize::Zeroize;

use rampart_eax_core::{BLOCK_SIZE, Block, BlockCipher, EaxError, KEY_SIZE, Key, MAX_TAG_SIZE};
use rampart_util::{constant_time_eq, xor_in_place};

use crate::aes128::Aes128;
use crate::ctr::apply_keystream;
use crate::omac::{Domain, Omac, Subkeys};
use crate::trace::{trace_event, trace_value};

/// Authentication tag of 0 to 16 bytes.
#[derive(Clone, Copy)]
pub struct Tag {
    bytes: [u8; MAX_TAG_SIZE],
    len: usize,
}

impl Tag {
    fn truncate(full: &Block, len: usize) -> Self {
        let mut bytes = [0u8; MAX_TAG_SIZE];
        bytes[..len].copy_from_slice(&full[..len]);
        Self { bytes, len }
    }

    /// Tag bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Tag length in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` for zero-length tags (no authentication)
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl core::fmt::Debug for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Tag(")?;
        for b in self.as_slice() {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}

/// Output of [`Eax::encrypt`].
#[derive(Debug, Clone)]
pub struct Sealed {
    /// Same length as the plaintext
    pub ciphertext: Vec<u8>,
    /// Truncated authentication tag
    pub tag: Tag,
}

/// EAX over a keyed block cipher.
///
/// Holds the expanded cipher and its OMAC subkeys; a new key means a new
/// instance. Every method takes `&self`, so one instance may serve
/// concurrent callers.
pub struct Eax<C: BlockCipher = Aes128> {
    cipher: C,
    subkeys: Subkeys,
}

impl<C: BlockCipher> Eax<C> {
    /// Creates an instance from a key slice.
    ///
    /// # Errors
    ///
    /// [`EaxError::InvalidKeyLength`] unless `key` is exactly 16 bytes;
    /// [`EaxError::BlockCipher`] if the backend rejects the key.
    pub fn new(key: &[u8]) -> Result<Self, EaxError> {
        let key: &Key = key
            .try_into()
            .map_err(|_| EaxError::InvalidKeyLength { got: key.len() })?;

        Self::from_key(key)
    }

    /// Creates an instance from a fixed-size key.
    pub fn from_key(key: &Key) -> Result<Self, EaxError> {
        let cipher = C::new(key)?;
        Ok(Self::from_cipher(cipher))
    }

    /// Wraps an already keyed cipher.
    pub fn from_cipher(cipher: C) -> Self {
        let subkeys = Subkeys::derive(&cipher);
        Self { cipher, subkeys }
    }

    /// Underlying cipher
    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// OMAC bound to this instance's key.
    pub fn omac(&self) -> Omac<'_, C> {
        Omac::new(&self.cipher, &self.subkeys)
    }

    /// Key size in bytes
    pub const fn key_size(&self) -> usize {
        KEY_SIZE
    }

    /// Largest supported tag in bytes
    pub const fn max_tag_size(&self) -> usize {
        MAX_TAG_SIZE
    }

    /// Encrypts `data` in place and writes `tag.len()` tag bytes.
    ///
    /// # Errors
    ///
    /// [`EaxError::InvalidTagLength`] if `tag` is longer than 16 bytes.
    /// Nothing is written in that case.
    pub fn encrypt_in_place_detached(
        &self,
        nonce: &[u8],
        header: &[u8],
        data: &mut [u8],
        tag: &mut [u8],
    ) -> Result<(), EaxError> {
        check_tag_len(tag.len())?;

        let omac = self.omac();
        let mut n = omac.tagged_mac(Domain::Nonce, nonce);
        let mut h = omac.tagged_mac(Domain::Header, header);
        trace_value!("MAC(N)", n);
        trace_value!("MAC(H)", h);

        apply_keystream(&self.cipher, &n, data);

        let mut full = self.combine(&n, &h, data);
        tag.copy_from_slice(&full[..tag.len()]);

        full.zeroize();
        n.zeroize();
        h.zeroize();

        Ok(())
    }

    /// Verifies `tag` and decrypts `data` in place.
    ///
    /// The tag length is taken from `tag` itself. On failure `data` still
    /// holds the ciphertext: no keystream is applied before verification.
    ///
    /// # Errors
    ///
    /// [`EaxError::InvalidTagLength`] if `tag` is longer than 16 bytes,
    /// [`EaxError::AuthenticationFailed`] on tag mismatch.
    pub fn decrypt_in_place_detached(
        &self,
        nonce: &[u8],
        header: &[u8],
        data: &mut [u8],
        tag: &[u8],
    ) -> Result<(), EaxError> {
        check_tag_len(tag.len())?;

        let omac = self.omac();
        let mut n = omac.tagged_mac(Domain::Nonce, nonce);
        let mut h = omac.tagged_mac(Domain::Header, header);

        let mut expected = self.combine(&n, &h, data);
        let authentic = constant_time_eq(&expected[..tag.len()], tag);
        expected.zeroize();
        h.zeroize();

        if !authentic {
            n.zeroize();
            trace_event!("authentication failed");
            return Err(EaxError::AuthenticationFailed);
        }

        apply_keystream(&self.cipher, &n, data);
        n.zeroize();

        Ok(())
    }

    /// Encrypts `plaintext`, returning the ciphertext and a `tag_len`-byte tag.
    ///
    /// # Errors
    ///
    /// [`EaxError::InvalidTagLength`] if `tag_len > 16`.
    pub fn encrypt(
        &self,
        nonce: &[u8],
        header: &[u8],
        plaintext: &[u8],
        tag_len: usize,
    ) -> Result<Sealed, EaxError> {
        check_tag_len(tag_len)?;

        let mut ciphertext = plaintext.to_vec();
        let mut tag = [0u8; MAX_TAG_SIZE];
        self.encrypt_in_place_detached(nonce, header, &mut ciphertext, &mut tag[..tag_len])?;

        Ok(Sealed {
            ciphertext,
            tag: Tag::truncate(&tag, tag_len),
        })
    }

    /// Verifies and decrypts `ciphertext`.
    ///
    /// # Errors
    ///
    /// [`EaxError::InvalidTagLength`] if `tag` is longer than 16 bytes,
    /// [`EaxError::AuthenticationFailed`] on tag mismatch. No plaintext is
    /// returned on failure.
    pub fn decrypt(
        &self,
        nonce: &[u8],
        header: &[u8],
        ciphertext: &[u8],
        tag: &[u8],
    ) -> Result<Vec<u8>, EaxError> {
        let mut plaintext = ciphertext.to_vec();
        self.decrypt_in_place_detached(nonce, header, &mut plaintext, tag)?;
        Ok(plaintext)
    }

    /// `N' ^ H' ^ OMAC_2(ciphertext)`
    fn combine(&self, n: &Block, h: &Block, ciphertext: &[u8]) -> Block {
        let mut c = self.omac().tagged_mac(Domain::Ciphertext, ciphertext);
        trace_value!("MAC(C)", c);

        let mut full = [0u8; BLOCK_SIZE];
        xor_in_place(&mut full, n);
        xor_in_place(&mut full, h);
        xor_in_place(&mut full, &c);
        c.zeroize();

        full
    }
}

impl<C: BlockCipher> core::fmt::Debug for Eax<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Eax {{ [protected] }}")
    }
}

#[inline]
fn check_tag_len(len: usize) -> Result<(), EaxError> {
    if len > MAX_TAG_SIZE {
        return Err(EaxError::InvalidTagLength { got: len });
    }
    Ok(())
}
