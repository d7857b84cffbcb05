// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error taxonomy for the EAX construction.

use thiserror::Error;

use crate::consts::{KEY_SIZE, MAX_TAG_SIZE};

/// Failure reported by a [`BlockCipher`](crate::BlockCipher) backend while
/// accepting key material.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("block cipher rejected key material: {reason}")]
pub struct BlockCipherError {
    /// Static description supplied by the backend
    pub reason: &'static str,
}

impl BlockCipherError {
    /// Creates a new backend error.
    pub const fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Errors that can occur during EAX operations.
///
/// All variants are deterministic: retrying with the same inputs yields the
/// same error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EaxError {
    /// Key is not exactly [`KEY_SIZE`] bytes
    #[error("invalid key length: expected {KEY_SIZE} bytes, got {got}")]
    InvalidKeyLength {
        /// Length that was supplied
        got: usize,
    },

    /// Requested tag length is outside `0..=MAX_TAG_SIZE`
    #[error("invalid tag length: expected at most {MAX_TAG_SIZE} bytes, got {got}")]
    InvalidTagLength {
        /// Length that was requested
        got: usize,
    },

    /// Tag verification failed (nonce, header, ciphertext or tag was modified)
    #[error("authentication failed: tag mismatch")]
    AuthenticationFailed,

    /// Propagated from the block cipher backend
    #[error(transparent)]
    BlockCipher(#[from] BlockCipherError),
}
