// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core traits, constants and error types shared by EAX backends.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod error;
mod traits;

pub use consts::{BLOCK_SIZE, KEY_SIZE, MAX_TAG_SIZE, NONCE_SIZE};
pub use error::{BlockCipherError, EaxError};
pub use traits::{Block, BlockCipher, Key};
