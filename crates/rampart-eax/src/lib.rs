// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! EAX authenticated encryption with associated data.
//!
//! Three domain-separated OMAC (CMAC) invocations authenticate the nonce,
//! the header and the ciphertext; counter mode seeded by the nonce digest
//! encrypts. Only the forward direction of the block cipher is ever used.
//!
//! ```
//! let key = [0x42u8; 16];
//! let nonce = [0x24u8; 16];
//!
//! let sealed = rampart_eax::encrypt(&key, &nonce, b"header", b"secret", 16)
//!     .expect("Failed to encrypt(..)");
//! let plaintext = rampart_eax::decrypt(
//!     &key,
//!     &nonce,
//!     b"header",
//!     &sealed.ciphertext,
//!     sealed.tag.as_slice(),
//! )
//! .expect("Failed to decrypt(..)");
//!
//! assert_eq!(plaintext, b"secret");
//! ```
//!
//! ## Features
//!
//! - `trace`: emit intermediate values (subkeys, padded blocks, per-domain
//!   digests) as `tracing` events under the `rampart_eax` target. Off by
//!   default; tag comparison is never traced.
//!
//! References:
//! - Bellare, Rogaway, Wagner: "The EAX Mode of Operation" (FSE 2004)
//! - NIST SP 800-38B (CMAC)

#[cfg(test)]
mod tests;

mod aes128;
mod eax;
mod nonce;
mod oneshot;
mod trace;

pub mod ctr;
pub mod field;
pub mod omac;

pub use aes128::Aes128;
pub use eax::{Eax, Sealed, Tag};
pub use nonce::{Nonce, generate_nonce};
pub use oneshot::{ctr, decrypt, encrypt, omac, tagged_omac};

pub use rampart_eax_core::{
    BLOCK_SIZE, Block, BlockCipher, BlockCipherError, EaxError, KEY_SIZE, Key, MAX_TAG_SIZE,
    NONCE_SIZE,
};
