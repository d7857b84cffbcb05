// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Block size of the underlying permutation in bytes
pub const BLOCK_SIZE: usize = 16;

/// Key size in bytes
pub const KEY_SIZE: usize = 16;

/// Largest tag the construction can emit (one full block)
pub const MAX_TAG_SIZE: usize = BLOCK_SIZE;

/// Conventional nonce size in bytes. Nonces of any length are accepted.
pub const NONCE_SIZE: usize = BLOCK_SIZE;
