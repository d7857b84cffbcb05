// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod cipher_mock;

pub(crate) use cipher_mock::{CountingCipher, LossyCipher, RejectingCipher};

use rampart_eax_core::Block;

/// Decodes a 32-character hex string into a block.
pub(crate) fn block(hex: &str) -> Block {
    rampart_util::hex_to_bytes(hex)
        .try_into()
        .expect("Failed to convert hex into Block")
}
