// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Optional intermediate-value tracing.
//!
//! With the `trace` feature, intermediate blocks are emitted as
//! `tracing` events under the `rampart_eax` target. Without it every
//! macro here expands to nothing and the arguments are never evaluated.

#[cfg(feature = "trace")]
pub(crate) struct Hex<'a>(pub(crate) &'a [u8]);

#[cfg(feature = "trace")]
impl core::fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for b in self.0 {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

/// Emits one named intermediate value.
#[cfg(feature = "trace")]
macro_rules! trace_value {
    ($stage:expr, $bytes:expr) => {
        tracing::trace!(
            target: "rampart_eax",
            stage = $stage,
            len = $bytes.len(),
            value = %$crate::trace::Hex(&$bytes[..])
        )
    };
}

#[cfg(not(feature = "trace"))]
macro_rules! trace_value {
    ($stage:expr, $bytes:expr) => {};
}

/// Emits a data-free event.
#[cfg(feature = "trace")]
macro_rules! trace_event {
    ($($arg:tt)+) => {
        tracing::debug!(target: "rampart_eax", $($arg)+)
    };
}

#[cfg(not(feature = "trace"))]
macro_rules! trace_event {
    ($($arg:tt)+) => {};
}

pub(crate) use trace_event;
pub(crate) use trace_value;
