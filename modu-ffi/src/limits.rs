// Modu - modu-ffi
// Module: Text Limits
//
// Copyright (c) 2024 The Modu Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Platform-specific limits for text buffers.
//!
//! Text crossing the boundary is copied into a fresh buffer, so its size is
//! bounded per platform profile via feature flags:
//!
//! - `embedded-small`: MCU targets with ~64KB RAM
//! - `embedded-medium`: Embedded Linux with ~1MB RAM
//! - Default: Desktop/Server with ample memory
//!
//! A request above the limit is refused before anything is allocated and
//! reported as an allocation error.
//!
//! # Usage
//!
//! ```rust
//! use modu_ffi::{limits::TextLimits, BoundaryValue};
//!
//! let limits = TextLimits::with_max_bytes(4);
//! assert!(BoundaryValue::text_with_limits("hello", &limits).is_err());
//! ```

use modu_error::{kinds, Result};

/// Platform profile for embedded microcontrollers (~64KB RAM)
#[cfg(feature = "embedded-small")]
pub mod platform {
    /// Maximum text bytes per value, terminator excluded
    pub const MAX_TEXT_BYTES: usize = 4 * 1024; // 4 KiB
}

/// Platform profile for embedded Linux (~1MB RAM)
/// Note: embedded-small takes priority if both features are enabled
#[cfg(all(feature = "embedded-medium", not(feature = "embedded-small")))]
pub mod platform {
    /// Maximum text bytes per value, terminator excluded
    pub const MAX_TEXT_BYTES: usize = 64 * 1024; // 64 KiB
}

/// Platform profile for desktop/server (default - ample memory)
#[cfg(not(any(feature = "embedded-small", feature = "embedded-medium")))]
pub mod platform {
    /// Maximum text bytes per value, terminator excluded
    ///
    /// One byte below the largest allocation Rust permits, leaving room for
    /// the terminator.
    pub const MAX_TEXT_BYTES: usize = isize::MAX as usize - 1;
}

// Re-export platform limits at module level for convenience
pub use platform::*;

/// Runtime text size limit, never looser than the platform profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLimits {
    max_bytes: usize,
}

impl TextLimits {
    /// Limits of the compiled platform profile
    #[must_use]
    pub const fn platform() -> Self {
        Self {
            max_bytes: MAX_TEXT_BYTES,
        }
    }

    /// Limits with a tighter maximum; values above the platform maximum are
    /// clamped to it
    #[must_use]
    pub const fn with_max_bytes(max_bytes: usize) -> Self {
        let max_bytes = if max_bytes > MAX_TEXT_BYTES {
            MAX_TEXT_BYTES
        } else {
            max_bytes
        };
        Self { max_bytes }
    }

    /// Maximum text bytes, terminator excluded
    #[must_use]
    pub const fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Check a text length against the limit
    ///
    /// # Errors
    ///
    /// Returns a text capacity error if `len` exceeds the maximum.
    pub fn check(&self, len: usize) -> Result<()> {
        if len > self.max_bytes {
            return Err(kinds::capacity_error(len, self.max_bytes).into());
        }
        Ok(())
    }
}

impl Default for TextLimits {
    fn default() -> Self {
        Self::platform()
    }
}

/// Compile-time assertions to ensure limits are reasonable
mod assertions {
    use super::platform::MAX_TEXT_BYTES;

    // Terminator must still fit in a single allocation
    const _: () = assert!(MAX_TEXT_BYTES < isize::MAX as usize, "Text limit leaves no room for NUL");
    const _: () = assert!(MAX_TEXT_BYTES >= 256, "At least 256 text bytes required");
}
