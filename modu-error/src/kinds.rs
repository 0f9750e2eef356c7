// Modu - modu-error
// Module: Modu Error Kinds
//
// Copyright (c) 2024 The Modu Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Typed error kinds carrying the detail of a failure.
//!
//! Kinds are what the producing code knows at the failure site. They
//! convert into the flat [`Error`](crate::Error) that crosses crate and
//! language boundaries.

use core::fmt;

/// A text buffer request could not be satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationError {
    /// Number of text bytes requested, terminator excluded
    pub requested: usize,
    /// Configured maximum when the request was refused by a limit
    pub limit: Option<usize>,
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.limit {
            Some(limit) => write!(
                f,
                "Text buffer of {} bytes exceeds limit of {} bytes",
                self.requested, limit
            ),
            None => write!(f, "Failed to allocate text buffer of {} bytes", self.requested),
        }
    }
}

/// An accessor was used against a value of a different variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrongVariantError {
    /// Type name the accessor reads
    pub expected: &'static str,
    /// Type name the value actually holds
    pub found:    &'static str,
}

impl fmt::Display for WrongVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected {} value, found {}", self.expected, self.found)
    }
}

/// A raw discriminant outside the known variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTagError(pub u8);

impl fmt::Display for InvalidTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid value tag: {}", self.0)
    }
}

/// Create an allocation error for an allocator failure
#[must_use]
pub const fn allocation_error(requested: usize) -> AllocationError {
    AllocationError { requested, limit: None }
}

/// Create an allocation error for a request refused by a size limit
#[must_use]
pub const fn capacity_error(requested: usize, limit: usize) -> AllocationError {
    AllocationError { requested, limit: Some(limit) }
}

/// Create a wrong variant error
#[must_use]
pub const fn wrong_variant(expected: &'static str, found: &'static str) -> WrongVariantError {
    WrongVariantError { expected, found }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(
            allocation_error(6).to_string(),
            "Failed to allocate text buffer of 6 bytes"
        );
        assert_eq!(
            capacity_error(6, 4).to_string(),
            "Text buffer of 6 bytes exceeds limit of 4 bytes"
        );
        assert_eq!(
            wrong_variant("float", "int").to_string(),
            "Expected float value, found int"
        );
        assert_eq!(InvalidTagError(9).to_string(), "Invalid value tag: 9");
    }
}
