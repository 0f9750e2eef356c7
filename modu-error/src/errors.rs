// Modu - modu-error
// Module: Modu Error Types
//
// Copyright (c) 2024 The Modu Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unified error type for boundary value operations
//!
//! The error is `Copy` and carries only static data so it can be returned
//! from `no_std` code and mapped onto a C status without allocation.

use core::fmt;

use crate::{codes, kinds};

/// `Error` categories for boundary operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Resource errors (buffer allocation, limits)
    Resource  = 3,
    /// Parameter errors (null pointers, invalid arguments)
    Parameter = 4,
    /// Type errors (variant mismatches, unknown tags)
    Type      = 6,
}

/// Base trait for all error types
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// Modu `Error` type
///
/// Categorized error with a numeric code and a static message.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Allocation failed error
    pub const ALLOCATION_FAILED: Self = Self::new(
        ErrorCategory::Resource,
        codes::ALLOCATION_FAILED,
        "Failed to allocate text buffer",
    );
    /// Text capacity exceeded error
    pub const TEXT_CAPACITY_EXCEEDED: Self = Self::new(
        ErrorCategory::Resource,
        codes::TEXT_CAPACITY_EXCEEDED,
        "Text buffer exceeds configured limit",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Create an allocation error
    #[must_use]
    pub const fn allocation_failed(message: &'static str) -> Self {
        Self::new(ErrorCategory::Resource, codes::ALLOCATION_FAILED, message)
    }

    /// Create a text capacity exceeded error
    #[must_use]
    pub const fn text_capacity_exceeded(message: &'static str) -> Self {
        Self::new(ErrorCategory::Resource, codes::TEXT_CAPACITY_EXCEEDED, message)
    }

    /// Create a wrong variant error
    #[must_use]
    pub const fn wrong_variant(message: &'static str) -> Self {
        Self::new(ErrorCategory::Type, codes::WRONG_VARIANT, message)
    }

    /// Create an invalid tag error
    #[must_use]
    pub const fn invalid_tag(message: &'static str) -> Self {
        Self::new(ErrorCategory::Type, codes::INVALID_TAG, message)
    }

    /// Create a null pointer error
    #[must_use]
    pub const fn null_pointer(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parameter, codes::NULL_POINTER, message)
    }

    /// Create an invalid argument error
    #[must_use]
    pub const fn invalid_argument(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parameter, codes::INVALID_ARGUMENT, message)
    }

    /// Check if this error reports a text buffer that could not be obtained
    #[must_use]
    pub const fn is_allocation_error(&self) -> bool {
        matches!(
            self.code,
            codes::ALLOCATION_FAILED | codes::TEXT_CAPACITY_EXCEEDED
        )
    }

    /// Check if this error reports an accessor/variant mismatch
    #[must_use]
    pub const fn is_wrong_variant(&self) -> bool {
        self.code == codes::WRONG_VARIANT
    }

    /// Check if this error reports an unknown raw discriminant
    #[must_use]
    pub const fn is_invalid_tag(&self) -> bool {
        self.code == codes::INVALID_TAG
    }

    /// Check if this is a resource error
    #[must_use]
    pub fn is_resource_error(&self) -> bool {
        self.category == ErrorCategory::Resource
    }

    /// Check if this is a parameter error
    #[must_use]
    pub fn is_parameter_error(&self) -> bool {
        self.category == ErrorCategory::Parameter
    }

    /// Check if this is a type error
    #[must_use]
    pub fn is_type_error(&self) -> bool {
        self.category == ErrorCategory::Type
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

// -- From<kinds::X> for Error implementations --
impl From<kinds::AllocationError> for Error {
    fn from(e: kinds::AllocationError) -> Self {
        match e.limit {
            Some(_) => Self::TEXT_CAPACITY_EXCEEDED,
            None => Self::ALLOCATION_FAILED,
        }
    }
}

impl From<kinds::WrongVariantError> for Error {
    fn from(e: kinds::WrongVariantError) -> Self {
        let message = match e.expected {
            "string" => "Text accessor used on a non-text value",
            "int" => "Integer accessor used on a non-integer value",
            "float" => "Float accessor used on a non-float value",
            "bool" => "Boolean accessor used on a non-boolean value",
            _ => "Accessor used on a value of another variant",
        };
        Self::wrong_variant(message)
    }
}

impl From<kinds::InvalidTagError> for Error {
    fn from(_e: kinds::InvalidTagError) -> Self {
        Self::invalid_tag("Raw value tag does not name a known variant")
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let error = Error::wrong_variant("Float accessor used on a non-float value");
        assert_eq!(
            error.to_string(),
            "[Type][E1771] Float accessor used on a non-float value"
        );
    }

    #[test]
    fn test_kind_conversion_keeps_flavour() {
        let refused: Error = kinds::capacity_error(6, 4).into();
        assert_eq!(refused.code, codes::TEXT_CAPACITY_EXCEEDED);
        assert!(refused.is_allocation_error());

        let failed: Error = kinds::allocation_error(6).into();
        assert_eq!(failed.code, codes::ALLOCATION_FAILED);
        assert!(failed.is_allocation_error());
        assert!(failed.is_resource_error());
    }

    #[test]
    fn test_wrong_variant_message_names_accessor() {
        let error: Error = kinds::wrong_variant("string", "int").into();
        assert!(error.is_wrong_variant());
        assert!(error.is_type_error());
        assert_eq!(error.message, "Text accessor used on a non-text value");
    }

    #[test]
    fn test_error_source_accessors() {
        let error = Error::null_pointer("Output pointer is null");
        let source: &dyn ErrorSource = &error;
        assert_eq!(source.code(), codes::NULL_POINTER);
        assert_eq!(source.category(), ErrorCategory::Parameter);
        assert_eq!(source.message(), "Output pointer is null");
    }
}
