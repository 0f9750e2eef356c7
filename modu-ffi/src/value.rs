// Modu - modu-ffi
// Module: Boundary Values
//
// Copyright (c) 2024 The Modu Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Boundary value representation
//!
//! This module provides the safe, owned form of a value exchanged between
//! the modu runtime and foreign code.

use core::{ffi::CStr, fmt};

use modu_error::{kinds, Error, Result};

use crate::{limits::TextLimits, tag::ValueTag, text::TextBuffer};

/// A value crossing the language boundary
///
/// Exactly one variant is active. The text variant exclusively owns its
/// buffer; every other variant is plain data and holds no allocation.
#[derive(Debug, Default)]
pub enum BoundaryValue {
    /// No value
    #[default]
    Absent,
    /// Owned, null-terminated text
    Text(TextBuffer),
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit float, NaN payloads included
    Float(f64),
    /// Boolean
    Boolean(bool),
}

// Floats compare by bit pattern so a NaN equals an identical NaN
impl PartialEq for BoundaryValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Absent, Self::Absent) => true,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            _ => false, // Different variants are not equal
        }
    }
}

impl Eq for BoundaryValue {}

impl BoundaryValue {
    /// Create an absent value
    #[must_use]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Create a text value by copying `bytes` into a new buffer.
    ///
    /// The copy ends before the first NUL byte, if any.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the buffer cannot be obtained.
    pub fn text(bytes: impl AsRef<[u8]>) -> Result<Self> {
        Self::text_with_limits(bytes, &TextLimits::platform())
    }

    /// Create a text value under explicit size limits.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the text exceeds `limits` or the
    /// allocator cannot provide the buffer.
    pub fn text_with_limits(bytes: impl AsRef<[u8]>, limits: &TextLimits) -> Result<Self> {
        TextBuffer::with_limits(bytes.as_ref(), limits).map(Self::Text)
    }

    /// Create an integer value
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Integer(value)
    }

    /// Create a float value; NaN and infinities are kept as is
    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self::Float(value)
    }

    /// Create a boolean value
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    /// Variant of this value
    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        match self {
            Self::Absent => ValueTag::Absent,
            Self::Text(_) => ValueTag::Text,
            Self::Integer(_) => ValueTag::Integer,
            Self::Float(_) => ValueTag::Float,
            Self::Boolean(_) => ValueTag::Boolean,
        }
    }

    /// Language-level type name (`null`, `string`, `int`, `float`, `bool`)
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.tag().type_name()
    }

    /// Whether this is the absent value
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Text bytes, terminator excluded
    ///
    /// # Errors
    ///
    /// Returns a wrong variant error unless this is a text value.
    pub fn as_text(&self) -> Result<&[u8]> {
        match self {
            Self::Text(buffer) => Ok(buffer.as_bytes()),
            _ => Err(self.mismatch(ValueTag::Text)),
        }
    }

    /// Text as a borrowed C string
    ///
    /// # Errors
    ///
    /// Returns a wrong variant error unless this is a text value.
    pub fn as_c_str(&self) -> Result<&CStr> {
        match self {
            Self::Text(buffer) => Ok(buffer.as_c_str()),
            _ => Err(self.mismatch(ValueTag::Text)),
        }
    }

    /// Integer payload
    ///
    /// # Errors
    ///
    /// Returns a wrong variant error unless this is an integer value.
    pub fn as_integer(&self) -> Result<i64> {
        match self {
            Self::Integer(value) => Ok(*value),
            _ => Err(self.mismatch(ValueTag::Integer)),
        }
    }

    /// Float payload, bit pattern preserved
    ///
    /// # Errors
    ///
    /// Returns a wrong variant error unless this is a float value.
    pub fn as_float(&self) -> Result<f64> {
        match self {
            Self::Float(value) => Ok(*value),
            _ => Err(self.mismatch(ValueTag::Float)),
        }
    }

    /// Boolean payload
    ///
    /// # Errors
    ///
    /// Returns a wrong variant error unless this is a boolean value.
    pub fn as_boolean(&self) -> Result<bool> {
        match self {
            Self::Boolean(value) => Ok(*value),
            _ => Err(self.mismatch(ValueTag::Boolean)),
        }
    }

    /// Release the value.
    ///
    /// Frees the text buffer with the allocator that created it. For every
    /// other variant this does nothing. The value is consumed, so it cannot
    /// be released or read again.
    pub fn release(self) {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::ValueTrace::release(self.type_name()).entered();

        match self {
            Self::Text(buffer) => buffer.release(),
            Self::Absent | Self::Integer(_) | Self::Float(_) | Self::Boolean(_) => {
                boundary_trace!(ty = self.type_name(), "release without buffer");
            },
        }
    }

    fn mismatch(&self, expected: ValueTag) -> Error {
        boundary_debug!(
            expected = expected.type_name(),
            found = self.type_name(),
            "accessor used on another variant"
        );
        kinds::wrong_variant(expected.type_name(), self.type_name()).into()
    }
}

impl From<i64> for BoundaryValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for BoundaryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for BoundaryValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl fmt::Display for BoundaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("null"),
            Self::Text(buffer) => f.write_str(&buffer.to_string_lossy()),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
        }
    }
}
