// Modu - modu-ffi
// Module: Raw Boundary Layout
//
// Copyright (c) 2024 The Modu Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! C-compatible layout of a boundary value.
//!
//! ```text
//! offset 0   uint8_t tag        ValueTag discriminant
//! offset 1   padding            up to the payload alignment
//! offset 8   RawPayload         char* | int64_t | double | bool
//! ```
//!
//! On 64-bit targets a [`RawValue`] is 16 bytes with 8-byte alignment. The
//! layout is asserted at compile time and mirrored by `include/modu_ffi.h`.

use core::{ffi::c_char, fmt, mem};

use modu_error::{kinds, Error, Result};

use crate::{tag::ValueTag, text::TextBuffer, value::BoundaryValue};

/// Payload region sized to its largest member
///
/// The active member is named by the tag of the enclosing [`RawValue`].
#[repr(C)]
#[derive(Clone, Copy)]
pub union RawPayload {
    /// Owned text buffer, see [`TextBuffer::into_raw`]
    pub text:    *mut c_char,
    /// Integer payload
    pub integer: i64,
    /// Float payload
    pub float:   f64,
    /// Boolean payload; any non-zero byte reads as true
    pub boolean: u8,
}

/// Boundary value as laid out for foreign code
///
/// Neither `Copy` nor `Clone`: moving a raw value moves ownership of its
/// text buffer.
#[repr(C)]
pub struct RawValue {
    /// Raw [`ValueTag`] discriminant
    pub tag:     u8,
    /// Payload selected by `tag`
    pub payload: RawPayload,
}

impl RawValue {
    /// Raw absent value
    #[must_use]
    pub const fn absent() -> Self {
        Self {
            tag:     ValueTag::Absent.as_u8(),
            payload: RawPayload { integer: 0 },
        }
    }

    /// Raw integer value
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self {
            tag:     ValueTag::Integer.as_u8(),
            payload: RawPayload { integer: value },
        }
    }

    /// Raw float value
    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self {
            tag:     ValueTag::Float.as_u8(),
            payload: RawPayload { float: value },
        }
    }

    /// Raw boolean value
    #[must_use]
    pub fn boolean(value: bool) -> Self {
        // Zero the whole payload before writing the single byte
        let mut payload = RawPayload { integer: 0 };
        payload.boolean = u8::from(value);
        Self {
            tag: ValueTag::Boolean.as_u8(),
            payload,
        }
    }

    /// Decoded tag
    ///
    /// # Errors
    ///
    /// Returns an invalid tag error for an unknown discriminant.
    pub fn tag(&self) -> Result<ValueTag> {
        ValueTag::try_from(self.tag)
    }

    fn expect_tag(&self, expected: ValueTag) -> Result<()> {
        let found = self.tag()?;
        if found != expected {
            boundary_debug!(
                expected = expected.type_name(),
                found = found.type_name(),
                "raw read of another variant"
            );
            return Err(kinds::wrong_variant(expected.type_name(), found.type_name()).into());
        }
        Ok(())
    }

    /// Read the integer payload.
    ///
    /// # Errors
    ///
    /// Returns an invalid tag or wrong variant error unless the tag names
    /// an integer.
    ///
    /// # Safety
    ///
    /// The payload must have been written through the member its tag names.
    pub unsafe fn read_integer(&self) -> Result<i64> {
        self.expect_tag(ValueTag::Integer)?;
        // SAFETY: tag is Integer and the caller guarantees the matching
        // member was written.
        Ok(unsafe { self.payload.integer })
    }

    /// Read the float payload with its bit pattern intact.
    ///
    /// # Errors
    ///
    /// Returns an invalid tag or wrong variant error unless the tag names
    /// a float.
    ///
    /// # Safety
    ///
    /// The payload must have been written through the member its tag names.
    pub unsafe fn read_float(&self) -> Result<f64> {
        self.expect_tag(ValueTag::Float)?;
        // SAFETY: tag is Float and the caller guarantees the matching member
        // was written.
        Ok(unsafe { self.payload.float })
    }

    /// Read the boolean payload.
    ///
    /// # Errors
    ///
    /// Returns an invalid tag or wrong variant error unless the tag names
    /// a boolean.
    ///
    /// # Safety
    ///
    /// The payload must have been written through the member its tag names.
    pub unsafe fn read_boolean(&self) -> Result<bool> {
        self.expect_tag(ValueTag::Boolean)?;
        // SAFETY: tag is Boolean and the caller guarantees the matching
        // member was written.
        Ok(unsafe { self.payload.boolean } != 0)
    }

    /// Read the text buffer pointer without taking ownership.
    ///
    /// # Errors
    ///
    /// Returns an invalid tag or wrong variant error unless the tag names
    /// text, and a null pointer error if the buffer pointer is null.
    ///
    /// # Safety
    ///
    /// The payload must have been written through the member its tag names.
    pub unsafe fn read_text_ptr(&self) -> Result<*mut c_char> {
        self.expect_tag(ValueTag::Text)?;
        // SAFETY: tag is Text and the caller guarantees the matching member
        // was written.
        let ptr = unsafe { self.payload.text };
        if ptr.is_null() {
            return Err(Error::null_pointer("Text value holds a null buffer"));
        }
        Ok(ptr)
    }
}

impl fmt::Debug for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawValue")
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

impl BoundaryValue {
    /// Hand the value to the foreign side.
    ///
    /// A text buffer leaves Rust ownership with the returned raw value; it
    /// must come back through [`BoundaryValue::from_raw`],
    /// `modu_value_release` or `modu_free_string`.
    #[must_use = "dropping a raw text value leaks its buffer"]
    pub fn into_raw(self) -> RawValue {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::ValueTrace::crossing(self.type_name(), "outbound").entered();

        match self {
            Self::Absent => RawValue::absent(),
            Self::Text(buffer) => RawValue {
                tag:     ValueTag::Text.as_u8(),
                payload: RawPayload {
                    text: buffer.into_raw(),
                },
            },
            Self::Integer(value) => RawValue::integer(value),
            Self::Float(value) => RawValue::float(value),
            Self::Boolean(value) => RawValue::boolean(value),
        }
    }

    /// Take ownership of a value received from the foreign side.
    ///
    /// # Errors
    ///
    /// Returns an invalid tag error for an unknown discriminant and a null
    /// pointer error for a text value without a buffer. Nothing is freed on
    /// error.
    ///
    /// # Safety
    ///
    /// The payload must have been written through the member its tag names.
    /// For text, the pointer must satisfy [`TextBuffer::from_raw`] and the
    /// raw value must not be used again.
    pub unsafe fn from_raw(raw: RawValue) -> Result<Self> {
        let tag = raw.tag()?;

        #[cfg(feature = "tracing")]
        let _span = crate::tracing::ValueTrace::crossing(tag.type_name(), "inbound").entered();

        // SAFETY: each read matches the tag, and the caller guarantees the
        // payload and text ownership contracts.
        let value = unsafe {
            match tag {
                ValueTag::Absent => Self::Absent,
                ValueTag::Text => Self::Text(TextBuffer::from_raw(raw.read_text_ptr()?)?),
                ValueTag::Integer => Self::Integer(raw.read_integer()?),
                ValueTag::Float => Self::Float(raw.read_float()?),
                ValueTag::Boolean => Self::Boolean(raw.read_boolean()?),
            }
        };
        Ok(value)
    }
}

impl From<BoundaryValue> for RawValue {
    fn from(value: BoundaryValue) -> Self {
        value.into_raw()
    }
}

/// Compile-time layout assertions matching `include/modu_ffi.h`
mod layout {
    use super::{mem, RawPayload, RawValue};

    const _: () = assert!(mem::size_of::<RawPayload>() == 8, "Payload must be 8 bytes");
    const _: () = assert!(mem::offset_of!(RawValue, tag) == 0);
    const _: () = assert!(
        mem::offset_of!(RawValue, payload) == mem::align_of::<RawPayload>(),
        "Payload must follow the tag at its own alignment"
    );
    const _: () = assert!(
        mem::size_of::<RawValue>() == 8 + mem::align_of::<RawPayload>(),
        "Raw value must be tag, padding and payload only"
    );
}
