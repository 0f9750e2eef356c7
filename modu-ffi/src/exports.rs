// Modu - modu-ffi
// Module: C Exports
//
// Copyright (c) 2024 The Modu Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! C ABI surface, declared in `include/modu_ffi.h`.
//!
//! Every fallible export returns an [`FfiStatus`] and writes its result
//! through an out pointer. Nothing here panics or unwinds.

use core::{
    ffi::{c_char, CStr},
    slice,
};

use modu_error::{codes, Error};

use crate::{raw::RawValue, text::TextBuffer, value::BoundaryValue};

/// Status returned by fallible exports
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FfiStatus {
    /// Success; outputs were written
    Ok = 0,
    /// Text buffer could not be allocated or exceeded the size limit
    AllocationFailed = 1,
    /// Accessor used on a value of another variant
    WrongVariant = 2,
    /// Null output pointer or malformed input
    InvalidArgument = 3,
    /// Raw value carries an unknown tag
    InvalidTag = 4,
    /// Value pointer or text buffer pointer is null
    NullPointer = 5,
}

impl FfiStatus {
    /// Whether this is [`FfiStatus::Ok`]
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<Error> for FfiStatus {
    fn from(error: Error) -> Self {
        match error.code {
            codes::ALLOCATION_FAILED | codes::TEXT_CAPACITY_EXCEEDED => Self::AllocationFailed,
            codes::WRONG_VARIANT => Self::WrongVariant,
            codes::INVALID_TAG => Self::InvalidTag,
            codes::NULL_POINTER => Self::NullPointer,
            _ => Self::InvalidArgument,
        }
    }
}

impl<T> From<modu_error::Result<T>> for FfiStatus {
    fn from(result: modu_error::Result<T>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(error) => error.into(),
        }
    }
}

/// Absent raw value
#[unsafe(no_mangle)]
pub extern "C" fn modu_value_absent() -> RawValue {
    RawValue::absent()
}

/// Integer raw value
#[unsafe(no_mangle)]
pub extern "C" fn modu_value_integer(value: i64) -> RawValue {
    RawValue::integer(value)
}

/// Float raw value, bit pattern preserved
#[unsafe(no_mangle)]
pub extern "C" fn modu_value_float(value: f64) -> RawValue {
    RawValue::float(value)
}

/// Boolean raw value
#[unsafe(no_mangle)]
pub extern "C" fn modu_value_boolean(value: bool) -> RawValue {
    RawValue::boolean(value)
}

/// Copy `len` bytes at `text` into a new text value written to `out`.
///
/// The copy ends before the first NUL byte. `text` may be null when `len`
/// is zero.
///
/// # Safety
///
/// `text` must be valid for reads of `len` bytes and `out` must be valid
/// for a write of one [`RawValue`]. The written value owns its buffer and
/// must be released with `modu_value_release`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn modu_value_text(
    text: *const c_char,
    len: usize,
    out: *mut RawValue,
) -> FfiStatus {
    if out.is_null() || (text.is_null() && len > 0) || len > isize::MAX as usize {
        return FfiStatus::InvalidArgument;
    }
    let bytes: &[u8] = if len == 0 {
        &[]
    } else {
        // SAFETY: `text` is non-null and the caller guarantees `len`
        // readable bytes; `len` fits in `isize`.
        unsafe { slice::from_raw_parts(text.cast::<u8>(), len) }
    };

    match BoundaryValue::text(bytes) {
        Ok(value) => {
            // SAFETY: `out` is non-null and the caller guarantees it is
            // writable.
            unsafe { out.write(value.into_raw()) };
            FfiStatus::Ok
        },
        Err(error) => error.into(),
    }
}

/// Borrow the raw value behind `value`, mapping null to a status.
///
/// # Safety
///
/// `value` must be null or point to a readable [`RawValue`].
unsafe fn borrow<'a>(value: *const RawValue) -> Result<&'a RawValue, FfiStatus> {
    // SAFETY: Caller guarantees `value` is null or valid for reads.
    unsafe { value.as_ref() }.ok_or(FfiStatus::NullPointer)
}

/// Read the integer payload of `value` into `out`.
///
/// # Safety
///
/// `value` must point to a raw value whose payload matches its tag, and
/// `out` must be valid for a write.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn modu_value_as_integer(value: *const RawValue, out: *mut i64) -> FfiStatus {
    if out.is_null() {
        return FfiStatus::InvalidArgument;
    }
    // SAFETY: Caller guarantees the pointer and payload contracts.
    let read = unsafe { borrow(value).map(|raw| raw.read_integer()) };
    match read {
        Ok(Ok(integer)) => {
            // SAFETY: `out` is non-null and writable.
            unsafe { out.write(integer) };
            FfiStatus::Ok
        },
        Ok(Err(error)) => error.into(),
        Err(status) => status,
    }
}

/// Read the float payload of `value` into `out`.
///
/// # Safety
///
/// `value` must point to a raw value whose payload matches its tag, and
/// `out` must be valid for a write.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn modu_value_as_float(value: *const RawValue, out: *mut f64) -> FfiStatus {
    if out.is_null() {
        return FfiStatus::InvalidArgument;
    }
    // SAFETY: Caller guarantees the pointer and payload contracts.
    let read = unsafe { borrow(value).map(|raw| raw.read_float()) };
    match read {
        Ok(Ok(float)) => {
            // SAFETY: `out` is non-null and writable.
            unsafe { out.write(float) };
            FfiStatus::Ok
        },
        Ok(Err(error)) => error.into(),
        Err(status) => status,
    }
}

/// Read the boolean payload of `value` into `out`.
///
/// # Safety
///
/// `value` must point to a raw value whose payload matches its tag, and
/// `out` must be valid for a write.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn modu_value_as_boolean(value: *const RawValue, out: *mut bool) -> FfiStatus {
    if out.is_null() {
        return FfiStatus::InvalidArgument;
    }
    // SAFETY: Caller guarantees the pointer and payload contracts.
    let read = unsafe { borrow(value).map(|raw| raw.read_boolean()) };
    match read {
        Ok(Ok(boolean)) => {
            // SAFETY: `out` is non-null and writable.
            unsafe { out.write(boolean) };
            FfiStatus::Ok
        },
        Ok(Err(error)) => error.into(),
        Err(status) => status,
    }
}

/// Borrow the text buffer of `value` and its length, terminator excluded.
///
/// The buffer stays owned by `value`; it is valid until `value` is
/// released.
///
/// # Safety
///
/// `value` must point to a raw value whose payload matches its tag, and a
/// text buffer must be null-terminated. `out_ptr` and `out_len` must be
/// valid for a write.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn modu_value_as_text(
    value: *const RawValue,
    out_ptr: *mut *const c_char,
    out_len: *mut usize,
) -> FfiStatus {
    if out_ptr.is_null() || out_len.is_null() {
        return FfiStatus::InvalidArgument;
    }
    // SAFETY: Caller guarantees the pointer and payload contracts.
    let read = unsafe { borrow(value).map(|raw| raw.read_text_ptr()) };
    match read {
        Ok(Ok(text)) => {
            // SAFETY: `text` is non-null and the caller guarantees it is
            // null-terminated.
            let len = unsafe { CStr::from_ptr(text) }.count_bytes();
            // SAFETY: both out pointers are non-null and writable.
            unsafe {
                out_ptr.write(text.cast_const());
                out_len.write(len);
            }
            FfiStatus::Ok
        },
        Ok(Err(error)) => error.into(),
        Err(status) => status,
    }
}

/// Release a raw value.
///
/// Frees the text buffer of a text value; does nothing for any other
/// variant. A value with an unknown tag or a null text buffer is left
/// untouched.
///
/// # Safety
///
/// The payload must match the tag and a text buffer must come from this
/// library. The value must not be used after this call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn modu_value_release(value: RawValue) {
    // SAFETY: Caller transfers ownership and guarantees the payload contract.
    match unsafe { BoundaryValue::from_raw(value) } {
        Ok(value) => value.release(),
        #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
        Err(error) => {
            boundary_warn!(code = error.code, error = %error, "raw value not released");
        },
    }
}

/// Free a text buffer pointer. Null is a no-op.
///
/// # Safety
///
/// `text` must be null or a text buffer handed out by this library that
/// has not been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn modu_free_string(text: *mut c_char) {
    if text.is_null() {
        boundary_trace!("free of null text buffer ignored");
        return;
    }
    // SAFETY: non-null, and the caller guarantees it came from
    // `TextBuffer::into_raw` and is freed once.
    if let Ok(buffer) = unsafe { TextBuffer::from_raw(text) } {
        buffer.release();
    }
}

#[cfg(test)]
mod tests {
    use core::ptr;

    use super::*;

    #[test]
    fn test_status_numbering_is_stable() {
        assert_eq!(FfiStatus::Ok as i32, 0);
        assert_eq!(FfiStatus::AllocationFailed as i32, 1);
        assert_eq!(FfiStatus::WrongVariant as i32, 2);
        assert_eq!(FfiStatus::InvalidArgument as i32, 3);
        assert_eq!(FfiStatus::InvalidTag as i32, 4);
        assert_eq!(FfiStatus::NullPointer as i32, 5);
    }

    #[test]
    fn test_errors_map_to_one_status() {
        assert_eq!(FfiStatus::from(Error::ALLOCATION_FAILED), FfiStatus::AllocationFailed);
        assert_eq!(FfiStatus::from(Error::TEXT_CAPACITY_EXCEEDED), FfiStatus::AllocationFailed);
        assert_eq!(
            FfiStatus::from(Error::wrong_variant("Integer accessor used on a non-integer value")),
            FfiStatus::WrongVariant
        );
        assert_eq!(FfiStatus::from(Error::invalid_tag("bad tag")), FfiStatus::InvalidTag);
        assert_eq!(FfiStatus::from(Error::null_pointer("null")), FfiStatus::NullPointer);
        assert_eq!(FfiStatus::from(Error::invalid_argument("bad")), FfiStatus::InvalidArgument);
    }

    #[test]
    fn test_result_maps_to_status() {
        assert!(FfiStatus::from(Ok::<(), Error>(())).is_ok());
        assert_eq!(
            FfiStatus::from(Err::<(), Error>(Error::ALLOCATION_FAILED)),
            FfiStatus::AllocationFailed
        );
    }

    #[test]
    fn test_text_rejects_null_arguments() {
        let mut out = RawValue::absent();
        // SAFETY: null pointers are rejected before any access.
        unsafe {
            assert_eq!(modu_value_text(ptr::null(), 3, &mut out), FfiStatus::InvalidArgument);
            assert_eq!(
                modu_value_text(b"abc".as_ptr().cast(), 3, ptr::null_mut()),
                FfiStatus::InvalidArgument
            );
        }
        assert_eq!(out.tag, 0);
    }
}
