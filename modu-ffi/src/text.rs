// Modu - modu-ffi
// Module: Text Buffers
//
// Copyright (c) 2024 The Modu Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Owned, null-terminated text buffers.
//!
//! A [`TextBuffer`] is the payload of a text value. It is allocated and
//! released through the Rust global allocator only: a pointer handed out by
//! [`TextBuffer::into_raw`] must come back through [`TextBuffer::from_raw`]
//! (or the exported `modu_free_string`), never through C `free`.

use alloc::{borrow::Cow, ffi::CString, vec::Vec};
use core::{
    ffi::{c_char, CStr},
    fmt,
};

use modu_error::{kinds, Error, Result};

use crate::limits::TextLimits;

/// Exclusively owned text buffer with a trailing NUL
#[derive(PartialEq, Eq, Hash)]
pub struct TextBuffer {
    inner: CString,
}

impl TextBuffer {
    /// Copy `bytes` into a new buffer under the platform limits.
    ///
    /// Bytes from the first NUL onwards are not copied: a consumer reading
    /// the buffer as a C string stops there.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the buffer cannot be obtained.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        Self::with_limits(bytes, &TextLimits::platform())
    }

    /// Copy `bytes` into a new buffer under `limits`.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the text exceeds `limits` or the
    /// allocator cannot provide the buffer.
    pub fn with_limits(bytes: &[u8], limits: &TextLimits) -> Result<Self> {
        let text = bytes
            .iter()
            .position(|&byte| byte == 0)
            .map_or(bytes, |end| &bytes[..end]);
        if let Err(error) = limits.check(text.len()) {
            boundary_warn!(
                len = text.len(),
                limit = limits.max_bytes(),
                "text exceeds configured limit"
            );
            return Err(error);
        }

        #[cfg(feature = "tracing")]
        let _span = crate::tracing::ValueTrace::text_alloc(text.len()).entered();

        let mut buffer = Vec::new();
        if buffer.try_reserve_exact(text.len() + 1).is_err() {
            boundary_warn!(requested = text.len() + 1, "text buffer allocation failed");
            return Err(kinds::allocation_error(text.len()).into());
        }
        buffer.extend_from_slice(text);
        buffer.push(0);

        let inner = CString::from_vec_with_nul(buffer)
            .map_err(|_| Error::invalid_argument("Text contains an interior NUL byte"))?;
        boundary_trace!(len = text.len(), "text buffer allocated");
        Ok(Self { inner })
    }

    /// Text bytes without the terminator
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    /// Text bytes including the terminator
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.inner.as_bytes_with_nul()
    }

    /// Borrowed C string view
    #[must_use]
    pub fn as_c_str(&self) -> &CStr {
        self.inner.as_c_str()
    }

    /// Number of text bytes, terminator excluded
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.as_bytes().len()
    }

    /// Whether the text is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Text decoded as UTF-8, replacing invalid sequences
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.inner.to_string_lossy()
    }

    /// Hand the buffer to the foreign side.
    ///
    /// The pointer owns the allocation until it is passed back to
    /// [`TextBuffer::from_raw`].
    #[must_use = "dropping the pointer leaks the text buffer"]
    pub fn into_raw(self) -> *mut c_char {
        self.inner.into_raw()
    }

    /// Take ownership of a buffer previously handed out by
    /// [`TextBuffer::into_raw`].
    ///
    /// # Errors
    ///
    /// Returns a null pointer error if `ptr` is null.
    ///
    /// # Safety
    ///
    /// `ptr` must come from [`TextBuffer::into_raw`], must not have been
    /// reclaimed already, and its bytes must not have been modified in a way
    /// that moves the terminator.
    pub unsafe fn from_raw(ptr: *mut c_char) -> Result<Self> {
        if ptr.is_null() {
            return Err(Error::null_pointer("Text buffer pointer is null"));
        }
        // SAFETY: Caller guarantees `ptr` came from `CString::into_raw` via
        // `TextBuffer::into_raw` and is reclaimed exactly once.
        let inner = unsafe { CString::from_raw(ptr) };
        Ok(Self { inner })
    }

    /// Free the buffer through the allocator that created it.
    pub fn release(self) {
        boundary_trace!(len = self.len(), "text buffer released");
        drop(self.inner);
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextBuffer").field(&self.inner).finish()
    }
}
