// Modu - modu-ffi
// Module: Boundary Value FFI
//
// Copyright (c) 2024 The Modu Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Tagged boundary values for the modu language.
//!
//! A [`BoundaryValue`] is the single representation of a value passed
//! between the modu runtime and foreign code: absent, text, a 64-bit
//! integer, a 64-bit float or a boolean. Text is the only variant that owns
//! heap memory; its buffer is allocated and freed through the Rust global
//! allocator on both sides of the boundary.
//!
//! Foreign code sees the value as a [`RawValue`], a `#[repr(C)]` tag plus
//! payload union, and calls the `modu_*` symbols declared in
//! `include/modu_ffi.h`.
//!
//! # Features
//!
//! - `std` (default): `std::error::Error` support
//! - `tracing`: structured events and spans for allocation, release and
//!   boundary crossings
//! - `embedded-small` / `embedded-medium`: tighter text size limits
//!
//! # Usage
//!
//! ```
//! use modu_ffi::{BoundaryValue, ValueTag};
//!
//! let value = BoundaryValue::text("hello")?;
//! assert_eq!(value.tag(), ValueTag::Text);
//! assert_eq!(value.as_text()?, b"hello");
//! assert!(value.as_integer().is_err());
//! value.release();
//!
//! let raw = BoundaryValue::float(f64::NAN).into_raw();
//! // SAFETY: `raw` was produced by `into_raw` above.
//! let value = unsafe { BoundaryValue::from_raw(raw) }?;
//! assert!(value.as_float()?.is_nan());
//! # Ok::<(), modu_ffi::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

extern crate alloc;

#[macro_use]
mod macros;

/// C ABI exports
pub mod exports;
/// Text size limits per platform profile
pub mod limits;
/// C-compatible value layout
pub mod raw;
/// Value tags
pub mod tag;
/// Owned text buffers
pub mod text;
/// Tracing spans
#[cfg(feature = "tracing")]
pub mod tracing;
/// Safe boundary values
pub mod value;

// Re-export key types
pub use exports::FfiStatus;
pub use limits::TextLimits;
pub use modu_error::{Error, ErrorCategory, Result};
pub use raw::{RawPayload, RawValue};
pub use tag::ValueTag;
pub use text::TextBuffer;
pub use value::BoundaryValue;
