// Modu - modu-error
// Module: Modu Error Handling
//
// Copyright (c) 2024 The Modu Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Modu error handling library
//!
//! Error types shared by the boundary value crates. Errors are small,
//! `Copy` and allocation free so they can be produced in `no_std` code and
//! converted into a C status code at the language boundary.
//!
//! # Error Categories
//!
//! ## Resource Errors (3000-3999)
//! - Text buffer allocation failures
//! - Text buffers exceeding the configured limit
//!
//! ## Parameter Errors (4000-4999)
//! - Null pointers
//! - Invalid arguments
//!
//! ## Type Errors (6000-6999)
//! - Accessor used on a value of another variant
//! - Unknown raw discriminants
//!
//! # Usage
//!
//! ```
//! use modu_error::{kinds, Error};
//!
//! let error = Error::wrong_variant("Float accessor used on a non-float value");
//! assert!(error.is_wrong_variant());
//!
//! // Kinds carry the detail and flatten into `Error`
//! let error: Error = kinds::capacity_error(64, 32).into();
//! assert!(error.is_allocation_error());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Error codes for modu
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Error kind definitions
pub mod kinds;

// Re-export key types
pub use errors::{Error, ErrorCategory, ErrorSource};
pub use kinds::{AllocationError, InvalidTagError, WrongVariantError};

/// A specialized `Result` type for boundary value operations.
pub type Result<T> = core::result::Result<T, Error>;
