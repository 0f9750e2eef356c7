// Modu - modu-error
// Module: Modu Error Codes
//
// Copyright (c) 2024 The Modu Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for boundary value operations.
//!
//! Each category owns a range of one thousand codes so that a code alone
//! identifies where it came from.

// Resource error codes (3000-3999)
/// The allocator could not provide a text buffer
pub const ALLOCATION_FAILED: u16 = 3009;
/// A text buffer would exceed the configured maximum size
pub const TEXT_CAPACITY_EXCEEDED: u16 = 3010;

// Parameter error codes (4000-4999)
/// A required pointer was null
pub const NULL_POINTER: u16 = 4001;
/// An argument was outside the accepted domain
pub const INVALID_ARGUMENT: u16 = 4002;

// Type error codes (6000-6999)
/// Accessor used against a value holding a different variant
pub const WRONG_VARIANT: u16 = 6001;
/// Raw discriminant does not name a known variant
pub const INVALID_TAG: u16 = 6003;
