// Modu - modu-ffi
// Module: Tracing Support
//
// Copyright (c) 2024 The Modu Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Tracing support for boundary values
//!
//! Wraps the `tracing` crate with spans for the operations that touch the
//! allocator or move ownership across the boundary. Works in both std and
//! `no_std` + alloc builds.

pub use ::tracing::Span;
use ::tracing::{debug_span, trace_span};

/// Spans for value lifecycle operations
#[derive(Debug, Clone)]
pub struct ValueTrace;

impl ValueTrace {
    /// Create a span for a text buffer allocation
    #[inline]
    pub fn text_alloc(len: usize) -> Span {
        trace_span!("text_alloc", len = %len)
    }

    /// Create a span for releasing a value
    #[inline]
    pub fn release(type_name: &'static str) -> Span {
        trace_span!("value_release", ty = %type_name)
    }

    /// Create a span for a value crossing the boundary
    #[inline]
    pub fn crossing(type_name: &'static str, direction: &'static str) -> Span {
        debug_span!("value_crossing", ty = %type_name, direction = %direction)
    }
}
