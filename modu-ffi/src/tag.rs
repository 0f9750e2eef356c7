// Modu - modu-ffi
// Module: Value Tags
//
// Copyright (c) 2024 The Modu Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Discriminant of a boundary value.

use core::fmt;

use modu_error::{kinds::InvalidTagError, Error};

/// Variant held by a boundary value.
///
/// The numbering is part of the binary layout and never changes.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueTag {
    /// No value
    Absent  = 0,
    /// Owned, null-terminated text
    Text    = 1,
    /// 64-bit signed integer
    Integer = 2,
    /// 64-bit IEEE-754 float
    Float   = 3,
    /// Boolean
    Boolean = 4,
}

impl ValueTag {
    /// Every tag, in discriminant order
    pub const ALL: [Self; 5] = [
        Self::Absent,
        Self::Text,
        Self::Integer,
        Self::Float,
        Self::Boolean,
    ];

    /// Raw discriminant written into the boundary layout
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Language-level type name of the variant
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Absent => "null",
            Self::Text => "string",
            Self::Integer => "int",
            Self::Float => "float",
            Self::Boolean => "bool",
        }
    }
}

impl TryFrom<u8> for ValueTag {
    type Error = Error;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Absent),
            1 => Ok(Self::Text),
            2 => Ok(Self::Integer),
            3 => Ok(Self::Float),
            4 => Ok(Self::Boolean),
            other => {
                boundary_debug!(tag = other, "unknown value tag");
                Err(InvalidTagError(other).into())
            },
        }
    }
}

impl From<ValueTag> for u8 {
    fn from(tag: ValueTag) -> Self {
        tag.as_u8()
    }
}

impl fmt::Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
