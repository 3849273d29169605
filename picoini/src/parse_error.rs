// SPDX-License-Identifier: Apache-2.0

use alloc::collections::TryReserveError;

/// Errors that can occur while building a [`Document`](crate::Document).
#[derive(Debug, PartialEq)]
pub enum BuildError {
    /// The input buffer was empty.
    EmptyInput,
    /// No line in the input produced a section or an attachable key/value
    /// pair; a document with zero structural content is rejected outright.
    NoStructuredContent,
    /// The input was not valid UTF-8.
    InvalidUtf8(core::str::Utf8Error),
    /// An allocation failed while building the document tree. Everything
    /// allocated so far is released before this is returned.
    OutOfMemory,
}

impl From<core::str::Utf8Error> for BuildError {
    fn from(err: core::str::Utf8Error) -> Self {
        BuildError::InvalidUtf8(err)
    }
}

impl From<TryReserveError> for BuildError {
    fn from(_: TryReserveError) -> Self {
        BuildError::OutOfMemory
    }
}

impl core::fmt::Display for BuildError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuildError::EmptyInput => write!(f, "empty input"),
            BuildError::NoStructuredContent => {
                write!(f, "no section or key/value line in input")
            }
            BuildError::InvalidUtf8(e) => write!(f, "invalid UTF-8: {e}"),
            BuildError::OutOfMemory => write!(f, "allocation failed"),
        }
    }
}
