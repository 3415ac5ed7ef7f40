// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for [`DynamicArray`](crate::DynamicArray) and [`Stack`](crate::Stack).
//!
//! Every fallible operation in this crate reports one of these and leaves the
//! receiver unchanged. They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`DynamicArray`](crate::DynamicArray) and
/// [`Stack`](crate::Stack).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Growing would exceed the container's maximum capacity.
    Overflow,
    /// The operation needs at least one element (`pop`, `top`).
    Empty,
    /// A position or index was outside the current logical bounds.
    OutOfBounds,
    /// A cursor refers to storage that has since been reallocated or shifted.
    Invalidated,
    /// The allocator could not provide the requested buffer.
    AllocFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow => f.write_str("capacity overflow"),
            Self::Empty => f.write_str("container is empty"),
            Self::OutOfBounds => f.write_str("position out of range"),
            Self::Invalidated => f.write_str("cursor invalidated by reallocation"),
            Self::AllocFailed => f.write_str("allocation failed"),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfBounds);
        assert!(s.contains("out of range"));
    }

    #[test]
    fn test_error_display_messages() {
        assert_eq!(Error::Overflow.to_string(), "capacity overflow");
        assert_eq!(Error::Empty.to_string(), "container is empty");
        assert_eq!(
            Error::Invalidated.to_string(),
            "cursor invalidated by reallocation"
        );
        assert_eq!(Error::AllocFailed.to_string(), "allocation failed");
    }
}
