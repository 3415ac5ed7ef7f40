// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynamicArray, error::Error};

impl<T> DynamicArray<T> {
    /// Drops the last element from the logical range.
    ///
    /// The capacity is unchanged and the vacated slot keeps its value until it
    /// is overwritten by a later push. Returns [`Error::Empty`] on an empty
    /// array.
    #[inline]
    pub fn pop(&mut self) -> Result<(), Error> {
        if self.len == 0 {
            log::debug!("pop on an empty DynamicArray");
            return Err(Error::Empty);
        }
        self.len -= 1;
        Ok(())
    }

    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    ///
    /// Like [`pop`](Self::pop), this neither reallocates nor clears slots.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }
}
