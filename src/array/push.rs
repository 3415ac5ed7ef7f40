// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynamicArray, error::Error};

impl<T: Default> DynamicArray<T> {
    /// Appends `value`, doubling the capacity first when full.
    ///
    /// Returns [`Error::Overflow`] when the array is already at
    /// [`max_capacity`](Self::max_capacity); the array is unchanged and
    /// `value` is dropped.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        if self.len == self.capacity() {
            self.grow()?;
        }
        self.buf[self.len] = value;
        self.len += 1;
        Ok(())
    }
}
