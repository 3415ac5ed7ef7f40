// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynamicArray, error::Error, iter::Stamp};

// Alloc imports
use alloc::boxed::Box;

impl<T: Default> DynamicArray<T> {
    /// Resizes to exactly `n` slots **and** `n` live elements.
    ///
    /// - The first `min(len, n)` elements are preserved.
    /// - Positions `len..n` are filled with `T::default()`.
    /// - Afterwards `capacity() == len() == n`; shrinking drops the tail.
    ///
    /// Returns [`Error::Overflow`] if `n > max_capacity()`, leaving the array
    /// unchanged. When `n` already equals the capacity no reallocation happens
    /// and outstanding cursors stay valid.
    pub fn resized(&mut self, n: usize) -> Result<(), Error> {
        if n > self.max {
            log::debug!("resized({n}) exceeds max capacity {}", self.max);
            return Err(Error::Overflow);
        }
        if n == self.capacity() {
            for slot in &mut self.buf[self.len..] {
                *slot = T::default();
            }
        } else {
            self.relocate(n)?;
        }
        self.len = n;
        Ok(())
    }

    /// Drops every element and releases the buffer (`resized(0)`).
    ///
    /// The next `push` allocates a single slot.
    pub fn cleared(&mut self) {
        self.buf = Box::default();
        self.len = 0;
        self.stamp = Stamp::fresh();
    }

    /// Makes the array hold exactly `n` copies of `value`.
    ///
    /// Reserves `n` slots first (never shrinking the buffer), then overwrites
    /// the first `n` slots. Returns [`Error::Overflow`] if `n > max_capacity()`.
    pub fn assigned(&mut self, n: usize, value: &T) -> Result<(), Error>
    where
        T: Clone,
    {
        self.reserve(n)?;
        for slot in &mut self.buf[..n] {
            slot.clone_from(value);
        }
        self.len = n;
        Ok(())
    }
}
