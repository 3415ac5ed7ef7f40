// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynamicArray, error::Error, growth, iter::Stamp};

// Sibling imports
use super::new::slots;

impl<T: Default> DynamicArray<T> {
    /// Ensures `capacity >= n`, reallocating to exactly `n` slots if needed.
    ///
    /// - No-op when `n <= capacity`; `len` is never changed.
    /// - Returns [`Error::Overflow`] if `n > max_capacity()`.
    /// - Invalidates outstanding cursors only when it reallocates.
    pub fn reserve(&mut self, n: usize) -> Result<(), Error> {
        if n <= self.capacity() {
            return Ok(());
        }
        if n > self.max {
            log::debug!("reserve({n}) exceeds max capacity {}", self.max);
            return Err(Error::Overflow);
        }
        self.relocate(n)
    }

    /// Doubling growth used by `push`.
    pub(crate) fn grow(&mut self) -> Result<(), Error> {
        let cap = growth::doubled(self.capacity(), self.max)?;
        self.relocate(cap)
    }

    /// Guarded growth for callers that know they need room for `n` elements.
    pub(crate) fn grow_to(&mut self, n: usize) -> Result<(), Error> {
        let cap = growth::exact_fit(n, self.max)?;
        self.relocate(cap)
    }

    /// Moves the first `min(len, new_cap)` elements into a fresh buffer of
    /// `new_cap` default slots and swaps it in. On error nothing has changed.
    pub(crate) fn relocate(&mut self, new_cap: usize) -> Result<(), Error> {
        let mut fresh = slots::<T>(new_cap)?;
        let keep = self.len.min(new_cap);
        for (dst, src) in fresh.iter_mut().zip(self.buf[..keep].iter_mut()) {
            core::mem::swap(dst, src);
        }
        log::trace!("relocated buffer: {} -> {} slots", self.capacity(), new_cap);
        self.buf = fresh;
        self.len = keep;
        self.stamp = Stamp::fresh();
        Ok(())
    }
}
