// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynamicArray, error::Error, growth};

// Alloc imports
use alloc::vec::Vec;

impl<T: Default, const M: usize> From<[T; M]> for DynamicArray<T> {
    /// Literal-sequence constructor: `capacity() == len() == M`.
    fn from(src: [T; M]) -> Self {
        let mut v = Self::with_capacity(M);
        for (slot, item) in v.buf.iter_mut().zip(src) {
            *slot = item;
        }
        v.len = M;
        v
    }
}

impl<T: Default + Clone> TryFrom<&[T]> for DynamicArray<T> {
    type Error = Error;
    fn try_from(src: &[T]) -> Result<Self, Error> {
        let mut v = Self::try_with_capacity(src.len())?;
        v.buf.clone_from_slice(src);
        v.len = src.len();
        Ok(v)
    }
}

impl<T: Default> TryFrom<Vec<T>> for DynamicArray<T> {
    type Error = Error;
    /// Takes over the vector's elements; `capacity() == len()` afterwards.
    ///
    /// A `Vec` of zero-sized elements can be longer than
    /// [`max_elements`](crate::max_elements) allows; that returns
    /// [`Error::Overflow`].
    fn try_from(src: Vec<T>) -> Result<Self, Error> {
        let len = growth::within(src.len(), growth::max_elements::<T>())?;
        let mut v = Self::try_with_capacity(0)?;
        v.buf = src.into_boxed_slice();
        v.len = len;
        Ok(v)
    }
}

impl<T: Default> Extend<T> for DynamicArray<T> {
    /// Pushes every item in order. Stops early, dropping the remaining items,
    /// once [`max_capacity`](DynamicArray::max_capacity) is reached.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let want = self.len.saturating_add(lower).min(self.max);
        // Best effort: a failed reservation falls back to per-push growth.
        let _ = self.reserve(want);
        for item in iter {
            if self.push(item).is_err() {
                break;
            }
        }
    }
}

impl<T: Default> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::with_capacity(0);
        v.extend(iter);
        v
    }
}

impl<T: Default + Clone> DynamicArray<T> {
    /// Appends clones of `src`. Equivalent to `insert_slice(len, src)`.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error> {
        self.insert_slice(self.len, src)
    }
}
