// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynamicArray, error::Error, growth, iter::Stamp};

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

impl<T: Default> DynamicArray<T> {
    /// Constructs an empty array with room for one element.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Constructs an empty array with exactly `capacity` default-filled slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`max_elements`](crate::max_elements) for `T`.
    /// Use [`try_with_capacity`](Self::try_with_capacity) to handle that case.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(v) => v,
            Err(e) => panic!("DynamicArray::with_capacity({capacity}): {e}"),
        }
    }

    /// Fallible variant of [`with_capacity`](Self::with_capacity).
    pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
        let max = growth::max_elements::<T>();
        growth::within(capacity, max)?;
        Ok(Self {
            buf: slots(capacity)?,
            len: 0,
            max,
            stamp: Stamp::fresh(),
        })
    }

    /// Constructs an empty array that will never grow beyond `max` slots.
    ///
    /// The initial capacity is `min(1, max)`. `max` is itself capped at
    /// [`max_elements`](crate::max_elements) for `T`.
    pub fn with_max_capacity(max: usize) -> Self {
        let max = max.min(growth::max_elements::<T>());
        let mut v = Self::with_capacity(max.min(1));
        v.max = max;
        v
    }

    /// Constructs an array of `n` default values (`len == capacity == n`).
    ///
    /// For numeric `T` this is the zero-filled constructor.
    pub fn with_len(n: usize) -> Result<Self, Error> {
        let mut v = Self::try_with_capacity(n)?;
        v.len = n;
        Ok(v)
    }

    /// Constructs an array of `n` clones of `value` (`len == capacity == n`).
    pub fn from_elem(n: usize, value: &T) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut v = Self::try_with_capacity(n)?;
        for slot in v.buf.iter_mut() {
            slot.clone_from(value);
        }
        v.len = n;
        Ok(v)
    }
}

impl<T: Default> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Allocates `n` default-initialized slots, reporting allocator failure
/// instead of aborting.
pub(crate) fn slots<T: Default>(n: usize) -> Result<Box<[T]>, Error> {
    let mut fresh: Vec<T> = Vec::new();
    fresh
        .try_reserve_exact(n)
        .map_err(|_| Error::AllocFailed)?;
    fresh.resize_with(n, T::default);
    Ok(fresh.into_boxed_slice())
}
