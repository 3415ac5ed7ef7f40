// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `DynamicArray` type and its inherent API.
//!
//! `DynamicArray<T>` owns one contiguous heap buffer of `capacity` slots and
//! tracks a logical size. Slots past the size stay allocated and hold either
//! `T::default()` or a stale value left behind by [`DynamicArray::pop`].
//! Methods mirror slice/vector semantics where they make sense, with explicit
//! capacity control and fallible growth.

mod assign;
mod cursor;
mod from;
mod insert;
mod new;
mod pop;
mod push;
mod reserve;
mod resize;
mod slice;

// Crate imports
use crate::iter::Stamp;

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A growable, contiguous array with explicit capacity control.
///
/// `DynamicArray<T>` stores its elements in an exclusively owned `Box<[T]>` of
/// `capacity` slots and tracks a logical size `len ∈ 0..=capacity`:
///
/// - indices `[0, len)` are live and visible through every safe API;
/// - indices `[len, capacity)` are allocated but logically unused;
/// - every slot is always a valid `T`, so no `unsafe` is involved. Creating
///   fresh slots therefore requires `T: Default`.
///
/// # Growth
///
/// [`push`](DynamicArray::push) doubles the capacity when full (`0 → 1`,
/// otherwise `2×`). Bulk insertion sizes the buffer exactly to
/// `len + inserted + 1`. [`reserve`](DynamicArray::reserve) and
/// [`resized`](DynamicArray::resized) allocate exactly what they are asked for.
/// No growth ever exceeds [`max_capacity`](DynamicArray::max_capacity);
/// attempts return [`Error::Overflow`](crate::Error::Overflow) and leave the
/// array unchanged.
///
/// # Cursors and invalidation
///
/// [`begin`](DynamicArray::begin)/[`end`](DynamicArray::end) and
/// [`rbegin`](DynamicArray::rbegin)/[`rend`](DynamicArray::rend) hand out
/// [`Cursor`](crate::Cursor)/[`RevCursor`](crate::RevCursor) values stamped
/// with the current buffer generation. Any reallocation and any positional
/// insertion issues a new stamp; resolving an older cursor then returns
/// [`Error::Invalidated`](crate::Error::Invalidated).
///
/// # Examples
///
/// ```rust
/// use dynamic_array::DynamicArray;
///
/// let mut v: DynamicArray<i32> = DynamicArray::new();
/// v.push(1).unwrap();
/// v.push(2).unwrap();
/// v.push(3).unwrap();
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
/// assert_eq!(v.capacity(), 4);
///
/// let end = v.end();
/// v.insert_at(end, &[100, 100]).unwrap();
/// assert_eq!(v.as_slice(), &[1, 2, 3, 100, 100]);
/// ```
pub struct DynamicArray<T> {
    pub(crate) buf: Box<[T]>,
    pub(crate) len: usize,
    pub(crate) max: usize,
    pub(crate) stamp: Stamp,
}

impl<T> DynamicArray<T> {
    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the current logical length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the largest capacity this array may grow to.
    #[inline]
    pub const fn max_capacity(&self) -> usize {
        self.max
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[inline]
    pub fn front(&self) -> &T {
        &self.as_slice()[0]
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        &mut self.as_mut_slice()[0]
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[inline]
    pub fn back(&self) -> &T {
        let last = self.last_index();
        &self.as_slice()[last]
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        let last = self.last_index();
        &mut self.as_mut_slice()[last]
    }

    fn last_index(&self) -> usize {
        match self.len.checked_sub(1) {
            Some(i) => i,
            None => panic!("back of an empty DynamicArray"),
        }
    }

    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns `true` if the array contains `x` (linear search over the live prefix).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for DynamicArray<T> {}
impl<T: Ord> Ord for DynamicArray<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for DynamicArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}


#[cfg(test)]
mod proptests {
    use super::DynamicArray;
    use proptest::prelude::*;

    proptest! {
        /// Property: len counts pushes minus successful pops, order preserved
        #[test]
        fn push_pop_counting(values in prop::collection::vec(any::<i32>(), 0..200), pops in 0usize..250) {
            let mut v: DynamicArray<i32> = DynamicArray::new();
            for &x in &values {
                v.push(x).unwrap();
            }
            let mut popped = 0;
            for _ in 0..pops {
                if v.pop().is_ok() {
                    popped += 1;
                }
            }
            prop_assert_eq!(v.len(), values.len() - popped);
            prop_assert_eq!(v.as_slice(), &values[..v.len()]);
            prop_assert!(v.len() <= v.capacity());
        }

        /// Property: reserve never shrinks capacity nor touches len
        #[test]
        fn reserve_is_monotone(values in prop::collection::vec(any::<u8>(), 0..64), n in 0usize..256) {
            let mut v: DynamicArray<u8> = values.iter().copied().collect();
            let cap = v.capacity();
            v.reserve(n).unwrap();
            prop_assert_eq!(v.capacity(), cap.max(n));
            prop_assert_eq!(v.as_slice(), &values[..]);
        }

        /// Property: resized sets capacity == len == n, keeps prefix, defaults the rest
        #[test]
        fn resized_law(values in prop::collection::vec(1u32..1000, 0..64), n in 0usize..128) {
            let mut v: DynamicArray<u32> = values.iter().copied().collect();
            v.resized(n).unwrap();
            prop_assert_eq!(v.capacity(), n);
            prop_assert_eq!(v.len(), n);
            let keep = values.len().min(n);
            prop_assert_eq!(&v[..keep], &values[..keep]);
            prop_assert!(v[keep..].iter().all(|&x| x == 0));
        }

        /// Property: inserting at index i equals splicing into a Vec
        #[test]
        fn insert_matches_vec_splice(
            base in prop::collection::vec(any::<i16>(), 0..48),
            extra in prop::collection::vec(any::<i16>(), 0..16),
            at in 0usize..64,
        ) {
            let mut v: DynamicArray<i16> = base.iter().copied().collect();
            let mut expected = base.clone();
            let res = v.insert_slice(at, &extra);
            if at <= base.len() {
                prop_assert!(res.is_ok());
                expected.splice(at..at, extra.iter().copied());
            } else {
                prop_assert!(res.is_err());
            }
            prop_assert_eq!(v.as_slice(), &expected[..]);
        }
    }
}
