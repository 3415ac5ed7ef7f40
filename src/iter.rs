// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cursors and iterator support for [`DynamicArray`](crate::DynamicArray).
//!
//! - [`Cursor`] and [`RevCursor`] are random-access positions. They carry the
//!   stamp of the buffer they were taken from, so resolving one after the
//!   buffer was reallocated or shifted yields [`Error::Invalidated`](crate::Error::Invalidated)
//!   instead of reading the wrong slot.
//! - [`IntoIter<T>`] yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&DynamicArray` and `&mut DynamicArray` iterate as slices.

// Crate imports
use crate::array::DynamicArray;

// Core imports
use core::{
    cmp::Ordering,
    iter::FusedIterator,
    ops::{Add, AddAssign, Sub, SubAssign},
    sync::atomic::{AtomicUsize, Ordering as AtomicOrdering},
};

pub(crate) mod sealed {
    /// Identity of one buffer generation. A new stamp is issued whenever the
    /// storage is reallocated or its elements are shifted.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Stamp(pub(super) usize);

    pub trait Sealed {
        /// `true` when advancing moves toward lower indices.
        const REVERSED: bool;

        fn stamp(&self) -> Stamp;
    }
}

pub(crate) use sealed::Stamp;

static NEXT_STAMP: AtomicUsize = AtomicUsize::new(1);

impl Stamp {
    pub(crate) fn fresh() -> Self {
        Stamp(NEXT_STAMP.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// Random-access position contract shared by [`Cursor`] and [`RevCursor`].
///
/// The [`algo`](crate::algo) functions are written only against this trait,
/// so the same call sorts or searches either the forward or the reverse view.
/// Ordering follows traversal direction: for both kinds `first < last` means
/// `first` is visited before `last`.
pub trait Position: Copy + Ord + sealed::Sealed {
    /// Physical index in storage. May be `-1` (`rend`) or `len` (`end`).
    fn slot(&self) -> isize;

    /// Moves `n` steps in traversal direction (negative `n` moves back).
    fn offset(self, n: isize) -> Self;

    /// Number of traversal steps from `origin` to `self`.
    fn distance_from(self, origin: Self) -> isize;
}

/// Forward position into a [`DynamicArray`]: `begin()` is the first element,
/// `end()` is one past the last.
///
/// Cursors are plain values; they never borrow the array. Dereference through
/// [`DynamicArray::at`], [`DynamicArray::at_mut`] or indexing (`arr[c]`).
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    pub(crate) pos: isize,
    pub(crate) stamp: Stamp,
}

/// Reverse position into a [`DynamicArray`]: `rbegin()` is the last element,
/// `rend()` is one before the first. Incrementing moves toward index `0`.
#[derive(Debug, Clone, Copy)]
pub struct RevCursor {
    pub(crate) pos: isize,
    pub(crate) stamp: Stamp,
}

macro_rules! cursor_steps {
    ($ty:ident, $fwd:tt, $back:tt) => {
        impl $ty {
            pub(crate) const fn new(pos: isize, stamp: Stamp) -> Self {
                Self { pos, stamp }
            }

            /// Physical index in storage.
            #[inline]
            pub const fn index(&self) -> isize {
                self.pos
            }

            /// Pre-increment: advances one step and returns the advanced cursor.
            #[inline]
            pub fn inc(&mut self) -> &mut Self {
                self.pos $fwd 1;
                self
            }

            /// Pre-decrement: moves back one step and returns the moved cursor.
            #[inline]
            pub fn dec(&mut self) -> &mut Self {
                self.pos $back 1;
                self
            }

            /// Post-increment: advances one step and returns the previous position.
            #[inline]
            pub fn post_inc(&mut self) -> Self {
                let old = *self;
                self.pos $fwd 1;
                old
            }

            /// Post-decrement: moves back one step and returns the previous position.
            #[inline]
            pub fn post_dec(&mut self) -> Self {
                let old = *self;
                self.pos $back 1;
                old
            }
        }

        impl AddAssign<isize> for $ty {
            fn add_assign(&mut self, n: isize) {
                self.pos $fwd n;
            }
        }

        impl SubAssign<isize> for $ty {
            fn sub_assign(&mut self, n: isize) {
                self.pos $back n;
            }
        }

        impl Add<isize> for $ty {
            type Output = Self;
            fn add(mut self, n: isize) -> Self {
                self += n;
                self
            }
        }

        impl Sub<isize> for $ty {
            type Output = Self;
            fn sub(mut self, n: isize) -> Self {
                self -= n;
                self
            }
        }

        impl Sub for $ty {
            type Output = isize;
            fn sub(self, origin: Self) -> isize {
                Position::distance_from(self, origin)
            }
        }

        // Equality and ordering look at the position only; comparing cursors
        // taken from different arrays is meaningless.
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.pos == other.pos
            }
        }
        impl Eq for $ty {}
        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }
    };
}

cursor_steps!(Cursor, +=, -=);
cursor_steps!(RevCursor, -=, +=);

impl Ord for Cursor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pos.cmp(&other.pos)
    }
}

impl Ord for RevCursor {
    fn cmp(&self, other: &Self) -> Ordering {
        other.pos.cmp(&self.pos)
    }
}

impl sealed::Sealed for Cursor {
    const REVERSED: bool = false;
    fn stamp(&self) -> Stamp {
        self.stamp
    }
}

impl sealed::Sealed for RevCursor {
    const REVERSED: bool = true;
    fn stamp(&self) -> Stamp {
        self.stamp
    }
}

impl Position for Cursor {
    fn slot(&self) -> isize {
        self.pos
    }
    fn offset(self, n: isize) -> Self {
        self + n
    }
    fn distance_from(self, origin: Self) -> isize {
        self.pos - origin.pos
    }
}

impl Position for RevCursor {
    fn slot(&self) -> isize {
        self.pos
    }
    fn offset(self, n: isize) -> Self {
        self + n
    }
    fn distance_from(self, origin: Self) -> isize {
        origin.pos - self.pos
    }
}

/// Owned iterator returned by `DynamicArray::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`]. Yielded slots are replaced with
/// `T::default()`.
pub struct IntoIter<T: Default> {
    pub(crate) v: DynamicArray<T>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T: Default> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            Some(core::mem::take(&mut self.v.buf[i]))
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        if n >= rem {
            self.front = self.back;
            return None;
        }
        self.front += n;
        self.next()
    }
}

impl<T: Default> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            Some(core::mem::take(&mut self.v.buf[self.back]))
        } else {
            None
        }
    }
}
impl<T: Default> FusedIterator for IntoIter<T> {}
impl<T: Default> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T: Default> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            front: 0,
            back: self.len,
            v: self,
        }
    }
}
