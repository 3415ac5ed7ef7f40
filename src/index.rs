// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`DynamicArray`](crate::DynamicArray).
//!
//! This module provides `Index` and `IndexMut` impls that mirror slice behavior:
//! - panics on out-of-bounds;
//! - supports all standard range forms, including inclusive ranges;
//! - views are restricted to the live prefix `[0..len)`, never the spare capacity;
//! - [`Cursor`](crate::Cursor) and [`RevCursor`](crate::RevCursor) index like
//!   [`DynamicArray::at`], panicking where `at` would return an error.

// Crate imports
use crate::{
    array::DynamicArray,
    iter::{Cursor, RevCursor},
};

// Core imports
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.as_slice()[i]
    }
}

macro_rules! cursor_index {
    ($ty:ty) => {
        impl<T> Index<$ty> for DynamicArray<T> {
            type Output = T;
            fn index(&self, c: $ty) -> &Self::Output {
                match self.at(c) {
                    Ok(v) => v,
                    Err(e) => panic!("cursor at {}: {e}", c.index()),
                }
            }
        }
        impl<T> IndexMut<$ty> for DynamicArray<T> {
            fn index_mut(&mut self, c: $ty) -> &mut Self::Output {
                match self.at_mut(c) {
                    Ok(v) => v,
                    Err(e) => panic!("cursor at {}: {e}", c.index()),
                }
            }
        }
    };
}

cursor_index!(Cursor);
cursor_index!(RevCursor);

// Read-only ranges
impl<T> Index<Range<usize>> for DynamicArray<T> {
    type Output = [T];
    fn index(&self, r: Range<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeFrom<usize>> for DynamicArray<T> {
    type Output = [T];
    fn index(&self, r: RangeFrom<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeTo<usize>> for DynamicArray<T> {
    type Output = [T];
    fn index(&self, r: RangeTo<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeToInclusive<usize>> for DynamicArray<T> {
    type Output = [T];
    fn index(&self, r: RangeToInclusive<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeInclusive<usize>> for DynamicArray<T> {
    type Output = [T];
    fn index(&self, r: RangeInclusive<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeFull> for DynamicArray<T> {
    type Output = [T];
    fn index(&self, _: RangeFull) -> &Self::Output {
        self.as_slice()
    }
}

// Mutable ranges
impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}
impl<T> IndexMut<Range<usize>> for DynamicArray<T> {
    fn index_mut(&mut self, r: Range<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeFrom<usize>> for DynamicArray<T> {
    fn index_mut(&mut self, r: RangeFrom<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeTo<usize>> for DynamicArray<T> {
    fn index_mut(&mut self, r: RangeTo<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeToInclusive<usize>> for DynamicArray<T> {
    fn index_mut(&mut self, r: RangeToInclusive<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeInclusive<usize>> for DynamicArray<T> {
    fn index_mut(&mut self, r: RangeInclusive<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeFull> for DynamicArray<T> {
    fn index_mut(&mut self, _: RangeFull) -> &mut Self::Output {
        self.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::DynamicArray;

    #[test]
    fn test_indexing_and_ranges() {
        let mut v = DynamicArray::from([0, 1, 2, 3, 4]);

        assert_eq!(v[0], 0);
        assert_eq!(&v[1..3], &[1, 2]);
        assert_eq!(&v[2..], &[2, 3, 4]);
        assert_eq!(&v[..=2], &[0, 1, 2]);
        assert_eq!(&v[..], &[0, 1, 2, 3, 4]);

        v[1..=2].clone_from_slice(&[10, 20]);
        v[4] = 40;
        assert_eq!(v.as_slice(), &[0, 10, 20, 3, 40]);
    }

    #[test]
    #[should_panic]
    fn test_index_into_spare_capacity_panics() {
        let v: DynamicArray<i32> = DynamicArray::with_capacity(2);
        let _x = v[0];
    }

    #[test]
    #[should_panic]
    fn test_range_into_spare_capacity_panics() {
        let mut v: DynamicArray<i32> = DynamicArray::with_capacity(8);
        v.extend([1, 2, 3]);
        let _x = &v[..4];
    }

    #[test]
    fn test_cursor_indexing() {
        let mut v = DynamicArray::from([1, 2, 3, 4]);
        let c = v.begin() + 1;
        let r = v.rbegin();
        assert_eq!(v[c], 2);
        assert_eq!(v[r], 4);
        v[c] = 20;
        v[r + 1] = 30;
        assert_eq!(v.as_slice(), &[1, 20, 30, 4]);
    }

    #[test]
    #[should_panic(expected = "invalidated")]
    fn test_stale_cursor_index_panics() {
        let mut v = DynamicArray::from([1]);
        let c = v.begin();
        v.push(2).unwrap();
        let _x = v[c];
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_end_cursor_index_panics() {
        let v = DynamicArray::from([1]);
        let _x = v[v.end()];
    }
}
