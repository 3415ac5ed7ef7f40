// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sequence algorithms over a cursor range `[first, last)`.
//!
//! Every function here is written against the [`Position`] contract only, so
//! it works unchanged on a forward range (`begin()..end()`) and on a reverse
//! range (`rbegin()..rend()`). On a reverse range "sorted" means sorted in
//! reverse traversal order, i.e. descending in storage.
//!
//! Ranges are validated up front: both cursors must belong to the array's
//! current buffer ([`Error::Invalidated`] otherwise), `first` must not come
//! after `last`, and both must lie within the live elements or on the
//! matching sentinel ([`Error::OutOfBounds`] otherwise). Ordering functions
//! are supplied by the caller.
//!
//! ```rust
//! use dynamic_array::{algo, DynamicArray};
//!
//! let mut v = DynamicArray::from([5, 3, 8, 1]);
//! let (first, last) = (v.rbegin(), v.rend());
//! algo::sort(&mut v, first, last).unwrap();
//! assert_eq!(v.as_slice(), &[8, 5, 3, 1]);
//! ```

// Crate imports
use crate::{array::DynamicArray, error::Error, iter::Position};

// Core imports
use core::{cmp::Ordering, ops::Range};

/// Storage indices covered by `[first, last)`.
fn span<T, P: Position>(arr: &DynamicArray<T>, first: P, last: P) -> Result<Range<usize>, Error> {
    arr.check(first)?;
    arr.check(last)?;
    if last < first {
        return Err(Error::OutOfBounds);
    }
    let (lo, hi) = if P::REVERSED {
        (last.slot() + 1, first.slot() + 1)
    } else {
        (first.slot(), last.slot())
    };
    match (usize::try_from(lo), usize::try_from(hi)) {
        (Ok(lo), Ok(hi)) if hi <= arr.len() => Ok(lo..hi),
        _ => Err(Error::OutOfBounds),
    }
}

/// Stable sort of `[first, last)` in traversal order.
pub fn sort<T: Ord, P: Position>(arr: &mut DynamicArray<T>, first: P, last: P) -> Result<(), Error> {
    sort_by(arr, first, last, T::cmp)
}

/// Stable sort of `[first, last)` in traversal order using `compare`.
///
/// Elements that compare equal keep their relative traversal order.
pub fn sort_by<T, P, F>(arr: &mut DynamicArray<T>, first: P, last: P, mut compare: F) -> Result<(), Error>
where
    P: Position,
    F: FnMut(&T, &T) -> Ordering,
{
    let range = span(arr, first, last)?;
    let window = &mut arr.as_mut_slice()[range];
    if P::REVERSED {
        // Storage order is the mirror of traversal order, so a stable sort
        // with the comparison flipped leaves equal elements in place.
        window.sort_by(|a, b| compare(b, a));
    } else {
        window.sort_by(compare);
    }
    Ok(())
}

/// Returns `true` if `[first, last)` is non-decreasing in traversal order.
pub fn is_sorted<T: Ord, P: Position>(arr: &DynamicArray<T>, first: P, last: P) -> Result<bool, Error> {
    span(arr, first, last)?;
    let mut it = first;
    while it != last {
        let next = it.offset(1);
        if next == last {
            break;
        }
        if arr.at(next)? < arr.at(it)? {
            return Ok(false);
        }
        it = next;
    }
    Ok(true)
}

/// First position in `[first, last)` whose element satisfies `pred`.
pub fn find_if<T, P, F>(arr: &DynamicArray<T>, first: P, last: P, mut pred: F) -> Result<Option<P>, Error>
where
    P: Position,
    F: FnMut(&T) -> bool,
{
    span(arr, first, last)?;
    let mut it = first;
    while it != last {
        if pred(arr.at(it)?) {
            return Ok(Some(it));
        }
        it = it.offset(1);
    }
    Ok(None)
}

/// First position in `[first, last)` whose element equals `value`.
pub fn find<T: PartialEq, P: Position>(
    arr: &DynamicArray<T>,
    first: P,
    last: P,
    value: &T,
) -> Result<Option<P>, Error> {
    find_if(arr, first, last, |x| x == value)
}

/// Walks the range keeping the position `replace(candidate, best)` prefers.
fn extremum_by<T, P, F>(arr: &DynamicArray<T>, first: P, last: P, mut replace: F) -> Result<Option<P>, Error>
where
    P: Position,
    F: FnMut(&T, &T) -> bool,
{
    span(arr, first, last)?;
    let mut best: Option<P> = None;
    let mut it = first;
    while it != last {
        best = match best {
            Some(b) if !replace(arr.at(it)?, arr.at(b)?) => Some(b),
            _ => Some(it),
        };
        it = it.offset(1);
    }
    Ok(best)
}

/// First position holding the largest element, or `None` for an empty range.
pub fn max_element_by<T, P, F>(arr: &DynamicArray<T>, first: P, last: P, mut compare: F) -> Result<Option<P>, Error>
where
    P: Position,
    F: FnMut(&T, &T) -> Ordering,
{
    extremum_by(arr, first, last, |cand, best| compare(cand, best) == Ordering::Greater)
}

/// First position holding the smallest element, or `None` for an empty range.
pub fn min_element_by<T, P, F>(arr: &DynamicArray<T>, first: P, last: P, mut compare: F) -> Result<Option<P>, Error>
where
    P: Position,
    F: FnMut(&T, &T) -> Ordering,
{
    extremum_by(arr, first, last, |cand, best| compare(cand, best) == Ordering::Less)
}

/// [`max_element_by`] with the natural order.
pub fn max_element<T: Ord, P: Position>(arr: &DynamicArray<T>, first: P, last: P) -> Result<Option<P>, Error> {
    max_element_by(arr, first, last, T::cmp)
}

/// [`min_element_by`] with the natural order.
pub fn min_element<T: Ord, P: Position>(arr: &DynamicArray<T>, first: P, last: P) -> Result<Option<P>, Error> {
    min_element_by(arr, first, last, T::cmp)
}

#[cfg(test)]
mod tests {
    // Imports
    use super::*;

    #[test]
    fn test_forward_sort() {
        let mut v = DynamicArray::from([5, 3, 8, 1]);
        let (f, l) = (v.begin(), v.end());
        sort(&mut v, f, l).unwrap();
        assert_eq!(v.as_slice(), &[1, 3, 5, 8]);
    }

    #[test]
    fn test_reverse_sort_is_descending_in_storage() {
        let mut v = DynamicArray::from([5, 3, 8, 1]);
        let (f, l) = (v.rbegin(), v.rend());
        sort(&mut v, f, l).unwrap();
        assert_eq!(v.as_slice(), &[8, 5, 3, 1]);
        assert!(is_sorted(&v, v.rbegin(), v.rend()).unwrap());
        assert!(!is_sorted(&v, v.begin(), v.end()).unwrap());
    }

    #[test]
    fn test_sort_by_custom_predicate() {
        let mut v = DynamicArray::from([10, 2, 3, 1, 5]);
        let (f, l) = (v.begin(), v.end());
        sort_by(&mut v, f, l, |a, b| b.cmp(a)).unwrap();
        assert_eq!(v.as_slice(), &[10, 5, 3, 2, 1]);
    }

    #[test]
    fn test_sort_sub_range_only() {
        let mut v = DynamicArray::from([9, 4, 3, 2, 0]);
        let (f, l) = (v.begin() + 1, v.end() - 1);
        sort(&mut v, f, l).unwrap();
        assert_eq!(v.as_slice(), &[9, 2, 3, 4, 0]);

        let (f, l) = (v.rbegin() + 1, v.rend() - 1);
        sort(&mut v, f, l).unwrap();
        assert_eq!(v.as_slice(), &[9, 4, 3, 2, 0]);
    }

    #[test]
    fn test_reverse_sort_is_stable() {
        let mut v = DynamicArray::from([(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')]);
        let (f, l) = (v.rbegin(), v.rend());
        sort_by(&mut v, f, l, |a, b| a.0.cmp(&b.0)).unwrap();
        // Traversal before: d c b a. Stable by key: d b | c a.
        let traversal: std::vec::Vec<char> = v.iter().rev().map(|p| p.1).collect();
        assert_eq!(traversal, ['d', 'b', 'c', 'a']);
    }

    #[test]
    fn test_max_and_min_element() {
        let v = DynamicArray::from([3, 9, 1, 9, 1]);
        let m = max_element(&v, v.begin(), v.end()).unwrap().unwrap();
        assert_eq!(m.index(), 1);
        let n = min_element(&v, v.begin(), v.end()).unwrap().unwrap();
        assert_eq!(n.index(), 2);

        // Reverse traversal finds the last occurrence in storage first.
        let rm = max_element(&v, v.rbegin(), v.rend()).unwrap().unwrap();
        assert_eq!(rm.index(), 3);
        assert_eq!(v[rm], 9);
    }

    #[test]
    fn test_extremum_of_empty_range_is_none() {
        let v: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(max_element(&v, v.begin(), v.end()), Ok(None));
        assert_eq!(min_element(&v, v.rbegin(), v.rend()), Ok(None));
    }

    #[test]
    fn test_find_and_find_if() {
        let v = DynamicArray::from([4, 8, 15, 16, 23, 42]);
        let hit = find(&v, v.begin(), v.end(), &16).unwrap().unwrap();
        assert_eq!(hit - v.begin(), 3);
        assert_eq!(find(&v, v.begin(), v.end(), &7), Ok(None));

        let odd = find_if(&v, v.rbegin(), v.rend(), |x| x % 2 == 1).unwrap().unwrap();
        assert_eq!(v[odd], 23);
        assert_eq!(odd - v.rbegin(), 1);
    }

    #[test]
    fn test_stale_range_is_rejected() {
        let mut v = DynamicArray::from([2, 1]);
        let (f, l) = (v.begin(), v.end());
        v.push(0).unwrap();
        assert_eq!(sort(&mut v, f, l), Err(Error::Invalidated));
        assert_eq!(v.as_slice(), &[2, 1, 0]);
    }

    #[test]
    fn test_inverted_or_out_of_range_is_rejected() {
        let mut v = DynamicArray::from([2, 1]);
        let (f, l) = (v.begin(), v.end());
        assert_eq!(sort(&mut v, l, f), Err(Error::OutOfBounds));
        assert_eq!(find(&v, f, l + 1, &1), Err(Error::OutOfBounds));
        assert_eq!(find(&v, v.rbegin(), v.rend() + 1, &1), Err(Error::OutOfBounds));
    }
}
