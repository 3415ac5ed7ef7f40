// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynamicArray, error::Error, iter::Cursor, iter::Stamp};

impl<T: Default + Clone> DynamicArray<T> {
    /// Inserts clones of `values` before `index`, shifting the tail right.
    ///
    /// - Returns [`Error::OutOfBounds`] if `index > len` (`index == len` appends).
    /// - Empty `values` is a no-op.
    /// - Grows to `len + values.len() + 1` slots when the values do not fit;
    ///   returns [`Error::Overflow`] if that exceeds `max_capacity()`.
    /// - On error the array is unchanged.
    ///
    /// Every outstanding cursor is invalidated by a successful non-empty
    /// insertion, whether or not the buffer moved.
    pub fn insert_slice(&mut self, index: usize, values: &[T]) -> Result<(), Error> {
        if index > self.len {
            log::debug!("insert position {index} outside 0..={}", self.len);
            return Err(Error::OutOfBounds);
        }
        let n = values.len();
        if n == 0 {
            return Ok(());
        }
        let needed = self.len.checked_add(n).ok_or(Error::Overflow)?;
        if needed > self.capacity() {
            self.grow_to(needed)?;
        }

        // Shift right: [index..len) -> [index+n..len+n); the spare slots
        // [len..len+n) rotate into the gap and are overwritten below.
        self.buf[index..needed].rotate_right(n);
        self.buf[index..index + n].clone_from_slice(values);

        self.len = needed;
        self.stamp = Stamp::fresh();
        Ok(())
    }

    /// Inserts clones of `values` before the element `position` refers to.
    ///
    /// `position` must come from this array's current buffer and lie in
    /// `[begin(), end()]`. A cursor taken before a reallocation returns
    /// [`Error::Invalidated`]; one outside the range returns
    /// [`Error::OutOfBounds`]. See [`insert_slice`](Self::insert_slice) for
    /// the remaining semantics.
    pub fn insert_at(&mut self, position: Cursor, values: &[T]) -> Result<(), Error> {
        if position.stamp != self.stamp {
            log::debug!("insert_at with a stale cursor");
            return Err(Error::Invalidated);
        }
        let index = usize::try_from(position.pos).map_err(|_| Error::OutOfBounds)?;
        self.insert_slice(index, values)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{DynamicArray, Error};

    #[test]
    fn test_insert_at_end_appends() {
        let mut v = DynamicArray::from([1, 2, 3]);
        let end = v.end();
        v.insert_at(end, &[100, 100]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 100, 100]);
    }

    #[test]
    fn test_insert_at_interior_shifts_tail() {
        let mut v = DynamicArray::from([10, 20, 30, 40]);
        let mut it = v.begin();
        it.post_inc();
        it.inc();
        v.insert_at(it, &DynamicArray::from_elem(2, &100).unwrap()).unwrap();
        assert_eq!(v.as_slice(), &[10, 20, 100, 100, 30, 40]);
    }

    #[test]
    fn test_insert_at_front() {
        let mut v = DynamicArray::from([3, 4]);
        let begin = v.begin();
        v.insert_at(begin, &[1, 2]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_uses_exact_fit_growth() {
        let mut v = DynamicArray::from([1, 2, 3]);
        assert_eq!(v.capacity(), 3);
        v.insert_slice(1, &[9, 9, 9, 9]).unwrap();
        assert_eq!(v.len(), 7);
        assert_eq!(v.capacity(), 8);
        assert_eq!(v.as_slice(), &[1, 9, 9, 9, 9, 2, 3]);
    }

    #[test]
    fn test_insert_without_growth_reuses_spare_slots() {
        let mut v: DynamicArray<i32> = DynamicArray::with_capacity(10);
        v.extend([1, 2, 3, 4]);
        v.pop().unwrap(); // leaves a stale 4 in slot 3
        v.insert_slice(0, &[0]).unwrap();
        assert_eq!(v.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(v.capacity(), 10);
    }

    #[test]
    fn test_insert_past_len_errors_and_is_noop() {
        let mut v = DynamicArray::from([1, 2, 3]);
        let past = v.end() + 1;
        assert_eq!(v.insert_at(past, &[7]), Err(Error::OutOfBounds));
        let before = v.begin() - 1;
        assert_eq!(v.insert_at(before, &[7]), Err(Error::OutOfBounds));
        assert_eq!(v.insert_slice(4, &[7]), Err(Error::OutOfBounds));
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_insert_empty_is_noop_and_keeps_cursors() {
        let mut v = DynamicArray::from([1, 2, 3]);
        let c = v.begin() + 1;
        v.insert_at(c, &[]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!(v.at(c), Ok(&2));
    }

    #[test]
    fn test_insert_invalidates_cursors_even_without_growth() {
        let mut v: DynamicArray<i32> = DynamicArray::with_capacity(8);
        v.extend([1, 2, 3]);
        let c = v.begin();
        v.insert_slice(3, &[4]).unwrap();
        assert_eq!(v.at(c), Err(Error::Invalidated));
        assert_eq!(v.insert_at(c, &[0]), Err(Error::Invalidated));
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_past_max_capacity_is_noop() {
        let mut v: DynamicArray<u8> = DynamicArray::with_max_capacity(4);
        v.extend([1, 2, 3]);
        assert_eq!(v.insert_slice(0, &[9, 9]), Err(Error::Overflow));
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }
}
