// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynamicArray, error::Error};

impl<T> DynamicArray<T> {
    /// Exchanges buffers, sizes and limits with `other` in constant time.
    ///
    /// Cursors follow their buffer: a cursor taken from `self` before the swap
    /// resolves against `other` afterwards.
    ///
    /// `v.swap(i, j)` is the slice method and exchanges two elements.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }
}

impl<T: Default + Clone> DynamicArray<T> {
    /// Fallible deep copy: the result has `capacity() == len() == self.len()`.
    pub fn try_clone(&self) -> Result<Self, Error> {
        let mut out = Self::try_with_capacity(self.len)?;
        out.buf.clone_from_slice(self.as_slice());
        out.len = self.len;
        out.max = self.max;
        Ok(out)
    }

    /// Replaces the contents of `self` with a deep copy of `source`.
    ///
    /// The copy is built first and then swapped in, so if building it fails
    /// `self` is left exactly as it was.
    pub fn assign_from(&mut self, source: &Self) -> Result<(), Error> {
        let mut replacement = source.try_clone()?;
        self.swap_with(&mut replacement);
        Ok(())
    }
}

impl<T: Default + Clone> Clone for DynamicArray<T> {
    /// Deep copy sized to the source's length, not its capacity.
    ///
    /// # Panics
    ///
    /// Panics if the allocator fails. Use [`DynamicArray::try_clone`] to
    /// handle that case.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(v) => v,
            Err(e) => panic!("DynamicArray::clone: {e}"),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(e) = self.assign_from(source) {
            panic!("DynamicArray::clone_from: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{DynamicArray, Error};

    #[test]
    fn test_clone_is_deep_and_independent() {
        let v = DynamicArray::from([1, 2, 3]);
        let mut c = v.clone();
        c.push(4).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!(c.as_slice(), &[1, 2, 3, 4]);

        c[0] = 100;
        assert_eq!(v[0], 1);
    }

    #[test]
    fn test_clone_sizes_to_len_not_capacity() {
        let mut v: DynamicArray<i32> = DynamicArray::with_capacity(64);
        v.extend([1, 2, 3]);
        let c = v.clone();
        assert_eq!(c.capacity(), 3);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_clone_keeps_max_capacity() {
        let v: DynamicArray<u8> = DynamicArray::with_max_capacity(7);
        assert_eq!(v.clone().max_capacity(), 7);
    }

    #[test]
    fn test_clone_of_empty_has_no_buffer() {
        let v: DynamicArray<i32> = DynamicArray::new();
        let c = v.clone();
        assert!(c.is_empty());
        assert_eq!(c.capacity(), 0);
    }

    #[test]
    fn test_cursor_from_original_is_rejected_by_clone() {
        let v = DynamicArray::from([1, 2, 3]);
        let c = v.clone();
        assert_eq!(c.at(v.begin()), Err(Error::Invalidated));
    }

    #[test]
    fn test_assign_from_replaces_contents() {
        let mut v = DynamicArray::from([0, 1, 2, 3, 4]);
        let mut arr = v.clone();
        for i in 0..3 {
            arr.push(420 + i).unwrap();
        }
        v.assign_from(&arr).unwrap();
        assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4, 420, 421, 422]);
        assert_eq!(v.capacity(), 8);

        arr.push(1).unwrap();
        assert_eq!(v.len(), 8);
    }

    #[test]
    fn test_clone_from_uses_copy_and_swap() {
        let mut v = DynamicArray::from([9, 9]);
        let src = DynamicArray::from([1, 2, 3]);
        v.clone_from(&src);
        assert_eq!(v, src);
    }

    #[test]
    fn test_swap_exchanges_everything() {
        let mut a = DynamicArray::from([1, 2, 3]);
        let mut b: DynamicArray<i32> = DynamicArray::with_capacity(10);
        b.push(7).unwrap();
        let ca = a.begin();

        a.swap_with(&mut b);
        assert_eq!(a.as_slice(), &[7]);
        assert_eq!(a.capacity(), 10);
        assert_eq!(b.as_slice(), &[1, 2, 3]);
        assert_eq!(b.capacity(), 3);

        // The cursor followed its buffer.
        assert_eq!(b.at(ca), Ok(&1));
        assert_eq!(a.at(ca), Err(Error::Invalidated));
    }

    #[test]
    fn test_element_swap_still_reaches_slice() {
        let mut v = DynamicArray::from([1, 2, 3]);
        v.swap(0, 2);
        assert_eq!(v.as_slice(), &[3, 2, 1]);
        assert_eq!(v.capacity(), 3);
    }
}
