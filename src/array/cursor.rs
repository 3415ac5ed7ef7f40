// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    array::DynamicArray,
    error::Error,
    iter::{Cursor, Position, RevCursor},
};

impl<T> DynamicArray<T> {
    /// Cursor at the first element (equal to [`end`](Self::end) when empty).
    #[inline]
    pub fn begin(&self) -> Cursor {
        Cursor::new(0, self.stamp)
    }

    /// Cursor one past the last element.
    #[inline]
    pub fn end(&self) -> Cursor {
        Cursor::new(self.len as isize, self.stamp)
    }

    /// Reverse cursor at the last element (equal to [`rend`](Self::rend) when empty).
    #[inline]
    pub fn rbegin(&self) -> RevCursor {
        RevCursor::new(self.len as isize - 1, self.stamp)
    }

    /// Reverse cursor one before the first element.
    #[inline]
    pub fn rend(&self) -> RevCursor {
        RevCursor::new(-1, self.stamp)
    }

    /// Checks that `p` was taken from the current buffer generation.
    pub(crate) fn check<P: Position>(&self, p: P) -> Result<(), Error> {
        if p.stamp() == self.stamp {
            Ok(())
        } else {
            Err(Error::Invalidated)
        }
    }

    /// Translates `p` into a live index.
    pub(crate) fn resolve<P: Position>(&self, p: P) -> Result<usize, Error> {
        self.check(p)?;
        match usize::try_from(p.slot()) {
            Ok(i) if i < self.len => Ok(i),
            _ => Err(Error::OutOfBounds),
        }
    }

    /// Dereferences a cursor.
    ///
    /// Returns [`Error::Invalidated`] if the buffer was reallocated or shifted
    /// since `p` was taken, and [`Error::OutOfBounds`] if `p` is not on a live
    /// element (for example `end()` or `rend()`).
    #[inline]
    pub fn at<P: Position>(&self, p: P) -> Result<&T, Error> {
        let i = self.resolve(p)?;
        Ok(&self.as_slice()[i])
    }

    /// Mutable variant of [`at`](Self::at).
    #[inline]
    pub fn at_mut<P: Position>(&mut self, p: P) -> Result<&mut T, Error> {
        let i = self.resolve(p)?;
        Ok(&mut self.as_mut_slice()[i])
    }
}
