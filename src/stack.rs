// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A LIFO stack of owned, singly linked nodes.
//!
//! [`Stack<T>`] keeps a logical capacity that follows the same doubling policy
//! as [`DynamicArray`](crate::DynamicArray). Nodes are allocated one per
//! element, so the capacity is bookkeeping only: it bounds growth through
//! [`max_capacity`](Stack::max_capacity) and reports how far the stack has
//! grown.
//!
//! All failures are recoverable: popping or peeking an empty stack returns
//! [`Error::Empty`] and pushing past the maximum returns [`Error::Overflow`].
//!
//! ```rust
//! use dynamic_array::Stack;
//!
//! let mut s = Stack::new();
//! for x in [1, 2, 10] {
//!     s.push(x).unwrap();
//! }
//! assert_eq!(s.erase_and_save(2), vec![10, 2]);
//! assert_eq!(s.top(), Ok(&1));
//! ```

// Crate imports
use crate::{error::Error, growth};

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// Core imports
use core::{fmt, iter::FusedIterator};

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// Singly linked LIFO stack.
pub struct Stack<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
    cap: usize,
    max: usize,
}

impl<T> Stack<T> {
    /// Constructs an empty stack with capacity 1.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Constructs an empty stack with the given starting capacity, clamped to
    /// [`max_elements`](crate::max_elements) for `T`.
    pub fn with_capacity(capacity: usize) -> Self {
        let max = growth::max_elements::<T>();
        Self {
            head: None,
            len: 0,
            cap: capacity.min(max),
            max,
        }
    }

    /// Constructs an empty stack that refuses to hold more than `max` elements.
    pub fn with_max_capacity(max: usize) -> Self {
        let max = max.min(growth::max_elements::<T>());
        Self {
            head: None,
            len: 0,
            cap: max.min(1),
            max,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Logical capacity; doubles whenever a push finds the stack full.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the largest capacity this stack may grow to.
    #[inline]
    pub fn max_capacity(&self) -> usize {
        self.max
    }

    /// Pushes `value` on top.
    ///
    /// When `len() == capacity()` the capacity doubles first. Returns
    /// [`Error::Overflow`] if it is already at
    /// [`max_capacity`](Self::max_capacity); the stack is left unchanged.
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        if self.len == self.cap {
            self.cap = growth::doubled(self.cap, self.max)?;
        }
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Result<T, Error> {
        match self.head.take() {
            Some(node) => {
                let node = *node;
                self.head = node.next;
                self.len -= 1;
                Ok(node.value)
            }
            None => {
                log::debug!("pop on empty stack");
                Err(Error::Empty)
            }
        }
    }

    /// Returns the top element.
    pub fn top(&self) -> Result<&T, Error> {
        match self.head.as_deref() {
            Some(node) => Ok(&node.value),
            None => {
                log::debug!("top on empty stack");
                Err(Error::Empty)
            }
        }
    }

    /// Returns the top element mutably.
    pub fn top_mut(&mut self) -> Result<&mut T, Error> {
        match self.head.as_deref_mut() {
            Some(node) => Ok(&mut node.value),
            None => {
                log::debug!("top_mut on empty stack");
                Err(Error::Empty)
            }
        }
    }

    /// Pops up to `k` elements and returns them in the order they were
    /// popped (former top first). Stops early when the stack runs empty.
    pub fn erase_and_save(&mut self, k: usize) -> Vec<T> {
        let mut saved = Vec::with_capacity(k.min(self.len));
        while saved.len() < k {
            match self.pop() {
                Ok(v) => saved.push(v),
                Err(_) => break,
            }
        }
        saved
    }

    /// Iterates from top to bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Exchanges contents, sizes and limits with `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.len = 0;
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    // Unlinks node by node so long stacks do not recurse through Box drops.
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for Stack<T> {
    /// Deep copy with the same element order, capacity and maximum.
    fn clone(&self) -> Self {
        let mut out = Self {
            head: None,
            len: self.len,
            cap: self.cap,
            max: self.max,
        };
        let mut tail = &mut out.head;
        for value in self.iter() {
            let node = tail.insert(Box::new(Node {
                value: value.clone(),
                next: None,
            }));
            tail = &mut node.next;
        }
        out
    }

    /// Copy-and-swap: the replacement is built in full before `self` changes.
    fn clone_from(&mut self, source: &Self) {
        let mut replacement = source.clone();
        self.swap(&mut replacement);
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Stack<T> {}

/// Borrowing iterator over a [`Stack`], top first.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
