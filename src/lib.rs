// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `dynamic-array`
//!
//! A `no_std` + `alloc` growable array with explicit capacity control,
//! validated random-access cursors and a small linked stack,
//! **with no `unsafe`**.
//!
//! The core type, [`DynamicArray<T>`], owns one contiguous heap buffer and
//! tracks a logical length `len ∈ 0..=capacity`. Unlike `Vec`, capacity is
//! part of the observable contract: growth follows a fixed policy, every
//! reallocation can be predicted, and running past a per-instance
//! [`max_capacity`](DynamicArray::max_capacity) is a recoverable
//! [`Error::Overflow`] instead of an abort.
//!
//! ## Growth policy
//!
//! - [`DynamicArray::new`] starts with capacity 1.
//! - [`DynamicArray::push`] on a full array doubles the capacity
//!   (`0 → 1`, otherwise `2×`, clamped to the maximum).
//! - [`DynamicArray::insert_at`] / [`DynamicArray::insert_slice`] of `n`
//!   elements that do not fit reallocate to exactly `len + n + 1`.
//! - [`DynamicArray::reserve`] and [`DynamicArray::resized`] allocate exactly
//!   the requested capacity.
//! - [`DynamicArray::cleared`] releases the buffer (`capacity() == 0`).
//!
//! Failed operations leave the array unchanged.
//!
//! ## Cursors
//!
//! [`Cursor`] and [`RevCursor`] are plain `Copy` positions obtained from
//! `begin`/`end` and `rbegin`/`rend`. They support the usual random-access
//! arithmetic (`c + n`, `c - n`, `b - a`, `inc`, `post_inc`, ...) and
//! compare in traversal order. Each carries the stamp of the buffer it came
//! from; after a reallocation or insertion, resolving it yields
//! [`Error::Invalidated`] and indexing with it panics. The [`algo`] module
//! sorts, searches and finds extrema over either kind through the shared
//! [`Position`] trait.
//!
//! ## Stack
//!
//! [`Stack<T>`] is a singly linked LIFO with the same doubling capacity
//! bookkeeping, recoverable `pop`/`top` errors and bulk
//! [`erase_and_save`](Stack::erase_and_save).
//!
//! ## Logging
//!
//! The crate emits records through the [`log`] facade: `trace` for every
//! reallocation and `debug` for rejected operations. Install any logger to
//! see them.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for [`DynamicArray<T>`]
//!   (`T: Default` for deserializing) and [`Stack<T>`].
//!
//! ## Example
//!
//! ```rust
//! use dynamic_array::{algo, DynamicArray, Error, Format};
//!
//! let mut v = DynamicArray::from([10, 2, 3, 1, 5]);
//! let (first, last) = (v.begin(), v.end());
//! let max = algo::max_element(&v, first, last).unwrap().unwrap();
//! assert_eq!(v[max], 10);
//!
//! let stale = v.begin();
//! v.push(7).unwrap(); // full: capacity 5 -> 10
//! assert_eq!(v.capacity(), 10);
//! assert_eq!(v.at(stale), Err(Error::Invalidated));
//!
//! let (first, last) = (v.rbegin(), v.rend());
//! algo::sort(&mut v, first, last).unwrap();
//! assert_eq!(v.render(Format::Plain).to_string(), "10 7 5 3 2 1");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
pub mod algo;
mod array;
mod error;
mod growth;
mod index;
mod iter;
mod render;
#[cfg(feature = "serde")]
mod serde;
mod stack;

// Public exports (crate API surface)
pub use array::DynamicArray;
pub use error::Error;
pub use growth::max_elements;
pub use iter::{Cursor, IntoIter, Position, RevCursor};
pub use render::{Format, Render};
pub use stack::{Iter as StackIter, Stack};
