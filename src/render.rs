// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Space-separated text rendering for [`DynamicArray`] and [`Stack`].
//!
//! The number format is chosen by the caller through [`Format`]; nothing here
//! inspects the element type.
//!
//! ```rust
//! use dynamic_array::{DynamicArray, Format};
//!
//! let v = DynamicArray::from([1.5f32, 69.42069]);
//! assert_eq!(v.render(Format::FIXED3).to_string(), "1.500 69.421");
//! assert_eq!(DynamicArray::from([1, 2, 3]).render(Format::Plain).to_string(), "1 2 3");
//! ```

// Crate imports
use crate::{array::DynamicArray, stack::Stack};

// Core imports
use core::fmt;

/// How each element is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// The element's own `Display` output.
    #[default]
    Plain,
    /// Fixed-point with the given number of decimals. Types whose `Display`
    /// ignores precision (integers) print as with [`Format::Plain`].
    Fixed(usize),
}

impl Format {
    /// Three decimals, the usual choice for floating-point elements.
    pub const FIXED3: Format = Format::Fixed(3);
}

/// `Display` adapter returned by the `render` methods.
///
/// Borrows the container; formatting walks it again on every use.
#[derive(Clone)]
pub struct Render<I> {
    items: I,
    format: Format,
}

impl<I> Render<I> {
    pub(crate) fn new(items: I, format: Format) -> Self {
        Self { items, format }
    }
}

impl<I> fmt::Display for Render<I>
where
    I: Iterator + Clone,
    I::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, item) in self.items.clone().enumerate() {
            if k > 0 {
                f.write_str(" ")?;
            }
            match self.format {
                Format::Plain => write!(f, "{item}")?,
                Format::Fixed(p) => write!(f, "{item:.p$}")?,
            }
        }
        Ok(())
    }
}

impl<I> fmt::Debug for Render<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Render").field("format", &self.format).finish_non_exhaustive()
    }
}

impl<T: fmt::Display> DynamicArray<T> {
    /// Live elements from front to back, separated by single spaces.
    pub fn render(&self, format: Format) -> Render<core::slice::Iter<'_, T>> {
        Render::new(self.iter(), format)
    }
}

impl<T: fmt::Display> Stack<T> {
    /// Elements from top to bottom, separated by single spaces.
    pub fn render(&self, format: Format) -> Render<crate::stack::Iter<'_, T>> {
        Render::new(self.iter(), format)
    }
}
