// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capacity arithmetic shared by [`DynamicArray`](crate::DynamicArray) and
//! [`Stack`](crate::Stack).
//!
//! Overflow is defined against an explicit maximum element count rather than
//! against the element type's value range. The default maximum is the largest
//! element count an allocation may address (`isize::MAX` bytes).

// Crate imports
use crate::error::Error;

/// Largest number of `T` a single allocation can hold.
///
/// Zero-sized types are capped at `isize::MAX` so that cursor arithmetic on
/// positions never overflows.
pub const fn max_elements<T>() -> usize {
    let size = core::mem::size_of::<T>();
    if size == 0 {
        isize::MAX as usize
    } else {
        isize::MAX as usize / size
    }
}

/// Accepts an element count of at most `max`.
pub(crate) fn within(n: usize, max: usize) -> Result<usize, Error> {
    if n > max {
        log::debug!("{n} elements exceed max capacity {max}");
        return Err(Error::Overflow);
    }
    Ok(n)
}

/// Next capacity under the doubling policy: `0 → 1`, otherwise `2 × cap`,
/// clamped to `max`. Fails once `cap` has already reached `max`.
pub(crate) fn doubled(cap: usize, max: usize) -> Result<usize, Error> {
    if cap >= max {
        log::debug!("refusing to grow past max capacity {max}");
        return Err(Error::Overflow);
    }
    Ok(if cap == 0 { 1 } else { cap.saturating_mul(2).min(max) })
}

/// Capacity for a caller that needs room for `n` elements: `n + 1` slots,
/// clamped to `max`. Fails when `n` itself exceeds `max`.
pub(crate) fn exact_fit(n: usize, max: usize) -> Result<usize, Error> {
    if n > max {
        log::debug!("requested {n} slots, max capacity is {max}");
        return Err(Error::Overflow);
    }
    Ok(n.saturating_add(1).min(max))
}
