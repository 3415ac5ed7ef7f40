// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`DynamicArray`](crate::DynamicArray) and
//! [`Stack`](crate::Stack).
//!
//! - **Serialize**: both as a plain sequence. An array writes its live
//!   elements front to back; a stack writes bottom to top, so that pushing
//!   the elements in sequence order rebuilds it.
//! - **Deserialize**: from any sequence, growing by the usual doubling policy.
//!
//! Capacity, maximum capacity and cursor stamps are not part of the format.
//! `DynamicArray<T>` additionally needs `T: Default` to fill spare slots.

// Crate imports
use crate::{array::DynamicArray, stack::Stack};

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<T: Serialize> Serialize for DynamicArray<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl<T: Serialize> Serialize for Stack<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        // Iteration is top first; collect references to emit bottom first.
        let items: Vec<&T> = self.iter().collect();
        let mut seq = s.serialize_seq(Some(items.len()))?;
        for item in items.iter().rev() {
            seq.serialize_element(*item)?;
        }
        seq.end()
    }
}

/// Upper bound on memory reserved from a sequence's claimed length. The
/// hint comes from the input and is not trusted; `push` covers the rest.
const MAX_PREALLOC_BYTES: usize = 1024 * 1024;

fn cautious<T>(hint: Option<usize>, max: usize) -> usize {
    let per_elem = core::mem::size_of::<T>().max(1);
    hint.unwrap_or(0).min(MAX_PREALLOC_BYTES / per_elem).min(max)
}

struct ArrayVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for ArrayVisitor<T>
where
    T: Deserialize<'de> + Default,
{
    type Value = DynamicArray<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of array elements")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = DynamicArray::<T>::new();
        let n = cautious::<T>(a.size_hint(), out.max_capacity());
        out.reserve(n).map_err(de::Error::custom)?;
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem).map_err(de::Error::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T> Deserialize<'de> for DynamicArray<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ArrayVisitor::<T>(PhantomData))
    }
}

struct StackVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for StackVisitor<T> {
    type Value = Stack<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of stack elements, bottom first")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = Stack::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem).map_err(de::Error::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Stack<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(StackVisitor::<T>(PhantomData))
    }
}
