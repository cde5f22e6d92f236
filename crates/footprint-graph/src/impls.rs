//! [`Inspect`] impls for common std types, so hosts only hand-implement
//! [`crate::Structured`] for their own types.
//!
//! Primitive scalars are deliberately [`Shape::Opaque`]: they live inline in
//! their parent and are covered by the parent's flat object cost.
//!
//! Only sized types can flow through [`crate::FieldAccess`] or a component
//! root (the trait-object coercion needs a thin reference), so slice-backed
//! storage reaches [`Shape::Array`] via `[T; N]` or an owning container.
//! `str` keeps an impl so `String` can delegate to it.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::shape::{Inspect, Shape};

impl<T, const N: usize> Inspect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Array { len: N as u64 }
    }
}

impl<T> Inspect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Collection { entries: self.len() as u64 }
    }
}

impl<T> Inspect for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Collection { entries: self.len() as u64 }
    }
}

impl<T, S> Inspect for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Collection { entries: self.len() as u64 }
    }
}

impl<T> Inspect for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Collection { entries: self.len() as u64 }
    }
}

impl<K, V, S> Inspect for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map { entries: self.len() as u64 }
    }
}

impl<K, V> Inspect for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map { entries: self.len() as u64 }
    }
}

impl Inspect for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Text { chars: self.chars().count() as u64 }
    }
}

impl Inspect for String {
    fn shape(&self) -> Shape<'_> {
        self.as_str().shape()
    }
}

macro_rules! opaque_impls {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Opaque
                }
            }
        )*
    };
}

opaque_impls!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
