//! Fixed-length vector type.
//!
//! `Vector<T, N>` is a thin wrapper over `[T; N]`. Its length is part of the
//! type, so combining two vectors of different lengths is rejected by the
//! compiler rather than at runtime.

use crate::error::{LinrustError, Result};
use std::{
    fmt,
    ops::{Add, Index, IndexMut, Mul, Neg, Sub},
};

/// A vector of `N` elements of type `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> Vector<T, N> {
    /// Number of elements, available at compile time.
    pub const SIZE: usize = N;

    /// Creates a vector from an array.
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Returns the number of elements.
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` if the vector has no elements.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_array(self) -> [T; N] {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the element at `index`, or `None` if it is out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Exchanges the elements at `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
    }

    /// Multiplies every element by `k`.
    pub fn scale(&self, k: T) -> Self
    where
        T: Mul<Output = T> + Copy,
    {
        crate::ops::elementwise(|x| x * k, self)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = LinrustError;

    fn try_from(slice: &[T]) -> Result<Self> {
        let data: [T; N] = slice
            .try_into()
            .map_err(|_| LinrustError::shape_mismatch(vec![N], vec![slice.len()]))?;
        Ok(Self::new(data))
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T: Default + Copy, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        crate::ops::fill(T::default())
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

macro_rules! impl_elementwise_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T, const N: usize> $trait for Vector<T, N>
        where
            T: $trait<Output = T> + Copy,
        {
            type Output = Vector<T, N>;

            fn $method(self, rhs: Self) -> Self::Output {
                crate::ops::elementwise2(|a, b| a $op b, &self, &rhs)
            }
        }
    };
}

impl_elementwise_binop!(Add, add, +);
impl_elementwise_binop!(Sub, sub, -);
impl_elementwise_binop!(Mul, mul, *);

impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg<Output = T> + Copy,
{
    type Output = Vector<T, N>;

    fn neg(self) -> Self::Output {
        crate::ops::elementwise(|x: T| -x, &self)
    }
}
