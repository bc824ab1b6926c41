//! Reduction operations for vectors and matrices.

use crate::{matrix::Matrix, vector::Vector};
use num_traits::{One, Zero};
use std::ops::Mul;

/// Left fold over the elements of `v` in index order: `f(f(f(init, v[0]), v[1]), ...)`.
pub fn accumulate<T, U, F, const N: usize>(v: &Vector<T, N>, init: U, mut f: F) -> U
where
    T: Copy,
    F: FnMut(U, T) -> U,
{
    v.iter().fold(init, |acc, &x| f(acc, x))
}

/// Left fold over the elements of `m` in row-major order.
pub fn accumulate_matrix<T, U, F, const M: usize, const N: usize>(
    m: &Matrix<T, M, N>,
    init: U,
    mut f: F,
) -> U
where
    T: Copy,
    F: FnMut(U, T) -> U,
{
    accumulate(m.rows(), init, |acc, row| accumulate(&row, acc, &mut f))
}

/// Compute the sum of all elements in the vector.
pub fn sum<T, const N: usize>(v: &Vector<T, N>) -> T
where
    T: Zero + Copy,
{
    accumulate(v, T::zero(), |acc, x| acc + x)
}

/// Compute the product of all elements in the vector.
pub fn product<T, const N: usize>(v: &Vector<T, N>) -> T
where
    T: One + Copy,
{
    accumulate(v, T::one(), |acc, x| acc * x)
}

/// Unconjugated inner product `sum(a * b)`.
pub fn dot<T, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> T
where
    T: Zero + Mul<Output = T> + Copy,
{
    sum(&(*a * *b))
}

/// Find the minimum value in the vector, or `None` if it is empty.
///
/// Incomparable values (NaN) never replace the running minimum.
pub fn min_element<T, const N: usize>(v: &Vector<T, N>) -> Option<T>
where
    T: PartialOrd + Copy,
{
    accumulate(v, None, |acc: Option<T>, x| match acc {
        Some(m) if !(x < m) => Some(m),
        _ => Some(x),
    })
}

/// Find the maximum value in the vector, or `None` if it is empty.
///
/// Incomparable values (NaN) never replace the running maximum.
pub fn max_element<T, const N: usize>(v: &Vector<T, N>) -> Option<T>
where
    T: PartialOrd + Copy,
{
    accumulate(v, None, |acc: Option<T>, x| match acc {
        Some(m) if !(x > m) => Some(m),
        _ => Some(x),
    })
}
