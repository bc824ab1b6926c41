//! Matrix multiplication operations.

use crate::{
    matrix::Matrix,
    ops::{generate_matrix, sum},
};
use num_traits::Zero;
use std::ops::Mul;

/// Matrix multiplication of an `M x N` matrix by an `N x P` matrix.
///
/// Cell `(i, j)` is the sum of the element-wise product of row `i` of `a`
/// and column `j` of `b`, added in index order. A mismatched inner dimension
/// does not compile:
///
/// ```compile_fail
/// use linrust::{matmul, Matrix};
///
/// let a = Matrix::<f64, 2, 3>::default();
/// let b = Matrix::<f64, 2, 3>::default();
/// let _ = matmul(&a, &b);
/// ```
pub fn matmul<T, const M: usize, const N: usize, const P: usize>(
    a: &Matrix<T, M, N>,
    b: &Matrix<T, N, P>,
) -> Matrix<T, M, P>
where
    T: Zero + Mul<Output = T> + Copy,
{
    generate_matrix(|i, j| sum(&(a.row(i) * b.column(j))))
}
