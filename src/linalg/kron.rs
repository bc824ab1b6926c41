//! Kronecker product.

use crate::{matrix::Matrix, ops::generate_matrix};
use std::ops::Mul;

/// Kronecker tensor product of an `M x N` matrix and a `P x Q` matrix.
///
/// The result is an `MP x NQ` block matrix whose `(r, c)` block is
/// `a[r][c] * b`. The output shape is usually inferred from the binding:
///
/// ```
/// use linrust::{kron, Matrix};
///
/// let a = Matrix::new([[1, 2]]);
/// let b = Matrix::new([[1], [10]]);
/// let k: Matrix<i32, 2, 2> = kron(&a, &b);
/// assert_eq!(k, Matrix::new([[1, 2], [10, 20]]));
/// ```
///
/// Any output shape other than `(M * P) x (N * Q)` fails to compile:
///
/// ```compile_fail
/// use linrust::{kron, Matrix};
///
/// let a = Matrix::new([[1, 2], [3, 4]]);
/// let b = Matrix::new([[5, 6], [7, 8]]);
/// let _k: Matrix<i32, 3, 3> = kron(&a, &b);
/// ```
pub fn kron<
    T,
    const M: usize,
    const N: usize,
    const P: usize,
    const Q: usize,
    const MP: usize,
    const NQ: usize,
>(
    a: &Matrix<T, M, N>,
    b: &Matrix<T, P, Q>,
) -> Matrix<T, MP, NQ>
where
    T: Mul<Output = T> + Copy,
{
    const {
        assert!(
            MP == M * P && NQ == N * Q,
            "kron output must be (M * P) x (N * Q)"
        )
    };
    generate_matrix(|i, j| a[i / P][j / Q] * b[i % P][j % Q])
}
