//! Conjugation and (Hermitian) transpose.

use crate::{
    matrix::Matrix,
    ops::{elementwise, elementwise_matrix, generate_matrix},
    scalar::Conjugate,
    vector::Vector,
};

/// Element-wise complex conjugate of a matrix. The identity for real types.
pub fn conj<T, const M: usize, const N: usize>(m: &Matrix<T, M, N>) -> Matrix<T, M, N>
where
    T: Conjugate + Copy,
{
    elementwise_matrix(Conjugate::conj, m)
}

/// Element-wise complex conjugate of a vector.
pub fn conj_vector<T, const N: usize>(v: &Vector<T, N>) -> Vector<T, N>
where
    T: Conjugate + Copy,
{
    elementwise(Conjugate::conj, v)
}

/// Transpose a matrix: `result[i][j] == m[j][i]`.
pub fn transpose<T, const M: usize, const N: usize>(m: &Matrix<T, M, N>) -> Matrix<T, N, M>
where
    T: Copy,
{
    generate_matrix(|i, j| m[j][i])
}

/// Conjugate transpose. Equal to [`transpose`] for real element types.
pub fn hermitian<T, const M: usize, const N: usize>(m: &Matrix<T, M, N>) -> Matrix<T, N, M>
where
    T: Conjugate + Copy,
{
    transpose(&conj(m))
}
