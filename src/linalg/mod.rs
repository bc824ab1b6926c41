//! Linear algebra operations for fixed-shape matrices.
//! Every operation here is expressed through the combinators in [`crate::ops`].

mod inverse;
mod kron;
mod matmul;
mod transpose;

pub use inverse::*;
pub use kron::*;
pub use matmul::*;
pub use transpose::*;

use crate::{
    error::Result,
    matrix::Matrix,
    ops::sum,
    scalar::{Conjugate, Modulus},
};
use num_traits::{Num, Zero};
use std::ops::Neg;

/// Sum of the main diagonal of a square matrix.
pub fn trace<T, const M: usize>(m: &Matrix<T, M, M>) -> T
where
    T: Zero + Copy,
{
    sum(&m.diagonal())
}

/// Trait for linear algebra operations on matrices of any shape.
pub trait LinearAlgebra<T, const M: usize, const N: usize> {
    /// Matrix multiplication.
    fn matmul<const P: usize>(&self, rhs: &Matrix<T, N, P>) -> Matrix<T, M, P>;

    /// Matrix transpose.
    fn t(&self) -> Matrix<T, N, M>;

    /// Hermitian (conjugate) transpose.
    fn h(&self) -> Matrix<T, N, M>
    where
        T: Conjugate;

    /// Kronecker product.
    fn kron<const P: usize, const Q: usize, const MP: usize, const NQ: usize>(
        &self,
        rhs: &Matrix<T, P, Q>,
    ) -> Matrix<T, MP, NQ>;
}

/// Trait for operations that only exist for square matrices.
pub trait SquareMatrix<T, const M: usize> {
    /// Matrix inverse.
    fn inv(&self) -> Result<Matrix<T, M, M>>;

    /// Matrix inverse with a pivot tolerance.
    fn inv_with_tolerance(&self, tolerance: <T as Modulus>::Real) -> Result<Matrix<T, M, M>>
    where
        T: Modulus;

    /// Matrix determinant. Only defined for signed element types.
    fn det(&self) -> T
    where
        T: Neg<Output = T>;

    /// Sum of the main diagonal.
    fn trace(&self) -> T;
}

impl<T, const M: usize, const N: usize> LinearAlgebra<T, M, N> for Matrix<T, M, N>
where
    T: Num + Copy,
{
    fn matmul<const P: usize>(&self, rhs: &Matrix<T, N, P>) -> Matrix<T, M, P> {
        matmul(self, rhs)
    }

    fn t(&self) -> Matrix<T, N, M> {
        transpose(self)
    }

    fn h(&self) -> Matrix<T, N, M>
    where
        T: Conjugate,
    {
        hermitian(self)
    }

    fn kron<const P: usize, const Q: usize, const MP: usize, const NQ: usize>(
        &self,
        rhs: &Matrix<T, P, Q>,
    ) -> Matrix<T, MP, NQ> {
        kron(self, rhs)
    }
}

impl<T, const M: usize> SquareMatrix<T, M> for Matrix<T, M, M>
where
    T: Num + Copy,
{
    fn inv(&self) -> Result<Matrix<T, M, M>> {
        inverse(self)
    }

    fn inv_with_tolerance(&self, tolerance: <T as Modulus>::Real) -> Result<Matrix<T, M, M>>
    where
        T: Modulus,
    {
        inverse_with_tolerance(self, tolerance)
    }

    fn det(&self) -> T
    where
        T: Neg<Output = T>,
    {
        determinant(self)
    }

    fn trace(&self) -> T {
        trace(self)
    }
}
