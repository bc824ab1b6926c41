//! Fixed-shape matrix type.
//!
//! `Matrix<T, M, N>` stores `M` rows, each a [`Vector<T, N>`]. Both
//! dimensions are const generic parameters, so shape compatibility of
//! operations such as [`matmul`](crate::linalg::matmul) is checked by the type
//! system.

use crate::{
    error::{LinrustError, Result},
    ops::{elementwise, elementwise2_matrix, elementwise_matrix, generate, generate_matrix},
    vector::Vector,
};
use num_traits::{One, Zero};
use std::{
    fmt,
    ops::{Add, Index, IndexMut, Mul, Neg, Sub},
};

/// A row-major `M x N` matrix of elements of type `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix<T, const M: usize, const N: usize> {
    rows: Vector<Vector<T, N>, M>,
}

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Number of rows.
    pub const ROWS: usize = M;
    /// Number of columns.
    pub const COLS: usize = N;
    /// `(rows, columns)`.
    pub const SHAPE: (usize, usize) = (M, N);

    /// Creates a matrix from row-major nested arrays. Use [`Matrix::from_rows`]
    /// where a `const fn` is needed.
    pub fn new(data: [[T; N]; M]) -> Self {
        Self::from_rows(Vector::new(data.map(Vector::new)))
    }

    /// Creates a matrix from its rows.
    pub const fn from_rows(rows: Vector<Vector<T, N>, M>) -> Self {
        Self { rows }
    }

    /// Creates a matrix from a row-major slice of exactly `M * N` elements.
    pub fn from_row_slice(data: &[T]) -> Result<Self>
    where
        T: Copy,
    {
        if data.len() != M * N {
            return Err(LinrustError::shape_mismatch(vec![M, N], vec![data.len()]));
        }
        Ok(generate_matrix(|i, j| data[i * N + j]))
    }

    /// Returns the shape as `(rows, columns)`.
    pub const fn shape(&self) -> (usize, usize) {
        (M, N)
    }

    /// All rows, as a vector of row vectors.
    pub fn rows(&self) -> &Vector<Vector<T, N>, M> {
        &self.rows
    }

    /// Copy of row `i`.
    pub fn row(&self, i: usize) -> Vector<T, N>
    where
        T: Copy,
    {
        self.rows[i]
    }

    /// Copy of column `j`.
    pub fn column(&self, j: usize) -> Vector<T, M>
    where
        T: Copy,
    {
        elementwise(|row: Vector<T, N>| row[j], &self.rows)
    }

    /// Returns the element at `(i, j)`, or `None` if it is out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        self.rows.get(i).and_then(|row| row.get(j))
    }

    /// Exchanges rows `i` and `j`.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.rows.swap(i, j);
    }

    /// Returns the elements as row-major nested arrays.
    pub fn to_array(&self) -> [[T; N]; M]
    where
        T: Copy,
    {
        self.rows.into_array().map(Vector::into_array)
    }

    /// Multiplies every element by `k`.
    pub fn scale(&self, k: T) -> Self
    where
        T: Mul<Output = T> + Copy,
    {
        elementwise_matrix(|x| x * k, self)
    }
}

impl<T, const M: usize> Matrix<T, M, M>
where
    T: Zero + One + Copy,
{
    /// The `M x M` identity matrix.
    pub fn identity() -> Self {
        generate_matrix(|i, j| if i == j { T::one() } else { T::zero() })
    }
}

impl<T: Copy, const M: usize> Matrix<T, M, M> {
    /// The main diagonal of a square matrix.
    pub fn diagonal(&self) -> Vector<T, M> {
        generate(|i| self.rows[i][i])
    }
}

/// The `M x M` identity matrix.
pub fn identity<T, const M: usize>() -> Matrix<T, M, M>
where
    T: Zero + One + Copy,
{
    Matrix::identity()
}

impl<T, const M: usize, const N: usize> From<[[T; N]; M]> for Matrix<T, M, N> {
    fn from(data: [[T; N]; M]) -> Self {
        Self::new(data)
    }
}

impl<T: Copy, const M: usize, const N: usize> TryFrom<&[T]> for Matrix<T, M, N> {
    type Error = LinrustError;

    fn try_from(data: &[T]) -> Result<Self> {
        Self::from_row_slice(data)
    }
}

impl<T, const M: usize, const N: usize> Index<usize> for Matrix<T, M, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn index(&self, i: usize) -> &Vector<T, N> {
        &self.rows[i]
    }
}

impl<T, const M: usize, const N: usize> IndexMut<usize> for Matrix<T, M, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Vector<T, N> {
        &mut self.rows[i]
    }
}

impl<T, const M: usize, const N: usize> Index<[usize; 2]> for Matrix<T, M, N> {
    type Output = T;

    #[inline]
    fn index(&self, [i, j]: [usize; 2]) -> &T {
        &self.rows[i][j]
    }
}

impl<T: Default + Copy, const M: usize, const N: usize> Default for Matrix<T, M, N> {
    fn default() -> Self {
        crate::ops::fill_matrix(T::default())
    }
}

impl<T: fmt::Display, const M: usize, const N: usize> fmt::Display for Matrix<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "{}", row)?;
        }
        write!(f, "]")
    }
}

macro_rules! impl_elementwise_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T, const M: usize, const N: usize> $trait for Matrix<T, M, N>
        where
            T: $trait<Output = T> + Copy,
        {
            type Output = Matrix<T, M, N>;

            fn $method(self, rhs: Self) -> Self::Output {
                elementwise2_matrix(|a, b| a $op b, &self, &rhs)
            }
        }
    };
}

impl_elementwise_binop!(Add, add, +);
impl_elementwise_binop!(Sub, sub, -);

impl<T, const M: usize, const N: usize> Neg for Matrix<T, M, N>
where
    T: Neg<Output = T> + Copy,
{
    type Output = Matrix<T, M, N>;

    fn neg(self) -> Self::Output {
        elementwise_matrix(|x: T| -x, &self)
    }
}

/// Matrix product; see [`matmul`](crate::linalg::matmul).
impl<T, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N>
where
    T: Zero + Mul<Output = T> + Copy,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        crate::linalg::matmul(&self, &rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_constants() {
        type M23 = Matrix<f64, 2, 3>;
        assert_eq!(M23::ROWS, 2);
        assert_eq!(M23::COLS, 3);
        assert_eq!(M23::SHAPE, (2, 3));
    }

    #[test]
    fn test_from_rows_in_const_context() {
        const FLIP: Matrix<i32, 2, 2> =
            Matrix::from_rows(Vector::new([Vector::new([0, 1]), Vector::new([1, 0])]));
        assert_eq!(FLIP, Matrix::new([[0, 1], [1, 0]]));
    }

    #[test]
    fn test_indexing() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m[1][2], 6);
        assert_eq!(m[[0, 1]], 2);
        assert_eq!(m.get(1, 0), Some(&4));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
    }

    #[test]
    fn test_row_and_column() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.row(1), Vector::new([4, 5, 6]));
        assert_eq!(m.column(2), Vector::new([3, 6]));
    }

    #[test]
    fn test_from_row_slice() {
        let m = Matrix::<i32, 2, 2>::from_row_slice(&[1, 2, 3, 4]).unwrap();
        assert_eq!(m, Matrix::new([[1, 2], [3, 4]]));
        assert_eq!(m.to_array(), [[1, 2], [3, 4]]);

        let err = Matrix::<i32, 2, 2>::try_from(&[1, 2, 3][..]).unwrap_err();
        assert_eq!(err, LinrustError::shape_mismatch(vec![2, 2], vec![3]));
    }

    #[test]
    fn test_identity_and_diagonal() {
        let i3 = identity::<i32, 3>();
        assert_eq!(i3, Matrix::new([[1, 0, 0], [0, 1, 0], [0, 0, 1]]));
        assert_eq!(i3.diagonal(), Vector::new([1, 1, 1]));
    }

    #[test]
    fn test_swap_rows() {
        let mut m = Matrix::new([[1, 2], [3, 4]]);
        m.swap_rows(0, 1);
        assert_eq!(m, Matrix::new([[3, 4], [1, 2]]));
    }

    #[test]
    fn test_arithmetic() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);
        assert_eq!(a + b, Matrix::new([[6.0, 8.0], [10.0, 12.0]]));
        assert_eq!(b - a, Matrix::new([[4.0, 4.0], [4.0, 4.0]]));
        assert_eq!(-a, Matrix::new([[-1.0, -2.0], [-3.0, -4.0]]));
        assert_eq!(a.scale(0.5), Matrix::new([[0.5, 1.0], [1.5, 2.0]]));
        assert_eq!(a * b, Matrix::new([[19.0, 22.0], [43.0, 50.0]]));
    }

    #[test]
    fn test_display() {
        let m = Matrix::new([[1, 2], [3, 4]]);
        assert_eq!(m.to_string(), "[[1, 2],\n [3, 4]]");
    }
}
