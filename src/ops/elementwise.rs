//! Element-wise operations for vectors and matrices.

use crate::{matrix::Matrix, vector::Vector};
use num_traits::AsPrimitive;

/// Apply a function element-wise to a vector.
pub fn elementwise<T, U, F, const N: usize>(mut f: F, v: &Vector<T, N>) -> Vector<U, N>
where
    T: Copy,
    F: FnMut(T) -> U,
{
    Vector::new(std::array::from_fn(|i| f(v[i])))
}

/// Apply a function element-wise to two vectors of the same length.
///
/// ```compile_fail
/// use linrust::{elementwise2, Vector};
///
/// let _ = elementwise2(|x: i32, y: i32| x + y, &Vector::new([1, 2]), &Vector::new([1, 2, 3]));
/// ```
pub fn elementwise2<A, B, U, F, const N: usize>(
    mut f: F,
    a: &Vector<A, N>,
    b: &Vector<B, N>,
) -> Vector<U, N>
where
    A: Copy,
    B: Copy,
    F: FnMut(A, B) -> U,
{
    Vector::new(std::array::from_fn(|i| f(a[i], b[i])))
}

/// Apply a function element-wise to three vectors of the same length.
pub fn elementwise3<A, B, C, U, F, const N: usize>(
    mut f: F,
    a: &Vector<A, N>,
    b: &Vector<B, N>,
    c: &Vector<C, N>,
) -> Vector<U, N>
where
    A: Copy,
    B: Copy,
    C: Copy,
    F: FnMut(A, B, C) -> U,
{
    Vector::new(std::array::from_fn(|i| f(a[i], b[i], c[i])))
}

/// Apply a function element-wise to a matrix.
pub fn elementwise_matrix<T, U, F, const M: usize, const N: usize>(
    mut f: F,
    m: &Matrix<T, M, N>,
) -> Matrix<U, M, N>
where
    T: Copy,
    F: FnMut(T) -> U,
{
    Matrix::from_rows(elementwise(|row| elementwise(&mut f, &row), m.rows()))
}

/// Apply a function element-wise to two matrices of the same shape.
pub fn elementwise2_matrix<A, B, U, F, const M: usize, const N: usize>(
    mut f: F,
    a: &Matrix<A, M, N>,
    b: &Matrix<B, M, N>,
) -> Matrix<U, M, N>
where
    A: Copy,
    B: Copy,
    F: FnMut(A, B) -> U,
{
    Matrix::from_rows(elementwise2(
        |ra, rb| elementwise2(&mut f, &ra, &rb),
        a.rows(),
        b.rows(),
    ))
}

/// Convert every element with `as` semantics.
pub fn cast<U, T, const N: usize>(v: &Vector<T, N>) -> Vector<U, N>
where
    T: AsPrimitive<U>,
    U: Copy + 'static,
{
    elementwise(|x: T| x.as_(), v)
}

/// Convert every element of a matrix with `as` semantics.
pub fn cast_matrix<U, T, const M: usize, const N: usize>(m: &Matrix<T, M, N>) -> Matrix<U, M, N>
where
    T: AsPrimitive<U>,
    U: Copy + 'static,
{
    elementwise_matrix(|x: T| x.as_(), m)
}

/// Pair up the elements of two vectors.
///
/// ```
/// use linrust::{zip, Vector};
///
/// let pairs = zip(&Vector::new([1, 2]), &Vector::new(['a', 'b']));
/// assert_eq!(pairs, Vector::new([(1, 'a'), (2, 'b')]));
/// ```
///
/// Both vectors must have the same length:
///
/// ```compile_fail
/// use linrust::{zip, Vector};
///
/// let _ = zip(&Vector::new([1, 2]), &Vector::new([1, 2, 3]));
/// ```
pub fn zip<T, U, const N: usize>(a: &Vector<T, N>, b: &Vector<U, N>) -> Vector<(T, U), N>
where
    T: Copy,
    U: Copy,
{
    elementwise2(|x, y| (x, y), a, b)
}

/// A vector holding `N` copies of `value`.
pub const fn fill<const N: usize, T: Copy>(value: T) -> Vector<T, N> {
    Vector::new([value; N])
}

/// A matrix holding `M * N` copies of `value`.
pub fn fill_matrix<const M: usize, const N: usize, T: Copy>(value: T) -> Matrix<T, M, N> {
    Matrix::from_rows(fill(fill(value)))
}

/// Compile-time check that two vectors have the same length. Used by
/// [`elementwise!`](crate::elementwise).
#[doc(hidden)]
#[inline(always)]
pub fn same_length<A, B, const N: usize>(_: &Vector<A, N>, _: &Vector<B, N>) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elementwise() {
        let a = Vector::new([1.0, 2.0, 3.0]);
        let b = elementwise(|x| x * 2.0, &a);
        assert_eq!(b, Vector::new([2.0, 4.0, 6.0]));
    }

    #[test]
    fn test_elementwise_changes_type() {
        let a = Vector::new([1, 2, 3, 4]);
        let even = elementwise(|x: i32| x % 2 == 0, &a);
        assert_eq!(even, Vector::new([false, true, false, true]));
    }

    #[test]
    fn test_elementwise_multiple_inputs() {
        let a = Vector::new([1, 2, 3]);
        let b = Vector::new([10, 20, 30]);
        let c = Vector::new([100, 200, 300]);
        assert_eq!(elementwise2(|x, y| x + y, &a, &b), Vector::new([11, 22, 33]));
        assert_eq!(
            elementwise3(|x, y, z| x + y + z, &a, &b, &c),
            Vector::new([111, 222, 333])
        );
    }

    #[test]
    fn test_elementwise_macro() {
        let a = Vector::new([1, 2]);
        let b = Vector::new([3, 4]);
        let c = Vector::new([5, 6]);
        let d = Vector::new([7, 8]);
        let r = crate::elementwise!(|w: i32, x: i32, y: i32, z: i32| w * x * y * z, a, b, c, d);
        assert_eq!(r, Vector::new([105, 384]));

        let single = crate::elementwise!(|x: i32| -x, a);
        assert_eq!(single, Vector::new([-1, -2]));
    }

    #[test]
    fn test_elementwise_calls_in_index_order() {
        let mut seen = Vec::new();
        let v = Vector::new(['a', 'b', 'c']);
        elementwise(|c| seen.push(c), &v);
        assert_eq!(seen, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_elementwise_matrix() {
        let m = Matrix::new([[1, 2], [3, 4]]);
        let n = Matrix::new([[10, 20], [30, 40]]);
        assert_eq!(elementwise_matrix(|x| x * x, &m), Matrix::new([[1, 4], [9, 16]]));
        assert_eq!(
            elementwise2_matrix(|x, y| y - x, &m, &n),
            Matrix::new([[9, 18], [27, 36]])
        );
    }

    #[test]
    fn test_cast() {
        let v = Vector::new([1.7f64, -2.2, 3.0]);
        let truncated: Vector<i32, 3> = cast(&v);
        assert_eq!(truncated, Vector::new([1, -2, 3]));

        let m = Matrix::new([[1u8, 2], [3, 4]]);
        let wide: Matrix<f32, 2, 2> = cast_matrix(&m);
        assert_eq!(wide, Matrix::new([[1.0, 2.0], [3.0, 4.0]]));
    }

    #[test]
    fn test_zip() {
        let a = Vector::new([1, 2, 3]);
        let b = Vector::new(['x', 'y', 'z']);
        assert_eq!(zip(&a, &b), Vector::new([(1, 'x'), (2, 'y'), (3, 'z')]));
    }

    #[test]
    fn test_fill() {
        const SEVENS: Vector<u8, 3> = fill(7);
        assert_eq!(SEVENS, Vector::new([7, 7, 7]));
        assert_eq!(fill_matrix::<2, 3, _>(0.5), Matrix::new([[0.5; 3]; 2]));
    }
}
