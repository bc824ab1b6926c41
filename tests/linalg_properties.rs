//! Integration tests for the algebraic identities the linear algebra layer must satisfy.

use approx::assert_abs_diff_eq;
use linrust::{
    accumulate, determinant, hermitian, identity, inverse, iota, kron, linspace, matmul,
    transpose, LinearAlgebra, LinrustError, Matrix, SquareMatrix, Vector,
};
use proptest::prelude::*;

fn assert_matrix_close<const M: usize, const N: usize>(
    actual: &Matrix<f64, M, N>,
    expected: &Matrix<f64, M, N>,
    epsilon: f64,
) {
    for i in 0..M {
        for j in 0..N {
            assert_abs_diff_eq!(actual[i][j], expected[i][j], epsilon = epsilon);
        }
    }
}

fn small_int_matrix<const M: usize, const N: usize>() -> impl Strategy<Value = Matrix<i64, M, N>> {
    proptest::collection::vec(-50i64..50, M * N)
        .prop_map(|data| Matrix::from_row_slice(&data).expect("length is M * N"))
}

fn float_matrix<const M: usize, const N: usize>() -> impl Strategy<Value = Matrix<f64, M, N>> {
    proptest::collection::vec(-1.0f64..1.0, M * N)
        .prop_map(|data| Matrix::from_row_slice(&data).expect("length is M * N"))
}

/// Strictly diagonally dominant matrices never produce a zero pivot without row exchanges.
fn diagonally_dominant<const M: usize>() -> impl Strategy<Value = Matrix<f64, M, M>> {
    (float_matrix::<M, M>(), proptest::bool::ANY).prop_map(|(m, negative)| {
        let boost = if negative { -(M as f64) - 1.0 } else { M as f64 + 1.0 };
        m + identity::<f64, M>().scale(boost)
    })
}

#[test]
fn test_inverse_round_trip_fixed() {
    let m = Matrix::new([
        [3.0, 0.0, 2.0],
        [2.0, 0.5, -2.0],
        [0.0, 1.0, 1.0]
    ]);
    let m_inv = inverse(&m).unwrap();
    assert_matrix_close(&matmul(&m, &m_inv), &identity(), 1e-12);
    assert_matrix_close(&matmul(&m_inv, &m), &identity(), 1e-12);
}

#[test]
fn test_inverse_of_zero_matrix_fails() {
    let zero = Matrix::<f64, 2, 2>::default();
    assert_eq!(inverse(&zero), Err(LinrustError::NotInvertible { pivot: 0 }));
    assert_eq!(
        inverse(&zero).unwrap_err().to_string(),
        "Matrix is not invertible: singular pivot at row 0"
    );
}

#[test]
fn test_kron_of_identities() {
    let k: Matrix<i32, 6, 6> = kron(&identity::<i32, 2>(), &identity::<i32, 3>());
    assert_eq!(k, identity());
    assert_eq!(Matrix::<i32, 6, 6>::SHAPE, (2 * 3, 2 * 3));
}

#[test]
fn test_sequences() {
    assert_eq!(linspace::<5, f64>(0.0, 4.0), Vector::new([0.0, 1.0, 2.0, 3.0, 4.0]));
    assert_eq!(iota::<4, i32>(10), Vector::new([10, 11, 12, 13]));
}

#[test]
fn test_accumulate_order() {
    assert_eq!(accumulate(&Vector::new([1, 2, 3, 4]), 0, |a, x| a + x), 10);

    // Subtraction is not commutative: ((100 - 1) - 2) - 3 for a left fold.
    assert_eq!(accumulate(&Vector::new([1, 2, 3]), 100, |a, x| a - x), 94);
    let trail = accumulate(&Vector::new(['a', 'b', 'c']), String::new(), |mut s, c| {
        s.push(c);
        s
    });
    assert_eq!(trail, "abc");
}

#[test]
fn test_determinant_of_inverse() {
    let m = Matrix::new([[2.0, 1.0], [1.0, 3.0]]);
    let m_inv = m.inv().unwrap();
    assert_abs_diff_eq!(determinant(&m) * determinant(&m_inv), 1.0, epsilon = 1e-12);
}

#[cfg(feature = "complex")]
mod complex {
    use super::*;
    use linrust::Complex;

    fn complex_matrix<const M: usize, const N: usize>(
    ) -> impl Strategy<Value = Matrix<Complex<f64>, M, N>> {
        proptest::collection::vec((-10.0f64..10.0, -10.0f64..10.0), M * N).prop_map(|data| {
            let data: Vec<Complex<f64>> =
                data.into_iter().map(|(re, im)| Complex::new(re, im)).collect();
            Matrix::from_row_slice(&data).expect("length is M * N")
        })
    }

    proptest! {
        #[test]
        fn hermitian_is_an_involution(m in complex_matrix::<3, 2>()) {
            prop_assert_eq!(hermitian(&hermitian(&m)), m);
        }

        #[test]
        fn hermitian_conjugates_every_element(m in complex_matrix::<2, 4>()) {
            let h = m.h();
            for i in 0..2 {
                for j in 0..4 {
                    prop_assert_eq!(h[j][i], m[i][j].conj());
                }
            }
        }
    }
}

proptest! {
    #[test]
    fn transpose_is_an_involution(m in small_int_matrix::<3, 5>()) {
        prop_assert_eq!(transpose(&transpose(&m)), m);
    }

    #[test]
    fn real_hermitian_equals_transpose(m in float_matrix::<4, 2>()) {
        prop_assert_eq!(hermitian(&m), transpose(&m));
    }

    #[test]
    fn matmul_is_associative_for_integers(
        a in small_int_matrix::<2, 3>(),
        b in small_int_matrix::<3, 4>(),
        c in small_int_matrix::<4, 2>(),
    ) {
        prop_assert_eq!(matmul(&matmul(&a, &b), &c), matmul(&a, &matmul(&b, &c)));
    }

    #[test]
    fn matmul_is_associative_for_floats(
        a in float_matrix::<3, 3>(),
        b in float_matrix::<3, 2>(),
        c in float_matrix::<2, 4>(),
    ) {
        assert_matrix_close(&matmul(&matmul(&a, &b), &c), &matmul(&a, &matmul(&b, &c)), 1e-12);
    }

    #[test]
    fn transpose_reverses_products(
        a in small_int_matrix::<2, 3>(),
        b in small_int_matrix::<3, 4>(),
    ) {
        prop_assert_eq!(transpose(&matmul(&a, &b)), matmul(&b.t(), &a.t()));
    }

    #[test]
    fn kron_mixed_product(
        a in small_int_matrix::<2, 2>(),
        b in small_int_matrix::<1, 3>(),
        c in small_int_matrix::<2, 1>(),
        d in small_int_matrix::<3, 2>(),
    ) {
        let ab: Matrix<i64, 2, 6> = kron(&a, &b);
        let cd: Matrix<i64, 6, 2> = kron(&c, &d);
        let expected: Matrix<i64, 2, 2> = kron(&matmul(&a, &c), &matmul(&b, &d));
        prop_assert_eq!(matmul(&ab, &cd), expected);
    }

    #[test]
    fn inverse_round_trips(m in diagonally_dominant::<4>()) {
        let m_inv = inverse(&m).unwrap();
        assert_matrix_close(&matmul(&m, &m_inv), &identity(), 1e-9);
        assert_matrix_close(&matmul(&m_inv, &m), &identity(), 1e-9);
    }

    #[test]
    fn repeated_calls_agree(m in diagonally_dominant::<3>(), n in float_matrix::<3, 2>()) {
        prop_assert_eq!(inverse(&m), inverse(&m));
        prop_assert_eq!(matmul(&m, &n), matmul(&m, &n));
        prop_assert_eq!(m.trace(), m.trace());
    }
}
