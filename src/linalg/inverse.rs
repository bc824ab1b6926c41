//! Matrix inverse and determinant operations.

use crate::{
    error::{LinrustError, Result},
    matrix::Matrix,
    ops::{elementwise, elementwise2},
    scalar::Modulus,
};
use num_traits::{Float, Num, Zero};
use std::ops::Neg;
use tracing::{debug, trace};

/// Compute the inverse of a square matrix by Gauss-Jordan elimination.
///
/// The pivot is always the current diagonal element; rows are never
/// exchanged. A pivot that is exactly zero aborts with
/// [`LinrustError::NotInvertible`], so a matrix that is invertible but has a
/// zero on the diagonal at the wrong step (e.g. `[[0, 1], [1, 0]]`) is
/// reported as singular. Ill-conditioned inputs are not detected; see
/// [`inverse_with_tolerance`].
pub fn inverse<T, const M: usize>(m: &Matrix<T, M, M>) -> Result<Matrix<T, M, M>>
where
    T: Num + Copy,
{
    gauss_jordan(m, |pivot| pivot.is_zero())
}

/// [`inverse`] with a pivot counted as singular when its modulus is at most
/// `tolerance`.
///
/// A tolerance of zero behaves exactly like [`inverse`]. Negative or NaN
/// tolerances are rejected with [`LinrustError::InvalidTolerance`].
pub fn inverse_with_tolerance<T, const M: usize>(
    m: &Matrix<T, M, M>,
    tolerance: T::Real,
) -> Result<Matrix<T, M, M>>
where
    T: Num + Copy + Modulus,
{
    if tolerance.is_nan() || tolerance < T::Real::zero() {
        debug!(?tolerance, "rejecting pivot tolerance");
        return Err(LinrustError::invalid_tolerance(format!(
            "{:?} is not a non-negative number",
            tolerance
        )));
    }
    gauss_jordan(m, |pivot| pivot.modulus() <= tolerance)
}

/// Runs the elimination sweep on owned copies of `m` and the identity.
///
/// Each step normalizes pivot row `k` in both matrices, snapshots the
/// normalized rows, then removes column `k` from every other row using the
/// snapshots.
fn gauss_jordan<T, F, const M: usize>(
    m: &Matrix<T, M, M>,
    mut is_singular: F,
) -> Result<Matrix<T, M, M>>
where
    T: Num + Copy,
    F: FnMut(&T) -> bool,
{
    let mut inv = Matrix::<T, M, M>::identity();
    let mut a = *m;

    for k in 0..M {
        let scale = a[k][k];
        if is_singular(&scale) {
            debug!(pivot = k, size = M, "singular pivot, matrix is not invertible");
            return Err(LinrustError::not_invertible(k));
        }
        trace!(pivot = k, "eliminating column");

        let pivot_a = elementwise(|x| x / scale, &a[k]);
        let pivot_inv = elementwise(|x| x / scale, &inv[k]);
        a[k] = pivot_a;
        inv[k] = pivot_inv;

        for i in (0..M).filter(|&i| i != k) {
            let factor = a[i][k];
            a[i] = a[i] - pivot_a.scale(factor);
            inv[i] = inv[i] - pivot_inv.scale(factor);
        }
    }

    Ok(inv)
}

/// Compute the determinant of a square matrix.
///
/// Uses fraction-free (Bareiss) elimination, exchanging a zero pivot with the
/// first row below that has a non-zero entry in the pivot column. Every
/// division is exact, so integer matrices get exact determinants. Returns zero
/// for singular matrices and one for the empty matrix.
///
/// The element type must be signed, since row exchanges negate the result:
///
/// ```compile_fail
/// use linrust::{determinant, Matrix};
///
/// let _ = determinant(&Matrix::new([[0u32, 1], [1, 0]]));
/// ```
pub fn determinant<T, const M: usize>(m: &Matrix<T, M, M>) -> T
where
    T: Num + Neg<Output = T> + Copy,
{
    let mut a = *m;
    let mut previous = T::one();
    let mut negate = false;

    for k in 0..M {
        let Some(p) = (k..M).find(|&r| !a[r][k].is_zero()) else {
            return T::zero();
        };
        if p != k {
            a.swap_rows(k, p);
            negate = !negate;
        }

        let pivot = a[k][k];
        let pivot_row = a[k];
        for i in (k + 1)..M {
            let lead = a[i][k];
            a[i] = elementwise2(|x, y| (x * pivot - lead * y) / previous, &a[i], &pivot_row);
        }
        previous = pivot;
    }

    // The last pivot is the determinant up to sign, and one for `M == 0`.
    if negate {
        -previous
    } else {
        previous
    }
}
