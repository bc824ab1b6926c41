//! Index-driven constructors: `iota`, `linspace` and `generate`.

use crate::{matrix::Matrix, ops::elementwise, vector::Vector};
use num_traits::Num;

/// The sequence `start, start + 1, ..., start + N - 1`.
pub fn iota<const N: usize, T>(start: T) -> Vector<T, N>
where
    T: Num + Copy,
{
    let mut next = start;
    // `from_fn` visits indices in order, so the running counter lines up with `i`.
    Vector::new(std::array::from_fn(|i| {
        if i > 0 {
            next = next + T::one();
        }
        next
    }))
}

/// `N` evenly spaced values from `min` to `max`, both ends included.
///
/// The step is `|max - min| / (N - 1)`. A descending range steps down from
/// `min`, so unsigned types never go through a negative difference.
///
/// ```
/// use linrust::{linspace, Vector};
///
/// assert_eq!(linspace::<5, f64>(0.0, 4.0), Vector::new([0.0, 1.0, 2.0, 3.0, 4.0]));
/// assert_eq!(linspace::<3, u8>(10, 0), Vector::new([10, 5, 0]));
/// ```
///
/// `N` must be at least two; smaller `N` fails to compile:
///
/// ```compile_fail
/// use linrust::linspace;
///
/// let _ = linspace::<1, f64>(0.0, 1.0);
/// ```
pub fn linspace<const N: usize, T>(min: T, max: T) -> Vector<T, N>
where
    T: Num + PartialOrd + Copy,
{
    const { assert!(N >= 2, "linspace needs at least two points") };
    let ramp = iota::<N, T>(T::zero());
    if max < min {
        let step = (min - max) / ramp[N - 1];
        elementwise(|k| min - k * step, &ramp)
    } else {
        let step = (max - min) / ramp[N - 1];
        elementwise(|k| min + k * step, &ramp)
    }
}

/// A vector whose `i`-th element is `f(i)`.
pub fn generate<const N: usize, U, F>(f: F) -> Vector<U, N>
where
    F: FnMut(usize) -> U,
{
    elementwise(f, &iota::<N, usize>(0))
}

/// A matrix whose `(i, j)` element is `f(i, j)`.
pub fn generate_matrix<const M: usize, const N: usize, U, F>(mut f: F) -> Matrix<U, M, N>
where
    F: FnMut(usize, usize) -> U,
{
    Matrix::from_rows(generate(|i| generate(|j| f(i, j))))
}

/// [`generate`] with the length taken from an existing vector. Used by
/// [`elementwise!`](crate::elementwise).
#[doc(hidden)]
#[inline(always)]
pub fn generate_like<T, U, F, const N: usize>(_: &Vector<T, N>, f: F) -> Vector<U, N>
where
    F: FnMut(usize) -> U,
{
    generate(f)
}
