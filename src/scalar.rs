//! Scalar capabilities required by the algebraic layer.
//!
//! `Conjugate` is implemented for every primitive numeric type (as the
//! identity) and, with the `complex` feature, for `Complex<f32>` and
//! `Complex<f64>`. `Modulus` is only needed by the tolerance-based inverse.

use num_traits::Float;
use std::fmt::Debug;

#[cfg(feature = "complex")]
use num_complex::Complex;

/// Complex conjugation. Real types conjugate to themselves.
pub trait Conjugate: Sized {
    fn conj(self) -> Self;
}

/// Magnitude of a scalar as a real floating-point value.
pub trait Modulus {
    /// The real type the magnitude is measured in.
    type Real: Float + Debug;

    fn modulus(&self) -> Self::Real;
}

macro_rules! impl_real_conjugate {
    ($($t:ty),* $(,)?) => {
        $(
            impl Conjugate for $t {
                #[inline]
                fn conj(self) -> Self {
                    self
                }
            }
        )*
    };
}

impl_real_conjugate!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

macro_rules! impl_float_modulus {
    ($($t:ty),* $(,)?) => {
        $(
            impl Modulus for $t {
                type Real = $t;

                #[inline]
                fn modulus(&self) -> $t {
                    self.abs()
                }
            }
        )*
    };
}

impl_float_modulus!(f32, f64);

#[cfg(feature = "complex")]
impl<T> Conjugate for Complex<T>
where
    T: Clone + num_traits::Num + std::ops::Neg<Output = T>,
{
    #[inline]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }
}

#[cfg(feature = "complex")]
impl<T> Modulus for Complex<T>
where
    T: Float + Debug,
{
    type Real = T;

    #[inline]
    fn modulus(&self) -> T {
        self.norm()
    }
}
