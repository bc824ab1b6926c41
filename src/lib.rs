//! # linrust
//!
//! Fixed-shape linear algebra with shapes checked at compile time.
//!
//! [`Vector<T, N>`] and [`Matrix<T, M, N>`] carry their dimensions as const
//! generic parameters, so multiplying a `2 x 3` matrix by a `2 x 3` matrix, or
//! adding vectors of different lengths, is a type error rather than a runtime
//! failure.
//!
//! The crate is split into two layers:
//!
//! - [`ops`]: generic combinators (`elementwise`, `generate`, `accumulate`,
//!   `iota`, `linspace`, `fill`, `cast`, `zip`) over vectors and matrices.
//! - [`linalg`]: algebraic operations built from those combinators
//!   (`conj`, `transpose`, `hermitian`, `matmul`, `kron`, `inverse`,
//!   `determinant`, `trace`).
//!
//! ```
//! use linrust::*;
//!
//! let a: Matrix<f64, 2, 2> = matrix![[4.0, 7.0], [2.0, 6.0]];
//! let a_inv = inverse(&a).unwrap();
//! let product = matmul(&a, &a_inv);
//! assert!((product[0][0] - 1.0).abs() < 1e-12);
//! assert!(product[0][1].abs() < 1e-12);
//!
//! let singular = matrix![[0.0, 0.0], [0.0, 0.0]];
//! assert_eq!(inverse(&singular), Err(LinrustError::NotInvertible { pivot: 0 }));
//! ```
//!
//! ## Cargo features
//!
//! | Feature   | Default | Description |
//! |-----------|---------|-------------|
//! | `complex` | yes     | `Conjugate`/`Modulus` for `num_complex::Complex<f32 \| f64>` |
//!
//! Diagnostics are emitted through `tracing`; install a subscriber to see the
//! elimination steps of [`inverse`].

#[macro_use]
mod macros;

pub mod error;
pub mod linalg;
pub mod matrix;
pub mod ops;
pub mod scalar;
pub mod vector;

pub use error::{LinrustError, Result};
pub use linalg::*;
pub use matrix::{identity, Matrix};
pub use ops::*;
pub use scalar::{Conjugate, Modulus};
pub use vector::Vector;

#[cfg(feature = "complex")]
pub use num_complex::Complex;
