//! Functional combinators over vectors and matrices.
//! Every algebraic operation in [`crate::linalg`] is built from these primitives.

mod elementwise;
mod generate;
mod reduction;

pub use elementwise::*;
pub use generate::*;
pub use reduction::*;
