use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinrustError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    #[error("Matrix is not invertible: singular pivot at row {pivot}")]
    NotInvertible { pivot: usize },
    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(String),
}

impl LinrustError {
    pub fn shape_mismatch(expected: Vec<usize>, actual: Vec<usize>) -> Self {
        Self::ShapeMismatch { expected, actual }
    }

    pub fn not_invertible(pivot: usize) -> Self {
        Self::NotInvertible { pivot }
    }

    pub fn invalid_tolerance(reason: impl Into<String>) -> Self {
        Self::InvalidTolerance(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, LinrustError>;
