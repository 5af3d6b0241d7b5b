//! Error type shared by every fallible operation.

use thiserror::Error;

use crate::Dim;

/// Failure of an algebraic operation.
///
/// Every error is detected eagerly by the operation that causes it. Operations are pure, so
/// retrying with the same operands always fails the same way.
#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum GeoError {
    /// Division by the zero element, a zero scalar, or a singular denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// Magnitude requested for a non-simple bivector.
    #[error("magnitude is undefined for a non-simple bivector")]
    UndefinedMagnitude,

    /// Grade exceeds the dimension.
    #[error("grade {grade} does not exist in {dim:?}")]
    InvalidGrade { grade: u32, dim: Dim },

    /// Same-grade operation given a different grade.
    #[error("expected grade {expected}, found grade {found}")]
    GradeMismatch { expected: u32, found: u32 },

    /// Constructor given the wrong number of coefficients.
    #[error("expected {expected} coefficients, found {found}")]
    CoefficientCount { expected: usize, found: usize },

    /// A plane has a normal vector only up to three dimensions.
    #[error("planes in {dim:?} have no normal vector")]
    UndefinedNormal { dim: Dim },

    /// No real logarithm exists on the requested branch.
    #[error("logarithm is undefined: {0}")]
    UndefinedLogarithm(&'static str),
}

pub type Result<T, E = GeoError> = std::result::Result<T, E>;
