//! Error types for vector arithmetic.

use thiserror::Error;

/// Errors raised by vector operations with a domain restriction.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// Division of a vector by a zero scalar.
    #[error("division of vector by zero")]
    DivideByZero,
}

/// Result type for math operations.
pub type Result<T> = std::result::Result<T, MathError>;
