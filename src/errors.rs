//! Geometry errors

use std::fmt::Display;

/// All the ways a geometric operation can refuse its input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (DivisionByZero) A zero magnitude or zero scalar was used as a divisor
    DivisionByZero,
    /// (EmptyInput) An operation that needs at least one element got none
    EmptyInput(&'static str),
    /// (Format) A string could not be read as `{x, y, z}`
    Format(String),
    /// (ArrayTooShort) Fewer than three values from `start` onwards
    ArrayTooShort { len: usize, start: usize },
    /// (NonRectangular) Matrix rows of unequal length
    NonRectangular { row: usize, expected: usize, found: usize },
    /// (DimensionMismatch) Matrix shapes incompatible for an operation
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// (IndexOutOfRange) A row/column index or range is outside the matrix
    IndexOutOfRange { index: usize, len: usize },
    /// (Degenerate) The input does not span a frame or direction
    Degenerate(&'static str),
}

impl Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::DivisionByZero => write!(f, "(DivisionByZero) Attempted to divide by a zero magnitude"),
            GeometryError::EmptyInput(what) => write!(f, "(EmptyInput) {} requires at least one element", what),
            GeometryError::Format(input) => write!(f, "(Format) Incorrect string format: {:?}, expected \"{{x, y, z}}\"", input),
            GeometryError::ArrayTooShort { len, start } => write!(f, "(ArrayTooShort) An array of length {} cannot fill three coordinates starting at index {}", len, start),
            GeometryError::NonRectangular { row, expected, found } => write!(f, "(NonRectangular) Irregular matrix: row {} has {} columns, expected {}", row, found, expected),
            GeometryError::DimensionMismatch { op, left, right } => write!(f, "(DimensionMismatch) {} is not possible for a {}x{} and a {}x{} matrix", op, left.0, left.1, right.0, right.1),
            GeometryError::IndexOutOfRange { index, len } => write!(f, "(IndexOutOfRange) Index {} is out of range for length {}", index, len),
            GeometryError::Degenerate(reason) => write!(f, "(Degenerate) {}", reason),
        }
    }
}
