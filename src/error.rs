//! Error types for densor

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using densor's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in densor operations
#[derive(Error, Debug)]
pub enum Error {
    /// Data length does not match the requested matrix dimensions
    #[error("Shape mismatch: dimensions {rows}x{cols} need {expected} elements, got {got}")]
    ShapeMismatch {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
        /// Expected element count (rows * cols)
        expected: usize,
        /// Actual element count
        got: usize,
    },

    /// Row stride smaller than the column count
    #[error("Stride {stride} is smaller than the column count {cols}")]
    StrideTooSmall {
        /// Requested row stride in elements
        stride: usize,
        /// Column count of the matrix
        cols: usize,
    },

    /// DType mismatch between a typed access and the stored dtype
    #[error("DType mismatch: storage holds {stored}, access requested {requested}")]
    DTypeMismatch {
        /// DType of the backing storage
        stored: DType,
        /// DType the caller asked for
        requested: DType,
    },

    /// Out of memory
    #[error("Out of memory: failed to allocate {size} bytes")]
    OutOfMemory {
        /// Requested size in bytes
        size: usize,
    },

    /// Index out of bounds
    #[error("Index ({row}, {col}) out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        /// The requested row
        row: usize,
        /// The requested column
        col: usize,
        /// Row count of the matrix
        rows: usize,
        /// Column count of the matrix
        cols: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
