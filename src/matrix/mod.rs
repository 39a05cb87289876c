//! Matrix types
//!
//! This module provides the `Dense` matrix type and its reference-counted
//! `Storage`. A matrix is always associated with the executor that allocated
//! its buffer.

mod dense;
mod storage;

pub use dense::Dense;
pub use storage::Storage;
