//! # densor
//!
//! **Dense matrices over a pluggable executor abstraction.**
//!
//! densor provides a small dense-matrix core in which every matrix is tied to
//! an *executor* — the place its memory lives and its operations run. The
//! executor is a trait, so the storage and access machinery is written once
//! and works for any backend that can hand out buffers and move bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! use densor::prelude::*;
//!
//! # fn main() -> densor::Result<()> {
//! let exec = HostExecutor::new();
//! let size = Dim2::new(3, 4);
//! let mat = Dense::<HostExecutor>::try_new(size, DType::F32, &exec)?;
//!
//! assert_eq!(mat.num_stored_elements(), 12);
//! # Ok(())
//! # }
//! ```
//!
//! ## Design
//!
//! - **Executors**: [`executor::Executor`] abstracts allocation and byte
//!   movement. [`executor::HostExecutor`] is the CPU implementation.
//! - **Storage**: matrix buffers are reference-counted
//!   ([`matrix::Storage`]), so clones share memory and the buffer is freed
//!   exactly once.
//! - **DTypes**: element types are runtime values ([`dtype::DType`]) bridged
//!   to Rust types through the [`dtype::Element`] trait.
//! - **Stride**: a [`matrix::Dense`] is row-major with an explicit row
//!   stride, so padded layouts are representable; the number of *stored*
//!   elements (`rows * stride`) can exceed the number of logical elements.
//!
//! ## Feature Flags
//!
//! - `rayon` (default): multi-threaded fills for large matrices

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dim;
pub mod dtype;
pub mod error;
pub mod executor;
pub mod matrix;
mod version;

pub use error::{Error, Result};
pub use version::{version, Version};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dim::Dim2;
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::executor::{Executor, HostExecutor};
    pub use crate::matrix::{Dense, Storage};
}
