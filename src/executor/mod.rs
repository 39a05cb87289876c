//! Executors: where matrix memory lives and operations run
//!
//! This module defines the `Executor` trait and the host (CPU)
//! implementation.
//!
//! # Architecture
//!
//! ```text
//! Executor (backend identity)
//! ├── allocate / deallocate (buffer management)
//! └── copy_to / copy_from / copy_within (byte movement)
//! ```
//!
//! An executor hands out opaque `u64` buffer handles. A handle is only
//! meaningful to the executor that produced it; `0` is the null handle,
//! returned for zero-sized allocations.

mod host;

pub use host::HostExecutor;

use crate::error::Result;

/// Core trait for compute backends
///
/// `Executor` abstracts over where matrix memory is allocated and where
/// operations on it run. It uses static dispatch via generics so that
/// storage and matrix types carry no per-call overhead.
///
/// # Example
///
/// ```ignore
/// use densor::executor::Executor;
///
/// fn scratch<X: Executor>(exec: &X) -> densor::Result<()> {
///     let ptr = exec.allocate(1024)?;
///     // ... use memory ...
///     exec.deallocate(ptr, 1024);
///     Ok(())
/// }
/// ```
pub trait Executor: Clone + Send + Sync + 'static {
    /// Human-readable name of this executor
    fn name(&self) -> &'static str;

    /// Allocate a zero-initialized buffer of `size_bytes` bytes
    ///
    /// Returns an opaque handle to the buffer. A zero-sized request returns
    /// the null handle `0` without allocating.
    fn allocate(&self, size_bytes: usize) -> Result<u64>;

    /// Release a buffer previously returned by [`Self::allocate`]
    ///
    /// Releasing the null handle is a no-op. `size_bytes` must match the
    /// size the buffer was allocated with.
    fn deallocate(&self, ptr: u64, size_bytes: usize);

    /// Copy host bytes into a buffer
    ///
    /// No-op when `src` is empty or `dst` is the null handle.
    fn copy_to(&self, src: &[u8], dst: u64);

    /// Copy bytes out of a buffer into host memory
    ///
    /// No-op when `dst` is empty or `src` is the null handle.
    fn copy_from(&self, src: u64, dst: &mut [u8]);

    /// Copy bytes between two buffers owned by this executor
    ///
    /// The ranges may overlap. No-op when `size_bytes` is zero or either
    /// handle is null.
    fn copy_within(&self, src: u64, dst: u64, size_bytes: usize);
}
