//! Host (CPU) executor implementation

use super::Executor;
use crate::error::{Error, Result};
use std::alloc::{alloc_zeroed, dealloc, Layout as AllocLayout};

/// Buffer alignment in bytes, wide enough for AVX-512 loads
const ALIGN: usize = 64;

/// Host compute executor
///
/// The default executor, available on any platform. Buffers live on the
/// heap, allocated through the system allocator with 64-byte alignment for
/// SIMD compatibility, and are zero-initialized.
///
/// # Example
///
/// ```
/// use densor::executor::{Executor, HostExecutor};
///
/// let exec = HostExecutor::new();
/// assert_eq!(exec.name(), "host");
/// ```
#[derive(Clone, Debug, Default)]
pub struct HostExecutor;

impl HostExecutor {
    /// Create a new host executor
    pub fn new() -> Self {
        Self
    }
}

impl Executor for HostExecutor {
    fn name(&self) -> &'static str {
        "host"
    }

    fn allocate(&self, size_bytes: usize) -> Result<u64> {
        if size_bytes == 0 {
            return Ok(0);
        }

        let layout = AllocLayout::from_size_align(size_bytes, ALIGN)
            .map_err(|e| Error::Internal(format!("invalid allocation layout: {e}")))?;

        let ptr = unsafe { alloc_zeroed(layout) };
        if ptr.is_null() {
            return Err(Error::OutOfMemory { size: size_bytes });
        }

        Ok(ptr as u64)
    }

    fn deallocate(&self, ptr: u64, size_bytes: usize) {
        if ptr == 0 || size_bytes == 0 {
            return;
        }

        // Matches the layout used in allocate; from_size_align cannot fail
        // for a size that already allocated successfully.
        let layout = AllocLayout::from_size_align(size_bytes, ALIGN)
            .expect("invalid deallocation layout");

        unsafe {
            dealloc(ptr as *mut u8, layout);
        }
    }

    fn copy_to(&self, src: &[u8], dst: u64) {
        if src.is_empty() || dst == 0 {
            return;
        }

        unsafe {
            std::ptr::copy_nonoverlapping(src.as_ptr(), dst as *mut u8, src.len());
        }
    }

    fn copy_from(&self, src: u64, dst: &mut [u8]) {
        if dst.is_empty() || src == 0 {
            return;
        }

        unsafe {
            std::ptr::copy_nonoverlapping(src as *const u8, dst.as_mut_ptr(), dst.len());
        }
    }

    fn copy_within(&self, src: u64, dst: u64, size_bytes: usize) {
        if size_bytes == 0 || src == 0 || dst == 0 {
            return;
        }

        unsafe {
            // copy (not copy_nonoverlapping) in case src and dst overlap
            std::ptr::copy(src as *const u8, dst as *mut u8, size_bytes);
        }
    }
}
