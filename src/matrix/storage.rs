//! Storage: executor memory with Arc-based sharing

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::executor::Executor;
use std::sync::Arc;

/// Storage for matrix data on an executor
///
/// Storage wraps an executor buffer with reference counting, so clones share
/// the underlying memory. The buffer is released when the last reference is
/// dropped.
pub struct Storage<X: Executor> {
    inner: Arc<StorageInner<X>>,
}

struct StorageInner<X: Executor> {
    /// Opaque buffer handle from the executor
    ptr: u64,
    /// Number of elements (not bytes)
    len: usize,
    /// Element type
    dtype: DType,
    /// Executor that owns the buffer
    executor: X,
}

impl<X: Executor> Storage<X> {
    /// Allocate zero-initialized storage for `len` elements of type `dtype`
    ///
    /// Errors with [`Error::InvalidArgument`] if the byte size overflows
    /// `usize`.
    pub fn new(len: usize, dtype: DType, executor: &X) -> Result<Self> {
        let size_bytes =
            len.checked_mul(dtype.size_in_bytes())
                .ok_or_else(|| Error::InvalidArgument {
                    arg: "len",
                    reason: format!("{len} elements of {dtype} overflow the addressable size"),
                })?;
        let ptr = executor.allocate(size_bytes)?;

        Ok(Self {
            inner: Arc::new(StorageInner {
                ptr,
                len,
                dtype,
                executor: executor.clone(),
            }),
        })
    }

    /// Create storage holding a copy of `data`, with the dtype inferred
    /// from the element type
    pub fn from_slice<T: Element>(data: &[T], executor: &X) -> Result<Self> {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let ptr = executor.allocate(bytes.len())?;
        executor.copy_to(bytes, ptr);

        Ok(Self {
            inner: Arc::new(StorageInner {
                ptr,
                len: data.len(),
                dtype: T::DTYPE,
                executor: executor.clone(),
            }),
        })
    }

    /// Copy the full contents back to host memory
    ///
    /// Errors with [`Error::DTypeMismatch`] if `T` does not match the
    /// stored dtype.
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>> {
        if T::DTYPE != self.inner.dtype {
            return Err(Error::DTypeMismatch {
                stored: self.inner.dtype,
                requested: T::DTYPE,
            });
        }

        let mut out = vec![T::zero(); self.inner.len];
        self.inner
            .executor
            .copy_from(self.inner.ptr, bytemuck::cast_slice_mut(&mut out));
        Ok(out)
    }

    /// The opaque buffer handle
    #[inline]
    pub fn ptr(&self) -> u64 {
        self.inner.ptr
    }

    /// Number of stored elements
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len
    }

    /// Whether the storage holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.len == 0
    }

    /// Element type of the stored data
    #[inline]
    pub fn dtype(&self) -> DType {
        self.inner.dtype
    }

    /// Buffer size in bytes
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.inner.len * self.inner.dtype.size_in_bytes()
    }

    /// The executor that owns the buffer
    #[inline]
    pub fn executor(&self) -> &X {
        &self.inner.executor
    }
}

impl<X: Executor> Clone for Storage<X> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<X: Executor> Drop for StorageInner<X> {
    fn drop(&mut self) {
        let size_bytes = self.len * self.dtype.size_in_bytes();
        self.executor.deallocate(self.ptr, size_bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::HostExecutor;

    #[test]
    fn test_roundtrip() {
        let exec = HostExecutor::new();
        let data = [1.0f32, 2.0, 3.0, 4.0];
        let storage = Storage::from_slice(&data, &exec).unwrap();

        assert_eq!(storage.len(), 4);
        assert_eq!(storage.dtype(), DType::F32);
        assert_eq!(storage.to_vec::<f32>().unwrap(), data);
    }

    #[test]
    fn test_new_is_zeroed() {
        let exec = HostExecutor::new();
        let storage = Storage::<HostExecutor>::new(6, DType::F64, &exec).unwrap();
        assert_eq!(storage.to_vec::<f64>().unwrap(), vec![0.0; 6]);
    }

    #[test]
    fn test_clone_shares_buffer() {
        let exec = HostExecutor::new();
        let storage = Storage::from_slice(&[1.0f32, 2.0], &exec).unwrap();
        let clone = storage.clone();
        assert_eq!(storage.ptr(), clone.ptr());
    }

    #[test]
    fn test_dtype_mismatch() {
        let exec = HostExecutor::new();
        let storage = Storage::from_slice(&[1.0f32, 2.0], &exec).unwrap();
        assert!(matches!(
            storage.to_vec::<f64>(),
            Err(Error::DTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_overflowing_byte_size_rejected() {
        let exec = HostExecutor::new();
        let result = Storage::<HostExecutor>::new(usize::MAX, DType::F64, &exec);
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_empty_storage() {
        let exec = HostExecutor::new();
        let storage = Storage::<HostExecutor>::new(0, DType::F32, &exec).unwrap();
        assert!(storage.is_empty());
        assert_eq!(storage.ptr(), 0);
        assert_eq!(storage.to_vec::<f32>().unwrap(), Vec::<f32>::new());
    }
}
