//! Dense matrix type

use super::Storage;
use crate::dim::Dim2;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::executor::Executor;
use std::fmt;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Row count threshold above which fills run on the rayon pool
#[cfg(feature = "rayon")]
const PAR_FILL_MIN_ROWS: usize = 256;

/// Dense matrix stored row-major on an executor
///
/// A `Dense` stores every element of a `rows x cols` matrix contiguously,
/// regardless of sparsity. Element `(r, c)` lives at element offset
/// `r * stride + c` in the backing buffer, where `stride >= cols` is the row
/// stride; the buffer holds `rows * stride` elements. The default stride is
/// the column count, giving a fully packed layout.
///
/// The matrix is associated with the [`Executor`] that allocated its buffer.
/// Cloning is cheap and shares the buffer.
///
/// # Example
///
/// ```
/// use densor::prelude::*;
///
/// # fn main() -> densor::Result<()> {
/// let exec = HostExecutor::new();
/// let mat = Dense::<HostExecutor>::try_new(Dim2::new(3, 4), DType::F32, &exec)?;
///
/// assert_eq!(mat.size(), Dim2::new(3, 4));
/// assert_eq!(mat.num_stored_elements(), 12);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Dense<X: Executor> {
    /// Executor memory holding `rows * stride` elements
    storage: Storage<X>,
    /// Logical shape
    size: Dim2,
    /// Row stride in elements, >= size.cols()
    stride: usize,
}

impl<X: Executor> Dense<X> {
    /// Create a zero-initialized matrix with a packed layout (stride = cols)
    ///
    /// # Panics
    ///
    /// Panics if allocation fails. For a fallible alternative, use
    /// [`Self::try_new`].
    pub fn new(size: Dim2, dtype: DType, executor: &X) -> Self {
        Self::try_new(size, dtype, executor).expect("Dense::new failed")
    }

    /// Create a zero-initialized matrix with a packed layout (fallible version)
    pub fn try_new(size: Dim2, dtype: DType, executor: &X) -> Result<Self> {
        Self::try_with_stride(size, size.cols(), dtype, executor)
    }

    /// Create a zero-initialized matrix with an explicit row stride
    ///
    /// The backing buffer holds `size.rows() * stride` elements, so a stride
    /// larger than the column count leaves padding at the end of each row.
    /// Errors with [`Error::StrideTooSmall`] if `stride < size.cols()`, and
    /// with [`Error::InvalidArgument`] if the element count overflows `usize`.
    pub fn try_with_stride(size: Dim2, stride: usize, dtype: DType, executor: &X) -> Result<Self> {
        if stride < size.cols() {
            return Err(Error::StrideTooSmall {
                stride,
                cols: size.cols(),
            });
        }

        let len = size
            .rows()
            .checked_mul(stride)
            .ok_or_else(|| Error::InvalidArgument {
                arg: "stride",
                reason: format!("{} rows with stride {stride} overflow usize", size.rows()),
            })?;
        let storage = Storage::new(len, dtype, executor)?;
        Ok(Self {
            storage,
            size,
            stride,
        })
    }

    /// Create a matrix from row-major data with a packed layout
    ///
    /// The dtype is inferred from the element type. Errors with
    /// [`Error::ShapeMismatch`] unless `data.len() == size.count()`.
    ///
    /// # Example
    ///
    /// ```
    /// use densor::prelude::*;
    ///
    /// # fn main() -> densor::Result<()> {
    /// let exec = HostExecutor::new();
    /// let mat = Dense::try_from_slice(&[1.0f32, 2.0, 3.0, 4.0], Dim2::new(2, 2), &exec)?;
    /// assert_eq!(mat.get::<f32>(1, 0)?, 3.0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn try_from_slice<T: Element>(data: &[T], size: Dim2, executor: &X) -> Result<Self> {
        let expected = size
            .rows()
            .checked_mul(size.cols())
            .ok_or_else(|| Error::InvalidArgument {
                arg: "size",
                reason: format!("{size} overflows usize"),
            })?;
        if data.len() != expected {
            return Err(Error::ShapeMismatch {
                rows: size.rows(),
                cols: size.cols(),
                expected,
                got: data.len(),
            });
        }

        let storage = Storage::from_slice(data, executor)?;
        Ok(Self {
            storage,
            size,
            stride: size.cols(),
        })
    }

    /// Create a matrix from row-major data (panicking version)
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal `size.count()` or if allocation
    /// fails.
    pub fn from_slice<T: Element>(data: &[T], size: Dim2, executor: &X) -> Self {
        Self::try_from_slice(data, size, executor).expect("Dense::from_slice failed")
    }

    /// Create a matrix filled with a scalar value
    ///
    /// The scalar is converted to the target dtype.
    pub fn try_full_scalar(size: Dim2, dtype: DType, value: f64, executor: &X) -> Result<Self> {
        let mut mat = Self::try_new(size, dtype, executor)?;
        match dtype {
            DType::F32 => mat.fill(f32::from_f64(value))?,
            DType::F64 => mat.fill(f64::from_f64(value))?,
        }
        Ok(mat)
    }

    /// Create a matrix filled with ones
    pub fn try_ones(size: Dim2, dtype: DType, executor: &X) -> Result<Self> {
        let mut mat = Self::try_new(size, dtype, executor)?;
        match dtype {
            DType::F32 => mat.fill(f32::one())?,
            DType::F64 => mat.fill(f64::one())?,
        }
        Ok(mat)
    }

    /// Logical size of the matrix
    #[inline]
    pub fn size(&self) -> Dim2 {
        self.size
    }

    /// Row count
    #[inline]
    pub fn rows(&self) -> usize {
        self.size.rows()
    }

    /// Column count
    #[inline]
    pub fn cols(&self) -> usize {
        self.size.cols()
    }

    /// Row stride in elements
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// The executor this matrix was allocated on
    #[inline]
    pub fn executor(&self) -> &X {
        self.storage.executor()
    }

    /// Number of elements physically allocated in the backing storage
    ///
    /// This is `rows * stride`. For the default packed layout it equals
    /// [`Dim2::count`]; with a padded stride it is larger.
    #[inline]
    pub fn num_stored_elements(&self) -> usize {
        self.storage.len()
    }

    /// Read the element at `(row, col)`
    ///
    /// Bounds-checked and dtype-checked.
    pub fn get<T: Element>(&self, row: usize, col: usize) -> Result<T> {
        self.check_access::<T>(row, col)?;

        let mut value = [T::zero()];
        self.storage.executor().copy_from(
            self.element_ptr::<T>(row, col),
            bytemuck::cast_slice_mut(&mut value),
        );
        Ok(value[0])
    }

    /// Write the element at `(row, col)`
    ///
    /// Bounds-checked and dtype-checked.
    pub fn set<T: Element>(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_access::<T>(row, col)?;

        self.storage
            .executor()
            .copy_to(bytemuck::cast_slice(&[value]), self.element_ptr::<T>(row, col));
        Ok(())
    }

    /// Read the element at `(row, col)` as an f64, whatever the dtype
    ///
    /// Bounds-checked. Useful when the dtype is only known at runtime;
    /// use [`Self::get`] for a typed read.
    pub fn at(&self, row: usize, col: usize) -> Result<f64> {
        match self.dtype() {
            DType::F32 => Ok(self.get::<f32>(row, col)?.to_f64()),
            DType::F64 => self.get::<f64>(row, col),
        }
    }

    /// Set every logical element to `value`
    ///
    /// Stride padding is left untouched. With the `rayon` feature enabled,
    /// large matrices are filled row-parallel on the rayon pool.
    pub fn fill<T: Element>(&mut self, value: T) -> Result<()> {
        if T::DTYPE != self.dtype() {
            return Err(Error::DTypeMismatch {
                stored: self.dtype(),
                requested: T::DTYPE,
            });
        }
        if self.size.is_empty() {
            return Ok(());
        }

        let row = vec![value; self.cols()];
        let row_bytes: &[u8] = bytemuck::cast_slice(&row);
        let row_stride_bytes = (self.stride * self.dtype().size_in_bytes()) as u64;
        let base = self.storage.ptr();
        let executor = self.storage.executor();

        #[cfg(feature = "rayon")]
        if self.rows() >= PAR_FILL_MIN_ROWS {
            (0..self.rows()).into_par_iter().for_each(|r| {
                executor.copy_to(row_bytes, base + r as u64 * row_stride_bytes);
            });
            return Ok(());
        }

        for r in 0..self.rows() {
            executor.copy_to(row_bytes, base + r as u64 * row_stride_bytes);
        }
        Ok(())
    }

    /// Copy the logical elements back to host memory in row-major order
    ///
    /// Stride padding is elided: the result has exactly `size.count()`
    /// values. Errors with [`Error::DTypeMismatch`] if `T` does not match
    /// the stored dtype.
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>> {
        if self.stride == self.cols() {
            return self.storage.to_vec();
        }

        if T::DTYPE != self.dtype() {
            return Err(Error::DTypeMismatch {
                stored: self.dtype(),
                requested: T::DTYPE,
            });
        }
        if self.size.is_empty() {
            return Ok(Vec::new());
        }

        let elem_size = self.dtype().size_in_bytes();
        let executor = self.storage.executor();
        let mut out = vec![T::zero(); self.size.count()];
        for (r, chunk) in out.chunks_mut(self.cols()).enumerate() {
            let src = self.storage.ptr() + (r * self.stride * elem_size) as u64;
            executor.copy_from(src, bytemuck::cast_slice_mut(chunk));
        }
        Ok(out)
    }

    /// Return a new matrix with rows and columns swapped
    ///
    /// The result has a packed layout on the same executor.
    pub fn transpose(&self) -> Result<Self> {
        match self.dtype() {
            DType::F32 => self.transpose_typed::<f32>(),
            DType::F64 => self.transpose_typed::<f64>(),
        }
    }

    fn transpose_typed<T: Element>(&self) -> Result<Self> {
        let src = self.to_vec::<T>()?;
        let mut dst = vec![T::zero(); src.len()];
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                dst[c * self.rows() + r] = src[r * self.cols() + c];
            }
        }
        Self::try_from_slice(&dst, self.size.transposed(), self.storage.executor())
    }

    /// Buffer offset of `(row, col)` as an executor handle
    ///
    /// Executor handles support byte-offset arithmetic within a buffer.
    fn element_ptr<T: Element>(&self, row: usize, col: usize) -> u64 {
        let elem_offset = row * self.stride + col;
        self.storage.ptr() + (elem_offset * std::mem::size_of::<T>()) as u64
    }

    fn check_access<T: Element>(&self, row: usize, col: usize) -> Result<()> {
        if T::DTYPE != self.dtype() {
            return Err(Error::DTypeMismatch {
                stored: self.dtype(),
                requested: T::DTYPE,
            });
        }
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }
}

impl<X: Executor> fmt::Debug for Dense<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dense")
            .field("size", &self.size.to_string())
            .field("stride", &self.stride)
            .field("dtype", &self.dtype())
            .field("executor", &self.storage.executor().name())
            .finish()
    }
}
