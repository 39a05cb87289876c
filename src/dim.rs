//! Two-dimensional size descriptor

use std::fmt;

/// Size of a two-dimensional object: a row count and a column count
///
/// `Dim2` is a plain value type with no identity beyond its two integers.
/// It describes the logical shape of a matrix, independent of how the
/// elements are laid out in memory.
///
/// # Example
///
/// ```
/// use densor::dim::Dim2;
///
/// let size = Dim2::new(3, 4);
/// assert_eq!(size.rows(), 3);
/// assert_eq!(size.cols(), 4);
/// assert_eq!(size.count(), 12);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dim2 {
    rows: usize,
    cols: usize,
}

impl Dim2 {
    /// Create a size with the given row and column counts
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Create a square size (`n` rows and `n` columns)
    pub const fn square(n: usize) -> Self {
        Self { rows: n, cols: n }
    }

    /// Row count
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Column count
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of logical elements (`rows * cols`)
    #[inline]
    pub const fn count(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the size contains no elements
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// The size with rows and columns swapped
    pub const fn transposed(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl fmt::Display for Dim2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl From<(usize, usize)> for Dim2 {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}
