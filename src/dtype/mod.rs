//! Data type system for densor matrices
//!
//! Element types are runtime values (`DType`) so that matrix storage can be
//! dtype-erased, with the `Element` trait bridging back to concrete Rust
//! types at the access boundary.

mod element;

pub use element::Element;

use std::fmt;

/// Element type of a matrix, as a runtime value
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit IEEE 754 floating point
    F32,
    /// 64-bit IEEE 754 floating point
    F64,
}

impl DType {
    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(&self) -> usize {
        match self {
            DType::F32 => 4,
            DType::F64 => 8,
        }
    }

    /// Short lowercase name, e.g. `"f32"`
    pub const fn name(&self) -> &'static str {
        match self {
            DType::F32 => "f32",
            DType::F64 => "f64",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_in_bytes() {
        assert_eq!(DType::F32.size_in_bytes(), 4);
        assert_eq!(DType::F64.size_in_bytes(), 8);
    }

    #[test]
    fn test_display() {
        assert_eq!(DType::F32.to_string(), "f32");
        assert_eq!(DType::F64.to_string(), "f64");
    }
}
