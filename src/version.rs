//! Library version query

use std::fmt;

/// Version of the densor library, split into its semver components
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Version {
    /// Major version
    pub major: u32,
    /// Minor version
    pub minor: u32,
    /// Patch version
    pub patch: u32,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Query the version of the densor library
///
/// The components come from the crate metadata at compile time.
///
/// # Example
///
/// ```
/// let v = densor::version();
/// assert_eq!(v.to_string(), env!("CARGO_PKG_VERSION"));
/// ```
pub fn version() -> Version {
    // CARGO_PKG_VERSION_* are guaranteed numeric by cargo, so the const
    // parser below cannot fail for a published crate.
    const fn parse(s: &str) -> u32 {
        let bytes = s.as_bytes();
        let mut value = 0u32;
        let mut i = 0;
        while i < bytes.len() {
            value = value * 10 + (bytes[i] - b'0') as u32;
            i += 1;
        }
        value
    }

    const MAJOR: u32 = parse(env!("CARGO_PKG_VERSION_MAJOR"));
    const MINOR: u32 = parse(env!("CARGO_PKG_VERSION_MINOR"));
    const PATCH: u32 = parse(env!("CARGO_PKG_VERSION_PATCH"));

    Version {
        major: MAJOR,
        minor: MINOR,
        patch: PATCH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_manifest() {
        assert_eq!(version().to_string(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_version_display() {
        let v = Version {
            major: 1,
            minor: 23,
            patch: 4,
        };
        assert_eq!(v.to_string(), "1.23.4");
    }
}
