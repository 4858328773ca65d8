//! Error types for collection operations.

use core::fmt;

/// Index outside the valid range of a collection.
///
/// Element access, removal and exchange accept `0..len`; insertion
/// accepts `0..=len`. The collection is left untouched when this is
/// returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// The rejected index.
    pub index: usize,
    /// Length of the collection at the time of the call.
    pub len: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range for length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfRange {}

/// Error during collection construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// Initial capacity is zero.
    ZeroCapacity,
    /// Requested capacity does not fit in the address space.
    CapacityOverflow,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::ZeroCapacity => write!(f, "capacity cannot be zero"),
            BuildError::CapacityOverflow => write!(f, "capacity overflow"),
        }
    }
}

impl std::error::Error for BuildError {}
