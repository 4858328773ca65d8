//! Construction-time configuration.

use crate::raw::RawBuf;
use crate::{BuildError, Collection};

/// Initial slot count used by [`Collection::new`] and [`CollectionBuilder::default`].
pub const DEFAULT_CAPACITY: usize = 4;

/// Geometric growth policy applied whenever a collection runs out of slots.
///
/// The next capacity is always `max(required, grow(current))`, so a bulk
/// request far beyond the current capacity is sized in a single step and
/// never allocates more than the growth factor times what was asked for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Growth {
    /// Double the capacity.
    #[default]
    Double,
    /// Grow by half the capacity (at least one slot).
    OneAndHalf,
}

impl Growth {
    /// Capacity following `current` under this policy.
    #[inline]
    pub fn next_capacity(self, current: usize) -> usize {
        match self {
            Growth::Double => current.saturating_mul(2),
            Growth::OneAndHalf => current.saturating_add((current / 2).max(1)),
        }
    }

    /// Capacity to allocate when `required` slots must fit and `current`
    /// are available.
    #[inline]
    pub fn target_capacity(self, current: usize, required: usize) -> usize {
        required.max(self.next_capacity(current))
    }
}

/// Builder for [`Collection`].
///
/// ```
/// use nexus_collection::{CollectionBuilder, Growth};
///
/// let coll = CollectionBuilder::default()
///     .capacity(64)
///     .growth(Growth::OneAndHalf)
///     .build::<u32>()
///     .unwrap();
///
/// assert_eq!(coll.capacity(), 64);
/// assert_eq!(coll.growth(), Growth::OneAndHalf);
/// ```
#[derive(Clone, Debug)]
pub struct CollectionBuilder {
    capacity: usize,
    growth: Growth,
}

impl Default for CollectionBuilder {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            growth: Growth::default(),
        }
    }
}

impl CollectionBuilder {
    /// Initial slot count. Default: [`DEFAULT_CAPACITY`].
    pub fn capacity(mut self, slots: usize) -> Self {
        self.capacity = slots;
        self
    }

    /// Growth policy. Default: [`Growth::Double`].
    pub fn growth(mut self, growth: Growth) -> Self {
        self.growth = growth;
        self
    }

    /// Build an empty collection.
    pub fn build<T>(self) -> Result<Collection<T>, BuildError> {
        if self.capacity == 0 {
            return Err(BuildError::ZeroCapacity);
        }

        let buf = RawBuf::try_with_capacity(self.capacity)?;
        Ok(Collection::from_raw(buf, self.growth))
    }
}
