//! Growable, index-addressable sequence container.
//!
//! [`Collection<T>`] owns one contiguous buffer and tracks its logical length
//! separately from its allocated capacity. Appends are amortized O(1),
//! positional insert/remove shift the tail, and every index is validated
//! before anything is touched.
//!
//! # Quick Start
//!
//! ```
//! use nexus_collection::{Collection, collection};
//!
//! let mut coll = Collection::new();
//! coll.add(5);
//! coll.add_range([6, 7, 8]);
//! assert_eq!(coll[0], 5);
//!
//! coll.insert_at(2, 666).unwrap();
//! coll.exchange(1, 2).unwrap();
//! assert_eq!(coll.to_string(), "[5, 666, 6, 7, 8]");
//!
//! coll.clear();
//! assert_eq!(coll.to_string(), "[]");
//! assert!(coll.capacity() >= coll.len());
//!
//! let seeded = collection![5, 10];
//! assert_eq!(seeded.to_string(), "[5, 10]");
//! ```
//!
//! # Capacity and Growth
//!
//! ```text
//! len       - live elements, indices 0..len
//! capacity  - allocated slots, always >= len
//! ```
//!
//! When a request needs `required` slots, the buffer is reallocated to
//! `max(required, grow(capacity))` where `grow` is the [`Growth`] policy
//! (doubling by default). Repeated appends therefore cost O(1) amortized,
//! and a single large [`add_range`](Collection::add_range) is satisfied
//! with one reallocation. Capacity never shrinks on removal or clear.
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `get` / `set` / `exchange` | O(1) |
//! | `add` | O(1) amortized |
//! | `add_range` (k items) | O(k) |
//! | `insert_at` / `remove_at` | O(len - index) |
//! | `clear` | O(len) drops |
//!
//! # Errors
//!
//! Index-taking operations return [`OutOfRange`] and leave the collection
//! unmodified. `Index`/`IndexMut` panic with the same message.
//!
//! # Rendering
//!
//! `Collection<T: Display>` renders as `[e0, e1, ...]`. Because the
//! collection is itself `Display`, nesting recurses:
//!
//! ```
//! use std::fmt::Display;
//! use nexus_collection::{Collection, collection};
//!
//! let names = collection!["Kate", "Nick"];
//! let nums = collection![10, 100];
//! let dates: Collection<String> = Collection::new();
//!
//! let nested: Collection<Box<dyn Display>> = collection![
//!     Box::new(names) as Box<dyn Display>,
//!     Box::new(nums) as Box<dyn Display>,
//!     Box::new(dates) as Box<dyn Display>,
//! ];
//! assert_eq!(nested.to_string(), "[[Kate, Nick], [10, 100], []]");
//! ```

#![warn(missing_docs)]

mod builder;
mod collection;
mod error;
mod iter;
mod raw;

pub use builder::{CollectionBuilder, DEFAULT_CAPACITY, Growth};
pub use collection::Collection;
pub use error::{BuildError, OutOfRange};
pub use iter::IntoIter;

/// Creates a [`Collection`] holding the given elements in order.
///
/// ```
/// use nexus_collection::collection;
///
/// let coll = collection!["Ivan", "John"];
/// assert_eq!(coll.len(), 2);
/// assert!(coll.capacity() >= 2);
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::Collection::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Collection::from([$($item),+])
    };
}
