//! Growable, index-addressable sequence.

use core::fmt;
use core::mem::{self, ManuallyDrop};
use core::ops::{Index, IndexMut};
use core::ptr;
use core::slice;

use crate::builder::{DEFAULT_CAPACITY, Growth};
use crate::iter::IntoIter;
use crate::raw::{RawBuf, capacity_overflow};
use crate::OutOfRange;

/// Contiguous, growable sequence with bounds-checked positional access.
///
/// Only the first [`len`](Self::len) of [`capacity`](Self::capacity) slots
/// hold live elements. Capacity grows geometrically (see [`Growth`]) and
/// never shrinks on removal or [`clear`](Self::clear).
///
/// Every index-taking operation validates the index before touching any
/// state: on [`OutOfRange`] the collection is exactly as it was.
///
/// # Example
///
/// ```
/// use nexus_collection::{Collection, collection};
///
/// let mut coll = collection![5, 6, 7];
/// coll.insert_at(2, 666).unwrap();
/// coll.exchange(1, 2).unwrap();
/// assert_eq!(coll.to_string(), "[5, 666, 6, 7]");
///
/// assert!(coll.remove_at(4).is_err());
/// assert_eq!(coll.len(), 4);
/// ```
pub struct Collection<T> {
    buf: RawBuf<T>,
    len: usize,
    growth: Growth,
}

impl<T> Collection<T> {
    /// Creates an empty collection with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::from_raw(RawBuf::with_capacity(DEFAULT_CAPACITY), Growth::default())
    }

    /// Creates an empty collection with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 or the buffer size overflows `isize::MAX`.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self::from_raw(RawBuf::with_capacity(capacity), Growth::default())
    }

    pub(crate) fn from_raw(buf: RawBuf<T>, growth: Growth) -> Self {
        Self { buf, len: 0, growth }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots. Always `>= len()`.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the growth policy.
    #[inline]
    pub const fn growth(&self) -> Growth {
        self.growth
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Returns a reference to the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, OutOfRange> {
        self.check(index, self.len)?;
        // SAFETY: index < len
        Ok(unsafe { self.as_slice().get_unchecked(index) })
    }

    /// Returns a mutable reference to the element at `index`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        self.check(index, self.len)?;
        // SAFETY: index < len
        Ok(unsafe { self.as_mut_slice().get_unchecked_mut(index) })
    }

    /// Overwrites the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, OutOfRange> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Iterates the elements in order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates the elements mutably in order.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Appends an element. Amortized O(1).
    pub fn add(&mut self, item: T) {
        if self.len == self.buf.capacity() {
            self.reserve(1);
        }

        // SAFETY: len < capacity after the reserve above.
        unsafe { self.buf.ptr().add(self.len).write(item) };
        self.len += 1;
    }

    /// Appends every item in order.
    ///
    /// Room for the iterator's lower size bound is reserved up front, so an
    /// exact-size source costs at most one reallocation.
    ///
    /// ```
    /// use nexus_collection::Collection;
    ///
    /// let mut coll = Collection::new();
    /// coll.add_range(1000..6000);
    /// assert_eq!(coll.len(), 5000);
    /// assert!(coll.capacity() >= coll.len());
    /// ```
    pub fn add_range<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let iter = items.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);

        for item in iter {
            self.add(item);
        }
    }

    /// Inserts `item` at `index`, shifting later elements right.
    ///
    /// `index == len()` appends. O(len - index).
    pub fn insert_at(&mut self, index: usize, item: T) -> Result<(), OutOfRange> {
        self.check(index, self.len.saturating_add(1))?;

        if self.len == self.buf.capacity() {
            self.reserve(1);
        }

        // SAFETY: index <= len < capacity. The tail move stays within the
        // allocation and the vacated slot is written before len is bumped.
        unsafe {
            let slot = self.buf.ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(item);
        }
        self.len += 1;

        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// left. Capacity is unchanged. O(len - index).
    pub fn remove_at(&mut self, index: usize) -> Result<T, OutOfRange> {
        self.check(index, self.len)?;

        // SAFETY: index < len. The value is moved out before its slot is
        // overwritten by the tail.
        unsafe {
            let slot = self.buf.ptr().add(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: slot `len` was initialized and is now outside the live range.
        Some(unsafe { self.buf.ptr().add(self.len).read() })
    }

    /// Swaps the elements at `i` and `j`.
    pub fn exchange(&mut self, i: usize, j: usize) -> Result<(), OutOfRange> {
        self.check(i, self.len)?;
        self.check(j, self.len)?;
        self.as_mut_slice().swap(i, j);
        Ok(())
    }

    /// Drops every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        let elems: *mut [T] = self.as_mut_slice();
        // Length goes first so a panicking destructor cannot expose dropped slots.
        self.len = 0;
        // SAFETY: the slice covered exactly the previously live elements.
        unsafe { ptr::drop_in_place(elems) }
    }

    /// Ensures room for at least `additional` more elements.
    ///
    /// Growth follows the collection's [`Growth`] policy, so this never
    /// allocates more than the growth factor times `len() + additional`.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows.
    pub fn reserve(&mut self, additional: usize) {
        let Some(required) = self.len.checked_add(additional) else {
            capacity_overflow()
        };

        let cap = self.buf.capacity();
        if required <= cap {
            return;
        }

        let new_cap = self.growth.target_capacity(cap, required);
        self.buf.grow_to(new_cap, self.len);
    }

    /// Single validation point for every index-taking operation.
    #[inline]
    fn check(&self, index: usize, end: usize) -> Result<(), OutOfRange> {
        if index < end {
            Ok(())
        } else {
            Err(OutOfRange {
                index,
                len: self.len,
            })
        }
    }
}

impl<T> Drop for Collection<T> {
    fn drop(&mut self) {
        // SAFETY: drops exactly the live elements; RawBuf frees the memory.
        unsafe { ptr::drop_in_place(self.as_mut_slice() as *mut [T]) }
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Collection<T> {
    fn clone(&self) -> Self {
        let mut out = Self::from_raw(
            RawBuf::with_capacity(self.len.max(DEFAULT_CAPACITY)),
            self.growth,
        );
        out.add_range(self.iter().cloned());
        out
    }
}

impl<T: PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Collection<T> {}

impl<T> Index<usize> for Collection<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for Collection<T> {
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

// =============================================================================
// Construction from values
// =============================================================================

impl<T, const N: usize> From<[T; N]> for Collection<T> {
    fn from(items: [T; N]) -> Self {
        let mut coll = Self::with_capacity(N.max(DEFAULT_CAPACITY));
        coll.add_range(items);
        coll
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut coll = Self::new();
        coll.add_range(iter);
        coll
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Collection<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.add_range(iter.into_iter().copied());
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let me = ManuallyDrop::new(self);
        // SAFETY: `me` is never dropped, so the buffer moves out exactly once
        // and the iterator takes over the `len` live elements.
        let buf = unsafe { ptr::read(&me.buf) };
        IntoIter::new(buf, me.len)
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Collection<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Renders `[e0, e1, ..., en-1]` using each element's own `Display`.
///
/// Nested collections recurse through the same impl:
///
/// ```
/// use nexus_collection::{Collection, collection};
///
/// let grid = collection![collection![1, 2], collection![3, 4], Collection::new()];
/// assert_eq!(grid.to_string(), "[[1, 2], [3, 4], []]");
/// ```
impl<T: fmt::Display> fmt::Display for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
