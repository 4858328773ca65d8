//! Owning iterator over a [`Collection`](crate::Collection).

use core::fmt;
use core::iter::FusedIterator;
use core::ptr;
use core::slice;

use crate::raw::RawBuf;

/// Iterator that moves elements out of a collection.
///
/// Elements not yielded are dropped with the iterator.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buf: RawBuf<T>, len: usize) -> Self {
        Self {
            buf,
            start: 0,
            end: len,
        }
    }

    /// Returns the remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots start..end are initialized and not yet yielded.
        unsafe { slice::from_raw_parts(self.buf.ptr().add(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: start < end, so the slot is live; bumping start gives up ownership.
        let item = unsafe { self.buf.ptr().add(self.start).read() };
        self.start += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: slot `end` was live and is now outside the remaining range.
        Some(unsafe { self.buf.ptr().add(self.end).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let rest: *mut [T] = ptr::slice_from_raw_parts_mut(
            // SAFETY: start <= end <= capacity.
            unsafe { self.buf.ptr().add(self.start) },
            self.end - self.start,
        );
        // SAFETY: the remaining slots are live and owned by the iterator.
        unsafe { ptr::drop_in_place(rest) }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
