//! Owned, contiguous slot buffer.
//!
//! `RawBuf` only tracks memory: it never knows how many slots are
//! initialized. Element lifetimes are the owner's responsibility.

use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};
use std::alloc::{Layout, alloc, dealloc, handle_alloc_error};

use crate::BuildError;

/// Heap buffer of `cap` possibly-uninitialized `T` slots.
///
/// Zero-sized types never allocate and report `usize::MAX` slots.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    /// Cached layout for deallocation.
    layout: Layout,
    _marker: PhantomData<T>,
}

impl<T> RawBuf<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Allocates `capacity` slots, reporting overflow instead of panicking.
    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, BuildError> {
        if Self::IS_ZST {
            return Ok(Self::dangling());
        }

        debug_assert!(capacity > 0);
        let layout = Layout::array::<T>(capacity).map_err(|_| BuildError::CapacityOverflow)?;

        Ok(Self {
            ptr: allocate(layout),
            cap: capacity,
            layout,
            _marker: PhantomData,
        })
    }

    /// Allocates `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if the byte size of the buffer overflows `isize::MAX`.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(buf) => buf,
            Err(_) => capacity_overflow(),
        }
    }

    fn dangling() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: usize::MAX,
            layout: Layout::new::<()>(),
            _marker: PhantomData,
        }
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Moves the first `len` slots into a fresh allocation of `new_cap` slots
    /// and releases the old one.
    ///
    /// The new buffer is fully allocated before anything is touched, so a
    /// failed allocation leaves the old buffer and its contents intact.
    ///
    /// # Panics
    ///
    /// Panics if the byte size of the new buffer overflows `isize::MAX`.
    pub(crate) fn grow_to(&mut self, new_cap: usize, len: usize) {
        debug_assert!(!Self::IS_ZST);
        debug_assert!(new_cap > self.cap);
        debug_assert!(len <= self.cap);

        let new_layout = match Layout::array::<T>(new_cap) {
            Ok(layout) => layout,
            Err(_) => capacity_overflow(),
        };
        let new_ptr = allocate::<T>(new_layout);

        // SAFETY: both buffers hold at least `len` slots and are distinct
        // allocations. The old block was allocated with `self.layout`.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), len);
            dealloc(self.ptr.as_ptr().cast::<u8>(), self.layout);
        }

        self.ptr = new_ptr;
        self.cap = new_cap;
        self.layout = new_layout;
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.layout.size() != 0 {
            // SAFETY: non-empty layouts always come from `allocate`.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), self.layout) }
        }
    }
}

// Safety: RawBuf uniquely owns its allocation.
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

fn allocate<T>(layout: Layout) -> NonNull<T> {
    debug_assert!(layout.size() != 0);
    // SAFETY: layout has non-zero size.
    let ptr = unsafe { alloc(layout) };
    match NonNull::new(ptr.cast::<T>()) {
        Some(ptr) => ptr,
        None => handle_alloc_error(layout),
    }
}

#[cold]
#[track_caller]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}
