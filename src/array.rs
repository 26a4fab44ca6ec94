//! Fixed-size backing storage for `RingQueue`.

/// Trait for fixed size arrays usable as ring storage.
///
/// The length of the array is the capacity of the queue built on top of it.
///
/// # Safety
///
/// Implementors must be laid out as `capacity()` contiguous `Item`s starting
/// at offset zero, so that a pointer to `Self` is also a pointer to its first
/// element.
pub unsafe trait Array {
    /// The array’s element type
    type Item;

    /// Returns number of element the array can hold
    fn capacity() -> usize;
}

unsafe impl<T, const N: usize> Array for [T; N] {
    type Item = T;

    #[inline(always)]
    fn capacity() -> usize {
        N
    }
}

#[cfg(feature = "use_generic_array")]
mod generic_impl {
    use super::Array;
    use generic_array::{ArrayLength, GenericArray};

    unsafe impl<T, N> Array for GenericArray<T, N>
    where
        N: ArrayLength<T>,
    {
        type Item = T;

        #[inline(always)]
        fn capacity() -> usize {
            N::to_usize()
        }
    }
}
