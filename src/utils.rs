/// Advances `index` by `addend` slots on a ring of `capacity` slots.
#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}
