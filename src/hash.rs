//! Key hashing and bucket placement.
//!
//! The hash is a pure function of the key: the high and low 32-bit halves
//! are folded together with XOR. Placement reduces that hash modulo the
//! current bucket count, so every resize recomputes each entry's bucket.

/// Fold a 64-bit key into a 32-bit hash. Independent of table capacity.
#[inline]
pub(crate) fn fold(key: i64) -> u32 {
    let bits = key as u64;
    (bits ^ (bits >> 32)) as u32
}

/// Bucket index for `key` in a table of `capacity` slots.
///
/// `capacity` must be non-zero.
#[inline]
pub(crate) fn bucket_index(key: i64, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "bucket_index on an unallocated table");
    fold(key) as usize % capacity
}
