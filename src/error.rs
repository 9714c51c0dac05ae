//! Construction errors.

use thiserror::Error;

/// Rejected construction argument. No map is produced when this is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidArgument {
    /// Negative, or too large to address on this platform.
    #[error("illegal initial capacity: {0}")]
    InitialCapacity(i64),
    /// Zero, negative, or NaN.
    #[error("illegal load factor: {0}")]
    LoadFactor(f32),
}
