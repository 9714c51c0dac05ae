//! Construction-time configuration for `LongMap`.

use crate::error::InvalidArgument;
use slotmap::DefaultKey;

pub const DEFAULT_INITIAL_CAPACITY: i64 = 16;
pub const DEFAULT_LOAD_FACTOR: f32 = 0.75;

/// Largest bucket table a `Vec` can hold on this platform.
pub(crate) const MAX_BUCKETS: usize =
    isize::MAX as usize / core::mem::size_of::<Option<DefaultKey>>();

/// Starting bucket count and resize threshold.
///
/// The table is not allocated until the first insertion; `initial_capacity`
/// only decides how large that first allocation is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongMapConfig {
    pub initial_capacity: i64,
    pub load_factor: f32,
}

impl Default for LongMapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

/// Validated form of `LongMapConfig`, held by the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Settings {
    pub(crate) initial_capacity: usize,
    pub(crate) load_factor: f32,
}

impl LongMapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_capacity(mut self, initial_capacity: i64) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_load_factor(mut self, load_factor: f32) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Check both parameters. Capacity is checked first.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        self.settings().map(|_| ())
    }

    pub(crate) fn settings(&self) -> Result<Settings, InvalidArgument> {
        let initial_capacity = usize::try_from(self.initial_capacity)
            .ok()
            .filter(|&c| c <= MAX_BUCKETS)
            .ok_or(InvalidArgument::InitialCapacity(self.initial_capacity))?;
        // `!(x > 0.0)` also rejects NaN.
        if !(self.load_factor > 0.0) {
            return Err(InvalidArgument::LoadFactor(self.load_factor));
        }
        Ok(Settings {
            initial_capacity,
            load_factor: self.load_factor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = LongMapConfig::default();
        assert_eq!(c.initial_capacity, 16);
        assert_eq!(c.load_factor, 0.75);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn negative_capacity_rejected() {
        let c = LongMapConfig::new().with_initial_capacity(-1);
        assert_eq!(c.validate(), Err(InvalidArgument::InitialCapacity(-1)));
    }

    #[test]
    fn zero_capacity_accepted() {
        let c = LongMapConfig::new().with_initial_capacity(0);
        assert_eq!(c.settings().map(|s| s.initial_capacity), Ok(0));
    }

    #[test]
    fn bad_load_factors_rejected() {
        for lf in [0.0f32, -0.0, -0.5, f32::NEG_INFINITY] {
            let c = LongMapConfig::new().with_load_factor(lf);
            assert_eq!(c.validate(), Err(InvalidArgument::LoadFactor(lf)));
        }
        let c = LongMapConfig::new().with_load_factor(f32::NAN);
        assert!(matches!(c.validate(), Err(InvalidArgument::LoadFactor(v)) if v.is_nan()));
    }

    #[test]
    fn capacity_reported_before_load_factor() {
        let c = LongMapConfig {
            initial_capacity: -3,
            load_factor: f32::NAN,
        };
        assert_eq!(c.validate(), Err(InvalidArgument::InitialCapacity(-3)));
    }

    #[test]
    fn unaddressable_capacity_rejected() {
        let c = LongMapConfig::new().with_initial_capacity(i64::MAX);
        assert_eq!(c.validate(), Err(InvalidArgument::InitialCapacity(i64::MAX)));

        let over = MAX_BUCKETS as i64 + 1;
        let c = LongMapConfig::new().with_initial_capacity(over);
        assert_eq!(c.validate(), Err(InvalidArgument::InitialCapacity(over)));

        let c = LongMapConfig::new().with_initial_capacity(MAX_BUCKETS as i64);
        assert_eq!(c.settings().map(|s| s.initial_capacity), Ok(MAX_BUCKETS));
    }

    #[test]
    fn large_load_factor_accepted() {
        let c = LongMapConfig::new().with_load_factor(f32::INFINITY);
        assert!(c.validate().is_ok());
    }
}
