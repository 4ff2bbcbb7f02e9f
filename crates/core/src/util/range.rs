use derive_more::Display;
use std::convert::TryFrom;

/// A range between two values, inclusive on both ends. Used for tile heights
/// and for keeping color percentages in bounds.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
#[display(fmt = "[{}, {}]", min, max)]
pub struct NumRange<T> {
    pub min: T,
    pub max: T,
}

impl<T> NumRange<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: Copy + PartialOrd> NumRange<T> {
    /// Check if a value is in this range
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Force a value into this range. Values outside the range snap to
    /// whichever bound is closer.
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

impl NumRange<i32> {
    /// Number of distinct integers in this range. Zero if the range is
    /// inverted, saturates at `u32::MAX`.
    pub fn len(&self) -> u32 {
        let len = i64::from(self.max) - i64::from(self.min) + 1;
        u32::try_from(len.max(0)).unwrap_or(u32::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 1-based position of a value within this range, so `min` is 1.
    /// Saturates the same way as [Self::len].
    pub fn level_of(&self, value: i32) -> u32 {
        let level = i64::from(value) - i64::from(self.min) + 1;
        u32::try_from(level.max(0)).unwrap_or(u32::MAX)
    }
}
