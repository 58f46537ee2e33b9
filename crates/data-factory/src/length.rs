//! Validated length ranges for the character, word and text generators.

use crate::error::{InvalidArgument, LengthBound};

/// An inclusive `(min, max)` length constraint.
///
/// Both bounds are non-negative and `max >= min`; equal bounds request an
/// exact length.
///
/// # Example
///
/// ```
/// use data_factory::LengthRange;
///
/// let range = LengthRange::new(2, 5).expect("valid range");
/// assert!(range.contains(5));
/// assert!(LengthRange::new(5, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl LengthRange {
    /// Validates and builds a range.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::NegativeLength`] when either bound is
    /// negative, or [`InvalidArgument::InvertedLengthRange`] when
    /// `max < min`.
    pub fn new(min: i32, max: i32) -> Result<Self, InvalidArgument> {
        let lower = usize::try_from(min).map_err(|_| InvalidArgument::NegativeLength {
            bound: LengthBound::Min,
            value: min,
        })?;
        let upper = usize::try_from(max).map_err(|_| InvalidArgument::NegativeLength {
            bound: LengthBound::Max,
            value: max,
        })?;
        if upper < lower {
            return Err(InvalidArgument::InvertedLengthRange { min, max });
        }
        Ok(Self {
            min: lower,
            max: upper,
        })
    }

    /// Builds a range requesting exactly `length`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::NegativeLength`] when `length` is negative.
    pub fn exact(length: i32) -> Result<Self, InvalidArgument> {
        Self::new(length, length)
    }

    /// Builds a range from bounds already known to be ordered.
    pub(crate) const fn from_ordered(min: usize, max: usize) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn min(&self) -> usize {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Returns `true` when the range requests one exact length.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.min == self.max
    }

    /// Returns `true` when `length` lies within the range.
    #[must_use]
    pub const fn contains(&self, length: usize) -> bool {
        self.min <= length && length <= self.max
    }
}
