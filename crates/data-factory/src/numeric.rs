//! Integer range generators.
//!
//! Numeric ranges are half-open: `number_between(min, max)` never returns
//! `max`. Length ranges elsewhere in the crate are inclusive.

use crate::error::InvalidArgument;
use crate::generator::Generator;

impl Generator {
    /// Returns a uniform integer in `[min, max)`.
    ///
    /// Equal bounds return `min` without consuming randomness.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::InvertedNumberRange`] when `max < min`.
    ///
    /// # Example
    ///
    /// ```
    /// use data_factory::Generator;
    ///
    /// let mut generator = Generator::from_seed(5);
    /// let value = generator.number_between(10, 20).expect("valid range");
    /// assert!((10..20).contains(&value));
    /// assert_eq!(generator.number_between(7, 7), Ok(7));
    /// ```
    pub fn number_between(&mut self, min: i32, max: i32) -> Result<i32, InvalidArgument> {
        if max < min {
            return Err(InvalidArgument::InvertedNumberRange {
                min: i64::from(min),
                max: i64::from(max),
            });
        }
        Ok(self.random.between(min, max))
    }

    /// Returns a uniform integer in `[0, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::InvertedNumberRange`] when `max` is
    /// negative.
    pub fn number_up_to(&mut self, max: i32) -> Result<i32, InvalidArgument> {
        self.number_between(0, max)
    }

    /// Returns a uniform integer in `[i32::MIN, i32::MAX)`.
    pub fn number(&mut self) -> i32 {
        self.random.between(i32::MIN, i32::MAX)
    }
}
