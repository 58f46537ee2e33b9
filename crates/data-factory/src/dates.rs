//! Calendar and instant generators.
//!
//! Dates are `chrono` naive date-times; no time zone is involved.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use rand::Rng;

use crate::error::InvalidArgument;
use crate::generator::Generator;

/// Half-width, in days, of the birth-date window around the Unix epoch.
pub const BIRTH_DATE_SPAN_DAYS: i32 = 365 * 15;

fn offset_by_days(base: NaiveDateTime, days: i32) -> Result<NaiveDateTime, InvalidArgument> {
    TimeDelta::try_days(i64::from(days))
        .and_then(|delta| base.checked_add_signed(delta))
        .ok_or(InvalidArgument::DateOutOfRange {
            days: i64::from(days),
        })
}

impl Generator {
    /// Builds midnight on the given calendar date; `month` is 1-based.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::InvalidDate`] when the parts do not name a
    /// calendar date.
    ///
    /// # Example
    ///
    /// ```
    /// use data_factory::Generator;
    ///
    /// let date = Generator::date(2024, 2, 29).expect("leap day");
    /// assert_eq!(date.to_string(), "2024-02-29 00:00:00");
    /// assert!(Generator::date(2023, 2, 29).is_err());
    /// ```
    pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDateTime, InvalidArgument> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| date.and_time(NaiveTime::MIN))
            .ok_or(InvalidArgument::InvalidDate { year, month, day })
    }

    /// Offsets `base` by a whole number of days drawn from
    /// `[min_days, max_days)`, keeping its time of day.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::InvertedNumberRange`] when
    /// `max_days < min_days`, or [`InvalidArgument::DateOutOfRange`] when the
    /// result is not representable.
    pub fn date_offset(
        &mut self,
        base: NaiveDateTime,
        min_days: i32,
        max_days: i32,
    ) -> Result<NaiveDateTime, InvalidArgument> {
        let days = self.number_between(min_days, max_days)?;
        offset_by_days(base, days)
    }

    /// Returns an instant in `[min, max)` at whole-second resolution.
    ///
    /// The position is a continuous draw scaled by the span, so spans wider
    /// than `i32` seconds are covered evenly. Equal instants return `min`
    /// without consuming randomness.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::InvertedDateRange`] when `max < min`.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        reason = "the offset is a fraction of the span; both fit f64 and i64 comfortably"
    )]
    pub fn date_between(
        &mut self,
        min: NaiveDateTime,
        max: NaiveDateTime,
    ) -> Result<NaiveDateTime, InvalidArgument> {
        if max < min {
            return Err(InvalidArgument::InvertedDateRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        let span = max.signed_duration_since(min).num_seconds();
        if span == 0 {
            return Ok(min);
        }
        let fraction: f64 = self.random.draw(|rng| rng.random());
        let seconds = ((fraction * span as f64).floor() as i64).clamp(0, span - 1);
        Ok(min + TimeDelta::seconds(seconds))
    }

    /// Returns a birth date within 15 years either side of the Unix epoch.
    pub fn birth_date(&mut self) -> NaiveDateTime {
        let epoch = DateTime::<Utc>::UNIX_EPOCH.naive_utc();
        let days = self
            .random
            .between(-BIRTH_DATE_SPAN_DAYS, BIRTH_DATE_SPAN_DAYS);
        epoch + TimeDelta::days(i64::from(days))
    }
}
