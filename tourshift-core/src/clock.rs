//! Clock-time arithmetic in minutes from midnight.
//!
//! Pickup times arrive as bare `"H:MM"` strings with no date or timezone.
//! [`MinutesFromMidnight`] is the canonical internal representation: a plain
//! minute count that is allowed to exceed `1439` so a shift's arithmetic can
//! run past midnight. Display wraps the hour component back onto a 24-hour
//! clock; the minute count itself is never reduced.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a `"H:MM"` clock-time string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockTimeError {
    /// The string has no `:` between hours and minutes.
    #[error("clock time '{0}' is missing an hour:minute separator")]
    MissingSeparator(String),
    /// A segment on either side of the `:` is not an integer.
    #[error("clock time '{0}' has a non-numeric segment")]
    NonNumericSegment(String),
}

/// A clock reading counted in minutes from midnight.
///
/// Values of `1440` or more are deliberately representable: a tour starting
/// late in the evening accumulates duration and cleanup past midnight, and
/// the arithmetic stays monotonic while only the rendered hour wraps.
/// Negative values can arise when large prep or drive offsets are subtracted
/// from an early pickup; they format with the minute component still in
/// `0..60` but are outside any behavior the engine promises.
///
/// # Examples
/// ```
/// use tourshift_core::MinutesFromMidnight;
///
/// let nine_fifteen: MinutesFromMidnight = "9:15".parse()?;
/// assert_eq!(nine_fifteen.get(), 555);
/// assert_eq!(nine_fifteen.to_string(), "9:15");
///
/// // Post-midnight readings wrap only on display.
/// let late: MinutesFromMidnight = "25:30".parse()?;
/// assert_eq!(late.get(), 1530);
/// assert_eq!(late.to_string(), "1:30");
/// # Ok::<(), tourshift_core::ClockTimeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct MinutesFromMidnight(i32);

impl MinutesFromMidnight {
    /// Wrap a raw minute count.
    ///
    /// # Examples
    /// ```
    /// use tourshift_core::MinutesFromMidnight;
    ///
    /// assert_eq!(MinutesFromMidnight::new(90).to_string(), "1:30");
    /// ```
    #[must_use]
    pub const fn new(minutes: i32) -> Self {
        Self(minutes)
    }

    /// Return the raw minute count, unreduced.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Shift the reading later by `minutes`.
    #[must_use]
    pub const fn plus(self, minutes: i32) -> Self {
        Self(self.0 + minutes)
    }

    /// Shift the reading earlier by `minutes`.
    #[must_use]
    pub const fn minus(self, minutes: i32) -> Self {
        Self(self.0 - minutes)
    }

    /// Reduce the reading onto a single calendar day.
    ///
    /// Post-midnight values land on the next day's clock face, exactly as
    /// [`MinutesFromMidnight`]'s `Display` renders them.
    ///
    /// # Examples
    /// ```
    /// use tourshift_core::MinutesFromMidnight;
    ///
    /// let time = MinutesFromMidnight::new(1530).to_naive_time();
    /// assert_eq!(time.to_string(), "01:30:00");
    /// ```
    #[must_use]
    pub fn to_naive_time(self) -> NaiveTime {
        let hours = self.0.div_euclid(60).rem_euclid(24);
        let minutes = self.0.rem_euclid(60);
        // Both components are already wrapped into range.
        NaiveTime::from_hms_opt(hours.unsigned_abs(), minutes.unsigned_abs(), 0)
            .unwrap_or(NaiveTime::MIN)
    }

    /// Pin the reading to a calendar date.
    ///
    /// The caller supplies the date; the engine never consults a wall clock.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use tourshift_core::MinutesFromMidnight;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let at = MinutesFromMidnight::new(555).on_date(date);
    /// assert_eq!(at.to_string(), "2024-06-01 09:15:00");
    /// ```
    #[must_use]
    pub fn on_date(self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.to_naive_time())
    }
}

impl fmt::Display for MinutesFromMidnight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut hours = self.0.div_euclid(60);
        if hours >= 24 {
            // 24, 48, ... render as the next day's clock reading.
            hours %= 24;
        }
        let minutes = self.0.rem_euclid(60);
        write!(f, "{hours}:{minutes:02}")
    }
}

impl FromStr for MinutesFromMidnight {
    type Err = ClockTimeError;

    /// Parse `"H:MM"` into minutes from midnight.
    ///
    /// The hour range is intentionally unvalidated so `"25:30"` can encode a
    /// pickup past midnight of the tour's own day.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = s
            .split_once(':')
            .ok_or_else(|| ClockTimeError::MissingSeparator(s.to_owned()))?;
        let hours: i32 = hours
            .trim()
            .parse()
            .map_err(|_| ClockTimeError::NonNumericSegment(s.to_owned()))?;
        let minutes: i32 = minutes
            .trim()
            .parse()
            .map_err(|_| ClockTimeError::NonNumericSegment(s.to_owned()))?;
        Ok(Self(hours * 60 + minutes))
    }
}
