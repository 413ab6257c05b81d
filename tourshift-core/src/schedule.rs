//! Shift start/end derivation for a single tour.
//!
//! All derivations anchor on a pickup time chosen by the caller's inclusion
//! policy, then subtract or add the optional offsets from the shift
//! template. When no timed pickup informs the schedule, the wall-clock time
//! of `starts_at` is the fallback and the offsets are skipped: they are only
//! meaningful relative to a real pickup.
//!
//! Derived times are rendered as `"H:MM"` strings (the fallback keeps its
//! zero-padded `"HH:MM"` form, matching the upstream calendar formatting).

use crate::clock::{ClockTimeError, MinutesFromMidnight};
use crate::pickup::{
    earliest_pickup, earliest_pickup_time, latest_pickup, latest_pickup_time, sort_pickups_by_time,
};
use crate::tour::Tour;

/// Inclusion flags for [`derive_start_time`].
///
/// The flags are independent because callers want different readings:
/// `include_drive_time_to_first_pickup` alone answers "when do I depart the
/// office", adding `include_prep_time` answers "when must I be in the
/// office", and neither flag yields the raw anchor pickup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StartTimeOptions {
    /// Anchor on the earliest pickup (`true`) rather than the latest.
    ///
    /// When pickups count towards the tour's duration the shift effectively
    /// begins at the first collection; otherwise service begins once the
    /// last passenger is aboard.
    pub include_pickups_in_duration: bool,
    /// Subtract the shift template's prep minutes.
    pub include_prep_time: bool,
    /// Subtract the anchor pickup's one-way office drive time.
    pub include_drive_time_to_first_pickup: bool,
}

impl StartTimeOptions {
    /// Every offset applied: the "be in the office by" reading.
    pub const TIME_IN_OFFICE: Self = Self {
        include_pickups_in_duration: true,
        include_prep_time: true,
        include_drive_time_to_first_pickup: true,
    };
}

/// Wall-clock time of `starts_at`, used when no pickup informs the schedule.
fn fallback_start(tour: &Tour) -> String {
    tour.starts_at.format("%H:%M").to_string()
}

/// Derive the tour's start time under the given inclusion policy.
///
/// The anchor is the earliest non-cancelled pickup when pickups count
/// towards the duration, else the latest. If the anchor has no clock time
/// the `starts_at` wall-clock time is returned unadjusted.
///
/// # Errors
/// Propagates [`ClockTimeError`] for any malformed pickup time on the tour.
///
/// # Examples
/// ```
/// use tourshift_core::schedule::{StartTimeOptions, derive_start_time};
/// use tourshift_core::test_support::{pax_with_drive, tour_with_pax};
///
/// // 10:00 pickup, 30 minutes from the office, 15 prep minutes.
/// let tour = tour_with_pax(vec![pax_with_drive("10:00", 30)]);
/// let start = derive_start_time(&tour, &StartTimeOptions {
///     include_prep_time: true,
///     include_drive_time_to_first_pickup: true,
///     ..StartTimeOptions::default()
/// })?;
/// assert_eq!(start, "9:15");
/// # Ok::<(), tourshift_core::ClockTimeError>(())
/// ```
pub fn derive_start_time(
    tour: &Tour,
    options: &StartTimeOptions,
) -> Result<String, ClockTimeError> {
    let anchor = if options.include_pickups_in_duration {
        earliest_pickup(tour)?
    } else {
        latest_pickup(tour)?
    };

    let Some(time) = anchor.as_ref().and_then(|pickup| pickup.time.as_deref()) else {
        log::debug!("no timed pickup; falling back to starts_at wall-clock time");
        return Ok(fallback_start(tour));
    };

    let mut minutes: MinutesFromMidnight = time.parse()?;
    if options.include_drive_time_to_first_pickup {
        let drive = anchor
            .as_ref()
            .and_then(|pickup| pickup.minutes_away_from_office)
            .unwrap_or(0);
        minutes = minutes.minus(drive);
    }
    if options.include_prep_time {
        minutes = minutes.minus(tour.shift.prep_minutes);
    }
    Ok(minutes.to_string())
}

/// The "be in the office by" start reading: all offsets applied.
///
/// # Errors
/// Propagates [`ClockTimeError`] for any malformed pickup time on the tour.
pub fn suggested_time_in_office(tour: &Tour) -> Result<String, ClockTimeError> {
    derive_start_time(tour, &StartTimeOptions::TIME_IN_OFFICE)
}

/// Derive the tour's end time: start plus duration, optionally plus cleanup.
///
/// The start reading here never includes prep or drive offsets; those push
/// the staff's day earlier without moving the service window.
///
/// # Errors
/// Propagates [`ClockTimeError`] for any malformed pickup time on the tour.
pub fn derive_end_time(
    tour: &Tour,
    include_pickups_in_duration: bool,
    include_cleanup_time: bool,
) -> Result<String, ClockTimeError> {
    let start = derive_start_time(
        tour,
        &StartTimeOptions {
            include_pickups_in_duration,
            ..StartTimeOptions::default()
        },
    )?;
    let mut end = start
        .parse::<MinutesFromMidnight>()?
        .plus(tour.shift.duration_minutes);
    if include_cleanup_time {
        end = end.plus(tour.shift.cleanup_minutes);
    }
    Ok(end.to_string())
}

/// Minutes worked from office arrival through end of cleanup.
///
/// The end reading is rendered on a 24-hour clock, so a shift crossing
/// midnight can parse back numerically earlier than its start; this is the
/// one place that wrap is corrected, by adding a day before subtracting.
///
/// # Errors
/// Propagates [`ClockTimeError`] for any malformed pickup time on the tour.
///
/// # Examples
/// ```
/// use tourshift_core::schedule::total_worked_minutes;
/// use tourshift_core::test_support::{pax_at, shift, tour_with_pax_and_shift};
///
/// // 23:00 pickup, two-hour shift ending at 1:00 the next day.
/// let tour = tour_with_pax_and_shift(vec![pax_at("23:00")], shift(120, 0, 0));
/// assert_eq!(total_worked_minutes(&tour)?, 120);
/// # Ok::<(), tourshift_core::ClockTimeError>(())
/// ```
pub fn total_worked_minutes(tour: &Tour) -> Result<i32, ClockTimeError> {
    let start = suggested_time_in_office(tour)?
        .parse::<MinutesFromMidnight>()?
        .get();
    let mut end = derive_end_time(tour, false, true)?
        .parse::<MinutesFromMidnight>()?
        .get();
    if start > end {
        end += 1440;
    }
    Ok(end - start)
}

/// Spread between the earliest and latest non-cancelled pickup times.
///
/// Zero when fewer than two timed pickups exist (a single pickup is both
/// earliest and latest).
///
/// # Errors
/// Propagates [`ClockTimeError`] for any malformed pickup time on the tour.
pub fn total_pickup_duration_minutes(tour: &Tour) -> Result<i32, ClockTimeError> {
    let (Some(earliest), Some(latest)) = (earliest_pickup_time(tour)?, latest_pickup_time(tour)?)
    else {
        return Ok(0);
    };
    Ok(latest.get() - earliest.get())
}

/// Suggested time to depart the office for the first pickup.
///
/// First pickup time minus its one-way drive time, falling back to the
/// `starts_at` wall-clock time when no pickup time exists. Unlike the other
/// derivations this does **not** filter cancelled pax first; the upstream
/// behavior is preserved as-is even though the asymmetry looks accidental.
///
/// # Errors
/// Propagates [`ClockTimeError`] for any malformed pickup time on the tour.
pub fn suggested_departure_for_first_pickup(tour: &Tour) -> Result<String, ClockTimeError> {
    let sorted = sort_pickups_by_time(tour, true)?;
    let Some(first) = sorted.pax.first() else {
        return Ok(fallback_start(tour));
    };
    let Some(time) = first.pickup.time.as_deref() else {
        return Ok(fallback_start(tour));
    };
    let drive = first.pickup.minutes_away_from_office.unwrap_or(0);
    Ok(time.parse::<MinutesFromMidnight>()?.minus(drive).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        cancelled_pax_at, pax_at, pax_with_drive, shift, tour_with_pax, tour_with_pax_and_shift,
        untimed_pax,
    };
    use rstest::rstest;

    #[test]
    fn no_pax_falls_back_to_starts_at_wall_clock() {
        let tour = tour_with_pax(Vec::new());
        let start = derive_start_time(&tour, &StartTimeOptions::default()).unwrap();
        assert_eq!(start, "08:00");
    }

    #[test]
    fn untimed_anchor_falls_back_even_when_other_pax_have_times() {
        // The untimed pax keys as 0 and wins the ascending sort, masking the
        // timed pickup; the fallback applies.
        let tour = tour_with_pax(vec![untimed_pax(), pax_at("9:00")]);
        let start = derive_start_time(
            &tour,
            &StartTimeOptions {
                include_pickups_in_duration: true,
                ..StartTimeOptions::default()
            },
        )
        .unwrap();
        assert_eq!(start, "08:00");
    }

    #[test]
    fn fallback_skips_prep_and_drive_offsets() {
        let tour = tour_with_pax_and_shift(Vec::new(), shift(240, 45, 0));
        let start = derive_start_time(&tour, &StartTimeOptions::TIME_IN_OFFICE).unwrap();
        assert_eq!(start, "08:00");
    }

    #[rstest]
    #[case(false, "11:00")] // anchor on latest pickup
    #[case(true, "9:00")] // anchor on earliest pickup
    fn anchor_follows_pickup_inclusion_flag(#[case] include: bool, #[case] expected: &str) {
        let tour = tour_with_pax(vec![pax_at("09:00"), pax_at("11:00")]);
        let start = derive_start_time(
            &tour,
            &StartTimeOptions {
                include_pickups_in_duration: include,
                ..StartTimeOptions::default()
            },
        )
        .unwrap();
        assert_eq!(start, expected);
    }

    #[test]
    fn prep_and_drive_offsets_both_subtract() {
        let tour = tour_with_pax_and_shift(vec![pax_with_drive("10:00", 30)], shift(240, 15, 0));
        let start = derive_start_time(
            &tour,
            &StartTimeOptions {
                include_prep_time: true,
                include_drive_time_to_first_pickup: true,
                ..StartTimeOptions::default()
            },
        )
        .unwrap();
        assert_eq!(start, "9:15");
    }

    #[test]
    fn drive_offset_survives_without_prep_flag() {
        let tour = tour_with_pax(vec![pax_with_drive("10:00", 30)]);
        let start = derive_start_time(
            &tour,
            &StartTimeOptions {
                include_drive_time_to_first_pickup: true,
                ..StartTimeOptions::default()
            },
        )
        .unwrap();
        assert_eq!(start, "9:30");
    }

    #[test]
    fn missing_drive_time_counts_as_zero() {
        let tour = tour_with_pax(vec![pax_at("10:00")]);
        let start = derive_start_time(
            &tour,
            &StartTimeOptions {
                include_drive_time_to_first_pickup: true,
                ..StartTimeOptions::default()
            },
        )
        .unwrap();
        assert_eq!(start, "10:00");
    }

    #[test]
    fn cancelled_pax_never_anchor_the_start() {
        let tour = tour_with_pax(vec![cancelled_pax_at("7:00"), pax_at("9:00")]);
        let start = derive_start_time(
            &tour,
            &StartTimeOptions {
                include_pickups_in_duration: true,
                ..StartTimeOptions::default()
            },
        )
        .unwrap();
        assert_eq!(start, "9:00");
    }

    #[rstest]
    #[case(false, "14:00")]
    #[case(true, "14:30")]
    fn end_time_adds_duration_then_optional_cleanup(
        #[case] include_cleanup: bool,
        #[case] expected: &str,
    ) {
        let tour = tour_with_pax_and_shift(vec![pax_at("10:00")], shift(240, 15, 30));
        let end = derive_end_time(&tour, false, include_cleanup).unwrap();
        assert_eq!(end, expected);
    }

    #[test]
    fn end_time_wraps_hour_past_midnight() {
        let tour = tour_with_pax_and_shift(vec![pax_at("23:00")], shift(120, 0, 0));
        assert_eq!(derive_end_time(&tour, false, false).unwrap(), "1:00");
    }

    #[test]
    fn worked_minutes_correct_for_midnight_crossing() {
        let tour = tour_with_pax_and_shift(vec![pax_at("23:00")], shift(120, 0, 0));
        assert_eq!(total_worked_minutes(&tour).unwrap(), 120);
    }

    #[test]
    fn worked_minutes_span_office_arrival_to_cleanup() {
        // In office 9:15 (10:00 - 30 drive - 15 prep); end 14:30 incl. cleanup.
        let tour = tour_with_pax_and_shift(vec![pax_with_drive("10:00", 30)], shift(240, 15, 30));
        assert_eq!(total_worked_minutes(&tour).unwrap(), 315);
    }

    #[test]
    fn departure_suggestion_subtracts_drive_time() {
        let tour = tour_with_pax(vec![pax_with_drive("10:00", 30), pax_at("11:00")]);
        assert_eq!(
            suggested_departure_for_first_pickup(&tour).unwrap(),
            "9:30"
        );
    }

    #[test]
    fn departure_suggestion_keeps_cancelled_pax() {
        // Known upstream asymmetry: no cancelled-pax filter here.
        let tour = tour_with_pax(vec![cancelled_pax_at("7:00"), pax_at("9:00")]);
        assert_eq!(
            suggested_departure_for_first_pickup(&tour).unwrap(),
            "7:00"
        );
    }

    #[test]
    fn departure_suggestion_falls_back_without_pickup_times() {
        let tour = tour_with_pax(vec![untimed_pax()]);
        assert_eq!(
            suggested_departure_for_first_pickup(&tour).unwrap(),
            "08:00"
        );
    }

    #[test]
    fn pickup_duration_spans_earliest_to_latest() {
        let tour = tour_with_pax(vec![pax_at("8:00"), pax_at("10:30"), pax_at("9:00")]);
        assert_eq!(total_pickup_duration_minutes(&tour).unwrap(), 150);
    }

    #[test]
    fn pickup_duration_zero_without_timed_pickups() {
        let tour = tour_with_pax(vec![untimed_pax()]);
        assert_eq!(total_pickup_duration_minutes(&tour).unwrap(), 0);
    }
}
