//! Pickup filtering and ordering within a single tour.
//!
//! Every function here returns a fresh [`Tour`] or a clone of the selected
//! pickup; inputs are never mutated and the original pax ordering stays
//! available to the caller for display.

use crate::clock::{ClockTimeError, MinutesFromMidnight};
use crate::tour::{Pax, Pickup, Tour};

/// Copy `tour` keeping only pax without a cancellation marker.
///
/// Order is preserved and the operation is idempotent.
///
/// # Examples
/// ```
/// use chrono::NaiveDateTime;
/// use tourshift_core::{Pax, Pickup, ShiftTemplate, Tour, pickup::exclude_cancelled_pax};
///
/// let tour = Tour::new(
///     NaiveDateTime::MIN,
///     ShiftTemplate::default(),
///     vec![
///         Pax::new(Pickup::at_time("9:00")),
///         Pax::new(Pickup::at_time("8:00")).cancelled(NaiveDateTime::MIN),
///     ],
/// );
/// assert_eq!(exclude_cancelled_pax(&tour).pax.len(), 1);
/// ```
#[must_use]
pub fn exclude_cancelled_pax(tour: &Tour) -> Tour {
    let pax = tour
        .pax
        .iter()
        .filter(|pax| !pax.is_cancelled())
        .cloned()
        .collect();
    Tour {
        pax,
        ..tour.clone()
    }
}

/// Minutes-from-midnight sort key for one passenger's pickup.
///
/// A missing time sorts as `0`; a malformed time is a parse failure.
fn pickup_sort_key(pax: &Pax) -> Result<i32, ClockTimeError> {
    pax.pickup.time.as_deref().map_or(Ok(0), |time| {
        Ok(time.parse::<MinutesFromMidnight>()?.get())
    })
}

/// Copy `tour` with pax reordered by pickup clock time.
///
/// Pax without a time are keyed as `0` and therefore gather at the earliest
/// extreme of an ascending sort (latest of a descending one); callers that
/// must ignore them should filter first. The sort is stable, so pax with
/// equal times keep their original relative order.
///
/// # Errors
/// Propagates [`ClockTimeError`] for any malformed pickup time on the tour.
pub fn sort_pickups_by_time(tour: &Tour, ascending: bool) -> Result<Tour, ClockTimeError> {
    let mut decorated = tour
        .pax
        .iter()
        .map(|pax| Ok((pickup_sort_key(pax)?, pax.clone())))
        .collect::<Result<Vec<_>, ClockTimeError>>()?;
    if ascending {
        decorated.sort_by(|a, b| a.0.cmp(&b.0));
    } else {
        decorated.sort_by(|a, b| b.0.cmp(&a.0));
    }
    Ok(Tour {
        pax: decorated.into_iter().map(|(_, pax)| pax).collect(),
        ..tour.clone()
    })
}

/// The earliest pickup among non-cancelled pax, if any remain.
///
/// # Errors
/// Propagates [`ClockTimeError`] for any malformed pickup time on the tour.
pub fn earliest_pickup(tour: &Tour) -> Result<Option<Pickup>, ClockTimeError> {
    let sorted = sort_pickups_by_time(&exclude_cancelled_pax(tour), true)?;
    Ok(sorted.pax.into_iter().next().map(|pax| pax.pickup))
}

/// The latest pickup among non-cancelled pax, if any remain.
///
/// # Errors
/// Propagates [`ClockTimeError`] for any malformed pickup time on the tour.
pub fn latest_pickup(tour: &Tour) -> Result<Option<Pickup>, ClockTimeError> {
    let sorted = sort_pickups_by_time(&exclude_cancelled_pax(tour), false)?;
    Ok(sorted.pax.into_iter().next().map(|pax| pax.pickup))
}

/// Clock time of the earliest non-cancelled pickup, when one has a time.
///
/// # Errors
/// Propagates [`ClockTimeError`] for any malformed pickup time on the tour.
pub fn earliest_pickup_time(tour: &Tour) -> Result<Option<MinutesFromMidnight>, ClockTimeError> {
    earliest_pickup(tour)?
        .and_then(|pickup| pickup.time)
        .map(|time| time.parse())
        .transpose()
}

/// Clock time of the latest non-cancelled pickup, when one has a time.
///
/// # Errors
/// Propagates [`ClockTimeError`] for any malformed pickup time on the tour.
pub fn latest_pickup_time(tour: &Tour) -> Result<Option<MinutesFromMidnight>, ClockTimeError> {
    latest_pickup(tour)?
        .and_then(|pickup| pickup.time)
        .map(|time| time.parse())
        .transpose()
}
