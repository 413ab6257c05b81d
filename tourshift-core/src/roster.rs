//! Cross-tour ordering and resource adjacency queries.
//!
//! These queries answer "which tours need Van1 today, and which one needs it
//! next after mine?". They borrow from the caller's slice and return
//! references, so adjacency can be resolved by identity rather than by
//! comparing tour contents (two tours may be field-for-field equal).

use crate::clock::ClockTimeError;
use crate::pickup::earliest_pickup_time;
use crate::tour::{ResourceKind, Tour};

/// Order tours by their earliest non-cancelled pickup time.
///
/// Tours without a derivable earliest pickup are incomparable: they keep
/// their original positions and the timed tours sort stably around them.
/// For inputs where every tour has a timed pickup this is exactly a stable
/// sort.
///
/// # Errors
/// Propagates [`ClockTimeError`] for any malformed pickup time on any tour.
///
/// # Examples
/// ```
/// use tourshift_core::roster::sort_tours_by_earliest_pickup;
/// use tourshift_core::test_support::{pax_at, tour_with_pax};
///
/// let late = tour_with_pax(vec![pax_at("11:00")]);
/// let early = tour_with_pax(vec![pax_at("9:00")]);
/// let tours = vec![late.clone(), early.clone()];
///
/// let ordered = sort_tours_by_earliest_pickup(&tours, true)?;
/// assert!(std::ptr::eq(ordered[0], &tours[1]));
/// # Ok::<(), tourshift_core::ClockTimeError>(())
/// ```
pub fn sort_tours_by_earliest_pickup<'a, I>(
    tours: I,
    ascending: bool,
) -> Result<Vec<&'a Tour>, ClockTimeError>
where
    I: IntoIterator<Item = &'a Tour>,
{
    let mut ordered: Vec<&'a Tour> = tours.into_iter().collect();

    // Decorate the timed subset; untimed tours stay where they are.
    let mut slots = Vec::new();
    let mut keyed = Vec::new();
    for (index, tour) in ordered.iter().enumerate() {
        if let Some(minutes) = earliest_pickup_time(tour)? {
            slots.push(index);
            keyed.push((minutes, *tour));
        }
    }

    if ascending {
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
    } else {
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
    }

    for (slot, (_, tour)) in slots.into_iter().zip(keyed) {
        if let Some(entry) = ordered.get_mut(slot) {
            *entry = tour;
        }
    }
    Ok(ordered)
}

fn resource_name_matches(stored: &str, queried: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        stored == queried
    } else {
        stored.to_lowercase() == queried.to_lowercase()
    }
}

/// Tours whose resource list has an entry matching both name and kind.
///
/// Name matching is case-insensitive unless `case_sensitive` is set; the
/// kind always compares exactly. A single entry must satisfy both.
///
/// # Examples
/// ```
/// use tourshift_core::{ResourceKind, roster::tours_using_resource};
/// use tourshift_core::test_support::{pax_at, tour_with_pax, vehicle};
///
/// let tour = tour_with_pax(vec![pax_at("9:00")]).with_resources(vec![vehicle("Van1")]);
/// let tours = vec![tour];
///
/// assert_eq!(tours_using_resource(&tours, "van1", ResourceKind::Vehicle, false).len(), 1);
/// assert!(tours_using_resource(&tours, "van1", ResourceKind::Vehicle, true).is_empty());
/// ```
#[must_use]
pub fn tours_using_resource<'a>(
    tours: &'a [Tour],
    resource_name: &str,
    resource_kind: ResourceKind,
    case_sensitive: bool,
) -> Vec<&'a Tour> {
    let matched: Vec<&Tour> = tours
        .iter()
        .filter(|tour| {
            tour.resources.iter().any(|resource| {
                resource.kind == resource_kind
                    && resource_name_matches(&resource.name, resource_name, case_sensitive)
            })
        })
        .collect();
    if matched.is_empty() {
        log::debug!("no tours use {resource_kind} '{resource_name}'");
    }
    matched
}

/// The neighbouring tour needing the same resource, one step in `ascending`
/// direction from `current`. Both adjacency queries reduce to this: the
/// pool is ordered by earliest pickup and the element after `current` is
/// the answer, whichever way the pool is ordered.
fn adjacent_tour_requiring_resource<'a>(
    tours: &'a [Tour],
    current: &Tour,
    resource_kind: ResourceKind,
    resource_name: &str,
    ascending: bool,
) -> Result<Option<&'a Tour>, ClockTimeError> {
    let pool = tours_using_resource(tours, resource_name, resource_kind, false);
    let ordered = sort_tours_by_earliest_pickup(pool, ascending)?;

    let Some(index) = ordered.iter().position(|tour| std::ptr::eq(*tour, current)) else {
        log::debug!("current tour not in the pool for {resource_kind} '{resource_name}'");
        return Ok(None);
    };
    Ok(ordered.get(index + 1).copied())
}

/// The next tour (later by earliest pickup) requiring the same resource.
///
/// `current` is matched by identity: pass a reference into `tours` itself.
/// `None` when `current` is not in the resource's pool or is the last user.
///
/// # Errors
/// Propagates [`ClockTimeError`] for any malformed pickup time on any tour.
pub fn next_tour_requiring_resource<'a>(
    tours: &'a [Tour],
    current: &Tour,
    resource_kind: ResourceKind,
    resource_name: &str,
) -> Result<Option<&'a Tour>, ClockTimeError> {
    adjacent_tour_requiring_resource(tours, current, resource_kind, resource_name, true)
}

/// The previous tour (earlier by earliest pickup) requiring the same
/// resource.
///
/// The pool is ordered descending, so the element after `current` is the
/// one earlier in time; same identity and `None` semantics as
/// [`next_tour_requiring_resource`].
///
/// # Errors
/// Propagates [`ClockTimeError`] for any malformed pickup time on any tour.
pub fn previous_tour_requiring_resource<'a>(
    tours: &'a [Tour],
    current: &Tour,
    resource_kind: ResourceKind,
    resource_name: &str,
) -> Result<Option<&'a Tour>, ClockTimeError> {
    adjacent_tour_requiring_resource(tours, current, resource_kind, resource_name, false)
}
