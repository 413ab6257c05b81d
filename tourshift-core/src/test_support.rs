//! Deterministic fixture builders used by unit and behaviour tests.
//!
//! Everything here is plain data with a fixed calendar anchor (Saturday
//! 2024-06-01, 08:00 service start) so assertions can use literal strings.

use chrono::{NaiveDate, NaiveDateTime};

use crate::tour::{Pax, Pickup, Resource, ResourceKind, ShiftTemplate, Tour};

/// The fixed `starts_at` shared by all fixture tours: 2024-06-01 08:00.
#[must_use]
pub fn fixture_starts_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|date| date.and_hms_opt(8, 0, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

/// A shift template with the given duration, prep and cleanup minutes.
#[must_use]
pub const fn shift(duration_minutes: i32, prep_minutes: i32, cleanup_minutes: i32) -> ShiftTemplate {
    ShiftTemplate::new(duration_minutes, prep_minutes, cleanup_minutes)
}

/// An active pax with a timed pickup.
#[must_use]
pub fn pax_at(time: &str) -> Pax {
    Pax::new(Pickup::at_time(time))
}

/// An active pax with a timed pickup and a known office drive time.
#[must_use]
pub fn pax_with_drive(time: &str, minutes_away_from_office: i32) -> Pax {
    Pax::new(Pickup::at_time(time).with_drive_time(minutes_away_from_office))
}

/// An active pax whose pickup has no clock time yet.
#[must_use]
pub fn untimed_pax() -> Pax {
    Pax::new(Pickup::default())
}

/// A cancelled pax with a timed pickup.
#[must_use]
pub fn cancelled_pax_at(time: &str) -> Pax {
    pax_at(time).cancelled(fixture_starts_at())
}

/// A tour with the fixture start, a four-hour shift (15 prep, 30 cleanup)
/// and the given pax.
#[must_use]
pub fn tour_with_pax(pax: Vec<Pax>) -> Tour {
    tour_with_pax_and_shift(pax, shift(240, 15, 30))
}

/// A tour with the fixture start and an explicit shift template.
#[must_use]
pub fn tour_with_pax_and_shift(pax: Vec<Pax>, shift: ShiftTemplate) -> Tour {
    Tour::new(fixture_starts_at(), shift, pax)
}

/// A vehicle resource with the given name.
#[must_use]
pub fn vehicle(name: &str) -> Resource {
    Resource::new(ResourceKind::Vehicle, name)
}

/// A camera resource with the given name.
#[must_use]
pub fn camera(name: &str) -> Resource {
    Resource::new(ResourceKind::Camera, name)
}
