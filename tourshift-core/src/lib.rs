//! Pure time and resource scheduling arithmetic for tour rosters.
//!
//! The crate computes derived views over in-memory [`Tour`] records: pickup
//! orderings, shift start/end readings under configurable inclusion
//! policies, worked-minutes totals across midnight, and resource adjacency
//! ("which tour needs this van next"). It owns no I/O, no clocks and no
//! shared state; callers pass complete snapshots in and get fresh values
//! back, so calling from any number of contexts is safe.
//!
//! Clock times travel as `"H:MM"` strings and are parsed into
//! [`MinutesFromMidnight`] on use; malformed strings surface as
//! [`ClockTimeError`] while absent data is an ordinary `Option`/empty
//! result.

#![forbid(unsafe_code)]

pub mod clock;
pub mod pickup;
pub mod roster;
pub mod schedule;
pub mod test_support;
pub mod tour;

pub use clock::{ClockTimeError, MinutesFromMidnight};
pub use pickup::{
    earliest_pickup, earliest_pickup_time, exclude_cancelled_pax, latest_pickup,
    latest_pickup_time, sort_pickups_by_time,
};
pub use roster::{
    next_tour_requiring_resource, previous_tour_requiring_resource, sort_tours_by_earliest_pickup,
    tours_using_resource,
};
pub use schedule::{
    StartTimeOptions, derive_end_time, derive_start_time, suggested_departure_for_first_pickup,
    suggested_time_in_office, total_pickup_duration_minutes, total_worked_minutes,
};
pub use tour::{Pax, Pickup, Resource, ResourceKind, ShiftTemplate, Tour};
