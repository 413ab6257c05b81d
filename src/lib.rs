//! Facade crate for the Tourshift scheduling engine.
//!
//! This crate re-exports the core domain types and scheduling operations so
//! consumers depend on a single package; the `serde` feature forwards to the
//! core crate's derives.

#![forbid(unsafe_code)]

pub use tourshift_core::{
    ClockTimeError, MinutesFromMidnight, Pax, Pickup, Resource, ResourceKind, ShiftTemplate,
    StartTimeOptions, Tour, derive_end_time, derive_start_time, earliest_pickup,
    earliest_pickup_time, exclude_cancelled_pax, latest_pickup, latest_pickup_time,
    next_tour_requiring_resource, previous_tour_requiring_resource, sort_pickups_by_time,
    sort_tours_by_earliest_pickup, suggested_departure_for_first_pickup, suggested_time_in_office,
    total_pickup_duration_minutes, total_worked_minutes, tours_using_resource,
};
