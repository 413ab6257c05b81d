//! Domain records for scheduled tours.
//!
//! Tours arrive already deserialized from an external collaborator; the
//! engine only computes derived views over them. Every optional detail is an
//! explicit `Option` field so "this pickup has no time yet" is representable
//! without sentinel values.

use chrono::{Datelike, NaiveDateTime, Weekday};

/// The kind of assignable asset a [`Resource`] names.
///
/// # Examples
/// ```
/// use tourshift_core::ResourceKind;
///
/// assert_eq!(ResourceKind::Vehicle.as_str(), "vehicle");
/// assert_eq!("camera".parse::<ResourceKind>(), Ok(ResourceKind::Camera));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ResourceKind {
    /// A van or other passenger vehicle.
    Vehicle,
    /// A camera rig carried on photography tours.
    Camera,
    /// A guide booked as an asset rather than as staff.
    Guide,
}

impl ResourceKind {
    /// Return the kind as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vehicle => "vehicle",
            Self::Camera => "camera",
            Self::Guide => "guide",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vehicle" => Ok(Self::Vehicle),
            "camera" => Ok(Self::Camera),
            "guide" => Ok(Self::Guide),
            _ => Err(format!("unknown resource kind '{s}'")),
        }
    }
}

/// A named, typed asset assigned to a tour.
///
/// The `(kind, name)` pair is the join key for cross-tour conflict queries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resource {
    /// What sort of asset this is.
    pub kind: ResourceKind,
    /// Human-assigned asset name, e.g. `"Van1"`.
    pub name: String,
}

impl Resource {
    /// Construct a resource assignment.
    ///
    /// # Examples
    /// ```
    /// use tourshift_core::{Resource, ResourceKind};
    ///
    /// let van = Resource::new(ResourceKind::Vehicle, "Van1");
    /// assert_eq!(van.name, "Van1");
    /// ```
    pub fn new(kind: ResourceKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

/// Where and when a passenger is collected.
///
/// The clock time stays a raw `"H:MM"` string: parse failures belong to the
/// computation that consumes the time, not to deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pickup {
    /// Free-form pickup location name, when arranged.
    pub location: Option<String>,
    /// Clock time as `"H:MM"`, interpreted in the tour's local day.
    pub time: Option<String>,
    /// One-way drive time from the office to this pickup.
    pub minutes_away_from_office: Option<i32>,
}

impl Pickup {
    /// A pickup at a known clock time with no other details.
    ///
    /// # Examples
    /// ```
    /// use tourshift_core::Pickup;
    ///
    /// let pickup = Pickup::at_time("9:00");
    /// assert_eq!(pickup.time.as_deref(), Some("9:00"));
    /// ```
    pub fn at_time(time: impl Into<String>) -> Self {
        Self {
            time: Some(time.into()),
            ..Self::default()
        }
    }

    /// Attach the one-way office drive time.
    #[must_use]
    pub const fn with_drive_time(mut self, minutes: i32) -> Self {
        self.minutes_away_from_office = Some(minutes);
        self
    }
}

/// A passenger booked on a tour.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pax {
    /// When the booking was cancelled, if it was.
    pub cancelled_at: Option<NaiveDateTime>,
    /// The passenger's pickup arrangement.
    pub pickup: Pickup,
}

impl Pax {
    /// An active (non-cancelled) passenger with the given pickup.
    pub const fn new(pickup: Pickup) -> Self {
        Self {
            cancelled_at: None,
            pickup,
        }
    }

    /// Mark the booking cancelled at `at`.
    #[must_use]
    pub const fn cancelled(mut self, at: NaiveDateTime) -> Self {
        self.cancelled_at = Some(at);
        self
    }

    /// Whether the booking carries a cancellation marker.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled_at.is_some()
    }
}

/// The reusable definition of a tour type's timings, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiftTemplate {
    /// Nominal service duration.
    pub duration_minutes: i32,
    /// Staff time needed before the first pickup.
    pub prep_minutes: i32,
    /// Staff time needed after service ends.
    pub cleanup_minutes: i32,
}

impl ShiftTemplate {
    /// Construct a shift template.
    ///
    /// # Examples
    /// ```
    /// use tourshift_core::ShiftTemplate;
    ///
    /// let shift = ShiftTemplate::new(240, 15, 30);
    /// assert_eq!(shift.duration_minutes, 240);
    /// ```
    pub const fn new(duration_minutes: i32, prep_minutes: i32, cleanup_minutes: i32) -> Self {
        Self {
            duration_minutes,
            prep_minutes,
            cleanup_minutes,
        }
    }
}

/// One scheduled engagement.
///
/// The engine treats tours as read-only snapshots: every derivation returns
/// a fresh value and the input ordering of `pax` is preserved for display.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use tourshift_core::{Pax, Pickup, ShiftTemplate, Tour};
///
/// let starts_at = NaiveDate::from_ymd_opt(2024, 6, 1)
///     .and_then(|d| d.and_hms_opt(9, 0, 0))
///     .unwrap();
/// let tour = Tour::new(
///     starts_at,
///     ShiftTemplate::new(240, 15, 30),
///     vec![Pax::new(Pickup::at_time("8:30"))],
/// );
/// assert_eq!(tour.pax.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Nominal service start, calendar date plus naive local time.
    pub starts_at: NaiveDateTime,
    /// Timing template for this tour type.
    pub shift: ShiftTemplate,
    /// Booked passengers in original display order.
    pub pax: Vec<Pax>,
    /// Assigned assets; empty when none are assigned.
    #[cfg_attr(feature = "serde", serde(default))]
    pub resources: Vec<Resource>,
}

impl Tour {
    /// Construct a tour with no resource assignments.
    pub const fn new(starts_at: NaiveDateTime, shift: ShiftTemplate, pax: Vec<Pax>) -> Self {
        Self {
            starts_at,
            shift,
            pax,
            resources: Vec::new(),
        }
    }

    /// Attach resource assignments.
    #[must_use]
    pub fn with_resources(mut self, resources: Vec<Resource>) -> Self {
        self.resources = resources;
        self
    }

    /// The weekday of the nominal service start.
    ///
    /// # Examples
    /// ```
    /// use chrono::{NaiveDate, Weekday};
    /// use tourshift_core::{ShiftTemplate, Tour};
    ///
    /// let starts_at = NaiveDate::from_ymd_opt(2024, 6, 1)
    ///     .and_then(|d| d.and_hms_opt(9, 0, 0))
    ///     .unwrap();
    /// let tour = Tour::new(starts_at, ShiftTemplate::default(), Vec::new());
    /// assert_eq!(tour.start_weekday(), Weekday::Sat);
    /// ```
    #[must_use]
    pub fn start_weekday(&self) -> Weekday {
        self.starts_at.weekday()
    }
}
