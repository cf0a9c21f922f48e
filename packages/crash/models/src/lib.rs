#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Field taxonomy for the Victorian road crash dataset.
//!
//! This crate defines the canonical set of `ACCIDENT` table columns the
//! dashboard is allowed to query: the five per-crash person counters and
//! the categorical columns legal in a `GROUP BY`. Parsing a wire column
//! name into one of these enums *is* the allow-list — a name that does
//! not parse never reaches SQL text.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The five numeric per-crash person counters in the `ACCIDENT` table.
///
/// Selecting any of these in the dashboard switches the chart into
/// summary mode: all five counters are summed over the matching rows
/// and plotted together.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum CounterField {
    /// Total people involved in the crash.
    #[serde(rename = "NO_PERSONS")]
    #[strum(serialize = "NO_PERSONS")]
    Persons,
    /// People with level-2 (serious) injuries.
    #[serde(rename = "NO_PERSONS_INJ_2")]
    #[strum(serialize = "NO_PERSONS_INJ_2")]
    SeriousInjuries,
    /// People with level-3 (other) injuries.
    #[serde(rename = "NO_PERSONS_INJ_3")]
    #[strum(serialize = "NO_PERSONS_INJ_3")]
    OtherInjuries,
    /// People killed.
    #[serde(rename = "NO_PERSONS_KILLED")]
    #[strum(serialize = "NO_PERSONS_KILLED")]
    Killed,
    /// People not injured.
    #[serde(rename = "NO_PERSONS_NOT_INJ")]
    #[strum(serialize = "NO_PERSONS_NOT_INJ")]
    NotInjured,
}

impl CounterField {
    /// Returns the physical `ACCIDENT` column name.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Persons => "NO_PERSONS",
            Self::SeriousInjuries => "NO_PERSONS_INJ_2",
            Self::OtherInjuries => "NO_PERSONS_INJ_3",
            Self::Killed => "NO_PERSONS_KILLED",
            Self::NotInjured => "NO_PERSONS_NOT_INJ",
        }
    }

    /// Returns the human-readable label shown on chart categories.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Persons => "Total Persons",
            Self::SeriousInjuries => "Injuries Level 2",
            Self::OtherInjuries => "Injuries Level 3",
            Self::Killed => "Persons Killed",
            Self::NotInjured => "Persons Not Injured",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Persons,
            Self::SeriousInjuries,
            Self::OtherInjuries,
            Self::Killed,
            Self::NotInjured,
        ]
    }
}

/// Categorical `ACCIDENT` columns that may appear in a `GROUP BY`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum GroupField {
    /// Accident type description (e.g. "Collision with vehicle").
    #[serde(rename = "ACCIDENT_TYPE_DESC")]
    #[strum(serialize = "ACCIDENT_TYPE_DESC")]
    AccidentType,
    /// Day-of-week description.
    #[serde(rename = "DAY_WEEK_DESC")]
    #[strum(serialize = "DAY_WEEK_DESC")]
    DayOfWeek,
    /// Light condition code.
    #[serde(rename = "LIGHT_CONDITION")]
    #[strum(serialize = "LIGHT_CONDITION")]
    LightCondition,
    /// Road geometry description (e.g. "Cross intersection").
    #[serde(rename = "ROAD_GEOMETRY_DESC")]
    #[strum(serialize = "ROAD_GEOMETRY_DESC")]
    RoadGeometry,
    /// Crash severity code.
    #[serde(rename = "SEVERITY")]
    #[strum(serialize = "SEVERITY")]
    Severity,
    /// Posted speed zone.
    #[serde(rename = "SPEED_ZONE")]
    #[strum(serialize = "SPEED_ZONE")]
    SpeedZone,
}

impl GroupField {
    /// Returns the physical `ACCIDENT` column name.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::AccidentType => "ACCIDENT_TYPE_DESC",
            Self::DayOfWeek => "DAY_WEEK_DESC",
            Self::LightCondition => "LIGHT_CONDITION",
            Self::RoadGeometry => "ROAD_GEOMETRY_DESC",
            Self::Severity => "SEVERITY",
            Self::SpeedZone => "SPEED_ZONE",
        }
    }

    /// Returns the human-readable label used in chart titles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AccidentType => "Accident Type",
            Self::DayOfWeek => "Day of Week",
            Self::LightCondition => "Light Condition",
            Self::RoadGeometry => "Road Geometry",
            Self::Severity => "Severity",
            Self::SpeedZone => "Speed Zone",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::AccidentType,
            Self::DayOfWeek,
            Self::LightCondition,
            Self::RoadGeometry,
            Self::Severity,
            Self::SpeedZone,
        ]
    }
}

/// Any column the dashboard's field selector may submit.
///
/// Counter fields route the chart into summary mode; group fields route
/// it into aggregate-by-field mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectableField {
    /// One of the five person counters.
    Counter(CounterField),
    /// A categorical `GROUP BY` column.
    Group(GroupField),
}

impl SelectableField {
    /// Returns the physical `ACCIDENT` column name.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Counter(field) => field.column(),
            Self::Group(field) => field.column(),
        }
    }

    /// Returns the human-readable label for this field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Counter(field) => field.label(),
            Self::Group(field) => field.label(),
        }
    }
}

impl std::str::FromStr for SelectableField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<CounterField>()
            .map(Self::Counter)
            .or_else(|_| s.parse::<GroupField>().map(Self::Group))
            .map_err(|_| UnknownFieldError {
                name: s.to_string(),
            })
    }
}

impl std::fmt::Display for SelectableField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// Error returned when a column name is not in the selectable-field
/// allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldError {
    /// The rejected column name.
    pub name: String,
}

impl std::fmt::Display for UnknownFieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown field: {}", self.name)
    }
}

impl std::error::Error for UnknownFieldError {}
