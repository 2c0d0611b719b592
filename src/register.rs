use crate::objection::{Objectionable, TargetKind, TargetRef};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the required minimum ground time is resolved from an aircraft type's
/// table of per-station values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MinimumGroundTimeMode {
    #[default]
    Minimum,
    Maximum,
    Average,
}

impl fmt::Display for MinimumGroundTimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimumGroundTimeMode::Minimum => write!(f, "MINIMUM"),
            MinimumGroundTimeMode::Maximum => write!(f, "MAXIMUM"),
            MinimumGroundTimeMode::Average => write!(f, "AVERAGE"),
        }
    }
}

/// An aircraft type with its minimum-ground-time table (minutes, one entry
/// per station profile).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AircraftType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub minimum_ground_times: Vec<u16>,
}

impl AircraftType {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            minimum_ground_times: Vec::new(),
        }
    }

    /// Resolve the base ground time for `mode`. `None` when the table is
    /// empty, which checkers surface as a failure rather than guessing.
    pub fn minimum_ground_time(&self, mode: MinimumGroundTimeMode) -> Option<u16> {
        if self.minimum_ground_times.is_empty() {
            return None;
        }
        match mode {
            MinimumGroundTimeMode::Minimum => self.minimum_ground_times.iter().copied().min(),
            MinimumGroundTimeMode::Maximum => self.minimum_ground_times.iter().copied().max(),
            MinimumGroundTimeMode::Average => {
                let total: u32 = self.minimum_ground_times.iter().map(|&v| v as u32).sum();
                Some((total / self.minimum_ground_times.len() as u32) as u16)
            }
        }
    }
}

/// A tail-numbered aircraft (or a placeholder "dummy" register) assignable to
/// flights within this preplan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreplanAircraftRegister {
    pub id: String,
    pub name: String,
    pub aircraft_type_id: String,
    pub base_airport: String,
    #[serde(default)]
    pub dummy: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<NaiveDate>,
}

impl PreplanAircraftRegister {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        aircraft_type_id: impl Into<String>,
        base_airport: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            aircraft_type_id: aircraft_type_id.into(),
            base_airport: base_airport.into(),
            dummy: false,
            valid_from: None,
            valid_to: None,
        }
    }

    /// Whether the register is usable on `date`. Open bounds are unrestricted.
    pub fn valid_on(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.valid_from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.valid_to {
            if date > to {
                return false;
            }
        }
        true
    }

    pub fn has_valid_period(&self) -> bool {
        self.valid_from.is_some() || self.valid_to.is_some()
    }
}

impl Objectionable for PreplanAircraftRegister {
    fn target_ref(&self) -> TargetRef {
        TargetRef::new(
            TargetKind::AircraftRegister,
            self.id.clone(),
            format!("aircraft register {}", self.name),
        )
    }
}

/// A set of aircraft picked out by register ids and/or type ids. An empty
/// selection matches no register.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AircraftSelection {
    #[serde(default)]
    pub aircraft_registers: Vec<String>,
    #[serde(default)]
    pub aircraft_types: Vec<String>,
}

impl AircraftSelection {
    pub fn of_registers<I, S>(registers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            aircraft_registers: registers.into_iter().map(Into::into).collect(),
            aircraft_types: Vec::new(),
        }
    }

    pub fn of_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            aircraft_registers: Vec::new(),
            aircraft_types: types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn includes(&self, register: &PreplanAircraftRegister) -> bool {
        self.aircraft_registers.iter().any(|id| *id == register.id)
            || self
                .aircraft_types
                .iter()
                .any(|id| *id == register.aircraft_type_id)
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft_registers.is_empty() && self.aircraft_types.is_empty()
    }
}
