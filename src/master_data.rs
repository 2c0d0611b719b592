use crate::calendar::Weekday;
use crate::constraint::ConstraintType;
use crate::register::AircraftSelection;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// IATA-style season gate on a constraint's validity scope. Summer is April
/// through October; Winter is the rest of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeasonType {
    #[default]
    All,
    Summer,
    Winter,
}

impl SeasonType {
    pub fn matches(self, date: NaiveDate) -> bool {
        let summer = (4..=10).contains(&date.month());
        match self {
            SeasonType::All => true,
            SeasonType::Summer => summer,
            SeasonType::Winter => !summer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AirportRestrictionMode {
    /// The register may only fly between the configured airport and its base.
    Required,
    /// The register may not touch the configured airport at all.
    Forbidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AircraftRestrictionMode {
    /// Only aircraft in the selection may serve the airport.
    Allowed,
    /// Aircraft in the selection may not serve the airport.
    Forbidden,
}

/// Template-specific configuration carried by an instantiable constraint
/// record. One variant per instantiable template, dispatched exhaustively by
/// the checker instead of through captured closures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ConstraintData {
    AirportRestrictionOnAircrafts {
        aircraft_register: String,
        airport: String,
        mode: AirportRestrictionMode,
    },
    BlockTimeRestrictionOnAircrafts {
        aircraft_selection: AircraftSelection,
        maximum_block_time: u16,
    },
    AircraftRestrictionOnAirports {
        airport: String,
        mode: AircraftRestrictionMode,
        aircraft_selection: AircraftSelection,
    },
    RouteSequenceRestrictionOnAirports {
        airport: String,
        next_airport: String,
    },
    AirportAllocationPriorityForAircrafts {
        aircraft_selection: AircraftSelection,
        /// Departure airports the selected aircraft should be allocated to,
        /// highest priority first.
        airports: Vec<String>,
    },
}

impl ConstraintData {
    /// The template this payload configures.
    pub fn constraint_type(&self) -> ConstraintType {
        match self {
            ConstraintData::AirportRestrictionOnAircrafts { .. } => {
                ConstraintType::AirportRestrictionOnAircrafts
            }
            ConstraintData::BlockTimeRestrictionOnAircrafts { .. } => {
                ConstraintType::BlockTimeRestrictionOnAircrafts
            }
            ConstraintData::AircraftRestrictionOnAirports { .. } => {
                ConstraintType::AircraftRestrictionOnAirports
            }
            ConstraintData::RouteSequenceRestrictionOnAirports { .. } => {
                ConstraintType::RouteSequenceRestrictionOnAirports
            }
            ConstraintData::AirportAllocationPriorityForAircrafts { .. } => {
                ConstraintType::AirportAllocationPriorityForAircrafts
            }
        }
    }
}

/// A constraint definition as delivered by the master-data collaborator,
/// already resolved into memory before any evaluation starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintRecord {
    #[serde(rename = "type")]
    pub constraint_type: ConstraintType,
    pub name: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
    #[serde(default)]
    pub season_type: SeasonType,
    #[serde(default)]
    pub days: Vec<Weekday>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ConstraintData>,
}

impl ConstraintRecord {
    pub fn new(constraint_type: ConstraintType, name: impl Into<String>) -> Self {
        Self {
            constraint_type,
            name: name.into(),
            description: Vec::new(),
            details: None,
            from_date: None,
            to_date: None,
            season_type: SeasonType::All,
            days: Vec::new(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: ConstraintData) -> Self {
        self.data = Some(data);
        self
    }
}
