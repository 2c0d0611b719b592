use crate::calendar::Weekday;
use crate::master_data::{ConstraintData, ConstraintRecord, SeasonType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed, closed set of constraint kinds the engine knows how to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstraintType {
    NoConflictionInFlights,
    AirportRestrictionOnAircrafts,
    BlockTimeRestrictionOnAircrafts,
    MinimumGroundTimeBetweenFlights,
    AirportSequenceRestrictionOnFlights,
    RouteSequenceRestrictionOnAirports,
    AircraftRestrictionOnAirports,
    AirportAllocationPriorityForAircrafts,
    ValidPeriodCheckOnAircrafts,
    FlightRequirementRestrictionOnFlights,
}

impl ConstraintType {
    pub fn code(self) -> &'static str {
        match self {
            ConstraintType::NoConflictionInFlights => "NO_CONFLICTION_IN_FLIGHTS",
            ConstraintType::AirportRestrictionOnAircrafts => "AIRPORT_RESTRICTION_ON_AIRCRAFTS",
            ConstraintType::BlockTimeRestrictionOnAircrafts => "BLOCK_TIME_RESTRICTION_ON_AIRCRAFTS",
            ConstraintType::MinimumGroundTimeBetweenFlights => "MINIMUM_GROUND_TIME_BETWEEN_FLIGHTS",
            ConstraintType::AirportSequenceRestrictionOnFlights => {
                "AIRPORT_SEQUENCE_RESTRICTION_ON_FLIGHTS"
            }
            ConstraintType::RouteSequenceRestrictionOnAirports => {
                "ROUTE_SEQUENCE_RESTRICTION_ON_AIRPORTS"
            }
            ConstraintType::AircraftRestrictionOnAirports => "AIRCRAFT_RESTRICTION_ON_AIRPORTS",
            ConstraintType::AirportAllocationPriorityForAircrafts => {
                "AIRPORT_ALLOCATION_PRIORITY_FOR_AIRCRAFTS"
            }
            ConstraintType::ValidPeriodCheckOnAircrafts => "VALID_PERIOD_CHECK_ON_AIRCRAFTS",
            ConstraintType::FlightRequirementRestrictionOnFlights => {
                "FLIGHT_REQUIREMENT_RESTRICTION_ON_FLIGHTS"
            }
        }
    }

    /// Parse a wire-form type code. This is the single place an unknown
    /// template kind can enter the system.
    pub fn from_code(code: &str) -> Result<ConstraintType, UnknownTemplateError> {
        ConstraintTemplate::all()
            .iter()
            .map(|template| template.constraint_type)
            .find(|t| t.code() == code)
            .ok_or_else(|| UnknownTemplateError(code.to_string()))
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ConstraintType {
    type Err = UnknownTemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConstraintType::from_code(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTemplateError(pub String);

impl fmt::Display for UnknownTemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown constraint template type '{}'", self.0)
    }
}

impl std::error::Error for UnknownTemplateError {}

/// Static definition of a constraint kind. Loaded once into a process-wide
/// table and never mutated afterward.
#[derive(Debug)]
pub struct ConstraintTemplate {
    pub constraint_type: ConstraintType,
    pub instantiable: bool,
    pub name: &'static str,
    pub description: &'static [&'static str],
    /// Fixed ordering weight for objections of this kind; lower shows first
    /// within the same severity.
    pub priority: u16,
}

/// Non-instantiable templates first, in canonical singleton order, then the
/// instantiable ones. The singleton order is load-bearing: it fixes checker
/// execution order and therefore presentation order on priority ties.
static TEMPLATES: [ConstraintTemplate; 10] = [
    ConstraintTemplate {
        constraint_type: ConstraintType::NoConflictionInFlights,
        instantiable: false,
        name: "No Confliction in Flights",
        description: &["No two flights of the same aircraft register may overlap in time."],
        priority: 100,
    },
    ConstraintTemplate {
        constraint_type: ConstraintType::ValidPeriodCheckOnAircrafts,
        instantiable: false,
        name: "Valid Period Check on Aircrafts",
        description: &["Flights may only be assigned to aircraft registers within their valid period."],
        priority: 200,
    },
    ConstraintTemplate {
        constraint_type: ConstraintType::AirportSequenceRestrictionOnFlights,
        instantiable: false,
        name: "Airport Sequence Restriction on Flights",
        description: &[
            "Each flight of an aircraft register must depart from the airport",
            "where the previous flight of that register arrived.",
        ],
        priority: 300,
    },
    ConstraintTemplate {
        constraint_type: ConstraintType::FlightRequirementRestrictionOnFlights,
        instantiable: false,
        name: "Flight Requirement Restriction on Flights",
        description: &[
            "Flights must stay inside their day flight requirement's scope:",
            "permitted aircraft, departure time bounds, and required coverage.",
        ],
        priority: 400,
    },
    ConstraintTemplate {
        constraint_type: ConstraintType::MinimumGroundTimeBetweenFlights,
        instantiable: false,
        name: "Minimum Ground Time between Flights",
        description: &[
            "Consecutive flights of an aircraft register must leave at least the",
            "resolved minimum ground time between landing and the next departure.",
        ],
        priority: 800,
    },
    ConstraintTemplate {
        constraint_type: ConstraintType::AirportRestrictionOnAircrafts,
        instantiable: true,
        name: "Airport Restriction on Aircrafts",
        description: &["Restricts one aircraft register with respect to one airport."],
        priority: 500,
    },
    ConstraintTemplate {
        constraint_type: ConstraintType::AircraftRestrictionOnAirports,
        instantiable: true,
        name: "Aircraft Restriction on Airports",
        description: &["Restricts which aircraft may serve one airport."],
        priority: 600,
    },
    ConstraintTemplate {
        constraint_type: ConstraintType::RouteSequenceRestrictionOnAirports,
        instantiable: true,
        name: "Route Sequence Restriction on Airports",
        description: &["After arriving at one airport, the next leg must continue to a fixed airport."],
        priority: 700,
    },
    ConstraintTemplate {
        constraint_type: ConstraintType::BlockTimeRestrictionOnAircrafts,
        instantiable: true,
        name: "Block Time Restriction on Aircrafts",
        description: &["Caps the block time of flights flown by a selection of aircraft."],
        priority: 900,
    },
    ConstraintTemplate {
        constraint_type: ConstraintType::AirportAllocationPriorityForAircrafts,
        instantiable: true,
        name: "Airport Allocation Priority for Aircrafts",
        description: &["Selected aircraft should be allocated to a prioritized list of airports."],
        priority: 1000,
    },
];

impl ConstraintTemplate {
    /// The full static catalog, singletons first.
    pub fn all() -> &'static [ConstraintTemplate] {
        &TEMPLATES
    }

    /// Lookup by type. Infallible because the type set is closed; unknown
    /// kinds are rejected earlier, at `ConstraintType::from_code` or record
    /// deserialization.
    pub fn by_type(constraint_type: ConstraintType) -> &'static ConstraintTemplate {
        TEMPLATES
            .iter()
            .find(|template| template.constraint_type == constraint_type)
            .unwrap_or_else(|| unreachable!("template table covers every constraint type"))
    }

    pub fn singletons() -> impl Iterator<Item = &'static ConstraintTemplate> {
        TEMPLATES.iter().filter(|template| !template.instantiable)
    }
}

/// Validity scope of a configured constraint: date window, season gate and
/// applicable weekdays. An empty `days` list means every day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConstraintScope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
    #[serde(default)]
    pub season_type: SeasonType,
    #[serde(default)]
    pub days: Vec<Weekday>,
}

impl ConstraintScope {
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn applies_on(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.from_date {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to_date {
            if date > to {
                return false;
            }
        }
        if !self.season_type.matches(date) {
            return false;
        }
        self.days.is_empty() || self.days.contains(&Weekday::of(date))
    }

    /// True when the scope never filters anything, letting the engine run a
    /// single whole-snapshot pass instead of a per-date walk.
    pub fn is_unrestricted(&self) -> bool {
        self.from_date.is_none()
            && self.to_date.is_none()
            && self.season_type == SeasonType::All
            && self.days.is_empty()
    }
}

#[derive(Debug, Clone)]
pub enum ConstraintError {
    NotInstantiable(ConstraintType),
    MissingData { name: String },
    MismatchedData { name: String, expected: ConstraintType },
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintError::NotInstantiable(constraint_type) => write!(
                f,
                "constraint template {constraint_type} is not instantiable from master data"
            ),
            ConstraintError::MissingData { name } => {
                write!(f, "constraint record '{name}' carries no template data")
            }
            ConstraintError::MismatchedData { name, expected } => write!(
                f,
                "constraint record '{name}' carries data for a template other than {expected}"
            ),
        }
    }
}

impl std::error::Error for ConstraintError {}

/// One applicable rule: a template plus, for instantiable templates, the
/// configuration and validity scope taken from its master-data record.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub template: &'static ConstraintTemplate,
    pub name: String,
    pub details: Option<String>,
    pub scope: ConstraintScope,
    pub data: Option<ConstraintData>,
}

impl Constraint {
    fn singleton(template: &'static ConstraintTemplate) -> Self {
        Self {
            template,
            name: template.name.to_string(),
            details: None,
            scope: ConstraintScope::unrestricted(),
            data: None,
        }
    }

    fn from_record(record: &ConstraintRecord) -> Result<Self, ConstraintError> {
        let template = ConstraintTemplate::by_type(record.constraint_type);
        if !template.instantiable {
            return Err(ConstraintError::NotInstantiable(record.constraint_type));
        }
        let data = record
            .data
            .clone()
            .ok_or_else(|| ConstraintError::MissingData {
                name: record.name.clone(),
            })?;
        if data.constraint_type() != record.constraint_type {
            return Err(ConstraintError::MismatchedData {
                name: record.name.clone(),
                expected: record.constraint_type,
            });
        }
        Ok(Self {
            template,
            name: record.name.clone(),
            details: record.details.clone(),
            scope: ConstraintScope {
                from_date: record.from_date,
                to_date: record.to_date,
                season_type: record.season_type,
                days: record.days.clone(),
            },
            data: Some(data),
        })
    }

    /// Display marker used when composing objection messages.
    pub fn marker(&self) -> String {
        match &self.details {
            Some(details) => format!("{} ({details})", self.name),
            None => self.name.clone(),
        }
    }
}

/// Build the full constraint set for one preplan: one singleton per
/// non-instantiable template in canonical order, then one configured
/// constraint per master-data record in record order.
pub fn instantiate_all(records: &[ConstraintRecord]) -> Result<Vec<Constraint>, ConstraintError> {
    let mut constraints: Vec<Constraint> = ConstraintTemplate::singletons()
        .map(Constraint::singleton)
        .collect();
    for record in records {
        constraints.push(Constraint::from_record(record)?);
    }
    Ok(constraints)
}
