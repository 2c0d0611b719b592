use crate::calendar::{Daytime, Weekday};
use crate::objection::{Objectionable, TargetKind, TargetRef};
use crate::register::AircraftSelection;
use serde::{Deserialize, Serialize};

/// A recurring flight template (route plus per-weekday variants) from which
/// concrete flights are generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRequirement {
    pub id: String,
    pub label: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    #[serde(default)]
    pub days: Vec<DayFlightRequirement>,
}

impl FlightRequirement {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        departure_airport: impl Into<String>,
        arrival_airport: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            departure_airport: departure_airport.into(),
            arrival_airport: arrival_airport.into(),
            days: Vec::new(),
        }
    }

    pub fn day(&self, weekday: Weekday) -> Option<&DayFlightRequirement> {
        self.days.iter().find(|d| d.day == weekday)
    }
}

impl Objectionable for FlightRequirement {
    fn target_ref(&self) -> TargetRef {
        TargetRef::new(
            TargetKind::FlightRequirement,
            self.id.clone(),
            format!("flight requirement {}", self.label),
        )
    }
}

/// The per-weekday instantiation of a flight requirement's scope: timing
/// bounds, block time and the aircraft allowed to fly it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayFlightRequirement {
    pub id: String,
    pub flight_requirement_id: String,
    pub day: Weekday,
    pub std_lower_bound: Daytime,
    pub std_upper_bound: Daytime,
    pub block_time: u16,
    #[serde(default)]
    pub allowed_registers: AircraftSelection,
    /// Required day requirements must have a generated flight on every
    /// covered date; optional ones may stay unflown.
    #[serde(default)]
    pub required: bool,
}

impl DayFlightRequirement {
    pub fn std_within_bounds(&self, std: Daytime) -> bool {
        self.std_lower_bound <= std && std <= self.std_upper_bound
    }
}

impl Objectionable for DayFlightRequirement {
    fn target_ref(&self) -> TargetRef {
        TargetRef::new(
            TargetKind::DayFlightRequirement,
            self.id.clone(),
            format!(
                "day flight requirement {} ({})",
                self.flight_requirement_id, self.day
            ),
        )
    }
}
