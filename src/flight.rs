use crate::calendar::Daytime;
use crate::objection::{Objectionable, TargetKind, TargetRef};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One airborne segment of a flight: departure/arrival airports, scheduled
/// departure time of day and block time in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightLeg {
    pub id: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub std: Daytime,
    pub block_time: u16,
}

impl FlightLeg {
    pub fn new(
        id: impl Into<String>,
        flight_number: impl Into<String>,
        departure_airport: impl Into<String>,
        arrival_airport: impl Into<String>,
        std: Daytime,
        block_time: u16,
    ) -> Self {
        Self {
            id: id.into(),
            flight_number: flight_number.into(),
            departure_airport: departure_airport.into(),
            arrival_airport: arrival_airport.into(),
            std,
            block_time,
        }
    }

    pub fn touches(&self, airport: &str) -> bool {
        self.departure_airport == airport || self.arrival_airport == airport
    }
}

impl Objectionable for FlightLeg {
    fn target_ref(&self) -> TargetRef {
        TargetRef::new(
            TargetKind::FlightLeg,
            self.id.clone(),
            format!(
                "leg {} {}-{}",
                self.flight_number, self.departure_airport, self.arrival_airport
            ),
        )
    }
}

/// A concrete scheduled flight on one date, generated from a day flight
/// requirement and optionally assigned to an aircraft register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub id: String,
    pub label: String,
    pub date: NaiveDate,
    pub day_flight_requirement_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft_register_id: Option<String>,
    pub legs: Vec<FlightLeg>,
}

impl Flight {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        date: NaiveDate,
        day_flight_requirement_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            date,
            day_flight_requirement_id: day_flight_requirement_id.into(),
            aircraft_register_id: None,
            legs: Vec::new(),
        }
    }

    /// Scheduled departure of the flight: the std of its first leg.
    pub fn std(&self) -> Option<Daytime> {
        self.legs.first().map(|leg| leg.std)
    }
}

impl Objectionable for Flight {
    fn target_ref(&self) -> TargetRef {
        TargetRef::new(
            TargetKind::Flight,
            self.id.clone(),
            format!("flight {} on {}", self.label, self.date),
        )
    }
}
