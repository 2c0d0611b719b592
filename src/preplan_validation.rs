use crate::flight::Flight;
use crate::preplan::Preplan;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone)]
pub struct PreplanValidationError {
    message: String,
}

impl PreplanValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for PreplanValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for PreplanValidationError {}

pub fn validate_flight(flight: &Flight) -> Result<(), PreplanValidationError> {
    if flight.legs.is_empty() {
        return Err(PreplanValidationError::new(format!(
            "flight {} has no legs",
            flight.id
        )));
    }
    let mut leg_ids = HashSet::with_capacity(flight.legs.len());
    for leg in &flight.legs {
        if !leg_ids.insert(leg.id.as_str()) {
            return Err(PreplanValidationError::new(format!(
                "flight {} has duplicate leg id {}",
                flight.id, leg.id
            )));
        }
        if leg.departure_airport.trim().is_empty() || leg.arrival_airport.trim().is_empty() {
            return Err(PreplanValidationError::new(format!(
                "flight {} leg {} requires non-empty departure and arrival airports",
                flight.id, leg.id
            )));
        }
    }
    Ok(())
}

/// Structural checks on a loaded snapshot: id uniqueness, reference
/// integrity, and date sanity. Business rules stay with the constraint
/// engine; this only rejects snapshots the engine cannot reason about.
pub fn validate_preplan(preplan: &Preplan) -> Result<(), PreplanValidationError> {
    if preplan.metadata.start_date > preplan.metadata.end_date {
        return Err(PreplanValidationError::new(format!(
            "preplan start date {} must be on or before end date {}",
            preplan.metadata.start_date, preplan.metadata.end_date
        )));
    }

    let mut register_ids = HashSet::with_capacity(preplan.aircraft_registers.len());
    for register in &preplan.aircraft_registers {
        if !register_ids.insert(register.id.as_str()) {
            return Err(PreplanValidationError::new(format!(
                "duplicate aircraft register id {}",
                register.id
            )));
        }
        if preplan.aircraft_type(&register.aircraft_type_id).is_none() {
            return Err(PreplanValidationError::new(format!(
                "aircraft register {} references unknown aircraft type {}",
                register.id, register.aircraft_type_id
            )));
        }
    }

    let mut type_ids = HashSet::with_capacity(preplan.aircraft_types.len());
    for aircraft_type in &preplan.aircraft_types {
        if !type_ids.insert(aircraft_type.id.as_str()) {
            return Err(PreplanValidationError::new(format!(
                "duplicate aircraft type id {}",
                aircraft_type.id
            )));
        }
    }

    let mut day_requirement_ids = HashSet::new();
    for requirement in &preplan.flight_requirements {
        for day in &requirement.days {
            if !day_requirement_ids.insert(day.id.as_str()) {
                return Err(PreplanValidationError::new(format!(
                    "duplicate day flight requirement id {}",
                    day.id
                )));
            }
            if day.flight_requirement_id != requirement.id {
                return Err(PreplanValidationError::new(format!(
                    "day flight requirement {} does not reference its parent requirement {}",
                    day.id, requirement.id
                )));
            }
        }
    }

    let mut flight_ids = HashSet::with_capacity(preplan.flights.len());
    for flight in &preplan.flights {
        if !flight_ids.insert(flight.id.as_str()) {
            return Err(PreplanValidationError::new(format!(
                "duplicate flight id {}",
                flight.id
            )));
        }
        validate_flight(flight)?;
        if let Some(register_id) = &flight.aircraft_register_id {
            if !register_ids.contains(register_id.as_str()) {
                return Err(PreplanValidationError::new(format!(
                    "flight {} references unknown aircraft register {}",
                    flight.id, register_id
                )));
            }
        }
        if flight.date < preplan.metadata.start_date || flight.date > preplan.metadata.end_date {
            return Err(PreplanValidationError::new(format!(
                "flight {} on {} falls outside the preplan range {}..{}",
                flight.id, flight.date, preplan.metadata.start_date, preplan.metadata.end_date
            )));
        }
    }

    Ok(())
}
