use super::{PersistenceError, PersistenceResult};
use crate::calendar::Daytime;
use crate::flight::{Flight, FlightLeg};
use crate::master_data::ConstraintRecord;
use crate::objection::Objection;
use crate::preplan::Preplan;
use crate::preplan_validation::validate_preplan;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

pub fn save_preplan_to_json<P: AsRef<Path>>(preplan: &Preplan, path: P) -> PersistenceResult<()> {
    validate_preplan(preplan)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, preplan)?;
    Ok(())
}

pub fn load_preplan_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<Preplan> {
    let file = File::open(path)?;
    let preplan: Preplan = serde_json::from_reader(file)?;
    validate_preplan(&preplan)?;
    Ok(preplan)
}

pub fn load_constraints_from_json<P: AsRef<Path>>(
    path: P,
) -> PersistenceResult<Vec<ConstraintRecord>> {
    let file = File::open(path)?;
    let records: Vec<ConstraintRecord> = serde_json::from_reader(file)?;
    Ok(records)
}

pub fn save_objections_to_json<P: AsRef<Path>>(
    objections: &[Objection],
    path: P,
) -> PersistenceResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, objections)?;
    Ok(())
}

/// One CSV row per flight leg; consecutive rows sharing a `flight_id` fold
/// into one flight. An empty `aircraft_register_id` means unassigned.
#[derive(Debug, Serialize, Deserialize)]
struct FlightCsvRecord {
    flight_id: String,
    label: String,
    date: NaiveDate,
    day_flight_requirement_id: String,
    aircraft_register_id: String,
    leg_id: String,
    flight_number: String,
    departure_airport: String,
    arrival_airport: String,
    std: String,
    block_time: u16,
}

pub fn load_flights_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<Flight>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut flights: Vec<Flight> = Vec::new();
    for row in reader.deserialize() {
        let record: FlightCsvRecord = row?;
        let std: Daytime = record.std.parse().map_err(|err| {
            PersistenceError::InvalidData(format!("leg {}: {err}", record.leg_id))
        })?;
        let leg = FlightLeg::new(
            record.leg_id,
            record.flight_number,
            record.departure_airport,
            record.arrival_airport,
            std,
            record.block_time,
        );
        match flights.last_mut() {
            Some(flight) if flight.id == record.flight_id => flight.legs.push(leg),
            _ => {
                let mut flight = Flight::new(
                    record.flight_id,
                    record.label,
                    record.date,
                    record.day_flight_requirement_id,
                );
                if !record.aircraft_register_id.is_empty() {
                    flight.aircraft_register_id = Some(record.aircraft_register_id);
                }
                flight.legs.push(leg);
                flights.push(flight);
            }
        }
    }
    Ok(flights)
}
