use crate::calendar::add_days;
use crate::flight::{Flight, FlightLeg};
use crate::metadata::PreplanMetadata;
use crate::register::{AircraftType, MinimumGroundTimeMode, PreplanAircraftRegister};
use crate::requirement::{DayFlightRequirement, FlightRequirement};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Arranger configuration handed in by the owning collaborator alongside the
/// snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArrangerOptions {
    #[serde(default)]
    pub minimum_ground_time_mode: MinimumGroundTimeMode,
    /// Minutes added on top of the resolved base ground time. May be negative.
    #[serde(default)]
    pub minimum_ground_time_offset: i32,
}

/// One leg of an assigned flight placed on the preplan's absolute minute
/// axis (days since the preplan start times 1440, plus the leg's std).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegSlot {
    pub flight_index: usize,
    pub leg_index: usize,
    pub start: i64,
    pub end: i64,
}

/// An in-memory candidate flight schedule for a date range: the immutable
/// snapshot every constraint evaluation runs against.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preplan {
    pub metadata: PreplanMetadata,
    pub flights: Vec<Flight>,
    pub flight_requirements: Vec<FlightRequirement>,
    pub aircraft_registers: Vec<PreplanAircraftRegister>,
    pub aircraft_types: Vec<AircraftType>,
    pub options: ArrangerOptions,
}

impl Preplan {
    pub fn new(metadata: PreplanMetadata) -> Self {
        Self {
            metadata,
            ..Self::default()
        }
    }

    pub fn register(&self, id: &str) -> Option<&PreplanAircraftRegister> {
        self.aircraft_registers.iter().find(|r| r.id == id)
    }

    pub fn aircraft_type(&self, id: &str) -> Option<&AircraftType> {
        self.aircraft_types.iter().find(|t| t.id == id)
    }

    pub fn day_flight_requirement(
        &self,
        id: &str,
    ) -> Option<(&FlightRequirement, &DayFlightRequirement)> {
        self.flight_requirements.iter().find_map(|requirement| {
            requirement
                .days
                .iter()
                .find(|day| day.id == id)
                .map(|day| (requirement, day))
        })
    }

    pub fn flight(&self, id: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.id == id)
    }

    pub fn leg(&self, slot: &LegSlot) -> &FlightLeg {
        &self.flights[slot.flight_index].legs[slot.leg_index]
    }

    pub fn flight_of(&self, slot: &LegSlot) -> &Flight {
        &self.flights[slot.flight_index]
    }

    /// All dates of the preplan range, inclusive on both ends.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        let mut date = self.metadata.start_date;
        while date <= self.metadata.end_date {
            dates.push(date);
            date = add_days(date, 1);
        }
        dates
    }

    fn minute_offset(&self, date: NaiveDate) -> i64 {
        (date - self.metadata.start_date).num_days() * 1440
    }

    /// Legs of assigned flights, grouped per aircraft register and sorted by
    /// absolute departure minute. Built once per evaluation so pairwise
    /// scans never re-sort per constraint.
    pub fn register_timelines(&self) -> BTreeMap<String, Vec<LegSlot>> {
        let mut timelines: BTreeMap<String, Vec<LegSlot>> = BTreeMap::new();
        for (flight_index, flight) in self.flights.iter().enumerate() {
            let Some(register_id) = &flight.aircraft_register_id else {
                continue;
            };
            let day_offset = self.minute_offset(flight.date);
            for (leg_index, leg) in flight.legs.iter().enumerate() {
                let start = day_offset + leg.std.minutes() as i64;
                timelines.entry(register_id.clone()).or_default().push(LegSlot {
                    flight_index,
                    leg_index,
                    start,
                    end: start + leg.block_time as i64,
                });
            }
        }
        for slots in timelines.values_mut() {
            slots.sort_by_key(|slot| (slot.start, slot.end));
        }
        timelines
    }
}
