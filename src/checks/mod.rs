mod register_flow;
mod restrictions;
mod validity;

use crate::constraint::{Constraint, ConstraintType};
use crate::flight::Flight;
use crate::objection::Objection;
use crate::preplan::{LegSlot, Preplan};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

/// Everything one checker invocation sees: the snapshot, the prebuilt
/// per-register timelines, the constraint under evaluation, and an optional
/// date filter for scope-limited runs.
pub(crate) struct CheckContext<'a> {
    pub preplan: &'a Preplan,
    pub timelines: &'a BTreeMap<String, Vec<LegSlot>>,
    pub constraint: &'a Constraint,
    pub date: Option<NaiveDate>,
}

impl CheckContext<'_> {
    /// Whether a flight participates in this invocation.
    pub fn covers(&self, flight: &Flight) -> bool {
        match self.date {
            Some(date) => flight.date == date,
            None => true,
        }
    }

    pub fn covers_slot(&self, slot: &LegSlot) -> bool {
        self.covers(self.preplan.flight_of(slot))
    }
}

/// A checker-internal failure. Callers treat it as "this constraint
/// contributed nothing this cycle", never as an abort of the evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CheckerError {
    UnknownAircraftType { register: String, aircraft_type: String },
    MissingGroundTimeTable { aircraft_type: String },
}

impl fmt::Display for CheckerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckerError::UnknownAircraftType {
                register,
                aircraft_type,
            } => write!(
                f,
                "aircraft register {register} references unknown aircraft type {aircraft_type}"
            ),
            CheckerError::MissingGroundTimeTable { aircraft_type } => write!(
                f,
                "aircraft type {aircraft_type} has no minimum ground time table"
            ),
        }
    }
}

impl std::error::Error for CheckerError {}

/// Dispatch one constraint to its checking algorithm. Checkers are pure over
/// the snapshot and treat missing data as "rule does not apply".
pub(crate) fn run(ctx: &CheckContext<'_>) -> Result<Vec<Objection>, CheckerError> {
    match ctx.constraint.template.constraint_type {
        ConstraintType::NoConflictionInFlights => register_flow::check_no_confliction(ctx),
        ConstraintType::MinimumGroundTimeBetweenFlights => register_flow::check_ground_time(ctx),
        ConstraintType::AirportSequenceRestrictionOnFlights => {
            register_flow::check_airport_sequence(ctx)
        }
        ConstraintType::RouteSequenceRestrictionOnAirports => {
            register_flow::check_route_sequence(ctx)
        }
        ConstraintType::AirportRestrictionOnAircrafts => {
            restrictions::check_airport_restriction(ctx)
        }
        ConstraintType::BlockTimeRestrictionOnAircrafts => {
            restrictions::check_block_time_restriction(ctx)
        }
        ConstraintType::AircraftRestrictionOnAirports => {
            restrictions::check_aircraft_restriction(ctx)
        }
        ConstraintType::AirportAllocationPriorityForAircrafts => {
            restrictions::check_allocation_priority(ctx)
        }
        ConstraintType::ValidPeriodCheckOnAircrafts => validity::check_valid_period(ctx),
        ConstraintType::FlightRequirementRestrictionOnFlights => {
            validity::check_flight_requirement(ctx)
        }
    }
}
