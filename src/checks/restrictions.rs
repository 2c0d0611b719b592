//! Checks driven by configured restriction records: per-airport and
//! per-aircraft limitations, block-time caps, and allocation priorities.

use super::{CheckContext, CheckerError};
use crate::master_data::{AircraftRestrictionMode, AirportRestrictionMode, ConstraintData};
use crate::objection::{Objection, Objectionable};

pub(super) fn check_airport_restriction(
    ctx: &CheckContext<'_>,
) -> Result<Vec<Objection>, CheckerError> {
    let Some(ConstraintData::AirportRestrictionOnAircrafts {
        aircraft_register,
        airport,
        mode,
    }) = &ctx.constraint.data
    else {
        return Ok(Vec::new());
    };
    let Some(register) = ctx.preplan.register(aircraft_register) else {
        return Ok(Vec::new());
    };
    let mut objections = Vec::new();
    for flight in &ctx.preplan.flights {
        if flight.aircraft_register_id.as_deref() != Some(register.id.as_str())
            || !ctx.covers(flight)
        {
            continue;
        }
        let violated = flight.legs.iter().any(|leg| match mode {
            AirportRestrictionMode::Forbidden => leg.touches(airport),
            AirportRestrictionMode::Required => {
                let allowed = [airport.as_str(), register.base_airport.as_str()];
                !allowed.contains(&leg.departure_airport.as_str())
                    || !allowed.contains(&leg.arrival_airport.as_str())
            }
        });
        if violated {
            objections.push(Objection::error(
                ctx.constraint,
                flight.target_ref(),
                |c, t| match mode {
                    AirportRestrictionMode::Forbidden => {
                        format!("{t} takes {} to forbidden airport {airport} ({c})", register.name)
                    }
                    AirportRestrictionMode::Required => format!(
                        "{t} takes {} off its required {airport} route ({c})",
                        register.name
                    ),
                },
            ));
        }
    }
    Ok(objections)
}

pub(super) fn check_block_time_restriction(
    ctx: &CheckContext<'_>,
) -> Result<Vec<Objection>, CheckerError> {
    let Some(ConstraintData::BlockTimeRestrictionOnAircrafts {
        aircraft_selection,
        maximum_block_time,
    }) = &ctx.constraint.data
    else {
        return Ok(Vec::new());
    };
    let mut objections = Vec::new();
    for flight in &ctx.preplan.flights {
        if !ctx.covers(flight) {
            continue;
        }
        let Some(register) = flight
            .aircraft_register_id
            .as_deref()
            .and_then(|id| ctx.preplan.register(id))
        else {
            continue;
        };
        if !aircraft_selection.includes(register) {
            continue;
        }
        if let Some(leg) = flight
            .legs
            .iter()
            .find(|leg| leg.block_time > *maximum_block_time)
        {
            let block_time = leg.block_time;
            objections.push(Objection::warning(
                ctx.constraint,
                flight.target_ref(),
                |c, t| {
                    format!(
                        "{t} blocks {block_time} minutes, over the {maximum_block_time} minute limit ({c})"
                    )
                },
            ));
        }
    }
    Ok(objections)
}

pub(super) fn check_aircraft_restriction(
    ctx: &CheckContext<'_>,
) -> Result<Vec<Objection>, CheckerError> {
    let Some(ConstraintData::AircraftRestrictionOnAirports {
        airport,
        mode,
        aircraft_selection,
    }) = &ctx.constraint.data
    else {
        return Ok(Vec::new());
    };
    let mut objections = Vec::new();
    for flight in &ctx.preplan.flights {
        if !ctx.covers(flight) || !flight.legs.iter().any(|leg| leg.touches(airport)) {
            continue;
        }
        let Some(register) = flight
            .aircraft_register_id
            .as_deref()
            .and_then(|id| ctx.preplan.register(id))
        else {
            continue;
        };
        let selected = aircraft_selection.includes(register);
        let violated = match mode {
            AircraftRestrictionMode::Allowed => !selected,
            AircraftRestrictionMode::Forbidden => selected,
        };
        if violated {
            objections.push(Objection::error(
                ctx.constraint,
                flight.target_ref(),
                |c, t| {
                    format!(
                        "{t} serves {airport} with {}, which the restriction does not permit ({c})",
                        register.name
                    )
                },
            ));
        }
    }
    Ok(objections)
}

pub(super) fn check_allocation_priority(
    ctx: &CheckContext<'_>,
) -> Result<Vec<Objection>, CheckerError> {
    let Some(ConstraintData::AirportAllocationPriorityForAircrafts {
        aircraft_selection,
        airports,
    }) = &ctx.constraint.data
    else {
        return Ok(Vec::new());
    };
    if airports.is_empty() {
        return Ok(Vec::new());
    }
    let mut objections = Vec::new();
    for flight in &ctx.preplan.flights {
        if !ctx.covers(flight) {
            continue;
        }
        let Some(register) = flight
            .aircraft_register_id
            .as_deref()
            .and_then(|id| ctx.preplan.register(id))
        else {
            continue;
        };
        if !aircraft_selection.includes(register) {
            continue;
        }
        if let Some(leg) = flight
            .legs
            .iter()
            .find(|leg| !airports.contains(&leg.departure_airport))
        {
            let departure = leg.departure_airport.clone();
            objections.push(Objection::warning(
                ctx.constraint,
                flight.target_ref(),
                |c, t| {
                    format!(
                        "{t} departs {departure} with {}, outside its prioritized airports ({c})",
                        register.name
                    )
                },
            ));
        }
    }
    Ok(objections)
}
