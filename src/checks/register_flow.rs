//! Checks that scan each aircraft register's sorted leg timeline: time
//! conflicts, ground-time gaps, and airport/route continuity.

use super::{CheckContext, CheckerError};
use crate::master_data::ConstraintData;
use crate::objection::{Objection, Objectionable};
use crate::preplan::LegSlot;
use crate::register::PreplanAircraftRegister;

/// Adjacent in-scope slot pairs of one register, in timeline order.
fn scoped_pairs<'a>(ctx: &'a CheckContext<'_>, slots: &'a [LegSlot]) -> Vec<(&'a LegSlot, &'a LegSlot)> {
    let scoped: Vec<&LegSlot> = slots.iter().filter(|slot| ctx.covers_slot(slot)).collect();
    scoped
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

/// Registers whose timelines carry physical continuity semantics. Dummy
/// registers are placeholders and never conflict with themselves.
fn physical_register<'a>(
    ctx: &'a CheckContext<'_>,
    register_id: &str,
) -> Option<&'a PreplanAircraftRegister> {
    ctx.preplan
        .register(register_id)
        .filter(|register| !register.dummy)
}

pub(super) fn check_no_confliction(ctx: &CheckContext<'_>) -> Result<Vec<Objection>, CheckerError> {
    let mut objections = Vec::new();
    for (register_id, slots) in ctx.timelines {
        let Some(register) = physical_register(ctx, register_id) else {
            continue;
        };
        for (prev, next) in scoped_pairs(ctx, slots) {
            if next.start < prev.end {
                let earlier = ctx.preplan.flight_of(prev);
                let later = ctx.preplan.flight_of(next);
                objections.push(Objection::error(
                    ctx.constraint,
                    later.target_ref(),
                    |c, t| {
                        format!(
                            "{t} conflicts with {} on {} ({c})",
                            earlier.label, register.name
                        )
                    },
                ));
            }
        }
    }
    Ok(objections)
}

pub(super) fn check_ground_time(ctx: &CheckContext<'_>) -> Result<Vec<Objection>, CheckerError> {
    let options = &ctx.preplan.options;
    let mut objections = Vec::new();
    for (register_id, slots) in ctx.timelines {
        let Some(register) = physical_register(ctx, register_id) else {
            continue;
        };
        let aircraft_type = ctx.preplan.aircraft_type(&register.aircraft_type_id).ok_or(
            CheckerError::UnknownAircraftType {
                register: register.id.clone(),
                aircraft_type: register.aircraft_type_id.clone(),
            },
        )?;
        let base = aircraft_type
            .minimum_ground_time(options.minimum_ground_time_mode)
            .ok_or(CheckerError::MissingGroundTimeTable {
                aircraft_type: aircraft_type.id.clone(),
            })?;
        let required = base as i64 + options.minimum_ground_time_offset as i64;
        for (prev, next) in scoped_pairs(ctx, slots) {
            let gap = next.start - prev.end;
            // Overlapping pairs belong to the confliction rule.
            if gap >= 0 && gap < required {
                let later = ctx.preplan.flight_of(next);
                objections.push(Objection::warning(
                    ctx.constraint,
                    later.target_ref(),
                    |c, t| {
                        format!(
                            "{t} leaves only {gap} minutes of ground time on {} where {required} are required ({c})",
                            register.name
                        )
                    },
                ));
            }
        }
    }
    Ok(objections)
}

pub(super) fn check_airport_sequence(
    ctx: &CheckContext<'_>,
) -> Result<Vec<Objection>, CheckerError> {
    let mut objections = Vec::new();
    for (register_id, slots) in ctx.timelines {
        let Some(register) = physical_register(ctx, register_id) else {
            continue;
        };
        for (prev, next) in scoped_pairs(ctx, slots) {
            let arrival = &ctx.preplan.leg(prev).arrival_airport;
            let departure = &ctx.preplan.leg(next).departure_airport;
            if arrival != departure {
                let later = ctx.preplan.flight_of(next);
                objections.push(Objection::error(
                    ctx.constraint,
                    later.target_ref(),
                    |c, t| {
                        format!(
                            "{t} departs {departure} but {} last arrived at {arrival} ({c})",
                            register.name
                        )
                    },
                ));
            }
        }
    }
    Ok(objections)
}

pub(super) fn check_route_sequence(ctx: &CheckContext<'_>) -> Result<Vec<Objection>, CheckerError> {
    let Some(ConstraintData::RouteSequenceRestrictionOnAirports {
        airport,
        next_airport,
    }) = &ctx.constraint.data
    else {
        return Ok(Vec::new());
    };
    let mut objections = Vec::new();
    for (register_id, slots) in ctx.timelines {
        if physical_register(ctx, register_id).is_none() {
            continue;
        }
        for (prev, next) in scoped_pairs(ctx, slots) {
            let landed_at = &ctx.preplan.leg(prev).arrival_airport;
            let continues_to = &ctx.preplan.leg(next).arrival_airport;
            if landed_at == airport && continues_to != next_airport {
                let later = ctx.preplan.flight_of(next);
                objections.push(Objection::error(
                    ctx.constraint,
                    later.target_ref(),
                    |c, t| {
                        format!(
                            "{t} continues to {continues_to} instead of {next_airport} after arriving at {airport} ({c})",
                        )
                    },
                ));
            }
        }
    }
    Ok(objections)
}
