//! Checks tying flights back to aircraft validity periods and to the flight
//! requirements they were generated from.

use super::{CheckContext, CheckerError};
use crate::calendar::{Weekday, Weeks, add_days};
use crate::objection::{Objection, Objectionable};

pub(super) fn check_valid_period(ctx: &CheckContext<'_>) -> Result<Vec<Objection>, CheckerError> {
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
        if register.dummy || !register.has_valid_period() {
            continue;
        }
        if !register.valid_on(flight.date) {
            objections.push(Objection::error(
                ctx.constraint,
                flight.target_ref(),
                |c, t| {
                    format!(
                        "{t} is assigned to {} outside its valid period ({c})",
                        register.name
                    )
                },
            ));
        }
    }
    Ok(objections)
}

pub(super) fn check_flight_requirement(
    ctx: &CheckContext<'_>,
) -> Result<Vec<Objection>, CheckerError> {
    let mut objections = Vec::new();

    // Flights against their day requirement's scope. At most one objection
    // per flight, the error-level finding taking precedence.
    for flight in &ctx.preplan.flights {
        if !ctx.covers(flight) {
            continue;
        }
        let Some((_, day_requirement)) = ctx
            .preplan
            .day_flight_requirement(&flight.day_flight_requirement_id)
        else {
            continue;
        };
        let register = flight
            .aircraft_register_id
            .as_deref()
            .and_then(|id| ctx.preplan.register(id));
        let register_violation = match register {
            Some(register) if !day_requirement.allowed_registers.is_empty() => {
                !day_requirement.allowed_registers.includes(register)
            }
            _ => false,
        };
        if register_violation {
            objections.push(Objection::error(
                ctx.constraint,
                flight.target_ref(),
                |c, t| {
                    format!(
                        "{t} is assigned to an aircraft its flight requirement does not permit ({c})"
                    )
                },
            ));
            continue;
        }
        if let Some(std) = flight.std() {
            if !day_requirement.std_within_bounds(std) {
                let lower = day_requirement.std_lower_bound;
                let upper = day_requirement.std_upper_bound;
                objections.push(Objection::warning(
                    ctx.constraint,
                    flight.target_ref(),
                    |c, t| {
                        format!(
                            "{t} departs at {std}, outside its requirement window {lower}..{upper} ({c})"
                        )
                    },
                ));
            }
        }
    }

    // Required day requirements must have a generated flight on every covered
    // date of the preplan range, walked week by week.
    let start = ctx.preplan.metadata.start_date;
    let end = ctx.preplan.metadata.end_date;
    let Ok(weeks) = Weeks::between(start, end) else {
        return Ok(objections);
    };
    for requirement in &ctx.preplan.flight_requirements {
        for day_requirement in &requirement.days {
            if !day_requirement.required {
                continue;
            }
            for week in &weeks {
                let date = add_days(week.start_date, day_requirement.day.index() as i64);
                if date < start || date > end {
                    continue;
                }
                if let Some(filter) = ctx.date {
                    if filter != date {
                        continue;
                    }
                }
                debug_assert_eq!(Weekday::of(date), day_requirement.day);
                let flown = ctx.preplan.flights.iter().any(|flight| {
                    flight.day_flight_requirement_id == day_requirement.id && flight.date == date
                });
                if !flown {
                    objections.push(Objection::warning(
                        ctx.constraint,
                        day_requirement.target_ref(),
                        |c, t| format!("{t} has no flight scheduled for {date} ({c})"),
                    ));
                }
            }
        }
    }

    Ok(objections)
}
