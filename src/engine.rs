//! The checker engine: expands each constraint's validity scope into
//! evaluation passes, runs the checkers, and folds the findings into one
//! deduplicated, deterministically ordered objection list.

use crate::calendar::add_days;
use crate::checks::{self, CheckContext};
use crate::constraint::Constraint;
use crate::objection::Objection;
use crate::preplan::Preplan;
use rayon::prelude::*;
use std::collections::HashSet;

fn evaluate_constraint(
    constraint: &Constraint,
    preplan: &Preplan,
    timelines: &std::collections::BTreeMap<String, Vec<crate::preplan::LegSlot>>,
) -> Vec<Objection> {
    let mut found = Vec::new();
    let mut run_pass = |date| {
        let ctx = CheckContext {
            preplan,
            timelines,
            constraint,
            date,
        };
        match checks::run(&ctx) {
            Ok(objections) => found.extend(objections),
            // Fail-soft: a broken rule must not hide the other rules' results.
            Err(err) => log::warn!(
                "constraint '{}' contributed no objections this cycle: {err}",
                constraint.name
            ),
        }
    };

    if constraint.scope.is_unrestricted() {
        run_pass(None);
    } else {
        let mut date = preplan.metadata.start_date;
        while date <= preplan.metadata.end_date {
            if constraint.scope.applies_on(date) {
                run_pass(Some(date));
            }
            date = add_days(date, 1);
        }
    }
    found
}

/// Run every constraint against the snapshot. Constraints are independent
/// pure passes, so they are mapped in parallel; collecting preserves
/// instantiation order, which keeps dedup ("first found wins") and the final
/// sort deterministic.
pub(crate) fn evaluate(constraints: &[Constraint], preplan: &Preplan) -> Vec<Objection> {
    let timelines = preplan.register_timelines();

    let per_constraint: Vec<Vec<Objection>> = constraints
        .par_iter()
        .map(|constraint| evaluate_constraint(constraint, preplan, &timelines))
        .collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut merged: Vec<Objection> = Vec::new();
    for objections in per_constraint {
        for objection in objections {
            if seen.insert(objection.derived_id.clone()) {
                merged.push(objection);
            }
        }
    }

    merged.sort_by(|a, b| a.ordering_key().cmp(&b.ordering_key()));
    merged
}
