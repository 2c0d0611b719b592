use crate::constraint::{Constraint, ConstraintError, instantiate_all};
use crate::engine;
use crate::master_data::ConstraintRecord;
use crate::objection::{Objection, ObjectionType, TargetRef};
use crate::preplan::Preplan;
use serde::{Deserialize, Serialize};

/// Aggregate counts for one evaluation cycle, in the shape the CLI and
/// status indicators consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectionSummary {
    pub constraint_count: usize,
    pub objection_count: usize,
    pub errors_count: usize,
    pub warnings_count: usize,
}

impl ObjectionSummary {
    pub fn to_cli_summary(&self) -> String {
        format!(
            "constraints={}, objections={}, errors={}, warnings={}",
            self.constraint_count, self.objection_count, self.errors_count, self.warnings_count
        )
    }
}

/// Owns the instantiated constraints and the resulting ordered objection
/// list for one preplan. Any edit to the underlying schedule invalidates the
/// whole system; the only supported transition is building a fresh one from
/// the current snapshot.
#[derive(Debug)]
pub struct ObjectionSystem {
    constraints: Vec<Constraint>,
    objections: Vec<Objection>,
}

impl ObjectionSystem {
    /// Instantiate all constraints from master data and evaluate them
    /// against the snapshot.
    pub fn build(
        records: &[ConstraintRecord],
        preplan: &Preplan,
    ) -> Result<ObjectionSystem, ConstraintError> {
        let constraints = instantiate_all(records)?;
        let objections = engine::evaluate(&constraints, preplan);
        Ok(ObjectionSystem {
            constraints,
            objections,
        })
    }

    /// The full objection list: errors first, then priority, then derived id.
    pub fn objections(&self) -> &[Objection] {
        &self.objections
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Objections against one entity, preserving global order.
    pub fn objections_by_target(&self, target: &TargetRef) -> Vec<&Objection> {
        self.objections
            .iter()
            .filter(|objection| objection.target.matches(target))
            .collect()
    }

    pub fn objections_by_type(&self, objection_type: ObjectionType) -> Vec<&Objection> {
        self.objections
            .iter()
            .filter(|objection| objection.objection_type == objection_type)
            .collect()
    }

    pub fn errors_count(&self) -> usize {
        self.objections
            .iter()
            .filter(|o| o.objection_type == ObjectionType::Error)
            .count()
    }

    pub fn warnings_count(&self) -> usize {
        self.objections
            .iter()
            .filter(|o| o.objection_type == ObjectionType::Warning)
            .count()
    }

    pub fn summary(&self) -> ObjectionSummary {
        ObjectionSummary {
            constraint_count: self.constraints.len(),
            objection_count: self.objections.len(),
            errors_count: self.errors_count(),
            warnings_count: self.warnings_count(),
        }
    }
}
