use crate::constraint::Constraint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a finding. Errors sort ahead of warnings everywhere the
/// objection list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectionType {
    Error,
    Warning,
}

impl fmt::Display for ObjectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectionType::Error => write!(f, "ERROR"),
            ObjectionType::Warning => write!(f, "WARNING"),
        }
    }
}

/// Closed set of entity kinds a constraint can object to. Dispatch over
/// targets is exhaustive pattern matching, never runtime type tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetKind {
    Flight,
    FlightLeg,
    FlightRequirement,
    DayFlightRequirement,
    AircraftRegister,
}

impl TargetKind {
    pub fn code(self) -> &'static str {
        match self {
            TargetKind::Flight => "FLIGHT",
            TargetKind::FlightLeg => "FLIGHT_LEG",
            TargetKind::FlightRequirement => "FLIGHT_REQUIREMENT",
            TargetKind::DayFlightRequirement => "DAY_FLIGHT_REQUIREMENT",
            TargetKind::AircraftRegister => "AIRCRAFT_REGISTER",
        }
    }
}

/// A by-value reference to the entity an objection points at. Holding kind,
/// id and display marker (rather than a borrow of the entity) means a rebuilt
/// objection list can never retain stale references into a previous snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRef {
    pub kind: TargetKind,
    pub id: String,
    pub marker: String,
}

impl TargetRef {
    pub fn new(kind: TargetKind, id: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            marker: marker.into(),
        }
    }

    pub fn matches(&self, other: &TargetRef) -> bool {
        self.kind == other.kind && self.id == other.id
    }
}

/// Anything a constraint can object to: exposes a stable id and a
/// human-readable marker for message composition and click-through.
pub trait Objectionable {
    fn target_ref(&self) -> TargetRef;
}

/// One finding produced by one constraint against one target entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objection {
    pub objection_type: ObjectionType,
    /// Lower value sorts first within the same severity.
    pub priority: u16,
    /// Stable composite key: target kind + target id + constraint type.
    /// Repeated evaluation cycles produce comparable identities.
    pub derived_id: String,
    pub message: String,
    pub target: TargetRef,
}

impl Objection {
    /// Build an objection for `constraint` against `target`. The message
    /// provider receives the constraint's display marker and the target's
    /// display marker, in that order.
    pub fn new<F>(
        objection_type: ObjectionType,
        constraint: &Constraint,
        target: TargetRef,
        message: F,
    ) -> Self
    where
        F: FnOnce(&str, &str) -> String,
    {
        let derived_id = format!(
            "{}-{}-{}",
            target.kind.code(),
            target.id,
            constraint.template.constraint_type.code()
        );
        let message = message(&constraint.marker(), &target.marker);
        Self {
            objection_type,
            priority: constraint.template.priority,
            derived_id,
            message,
            target,
        }
    }

    pub fn error<F>(constraint: &Constraint, target: TargetRef, message: F) -> Self
    where
        F: FnOnce(&str, &str) -> String,
    {
        Self::new(ObjectionType::Error, constraint, target, message)
    }

    pub fn warning<F>(constraint: &Constraint, target: TargetRef, message: F) -> Self
    where
        F: FnOnce(&str, &str) -> String,
    {
        Self::new(ObjectionType::Warning, constraint, target, message)
    }

    /// Global presentation order: errors first, then priority, then the
    /// derived id for determinism.
    pub fn ordering_key(&self) -> (ObjectionType, u16, &str) {
        (self.objection_type, self.priority, &self.derived_id)
    }
}
