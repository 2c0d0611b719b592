pub mod calendar;
pub(crate) mod checks;
pub mod constraint;
pub(crate) mod engine;
pub mod flight;
pub mod master_data;
pub mod metadata;
pub mod objection;
pub mod objection_system;
pub mod persistence;
pub mod preplan;
pub(crate) mod preplan_validation;
pub mod register;
pub mod requirement;

pub use calendar::{Daytime, DaytimeError, Week, WeekRangeError, Weekday, Weeks};
pub use constraint::{
    Constraint, ConstraintError, ConstraintScope, ConstraintTemplate, ConstraintType,
    UnknownTemplateError, instantiate_all,
};
pub use flight::{Flight, FlightLeg};
pub use master_data::{
    AircraftRestrictionMode, AirportRestrictionMode, ConstraintData, ConstraintRecord, SeasonType,
};
pub use metadata::PreplanMetadata;
pub use objection::{Objection, ObjectionType, Objectionable, TargetKind, TargetRef};
pub use objection_system::{ObjectionSummary, ObjectionSystem};
pub use persistence::{
    PersistenceError, load_constraints_from_json, load_flights_from_csv, load_preplan_from_json,
    save_objections_to_json, save_preplan_to_json,
};
pub use preplan::{ArrangerOptions, LegSlot, Preplan};
pub use preplan_validation::{PreplanValidationError, validate_flight, validate_preplan};
pub use register::{
    AircraftSelection, AircraftType, MinimumGroundTimeMode, PreplanAircraftRegister,
};
pub use requirement::{DayFlightRequirement, FlightRequirement};
