use chrono::NaiveDate;
use preplan_tool::{
    AircraftSelection, ConstraintData, ConstraintError, ConstraintRecord, ConstraintScope,
    ConstraintTemplate, ConstraintType, SeasonType, Weekday, instantiate_all,
};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn block_time_record(name: &str) -> ConstraintRecord {
    ConstraintRecord::new(ConstraintType::BlockTimeRestrictionOnAircrafts, name).with_data(
        ConstraintData::BlockTimeRestrictionOnAircrafts {
            aircraft_selection: AircraftSelection::of_types(["T1"]),
            maximum_block_time: 180,
        },
    )
}

#[test]
fn catalog_holds_all_ten_templates() {
    let templates = ConstraintTemplate::all();
    assert_eq!(templates.len(), 10);
    assert_eq!(ConstraintTemplate::singletons().count(), 5);
    for template in templates {
        assert_eq!(
            ConstraintTemplate::by_type(template.constraint_type).constraint_type,
            template.constraint_type
        );
    }
}

#[test]
fn type_codes_round_trip() {
    for template in ConstraintTemplate::all() {
        let code = template.constraint_type.code();
        assert_eq!(
            ConstraintType::from_code(code).unwrap(),
            template.constraint_type
        );
    }
}

#[test]
fn unknown_template_code_is_rejected() {
    let err = ConstraintType::from_code("CURFEW_RESTRICTION_ON_AIRPORTS").unwrap_err();
    assert!(err.to_string().contains("CURFEW_RESTRICTION_ON_AIRPORTS"));
}

#[test]
fn instantiate_all_orders_singletons_before_records() {
    let records = vec![block_time_record("Cap A"), block_time_record("Cap B")];
    let constraints = instantiate_all(&records).unwrap();
    assert_eq!(constraints.len(), 7);

    // Canonical singleton order first.
    let singleton_types: Vec<ConstraintType> = constraints[..5]
        .iter()
        .map(|c| c.template.constraint_type)
        .collect();
    assert_eq!(
        singleton_types,
        vec![
            ConstraintType::NoConflictionInFlights,
            ConstraintType::ValidPeriodCheckOnAircrafts,
            ConstraintType::AirportSequenceRestrictionOnFlights,
            ConstraintType::FlightRequirementRestrictionOnFlights,
            ConstraintType::MinimumGroundTimeBetweenFlights,
        ]
    );

    // Then configured constraints in master-data order.
    assert_eq!(constraints[5].name, "Cap A");
    assert_eq!(constraints[6].name, "Cap B");
}

#[test]
fn instantiate_all_rejects_non_instantiable_record() {
    let records = vec![ConstraintRecord::new(
        ConstraintType::NoConflictionInFlights,
        "Bogus",
    )];
    assert!(matches!(
        instantiate_all(&records),
        Err(ConstraintError::NotInstantiable(
            ConstraintType::NoConflictionInFlights
        ))
    ));
}

#[test]
fn instantiate_all_rejects_missing_and_mismatched_data() {
    let missing = vec![ConstraintRecord::new(
        ConstraintType::BlockTimeRestrictionOnAircrafts,
        "No payload",
    )];
    assert!(matches!(
        instantiate_all(&missing),
        Err(ConstraintError::MissingData { .. })
    ));

    let mismatched = vec![
        ConstraintRecord::new(ConstraintType::AircraftRestrictionOnAirports, "Wrong payload")
            .with_data(ConstraintData::RouteSequenceRestrictionOnAirports {
                airport: "THR".into(),
                next_airport: "MHD".into(),
            }),
    ];
    assert!(matches!(
        instantiate_all(&mismatched),
        Err(ConstraintError::MismatchedData { .. })
    ));
}

#[test]
fn scope_applies_date_window_season_and_days() {
    let scope = ConstraintScope {
        from_date: Some(d(2025, 6, 1)),
        to_date: Some(d(2025, 6, 30)),
        season_type: SeasonType::Summer,
        days: vec![Weekday::Monday],
    };
    // 2025-06-02 is a Monday inside the window.
    assert!(scope.applies_on(d(2025, 6, 2)));
    // Tuesday is excluded by the weekday list.
    assert!(!scope.applies_on(d(2025, 6, 3)));
    // Outside the window.
    assert!(!scope.applies_on(d(2025, 7, 7)));
    assert!(!scope.is_unrestricted());
}

#[test]
fn winter_scope_rejects_summer_dates() {
    let scope = ConstraintScope {
        season_type: SeasonType::Winter,
        ..ConstraintScope::unrestricted()
    };
    assert!(scope.applies_on(d(2025, 12, 10)));
    assert!(!scope.applies_on(d(2025, 7, 10)));
}

#[test]
fn unrestricted_scope_applies_everywhere() {
    let scope = ConstraintScope::unrestricted();
    assert!(scope.is_unrestricted());
    assert!(scope.applies_on(d(2025, 1, 4)));
    assert!(scope.applies_on(d(2030, 12, 31)));
}
