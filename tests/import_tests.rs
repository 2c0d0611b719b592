use chrono::NaiveDate;
use preplan_tool::{
    AircraftType, ConstraintType, Daytime, Flight, FlightLeg, PersistenceError,
    PreplanAircraftRegister, Preplan, PreplanMetadata, load_constraints_from_json,
    load_flights_from_csv, load_preplan_from_json, save_objections_to_json, save_preplan_to_json,
};
use std::io::Write as _;

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_preplan() -> Preplan {
    let metadata = PreplanMetadata {
        name: "Winter 2025".into(),
        description: "round trip sample".into(),
        start_date: d(2025, 1, 4),
        end_date: d(2025, 1, 10),
    };
    let mut preplan = Preplan::new(metadata);
    preplan.aircraft_types.push(AircraftType::new("T1", "A320"));
    preplan
        .aircraft_registers
        .push(PreplanAircraftRegister::new("R1", "EP-ABA", "T1", "THR"));
    let mut flight = Flight::new("F1", "W5 0712", d(2025, 1, 4), "");
    flight.aircraft_register_id = Some("R1".into());
    flight.legs.push(FlightLeg::new(
        "F1-L0",
        "W50712",
        "THR",
        "MHD",
        Daytime::new(600).unwrap(),
        90,
    ));
    preplan.flights.push(flight);
    preplan
}

#[test]
fn preplan_round_trips_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preplan.json");
    let preplan = sample_preplan();
    save_preplan_to_json(&preplan, &path).unwrap();
    let loaded = load_preplan_from_json(&path).unwrap();
    assert_eq!(loaded, preplan);
}

#[test]
fn saving_an_invalid_preplan_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preplan.json");
    let mut preplan = sample_preplan();
    let duplicate = preplan.flights[0].clone();
    preplan.flights.push(duplicate);
    let err = save_preplan_to_json(&preplan, &path).unwrap_err();
    assert!(matches!(err, PersistenceError::Validation(_)));
    assert!(!path.exists());
}

#[test]
fn loading_an_invalid_preplan_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preplan.json");
    // Flight references a register that is not part of the fleet.
    let mut preplan = sample_preplan();
    preplan.flights[0].aircraft_register_id = Some("R9".into());
    let file = std::fs::File::create(&path).unwrap();
    serde_json::to_writer_pretty(file, &preplan).unwrap();
    let err = load_preplan_from_json(&path).unwrap_err();
    assert!(matches!(err, PersistenceError::Validation(_)));
}

#[test]
fn constraint_records_load_from_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("constraints.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"[
            {{
                "type": "BLOCK_TIME_RESTRICTION_ON_AIRCRAFTS",
                "name": "A320 block cap",
                "data": {{
                    "kind": "BlockTimeRestrictionOnAircrafts",
                    "aircraft_selection": {{ "aircraft_types": ["T1"] }},
                    "maximum_block_time": 180
                }}
            }}
        ]"#
    )
    .unwrap();
    drop(file);

    let records = load_constraints_from_json(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].constraint_type,
        ConstraintType::BlockTimeRestrictionOnAircrafts
    );
    assert_eq!(records[0].name, "A320 block cap");
    assert!(records[0].data.is_some());
}

#[test]
fn unknown_constraint_type_codes_are_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("constraints.json");
    std::fs::write(
        &path,
        r#"[{ "type": "CURFEW_RESTRICTION_ON_AIRPORTS", "name": "late ops" }]"#,
    )
    .unwrap();
    let err = load_constraints_from_json(&path).unwrap_err();
    assert!(matches!(err, PersistenceError::Serialization(_)));
}

#[test]
fn csv_rows_sharing_a_flight_id_fold_into_one_flight() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flights.csv");
    std::fs::write(
        &path,
        "flight_id,label,date,day_flight_requirement_id,aircraft_register_id,leg_id,flight_number,departure_airport,arrival_airport,std,block_time\n\
         F1,W5 0712,2025-01-04,,R1,F1-L0,W50712,THR,MHD,10:00,90\n\
         F1,W5 0712,2025-01-04,,R1,F1-L1,W50713,MHD,THR,13:30,90\n\
         F2,W5 1180,2025-01-05,,,F2-L0,W51180,THR,KIH,08:15,75\n",
    )
    .unwrap();

    let flights = load_flights_from_csv(&path).unwrap();
    assert_eq!(flights.len(), 2);
    assert_eq!(flights[0].legs.len(), 2);
    assert_eq!(flights[0].aircraft_register_id.as_deref(), Some("R1"));
    assert_eq!(flights[0].legs[1].std.to_string(), "13:30");
    assert_eq!(flights[1].legs.len(), 1);
    assert_eq!(flights[1].aircraft_register_id, None);
}

#[test]
fn malformed_std_in_csv_surfaces_as_invalid_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flights.csv");
    std::fs::write(
        &path,
        "flight_id,label,date,day_flight_requirement_id,aircraft_register_id,leg_id,flight_number,departure_airport,arrival_airport,std,block_time\n\
         F1,W5 0712,2025-01-04,,R1,F1-L0,W50712,THR,MHD,morning,90\n",
    )
    .unwrap();
    let err = load_flights_from_csv(&path).unwrap_err();
    assert!(matches!(err, PersistenceError::InvalidData(_)));
}

#[test]
fn objections_export_as_a_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("objections.json");
    let mut preplan = sample_preplan();
    // Second flight on the same register inside the first one's block window.
    let mut overlap = Flight::new("F2", "W5 0713", d(2025, 1, 4), "");
    overlap.aircraft_register_id = Some("R1".into());
    overlap.legs.push(FlightLeg::new(
        "F2-L0",
        "W50713",
        "MHD",
        "THR",
        Daytime::new(650).unwrap(),
        60,
    ));
    preplan.flights.push(overlap);

    let system = preplan_tool::ObjectionSystem::build(&[], &preplan).unwrap();
    save_objections_to_json(system.objections(), &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["objection_type"], "ERROR");
    assert_eq!(array[0]["derived_id"], "FLIGHT-F2-NO_CONFLICTION_IN_FLIGHTS");
}
