use assert_cmd::Command;
use chrono::NaiveDate;
use predicates::str::contains as str_contains;
use preplan_tool::{
    AircraftType, Daytime, Flight, FlightLeg, PreplanAircraftRegister, Preplan, PreplanMetadata,
    save_preplan_to_json,
};

#[allow(deprecated)]
fn run_cli(script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.write_stdin(script.to_string()).assert()
}

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A preplan with two overlapping flights on one register, saved to `path`.
fn write_conflicting_preplan(path: &std::path::Path) {
    let metadata = PreplanMetadata {
        name: "CLI Sample".into(),
        description: "conflicting pair".into(),
        start_date: d(2025, 1, 4),
        end_date: d(2025, 1, 10),
    };
    let mut preplan = Preplan::new(metadata);
    let mut a320 = AircraftType::new("T1", "A320");
    a320.minimum_ground_times = vec![30];
    preplan.aircraft_types.push(a320);
    preplan
        .aircraft_registers
        .push(PreplanAircraftRegister::new("R1", "EP-ABA", "T1", "THR"));
    for (id, departure, arrival, std, block_time) in
        [("F1", "THR", "MHD", 600, 120), ("F2", "MHD", "THR", 650, 60)]
    {
        let mut flight = Flight::new(id, format!("W5 {id}"), d(2025, 1, 4), "");
        flight.aircraft_register_id = Some("R1".into());
        flight.legs.push(FlightLeg::new(
            format!("{id}-L0"),
            format!("W5{id}"),
            departure,
            arrival,
            Daytime::new(std).unwrap(),
            block_time,
        ));
        preplan.flights.push(flight);
    }
    save_preplan_to_json(&preplan, path).expect("write sample preplan");
}

#[test]
fn cli_help_lists_the_commands() {
    run_cli("help\nquit\n")
        .success()
        .stdout(str_contains("Commands:"))
        .stdout(str_contains("check"));
}

#[test]
fn cli_rejects_unknown_commands() {
    run_cli("bogus\nquit\n")
        .success()
        .stdout(str_contains("Unknown command 'bogus'."));
}

#[test]
fn cli_requires_an_evaluation_before_listing() {
    run_cli("list\nquit\n")
        .success()
        .stdout(str_contains("No evaluation yet. Run 'check' first."));
}

#[test]
fn cli_load_check_and_summary() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("preplan.json");
    write_conflicting_preplan(&path);
    let script = format!(
        "load {}\ncheck\nsummary\nquit\n",
        path.to_string_lossy().replace('\\', "\\\\")
    );
    run_cli(&script)
        .success()
        .stdout(str_contains("Preplan loaded from"))
        .stdout(str_contains("Preplan name       : CLI Sample"))
        .stdout(str_contains(
            "Evaluation finished: constraints=5, objections=1, errors=1, warnings=0",
        ));
}

#[test]
fn cli_list_and_target_show_the_objection_table() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("preplan.json");
    write_conflicting_preplan(&path);
    let script = format!(
        "load {}\ncheck\nlist\ntarget flight F1\nquit\n",
        path.to_string_lossy().replace('\\', "\\\\")
    );
    let assert = run_cli(&script).success();
    let output = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(output.contains("TYPE"), "table header expected:\n{output}");
    assert!(output.contains("Flight:F2"), "conflict target expected:\n{output}");
    // F1 carries no objection, so the target view is empty.
    assert!(
        output.contains("(no objections)"),
        "empty target view expected:\n{output}"
    );
}

#[test]
fn cli_saves_objections_to_json() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let preplan_path = dir.path().join("preplan.json");
    let objections_path = dir.path().join("objections.json");
    write_conflicting_preplan(&preplan_path);
    let script = format!(
        "load {}\ncheck\nsave {}\nquit\n",
        preplan_path.to_string_lossy().replace('\\', "\\\\"),
        objections_path.to_string_lossy().replace('\\', "\\\\")
    );
    run_cli(&script)
        .success()
        .stdout(str_contains("Objections saved to"));

    let text = std::fs::read_to_string(&objections_path).expect("read saved objections");
    let parsed: serde_json::Value = serde_json::from_str(&text).expect("parse saved objections");
    assert_eq!(parsed.as_array().map(Vec::len), Some(1));
}
