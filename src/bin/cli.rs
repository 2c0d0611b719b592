use preplan_tool::{
    ObjectionSystem, Preplan, TargetKind, TargetRef, load_constraints_from_json,
    load_flights_from_csv, load_preplan_from_json, save_objections_to_json,
};
use std::io::{self, Write};

fn print_help() {
    println!(
        "Commands:\n  help                          Show this help\n  load <json_path>              Load a preplan snapshot from JSON\n  constraints <json_path>       Load master-data constraint records from JSON\n  flights <csv_path>            Append flights from a CSV leg list\n  check                         Instantiate constraints and evaluate the preplan\n  list                          Show the current objection table\n  target <kind> <id>            Show objections for one target\n                                (kinds: flight, leg, requirement, day, register)\n  save <json_path>              Write the current objections to JSON\n  summary                       Show evaluation counts\n  meta                          Show preplan metadata\n  quit|exit                     Exit"
    );
}

fn parse_target_kind(raw: &str) -> Option<TargetKind> {
    match raw {
        "flight" => Some(TargetKind::Flight),
        "leg" => Some(TargetKind::FlightLeg),
        "requirement" => Some(TargetKind::FlightRequirement),
        "day" => Some(TargetKind::DayFlightRequirement),
        "register" => Some(TargetKind::AircraftRegister),
        _ => None,
    }
}

fn render_objection_table<'a, I>(objections: I) -> String
where
    I: IntoIterator<Item = &'a preplan_tool::Objection>,
{
    let headers = ["TYPE", "PRIORITY", "TARGET", "MESSAGE"];
    let rows: Vec<[String; 4]> = objections
        .into_iter()
        .map(|o| {
            [
                o.objection_type.to_string(),
                o.priority.to_string(),
                format!("{:?}:{}", o.target.kind, o.target.id),
                o.message.clone(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (ci, cell) in row.iter().enumerate() {
            if cell.len() > widths[ci] {
                widths[ci] = cell.len();
            }
        }
    }

    let mut out = String::new();
    for (ci, header) in headers.iter().enumerate() {
        out.push_str(&format!("{:<width$}  ", header, width = widths[ci]));
    }
    out.push('\n');
    for row in &rows {
        for (ci, cell) in row.iter().enumerate() {
            out.push_str(&format!("{:<width$}  ", cell, width = widths[ci]));
        }
        out.push('\n');
    }
    if rows.is_empty() {
        out.push_str("(no objections)\n");
    }
    out
}

fn print_metadata(preplan: &Preplan) {
    println!("Preplan name       : {}", preplan.metadata.name);
    println!("Description        : {}", preplan.metadata.description);
    println!("Start date         : {}", preplan.metadata.start_date);
    println!("End date           : {}", preplan.metadata.end_date);
    println!("Flights            : {}", preplan.flights.len());
    println!("Aircraft registers : {}", preplan.aircraft_registers.len());
}

fn main() {
    let mut preplan = Preplan::default();
    let mut records = Vec::new();
    let mut system: Option<ObjectionSystem> = None;

    println!("Preplan Tool (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        if stdin.read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "load" => match parts.next() {
                Some(path) => match load_preplan_from_json(path) {
                    Ok(loaded) => {
                        preplan = loaded;
                        system = None;
                        println!("Preplan loaded from {path}.");
                        print_metadata(&preplan);
                    }
                    Err(e) => println!("Error loading preplan: {e}"),
                },
                None => println!("Usage: load <json_path>"),
            },
            "constraints" => match parts.next() {
                Some(path) => match load_constraints_from_json(path) {
                    Ok(loaded) => {
                        println!("Loaded {} constraint records from {path}.", loaded.len());
                        records = loaded;
                        system = None;
                    }
                    Err(e) => println!("Error loading constraint records: {e}"),
                },
                None => println!("Usage: constraints <json_path>"),
            },
            "flights" => match parts.next() {
                Some(path) => match load_flights_from_csv(path) {
                    Ok(flights) => {
                        println!("Imported {} flights from {path}.", flights.len());
                        preplan.flights.extend(flights);
                        system = None;
                    }
                    Err(e) => println!("Error importing flights: {e}"),
                },
                None => println!("Usage: flights <csv_path>"),
            },
            "check" => match ObjectionSystem::build(&records, &preplan) {
                Ok(built) => {
                    println!("Evaluation finished: {}", built.summary().to_cli_summary());
                    system = Some(built);
                }
                Err(e) => println!("Error instantiating constraints: {e}"),
            },
            "list" => match &system {
                Some(system) => print!("{}", render_objection_table(system.objections())),
                None => println!("No evaluation yet. Run 'check' first."),
            },
            "target" => {
                let kind = parts.next().and_then(parse_target_kind);
                let id = parts.next();
                match (&system, kind, id) {
                    (Some(system), Some(kind), Some(id)) => {
                        let target = TargetRef::new(kind, id, "");
                        let matched = system.objections_by_target(&target);
                        print!("{}", render_objection_table(matched.into_iter()));
                    }
                    (None, _, _) => println!("No evaluation yet. Run 'check' first."),
                    _ => println!("Usage: target <kind> <id>"),
                }
            }
            "save" => match (parts.next(), &system) {
                (Some(path), Some(system)) => {
                    match save_objections_to_json(system.objections(), path) {
                        Ok(()) => println!("Objections saved to {path}."),
                        Err(e) => println!("Error saving objections: {e}"),
                    }
                }
                (None, _) => println!("Usage: save <json_path>"),
                (_, None) => println!("No evaluation yet. Run 'check' first."),
            },
            "summary" => match &system {
                Some(system) => println!("{}", system.summary().to_cli_summary()),
                None => println!("No evaluation yet. Run 'check' first."),
            },
            "meta" => print_metadata(&preplan),
            _ => println!("Unknown command '{cmd}'. Type 'help' for commands."),
        }
    }
}
