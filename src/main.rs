use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;

use seatplan::{
    export_plan, io_utils::CliError, search, DisplayGrid, SearchOutcome, SeatPlan, SeatingConfig,
};

/// Generate a randomized meeting seat chart and look up seats by name.
#[derive(Parser)]
struct Args {
    /// JSON file holding a full seating configuration; overrides the
    /// individual grid flags
    #[clap(long, conflicts_with_all = ["rows", "cols", "participants", "names"])]
    config: Option<PathBuf>,
    /// Grid rows
    #[clap(long, default_value_t = 6)]
    rows: usize,
    /// Grid columns
    #[clap(long, default_value_t = 6)]
    cols: usize,
    /// Number of participants to seat
    #[clap(long, default_value_t = 30)]
    participants: usize,
    /// File with one participant name per line; missing names are padded
    /// with generated placeholders
    #[clap(long)]
    names: Option<PathBuf>,
    /// Shuffle seed for a reproducible chart
    #[clap(long)]
    seed: Option<u64>,
    /// Fuzzy name query to look up (substring match)
    #[clap(long)]
    find: Option<String>,
    /// Write the plain-text chart to this file
    #[clap(long)]
    out: Option<PathBuf>,
    /// Print a machine readable summary instead of the grid
    #[clap(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SeatingConfig::from_json_file(path)?,
        None => {
            let names: Vec<String> = match &args.names {
                Some(path) => fs::read_to_string(path)
                    .map_err(|e| CliError::new("reading names file", path, e))?
                    .lines()
                    .map(str::to_string)
                    .collect(),
                None => Vec::new(),
            };
            SeatingConfig::new(args.participants, args.rows, args.cols, names)
        }
    };
    let plan = match args.seed {
        Some(seed) => SeatPlan::allocate_with_rng(&config, &mut StdRng::seed_from_u64(seed))?,
        None => SeatPlan::allocate(&config)?,
    };
    let display = DisplayGrid::from_plan(&plan);

    let outcome = match &args.find {
        Some(query) => Some(search(&plan, &display, query)?),
        None => None,
    };

    if args.json {
        print_json(&config, &outcome);
    } else {
        print_text(&config, &display, &outcome, args.find.as_deref());
    }

    if let Some(out) = &args.out {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        fs::write(out, export_plan(&plan, &timestamp)?)
            .map_err(|e| CliError::new("writing chart file", out, e))?;
    }
    Ok(())
}

fn print_text(
    config: &SeatingConfig,
    display: &DisplayGrid,
    outcome: &Option<SearchOutcome>,
    query: Option<&str>,
) {
    println!(
        "Seat chart ready: {} seats, {} participants",
        config.capacity(),
        config.participants
    );
    match outcome {
        None => print!("{}", display.render()),
        Some(SearchOutcome::EmptyQuery) => println!("Enter a name to look up."),
        Some(SearchOutcome::NoMatch) => {
            println!(
                "No participant name contains \"{}\". Check the spelling.",
                query.unwrap_or_default().trim()
            );
        }
        Some(SearchOutcome::Matches { matches, marked }) => {
            for m in matches {
                println!("{}: row {}, col {}", m.name, m.row, m.col);
            }
            print!("{}", marked.render());
        }
    }
}

fn print_json(config: &SeatingConfig, outcome: &Option<SearchOutcome>) {
    let matches = match outcome {
        Some(SearchOutcome::Matches { matches, .. }) => matches
            .iter()
            .map(|m| serde_json::json!({ "name": m.name, "row": m.row, "col": m.col }))
            .collect(),
        _ => Vec::new(),
    };
    let summary = serde_json::json!({
        "rows": config.rows,
        "cols": config.cols,
        "participants": config.participants,
        "capacity": config.capacity(),
        "matches": matches,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&summary).unwrap_or_default()
    );
}
