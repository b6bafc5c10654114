use crate::error::SeatplanError;
use crate::plan::{Seat, SeatPlan};

/// Literal token rendered for a vacant seat, never a blank field.
pub const VACANT_TOKEN: &str = "(empty)";

/// Minimum cell label width in the export.
const MIN_LABEL_WIDTH: usize = 8;

const LEGEND: &str = "\n============================\n\
Legend:\n\
1. ○ = assigned seat | □ = empty seat | ⭐ = your seat\n\
2. Look up your seat with a fuzzy name search in the online system\n\
3. Seats are assigned at random; if adjusted, the posted copy prevails\n\
============================\n";

/// Serialize a plan to fixed-width tabular text: a banner line with the
/// caller-supplied timestamp, a column-index header, one `Row N:` line per
/// row with ` | `-separated cell labels, and a static legend block.
///
/// Deterministic given its inputs; the timestamp is supplied by the caller
/// so no clock is sampled here. Row and column order match the plan
/// verbatim. An occupant name that cannot survive the round trip (one
/// equal to the vacant token, containing the ` | ` delimiter, or spanning
/// lines) fails with [`SeatplanError::Config`] rather than producing
/// ambiguous text.
pub fn export_plan(plan: &SeatPlan, timestamp: &str) -> Result<String, SeatplanError> {
    check_exportable(plan)?;
    let width = label_width(plan);
    let mut out = String::new();
    out.push_str(&format!(
        "===== Meeting Seat Chart (generated: {timestamp}) =====\n\n"
    ));
    let header: Vec<String> = (1..=plan.cols())
        .map(|col| format!("{:<width$}", col))
        .collect();
    out.push_str(&format!("Cols:  {}\n", header.join(" | ")));
    for row in 0..plan.rows() {
        let cells: Vec<String> = (0..plan.cols())
            .map(|col| format!("{:<width$}", label(plan.seat(row, col))))
            .collect();
        out.push_str(&format!("Row {}: {}\n", row + 1, cells.join(" | ")));
    }
    out.push_str(LEGEND);
    Ok(out)
}

fn check_exportable(plan: &SeatPlan) -> Result<(), SeatplanError> {
    for name in plan.seats().filter_map(Seat::name) {
        if name == VACANT_TOKEN {
            return Err(SeatplanError::Config(format!(
                "occupant name '{name}' collides with the vacant token"
            )));
        }
        if name.contains(" | ") || name.contains('\n') || name.contains('\r') {
            return Err(SeatplanError::Config(format!(
                "occupant name '{name}' contains an export delimiter"
            )));
        }
    }
    Ok(())
}

/// Reconstruct a plan from export text by splitting on the documented
/// delimiters. The banner, column header and legend are ignored.
pub fn parse_export(text: &str) -> Result<SeatPlan, SeatplanError> {
    let mut rows: Vec<Vec<Seat>> = Vec::new();
    for line in text.lines() {
        let line = line.trim_end();
        if let Some(rest) = line.strip_prefix("Row ") {
            let (index, cells) = rest.split_once(':').ok_or_else(|| {
                SeatplanError::Parse(format!("row line missing ':': {line}"))
            })?;
            let index: usize = index
                .trim()
                .parse()
                .map_err(|_| SeatplanError::Parse(format!("bad row label: {line}")))?;
            if index != rows.len() + 1 {
                return Err(SeatplanError::Parse(format!(
                    "row {} out of order, expected row {}",
                    index,
                    rows.len() + 1
                )));
            }
            let seats = cells
                .split(" | ")
                .map(|cell| {
                    let cell = cell.trim();
                    if cell == VACANT_TOKEN {
                        Seat::Vacant
                    } else {
                        Seat::Occupied(cell.to_string())
                    }
                })
                .collect();
            rows.push(seats);
        } else if line.starts_with("=====") && !rows.is_empty() {
            // Legend separator ends the seat rows.
            break;
        }
    }
    if rows.is_empty() {
        return Err(SeatplanError::Parse("no seat rows found".into()));
    }
    SeatPlan::from_rows(rows)
}

fn label(seat: &Seat) -> &str {
    match seat {
        Seat::Occupied(name) => name,
        Seat::Vacant => VACANT_TOKEN,
    }
}

fn label_width(plan: &SeatPlan) -> usize {
    plan.seats()
        .filter_map(Seat::name)
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_LABEL_WIDTH)
}
