use crate::display::{DisplayGrid, SeatSymbol};
use crate::error::SeatplanError;
use crate::plan::{Seat, SeatPlan};

/// One hit: 1-indexed coordinates plus the occupant's full name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatMatch {
    pub row: usize,
    pub col: usize,
    pub name: String,
}

/// Outcome of a seat lookup. Empty and missed queries are normal
/// control flow, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query was empty after trimming; callers typically prompt for input.
    EmptyQuery,
    /// No occupant name contains the query.
    NoMatch,
    /// One or more hits, with the base grid re-marked at every hit.
    /// A query shared by several names (e.g. a common surname) yields
    /// several matches; callers must not assume single-seat resolution.
    Matches {
        matches: Vec<SeatMatch>,
        marked: DisplayGrid,
    },
}

/// Fuzzy seat lookup: case-sensitive substring containment against
/// occupant names, scanning row-major with 1-indexed coordinates.
///
/// Stateless read; neither the plan nor the base grid is mutated. The
/// marked grid is a fresh copy each call.
pub fn search(
    plan: &SeatPlan,
    base: &DisplayGrid,
    query: &str,
) -> Result<SearchOutcome, SeatplanError> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(SearchOutcome::EmptyQuery);
    }

    let mut matches = Vec::new();
    for row in 0..plan.rows() {
        for col in 0..plan.cols() {
            if let Seat::Occupied(name) = plan.seat(row, col) {
                if name.contains(query) {
                    matches.push(SeatMatch {
                        row: row + 1,
                        col: col + 1,
                        name: name.clone(),
                    });
                }
            }
        }
    }
    if matches.is_empty() {
        return Ok(SearchOutcome::NoMatch);
    }

    let mut marked = base.clone();
    for m in &matches {
        // The scan produced these coordinates, but the 1-indexed to
        // 0-indexed translation is still bounds-checked rather than
        // trusted: a miss here is a logic defect, never wraparound.
        if m.row == 0 || m.row > marked.rows() || m.col == 0 || m.col > marked.cols() {
            return Err(SeatplanError::Internal(format!(
                "match coordinate out of range: row {}, col {} on {}x{} grid",
                m.row,
                m.col,
                marked.rows(),
                marked.cols()
            )));
        }
        marked.set(m.row - 1, m.col - 1, SeatSymbol::Marked);
    }
    Ok(SearchOutcome::Matches { matches, marked })
}
