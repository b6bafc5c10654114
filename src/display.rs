use crate::plan::SeatPlan;

/// Symbolic state of one cell in the display projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatSymbol {
    Occupied,
    Vacant,
    /// Only produced by a search result, never by the base projection.
    Marked,
}

impl SeatSymbol {
    /// Glyph used by text hosting layers.
    pub fn glyph(self) -> char {
        match self {
            SeatSymbol::Occupied => '○',
            SeatSymbol::Vacant => '□',
            SeatSymbol::Marked => '⭐',
        }
    }
}

/// Occupied/vacant/marked projection of a [`SeatPlan`], structurally
/// congruent to it. Derived, never independently mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayGrid {
    rows: usize,
    cols: usize,
    cells: Vec<SeatSymbol>,
}

impl DisplayGrid {
    /// Pure projection: `Occupied` where the seat is occupied, `Vacant`
    /// otherwise.
    pub fn from_plan(plan: &SeatPlan) -> Self {
        let cells = plan
            .seats()
            .map(|seat| {
                if seat.is_occupied() {
                    SeatSymbol::Occupied
                } else {
                    SeatSymbol::Vacant
                }
            })
            .collect();
        Self {
            rows: plan.rows(),
            cols: plan.cols(),
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Symbol at 0-indexed coordinates. Panics when out of range.
    pub fn symbol(&self, row: usize, col: usize) -> SeatSymbol {
        assert!(row < self.rows && col < self.cols, "symbol index out of range");
        self.cells[row * self.cols + col]
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|s| **s == SeatSymbol::Occupied)
            .count()
    }

    /// Overwrite one cell. Callers must have bounds-checked the
    /// coordinates already.
    pub(crate) fn set(&mut self, row: usize, col: usize, symbol: SeatSymbol) {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = symbol;
    }

    /// Plain-text rendering with a column-number header and `Row N:`
    /// labels, for text hosting layers.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let header: Vec<String> = (1..=self.cols).map(|c| c.to_string()).collect();
        out.push_str(&format!("Cols:  {}\n", header.join(" ")));
        for row in 0..self.rows {
            let cells: Vec<String> = (0..self.cols)
                .map(|col| self.symbol(row, col).glyph().to_string())
                .collect();
            out.push_str(&format!("Row {}: {}\n", row + 1, cells.join(" ")));
        }
        out
    }
}
