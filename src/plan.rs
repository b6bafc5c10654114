use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::SeatingConfig;
use crate::error::SeatplanError;

/// One grid cell: occupied by a participant or vacant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seat {
    Occupied(String),
    Vacant,
}

impl Seat {
    pub fn is_occupied(&self) -> bool {
        matches!(self, Seat::Occupied(_))
    }

    /// Occupant name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Seat::Occupied(name) => Some(name),
            Seat::Vacant => None,
        }
    }
}

/// The authoritative rows x cols randomized assignment.
///
/// Immutable once constructed. Reconfiguration builds a fresh plan; there
/// is no incremental update path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatPlan {
    rows: usize,
    cols: usize,
    /// Row-major cell storage, exactly `rows * cols` entries.
    cells: Vec<Seat>,
}

impl SeatPlan {
    /// Allocate a randomized plan from a validated configuration, seeding
    /// from system entropy. Fails with [`SeatplanError::Config`] when the
    /// configuration is invalid; allocation itself never fails.
    pub fn allocate(config: &SeatingConfig) -> Result<Self, SeatplanError> {
        Self::allocate_with_rng(config, &mut rand::thread_rng())
    }

    /// Allocate with a caller-supplied random source, for reproducible
    /// charts and deterministic tests.
    pub fn allocate_with_rng<R: Rng + ?Sized>(
        config: &SeatingConfig,
        rng: &mut R,
    ) -> Result<Self, SeatplanError> {
        config.validate()?;
        let mut cells: Vec<Seat> = config
            .normalized_names()
            .into_iter()
            .map(Seat::Occupied)
            .collect();
        cells.resize(config.capacity(), Seat::Vacant);
        // Fisher-Yates: every permutation equally likely.
        cells.shuffle(rng);
        Ok(Self {
            rows: config.rows,
            cols: config.cols,
            cells,
        })
    }

    /// Build a plan from explicit rows. Rectangularity is checked here,
    /// once; a ragged grid is fatal and never auto-repaired.
    pub fn from_rows(rows: Vec<Vec<Seat>>) -> Result<Self, SeatplanError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, |r| r.len());
        if row_count == 0 || cols == 0 {
            return Err(SeatplanError::Config("grid must be non-empty".into()));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(SeatplanError::Config(format!(
                    "grid is not rectangular: row {} has {} cells, expected {}",
                    i + 1,
                    row.len(),
                    cols
                )));
            }
        }
        Ok(Self {
            rows: row_count,
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at 0-indexed coordinates. Panics when out of range.
    pub fn seat(&self, row: usize, col: usize) -> &Seat {
        assert!(row < self.rows && col < self.cols, "seat index out of range");
        &self.cells[row * self.cols + col]
    }

    /// All cells in row-major order.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.cells.iter()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_occupied()).count()
    }
}
