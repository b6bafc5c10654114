use rand::Rng;

use crate::config::SeatingConfig;
use crate::display::DisplayGrid;
use crate::error::SeatplanError;
use crate::export::export_plan;
use crate::plan::SeatPlan;
use crate::search::{search, SearchOutcome};

/// One user-facing seating session: the current configuration, its seat
/// plan and the cached base display grid.
///
/// Owned exclusively by its host; independent sessions share nothing, so
/// no locking is involved. Searches and exports are read-only.
#[derive(Debug, Clone)]
pub struct SeatingSession {
    config: SeatingConfig,
    plan: SeatPlan,
    display: DisplayGrid,
}

impl SeatingSession {
    pub fn new(config: SeatingConfig) -> Result<Self, SeatplanError> {
        let plan = SeatPlan::allocate(&config)?;
        let display = DisplayGrid::from_plan(&plan);
        Ok(Self {
            config,
            plan,
            display,
        })
    }

    /// Session with a caller-supplied random source.
    pub fn with_rng<R: Rng + ?Sized>(
        config: SeatingConfig,
        rng: &mut R,
    ) -> Result<Self, SeatplanError> {
        let plan = SeatPlan::allocate_with_rng(&config, rng)?;
        let display = DisplayGrid::from_plan(&plan);
        Ok(Self {
            config,
            plan,
            display,
        })
    }

    /// Replace the whole plan/grid pair from a new configuration. The
    /// replacement is built first and swapped in whole, so a failure
    /// leaves the session untouched and no partial state is observable.
    pub fn reconfigure(&mut self, config: SeatingConfig) -> Result<(), SeatplanError> {
        let plan = SeatPlan::allocate(&config)?;
        let display = DisplayGrid::from_plan(&plan);
        self.config = config;
        self.plan = plan;
        self.display = display;
        Ok(())
    }

    pub fn config(&self) -> &SeatingConfig {
        &self.config
    }

    pub fn plan(&self) -> &SeatPlan {
        &self.plan
    }

    /// Base display grid, derived once per (re)configuration.
    pub fn display(&self) -> &DisplayGrid {
        &self.display
    }

    pub fn search(&self, query: &str) -> Result<SearchOutcome, SeatplanError> {
        search(&self.plan, &self.display, query)
    }

    pub fn export(&self, timestamp: &str) -> Result<String, SeatplanError> {
        export_plan(&self.plan, timestamp)
    }
}
