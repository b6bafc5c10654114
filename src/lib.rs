//! Core logic for randomized meeting seat assignment and lookup.
//!
//! A validated configuration is turned into a randomly shuffled
//! [`SeatPlan`], projected into a symbolic [`DisplayGrid`] for
//! presentation, queried with fuzzy (substring) name [`search`], and
//! serialized to a plain-text chart with [`export_plan`]. All operations
//! are pure computations over in-memory data; rendering and file plumbing
//! belong to the hosting layer.

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod io_utils;
pub mod plan;
pub mod search;
pub mod session;

pub use config::SeatingConfig;
pub use display::{DisplayGrid, SeatSymbol};
pub use error::SeatplanError;
pub use export::{export_plan, parse_export, VACANT_TOKEN};
pub use plan::{Seat, SeatPlan};
pub use search::{search, SearchOutcome, SeatMatch};
pub use session::SeatingSession;
