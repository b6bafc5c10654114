use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SeatplanError;

/// Seating parameters supplied once per session.
///
/// A new configuration always produces a new, independent seat plan;
/// nothing is updated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingConfig {
    /// Number of participants to seat.
    pub participants: usize,
    /// Grid rows.
    pub rows: usize,
    /// Grid columns.
    pub cols: usize,
    /// Raw participant names in supply order. Entries are trimmed and
    /// deduplicated before allocation; oversupply is truncated and any
    /// shortfall is padded with generated placeholder names.
    #[serde(default)]
    pub names: Vec<String>,
}

impl SeatingConfig {
    pub fn new(participants: usize, rows: usize, cols: usize, names: Vec<String>) -> Self {
        Self {
            participants,
            rows,
            cols,
            names,
        }
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SeatplanError> {
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data)
            .map_err(|e| SeatplanError::Parse(format!("invalid config JSON: {e}")))
    }

    /// Total seat count of the grid. Only meaningful after [`validate`]
    /// has confirmed the product does not overflow.
    ///
    /// [`validate`]: SeatingConfig::validate
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Check the construction invariants. Violations are hard failures,
    /// not retryable conditions.
    pub fn validate(&self) -> Result<(), SeatplanError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SeatplanError::Config(format!(
                "rows and cols must be positive, got {} rows and {} cols",
                self.rows, self.cols
            )));
        }
        if self.participants == 0 {
            return Err(SeatplanError::Config(
                "participant count must be positive".into(),
            ));
        }
        let capacity = self.rows.checked_mul(self.cols).ok_or_else(|| {
            SeatplanError::Config(format!(
                "seat capacity {}x{} overflows",
                self.rows, self.cols
            ))
        })?;
        if capacity < self.participants {
            return Err(SeatplanError::Config(format!(
                "not enough seats: capacity {} ({} rows x {} cols) for {} participants",
                capacity, self.rows, self.cols, self.participants
            )));
        }
        Ok(())
    }

    /// Build the normalized name list feeding allocation: trim each raw
    /// name, drop empties, keep the first occurrence of duplicates,
    /// truncate to the participant count and pad any shortfall with
    /// `Participant N` placeholders, 1-indexed from the first padded
    /// slot. A placeholder index that collides with a supplied name is
    /// skipped so the list stays unique.
    pub fn normalized_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for raw in &self.names {
            let clean = raw.trim();
            if !clean.is_empty() && !names.iter().any(|n| n == clean) {
                names.push(clean.to_string());
            }
        }
        names.truncate(self.participants);
        let mut next = names.len() + 1;
        while names.len() < self.participants {
            let placeholder = format!("Participant {next}");
            if !names.iter().any(|n| n == &placeholder) {
                names.push(placeholder);
            }
            next += 1;
        }
        names
    }
}
