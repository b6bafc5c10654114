use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeatplanError {
    /// Invalid seating configuration: non-positive dimensions, capacity
    /// below the participant count, or a ragged grid.
    #[error("config error: {0}")]
    Config(String),

    /// Malformed export text handed to the parser.
    #[error("parse error: {0}")]
    Parse(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A match coordinate failed its bounds check during marking. This is
    /// a logic defect, not a user input problem.
    #[error("internal error: {0}")]
    Internal(String),
}
