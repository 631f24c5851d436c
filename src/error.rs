//! Error types for demostats
//!
//! The three statistical conditions (`InsufficientData`, `DegenerateTable`,
//! `InvalidInput`) are signaled distinctly so callers can map each to a
//! user-facing "no result" versus a hard error, instead of collapsing them
//! into one generic failure.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Demostats error types
#[derive(Error, Debug)]
pub enum Error {
    /// No records, or too few for a statistic to be meaningful
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// Correlation undefined due to contingency table shape
    #[error("degenerate contingency table: {0}")]
    DegenerateTable(String),

    /// Malformed record fields reaching the core (upstream precondition violation)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// IO error (dataset loading)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error (dataset loading)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_distinct() {
        let insufficient = Error::InsufficientData("no records".to_string());
        let degenerate = Error::DegenerateTable("single column".to_string());
        let invalid = Error::InvalidInput("email has no '@'".to_string());

        assert!(insufficient.to_string().starts_with("insufficient data"));
        assert!(degenerate
            .to_string()
            .starts_with("degenerate contingency table"));
        assert!(invalid.to_string().starts_with("invalid input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
