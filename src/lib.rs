//! # Demostats: Embedded Demographic Analytics Core
//!
//! Demostats transforms immutable person/country records into descriptive
//! statistics: percentage distributions, a bias-corrected Cramer's V
//! association measure for nominal attributes, and email local-part pattern
//! mining.
//!
//! The core is pure, synchronous, and stateless: every report is computed
//! from an in-memory snapshot handed in by a data-access collaborator
//! ([`source::RecordSource`]), touches no shared mutable state, and signals
//! "no result" conditions ([`Error::InsufficientData`],
//! [`Error::DegenerateTable`]) distinctly instead of raising generic errors.
//!
//! ## Example Usage
//!
//! ```rust
//! use demostats::report;
//! use demostats::Person;
//!
//! let records = vec![
//!     Person::new("Ada", "Lovelace", "ada.lovelace@example.com", "Female", "10.0.0.1", "GB"),
//!     Person::new("Alan", "Turing", "aturing@example.com", "Male", "192.168.0.7", "GB"),
//! ];
//!
//! let genders = report::gender_distribution(&records)?;
//! assert_eq!(genders.len(), 2);
//! assert!((genders[0].percentage - 50.0).abs() < 1e-9);
//!
//! let patterns = report::common_email_patterns(&records)?;
//! assert_eq!(patterns, vec!["first.last@domain", "flast@domain"]);
//! # Ok::<(), demostats::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod correlation;
pub mod distribution;
pub mod error;
pub mod pattern;
pub mod record;
pub mod report;
pub mod source;
pub mod tabulate;
pub mod validate;

pub use error::{Error, Result};
pub use record::{IpClass, Person};
