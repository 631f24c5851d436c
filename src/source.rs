//! Data-access collaborator: record sources
//!
//! The statistics core never queries a store; it consumes snapshots fetched
//! through a [`RecordSource`] passed in explicitly by the caller. The
//! in-memory implementation also owns the ingest path: validation,
//! canonicalization, and the explicit person/country join when seeding from
//! CSV exports.
//!
//! This is the only module that logs; the core itself stays silent.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::{debug, info};

use crate::record::Person;
use crate::validate::RecordValidator;
use crate::{Error, Result};

/// A collaborator that can produce a snapshot of all stored records.
pub trait RecordSource {
    /// Fetch a snapshot of every record, person joined with country.
    ///
    /// # Errors
    ///
    /// Implementations surface their own retrieval failures.
    fn fetch_all(&self) -> Result<Vec<Person>>;
}

/// In-memory record store.
///
/// Holds plain immutable value records; the 1-to-1 person/country relation is
/// resolved at ingest time, not kept as an object graph.
#[derive(Debug)]
pub struct MemorySource {
    people: Vec<Person>,
    validator: RecordValidator,
}

/// One row of the persons CSV export.
#[derive(Debug, Deserialize)]
struct PersonRow {
    id: u64,
    first_name: String,
    last_name: String,
    email: String,
    gender: String,
    ip_address: String,
}

/// One row of the countries CSV export. The row's own id column is unused.
#[derive(Debug, Deserialize)]
struct CountryRow {
    person_id: u64,
    country: String,
}

impl MemorySource {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            people: Vec::new(),
            validator: RecordValidator::new(),
        }
    }

    /// Validate a record, canonicalize it, and store it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] naming the offending field when
    /// validation fails; nothing is stored in that case.
    pub fn insert(&mut self, person: Person) -> Result<()> {
        self.validator.validate(&person)?;
        self.people.push(person.normalized());
        Ok(())
    }

    /// Seed a store from the two CSV exports (`persons.csv` and
    /// `countries.csv`), joining country rows to person rows by `person_id`.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] / [`Error::Csv`] for unreadable or malformed files.
    /// - [`Error::InvalidInput`] if a person has no country row (the relation
    ///   is 1-to-1) or any joined record fails validation.
    pub fn load_csv(
        persons_path: impl AsRef<Path>,
        countries_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let persons_path = persons_path.as_ref();
        let countries_path = countries_path.as_ref();
        debug!(?persons_path, ?countries_path, "loading csv exports");

        let mut person_rows = Vec::new();
        let mut reader = csv::Reader::from_path(persons_path)?;
        for row in reader.deserialize::<PersonRow>() {
            person_rows.push(row?);
        }

        let mut countries: FxHashMap<u64, String> = FxHashMap::default();
        let mut reader = csv::Reader::from_path(countries_path)?;
        for row in reader.deserialize::<CountryRow>() {
            let row = row?;
            countries.insert(row.person_id, row.country);
        }

        let mut source = Self::new();
        for row in person_rows {
            let country = countries.remove(&row.id).ok_or_else(|| {
                Error::InvalidInput(format!("person {} has no country row", row.id))
            })?;
            source.insert(Person::new(
                row.first_name,
                row.last_name,
                row.email,
                row.gender,
                row.ip_address,
                country,
            ))?;
        }

        info!(people = source.len(), "loaded person records");
        Ok(source)
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSource for MemorySource {
    fn fetch_all(&self) -> Result<Vec<Person>> {
        Ok(self.people.clone())
    }
}
