//! Frequency and contingency tables
//!
//! The tabulator turns a finite sequence of records into either a 1-D
//! frequency table (for distributions) or a 2-D contingency table (for the
//! association measure). Key closures are fallible so that precondition
//! violations in record fields propagate as [`Error::InvalidInput`] instead
//! of panicking mid-aggregation.
//!
//! Neither table guarantees any category ordering on its own; ordering is
//! imposed downstream by the distribution reporter.

use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

use crate::{Error, Result};

/// Mapping from a category value to a non-negative count.
///
/// Invariant: the sum of counts equals the number of tallied records;
/// pre-seeded zero-count categories contribute nothing to the total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FxHashMap<String, u64>,
}

impl FrequencyTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table pre-seeded with zero-count categories.
    ///
    /// Used for fixed-bucket reports (IP classes) where every bucket appears
    /// in the output even when unobserved.
    #[must_use]
    pub fn with_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let counts = categories.into_iter().map(|c| (c.into(), 0)).collect();
        Self { counts }
    }

    /// Count occurrences of `key(record)` across `records`.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `key`.
    pub fn tally<R, K>(records: &[R], key: K) -> Result<Self>
    where
        K: Fn(&R) -> Result<String>,
    {
        let mut table = Self::new();
        table.tally_records(records, key)?;
        Ok(table)
    }

    /// Add `key(record)` counts from `records` to this table.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `key`. Counts added before the
    /// failing record are retained; callers treat the table as discarded on
    /// error.
    pub fn tally_records<R, K>(&mut self, records: &[R], key: K) -> Result<()>
    where
        K: Fn(&R) -> Result<String>,
    {
        for record in records {
            self.add(key(record)?);
        }
        Ok(())
    }

    /// Increment the count for a category.
    pub fn add(&mut self, category: impl Into<String>) {
        *self.counts.entry(category.into()).or_insert(0) += 1;
    }

    /// Count for a category (0 if absent).
    #[must_use]
    pub fn count(&self, category: &str) -> u64 {
        self.counts.get(category).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct categories (including pre-seeded zero counts).
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table has no categories at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (category, count) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

/// 2-D cross-tabulation of joint category counts for two categorical
/// attributes.
///
/// Row and column category sets are the distinct observed values of their
/// respective attributes, held sorted; cells are stored as a dense row-major
/// matrix. Invariant: the total equals the number of joint observations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContingencyTable {
    row_categories: Vec<String>,
    col_categories: Vec<String>,
    cells: Vec<u64>,
}

impl ContingencyTable {
    /// Count joint occurrences of `(row_key(record), col_key(record))`.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by either key closure.
    pub fn cross_tally<R, KR, KC>(records: &[R], row_key: KR, col_key: KC) -> Result<Self>
    where
        KR: Fn(&R) -> Result<String>,
        KC: Fn(&R) -> Result<String>,
    {
        let mut pairs = Vec::with_capacity(records.len());
        for record in records {
            pairs.push((row_key(record)?, col_key(record)?));
        }

        let row_set: BTreeSet<&str> = pairs.iter().map(|(r, _)| r.as_str()).collect();
        let col_set: BTreeSet<&str> = pairs.iter().map(|(_, c)| c.as_str()).collect();
        let row_categories: Vec<String> = row_set.into_iter().map(String::from).collect();
        let col_categories: Vec<String> = col_set.into_iter().map(String::from).collect();

        let row_index: FxHashMap<&str, usize> = row_categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), i))
            .collect();
        let col_index: FxHashMap<&str, usize> = col_categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), i))
            .collect();

        let mut cells = vec![0u64; row_categories.len() * col_categories.len()];
        let width = col_categories.len();
        for (row, col) in &pairs {
            cells[row_index[row.as_str()] * width + col_index[col.as_str()]] += 1;
        }

        Ok(Self {
            row_categories,
            col_categories,
            cells,
        })
    }

    /// Build a table directly from labeled cell counts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `cells` is not
    /// `row_categories.len()` rows of `col_categories.len()` counts each.
    pub fn from_rows(
        row_categories: Vec<String>,
        col_categories: Vec<String>,
        cells: Vec<Vec<u64>>,
    ) -> Result<Self> {
        if cells.len() != row_categories.len()
            || cells.iter().any(|row| row.len() != col_categories.len())
        {
            return Err(Error::InvalidInput(format!(
                "cell matrix must be {}x{}",
                row_categories.len(),
                col_categories.len()
            )));
        }
        Ok(Self {
            row_categories,
            col_categories,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    /// Number of distinct row categories.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.row_categories.len()
    }

    /// Number of distinct column categories.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.col_categories.len()
    }

    /// Total number of joint observations.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.cells.iter().sum()
    }

    /// Count at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of bounds.
    #[must_use]
    pub fn count_at(&self, row: usize, col: usize) -> u64 {
        self.cells[row * self.col_categories.len() + col]
    }

    /// Per-row marginal totals.
    #[must_use]
    pub fn row_totals(&self) -> Vec<u64> {
        self.cells
            .chunks(self.col_categories.len().max(1))
            .map(|row| row.iter().sum())
            .collect()
    }

    /// Per-column marginal totals.
    #[must_use]
    pub fn col_totals(&self) -> Vec<u64> {
        let width = self.col_categories.len();
        let mut totals = vec![0u64; width];
        for (i, &cell) in self.cells.iter().enumerate() {
            totals[i % width] += cell;
        }
        totals
    }

    /// Sorted distinct row categories.
    #[must_use]
    pub fn row_categories(&self) -> &[String] {
        &self.row_categories
    }

    /// Sorted distinct column categories.
    #[must_use]
    pub fn col_categories(&self) -> &[String] {
        &self.col_categories
    }
}
