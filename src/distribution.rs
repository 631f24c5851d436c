//! Percentage distributions with deterministic ordering
//!
//! Turns frequency tables into ordered `(category, count, percentage)` rows.
//! The tabulator guarantees no ordering, so it is imposed here: count
//! descending, then category ascending as the tiebreak. The grouped variant
//! computes each row's percentage against its primary group's subtotal, not
//! the grand total.

use serde::Serialize;

use crate::tabulate::{ContingencyTable, FrequencyTable};
use crate::{Error, Result};

/// One row of a percentage distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionEntry {
    /// Category value
    pub category: String,
    /// Occurrences of the category
    pub count: u64,
    /// Share of the total, in percent
    pub percentage: f64,
}

/// One row of a grouped distribution (percentage relative to the group).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedDistributionEntry {
    /// Primary grouping value
    pub group: String,
    /// Secondary category value
    pub category: String,
    /// Occurrences of the (group, category) pair
    pub count: u64,
    /// Share of the group's subtotal, in percent
    pub percentage: f64,
}

/// Convert a frequency table into an ordered percentage distribution.
///
/// Rows are ordered by count descending, then category ascending. Pre-seeded
/// zero-count categories are reported with percentage 0.
///
/// # Errors
///
/// Returns [`Error::InsufficientData`] if the table's total count is zero
/// (never divides by zero).
#[allow(clippy::cast_precision_loss)]
pub fn to_distribution(table: &FrequencyTable) -> Result<Vec<DistributionEntry>> {
    let total = table.total();
    if total == 0 {
        return Err(Error::InsufficientData(
            "frequency table has no observations".to_string(),
        ));
    }

    let mut entries: Vec<DistributionEntry> = table
        .iter()
        .map(|(category, count)| DistributionEntry {
            category: category.to_string(),
            count,
            percentage: (count as f64) / (total as f64) * 100.0,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.category.cmp(&b.category))
    });
    Ok(entries)
}

/// Cross-tabulate records by two keys and report each pair's share of its
/// PRIMARY group's subtotal.
///
/// Rows are ordered by group ascending, then category ascending; unobserved
/// pairs are omitted.
///
/// # Errors
///
/// - Propagates key closure errors.
/// - Returns [`Error::InsufficientData`] if `records` is empty.
#[allow(clippy::cast_precision_loss)]
pub fn grouped_distribution<R, KG, KC>(
    records: &[R],
    group_key: KG,
    category_key: KC,
) -> Result<Vec<GroupedDistributionEntry>>
where
    KG: Fn(&R) -> Result<String>,
    KC: Fn(&R) -> Result<String>,
{
    let table = ContingencyTable::cross_tally(records, group_key, category_key)?;
    if table.total() == 0 {
        return Err(Error::InsufficientData(
            "no observations to group".to_string(),
        ));
    }

    let group_totals = table.row_totals();
    let mut entries = Vec::new();
    for (i, group) in table.row_categories().iter().enumerate() {
        for (j, category) in table.col_categories().iter().enumerate() {
            let count = table.count_at(i, j);
            if count == 0 {
                continue;
            }
            entries.push(GroupedDistributionEntry {
                group: group.clone(),
                category: category.clone(),
                count,
                percentage: (count as f64) / (group_totals[i] as f64) * 100.0,
            });
        }
    }
    Ok(entries)
}
