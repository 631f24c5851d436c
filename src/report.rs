//! Report surface: one pure function per statistic
//!
//! Every function takes an already-fetched snapshot of records; the core never
//! queries the store itself. An empty snapshot signals
//! [`Error::InsufficientData`] up front so callers can render "no result"
//! instead of a zero-row report.

use serde::Serialize;

use crate::correlation::cramers_v;
use crate::distribution::{
    grouped_distribution, to_distribution, DistributionEntry, GroupedDistributionEntry,
};
use crate::record::{IpClass, Person};
use crate::tabulate::{ContingencyTable, FrequencyTable};
use crate::{Error, Result};

/// Per-category counts without percentages, ordered by count descending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// Category value
    pub category: String,
    /// Occurrences of the category
    pub count: u64,
}

/// The most common email domains and the frequency they share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainReport {
    /// Every domain tied at the maximum frequency, ascending
    pub domains: Vec<String>,
    /// The shared maximum frequency
    pub count: u64,
}

fn ensure_records(records: &[Person]) -> Result<()> {
    if records.is_empty() {
        return Err(Error::InsufficientData(
            "no records in snapshot".to_string(),
        ));
    }
    Ok(())
}

/// Distribution of people over genders.
///
/// # Errors
///
/// Returns [`Error::InsufficientData`] for an empty snapshot.
pub fn gender_distribution(records: &[Person]) -> Result<Vec<DistributionEntry>> {
    ensure_records(records)?;
    let table = FrequencyTable::tally(records, |p| Ok(p.gender().to_string()))?;
    to_distribution(&table)
}

/// Distribution of IP addresses over the five legacy classes.
///
/// All five buckets are reported, including unobserved ones at 0%.
///
/// # Errors
///
/// - [`Error::InsufficientData`] for an empty snapshot.
/// - [`Error::InvalidInput`] if a stored address does not parse as IPv4.
pub fn ip_class_distribution(records: &[Person]) -> Result<Vec<DistributionEntry>> {
    ensure_records(records)?;
    let mut table = FrequencyTable::with_categories(IpClass::ALL.iter().map(|c| c.label()));
    table.tally_records(records, |p| {
        Ok(IpClass::of_address(p.ip_address())?.label().to_string())
    })?;
    to_distribution(&table)
}

/// Number of people per country, ordered by count descending (ties by country
/// code ascending).
///
/// # Errors
///
/// Returns [`Error::InsufficientData`] for an empty snapshot.
pub fn country_counts(records: &[Person]) -> Result<Vec<CategoryCount>> {
    ensure_records(records)?;
    let table = FrequencyTable::tally(records, |p| Ok(p.country().to_string()))?;

    let mut counts: Vec<CategoryCount> = table
        .iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.category.cmp(&b.category))
    });
    Ok(counts)
}

/// The records whose country matches `country` (case-insensitive).
///
/// # Errors
///
/// Returns [`Error::InsufficientData`] for an empty snapshot or when no
/// record matches.
pub fn people_from_country<'a>(records: &'a [Person], country: &str) -> Result<Vec<&'a Person>> {
    ensure_records(records)?;
    let wanted = country.to_uppercase();
    let matches: Vec<&Person> = records
        .iter()
        .filter(|p| p.country().to_uppercase() == wanted)
        .collect();
    if matches.is_empty() {
        return Err(Error::InsufficientData(format!(
            "no records for country '{wanted}'"
        )));
    }
    Ok(matches)
}

/// The email domains tied at the maximum frequency, with that frequency.
///
/// # Errors
///
/// - [`Error::InsufficientData`] for an empty snapshot.
/// - [`Error::InvalidInput`] if a stored email has no `@`.
pub fn most_common_domains(records: &[Person]) -> Result<DomainReport> {
    ensure_records(records)?;
    let table = FrequencyTable::tally(records, |p| Ok(p.email_domain()?.to_string()))?;

    let max_count = table.iter().map(|(_, count)| count).max().unwrap_or(0);
    let mut domains: Vec<String> = table
        .iter()
        .filter(|&(_, count)| count == max_count)
        .map(|(domain, _)| domain.to_string())
        .collect();
    domains.sort_unstable();

    Ok(DomainReport {
        domains,
        count: max_count,
    })
}

/// Shared path for every nominal pairing: cross-tabulate, then Cramer's V.
fn nominal_association<KR, KC>(records: &[Person], row_key: KR, col_key: KC) -> Result<f64>
where
    KR: Fn(&Person) -> Result<String>,
    KC: Fn(&Person) -> Result<String>,
{
    ensure_records(records)?;
    let table = ContingencyTable::cross_tally(records, row_key, col_key)?;
    cramers_v(&table)
}

/// Association between email domain and country (bias-corrected Cramer's V).
///
/// # Errors
///
/// - [`Error::InsufficientData`] for an empty snapshot or a single
///   observation.
/// - [`Error::DegenerateTable`] when either attribute has one distinct value.
/// - [`Error::InvalidInput`] if a stored email has no `@`.
pub fn country_domain_correlation(records: &[Person]) -> Result<f64> {
    nominal_association(
        records,
        |p| Ok(p.email_domain()?.to_string()),
        |p| Ok(p.country().to_string()),
    )
}

/// Association between email domain and gender (bias-corrected Cramer's V).
///
/// # Errors
///
/// Same conditions as [`country_domain_correlation`].
pub fn gender_domain_correlation(records: &[Person]) -> Result<f64> {
    nominal_association(
        records,
        |p| Ok(p.email_domain()?.to_string()),
        |p| Ok(p.gender().to_string()),
    )
}

/// Association between gender and country (bias-corrected Cramer's V).
///
/// # Errors
///
/// - [`Error::InsufficientData`] for an empty snapshot or a single
///   observation.
/// - [`Error::DegenerateTable`] when either attribute has one distinct value.
pub fn gender_country_correlation(records: &[Person]) -> Result<f64> {
    nominal_association(
        records,
        |p| Ok(p.gender().to_string()),
        |p| Ok(p.country().to_string()),
    )
}

/// The most common email local-part patterns, rendered `"<label>@domain"`.
///
/// Every label tied at the maximum count is reported, in precedence order.
/// If no record matches any pattern the list is empty.
///
/// # Errors
///
/// - [`Error::InsufficientData`] for an empty snapshot.
/// - [`Error::InvalidInput`] if a stored email has no `@`.
pub fn common_email_patterns(records: &[Person]) -> Result<Vec<String>> {
    ensure_records(records)?;

    let mut triples = Vec::with_capacity(records.len());
    for person in records {
        triples.push((
            person.first_name(),
            person.last_name(),
            person.email_local_part()?,
        ));
    }

    Ok(crate::pattern::most_common_patterns(triples)
        .into_iter()
        .map(|pattern| format!("{pattern}@domain"))
        .collect())
}

/// Gender distribution within each country: every row's percentage is taken
/// against its country's subtotal, not the grand total.
///
/// Rows are ordered by country ascending, then gender ascending.
///
/// # Errors
///
/// Returns [`Error::InsufficientData`] for an empty snapshot.
pub fn gender_distribution_by_country(
    records: &[Person],
) -> Result<Vec<GroupedDistributionEntry>> {
    ensure_records(records)?;
    grouped_distribution(
        records,
        |p| Ok(p.country().to_string()),
        |p| Ok(p.gender().to_string()),
    )
}
