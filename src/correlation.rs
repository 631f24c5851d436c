//! Bias-corrected Cramer's V association measure
//!
//! One shared routine serves every nominal-variable pairing the report layer
//! asks for (country x domain, gender x domain, gender x country); the pairing
//! itself is parameterized upstream by the tabulator's key closures.

use crate::tabulate::ContingencyTable;
use crate::{Error, Result};

/// Pearson chi-square statistic over a contingency table, using expected
/// counts `E[i][j] = row_total[i] * col_total[j] / n`. No Yates continuity
/// correction is applied.
///
/// A cell with a zero marginal total has a zero observed count as well, so it
/// contributes nothing and is skipped rather than dividing by zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn chi_square(table: &ContingencyTable) -> f64 {
    let n = table.total() as f64;
    if n == 0.0 {
        return 0.0;
    }
    let row_totals = table.row_totals();
    let col_totals = table.col_totals();

    let mut chi2 = 0.0;
    for (i, &row_total) in row_totals.iter().enumerate() {
        for (j, &col_total) in col_totals.iter().enumerate() {
            let expected = (row_total as f64) * (col_total as f64) / n;
            if expected == 0.0 {
                continue;
            }
            let observed = table.count_at(i, j) as f64;
            let diff = observed - expected;
            chi2 += diff * diff / expected;
        }
    }
    chi2
}

/// Bias-corrected Cramer's V for a contingency table.
///
/// Returns a value in `[0, 1]` where 1 means full association and 0 none.
/// The bias correction floors the corrected phi-square at zero, so the result
/// is never imaginary; a value marginally above 1.0 caused by floating-point
/// correction effects is surfaced as computed, not clamped (callers may round
/// for display).
///
/// # Errors
///
/// - [`Error::InsufficientData`] if the table holds 0 or 1 observations.
/// - [`Error::DegenerateTable`] if either dimension has fewer than two
///   categories, or the corrected denominator is not positive.
#[allow(clippy::cast_precision_loss)]
pub fn cramers_v(table: &ContingencyTable) -> Result<f64> {
    let n = table.total();
    if n <= 1 {
        return Err(Error::InsufficientData(format!(
            "Cramer's V needs more than one observation, got {n}"
        )));
    }

    let r = table.num_rows();
    let k = table.num_cols();
    if r < 2 || k < 2 {
        return Err(Error::DegenerateTable(format!(
            "need at least two categories per side, got {r}x{k}"
        )));
    }

    let n = n as f64;
    let r = r as f64;
    let k = k as f64;
    let chi2 = chi_square(table);

    let phi2_tilde = (chi2 / n - (k - 1.0) * (r - 1.0) / (n - 1.0)).max(0.0);
    let k_tilde = k - (k - 1.0) * (k - 1.0) / (n - 1.0);
    let r_tilde = r - (r - 1.0) * (r - 1.0) / (n - 1.0);

    let denominator = (k_tilde - 1.0).min(r_tilde - 1.0);
    if denominator <= 0.0 {
        return Err(Error::DegenerateTable(format!(
            "corrected denominator {denominator} is not positive"
        )));
    }

    Ok((phi2_tilde / denominator).sqrt())
}
