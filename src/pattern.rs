//! Email local-part pattern recognition
//!
//! Classifies how an email's local part was derived from the owner's name
//! (`first.last`, `flast`, ...). Labels are checked in a fixed precedence
//! order and the first match wins, which makes the classification mutually
//! exclusive per record.
//!
//! Normalization policy, applied uniformly before matching: the first name,
//! last name, and local part are all lowercased, and space, hyphen,
//! apostrophe, and period are stripped from the last name ("O'Brien" matches
//! as "obrien"). Names that are empty after normalization classify as no
//! match.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

/// A recognized local-part shape.
///
/// Variants are declared in precedence order; the derived `Ord` follows it,
/// which is also the deterministic order for reporting ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum EmailPattern {
    /// `first+last` ("johnsmith")
    FirstLast,
    /// `last+first` ("smithjohn")
    LastFirst,
    /// `first+"."+last` ("john.smith")
    FirstDotLast,
    /// `last+"."+first` ("smith.john")
    LastDotFirst,
    /// first-initial+last ("jsmith")
    FLast,
    /// first-initial+"."+last ("j.smith")
    FDotLast,
    /// `first`+last-initial ("johns")
    FirstL,
    /// `first+"."`+last-initial ("john.s")
    FirstDotL,
    /// `first` alone ("john")
    First,
    /// `last` alone ("smith")
    Last,
}

impl EmailPattern {
    /// All labels, in precedence order.
    pub const ALL: [Self; 10] = [
        Self::FirstLast,
        Self::LastFirst,
        Self::FirstDotLast,
        Self::LastDotFirst,
        Self::FLast,
        Self::FDotLast,
        Self::FirstL,
        Self::FirstDotL,
        Self::First,
        Self::Last,
    ];

    /// Classify a local part against the owner's name components.
    ///
    /// Returns `None` when no label matches, or when either name component is
    /// empty after normalization.
    #[must_use]
    pub fn classify(first_name: &str, last_name: &str, local_part: &str) -> Option<Self> {
        let first = first_name.to_lowercase();
        let last = strip_separators(&last_name.to_lowercase());
        let local = local_part.to_lowercase();

        let f = first.chars().next()?;
        let l = last.chars().next()?;

        let candidates = [
            (format!("{first}{last}"), Self::FirstLast),
            (format!("{last}{first}"), Self::LastFirst),
            (format!("{first}.{last}"), Self::FirstDotLast),
            (format!("{last}.{first}"), Self::LastDotFirst),
            (format!("{f}{last}"), Self::FLast),
            (format!("{f}.{last}"), Self::FDotLast),
            (format!("{first}{l}"), Self::FirstL),
            (format!("{first}.{l}"), Self::FirstDotL),
            (first.clone(), Self::First),
            (last.clone(), Self::Last),
        ];

        candidates
            .into_iter()
            .find(|(prefix, _)| local.starts_with(prefix.as_str()))
            .map(|(_, pattern)| pattern)
    }

    /// Report label for this pattern.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstLast => "firstlast",
            Self::LastFirst => "lastfirst",
            Self::FirstDotLast => "first.last",
            Self::LastDotFirst => "last.first",
            Self::FLast => "flast",
            Self::FDotLast => "f.last",
            Self::FirstL => "firstl",
            Self::FirstDotL => "first.l",
            Self::First => "first",
            Self::Last => "last",
        }
    }
}

impl fmt::Display for EmailPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Labels tied at the maximum classification count across the given
/// `(first_name, last_name, local_part)` triples, in precedence order.
///
/// Records matching no label count toward nothing; if no record matches any
/// label the result is empty. Ties are never broken arbitrarily: every label
/// achieving the maximum is reported.
#[must_use]
pub fn most_common_patterns<'a, I>(triples: I) -> Vec<EmailPattern>
where
    I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
{
    let mut counts: FxHashMap<EmailPattern, u64> = FxHashMap::default();
    for (first, last, local) in triples {
        if let Some(pattern) = EmailPattern::classify(first, last, local) {
            *counts.entry(pattern).or_insert(0) += 1;
        }
    }

    let Some(&max_count) = counts.values().max() else {
        return Vec::new();
    };

    let mut winners: Vec<EmailPattern> = counts
        .into_iter()
        .filter(|&(_, count)| count == max_count)
        .map(|(pattern, _)| pattern)
        .collect();
    winners.sort_unstable();
    winners
}

fn strip_separators(last_name: &str) -> String {
    last_name
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '\''))
        .collect()
}
