//! Person records and derived grouping keys
//!
//! A [`Person`] is an immutable snapshot of one stored row (person joined with
//! its country). The core only aggregates over collections of records; it
//! never mutates one.

use std::fmt;
use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One demographic record: a person joined with its two-letter country code.
///
/// Fields are private; the record is constructed once by the data-access
/// collaborator and read through accessors afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    first_name: String,
    last_name: String,
    email: String,
    gender: String,
    ip_address: String,
    country: String,
}

impl Person {
    /// Create a new person record.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        gender: impl Into<String>,
        ip_address: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            gender: gender.into(),
            ip_address: ip_address.into(),
            country: country.into(),
        }
    }

    /// Get the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Get the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Get the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Get the gender.
    #[must_use]
    pub fn gender(&self) -> &str {
        &self.gender
    }

    /// Get the IP address in dotted-quad form.
    #[must_use]
    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    /// Get the two-letter country code.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// The portion of the email preceding the `@`.
    ///
    /// Email validity is guaranteed by the collaborator before records reach
    /// the core, so a missing `@` is a precondition violation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the email contains no `@`.
    pub fn email_local_part(&self) -> Result<&str> {
        self.email
            .split_once('@')
            .map(|(local, _)| local)
            .ok_or_else(|| Error::InvalidInput(format!("email '{}' has no '@'", self.email)))
    }

    /// The portion of the email following the `@`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the email contains no `@`.
    pub fn email_domain(&self) -> Result<&str> {
        self.email
            .split_once('@')
            .map(|(_, domain)| domain)
            .ok_or_else(|| Error::InvalidInput(format!("email '{}' has no '@'", self.email)))
    }

    /// Canonical storage form: title-cased names and gender, lowercased email,
    /// uppercased country. Keeps newly inserted records consistent with the
    /// format already used in the store.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            first_name: title_case(&self.first_name),
            last_name: title_case(&self.last_name),
            email: self.email.to_lowercase(),
            gender: title_case(&self.gender),
            ip_address: self.ip_address,
            country: self.country.to_uppercase(),
        }
    }
}

/// Uppercase the first letter of each alphabetic run, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }
    out
}

/// Legacy IPv4 address class, determined by the leading octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IpClass {
    /// Leading octet 0-127
    A,
    /// Leading octet 128-191
    B,
    /// Leading octet 192-223
    C,
    /// Leading octet 224-239
    D,
    /// Leading octet 240-255
    E,
}

impl IpClass {
    /// All five classes, in report order.
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::D, Self::E];

    /// Classify by leading octet. Total over `u8`, so no error case.
    #[must_use]
    pub const fn of_octet(octet: u8) -> Self {
        match octet {
            0..=127 => Self::A,
            128..=191 => Self::B,
            192..=223 => Self::C,
            224..=239 => Self::D,
            240..=255 => Self::E,
        }
    }

    /// Classify a dotted-quad address string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the string is not a valid IPv4
    /// address (precondition violation of the upstream collaborator).
    pub fn of_address(address: &str) -> Result<Self> {
        let addr: Ipv4Addr = address
            .parse()
            .map_err(|_| Error::InvalidInput(format!("'{address}' is not a valid IPv4 address")))?;
        Ok(Self::of_octet(addr.octets()[0]))
    }

    /// Single-letter label used as the report category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }
}

impl fmt::Display for IpClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
