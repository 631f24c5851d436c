//! Record validation at the ingest boundary
//!
//! Field checks applied before a record enters the store, so the statistics
//! core can treat well-formed fields as a precondition. Each violation names
//! the offending field in an [`Error::InvalidInput`].

use std::net::Ipv4Addr;

use regex::Regex;

use crate::record::Person;
use crate::{Error, Result};

const MAX_NAME_LEN: usize = 30;
const MAX_EMAIL_LEN: usize = 254;
const MAX_GENDER_LEN: usize = 20;
const MAX_COUNTRY_LEN: usize = 2;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9][A-Za-z0-9._-]*@[A-Za-z0-9][A-Za-z0-9.-]*\.[A-Za-z]{2,4}$";

/// Validates person records before insertion.
///
/// Owns its compiled email pattern; construct one per store rather than
/// reading process-wide state.
#[derive(Debug)]
pub struct RecordValidator {
    email_re: Regex,
}

impl RecordValidator {
    /// Create a validator with the standard email shape check.
    #[must_use]
    pub fn new() -> Self {
        Self {
            email_re: Regex::new(EMAIL_PATTERN).expect("email pattern compiles"),
        }
    }

    /// Check every field of a record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] naming the first offending field.
    pub fn validate(&self, person: &Person) -> Result<()> {
        Self::check_bounded("first_name", person.first_name(), MAX_NAME_LEN)?;
        Self::check_bounded("last_name", person.last_name(), MAX_NAME_LEN)?;
        self.check_email(person.email())?;
        Self::check_bounded("gender", person.gender(), MAX_GENDER_LEN)?;
        Self::check_ip_address(person.ip_address())?;
        Self::check_bounded("country", person.country(), MAX_COUNTRY_LEN)?;
        Ok(())
    }

    fn check_bounded(field: &str, value: &str, max_len: usize) -> Result<()> {
        if value.is_empty() || value.len() > max_len {
            return Err(Error::InvalidInput(format!(
                "'{field}' must be a non-empty string of at most {max_len} characters"
            )));
        }
        Ok(())
    }

    fn check_email(&self, email: &str) -> Result<()> {
        Self::check_bounded("email", email, MAX_EMAIL_LEN)?;
        if !self.email_re.is_match(email) {
            return Err(Error::InvalidInput(format!(
                "'email' value '{email}' does not meet the usual email format requirements"
            )));
        }
        Ok(())
    }

    fn check_ip_address(ip_address: &str) -> Result<()> {
        if ip_address.is_empty() || ip_address.parse::<Ipv4Addr>().is_err() {
            return Err(Error::InvalidInput(format!(
                "'ip_address' value '{ip_address}' is not a valid IPv4 address"
            )));
        }
        Ok(())
    }
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new()
    }
}
