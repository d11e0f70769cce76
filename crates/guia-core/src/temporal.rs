//! # Issuance Date
//!
//! Calendar-date type for document issuance. Documents carry a date with
//! no time component; the date string participates in the integrity digest,
//! so its rendering (`YYYY-MM-DD`) must never change for a stored record.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// The calendar date a document was issued, with no time component.
///
/// Serialized as an ISO `YYYY-MM-DD` string, which is also the form fed
/// into digest computation. [`IssueDate::today()`] uses the local device
/// clock, matching the single-device scope of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueDate(NaiveDate);

impl IssueDate {
    /// Today's date on the local device clock.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Construct from a `chrono::NaiveDate`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse from an ISO `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map(Self)
    }

    /// Access the inner date.
    pub fn as_date(&self) -> &NaiveDate {
        &self.0
    }
}

impl std::fmt::Display for IssueDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
