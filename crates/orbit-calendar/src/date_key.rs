use core::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateKeyError {
    #[error("invalid day key (expected YYYY-MM-DD): {0:?}")]
    InvalidDayKey(String),
    #[error("invalid month key (expected YYYY-MM): {0:?}")]
    InvalidMonthKey(String),
}

/// A calendar day in the `YYYY-MM-DD` form used to key daily readings.
///
/// Keys are canonical: parsing accepts exactly the zero-padded form that
/// `Display` produces, so a key round-trips byte-for-byte through the
/// content store.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Convenience constructor; `None` for out-of-range dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// The `YYYY-MM` key of the month this day falls in.
    pub fn month_key(self) -> MonthKey {
        MonthKey {
            year: self.0.year(),
            month: self.0.month(),
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DayKey {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| DateKeyError::InvalidDayKey(s.to_string()))?;
        let key = Self(date);
        // chrono accepts un-padded fields; only the canonical form is a key.
        if key.to_string() != s {
            return Err(DateKeyError::InvalidDayKey(s.to_string()));
        }
        Ok(key)
    }
}

impl TryFrom<String> for DayKey {
    type Error = DateKeyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DayKey> for String {
    fn from(key: DayKey) -> Self {
        key.to_string()
    }
}

/// A calendar month in the `YYYY-MM` form used to key monthly actions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// `None` unless `month` is in `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DateKeyError::InvalidMonthKey(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(err)?;
        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;
        let key = Self::new(year, month).ok_or_else(err)?;
        if key.to_string() != s {
            return Err(err());
        }
        Ok(key)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = DateKeyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}
