//! The `YYYY-MM` month token that scopes every export.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::days_in_month;
use crate::error::{SheetError, SheetResult};

/// A validated calendar month.
///
/// # Example
///
/// ```
/// use shift_sheet::models::YearMonth;
///
/// let ym = YearMonth::parse("2024-02").unwrap();
/// assert_eq!(ym.year(), 2024);
/// assert_eq!(ym.month(), 2);
/// assert_eq!(ym.days(), 29);
/// assert_eq!(ym.to_string(), "2024-02");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a month, rejecting months outside 1..=12 and years the
    /// calendar cannot represent.
    pub fn new(year: i32, month: u32) -> SheetResult<Self> {
        Self::checked(year, month).map_err(|message| SheetError::InvalidYearMonth {
            input: format!("{}-{:02}", year, month),
            message: message.to_string(),
        })
    }

    fn checked(year: i32, month: u32) -> Result<Self, &'static str> {
        if !(1..=12).contains(&month) {
            return Err("month must be between 1 and 12");
        }
        let candidate = Self { year, month };
        // Every valid month has a first day; chrono bounds the year.
        if candidate.first_day().is_none() {
            return Err("year is out of range");
        }
        Ok(candidate)
    }

    /// Parses a `YYYY-MM` token.
    ///
    /// The token must have exactly two `-`-separated numeric parts.
    pub fn parse(input: &str) -> SheetResult<Self> {
        let invalid = |message: &str| SheetError::InvalidYearMonth {
            input: input.to_string(),
            message: message.to_string(),
        };

        let parts: Vec<&str> = input.trim().split('-').collect();
        if parts.len() != 2 {
            return Err(invalid("expected YYYY-MM"));
        }

        let year: i32 = parts[0]
            .parse()
            .map_err(|_| invalid("year is not a number"))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|_| invalid("month is not a number"))?;

        Self::checked(year, month).map_err(invalid)
    }

    /// The month containing today's local date.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Parses `input` when present, otherwise returns the current month.
    pub fn parse_or_current(input: Option<&str>) -> SheetResult<Self> {
        match input {
            Some(token) if !token.trim().is_empty() => Self::parse(token),
            _ => Ok(Self::current()),
        }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The calendar month, 1..=12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of days in this month.
    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// The date of `day` within this month, if it exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// The first day of the month.
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.date(1)
    }

    /// Every date of the month in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (1..=self.days()).filter_map(|day| self.date(day))
    }

    /// Returns `true` if `date` falls in this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = SheetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}
