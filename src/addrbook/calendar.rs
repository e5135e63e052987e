//! Week windows and birthday matching.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AddressBookError, Result};

/// How a stored birthday is compared against the current week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BirthdayMatch {
    /// Month and day only, every year.
    #[default]
    Anniversary,
    /// The stored date itself must fall inside the week.
    Exact,
}

impl BirthdayMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            BirthdayMatch::Anniversary => "anniversary",
            BirthdayMatch::Exact => "exact",
        }
    }
}

impl fmt::Display for BirthdayMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BirthdayMatch {
    type Err = AddressBookError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "anniversary" => Ok(BirthdayMatch::Anniversary),
            "exact" => Ok(BirthdayMatch::Exact),
            other => Err(AddressBookError::Config(format!(
                "Unknown birthday match mode: {} (expected anniversary or exact)",
                other
            ))),
        }
    }
}

/// Monday to Sunday, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    pub fn containing(day: NaiveDate) -> Self {
        let offset = u64::from(day.weekday().num_days_from_monday());
        let start = day - Days::new(offset);
        Self {
            start,
            end: start + Days::new(6),
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(7)
    }

    pub fn includes_birthday(&self, birthday: NaiveDate, mode: BirthdayMatch) -> bool {
        match mode {
            BirthdayMatch::Exact => self.contains(birthday),
            BirthdayMatch::Anniversary => self.days().any(|day| celebrated_on(birthday, day)),
        }
    }
}

/// True when `day` is the birthday's anniversary. Feb 29 birthdays are
/// celebrated on Feb 28 in common years.
fn celebrated_on(birthday: NaiveDate, day: NaiveDate) -> bool {
    if birthday.month() == day.month() && birthday.day() == day.day() {
        return true;
    }
    birthday.month() == 2
        && birthday.day() == 29
        && day.month() == 2
        && day.day() == 28
        && !is_leap_year(day.year())
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}
