//! Work days, disability overrides and the holiday calendar.
//!
//! These are the per-run inputs the caller assembles from attendance,
//! incapacidad and feriado records.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One calendar day of attendance for a single employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDay {
    /// The calendar date worked.
    pub date: NaiveDate,
    /// Day of the week, 0 = Sunday through 6 = Saturday.
    pub weekday_index: u8,
    /// Hours worked on the day.
    pub hours_worked: Decimal,
}

impl WorkDay {
    /// Builds a work day, deriving the weekday index from the date.
    ///
    /// # Examples
    ///
    /// ```
    /// use planilla_engine::models::WorkDay;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// // 2024-03-08 is a Friday
    /// let day = WorkDay::new(NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(), Decimal::new(8, 0));
    /// assert_eq!(day.weekday_index, 5);
    /// ```
    pub fn new(date: NaiveDate, hours_worked: Decimal) -> Self {
        Self {
            date,
            weekday_index: weekday_index_of(date),
            hours_worked,
        }
    }
}

/// Returns the Sunday-based weekday index (0..=6) of a date.
pub fn weekday_index_of(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// The institution covering an incapacidad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisabilityKind {
    /// Covered by the CCSS; the employer pays half the regular pay.
    #[serde(rename = "ccss", alias = "social_security")]
    SocialSecurity,
    /// Covered by the INS (occupational risk); the employer pays nothing.
    #[serde(rename = "ins", alias = "insurance_board")]
    InsuranceBoard,
}

/// An incapacidad record that replaces the normal computation for its date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisabilityOverride {
    /// The date covered.
    pub date: NaiveDate,
    /// Which institution covers it.
    pub kind: DisabilityKind,
}

/// The set of feriados applying to a run.
///
/// # Examples
///
/// ```
/// use planilla_engine::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// let independence = NaiveDate::from_ymd_opt(2024, 9, 15).unwrap();
/// let holidays = HolidaySet::from_dates([independence]);
/// assert!(holidays.contains(independence));
/// assert_eq!(holidays.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Builds a holiday set from any collection of dates. Duplicates collapse.
    pub fn from_dates<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Returns true if the date is a feriado.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of distinct holiday dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if there are no holidays.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
