//! Tenure and vacation accrual.
//!
//! One vacation day accrues per completed month of service.

use chrono::{Datelike, Local, NaiveDate};

/// Returns the number of whole calendar months between `hire` and `as_of`.
///
/// The month in progress counts only once its day of the month reaches the
/// hire day. Returns `0` when `as_of` is before `hire`.
///
/// # Examples
///
/// ```
/// use planilla_engine::calculation::months_between;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
/// assert_eq!(months_between(hire, NaiveDate::from_ymd_opt(2023, 3, 14).unwrap()), 1);
/// assert_eq!(months_between(hire, NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()), 2);
/// ```
pub fn months_between(hire: NaiveDate, as_of: NaiveDate) -> u32 {
    if as_of < hire {
        return 0;
    }

    let mut months = (as_of.year() - hire.year()) * 12 + as_of.month() as i32
        - hire.month() as i32;
    if as_of.day() < hire.day() {
        months -= 1;
    }

    months.max(0) as u32
}

/// Resolves an optional reference date, defaulting to today's local date.
///
/// Every operation that takes an `as_of` falls back through here.
pub fn as_of_or_today(as_of: Option<NaiveDate>) -> NaiveDate {
    as_of.unwrap_or_else(|| Local::now().date_naive())
}

/// Months of service from `hire` until today's local date.
pub fn months_between_today(hire: NaiveDate) -> u32 {
    months_between(hire, as_of_or_today(None))
}

/// Vacation days accrued by `as_of` (Código de Trabajo Art. 153).
///
/// An employee without a hire date has accrued nothing.
///
/// # Examples
///
/// ```
/// use planilla_engine::calculation::accrued_vacation_days;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2022, 6, 1);
/// let as_of = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
/// assert_eq!(accrued_vacation_days(hire, as_of), 12);
/// assert_eq!(accrued_vacation_days(None, as_of), 0);
/// ```
pub fn accrued_vacation_days(hire: Option<NaiveDate>, as_of: NaiveDate) -> u32 {
    hire.map_or(0, |hire| months_between(hire, as_of))
}
