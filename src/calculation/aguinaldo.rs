//! Aguinaldo accrual from saved payroll history.
//!
//! The aguinaldo is the gross pay earned from December 1 of the previous
//! year through November 30 of the current year, divided by twelve
//! (Ley 2412). This is distinct from the per-period
//! `year_end_bonus_estimate`, which only looks at one period.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayrollRules;
use crate::models::PayrollHistoryRecord;

/// The statutory accrual window, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualWindow {
    /// December 1 of the year before `as_of`.
    pub start: NaiveDate,
    /// November 30 of the year of `as_of`.
    pub end: NaiveDate,
}

impl AccrualWindow {
    /// Returns true if the date falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Returns the accrual window for the year of `as_of`.
///
/// # Examples
///
/// ```
/// use planilla_engine::calculation::aguinaldo_window;
/// use chrono::NaiveDate;
///
/// let window = aguinaldo_window(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
/// assert_eq!(window.start, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
/// assert_eq!(window.end, NaiveDate::from_ymd_opt(2024, 11, 30).unwrap());
/// ```
pub fn aguinaldo_window(as_of: NaiveDate) -> AccrualWindow {
    let year = as_of.year();
    AccrualWindow {
        start: NaiveDate::from_ymd_opt(year - 1, 12, 1).unwrap_or(NaiveDate::MIN),
        end: NaiveDate::from_ymd_opt(year, 11, 30).unwrap_or(NaiveDate::MAX),
    }
}

/// The aguinaldo accrued over the statutory window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AguinaldoAccrual {
    /// First day of the window.
    pub window_start: NaiveDate,
    /// Last day of the window.
    pub window_end: NaiveDate,
    /// Sum of gross pay of the records inside the window.
    pub gross_total: Decimal,
    /// Number of records inside the window.
    pub records_counted: usize,
    /// `gross_total / 12`.
    pub aguinaldo_acumulado: Decimal,
}

/// Accrues the aguinaldo from an employee's saved payroll periods.
///
/// A record is placed in the window by its `period_end`, or by the date of
/// `saved_at` when there is no period end. Records with neither are skipped.
/// The records are expected to belong to one employee.
///
/// # Examples
///
/// ```
/// use planilla_engine::calculation::aguinaldo_from_history;
/// use planilla_engine::config::PayrollRules;
/// use planilla_engine::models::PayrollHistoryRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let history = vec![PayrollHistoryRecord {
///     id: None,
///     employee_id: "emp_001".to_string(),
///     gross: Decimal::new(120000, 0),
///     period_end: NaiveDate::from_ymd_opt(2024, 3, 31),
///     saved_at: None,
/// }];
/// let accrual = aguinaldo_from_history(
///     &history,
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     &PayrollRules::default(),
/// );
/// assert_eq!(accrual.aguinaldo_acumulado, Decimal::new(10000, 0));
/// ```
pub fn aguinaldo_from_history<'a, I>(
    records: I,
    as_of: NaiveDate,
    rules: &PayrollRules,
) -> AguinaldoAccrual
where
    I: IntoIterator<Item = &'a PayrollHistoryRecord>,
{
    let window = aguinaldo_window(as_of);

    let (gross_total, records_counted) = records
        .into_iter()
        .filter(|record| record.effective_date().is_some_and(|d| window.contains(d)))
        .fold((Decimal::ZERO, 0usize), |(sum, count), record| {
            (sum.saturating_add(record.gross), count + 1)
        });

    let aguinaldo_acumulado = gross_total
        .checked_div(rules.rates.year_end_bonus_divisor)
        .unwrap_or(Decimal::ZERO);

    AguinaldoAccrual {
        window_start: window.start,
        window_end: window.end,
        gross_total,
        records_counted,
        aguinaldo_acumulado,
    }
}
