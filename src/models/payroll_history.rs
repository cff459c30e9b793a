//! Saved payroll periods, as persisted by the caller.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One saved payroll period for one employee.
///
/// The engine only reads these rows when accruing the aguinaldo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollHistoryRecord {
    /// Identifier assigned by the store.
    #[serde(default)]
    pub id: Option<String>,
    /// The employee the period belongs to.
    pub employee_id: String,
    /// Gross pay of the saved period.
    pub gross: Decimal,
    /// Last day of the saved period.
    #[serde(default)]
    pub period_end: Option<NaiveDate>,
    /// When the period was saved.
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

impl PayrollHistoryRecord {
    /// The date used to place the record in an accrual window:
    /// `period_end` when present, otherwise the date `saved_at` falls on.
    ///
    /// # Examples
    ///
    /// ```
    /// use planilla_engine::models::PayrollHistoryRecord;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let record = PayrollHistoryRecord {
    ///     id: None,
    ///     employee_id: "emp_001".to_string(),
    ///     gross: Decimal::new(100000, 0),
    ///     period_end: NaiveDate::from_ymd_opt(2023, 6, 30),
    ///     saved_at: None,
    /// };
    /// assert_eq!(record.effective_date(), NaiveDate::from_ymd_opt(2023, 6, 30));
    /// ```
    pub fn effective_date(&self) -> Option<NaiveDate> {
        self.period_end
            .or_else(|| self.saved_at.map(|saved| saved.date_naive()))
    }
}
