//! Calculation result models for the payroll engine.
//!
//! This module contains the per-day and per-period outputs of the engine,
//! the audit trace recorded while folding a period, and the
//! [`PayrollCalculation`] envelope returned by the HTTP layer.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DisabilityKind;

/// The decomposition of one day's hours into regular and overtime pay.
///
/// # Example
///
/// ```
/// use planilla_engine::models::DayResult;
/// use rust_decimal::Decimal;
///
/// let day = DayResult::zero();
/// assert_eq!(day.total, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayResult {
    /// Hours worked at the regular rate (capped at the jornada limit).
    pub regular_hours: Decimal,
    /// Hours the regular pay is computed on. Equals `regular_hours` except for
    /// a completed night shift, which is paid as a full day.
    pub paid_regular_hours: Decimal,
    /// Hours worked beyond the jornada limit.
    pub overtime_hours: Decimal,
    /// Pay for the regular portion.
    pub regular_pay: Decimal,
    /// Pay for the overtime portion.
    pub overtime_pay: Decimal,
    /// `regular_pay + overtime_pay`.
    pub total: Decimal,
}

impl DayResult {
    /// A day with nothing worked and nothing paid.
    pub fn zero() -> Self {
        Self {
            regular_hours: Decimal::ZERO,
            paid_regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            regular_pay: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// The totals of one payroll period for one employee.
///
/// `year_end_bonus_estimate` is this period's gross divided by twelve. It is
/// not the aguinaldo; see [`crate::calculation::AguinaldoAccrual`] for the
/// accrual over the statutory window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodResult {
    /// Gross pay after extras and deductions.
    pub gross: Decimal,
    /// Net pay after the CCSS deduction.
    pub net: Decimal,
    /// The CCSS worker contribution, never negative.
    pub social_security_deduction: Decimal,
    /// Same-period approximation of the year-end bonus.
    pub year_end_bonus_estimate: Decimal,
    /// Regular hours of non-disability days.
    pub regular_hours_total: Decimal,
    /// Overtime hours of non-disability days.
    pub overtime_hours_total: Decimal,
}

/// How a day was treated by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DayTreatment {
    /// Ordinary working day.
    Worked,
    /// Feriado: regular pay doubled.
    Holiday,
    /// Incapacidad replacing the normal computation.
    Disability {
        /// Which institution covers the day.
        kind: DisabilityKind,
    },
}

/// A single day's line in a period calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLine {
    /// The date of the day.
    pub date: NaiveDate,
    /// Day of the week, 0 = Sunday.
    pub weekday_index: u8,
    /// Which rule decided the day's contribution.
    pub treatment: DayTreatment,
    /// The normal decomposition of the day's hours.
    pub day: DayResult,
    /// What the day adds to gross.
    pub contribution: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the legal article behind this rule.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs that were handled but deserve a second look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a payroll calculation as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the calculation is for.
    pub employee_id: String,
    /// Per-day breakdown in input order.
    pub days: Vec<DayLine>,
    /// Period totals.
    pub totals: PeriodResult,
    /// Vacation days accrued as of the calculation date.
    pub vacation_days: u32,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_day_has_all_fields_zero() {
        let day = DayResult::zero();
        assert_eq!(day.regular_hours, Decimal::ZERO);
        assert_eq!(day.paid_regular_hours, Decimal::ZERO);
        assert_eq!(day.overtime_hours, Decimal::ZERO);
        assert_eq!(day.regular_pay, Decimal::ZERO);
        assert_eq!(day.overtime_pay, Decimal::ZERO);
        assert_eq!(day.total, Decimal::ZERO);
    }

    #[test]
    fn test_day_treatment_serialization() {
        let json = serde_json::to_string(&DayTreatment::Holiday).unwrap();
        assert_eq!(json, r#"{"type":"holiday"}"#);

        let json = serde_json::to_string(&DayTreatment::Disability {
            kind: DisabilityKind::SocialSecurity,
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"disability","kind":"ccss"}"#);
    }

    #[test]
    fn test_period_result_serializes_decimals_as_strings() {
        let totals = PeriodResult {
            gross: dec("100000"),
            net: dec("89330.0000"),
            social_security_deduction: dec("10670.0000"),
            year_end_bonus_estimate: dec("8333.33"),
            regular_hours_total: dec("48"),
            overtime_hours_total: dec("2.5"),
        };

        let json = serde_json::to_string(&totals).unwrap();
        assert!(json.contains("\"gross\":\"100000\""));
        assert!(json.contains("\"overtime_hours_total\":\"2.5\""));

        let deserialized: PeriodResult = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, totals);
    }

    #[test]
    fn test_day_line_deserialization() {
        let json = r#"{
            "date": "2024-03-04",
            "weekday_index": 1,
            "treatment": {"type": "worked"},
            "day": {
                "regular_hours": "8",
                "paid_regular_hours": "8",
                "overtime_hours": "0",
                "regular_pay": "8000",
                "overtime_pay": "0",
                "total": "8000"
            },
            "contribution": "8000"
        }"#;

        let line: DayLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.treatment, DayTreatment::Worked);
        assert_eq!(line.day.total, dec("8000"));
        assert_eq!(line.contribution, line.day.total);
    }
}
