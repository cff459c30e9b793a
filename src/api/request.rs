//! Request types for the payroll engine API.
//!
//! This module defines the JSON request bodies for the `/calculate`,
//! `/aguinaldo` and `/vacation` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    DisabilityOverride, Employee, ExtraEntry, HolidaySet, PayrollHistoryRecord, ShiftType,
    WorkDay, weekday_index_of,
};

/// Request body for the `/calculate` endpoint.
///
/// Contains everything needed to calculate one payroll period for one
/// employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee being paid.
    pub employee: EmployeeRequest,
    /// The days worked in the period.
    pub days: Vec<WorkDayRequest>,
    /// Incapacidad records for the period.
    #[serde(default)]
    pub disabilities: Vec<DisabilityOverride>,
    /// Feriados falling in the period.
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
    /// Ad-hoc bonuses, commissions, incentives and deductions.
    #[serde(default)]
    pub extras: Vec<ExtraEntry>,
    /// Date used for vacation accrual. Defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Employee information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Pay per regular hour in colones.
    pub hourly_rate: Decimal,
    /// The employee's jornada.
    pub shift_type: ShiftType,
    /// Start of employment, used for vacation accrual.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
}

/// One worked day in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkDayRequest {
    /// The calendar date.
    pub date: NaiveDate,
    /// Hours worked on the date.
    pub hours_worked: Decimal,
    /// Day of week, 0 = Sunday. Derived from the date when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday_index: Option<u8>,
}

/// Request body for the `/aguinaldo` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AguinaldoRequest {
    /// The employee whose aguinaldo is accrued.
    pub employee_id: String,
    /// Reference date selecting the accrual window. Defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    /// Saved payroll periods. Rows for other employees are ignored.
    #[serde(default)]
    pub history: Vec<PayrollHistoryRecord>,
}

/// Request body for the `/vacation` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationRequest {
    /// The employee whose vacation days are accrued.
    pub employee_id: String,
    /// Start of employment. Without it nothing has accrued.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// Date to accrue up to. Defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

impl CalculationRequest {
    /// Returns the feriados of the request as a set.
    pub fn holiday_set(&self) -> HolidaySet {
        HolidaySet::from_dates(self.holidays.iter().copied())
    }
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            hourly_rate: req.hourly_rate,
            shift_type: req.shift_type,
            hire_date: req.hire_date,
        }
    }
}

impl From<WorkDayRequest> for WorkDay {
    fn from(req: WorkDayRequest) -> Self {
        WorkDay {
            date: req.date,
            weekday_index: req.weekday_index.unwrap_or_else(|| weekday_index_of(req.date)),
            hours_worked: req.hours_worked,
        }
    }
}
