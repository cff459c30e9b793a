//! Employee model and the jornada (shift type) classification.
//!
//! The payroll core only reads employees; the registry that owns them is an
//! external collaborator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The statutory jornada an employee is contracted under.
///
/// Anything other than the four recognised values deserialises to
/// [`ShiftType::Unknown`]. The engine treats an unknown jornada as a zero-pay
/// day; the boundary validation rejects it before that can happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    /// Day shift, 8 regular hours.
    Diurna,
    /// Night shift, 6 regular hours paid as 8 once completed.
    Nocturna,
    /// Mixed shift, 7 regular hours.
    Mixta,
    /// Accumulated week: longer Monday to Thursday, shorter Friday, weekend off.
    Acumulativa,
    /// Unrecognised value from historical or incomplete data.
    #[serde(other)]
    Unknown,
}

impl ShiftType {
    /// Returns true for the four statutory jornadas.
    pub fn is_known(&self) -> bool {
        !matches!(self, ShiftType::Unknown)
    }
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftType::Diurna => write!(f, "diurna"),
            ShiftType::Nocturna => write!(f, "nocturna"),
            ShiftType::Mixta => write!(f, "mixta"),
            ShiftType::Acumulativa => write!(f, "acumulativa"),
            ShiftType::Unknown => write!(f, "unknown"),
        }
    }
}

/// An employee as seen by the payroll core.
///
/// # Examples
///
/// ```
/// use planilla_engine::models::{Employee, ShiftType};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: Some("Ana Mora".to_string()),
///     hourly_rate: Decimal::new(1000, 0),
///     shift_type: ShiftType::Diurna,
///     hire_date: None,
/// };
/// assert!(employee.shift_type.is_known());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name, carried through for reports.
    #[serde(default)]
    pub name: Option<String>,
    /// Hourly rate in colones.
    pub hourly_rate: Decimal,
    /// The contracted jornada.
    pub shift_type: ShiftType,
    /// Start of employment, used for vacation accrual.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
}
