//! Input validation at the system boundary.
//!
//! The calculation functions accept anything, degrading to zero or saturating
//! at `Decimal::MAX`; these checks reject malformed and out-of-range records
//! before they reach them.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, ExtraEntry, WorkDay, weekday_index_of};

/// Most hours a single calendar day can hold.
pub const MAX_HOURS_PER_DAY: i64 = 24;

/// Highest accepted hourly rate, in colones.
pub const MAX_HOURLY_RATE: i64 = 10_000_000;

/// Highest accepted amount for a single extra or deduction, in colones.
pub const MAX_EXTRA_AMOUNT: i64 = 1_000_000_000_000;

/// Checks that an employee can be paid.
///
/// Rejects an unknown jornada and an hourly rate that is negative or above
/// [`MAX_HOURLY_RATE`].
///
/// # Examples
///
/// ```
/// use planilla_engine::calculation::validate_employee;
/// use planilla_engine::models::{Employee, ShiftType};
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee {
///     id: "emp_001".to_string(),
///     name: None,
///     hourly_rate: Decimal::new(1000, 0),
///     shift_type: ShiftType::Mixta,
///     hire_date: None,
/// };
/// assert!(validate_employee(&employee).is_ok());
///
/// employee.shift_type = ShiftType::Unknown;
/// assert!(validate_employee(&employee).is_err());
/// ```
pub fn validate_employee(employee: &Employee) -> EngineResult<()> {
    if !employee.shift_type.is_known() {
        return Err(EngineError::UnknownShiftType {
            employee_id: employee.id.clone(),
        });
    }

    if employee.hourly_rate < Decimal::ZERO {
        return Err(EngineError::InvalidEmployee {
            field: "hourly_rate".to_string(),
            message: "must not be negative".to_string(),
        });
    }

    if employee.hourly_rate > Decimal::from(MAX_HOURLY_RATE) {
        return Err(EngineError::InvalidEmployee {
            field: "hourly_rate".to_string(),
            message: format!("must not exceed {}", MAX_HOURLY_RATE),
        });
    }

    Ok(())
}

/// Checks the work days of one run.
///
/// Each day must have between 0 and [`MAX_HOURS_PER_DAY`] hours and a
/// weekday index matching its date, and no two days may share a date.
pub fn validate_work_days(days: &[WorkDay]) -> EngineResult<()> {
    let mut seen = HashSet::with_capacity(days.len());

    for day in days {
        if day.hours_worked < Decimal::ZERO {
            return Err(EngineError::InvalidWorkDay {
                date: day.date,
                message: "hours_worked must not be negative".to_string(),
            });
        }

        if day.hours_worked > Decimal::from(MAX_HOURS_PER_DAY) {
            return Err(EngineError::InvalidWorkDay {
                date: day.date,
                message: format!("hours_worked must not exceed {}", MAX_HOURS_PER_DAY),
            });
        }

        if day.weekday_index > 6 {
            return Err(EngineError::InvalidWorkDay {
                date: day.date,
                message: format!("weekday_index {} is out of range 0..=6", day.weekday_index),
            });
        }

        let expected = weekday_index_of(day.date);
        if day.weekday_index != expected {
            return Err(EngineError::InvalidWorkDay {
                date: day.date,
                message: format!(
                    "weekday_index {} does not match the date (expected {})",
                    day.weekday_index, expected
                ),
            });
        }

        if !seen.insert(day.date) {
            return Err(EngineError::DuplicateWorkDay { date: day.date });
        }
    }

    Ok(())
}

/// Checks that every extra entry carries an amount between 0 and
/// [`MAX_EXTRA_AMOUNT`].
pub fn validate_extras(entries: &[ExtraEntry]) -> EngineResult<()> {
    let ceiling = Decimal::from(MAX_EXTRA_AMOUNT);

    for (index, entry) in entries.iter().enumerate() {
        if entry.amount < Decimal::ZERO {
            return Err(EngineError::InvalidExtra {
                index,
                message: "amount must not be negative".to_string(),
            });
        }
        if entry.amount > ceiling {
            return Err(EngineError::InvalidExtra {
                index,
                message: format!("amount must not exceed {}", MAX_EXTRA_AMOUNT),
            });
        }
    }

    Ok(())
}
