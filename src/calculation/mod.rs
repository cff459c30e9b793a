//! Calculation logic for the payroll engine.
//!
//! This module contains the statutory pay rules: the per-day rate under each
//! jornada, period aggregation with feriado and incapacidad overrides, tenure
//! and vacation accrual, the aguinaldo accrued from saved history, and the
//! boundary checks applied before a calculation runs.

mod aguinaldo;
mod day_rate;
mod period;
mod tenure;
mod validation;

pub use aguinaldo::{AccrualWindow, AguinaldoAccrual, aguinaldo_from_history, aguinaldo_window};
pub use day_rate::{calculate_day_rate, regular_hour_cap};
pub use period::{PeriodAggregation, PeriodInput, aggregate_period};
pub use tenure::{accrued_vacation_days, as_of_or_today, months_between, months_between_today};
pub use validation::{
    MAX_EXTRA_AMOUNT, MAX_HOURLY_RATE, MAX_HOURS_PER_DAY, validate_employee, validate_extras,
    validate_work_days,
};
