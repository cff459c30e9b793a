//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod employee;
mod extras;
mod payroll_history;
mod work_day;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, DayLine, DayResult, DayTreatment, PayrollCalculation,
    PeriodResult,
};
pub use employee::{Employee, ShiftType};
pub use extras::{ExtraEntry, ExtraKind, ExtrasSummary};
pub use payroll_history::PayrollHistoryRecord;
pub use work_day::{DisabilityKind, DisabilityOverride, HolidaySet, WorkDay, weekday_index_of};
