//! Payroll engine for Costa Rican statutory pay
//!
//! This crate calculates the pay of hourly employees under the jornadas of the
//! Código de Trabajo: daily regular-hour caps and overtime, feriados paid
//! double, incapacidad overrides, the CCSS worker deduction, vacation accrual
//! and the aguinaldo. An HTTP API exposes the calculations.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
