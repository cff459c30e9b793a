//! Day rate calculation.
//!
//! This module splits one day's worked hours into regular and overtime
//! portions according to the employee's jornada and prices them.

use rust_decimal::Decimal;

use crate::config::PayrollRules;
use crate::models::{DayResult, ShiftType};

/// Returns the regular-hour cap for a jornada on a given day of the week.
///
/// Only the accumulated week depends on the weekday: Monday to Thursday
/// allow 10 regular hours, Friday 8, and the weekend none. An unknown
/// jornada, or a weekday index outside `0..=6`, has a cap of zero.
///
/// # Examples
///
/// ```
/// use planilla_engine::calculation::regular_hour_cap;
/// use planilla_engine::config::PayrollRules;
/// use planilla_engine::models::ShiftType;
/// use rust_decimal::Decimal;
///
/// let rules = PayrollRules::default();
/// assert_eq!(regular_hour_cap(ShiftType::Mixta, 3, &rules), Decimal::new(7, 0));
/// assert_eq!(regular_hour_cap(ShiftType::Acumulativa, 1, &rules), Decimal::new(10, 0));
/// assert_eq!(regular_hour_cap(ShiftType::Acumulativa, 6, &rules), Decimal::ZERO);
/// ```
pub fn regular_hour_cap(shift_type: ShiftType, weekday_index: u8, rules: &PayrollRules) -> Decimal {
    let jornadas = &rules.jornadas;
    match shift_type {
        ShiftType::Diurna => jornadas.diurna,
        ShiftType::Nocturna => jornadas.nocturna.regular_hours,
        ShiftType::Mixta => jornadas.mixta,
        ShiftType::Acumulativa => jornadas
            .acumulativa
            .weekday_caps
            .get(usize::from(weekday_index))
            .copied()
            .unwrap_or(Decimal::ZERO),
        ShiftType::Unknown => Decimal::ZERO,
    }
}

/// Calculates the pay for a single day.
///
/// Hours up to the jornada cap are paid at the hourly rate; hours above it
/// are overtime, paid at the rate times the overtime multiplier. A night
/// shift that reaches its 6-hour cap is paid as 8 regular hours.
///
/// The function never fails. Negative hours or rates are treated as zero,
/// and an unknown jornada yields [`DayResult::zero`]. That fallback exists
/// for incomplete historical data only; callers validate the jornada first
/// (see [`crate::calculation::validate_employee`]).
///
/// # Legal Reference
///
/// - Código de Trabajo Art. 136: jornada limits
/// - Código de Trabajo Art. 139: overtime at 150%
///
/// # Examples
///
/// ```
/// use planilla_engine::calculation::calculate_day_rate;
/// use planilla_engine::config::PayrollRules;
/// use planilla_engine::models::ShiftType;
/// use rust_decimal::Decimal;
///
/// let rules = PayrollRules::default();
/// let day = calculate_day_rate(
///     ShiftType::Diurna,
///     2,
///     Decimal::new(10, 0),
///     Decimal::new(1000, 0),
///     &rules,
/// );
/// assert_eq!(day.regular_pay, Decimal::new(8000, 0));
/// assert_eq!(day.overtime_hours, Decimal::new(2, 0));
/// assert_eq!(day.overtime_pay, Decimal::new(3000, 0));
/// ```
pub fn calculate_day_rate(
    shift_type: ShiftType,
    weekday_index: u8,
    hours_worked: Decimal,
    hourly_rate: Decimal,
    rules: &PayrollRules,
) -> DayResult {
    if !shift_type.is_known() {
        return DayResult::zero();
    }

    let hours = hours_worked.max(Decimal::ZERO);
    let rate = hourly_rate.max(Decimal::ZERO);
    let cap = regular_hour_cap(shift_type, weekday_index, rules);

    let regular_hours = hours.min(cap);
    let overtime_hours = hours.saturating_sub(cap).max(Decimal::ZERO);

    // Completed night shift is paid as a full day.
    let night = &rules.jornadas.nocturna;
    let paid_regular_hours =
        if shift_type == ShiftType::Nocturna && hours > Decimal::ZERO && hours >= cap {
            night.paid_hours_when_complete.max(regular_hours)
        } else {
            regular_hours
        };

    // Saturates at Decimal::MAX instead of overflowing
    let regular_pay = paid_regular_hours.saturating_mul(rate);
    let overtime_pay = overtime_hours
        .saturating_mul(rate)
        .saturating_mul(rules.rates.overtime_multiplier);

    DayResult {
        regular_hours,
        paid_regular_hours,
        overtime_hours,
        regular_pay,
        overtime_pay,
        total: regular_pay.saturating_add(overtime_pay),
    }
}
