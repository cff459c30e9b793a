//! Period payroll aggregation.
//!
//! This module folds the work days of one employee into the totals of a
//! payroll period, applying incapacidad and feriado overrides, ad-hoc
//! extras and the CCSS deduction.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayrollRules;
use crate::models::{
    AuditStep, AuditWarning, DayLine, DayResult, DayTreatment, DisabilityKind,
    DisabilityOverride, Employee, HolidaySet, PeriodResult, WorkDay,
};

use super::day_rate::calculate_day_rate;

/// Everything the aggregator reads for one employee and one period.
///
/// Work-day dates are expected to be unique; a repeated date is counted
/// twice. Use [`crate::calculation::validate_work_days`] to reject them.
#[derive(Debug, Clone, Copy)]
pub struct PeriodInput<'a> {
    /// The employee being paid.
    pub employee: &'a Employee,
    /// Days worked in the period.
    pub days: &'a [WorkDay],
    /// Incapacidad records. The first record for a date wins.
    pub disabilities: &'a [DisabilityOverride],
    /// Feriados.
    pub holidays: &'a HolidaySet,
    /// Sum of bonus, commission and incentive entries.
    pub extras_total: Decimal,
    /// Sum of deduction entries.
    pub deductions_total: Decimal,
}

/// The outcome of aggregating a period.
#[derive(Debug, Clone)]
pub struct PeriodAggregation {
    /// Period totals.
    pub totals: PeriodResult,
    /// One line per work day, in input order.
    pub days: Vec<DayLine>,
    /// The audit steps recording each decision, in order.
    pub audit_steps: Vec<AuditStep>,
    /// Inputs that were handled but deserve a second look.
    pub warnings: Vec<AuditWarning>,
}

/// Aggregates a payroll period.
///
/// For each day, in input order:
/// 1. With an incapacidad on that date, the day contributes its regular pay
///    times the disability factor (half for CCSS, nothing for INS). Overtime
///    is dropped and the day's hours are left out of the hour totals.
/// 2. Otherwise the day contributes its normal pay, with regular pay doubled
///    on a feriado (overtime is never doubled), and its hours are counted.
///
/// Extras are then added and deductions subtracted. The CCSS deduction is
/// `gross × rate`, floored at zero; net is gross minus the deduction; and the
/// year-end bonus estimate is this period's gross divided by twelve.
///
/// The fold is a sum, so the order of the days does not change the totals.
/// The function never fails.
///
/// # Legal Reference
///
/// - Código de Trabajo Art. 149: feriados paid double
/// - Ley Constitutiva de la CCSS: worker contribution
/// - Ley 2412: aguinaldo
///
/// # Examples
///
/// ```
/// use planilla_engine::calculation::{aggregate_period, PeriodInput};
/// use planilla_engine::config::PayrollRules;
/// use planilla_engine::models::{Employee, HolidaySet, ShiftType, WorkDay};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: None,
///     hourly_rate: Decimal::new(1000, 0),
///     shift_type: ShiftType::Diurna,
///     hire_date: None,
/// };
/// let days = vec![WorkDay::new(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), Decimal::new(8, 0))];
/// let holidays = HolidaySet::default();
///
/// let result = aggregate_period(
///     &PeriodInput {
///         employee: &employee,
///         days: &days,
///         disabilities: &[],
///         holidays: &holidays,
///         extras_total: Decimal::ZERO,
///         deductions_total: Decimal::ZERO,
///     },
///     &PayrollRules::default(),
/// );
/// assert_eq!(result.totals.gross, Decimal::new(8000, 0));
/// ```
pub fn aggregate_period(input: &PeriodInput<'_>, rules: &PayrollRules) -> PeriodAggregation {
    let rates = &rules.rates;
    let employee = input.employee;

    let mut disabilities: HashMap<NaiveDate, DisabilityKind> = HashMap::new();
    for disability in input.disabilities {
        disabilities.entry(disability.date).or_insert(disability.kind);
    }

    let mut day_lines = Vec::with_capacity(input.days.len());
    let mut audit_steps = Vec::with_capacity(input.days.len() + 3);
    let mut warnings = Vec::new();
    let mut step_number: u32 = 1;

    let mut gross = Decimal::ZERO;
    let mut regular_hours_total = Decimal::ZERO;
    let mut overtime_hours_total = Decimal::ZERO;

    for work_day in input.days {
        let day = calculate_day_rate(
            employee.shift_type,
            work_day.weekday_index,
            work_day.hours_worked,
            employee.hourly_rate,
            rules,
        );
        let is_holiday = input.holidays.contains(work_day.date);

        let (treatment, contribution, audit_step) = match disabilities.get(&work_day.date) {
            Some(&kind) => {
                let factor = match kind {
                    DisabilityKind::SocialSecurity => rates.disability.social_security_factor,
                    DisabilityKind::InsuranceBoard => rates.disability.insurance_board_factor,
                };
                let contribution = day.regular_pay.saturating_mul(factor);

                if is_holiday {
                    warnings.push(AuditWarning {
                        code: "DISABILITY_ON_HOLIDAY".to_string(),
                        message: format!(
                            "{} is both a feriado and an incapacidad; the incapacidad was applied",
                            work_day.date
                        ),
                        severity: "low".to_string(),
                    });
                }
                if work_day.hours_worked > Decimal::ZERO {
                    warnings.push(AuditWarning {
                        code: "DISABILITY_HOURS_EXCLUDED".to_string(),
                        message: format!(
                            "{} hours recorded on {} are not counted in the hour totals",
                            work_day.hours_worked.normalize(),
                            work_day.date
                        ),
                        severity: "low".to_string(),
                    });
                }

                let step =
                    disability_step(step_number, work_day, kind, &day, factor, contribution);
                (DayTreatment::Disability { kind }, contribution, step)
            }
            None => {
                let regular_pay = if is_holiday {
                    day.regular_pay.saturating_mul(rates.holiday_multiplier)
                } else {
                    day.regular_pay
                };
                let contribution = regular_pay.saturating_add(day.overtime_pay);

                regular_hours_total = regular_hours_total.saturating_add(day.regular_hours);
                overtime_hours_total = overtime_hours_total.saturating_add(day.overtime_hours);

                let (treatment, step) = if is_holiday {
                    let multiplier = rates.holiday_multiplier;
                    (
                        DayTreatment::Holiday,
                        holiday_step(step_number, work_day, &day, multiplier, contribution),
                    )
                } else {
                    (
                        DayTreatment::Worked,
                        worked_step(step_number, work_day, employee, &day),
                    )
                };
                (treatment, contribution, step)
            }
        };

        gross = gross.saturating_add(contribution);
        audit_steps.push(audit_step);
        step_number += 1;

        day_lines.push(DayLine {
            date: work_day.date,
            weekday_index: work_day.weekday_index,
            treatment,
            day,
            contribution,
        });
    }

    let days_gross = gross;
    gross = gross
        .saturating_add(input.extras_total)
        .saturating_sub(input.deductions_total);

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "extras_and_deductions".to_string(),
        rule_name: "Extras and Deductions".to_string(),
        legal_ref: "Art. 162".to_string(),
        input: serde_json::json!({
            "days_gross": days_gross.normalize().to_string(),
            "extras_total": input.extras_total.normalize().to_string(),
            "deductions_total": input.deductions_total.normalize().to_string()
        }),
        output: serde_json::json!({
            "gross": gross.normalize().to_string()
        }),
        reasoning: format!(
            "₡{} + ₡{} extras - ₡{} deductions = ₡{}",
            days_gross.normalize(),
            input.extras_total.normalize(),
            input.deductions_total.normalize(),
            gross.normalize()
        ),
    });
    step_number += 1;

    let social_security_deduction = gross
        .saturating_mul(rates.social_security_rate)
        .max(Decimal::ZERO);
    let net = gross.saturating_sub(social_security_deduction);

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "social_security_deduction".to_string(),
        rule_name: "CCSS Worker Contribution".to_string(),
        legal_ref: "Ley Constitutiva de la CCSS".to_string(),
        input: serde_json::json!({
            "gross": gross.normalize().to_string(),
            "rate": rates.social_security_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "social_security_deduction": social_security_deduction.normalize().to_string(),
            "net": net.normalize().to_string()
        }),
        reasoning: if gross < Decimal::ZERO {
            format!(
                "Gross ₡{} is negative, CCSS deduction floored at ₡0",
                gross.normalize()
            )
        } else {
            format!(
                "₡{} x {} = ₡{} deducted, net ₡{}",
                gross.normalize(),
                rates.social_security_rate.normalize(),
                social_security_deduction.normalize(),
                net.normalize()
            )
        },
    });
    step_number += 1;

    let year_end_bonus_estimate = gross
        .checked_div(rates.year_end_bonus_divisor)
        .unwrap_or(Decimal::ZERO);

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "year_end_bonus_estimate".to_string(),
        rule_name: "Year-End Bonus Estimate".to_string(),
        legal_ref: "Ley 2412".to_string(),
        input: serde_json::json!({
            "gross": gross.normalize().to_string(),
            "divisor": rates.year_end_bonus_divisor.normalize().to_string()
        }),
        output: serde_json::json!({
            "year_end_bonus_estimate": year_end_bonus_estimate.normalize().to_string()
        }),
        reasoning: "Same-period approximation only; the aguinaldo accrues over Dec 1 - Nov 30"
            .to_string(),
    });

    debug!(
        employee_id = %employee.id,
        days = input.days.len(),
        gross = %gross,
        net = %net,
        "Aggregated payroll period"
    );

    PeriodAggregation {
        totals: PeriodResult {
            gross,
            net,
            social_security_deduction,
            year_end_bonus_estimate,
            regular_hours_total,
            overtime_hours_total,
        },
        days: day_lines,
        audit_steps,
        warnings,
    }
}

fn worked_step(
    step_number: u32,
    work_day: &WorkDay,
    employee: &Employee,
    day: &DayResult,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "day_rate".to_string(),
        rule_name: "Day Rate".to_string(),
        legal_ref: "Art. 136, 139".to_string(),
        input: serde_json::json!({
            "date": work_day.date.to_string(),
            "weekday_index": work_day.weekday_index,
            "shift_type": employee.shift_type.to_string(),
            "hours_worked": work_day.hours_worked.normalize().to_string(),
            "hourly_rate": employee.hourly_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "regular_hours": day.regular_hours.normalize().to_string(),
            "paid_regular_hours": day.paid_regular_hours.normalize().to_string(),
            "overtime_hours": day.overtime_hours.normalize().to_string(),
            "regular_pay": day.regular_pay.normalize().to_string(),
            "overtime_pay": day.overtime_pay.normalize().to_string(),
            "total": day.total.normalize().to_string()
        }),
        reasoning: format!(
            "{} {} hours: {} regular, {} overtime, ₡{}",
            employee.shift_type,
            work_day.hours_worked.normalize(),
            day.regular_hours.normalize(),
            day.overtime_hours.normalize(),
            day.total.normalize()
        ),
    }
}

fn holiday_step(
    step_number: u32,
    work_day: &WorkDay,
    day: &DayResult,
    multiplier: Decimal,
    contribution: Decimal,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "holiday_regular_pay".to_string(),
        rule_name: "Feriado Regular Pay".to_string(),
        legal_ref: "Art. 149".to_string(),
        input: serde_json::json!({
            "date": work_day.date.to_string(),
            "regular_pay": day.regular_pay.normalize().to_string(),
            "overtime_pay": day.overtime_pay.normalize().to_string(),
            "multiplier": multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "contribution": contribution.normalize().to_string()
        }),
        reasoning: format!(
            "Feriado: regular ₡{} x {} + overtime ₡{} (not multiplied) = ₡{}",
            day.regular_pay.normalize(),
            multiplier.normalize(),
            day.overtime_pay.normalize(),
            contribution.normalize()
        ),
    }
}

fn disability_step(
    step_number: u32,
    work_day: &WorkDay,
    kind: DisabilityKind,
    day: &DayResult,
    factor: Decimal,
    contribution: Decimal,
) -> AuditStep {
    let (institution, legal_ref) = match kind {
        DisabilityKind::SocialSecurity => ("CCSS", "Reglamento de Seguro de Salud CCSS"),
        DisabilityKind::InsuranceBoard => ("INS", "Ley 6727"),
    };

    AuditStep {
        step_number,
        rule_id: "disability_override".to_string(),
        rule_name: "Incapacidad Override".to_string(),
        legal_ref: legal_ref.to_string(),
        input: serde_json::json!({
            "date": work_day.date.to_string(),
            "institution": institution,
            "regular_pay": day.regular_pay.normalize().to_string(),
            "factor": factor.normalize().to_string()
        }),
        output: serde_json::json!({
            "contribution": contribution.normalize().to_string(),
            "hours_counted": false
        }),
        reasoning: format!(
            "{} incapacidad: ₡{} x {} = ₡{}, overtime and hours excluded",
            institution,
            day.regular_pay.normalize(),
            factor.normalize(),
            contribution.normalize()
        ),
    }
}
