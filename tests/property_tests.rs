//! Property-based tests for the day rate and period aggregation laws.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use planilla_engine::calculation::{
    PeriodInput, aggregate_period, calculate_day_rate, regular_hour_cap,
};
use planilla_engine::config::PayrollRules;
use planilla_engine::models::{
    DisabilityKind, DisabilityOverride, Employee, HolidaySet, ShiftType, WorkDay,
};

fn shift_type_strategy() -> impl Strategy<Value = ShiftType> {
    prop_oneof![
        Just(ShiftType::Diurna),
        Just(ShiftType::Nocturna),
        Just(ShiftType::Mixta),
        Just(ShiftType::Acumulativa),
    ]
}

/// Hours in tenths, 0.0 to 24.0.
fn hours_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=240).prop_map(|tenths| Decimal::new(tenths, 1))
}

/// Whole-colón hourly rates.
fn rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=50_000).prop_map(Decimal::from)
}

/// How a generated day is treated: worked, feriado, CCSS or INS incapacidad.
fn day_flag_strategy() -> impl Strategy<Value = u8> {
    0u8..4
}

fn employee(shift_type: ShiftType, rate: Decimal) -> Employee {
    Employee {
        id: "emp_prop".to_string(),
        name: None,
        hourly_rate: rate,
        shift_type,
        hire_date: None,
    }
}

/// Builds consecutive days from a fixed Monday with the calendar inputs
/// each flag asks for.
fn build_period(
    entries: &[(Decimal, u8)],
) -> (Vec<WorkDay>, Vec<DisabilityOverride>, HolidaySet) {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut days = Vec::new();
    let mut disabilities = Vec::new();
    let mut holidays = Vec::new();

    for (offset, (hours, flag)) in entries.iter().enumerate() {
        let date = start + Duration::days(offset as i64);
        days.push(WorkDay::new(date, *hours));
        match flag {
            1 => holidays.push(date),
            2 => disabilities.push(DisabilityOverride {
                date,
                kind: DisabilityKind::SocialSecurity,
            }),
            3 => disabilities.push(DisabilityOverride {
                date,
                kind: DisabilityKind::InsuranceBoard,
            }),
            _ => {}
        }
    }

    (days, disabilities, HolidaySet::from_dates(holidays))
}

fn period_gross(
    employee: &Employee,
    days: &[WorkDay],
    disabilities: &[DisabilityOverride],
    holidays: &HolidaySet,
) -> Decimal {
    aggregate_period(
        &PeriodInput {
            employee,
            days,
            disabilities,
            holidays,
            extras_total: Decimal::ZERO,
            deductions_total: Decimal::ZERO,
        },
        &PayrollRules::default(),
    )
    .totals
    .gross
}

proptest! {
    #[test]
    fn prop_within_cap_is_all_regular(
        shift_type in shift_type_strategy(),
        weekday in 0u8..7,
        thousandths in 0i64..1000,
        rate in rate_strategy(),
    ) {
        let rules = PayrollRules::default();
        let cap = regular_hour_cap(shift_type, weekday, &rules);
        // Strictly below the cap, so a night is never completed here
        let hours = cap * Decimal::new(thousandths, 3);

        let day = calculate_day_rate(shift_type, weekday, hours, rate, &rules);

        prop_assert_eq!(day.overtime_hours, Decimal::ZERO);
        prop_assert_eq!(day.overtime_pay, Decimal::ZERO);
        prop_assert_eq!(day.regular_pay, hours * rate);
    }

    #[test]
    fn prop_over_cap_pays_overtime_at_time_and_a_half(
        shift_type in shift_type_strategy(),
        weekday in 0u8..7,
        extra_tenths in 1i64..=120,
        rate in rate_strategy(),
    ) {
        let rules = PayrollRules::default();
        let cap = regular_hour_cap(shift_type, weekday, &rules);
        let hours = cap + Decimal::new(extra_tenths, 1);

        let day = calculate_day_rate(shift_type, weekday, hours, rate, &rules);

        prop_assert_eq!(day.overtime_hours, hours - cap);
        prop_assert_eq!(day.overtime_pay, (hours - cap) * rate * Decimal::new(15, 1));
        prop_assert_eq!(day.total, day.regular_pay + day.overtime_pay);
    }

    #[test]
    fn prop_day_rate_is_idempotent(
        shift_type in shift_type_strategy(),
        weekday in 0u8..7,
        hours in hours_strategy(),
        rate in rate_strategy(),
    ) {
        let rules = PayrollRules::default();

        let first = calculate_day_rate(shift_type, weekday, hours, rate, &rules);
        let second = calculate_day_rate(shift_type, weekday, hours, rate, &rules);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_unknown_shift_type_is_zero(
        weekday in 0u8..7,
        hours in hours_strategy(),
        rate in rate_strategy(),
    ) {
        // Fallback only; requests with an unknown jornada are rejected before this
        let day = calculate_day_rate(ShiftType::Unknown, weekday, hours, rate, &PayrollRules::default());
        prop_assert_eq!(day.total, Decimal::ZERO);
    }

    #[test]
    fn prop_partitioned_gross_is_additive(
        shift_type in shift_type_strategy(),
        rate in rate_strategy(),
        entries in prop::collection::vec((hours_strategy(), day_flag_strategy()), 0..21),
        split in any::<prop::sample::Index>(),
    ) {
        let employee = employee(shift_type, rate);
        let (days, disabilities, holidays) = build_period(&entries);
        let at = split.index(days.len() + 1);
        let (left, right) = days.split_at(at);

        let whole = period_gross(&employee, &days, &disabilities, &holidays);
        let parts = period_gross(&employee, left, &disabilities, &holidays)
            + period_gross(&employee, right, &disabilities, &holidays);

        prop_assert_eq!(whole, parts);
    }

    #[test]
    fn prop_gross_equals_sum_of_contributions(
        shift_type in shift_type_strategy(),
        rate in rate_strategy(),
        entries in prop::collection::vec((hours_strategy(), day_flag_strategy()), 0..21),
    ) {
        let employee = employee(shift_type, rate);
        let (days, disabilities, holidays) = build_period(&entries);

        let result = aggregate_period(
            &PeriodInput {
                employee: &employee,
                days: &days,
                disabilities: &disabilities,
                holidays: &holidays,
                extras_total: Decimal::ZERO,
                deductions_total: Decimal::ZERO,
            },
            &PayrollRules::default(),
        );

        let sum: Decimal = result.days.iter().map(|line| line.contribution).sum();
        prop_assert_eq!(result.totals.gross, sum);
        prop_assert_eq!(
            result.totals.net,
            result.totals.gross - result.totals.social_security_deduction
        );
        prop_assert!(result.totals.social_security_deduction >= Decimal::ZERO);
    }

    #[test]
    fn prop_day_order_does_not_change_totals(
        shift_type in shift_type_strategy(),
        rate in rate_strategy(),
        entries in prop::collection::vec((hours_strategy(), day_flag_strategy()), 0..14),
    ) {
        let employee = employee(shift_type, rate);
        let (days, disabilities, holidays) = build_period(&entries);
        let mut reversed = days.clone();
        reversed.reverse();

        prop_assert_eq!(
            period_gross(&employee, &days, &disabilities, &holidays),
            period_gross(&employee, &reversed, &disabilities, &holidays)
        );
    }
}
