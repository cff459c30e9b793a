//! Configuration types for the statutory payroll rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every statutory constant
//! the engine uses lives here so it can be overridden without touching the
//! calculation code.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata about the statute the rules implement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatuteMetadata {
    /// Short code for the rule set (e.g., "CR-CT").
    pub code: String,
    /// The human-readable name of the statute.
    pub name: String,
    /// The version or effective date of the rule set.
    pub version: String,
    /// URL to the official text.
    pub source_url: String,
}

impl Default for StatuteMetadata {
    fn default() -> Self {
        Self {
            code: "CR-CT".to_string(),
            name: "Código de Trabajo de Costa Rica".to_string(),
            version: "builtin".to_string(),
            source_url: "http://www.pgrweb.go.cr/scij/".to_string(),
        }
    }
}

/// Pay factors applied to incapacidad days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisabilityFactors {
    /// Share of regular pay the employer covers on a CCSS incapacidad.
    pub social_security_factor: Decimal,
    /// Share of regular pay the employer covers on an INS incapacidad.
    pub insurance_board_factor: Decimal,
}

/// Rates and multipliers applied by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryRates {
    /// Multiplier for hours beyond the jornada limit (Art. 139).
    pub overtime_multiplier: Decimal,
    /// Worker CCSS contribution rate.
    pub social_security_rate: Decimal,
    /// Multiplier on regular pay for a worked feriado (Art. 149).
    pub holiday_multiplier: Decimal,
    /// Incapacidad pay factors.
    pub disability: DisabilityFactors,
    /// Divisor turning gross pay into the aguinaldo (Ley 2412).
    pub year_end_bonus_divisor: Decimal,
}

impl Default for StatutoryRates {
    fn default() -> Self {
        Self {
            overtime_multiplier: Decimal::new(15, 1),
            social_security_rate: Decimal::new(1067, 4),
            holiday_multiplier: Decimal::TWO,
            disability: DisabilityFactors {
                social_security_factor: Decimal::new(5, 1),
                insurance_board_factor: Decimal::ZERO,
            },
            year_end_bonus_divisor: Decimal::new(12, 0),
        }
    }
}

/// Night shift limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightShiftRule {
    /// Regular hours before overtime starts.
    pub regular_hours: Decimal,
    /// Hours paid once the regular hours are completed.
    pub paid_hours_when_complete: Decimal,
}

/// Accumulated-week limits, indexed Sunday (0) through Saturday (6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccumulatedWeekRule {
    /// Regular-hour cap for each day of the week.
    pub weekday_caps: [Decimal; 7],
}

/// Regular-hour limits per jornada (Art. 136).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JornadaRules {
    /// Day shift cap.
    pub diurna: Decimal,
    /// Night shift rule.
    pub nocturna: NightShiftRule,
    /// Mixed shift cap.
    pub mixta: Decimal,
    /// Accumulated-week caps.
    pub acumulativa: AccumulatedWeekRule,
}

impl Default for JornadaRules {
    fn default() -> Self {
        let ten = Decimal::TEN;
        let eight = Decimal::new(8, 0);
        Self {
            diurna: eight,
            nocturna: NightShiftRule {
                regular_hours: Decimal::new(6, 0),
                paid_hours_when_complete: eight,
            },
            mixta: Decimal::new(7, 0),
            acumulativa: AccumulatedWeekRule {
                weekday_caps: [Decimal::ZERO, ten, ten, ten, ten, eight, Decimal::ZERO],
            },
        }
    }
}

/// Everything the calculation functions need to know about the statute.
///
/// `PayrollRules::default()` carries the current statutory values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRules {
    /// Rates and multipliers.
    pub rates: StatutoryRates,
    /// Regular-hour limits per jornada.
    pub jornadas: JornadaRules,
}

/// Layout of `statute.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StatuteFile {
    #[serde(flatten)]
    pub metadata: StatuteMetadata,
    pub rates: StatutoryRates,
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone, Default)]
pub struct PayrollConfig {
    metadata: StatuteMetadata,
    rules: PayrollRules,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(metadata: StatuteMetadata, rules: PayrollRules) -> Self {
        Self { metadata, rules }
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        &self.metadata
    }

    /// Returns the payroll rules.
    pub fn rules(&self) -> &PayrollRules {
        &self.rules
    }
}
