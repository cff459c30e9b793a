//! Ad-hoc bonus and deduction entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of an ad-hoc payroll entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraKind {
    /// One-off bonus.
    Bonus,
    /// Amount withheld from gross.
    Deduction,
    /// Sales commission.
    Commission,
    /// Performance incentive.
    Incentive,
}

impl ExtraKind {
    /// Returns true if entries of this kind are subtracted from gross.
    pub fn is_deduction(&self) -> bool {
        matches!(self, ExtraKind::Deduction)
    }
}

/// A single bonus or deduction recorded for the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraEntry {
    /// The kind of entry.
    pub kind: ExtraKind,
    /// The amount; always a positive magnitude, the kind decides the sign.
    pub amount: Decimal,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Totals of the additive and subtractive entries of a period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtrasSummary {
    /// Sum of bonus, commission and incentive entries.
    pub additions: Decimal,
    /// Sum of deduction entries.
    pub deductions: Decimal,
}

impl ExtrasSummary {
    /// Splits entries into additions and deductions.
    ///
    /// # Examples
    ///
    /// ```
    /// use planilla_engine::models::{ExtraEntry, ExtraKind, ExtrasSummary};
    /// use rust_decimal::Decimal;
    ///
    /// let entries = vec![
    ///     ExtraEntry { kind: ExtraKind::Bonus, amount: Decimal::new(5000, 0), description: None },
    ///     ExtraEntry { kind: ExtraKind::Commission, amount: Decimal::new(2500, 0), description: None },
    ///     ExtraEntry { kind: ExtraKind::Deduction, amount: Decimal::new(1000, 0), description: None },
    /// ];
    /// let summary = ExtrasSummary::from_entries(&entries);
    /// assert_eq!(summary.additions, Decimal::new(7500, 0));
    /// assert_eq!(summary.deductions, Decimal::new(1000, 0));
    /// ```
    pub fn from_entries(entries: &[ExtraEntry]) -> Self {
        entries
            .iter()
            .fold(Self::default(), |mut summary, entry| {
                if entry.kind.is_deduction() {
                    summary.deductions = summary.deductions.saturating_add(entry.amount);
                } else {
                    summary.additions = summary.additions.saturating_add(entry.amount);
                }
                summary
            })
    }
}
