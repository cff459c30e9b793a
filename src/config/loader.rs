//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the statutory
//! payroll rules from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{JornadaRules, PayrollConfig, PayrollRules, StatuteFile, StatuteMetadata};

/// Loads and provides access to the payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/costa_rica/
/// ├── statute.yaml   # Metadata, overtime/CCSS/holiday/disability rates, aguinaldo divisor
/// └── jornadas.yaml  # Regular-hour caps per shift type
/// ```
///
/// # Example
///
/// ```no_run
/// use planilla_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/costa_rica")?;
/// println!("CCSS rate: {}", loader.rules().rates.social_security_rate);
/// # Ok::<(), planilla_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, is not valid YAML, or
    /// carries values the engine cannot work with (negative rates, a zero
    /// aguinaldo divisor, a CCSS rate of 100% or more).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let statute_path = path.join("statute.yaml");
        let statute = Self::load_yaml::<StatuteFile>(&statute_path)?;

        let jornadas_path = path.join("jornadas.yaml");
        let jornadas = Self::load_yaml::<JornadaRules>(&jornadas_path)?;

        let rules = PayrollRules {
            rates: statute.rates,
            jornadas,
        };
        Self::check_rules(&statute_path, &rules)?;

        debug!(
            code = %statute.metadata.code,
            version = %statute.metadata.version,
            "Loaded payroll configuration"
        );

        Ok(Self {
            config: PayrollConfig::new(statute.metadata, rules),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects rule values that would make the calculations meaningless.
    fn check_rules(path: &Path, rules: &PayrollRules) -> EngineResult<()> {
        let invalid = |message: &str| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: message.to_string(),
        };
        let rates = &rules.rates;

        if rates.year_end_bonus_divisor <= Decimal::ZERO {
            return Err(invalid("year_end_bonus_divisor must be positive"));
        }
        if rates.social_security_rate < Decimal::ZERO || rates.social_security_rate >= Decimal::ONE
        {
            return Err(invalid("social_security_rate must be in [0, 1)"));
        }
        let multipliers = [
            rates.overtime_multiplier,
            rates.holiday_multiplier,
            rates.disability.social_security_factor,
            rates.disability.insurance_board_factor,
        ];
        if multipliers.iter().any(|m| *m < Decimal::ZERO) {
            return Err(invalid("multipliers and factors must not be negative"));
        }

        let jornadas = &rules.jornadas;
        let caps = [
            jornadas.diurna,
            jornadas.nocturna.regular_hours,
            jornadas.nocturna.paid_hours_when_complete,
            jornadas.mixta,
        ];
        if caps
            .iter()
            .chain(jornadas.acumulativa.weekday_caps.iter())
            .any(|c| *c < Decimal::ZERO)
        {
            return Err(invalid("jornada caps must not be negative"));
        }

        Ok(())
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        self.config.statute()
    }

    /// Returns the payroll rules.
    pub fn rules(&self) -> &PayrollRules {
        self.config.rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/costa_rica"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.statute().code, "CR-CT");
        assert_eq!(loader.statute().name, "Código de Trabajo de Costa Rica");
    }

    #[test]
    fn test_loaded_rules_match_builtin_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(*loader.rules(), PayrollRules::default());
    }

    #[test]
    fn test_loaded_rates() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let rates = &loader.rules().rates;

        assert_eq!(rates.overtime_multiplier, dec("1.5"));
        assert_eq!(rates.social_security_rate, dec("0.1067"));
        assert_eq!(rates.year_end_bonus_divisor, dec("12"));
    }

    #[test]
    fn test_loaded_accumulated_week_caps() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let caps = loader.rules().jornadas.acumulativa.weekday_caps;

        assert_eq!(caps[0], dec("0"));
        assert_eq!(caps[1], dec("10"));
        assert_eq!(caps[5], dec("8"));
        assert_eq!(caps[6], dec("0"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("statute.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_zero_divisor_is_rejected() {
        let mut rules = PayrollRules::default();
        rules.rates.year_end_bonus_divisor = Decimal::ZERO;

        let result = ConfigLoader::check_rules(Path::new("statute.yaml"), &rules);
        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("year_end_bonus_divisor"));
            }
            _ => panic!("Expected ConfigParseError"),
        }
    }

    #[test]
    fn test_full_ccss_rate_is_rejected() {
        let mut rules = PayrollRules::default();
        rules.rates.social_security_rate = Decimal::ONE;

        assert!(ConfigLoader::check_rules(Path::new("statute.yaml"), &rules).is_err());
    }

    #[test]
    fn test_negative_cap_is_rejected() {
        let mut rules = PayrollRules::default();
        rules.jornadas.acumulativa.weekday_caps[3] = dec("-1");

        assert!(ConfigLoader::check_rules(Path::new("jornadas.yaml"), &rules).is_err());
    }

    #[test]
    fn test_default_loader_uses_builtin_rules() {
        let loader = ConfigLoader::default();
        assert_eq!(*loader.rules(), PayrollRules::default());
        assert_eq!(loader.statute().version, "builtin");
    }
}
