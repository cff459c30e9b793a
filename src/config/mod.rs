//! Configuration loading and management for the payroll engine.
//!
//! Statutory constants (overtime multiplier, CCSS rate, jornada caps, ...)
//! are loaded from YAML so they can change with the law without a rebuild.
//!
//! # Example
//!
//! ```no_run
//! use planilla_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/costa_rica").unwrap();
//! println!("Loaded statute: {}", config.statute().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AccumulatedWeekRule, DisabilityFactors, JornadaRules, NightShiftRule, PayrollConfig,
    PayrollRules, StatuteMetadata, StatutoryRates,
};
