//! Configuration types for loading fall scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! fall scenario. A scenario consists of:
//!
//! - [`BodyConfig`]       – the body being fallen through (size, surface field)
//! - [`DropConfig`]       – where the probe is released
//! - [`RefinementConfig`] – step-size search settings for the driver
//! - [`ReportConfig`]     – the population used for the throughput figures
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The built-in scenario written out as YAML:
//!
//! ```yaml
//! body:
//!   diameter: 13584000.0    # meters
//!   surface_gravity: 13.73  # N/kg
//!
//! drop:
//!   altitude: 2000000.0     # meters above the surface
//!
//! refinement:
//!   initial_step: 10000.0   # seconds
//!   budget: 0.3             # wall-clock seconds
//!   factor: 10.0            # optional, defaults to 10
//!   max_runs: 12            # optional, unbounded when absent
//!
//! report:
//!   population: 7000000000
//! ```
//!
//! The scenario builder then maps this configuration into the runtime
//! parameters used by the integrator and the refinement driver.

use std::fmt;

use serde::Deserialize;

/// Physical description of the body
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub diameter: f64,        // meters
    pub surface_gravity: f64, // field strength at the surface, N/kg
}

/// Release point of the probe, always dropped from rest
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DropConfig {
    pub altitude: f64, // meters above the surface
}

fn default_factor() -> f64 {
    10.0
}

/// Settings for the step-size refinement driver
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RefinementConfig {
    pub initial_step: f64, // seconds; divided by `factor` before the first run
    pub budget: f64,       // wall-clock seconds a single run may cost before the driver stops
    #[serde(default = "default_factor")]
    pub factor: f64,       // step divisor applied on every iteration
    #[serde(default)]
    pub max_runs: Option<usize>, // hard cap on iterations, `None` keeps refining until the budget is hit
}

/// Inputs for the throughput figures in the final report
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub population: u64, // people that have to get through in one fall time
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub body: BodyConfig,
    pub drop: DropConfig,
    pub refinement: RefinementConfig,
    pub report: ReportConfig,
}

impl Default for ScenarioConfig {
    /// The planet, drop height, and budget the program runs with when no
    /// scenario file is given
    fn default() -> Self {
        Self {
            body: BodyConfig {
                diameter: 13_584.0 * 1000.0,
                surface_gravity: 13.73,
            },
            drop: DropConfig {
                altitude: 2_000.0 * 1000.0,
            },
            refinement: RefinementConfig {
                initial_step: 10_000.0,
                budget: 0.3,
                factor: default_factor(),
                max_runs: None,
            },
            report: ReportConfig {
                population: 7_000_000_000,
            },
        }
    }
}

/// Reasons a loaded scenario is rejected before any integration starts
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositive { field: &'static str, value: f64 },
    NegativeAltitude(f64),
    FactorTooSmall(f64),
    ZeroMaxRuns,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { field, value } => {
                write!(f, "`{field}` must be a positive finite number, got {value}")
            }
            ConfigError::NegativeAltitude(value) => {
                write!(f, "`drop.altitude` must be zero or a positive finite number, got {value}")
            }
            ConfigError::FactorTooSmall(value) => {
                write!(f, "`refinement.factor` must be greater than 1, got {value}")
            }
            ConfigError::ZeroMaxRuns => write!(f, "`refinement.max_runs` must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

impl ScenarioConfig {
    /// Parse a scenario from a YAML document
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Reject values that would make the integrator divide by zero or never
    /// terminate. The integrator itself trusts its inputs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("body.diameter", self.body.diameter)?;
        positive("body.surface_gravity", self.body.surface_gravity)?;
        positive("refinement.initial_step", self.refinement.initial_step)?;
        positive("refinement.budget", self.refinement.budget)?;

        let altitude = self.drop.altitude;
        if !(altitude.is_finite() && altitude >= 0.0) {
            return Err(ConfigError::NegativeAltitude(altitude));
        }

        // NaN fails this comparison too
        if !(self.refinement.factor > 1.0 && self.refinement.factor.is_finite()) {
            return Err(ConfigError::FactorTooSmall(self.refinement.factor));
        }

        if self.refinement.max_runs == Some(0) {
            return Err(ConfigError::ZeroMaxRuns);
        }

        Ok(())
    }
}
