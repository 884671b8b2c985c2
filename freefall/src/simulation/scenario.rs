//! Build a fully-initialized fall scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the refinement driver:
//! - physical parameters (`Parameters`)
//! - driver settings (`Refinement`)
//! - the population used for the final report

use crate::benchmark::refine::Refinement;
use crate::configuration::config::ScenarioConfig;
use crate::simulation::params::{Body, Parameters};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub parameters: Parameters,
    pub refinement: Refinement,
    pub population: u64,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Body: the config speaks in diameters, the integrator in radii
        let body = Body::from_diameter(cfg.body.diameter, cfg.body.surface_gravity);

        let parameters = Parameters {
            body,
            altitude: cfg.drop.altitude,
        };

        let r_cfg = cfg.refinement;
        let refinement = Refinement {
            initial_step: r_cfg.initial_step,
            budget: r_cfg.budget,
            factor: r_cfg.factor,
            max_runs: r_cfg.max_runs,
        };

        Self {
            parameters,
            refinement,
            population: cfg.report.population,
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::build_scenario(ScenarioConfig::default())
    }
}
