pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{ElapsedTime, FallState};
pub use simulation::params::{Body, Parameters};
pub use simulation::forces::{FieldStrength, InverseSquare, LinearInterior};
pub use simulation::integrator::{descend_to, integrate_fall, run, trapezoid_step, Descent, RunResult, SurfaceCrossing};
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ConfigError, DropConfig, RefinementConfig, ReportConfig, ScenarioConfig};

pub use benchmark::clock::{measure, Clock, ScriptedClock, SystemClock};
pub use benchmark::refine::{refine, Outcome, Refinement, RunRecord, StopReason};
pub use benchmark::report::{progress_line, summary_line, Throughput};
