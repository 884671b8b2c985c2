//! Step-size refinement driver
//!
//! Shrinks the time step geometrically and reruns the integrator until a
//! single run costs at least the wall-clock budget. The run that crosses the
//! budget is the one reported: the stopping test looks at the run that just
//! finished, so the driver always goes one iteration past the last run that
//! was under budget.

use tracing::{debug, info};

use crate::benchmark::clock::Clock;
use crate::simulation::integrator::{run, RunResult};
use crate::simulation::params::Parameters;

/// Runtime settings for the driver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Refinement {
    pub initial_step: f64,       // seconds, divided once before the first run
    pub budget: f64,             // wall-clock seconds
    pub factor: f64,             // step divisor per iteration
    pub max_runs: Option<usize>, // `None` = stop on budget only
}

/// One driver iteration: the step used and what the integrator returned
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunRecord {
    pub step: f64,
    pub result: RunResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    BudgetReached, // last run cost >= budget
    RunLimit,      // `max_runs` iterations done, all under budget
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub history: Vec<RunRecord>, // every run in order, `final_run` included
    pub final_run: RunRecord,
    pub stop: StopReason,
}

/// Refine the step for `params` under `refinement`, timing runs with `clock`.
///
/// `on_run` sees every record as soon as its run finishes.
///
/// With `max_runs` unset, the loop only ends once a run reaches the budget. A
/// clock too coarse to ever register that keeps it going.
pub fn refine<C, F>(params: &Parameters, refinement: &Refinement, clock: &C, mut on_run: F) -> Outcome
where
    C: Clock + ?Sized,
    F: FnMut(&RunRecord),
{
    let mut step = refinement.initial_step;
    let mut history = Vec::new();

    let (final_run, stop) = loop {
        step /= refinement.factor;

        let result = run(params, step, clock);
        let record = RunRecord { step, result };
        debug!(step, wall_clock = result.wall_clock, fall_time = result.fall_time, "run finished");

        on_run(&record);
        history.push(record);

        if result.wall_clock >= refinement.budget {
            break (record, StopReason::BudgetReached);
        }
        if refinement.max_runs.is_some_and(|max| history.len() >= max) {
            break (record, StopReason::RunLimit);
        }
    };

    info!(
        runs = history.len(),
        step = final_run.step,
        fall_time = final_run.result.fall_time,
        stop = ?stop,
        "refinement stopped"
    );

    Outcome {
        history,
        final_run,
        stop,
    }
}
