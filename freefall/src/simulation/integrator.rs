//! Fixed-step integrator for the fall through a body
//!
//! One stepping function, [`trapezoid_step`], is driven by any
//! [`FieldStrength`]. A full fall runs it twice: with the inverse-square law
//! down to the surface, then with the linear interior law down to the center.

use tracing::debug;

use super::forces::{FieldStrength, InverseSquare, LinearInterior};
use super::params::Parameters;
use super::states::FallState;
use crate::benchmark::clock::{measure, Clock};

/// Advance the fall by one step of `dt` seconds.
///
/// The field is sampled at the start-of-step distance and applied as
/// `v_n+1 = v_n + g dt`. Displacement uses the mean of the start and end
/// velocities: `x_n+1 = x_n - (v_n + v_n+1) / 2 * dt`.
pub fn trapezoid_step<F>(state: &mut FallState, field: &F, dt: f64)
where
    F: FieldStrength + ?Sized,
{
    let g = field.field_strength(state.distance);

    state.velocity += g * dt;
    state.time.add(dt);
    state.distance -= ((state.velocity + state.prev_velocity) / 2.0) * dt;

    state.prev_velocity = state.velocity;
    state.steps += 1;
}

/// Step under `field` while the probe is farther than `floor` from the
/// center. Returns the number of steps taken.
///
/// The last step may overshoot `floor`; nothing is rolled back.
pub fn descend_to<F>(state: &mut FallState, field: &F, floor: f64, dt: f64) -> u64
where
    F: FieldStrength + ?Sized,
{
    let start = state.steps;
    while state.distance > floor {
        trapezoid_step(state, field, dt);
    }
    state.steps - start
}

/// Snapshot taken when the probe first reaches the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceCrossing {
    pub time: f64,     // simulated seconds since release
    pub velocity: f64, // inward speed, m/s
    pub distance: f64, // distance to the center, at or just below the radius
}

/// Everything one integration run learned about the fall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Descent {
    pub fall_time: f64,      // simulated seconds from release to the center
    pub above_steps: u64,    // steps under the inverse-square law
    pub below_steps: u64,    // steps under the interior law
    pub surface: SurfaceCrossing,
    pub final_velocity: f64, // inward speed on reaching the center
    pub final_distance: f64, // zero or slightly negative after overshoot
}

/// Simulate a drop from rest at `params.altitude` down to the body's center
/// with a fixed step `dt`.
///
/// `dt` must be positive and finite; nothing here checks it.
pub fn integrate_fall(params: &Parameters, dt: f64) -> Descent {
    let body = params.body;
    let exterior = InverseSquare::exterior_of(&body);
    let interior = LinearInterior::interior_of(&body);

    let mut state = FallState::at_rest(params.initial_distance());

    // Above the surface
    let above_steps = descend_to(&mut state, &exterior, body.radius, dt);
    let surface = SurfaceCrossing {
        time: state.time.seconds(),
        velocity: state.velocity,
        distance: state.distance,
    };

    // Below the surface
    let below_steps = descend_to(&mut state, &interior, 0.0, dt);

    debug!(
        dt,
        above_steps,
        below_steps,
        surface_time = surface.time,
        fall_time = state.time.seconds(),
        "fall integrated"
    );

    Descent {
        fall_time: state.time.seconds(),
        above_steps,
        below_steps,
        surface,
        final_velocity: state.velocity,
        final_distance: state.distance,
    }
}

/// Result of one timed integration run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunResult {
    pub wall_clock: f64, // seconds spent computing
    pub fall_time: f64,  // simulated seconds
    pub descent: Descent,
}

/// Integrate one fall at step `dt`, timing the computation with `clock`
pub fn run<C>(params: &Parameters, dt: f64, clock: &C) -> RunResult
where
    C: Clock + ?Sized,
{
    let (wall_clock, descent) = measure(clock, || integrate_fall(params, dt));
    RunResult {
        wall_clock,
        fall_time: descent.fall_time,
        descent,
    }
}
