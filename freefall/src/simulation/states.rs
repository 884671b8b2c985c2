//! Core state types for a single fall.
//!
//! - `ElapsedTime` is the simulated clock, a compensated running sum
//! - `FallState` is the probe's position and speed along the fall axis

/// Compensated (Kahan–Neumaier) running sum of time steps.
///
/// A fall at a small step adds the same tiny increment hundreds of millions of
/// times. A plain `f64` sum drifts by roughly one ulp per addition, so the
/// rounding error of every addition is carried in `carry` and folded back in
/// when the total is read.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElapsedTime {
    sum: f64,
    carry: f64,
}

impl ElapsedTime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, dt: f64) {
        let t = self.sum + dt;
        if self.sum.abs() >= dt.abs() {
            self.carry += (self.sum - t) + dt;
        } else {
            self.carry += (dt - t) + self.sum;
        }
        self.sum = t;
    }

    /// Total elapsed seconds
    pub fn seconds(&self) -> f64 {
        self.sum + self.carry
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FallState {
    pub distance: f64,      // remaining distance to the center, meters
    pub velocity: f64,      // inward speed at the end of the last step
    pub prev_velocity: f64, // inward speed at the start of the last step
    pub time: ElapsedTime,  // simulated time
    pub steps: u64,         // steps taken so far
}

impl FallState {
    /// Probe released from rest `distance` meters from the center
    pub fn at_rest(distance: f64) -> Self {
        Self {
            distance,
            velocity: 0.0,
            prev_velocity: 0.0,
            time: ElapsedTime::new(),
            steps: 0,
        }
    }
}
