//! Wall-clock sources for timing integration runs
//!
//! The refinement driver only ever asks "how long did that run take", so a
//! clock is anything that can report seconds since some fixed origin.
//! [`SystemClock`] reads a monotonic `Instant`; [`ScriptedClock`] replays
//! preset run costs so the driver's stopping rule can be exercised
//! deterministically.

use std::cell::Cell;
use std::time::Instant;

/// Source of monotonic wall-clock readings
pub trait Clock {
    /// Seconds since an arbitrary fixed origin
    fn now(&self) -> f64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// Time `f` against `clock`, returning (elapsed seconds, result)
pub fn measure<C, T, F>(clock: &C, f: F) -> (f64, T)
where
    C: Clock + ?Sized,
    F: FnOnce() -> T,
{
    let t0 = clock.now();
    let out = f();
    let elapsed = clock.now() - t0;
    (elapsed, out)
}

/// Real clock backed by `std::time::Instant`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Test clock that makes the n-th measured span last `costs[n]` seconds.
///
/// Readings are consumed in start/end pairs, one pair per [`measure`] call.
/// Once the script runs out, the last cost repeats; an empty script makes
/// every span last zero seconds.
#[derive(Debug, Clone)]
pub struct ScriptedClock {
    costs: Vec<f64>,
    reads: Cell<usize>,
}

impl ScriptedClock {
    pub fn with_costs(costs: &[f64]) -> Self {
        Self {
            costs: costs.to_vec(),
            reads: Cell::new(0),
        }
    }

    /// Number of spans fully measured so far
    pub fn spans(&self) -> usize {
        self.reads.get() / 2
    }

    fn cost(&self, span: usize) -> f64 {
        match self.costs.last() {
            Some(&last) => self.costs.get(span).copied().unwrap_or(last),
            None => 0.0,
        }
    }
}

impl Clock for ScriptedClock {
    fn now(&self) -> f64 {
        let k = self.reads.get();
        self.reads.set(k + 1);

        // An even read opens span k/2, an odd read closes it
        let finished = k / 2 + k % 2;
        (0..finished).map(|span| self.cost(span)).sum()
    }
}
