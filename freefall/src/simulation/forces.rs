//! Field-strength laws for the fall
//!
//! Defines the [`FieldStrength`] trait and the two laws a fall passes
//! through: inverse-square outside the body, linear inside it

use crate::simulation::params::Body;

/// Gravitational field strength (N/kg) as a function of distance to the
/// body's center. Implementations return the inward magnitude.
pub trait FieldStrength {
    fn field_strength(&self, distance: f64) -> f64;
}

/// Point-mass field outside the body: `g = G * M / d^2`
#[derive(Debug, Clone, Copy)]
pub struct InverseSquare {
    pub gm: f64, // G * M
}

impl InverseSquare {
    pub fn exterior_of(body: &Body) -> Self {
        Self { gm: body.gm() }
    }
}

impl FieldStrength for InverseSquare {
    fn field_strength(&self, distance: f64) -> f64 {
        self.gm / distance.powi(2)
    }
}

/// Field inside the body, assumed to fall off linearly from the surface
/// value to zero at the center: `g = g_surface * d / r`
#[derive(Debug, Clone, Copy)]
pub struct LinearInterior {
    pub surface_gravity: f64,
    pub radius: f64,
}

impl LinearInterior {
    pub fn interior_of(body: &Body) -> Self {
        Self {
            surface_gravity: body.surface_gravity,
            radius: body.radius,
        }
    }
}

impl FieldStrength for LinearInterior {
    fn field_strength(&self, distance: f64) -> f64 {
        self.surface_gravity * (distance / self.radius)
    }
}

