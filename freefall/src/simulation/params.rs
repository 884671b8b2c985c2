//! Physical parameters for a single fall
//!
//! `Parameters` holds runtime settings:
//! - the body (`radius`, surface field strength),
//! - the release altitude above the surface

/// A uniform-density sphere described by its size and surface field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub radius: f64,          // meters
    pub surface_gravity: f64, // N/kg at the surface
}

impl Body {
    pub fn from_diameter(diameter: f64, surface_gravity: f64) -> Self {
        Self {
            radius: diameter / 2.0,
            surface_gravity,
        }
    }

    /// `G * M`, recovered from `g_surface = G * M / r^2`
    pub fn gm(&self) -> f64 {
        self.surface_gravity * self.radius.powi(2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub body: Body,
    pub altitude: f64, // release height above the surface, meters
}

impl Parameters {
    /// Distance from the body's center at release
    pub fn initial_distance(&self) -> f64 {
        self.altitude + self.body.radius
    }
}
