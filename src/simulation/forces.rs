//! Force / acceleration contributors for the simulation
//!
//! Defines the acceleration trait and the softened sun-gravity term that
//! pulls every planet toward the fixed central attractor

use crate::simulation::params::Parameters;
use crate::simulation::states::{System, NVec3};

/// Collection of acceleration terms (sun gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `sys` under `params`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, params: &Parameters, sys: &System, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(params, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
///
/// Terms read `G` and `sun_mass` from `params` at call time rather than
/// capturing them at construction, since both are live-adjustable between
/// frames
pub trait Acceleration {
    fn acceleration(&self, params: &Parameters, sys: &System, out: &mut [NVec3]);
}

/// Gravity of the fixed sun acting on every body, with additive softening
///
/// The magnitude is `G * sun_mass / (|r|^2 + softening)`. The additive
/// constant in the denominator keeps the magnitude finite as a body
/// approaches the sun; it is a tuning choice for visual stability, not
/// physical accuracy, and changing it changes orbit shapes near the sun.
pub struct SunGravity {
    pub softening: f64, // additive term in the force denominator
}

impl SunGravity {
    /// Softening used by the stock scenarios.
    pub const DEFAULT_SOFTENING: f64 = 1.0;

    pub fn new() -> Self {
        Self {
            softening: Self::DEFAULT_SOFTENING,
        }
    }
}

impl Default for SunGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl Acceleration for SunGravity {
    fn acceleration(&self, params: &Parameters, sys: &System, out: &mut [NVec3]) {
        for (b, a) in sys.bodies.iter().zip(out.iter_mut()) {
            // r points from the body toward the sun; the pull acts along +r
            let r = sys.sun.x - b.x;

            // Squared separation distance |r|^2
            let d2 = r.norm_squared();

            // A body sitting exactly on the sun has no defined direction to
            // accelerate along; normalizing the zero vector would produce
            // NaNs, so the term contributes nothing
            if d2 == 0.0 {
                continue;
            }

            // Softened magnitude: G * M / (|r|^2 + softening)
            // Finite even at zero separation
            let mag = params.G * params.sun_mass / (d2 + self.softening);

            *a += r.normalize() * mag;
        }
    }
}
