//! Core state types for the solar-system simulation.
//!
//! Defines the runtime state structs:
//! - `Body` for one orbiting planet, with its bounded trail history
//! - `Sun` as the fixed central attractor
//! - `System` holding sun, bodies, and the current simulation time `t`

use nalgebra::Vector3;

use crate::simulation::trail::Trail;

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // unique identifier
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass
    pub radius: f64, // visual radius, not used by the physics
    pub trail: Trail, // bounded history of past positions
}

/// The central attractor. Position is fixed at the origin and never
/// integrated; its mass lives in `Parameters` so it stays live-adjustable.
#[derive(Debug, Clone)]
pub struct Sun {
    pub x: NVec3, // position, fixed
}

impl Sun {
    pub fn at_origin() -> Self {
        Self { x: NVec3::zeros() }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub sun: Sun, // fixed central attractor
    pub bodies: Vec<Body>, // orbiting bodies
    pub t: f64, // time
}
