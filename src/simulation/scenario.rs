//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - frame-driver settings (`Engine`)
//! - live parameters (`Parameters`)
//! - system state (`System` with bodies on circular orbits at t = 0)
//! - active force set (`AccelSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration and visualization systems. The originating config is kept
//! alongside the runtime state so a reset can reconstruct everything from
//! scratch and the viewer can read its color hints.

use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ConfigError, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, SunGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, Sun, System};
use crate::simulation::trail::{Trail, MAX_TRAIL_LENGTH};

/// Speed of a circular orbit at `distance` around a sun of mass `sun_mass`:
/// sqrt(G * M / d)
pub fn circular_orbit_speed(g: f64, sun_mass: f64, distance: f64) -> f64 {
    (g * sun_mass / distance).sqrt()
}

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the frame-driver settings, live parameters, current system
/// state, and the set of active force laws (accelerations)
///
/// In Bevy terms, this is inserted as a `Resource` and then read by systems
/// responsible for integration, visualization, and input
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub config: ScenarioConfig, // kept for reset and renderer hints
}

impl Scenario {
    /// Validate `cfg` and build the runtime bundle. Invalid configuration
    /// fails here, before any state exists that could propagate NaNs.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            sun_mass: p_cfg.sun_mass,
            time_scale: p_cfg.time_scale,
            show_trails: p_cfg.show_trails,
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = &cfg.engine;
        let engine = Engine {
            sub_steps: e_cfg.sub_steps,
            max_frame_dt: e_cfg.max_frame_dt,
        };

        let trail_length = e_cfg.trail_length.unwrap_or(MAX_TRAIL_LENGTH);
        let system = build_system(&cfg.bodies, &parameters, trail_length);

        // Forces: construct an AccelSet and register the sun's gravity
        let forces = AccelSet::new().with(SunGravity::new());

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
            config: cfg,
        })
    }

    /// Reset to the initial state described by the stored config.
    ///
    /// Full reconstruction: fresh bodies, empty trails, parameters back to
    /// their configured values. Nothing from the previous run is reused.
    pub fn reset(&mut self) {
        let p_cfg = &self.config.parameters;
        self.parameters = Parameters {
            G: p_cfg.G,
            sun_mass: p_cfg.sun_mass,
            time_scale: p_cfg.time_scale,
            show_trails: p_cfg.show_trails,
        };

        let trail_length = self.config.engine.trail_length.unwrap_or(MAX_TRAIL_LENGTH);
        self.system = build_system(&self.config.bodies, &self.parameters, trail_length);
        self.forces = AccelSet::new().with(SunGravity::new());
    }
}

/// Bodies: map each `BodyConfig` onto a runtime `Body` starting at
/// `(distance, 0, 0)` with the circular-orbit speed perpendicular to the
/// sun-body line
fn build_system(bodies_cfg: &[BodyConfig], params: &Parameters, trail_length: usize) -> System {
    let bodies: Vec<Body> = bodies_cfg
        .iter()
        .map(|bc: &BodyConfig| {
            let speed = circular_orbit_speed(params.G, params.sun_mass, bc.distance);
            Body {
                name: bc.name.clone(),
                x: NVec3::new(bc.distance, 0.0, 0.0),
                v: NVec3::new(0.0, 0.0, speed),
                m: bc.m,
                radius: bc.radius,
                trail: Trail::new(trail_length),
            }
        })
        .collect();

    // Initial system state: bodies at t = 0
    System {
        sun: Sun::at_origin(),
        bodies,
        t: 0.0,
    }
}
