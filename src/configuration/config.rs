//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – frame-driver options (sub-steps, delta clamp, trail length)
//! - [`ParametersConfig`] – live physical parameters and trail visibility
//! - [`SunConfig`]        – visual hints for the central sun
//! - [`BodyConfig`]       – static record for each orbiting body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   sub_steps: 8            # integration sub-steps per frame
//!   max_frame_dt: 0.05      # raw frame-delta clamp, seconds
//!   trail_length: 600       # optional, defaults to 600
//!
//! parameters:
//!   G: 0.5                  # gravitational constant
//!   sun_mass: 10000.0       # mass of the central sun
//!   time_scale: 1.0         # frame-time multiplier, 0 pauses
//!   show_trails: true
//!
//! sun:
//!   radius: 4.0
//!   color: [1.0, 0.87, 0.2]
//!   emissive: [1.0, 0.67, 0.0]
//!
//! bodies:
//!   - name: earth
//!     m: 59.7
//!     distance: 20.0        # initial distance from the sun
//!     radius: 0.75          # visual radius
//!     color: [0.29, 0.56, 0.85]
//!     trail_color: [0.29, 0.56, 0.85]
//! ```
//!
//! Each body starts at `(distance, 0, 0)` with the circular-orbit speed
//! derived from `G` and `sun_mass`; only the static record is configured.
//! Colors are renderer hints and never touch the physics.

use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

/// Frame-driver configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub sub_steps: u32, // integration sub-steps per rendered frame
    pub max_frame_dt: f64, // clamp ceiling for the raw frame delta, seconds
    pub trail_length: Option<usize>, // trail capacity, defaults to MAX_TRAIL_LENGTH
}

/// Live physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub G: f64, // gravitational constant
    pub sun_mass: f64, // mass of the central sun
    pub time_scale: f64, // frame-time multiplier, 0 pauses
    pub show_trails: bool, // trail rendering on/off
}

/// Visual hints for the central sun, opaque to the physics
#[derive(Deserialize, Debug, Clone)]
pub struct SunConfig {
    pub radius: f64, // visual radius
    pub color: [f32; 3], // base color, linear rgb
    pub emissive: [f32; 3], // emissive color, linear rgb
}

/// Static record for a single orbiting body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String, // unique identifier
    pub m: f64, // mass
    pub distance: f64, // initial distance from the sun
    pub radius: f64, // visual radius
    pub color: [f32; 3], // body color, renderer hint
    pub trail_color: [f32; 3], // trail color, renderer hint
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // frame-driver configuration
    pub parameters: ParametersConfig, // live physical parameters
    pub sun: SunConfig, // sun visual hints
    pub bodies: Vec<BodyConfig>, // static records for the orbiting bodies
}

impl ScenarioConfig {
    /// Reject configurations that would feed NaNs or nonsense into the
    /// integration loop. Called before any runtime state is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.sub_steps == 0 {
            return Err(ConfigError::ZeroSubSteps);
        }
        if self.engine.max_frame_dt <= 0.0 {
            return Err(ConfigError::NonPositiveFrameClamp(self.engine.max_frame_dt));
        }
        if self.engine.trail_length == Some(0) {
            return Err(ConfigError::ZeroTrailLength);
        }
        if self.parameters.G <= 0.0 {
            return Err(ConfigError::NonPositiveGravity(self.parameters.G));
        }
        if self.parameters.sun_mass <= 0.0 {
            return Err(ConfigError::NonPositiveSunMass(self.parameters.sun_mass));
        }

        let mut seen = HashSet::new();
        for bc in &self.bodies {
            if bc.m <= 0.0 {
                return Err(ConfigError::NonPositiveMass {
                    name: bc.name.clone(),
                    m: bc.m,
                });
            }
            if bc.distance <= 0.0 {
                return Err(ConfigError::NonPositiveDistance {
                    name: bc.name.clone(),
                    distance: bc.distance,
                });
            }
            if !seen.insert(bc.name.as_str()) {
                return Err(ConfigError::DuplicateName(bc.name.clone()));
            }
        }

        Ok(())
    }
}

/// Errors produced by scenario validation.
#[derive(Debug)]
pub enum ConfigError {
    /// A body was configured with zero or negative mass.
    NonPositiveMass { name: String, m: f64 },
    /// A body was configured at zero or negative distance from the sun.
    NonPositiveDistance { name: String, distance: f64 },
    /// The gravitational constant must be positive.
    NonPositiveGravity(f64),
    /// The sun mass must be positive.
    NonPositiveSunMass(f64),
    /// At least one integration sub-step per frame is required.
    ZeroSubSteps,
    /// The frame-delta clamp must be positive.
    NonPositiveFrameClamp(f64),
    /// A trail needs room for at least one position.
    ZeroTrailLength,
    /// Two bodies share the same name.
    DuplicateName(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveMass { name, m } => {
                write!(f, "body '{}' has non-positive mass {}", name, m)
            }
            ConfigError::NonPositiveDistance { name, distance } => {
                write!(f, "body '{}' has non-positive distance {}", name, distance)
            }
            ConfigError::NonPositiveGravity(g) => {
                write!(f, "gravitational constant must be positive, got {}", g)
            }
            ConfigError::NonPositiveSunMass(m) => {
                write!(f, "sun mass must be positive, got {}", m)
            }
            ConfigError::ZeroSubSteps => {
                write!(f, "engine.sub_steps must be at least 1")
            }
            ConfigError::NonPositiveFrameClamp(dt) => {
                write!(f, "engine.max_frame_dt must be positive, got {}", dt)
            }
            ConfigError::ZeroTrailLength => {
                write!(f, "engine.trail_length must be at least 1")
            }
            ConfigError::DuplicateName(name) => {
                write!(f, "duplicate body name '{}'", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
