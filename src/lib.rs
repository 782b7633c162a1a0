pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, NVec3, Sun, System};
pub use simulation::trail::{Trail, MAX_TRAIL_LENGTH};
pub use simulation::forces::{AccelSet, Acceleration, SunGravity};
pub use simulation::integrator::symplectic_euler;
pub use simulation::engine::Engine;
pub use simulation::params::Parameters;
pub use simulation::scenario::{circular_orbit_speed, Scenario};

pub use configuration::config::{
    BodyConfig, ConfigError, EngineConfig, ParametersConfig, ScenarioConfig, SunConfig,
};

pub use visualization::solsim_vis3d::run_3d;

pub use benchmark::benchmark::{bench_advance, bench_gravity};
