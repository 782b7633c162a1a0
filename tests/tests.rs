use solsim::configuration::config::{
    BodyConfig, ConfigError, EngineConfig, ParametersConfig, ScenarioConfig, SunConfig,
};
use solsim::simulation::engine::Engine;
use solsim::simulation::forces::{AccelSet, SunGravity};
use solsim::simulation::integrator::symplectic_euler;
use solsim::simulation::params::Parameters;
use solsim::simulation::scenario::{circular_orbit_speed, Scenario};
use solsim::simulation::states::{Body, NVec3, Sun, System};
use solsim::simulation::trail::{Trail, MAX_TRAIL_LENGTH};

use approx::assert_relative_eq;

/// Default live parameters for tests, matching the stock solar scenario
pub fn test_params() -> Parameters {
    Parameters {
        G: 0.5,
        sun_mass: 10000.0,
        time_scale: 1.0,
        show_trails: true,
    }
}

/// Build a System with one body at `distance` on the x-axis, moving along z
/// at the circular-orbit speed for `p`
pub fn circular_body_system(distance: f64, p: &Parameters) -> System {
    let speed = circular_orbit_speed(p.G, p.sun_mass, distance);
    let body = Body {
        name: "probe".to_string(),
        x: NVec3::new(distance, 0.0, 0.0),
        v: NVec3::new(0.0, 0.0, speed),
        m: 1.0,
        radius: 0.5,
        trail: Trail::default(),
    };
    System {
        sun: Sun::at_origin(),
        bodies: vec![body],
        t: 0.0,
    }
}

/// Build the sun-gravity AccelSet
pub fn gravity_set() -> AccelSet {
    AccelSet::new().with(SunGravity::new())
}

/// A small two-body scenario config built in memory
pub fn two_body_config() -> ScenarioConfig {
    ScenarioConfig {
        engine: EngineConfig {
            sub_steps: 8,
            max_frame_dt: 0.05,
            trail_length: None,
        },
        parameters: ParametersConfig {
            G: 0.5,
            sun_mass: 10000.0,
            time_scale: 1.0,
            show_trails: true,
        },
        sun: SunConfig {
            radius: 4.0,
            color: [1.0, 0.87, 0.2],
            emissive: [1.0, 0.67, 0.0],
        },
        bodies: vec![
            BodyConfig {
                name: "inner".to_string(),
                m: 3.3,
                distance: 10.0,
                radius: 0.4,
                color: [0.7; 3],
                trail_color: [0.5; 3],
            },
            BodyConfig {
                name: "outer".to_string(),
                m: 59.7,
                distance: 20.0,
                radius: 0.75,
                color: [0.3, 0.6, 0.9],
                trail_color: [0.3, 0.6, 0.9],
            },
        ],
    }
}

// ==================================================================================
// Force law tests
// ==================================================================================

#[test]
fn gravity_magnitude_matches_softened_law() {
    let p = test_params();
    let sys = circular_body_system(20.0, &p);
    let forces = gravity_set();

    let mut acc = vec![NVec3::zeros(); 1];
    forces.accumulate_accels(&p, &sys, &mut acc);

    // magnitude = G * M / (d^2 + 1), with the +1 softening
    let expected = p.G * p.sun_mass / (20.0 * 20.0 + 1.0);
    assert_relative_eq!(acc[0].norm(), expected, max_relative = 1e-12);
}

#[test]
fn gravity_points_toward_sun() {
    let p = test_params();
    let sys = circular_body_system(20.0, &p);
    let forces = gravity_set();

    let mut acc = vec![NVec3::zeros(); 1];
    forces.accumulate_accels(&p, &sys, &mut acc);

    let to_sun = sys.sun.x - sys.bodies[0].x;
    assert!(
        acc[0].dot(&to_sun) > 0.0,
        "Acceleration is not toward the sun"
    );

    // Fully parallel: no sideways component
    let unit = acc[0].normalize();
    assert_relative_eq!(unit.x, -1.0, max_relative = 1e-12);
    assert_relative_eq!(unit.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(unit.z, 0.0, epsilon = 1e-12);
}

#[test]
fn gravity_coincident_body_yields_zero_finite_accel() {
    let p = test_params();
    let mut sys = circular_body_system(20.0, &p);
    sys.bodies[0].x = NVec3::zeros(); // sitting exactly on the sun
    let forces = gravity_set();

    let mut acc = vec![NVec3::zeros(); 1];
    forces.accumulate_accels(&p, &sys, &mut acc);

    assert!(acc[0].iter().all(|c| c.is_finite()), "non-finite acceleration");
    assert_eq!(acc[0], NVec3::zeros());
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn integrator_advances_time() {
    let p = test_params();
    let mut sys = circular_body_system(20.0, &p);
    let forces = gravity_set();

    symplectic_euler(&mut sys, &forces, &p, 0.001);

    assert_relative_eq!(sys.t, 0.001, max_relative = 1e-15);
}

#[test]
fn integrator_updates_velocity_before_position() {
    let p = test_params();
    let mut sys = circular_body_system(20.0, &p);
    let forces = gravity_set();

    let x0 = sys.bodies[0].x;
    let v0 = sys.bodies[0].v;
    let dt = 0.01;

    let mut acc = vec![NVec3::zeros(); 1];
    forces.accumulate_accels(&p, &sys, &mut acc);

    symplectic_euler(&mut sys, &forces, &p, dt);

    // Semi-implicit Euler: position must move with the *updated* velocity
    let v1 = v0 + acc[0] * dt;
    let x1 = x0 + v1 * dt;
    assert_relative_eq!((sys.bodies[0].v - v1).norm(), 0.0, epsilon = 1e-12);
    assert_relative_eq!((sys.bodies[0].x - x1).norm(), 0.0, epsilon = 1e-12);
}

#[test]
fn circular_orbit_radius_stays_bounded() {
    let p = test_params();
    let distance = 20.0;
    let mut sys = circular_body_system(distance, &p);
    let forces = gravity_set();

    // A bit over one full orbit at small steps
    let dt = 0.001;
    let mut max_drift: f64 = 0.0;
    for _ in 0..10_000 {
        symplectic_euler(&mut sys, &forces, &p, dt);
        let r = sys.bodies[0].x.norm();
        max_drift = max_drift.max((r - distance).abs() / distance);
    }

    assert!(
        max_drift < 0.02,
        "Circular orbit drifted by {:.3}%",
        max_drift * 100.0
    );
}

// ==================================================================================
// Trail buffer tests
// ==================================================================================

#[test]
fn trail_never_exceeds_capacity_and_evicts_fifo() {
    let mut trail = Trail::new(MAX_TRAIL_LENGTH);

    for i in 0..MAX_TRAIL_LENGTH + 50 {
        trail.record(NVec3::new(i as f64, 0.0, 0.0));
        assert!(trail.len() <= MAX_TRAIL_LENGTH);
    }

    assert_eq!(trail.len(), MAX_TRAIL_LENGTH);

    // The oldest 50 entries are gone; what remains starts at entry 50
    let first = trail.iter().next().unwrap();
    assert_eq!(first.x, 50.0);
    let last = trail.iter().last().unwrap();
    assert_eq!(last.x, (MAX_TRAIL_LENGTH + 49) as f64);
}

#[test]
fn trail_entries_are_value_snapshots() {
    let p = test_params();
    let mut sys = circular_body_system(20.0, &p);
    let forces = gravity_set();
    let engine = Engine::default();

    engine.advance(&mut sys, &forces, &p, 0.016);
    let recorded = *sys.bodies[0].trail.iter().next().unwrap();
    let at_record = sys.bodies[0].x;

    engine.advance(&mut sys, &forces, &p, 0.016);

    // The body moved on; the first snapshot did not
    assert_ne!(sys.bodies[0].x, recorded);
    assert_eq!(recorded, at_record);
}

// ==================================================================================
// Frame driver tests
// ==================================================================================

#[test]
fn time_scale_zero_freezes_motion_but_keeps_recording() {
    let mut p = test_params();
    p.time_scale = 0.0;

    let mut sys = circular_body_system(20.0, &p);
    let forces = gravity_set();
    let engine = Engine::default();

    let x0 = sys.bodies[0].x;
    let v0 = sys.bodies[0].v;

    for _ in 0..100 {
        engine.advance(&mut sys, &forces, &p, 0.016);
    }

    assert_eq!(sys.bodies[0].x, x0, "paused body moved");
    assert_eq!(sys.bodies[0].v, v0, "paused body accelerated");
    assert_eq!(sys.t, 0.0);

    // The trail still records one entry per frame while paused
    assert_eq!(sys.bodies[0].trail.len(), 100);
}

#[test]
fn huge_frame_delta_is_clamped() {
    let p = test_params();
    let forces = gravity_set();
    let engine = Engine::default();

    let mut stalled = circular_body_system(20.0, &p);
    let mut clamped = circular_body_system(20.0, &p);

    // A 10-second stall must integrate exactly like the 0.05 s ceiling
    engine.advance(&mut stalled, &forces, &p, 10.0);
    engine.advance(&mut clamped, &forces, &p, 0.05);

    assert_eq!(stalled.bodies[0].x, clamped.bodies[0].x);
    assert_eq!(stalled.bodies[0].v, clamped.bodies[0].v);
    assert_eq!(stalled.t, clamped.t);
}

#[test]
fn negative_frame_delta_is_treated_as_zero() {
    let p = test_params();
    let forces = gravity_set();
    let engine = Engine::default();

    let mut sys = circular_body_system(20.0, &p);
    let x0 = sys.bodies[0].x;
    let v0 = sys.bodies[0].v;

    engine.advance(&mut sys, &forces, &p, -1.0);

    assert_eq!(sys.bodies[0].x, x0, "negative delta reversed the simulation");
    assert_eq!(sys.bodies[0].v, v0);
    assert_eq!(sys.t, 0.0);
}

#[test]
fn hidden_trails_keep_recording() {
    let mut p = test_params();
    p.show_trails = false;

    let mut sys = circular_body_system(20.0, &p);
    let forces = gravity_set();
    let engine = Engine::default();

    for _ in 0..25 {
        engine.advance(&mut sys, &forces, &p, 0.016);
    }

    // Visibility is a rendering concern; the history is all there
    assert_eq!(sys.bodies[0].trail.len(), 25);
}

#[test]
fn sub_stepping_tracks_circular_orbit_better_than_one_big_step() {
    let p = test_params();
    let distance = 20.0;
    let forces = gravity_set();

    // Same total dt, clamp lifted out of the way
    let one_step = Engine {
        sub_steps: 1,
        max_frame_dt: 1.0,
    };
    let eight_steps = Engine {
        sub_steps: 8,
        max_frame_dt: 1.0,
    };

    let mut coarse = circular_body_system(distance, &p);
    let mut fine = circular_body_system(distance, &p);

    one_step.advance(&mut coarse, &forces, &p, 0.5);
    eight_steps.advance(&mut fine, &forces, &p, 0.5);

    // The ideal path keeps |x| == distance
    let err_coarse = (coarse.bodies[0].x.norm() - distance).abs();
    let err_fine = (fine.bodies[0].x.norm() - distance).abs();

    assert!(
        err_fine < err_coarse,
        "8 sub-steps ({err_fine:.4}) not closer to the circle than 1 step ({err_coarse:.4})"
    );
}

// ==================================================================================
// Scenario construction tests
// ==================================================================================

#[test]
fn build_scenario_derives_circular_orbit_state() {
    let cfg = two_body_config();
    let scenario = Scenario::build_scenario(cfg).expect("valid config rejected");

    assert_eq!(scenario.system.bodies.len(), 2);
    assert_eq!(scenario.system.t, 0.0);

    let outer = &scenario.system.bodies[1];
    assert_eq!(outer.name, "outer");
    assert_eq!(outer.x, NVec3::new(20.0, 0.0, 0.0));
    assert!(outer.trail.is_empty());

    let expected_speed = circular_orbit_speed(0.5, 10000.0, 20.0);
    assert_relative_eq!(outer.v.z, expected_speed, max_relative = 1e-12);
    assert_eq!(outer.v.x, 0.0);
    assert_eq!(outer.v.y, 0.0);
}

#[test]
fn build_scenario_applies_trail_length_override() {
    let mut cfg = two_body_config();
    cfg.engine.trail_length = Some(10);

    let scenario = Scenario::build_scenario(cfg).expect("valid config rejected");
    assert_eq!(scenario.system.bodies[0].trail.capacity(), 10);
}

#[test]
fn build_scenario_rejects_invalid_config() {
    let mut cfg = two_body_config();
    cfg.bodies[0].m = -1.0;
    assert!(matches!(
        Scenario::build_scenario(cfg),
        Err(ConfigError::NonPositiveMass { .. })
    ));

    let mut cfg = two_body_config();
    cfg.bodies[1].distance = 0.0;
    assert!(matches!(
        Scenario::build_scenario(cfg),
        Err(ConfigError::NonPositiveDistance { .. })
    ));

    let mut cfg = two_body_config();
    cfg.parameters.G = 0.0;
    assert!(matches!(
        Scenario::build_scenario(cfg),
        Err(ConfigError::NonPositiveGravity(_))
    ));

    let mut cfg = two_body_config();
    cfg.parameters.sun_mass = -5.0;
    assert!(matches!(
        Scenario::build_scenario(cfg),
        Err(ConfigError::NonPositiveSunMass(_))
    ));

    let mut cfg = two_body_config();
    cfg.engine.sub_steps = 0;
    assert!(matches!(
        Scenario::build_scenario(cfg),
        Err(ConfigError::ZeroSubSteps)
    ));

    let mut cfg = two_body_config();
    cfg.bodies[1].name = "inner".to_string();
    assert!(matches!(
        Scenario::build_scenario(cfg),
        Err(ConfigError::DuplicateName(_))
    ));
}

#[test]
fn reset_is_full_reconstruction() {
    let cfg = two_body_config();
    let mut scenario = Scenario::build_scenario(cfg).expect("valid config rejected");

    // Run a while, then fiddle with the live parameters
    for _ in 0..50 {
        let params = scenario.parameters;
        let Scenario {
            engine,
            system,
            forces,
            ..
        } = &mut scenario;
        engine.advance(system, forces, &params, 0.016);
    }
    scenario.parameters.G *= 2.0;
    scenario.parameters.show_trails = false;

    assert!(scenario.system.bodies[0].trail.len() > 0);
    let moved = scenario.system.bodies[0].x;
    assert_ne!(moved, NVec3::new(10.0, 0.0, 0.0));

    scenario.reset();

    // Back to the configured initial state, trails discarded
    assert_eq!(scenario.system.t, 0.0);
    assert_eq!(scenario.parameters.G, 0.5);
    assert!(scenario.parameters.show_trails);
    assert_eq!(scenario.system.bodies[0].x, NVec3::new(10.0, 0.0, 0.0));
    assert!(scenario.system.bodies[0].trail.is_empty());
}
