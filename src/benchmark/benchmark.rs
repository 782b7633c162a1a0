use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, Acceleration, SunGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, Sun, System};
use crate::simulation::trail::Trail;

/// Helper to build a synthetic System of size `n`
/// Deterministic positions on staggered rings, no rand needed
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let distance = 10.0 + (i_f % 100.0);
        let angle = i_f * 0.37;

        let x = NVec3::new(distance * angle.cos(), 0.0, distance * angle.sin());
        let speed = (0.5 * 10000.0 / distance).sqrt();
        let v = NVec3::new(-angle.sin() * speed, 0.0, angle.cos() * speed);

        bodies.push(Body {
            name: format!("body-{i}"),
            x,
            v,
            m: 1.0,
            radius: 0.5,
            trail: Trail::default(),
        });
    }

    System {
        sun: Sun::at_origin(),
        bodies,
        t: 0.0,
    }
}

fn make_params() -> Parameters {
    Parameters {
        G: 0.5,
        sun_mass: 10000.0,
        time_scale: 1.0,
        show_trails: true,
    }
}

/// Time a single force accumulation for a range of body counts
/// The sun term is O(N), so the per-body cost should stay flat
pub fn bench_gravity() {
    let ns = [200, 400, 800, 1600, 3200, 6400, 12800];

    println!("N,accel_ms");

    for n in ns {
        let sys = make_system(n);
        let params = make_params();
        let gravity = SunGravity::new();

        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        gravity.acceleration(&params, &sys, &mut out);

        let t0 = Instant::now();
        gravity.acceleration(&params, &sys, &mut out);
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{n},{ms:.6}");
    }
}

/// Time full frame advances (8 sub-steps + trail recording) for a range of
/// body counts, averaged over a few frames
pub fn bench_advance() {
    let ns = [200, 400, 800, 1600, 3200, 6400, 12800];
    let frames = 10;

    println!("N,frame_ms");

    for n in ns {
        let mut sys = make_system(n);
        let params = make_params();
        let engine = Engine::default();
        let forces = AccelSet::new().with(SunGravity::new());

        // Warm up
        engine.advance(&mut sys, &forces, &params, 1.0 / 60.0);

        let t0 = Instant::now();
        for _ in 0..frames {
            engine.advance(&mut sys, &forces, &params, 1.0 / 60.0);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / frames as f64;

        println!("{n},{ms:.6}");
    }
}
