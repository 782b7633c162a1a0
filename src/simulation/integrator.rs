//! Fixed-step time integration for the solar system
//!
//! Provides the semi-implicit (symplectic) Euler step driven by `AccelSet`
//! and `Parameters`. Velocity is updated before position within the same
//! step; using the already-updated velocity for the position update is what
//! keeps orbital energy bounded over long runs, and the ordering must not
//! be swapped.

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{System, NVec3};

/// Advance the system by one step of size `dt` using semi-implicit Euler
/// Updates velocities, positions, and `sys.t` in-place:
/// v_n+1 = v_n + dt * a_n
/// x_n+1 = x_n + dt * v_n+1
pub fn symplectic_euler(sys: &mut System, forces: &AccelSet, params: &Parameters, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    // Allocate a vector of accelerations, one per body, initialized to zero
    // accels[i] will hold a_n for body i at the current positions
    let mut accels = vec![NVec3::zeros(); n];

    // Ask the force set to accumulate accelerations into accels, based on
    // the current system state sys
    forces.accumulate_accels(params, &*sys, &mut accels);

    // Kick then drift, per body, with the updated velocity:
    // v_n+1 = v_n + dt * a_n
    // x_n+1 = x_n + dt * v_n+1
    for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        b.v += dt * *a;
        b.x += dt * b.v;
    }

    // Increment the system time by one full step
    sys.t += dt;
}
