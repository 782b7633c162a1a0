//! Per-frame driver for the simulation
//!
//! `Engine` owns the time-stepping strategy used when a host render loop
//! hands it a raw frame delta:
//! - negative deltas are treated as zero,
//! - the delta is clamped to `max_frame_dt` so a stalled or backgrounded
//!   host cannot inject one huge destabilizing step,
//! - the clamped delta is scaled by the live `time_scale`,
//! - the result is subdivided into `sub_steps` equal integration steps;
//!   one large step at high time scale or low frame rate visibly distorts
//!   orbits, many small steps track the continuous path closely,
//! - after the last sub-step every body's position is recorded into its
//!   trail, regardless of trail visibility.
//!
//! `advance` takes the raw delta as a plain argument, so tests drive it with
//! synthetic values instead of a live scheduler.

use super::forces::AccelSet;
use super::integrator::symplectic_euler;
use super::params::Parameters;
use super::states::System;

/// Number of integration sub-steps per frame used by the stock scenarios.
pub const DEFAULT_SUB_STEPS: u32 = 8;

/// Ceiling on the raw per-frame delta, in seconds.
pub const DEFAULT_MAX_FRAME_DT: f64 = 0.05;

#[derive(Debug, Clone)]
pub struct Engine {
    pub sub_steps: u32, // integration sub-steps per frame
    pub max_frame_dt: f64, // clamp ceiling for the raw frame delta
}

impl Engine {
    /// Advance the whole system by one rendered frame
    ///
    /// `raw_dt` is the elapsed real time since the previous frame as
    /// reported by the host; `params` is the frame's parameter snapshot,
    /// read once here and never re-read mid-frame
    pub fn advance(&self, sys: &mut System, forces: &AccelSet, params: &Parameters, raw_dt: f64) {
        // Negative deltas from a misbehaving clock must not reverse the
        // simulation; the clamp bounds the worst case after a stall
        let clamped = raw_dt.max(0.0).min(self.max_frame_dt);
        let dt = clamped * params.time_scale.max(0.0);

        // Fixed sub-step count, equal step sizes
        let sub_dt = dt / self.sub_steps as f64;
        for _ in 0..self.sub_steps {
            symplectic_euler(sys, forces, params, sub_dt);
        }

        // Record trails after all sub-steps. Recording ignores
        // `params.show_trails`: hidden trails keep accumulating so that
        // re-enabling them reveals the full history at once
        for b in sys.bodies.iter_mut() {
            b.trail.record(b.x);
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            sub_steps: DEFAULT_SUB_STEPS,
            max_frame_dt: DEFAULT_MAX_FRAME_DT,
        }
    }
}
