//! Live simulation parameters
//!
//! `Parameters` holds the runtime settings the control surface may change
//! at any time between frames:
//! - gravitational constant and sun mass (`G`, `sun_mass`),
//! - time-scale multiplier (`time_scale`, 0 pauses),
//! - trail visibility (`show_trails`)
//!
//! The struct is `Copy`: the frame driver takes one snapshot per frame and
//! never re-reads it mid-frame, so every sub-step of a frame sees the same
//! consistent parameter set.

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub sun_mass: f64, // mass of the central attractor
    pub time_scale: f64, // frame-time multiplier, 0 = paused
    pub show_trails: bool, // trail rendering on/off, recording is unaffected
}
