//! Fixed-order semi-implicit Euler integration
//!
//! One step is three strict passes over the whole registry:
//! 1. acceleration for all bodies (index order, parent cascade),
//! 2. velocity kick: v += a * dt for all bodies,
//! 3. position drift: x += v * dt for all bodies.
//!
//! Velocities used in the drift are always the post-kick values, and no
//! pass starts before the previous one has finished for every body. The
//! frame delta comes from the external clock; `Parameters::time_scale`
//! stretches it for accelerated playback.

use super::forces::accumulate_accels;
use super::params::Parameters;
use super::states::System;

/// Advance the system by one frame of `frame_dt` wall-clock seconds
///
/// Runs the acceleration pass even when the effective step is zero, since
/// accelerations depend only on current positions, not on time. There is no
/// per-step validation: degenerate configurations propagate as visibly
/// wrong motion rather than costing every frame a check.
pub fn euler_integrator(sys: &mut System, params: &Parameters, frame_dt: f64) {
    if sys.bodies.is_empty() {
        return;
    }

    // Simulated seconds covered by this frame
    let dt = frame_dt * params.time_scale;

    // a_n for every body at the current positions; children read their
    // parent's fresh value, which index order guarantees
    accumulate_accels(&mut sys.bodies);

    // Kick: v_n+1 = v_n + a_n * dt
    let bodies = &mut sys.bodies;
    for (v, a) in bodies.velocities.iter_mut().zip(bodies.accelerations.iter()) {
        *v += *a * dt;
    }

    // Drift with the updated velocities: x_n+1 = x_n + v_n+1 * dt
    for (x, v) in bodies.positions.iter_mut().zip(bodies.velocities.iter()) {
        *x += *v * dt;
    }

    sys.t += dt;
}
