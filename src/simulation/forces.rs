//! Parent-relative gravity for the hierarchical system
//!
//! This is not pairwise N-body: each body feels gravity only from its
//! direct parent, and a body's acceleration additionally carries its
//! parent's already-computed acceleration. Run in index order (parents
//! have lower indices than their children), the cascade fakes the
//! higher-order pull a moon's planet feels from the star, at one force
//! evaluation per body.

use super::consts::{G, MASS_SCALE};
use super::math::unit_or_zero;
use super::states::{BodySet, NVec3};

/// Gravitational force magnitude between `child` and its `parent`, in N
///
/// Uses the child's stored initial orbit radius rather than the live
/// separation, so the magnitude is constant over the body's lifetime and
/// only the direction tracks the actual positions. Orbits therefore close
/// exactly instead of perturbing under eccentricity.
pub fn grav_force(set: &BodySet, parent: usize, child: usize) -> f64 {
    let masses = set.masses[parent] * set.masses[child];
    let orbit_sq = set.orbit_radii[child] * set.orbit_radii[child];
    G * masses * MASS_SCALE * MASS_SCALE / orbit_sq
}

/// Acceleration of body `i` this frame
///
/// Zero for the root. Otherwise: parent-pointing gravity from
/// [`grav_force`], plus the parent's own acceleration. The parent's entry
/// must already hold this frame's value, which index ordering guarantees.
pub fn body_acceleration(set: &BodySet, i: usize) -> NVec3 {
    if i == 0 {
        return NVec3::zeros();
    }

    let parent = set.parents[i];
    let force = grav_force(set, parent, i);
    let accel = force / (set.masses[i] * MASS_SCALE);

    // Direction is recomputed live; coincident bodies degrade to zero pull
    let toward_parent = unit_or_zero(&(set.positions[parent] - set.positions[i]));

    toward_parent * accel + set.accelerations[parent]
}

/// Acceleration pass: recompute `accelerations[i]` for every body, in index
/// order so children read their parent's fresh value
pub fn accumulate_accels(set: &mut BodySet) {
    for i in 0..set.len() {
        set.accelerations[i] = body_acceleration(set, i);
    }
}
