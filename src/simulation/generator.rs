//! System generation: solar-system preset and randomized hierarchy
//!
//! Two initializers behind one entry point, [`generate_system`]:
//! - count 0: the fixed 9-body solar-system table from `consts`,
//! - count n: a procedural tree of n bodies with sampled orbits, sizes,
//!   and masses.
//!
//! Both place bodies at a random azimuth in the z = 0 orbital plane and
//! start them on the tangential circular-orbit velocity for their parent's
//! mass, with the parent's own velocity added on top so moons carry their
//! planet's motion. Generation is the only place bodies are created; any
//! error here aborts scenario construction before the registry is exposed.

use rand::Rng;

use super::consts::{
    AU, FALLBACK_COLOR, G, MASS_SCALE, PRESET_COLORS, PRESET_COUNT, PRESET_MASSES,
    PRESET_ORBIT_RADII, PRESET_PARENTS, PRESET_RADII,
};
use super::error::{SimError, SimResult};
use super::forces::body_acceleration;
use super::math::{try_unit, UP};
use super::states::{BodyInit, BodySet, NVec3};

/// Redraw budget for degenerate random directions before giving up
const MAX_DIRECTION_DRAWS: usize = 32;

/// Build a body registry: `count == 0` selects the solar-system preset,
/// otherwise a procedural system with exactly `count` bodies
///
/// The parent-chain invariant is checked before the registry is returned.
pub fn generate_system(count: u32, rng: &mut impl Rng) -> SimResult<BodySet> {
    let set = if count == 0 {
        solar_system(rng)?
    } else {
        random_system(count as usize, rng)?
    };
    set.validate_hierarchy()?;
    Ok(set)
}

/// The fixed preset: star + 8 planets with real orbital elements
fn solar_system(rng: &mut impl Rng) -> SimResult<BodySet> {
    let mut set = BodySet::with_capacity(PRESET_COUNT);

    for i in 0..PRESET_COUNT {
        let orbit_radius = PRESET_ORBIT_RADII[i];

        // The star sits at the origin at rest; planets get a random azimuth
        // and the tangential circular-orbit speed for the star's mass
        let (position, velocity) = if i == 0 {
            (NVec3::zeros(), NVec3::zeros())
        } else {
            let position = in_plane_unit(rng)? * orbit_radius;
            let speed = orbital_speed(PRESET_MASSES[PRESET_PARENTS[i]], orbit_radius);
            let velocity = try_unit(&position.cross(&UP))? * speed;
            (position, velocity)
        };

        set.push(BodyInit {
            parent: PRESET_PARENTS[i],
            position,
            mass: PRESET_MASSES[i],
            radius: PRESET_RADII[i],
            orbit_radius,
            velocity,
            acceleration: NVec3::zeros(),
            color: PRESET_COLORS[i],
        });

        // Parents are already in the registry, so the cascade is valid
        set.accelerations[i] = body_acceleration(&set, i);
    }

    Ok(set)
}

/// Randomized hierarchical system of `n` bodies rooted at a preset-sized star
fn random_system(n: usize, rng: &mut impl Rng) -> SimResult<BodySet> {
    let mut set = BodySet::with_capacity(n);

    // Root star: origin, at rest, preset star mass and radius
    set.push(BodyInit {
        parent: 0,
        position: NVec3::zeros(),
        mass: PRESET_MASSES[0],
        radius: PRESET_RADII[0],
        orbit_radius: 0.0,
        velocity: NVec3::zeros(),
        acceleration: NVec3::zeros(),
        color: PRESET_COLORS[0],
    });

    for i in 1..n {
        // The first third of the bodies orbit the star directly; the rest
        // pick any earlier body, so moons (and moons of moons) appear
        let parent = if i <= n / 3 { 0 } else { rng.gen_range(0..i) };

        // Orbit radius in integer hundredths of an AU. Under a planet the
        // cap is 1/20 of the parent's own orbit so moons stay close; under
        // the star it is an absolute 0.5..10 AU band.
        let orbit_radius = if parent != 0 {
            let hi = (set.orbit_radii[parent] * 100.0 / (20.0 * AU)) as i64;
            rng.gen_range(25..=hi.max(25)) as f64 / 100.0 * AU
        } else {
            rng.gen_range(50..=1000) as f64 / 100.0 * AU
        };

        // Random azimuth, offset from the parent's (possibly displaced) spot
        let position = in_plane_unit(rng)? * orbit_radius + set.positions[parent];

        // Physical radius capped at half the parent's: children never
        // outgrow what they orbit
        let radius = {
            let lo = 1_000_000i64;
            let hi = (set.radii[parent] / 2.0) as i64;
            rng.gen_range(lo..=hi.max(lo)) as f64
        };

        // Star children get a water-density mass for their size; moons get
        // a small fraction of the parent so parent mass >> child mass holds
        // for the circular-orbit speed below
        let mass = if parent != 0 {
            set.masses[parent] / 1.0e5
        } else {
            sphere_volume(radius) * 1.0e3 / MASS_SCALE
        };

        let rel = position - set.positions[parent];
        let speed = orbital_speed(set.masses[parent], orbit_radius);
        let velocity = try_unit(&rel.cross(&UP))? * speed + set.velocities[parent];

        let color = PRESET_COLORS
            .get(i)
            .copied()
            .unwrap_or(FALLBACK_COLOR);

        set.push(BodyInit {
            parent,
            position,
            mass,
            radius,
            orbit_radius,
            velocity,
            acceleration: NVec3::zeros(),
            color,
        });
        set.accelerations[i] = body_acceleration(&set, i);
    }

    Ok(set)
}

/// Circular-orbit speed around a parent of `parent_mass` (scaled units),
/// assuming parent mass dominates
pub fn orbital_speed(parent_mass: f64, orbit_radius: f64) -> f64 {
    (G * parent_mass * MASS_SCALE / orbit_radius).sqrt()
}

fn sphere_volume(radius: f64) -> f64 {
    4.0 / 3.0 * std::f64::consts::PI * radius * radius * radius
}

/// Random unit direction in the orbital plane, drawn as integer offsets
/// from the uniform integer source. A zero draw is retried; exhausting
/// the budget reports the degenerate vector instead of propagating NaN.
fn in_plane_unit(rng: &mut impl Rng) -> SimResult<NVec3> {
    for _ in 0..MAX_DIRECTION_DRAWS {
        let v = NVec3::new(
            rng.gen_range(-100..=100i32) as f64,
            rng.gen_range(-100..=100i32) as f64,
            0.0,
        );
        if let Ok(unit) = try_unit(&v) {
            return Ok(unit);
        }
    }
    Err(SimError::DegenerateVector)
}
