//! Core state types for the hierarchical orbital system
//!
//! Bodies live in a structure-of-arrays registry ([`BodySet`]) indexed by a
//! dense body index. Index 0 is always the root star; its parent entry is a
//! self-loop (0) rather than a sentinel. Every non-root body orbits the body
//! at `parents[i]`, and generation guarantees `parents[i] < i`, so a single
//! forward pass always sees fresh parent state.
//!
//! [`System`] wraps the registry together with the current simulation time.

use nalgebra::Vector3;

use super::error::{SimError, SimResult};

pub type NVec3 = Vector3<f64>;

/// Parallel-array storage for all per-body attributes
///
/// The arrays are kept the same length at all times; [`BodySet::push`] is
/// the only way to grow them. The registry is fixed-size once generation
/// completes: the integrator mutates attributes in place but never adds or
/// removes bodies.
#[derive(Debug, Clone, Default)]
pub struct BodySet {
    pub parents: Vec<usize>,       // index of the orbited body; 0 self-loops
    pub positions: Vec<NVec3>,     // meters, absolute
    pub masses: Vec<f64>,          // multiples of MASS_SCALE (1e24 kg)
    pub radii: Vec<f64>,           // meters, physical radius
    pub orbit_radii: Vec<f64>,     // meters, distance from parent at generation
    pub velocities: Vec<NVec3>,    // m/s
    pub accelerations: Vec<NVec3>, // m/s^2, recomputed every step
    pub colors: Vec<[f32; 3]>,     // sRGB render tag, cosmetic only
}

/// All attributes of one body, handed to [`BodySet::push`] in one piece so
/// the parallel arrays can never go out of step
#[derive(Debug, Clone, Copy)]
pub struct BodyInit {
    pub parent: usize,
    pub position: NVec3,
    pub mass: f64,
    pub radius: f64,
    pub orbit_radius: f64,
    pub velocity: NVec3,
    pub acceleration: NVec3,
    pub color: [f32; 3],
}

impl BodySet {
    /// Empty registry preallocated for `n` bodies
    pub fn with_capacity(n: usize) -> Self {
        Self {
            parents: Vec::with_capacity(n),
            positions: Vec::with_capacity(n),
            masses: Vec::with_capacity(n),
            radii: Vec::with_capacity(n),
            orbit_radii: Vec::with_capacity(n),
            velocities: Vec::with_capacity(n),
            accelerations: Vec::with_capacity(n),
            colors: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Append one body, extending every attribute array together
    pub fn push(&mut self, body: BodyInit) -> usize {
        let index = self.parents.len();
        self.parents.push(body.parent);
        self.positions.push(body.position);
        self.masses.push(body.mass);
        self.radii.push(body.radius);
        self.orbit_radii.push(body.orbit_radius);
        self.velocities.push(body.velocity);
        self.accelerations.push(body.acceleration);
        self.colors.push(body.color);
        index
    }

    /// Position of body `i` relative to its parent
    pub fn relative_position(&self, i: usize) -> NVec3 {
        self.positions[i] - self.positions[self.parents[i]]
    }

    /// Check the parent chain invariant: the root self-loops at 0 and every
    /// other body references a strictly lower index, so every chain is
    /// acyclic and terminates at the root. Fails fast, never repairs.
    pub fn validate_hierarchy(&self) -> SimResult<()> {
        if self.is_empty() {
            return Ok(());
        }
        if self.parents[0] != 0 {
            return Err(SimError::InvalidHierarchy {
                index: 0,
                parent: self.parents[0],
            });
        }
        for (i, &parent) in self.parents.iter().enumerate().skip(1) {
            if parent >= i {
                return Err(SimError::InvalidHierarchy { index: i, parent });
            }
        }
        Ok(())
    }
}

/// Registry plus the current simulation time
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: BodySet,
    pub t: f64, // simulated seconds since start
}

impl System {
    pub fn new(bodies: BodySet) -> Self {
        Self { bodies, t: 0.0 }
    }
}
