//! Render adapter: registry state -> wireframe-sphere draw commands
//!
//! Pure read of the body registry. Maps simulation units (meters) into
//! render-space units (AU-sized coordinates) and pairs each body with its
//! ring/slice density and color. Has no failure modes: a missing color
//! falls back to grey rather than erroring.

use crate::simulation::consts::{AU, DRAW_SCALE, FALLBACK_COLOR};
use crate::simulation::states::BodySet;

/// Wireframe sphere density, shared by every body
#[derive(Debug, Clone, Copy)]
pub struct DrawOptions {
    pub rings: usize,
    pub slices: usize,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self { rings: 7, slices: 8 }
    }
}

/// One wireframe-sphere draw call in render-space units
#[derive(Debug, Clone, Copy)]
pub struct SphereDraw {
    pub center: [f32; 3],
    pub radius: f32,
    pub rings: usize,
    pub slices: usize,
    pub color: [f32; 3],
}

/// Map every body to a draw command: center = position / AU,
/// radius = physical radius magnified by `DRAW_SCALE` then AU-scaled
pub fn draw_commands(set: &BodySet, opts: &DrawOptions) -> Vec<SphereDraw> {
    (0..set.len())
        .map(|i| {
            let p = set.positions[i] / AU;
            SphereDraw {
                center: [p.x as f32, p.y as f32, p.z as f32],
                radius: (set.radii[i] * DRAW_SCALE / AU) as f32,
                rings: opts.rings,
                slices: opts.slices,
                color: set.colors.get(i).copied().unwrap_or(FALLBACK_COLOR),
            }
        })
        .collect()
}
