//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with the generated registry at t = 0)
//! - draw options for the viewer (`DrawOptions`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration and rendering systems.

use bevy::prelude::Resource;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::error::SimResult;
use crate::simulation::generator::generate_system;
use crate::simulation::params::Parameters;
use crate::simulation::states::System;
use crate::visualization::render::DrawOptions;

/// Bevy resource representing a fully-initialized scenario
///
/// This is the "runtime bundle" constructed from a [`ScenarioConfig`]: the
/// playback parameters, the generated system state, and the viewer's draw
/// options. Generation happens exactly once here; the frame loop only
/// mutates what it is given.
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub draw: DrawOptions,
}

impl Scenario {
    /// Generate and validate a scenario; any generation error is fatal and
    /// no partially-built system escapes
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        let parameters = Parameters {
            time_scale: cfg.playback.time_scale,
            seed: cfg.system.seed,
        };

        // Deterministic generation: same seed, same system
        let mut rng = ChaCha8Rng::seed_from_u64(parameters.seed);
        let bodies = generate_system(cfg.system.body_count, &mut rng)?;

        log::info!(
            "generated {} bodies (seed {}, {})",
            bodies.len(),
            parameters.seed,
            if cfg.system.body_count == 0 {
                "solar-system preset"
            } else {
                "procedural"
            }
        );

        let draw = cfg
            .display
            .map(|d| DrawOptions {
                rings: d.rings.unwrap_or(DrawOptions::default().rings),
                slices: d.slices.unwrap_or(DrawOptions::default().slices),
            })
            .unwrap_or_default();

        Ok(Self {
            parameters,
            system: System::new(bodies),
            draw,
        })
    }
}
