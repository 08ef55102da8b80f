//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`SystemConfig`]   – what to generate (body count, RNG seed)
//! - [`PlaybackConfig`] – how fast simulated time runs
//! - [`DisplayConfig`]  – wireframe sphere density for the viewer
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! system:
//!   body_count: 0       # 0 -> solar-system preset, n -> procedural n bodies
//!   seed: 42            # deterministic generation seed
//!
//! playback:
//!   time_scale: 1.0e6   # simulated seconds per wall-clock second
//!
//! display:              # optional
//!   rings: 7            # wireframe sphere latitude rings
//!   slices: 8           # wireframe sphere longitude slices
//! ```
//!
//! The engine maps this configuration into its runtime scenario
//! representation before the frame loop starts.

use serde::Deserialize;

/// What system to generate
#[derive(Deserialize, Debug, Clone)]
pub struct SystemConfig {
    pub body_count: u32, // 0 -> fixed solar-system preset, otherwise procedural
    pub seed: u64,       // deterministic seed to make runs reproducible
}

/// Playback speed for the external frame clock
#[derive(Deserialize, Debug, Clone)]
pub struct PlaybackConfig {
    pub time_scale: f64, // frame deltas are multiplied by this before integration
}

/// Wireframe sphere density for the viewer
#[derive(Deserialize, Debug, Clone, Default)]
pub struct DisplayConfig {
    pub rings: Option<usize>,  // defaults to 7
    pub slices: Option<usize>, // defaults to 8
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub system: SystemConfig,     // generation inputs
    pub playback: PlaybackConfig, // time scaling
    pub display: Option<DisplayConfig>, // viewer options, all defaulted
}
