//! Runtime parameters for a scenario
//!
//! `Parameters` holds the settings that outlive generation:
//! - `time_scale` stretching wall-clock frame deltas into simulated time,
//! - the RNG `seed` the system was generated from, kept for reproducibility.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub time_scale: f64, // simulated seconds per wall-clock second
    pub seed: u64,       // deterministic generation seed
}
