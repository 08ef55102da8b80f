//! Error types for system generation
//!
//! Generation-time errors are fatal to scenario construction: no partially
//! initialized registry ever reaches the simulation loop. The per-frame
//! integrator deliberately has no error path; degenerate runtime states
//! (coincident bodies, extreme mass ratios) surface as visibly wrong motion
//! instead of per-step validation overhead.

use thiserror::Error;

/// Result type for generation and scenario construction
pub type SimResult<T> = Result<T, SimError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Normalization was attempted on a (near) zero-length vector and the
    /// bounded redraw budget was exhausted
    #[error("degenerate zero-length vector during system generation")]
    DegenerateVector,

    /// A body's parent index is out of range or would not terminate at the
    /// root; detected immediately after generation, never silently fixed
    #[error("body {index} has invalid parent index {parent}")]
    InvalidHierarchy { index: usize, parent: usize },
}
