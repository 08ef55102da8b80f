pub mod consts;
pub mod error;
pub mod math;
pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod generator;
pub mod scenario;
