pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{BodyInit, BodySet, NVec3, System};
pub use simulation::forces::{accumulate_accels, body_acceleration, grav_force};
pub use simulation::integrator::euler_integrator;
pub use simulation::generator::{generate_system, orbital_speed};
pub use simulation::scenario::Scenario;
pub use simulation::params::Parameters;
pub use simulation::error::{SimError, SimResult};

pub use configuration::config::{DisplayConfig, PlaybackConfig, ScenarioConfig, SystemConfig};

pub use visualization::render::{draw_commands, DrawOptions, SphereDraw};
pub use visualization::vis3d::run_viewer;
