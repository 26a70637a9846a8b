pub mod error;
pub mod simulation;
pub mod configuration;
pub mod persistence;
pub mod visualization;
pub mod benchmark;

pub use error::{Error, Result};
pub use simulation::states::{Body, BodyEdit, BodyId, System, NVec2, MAX_BODIES};
pub use simulation::color::Color;
pub use simulation::forces::{accumulate_forces, ForceMode};
pub use simulation::integrator::euler_cromer;
pub use simulation::engine::{run_tick, Simulator};
pub use simulation::params::Parameters;
pub use simulation::scenario::{solar_system_bodies, Scenario};
pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};
pub use persistence::csv_store;
pub use visualization::frame::{BodyFrame, DisplayOptions, Frame};
pub use benchmark::benchmark::{bench_energy_drift, bench_force_modes, time_force_modes};
