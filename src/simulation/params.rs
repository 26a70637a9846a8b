//! Numerical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - time step per tick (years),
//! - force evaluation mode,
//! - body limit of the system

use crate::simulation::forces::ForceMode;
use crate::simulation::states::MAX_BODIES;
use crate::simulation::units::ONE_DAY;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub timestep: f64,          // simulated years per tick
    pub force_mode: ForceMode,  // pairwise or symmetric
    pub max_bodies: usize,      // body limit
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            timestep: ONE_DAY,
            force_mode: ForceMode::Pairwise,
            max_bodies: MAX_BODIES,
        }
    }
}
