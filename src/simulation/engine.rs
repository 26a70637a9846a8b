//! Tick orchestration
//!
//! A tick is the force phase over all bodies followed by the integration
//! phase over all bodies, always in that order and always to completion.

use crate::error::{Error, Result};
use crate::simulation::forces::{accumulate_forces, ForceMode};
use crate::simulation::integrator::euler_cromer;
use crate::simulation::params::Parameters;
use crate::simulation::states::System;
use crate::simulation::units::ONE_DAY;

/// Owns the time step and force mode; holds no per-body state
#[derive(Debug, Clone)]
pub struct Simulator {
    timestep: f64,
    force_mode: ForceMode,
}

impl Default for Simulator {
    fn default() -> Self {
        Self {
            timestep: ONE_DAY,
            force_mode: ForceMode::Pairwise,
        }
    }
}

impl Simulator {
    pub fn new(timestep: f64) -> Result<Self> {
        let mut sim = Self::default();
        sim.set_timestep(timestep)?;
        Ok(sim)
    }

    pub fn from_parameters(params: &Parameters) -> Result<Self> {
        Ok(Self::new(params.timestep)?.with_force_mode(params.force_mode))
    }

    pub fn with_force_mode(mut self, mode: ForceMode) -> Self {
        self.force_mode = mode;
        self
    }

    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    /// Change the time step; takes effect on the next tick
    pub fn set_timestep(&mut self, timestep: f64) -> Result<()> {
        validate_timestep(timestep)?;
        log::debug!("timestep {} -> {}", self.timestep, timestep);
        self.timestep = timestep;
        Ok(())
    }

    pub fn force_mode(&self) -> ForceMode {
        self.force_mode
    }

    pub fn set_force_mode(&mut self, mode: ForceMode) {
        self.force_mode = mode;
    }

    /// Run one full tick over `sys`.
    ///
    /// On error the tick is abandoned: a degenerate pair is detected before
    /// any body has moved, a non-finite state after integration has begun.
    /// Either way `sys.tick` is not advanced
    pub fn run_tick(&self, sys: &mut System) -> Result<()> {
        accumulate_forces(sys, self.force_mode)?;
        euler_cromer(sys, self.timestep)?;
        sys.tick += 1;
        log::trace!("tick {} done ({} bodies)", sys.tick, sys.len());
        Ok(())
    }

    /// Run `ticks` ticks, stopping at the first failure
    pub fn run(&self, sys: &mut System, ticks: u64) -> Result<()> {
        for _ in 0..ticks {
            self.run_tick(sys)?;
        }
        Ok(())
    }
}

/// One tick with the reference pairwise force evaluation
pub fn run_tick(sys: &mut System, timestep: f64) -> Result<()> {
    Simulator::new(timestep)?.run_tick(sys)
}

fn validate_timestep(timestep: f64) -> Result<()> {
    if timestep.is_finite() && timestep > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidTimestep(timestep))
    }
}
