//! Build fully-initialized simulation scenarios
//!
//! Takes a `ScenarioConfig` (YAML-facing) or the built-in solar system and
//! produces a runtime bundle containing:
//! - the simulator (`Simulator`, time step and force mode)
//! - the numerical parameters it was built from (`Parameters`)
//! - the body collection (`System` with bodies at their original state)
//! - the bodies as loaded, which `reset` rebuilds the collection from
//!
//! The bundle is what a driver holds between ticks

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::Result;
use crate::simulation::color::Color;
use crate::simulation::engine::Simulator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};
use crate::simulation::units::*;

/// Display coordinates of the Sun in the default system
const SUN_POSITION: (f64, f64) = (500.0, 365.0);

#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub simulator: Simulator,
    pub system: System,
    loaded: Vec<Body>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            timestep: p_cfg.timestep,
            force_mode: p_cfg.force_mode,
            max_bodies: p_cfg.max_bodies,
        };

        let bodies = match cfg.bodies {
            Some(configs) => configs
                .iter()
                .map(body_from_config)
                .collect::<Result<Vec<Body>>>()?,
            None => solar_system_bodies()?,
        };

        Self::from_bodies(bodies, parameters)
    }

    /// Sun and the eight planets, one simulated day per tick
    pub fn solar_system() -> Result<Self> {
        Self::from_bodies(solar_system_bodies()?, Parameters::default())
    }

    pub fn from_bodies(bodies: Vec<Body>, parameters: Parameters) -> Result<Self> {
        let simulator = Simulator::from_parameters(&parameters)?;
        let system = System::from_bodies(bodies.iter().cloned(), parameters.max_bodies);

        log::info!(
            "scenario ready: {} bodies, timestep {} years, {:?} forces",
            system.len(),
            parameters.timestep,
            parameters.force_mode
        );

        Ok(Self {
            parameters,
            simulator,
            system,
            loaded: bodies,
        })
    }

    /// Bodies as they were when the scenario was built or last loaded
    pub fn loaded_bodies(&self) -> &[Body] {
        &self.loaded
    }

    /// Rebuild the collection from the loaded bodies and rewind them.
    /// Bodies added since the load are dropped and removed ones come back
    pub fn reset(&mut self) {
        self.system = System::from_bodies(self.loaded.iter().cloned(), self.parameters.max_bodies);
        self.system.restore_original();
        log::debug!("scenario reset to {} bodies", self.system.len());
    }

    /// Replace the bodies, making them the new reset point
    pub fn load_bodies(&mut self, bodies: Vec<Body>) {
        self.system = System::from_bodies(bodies.iter().cloned(), self.parameters.max_bodies);
        self.loaded = bodies;
    }

    /// Replace the bodies with the default solar system
    pub fn load_default_system(&mut self) -> Result<()> {
        self.load_bodies(solar_system_bodies()?);
        Ok(())
    }
}

fn body_from_config(bc: &BodyConfig) -> Result<Body> {
    Body::new(
        bc.name.clone(),
        NVec2::new(bc.x[0], bc.x[1]),
        NVec2::new(bc.v[0], bc.v[1]),
        bc.m,
        Color::parse(&bc.color)?,
        bc.size,
    )
}

/// Planets start on the +x axis from the Sun, moving in +y at their
/// circular orbital speed (AU / year)
pub fn solar_system_bodies() -> Result<Vec<Body>> {
    let (sx, sy) = SUN_POSITION;

    // name, distance in display units, orbital speed, mass, color, size
    let table: [(&str, f64, f64, f64, &str, f64); 9] = [
        ("Sun", 0.0, 0.0, SUN_MASS, "yellow", 6.0),
        ("Mercury", 5.85, 9.9921636, MERCURY_MASS, "red", 3.0),
        ("Venus", 10.86, 7.3781799, VENUS_MASS, "saddlebrown", 3.0),
        ("Earth", 15.0, 6.283, EARTH_MASS, "blue", 3.0),
        ("Mars", 22.86, 5.0804039, MARS_MASS, "firebrick", 3.0),
        ("Jupiter", 78.045, 2.7615473, JUPITER_MASS, "rosybrown", 4.0),
        ("Saturn", 142.95, 2.023729, SATURN_MASS, "gold", 4.0),
        ("Uranus", 287.7, 1.433475, URANUS_MASS, "aquamarine", 4.0),
        ("Neptune", 450.9, 1.138348, NEPTUNE_MASS, "dodgerblue", 4.0),
    ];

    table
        .iter()
        .map(|&(name, r, speed, m, color, size)| {
            Body::new(
                name,
                NVec2::new(sx + r, sy),
                NVec2::new(0.0, speed),
                m,
                Color::parse(color)?,
                size,
            )
        })
        .collect()
}
