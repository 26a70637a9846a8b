//! Semi-implicit (Euler-Cromer) time integration
//!
//! Velocity is advanced first from the current acceleration, then position is
//! advanced with the *new* velocity. This keeps orbits bounded over long runs
//! where explicit Euler spirals outwards.

use crate::error::{Error, Result};
use crate::simulation::states::{Body, NVec2, System};
use crate::simulation::units::DISPLAY_UNITS_PER_AU;

impl Body {
    /// Advance this body by `timestep` years using its accumulated force
    pub fn integrate(&mut self, timestep: f64) {
        // v_n+1 = v_n + dt * a_n
        self.v += timestep * self.acceleration();

        // x_n+1 = x_n + dt * v_n+1, converted back to display units
        self.x += DISPLAY_UNITS_PER_AU * timestep * self.v;
    }

    pub fn reset_velocities(&mut self) {
        self.v = NVec2::zeros();
    }

    fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite())
    }
}

/// Integration phase: advance every body in collection order.
/// Must only run after the force phase of the same tick has completed
pub fn euler_cromer(sys: &mut System, timestep: f64) -> Result<()> {
    for body in sys.bodies_mut() {
        body.integrate(timestep);
        if !body.is_finite() {
            return Err(Error::NonFiniteState {
                name: body.name().to_string(),
            });
        }
    }
    Ok(())
}
