//! Gravitational force primitives and the force phase of a tick
//!
//! Newton's law of gravitation in AU / year / solar-mass units. Distances are
//! measured on scaled coordinates (display units divided by
//! `DISPLAY_UNITS_PER_AU`), so the force law never sees display units.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::simulation::states::{Body, NVec2, System};
use crate::simulation::units::{to_au, SCALED_G};

/// How the force phase walks the body pairs
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForceMode {
    /// Every ordered pair is evaluated on its own, n*(n-1) evaluations
    #[default]
    #[serde(rename = "pairwise")]
    Pairwise,

    /// Every unordered pair is evaluated once and applied to both bodies
    /// with opposite signs. Agrees with `Pairwise` up to rounding
    #[serde(rename = "symmetric")]
    Symmetric,
}

impl Body {
    /// Displacement from this body to `other` in AU.
    /// Each coordinate is scaled before differencing
    fn scaled_offset(&self, other: &Body) -> NVec2 {
        other.x.map(to_au) - self.x.map(to_au)
    }

    /// Distance to `other` in AU
    pub fn distance(&self, other: &Body) -> f64 {
        self.scaled_offset(other).norm()
    }

    /// Magnitude of the attraction between this body and `other`
    pub fn pairwise_force(&self, other: &Body) -> Result<f64> {
        let d = self.distance(other);
        if d == 0.0 {
            return Err(self.degenerate_with(other));
        }
        Ok(SCALED_G * self.mass() * other.mass() / (d * d))
    }

    /// Add the pull of `other` to this body's accumulated force.
    /// `other` is left untouched
    pub fn add_force_from(&mut self, other: &Body) -> Result<()> {
        self.f += self.force_from(other)?;
        Ok(())
    }

    /// Force acting on this body due to `other`
    fn force_from(&self, other: &Body) -> Result<NVec2> {
        let r = self.scaled_offset(other);
        let d = r.norm();
        if d == 0.0 {
            return Err(self.degenerate_with(other));
        }
        let magnitude = SCALED_G * self.mass() * other.mass() / (d * d);
        // F * dx / d per component, in that order
        Ok(r.map(|c| magnitude * c / d))
    }

    /// `force / mass`; mass is guaranteed positive by construction
    pub fn acceleration(&self) -> NVec2 {
        self.f / self.mass()
    }

    pub fn reset_forces(&mut self) {
        self.f = NVec2::zeros();
    }

    fn degenerate_with(&self, other: &Body) -> Error {
        Error::DegeneratePair {
            first: self.name().to_string(),
            second: other.name().to_string(),
        }
    }
}

/// Force phase: recompute the net force on every body and snapshot its
/// position into `previous_position`.
///
/// No body is moved here, so every force of a tick sees the same
/// configuration
pub fn accumulate_forces(sys: &mut System, mode: ForceMode) -> Result<()> {
    match mode {
        ForceMode::Pairwise => accumulate_pairwise(sys),
        ForceMode::Symmetric => accumulate_symmetric(sys),
    }
}

fn accumulate_pairwise(sys: &mut System) -> Result<()> {
    let order = sys.order.clone();

    for &i in &order {
        if let Some(body) = sys.slots[i].body.as_mut() {
            body.reset_forces();
        }

        for &j in &order {
            if i == j {
                continue;
            }
            if let Some((body, other)) = sys.pair_mut(i, j) {
                body.add_force_from(other)?;
            }
        }

        if let Some(body) = sys.slots[i].body.as_mut() {
            body.x_prev = body.x;
        }
    }
    Ok(())
}

fn accumulate_symmetric(sys: &mut System) -> Result<()> {
    for body in sys.bodies_mut() {
        body.reset_forces();
    }

    let order = sys.order.clone();
    for (a, &i) in order.iter().enumerate() {
        for &j in &order[a + 1..] {
            let Some((bi, bj)) = sys.pair_mut(i, j) else {
                continue;
            };
            // equal and opposite
            let f = bi.force_from(bj)?;
            bi.f += f;
            bj.f -= f;
        }
    }

    for body in sys.bodies_mut() {
        body.x_prev = body.x;
    }
    Ok(())
}

impl System {
    /// Kinetic plus potential energy in solar masses * AU² / year².
    /// Fails if two bodies coincide
    pub fn total_energy(&self) -> Result<f64> {
        let bodies: Vec<&Body> = self.bodies().collect();

        let kinetic: f64 = bodies
            .iter()
            .map(|b| 0.5 * b.mass() * b.velocity().norm_squared())
            .sum();

        let mut potential = 0.0;
        for (i, bi) in bodies.iter().enumerate() {
            for bj in &bodies[i + 1..] {
                let d = bi.distance(bj);
                if d == 0.0 {
                    return Err(bi.degenerate_with(bj));
                }
                potential -= SCALED_G * bi.mass() * bj.mass() / d;
            }
        }

        Ok(kinetic + potential)
    }
}
