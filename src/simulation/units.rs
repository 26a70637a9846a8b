//! Fixed unit system of the simulation
//!
//! Physics runs in astronomical units, Earth years and solar masses. Bodies
//! live in display coordinates where one AU spans `DISPLAY_UNITS_PER_AU`
//! units; distances are converted down before the force law and velocities
//! are converted back up when positions are advanced.

/// Display units per astronomical unit
pub const DISPLAY_UNITS_PER_AU: f64 = 15.0;

/// Gravitational constant in AU^3 / (M_sun * year^2), i.e. ~4π²
pub const SCALED_G: f64 = 39.4767;

pub const ONE_YEAR: f64 = 1.0;
/// One day expressed in years
pub const ONE_DAY: f64 = 0.00274;

// masses relative to the Sun
pub const SUN_MASS: f64 = 1.0;
pub const MERCURY_MASS: f64 = 1.652e-7;
pub const VENUS_MASS: f64 = 2.447e-6;
pub const EARTH_MASS: f64 = 3.003e-6;
pub const MARS_MASS: f64 = 3.213e-7;
pub const JUPITER_MASS: f64 = 9.543e-4;
pub const SATURN_MASS: f64 = 2.857e-4;
pub const URANUS_MASS: f64 = 4.365e-5;
pub const NEPTUNE_MASS: f64 = 5.149e-5;

/// Converts a display coordinate into AU
#[inline]
pub fn to_au(display: f64) -> f64 {
    display / DISPLAY_UNITS_PER_AU
}
