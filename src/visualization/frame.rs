//! Read-only snapshot of a system for renderers
//!
//! A renderer never touches `Body` directly: it captures a `Frame` after a
//! tick and draws from that. Display toggles are passed in explicitly through
//! `DisplayOptions`.

use std::fmt;

use crate::simulation::color::Color;
use crate::simulation::states::{BodyId, NVec2, System};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub traces: bool,       // previous -> current position segment
    pub labels: bool,       // position, velocity and distance to the Sun
    pub lines_to_sun: bool, // segment from each body to the first body
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyFrame {
    pub id: BodyId,
    pub name: String,
    pub position: NVec2,
    pub previous_position: NVec2,
    pub color: Color,
    pub size: f64,
    pub label: Option<String>,
    pub trace: Option<(NVec2, NVec2)>,
    pub line_to_sun: Option<(NVec2, NVec2)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub tick: u64,
    pub bodies: Vec<BodyFrame>,
}

impl Frame {
    /// Snapshot every body of `sys`. The first body is treated as the Sun
    pub fn capture(sys: &System, opts: &DisplayOptions) -> Self {
        let sun = sys.bodies().next();

        let bodies = sys
            .iter()
            .enumerate()
            .map(|(i, (id, body))| {
                let is_sun = i == 0;

                let label = opts.labels.then(|| {
                    let x = body.position();
                    let v = body.velocity();
                    let mut text = format!(
                        "{} pos ({:.2}, {:.2}) vel ({:.2}, {:.2}) AU/year",
                        body.name(),
                        x.x,
                        x.y,
                        v.x,
                        v.y
                    );
                    if let (Some(sun), false) = (sun, is_sun) {
                        text.push_str(&format!(", {:.2} AU from {}", body.distance(sun), sun.name()));
                    }
                    text
                });

                let trace = opts
                    .traces
                    .then(|| (body.previous_position(), body.position()));

                let line_to_sun = match sun {
                    Some(sun) if opts.lines_to_sun && !is_sun => {
                        Some((body.position(), sun.position()))
                    }
                    _ => None,
                };

                BodyFrame {
                    id,
                    name: body.name().to_string(),
                    position: body.position(),
                    previous_position: body.previous_position(),
                    color: body.color().clone(),
                    size: body.size(),
                    label,
                    trace,
                    line_to_sun,
                }
            })
            .collect();

        Self {
            tick: sys.tick,
            bodies,
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "tick {}", self.tick)?;
        for b in &self.bodies {
            match &b.label {
                Some(label) => writeln!(f, "  {}", label)?,
                None => writeln!(
                    f,
                    "  {:<10} ({:>9.3}, {:>9.3})",
                    b.name, b.position.x, b.position.y
                )?,
            }
        }
        Ok(())
    }
}
