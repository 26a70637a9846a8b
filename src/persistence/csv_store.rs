//! Comma-separated body files
//!
//! One body per line, no header, fields in the fixed order
//!
//! ```text
//! name,posX,posY,velX,velY,forceX,forceY,mass,color,size
//! ```
//!
//! Floats are written in their shortest round-trip form, so a save followed by
//! a load reproduces every field exactly. Colors are written by name and read
//! back case-insensitively.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::simulation::color::Color;
use crate::simulation::states::{Body, NVec2, System};

pub const FIELDS_PER_RECORD: usize = 10;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct BodyRecord {
    name: String,
    pos_x: f64,
    pos_y: f64,
    vel_x: f64,
    vel_y: f64,
    force_x: f64,
    force_y: f64,
    mass: f64,
    color: String,
    size: f64,
}

impl From<&Body> for BodyRecord {
    fn from(body: &Body) -> Self {
        let (x, v, f) = (body.position(), body.velocity(), body.force());
        Self {
            name: body.name().to_string(),
            pos_x: x.x,
            pos_y: x.y,
            vel_x: v.x,
            vel_y: v.y,
            force_x: f.x,
            force_y: f.y,
            mass: body.mass(),
            color: body.color().name().to_string(),
            size: body.size(),
        }
    }
}

impl BodyRecord {
    fn into_body(self) -> Result<Body> {
        let color = Color::parse(&self.color)?;
        let body = Body::new(
            self.name,
            NVec2::new(self.pos_x, self.pos_y),
            NVec2::new(self.vel_x, self.vel_y),
            self.mass,
            color,
            self.size,
        )?;
        Ok(body.with_force(NVec2::new(self.force_x, self.force_y)))
    }
}

/// Write `bodies` to `writer`, one line each
pub fn write_bodies<'a, W: io::Write>(
    writer: W,
    bodies: impl IntoIterator<Item = &'a Body>,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for body in bodies {
        wtr.serialize(BodyRecord::from(body)).map_err(Error::csv)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read every body from `reader`. Blank lines are skipped; any other line
/// that does not hold exactly one valid body fails the whole read.
/// Whitespace around every field but the name is ignored
pub fn read_bodies<R: io::Read>(reader: R) -> Result<Vec<Body>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // field count is checked per record below
        .from_reader(reader);

    let mut bodies = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(Error::csv)?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.len() != FIELDS_PER_RECORD {
            return Err(Error::MalformedRecord {
                line,
                message: format!(
                    "expected {} fields, found {}",
                    FIELDS_PER_RECORD,
                    record.len()
                ),
            });
        }

        let parsed: BodyRecord = trim_values(&record)
            .deserialize(None)
            .map_err(Error::csv)?;
        let body = parsed.into_body().map_err(|err| Error::MalformedRecord {
            line,
            message: err.to_string(),
        })?;
        bodies.push(body);
    }
    Ok(bodies)
}

/// Save every body of `sys` to `path`, appending `.csv` if the path lacks it.
/// Returns the path actually written
pub fn save(path: impl AsRef<Path>, sys: &System) -> Result<PathBuf> {
    let path = with_csv_extension(path.as_ref());
    let file = File::create(&path)?;
    write_bodies(file, sys.bodies())?;

    log::info!("saved {} bodies to {}", sys.len(), path.display());
    Ok(path)
}

/// Load all bodies stored at `path`
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Body>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let bodies = read_bodies(file)?;

    log::info!("loaded {} bodies from {}", bodies.len(), path.display());
    Ok(bodies)
}

/// Names are kept verbatim, numbers and colors are trimmed
fn trim_values(record: &StringRecord) -> StringRecord {
    let mut trimmed: StringRecord = record
        .iter()
        .enumerate()
        .map(|(i, field)| if i == 0 { field } else { field.trim() })
        .collect();
    trimmed.set_position(record.position().cloned());
    trimmed
}

fn with_csv_extension(path: &Path) -> PathBuf {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        path.to_path_buf()
    } else {
        let mut raw = path.as_os_str().to_owned();
        raw.push(".csv");
        PathBuf::from(raw)
    }
}
