//! Core state types for the solar system simulation.
//!
//! Defines the body and the body collection:
//! - `Body`   a point mass with its current and original (reset) state
//! - `System` an arena of bodies addressed by stable `BodyId`s
//!
//! Positions are display coordinates (see [`crate::simulation::units`]),
//! velocities are AU per year and masses are relative to the Sun.

use nalgebra::Vector2;

use crate::error::{Error, Result};
use crate::simulation::color::Color;

pub type NVec2 = Vector2<f64>;

/// Default cap on the number of bodies in one system
pub const MAX_BODIES: usize = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: String,
    pub(crate) x: NVec2, // position
    x0: NVec2,           // original position
    pub(crate) x_prev: NVec2, // position at the start of the last tick
    pub(crate) v: NVec2, // velocity
    v0: NVec2,           // original velocity
    pub(crate) f: NVec2, // accumulated force
    m: f64,              // mass
    color: Color,
    color0: Color,
    size: f64, // display radius
}

impl Body {
    /// Create a body with the given initial state and no accumulated force.
    /// Fails if `mass` is not finite and strictly positive
    pub fn new(
        name: impl Into<String>,
        position: NVec2,
        velocity: NVec2,
        mass: f64,
        color: Color,
        size: f64,
    ) -> Result<Self> {
        let name = name.into();
        validate_mass(&name, mass)?;

        Ok(Self {
            name,
            x: position,
            x0: position,
            x_prev: position,
            v: velocity,
            v0: velocity,
            f: NVec2::zeros(),
            m: mass,
            color: color.clone(),
            color0: color,
            size,
        })
    }

    /// Seed the accumulated force, used when restoring a stored body
    pub fn with_force(mut self, force: NVec2) -> Self {
        self.f = force;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn set_position(&mut self, position: NVec2) {
        self.x = position;
    }

    pub fn original_position(&self) -> NVec2 {
        self.x0
    }

    pub fn previous_position(&self) -> NVec2 {
        self.x_prev
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn set_velocity(&mut self, velocity: NVec2) {
        self.v = velocity;
    }

    pub fn original_velocity(&self) -> NVec2 {
        self.v0
    }

    pub fn force(&self) -> NVec2 {
        self.f
    }

    pub fn set_force(&mut self, force: NVec2) {
        self.f = force;
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn set_mass(&mut self, mass: f64) -> Result<()> {
        validate_mass(&self.name, mass)?;
        self.m = mass;
        Ok(())
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn original_color(&self) -> &Color {
        &self.color0
    }

    pub fn set_original_color(&mut self, color: Color) {
        self.color0 = color;
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn set_size(&mut self, size: f64) {
        self.size = size;
    }

    /// Rewind to the state captured at construction.
    /// Calling it again without intervening ticks changes nothing
    pub fn restore_original(&mut self) {
        self.x = self.x0;
        self.x_prev = self.x0;
        self.v = self.v0;
        self.color = self.color0.clone();
        self.reset_forces();
    }
}

fn validate_mass(name: &str, mass: f64) -> Result<()> {
    if mass.is_finite() && mass > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidMass {
            name: name.to_string(),
            mass,
        })
    }
}

/// Stable handle to a body inside a [`System`].
///
/// A freed slot is handed out again with a bumped generation, so the handle
/// of a removed body never resolves to the body that replaced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId {
    index: usize,
    generation: u32,
}

impl BodyId {
    pub fn index(self) -> usize {
        self.index
    }
}

/// Out-of-band changes applied to a body between ticks.
/// `None` fields are left untouched; the original snapshot is never modified
#[derive(Debug, Clone, Default)]
pub struct BodyEdit {
    pub position: Option<NVec2>,
    pub velocity: Option<NVec2>,
    pub mass: Option<f64>,
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Slot {
    generation: u32,
    pub(crate) body: Option<Body>,
}

/// Ordered collection of bodies plus the number of ticks run so far.
///
/// Bodies live in slots addressed by [`BodyId`]. `order` keeps the live slot
/// indices in insertion order; freed slots are recycled, so the arena never
/// grows past the largest number of bodies held at once
#[derive(Debug, Clone)]
pub struct System {
    pub(crate) slots: Vec<Slot>,
    pub(crate) order: Vec<usize>,
    free: Vec<usize>,
    pub tick: u64,
    max_bodies: usize,
}

impl Default for System {
    fn default() -> Self {
        Self::with_capacity(MAX_BODIES)
    }
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty system that accepts at most `max_bodies` bodies
    pub fn with_capacity(max_bodies: usize) -> Self {
        Self {
            slots: Vec::new(),
            order: Vec::new(),
            free: Vec::new(),
            tick: 0,
            max_bodies,
        }
    }

    /// Build a system from `bodies`, keeping only the first `max_bodies`
    pub fn from_bodies(bodies: impl IntoIterator<Item = Body>, max_bodies: usize) -> Self {
        let mut sys = Self::with_capacity(max_bodies);
        let mut dropped = 0usize;
        for body in bodies {
            if sys.insert(body).is_err() {
                dropped += 1;
            }
        }
        if dropped > 0 {
            log::warn!(
                "body limit of {} reached, {} bodies were not loaded",
                max_bodies,
                dropped
            );
        }
        sys
    }

    pub fn max_bodies(&self) -> usize {
        self.max_bodies
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of slots backing the arena, live or free
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Append a body. Fails once the body limit is reached
    pub fn insert(&mut self, body: Body) -> Result<BodyId> {
        if self.len() >= self.max_bodies {
            return Err(Error::CapacityReached {
                max: self.max_bodies,
            });
        }
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(Slot::default());
                self.slots.len() - 1
            }
        };
        let slot = &mut self.slots[index];
        slot.body = Some(body);
        self.order.push(index);

        Ok(BodyId {
            index,
            generation: slot.generation,
        })
    }

    /// Remove a body; must only be called between ticks
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let slot = self
            .slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)?;
        let body = slot.body.take()?;
        slot.generation = slot.generation.wrapping_add(1);

        self.order.retain(|&i| i != id.index);
        self.free.push(id.index);
        log::debug!("removed body `{}` ({:?})", body.name(), id);
        Some(body)
    }

    pub fn clear(&mut self) {
        for index in self.order.drain(..) {
            let slot = &mut self.slots[index];
            slot.body = None;
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(index);
        }
        self.tick = 0;
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.body.as_ref())
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.body.as_mut())
    }

    /// First body (in insertion order) with the given name
    pub fn find_by_name(&self, name: &str) -> Option<BodyId> {
        self.iter()
            .find(|(_, b)| b.name() == name)
            .map(|(id, _)| id)
    }

    /// Live bodies in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.order.iter().filter_map(move |&index| {
            let slot = &self.slots[index];
            let id = BodyId {
                index,
                generation: slot.generation,
            };
            slot.body.as_ref().map(|b| (id, b))
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyId, &mut Body)> {
        // `order` holds each index at most once, so every slot is taken once
        let mut slots: Vec<Option<&mut Slot>> = self.slots.iter_mut().map(Some).collect();
        self.order.iter().filter_map(move |&index| {
            let slot = slots[index].take()?;
            let id = BodyId {
                index,
                generation: slot.generation,
            };
            slot.body.as_mut().map(|b| (id, b))
        })
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.iter().map(|(_, b)| b)
    }

    pub fn bodies_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.iter_mut().map(|(_, b)| b)
    }

    /// Apply an edit to the body called `name`
    pub fn edit(&mut self, name: &str, edit: BodyEdit) -> Result<()> {
        let id = self
            .find_by_name(name)
            .ok_or_else(|| Error::UnknownBody(name.to_string()))?;
        let body = self
            .get_mut(id)
            .ok_or_else(|| Error::UnknownBody(name.to_string()))?;

        // validate first so a rejected edit leaves the body untouched
        if let Some(m) = edit.mass {
            validate_mass(name, m)?;
        }
        if let Some(x) = edit.position {
            body.x = x;
        }
        if let Some(v) = edit.velocity {
            body.v = v;
        }
        if let Some(m) = edit.mass {
            body.m = m;
        }
        if let Some(c) = edit.color {
            body.color = c;
        }
        Ok(())
    }

    /// Rewind every body to its original state and reset the tick counter
    pub fn restore_original(&mut self) {
        for body in self.bodies_mut() {
            body.restore_original();
        }
        self.tick = 0;
    }

    /// Zero the velocity of every body
    pub fn stop(&mut self) {
        for body in self.bodies_mut() {
            body.reset_velocities();
        }
    }

    /// Mutable access to the bodies in slots `i` and `j`.
    /// Both slots must be occupied and `i != j`
    pub(crate) fn pair_mut(&mut self, i: usize, j: usize) -> Option<(&mut Body, &mut Body)> {
        debug_assert_ne!(i, j);
        if i < j {
            let (lo, hi) = self.slots.split_at_mut(j);
            Some((lo[i].body.as_mut()?, hi[0].body.as_mut()?))
        } else {
            let (lo, hi) = self.slots.split_at_mut(i);
            Some((hi[0].body.as_mut()?, lo[j].body.as_mut()?))
        }
    }
}
