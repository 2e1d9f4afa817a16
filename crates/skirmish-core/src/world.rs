//! World: the single owner of the unit collection.
//!
//! Units are stored in a `BTreeMap` so iteration always happens in `UnitId`
//! order, which keeps the physics step and the selection controller
//! deterministic across runs and platforms. IDs are assigned monotonically
//! and never reused.
//!
//! The command controller and the physics step both borrow the world; neither
//! takes ownership.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::unit::{Unit, UnitId};

/// Container for all units in the simulation.
///
/// # Example
///
/// ```
/// use glam::Vec2;
/// use skirmish_core::{PlayerId, Unit, World};
///
/// let mut world = World::new();
/// let a = world.spawn(Unit::new(Vec2::ZERO, 32.0, PlayerId::new(1)).unwrap());
/// let b = world.spawn(Unit::new(Vec2::new(50.0, 0.0), 32.0, PlayerId::new(2)).unwrap());
///
/// assert!(a < b);
/// assert_eq!(world.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    units: BTreeMap<UnitId, Unit>,
    next_id: u64,
    tick: u64,
}

impl World {
    /// Creates an empty world at tick 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a unit to the world, assigning the next monotonic ID.
    pub fn spawn(&mut self, unit: Unit) -> UnitId {
        let id = UnitId::new(self.next_id);
        self.next_id += 1;
        self.units.insert(id, unit);
        id
    }

    /// Returns a reference to the unit with the given ID.
    #[must_use]
    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    /// Returns a mutable reference to the unit with the given ID.
    #[must_use]
    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(&id)
    }

    /// Number of units in the world.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if no units have been spawned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Iterates units in ID order.
    pub fn units(&self) -> impl Iterator<Item = (UnitId, &Unit)> {
        self.units.iter().map(|(id, unit)| (*id, unit))
    }

    /// Iterates units mutably in ID order.
    pub fn units_mut(&mut self) -> impl Iterator<Item = (UnitId, &mut Unit)> {
        self.units.iter_mut().map(|(id, unit)| (*id, unit))
    }

    /// Iterates unit IDs in order.
    pub fn ids(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.units.keys().copied()
    }

    /// The current simulation tick.
    #[must_use]
    pub const fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Advances the tick counter by one. Called once per physics step.
    pub fn advance_tick(&mut self) {
        self.tick += 1;
    }
}
