//! Factory helpers for integration scenarios.

use glam::Vec2;

use crate::command::{CommandController, InputEvent, Pointer};
use crate::unit::{PlayerId, Unit, UnitId};
use crate::world::World;

/// Spawns a default 32-px unit for player 1 at the given position.
pub fn spawn_unit(world: &mut World, position: Vec2) -> UnitId {
    world.spawn(Unit::new(position, 32.0, PlayerId::new(1)).unwrap())
}

/// Spawns the classic demo layout: two rows of three units, 50 px apart,
/// starting at (100, 100).
pub fn spawn_demo_formation(world: &mut World) -> Vec<UnitId> {
    let positions = [
        (100.0, 100.0),
        (150.0, 100.0),
        (200.0, 100.0),
        (100.0, 150.0),
        (150.0, 150.0),
        (200.0, 150.0),
    ];
    positions
        .iter()
        .map(|&(x, y)| spawn_unit(world, Vec2::new(x, y)))
        .collect()
}

/// Performs a full marquee drag from `from` to `to` without the additive
/// modifier.
pub fn drag_select(controller: &mut CommandController, world: &mut World, from: Vec2, to: Vec2) {
    controller.handle_event(InputEvent::PrimaryDown(from), Pointer::at(from), world);
    controller.handle_event(InputEvent::PrimaryUp, Pointer::at(to), world);
}
