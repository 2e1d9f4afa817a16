//! Per-tick movement and flocking step.
//!
//! Each tick applies seek-to-target steering plus pairwise separation to
//! every unit that has a move target:
//!
//! 1. Arrival: inside `arrival_radius` the target is cleared and velocity
//!    zeroed.
//! 2. Seek: desired velocity is the normalized direction to the target at
//!    `max_speed`.
//! 3. Separation: neighbors inside `separation_radius` repel with weight
//!    `separation_radius - distance` (linear decay, zero at the radius).
//! 4. The combined force is re-normalized to `max_speed` and added straight
//!    to the position.
//!
//! Units without a target are not touched at all: their velocity keeps its
//! last value. A unit only coasts to a stop by arriving, never by idling.
//!
//! # Snapshot semantics
//!
//! Every separation term for a tick is computed against the pre-tick
//! positions of all units. Positions are copied out before any unit is
//! mutated, so the order units are processed in never changes the result.
//!
//! # Complexity
//!
//! O(U) neighbors per unit, O(U^2) per tick world-wide. There is no spatial
//! partitioning; this is an accepted limitation at the unit counts this
//! engine targets.

use glam::Vec2;
use tracing::trace;

use crate::unit::UnitId;
use crate::world::World;

/// Default weight applied to the summed separation force.
pub const SEPARATION_FORCE: f32 = 0.5;

/// Advances the world one tick with the default separation weight.
pub fn step_default(world: &mut World) {
    step(world, SEPARATION_FORCE);
}

/// Advances the world one tick.
///
/// Applies the seek/separation update to every targeted unit, then advances
/// the world's tick counter. Idle units are left untouched.
pub fn step(world: &mut World, separation_force: f32) {
    // Pre-tick snapshot: every unit's separation term must see the same
    // positions regardless of processing order.
    let snapshot: Vec<(UnitId, Vec2)> = world.units().map(|(id, u)| (id, u.position)).collect();

    for &(id, position) in &snapshot {
        let (target, tunables) = {
            let Some(unit) = world.get(id) else { continue };
            let Some(target) = unit.target else { continue };
            (target, unit.tunables())
        };

        let to_target = target - position;
        if to_target.length() < tunables.arrival_radius {
            if let Some(unit) = world.get_mut(id) {
                unit.target = None;
                unit.velocity = Vec2::ZERO;
            }
            trace!(unit = %id, "arrived at target");
            continue;
        }

        let desired = to_target.normalize_or_zero() * tunables.max_speed;
        let separation = separation_impulse(id, position, tunables.separation_radius, &snapshot);

        // Exact cancellation normalizes to zero: the unit stands still this
        // tick but keeps its target.
        let velocity =
            (desired + separation * separation_force).normalize_or_zero() * tunables.max_speed;

        if let Some(unit) = world.get_mut(id) {
            unit.velocity = velocity;
            unit.position += velocity;
        }
    }

    world.advance_tick();
}

/// Summed repulsion from all snapshot neighbors within `radius`.
///
/// Each neighbor contributes `normalize(self - other) * (radius - distance)`:
/// closer units push harder, units at or beyond the radius contribute
/// nothing. Coincident units contribute nothing (zero-guarded normalize).
fn separation_impulse(id: UnitId, position: Vec2, radius: f32, snapshot: &[(UnitId, Vec2)]) -> Vec2 {
    let mut separation = Vec2::ZERO;
    for &(other_id, other_position) in snapshot {
        if other_id == id {
            continue;
        }
        let diff = position - other_position;
        let distance = diff.length();
        if distance < radius {
            separation += diff.normalize_or_zero() * (radius - distance);
        }
    }
    separation
}
