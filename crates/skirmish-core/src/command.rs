//! Selection and command controller.
//!
//! Turns decoded pointer events into unit state changes:
//!
//! - Primary button drag -> rectangular marquee selection. On release the
//!   selection is finalized in two explicit steps: clear everything unless
//!   the additive modifier is held, then union in every unit whose collision
//!   square overlaps the marquee.
//! - Secondary button press -> group move order. Selected units are assigned
//!   slots in a 3-wide grid around the clicked point, spaced by each unit's
//!   own separation radius, in selection order.
//!
//! The event vocabulary carries only button transitions; the frame driver
//! samples the pointer position and modifier state each frame and passes the
//! sample alongside every event (the marquee needs the release position,
//! which `PrimaryUp` itself does not carry).
//!
//! All transitions are total functions of controller state plus event; there
//! are no error paths.

use glam::Vec2;
use tracing::{debug, info};

use crate::math::Rect;
use crate::unit::UnitId;
use crate::world::World;

/// Grid formation width for group move orders.
const FORMATION_COLUMNS: usize = 3;

/// A decoded input event from the frame driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary (select) button pressed at a point.
    PrimaryDown(Vec2),
    /// Primary button released; the marquee ends at the sampled pointer.
    PrimaryUp,
    /// Secondary (command) button pressed at a point.
    SecondaryDown(Vec2),
    /// The frontend requested shutdown.
    Quit,
}

/// The pointer sample accompanying each event: current position plus whether
/// the additive-selection modifier is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    /// Current pointer position in world space.
    pub position: Vec2,
    /// Additive-selection modifier (shift in the classic binding).
    pub additive: bool,
}

impl Pointer {
    /// Pointer sample without the additive modifier.
    #[must_use]
    pub const fn at(position: Vec2) -> Self {
        Self {
            position,
            additive: false,
        }
    }

    /// Pointer sample with the additive modifier held.
    #[must_use]
    pub const fn additive(position: Vec2) -> Self {
        Self {
            position,
            additive: true,
        }
    }
}

/// Outcome of handling a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerStatus {
    /// Keep running.
    Continue,
    /// A [`InputEvent::Quit`] was seen; the frame loop should stop.
    Quit,
}

/// Selection state machine and command dispatcher.
///
/// Holds the marquee anchor while a drag is in progress and the current
/// selection as an insertion-ordered, duplicate-free list of unit IDs. The
/// ordering matters: formation slots are assigned by position in this list.
#[derive(Debug, Clone, Default)]
pub struct CommandController {
    anchor: Option<Vec2>,
    selecting: bool,
    selected: Vec<UnitId>,
}

impl CommandController {
    /// Creates a controller with no active marquee and an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a marquee drag is in progress.
    #[must_use]
    pub const fn is_selecting(&self) -> bool {
        self.selecting
    }

    /// The current selection, in insertion order.
    #[must_use]
    pub fn selected(&self) -> &[UnitId] {
        &self.selected
    }

    /// The active marquee rectangle spanned by the anchor and the pointer,
    /// or `None` when no drag is in progress.
    #[must_use]
    pub fn selection_box(&self, pointer: Vec2) -> Option<Rect> {
        self.anchor.map(|anchor| Rect::from_corners(anchor, pointer))
    }

    /// Feeds one event into the state machine.
    ///
    /// Commands mutate the world synchronously, so a move order issued this
    /// frame starts moving in the same frame's physics update.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        pointer: Pointer,
        world: &mut World,
    ) -> ControllerStatus {
        match event {
            InputEvent::PrimaryDown(point) => {
                self.anchor = Some(point);
                self.selecting = true;
                debug!(x = point.x, y = point.y, "marquee started");
            }
            InputEvent::PrimaryUp => self.finalize_selection(pointer, world),
            InputEvent::SecondaryDown(point) => self.issue_move_order(point, world),
            InputEvent::Quit => return ControllerStatus::Quit,
        }
        ControllerStatus::Continue
    }

    /// Finalizes the marquee at the sampled pointer position.
    ///
    /// Two separate steps: clear unless additive, then union in the units
    /// under the marquee. A `PrimaryUp` without a preceding `PrimaryDown`
    /// only resets the drag state.
    fn finalize_selection(&mut self, pointer: Pointer, world: &mut World) {
        if let Some(marquee) = self.selection_box(pointer.position) {
            if !pointer.additive {
                self.clear_selection(world);
            }
            self.select_in_box(&marquee, world);
            info!(count = self.selected.len(), additive = pointer.additive, "selection finalized");
        }
        self.selecting = false;
        self.anchor = None;
    }

    /// Clears every unit's highlight flag and empties the selection list.
    fn clear_selection(&mut self, world: &mut World) {
        for (_, unit) in world.units_mut() {
            unit.selected = false;
        }
        self.selected.clear();
    }

    /// Marks and appends every unit whose collision square overlaps the
    /// marquee (exclusive overlap test), skipping units already selected.
    fn select_in_box(&mut self, marquee: &Rect, world: &mut World) {
        for (id, unit) in world.units_mut() {
            if marquee.overlaps(&unit.collision_rect()) {
                unit.selected = true;
                if !self.selected.contains(&id) {
                    self.selected.push(id);
                }
            }
        }
    }

    /// Issues a grid-formation move order centered on `destination`.
    ///
    /// The i-th selected unit takes row `i / 3`, column `i % 3`; offsets are
    /// spaced by that unit's own separation radius and the whole grid is
    /// shifted back by 1.5 radii on both axes so it centers on the click.
    /// No-op when nothing is selected.
    #[allow(clippy::cast_precision_loss)] // slot indices are tiny
    fn issue_move_order(&self, destination: Vec2, world: &mut World) {
        if self.selected.is_empty() {
            return;
        }

        for (slot, &id) in self.selected.iter().enumerate() {
            let Some(unit) = world.get_mut(id) else { continue };
            let spacing = unit.tunables().separation_radius;
            let row = (slot / FORMATION_COLUMNS) as f32;
            let col = (slot % FORMATION_COLUMNS) as f32;
            let offset = Vec2::new(col * spacing, row * spacing);
            unit.move_to(destination - Vec2::splat(1.5 * spacing) + offset);
        }

        info!(
            units = self.selected.len(),
            x = destination.x,
            y = destination.y,
            "move order issued"
        );
    }
}
