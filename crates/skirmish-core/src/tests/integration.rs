//! End-to-end scenarios across the controller, physics, and engine loop.

use glam::Vec2;

use crate::command::{CommandController, InputEvent, Pointer};
use crate::config::EngineConfig;
use crate::engine::{Engine, Frontend};
use crate::physics;
use crate::world::World;

use super::helpers::{drag_select, spawn_demo_formation, spawn_unit};

// =============================================================================
// Scenario A: straight-line arrival
// =============================================================================

#[test]
fn lone_unit_reaches_its_target_and_stops() {
    let mut world = World::new();
    let id = spawn_unit(&mut world, Vec2::new(100.0, 100.0));
    world.get_mut(id).unwrap().move_to(Vec2::new(200.0, 100.0));

    // 100 units of travel at 3 per tick with a 5-unit arrival radius: the
    // final approach lands on tick 33's arrival check.
    for _ in 0..40 {
        physics::step_default(&mut world);
    }

    let unit = world.get(id).unwrap();
    assert!(unit.target.is_none());
    assert_eq!(unit.velocity, Vec2::ZERO);
    assert!(unit.position.x >= 195.0, "stopped short at x={}", unit.position.x);
    assert!(unit.position.x <= 200.0, "overshot to x={}", unit.position.x);
    assert_eq!(unit.position.y, 100.0);
}

#[test]
fn arrival_happens_one_check_after_the_final_move() {
    let mut world = World::new();
    let id = spawn_unit(&mut world, Vec2::new(100.0, 100.0));
    world.get_mut(id).unwrap().move_to(Vec2::new(200.0, 100.0));

    // 32 ticks of movement bring the unit inside the arrival radius...
    for _ in 0..32 {
        physics::step_default(&mut world);
    }
    assert!(world.get(id).unwrap().position.x >= 195.0);
    assert!(world.get(id).unwrap().target.is_some());

    // ...and the next tick's check clears the order.
    physics::step_default(&mut world);
    assert!(world.get(id).unwrap().target.is_none());
}

// =============================================================================
// Scenario B: idle units never move
// =============================================================================

#[test]
fn overlapping_idle_units_report_zero_velocity() {
    let mut world = World::new();
    let a = spawn_unit(&mut world, Vec2::new(100.0, 100.0));
    let b = spawn_unit(&mut world, Vec2::new(105.0, 100.0));

    physics::step_default(&mut world);

    for id in [a, b] {
        let unit = world.get(id).unwrap();
        assert_eq!(unit.velocity, Vec2::ZERO);
        assert!(unit.target.is_none());
    }
    assert_eq!(world.get(a).unwrap().position, Vec2::new(100.0, 100.0));
    assert_eq!(world.get(b).unwrap().position, Vec2::new(105.0, 100.0));
}

// =============================================================================
// Scenario C: grid formation move order
// =============================================================================

#[test]
fn group_move_assigns_grid_slots_in_selection_order() {
    let mut world = World::new();
    let ids: Vec<_> = [(50.0, 50.0), (100.0, 50.0), (150.0, 50.0), (50.0, 100.0)]
        .iter()
        .map(|&(x, y)| spawn_unit(&mut world, Vec2::new(x, y)))
        .collect();
    let mut controller = CommandController::new();

    drag_select(&mut controller, &mut world, Vec2::ZERO, Vec2::splat(200.0));
    assert_eq!(controller.selected(), &ids[..]);

    controller.handle_event(
        InputEvent::SecondaryDown(Vec2::new(300.0, 300.0)),
        Pointer::at(Vec2::new(300.0, 300.0)),
        &mut world,
    );

    // Base corner is the click minus 1.5 separation radii (60 px); slots
    // advance 40 px per column and wrap to a new row after three.
    let expected = [
        Vec2::new(240.0, 240.0),
        Vec2::new(280.0, 240.0),
        Vec2::new(320.0, 240.0),
        Vec2::new(240.0, 280.0),
    ];
    for (id, want) in ids.iter().zip(expected) {
        assert_eq!(world.get(*id).unwrap().target, Some(want));
    }
}

#[test]
fn group_converges_near_the_ordered_destination() {
    let mut world = World::new();
    let ids = spawn_demo_formation(&mut world);
    let mut controller = CommandController::new();

    drag_select(&mut controller, &mut world, Vec2::splat(50.0), Vec2::splat(250.0));
    assert_eq!(controller.selected().len(), 6);

    let destination = Vec2::new(500.0, 400.0);
    controller.handle_event(
        InputEvent::SecondaryDown(destination),
        Pointer::at(destination),
        &mut world,
    );

    for _ in 0..400 {
        physics::step_default(&mut world);
    }

    // Separation can hold a unit off its exact slot, but the group should
    // settle in the destination's neighborhood.
    for id in ids {
        let unit = world.get(id).unwrap();
        assert!(
            unit.position.distance(destination) < 150.0,
            "unit {id} ended far from the destination at {:?}",
            unit.position,
        );
    }
}

// =============================================================================
// Full frame-loop flow
// =============================================================================

/// Frontend that replays a scripted list of frames, then quits.
struct ScriptedFrontend {
    frames: Vec<(Vec<InputEvent>, Pointer)>,
    cursor: usize,
    presented: usize,
}

impl ScriptedFrontend {
    fn new(frames: Vec<(Vec<InputEvent>, Pointer)>) -> Self {
        Self {
            frames,
            cursor: 0,
            presented: 0,
        }
    }
}

impl Frontend for ScriptedFrontend {
    fn poll(&mut self) -> (Vec<InputEvent>, Pointer) {
        let frame = self
            .frames
            .get(self.cursor)
            .cloned()
            .unwrap_or_else(|| (vec![InputEvent::Quit], Pointer::at(Vec2::ZERO)));
        self.cursor += 1;
        frame
    }

    fn present(&mut self, _engine: &Engine) {
        self.presented += 1;
    }
}

#[test]
fn scripted_session_selects_moves_and_quits() {
    let mut engine = Engine::new(EngineConfig::default());
    let ids = spawn_demo_formation(engine.world_mut());

    let idle = Pointer::at(Vec2::new(400.0, 300.0));
    let mut frames = vec![
        (vec![InputEvent::PrimaryDown(Vec2::new(80.0, 80.0))], Pointer::at(Vec2::new(80.0, 80.0))),
        (vec![InputEvent::PrimaryUp], Pointer::at(Vec2::new(220.0, 170.0))),
        (vec![InputEvent::SecondaryDown(Vec2::new(400.0, 300.0))], idle),
    ];
    for _ in 0..200 {
        frames.push((vec![], idle));
    }

    let mut frontend = ScriptedFrontend::new(frames);
    engine.run(&mut frontend, 1000);

    // One presented frame per scripted frame; the quit frame is not drawn.
    assert_eq!(frontend.presented, 203);
    assert_eq!(engine.world().current_tick(), 203);

    // Every unit was selected, ordered, and ended near the destination.
    assert_eq!(engine.controller().selected().len(), 6);
    for id in ids {
        let unit = engine.world().get(id).unwrap();
        assert!(unit.selected);
        assert!(unit.position.distance(Vec2::new(400.0, 300.0)) < 150.0);
    }
}

#[test]
fn quit_on_the_first_frame_runs_no_ticks() {
    let mut engine = Engine::new(EngineConfig::default());
    spawn_demo_formation(engine.world_mut());

    let mut frontend = ScriptedFrontend::new(vec![]);
    engine.run(&mut frontend, 1000);

    assert_eq!(frontend.presented, 0);
    assert_eq!(engine.world().current_tick(), 0);
}
