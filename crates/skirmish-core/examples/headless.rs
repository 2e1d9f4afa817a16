//! Headless demo: drives the engine with a scripted frontend instead of a
//! window.
//!
//! Spawns the classic two-row formation, drag-selects all six units, orders
//! them across the map, and runs the frame loop until they settle. The
//! controller's command log is printed at debug level.

use glam::Vec2;
use skirmish_core::{
    Color, Engine, EngineConfig, Frontend, InputEvent, PlayerId, Pointer, Unit, UnitError,
};
use tracing::info;

/// Replays a scripted frame sequence, then quits.
struct ScriptedFrontend {
    frames: Vec<(Vec<InputEvent>, Pointer)>,
    cursor: usize,
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

    fn present(&mut self, engine: &Engine) {
        let tick = engine.world().current_tick();
        if tick % 60 == 0 {
            let moving = engine
                .world()
                .units()
                .filter(|(_, unit)| unit.target.is_some())
                .count();
            info!(tick, moving, "frame presented");
        }
    }
}

fn main() -> Result<(), UnitError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut config = EngineConfig::default();
    config.colors.set_player(PlayerId::new(1), Color::rgb(0, 100, 255));
    config.colors.set_player(PlayerId::new(2), Color::rgb(255, 50, 50));

    let mut engine = Engine::new(config);
    for &(x, y) in &[
        (100.0, 100.0),
        (150.0, 100.0),
        (200.0, 100.0),
        (100.0, 150.0),
        (150.0, 150.0),
        (200.0, 150.0),
    ] {
        engine
            .world_mut()
            .spawn(Unit::new(Vec2::new(x, y), 32.0, PlayerId::new(1))?);
    }

    // Drag a marquee over the whole formation, then order it across the map.
    let idle = Pointer::at(Vec2::new(600.0, 450.0));
    let mut frames = vec![
        (
            vec![InputEvent::PrimaryDown(Vec2::new(80.0, 80.0))],
            Pointer::at(Vec2::new(80.0, 80.0)),
        ),
        (
            vec![InputEvent::PrimaryUp],
            Pointer::at(Vec2::new(220.0, 170.0)),
        ),
        (
            vec![InputEvent::SecondaryDown(Vec2::new(600.0, 450.0))],
            idle,
        ),
    ];
    for _ in 0..300 {
        frames.push((vec![], idle));
    }

    let mut frontend = ScriptedFrontend { frames, cursor: 0 };
    engine.run(&mut frontend, 240);

    for (id, unit) in engine.world().units() {
        info!(
            unit = %id,
            x = unit.position.x,
            y = unit.position.y,
            idle = unit.is_idle(),
            "final state"
        );
    }
    Ok(())
}
