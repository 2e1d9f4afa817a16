//! Engine glue and the fixed-rate frame loop.
//!
//! [`Engine`] owns the world, the command controller, and the presentation
//! config, and drives one tick as input -> update -> present in that fixed
//! order. Rendering and raw input decoding live behind the [`Frontend`]
//! trait; the core only ever sees decoded [`InputEvent`]s and a pointer
//! sample.
//!
//! The loop is single-threaded and cooperative: commands are applied
//! synchronously during input handling, before the same frame's physics
//! update, so a move order issued this frame begins moving this frame.

use std::time::{Duration, Instant};

use glam::Vec2;
use tracing::info;

use crate::command::{CommandController, ControllerStatus, InputEvent, Pointer};
use crate::config::EngineConfig;
use crate::math::Rect;
use crate::physics;
use crate::world::World;

/// External collaborator contract: input decoding and rendering.
///
/// Implementations decode whatever their windowing layer produces into the
/// core's event vocabulary and draw from the engine's state. A headless
/// frontend (scripted events, no-op present) is enough to drive the full
/// engine in tests.
pub trait Frontend {
    /// Decodes this frame's input: zero or more events plus the current
    /// pointer sample.
    fn poll(&mut self) -> (Vec<InputEvent>, Pointer);

    /// Renders the current state. Reads unit position/size/player/selected,
    /// the active selection box, and the [`EngineConfig`].
    fn present(&mut self, engine: &Engine);
}

/// Top-level game state: world, controller, and presentation config.
///
/// # Example
///
/// ```
/// use glam::Vec2;
/// use skirmish_core::{Engine, EngineConfig, PlayerId, Unit};
///
/// let mut engine = Engine::new(EngineConfig::default());
/// engine
///     .world_mut()
///     .spawn(Unit::new(Vec2::new(100.0, 100.0), 32.0, PlayerId::new(1)).unwrap());
/// engine.update();
/// assert_eq!(engine.world().current_tick(), 1);
/// ```
#[derive(Debug)]
pub struct Engine {
    world: World,
    controller: CommandController,
    config: EngineConfig,
    separation_force: f32,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    /// Creates an engine with an empty world and the default separation
    /// weight.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            world: World::new(),
            controller: CommandController::new(),
            config,
            separation_force: physics::SEPARATION_FORCE,
        }
    }

    /// The unit collection.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the unit collection, for spawning.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The selection/command controller.
    #[must_use]
    pub const fn controller(&self) -> &CommandController {
        &self.controller
    }

    /// The presentation configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The active marquee rectangle for the given pointer position, if a
    /// drag is in progress.
    #[must_use]
    pub fn selection_box(&self, pointer: Vec2) -> Option<Rect> {
        self.controller.selection_box(pointer)
    }

    /// Feeds one frame's events through the controller.
    ///
    /// Returns `false` once a [`InputEvent::Quit`] is seen; remaining events
    /// in the batch are dropped.
    pub fn handle_input(&mut self, events: &[InputEvent], pointer: Pointer) -> bool {
        for &event in events {
            if self.controller.handle_event(event, pointer, &mut self.world)
                == ControllerStatus::Quit
            {
                return false;
            }
        }
        true
    }

    /// Runs one physics tick over the whole world.
    pub fn update(&mut self) {
        physics::step(&mut self.world, self.separation_force);
    }

    /// Drives the frame loop at a target rate until the frontend reports
    /// quit.
    ///
    /// Each frame: poll input, apply events, physics update, present, then
    /// sleep out the remainder of the frame budget. A `target_fps` of zero
    /// is clamped to one.
    pub fn run<F: Frontend>(&mut self, frontend: &mut F, target_fps: u32) {
        let frame_budget = Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1)));

        loop {
            let frame_start = Instant::now();

            let (events, pointer) = frontend.poll();
            if !self.handle_input(&events, pointer) {
                info!(tick = self.world.current_tick(), "quit requested, stopping frame loop");
                return;
            }

            self.update();
            frontend.present(self);

            let elapsed = frame_start.elapsed();
            if elapsed < frame_budget {
                std::thread::sleep(frame_budget - elapsed);
            }
        }
    }
}
