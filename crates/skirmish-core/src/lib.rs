//! # Skirmish Core
//!
//! Headless simulation core for a minimal real-time strategy engine.
//!
//! The crate maintains a set of mobile units on a 2D plane, turns raw pointer
//! events into marquee selections and group move orders, and advances unit
//! positions one fixed tick at a time with seek-to-target plus pairwise
//! separation steering.
//!
//! ## Architecture
//!
//! - **Units**: mutable records owned by a single [`World`]
//! - **Command controller**: pointer events -> selection set + move orders
//! - **Physics**: per-tick seek/separation step over a pre-tick snapshot
//! - **Engine**: glue plus the fixed-rate frame loop driving an external
//!   [`Frontend`] (rendering and input decoding live outside this crate)
//!
//! ## Usage
//!
//! ```
//! use glam::Vec2;
//! use skirmish_core::{physics, PlayerId, Unit, World};
//!
//! let mut world = World::new();
//! let id = world.spawn(Unit::new(Vec2::new(100.0, 100.0), 32.0, PlayerId::new(1)).unwrap());
//!
//! world.get_mut(id).unwrap().move_to(Vec2::new(200.0, 100.0));
//! for _ in 0..40 {
//!     physics::step_default(&mut world);
//! }
//!
//! assert!(world.get(id).unwrap().target.is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod config;
pub mod engine;
pub mod math;
pub mod physics;
pub mod unit;
pub mod world;

#[cfg(test)]
mod tests;

pub use command::{CommandController, ControllerStatus, InputEvent, Pointer};
pub use config::{Color, ColorTable, EngineConfig};
pub use engine::{Engine, Frontend};
pub use math::Rect;
pub use unit::{PlayerId, Tunables, Unit, UnitError, UnitId};
pub use world::World;
