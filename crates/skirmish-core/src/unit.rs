//! Unit entity: the mobile record every other module operates on.
//!
//! A [`Unit`] holds position, per-tick velocity, an optional move target, and
//! its physics tunables. Construction validates the tunables (a zero or
//! negative `max_speed` would make a unit that never arrives); everything
//! after construction is plain field mutation by the physics step and the
//! command controller.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::Rect;

/// Default maximum speed in world units per tick.
pub const DEFAULT_MAX_SPEED: f32 = 3.0;
/// Default radius within which neighboring units repel each other.
pub const DEFAULT_SEPARATION_RADIUS: f32 = 40.0;
/// Default distance at which a moving unit counts as arrived.
pub const DEFAULT_ARRIVAL_RADIUS: f32 = 5.0;

/// Unique identifier for a unit.
///
/// Newtype over `u64`, assigned monotonically by [`World`](crate::World).
/// The numeric ordering doubles as the deterministic iteration order.
///
/// # Example
///
/// ```
/// use skirmish_core::UnitId;
///
/// let a = UnitId::new(1);
/// let b = UnitId::new(2);
/// assert!(a < b);
/// assert_eq!(a.as_u64(), 1);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(u64);

impl UnitId {
    /// Creates a `UnitId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitId({})", self.0)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UnitId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<UnitId> for u64 {
    fn from(id: UnitId) -> Self {
        id.0
    }
}

/// Owning player of a unit.
///
/// Used only for color lookup on the presentation side; the simulation is
/// player-agnostic.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u32);

impl PlayerId {
    /// Creates a `PlayerId` from a raw `u32` value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw `u32` value of this identifier.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-unit physics parameters.
///
/// All three values must be positive and finite; [`Unit::with_tunables`]
/// enforces this at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tunables {
    /// Maximum displacement per tick, in world units.
    pub max_speed: f32,
    /// Neighbors closer than this repel the unit.
    pub separation_radius: f32,
    /// Distance to the target below which the unit stops.
    pub arrival_radius: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            max_speed: DEFAULT_MAX_SPEED,
            separation_radius: DEFAULT_SEPARATION_RADIUS,
            arrival_radius: DEFAULT_ARRIVAL_RADIUS,
        }
    }
}

/// Error raised when constructing a unit with degenerate parameters.
///
/// Non-positive tunables produce silently broken physics (a unit that never
/// arrives, or moves backward), so they are rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum UnitError {
    /// `size` was zero, negative, or not finite.
    #[error("unit size must be positive and finite, got {0}")]
    InvalidSize(f32),
    /// `max_speed` was zero, negative, or not finite.
    #[error("max_speed must be positive and finite, got {0}")]
    InvalidMaxSpeed(f32),
    /// `separation_radius` was zero, negative, or not finite.
    #[error("separation_radius must be positive and finite, got {0}")]
    InvalidSeparationRadius(f32),
    /// `arrival_radius` was zero, negative, or not finite.
    #[error("arrival_radius must be positive and finite, got {0}")]
    InvalidArrivalRadius(f32),
}

/// A mobile unit on the 2D plane.
///
/// `position`, `velocity`, `target`, and `selected` are mutated in place by
/// the physics step and the command controller. `velocity` is the last
/// computed per-tick displacement, not a time-integrated physical velocity:
/// it is added directly to `position` once per tick.
///
/// Units persist for the lifetime of the world; there is no despawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// World-space center of the unit.
    pub position: Vec2,
    /// Displacement applied last tick. Retains its final value after arrival
    /// zeroes it; an idle unit is simply never updated.
    pub velocity: Vec2,
    /// Current move destination. `None` means idle.
    pub target: Option<Vec2>,
    /// Selection highlight flag, owned by the command controller.
    pub selected: bool,
    size: f32,
    player: PlayerId,
    tunables: Tunables,
}

fn validated(value: f32, err: fn(f32) -> UnitError) -> Result<f32, UnitError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(err(value))
    }
}

impl Unit {
    /// Creates a unit with default [`Tunables`].
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::InvalidSize`] if `size` is not positive and
    /// finite.
    pub fn new(position: Vec2, size: f32, player: PlayerId) -> Result<Self, UnitError> {
        Self::with_tunables(position, size, player, Tunables::default())
    }

    /// Creates a unit with explicit physics parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`UnitError`] naming the first parameter that is zero,
    /// negative, or not finite.
    pub fn with_tunables(
        position: Vec2,
        size: f32,
        player: PlayerId,
        tunables: Tunables,
    ) -> Result<Self, UnitError> {
        let size = validated(size, UnitError::InvalidSize)?;
        validated(tunables.max_speed, UnitError::InvalidMaxSpeed)?;
        validated(tunables.separation_radius, UnitError::InvalidSeparationRadius)?;
        validated(tunables.arrival_radius, UnitError::InvalidArrivalRadius)?;

        Ok(Self {
            position,
            velocity: Vec2::ZERO,
            target: None,
            selected: false,
            size,
            player,
            tunables,
        })
    }

    /// Orders the unit to move toward a destination point.
    pub fn move_to(&mut self, target: Vec2) {
        self.target = Some(target);
    }

    /// Side length of the unit's collision/render square.
    #[must_use]
    pub const fn size(&self) -> f32 {
        self.size
    }

    /// Owning player.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }

    /// Physics parameters.
    #[must_use]
    pub const fn tunables(&self) -> Tunables {
        self.tunables
    }

    /// The unit's collision rectangle: a square of side [`Unit::size`]
    /// centered on its position.
    #[must_use]
    pub fn collision_rect(&self) -> Rect {
        Rect::centered(self.position, self.size)
    }

    /// Returns `true` if the unit has no move target.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.target.is_none()
    }
}
