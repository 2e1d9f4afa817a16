//! Presentation configuration: window extents, grid tile size, and the named
//! color table.
//!
//! The simulation core never reads any of this; it exists so a frontend can
//! be handed everything it needs to draw in one serializable struct, with
//! defaults matching the classic 800x600 window and its color scheme.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::unit::PlayerId;

/// Plain RGBA color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; 255 is fully opaque.
    pub a: u8,
}

impl Color {
    /// Opaque white, the fallback for unknown players.
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Creates an opaque color from RGB channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with an explicit alpha channel.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Named colors consumed by the rendering frontend.
///
/// Per-player unit colors are looked up through [`ColorTable::player`], which
/// falls back to white for players without an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTable {
    /// Window clear color.
    pub background: Color,
    /// Grid line color.
    pub grid: Color,
    /// Outline drawn around selected units.
    pub selection: Color,
    /// Translucent marquee fill.
    pub selection_box: Color,
    /// Marquee border.
    pub selection_border: Color,
    players: BTreeMap<u32, Color>,
}

impl Default for ColorTable {
    fn default() -> Self {
        let mut players = BTreeMap::new();
        players.insert(1, Color::rgb(0, 0, 255));
        players.insert(2, Color::rgb(255, 0, 0));
        Self {
            background: Color::rgb(0, 0, 0),
            grid: Color::rgb(50, 50, 50),
            selection: Color::WHITE,
            selection_box: Color::rgba(0, 255, 0, 50),
            selection_border: Color::rgb(0, 255, 0),
            players,
        }
    }
}

impl ColorTable {
    /// Unit color for a player; white when the player has no entry.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> Color {
        self.players
            .get(&player.as_u32())
            .copied()
            .unwrap_or(Color::WHITE)
    }

    /// Sets or overrides a player's unit color.
    pub fn set_player(&mut self, player: PlayerId, color: Color) {
        self.players.insert(player.as_u32(), color);
    }
}

/// Everything the rendering frontend needs to set itself up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Window width and height in pixels.
    pub window_size: (u32, u32),
    /// Side length of a background grid tile in pixels.
    pub tile_size: u32,
    /// Named color table.
    pub colors: ColorTable,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_size: (800, 600),
            tile_size: 32,
            colors: ColorTable::default(),
        }
    }
}
