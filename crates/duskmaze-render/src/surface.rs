//! Drawing surface boundary and sprite lookup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use duskmaze_core::components::EnemyKind;

/// RGB color.
pub type Color = [u8; 3];

/// Health bar background.
pub const HEALTH_BAR_BG: Color = [0x00, 0x00, 0x00];

/// Health bar foreground.
pub const HEALTH_BAR_FILL: Color = [0x00, 0xff, 0x00];

/// Opaque handle to a loaded sprite image. Asset loading and decoding
/// belong to the surrounding game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteId(pub u32);

/// Sprite lookup by enemy kind. An entry may be missing; the renderer
/// then skips the sprite and still draws the health bar.
#[derive(Debug, Clone, Default)]
pub struct SpriteCache {
    sprites: HashMap<EnemyKind, SpriteId>,
}

impl SpriteCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: EnemyKind, sprite: SpriteId) {
        self.sprites.insert(kind, sprite);
    }

    pub fn get(&self, kind: EnemyKind) -> Option<SpriteId> {
        self.sprites.get(&kind).copied()
    }
}

/// Drawing operations the renderer needs from the host surface.
///
/// `save`/`restore` scope drawing state per enemy so unrelated state on
/// the surface is unaffected by a draw.
pub trait DrawSurface {
    fn save(&mut self);
    fn restore(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);
    fn draw_sprite(&mut self, sprite: SpriteId, x: f64, y: f64, width: f64, height: f64);
}
