//! Frame snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::components::EnemyKind;
use crate::events::FrameEvent;
use crate::types::{PlayerState, Position, SimTime};

/// State handed to the renderer and the surrounding game after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    /// Set once player health reaches 0; the simulation stops advancing.
    pub game_over: bool,
    pub player: PlayerState,
    /// Surviving enemies, ordered furthest-to-closest from the player.
    /// Drawing in this order paints nearer enemies over farther ones.
    pub enemies: Vec<EnemyView>,
    pub events: Vec<FrameEvent>,
}

/// One enemy as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    pub kind: EnemyKind,
    pub health: i32,
    /// Distance from the player at snapshot time.
    pub distance: f64,
}
