//! Snapshot system: queries the ECS world and builds a `FrameSnapshot`.
//!
//! This system is read-only — it never modifies the world.

use std::cmp::Ordering;

use hecs::World;

use duskmaze_core::components::{Enemy, EnemyKind, Health};
use duskmaze_core::events::FrameEvent;
use duskmaze_core::state::{EnemyView, FrameSnapshot};
use duskmaze_core::types::{PlayerState, Position, SimTime};

/// Build the per-frame view of the world. Enemies are ordered furthest to
/// closest from the player — the renderer must draw in exactly this order
/// for correct depth.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    game_over: bool,
    player: &PlayerState,
    events: Vec<FrameEvent>,
) -> FrameSnapshot {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Health, &EnemyKind)>()
        .iter()
        .map(|(_, (_enemy, pos, health, kind))| EnemyView {
            position: *pos,
            kind: *kind,
            health: health.hp,
            distance: player.position.distance_to(pos),
        })
        .collect();
    enemies.sort_by(|a, b| b.distance.partial_cmp(&a.distance).unwrap_or(Ordering::Equal));

    FrameSnapshot {
        time: *time,
        game_over,
        player: *player,
        enemies,
        events,
    }
}
