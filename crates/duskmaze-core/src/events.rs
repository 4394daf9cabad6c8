//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

/// Notable happenings during a tick, delivered with the frame snapshot.
///
/// `PlayerDied` replaces an inline death callback: the caller observes it
/// on the snapshot and reacts (game-over screen, sound), keeping the
/// simulation free of upward control flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FrameEvent {
    /// A new enemy entered the world.
    EnemySpawned { x: f64, y: f64 },
    /// An enemy reached the player and was consumed.
    PlayerHit { damage: i32, health_after: i32 },
    /// Player health reached 0. Emitted exactly once.
    PlayerDied,
}
