//! Spawner system — places new enemies near safe-zone anchors.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use duskmaze_core::components::{Enemy, EnemyKind, Health, PathFollower};
use duskmaze_core::constants::*;
use duskmaze_core::events::FrameEvent;
use duskmaze_core::types::Position;
use duskmaze_core::world::Geometry;

/// Pick one of the spawn anchors uniformly, jitter both axes by
/// [-SPAWN_JITTER, SPAWN_JITTER], and spawn an enemy there if the position
/// clears wall collision at the enemy radius. A blocked position drops the
/// attempt without side effects.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    geometry: &dyn Geometry,
    events: &mut Vec<FrameEvent>,
) -> bool {
    let (anchor_x, anchor_y) = SPAWN_ANCHORS[rng.gen_range(0..SPAWN_ANCHORS.len())];
    let x = anchor_x + rng.gen_range(-SPAWN_JITTER..=SPAWN_JITTER);
    let y = anchor_y + rng.gen_range(-SPAWN_JITTER..=SPAWN_JITTER);

    if geometry.wall_collision(x, y, ENEMY_RADIUS) {
        log::debug!("spawn attempt at ({x:.2}, {y:.2}) blocked by wall");
        return false;
    }

    world.spawn((
        Enemy,
        Position::new(x, y),
        Health {
            hp: ENEMY_MAX_HEALTH,
        },
        EnemyKind::Wraith,
        PathFollower::default(),
    ));
    events.push(FrameEvent::EnemySpawned { x, y });
    true
}
