//! Pursuit sweep — one tick of enemy behavior.
//!
//! Orders the roster by distance to the player (furthest first, the render
//! order), resolves player contact, replans paths on a throttle, and moves
//! each enemy along its route with wall-sliding collision.

use std::cmp::Ordering;

use glam::DVec2;
use hecs::{Entity, World};

use duskmaze_core::components::{Enemy, PathFollower};
use duskmaze_core::constants::*;
use duskmaze_core::events::FrameEvent;
use duskmaze_core::types::{PlayerState, Position, SimTime};
use duskmaze_core::world::{Geometry, PathPlanner};

/// Run the pursuit sweep for all enemies.
///
/// Processing order is furthest-first over a snapshot of the roster taken
/// at the start of the tick; removals are buffered and applied once at the
/// end, so the sweep never invalidates its own iteration.
pub fn run(
    world: &mut World,
    player: &mut PlayerState,
    time: &SimTime,
    geometry: &dyn Geometry,
    planner: &dyn PathPlanner,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<FrameEvent>,
) {
    let order = depth_order(world, player);
    despawn_buffer.clear();

    for (entity, dist) in order {
        if !dist.is_finite() {
            continue;
        }

        // Contact: damage the player and consume the enemy. No movement
        // or path logic runs for an enemy removed this tick.
        if dist < CONTACT_RADIUS {
            let before = player.health;
            player.health = (player.health - CONTACT_DAMAGE).max(0);
            events.push(FrameEvent::PlayerHit {
                damage: CONTACT_DAMAGE,
                health_after: player.health,
            });
            despawn_buffer.push(entity);
            if before > 0 && player.health == 0 {
                events.push(FrameEvent::PlayerDied);
            }
            continue;
        }

        follow_path(world, entity, player, time, geometry, planner);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Snapshot the roster as (entity, distance-to-player), sorted furthest
/// first. Non-finite distances compare equal rather than erroring.
fn depth_order(world: &World, player: &PlayerState) -> Vec<(Entity, f64)> {
    let mut order: Vec<(Entity, f64)> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (_enemy, pos))| (entity, player.position.distance_to(pos)))
        .collect();
    order.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    order
}

/// Replan on the throttle, then advance the enemy one step toward its
/// current waypoint.
fn follow_path(
    world: &mut World,
    entity: Entity,
    player: &PlayerState,
    time: &SimTime,
    geometry: &dyn Geometry,
    planner: &dyn PathPlanner,
) {
    let Ok(mut pos) = world.get::<&mut Position>(entity) else {
        return;
    };
    let Ok(mut follower) = world.get::<&mut PathFollower>(entity) else {
        return;
    };
    if !pos.is_finite() {
        return;
    }

    let replan_due = match follower.last_replan_secs {
        None => true,
        Some(stamp) => time.elapsed_secs - stamp > PATH_REPLAN_INTERVAL_SECS,
    };
    if replan_due {
        follower.path = planner.find_path(&pos, &player.position);
        follower.next_waypoint = 0;
        follower.last_replan_secs = Some(time.elapsed_secs);
    }

    let Some(path) = follower.path.as_ref() else {
        return;
    };
    let Some(target) = path.get(follower.next_waypoint) else {
        // Path exhausted; stand still until the next replan.
        return;
    };

    let to_target = DVec2::new(target.x - pos.x, target.y - pos.y);
    let target_dist = to_target.length();

    if target_dist < WAYPOINT_REACHED_RADIUS {
        follower.next_waypoint += 1;
        return;
    }

    let step = to_target / target_dist * ENEMY_STEP;
    let next_x = pos.x + step.x;
    let next_y = pos.y + step.y;

    if !geometry.wall_collision(next_x, next_y, ENEMY_RADIUS) {
        pos.x = next_x;
        pos.y = next_y;
    } else if !geometry.wall_collision(next_x, pos.y, ENEMY_RADIUS) {
        // Diagonal blocked: slide along the wall on one axis.
        pos.x = next_x;
    } else if !geometry.wall_collision(pos.x, next_y, ENEMY_RADIUS) {
        pos.y = next_y;
    }
}
