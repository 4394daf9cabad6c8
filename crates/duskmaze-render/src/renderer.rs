//! Per-enemy rendering: cull, then draw sprite and health bar.

use std::f64::consts::{PI, TAU};

use duskmaze_core::constants::*;
use duskmaze_core::state::{EnemyView, FrameSnapshot};
use duskmaze_core::types::PlayerState;
use duskmaze_core::world::Geometry;

use crate::projection::{Projector, Viewport};
use crate::surface::{DrawSurface, SpriteCache, HEALTH_BAR_BG, HEALTH_BAR_FILL};

/// Renderer configuration.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Camera field of view in radians.
    pub fov: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { fov: DEFAULT_FOV }
    }
}

/// Draw one enemy if visible. Returns whether it was drawn.
///
/// Culling order: non-finite position, field of view, wall occlusion,
/// viewport bounds (widened by half the apparent size so sprites do not
/// pop at the edges). Never panics on malformed input.
#[allow(clippy::too_many_arguments)]
pub fn render_enemy(
    surface: &mut dyn DrawSurface,
    enemy: &EnemyView,
    player: &PlayerState,
    viewport: &Viewport,
    projector: &dyn Projector,
    geometry: &dyn Geometry,
    sprites: &SpriteCache,
    config: &RenderConfig,
) -> bool {
    if !enemy.position.is_finite() {
        return false;
    }

    let projection = projector.world_to_screen(&enemy.position, player, viewport);

    // Relative bearing normalized into (-pi, pi].
    let bearing = player.position.bearing_to(&enemy.position);
    let relative = (bearing - player.angle + PI).rem_euclid(TAU) - PI;
    if relative.abs() > config.fov / 2.0 {
        return false;
    }

    // Occluded when a wall sits between the camera and the enemy.
    let wall_distance = geometry.cast_ray(&player.position, bearing);
    if projection.distance > wall_distance {
        return false;
    }

    let margin = projection.size * 0.5;
    if projection.screen_x < -margin
        || projection.screen_x > viewport.width + margin
        || projection.screen_y < -margin
        || projection.screen_y > viewport.height + margin
    {
        return false;
    }

    surface.save();

    if let Some(sprite) = sprites.get(enemy.kind) {
        let side = projection.size.max(MIN_SPRITE_SIZE);
        surface.draw_sprite(
            sprite,
            projection.screen_x - side / 2.0,
            projection.screen_y - side / 2.0,
            side,
            side,
        );
    }

    let bar_width = projection.size * HEALTH_BAR_WIDTH_FACTOR;
    let bar_height = projection.size * HEALTH_BAR_HEIGHT_FACTOR;
    let bar_x = projection.screen_x - bar_width / 2.0;
    let bar_y = projection.screen_y - projection.size * HEALTH_BAR_RAISE_FACTOR;
    let fraction = (enemy.health as f64 / ENEMY_MAX_HEALTH as f64).clamp(0.0, 1.0);

    surface.fill_rect(bar_x, bar_y, bar_width, bar_height, HEALTH_BAR_BG);
    surface.fill_rect(bar_x, bar_y, bar_width * fraction, bar_height, HEALTH_BAR_FILL);

    surface.restore();
    true
}

/// Draw every enemy in a frame snapshot, in snapshot order (furthest
/// first, as the simulation sorted them). Returns the number drawn.
#[allow(clippy::too_many_arguments)]
pub fn render_enemies(
    surface: &mut dyn DrawSurface,
    snapshot: &FrameSnapshot,
    viewport: &Viewport,
    projector: &dyn Projector,
    geometry: &dyn Geometry,
    sprites: &SpriteCache,
    config: &RenderConfig,
) -> usize {
    snapshot
        .enemies
        .iter()
        .filter(|enemy| {
            render_enemy(
                surface,
                enemy,
                &snapshot.player,
                viewport,
                projector,
                geometry,
                sprites,
                config,
            )
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use duskmaze_core::components::EnemyKind;
    use duskmaze_core::types::Position;
    use crate::projection::Projection;
    use crate::surface::{Color, SpriteId};

    /// Surface double that records every drawing call.
    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<DrawOp>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum DrawOp {
        Save,
        Restore,
        Rect {
            x: f64,
            y: f64,
            width: f64,
            height: f64,
            color: Color,
        },
        Sprite {
            sprite: SpriteId,
            x: f64,
            y: f64,
            width: f64,
            height: f64,
        },
    }

    impl DrawSurface for RecordingSurface {
        fn save(&mut self) {
            self.ops.push(DrawOp::Save);
        }
        fn restore(&mut self) {
            self.ops.push(DrawOp::Restore);
        }
        fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
            self.ops.push(DrawOp::Rect {
                x,
                y,
                width,
                height,
                color,
            });
        }
        fn draw_sprite(&mut self, sprite: SpriteId, x: f64, y: f64, width: f64, height: f64) {
            self.ops.push(DrawOp::Sprite {
                sprite,
                x,
                y,
                width,
                height,
            });
        }
    }

    /// Projector double: centered on screen, apparent size fixed,
    /// distance computed from world positions.
    struct CenterProjector {
        size: f64,
    }

    impl Projector for CenterProjector {
        fn world_to_screen(
            &self,
            world: &Position,
            player: &PlayerState,
            viewport: &Viewport,
        ) -> Projection {
            Projection {
                screen_x: viewport.width / 2.0,
                screen_y: viewport.height / 2.0,
                size: self.size,
                distance: player.position.distance_to(world),
            }
        }
    }

    /// Geometry double with a fixed ray-cast distance everywhere.
    struct WallsAt {
        distance: f64,
    }

    impl Geometry for WallsAt {
        fn wall_collision(&self, _x: f64, _y: f64, _radius: f64) -> bool {
            false
        }
        fn cast_ray(&self, _origin: &Position, _angle: f64) -> f64 {
            self.distance
        }
    }

    fn player_at_origin() -> PlayerState {
        PlayerState {
            position: Position::new(0.0, 0.0),
            angle: 0.0,
            health: 100,
        }
    }

    fn enemy_at(x: f64, y: f64, health: i32) -> EnemyView {
        EnemyView {
            position: Position::new(x, y),
            kind: EnemyKind::Wraith,
            health,
            distance: Position::new(0.0, 0.0).distance_to(&Position::new(x, y)),
        }
    }

    fn viewport() -> Viewport {
        Viewport {
            width: 800.0,
            height: 600.0,
        }
    }

    fn full_cache() -> SpriteCache {
        let mut cache = SpriteCache::new();
        cache.insert(EnemyKind::Wraith, SpriteId(1));
        cache
    }

    #[test]
    fn test_occluded_enemy_not_drawn() {
        let mut surface = RecordingSurface::default();
        // Enemy at distance 5, wall at distance 3 in front of it.
        let drawn = render_enemy(
            &mut surface,
            &enemy_at(5.0, 0.0, 100),
            &player_at_origin(),
            &viewport(),
            &CenterProjector { size: 64.0 },
            &WallsAt { distance: 3.0 },
            &full_cache(),
            &RenderConfig {
                fov: std::f64::consts::FRAC_PI_2,
            },
        );
        assert!(!drawn);
        assert!(surface.ops.is_empty(), "a culled enemy makes no draw calls");
    }

    #[test]
    fn test_out_of_fov_enemy_not_drawn() {
        let mut surface = RecordingSurface::default();
        // Bearing pi/2 relative to a player facing 0; fov/2 is pi/4.
        let drawn = render_enemy(
            &mut surface,
            &enemy_at(0.0, 5.0, 100),
            &player_at_origin(),
            &viewport(),
            &CenterProjector { size: 64.0 },
            &WallsAt { distance: 1e9 },
            &full_cache(),
            &RenderConfig {
                fov: std::f64::consts::FRAC_PI_2,
            },
        );
        assert!(!drawn, "fov culling is independent of occlusion");
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn test_fov_normalization_handles_wrapped_heading() {
        let mut surface = RecordingSurface::default();
        // Heading just past a full turn; enemy dead ahead must survive
        // the normalization into (-pi, pi].
        let player = PlayerState {
            position: Position::new(0.0, 0.0),
            angle: TAU + 0.01,
            health: 100,
        };
        let drawn = render_enemy(
            &mut surface,
            &enemy_at(5.0, 0.0, 100),
            &player,
            &viewport(),
            &CenterProjector { size: 64.0 },
            &WallsAt { distance: 1e9 },
            &full_cache(),
            &RenderConfig::default(),
        );
        assert!(drawn);
    }

    #[test]
    fn test_visible_enemy_draws_sprite_then_bar() {
        let mut surface = RecordingSurface::default();
        let drawn = render_enemy(
            &mut surface,
            &enemy_at(5.0, 0.0, 50),
            &player_at_origin(),
            &viewport(),
            &CenterProjector { size: 64.0 },
            &WallsAt { distance: 1e9 },
            &full_cache(),
            &RenderConfig::default(),
        );
        assert!(drawn);

        assert_eq!(surface.ops.len(), 5);
        assert_eq!(surface.ops[0], DrawOp::Save);
        assert_eq!(*surface.ops.last().unwrap(), DrawOp::Restore);

        // Sprite centered on the projected point.
        match &surface.ops[1] {
            DrawOp::Sprite {
                sprite,
                x,
                y,
                width,
                height,
            } => {
                assert_eq!(*sprite, SpriteId(1));
                assert_eq!(*width, 64.0);
                assert_eq!(*height, 64.0);
                assert_eq!(*x, 400.0 - 32.0);
                assert_eq!(*y, 300.0 - 32.0);
            }
            other => panic!("expected sprite draw, got {other:?}"),
        }

        // Background bar, then foreground scaled by hp/100.
        match (&surface.ops[2], &surface.ops[3]) {
            (
                DrawOp::Rect {
                    x: bg_x,
                    y: bg_y,
                    width: bg_w,
                    height: bg_h,
                    color: bg,
                },
                DrawOp::Rect {
                    x: fg_x,
                    y: fg_y,
                    width: fg_w,
                    color: fg,
                    ..
                },
            ) => {
                assert_eq!(*bg, HEALTH_BAR_BG);
                assert_eq!(*fg, HEALTH_BAR_FILL);
                assert_eq!(*bg_w, 32.0); // size / 2
                assert_eq!(*bg_h, 6.4); // size / 10
                assert_eq!(bg_x, fg_x, "both layers share an origin");
                assert_eq!(bg_y, fg_y);
                assert_eq!(*fg_w, 16.0, "50 hp fills half the bar");
            }
            other => panic!("expected two bar rects, got {other:?}"),
        }
    }

    #[test]
    fn test_small_sprite_clamped_to_minimum() {
        let mut surface = RecordingSurface::default();
        render_enemy(
            &mut surface,
            &enemy_at(5.0, 0.0, 100),
            &player_at_origin(),
            &viewport(),
            &CenterProjector { size: 4.0 },
            &WallsAt { distance: 1e9 },
            &full_cache(),
            &RenderConfig::default(),
        );

        let sprite_side = surface.ops.iter().find_map(|op| match op {
            DrawOp::Sprite { width, .. } => Some(*width),
            _ => None,
        });
        assert_eq!(sprite_side, Some(MIN_SPRITE_SIZE));
    }

    #[test]
    fn test_missing_sprite_still_draws_health_bar() {
        let mut surface = RecordingSurface::default();
        let drawn = render_enemy(
            &mut surface,
            &enemy_at(5.0, 0.0, 100),
            &player_at_origin(),
            &viewport(),
            &CenterProjector { size: 64.0 },
            &WallsAt { distance: 1e9 },
            &SpriteCache::new(),
            &RenderConfig::default(),
        );
        assert!(drawn);
        assert!(surface
            .ops
            .iter()
            .all(|op| !matches!(op, DrawOp::Sprite { .. })));
        let rects = surface
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rect { .. }))
            .count();
        assert_eq!(rects, 2, "health bar draws without a sprite");
    }

    #[test]
    fn test_offscreen_projection_culled_with_margin() {
        /// Projector pushing everything past the right edge.
        struct OffscreenProjector;
        impl Projector for OffscreenProjector {
            fn world_to_screen(
                &self,
                world: &Position,
                player: &PlayerState,
                viewport: &Viewport,
            ) -> Projection {
                Projection {
                    screen_x: viewport.width + 40.0,
                    screen_y: viewport.height / 2.0,
                    size: 64.0,
                    distance: player.position.distance_to(world),
                }
            }
        }

        let mut surface = RecordingSurface::default();
        let drawn = render_enemy(
            &mut surface,
            &enemy_at(5.0, 0.0, 100),
            &player_at_origin(),
            &viewport(),
            &OffscreenProjector,
            &WallsAt { distance: 1e9 },
            &full_cache(),
            &RenderConfig::default(),
        );
        // 40 px past the edge exceeds the 32 px half-size margin.
        assert!(!drawn);
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn test_non_finite_position_aborts() {
        let mut surface = RecordingSurface::default();
        let mut enemy = enemy_at(5.0, 0.0, 100);
        enemy.position = Position::new(f64::NAN, 0.0);

        let drawn = render_enemy(
            &mut surface,
            &enemy,
            &player_at_origin(),
            &viewport(),
            &CenterProjector { size: 64.0 },
            &WallsAt { distance: 1e9 },
            &full_cache(),
            &RenderConfig::default(),
        );
        assert!(!drawn);
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn test_render_pass_draws_in_snapshot_order() {
        use duskmaze_sim::engine::{SimConfig, SimulationEngine};
        use duskmaze_core::world::PathPlanner;
        use duskmaze_core::components::Waypoint;

        struct NoRoute;
        impl PathPlanner for NoRoute {
            fn find_path(&self, _: &Position, _: &Position) -> Option<Vec<Waypoint>> {
                None
            }
        }

        let mut engine = SimulationEngine::new(SimConfig {
            player_start: Position::new(0.0, 0.0),
            ..Default::default()
        });
        let geometry = WallsAt { distance: 1e9 };
        // Spawner placement is irrelevant here; what matters is that the
        // snapshot order carries through to the draw order.
        for _ in 0..4 {
            engine.spawn_enemy(&geometry);
        }
        let snapshot = engine.tick(&geometry, &NoRoute);
        assert_eq!(snapshot.enemies.len(), 4);

        let mut surface = RecordingSurface::default();
        let drawn = render_enemies(
            &mut surface,
            &snapshot,
            &viewport(),
            &CenterProjector { size: 8.0 },
            &geometry,
            &full_cache(),
            &RenderConfig { fov: TAU },
        );
        assert_eq!(drawn, 4, "wide-open fov draws every enemy");

        let saves = surface
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Save))
            .count();
        assert_eq!(saves, 4, "each enemy draw is save/restore scoped");
    }
}
