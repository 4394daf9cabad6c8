//! Traits the surrounding game must implement.
//!
//! The tile map, its collision/ray primitives, and the path search are
//! external collaborators; this core only fixes their interfaces.

use crate::components::Waypoint;
use crate::types::Position;

/// Wall geometry queries against the tile map.
pub trait Geometry {
    /// True if a circle of `radius` at (x, y) intersects map geometry.
    fn wall_collision(&self, x: f64, y: f64, radius: f64) -> bool;

    /// Distance from `origin` to the nearest wall along `angle` (radians,
    /// math convention). Used for occlusion culling.
    fn cast_ray(&self, origin: &Position, angle: f64) -> f64;
}

/// Route computation between two world positions.
pub trait PathPlanner {
    /// Ordered waypoints from `from` to `to`, or `None` when no route
    /// exists. An empty route is treated the same as no route.
    fn find_path(&self, from: &Position, to: &Position) -> Option<Vec<Waypoint>>;
}
