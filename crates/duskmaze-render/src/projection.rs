//! Camera projection boundary.
//!
//! The raycasting camera itself is an external collaborator; this module
//! fixes the interface the renderer consumes.

use serde::{Deserialize, Serialize};

use duskmaze_core::types::{PlayerState, Position};

/// Render target dimensions in pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Result of projecting a world position through the camera.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projection {
    pub screen_x: f64,
    pub screen_y: f64,
    /// Apparent sprite size in pixels at this distance.
    pub size: f64,
    /// World-space distance from the camera.
    pub distance: f64,
}

/// World-to-screen transform provided by the surrounding game.
pub trait Projector {
    fn world_to_screen(
        &self,
        world: &Position,
        player: &PlayerState,
        viewport: &Viewport,
    ) -> Projection;
}
