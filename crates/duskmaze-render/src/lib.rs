//! Enemy rendering for the duskmaze enemy core.
//!
//! Projects enemies into screen space through the external camera
//! collaborator, culls by field of view, wall occlusion, and viewport
//! bounds, and draws sprites with proportional health bars. All drawing
//! goes through the `DrawSurface` trait; this crate never mutates game
//! state.

pub mod projection;
pub mod renderer;
pub mod surface;

pub use duskmaze_core as core;
pub use renderer::{render_enemies, render_enemy, RenderConfig};
