//! Simulation engine for the duskmaze enemy core.
//!
//! Owns the hecs ECS world and the player record, advances all enemies one
//! tick at a time, and produces `FrameSnapshot`s for the renderer.

pub mod engine;
pub mod systems;

pub use duskmaze_core as core;
pub use engine::SimulationEngine;
