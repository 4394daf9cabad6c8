//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components or
//! on the engine.

pub mod pursuit;
pub mod snapshot;
pub mod spawner;
