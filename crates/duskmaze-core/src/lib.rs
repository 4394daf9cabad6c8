//! Core types and definitions for the duskmaze enemy simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, constants, frame snapshots, events, and the traits the
//! surrounding game must implement (map geometry, pathfinding).
//! It contains no game logic.

pub mod components;
pub mod constants;
pub mod events;
pub mod state;
pub mod types;
pub mod world;
