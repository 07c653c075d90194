//! Game core
//!
//! The per-tick simulation: shared bodies, the player's movement and
//! ability state machines, skeleton patrols, transient attack entities,
//! frontier-driven level generation, and group collision. Input and
//! window glue live at the crate root; rendering in [`renderer`].

pub mod attack;
pub mod body;
pub mod collision;
pub mod enemy;
pub mod level;
pub mod player;
pub mod renderer;
pub mod world;

pub use world::{GameWorld, SessionState};
