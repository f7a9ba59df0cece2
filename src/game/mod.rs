// Game layer: actors, enemy behaviour, party switching, stages and the world tick

pub mod characters;
pub mod enemy;
pub mod party;
pub mod stage;
pub mod world;

pub use world::{GameEvent, TickReport, World};
