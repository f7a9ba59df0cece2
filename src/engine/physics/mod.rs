// Kinematic physics: per-actor bodies resolved against static level geometry

pub mod body;
pub mod collision;
pub mod level;

pub use body::KinematicBody;
pub use collision::{resolve_step, ClimbIntent, StepOutcome};
pub use level::{Collidable, CollidableKind, Level, LevelGeometry};
