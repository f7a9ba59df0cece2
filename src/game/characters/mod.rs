// Character system
//
// This module contains everything related to actors:
// - Actor data structure and the player controller
// - Archetype stats
// - Combat state, attack lifecycle and damage intake
// - Animation clips, kits and pose projection

pub mod animation;
pub mod character;
pub mod combat;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::{AnimationClip, CharacterKit, ClipId, Pose};
pub use character::{Actor, ActorId, Role};
pub use combat::{AttackRejected, DamageOutcome};
pub use state::{ActiveAttack, AnimationState, AttackKind, CombatState};
pub use stats::{Archetype, CharacterStats};
