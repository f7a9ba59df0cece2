// Character archetypes and their fixed stats

use super::animation::CharacterKit;
use super::state::AttackKind;

/// Every character shape in the game. Each archetype has one stats table
/// and one clip kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    /// Oishi, the samurai: sword only
    Oishi,
    /// Koji, the karateka: punch, kick and jump kick
    Koji,
    /// Tengu foot soldier
    Tengu,
}

impl Archetype {
    pub fn name(self) -> &'static str {
        match self {
            Self::Oishi => "Oishi",
            Self::Koji => "Koji",
            Self::Tengu => "Tengu",
        }
    }

    pub fn stats(self) -> CharacterStats {
        match self {
            Self::Oishi => OISHI_STATS,
            Self::Koji => KOJI_STATS,
            Self::Tengu => TENGU_STATS,
        }
    }

    pub fn kit(self) -> CharacterKit {
        match self {
            Self::Oishi => CharacterKit::samurai(),
            Self::Koji => CharacterKit::karateka(),
            Self::Tengu => CharacterKit::tengu(),
        }
    }
}

/// Fixed per-archetype properties
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterStats {
    // Combat
    /// Starting and maximum health
    pub max_health: u32,
    pub attack_damage: u32,
    pub kick_damage: u32,
    pub jump_kick_damage: u32,

    // Dimensions (hitbox, independent of sprite size)
    pub width: f32,
    pub height: f32,

    // Movement
    /// Whether ladders can be climbed
    pub climbs_ladders: bool,
}

pub const OISHI_STATS: CharacterStats = CharacterStats {
    max_health: 5,
    attack_damage: 1,
    kick_damage: 0,
    jump_kick_damage: 0,
    width: 16.0,
    height: 32.0,
    climbs_ladders: true,
};

pub const KOJI_STATS: CharacterStats = CharacterStats {
    max_health: 5,
    attack_damage: 1,
    kick_damage: 1,
    jump_kick_damage: 2,
    width: 16.0,
    height: 32.0,
    climbs_ladders: true,
};

pub const TENGU_STATS: CharacterStats = CharacterStats {
    max_health: 2,
    attack_damage: 1,
    kick_damage: 0,
    jump_kick_damage: 0,
    width: 16.0,
    height: 32.0,
    climbs_ladders: false,
};

impl CharacterStats {
    /// Damage dealt by one hit of `kind`
    pub fn damage_for(&self, kind: AttackKind) -> u32 {
        match kind {
            AttackKind::Attack => self.attack_damage,
            AttackKind::Kick => self.kick_damage,
            AttackKind::JumpKick => self.jump_kick_damage,
        }
    }
}
