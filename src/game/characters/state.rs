// Character combat state and the animation states projected from it

/// The three melee attacks a character may have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackKind {
    /// Primary strike (sword slash, punch, claw)
    Attack,
    /// Grounded kick
    Kick,
    /// Airborne kick
    JumpKick,
}

/// An attack in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveAttack {
    pub kind: AttackKind,
    /// Fractional frame position in the attack clip
    pub frame_index: f32,
}

impl ActiveAttack {
    pub fn new(kind: AttackKind) -> Self {
        Self {
            kind,
            frame_index: 0.0,
        }
    }
}

/// Combat state that persists across ticks
///
/// Damage invincibility and attack invincibility are independent: the damage
/// timer decays on its own regardless of attack state, and the attack flag
/// lives exactly as long as `attack` is `Some`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CombatState {
    /// At most one attack at a time
    pub attack: Option<ActiveAttack>,
    /// Ticks remaining during which incoming damage is ignored
    pub damage_invincibility: u32,
    /// Immune to damage because our own attack is active
    pub attack_invincible: bool,
    /// Ticks remaining in the landing pose
    pub landing_recovery: u32,
}

impl CombatState {
    pub fn is_attacking(&self) -> bool {
        self.attack.is_some()
    }

    pub fn attack_kind(&self) -> Option<AttackKind> {
        self.attack.map(|a| a.kind)
    }

    /// Either invincibility source is active
    pub fn is_invincible(&self) -> bool {
        self.damage_invincibility > 0 || self.attack_invincible
    }

    /// Clear the current attack and its invincibility
    pub fn clear_attack(&mut self) {
        self.attack = None;
        self.attack_invincible = false;
    }
}

/// Renderable state of a character, derived fresh every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationState {
    /// Standing still on ground
    Idle,
    /// Moving horizontally on ground
    Walking,
    /// Holding down on ground
    Crouching,
    /// The tick a jump started
    JumpRising,
    /// In the air (or on a ladder)
    JumpFalling,
    /// Touched down recently
    LandingRecovery,
    /// Playing an attack clip
    Attacking(AttackKind),
    /// Inside the damage invincibility window
    Hurt,
}

impl AnimationState {
    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::JumpRising | Self::JumpFalling)
    }

    /// Stable name for logs and debug overlays
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walking => "walk",
            Self::Crouching => "crouch",
            Self::JumpRising => "jump_rise",
            Self::JumpFalling => "jump_fall",
            Self::LandingRecovery => "land",
            Self::Attacking(AttackKind::Attack) => "attack",
            Self::Attacking(AttackKind::Kick) => "kick",
            Self::Attacking(AttackKind::JumpKick) => "jump_kick",
            Self::Hurt => "hurt",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_combat_state_is_neutral() {
        let state = CombatState::default();
        assert!(!state.is_attacking());
        assert!(!state.is_invincible());
        assert_eq!(state.landing_recovery, 0);
    }

    #[test]
    fn test_clear_attack_drops_attack_invincibility_only() {
        let mut state = CombatState {
            attack: Some(ActiveAttack::new(AttackKind::Kick)),
            damage_invincibility: 10,
            attack_invincible: true,
            landing_recovery: 0,
        };
        state.clear_attack();

        assert_eq!(state.attack, None);
        assert!(!state.attack_invincible);
        assert_eq!(state.damage_invincibility, 10);
    }

    #[test]
    fn test_either_source_makes_invincible() {
        let attacking = CombatState {
            attack_invincible: true,
            ..CombatState::default()
        };
        let recovering = CombatState {
            damage_invincibility: 1,
            ..CombatState::default()
        };
        assert!(attacking.is_invincible());
        assert!(recovering.is_invincible());
    }

    #[test]
    fn test_animation_names() {
        assert_eq!(AnimationState::Idle.name(), "idle");
        assert_eq!(AnimationState::Attacking(AttackKind::JumpKick).name(), "jump_kick");
        assert!(AnimationState::JumpFalling.is_airborne());
        assert!(!AnimationState::LandingRecovery.is_airborne());
    }
}
