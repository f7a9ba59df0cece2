// Attack lifecycle and damage intake

use thiserror::Error;

use crate::config::CombatConfig;
use crate::core::Rect;

use super::character::Actor;
use super::state::{ActiveAttack, AttackKind};

/// Why an attack request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AttackRejected {
    #[error("an attack is already in progress")]
    AlreadyAttacking,
    #[error("still recovering from a hit")]
    Recovering,
    #[error("cannot attack while climbing")]
    Climbing,
    #[error("no clip for {0:?}")]
    MissingClip(AttackKind),
}

/// Result of one hit landing on an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// An invincibility source absorbed the hit
    Absorbed,
    /// Health dropped by `dealt` and is still above zero
    Wounded { dealt: u32, remaining: u32 },
    /// Health reached zero
    Depleted { dealt: u32 },
}

impl DamageOutcome {
    pub fn landed(&self) -> bool {
        !matches!(self, Self::Absorbed)
    }
}

impl Actor {
    /// Count down the damage, landing and enemy cooldown timers
    pub fn tick_timers(&mut self) {
        self.combat.damage_invincibility = self.combat.damage_invincibility.saturating_sub(1);
        self.combat.landing_recovery = self.combat.landing_recovery.saturating_sub(1);
        if let Some(brain) = self.role.brain_mut() {
            brain.rest();
        }
    }

    /// Begin an attack.
    ///
    /// Any request made while airborne becomes a jump kick when the kit has
    /// one. Starting any attack grants attack invincibility until it ends.
    pub fn start_attack(&mut self, requested: AttackKind) -> Result<AttackKind, AttackRejected> {
        if self.combat.is_attacking() {
            return Err(AttackRejected::AlreadyAttacking);
        }
        if self.combat.damage_invincibility > 0 {
            return Err(AttackRejected::Recovering);
        }
        if self.body.on_ladder {
            return Err(AttackRejected::Climbing);
        }

        let kind = if !self.body.on_ground && self.kit.jump_kick.is_some() {
            AttackKind::JumpKick
        } else {
            requested
        };
        let clip = self
            .kit
            .attack_clip(kind)
            .ok_or(AttackRejected::MissingClip(kind))?;

        if self.body.on_ground {
            self.body.velocity.x = 0.0;
        }
        self.combat.attack = Some(ActiveAttack::new(kind));
        self.combat.attack_invincible = true;
        if let Some(brain) = self.role.brain_mut() {
            brain.arm(clip.duration_ticks());
        }

        log::debug!("{} started {:?}", self.name(), kind);
        Ok(kind)
    }

    /// Advance the current attack clip by one tick.
    ///
    /// The attack ends once the frame index passes the last frame, except a
    /// jump kick with kick still held, which holds its last frame.
    pub fn advance_attack(&mut self, kick_held: bool) {
        let Some(mut attack) = self.combat.attack else {
            return;
        };
        let Some(clip) = self.kit.attack_clip(attack.kind) else {
            self.cancel_attack();
            return;
        };

        if let Some(brain) = self.role.brain_mut() {
            brain.count_down();
        }

        attack.frame_index += clip.advance_rate;
        if attack.kind == AttackKind::JumpKick && kick_held {
            attack.frame_index = attack.frame_index.min(clip.last_frame() as f32);
        } else if attack.frame_index >= clip.frame_count as f32 {
            log::trace!("{} finished {:?}", self.name(), attack.kind);
            self.cancel_attack();
            return;
        }
        self.combat.attack = Some(attack);
    }

    /// End the current attack, if any, and drop attack invincibility
    pub fn cancel_attack(&mut self) {
        if !self.combat.is_attacking() {
            return;
        }
        self.combat.clear_attack();
        if let Some(brain) = self.role.brain_mut() {
            brain.disarm();
        }
    }

    /// Area this actor's attack can hit this tick.
    ///
    /// The box is `reach` wide, half the hitbox tall, vertically centered on
    /// the hitbox, and placed flush against the side the actor faces. Enemy
    /// strikes only connect during the final third of the attack.
    pub fn attack_hitbox(&self, reach: f32) -> Option<Rect> {
        if !self.combat.is_attacking() {
            return None;
        }
        if let Some(brain) = self.role.brain() {
            if !brain.strike_window_open() {
                return None;
            }
        }

        let hitbox = self.body.hitbox;
        let height = hitbox.h / 2.0;
        let x = if self.facing_left {
            hitbox.left() - reach
        } else {
            hitbox.right()
        };
        Some(Rect::new(x, hitbox.center_y() - height / 2.0, reach, height))
    }

    /// Receive a hit from an attacker on the given side
    pub fn take_damage(
        &mut self,
        amount: u32,
        attacker_on_left: bool,
        combat: &CombatConfig,
    ) -> DamageOutcome {
        if self.combat.is_invincible() {
            log::trace!("{} absorbed a hit", self.name());
            return DamageOutcome::Absorbed;
        }

        let dealt = amount.min(self.health);
        self.health -= dealt;
        self.combat.damage_invincibility = combat.damage_invincibility_ticks;
        self.body.velocity.x = if attacker_on_left {
            combat.knockback_speed
        } else {
            -combat.knockback_speed
        };
        self.cancel_attack();

        if self.health == 0 {
            DamageOutcome::Depleted { dealt }
        } else {
            DamageOutcome::Wounded {
                dealt,
                remaining: self.health,
            }
        }
    }
}
