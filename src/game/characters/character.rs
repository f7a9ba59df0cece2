// Actor entity and the player controller

use glam::Vec2;

use crate::config::{CombatConfig, GameConfig};
use crate::engine::input::{InputSnapshot, Intent};
use crate::engine::physics::{ClimbIntent, KinematicBody};
use crate::game::enemy::EnemyBrain;

use super::animation::{CharacterKit, Pose};
use super::state::{AnimationState, AttackKind, CombatState};
use super::stats::{Archetype, CharacterStats};

/// Unique identifier for an actor
pub type ActorId = u32;

/// Who drives an actor
#[derive(Debug, Clone, PartialEq)]
pub enum Role {
    /// Driven by the input snapshot
    Player,
    /// Driven by a patrol/attack brain
    Enemy(EnemyBrain),
}

impl Role {
    pub fn is_player(&self) -> bool {
        matches!(self, Self::Player)
    }

    pub fn brain(&self) -> Option<&EnemyBrain> {
        match self {
            Self::Enemy(brain) => Some(brain),
            Self::Player => None,
        }
    }

    pub fn brain_mut(&mut self) -> Option<&mut EnemyBrain> {
        match self {
            Self::Enemy(brain) => Some(brain),
            Self::Player => None,
        }
    }
}

/// A player character or enemy in the world
///
/// Players and enemies share the same body, combat and animation model and
/// differ only in their [`Role`].
#[derive(Debug, Clone)]
pub struct Actor {
    /// Unique identifier
    pub id: ActorId,
    pub archetype: Archetype,
    pub role: Role,

    /// Fixed properties of the archetype
    pub stats: CharacterStats,
    /// Clips this actor can play
    pub kit: CharacterKit,

    // Physics
    pub body: KinematicBody,
    pub facing_left: bool,

    // Combat
    /// Current health, never above `stats.max_health`
    pub health: u32,
    pub combat: CombatState,

    // Per-tick flags, cleared by `begin_tick`
    /// A jump started this tick
    pub jumped_this_tick: bool,
    /// Down held while standing
    pub crouching: bool,

    /// Fractional frame position in the walk cycle
    walk_phase: f32,
}

impl Actor {
    /// Create an actor standing with its feet at `(center_x, bottom)`
    pub fn spawn(
        id: ActorId,
        archetype: Archetype,
        role: Role,
        center_x: f32,
        bottom: f32,
    ) -> Self {
        let stats = archetype.stats();
        let mut body = KinematicBody::at_midbottom(center_x, bottom, stats.width, stats.height);
        // Assume support; the first step drops the body if there is none
        body.on_ground = true;

        Self {
            id,
            archetype,
            role,
            health: stats.max_health,
            kit: archetype.kit(),
            stats,
            body,
            facing_left: false,
            combat: CombatState::default(),
            jumped_this_tick: false,
            crouching: false,
            walk_phase: 0.0,
        }
    }

    pub fn player(id: ActorId, archetype: Archetype, center_x: f32, bottom: f32) -> Self {
        Self::spawn(id, archetype, Role::Player, center_x, bottom)
    }

    pub fn enemy(
        id: ActorId,
        archetype: Archetype,
        brain: EnemyBrain,
        center_x: f32,
        bottom: f32,
    ) -> Self {
        Self::spawn(id, archetype, Role::Enemy(brain), center_x, bottom)
    }

    pub fn name(&self) -> &'static str {
        self.archetype.name()
    }

    pub fn is_player(&self) -> bool {
        self.role.is_player()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn walk_phase(&self) -> f32 {
        self.walk_phase
    }

    /// Clear per-tick flags and count down timers
    pub fn begin_tick(&mut self) {
        self.jumped_this_tick = false;
        self.crouching = false;
        self.tick_timers();
    }

    /// Leading part of the damage window where movement input is ignored
    /// and knockback carries the actor
    pub fn is_hurt_stunned(&self, combat: &CombatConfig) -> bool {
        let timer = self.combat.damage_invincibility;
        timer > 0 && combat.damage_invincibility_ticks.saturating_sub(timer) < combat.hurt_stun_ticks
    }

    /// Apply one tick of player input to velocity and facing.
    ///
    /// Returns the attack requested this tick; it is started later, in the
    /// combat phase, once the body has been resolved.
    pub fn drive(&mut self, input: &InputSnapshot, config: &GameConfig) -> Option<AttackKind> {
        let grounded = self.body.on_ground;
        let attacking = self.combat.is_attacking();
        self.crouching = grounded && input.is_held(Intent::Down);

        if self.is_hurt_stunned(&config.combat) {
            return None;
        }

        let direction = input.horizontal();
        // Grounded attacks plant the feet; airborne ones keep momentum
        self.body.velocity.x = if grounded && attacking {
            0.0
        } else {
            direction * config.physics.walk_speed
        };

        if !attacking {
            if direction < 0.0 {
                self.facing_left = true;
            } else if direction > 0.0 {
                self.facing_left = false;
            }
        }

        let can_jump = grounded || self.body.on_ladder;
        if input.just_pressed(Intent::Jump) && can_jump && !attacking {
            self.body.velocity.y = config.physics.jump_speed;
            self.body.on_ground = false;
            self.body.on_ladder = false;
            self.jumped_this_tick = true;
            log::trace!("{} jumped from {:?}", self.name(), self.body.hitbox);
        }

        if input.just_pressed(Intent::Kick) {
            Some(AttackKind::Kick)
        } else if input.just_pressed(Intent::Attack) {
            Some(AttackKind::Attack)
        } else {
            None
        }
    }

    /// Ladder intents for this tick
    pub fn climb_intent(&self, input: &InputSnapshot) -> ClimbIntent {
        ClimbIntent {
            up: input.is_held(Intent::Up),
            down: input.is_held(Intent::Down),
            allowed: self.stats.climbs_ladders,
        }
    }

    /// Called when the body touches down after being airborne
    pub fn on_landed(&mut self, landing_ticks: u32) {
        if let Some(kind) = self.combat.attack_kind() {
            log::debug!("{} landed during {:?}, attack cancelled", self.name(), kind);
        }
        self.cancel_attack();
        self.combat.landing_recovery = landing_ticks;
    }

    /// Drop all transient state, keeping health and position
    pub fn reset_transient(&mut self) {
        self.cancel_attack();
        self.combat = CombatState::default();
        self.body.velocity = Vec2::ZERO;
        self.jumped_this_tick = false;
        self.crouching = false;
        self.walk_phase = 0.0;
    }

    /// Project the animation state, advance the walk cycle and build the pose
    pub fn pose(&mut self) -> Pose {
        let state = AnimationState::project(self);

        if state == AnimationState::Walking {
            let walk = self.kit.walk;
            self.walk_phase += walk.advance_rate;
            if self.walk_phase >= walk.frame_count as f32 {
                self.walk_phase = 0.0;
            }
        } else {
            self.walk_phase = 0.0;
        }

        let (clip, frame) = state.clip_frame(self);
        Pose {
            actor: self.id,
            hitbox: self.body.hitbox,
            anchor: self.body.hitbox.midbottom(),
            facing_left: self.facing_left,
            state,
            clip,
            frame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::animation::ClipId;
    use approx::assert_relative_eq;

    fn oishi() -> Actor {
        Actor::player(0, Archetype::Oishi, 100.0, 240.0)
    }

    #[test]
    fn test_spawn_standing() {
        let actor = oishi();
        assert_eq!(actor.health, 5);
        assert!(actor.body.on_ground);
        assert_relative_eq!(actor.body.hitbox.bottom(), 240.0);
        assert_relative_eq!(actor.body.hitbox.center_x(), 100.0);
        assert!(actor.is_player());
    }

    #[test]
    fn test_drive_walks_and_faces() {
        let config = GameConfig::default();
        let mut actor = oishi();

        actor.drive(&InputSnapshot::holding(&[Intent::Left]), &config);
        assert_relative_eq!(actor.body.velocity.x, -2.5);
        assert!(actor.facing_left);

        actor.drive(&InputSnapshot::holding(&[Intent::Right]), &config);
        assert_relative_eq!(actor.body.velocity.x, 2.5);
        assert!(!actor.facing_left);

        actor.drive(&InputSnapshot::idle(), &config);
        assert_relative_eq!(actor.body.velocity.x, 0.0);
        assert!(!actor.facing_left);
    }

    #[test]
    fn test_jump_needs_fresh_press() {
        let config = GameConfig::default();
        let mut actor = oishi();

        actor.drive(&InputSnapshot::holding(&[Intent::Jump]), &config);
        assert!(!actor.jumped_this_tick);

        actor.drive(&InputSnapshot::pressing(&[Intent::Jump]), &config);
        assert!(actor.jumped_this_tick);
        assert_relative_eq!(actor.body.velocity.y, -6.5);
        assert!(!actor.body.on_ground);
    }

    #[test]
    fn test_no_jump_in_midair() {
        let config = GameConfig::default();
        let mut actor = oishi();
        actor.body.on_ground = false;
        actor.body.velocity.y = 1.0;

        actor.drive(&InputSnapshot::pressing(&[Intent::Jump]), &config);
        assert!(!actor.jumped_this_tick);
        assert_relative_eq!(actor.body.velocity.y, 1.0);
    }

    #[test]
    fn test_attack_requests() {
        let config = GameConfig::default();
        let mut actor = oishi();
        assert_eq!(
            actor.drive(&InputSnapshot::pressing(&[Intent::Attack]), &config),
            Some(AttackKind::Attack)
        );
        assert_eq!(
            actor.drive(&InputSnapshot::pressing(&[Intent::Kick, Intent::Attack]), &config),
            Some(AttackKind::Kick)
        );
        assert_eq!(actor.drive(&InputSnapshot::holding(&[Intent::Attack]), &config), None);
    }

    #[test]
    fn test_hurt_stun_ignores_input() {
        let config = GameConfig::default();
        let mut actor = oishi();
        actor.combat.damage_invincibility = config.combat.damage_invincibility_ticks;
        actor.body.velocity.x = 2.0;

        let request = actor.drive(
            &InputSnapshot::holding(&[Intent::Left]).and_press(Intent::Attack),
            &config,
        );
        assert_eq!(request, None);
        assert_relative_eq!(actor.body.velocity.x, 2.0);

        // Once the stun has passed, input drives the body again
        actor.combat.damage_invincibility =
            config.combat.damage_invincibility_ticks - config.combat.hurt_stun_ticks;
        actor.drive(&InputSnapshot::holding(&[Intent::Left]), &config);
        assert_relative_eq!(actor.body.velocity.x, -2.5);
    }

    #[test]
    fn test_crouch_only_on_ground() {
        let config = GameConfig::default();
        let mut actor = oishi();
        actor.drive(&InputSnapshot::holding(&[Intent::Down]), &config);
        assert!(actor.crouching);

        actor.begin_tick();
        actor.body.on_ground = false;
        actor.drive(&InputSnapshot::holding(&[Intent::Down]), &config);
        assert!(!actor.crouching);
    }

    #[test]
    fn test_walk_cycle_wraps() {
        let mut actor = oishi();
        actor.body.velocity.x = 2.5;

        let mut frames = Vec::new();
        for _ in 0..25 {
            let pose = actor.pose();
            assert_eq!(pose.state, AnimationState::Walking);
            assert_eq!(pose.clip, ClipId::Walk);
            assert!(pose.frame < 4);
            frames.push(pose.frame);
        }
        assert!(frames.contains(&3));
        assert!(actor.walk_phase() < 4.0);

        actor.body.velocity.x = 0.0;
        let pose = actor.pose();
        assert_eq!(pose.state, AnimationState::Idle);
        assert_eq!(actor.walk_phase(), 0.0);
    }

    #[test]
    fn test_landing_recovery_pose() {
        let mut actor = oishi();
        actor.on_landed(6);
        let pose = actor.pose();
        assert_eq!(pose.state, AnimationState::LandingRecovery);
        assert_eq!(pose.clip, ClipId::Jump);
        assert_eq!(pose.frame, 2);
    }

    #[test]
    fn test_pose_anchor_is_midbottom() {
        let mut actor = oishi();
        let pose = actor.pose();
        assert_relative_eq!(pose.anchor.x, 100.0);
        assert_relative_eq!(pose.anchor.y, 240.0);
    }
}
