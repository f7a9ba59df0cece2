// Character animation clips, kits and pose projection

use glam::Vec2;

use crate::core::Rect;

use super::character::{Actor, ActorId};
use super::state::{AnimationState, AttackKind};

/// Identifies a clip slot in a character kit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipId {
    Stand,
    Walk,
    Jump,
    Crouch,
    Attack,
    Kick,
    JumpKick,
    Hurt,
}

/// Frame of the jump clip shown on the tick a jump starts
pub const JUMP_RISING_FRAME: usize = 0;
/// Frame of the jump clip shown while airborne
pub const JUMP_AIR_FRAME: usize = 1;
/// Frame of the jump clip shown during landing recovery
pub const JUMP_LANDING_FRAME: usize = 2;

/// A single animation clip
///
/// Playback is tick based: the frame index advances by `advance_rate` every
/// tick, so a clip of `frame_count` frames plays for
/// `frame_count / advance_rate` ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClip {
    pub id: ClipId,
    /// Number of frames in the clip
    pub frame_count: usize,
    /// Frames advanced per tick
    pub advance_rate: f32,
    /// Whether the clip wraps back to frame 0
    pub looping: bool,
}

impl AnimationClip {
    pub const fn new(id: ClipId, frame_count: usize, advance_rate: f32, looping: bool) -> Self {
        Self {
            id,
            frame_count,
            advance_rate,
            looping,
        }
    }

    /// Create a looping clip
    pub const fn looping(id: ClipId, frame_count: usize, advance_rate: f32) -> Self {
        Self::new(id, frame_count, advance_rate, true)
    }

    /// Create a one-shot clip (plays once)
    pub const fn one_shot(id: ClipId, frame_count: usize, advance_rate: f32) -> Self {
        Self::new(id, frame_count, advance_rate, false)
    }

    /// Single frame that never advances
    pub const fn still(id: ClipId) -> Self {
        Self::new(id, 1, 0.0, false)
    }

    pub fn last_frame(&self) -> usize {
        self.frame_count.saturating_sub(1)
    }

    /// Ticks needed to play the clip once, 0 if it never advances
    pub fn duration_ticks(&self) -> u32 {
        if self.advance_rate <= 0.0 {
            return 0;
        }
        (self.frame_count as f32 / self.advance_rate).ceil() as u32
    }

    /// Whole frame to display for a fractional frame index
    pub fn frame_at(&self, index: f32) -> usize {
        let frame = index.max(0.0).floor() as usize;
        if self.looping {
            frame % self.frame_count.max(1)
        } else {
            frame.min(self.last_frame())
        }
    }
}

/// The full set of clips one archetype can play
///
/// `jump` holds three frames: rising, mid-air and landing. Optional slots are
/// absent for characters that lack the move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterKit {
    pub stand: AnimationClip,
    pub walk: AnimationClip,
    pub jump: AnimationClip,
    pub attack: AnimationClip,
    pub kick: Option<AnimationClip>,
    pub jump_kick: Option<AnimationClip>,
    pub hurt: Option<AnimationClip>,
    pub crouch: Option<AnimationClip>,
}

impl CharacterKit {
    fn base(attack: AnimationClip) -> Self {
        Self {
            stand: AnimationClip::still(ClipId::Stand),
            walk: AnimationClip::looping(ClipId::Walk, 4, 0.2),
            jump: AnimationClip::one_shot(ClipId::Jump, 3, 0.0),
            attack,
            kick: None,
            jump_kick: None,
            hurt: Some(AnimationClip::still(ClipId::Hurt)),
            crouch: Some(AnimationClip::still(ClipId::Crouch)),
        }
    }

    /// Sword slash only
    pub fn samurai() -> Self {
        Self::base(AnimationClip::one_shot(ClipId::Attack, 4, 0.25))
    }

    /// Punch, kick and jump kick
    pub fn karateka() -> Self {
        Self {
            kick: Some(AnimationClip::one_shot(ClipId::Kick, 4, 0.25)),
            jump_kick: Some(AnimationClip::one_shot(ClipId::JumpKick, 3, 0.125)),
            ..Self::base(AnimationClip::one_shot(ClipId::Attack, 3, 0.25))
        }
    }

    /// Slow claw swipe, cannot crouch
    pub fn tengu() -> Self {
        Self {
            crouch: None,
            ..Self::base(AnimationClip::one_shot(ClipId::Attack, 6, 0.25))
        }
    }

    /// Clip that plays for an attack kind, if this kit has one
    pub fn attack_clip(&self, kind: AttackKind) -> Option<AnimationClip> {
        match kind {
            AttackKind::Attack => Some(self.attack),
            AttackKind::Kick => self.kick,
            AttackKind::JumpKick => self.jump_kick,
        }
    }

    pub fn hurt_or_stand(&self) -> AnimationClip {
        self.hurt.unwrap_or(self.stand)
    }

    pub fn crouch_or_stand(&self) -> AnimationClip {
        self.crouch.unwrap_or(self.stand)
    }
}

/// Everything a renderer needs to draw one actor for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub actor: ActorId,
    pub hitbox: Rect,
    /// Bottom center of the hitbox, where the sprite is anchored
    pub anchor: Vec2,
    /// Sprite is mirrored when true
    pub facing_left: bool,
    pub state: AnimationState,
    pub clip: ClipId,
    pub frame: usize,
}

impl AnimationState {
    /// Derive the animation state from an actor's physical and combat state.
    /// First match wins.
    pub fn project(actor: &Actor) -> Self {
        let combat = &actor.combat;
        let body = &actor.body;

        if combat.damage_invincibility > 0 {
            Self::Hurt
        } else if let Some(attack) = combat.attack {
            Self::Attacking(attack.kind)
        } else if actor.jumped_this_tick {
            Self::JumpRising
        } else if !body.on_ground {
            Self::JumpFalling
        } else if combat.landing_recovery > 0 {
            Self::LandingRecovery
        } else if actor.crouching {
            Self::Crouching
        } else if body.velocity.x != 0.0 {
            Self::Walking
        } else {
            Self::Idle
        }
    }

    /// Clip and frame to display for this state
    pub fn clip_frame(self, actor: &Actor) -> (ClipId, usize) {
        let kit = &actor.kit;
        match self {
            Self::Hurt => (kit.hurt_or_stand().id, 0),
            Self::Attacking(kind) => match (kit.attack_clip(kind), actor.combat.attack) {
                (Some(clip), Some(attack)) => (clip.id, clip.frame_at(attack.frame_index)),
                _ => (kit.stand.id, 0),
            },
            Self::JumpRising => (kit.jump.id, JUMP_RISING_FRAME.min(kit.jump.last_frame())),
            Self::JumpFalling => (kit.jump.id, JUMP_AIR_FRAME.min(kit.jump.last_frame())),
            Self::LandingRecovery => (kit.jump.id, JUMP_LANDING_FRAME.min(kit.jump.last_frame())),
            Self::Crouching => (kit.crouch_or_stand().id, 0),
            Self::Walking => (kit.walk.id, kit.walk.frame_at(actor.walk_phase())),
            Self::Idle => (kit.stand.id, 0),
        }
    }
}
