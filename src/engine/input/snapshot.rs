// Immutable per-tick input snapshot handed to every actor update

use super::action::Intent;

bitflags::bitflags! {
    /// A set of intents packed into a bitmask
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct IntentSet: u16 {
        const LEFT       = 1 << 0;
        const RIGHT      = 1 << 1;
        const UP         = 1 << 2;
        const DOWN       = 1 << 3;
        const JUMP       = 1 << 4;
        const ATTACK     = 1 << 5;
        const KICK       = 1 << 6;
        const NEXT_ACTOR = 1 << 7;
        const PREV_ACTOR = 1 << 8;
    }
}

impl From<Intent> for IntentSet {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::Left => Self::LEFT,
            Intent::Right => Self::RIGHT,
            Intent::Up => Self::UP,
            Intent::Down => Self::DOWN,
            Intent::Jump => Self::JUMP,
            Intent::Attack => Self::ATTACK,
            Intent::Kick => Self::KICK,
            Intent::NextActor => Self::NEXT_ACTOR,
            Intent::PrevActor => Self::PREV_ACTOR,
        }
    }
}

impl FromIterator<Intent> for IntentSet {
    fn from_iter<I: IntoIterator<Item = Intent>>(iter: I) -> Self {
        iter.into_iter()
            .fold(IntentSet::empty(), |set, intent| set | IntentSet::from(intent))
    }
}

/// Intents for one tick
///
/// `held` is what is down right now. `pressed` holds rising edges since the
/// previous snapshot, so a tap shorter than one tick still registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub held: IntentSet,
    pub pressed: IntentSet,
}

impl InputSnapshot {
    /// No intents active
    pub fn idle() -> Self {
        Self::default()
    }

    /// Intents held since an earlier tick (no new presses)
    pub fn holding(intents: &[Intent]) -> Self {
        Self {
            held: intents.iter().copied().collect(),
            pressed: IntentSet::empty(),
        }
    }

    /// Intents pressed this tick (held and newly pressed)
    pub fn pressing(intents: &[Intent]) -> Self {
        let set: IntentSet = intents.iter().copied().collect();
        Self {
            held: set,
            pressed: set,
        }
    }

    /// Add a fresh press on top of this snapshot
    pub fn and_press(mut self, intent: Intent) -> Self {
        let flag = IntentSet::from(intent);
        self.held |= flag;
        self.pressed |= flag;
        self
    }

    pub fn is_held(&self, intent: Intent) -> bool {
        self.held.contains(IntentSet::from(intent))
    }

    pub fn just_pressed(&self, intent: Intent) -> bool {
        self.pressed.contains(IntentSet::from(intent))
    }

    /// Horizontal direction from -1.0 (left) to 1.0 (right).
    /// Right wins when both are held, as it is checked last.
    pub fn horizontal(&self) -> f32 {
        if self.is_held(Intent::Right) {
            1.0
        } else if self.is_held(Intent::Left) {
            -1.0
        } else {
            0.0
        }
    }
}
