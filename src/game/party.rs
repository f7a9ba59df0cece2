// Tag-team party of player characters

use crate::engine::input::{InputSnapshot, Intent};

use super::characters::{Actor, ActorId};

/// A change of the controlled character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handover {
    pub from: ActorId,
    pub to: ActorId,
}

/// The player characters, one of which is controlled at a time
///
/// Only the active member is simulated. Switching hands the outgoing
/// member's position and facing to the incoming one, and depleted members
/// are skipped.
#[derive(Debug, Default)]
pub struct Party {
    members: Vec<Actor>,
    active: usize,
}

impl Party {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, actor: Actor) {
        self.members.push(actor);
    }

    pub fn members(&self) -> &[Actor] {
        &self.members
    }

    /// The controlled member, if it can still fight
    pub fn active(&self) -> Option<&Actor> {
        self.members.get(self.active).filter(|a| a.is_alive())
    }

    pub fn active_mut(&mut self) -> Option<&mut Actor> {
        self.members.get_mut(self.active).filter(|a| a.is_alive())
    }

    /// Every member has been depleted
    pub fn is_defeated(&self) -> bool {
        !self.members.is_empty() && self.members.iter().all(|a| !a.is_alive())
    }

    /// Apply next/previous switch requests from the input snapshot
    pub fn handle_input(&mut self, input: &InputSnapshot) -> Option<Handover> {
        if input.just_pressed(Intent::NextActor) {
            self.cycle(1)
        } else if input.just_pressed(Intent::PrevActor) {
            self.cycle(-1)
        } else {
            None
        }
    }

    /// Hand control to the next living member in `step` direction
    pub fn cycle(&mut self, step: isize) -> Option<Handover> {
        let count = self.members.len();
        if count < 2 {
            return None;
        }

        let next = (1..count as isize)
            .map(|offset| (self.active as isize + step * offset).rem_euclid(count as isize) as usize)
            .find(|&index| self.members[index].is_alive())?;

        let outgoing = &self.members[self.active];
        let anchor = outgoing.body.hitbox.midbottom();
        let facing_left = outgoing.facing_left;
        let on_ground = outgoing.body.on_ground;
        let from = outgoing.id;

        let incoming = &mut self.members[next];
        incoming.reset_transient();
        incoming.body.teleport(anchor.x, anchor.y);
        incoming.body.on_ground = on_ground;
        incoming.facing_left = facing_left;
        let to = incoming.id;

        self.active = next;
        log::info!("Switched to {}", self.members[next].name());
        Some(Handover { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::Archetype;
    use approx::assert_relative_eq;

    fn party() -> Party {
        let mut party = Party::new();
        party.add(Actor::player(0, Archetype::Oishi, 100.0, 240.0));
        party.add(Actor::player(1, Archetype::Koji, 100.0, 240.0));
        party.add(Actor::player(2, Archetype::Oishi, 100.0, 240.0));
        party
    }

    #[test]
    fn test_first_member_starts_active() {
        let party = party();
        assert_eq!(party.active().map(|a| a.id), Some(0));
        assert!(!party.is_defeated());
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        let mut party = party();
        assert_eq!(party.cycle(-1), Some(Handover { from: 0, to: 2 }));
        assert_eq!(party.cycle(1), Some(Handover { from: 2, to: 0 }));
        assert_eq!(party.cycle(1), Some(Handover { from: 0, to: 1 }));
    }

    #[test]
    fn test_incoming_takes_position_and_facing() {
        let mut party = party();
        {
            let active = party.active_mut().unwrap();
            active.body.hitbox.x = 300.0;
            active.facing_left = true;
        }
        party.handle_input(&InputSnapshot::pressing(&[Intent::NextActor]));

        let koji = party.active().unwrap();
        assert_eq!(koji.id, 1);
        assert_relative_eq!(koji.body.hitbox.center_x(), 308.0);
        assert_relative_eq!(koji.body.hitbox.bottom(), 240.0);
        assert!(koji.facing_left);
    }

    #[test]
    fn test_skips_depleted_members() {
        let mut party = party();
        party.members[1].health = 0;
        assert_eq!(party.cycle(1), Some(Handover { from: 0, to: 2 }));
    }

    #[test]
    fn test_defeated_when_all_depleted() {
        let mut party = party();
        for member in &mut party.members {
            member.health = 0;
        }
        assert!(party.is_defeated());
        assert!(party.active().is_none());
        assert_eq!(party.cycle(1), None);
    }

    #[test]
    fn test_single_member_cannot_switch() {
        let mut party = Party::new();
        party.add(Actor::player(0, Archetype::Koji, 50.0, 240.0));
        assert_eq!(party.handle_input(&InputSnapshot::pressing(&[Intent::NextActor])), None);
    }
}
