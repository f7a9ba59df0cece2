// Enemy patrol and attack behaviour

use crate::config::{CombatConfig, EnemyConfig};
use crate::core::Rect;

use super::characters::Actor;

/// Per-enemy AI state
///
/// Enemies walk back and forth between two x bounds at a fixed speed and
/// strike when a player comes within reach.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyBrain {
    /// Hitbox x at which the patrol turns right
    pub patrol_left: f32,
    /// Hitbox x at which the patrol turns left
    pub patrol_right: f32,
    /// Patrol direction, -1.0 or 1.0
    pub direction: f32,
    /// Patrol speed in px/tick
    pub speed: f32,
    /// Rest between the end of one attack and the start of the next
    pub cooldown_ticks: u32,
    /// Ticks of rest remaining
    pub cooldown: u32,
    /// Ticks left in the current attack
    attack_timer: u32,
    /// Length of the current attack in ticks
    attack_duration: u32,
}

impl EnemyBrain {
    pub fn new(patrol_left: f32, patrol_right: f32, speed: f32) -> Self {
        Self {
            patrol_left,
            patrol_right,
            direction: 1.0,
            speed,
            cooldown_ticks: 0,
            cooldown: 0,
            attack_timer: 0,
            attack_duration: 0,
        }
    }

    pub fn with_cooldown(mut self, ticks: u32) -> Self {
        self.cooldown_ticks = ticks;
        self
    }

    /// Start counting down an attack of `duration` ticks
    pub fn arm(&mut self, duration: u32) {
        self.attack_timer = duration;
        self.attack_duration = duration;
    }

    /// The attack ended or was interrupted; rest before the next one
    pub fn disarm(&mut self) {
        self.attack_timer = 0;
        self.cooldown = self.cooldown_ticks;
    }

    pub fn count_down(&mut self) {
        self.attack_timer = self.attack_timer.saturating_sub(1);
    }

    pub fn rest(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }

    pub fn is_rested(&self) -> bool {
        self.cooldown == 0
    }

    pub fn attack_timer(&self) -> u32 {
        self.attack_timer
    }

    /// Strikes connect only in the final third of the attack
    pub fn strike_window_open(&self) -> bool {
        self.attack_timer > 0 && self.attack_timer * 3 <= self.attack_duration
    }
}

/// Pick the candidate nearest to the enemy along x
pub fn select_target<'a, I>(enemy: &Rect, candidates: I) -> Option<Rect>
where
    I: IntoIterator<Item = &'a Rect>,
{
    let x = enemy.center_x();
    candidates
        .into_iter()
        .min_by(|a, b| {
            (a.center_x() - x)
                .abs()
                .total_cmp(&(b.center_x() - x).abs())
        })
        .copied()
}

/// Turn toward `target`; a target straight above or below keeps the facing
pub fn face(actor: &mut Actor, target: &Rect) {
    let center = actor.body.hitbox.center_x();
    if target.center_x() < center {
        actor.facing_left = true;
    } else if target.center_x() > center {
        actor.facing_left = false;
    }
}

/// Face the target and set patrol velocity for this tick
pub fn think(actor: &mut Actor, target: Option<&Rect>, combat: &CombatConfig) {
    if let Some(target) = target {
        face(actor, target);
    }

    // Knockback carries the body through the stagger
    if actor.is_hurt_stunned(combat) {
        return;
    }

    let Some(brain) = actor.role.brain() else {
        return;
    };
    actor.body.velocity.x = if actor.combat.is_attacking() {
        0.0
    } else {
        brain.direction * brain.speed
    };
}

/// Turn around at the patrol bounds after the body has moved
pub fn after_move(actor: &mut Actor) {
    let x = actor.body.hitbox.x;
    let Some(brain) = actor.role.brain_mut() else {
        return;
    };
    if x >= brain.patrol_right {
        brain.direction = -1.0;
    } else if x <= brain.patrol_left {
        brain.direction = 1.0;
    }
}

/// Whether the enemy should start an attack on `target` this tick
pub fn wants_attack(actor: &Actor, target: Option<&Rect>, config: &EnemyConfig) -> bool {
    let Some(target) = target else {
        return false;
    };
    let rested = actor.role.brain().is_some_and(EnemyBrain::is_rested);
    if !rested || actor.combat.is_attacking() {
        return false;
    }
    let hitbox = &actor.body.hitbox;
    let dx = (target.center_x() - hitbox.center_x()).abs();
    let dy = (target.center_y() - hitbox.center_y()).abs();
    dx < config.aggro_range_x && dy < hitbox.h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::engine::physics::{resolve_step, ClimbIntent, Level};
    use crate::game::characters::{Archetype, AttackKind, Role};
    use approx::assert_relative_eq;

    fn tengu(x: f32, patrol_left: f32, patrol_right: f32) -> Actor {
        let mut actor = Actor::enemy(
            9,
            Archetype::Tengu,
            EnemyBrain::new(patrol_left, patrol_right, 1.0),
            0.0,
            240.0,
        );
        actor.body.hitbox.x = x;
        actor
    }

    fn step(actor: &mut Actor, level: &Level, config: &GameConfig) {
        actor.begin_tick();
        actor.advance_attack(false);
        think(actor, None, &config.combat);
        resolve_step(&mut actor.body, level, &config.physics, ClimbIntent::none());
        after_move(actor);
    }

    #[test]
    fn test_patrol_turns_at_right_bound() {
        let config = GameConfig::default();
        let level = Level::new(240.0);
        let mut actor = tengu(175.0, 100.0, 180.0);

        for _ in 0..5 {
            step(&mut actor, &level, &config);
        }
        assert_relative_eq!(actor.body.hitbox.x, 180.0);
        assert_relative_eq!(actor.role.brain().unwrap().direction, -1.0);

        step(&mut actor, &level, &config);
        assert_relative_eq!(actor.body.hitbox.x, 179.0);
    }

    #[test]
    fn test_patrol_turns_at_left_bound() {
        let config = GameConfig::default();
        let level = Level::new(240.0);
        let mut actor = tengu(102.0, 100.0, 180.0);
        actor.role.brain_mut().unwrap().direction = -1.0;

        step(&mut actor, &level, &config);
        step(&mut actor, &level, &config);
        assert_relative_eq!(actor.body.hitbox.x, 100.0);
        assert_relative_eq!(actor.role.brain().unwrap().direction, 1.0);
    }

    #[test]
    fn test_patrol_on_platform_stays_up() {
        let config = GameConfig::default();
        let level = Level::new(240.0).with(crate::engine::physics::Collidable::platform(
            Rect::new(344.0, 112.0, 32.0, 16.0),
        ));
        let mut actor = Actor::enemy(
            3,
            Archetype::Tengu,
            EnemyBrain::new(344.0, 360.0, 1.0),
            360.0,
            112.0,
        );

        for _ in 0..200 {
            step(&mut actor, &level, &config);
            assert!(actor.body.on_ground);
            assert_relative_eq!(actor.body.hitbox.bottom(), 112.0);
        }
    }

    #[test]
    fn test_select_nearest_target() {
        let enemy = Rect::new(100.0, 208.0, 16.0, 32.0);
        let far = Rect::new(200.0, 208.0, 16.0, 32.0);
        let near = Rect::new(60.0, 208.0, 16.0, 32.0);
        assert_eq!(select_target(&enemy, [&far, &near]), Some(near));
        assert_eq!(select_target(&enemy, std::iter::empty()), None);
    }

    #[test]
    fn test_faces_target_and_keeps_patrolling() {
        let config = GameConfig::default();
        let mut actor = tengu(100.0, 0.0, 300.0);
        let target = Rect::new(40.0, 208.0, 16.0, 32.0);

        think(&mut actor, Some(&target), &config.combat);
        assert!(actor.facing_left);
        assert_relative_eq!(actor.body.velocity.x, 1.0);
    }

    #[test]
    fn test_attacking_enemy_stands_still() {
        let config = GameConfig::default();
        let mut actor = tengu(100.0, 0.0, 300.0);
        actor.start_attack(AttackKind::Attack).unwrap();

        think(&mut actor, None, &config.combat);
        assert_relative_eq!(actor.body.velocity.x, 0.0);
    }

    #[test]
    fn test_wants_attack_in_range() {
        let config = GameConfig::default();
        let actor = tengu(100.0, 0.0, 300.0);

        let close = Rect::new(130.0, 208.0, 16.0, 32.0);
        assert!(wants_attack(&actor, Some(&close), &config.enemy));

        let far = Rect::new(160.0, 208.0, 16.0, 32.0);
        assert!(!wants_attack(&actor, Some(&far), &config.enemy));

        let above = Rect::new(110.0, 150.0, 16.0, 32.0);
        assert!(!wants_attack(&actor, Some(&above), &config.enemy));

        assert!(!wants_attack(&actor, None, &config.enemy));
    }

    #[test]
    fn test_no_new_attack_while_attacking() {
        let config = GameConfig::default();
        let mut actor = tengu(100.0, 0.0, 300.0);
        let close = Rect::new(110.0, 208.0, 16.0, 32.0);
        actor.start_attack(AttackKind::Attack).unwrap();
        assert!(!wants_attack(&actor, Some(&close), &config.enemy));
    }

    #[test]
    fn test_rests_after_attack() {
        let config = GameConfig::default();
        let mut actor = tengu(100.0, 0.0, 300.0);
        actor.role = Role::Enemy(EnemyBrain::new(0.0, 300.0, 1.0).with_cooldown(3));
        let close = Rect::new(110.0, 208.0, 16.0, 32.0);

        actor.start_attack(AttackKind::Attack).unwrap();
        actor.cancel_attack();
        for _ in 0..3 {
            assert!(!wants_attack(&actor, Some(&close), &config.enemy));
            actor.tick_timers();
        }
        assert!(wants_attack(&actor, Some(&close), &config.enemy));
    }

    #[test]
    fn test_strike_window() {
        let mut brain = EnemyBrain::new(0.0, 10.0, 1.0);
        assert!(!brain.strike_window_open());
        brain.arm(24);
        assert!(!brain.strike_window_open());
        for _ in 0..16 {
            brain.count_down();
        }
        assert_eq!(brain.attack_timer(), 8);
        assert!(brain.strike_window_open());
        brain.disarm();
        assert!(!brain.strike_window_open());
    }
}
