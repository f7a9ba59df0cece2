// World simulation: one fixed tick over the party, the enemies and the level

use crate::config::GameConfig;
use crate::core::Rect;
use crate::engine::input::{InputSnapshot, Intent};
use crate::engine::physics::{resolve_step, ClimbIntent, LevelGeometry};

use super::characters::{Actor, ActorId, Archetype, AttackKind, DamageOutcome, Pose};
use super::enemy::{self, EnemyBrain};
use super::party::Party;
use super::stage::EnemySpawn;

/// Something observable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jumped { actor: ActorId },
    Landed { actor: ActorId },
    AttackStarted { actor: ActorId, kind: AttackKind },
    Hit {
        attacker: ActorId,
        target: ActorId,
        dealt: u32,
        remaining: u32,
    },
    /// A party member ran out of health
    ActorDepleted { actor: ActorId },
    /// An enemy ran out of health and was removed
    EnemyDefeated { actor: ActorId },
    ActiveActorChanged { from: ActorId, to: ActorId },
    /// No party member is left standing
    PartyDefeated,
}

/// Output of one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Tick number, starting at 1
    pub tick: u64,
    /// Active player first, then enemies in spawn order
    pub poses: Vec<Pose>,
    pub events: Vec<GameEvent>,
}

impl TickReport {
    pub fn pose_of(&self, actor: ActorId) -> Option<&Pose> {
        self.poses.iter().find(|p| p.actor == actor)
    }

    pub fn has_event(&self, event: GameEvent) -> bool {
        self.events.contains(&event)
    }
}

/// An attack hitbox captured before any damage is applied
#[derive(Debug, Clone, Copy)]
struct Strike {
    attacker: ActorId,
    from_player: bool,
    area: Rect,
    center_x: f32,
    damage: u32,
}

/// The whole simulation state
pub struct World<L: LevelGeometry> {
    config: GameConfig,
    level: L,
    party: Party,
    enemies: Vec<Actor>,
    next_id: ActorId,
    tick: u64,
    defeat_reported: bool,
}

impl<L: LevelGeometry> World<L> {
    pub fn new(config: GameConfig, level: L) -> Self {
        Self {
            config,
            level,
            party: Party::new(),
            enemies: Vec::new(),
            next_id: 0,
            tick: 0,
            defeat_reported: false,
        }
    }

    fn allocate_id(&mut self) -> ActorId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a party member; the first one added starts in control
    pub fn spawn_player(&mut self, archetype: Archetype, center_x: f32, bottom: f32) -> ActorId {
        let id = self.allocate_id();
        self.party.add(Actor::player(id, archetype, center_x, bottom));
        log::debug!(
            "Spawned player {} ({}) at ({}, {})",
            id,
            archetype.name(),
            center_x,
            bottom
        );
        id
    }

    pub fn spawn_enemy(&mut self, spawn: &EnemySpawn) -> ActorId {
        let id = self.allocate_id();
        let brain = EnemyBrain::new(
            spawn.patrol_left,
            spawn.patrol_right,
            self.config.enemy.patrol_speed,
        )
        .with_cooldown(self.config.enemy.attack_cooldown_ticks);
        self.enemies.push(Actor::enemy(
            id,
            spawn.archetype,
            brain,
            spawn.center_x,
            spawn.bottom,
        ));
        log::debug!(
            "Spawned enemy {} ({}) patrolling {}..{}",
            id,
            spawn.archetype.name(),
            spawn.patrol_left,
            spawn.patrol_right
        );
        id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn level(&self) -> &L {
        &self.level
    }

    pub fn party(&self) -> &Party {
        &self.party
    }

    pub fn enemies(&self) -> &[Actor] {
        &self.enemies
    }

    pub fn enemy(&self, id: ActorId) -> Option<&Actor> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn active_player(&self) -> Option<&Actor> {
        self.party.active()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Advance the simulation by one tick.
    ///
    /// Phases run in a fixed order: party switching, movement and collision
    /// for every actor, attack triggers, damage, removal of defeated enemies,
    /// and finally animation. Damage reads positions frozen after movement.
    pub fn tick(&mut self, input: &InputSnapshot) -> TickReport {
        self.tick += 1;
        let mut events = Vec::new();

        if let Some(handover) = self.party.handle_input(input) {
            events.push(GameEvent::ActiveActorChanged {
                from: handover.from,
                to: handover.to,
            });
        }

        // Enemies track where the player stood at the end of the last tick
        let previous_targets = self.player_hitboxes();

        let attack_request = self.move_player(input, &mut events);
        self.move_enemies(&previous_targets, &mut events);

        self.trigger_attacks(attack_request, &mut events);
        self.apply_strikes(&mut events);

        self.enemies.retain(|e| e.is_alive());

        let mut poses = Vec::with_capacity(self.enemies.len() + 1);
        if let Some(player) = self.party.active_mut() {
            poses.push(player.pose());
        }
        poses.extend(self.enemies.iter_mut().map(|e| e.pose()));

        for event in &events {
            log::trace!("tick {}: {:?}", self.tick, event);
        }

        TickReport {
            tick: self.tick,
            poses,
            events,
        }
    }

    /// Hitboxes enemies may target
    fn player_hitboxes(&self) -> Vec<Rect> {
        self.party.active().map(|p| p.body.hitbox).into_iter().collect()
    }

    fn move_player(
        &mut self,
        input: &InputSnapshot,
        events: &mut Vec<GameEvent>,
    ) -> Option<AttackKind> {
        let player = self.party.active_mut()?;
        player.begin_tick();
        player.advance_attack(input.is_held(Intent::Kick));

        let request = player.drive(input, &self.config);
        let climb = player.climb_intent(input);
        let outcome = resolve_step(&mut player.body, &self.level, &self.config.physics, climb);

        if player.jumped_this_tick {
            events.push(GameEvent::Jumped { actor: player.id });
        }
        if outcome.landed {
            player.on_landed(self.config.physics.landing_ticks);
            events.push(GameEvent::Landed { actor: player.id });
        }
        request
    }

    fn move_enemies(&mut self, targets: &[Rect], events: &mut Vec<GameEvent>) {
        for actor in &mut self.enemies {
            actor.begin_tick();
            actor.advance_attack(false);

            let target = enemy::select_target(&actor.body.hitbox, targets);
            enemy::think(actor, target.as_ref(), &self.config.combat);
            let outcome = resolve_step(
                &mut actor.body,
                &self.level,
                &self.config.physics,
                ClimbIntent::none(),
            );
            if outcome.landed {
                actor.on_landed(self.config.physics.landing_ticks);
                events.push(GameEvent::Landed { actor: actor.id });
            }
            enemy::after_move(actor);
        }
    }

    fn trigger_attacks(&mut self, request: Option<AttackKind>, events: &mut Vec<GameEvent>) {
        if let (Some(requested), Some(player)) = (request, self.party.active_mut()) {
            match player.start_attack(requested) {
                Ok(kind) => events.push(GameEvent::AttackStarted {
                    actor: player.id,
                    kind,
                }),
                Err(reason) => log::debug!("{} cannot attack: {}", player.name(), reason),
            }
        }

        let targets = self.player_hitboxes();
        for actor in &mut self.enemies {
            let Some(target) = enemy::select_target(&actor.body.hitbox, &targets) else {
                continue;
            };
            if !enemy::wants_attack(actor, Some(&target), &self.config.enemy) {
                continue;
            }
            // The player may have crossed over since `think`
            enemy::face(actor, &target);
            match actor.start_attack(AttackKind::Attack) {
                Ok(kind) => events.push(GameEvent::AttackStarted {
                    actor: actor.id,
                    kind,
                }),
                Err(reason) => log::trace!("{} holds back: {}", actor.name(), reason),
            }
        }
    }

    /// Collect every live attack hitbox, then apply them all
    fn apply_strikes(&mut self, events: &mut Vec<GameEvent>) {
        let reach = self.config.combat.attack_reach;
        let strike_of = |actor: &Actor, from_player: bool| -> Option<Strike> {
            let kind = actor.combat.attack_kind()?;
            actor.attack_hitbox(reach).map(|area| Strike {
                attacker: actor.id,
                from_player,
                area,
                center_x: actor.body.hitbox.center_x(),
                damage: actor.stats.damage_for(kind),
            })
        };

        let strikes: Vec<Strike> = self
            .party
            .active()
            .and_then(|p| strike_of(p, true))
            .into_iter()
            .chain(self.enemies.iter().filter_map(|e| strike_of(e, false)))
            .collect();
        if strikes.is_empty() {
            return;
        }

        // Pair strikes with targets before anything changes
        let player_box = self.party.active().map(|p| (p.id, p.body.hitbox));
        let mut hits: Vec<(ActorId, Strike)> = Vec::new();
        for strike in &strikes {
            if strike.from_player {
                hits.extend(
                    self.enemies
                        .iter()
                        .filter(|e| strike.area.overlaps(&e.body.hitbox))
                        .map(|e| (e.id, *strike)),
                );
            } else if let Some((id, hitbox)) = player_box {
                if strike.area.overlaps(&hitbox) {
                    hits.push((id, *strike));
                }
            }
        }

        let combat = &self.config.combat;
        let mut player_depleted = false;
        for (target_id, strike) in hits {
            let target = if strike.from_player {
                self.enemies.iter_mut().find(|e| e.id == target_id)
            } else {
                self.party.active_mut()
            };
            let Some(target) = target else {
                continue;
            };

            let attacker_on_left = strike.center_x < target.body.hitbox.center_x();
            let outcome = target.take_damage(strike.damage, attacker_on_left, combat);
            let (dealt, remaining) = match outcome {
                DamageOutcome::Absorbed => continue,
                DamageOutcome::Wounded { dealt, remaining } => (dealt, remaining),
                DamageOutcome::Depleted { dealt } => (dealt, 0),
            };
            events.push(GameEvent::Hit {
                attacker: strike.attacker,
                target: target_id,
                dealt,
                remaining,
            });
            log::debug!("{} hit for {}, {} left", target.name(), dealt, remaining);

            if remaining == 0 {
                if strike.from_player {
                    log::info!("{} defeated", target.name());
                    events.push(GameEvent::EnemyDefeated { actor: target_id });
                } else {
                    log::info!("{} is out of the fight", target.name());
                    events.push(GameEvent::ActorDepleted { actor: target_id });
                    player_depleted = true;
                }
            }
        }

        if player_depleted {
            self.replace_depleted_player(events);
        }
    }

    fn replace_depleted_player(&mut self, events: &mut Vec<GameEvent>) {
        if let Some(handover) = self.party.cycle(1) {
            events.push(GameEvent::ActiveActorChanged {
                from: handover.from,
                to: handover.to,
            });
        } else if self.party.is_defeated() && !self.defeat_reported {
            self.defeat_reported = true;
            log::info!("Party defeated after {} ticks", self.tick);
            events.push(GameEvent::PartyDefeated);
        }
    }
}
