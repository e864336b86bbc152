//! Combat state machine.
//!
//! [`ArenaEngine`] borrows the [`ArenaState`] for one tick and drives it
//! through `Idle → PlayerTurn/EnemyTurn → EnemyDefeated → Idle`. Player defeat
//! is not a phase; every tick ends with a revive check.

mod events;

pub use events::{ArenaEvent, Side};

use rand::Rng;

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::encounter::EncounterDirector;
use crate::state::{ArenaState, CombatPhase};
use crate::stats::StatKind;

pub struct ArenaEngine<'a> {
    state: &'a mut ArenaState,
    catalog: &'a Catalog,
    director: EncounterDirector,
}

impl<'a> ArenaEngine<'a> {
    pub fn new(state: &'a mut ArenaState, catalog: &'a Catalog, config: &GameConfig) -> Self {
        Self {
            state,
            catalog,
            director: EncounterDirector::new(config.enemies_per_floor),
        }
    }

    /// Advances the simulation by `delta_time` seconds.
    ///
    /// Negative or non-finite deltas count as zero.
    pub fn tick<R: Rng + ?Sized>(&mut self, delta_time: f64, rng: &mut R) -> Vec<ArenaEvent> {
        let delta_time = if delta_time.is_finite() { delta_time.max(0.0) } else { 0.0 };
        let mut events = Vec::new();

        match self.state.phase {
            CombatPhase::Idle => self.start_combat(&mut events),
            CombatPhase::PlayerTurn | CombatPhase::EnemyTurn => {
                self.handle_combat(delta_time, &mut events)
            }
            CombatPhase::EnemyDefeated => self.resolve_victory(rng, &mut events),
            CombatPhase::BetweenTurns => {}
        }

        if !self.state.player.is_alive() {
            self.state
                .log
                .push(format!("{} was destroyed and rebooted.", self.state.player.name()));
            self.state.phase = CombatPhase::Idle;
            self.state.player.reset_combat_state();
            events.push(ArenaEvent::PlayerRevived);
        }

        events
    }

    /// Spawns an opponent if none is alive, refills both sides, and picks
    /// who strikes first. Ties go to the opponent.
    pub fn start_combat(&mut self, events: &mut Vec<ArenaEvent>) {
        if !self.state.opponent_alive() {
            self.spawn_opponent(events);
        }
        let ArenaState {
            player, opponent, ..
        } = &mut *self.state;
        let Some(opponent) = opponent.as_mut() else {
            return;
        };

        player.reset_combat_state();
        opponent.reset_combat_state();

        let first = if player.stat(StatKind::Mobility) > opponent.stat(StatKind::Mobility) {
            Side::Player
        } else {
            Side::Opponent
        };
        let name = opponent.name().to_string();

        self.state.phase = match first {
            Side::Player => CombatPhase::PlayerTurn,
            Side::Opponent => CombatPhase::EnemyTurn,
        };
        self.state.time_since_last_action = 0.0;
        self.state.log.push(format!("Combat started against {name}."));
        events.push(ArenaEvent::CombatStarted {
            opponent: name,
            first,
        });
    }

    /// Charges the current attacker and resolves its attack once the delay
    /// from its AttackSpeed has elapsed.
    pub fn handle_combat(&mut self, delta_time: f64, events: &mut Vec<ArenaEvent>) {
        self.state.time_since_last_action += delta_time;

        let ArenaState {
            player,
            opponent,
            phase,
            time_since_last_action,
            log,
            ..
        } = &mut *self.state;
        let Some(opponent) = opponent.as_mut() else {
            *phase = CombatPhase::Idle;
            return;
        };

        let (attacker, defender, side) = match *phase {
            CombatPhase::PlayerTurn => (&*player, opponent, Side::Player),
            CombatPhase::EnemyTurn => (&*opponent, player, Side::Opponent),
            _ => return,
        };

        if *time_since_last_action < attacker.attack_delay() {
            return;
        }

        let damage = attacker.calculate_attack_damage();
        let report = defender.take_damage(damage);
        *time_since_last_action = 0.0;

        log.push(format!(
            "{} hits {} for {:.1} damage.",
            attacker.name(),
            defender.name(),
            report.shield_absorbed + report.health_lost
        ));
        events.push(ArenaEvent::AttackResolved {
            attacker: side,
            damage,
            shield_absorbed: report.shield_absorbed,
            health_lost: report.health_lost,
            defender_health: defender.current_health(),
        });

        if defender.is_alive() {
            *phase = match side {
                Side::Player => CombatPhase::EnemyTurn,
                Side::Opponent => CombatPhase::PlayerTurn,
            };
        } else if side == Side::Player {
            *phase = CombatPhase::EnemyDefeated;
        }
    }

    /// Awards loot, advances progress, and queues the next opponent.
    pub fn resolve_victory<R: Rng + ?Sized>(&mut self, rng: &mut R, events: &mut Vec<ArenaEvent>) {
        let was_boss = self.state.progress.opponent_is_boss;
        if let Some(defeated) = self.state.opponent.take() {
            self.state.log.push(format!("{} defeated!", defeated.name()));
            events.push(ArenaEvent::OpponentDefeated {
                name: defeated.name().to_string(),
                was_boss,
            });
        }

        self.award_loot(rng, events);

        let progress = &mut self.state.progress;
        if was_boss {
            progress.floor = progress.floor.saturating_add(1);
            progress.defeated = 0;
            let floor = progress.floor;
            self.state.log.push(format!("Advanced to floor {floor}."));
            events.push(ArenaEvent::FloorAdvanced { floor });
        } else {
            progress.defeated = progress.defeated.saturating_add(1);
        }

        self.spawn_opponent(events);
        self.state.phase = CombatPhase::Idle;
    }

    fn award_loot<R: Rng + ?Sized>(&mut self, rng: &mut R, events: &mut Vec<ArenaEvent>) {
        match self.catalog.generate_random_item(rng) {
            Ok(Some(item)) => {
                self.state
                    .log
                    .push(format!("Looted [{}] {}.", item.rarity(), item.name()));
                events.push(ArenaEvent::LootAwarded {
                    name: item.name().to_string(),
                    rarity: item.rarity(),
                    slot: item.slot(),
                });
                self.state.player.add_to_inventory(item);
            }
            Ok(None) => self.state.log.push("No loot dropped."),
            Err(error) => self.state.log.push(format!("Loot roll failed: {error}")),
        }
    }

    fn spawn_opponent(&mut self, events: &mut Vec<ArenaEvent>) {
        let progress = self.state.progress;
        let spawn = self
            .director
            .spawn(progress.floor, progress.defeated, self.catalog);

        let label = if spawn.is_boss { "Boss" } else { "Enemy" };
        self.state
            .log
            .push(format!("{label} approaching: {}", spawn.mech.name()));
        events.push(ArenaEvent::OpponentSpawned {
            name: spawn.mech.name().to_string(),
            floor: progress.floor,
            is_boss: spawn.is_boss,
        });

        self.state.progress.opponent_is_boss = spawn.is_boss;
        self.state.opponent = Some(spawn.mech);
    }
}
