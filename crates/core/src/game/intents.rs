//! Player intents: auto-move, melee approach, waiting, and drinking potions.
//! This module exists to turn one input into zero or more paid world ticks.
//! It does not own the tick rules themselves or floor generation.

use tracing::debug;

use super::turn::TickOutcome;
use super::*;
use crate::content::{PLAYER_MAX_DAMAGE, PLAYER_MIN_DAMAGE, POTION_MAX_HEAL, POTION_MIN_HEAL};
use crate::rng::roll;

impl Game {
    /// Walks toward `target` one tick per step, or attacks when an enemy stands there.
    ///
    /// Out-of-bounds targets are ignored without a message. Auto-move stops early on the
    /// stair (descending), as soon as any enemy is in view, or when the player dies.
    pub fn move_to(&mut self, target: Pos) -> IntentResult {
        if !self.state.map.in_bounds(target) {
            return IntentResult::rejected();
        }
        if let Some(enemy_id) = self.state.enemy_at(target) {
            return self.attack_approach(enemy_id);
        }

        let path = find_path(&self.state, self.state.player.pos, target);
        if path.is_empty() {
            debug!(from = ?self.state.player.pos, to = ?target, "no path for move");
            self.state.log.push(LogEvent::CannotMove);
            return IntentResult::rejected();
        }

        let mut ticks = 0;
        for step in path {
            self.state.player.pos = step;
            self.reveal_from_player();
            let tile = self.state.map.tile_at(step);
            ticks += 1;
            if self.consume_turn(1 + tile.hunger_cost()) == TickOutcome::Died {
                return IntentResult { ticks, stop: IntentStop::RunReset };
            }
            self.pick_up_items();

            if tile == TileKind::Stair {
                self.advance_floor();
                return IntentResult { ticks, stop: IntentStop::Descended };
            }
            if self.enemy_in_view() {
                self.state.log.push(LogEvent::EnemySpotted);
                return IntentResult { ticks, stop: IntentStop::EnemySpotted };
            }
        }

        IntentResult { ticks, stop: IntentStop::Completed }
    }

    /// Closes to melee range in a single paid step, then strikes if adjacent.
    fn attack_approach(&mut self, enemy_id: EnemyId) -> IntentResult {
        let enemy_pos = self.state.enemies[enemy_id].pos;
        let route = find_path(&self.state, self.state.player.pos, enemy_pos);
        if route.is_empty() {
            self.state.log.push(LogEvent::NoRoute);
            return IntentResult::rejected();
        }

        let mut ticks = 0;
        if manhattan(self.state.player.pos, enemy_pos) != 1 && route.len() >= 2 {
            self.state.player.pos = route[route.len() - 2];
            self.reveal_from_player();
            ticks += 1;
            if self.consume_turn(1) == TickOutcome::Died {
                return IntentResult { ticks, stop: IntentStop::RunReset };
            }
        }

        let Some(enemy) = self.state.enemies.get(enemy_id) else {
            return IntentResult { ticks, stop: IntentStop::Completed };
        };
        if manhattan(self.state.player.pos, enemy.pos) == 1 {
            let kind = enemy.kind;
            let damage = roll(&mut self.rng, PLAYER_MIN_DAMAGE, PLAYER_MAX_DAMAGE);
            let remaining = {
                let enemy = &mut self.state.enemies[enemy_id];
                enemy.hp -= damage;
                enemy.hp
            };
            self.state.log.push(LogEvent::AttackLanded { damage });
            if remaining <= 0 {
                self.state.enemies.remove(enemy_id);
                self.state.log.push(LogEvent::EnemySlain { kind });
            }
            ticks += 1;
            if self.consume_turn(1) == TickOutcome::Died {
                return IntentResult { ticks, stop: IntentStop::RunReset };
            }
        }

        IntentResult { ticks, stop: IntentStop::Completed }
    }

    pub fn wait(&mut self) -> IntentResult {
        self.state.log.push(LogEvent::Waited);
        Self::single_tick(self.consume_turn(1))
    }

    pub fn use_potion(&mut self) -> IntentResult {
        if self.state.player.potions == 0 {
            self.state.log.push(LogEvent::NoPotions);
            return IntentResult::rejected();
        }

        self.state.player.potions -= 1;
        let healed = roll(&mut self.rng, POTION_MIN_HEAL, POTION_MAX_HEAL);
        let player = &mut self.state.player;
        player.hp = (player.hp + healed).min(player.max_hp);
        self.state.log.push(LogEvent::PotionDrunk { healed });
        Self::single_tick(self.consume_turn(1))
    }

    fn single_tick(outcome: TickOutcome) -> IntentResult {
        let stop = match outcome {
            TickOutcome::Survived => IntentStop::Completed,
            TickOutcome::Died => IntentStop::RunReset,
        };
        IntentResult { ticks: 1, stop }
    }

    fn pick_up_items(&mut self) {
        while let Some(item_id) = self.state.item_at(self.state.player.pos) {
            let Some(item) = self.state.items.remove(item_id) else {
                break;
            };
            match item.kind {
                ItemKind::Potion => {
                    self.state.player.potions = self.state.player.potions.saturating_add(1);
                    self.state.log.push(LogEvent::PotionPickedUp);
                }
            }
        }
    }
}
