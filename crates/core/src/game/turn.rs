//! World tick resolution: hunger, enemy actions, starvation, and the death check.
//! This module exists so every paid turn runs the same ordered rules.
//! It does not own intent parsing or floor generation.

use tracing::debug;

use super::*;
use crate::content::{ENEMY_MIN_DAMAGE, STARVATION_DAMAGE};
use crate::rng::roll;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum TickOutcome {
    Survived,
    /// The run was reset inside the tick; callers must abandon the rest of their intent.
    Died,
}

impl Game {
    /// Pays one world tick costing `hunger_cost` hunger.
    pub(super) fn consume_turn(&mut self, hunger_cost: i32) -> TickOutcome {
        self.turn += 1;
        self.state.player.hunger = self.state.player.hunger.saturating_sub(hunger_cost);

        let radius = self.rules().view_radius;
        let enemy_ids: Vec<EnemyId> = self.state.enemies.keys().collect();
        for enemy_id in enemy_ids {
            let player_pos = self.state.player.pos;
            let enemy = &self.state.enemies[enemy_id];
            let (enemy_pos, kind, attack) = (enemy.pos, enemy.kind, enemy.atk);

            // Adjacent enemies attack and stay put; others close in only when they see the player.
            if manhattan(enemy_pos, player_pos) <= 1 {
                let damage = roll(&mut self.rng, ENEMY_MIN_DAMAGE, attack);
                self.state.player.hp = self.state.player.hp.saturating_sub(damage);
                self.state.log.push(LogEvent::PlayerHit { kind, damage });
                continue;
            }

            if can_see_within(enemy_pos, player_pos, radius) {
                let next = Pos {
                    y: enemy_pos.y + (player_pos.y - enemy_pos.y).signum(),
                    x: enemy_pos.x + (player_pos.x - enemy_pos.x).signum(),
                };
                if next == player_pos || self.state.is_walkable(next) {
                    self.state.enemies[enemy_id].pos = next;
                }
            }
        }

        if self.state.player.hunger <= 0 {
            self.state.player.hp = self.state.player.hp.saturating_sub(STARVATION_DAMAGE);
            self.state.log.push(LogEvent::Starving);
        }

        if self.state.player.hp <= 0 {
            debug!(turn = self.turn, floor = self.state.floor, "player died");
            self.reset_after_death();
            return TickOutcome::Died;
        }

        TickOutcome::Survived
    }
}
