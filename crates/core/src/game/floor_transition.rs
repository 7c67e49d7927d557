//! Run start, floor descent, and death reset.
//! This module exists to isolate floor state installation and player carry-over rules.
//! It does not own turn resolution or intent handling.

use tracing::info;

use super::*;
use crate::content::get_enemy_stats;
use crate::state::{Enemy, Item};

impl Game {
    pub(super) fn start_run(&mut self) {
        self.state.floor = 1;
        self.state.player = Player::fresh(self.rules());
        self.state.log.clear();
        self.enter_floor();
    }

    /// Carries the player down one floor with a hunger and hp top-up.
    pub(super) fn advance_floor(&mut self) {
        let rules = self.rules();
        let (hunger_cap, hunger_bonus, heal) =
            (rules.hunger_cap, rules.descent_hunger_bonus, rules.descent_heal);

        self.state.floor += 1;
        let player = &mut self.state.player;
        player.hunger = (player.hunger + hunger_bonus).min(hunger_cap);
        player.hp = (player.hp + heal).min(player.max_hp);
        info!(floor = self.state.floor, hp = player.hp, hunger = player.hunger, "descended");

        self.enter_floor();
    }

    /// Starts a fresh run. The death notice is logged after the reset so it survives the
    /// cleared log.
    pub(super) fn reset_after_death(&mut self) {
        info!(floor = self.state.floor, turn = self.turn, "run reset after death");
        self.start_run();
        self.state.log.push(LogEvent::Died);
    }

    fn enter_floor(&mut self) {
        let generated = self.generator.generate(&mut self.rng, self.state.floor);

        self.state.map = Map::from_tiles(generated.width, generated.height, generated.tiles);
        self.state.player.pos = generated.entry_tile;

        self.state.enemies.clear();
        for spawn in generated.enemy_spawns {
            let stats = get_enemy_stats(spawn.kind);
            self.state.enemies.insert(Enemy {
                kind: spawn.kind,
                pos: spawn.pos,
                hp: stats.hp,
                atk: stats.attack,
            });
        }

        self.state.items.clear();
        for spawn in generated.item_spawns {
            self.state.items.insert(Item { kind: spawn.kind, pos: spawn.pos });
        }

        self.reveal_from_player();
        self.state.log.push(LogEvent::EnteredFloor { floor: self.state.floor });
    }
}
