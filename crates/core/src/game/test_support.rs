//! Shared test fixtures for the `game` submodule test suites.
//! This module exists to avoid repeating map and actor setup across many tests.
//! It does not own production gameplay logic.

use super::*;
use crate::content::get_enemy_stats;
use crate::state::{Enemy, Item};

pub(super) fn open_room_fixture() -> (Map, Pos) {
    let map = Map::new(10, 10);
    let origin = Pos { y: 5, x: 5 };
    (map, origin)
}

/// Borderless all-floor state, useful for exact path assertions from the corner.
pub(super) fn open_state_fixture(width: usize, height: usize) -> RunState {
    RunState::new(Map::filled(width, height, TileKind::Floor), Player::fresh(&Rules::default()))
}

/// A goal cell boxed in by walls on every side.
pub(super) fn walled_goal_fixture() -> (RunState, Pos, Pos) {
    let mut state = open_state_fixture(9, 9);
    let goal = Pos { y: 4, x: 6 };
    for (dy, dx) in [(0, 1), (0, -1), (1, 0), (-1, 0)] {
        state.map.set_tile(Pos { y: goal.y + dy, x: goal.x + dx }, TileKind::Wall);
    }
    (state, Pos { y: 1, x: 1 }, goal)
}

/// A 20x20 walled arena with the player centered, no enemies, and no items.
pub(super) fn arena_game() -> Game {
    let mut game = Game::new(4_242);
    let mut player = Player::fresh(game.rules());
    player.pos = Pos { y: 10, x: 10 };
    game.state = RunState::new(Map::new(20, 20), player);
    game.reveal_from_player();
    game
}

pub(super) fn place_enemy(game: &mut Game, kind: EnemyKind, pos: Pos) -> EnemyId {
    let stats = get_enemy_stats(kind);
    game.state.enemies.insert(Enemy { kind, pos, hp: stats.hp, atk: stats.attack })
}

pub(super) fn place_potion(game: &mut Game, pos: Pos) -> ItemId {
    game.state.items.insert(Item { kind: ItemKind::Potion, pos })
}
