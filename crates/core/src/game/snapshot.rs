//! Read-only views for renderers and host tools.
//! This module exists so readers never hold references into live simulation state.
//! It does not own any mutation.

use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView {
    pub tile: TileKind,
    pub seen: bool,
    /// In the player's current view radius.
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemyView {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub pos: Pos,
    pub hp: i32,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemView {
    pub id: ItemId,
    pub kind: ItemKind,
    pub pos: Pos,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major, `width * height` cells.
    pub cells: Vec<CellView>,
    pub player: Player,
    pub floor: u32,
    pub turn: u64,
    pub enemies: Vec<EnemyView>,
    pub items: Vec<ItemView>,
    /// Rendered messages, newest first.
    pub log: Vec<String>,
}

impl Snapshot {
    pub fn cell(&self, pos: Pos) -> Option<&CellView> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x)
    }

    pub fn log_head(&self) -> Option<&str> {
        self.log.first().map(String::as_str)
    }
}

impl Game {
    pub fn snapshot(&self) -> Snapshot {
        let map = &self.state.map;
        let mut cells = Vec::with_capacity(map.tiles.len());
        for y in 0..map.internal_height {
            for x in 0..map.internal_width {
                let pos = Pos { y: y as i32, x: x as i32 };
                cells.push(CellView {
                    tile: map.tile_at(pos),
                    seen: map.is_seen(pos),
                    visible: self.is_visible(pos),
                });
            }
        }

        let enemies = self
            .state
            .enemies
            .iter()
            .map(|(id, enemy)| EnemyView {
                id,
                kind: enemy.kind,
                pos: enemy.pos,
                hp: enemy.hp,
                visible: self.is_visible(enemy.pos),
            })
            .collect();
        let items = self
            .state
            .items
            .iter()
            .map(|(id, item)| ItemView {
                id,
                kind: item.kind,
                pos: item.pos,
                visible: self.is_visible(item.pos),
            })
            .collect();

        Snapshot {
            width: map.internal_width,
            height: map.internal_height,
            cells,
            player: self.state.player.clone(),
            floor: self.state.floor,
            turn: self.turn,
            enemies,
            items,
            log: self.state.log.iter().map(ToString::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::{arena_game, place_enemy};

    #[test]
    fn repeated_snapshots_are_identical_and_do_not_mutate() {
        let game = Game::new(8_080);
        let hash = game.snapshot_hash();

        let first = game.snapshot();
        let second = game.snapshot();

        assert_eq!(first, second);
        assert_eq!(game.snapshot_hash(), hash);
    }

    #[test]
    fn entities_carry_visibility_flags() {
        let mut game = arena_game();
        let player = game.state.player.pos;
        place_enemy(&mut game, EnemyKind::Rat, Pos { y: player.y, x: player.x + 3 });
        place_enemy(&mut game, EnemyKind::Slime, Pos { y: player.y + 8, x: player.x });

        let snapshot = game.snapshot();
        let flags: Vec<(EnemyKind, bool)> =
            snapshot.enemies.iter().map(|enemy| (enemy.kind, enemy.visible)).collect();

        assert_eq!(flags, vec![(EnemyKind::Rat, true), (EnemyKind::Slime, false)]);
        assert!(snapshot.cell(player).is_some_and(|cell| cell.visible && cell.seen));
        assert!(snapshot.cell(Pos { y: -1, x: 0 }).is_none());
    }

    #[test]
    fn log_head_is_the_newest_message() {
        let mut game = arena_game();
        game.wait();
        assert_eq!(game.snapshot().log_head(), Some("Waiting."));
    }
}
