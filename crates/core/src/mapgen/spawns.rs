//! Enemy and potion scatter over the non-entry rooms.

use rand_chacha::ChaCha8Rng;

use crate::content::get_enemy_stats;
use crate::rng::{coin, roll_usize};
use crate::types::{EnemyKind, ItemKind, Pos};

use super::model::{EnemySpawn, ItemSpawn, RoomRect};

pub(super) struct SpawnContext<'a> {
    pub(super) rooms: &'a [RoomRect],
    pub(super) entry_tile: Pos,
}

/// One rejection-sampled attempt per count; collisions are dropped, never retried.
pub(super) fn generate_enemy_spawns(
    context: &SpawnContext<'_>,
    rng: &mut ChaCha8Rng,
    attempts: u32,
) -> Vec<EnemySpawn> {
    let mut enemy_spawns: Vec<EnemySpawn> = Vec::with_capacity(attempts as usize);
    for _ in 0..attempts {
        let Some(pos) = sample_room_cell(context.rooms, rng) else {
            break;
        };
        if pos == context.entry_tile || enemy_spawns.iter().any(|spawn| spawn.pos == pos) {
            continue;
        }
        let kind = if coin(rng) { EnemyKind::Slime } else { EnemyKind::Rat };
        enemy_spawns.push(EnemySpawn { kind, pos });
    }
    enemy_spawns
}

pub(super) fn generate_item_spawns(
    context: &SpawnContext<'_>,
    rng: &mut ChaCha8Rng,
    attempts: u32,
    enemy_spawns: &[EnemySpawn],
) -> Vec<ItemSpawn> {
    let mut item_spawns: Vec<ItemSpawn> = Vec::with_capacity(attempts as usize);
    for _ in 0..attempts {
        let Some(pos) = sample_room_cell(context.rooms, rng) else {
            break;
        };
        let occupied = enemy_spawns.iter().any(|spawn| spawn.pos == pos)
            || item_spawns.iter().any(|spawn| spawn.pos == pos);
        if occupied {
            continue;
        }
        item_spawns.push(ItemSpawn { kind: ItemKind::Potion, pos });
    }
    item_spawns
}

/// Uniform room from everything after the entry room, then a uniform cell inside it.
fn sample_room_cell(rooms: &[RoomRect], rng: &mut ChaCha8Rng) -> Option<Pos> {
    if rooms.len() < 2 {
        return None;
    }
    let room = rooms[roll_usize(rng, 1, rooms.len() - 1)];
    let x = roll_usize(rng, room.x, room.right());
    let y = roll_usize(rng, room.y, room.bottom());
    Some(Pos { y: y as i32, x: x as i32 })
}

pub(super) fn spawn_hp_total(spawns: &[EnemySpawn]) -> i32 {
    spawns.iter().map(|spawn| get_enemy_stats(spawn.kind).hp).sum()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::rng::new_rng;

    fn rooms() -> Vec<RoomRect> {
        vec![
            RoomRect { x: 1, y: 1, width: 4, height: 4 },
            RoomRect { x: 10, y: 10, width: 3, height: 3 },
        ]
    }

    #[test]
    fn spawns_never_land_in_the_entry_room_or_collide() {
        let rooms = rooms();
        let context = SpawnContext { rooms: &rooms, entry_tile: rooms[0].center() };
        let mut rng = new_rng(5);

        let enemies = generate_enemy_spawns(&context, &mut rng, 20);
        let items = generate_item_spawns(&context, &mut rng, 3, &enemies);

        assert!(enemies.len() <= 9, "a 3x3 room holds at most nine enemies");
        let mut cells = BTreeSet::new();
        for pos in enemies.iter().map(|s| s.pos).chain(items.iter().map(|s| s.pos)) {
            assert!(rooms[1].contains(pos), "spawn {pos:?} left the second room");
            assert!(cells.insert(pos), "duplicate spawn at {pos:?}");
        }
    }

    #[test]
    fn spawn_hp_total_sums_kind_stats() {
        let spawns = [
            EnemySpawn { kind: EnemyKind::Rat, pos: Pos { y: 1, x: 1 } },
            EnemySpawn { kind: EnemyKind::Slime, pos: Pos { y: 1, x: 2 } },
        ];
        assert_eq!(spawn_hp_total(&spawns), 40);
    }
}
