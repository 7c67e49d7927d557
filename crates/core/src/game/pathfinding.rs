//! Shortest-path search for player movement.
//! This module exists so navigation rules are reusable across intents and host tools.
//! It does not own movement execution or turn accounting.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use super::*;

/// Expansion order is part of the contract: it decides which of several equal-length
/// routes is returned.
const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

fn neighbors(pos: Pos) -> impl Iterator<Item = Pos> {
    NEIGHBOR_OFFSETS.into_iter().map(move |(dy, dx)| Pos { y: pos.y + dy, x: pos.x + dx })
}

/// Breadth-first route from `from` to `to` over walkable tiles, four-directional.
///
/// The result excludes `from` and ends at `to`. Enemies block every cell except the
/// destination, so a route can end on an enemy for an attack. Returns an empty route when
/// `from == to` or nothing connects them.
pub fn find_path(state: &RunState, from: Pos, to: Pos) -> Vec<Pos> {
    if from == to || !state.map.in_bounds(to) {
        return Vec::new();
    }

    let enemy_cells: BTreeSet<Pos> = state.enemies.values().map(|enemy| enemy.pos).collect();
    let mut came_from: BTreeMap<Pos, Pos> = BTreeMap::new();
    let mut visited = BTreeSet::from([from]);
    let mut queue = VecDeque::from([from]);

    while let Some(current) = queue.pop_front() {
        if current == to {
            break;
        }
        for next in neighbors(current) {
            if !state.map.in_bounds(next) || visited.contains(&next) {
                continue;
            }
            if !state.map.tile_at(next).walkable() {
                continue;
            }
            if next != to && enemy_cells.contains(&next) {
                continue;
            }
            visited.insert(next);
            came_from.insert(next, current);
            queue.push_back(next);
        }
    }

    if !came_from.contains_key(&to) {
        return Vec::new();
    }

    let mut path = vec![to];
    let mut cursor = to;
    while let Some(&previous) = came_from.get(&cursor) {
        if previous == from {
            break;
        }
        path.push(previous);
        cursor = previous;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::{open_state_fixture, walled_goal_fixture};
    use crate::state::Enemy;

    #[test]
    fn open_grid_walks_straight_along_x() {
        let state = open_state_fixture(6, 6);
        let path = find_path(&state, Pos { y: 0, x: 0 }, Pos { y: 0, x: 3 });
        assert_eq!(path, vec![Pos { y: 0, x: 1 }, Pos { y: 0, x: 2 }, Pos { y: 0, x: 3 }]);
    }

    #[test]
    fn same_cell_yields_empty_path() {
        let state = open_state_fixture(4, 4);
        assert!(find_path(&state, Pos { y: 1, x: 1 }, Pos { y: 1, x: 1 }).is_empty());
    }

    #[test]
    fn walled_in_destination_is_unreachable() {
        let (state, from, goal) = walled_goal_fixture();
        assert!(find_path(&state, from, goal).is_empty());
    }

    #[test]
    fn out_of_bounds_destination_is_unreachable() {
        let state = open_state_fixture(4, 4);
        assert!(find_path(&state, Pos { y: 0, x: 0 }, Pos { y: 0, x: 9 }).is_empty());
    }

    #[test]
    fn enemies_block_intermediate_cells_but_not_the_destination() {
        let mut state = open_state_fixture(5, 1);
        let pos = Pos { y: 0, x: 2 };
        state.enemies.insert(Enemy { kind: EnemyKind::Rat, pos, hp: 18, atk: 6 });

        assert!(find_path(&state, Pos { y: 0, x: 0 }, Pos { y: 0, x: 4 }).is_empty());
        assert_eq!(
            find_path(&state, Pos { y: 0, x: 0 }, Pos { y: 0, x: 2 }),
            vec![Pos { y: 0, x: 1 }, Pos { y: 0, x: 2 }]
        );
    }

    #[test]
    fn ties_prefer_horizontal_expansion_first() {
        let state = open_state_fixture(4, 4);
        let path = find_path(&state, Pos { y: 0, x: 0 }, Pos { y: 1, x: 1 });
        assert_eq!(path, vec![Pos { y: 0, x: 1 }, Pos { y: 1, x: 1 }]);
    }

    #[test]
    fn manhattan_counts_both_axes() {
        assert_eq!(manhattan(Pos { y: 1, x: 1 }, Pos { y: 4, x: -2 }), 6);
    }
}
