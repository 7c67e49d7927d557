//! Room placement and corridor carving for the base floor topology.

use rand_chacha::ChaCha8Rng;

use crate::config::Rules;
use crate::rng::roll_usize;
use crate::types::{Pos, TileKind};

use super::model::RoomRect;

/// Draws `room_count` rooms in order. Rooms may overlap; every origin keeps a wall margin
/// against the right and bottom edges.
pub(super) fn place_rooms(rng: &mut ChaCha8Rng, rules: &Rules) -> Vec<RoomRect> {
    let mut rooms = Vec::with_capacity(rules.room_count);
    for _ in 0..rules.room_count {
        let width = roll_usize(rng, rules.room_min_size, rules.room_max_size);
        let height = roll_usize(rng, rules.room_min_size, rules.room_max_size);
        let x = roll_usize(rng, 1, rules.map_width - width - 2);
        let y = roll_usize(rng, 1, rules.map_height - height - 2);
        rooms.push(RoomRect { x, y, width, height });
    }
    rooms
}

pub(super) fn carve_room(tiles: &mut [TileKind], width: usize, room: &RoomRect) {
    for y in room.y..=room.bottom() {
        for x in room.x..=room.right() {
            tiles[y * width + x] = TileKind::Floor;
        }
    }
}

/// Chains each room to its predecessor with an L-shaped corridor.
pub(super) fn carve_room_corridors(tiles: &mut [TileKind], width: usize, rooms: &[RoomRect]) {
    for pair in rooms.windows(2) {
        carve_l_shaped_corridor(tiles, width, pair[0].center(), pair[1].center());
    }
}

/// Horizontal leg along the start row, then vertical leg along the end column.
fn carve_l_shaped_corridor(tiles: &mut [TileKind], width: usize, start: Pos, end: Pos) {
    carve_horizontal_line(tiles, width, start.y, start.x, end.x);
    carve_vertical_line(tiles, width, end.x, start.y, end.y);
}

fn carve_horizontal_line(tiles: &mut [TileKind], width: usize, y: i32, left_x: i32, right_x: i32) {
    let from_x = left_x.min(right_x);
    let to_x = left_x.max(right_x);
    for x in from_x..=to_x {
        carve_floor(tiles, width, Pos { y, x });
    }
}

fn carve_vertical_line(tiles: &mut [TileKind], width: usize, x: i32, top_y: i32, bottom_y: i32) {
    let from_y = top_y.min(bottom_y);
    let to_y = top_y.max(bottom_y);
    for y in from_y..=to_y {
        carve_floor(tiles, width, Pos { y, x });
    }
}

fn carve_floor(tiles: &mut [TileKind], width: usize, pos: Pos) {
    if pos.x <= 0 || pos.y <= 0 {
        return;
    }
    let column = pos.x as usize;
    if column >= width - 1 {
        return;
    }
    let index = (pos.y as usize) * width + column;
    if let Some(tile) = tiles.get_mut(index) {
        *tile = TileKind::Floor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::new_rng;

    #[test]
    fn rooms_stay_inside_the_wall_border() {
        let rules = Rules::default();
        let mut rng = new_rng(42);
        let rooms = place_rooms(&mut rng, &rules);

        assert_eq!(rooms.len(), rules.room_count);
        for room in rooms {
            assert!((rules.room_min_size..=rules.room_max_size).contains(&room.width));
            assert!((rules.room_min_size..=rules.room_max_size).contains(&room.height));
            assert!(room.x >= 1 && room.y >= 1);
            assert!(room.right() <= rules.map_width - 3, "room {room:?} touches the right edge");
            assert!(room.bottom() <= rules.map_height - 3, "room {room:?} touches the bottom edge");
        }
    }

    #[test]
    fn corridor_runs_horizontally_then_vertically() {
        let width = 10;
        let mut tiles = vec![TileKind::Wall; width * 10];
        let rooms = [
            RoomRect { x: 1, y: 1, width: 2, height: 2 },
            RoomRect { x: 5, y: 5, width: 2, height: 2 },
        ];
        carve_room_corridors(&mut tiles, width, &rooms);

        let floor_at = |y: usize, x: usize| tiles[y * width + x] == TileKind::Floor;
        // Centers are (2,2) and (6,6): the elbow sits at row 2, column 6.
        for x in 2..=6 {
            assert!(floor_at(2, x), "horizontal leg missing at x={x}");
        }
        for y in 2..=6 {
            assert!(floor_at(y, 6), "vertical leg missing at y={y}");
        }
        assert!(!floor_at(6, 2), "vertical leg must use the destination column");
    }
}
