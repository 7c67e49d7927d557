//! Water pool placement inside rooms.

use rand_chacha::ChaCha8Rng;

use crate::rng::{coin, roll_usize};
use crate::types::TileKind;

use super::super::model::RoomRect;

/// Each room gets a pool on a fair coin. Pools only flood plain floor, so corridors that were
/// already carved through a room stay intact and walls are never touched.
pub(super) fn carve_water_pools(
    tiles: &mut [TileKind],
    width: usize,
    rng: &mut ChaCha8Rng,
    rooms: &[RoomRect],
) {
    for room in rooms {
        if !coin(rng) {
            continue;
        }
        let pool_width = (room.width / 2).max(2);
        let pool_height = (room.height / 2).max(2);
        let start_x = roll_usize(
            rng,
            room.x + 1,
            (room.x + 1).max((room.x + room.width).saturating_sub(pool_width + 1)),
        );
        let start_y = roll_usize(
            rng,
            room.y + 1,
            (room.y + 1).max((room.y + room.height).saturating_sub(pool_height + 1)),
        );

        for y in start_y..start_y + pool_height {
            for x in start_x..start_x + pool_width {
                if let Some(tile) = tiles.get_mut(y * width + x)
                    && *tile == TileKind::Floor
                {
                    *tile = TileKind::Water;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::new_rng;

    #[test]
    fn pools_only_replace_floor_inside_room_bounds() {
        let width = 12;
        let room = RoomRect { x: 2, y: 2, width: 6, height: 6 };
        let mut tiles = vec![TileKind::Wall; width * 12];
        for y in room.y..=room.bottom() {
            for x in room.x..=room.right() {
                tiles[y * width + x] = TileKind::Floor;
            }
        }

        let mut flooded = false;
        for seed in 0..16 {
            let mut attempt = tiles.clone();
            carve_water_pools(&mut attempt, width, &mut new_rng(seed), &[room]);
            for (index, tile) in attempt.iter().enumerate() {
                if *tile == TileKind::Water {
                    flooded = true;
                    assert_eq!(tiles[index], TileKind::Floor, "water replaced a wall at {index}");
                }
            }
        }
        assert!(flooded, "sixteen seeds should produce at least one pool");
    }
}
