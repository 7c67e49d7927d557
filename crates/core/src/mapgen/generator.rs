//! Floor generation orchestration that composes layout, water pools, and spawns.

mod hazards;

use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::config::Rules;
use crate::types::TileKind;

use super::layout::{carve_room, carve_room_corridors, place_rooms};
use super::model::GeneratedFloor;
use super::spawns::{SpawnContext, generate_enemy_spawns, generate_item_spawns, spawn_hp_total};
use hazards::carve_water_pools;

pub struct MapGenerator {
    rules: Rules,
}

impl MapGenerator {
    /// `rules` must already have passed `Rules::validate`.
    pub fn new(rules: Rules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Draws the whole floor from `rng`. The draw order is fixed: rooms, water pools,
    /// enemies, then potions.
    pub fn generate(&self, rng: &mut ChaCha8Rng, floor: u32) -> GeneratedFloor {
        let width = self.rules.map_width;
        let height = self.rules.map_height;
        let mut tiles = vec![TileKind::Wall; width * height];

        let rooms = place_rooms(rng, &self.rules);
        for room in &rooms {
            carve_room(&mut tiles, width, room);
        }
        carve_room_corridors(&mut tiles, width, &rooms);
        carve_water_pools(&mut tiles, width, rng, &rooms);

        let entry_tile = rooms[0].center();
        let stairs_tile = rooms[rooms.len() - 1].center();
        tiles[(stairs_tile.y as usize) * width + (stairs_tile.x as usize)] = TileKind::Stair;

        let spawn_context = SpawnContext { rooms: &rooms, entry_tile };
        let enemy_attempts = self.rules.base_enemy_count + floor;
        let enemy_spawns = generate_enemy_spawns(&spawn_context, rng, enemy_attempts);
        let item_spawns =
            generate_item_spawns(&spawn_context, rng, self.rules.potions_per_floor, &enemy_spawns);

        debug!(
            floor,
            rooms = rooms.len(),
            enemies = enemy_spawns.len(),
            enemy_hp = spawn_hp_total(&enemy_spawns),
            potions = item_spawns.len(),
            "generated floor"
        );

        GeneratedFloor {
            width,
            height,
            tiles,
            rooms,
            entry_tile,
            stairs_tile,
            enemy_spawns,
            item_spawns,
        }
    }
}
