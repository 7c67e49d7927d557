//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from simulation control code.
//! It does not own replay execution or save persistence.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;
use crate::mapgen::model::tile_byte;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.turn);
        hasher.write_u32(self.state.floor);

        let player = &self.state.player;
        hasher.write_i32(player.pos.x);
        hasher.write_i32(player.pos.y);
        hasher.write_i32(player.hp);
        hasher.write_i32(player.max_hp);
        hasher.write_i32(player.hunger);
        hasher.write_u32(player.potions);

        hasher.write_usize(self.state.enemies.len());
        for enemy in self.state.enemies.values() {
            hasher.write_u8(enemy.kind as u8);
            hasher.write_i32(enemy.pos.x);
            hasher.write_i32(enemy.pos.y);
            hasher.write_i32(enemy.hp);
        }

        hasher.write_usize(self.state.items.len());
        for item in self.state.items.values() {
            hasher.write_i32(item.pos.x);
            hasher.write_i32(item.pos.y);
        }

        let tiles: Vec<u8> = self.state.map.tiles.iter().map(|&tile| tile_byte(tile)).collect();
        hasher.write(&tiles);
        let seen: Vec<u8> = self.state.map.seen.iter().map(|&seen| u8::from(seen)).collect();
        hasher.write(&seen);
        hasher.finish()
    }
}
