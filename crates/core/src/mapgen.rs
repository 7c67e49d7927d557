//! Procedural floor generation split into coherent submodules.

pub mod model;

mod generator;
mod layout;
mod spawns;

use rand_chacha::ChaCha8Rng;

use crate::config::Rules;

pub use generator::MapGenerator;
pub use model::{EnemySpawn, GeneratedFloor, ItemSpawn, RoomRect};

pub fn generate_floor(rules: &Rules, rng: &mut ChaCha8Rng, floor: u32) -> GeneratedFloor {
    MapGenerator::new(rules.clone()).generate(rng, floor)
}
