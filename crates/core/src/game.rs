//! The run controller. `Game` owns the run state, the seeded RNG, and the floor generator;
//! every mutation goes through its methods.

use rand_chacha::ChaCha8Rng;

use crate::config::Rules;
use crate::error::ConfigError;
use crate::mapgen::MapGenerator;
use crate::rng::new_rng;
use crate::state::{Map, MessageLog, Player, RunState};
use crate::types::*;

mod floor_transition;
mod hash;
mod intents;
mod pathfinding;
mod persistence;
mod snapshot;
mod turn;
mod visibility;

#[cfg(test)]
mod test_support;

pub use pathfinding::{find_path, manhattan};
pub use persistence::{DEFAULT_SLOT, LoadOutcome};
pub use snapshot::{CellView, EnemyView, ItemView, Snapshot};
pub use visibility::{can_see, can_see_within};

pub struct Game {
    seed: u64,
    /// World ticks paid since the game was created; survives run resets.
    turn: u64,
    rng: ChaCha8Rng,
    generator: MapGenerator,
    state: RunState,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Rules::default())
    }

    pub fn with_rules(seed: u64, rules: Rules) -> Result<Self, ConfigError> {
        rules.validate()?;
        Ok(Self::build(seed, rules))
    }

    fn build(seed: u64, rules: Rules) -> Self {
        let placeholder = RunState::new(
            Map::filled(rules.map_width, rules.map_height, TileKind::Wall),
            Player::fresh(&rules),
        );
        let mut game = Self {
            seed,
            turn: 0,
            rng: new_rng(seed),
            generator: MapGenerator::new(rules),
            state: placeholder,
        };
        game.start_run();
        game
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_turn(&self) -> u64 {
        self.turn
    }

    pub fn rules(&self) -> &Rules {
        self.generator.rules()
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn log(&self) -> &MessageLog {
        &self.state.log
    }

    /// Dispatches a journaled intent to the matching operation.
    pub fn apply_intent(&mut self, intent: Intent) -> IntentResult {
        match intent {
            Intent::MoveTo(target) => self.move_to(target),
            Intent::Wait => self.wait(),
            Intent::UsePotion => self.use_potion(),
        }
    }
}
