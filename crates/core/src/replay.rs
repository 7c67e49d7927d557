use thiserror::Error;

use crate::{config::Rules, error::ConfigError, game::Game, journal::InputJournal};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("invalid rules: {0}")]
    InvalidRules(#[from] ConfigError),
    #[error("input seq {found} out of order, expected {expected}")]
    OutOfOrder { expected: u64, found: u64 },
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_snapshot_hash: u64,
    pub final_turn: u64,
    pub final_floor: u32,
    pub intents_applied: usize,
}

/// Feeds every journaled intent into a fresh game seeded from the journal.
pub fn replay_to_end(rules: &Rules, journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    let mut game = Game::with_rules(journal.seed, rules.clone())?;

    for (expected, record) in (0_u64..).zip(&journal.inputs) {
        if record.seq != expected {
            return Err(ReplayError::OutOfOrder { expected, found: record.seq });
        }
        game.apply_intent(record.intent);
    }

    Ok(ReplayResult {
        final_snapshot_hash: game.snapshot_hash(),
        final_turn: game.current_turn(),
        final_floor: game.state().floor,
        intents_applied: journal.inputs.len(),
    })
}
