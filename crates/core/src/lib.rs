pub mod config;
pub mod content;
pub mod error;
pub mod game;
pub mod journal;
pub mod mapgen;
pub mod replay;
pub mod rng;
pub mod save_slot;
pub mod state;
pub mod types;

pub use config::Rules;
pub use error::{ConfigError, PersistError};
pub use game::{
    CellView, DEFAULT_SLOT, EnemyView, Game, ItemView, LoadOutcome, Snapshot, can_see,
    can_see_within, find_path, manhattan,
};
pub use journal::{InputJournal, InputRecord};
pub use replay::*;
pub use save_slot::{FileSlotStore, MemorySlotStore, SlotStore};
pub use state::{Enemy, Item, Map, MessageLog, Player, RunState};
pub use types::*;
