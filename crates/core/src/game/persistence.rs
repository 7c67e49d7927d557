//! Run state serialization and named-slot save/load.
//! This module exists to keep the blob format and its validation in one place.
//! It does not own where blobs are stored; that is the `SlotStore` implementation's job.

use tracing::{info, warn};

use super::*;
use crate::error::PersistError;
use crate::save_slot::SlotStore;

/// Slot used by the save and load buttons.
pub const DEFAULT_SLOT: &str = "abyss-save";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    NoSaveData,
    /// The slot held something that could not be restored; state is unchanged.
    Corrupt,
}

impl Game {
    /// The full run state as JSON.
    ///
    /// The RNG stream and turn counter are not included, so a loaded run continues on the
    /// live RNG and turn count of the `Game` it is loaded into. Its `snapshot_hash` will not
    /// match the hash the saving game would have reached.
    pub fn serialize(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string(&self.state)?)
    }

    /// Parses and validates `blob` completely before replacing the current state.
    pub fn deserialize(&mut self, blob: &str) -> Result<(), PersistError> {
        let state: RunState = serde_json::from_str(blob)?;
        state.validate().map_err(PersistError::InvalidState)?;
        self.state = state;
        Ok(())
    }

    pub fn save(&mut self, store: &mut dyn SlotStore) -> Result<(), PersistError> {
        let written = self.serialize().and_then(|blob| store.write(DEFAULT_SLOT, &blob));
        match written {
            Ok(()) => {
                info!(slot = DEFAULT_SLOT, floor = self.state.floor, "saved run");
                self.state.log.push(LogEvent::Saved);
                Ok(())
            }
            Err(error) => {
                warn!(slot = DEFAULT_SLOT, %error, "save failed");
                self.state.log.push(LogEvent::SaveFailed);
                Err(error)
            }
        }
    }

    pub fn load(&mut self, store: &dyn SlotStore) -> LoadOutcome {
        let blob = match store.read(DEFAULT_SLOT) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                self.state.log.push(LogEvent::NoSaveData);
                return LoadOutcome::NoSaveData;
            }
            Err(error) => {
                warn!(slot = DEFAULT_SLOT, %error, "save slot unreadable");
                self.state.log.push(LogEvent::SaveCorrupt);
                return LoadOutcome::Corrupt;
            }
        };

        if let Err(error) = self.deserialize(&blob) {
            warn!(slot = DEFAULT_SLOT, %error, "save data rejected");
            self.state.log.push(LogEvent::SaveCorrupt);
            return LoadOutcome::Corrupt;
        }

        info!(slot = DEFAULT_SLOT, floor = self.state.floor, "loaded run");
        self.state.log.push(LogEvent::Loaded);
        LoadOutcome::Loaded
    }
}
