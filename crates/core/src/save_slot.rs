//! Named save slots behind a small storage seam.
//!
//! `FileSlotStore` keeps one `<slot>.json` file per slot. Each file is an envelope holding the
//! run blob and `hex(SHA-256(blob))`, so a truncated or hand-edited file reads back as
//! [`PersistError::Checksum`] instead of a half-valid run. Writes go through a temp file and a
//! rename so a crash mid-write never leaves a torn slot behind.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::PersistError;

pub trait SlotStore {
    fn write(&mut self, slot: &str, blob: &str) -> Result<(), PersistError>;

    /// `Ok(None)` when nothing was ever written to `slot`.
    fn read(&self, slot: &str) -> Result<Option<String>, PersistError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemorySlotStore {
    slots: BTreeMap<String, String>,
}

impl SlotStore for MemorySlotStore {
    fn write(&mut self, slot: &str, blob: &str) -> Result<(), PersistError> {
        self.slots.insert(slot.to_string(), blob.to_string());
        Ok(())
    }

    fn read(&self, slot: &str) -> Result<Option<String>, PersistError> {
        Ok(self.slots.get(slot).cloned())
    }
}

#[derive(Serialize, Deserialize)]
struct SlotEnvelope {
    sha256_hex: String,
    payload: String,
}

fn payload_sha256(payload: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    let result = hasher.finalize();
    format!("{result:064x}")
}

#[derive(Clone, Debug)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }

    fn write_atomic(path: &Path, contents: &str) -> Result<(), PersistError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl SlotStore for FileSlotStore {
    fn write(&mut self, slot: &str, blob: &str) -> Result<(), PersistError> {
        let envelope =
            SlotEnvelope { sha256_hex: payload_sha256(blob), payload: blob.to_string() };
        let json = serde_json::to_string(&envelope)?;
        Self::write_atomic(&self.slot_path(slot), &json)
    }

    fn read(&self, slot: &str) -> Result<Option<String>, PersistError> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let envelope: SlotEnvelope =
            serde_json::from_str(&content).map_err(|_| PersistError::Checksum)?;
        if payload_sha256(&envelope.payload) != envelope.sha256_hex {
            return Err(PersistError::Checksum);
        }
        Ok(Some(envelope.payload))
    }
}
