use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("save data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("save data is inconsistent: {0}")]
    InvalidState(String),
    #[error("save slot checksum mismatch")]
    Checksum,
    #[error("save slot I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least two rooms are required, got {0}")]
    TooFewRooms(usize),
    #[error("room size range {min}..={max} is invalid (minimum 3)")]
    RoomSizeRange { min: usize, max: usize },
    #[error("rooms up to {room_max_size} tiles do not fit a {map_width}x{map_height} map")]
    RoomDoesNotFit { room_max_size: usize, map_width: usize, map_height: usize },
    #[error("view radius must be positive, got {0}")]
    NonPositiveViewRadius(i32),
    #[error("player max hp must be positive, got {0}")]
    NonPositiveMaxHp(i32),
}
