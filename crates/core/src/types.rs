use std::fmt;

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EnemyId;
    pub struct ItemId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

/// Static per-kind terrain rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileDef {
    pub walkable: bool,
    /// Extra hunger paid when stepping onto the tile, on top of the base turn cost.
    pub hunger_cost: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Wall,
    Floor,
    Water,
    Stair,
}

impl TileKind {
    pub const fn def(self) -> TileDef {
        match self {
            Self::Wall => TileDef { walkable: false, hunger_cost: 0 },
            Self::Floor => TileDef { walkable: true, hunger_cost: 0 },
            Self::Water => TileDef { walkable: true, hunger_cost: 2 },
            Self::Stair => TileDef { walkable: true, hunger_cost: 0 },
        }
    }

    pub const fn walkable(self) -> bool {
        self.def().walkable
    }

    pub const fn hunger_cost(self) -> i32 {
        self.def().hunger_cost
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Rat,
    Slime,
}

impl EnemyKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Slime => "Slime",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Potion,
}

/// One player action, as issued by the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    MoveTo(Pos),
    Wait,
    UsePotion,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentStop {
    /// Nothing happened and no turn was paid.
    Rejected,
    Completed,
    /// Auto-move stopped early because an enemy came into view.
    EnemySpotted,
    Descended,
    /// The player died during a world tick and a fresh run was started.
    RunReset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntentResult {
    pub ticks: u32,
    pub stop: IntentStop,
}

impl IntentResult {
    pub(crate) fn rejected() -> Self {
        Self { ticks: 0, stop: IntentStop::Rejected }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogEvent {
    EnteredFloor { floor: u32 },
    CannotMove,
    NoRoute,
    EnemySpotted,
    AttackLanded { damage: i32 },
    EnemySlain { kind: EnemyKind },
    PlayerHit { kind: EnemyKind, damage: i32 },
    Starving,
    Died,
    Waited,
    NoPotions,
    PotionDrunk { healed: i32 },
    PotionPickedUp,
    Saved,
    SaveFailed,
    NoSaveData,
    SaveCorrupt,
    Loaded,
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnteredFloor { floor } => write!(f, "Descended to floor {floor}."),
            Self::CannotMove => f.write_str("Cannot move there."),
            Self::NoRoute => f.write_str("No route to the target."),
            Self::EnemySpotted => f.write_str("Enemy spotted! Auto-move halted."),
            Self::AttackLanded { damage } => write!(f, "Hit for {damage} damage."),
            Self::EnemySlain { kind } => write!(f, "{} slain.", kind.name()),
            Self::PlayerHit { kind, damage } => {
                write!(f, "{} hits you for {damage} damage.", kind.name())
            }
            Self::Starving => f.write_str("Starvation damage."),
            Self::Died => f.write_str("You died. A new run begins."),
            Self::Waited => f.write_str("Waiting."),
            Self::NoPotions => f.write_str("No potions."),
            Self::PotionDrunk { healed } => write!(f, "Drank a potion (+{healed})."),
            Self::PotionPickedUp => f.write_str("Picked up a potion."),
            Self::Saved => f.write_str("Game saved."),
            Self::SaveFailed => f.write_str("Saving failed."),
            Self::NoSaveData => f.write_str("No save data."),
            Self::SaveCorrupt => f.write_str("Save data is corrupt."),
            Self::Loaded => f.write_str("Game loaded."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_costs_extra_hunger_and_walls_block() {
        assert_eq!(TileKind::Water.hunger_cost(), 2);
        assert_eq!(TileKind::Floor.hunger_cost(), 0);
        assert_eq!(TileKind::Stair.hunger_cost(), 0);
        assert!(!TileKind::Wall.walkable());
        assert!(TileKind::Water.walkable());
        assert!(TileKind::Stair.walkable());
    }

    #[test]
    fn kill_messages_name_the_enemy_kind() {
        assert_eq!(LogEvent::EnemySlain { kind: EnemyKind::Rat }.to_string(), "Rat slain.");
        assert_eq!(LogEvent::EnemySlain { kind: EnemyKind::Slime }.to_string(), "Slime slain.");
    }
}
