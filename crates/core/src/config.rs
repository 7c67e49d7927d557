//! Tunable run rules. `Rules::default()` is the standard game; hosts may load overrides.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_MAP_SIZE: usize = 44;
pub const VIEW_RADIUS: i32 = 7;
pub const MAX_LOG: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub map_width: usize,
    pub map_height: usize,
    pub room_count: usize,
    pub room_min_size: usize,
    pub room_max_size: usize,
    pub view_radius: i32,
    /// Enemy placement attempts on floor `n` are `base_enemy_count + n`.
    pub base_enemy_count: u32,
    pub potions_per_floor: u32,
    pub player_max_hp: i32,
    pub starting_hunger: i32,
    pub starting_potions: u32,
    pub hunger_cap: i32,
    pub descent_hunger_bonus: i32,
    pub descent_heal: i32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            map_width: DEFAULT_MAP_SIZE,
            map_height: DEFAULT_MAP_SIZE,
            room_count: 16,
            room_min_size: 4,
            room_max_size: 8,
            view_radius: VIEW_RADIUS,
            base_enemy_count: 10,
            potions_per_floor: 3,
            player_max_hp: 100,
            starting_hunger: 140,
            starting_potions: 3,
            hunger_cap: 160,
            descent_hunger_bonus: 24,
            descent_heal: 16,
        }
    }
}

impl Rules {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_count < 2 {
            return Err(ConfigError::TooFewRooms(self.room_count));
        }
        if self.room_min_size < 3 || self.room_min_size > self.room_max_size {
            return Err(ConfigError::RoomSizeRange {
                min: self.room_min_size,
                max: self.room_max_size,
            });
        }
        // Origins are drawn from [1, extent - size - 2], so that range must be non-empty.
        let smallest_extent = self.map_width.min(self.map_height);
        if self.room_max_size + 3 > smallest_extent {
            return Err(ConfigError::RoomDoesNotFit {
                room_max_size: self.room_max_size,
                map_width: self.map_width,
                map_height: self.map_height,
            });
        }
        if self.view_radius <= 0 {
            return Err(ConfigError::NonPositiveViewRadius(self.view_radius));
        }
        if self.player_max_hp <= 0 {
            return Err(ConfigError::NonPositiveMaxHp(self.player_max_hp));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_are_valid() {
        assert_eq!(Rules::default().validate(), Ok(()));
    }

    #[test]
    fn single_room_is_rejected() {
        let rules = Rules { room_count: 1, ..Rules::default() };
        assert_eq!(rules.validate(), Err(ConfigError::TooFewRooms(1)));
    }

    #[test]
    fn rooms_larger_than_the_map_are_rejected() {
        let rules = Rules { map_width: 10, room_max_size: 8, ..Rules::default() };
        assert!(matches!(rules.validate(), Err(ConfigError::RoomDoesNotFit { .. })));
    }

    #[test]
    fn partial_overrides_keep_defaults() {
        let rules: Rules = serde_json::from_str(r#"{ "room_count": 6 }"#).expect("parse rules");
        assert_eq!(rules.room_count, 6);
        assert_eq!(rules.view_radius, VIEW_RADIUS);
        assert_eq!(rules.map_width, DEFAULT_MAP_SIZE);
    }
}
