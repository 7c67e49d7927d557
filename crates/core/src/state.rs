use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::config::{MAX_LOG, Rules};
use crate::content::ENEMY_MIN_DAMAGE;
use crate::types::*;

/// Largest map side accepted from a save blob.
pub(crate) const MAX_MAP_SIDE: usize = 1024;
/// Ceiling for hp, hunger, attack, potion and floor values accepted from a save blob.
pub(crate) const MAX_STAT: i32 = 10_000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
    /// Drops with every paid turn and may go negative; at or below zero it costs hp.
    pub hunger: i32,
    pub potions: u32,
}

impl Player {
    pub fn fresh(rules: &Rules) -> Self {
        Self {
            pos: Pos { y: 0, x: 0 },
            hp: rules.player_max_hp,
            max_hp: rules.player_max_hp,
            hunger: rules.starting_hunger,
            potions: rules.starting_potions,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Pos,
    pub hp: i32,
    pub atk: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub pos: Pos,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Map {
    pub internal_width: usize,
    pub internal_height: usize,
    pub tiles: Vec<TileKind>,
    /// Fog-of-war memory: cells the player has ever had in view on this floor.
    pub seen: Vec<bool>,
}

impl Map {
    /// Open floor ringed by a one-tile wall border.
    pub fn new(width: usize, height: usize) -> Self {
        let mut map = Self::filled(width, height, TileKind::Floor);
        for x in 0..width {
            map.tiles[x] = TileKind::Wall;
            map.tiles[(height - 1) * width + x] = TileKind::Wall;
        }
        for y in 0..height {
            map.tiles[y * width] = TileKind::Wall;
            map.tiles[y * width + (width - 1)] = TileKind::Wall;
        }
        map
    }

    pub fn filled(width: usize, height: usize, tile: TileKind) -> Self {
        Self {
            internal_width: width,
            internal_height: height,
            tiles: vec![tile; width * height],
            seen: vec![false; width * height],
        }
    }

    pub fn from_tiles(width: usize, height: usize, tiles: Vec<TileKind>) -> Self {
        debug_assert_eq!(tiles.len(), width * height);
        let seen = vec![false; width * height];
        Self { internal_width: width, internal_height: height, tiles, seen }
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.internal_width
            && (pos.y as usize) < self.internal_height
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn reveal(&mut self, pos: Pos) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.seen[idx] = true;
    }

    pub fn is_seen(&self, pos: Pos) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        self.seen[self.index(pos)]
    }

    pub fn count_tiles(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&tile| tile == kind).count()
    }

    pub(crate) fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.internal_width + (pos.x as usize)
    }
}

/// Recent player-facing messages, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLog {
    entries: VecDeque<LogEvent>,
}

impl MessageLog {
    pub fn push(&mut self, event: LogEvent) {
        self.entries.push_front(event);
        if self.entries.len() > MAX_LOG {
            self.entries.pop_back();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn head(&self) -> Option<&LogEvent> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEvent> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, event: &LogEvent) -> bool {
        self.entries.contains(event)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunState {
    pub floor: u32,
    pub map: Map,
    pub player: Player,
    pub enemies: SlotMap<EnemyId, Enemy>,
    pub items: SlotMap<ItemId, Item>,
    pub log: MessageLog,
}

impl RunState {
    pub fn new(map: Map, player: Player) -> Self {
        Self {
            floor: 1,
            map,
            player,
            enemies: SlotMap::with_key(),
            items: SlotMap::with_key(),
            log: MessageLog::default(),
        }
    }

    pub fn enemy_at(&self, pos: Pos) -> Option<EnemyId> {
        self.enemies.iter().find(|(_, enemy)| enemy.pos == pos).map(|(id, _)| id)
    }

    pub fn item_at(&self, pos: Pos) -> Option<ItemId> {
        self.items.iter().find(|(_, item)| item.pos == pos).map(|(id, _)| id)
    }

    /// In bounds, walkable terrain, and not currently holding an enemy.
    pub fn is_walkable(&self, pos: Pos) -> bool {
        self.map.in_bounds(pos) && self.map.tile_at(pos).walkable() && self.enemy_at(pos).is_none()
    }

    /// Structural checks applied to state that did not come from the generator.
    pub(crate) fn validate(&self) -> Result<(), String> {
        let (width, height) = (self.map.internal_width, self.map.internal_height);
        if width == 0 || height == 0 || width > MAX_MAP_SIDE || height > MAX_MAP_SIDE {
            return Err(format!("map size {width}x{height} is out of range"));
        }
        let cells = width
            .checked_mul(height)
            .ok_or_else(|| format!("map size {width}x{height} overflows"))?;
        if self.map.tiles.len() != cells || self.map.seen.len() != cells {
            return Err(format!(
                "map layers do not match {}x{}",
                self.map.internal_width, self.map.internal_height
            ));
        }
        if self.floor == 0 || self.floor > MAX_STAT as u32 {
            return Err(format!("floor {} is out of range", self.floor));
        }
        if !self.map.in_bounds(self.player.pos) {
            return Err(format!("player is outside the map at {:?}", self.player.pos));
        }
        let player = &self.player;
        if !(1..=MAX_STAT).contains(&player.max_hp)
            || !(-player.max_hp..=player.max_hp).contains(&player.hp)
        {
            return Err(format!("player hp {}/{} is invalid", player.hp, player.max_hp));
        }
        if !(-MAX_STAT..=MAX_STAT).contains(&player.hunger) {
            return Err(format!("player hunger {} is out of range", player.hunger));
        }
        if player.potions > MAX_STAT as u32 {
            return Err(format!("player carries {} potions", player.potions));
        }
        for enemy in self.enemies.values() {
            if !self.map.in_bounds(enemy.pos) {
                return Err(format!("enemy is outside the map at {:?}", enemy.pos));
            }
            if !(1..=MAX_STAT).contains(&enemy.hp)
                || !(ENEMY_MIN_DAMAGE..=MAX_STAT).contains(&enemy.atk)
            {
                return Err(format!(
                    "enemy at {:?} has hp {} and attack {}",
                    enemy.pos, enemy.hp, enemy.atk
                ));
            }
        }
        if let Some(item) = self.items.values().find(|item| !self.map.in_bounds(item.pos)) {
            return Err(format!("item is outside the map at {:?}", item.pos));
        }
        if self.log.len() > MAX_LOG {
            return Err(format!("log holds {} entries", self.log.len()));
        }
        Ok(())
    }
}
