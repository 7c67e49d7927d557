//! Radius-based sight and fog-of-war memory.
//! This module exists to keep sight rules deterministic and shared by the player and enemies.
//! It does not own movement planning or enemy decisions.

use super::*;
use crate::config::VIEW_RADIUS;

/// Euclidean radius test with the default `VIEW_RADIUS`. Walls do not occlude.
///
/// Custom `Rules` are not consulted; use `can_see_within` with `rules.view_radius` or
/// `Game::is_visible` when the radius may differ.
pub fn can_see(from: Pos, to: Pos) -> bool {
    can_see_within(from, to, VIEW_RADIUS)
}

pub fn can_see_within(from: Pos, to: Pos, radius: i32) -> bool {
    let dx = i64::from(to.x) - i64::from(from.x);
    let dy = i64::from(to.y) - i64::from(from.y);
    let radius = i64::from(radius);
    dx * dx + dy * dy <= radius * radius
}

/// Marks every in-bounds cell within `radius` of `origin` as seen.
pub(super) fn reveal_radius(map: &mut Map, origin: Pos, radius: i32) {
    for y in (origin.y - radius)..=(origin.y + radius) {
        for x in (origin.x - radius)..=(origin.x + radius) {
            let pos = Pos { y, x };
            if map.in_bounds(pos) && can_see_within(origin, pos, radius) {
                map.reveal(pos);
            }
        }
    }
}

impl Game {
    /// Whether `pos` is in the player's current view.
    pub fn is_visible(&self, pos: Pos) -> bool {
        self.state.map.in_bounds(pos)
            && can_see_within(self.state.player.pos, pos, self.rules().view_radius)
    }

    pub(super) fn reveal_from_player(&mut self) {
        let radius = self.rules().view_radius;
        reveal_radius(&mut self.state.map, self.state.player.pos, radius);
    }

    pub(super) fn enemy_in_view(&self) -> bool {
        let radius = self.rules().view_radius;
        self.state
            .enemies
            .values()
            .any(|enemy| can_see_within(self.state.player.pos, enemy.pos, radius))
    }
}
