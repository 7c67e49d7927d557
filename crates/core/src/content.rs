use crate::types::EnemyKind;

pub struct EnemyStats {
    pub hp: i32,
    /// Upper bound of a melee hit; the lower bound is always 2.
    pub attack: i32,
}

pub fn get_enemy_stats(kind: EnemyKind) -> EnemyStats {
    match kind {
        EnemyKind::Rat => EnemyStats { hp: 18, attack: 6 },
        EnemyKind::Slime => EnemyStats { hp: 22, attack: 8 },
    }
}

pub const ENEMY_MIN_DAMAGE: i32 = 2;
pub const PLAYER_MIN_DAMAGE: i32 = 10;
pub const PLAYER_MAX_DAMAGE: i32 = 16;
pub const POTION_MIN_HEAL: i32 = 14;
pub const POTION_MAX_HEAL: i32 = 24;
pub const STARVATION_DAMAGE: i32 = 1;
