//! Здоровье, жизни и lifecycle персонажа

use bevy::prelude::*;

/// Здоровье персонажа
///
/// Инвариант: current ≤ max всегда; current ≤ 0 допустим только внутри
/// того tick'а, который это разрешает (reset при respawn или терминальный
/// game over). Урон НЕ saturating: overkill виден системе resolve_life_state.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100) // Default 100 HP (bar 0–100 на стороне виджета)
    }
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }

    /// Урон уводит current ниже нуля — overkill нужен life-resolution логике
    pub fn take_damage(&mut self, amount: i32) {
        self.current -= amount;
    }

    pub fn heal(&mut self, amount: i32) {
        self.current = (self.current + amount).min(self.max);
    }

    /// Полный reset (respawn с оставшимися жизнями)
    pub fn reset(&mut self) {
        self.current = self.max;
    }
}

/// Оставшиеся жизни
///
/// Инвариант: декремент ровно один раз за каждое пересечение health через ноль.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Lives {
    pub remaining: i32,
}

impl Default for Lives {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Lives {
    pub fn new(remaining: i32) -> Self {
        Self { remaining }
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0
    }
}

/// Lifecycle sub-state персонажа
///
/// Переходы:
/// - Alive → Respawning: health ≤ 0 при remaining lives > 0
/// - Respawning → Alive: тот же tick (apply_respawn дальше по chain)
/// - Alive → GameOver: health ≤ 0 без оставшихся жизней
///
/// GameOver терминален — дальнейшие gameplay-тики для персонажа не имеют смысла,
/// системы контроллера его пропускают.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub enum LifeState {
    #[default]
    Alive,
    Respawning,
    GameOver,
}
