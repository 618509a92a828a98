//! Player events — исходящие уведомления коллабораторам хоста
//!
//! Ядро владеет состоянием единолично; наружу уходят только
//! fire-and-forget уведомления. Коллабораторы никогда не мутируют
//! состояние контроллера в ответ.

use bevy::prelude::*;

/// Sound cue (fire-and-forget, best-effort канал хоста)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Jump,
    Hurt,
    Death,
}

/// Dust trail cue: персонаж бежит по земле
#[derive(Event, Debug, Clone, Copy)]
pub struct DustPuff {
    pub position: Vec2,
}

/// Персонаж перенесён на respawn point (тот же tick, что и потеря жизни)
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerRespawned {
    pub entity: Entity,
}

/// Health-виджету: setValue (source of truth остаётся в контроллере)
#[derive(Event, Debug, Clone, Copy)]
pub struct HealthChanged {
    pub current: i32,
    pub max: i32,
}

/// Life-counter виджету: новое значение
#[derive(Event, Debug, Clone, Copy)]
pub struct LivesChanged {
    pub remaining: i32,
}
