//! Базовые компоненты персонажа: Player, Facing, AnimationState, ControlInput, Grounded

use bevy::prelude::*;

use crate::components::{Health, LifeState, Lives, MovementTuning, ScreenShake};
use crate::physics::PhysicsBody;

/// Player — маркер управляемого персонажа
///
/// Автоматически добавляет весь набор состояния контроллера через
/// Required Components. Spawn helper (`spawn_player`) переопределяет
/// health/lives/tuning конкретными значениями хоста.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(
    Health,
    Lives,
    LifeState,
    Facing,
    AnimationState,
    ControlInput,
    Grounded,
    ScreenShake,
    MovementTuning,
    PhysicsBody
)]
pub struct Player;

/// Направление взгляда персонажа
///
/// Инвариант: совпадает со знаком последнего ненулевого горизонтального input.
/// Нулевой input направление НЕ меняет.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Направление из знака input (panic-free: вызывается только при x != 0)
    pub fn from_axis(x: f32) -> Self {
        if x > 0.0 {
            Facing::Right
        } else {
            Facing::Left
        }
    }

    /// Нормализованный множитель направления (±1.0)
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Анимационное состояние персонажа
///
/// Пересчитывается заново каждый tick из (grounded, |x|) — без гистерезиса,
/// без edge-triggering. В воздухе Jump безусловно перекрывает Idle/Run
/// (приземление на tick с нулевым input даёт Jump→Idle без переходного кадра —
/// намеренно простая политика).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
}

/// Смерженный input текущего тика (keyboard + optional touch joystick)
///
/// Заполняется системой `sample_input`, значения в [-1, 1].
/// Для headless тестов — mock input через этот компонент напрямую.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct ControlInput {
    pub horizontal: f32,
    pub vertical: f32,
}

/// Контакт с землёй (ground-overlap query)
///
/// Пересчитывается каждый tick из GroundSensor, НЕ переживает tick.
/// Отсутствие земли — валидное состояние (персонаж в воздухе), не ошибка.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Grounded(pub bool);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_from_axis_sign() {
        assert_eq!(Facing::from_axis(0.3), Facing::Right);
        assert_eq!(Facing::from_axis(-0.01), Facing::Left);
        assert_eq!(Facing::Right.sign(), 1.0);
        assert_eq!(Facing::Left.sign(), -1.0);
    }

    #[test]
    fn test_animation_default_is_idle() {
        assert_eq!(AnimationState::default(), AnimationState::Idle);
    }
}
