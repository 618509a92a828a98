//! Input adapter — sampling сырых осей
//!
//! Хост пишет InputAxes каждый кадр из своего input-слоя (keyboard,
//! gamepad). На touch-платформах дополнительно вставляет TouchJoystick —
//! оси складываются аддитивно (host decides). Контракт: pure read, без
//! ошибок, значение всегда есть (нулевой input — валидный ответ).

use bevy::prelude::*;

use crate::components::{ControlInput, Player};

/// Сырые оси от хоста, [-1, 1]
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputAxes {
    pub horizontal: f32,
    pub vertical: f32,
}

/// On-screen joystick (touch-платформы), опционален
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct TouchJoystick {
    pub horizontal: f32,
    pub vertical: f32,
}

/// Аддитивный merge оси с опциональным joystick, clamp к [-1, 1]
pub fn merge_axis(raw: f32, joystick: Option<f32>) -> f32 {
    (raw + joystick.unwrap_or(0.0)).clamp(-1.0, 1.0)
}

/// Система: sampling смерженного input в ControlInput персонажа
pub fn sample_input(
    axes: Res<InputAxes>,
    joystick: Option<Res<TouchJoystick>>,
    mut players: Query<&mut ControlInput, With<Player>>,
) {
    let joystick = joystick.as_deref();

    for mut input in players.iter_mut() {
        input.horizontal = merge_axis(axes.horizontal, joystick.map(|j| j.horizontal));
        input.vertical = merge_axis(axes.vertical, joystick.map(|j| j.vertical));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_without_joystick() {
        assert_eq!(merge_axis(0.6, None), 0.6);
        assert_eq!(merge_axis(-1.0, None), -1.0);
    }

    #[test]
    fn test_merge_is_additive_and_clamped() {
        assert_eq!(merge_axis(0.6, Some(0.2)), 0.8);
        assert_eq!(merge_axis(0.8, Some(0.8)), 1.0); // Clamp сверху
        assert_eq!(merge_axis(-0.9, Some(-0.5)), -1.0); // Clamp снизу
    }

    #[test]
    fn test_zero_input_is_valid() {
        assert_eq!(merge_axis(0.0, Some(0.0)), 0.0);
    }
}
