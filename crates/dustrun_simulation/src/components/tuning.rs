//! Тюнинг-параметры движения персонажа
//!
//! Задаются при конструировании (spawn), live-reload нет.
//! Serde-сериализуемы: хост может грузить пресеты из data-файлов.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Параметры движения/прыжка персонажа
///
/// Все величины в единицах мира, время в секундах.
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct MovementTuning {
    /// Горизонтальное ускорение от input (units/s²)
    pub horizontal_force: f32,
    /// Предел горизонтальной скорости, clamp к ±horizontal_speed (units/s)
    pub horizontal_speed: f32,
    /// Импульс прыжка — мгновенная прибавка к вертикальной скорости (units/s)
    pub vertical_force: f32,
    /// Множитель air control: пока в воздухе, горизонтальная сила
    /// умножается на этот фактор (стандартный platformer feel)
    pub air_factor: f32,
    /// Смещение ground-сенсора вниз от центра персонажа ("ноги")
    pub ground_offset: f32,
    /// Радиус ground-overlap запроса
    pub ground_radius: f32,
    /// Deadzone вертикальной оси для прыжка, валидный диапазон [0.1, 1.0]
    pub vertical_threshold: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            horizontal_force: 60.0,
            horizontal_speed: 4.0,
            vertical_force: 14.0,
            air_factor: 0.5,
            ground_offset: 0.6,
            ground_radius: 0.2,
            vertical_threshold: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_in_valid_range() {
        let tuning = MovementTuning::default();
        assert!(tuning.vertical_threshold >= 0.1 && tuning.vertical_threshold <= 1.0);
        assert!(tuning.air_factor > 0.0 && tuning.air_factor < 1.0);
    }
}
