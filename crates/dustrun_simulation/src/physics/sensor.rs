//! Ground sensing — инжектируемый ground-overlap запрос
//!
//! Контракт: pure read, без side effects, тотальный (невозможный запрос
//! просто возвращает false). Два вызова с неизменной физикой дают один
//! и тот же результат.

use bevy::prelude::*;

use crate::components::{Grounded, MovementTuning, Player};

/// Ground-overlap запрос: пересекаются ли "ноги" персонажа с землёй
///
/// Реализацию выбирает хост: полноценный shape-cast через физический движок,
/// либо FlatFloor для headless прогонов.
pub trait GroundQuery: Send + Sync {
    fn grounded(&self, origin: Vec2, radius: f32) -> bool;
}

/// Инжектируемый ground sensor (DI вместо global lookup)
///
/// Хост обязан вставить ресурс до старта симуляции — отсутствие
/// коллаборатора это fatal configuration error (см. require_collaborators).
#[derive(Resource)]
pub struct GroundSensor(Box<dyn GroundQuery>);

impl GroundSensor {
    pub fn new(query: impl GroundQuery + 'static) -> Self {
        Self(Box::new(query))
    }

    /// Сенсор над плоским полом на высоте `surface_y`
    pub fn flat(surface_y: f32) -> Self {
        Self::new(FlatFloor { surface_y })
    }

    pub fn grounded(&self, origin: Vec2, radius: f32) -> bool {
        self.0.grounded(origin, radius)
    }
}

/// Плоский пол для headless симуляции и тестов
///
/// Как ресурс — используется headless-интегратором для settle персонажа
/// на поверхности (хост с полным физическим движком его не вставляет).
#[derive(Resource, Debug, Clone, Copy)]
pub struct FlatFloor {
    pub surface_y: f32,
}

impl GroundQuery for FlatFloor {
    fn grounded(&self, origin: Vec2, radius: f32) -> bool {
        // Overlap круга с полупространством y <= surface_y
        origin.y - radius <= self.surface_y
    }
}

/// Система: ground sense — первый шаг tick-пайплайна
///
/// Пересчитывает Grounded каждый tick заново. Результат прошлого тика
/// никогда не переживает текущий.
pub fn sense_ground(
    sensor: Res<GroundSensor>,
    mut players: Query<(&Transform, &MovementTuning, &mut Grounded), With<Player>>,
) {
    for (transform, tuning, mut grounded) in players.iter_mut() {
        let origin = transform.translation.truncate() - Vec2::new(0.0, tuning.ground_offset);
        grounded.0 = sensor.grounded(origin, tuning.ground_radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_floor_overlap() {
        let floor = FlatFloor { surface_y: 0.0 };

        assert!(floor.grounded(Vec2::new(3.0, 0.1), 0.2)); // Ноги касаются
        assert!(!floor.grounded(Vec2::new(3.0, 1.0), 0.2)); // В воздухе
        assert!(floor.grounded(Vec2::new(-5.0, -1.0), 0.2)); // Под полом — тоже overlap
    }

    #[test]
    fn test_ground_query_is_idempotent() {
        let sensor = GroundSensor::flat(0.0);
        let origin = Vec2::new(0.0, 0.15);

        let first = sensor.grounded(origin, 0.2);
        let second = sensor.grounded(origin, 0.2);
        assert_eq!(first, second);
        assert!(first);
    }
}
