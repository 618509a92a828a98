//! Kinematic интегратор и spawn helper персонажа
//!
//! Контроллер никогда не пишет позицию напрямую — он меняет только
//! PhysicsBody.velocity (силы/импульсы/clamp), интеграция velocity →
//! Transform принадлежит физическому слою. Headless режим интегрирует
//! сам; хост с полным Rapier plugin получает те же данные через
//! sync_velocity_to_rapier.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::components::{Grounded, Health, Lives, MovementTuning, Player, ScreenShake};
use crate::physics::sensor::FlatFloor;

/// Кастомная velocity персонажа (units/s)
///
/// Rapier Velocity — зеркало для хоста, source of truth здесь.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct PhysicsBody {
    pub velocity: Vec2,
}

/// Гравитация headless-интегратора (units/s², отрицательная вниз)
#[derive(Resource, Debug, Clone, Copy)]
pub struct Gravity(pub f32);

impl Default for Gravity {
    fn default() -> Self {
        Self(-40.0)
    }
}

/// Точка respawn'а (death-plane service)
///
/// Инжектируется хостом; apply_respawn переносит тело сюда.
#[derive(Resource, Debug, Clone, Copy)]
pub struct RespawnPoint {
    pub position: Vec2,
}

impl RespawnPoint {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }
}

/// Система: гравитация в воздухе
///
/// На земле вертикальную скорость не трогаем — settle делает интегратор.
pub fn apply_gravity(
    time: Res<Time<Fixed>>,
    gravity: Res<Gravity>,
    mut query: Query<(&Grounded, &mut PhysicsBody)>,
) {
    let delta = time.delta_secs();

    for (grounded, mut body) in query.iter_mut() {
        if !grounded.0 {
            body.velocity.y += gravity.0 * delta;
        }
    }
}

/// Система: интеграция velocity → Transform (headless режим)
///
/// При наличии FlatFloor ресурса персонаж settle'ится на поверхности:
/// ноги не проваливаются ниже пола, нисходящая скорость обнуляется.
pub fn integrate_velocity(
    time: Res<Time<Fixed>>,
    floor: Option<Res<FlatFloor>>,
    mut query: Query<(&MovementTuning, &mut PhysicsBody, &mut Transform), With<Player>>,
) {
    let delta = time.delta_secs();

    for (tuning, mut body, mut transform) in query.iter_mut() {
        transform.translation += body.velocity.extend(0.0) * delta;

        if let Some(floor) = floor.as_deref() {
            let feet_y = transform.translation.y - tuning.ground_offset;
            if feet_y < floor.surface_y && body.velocity.y < 0.0 {
                transform.translation.y = floor.surface_y + tuning.ground_offset;
                body.velocity.y = 0.0;
            }
        }
    }
}

/// Система: синхронизация нашей velocity в Rapier Velocity
///
/// Нужна только когда хост подключил полный Rapier plugin — KinematicPositionBased
/// тело использует её для корректных collision events.
pub fn sync_velocity_to_rapier(
    mut query: Query<(&PhysicsBody, &mut Velocity), With<Player>>,
) {
    for (body, mut rapier_velocity) in query.iter_mut() {
        rapier_velocity.linvel = body.velocity;
    }
}

/// Spawn helper персонажа
///
/// Собирает entity целиком: ECS-состояние контроллера (через Required
/// Components у Player) + Rapier тело для collision detection на стороне
/// хоста. Конфигурация — при конструировании, не live.
pub fn spawn_player(
    commands: &mut Commands,
    position: Vec2,
    tuning: MovementTuning,
    health: Health,
    lives: Lives,
    shake: ScreenShake,
) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position.extend(0.0)),

            // Состояние контроллера (остальное дотянут Required Components)
            Player,
            tuning,
            health,
            lives,
            shake,

            // Rapier physics (collision detection на стороне хоста)
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(0.4, 0.2),
            Velocity::default(),
            LockedAxes::ROTATION_LOCKED,
            ActiveEvents::COLLISION_EVENTS,
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_logic() {
        // Логика гравитации напрямую, без App schedule
        let gravity = Gravity::default();
        let grounded = Grounded(false);
        let mut body = PhysicsBody::default();

        let delta = 1.0 / 60.0;
        if !grounded.0 {
            body.velocity.y += gravity.0 * delta;
        }

        assert!(body.velocity.y < -0.6);
        assert!(body.velocity.y > -0.7);
    }

    #[test]
    fn test_grounded_blocks_gravity() {
        let gravity = Gravity::default();
        let grounded = Grounded(true);
        let mut body = PhysicsBody::default();

        if !grounded.0 {
            body.velocity.y += gravity.0 * (1.0 / 60.0);
        }

        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_floor_settle_logic() {
        let floor = FlatFloor { surface_y: 0.0 };
        let tuning = MovementTuning::default();
        let mut body = PhysicsBody {
            velocity: Vec2::new(0.0, -3.0),
        };
        // Ноги ушли ниже пола после интеграции
        let mut translation = Vec3::new(0.0, tuning.ground_offset - 0.1, 0.0);

        let feet_y = translation.y - tuning.ground_offset;
        if feet_y < floor.surface_y && body.velocity.y < 0.0 {
            translation.y = floor.surface_y + tuning.ground_offset;
            body.velocity.y = 0.0;
        }

        assert_eq!(translation.y, tuning.ground_offset);
        assert_eq!(body.velocity.y, 0.0);
    }
}
