//! Player domain — character controller
//!
//! Владеет всем состоянием персонажа (velocity-запросы, grounded,
//! анимация, health, lives, shake) и гонит per-tick пайплайн решений.
//! Коллабораторы хоста (виджеты, звук, камера, сцены) получают только
//! исходящие события — single-writer дисциплина без локов.

use bevy::prelude::*;

pub mod events;
pub mod systems;


// Re-export основных типов
pub use events::{DustPuff, HealthChanged, LivesChanged, PlayerRespawned, SoundCue};
pub use systems::{
    apply_jump, apply_respawn, decay_screen_shake, drive_horizontal, override_air_animation,
    push_widget_updates, resolve_life_state,
};

use crate::camera::ShakeAmplitude;
use crate::combat;
use crate::input::{sample_input, InputAxes};
use crate::physics::{self, Gravity, GroundSensor, RespawnPoint};

/// Player Plugin — tick-пайплайн контроллера
///
/// Порядок выполнения в FixedUpdate (60Hz), строго chain:
/// 1. sense_ground — ground-overlap query (заново каждый tick)
/// 2. sample_input — merge осей (keyboard + touch joystick)
/// 3. drive_horizontal — сила, clamp скорости, facing, Run/Idle, dust
/// 4. apply_jump — импульс при grounded && y > threshold
/// 5. override_air_animation — в воздухе Jump перекрывает всё
/// 6. decay_screen_shake — countdown shake-таймера
/// 7. collect_contact_damage — коллизии хоста → DamageEvent
/// 8. apply_damage — буферизованные DamageEvent, hurt cue, shake restart
/// 9. resolve_life_state — потеря жизни → respawn либо game over
/// 10. apply_respawn — перенос на respawn point, Respawning → Alive
///
/// Дальше headless-интегратор: gravity → velocity integration → rapier sync.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SoundCue>()
            .add_event::<DustPuff>()
            .add_event::<PlayerRespawned>()
            .add_event::<HealthChanged>()
            .add_event::<LivesChanged>()
            .add_event::<ShakeAmplitude>()
            .init_resource::<InputAxes>()
            .init_resource::<Gravity>();

        // Fail fast: без инжектированных коллабораторов симуляция не стартует
        app.add_systems(Startup, require_collaborators);

        app.add_systems(
            FixedUpdate,
            (
                // Фаза 1: sense
                physics::sense_ground,
                sample_input,

                // Фаза 2: движение и анимация
                systems::drive_horizontal,
                systems::apply_jump,
                systems::override_air_animation,

                // Фаза 3: feedback decay
                systems::decay_screen_shake,

                // Фаза 4: damage (contacts прошлого кадра, применяются один раз)
                combat::collect_contact_damage,
                combat::apply_damage,

                // Фаза 5: life resolution + respawn (в одном тике)
                systems::resolve_life_state,
                systems::apply_respawn,

                // Фаза 6: headless интегратор
                physics::apply_gravity,
                physics::integrate_velocity,
                physics::sync_velocity_to_rapier,
            )
                .chain(), // Последовательное выполнение
        );

        // Variable-rate surface: только чтение производного состояния
        app.add_systems(Update, systems::push_widget_updates);
    }
}

/// Startup-проверка обязательных коллабораторов
///
/// Отсутствующая зависимость — fatal configuration error: честный panic
/// на старте вместо молчаливо неработающего движения/урона.
fn require_collaborators(
    sensor: Option<Res<GroundSensor>>,
    respawn: Option<Res<RespawnPoint>>,
) {
    if sensor.is_none() {
        panic!("GroundSensor resource is missing: insert one before startup (e.g. GroundSensor::flat)");
    }
    if respawn.is_none() {
        panic!("RespawnPoint resource is missing: insert one before startup");
    }
}
