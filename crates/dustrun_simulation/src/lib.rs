//! DUSTRUN Simulation Core
//!
//! Headless ECS-ядро управления персонажем 2D side-scroller'а на Bevy 0.16.
//! Per-frame физическое состояние + input → решения о движении, прыжке,
//! уроне, смерти/respawn'е и визуальном feedback'е (анимация, screen
//! shake, dust trail).
//!
//! Архитектура:
//! - ECS = simulation core (state machine контроллера, damage model)
//! - Host = tactical layer (рендер, полная физика, звук, сцены)
//! - Контракты коллабораторов: инжектируемые ресурсы внутрь, события наружу

use bevy::prelude::*;

// Публичные модули
pub mod camera;
pub mod combat;
pub mod components;
pub mod input;
pub mod logger;
pub mod physics;
pub mod player;
pub mod ui;

// Re-export базовых типов для удобства
pub use camera::ShakeAmplitude;
pub use combat::{
    BulletFired, CombatPlugin, ContactKind, DamageEvent, DamageSource, DamageTable, LineOfSight,
    RangedAttacker,
};
pub use components::*;
pub use input::{InputAxes, TouchJoystick};
pub use logger::init_logger;
pub use physics::{spawn_player, FlatFloor, Gravity, GroundQuery, GroundSensor, PhysicsBody, RespawnPoint};
pub use player::{
    DustPuff, HealthChanged, LivesChanged, PlayerPlugin, PlayerRespawned, SoundCue,
};
pub use ui::{MinimapToggleRequested, MinimapVisible, RestartRequested, SceneRequest, UiPlugin};

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Подсистемы
            .add_plugins((PlayerPlugin, CombatPlugin, UiPlugin));
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Flat-floor сенсор и respawn point вставлены сразу — App готов к
/// spawn_player и прогону тиков без дополнительной конфигурации.
pub fn create_headless_app(floor_y: f32, respawn: Vec2) -> App {
    init_logger();

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(GroundSensor::flat(floor_y))
        .insert_resource(FlatFloor { surface_y: floor_y })
        .insert_resource(RespawnPoint::new(respawn))
        .add_plugins(SimulationPlugin);

    app
}

/// Прогоняет ровно один simulation tick (FixedUpdate chain)
///
/// Time<Fixed> продвигается на полный timestep вручную — headless
/// прогоны не зависят от real-time аккумуляции.
pub fn step_simulation(app: &mut App) {
    let timestep = app.world().resource::<Time<Fixed>>().timestep();
    app.world_mut()
        .resource_mut::<Time<Fixed>>()
        .advance_by(timestep);
    app.world_mut().run_schedule(FixedUpdate);
}
