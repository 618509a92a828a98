//! Player controller integration tests
//!
//! Полный tick-пайплайн headless: урон от нескольких источников,
//! respawn, терминальный game over, screen shake, каденция стрельбы,
//! виджеты и UI glue.

use bevy::prelude::*;
use bevy_rapier2d::rapier::geometry::CollisionEventFlags;
use bevy_rapier2d::prelude::CollisionEvent;
use dustrun_simulation::*;

const RESPAWN: Vec2 = Vec2::new(0.0, 5.0);

/// Helper: App + персонаж на полу с заданными health/lives
fn spawn_world(health: i32, lives: i32) -> (App, Entity) {
    let mut app = create_headless_app(0.0, RESPAWN);
    let player = spawn_player(
        &mut app.world_mut().commands(),
        Vec2::new(0.0, 0.6),
        MovementTuning::default(),
        Health::new(health),
        Lives::new(lives),
        ScreenShake::new(2.0, 0.3),
    );
    app.world_mut().flush();
    (app, player)
}

fn drain<E: Event>(app: &mut App) -> Vec<E> {
    app.world_mut().resource_mut::<Events<E>>().drain().collect()
}

fn hit(app: &mut App, player: Entity, source: DamageSource) {
    app.world_mut().send_event(DamageEvent {
        target: player,
        source,
    });
}

#[test]
fn test_same_tick_multi_source_damage_is_additive() {
    let (mut app, player) = spawn_world(100, 3);

    // Bullet + Hazard в одном тике: ровно 10 + 30
    hit(&mut app, player, DamageSource::Bullet);
    hit(&mut app, player, DamageSource::Hazard);
    step_simulation(&mut app);

    let health = app.world().get::<Health>(player).unwrap();
    assert_eq!(health.current, 60);

    // Каждый hit независим: два hurt cue
    let hurts = drain::<SoundCue>(&mut app)
        .iter()
        .filter(|c| **c == SoundCue::Hurt)
        .count();
    assert_eq!(hurts, 2);

    // И оба рестартуют shake
    let shake = app.world().get::<ScreenShake>(player).unwrap();
    assert!(shake.active);
    assert_eq!(shake.amplitude, 2.0);
}

#[test]
fn test_tagged_contact_converts_to_damage() {
    let (mut app, player) = spawn_world(100, 3);

    let enemy = app
        .world_mut()
        .spawn((Transform::default(), ContactKind(DamageSource::Enemy)))
        .id();
    let wall = app.world_mut().spawn(Transform::default()).id();

    // Порядок entity в событии не важен
    app.world_mut().send_event(CollisionEvent::Started(
        enemy,
        player,
        CollisionEventFlags::empty(),
    ));
    // Контакт без ContactKind (стена) урона не даёт
    app.world_mut().send_event(CollisionEvent::Started(
        player,
        wall,
        CollisionEventFlags::empty(),
    ));
    step_simulation(&mut app);

    assert_eq!(app.world().get::<Health>(player).unwrap().current, 80);
}

#[test]
fn test_health_never_exceeds_max() {
    let (mut app, player) = spawn_world(100, 3);

    hit(&mut app, player, DamageSource::Bullet);
    step_simulation(&mut app);
    assert_eq!(app.world().get::<Health>(player).unwrap().current, 90);

    // Heal сверх max клампится
    app.world_mut()
        .get_mut::<Health>(player)
        .unwrap()
        .heal(10_000);
    assert_eq!(app.world().get::<Health>(player).unwrap().current, 100);
}

#[test]
fn test_death_with_lives_remaining_respawns() {
    let (mut app, player) = spawn_world(30, 2);

    hit(&mut app, player, DamageSource::Hazard); // 30 урона → ровно в ноль
    step_simulation(&mut app);

    // Жизнь списана один раз, health полный, персонаж на respawn point
    assert_eq!(app.world().get::<Lives>(player).unwrap().remaining, 1);
    let health = app.world().get::<Health>(player).unwrap();
    assert_eq!(health.current, health.max);
    assert_eq!(
        *app.world().get::<LifeState>(player).unwrap(),
        LifeState::Alive // Respawning → Alive внутри того же тика
    );
    let translation = app.world().get::<Transform>(player).unwrap().translation;
    assert_eq!(translation.truncate(), RESPAWN);

    let respawns = drain::<PlayerRespawned>(&mut app);
    assert_eq!(respawns.len(), 1);

    let cues = drain::<SoundCue>(&mut app);
    assert_eq!(cues.iter().filter(|c| **c == SoundCue::Death).count(), 1);

    // Game over не сигналился
    assert!(drain::<SceneRequest>(&mut app).is_empty());
}

#[test]
fn test_death_without_lives_is_terminal_game_over() {
    let (mut app, player) = spawn_world(5, 1);

    hit(&mut app, player, DamageSource::Enemy); // 20 > 5 → смерть
    step_simulation(&mut app);

    assert_eq!(app.world().get::<Lives>(player).unwrap().remaining, 0);
    assert_eq!(
        *app.world().get::<LifeState>(player).unwrap(),
        LifeState::GameOver
    );

    // Терминальный сигнал ровно один, respawn'а нет
    assert_eq!(drain::<SceneRequest>(&mut app), vec![SceneRequest::LoadEnd]);
    assert!(drain::<PlayerRespawned>(&mut app).is_empty());

    // Дальнейшие тики и удары смысла не имеют: состояние заморожено
    let frozen_health = app.world().get::<Health>(player).unwrap().current;
    hit(&mut app, player, DamageSource::Hazard);
    step_simulation(&mut app);
    step_simulation(&mut app);

    assert_eq!(app.world().get::<Health>(player).unwrap().current, frozen_health);
    assert_eq!(app.world().get::<Lives>(player).unwrap().remaining, 0);
    assert!(drain::<SceneRequest>(&mut app).is_empty());
}

#[test]
fn test_shake_expires_past_duration() {
    let (mut app, player) = spawn_world(100, 3);

    hit(&mut app, player, DamageSource::Bullet);
    step_simulation(&mut app);
    assert!(app.world().get::<ScreenShake>(player).unwrap().active);
    drain::<ShakeAmplitude>(&mut app);

    // duration 0.3 s = 18 тиков при 60 Hz
    for _ in 0..20 {
        step_simulation(&mut app);
    }

    let shake = app.world().get::<ScreenShake>(player).unwrap();
    assert!(!shake.active);
    assert_eq!(shake.amplitude, 0.0);

    // Камере ушёл финальный setAmplitude(0)
    let amplitudes = drain::<ShakeAmplitude>(&mut app);
    assert_eq!(amplitudes.last(), Some(&ShakeAmplitude(0.0)));
}

#[test]
fn test_second_hit_restarts_shake_timer() {
    let (mut app, player) = spawn_world(100, 3);

    hit(&mut app, player, DamageSource::Bullet);
    step_simulation(&mut app);

    // Полтора десятка тиков спустя shake почти истёк
    for _ in 0..15 {
        step_simulation(&mut app);
    }
    let before = app.world().get::<ScreenShake>(player).unwrap().timer;
    assert!(before < 0.1);

    hit(&mut app, player, DamageSource::Bullet);
    step_simulation(&mut app);

    let shake = app.world().get::<ScreenShake>(player).unwrap();
    assert!(shake.active);
    // Таймер снова полный (минус один decay-тик следующего кадра)
    assert!(shake.timer > shake.duration - 0.05);
}

#[test]
fn test_ground_query_is_pure_and_idempotent() {
    let (app, _player) = spawn_world(100, 3);

    let sensor = app.world().resource::<GroundSensor>();
    let origin = Vec2::new(0.0, 0.0);
    assert_eq!(sensor.grounded(origin, 0.2), sensor.grounded(origin, 0.2));
}

#[test]
fn test_ranged_cadence_fires_on_countdown() {
    let (mut app, _player) = spawn_world(100, 3);

    let shooter = app
        .world_mut()
        .spawn((
            Transform::from_translation(Vec3::new(4.0, 1.0, 0.0)),
            RangedAttacker::new(0.1),
            LineOfSight { visible: true },
        ))
        .id();

    for _ in 0..31 {
        step_simulation(&mut app);
    }

    let fired = drain::<BulletFired>(&mut app);
    // Интервал 0.1 s при 60 Hz: выстрел каждые ~6 тиков
    assert!(fired.len() >= 5 && fired.len() <= 6, "fired {}", fired.len());
    assert!(fired.iter().all(|f| f.shooter == shooter));

    // Без LOS стрельба прекращается
    app.world_mut().get_mut::<LineOfSight>(shooter).unwrap().visible = false;
    for _ in 0..31 {
        step_simulation(&mut app);
    }
    assert!(drain::<BulletFired>(&mut app).is_empty());
}

#[test]
fn test_widget_events_follow_state_changes() {
    let (mut app, player) = spawn_world(30, 2);

    // Первый прогон Update видит спавн как изменение — сбрасываем
    app.world_mut().run_schedule(Update);
    drain::<HealthChanged>(&mut app);
    drain::<LivesChanged>(&mut app);

    hit(&mut app, player, DamageSource::Hazard); // Смерть + respawn
    step_simulation(&mut app);
    app.world_mut().run_schedule(Update);

    let healths = drain::<HealthChanged>(&mut app);
    assert_eq!(healths.last().map(|h| h.current), Some(30)); // reset к max

    let lives = drain::<LivesChanged>(&mut app);
    assert_eq!(lives.last().map(|l| l.remaining), Some(1));
}

#[test]
fn test_restart_request_loads_main_scene() {
    let (mut app, _player) = spawn_world(100, 3);

    app.world_mut().send_event(RestartRequested);
    app.world_mut().run_schedule(Update);

    assert_eq!(drain::<SceneRequest>(&mut app), vec![SceneRequest::LoadMain]);
}

#[test]
fn test_minimap_toggle_flips_resource() {
    let (mut app, _player) = spawn_world(100, 3);
    assert!(app.world().resource::<MinimapVisible>().0);

    app.world_mut().send_event(MinimapToggleRequested);
    app.world_mut().run_schedule(Update);
    assert!(!app.world().resource::<MinimapVisible>().0);

    app.world_mut().send_event(MinimapToggleRequested);
    app.world_mut().run_schedule(Update);
    assert!(app.world().resource::<MinimapVisible>().0);
}

#[test]
#[should_panic(expected = "GroundSensor resource is missing")]
fn test_missing_ground_sensor_fails_fast() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(RespawnPoint::new(Vec2::ZERO))
        .add_plugins(SimulationPlugin);

    // Startup прогоняется на первом update — здесь и падаем
    app.update();
}
