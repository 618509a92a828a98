//! Controller tick pipeline — системы персонажа
//!
//! Выполняются строго по порядку (chain) в FixedUpdate:
//! sense → input → move → jump → air override → shake decay →
//! damage → life resolution → respawn. Все переходы тотальны —
//! ошибочных веток в ядре нет.

use bevy::prelude::*;

use crate::camera::ShakeAmplitude;
use crate::components::{
    AnimationState, ControlInput, Facing, Grounded, Health, LifeState, Lives, MovementTuning,
    Player, ScreenShake,
};
use crate::logger;
use crate::physics::{PhysicsBody, RespawnPoint};
use crate::player::events::{DustPuff, HealthChanged, LivesChanged, PlayerRespawned, SoundCue};
use crate::ui::SceneRequest;

/// Система: горизонтальное движение
///
/// Ненулевой input: flip направления, санитизация x до ±1, сила с
/// air-фактором в воздухе, clamp скорости к ±horizontal_speed (иначе
/// повторная сила разгоняла бы без предела), анимация Run, dust trail
/// на земле. Нулевой input на земле — Idle.
pub fn drive_horizontal(
    time: Res<Time<Fixed>>,
    mut players: Query<
        (
            &ControlInput,
            &MovementTuning,
            &Grounded,
            &Transform,
            &mut PhysicsBody,
            &mut Facing,
            &mut AnimationState,
        ),
        With<Player>,
    >,
    mut dust: EventWriter<DustPuff>,
) {
    let delta = time.delta_secs();

    for (input, tuning, grounded, transform, mut body, mut facing, mut animation) in
        players.iter_mut()
    {
        let x = input.horizontal;

        if x != 0.0 {
            *facing = Facing::from_axis(x);

            // Санитизация X до ±1 — величина input на силу не влияет
            let direction = facing.sign();
            let factor = if grounded.0 { 1.0 } else { tuning.air_factor };
            body.velocity.x += direction * tuning.horizontal_force * factor * delta;
            body.velocity.x = body
                .velocity
                .x
                .clamp(-tuning.horizontal_speed, tuning.horizontal_speed);

            *animation = AnimationState::Run;

            if grounded.0 {
                dust.write(DustPuff {
                    position: transform.translation.truncate(),
                });
            }
        } else if grounded.0 {
            *animation = AnimationState::Idle;
        }
    }
}

/// Система: прыжок
///
/// Edge-free: условие (grounded && y > threshold) срабатывает каждый tick,
/// пока держится — отсечку даёт потеря grounded после отрыва. Явный
/// debouncing сюда не добавлять: это меняет game feel.
pub fn apply_jump(
    mut players: Query<(&ControlInput, &MovementTuning, &Grounded, &mut PhysicsBody), With<Player>>,
    mut cues: EventWriter<SoundCue>,
) {
    for (input, tuning, grounded, mut body) in players.iter_mut() {
        if grounded.0 && input.vertical > tuning.vertical_threshold {
            // Импульс: мгновенная прибавка скорости, не сила во времени
            body.velocity.y += tuning.vertical_force;
            cues.write(SoundCue::Jump);
        }
    }
}

/// Система: air override анимации
///
/// В воздухе Jump безусловно перекрывает Idle/Run предыдущего шага.
pub fn override_air_animation(
    mut players: Query<(&Grounded, &mut AnimationState), With<Player>>,
) {
    for (grounded, mut animation) in players.iter_mut() {
        if !grounded.0 {
            *animation = AnimationState::Jump;
        }
    }
}

/// Система: decay screen shake
///
/// На истечении амплитуда обнуляется и пушится в camera target.
pub fn decay_screen_shake(
    time: Res<Time<Fixed>>,
    mut players: Query<&mut ScreenShake, With<Player>>,
    mut amplitude: EventWriter<ShakeAmplitude>,
) {
    let delta = time.delta_secs();

    for mut shake in players.iter_mut() {
        if shake.tick(delta) {
            amplitude.write(ShakeAmplitude(0.0));
        }
    }
}

/// Система: health/life resolution
///
/// health ≤ 0 ⇒ ровно один декремент жизни, и ровно ОДНО из двух:
/// respawn (reset health + death cue) либо терминальный GameOver
/// (one-shot сигнал scene-сервису). Никогда оба в одном тике.
pub fn resolve_life_state(
    mut players: Query<(&mut Health, &mut Lives, &mut LifeState), With<Player>>,
    mut cues: EventWriter<SoundCue>,
    mut scenes: EventWriter<SceneRequest>,
) {
    for (mut health, mut lives, mut state) in players.iter_mut() {
        if *state == LifeState::GameOver {
            continue; // Терминальное состояние
        }
        if !health.is_depleted() {
            continue;
        }

        lives.remaining -= 1;

        if !lives.is_exhausted() {
            health.reset();
            *state = LifeState::Respawning;
            cues.write(SoundCue::Death);
            logger::log_info(&format!("⚰️ Life lost, {} remaining — respawn", lives.remaining));
        } else {
            *state = LifeState::GameOver;
            scenes.write(SceneRequest::LoadEnd);
            logger::log_info("☠️ No lives remaining — game over");
        }
    }
}

/// Система: перенос на respawn point
///
/// Respawning → Alive в том же тике; velocity обнуляется, иначе
/// остаточное падение утащило бы персонажа сквозь точку respawn'а.
pub fn apply_respawn(
    respawn_point: Res<RespawnPoint>,
    mut players: Query<
        (Entity, &mut Transform, &mut PhysicsBody, &mut LifeState),
        With<Player>,
    >,
    mut respawned: EventWriter<PlayerRespawned>,
) {
    for (entity, mut transform, mut body, mut state) in players.iter_mut() {
        if *state != LifeState::Respawning {
            continue;
        }

        transform.translation = respawn_point.position.extend(0.0);
        body.velocity = Vec2::ZERO;
        *state = LifeState::Alive;
        respawned.write(PlayerRespawned { entity });
    }
}

/// Система: push изменений в виджеты (variable-rate, Update)
///
/// Читает производное состояние, контроллерное состояние не мутирует —
/// single-writer дисциплина. Виджеты получают setValue-уведомления
/// только при фактическом изменении.
pub fn push_widget_updates(
    healths: Query<&Health, (With<Player>, Changed<Health>)>,
    lives: Query<&Lives, (With<Player>, Changed<Lives>)>,
    mut health_events: EventWriter<HealthChanged>,
    mut lives_events: EventWriter<LivesChanged>,
) {
    for health in healths.iter() {
        health_events.write(HealthChanged {
            current: health.current,
            max: health.max,
        });
    }
    for lives in lives.iter() {
        lives_events.write(LivesChanged {
            remaining: lives.remaining,
        });
    }
}
