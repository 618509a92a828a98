//! Damage model: источники урона, таблица величин, применение
//!
//! DamageEvent буферизуются Bevy Events: collision callbacks хоста могут
//! прилетать в любой точке кадра, применяются они ровно один раз,
//! синхронно, в начале следующего controller tick. Порядок — порядок
//! прихода; одновременные hit'ы разных источников складываются
//! независимо (никакого first-wins и дедупликации).

use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;

use crate::camera::ShakeAmplitude;
use crate::components::{Health, LifeState, Player, ScreenShake};
use crate::logger;
use crate::player::events::SoundCue;

/// Источник урона (тег контакта)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum DamageSource {
    Enemy,
    Hazard,
    Bullet,
}

/// Таблица величин урона по источникам (конфигурация хоста)
#[derive(Resource, Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct DamageTable {
    pub enemy: i32,
    pub hazard: i32,
    pub bullet: i32,
}

impl Default for DamageTable {
    fn default() -> Self {
        Self {
            enemy: 20,
            hazard: 30,
            bullet: 10,
        }
    }
}

impl DamageTable {
    pub fn amount(&self, source: DamageSource) -> i32 {
        match source {
            DamageSource::Enemy => self.enemy,
            DamageSource::Hazard => self.hazard,
            DamageSource::Bullet => self.bullet,
        }
    }
}

/// Event: дискретное уведомление об уроне от физического контакта
///
/// Создаётся в момент контакта, потребляется и отбрасывается на следующем
/// тике контроллера. Очереди между тиками не живут дольше одного consume.
#[derive(Event, Debug, Clone, Copy)]
pub struct DamageEvent {
    pub target: Entity,
    pub source: DamageSource,
}

/// Маркер враждебной entity для collision bridge
///
/// Хост вешает на врагов/hazard'ы/пули; столкновение с персонажем
/// конвертируется в DamageEvent соответствующего источника.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ContactKind(pub DamageSource);

impl Default for ContactKind {
    fn default() -> Self {
        Self(DamageSource::Enemy)
    }
}

/// Система: Rapier CollisionEvent → DamageEvent
///
/// Порядок прихода коллизий сохраняется. Контакт без ContactKind
/// (стены, платформы) урона не даёт.
pub fn collect_contact_damage(
    mut collisions: EventReader<CollisionEvent>,
    mut damage: EventWriter<DamageEvent>,
    players: Query<(), With<Player>>,
    contacts: Query<&ContactKind>,
) {
    for event in collisions.read() {
        let CollisionEvent::Started(a, b, _) = event else {
            continue;
        };

        for (player, other) in [(*a, *b), (*b, *a)] {
            if !players.contains(player) {
                continue;
            }
            if let Ok(kind) = contacts.get(other) {
                damage.write(DamageEvent {
                    target: player,
                    source: kind.0,
                });
            }
        }
    }
}

/// Система: применение буферизованных DamageEvent
///
/// Каждый event применяется независимо: урон вычитается, hurt cue,
/// shake рестартует на полный duration (повторные hit'ы того же тика
/// тоже рестартуют). После GameOver урон смысла не имеет.
pub fn apply_damage(
    mut events: EventReader<DamageEvent>,
    table: Res<DamageTable>,
    mut players: Query<(&mut Health, &mut ScreenShake, &LifeState), With<Player>>,
    mut cues: EventWriter<SoundCue>,
    mut amplitude: EventWriter<ShakeAmplitude>,
) {
    for event in events.read() {
        let Ok((mut health, mut shake, state)) = players.get_mut(event.target) else {
            continue;
        };
        if *state == LifeState::GameOver {
            continue;
        }

        let amount = table.amount(event.source);
        health.take_damage(amount);
        cues.write(SoundCue::Hurt);

        shake.start();
        amplitude.write(ShakeAmplitude(shake.amplitude));

        logger::log(&format!(
            "💥 Hit by {:?}: -{} HP ({}/{})",
            event.source, amount, health.current, health.max
        ));
    }
}
