//! Combat module — урон и огневая каденция врагов
//!
//! ECS ответственность:
//! - Damage model: DamageSource, DamageTable, DamageEvent
//! - Collision bridge: Rapier CollisionEvent → DamageEvent
//! - Ranged cadence: countdown cooldown вместо frame-modulo таймера
//!
//! Хост ответственность:
//! - Collision detection (Rapier plugin / физический движок)
//! - Spawn пули по BulletFired (визуал, скорость, lifetime)

use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;

pub mod damage;
pub mod ranged;

// Re-export основных типов
pub use damage::{
    apply_damage, collect_contact_damage, ContactKind, DamageEvent, DamageSource, DamageTable,
};
pub use ranged::{tick_ranged_attacks, BulletFired, LineOfSight, RangedAttacker};

/// Combat Plugin
///
/// Регистрирует damage events и огневую каденцию. Сами damage-системы
/// встраиваются в tick-chain контроллера (PlayerPlugin) — порядок внутри
/// тика фиксирован и важен.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<DamageEvent>()
            .add_event::<BulletFired>()
            // Без полного Rapier plugin событие регистрируем сами
            .add_event::<CollisionEvent>()
            .init_resource::<DamageTable>();

        app.add_systems(FixedUpdate, tick_ranged_attacks);
    }
}
