//! Огневая каденция врагов (ranged attack)
//!
//! Явный countdown cooldown, декрементируемый каждый tick — переживает
//! переменный tick rate, в отличие от modulo на глобальном счётчике кадров.
//! LOS-флаг пишет хост (vision слой); spawn пули тоже на хосте.

use bevy::prelude::*;

use crate::logger;

/// Ranged attacker — враг со стрельбой по каденции
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct RangedAttacker {
    /// Интервал между выстрелами (секунды)
    pub fire_interval: f32,
    /// Текущий countdown до следующего выстрела (уменьшается до 0)
    pub cooldown: f32,
}

impl Default for RangedAttacker {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl RangedAttacker {
    pub fn new(fire_interval: f32) -> Self {
        Self {
            fire_interval,
            cooldown: 0.0,
        }
    }

    pub fn can_fire(&self) -> bool {
        self.cooldown <= 0.0
    }

    /// Выстрел сделан — перезапустить отсчёт
    pub fn rearm(&mut self) {
        self.cooldown = self.fire_interval;
    }
}

/// Line of sight до персонажа (пишется vision-слоем хоста)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct LineOfSight {
    pub visible: bool,
}

/// Event: враг стреляет (ECS → host, spawn пули на хосте)
#[derive(Event, Debug, Clone, Copy)]
pub struct BulletFired {
    pub shooter: Entity,
    pub origin: Vec2,
}

/// Система: countdown каденции + выстрел при LOS
pub fn tick_ranged_attacks(
    time: Res<Time<Fixed>>,
    mut attackers: Query<(Entity, &Transform, &LineOfSight, &mut RangedAttacker)>,
    mut fired: EventWriter<BulletFired>,
) {
    let delta = time.delta_secs();

    for (entity, transform, los, mut attacker) in attackers.iter_mut() {
        if attacker.cooldown > 0.0 {
            attacker.cooldown = (attacker.cooldown - delta).max(0.0);
        }

        if los.visible && attacker.can_fire() {
            fired.write(BulletFired {
                shooter: entity,
                origin: transform.translation.truncate(),
            });
            attacker.rearm();
            logger::log(&format!("🔫 Ranged attacker {:?} fired", entity));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooldown_countdown() {
        let mut attacker = RangedAttacker::new(0.5);
        assert!(attacker.can_fire());

        attacker.rearm();
        assert!(!attacker.can_fire());
        assert_eq!(attacker.cooldown, 0.5);

        // Simulate ticks
        attacker.cooldown = (attacker.cooldown - 0.3).max(0.0);
        assert!(!attacker.can_fire());

        attacker.cooldown = (attacker.cooldown - 0.3).max(0.0);
        assert!(attacker.can_fire());
    }

    #[test]
    fn test_no_fire_without_los() {
        let los = LineOfSight { visible: false };
        let attacker = RangedAttacker::new(0.5);

        // Условие выстрела: LOS && cooldown готов
        assert!(!(los.visible && attacker.can_fire()));
    }
}
