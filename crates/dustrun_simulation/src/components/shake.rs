//! Screen shake state machine

use bevy::prelude::*;

/// Screen shake персонажной камеры
///
/// `intensity`/`duration` — конфигурация (задаётся при spawn'е),
/// `amplitude`/`timer`/`active` — текущее состояние.
///
/// Инварианты:
/// - active ⇔ timer > 0
/// - start()/restart всегда сбрасывает timer на полный duration
/// - на истечении amplitude обнуляется и active снимается
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ScreenShake {
    /// Амплитуда при старте shake (конфигурация)
    pub intensity: f32,
    /// Длительность shake в секундах (конфигурация)
    pub duration: f32,
    /// Текущая амплитуда (пушится в camera target)
    pub amplitude: f32,
    /// Оставшееся время, уменьшается каждый tick
    pub timer: f32,
    pub active: bool,
}

impl Default for ScreenShake {
    fn default() -> Self {
        Self::new(2.0, 0.3)
    }
}

impl ScreenShake {
    pub fn new(intensity: f32, duration: f32) -> Self {
        Self {
            intensity,
            duration,
            amplitude: 0.0,
            timer: 0.0,
            active: false,
        }
    }

    /// Запуск или рестарт: timer на полный duration, amplitude на intensity.
    /// Повторный hit до истечения просто перезапускает отсчёт.
    pub fn start(&mut self) {
        self.amplitude = self.intensity;
        self.timer = self.duration;
        self.active = true;
    }

    /// Декремент таймера на elapsed время тика.
    /// Возвращает true ровно на том tick'е, где shake истёк.
    pub fn tick(&mut self, delta: f32) -> bool {
        if !self.active {
            return false;
        }

        self.timer -= delta;
        if self.timer <= 0.0 {
            self.amplitude = 0.0;
            self.timer = 0.0;
            self.active = false;
            return true;
        }

        false
    }
}
