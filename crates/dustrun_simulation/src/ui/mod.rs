//! UI glue — restart и minimap toggle
//!
//! Тонкая событийная прослойка без собственной state machine:
//! restart-запрос конвертируется в сигнал scene-сервису, toggle
//! переключает видимость миникарты. Рендер UI целиком на хосте.

use bevy::prelude::*;

/// Сигнал scene/UI transition сервису хоста
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRequest {
    /// Главная сцена (restart)
    LoadMain,
    /// Терминальная end-сцена (game over), one-shot
    LoadEnd,
}

/// Запрос рестарта (кнопка Restart на хосте)
#[derive(Event, Debug, Clone, Copy)]
pub struct RestartRequested;

/// Запрос переключения миникарты (кнопка Y на хосте)
#[derive(Event, Debug, Clone, Copy)]
pub struct MinimapToggleRequested;

/// Текущая видимость миникарты
#[derive(Resource, Debug, Clone, Copy)]
pub struct MinimapVisible(pub bool);

impl Default for MinimapVisible {
    fn default() -> Self {
        Self(true) // Миникарта видима со старта сцены
    }
}

/// Система: restart → scene-сервис
pub fn handle_restart(
    mut requests: EventReader<RestartRequested>,
    mut scenes: EventWriter<SceneRequest>,
) {
    for _ in requests.read() {
        scenes.write(SceneRequest::LoadMain);
    }
}

/// Система: toggle миникарты
pub fn handle_minimap_toggle(
    mut requests: EventReader<MinimapToggleRequested>,
    mut minimap: ResMut<MinimapVisible>,
) {
    for _ in requests.read() {
        minimap.0 = !minimap.0;
    }
}

/// UI Plugin — события + glue-системы в Update (variable rate)
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SceneRequest>()
            .add_event::<RestartRequested>()
            .add_event::<MinimapToggleRequested>()
            .init_resource::<MinimapVisible>();

        app.add_systems(Update, (handle_restart, handle_minimap_toggle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimap_toggle_flips_visibility() {
        let mut visible = MinimapVisible::default();
        assert!(visible.0);

        visible.0 = !visible.0;
        assert!(!visible.0);

        visible.0 = !visible.0;
        assert!(visible.0);
    }
}
