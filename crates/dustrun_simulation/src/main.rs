//! Headless симуляция DUSTRUN
//!
//! Прогоняет контроллер персонажа без рендера: разбег, прыжок,
//! урон от hazard'а, respawn.

use bevy::prelude::*;
use dustrun_simulation::*;

fn main() {
    println!("Starting DUSTRUN headless simulation");

    let mut app = create_headless_app(0.0, Vec2::new(0.0, 1.0));

    let player = spawn_player(
        &mut app.world_mut().commands(),
        Vec2::new(0.0, 1.0),
        MovementTuning::default(),
        Health::new(100),
        Lives::new(3),
        ScreenShake::default(),
    );
    app.world_mut().flush();

    // 60 тиков разбега вправо
    app.insert_resource(InputAxes {
        horizontal: 1.0,
        vertical: 0.0,
    });
    for _ in 0..60 {
        step_simulation(&mut app);
    }
    report(&mut app, player, "after run");

    // Прыжок
    app.insert_resource(InputAxes {
        horizontal: 1.0,
        vertical: 1.0,
    });
    step_simulation(&mut app);
    app.insert_resource(InputAxes {
        horizontal: 1.0,
        vertical: 0.0,
    });
    for _ in 0..30 {
        step_simulation(&mut app);
    }
    report(&mut app, player, "mid-air / landed");

    // Hazard hit
    app.world_mut().send_event(DamageEvent {
        target: player,
        source: DamageSource::Hazard,
    });
    step_simulation(&mut app);
    report(&mut app, player, "after hazard hit");

    println!("Simulation complete!");
}

fn report(app: &mut App, player: Entity, label: &str) {
    let world = app.world();
    let transform = world.get::<Transform>(player).unwrap();
    let health = world.get::<Health>(player).unwrap();
    let animation = world.get::<AnimationState>(player).unwrap();

    println!(
        "[{}] pos=({:.2}, {:.2}) hp={}/{} anim={:?}",
        label,
        transform.translation.x,
        transform.translation.y,
        health.current,
        health.max,
        animation
    );
}
