use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::sim_rng::SimRng;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "FloodWatch (Prototype)".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    // FLOODWATCH_SEED=<u64> pins the RNG for a reproducible session.
    if let Ok(raw) = std::env::var("FLOODWATCH_SEED") {
        match raw.parse::<u64>() {
            Ok(seed) => {
                app.insert_resource(SimRng::from_seed_u64(seed));
            }
            Err(_) => {
                warn!("FLOODWATCH_SEED is not a valid u64, using the default seed: {raw}");
            }
        }
    }

    app.run();
}
