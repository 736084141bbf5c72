mod abilities;
mod core;
mod currency;
#[cfg(feature = "dev-tools")]
mod debug;
mod dialogue;
mod movement;
mod projectiles;
mod respawn;
mod sequencer;
mod ui;
mod world;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Headlong".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        movement::MovementPlugin,
        abilities::AbilitiesPlugin,
        projectiles::ProjectilesPlugin,
        currency::CurrencyPlugin,
        dialogue::DialoguePlugin,
        respawn::RespawnPlugin,
        world::WorldPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
