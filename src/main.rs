use bevy::prelude::*;

mod audio;
mod camera;
mod game;
mod input;
mod screens;
mod visual;

use bevy::window::WindowResolution;
use audio::MusicPlugin;
use camera::CameraPlugin;
use input::InputPlugin;
use screens::{LessonsPlugin, MinigamePlugin, Screen};
use visual::backdrop::BackdropPlugin;
use visual::buttons::ButtonsPlugin;
use visual::tween::TweenPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Chispa!".into(),
            resolution: WindowResolution::new(960, 640),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .init_state::<Screen>()
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(TweenPlugin)
    .add_plugins(ButtonsPlugin)
    .add_plugins(BackdropPlugin)
    .add_plugins(MusicPlugin)
    .add_plugins(LessonsPlugin)
    .add_plugins(MinigamePlugin);

    app.run();
}
