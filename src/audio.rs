//! Background music with a pointer-driven volume slider and mute toggle.

use bevy::audio::{AudioSink, AudioSinkPlayback, PlaybackSettings, Volume};
use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use crate::visual::buttons::{GOLD, StyledButton};

pub struct MusicPlugin;

impl Plugin for MusicPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MusicSettings>()
            .add_systems(Startup, (start_music, spawn_audio_controls))
            .add_systems(
                Update,
                (read_slider_input, toggle_mute, apply_music_settings),
            );
    }
}

const DEFAULT_VOLUME: f32 = 0.5;
const MUTED_BUTTON: Color = Color::srgb(0.44, 0.50, 0.56);

#[derive(Resource, Debug, Clone, Copy)]
pub struct MusicSettings {
    /// Linear volume in [0, 1]
    pub volume: f32,
    pub muted: bool,
}

impl Default for MusicSettings {
    fn default() -> Self {
        MusicSettings {
            volume: DEFAULT_VOLUME,
            muted: false,
        }
    }
}

#[derive(Component)]
struct MusicSink;

#[derive(Component)]
struct VolumeSliderTrack;

#[derive(Component)]
struct VolumeSliderFill;

#[derive(Component)]
struct MuteButton;

fn start_music(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn((
        MusicSink,
        AudioPlayer::new(asset_server.load("audio/theme.ogg")),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(DEFAULT_VOLUME)),
    ));
}

fn spawn_audio_controls(mut commands: Commands) {
    // Small persistent strip in the bottom-left corner, above both screens.
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(12.0),
                bottom: Val::Px(10.0),
                align_items: AlignItems::Center,
                column_gap: Val::Px(8.0),
                ..default()
            },
            GlobalZIndex(300),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    MuteButton,
                    StyledButton { base: GOLD },
                    Button,
                    Node {
                        width: Val::Px(26.0),
                        height: Val::Px(26.0),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BorderRadius::MAX,
                    BackgroundColor(GOLD),
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new("M"),
                        TextFont {
                            font_size: 13.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });

            parent
                .spawn((
                    VolumeSliderTrack,
                    Button,
                    RelativeCursorPosition::default(),
                    Node {
                        width: Val::Px(90.0),
                        height: Val::Px(10.0),
                        ..default()
                    },
                    BorderRadius::MAX,
                    BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.15)),
                ))
                .with_children(|track| {
                    track.spawn((
                        VolumeSliderFill,
                        Node {
                            width: Val::Percent(DEFAULT_VOLUME * 100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BorderRadius::MAX,
                        BackgroundColor(GOLD),
                    ));
                });
        });
}

fn read_slider_input(
    slider: Query<(&Interaction, &RelativeCursorPosition), With<VolumeSliderTrack>>,
    mut settings: ResMut<MusicSettings>,
) {
    for (interaction, cursor) in &slider {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let Some(pos) = cursor.normalized else {
            continue;
        };
        settings.volume = pos.x.clamp(0.0, 1.0);
    }
}

fn toggle_mute(
    buttons: Query<&Interaction, (Changed<Interaction>, With<MuteButton>)>,
    mut settings: ResMut<MusicSettings>,
) {
    for interaction in &buttons {
        if *interaction == Interaction::Pressed {
            settings.muted = !settings.muted;
            info!("music {}", if settings.muted { "muted" } else { "unmuted" });
        }
    }
}

fn apply_music_settings(
    settings: Res<MusicSettings>,
    mut sinks: Query<&mut AudioSink, With<MusicSink>>,
    mut fill: Query<&mut Node, With<VolumeSliderFill>>,
    mut mute_button: Query<(&mut StyledButton, &mut BackgroundColor), With<MuteButton>>,
) {
    if !settings.is_changed() {
        return;
    }

    let effective = if settings.muted { 0.0 } else { settings.volume };
    for mut sink in &mut sinks {
        sink.set_volume(Volume::Linear(effective));
    }
    for mut node in &mut fill {
        node.width = Val::Percent(settings.volume * 100.0);
    }
    for (mut style, mut bg) in &mut mute_button {
        style.base = if settings.muted { MUTED_BUTTON } else { GOLD };
        *bg = style.base.into();
    }
}
