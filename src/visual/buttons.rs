//! Round UI buttons shared by both screens, with a common hover/press
//! treatment.

use bevy::prelude::*;

pub struct ButtonsPlugin;

impl Plugin for ButtonsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, button_visuals);
    }
}

/// Base color a styled button returns to when idle.
#[derive(Component, Debug, Clone, Copy)]
pub struct StyledButton {
    pub base: Color,
}

pub const ORANGE: Color = Color::srgb(1.0, 0.42, 0.21);
pub const GOLD: Color = Color::srgb(1.0, 0.84, 0.0);
pub const BLUE: Color = Color::srgb(0.13, 0.59, 0.95);
pub const GREEN: Color = Color::srgb(0.30, 0.69, 0.31);

/// Spawn a circular button with a one-or-two character label.
pub fn spawn_circle_button(
    parent: &mut ChildSpawnerCommands,
    marker: impl Bundle,
    label: &str,
    diameter: f32,
    font_size: f32,
    color: Color,
) {
    parent
        .spawn((
            marker,
            StyledButton { base: color },
            Button,
            Node {
                width: Val::Px(diameter),
                height: Val::Px(diameter),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(3.0)),
                ..default()
            },
            BorderRadius::MAX,
            BorderColor::all(Color::srgba(1.0, 1.0, 1.0, 0.5)),
            BackgroundColor(color),
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(label),
                TextFont {
                    font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

fn button_visuals(
    mut query: Query<
        (&Interaction, &StyledButton, &mut BackgroundColor, &mut BorderColor),
        Changed<Interaction>,
    >,
) {
    for (interaction, style, mut bg, mut border) in &mut query {
        match *interaction {
            Interaction::Pressed => {
                *bg = style.base.mix(&Color::BLACK, 0.15).into();
                *border = BorderColor::all(Color::WHITE);
            }
            Interaction::Hovered => {
                *bg = style.base.mix(&Color::WHITE, 0.15).into();
                *border = BorderColor::all(Color::WHITE);
            }
            Interaction::None => {
                *bg = style.base.into();
                *border = BorderColor::all(Color::srgba(1.0, 1.0, 1.0, 0.5));
            }
        }
    }
}
