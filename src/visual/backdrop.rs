//! Animated backdrop shared by both screens: drifting colored motes and
//! twinkling sparkles scattered behind the content.

use bevy::prelude::*;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rand::rng;

use crate::camera::Layout;
use crate::visual::tween::{Floating, Twinkle};

pub struct BackdropPlugin;

impl Plugin for BackdropPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.89, 0.95, 0.99)))
            .add_systems(Startup, spawn_backdrop)
            .add_systems(Update, spin_sparkles);
    }
}

const MOTE_COUNT: usize = 14;
const SPARKLE_COUNT: usize = 18;

const MOTE_COLORS: [Color; 5] = [
    Color::srgb(1.0, 0.84, 0.0),
    Color::srgb(1.0, 0.42, 0.21),
    Color::srgb(0.30, 0.69, 0.31),
    Color::srgb(0.13, 0.59, 0.95),
    Color::srgb(0.61, 0.15, 0.69),
];

const SPARKLE_GOLD: Color = Color::srgb(1.0, 0.84, 0.0);

/// Marker for the slowly rotating sparkles.
#[derive(Component)]
struct Sparkle {
    spin: f32,
}

fn spawn_backdrop(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    layout: Res<Layout>,
) {
    let mut rng = rng();
    let half_w = layout.half_width();
    let half_h = layout.half_height();

    for _ in 0..MOTE_COUNT {
        let x = rng.random_range(-half_w + 50.0..half_w - 50.0);
        let y = rng.random_range(-half_h + 80.0..half_h - 120.0);
        let radius = rng.random_range(4.0..10.0);
        let color = *MOTE_COLORS.choose(&mut rng).unwrap_or(&SPARKLE_GOLD);

        commands.spawn((
            Mesh2d(meshes.add(Circle::new(radius))),
            MeshMaterial2d(materials.add(color.with_alpha(0.5))),
            Transform::from_xyz(x, y, -50.0),
            Floating {
                anchor: Vec2::new(x, y),
                amplitude: rng.random_range(10.0..30.0),
                period: rng.random_range(2.0..4.0),
                phase: rng.random_range(0.0..std::f32::consts::TAU),
            },
            Twinkle {
                base_alpha: 0.3,
                amplitude: 0.4,
                period: rng.random_range(1.5..2.5),
                phase: rng.random_range(0.0..std::f32::consts::TAU),
            },
        ));
    }

    // Diamond sparkles: small squares spun 45 degrees and left rotating.
    for _ in 0..SPARKLE_COUNT {
        let x = rng.random_range(-half_w + 20.0..half_w - 20.0);
        let y = rng.random_range(-half_h + 20.0..half_h - 20.0);
        let size = rng.random_range(4.0..9.0);

        commands.spawn((
            Mesh2d(meshes.add(Rectangle::new(size, size))),
            MeshMaterial2d(materials.add(SPARKLE_GOLD.with_alpha(0.4))),
            Transform::from_xyz(x, y, -50.0)
                .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_4)),
            Sparkle {
                spin: rng.random_range(0.2..0.8),
            },
            Twinkle {
                base_alpha: 0.2,
                amplitude: 0.4,
                period: rng.random_range(2.0..4.0),
                phase: rng.random_range(0.0..std::f32::consts::TAU),
            },
        ));
    }
}

fn spin_sparkles(time: Res<Time>, mut query: Query<(&Sparkle, &mut Transform)>) {
    for (sparkle, mut transform) in &mut query {
        transform.rotate_z(sparkle.spin * time.delta_secs());
    }
}
