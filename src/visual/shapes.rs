//! Procedural prop art built from mesh primitives.
//!
//! Everything the original content expressed as glyph art is drawn here
//! from circles, rectangles, capsules and triangles, spawned as children
//! of a positioned root entity.

use bevy::prelude::*;

pub const WIRE_GRAY: Color = Color::srgb(0.56, 0.64, 0.68);
pub const METAL: Color = Color::srgb(0.69, 0.74, 0.77);
pub const WOOD: Color = Color::srgb(0.55, 0.38, 0.24);
pub const RUBBER_PINK: Color = Color::srgb(0.96, 0.56, 0.69);
pub const BULB_OFF: Color = Color::srgb(0.85, 0.85, 0.75);
pub const BULB_ON: Color = Color::srgb(1.0, 0.92, 0.23);
pub const BATTERY_GREEN: Color = Color::srgb(0.30, 0.69, 0.31);
pub const PLASTIC_WHITE: Color = Color::srgb(0.96, 0.96, 0.94);
pub const SLATE: Color = Color::srgb(0.27, 0.35, 0.39);

pub type ShapeBundle = (Mesh2d, MeshMaterial2d<ColorMaterial>);

/// Borrowed mesh/material stores so spawn helpers don't thread two
/// `ResMut` arguments everywhere.
pub struct ShapeKit<'a> {
    pub meshes: &'a mut Assets<Mesh>,
    pub materials: &'a mut Assets<ColorMaterial>,
}

impl<'a> ShapeKit<'a> {
    pub fn new(
        meshes: &'a mut Assets<Mesh>,
        materials: &'a mut Assets<ColorMaterial>,
    ) -> Self {
        ShapeKit { meshes, materials }
    }

    pub fn circle(&mut self, radius: f32, color: Color) -> ShapeBundle {
        (
            Mesh2d(self.meshes.add(Circle::new(radius))),
            MeshMaterial2d(self.materials.add(color)),
        )
    }

    pub fn rect(&mut self, width: f32, height: f32, color: Color) -> ShapeBundle {
        (
            Mesh2d(self.meshes.add(Rectangle::new(width, height))),
            MeshMaterial2d(self.materials.add(color)),
        )
    }

    pub fn capsule(&mut self, radius: f32, length: f32, color: Color) -> ShapeBundle {
        (
            Mesh2d(self.meshes.add(Capsule2d::new(radius, length))),
            MeshMaterial2d(self.materials.add(color)),
        )
    }

    pub fn ring(&mut self, inner: f32, outer: f32, color: Color) -> ShapeBundle {
        (
            Mesh2d(self.meshes.add(Annulus::new(inner, outer))),
            MeshMaterial2d(self.materials.add(color)),
        )
    }

    pub fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) -> ShapeBundle {
        (
            Mesh2d(self.meshes.add(Triangle2d::new(a, b, c))),
            MeshMaterial2d(self.materials.add(color)),
        )
    }

    pub fn ellipse(&mut self, half_x: f32, half_y: f32, color: Color) -> ShapeBundle {
        (
            Mesh2d(self.meshes.add(Ellipse::new(half_x, half_y))),
            MeshMaterial2d(self.materials.add(color)),
        )
    }
}

fn at(x: f32, y: f32) -> Transform {
    Transform::from_xyz(x, y, 0.1)
}

fn at_rotated(x: f32, y: f32, radians: f32) -> Transform {
    Transform::from_xyz(x, y, 0.1).with_rotation(Quat::from_rotation_z(radians))
}

/// A lightning bolt, the game's mascot shape.
pub fn spawn_bolt(parent: &mut ChildSpawnerCommands, kit: &mut ShapeKit, scale: f32) {
    let gold = Color::srgb(1.0, 0.84, 0.0);
    let s = scale;
    parent.spawn((
        kit.triangle(
            Vec2::new(6.0 * s, 28.0 * s),
            Vec2::new(-14.0 * s, -2.0 * s),
            Vec2::new(4.0 * s, -2.0 * s),
            gold,
        ),
        at(0.0, 0.0),
    ));
    parent.spawn((
        kit.triangle(
            Vec2::new(14.0 * s, 2.0 * s),
            Vec2::new(-6.0 * s, 2.0 * s),
            Vec2::new(-6.0 * s, -28.0 * s),
            gold,
        ),
        at(0.0, 0.0),
    ));
}

/// A light bulb; `lit` switches the glass color and adds a glow halo.
pub fn spawn_bulb(parent: &mut ChildSpawnerCommands, kit: &mut ShapeKit, lit: bool) {
    if lit {
        parent.spawn((kit.circle(34.0, BULB_ON.with_alpha(0.25)), at(0.0, 6.0)));
    }
    let glass = if lit { BULB_ON } else { BULB_OFF };
    parent.spawn((kit.circle(22.0, glass), at(0.0, 6.0)));
    parent.spawn((kit.rect(14.0, 10.0, METAL), at(0.0, -18.0)));
    parent.spawn((kit.rect(10.0, 6.0, SLATE), at(0.0, -26.0)));
}

/// Draw the icon for a draggable piece by its catalog id.
pub fn spawn_piece_icon(parent: &mut ChildSpawnerCommands, kit: &mut ShapeKit, piece_id: &str) {
    match piece_id {
        "plug" => {
            parent.spawn((kit.rect(34.0, 26.0, SLATE), at(0.0, -4.0)));
            parent.spawn((kit.rect(5.0, 14.0, METAL), at(-8.0, 14.0)));
            parent.spawn((kit.rect(5.0, 14.0, METAL), at(8.0, 14.0)));
            parent.spawn((kit.capsule(4.0, 18.0, WIRE_GRAY), at(0.0, -24.0)));
        }
        "fork" => {
            parent.spawn((kit.capsule(4.0, 28.0, METAL), at(0.0, -10.0)));
            for x in [-8.0, 0.0, 8.0] {
                parent.spawn((kit.rect(4.0, 16.0, METAL), at(x, 16.0)));
            }
        }
        "battery" => {
            parent.spawn((kit.rect(26.0, 42.0, BATTERY_GREEN), at(0.0, -2.0)));
            parent.spawn((kit.rect(10.0, 6.0, METAL), at(0.0, 22.0)));
            parent.spawn((kit.rect(20.0, 8.0, PLASTIC_WHITE), at(0.0, 6.0)));
        }
        "pebble" => {
            parent.spawn((kit.ellipse(20.0, 14.0, Color::srgb(0.5, 0.5, 0.52)), at(0.0, 0.0)));
            parent.spawn((kit.ellipse(8.0, 5.0, Color::srgb(0.62, 0.62, 0.64)), at(-5.0, 5.0)));
        }
        "eraser" => {
            parent.spawn((kit.rect(36.0, 18.0, RUBBER_PINK), at_rotated(0.0, 0.0, 0.2)));
            parent.spawn((kit.rect(10.0, 18.0, Color::srgb(0.4, 0.55, 0.9)), at_rotated(13.0, 2.6, 0.2)));
        }
        "lever" => {
            parent.spawn((kit.capsule(5.0, 26.0, METAL), at_rotated(0.0, 0.0, -0.35)));
            parent.spawn((kit.circle(9.0, Color::srgb(0.84, 0.19, 0.19)), at(6.0, 16.0)));
        }
        "spoon" => {
            parent.spawn((kit.ellipse(11.0, 15.0, METAL), at(0.0, 14.0)));
            parent.spawn((kit.capsule(4.0, 26.0, METAL), at(0.0, -12.0)));
        }
        "twig" => {
            parent.spawn((kit.capsule(4.0, 40.0, WOOD), at_rotated(0.0, 0.0, 0.5)));
            parent.spawn((kit.capsule(2.5, 14.0, WOOD), at_rotated(6.0, 10.0, -0.5)));
        }
        "rubber-band" => {
            parent.spawn((kit.ring(12.0, 19.0, RUBBER_PINK), at(0.0, 0.0)));
        }
        "cable" => {
            parent.spawn((kit.rect(18.0, 14.0, PLASTIC_WHITE), at(0.0, 16.0)));
            parent.spawn((kit.rect(8.0, 8.0, METAL), at(0.0, 26.0)));
            parent.spawn((kit.capsule(4.0, 30.0, SLATE), at(0.0, -8.0)));
        }
        "string" => {
            parent.spawn((kit.capsule(3.0, 40.0, Color::srgb(0.82, 0.76, 0.62)), at_rotated(0.0, 0.0, 0.9)));
            parent.spawn((kit.circle(5.0, Color::srgb(0.82, 0.76, 0.62)), at(14.0, -14.0)));
        }
        // Unknown content falls back to a plain token.
        _ => {
            parent.spawn((kit.circle(18.0, BLUE_FALLBACK), at(0.0, 0.0)));
        }
    }
}

const BLUE_FALLBACK: Color = Color::srgb(0.13, 0.59, 0.95);

/// Draw the stationary prop a puzzle's drop zone sits on.
pub fn spawn_zone_prop(parent: &mut ChildSpawnerCommands, kit: &mut ShapeKit, puzzle_id: &str) {
    match puzzle_id {
        "wall-plug" => {
            // Wall outlet plate with two sockets.
            parent.spawn((kit.rect(64.0, 90.0, PLASTIC_WHITE), at(0.0, 0.0)));
            parent.spawn((kit.circle(6.0, SLATE), at(-10.0, 18.0)));
            parent.spawn((kit.circle(6.0, SLATE), at(10.0, 18.0)));
            parent.spawn((kit.circle(6.0, SLATE), at(-10.0, -18.0)));
            parent.spawn((kit.circle(6.0, SLATE), at(10.0, -18.0)));
        }
        "toy-battery" => {
            // Robot torso with an open battery bay.
            parent.spawn((kit.rect(90.0, 96.0, Color::srgb(0.42, 0.61, 0.92)), at(0.0, 0.0)));
            parent.spawn((kit.circle(8.0, PLASTIC_WHITE), at(-18.0, 26.0)));
            parent.spawn((kit.circle(8.0, PLASTIC_WHITE), at(18.0, 26.0)));
            parent.spawn((kit.rect(34.0, 50.0, SLATE), at(0.0, -12.0)));
        }
        "light-switch" => {
            parent.spawn((kit.rect(56.0, 82.0, PLASTIC_WHITE), at(0.0, 0.0)));
            parent.spawn((kit.rect(18.0, 34.0, Color::srgb(0.85, 0.87, 0.88)), at(0.0, 0.0)));
        }
        "broken-circuit" => {
            // Wire stubs either side of the gap the piece must bridge.
            parent.spawn((kit.capsule(4.0, 50.0, WIRE_GRAY), at_rotated(-60.0, 0.0, std::f32::consts::FRAC_PI_2)));
            parent.spawn((kit.capsule(4.0, 50.0, WIRE_GRAY), at_rotated(60.0, 0.0, std::f32::consts::FRAC_PI_2)));
        }
        "charge-tablet" => {
            parent.spawn((kit.rect(84.0, 110.0, SLATE), at(0.0, 10.0)));
            parent.spawn((kit.rect(70.0, 84.0, Color::srgb(0.16, 0.22, 0.30)), at(0.0, 16.0)));
            parent.spawn((kit.rect(16.0, 8.0, METAL), at(0.0, -42.0)));
        }
        _ => {
            parent.spawn((kit.rect(80.0, 80.0, PLASTIC_WHITE), at(0.0, 0.0)));
        }
    }
}

/// Trophy cup for the celebration overlay.
pub fn spawn_trophy(parent: &mut ChildSpawnerCommands, kit: &mut ShapeKit) {
    let gold = Color::srgb(1.0, 0.76, 0.03);
    parent.spawn((kit.ellipse(34.0, 28.0, gold), at(0.0, 16.0)));
    parent.spawn((kit.ring(14.0, 20.0, gold), at(-38.0, 20.0)));
    parent.spawn((kit.ring(14.0, 20.0, gold), at(38.0, 20.0)));
    parent.spawn((kit.rect(12.0, 22.0, gold), at(0.0, -16.0)));
    parent.spawn((kit.rect(44.0, 10.0, WOOD), at(0.0, -32.0)));
}
