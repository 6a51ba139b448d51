//! Lessons screen: five educational slides with clamped navigation,
//! progress dots, and a play button on the final slide.

use bevy::prelude::*;

use crate::camera::Layout;
use crate::game::pages::PageTracker;
use crate::screens::Screen;
use crate::visual::buttons::{BLUE, GOLD, ORANGE, spawn_circle_button};
use crate::visual::shapes::{self, ShapeKit};
use crate::visual::tween::{Floating, Pulse, ScaleIn, UiScaleIn};

pub struct LessonsPlugin;

impl Plugin for LessonsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(Screen::Lessons), (reset_pages, setup_chrome))
            .add_systems(
                Update,
                (
                    nav_button_actions,
                    sync_slide,
                    sync_nav_visibility,
                    sync_dots,
                    spin,
                )
                    .chain()
                    .run_if(in_state(Screen::Lessons)),
            );
    }
}

const HEADER_BLUE: Color = Color::srgb(0.13, 0.59, 0.95);
const TITLE_BLUE: Color = Color::srgb(0.08, 0.40, 0.75);
const BODY_GRAY: Color = Color::srgb(0.27, 0.35, 0.39);

#[derive(Component, Debug, Clone, Copy)]
enum NavButton {
    Back,
    Next,
    Play,
}

#[derive(Component)]
struct PageDot(usize);

/// Root entity of the currently shown slide's world content.
#[derive(Component)]
struct SlideRoot;

/// Slow rotation for the circuit diagram on the last slide.
#[derive(Component)]
struct Spinning(f32);

fn reset_pages(mut commands: Commands) {
    commands.insert_resource(PageTracker::default());
}

fn setup_chrome(mut commands: Commands, layout: Res<Layout>) {
    let btn = layout.pick(55.0, 70.0);
    let play = layout.pick(75.0, 90.0);

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                ..default()
            },
            DespawnOnExit(Screen::Lessons),
        ))
        .with_children(|parent| {
            // Header band with the screen title.
            parent
                .spawn((
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Px(layout.pick(90.0, 110.0)),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BackgroundColor(HEADER_BLUE),
                ))
                .with_children(|header| {
                    header.spawn((
                        Text::new("Electricity!"),
                        TextFont {
                            font_size: layout.font_size(layout.pick(28.0, 36.0)),
                            ..default()
                        },
                        TextColor(Color::WHITE),
                        UiScaleIn::new(0.4),
                    ));
                });

            // Spacer over the world-space slide content.
            parent.spawn(Node {
                flex_grow: 1.0,
                ..default()
            });

            // Nav row: back on the left, play centered, next on the right.
            parent
                .spawn(Node {
                    width: Val::Percent(100.0),
                    justify_content: JustifyContent::SpaceBetween,
                    align_items: AlignItems::Center,
                    padding: UiRect::horizontal(Val::Px(layout.pick(25.0, 50.0))),
                    ..default()
                })
                .with_children(|row| {
                    spawn_circle_button(
                        row,
                        NavButton::Back,
                        "<",
                        btn,
                        layout.font_size(26.0),
                        ORANGE,
                    );
                    spawn_circle_button(
                        row,
                        NavButton::Play,
                        ">",
                        play,
                        layout.font_size(32.0),
                        GOLD,
                    );
                    spawn_circle_button(
                        row,
                        NavButton::Next,
                        ">",
                        btn,
                        layout.font_size(26.0),
                        ORANGE,
                    );
                });

            // Page dots.
            parent
                .spawn(Node {
                    column_gap: Val::Px(layout.pick(9.0, 11.0)),
                    margin: UiRect::vertical(Val::Px(12.0)),
                    ..default()
                })
                .with_children(|dots| {
                    for i in 0..PageTracker::default().total() {
                        dots.spawn((
                            PageDot(i),
                            Node {
                                width: Val::Px(13.0),
                                height: Val::Px(13.0),
                                ..default()
                            },
                            BorderRadius::MAX,
                            BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.5)),
                        ));
                    }
                });
        });
}

fn nav_button_actions(
    buttons: Query<(&Interaction, &NavButton), Changed<Interaction>>,
    mut pages: ResMut<PageTracker>,
    mut next_state: ResMut<NextState<Screen>>,
) {
    for (interaction, button) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match button {
            NavButton::Back => {
                pages.back();
            }
            NavButton::Next => {
                // Advancing past the last slide starts the minigame.
                if !pages.next() {
                    next_state.set(Screen::Minigame);
                }
            }
            NavButton::Play => {
                info!("play pressed, starting the minigame");
                next_state.set(Screen::Minigame);
            }
        }
    }
}

fn sync_nav_visibility(
    pages: Res<PageTracker>,
    mut buttons: Query<(&NavButton, &mut Visibility)>,
) {
    if !pages.is_changed() {
        return;
    }
    for (button, mut visibility) in &mut buttons {
        let shown = match button {
            NavButton::Back => !pages.on_first_page(),
            NavButton::Next => !pages.on_last_page(),
            NavButton::Play => pages.on_last_page(),
        };
        *visibility = if shown {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

fn sync_dots(pages: Res<PageTracker>, mut dots: Query<(&PageDot, &mut BackgroundColor)>) {
    if !pages.is_changed() {
        return;
    }
    for (dot, mut bg) in &mut dots {
        *bg = if dot.0 == pages.current() {
            GOLD.into()
        } else {
            Color::srgba(1.0, 1.0, 1.0, 0.5).into()
        };
    }
}

/// Rebuild the slide's world content whenever the page changes.
fn sync_slide(
    mut commands: Commands,
    pages: Res<PageTracker>,
    layout: Res<Layout>,
    old_slides: Query<Entity, With<SlideRoot>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if !pages.is_changed() {
        return;
    }
    for entity in &old_slides {
        commands.entity(entity).despawn();
    }

    let mut kit = ShapeKit::new(&mut meshes, &mut materials);
    let scale = if layout.is_mobile { 0.75 } else { 1.0 };

    commands
        .spawn((
            SlideRoot,
            DespawnOnExit(Screen::Lessons),
            Transform::from_xyz(0.0, -10.0, 0.0).with_scale(Vec3::ZERO),
            Visibility::default(),
            ScaleIn {
                from: 0.0,
                to: scale,
                timer: Timer::from_seconds(0.4, TimerMode::Once),
            },
        ))
        .with_children(|slide| match pages.current() {
            0 => slide_what_is_it(slide, &mut kit, &layout),
            1 => slide_sources(slide, &mut kit, &layout),
            2 => slide_materials(slide, &mut kit, &layout),
            3 => slide_safety(slide, &mut kit, &layout),
            _ => slide_circuits(slide, &mut kit, &layout),
        });
}

fn heading(text: &str, y: f32, layout: &Layout) -> (Text2d, TextFont, TextColor, Transform) {
    (
        Text2d::new(text),
        TextFont {
            font_size: layout.font_size(28.0),
            ..default()
        },
        TextColor(TITLE_BLUE),
        Transform::from_xyz(0.0, y, 0.2),
    )
}

fn body_line(text: &str, y: f32, layout: &Layout) -> (Text2d, TextFont, TextColor, Transform) {
    (
        Text2d::new(text),
        TextFont {
            font_size: layout.font_size(19.0),
            ..default()
        },
        TextColor(BODY_GRAY),
        Transform::from_xyz(0.0, y, 0.2),
    )
}

fn slide_what_is_it(slide: &mut ChildSpawnerCommands, kit: &mut ShapeKit, layout: &Layout) {
    slide.spawn((
        kit.circle(85.0, GOLD.with_alpha(0.2)),
        Transform::from_xyz(0.0, 70.0, 0.0),
        Pulse {
            base: 0.9,
            amplitude: 0.25,
            period: 2.0,
            phase: 0.0,
        },
    ));
    slide
        .spawn((
            Transform::from_xyz(0.0, 70.0, 0.1),
            Visibility::default(),
            Floating {
                anchor: Vec2::new(0.0, 70.0),
                amplitude: 6.0,
                period: 1.6,
                phase: 0.0,
            },
        ))
        .with_children(|bolt| shapes::spawn_bolt(bolt, kit, 2.0));

    slide.spawn(heading("What is electricity?", -40.0, layout));
    slide.spawn(body_line("It is the energy that lights our lamps", -85.0, layout));
    slide.spawn(body_line("and makes our toys go!", -112.0, layout));
}

fn slide_sources(slide: &mut ChildSpawnerCommands, kit: &mut ShapeKit, layout: &Layout) {
    // Sun, wind, water, battery in a 2x2 grid.
    let cells: [(f32, f32, Color); 4] = [
        (-90.0, 95.0, Color::srgb(1.0, 0.60, 0.0)),
        (90.0, 95.0, Color::srgb(0.30, 0.69, 0.31)),
        (-90.0, 5.0, BLUE),
        (90.0, 5.0, Color::srgb(0.61, 0.15, 0.69)),
    ];
    for (i, (x, y, color)) in cells.into_iter().enumerate() {
        slide.spawn((
            kit.circle(46.0, color.with_alpha(0.2)),
            Transform::from_xyz(x, y, 0.0),
        ));
        slide
            .spawn((
                Transform::from_xyz(x, y, 0.1),
                Visibility::default(),
                Floating {
                    anchor: Vec2::new(x, y),
                    amplitude: 5.0,
                    period: 1.5 + i as f32 * 0.2,
                    phase: i as f32,
                },
            ))
            .with_children(|cell| match i {
                0 => {
                    cell.spawn((kit.circle(20.0, Color::srgb(1.0, 0.76, 0.03)), Transform::IDENTITY));
                    for ray in 0..8 {
                        let angle = ray as f32 * std::f32::consts::TAU / 8.0;
                        cell.spawn((
                            kit.rect(4.0, 12.0, Color::srgb(1.0, 0.76, 0.03)),
                            Transform::from_xyz(angle.sin() * 30.0, angle.cos() * 30.0, 0.0)
                                .with_rotation(Quat::from_rotation_z(-angle)),
                        ));
                    }
                }
                1 => {
                    for (dy, len) in [(10.0, 44.0), (0.0, 56.0), (-10.0, 38.0)] {
                        cell.spawn((
                            kit.capsule(3.0, len, Color::srgb(0.56, 0.79, 0.9)),
                            Transform::from_xyz(0.0, dy, 0.0).with_rotation(
                                Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
                            ),
                        ));
                    }
                }
                2 => {
                    cell.spawn((kit.circle(16.0, BLUE), Transform::from_xyz(0.0, -6.0, 0.0)));
                    cell.spawn((
                        kit.triangle(
                            Vec2::new(0.0, 26.0),
                            Vec2::new(-14.0, -2.0),
                            Vec2::new(14.0, -2.0),
                            BLUE,
                        ),
                        Transform::IDENTITY,
                    ));
                }
                _ => shapes::spawn_piece_icon(cell, kit, "battery"),
            });
    }

    slide.spawn(heading("Where does it come from?", -90.0, layout));
    slide.spawn(body_line("Sun, wind, water and batteries", -130.0, layout));
}

fn slide_materials(slide: &mut ChildSpawnerCommands, kit: &mut ShapeKit, layout: &Layout) {
    slide.spawn((
        kit.circle(62.0, Color::srgb(0.30, 0.69, 0.31).with_alpha(0.15)),
        Transform::from_xyz(-95.0, 55.0, 0.0),
    ));
    slide
        .spawn((
            Transform::from_xyz(-95.0, 55.0, 0.1),
            Visibility::default(),
            Floating {
                anchor: Vec2::new(-95.0, 55.0),
                amplitude: 6.0,
                period: 1.5,
                phase: 0.0,
            },
        ))
        .with_children(|icon| shapes::spawn_piece_icon(icon, kit, "spoon"));

    slide.spawn((
        kit.circle(62.0, ORANGE.with_alpha(0.15)),
        Transform::from_xyz(95.0, 55.0, 0.0),
    ));
    slide
        .spawn((
            Transform::from_xyz(95.0, 55.0, 0.1),
            Visibility::default(),
            Floating {
                anchor: Vec2::new(95.0, 55.0),
                amplitude: 6.0,
                period: 1.7,
                phase: 1.0,
            },
        ))
        .with_children(|icon| shapes::spawn_piece_icon(icon, kit, "rubber-band"));

    slide.spawn(heading("Conductors and insulators", -25.0, layout));
    slide.spawn(body_line("Metals let electricity through", -65.0, layout));
    slide.spawn(body_line("Plastic and rubber block it", -92.0, layout));
}

fn slide_safety(slide: &mut ChildSpawnerCommands, kit: &mut ShapeKit, layout: &Layout) {
    let red = Color::srgb(0.83, 0.18, 0.18);
    slide.spawn((
        kit.circle(70.0, red.with_alpha(0.15)),
        Transform::from_xyz(0.0, 80.0, 0.0),
    ));
    slide.spawn((
        kit.triangle(
            Vec2::new(0.0, 42.0),
            Vec2::new(-46.0, -32.0),
            Vec2::new(46.0, -32.0),
            GOLD,
        ),
        Transform::from_xyz(0.0, 80.0, 0.1),
    ));
    slide.spawn((
        Text2d::new("!"),
        TextFont {
            font_size: layout.font_size(40.0),
            ..default()
        },
        TextColor(red),
        Transform::from_xyz(0.0, 75.0, 0.2),
    ));

    slide.spawn((
        Text2d::new("Be careful!"),
        TextFont {
            font_size: layout.font_size(32.0),
            ..default()
        },
        TextColor(red),
        Transform::from_xyz(0.0, -15.0, 0.2),
    ));
    slide.spawn(body_line("Never touch plugs with wet hands", -60.0, layout));
    slide.spawn(body_line("Never poke things into outlets", -87.0, layout));
    slide.spawn(body_line("Ask a grown-up for help", -114.0, layout));
}

fn slide_circuits(slide: &mut ChildSpawnerCommands, kit: &mut ShapeKit, layout: &Layout) {
    slide
        .spawn((
            Transform::from_xyz(0.0, 60.0, 0.0),
            Visibility::default(),
            Spinning(0.4),
        ))
        .with_children(|ring| {
            ring.spawn((kit.ring(56.0, 62.0, GOLD.with_alpha(0.6)), Transform::IDENTITY));
        });

    slide
        .spawn((Transform::from_xyz(-60.0, 60.0, 0.1), Visibility::default()))
        .with_children(|icon| shapes::spawn_piece_icon(icon, kit, "battery"));
    slide
        .spawn((
            Transform::from_xyz(60.0, 60.0, 0.1),
            Visibility::default(),
            Pulse {
                base: 0.9,
                amplitude: 0.2,
                period: 1.2,
                phase: 0.0,
            },
        ))
        .with_children(|icon| shapes::spawn_bulb(icon, kit, true));

    slide.spawn(heading("Circuits", -50.0, layout));
    slide.spawn(body_line("Energy travels in a loop", -90.0, layout));
}

fn spin(time: Res<Time>, mut query: Query<(&Spinning, &mut Transform)>) {
    for (spin, mut transform) in &mut query {
        transform.rotate_z(spin.0 * time.delta_secs());
    }
}
