//! Minigame screen: the fixed puzzle sequence with drag-and-drop pieces,
//! a score badge, progress stars, success feedback and a final
//! celebration.

use bevy::prelude::*;

use crate::camera::{Layout, MainCamera};
use crate::game::catalog::{PuzzleCatalog, PuzzleDef};
use crate::game::session::{Advance, DropOutcome, GameSession};
use crate::game::zone::DropZone;
use crate::input::{PointerEvent, PointerEventType};
use crate::screens::Screen;
use crate::visual::buttons::{GOLD, GREEN, ORANGE, spawn_circle_button};
use crate::visual::shapes::{self, ShapeKit};
use crate::visual::tween::{EaseTo, Pulse, ScaleIn, UiPulse, UiScaleIn};

pub struct MinigamePlugin;

impl Plugin for MinigamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DragState>()
            .add_systems(Startup, setup_catalog)
            .add_systems(
                OnEnter(Screen::Minigame),
                (reset_session, setup_hud, spawn_current_puzzle).chain(),
            )
            .add_systems(OnExit(Screen::Minigame), clear_drag_state)
            .add_systems(
                Update,
                (
                    back_button_action,
                    handle_drag,
                    advance_after_delay,
                    sync_score_and_stars,
                )
                    .chain()
                    .run_if(in_state(Screen::Minigame)),
            );
    }
}

const HEADER_BLUE: Color = Color::srgb(0.13, 0.59, 0.95);
const TITLE_BLUE: Color = Color::srgb(0.08, 0.40, 0.75);
const BODY_GRAY: Color = Color::srgb(0.27, 0.35, 0.39);

/// Delay between solving a puzzle and the next one appearing, long enough
/// for the success feedback to play out.
const ADVANCE_DELAY_SECS: f32 = 1.5;

/// Grab rectangle around a piece's center, in world units.
const PIECE_HALF_EXTENTS: Vec2 = Vec2::new(58.0, 62.0);

#[derive(Resource, Default)]
struct DragState {
    active: Option<ActiveDrag>,
}

struct ActiveDrag {
    piece: Entity,
    origin: Vec3,
    grab_offset: Vec2,
}

/// Countdown between a solve and the next puzzle spawning.
#[derive(Resource)]
struct AdvanceTimer(Timer);

/// A draggable piece, identified by its catalog id.
#[derive(Component)]
struct Piece {
    id: String,
    home: Vec3,
}

/// Present while the piece can still be grabbed; removed on solve.
#[derive(Component)]
struct Draggable;

/// Everything belonging to the active puzzle; despawned on advance.
#[derive(Component)]
struct PuzzleRoot;

/// The success message panel shown between puzzles.
#[derive(Component)]
struct SuccessOverlay;

#[derive(Component)]
struct BackButton;

#[derive(Component)]
struct ScoreText;

#[derive(Component)]
struct StarSlot(usize);

fn setup_catalog(mut commands: Commands) {
    // Embedded data, validated by tests; a parse failure is a build defect.
    let catalog = PuzzleCatalog::load().expect("embedded puzzle catalog is valid");
    info!("loaded {} puzzles", catalog.len());
    commands.insert_resource(catalog);
}

fn reset_session(mut commands: Commands, catalog: Res<PuzzleCatalog>) {
    commands.insert_resource(GameSession::new(&catalog));
    commands.remove_resource::<AdvanceTimer>();
}

fn clear_drag_state(mut drag: ResMut<DragState>) {
    drag.active = None;
}

fn setup_hud(mut commands: Commands, catalog: Res<PuzzleCatalog>, layout: Res<Layout>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                ..default()
            },
            DespawnOnExit(Screen::Minigame),
        ))
        .with_children(|parent| {
            // Header band: back button, title, score badge.
            parent
                .spawn((
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Px(layout.pick(90.0, 110.0)),
                        justify_content: JustifyContent::SpaceBetween,
                        align_items: AlignItems::Center,
                        padding: UiRect::horizontal(Val::Px(layout.pick(18.0, 30.0))),
                        ..default()
                    },
                    BackgroundColor(HEADER_BLUE),
                ))
                .with_children(|header| {
                    spawn_circle_button(
                        header,
                        BackButton,
                        "<",
                        layout.pick(50.0, 60.0),
                        layout.font_size(24.0),
                        ORANGE,
                    );

                    header.spawn((
                        Text::new("Minigames"),
                        TextFont {
                            font_size: layout.font_size(layout.pick(28.0, 36.0)),
                            ..default()
                        },
                        TextColor(Color::WHITE),
                        UiScaleIn::new(0.4),
                    ));

                    // Score badge.
                    header
                        .spawn((
                            Node {
                                width: Val::Px(layout.pick(55.0, 70.0)),
                                height: Val::Px(layout.pick(55.0, 70.0)),
                                justify_content: JustifyContent::Center,
                                align_items: AlignItems::Center,
                                border: UiRect::all(Val::Px(3.0)),
                                ..default()
                            },
                            BorderRadius::MAX,
                            BorderColor::all(Color::srgba(1.0, 1.0, 1.0, 0.6)),
                            BackgroundColor(GOLD),
                            // Idle breathing.
                            UiPulse {
                                base: 1.0,
                                amplitude: 0.08,
                                period: 1.8,
                                phase: 0.0,
                            },
                        ))
                        .with_children(|badge| {
                            badge.spawn((
                                ScoreText,
                                Text::new("0"),
                                TextFont {
                                    font_size: layout.font_size(layout.pick(18.0, 22.0)),
                                    ..default()
                                },
                                TextColor(Color::WHITE),
                            ));
                        });
                });

            // Progress stars, one slot per puzzle.
            parent
                .spawn(Node {
                    column_gap: Val::Px(10.0),
                    margin: UiRect::top(Val::Px(10.0)),
                    ..default()
                })
                .with_children(|row| {
                    for i in 0..catalog.len() {
                        row.spawn((
                            StarSlot(i),
                            Node {
                                width: Val::Px(layout.pick(16.0, 20.0)),
                                height: Val::Px(layout.pick(16.0, 20.0)),
                                border: UiRect::all(Val::Px(2.0)),
                                ..default()
                            },
                            BorderRadius::MAX,
                            BorderColor::all(GOLD.with_alpha(0.7)),
                            BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.5)),
                        ));
                    }
                });
        });
}

fn back_button_action(
    buttons: Query<&Interaction, (Changed<Interaction>, With<BackButton>)>,
    mut next_state: ResMut<NextState<Screen>>,
) {
    for interaction in &buttons {
        if *interaction == Interaction::Pressed {
            next_state.set(Screen::Lessons);
        }
    }
}

/// Spawn the world-space entities for the session's current puzzle.
fn spawn_current_puzzle(
    mut commands: Commands,
    session: Res<GameSession>,
    catalog: Res<PuzzleCatalog>,
    layout: Res<Layout>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let Some(puzzle) = catalog.get(session.current_puzzle()) else {
        return;
    };
    let mut kit = ShapeKit::new(&mut meshes, &mut materials);
    build_puzzle(&mut commands, &mut kit, puzzle, &layout);
}

fn build_puzzle(
    commands: &mut Commands,
    kit: &mut ShapeKit,
    puzzle: &PuzzleDef,
    layout: &Layout,
) {
    info!("starting puzzle '{}'", puzzle.id);
    let scale = if layout.is_mobile { 0.75 } else { 1.0 };

    // Prompt block under the header.
    commands
        .spawn((
            PuzzleRoot,
            DespawnOnExit(Screen::Minigame),
            Transform::from_xyz(0.0, layout.half_height() - layout.pick(150.0, 180.0), 0.0),
            Visibility::default(),
            ScaleIn::new(0.4),
        ))
        .with_children(|root| {
            root.spawn((
                Text2d::new(puzzle.title.clone()),
                TextFont {
                    font_size: layout.font_size(24.0),
                    ..default()
                },
                TextColor(TITLE_BLUE),
                Transform::from_xyz(0.0, 0.0, 0.2),
            ));
            root.spawn((
                Text2d::new(puzzle.prompt.clone()),
                TextFont {
                    font_size: layout.font_size(15.0),
                    ..default()
                },
                TextColor(BODY_GRAY),
                Transform::from_xyz(0.0, -28.0, 0.2),
            ));
        });

    // Drop zone with its prop, centered slightly above the middle.
    let zone_pos = Vec3::new(0.0, 30.0 * scale, 0.0);
    let zone_size = Vec2::new(150.0, 120.0) * scale;
    commands
        .spawn((
            PuzzleRoot,
            DespawnOnExit(Screen::Minigame),
            DropZone::new(zone_size.x, zone_size.y),
            Transform::from_translation(zone_pos).with_scale(Vec3::splat(scale)),
            Visibility::default(),
        ))
        .with_children(|zone| {
            zone.spawn((
                kit.rect(zone_size.x / scale, zone_size.y / scale, GREEN.with_alpha(0.18)),
                Transform::from_xyz(0.0, 0.0, -0.2),
            ));
            zone.spawn((
                Text2d::new(puzzle.zone_label.clone()),
                TextFont {
                    font_size: layout.font_size(14.0),
                    ..default()
                },
                TextColor(GREEN),
                Transform::from_xyz(0.0, zone_size.y / scale * 0.5 + 16.0, 0.2),
            ));
            shapes::spawn_zone_prop(zone, kit, &puzzle.id);
        });

    // Pieces spread along the bottom. Keep catalog order; the correct one
    // is not visually distinguished.
    let count = puzzle.pieces.len();
    let spacing = layout.pick(130.0, 170.0);
    let row_y = -layout.half_height() + layout.pick(150.0, 170.0);
    for (i, piece) in puzzle.pieces.iter().enumerate() {
        let x = (i as f32 - (count as f32 - 1.0) * 0.5) * spacing;
        let home = Vec3::new(x, row_y, 1.0);

        commands
            .spawn((
                PuzzleRoot,
                DespawnOnExit(Screen::Minigame),
                Piece {
                    id: piece.id.clone(),
                    home,
                },
                Draggable,
                Transform::from_translation(home).with_scale(Vec3::splat(scale)),
                Visibility::default(),
                ScaleIn {
                    from: 0.0,
                    to: scale,
                    timer: Timer::from_seconds(0.4, TimerMode::Once),
                },
            ))
            .with_children(|card| {
                card.spawn((
                    kit.rect(104.0, 112.0, Color::WHITE),
                    Transform::from_xyz(0.0, 0.0, -0.2),
                ));
                card.spawn((
                    kit.rect(110.0, 118.0, HEADER_BLUE.with_alpha(0.35)),
                    Transform::from_xyz(0.0, 0.0, -0.3),
                ));
                shapes::spawn_piece_icon(card, kit, &piece.id);
                card.spawn((
                    Text2d::new(piece.label.clone()),
                    TextFont {
                        font_size: layout.font_size(15.0),
                        ..default()
                    },
                    TextColor(BODY_GRAY),
                    Transform::from_xyz(0.0, -42.0, 0.2),
                ));
            });
    }
}

fn handle_drag(
    mut pointer_events: MessageReader<PointerEvent>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut drag_state: ResMut<DragState>,
    mut session: ResMut<GameSession>,
    mut commands: Commands,
    mut pieces: Query<(Entity, &mut Transform, &Piece), With<Draggable>>,
    zones: Query<(&GlobalTransform, &DropZone)>,
    advancing: Option<Res<AdvanceTimer>>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    // Input is frozen while the success feedback plays; drop anything the
    // player does during the delay instead of replaying it afterwards.
    if advancing.is_some() {
        pointer_events.clear();
        return;
    }

    for event in pointer_events.read() {
        let Some(world_pos) = event.to_world_position(camera, camera_transform) else {
            continue;
        };

        match event.event_type {
            PointerEventType::Down => {
                if drag_state.active.is_some() {
                    continue;
                }
                for (entity, transform, _piece) in &pieces {
                    let center = transform.translation.truncate();
                    let d = (world_pos - center).abs();
                    if d.x <= PIECE_HALF_EXTENTS.x && d.y <= PIECE_HALF_EXTENTS.y {
                        drag_state.active = Some(ActiveDrag {
                            piece: entity,
                            origin: transform.translation,
                            grab_offset: world_pos - center,
                        });
                        // Cancel any return tween still easing this piece home.
                        commands.entity(entity).remove::<EaseTo>();
                        break;
                    }
                }
            }

            PointerEventType::Move => {
                let Some(active) = &drag_state.active else {
                    continue;
                };
                if let Ok((_, mut transform, _)) = pieces.get_mut(active.piece) {
                    let target = world_pos - active.grab_offset;
                    transform.translation = Vec3::new(target.x, target.y, 5.0);
                }
            }

            PointerEventType::Up => {
                let Some(active) = drag_state.active.take() else {
                    continue;
                };
                let Ok((entity, transform, piece)) = pieces.get(active.piece) else {
                    continue;
                };

                let release = transform.translation.truncate();
                let in_zone = zones.iter().any(|(zone_transform, zone)| {
                    zone.contains(zone_transform.translation().truncate(), release)
                });

                match session.try_drop(&piece.id, in_zone) {
                    DropOutcome::Solved { reward } => {
                        info!("puzzle solved with '{}' (+{reward})", piece.id);
                        let zone_center = zones
                            .iter()
                            .next()
                            .map(|(t, _)| t.translation())
                            .unwrap_or(Vec3::ZERO);
                        commands
                            .entity(entity)
                            .remove::<Draggable>()
                            .insert(EaseTo::new(
                                transform.translation,
                                zone_center.with_z(2.0),
                                0.25,
                            ));
                        spawn_success_overlay(&mut commands, "Well done!");
                        commands.insert_resource(AdvanceTimer(Timer::from_seconds(
                            ADVANCE_DELAY_SECS,
                            TimerMode::Once,
                        )));
                    }
                    DropOutcome::Rejected => {
                        info!("'{}' rejected by the zone", piece.id);
                        commands.entity(entity).insert(EaseTo::new(
                            transform.translation,
                            piece.home,
                            0.3,
                        ));
                    }
                    DropOutcome::Missed | DropOutcome::Inert => {
                        commands.entity(entity).insert(EaseTo::new(
                            transform.translation,
                            piece.home,
                            0.35,
                        ));
                    }
                }
            }
        }
    }
}

fn spawn_success_overlay(commands: &mut Commands, message: &str) {
    commands
        .spawn((
            SuccessOverlay,
            DespawnOnExit(Screen::Minigame),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.35)),
            GlobalZIndex(100),
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        width: Val::Px(300.0),
                        height: Val::Px(140.0),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        border: UiRect::all(Val::Px(4.0)),
                        ..default()
                    },
                    BorderRadius::all(Val::Px(16.0)),
                    BorderColor::all(GREEN),
                    BackgroundColor(Color::WHITE),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new(message),
                        TextFont {
                            font_size: 30.0,
                            ..default()
                        },
                        TextColor(GREEN),
                    ));
                });
        });
}

/// Tear down the solved puzzle once the feedback delay elapses, then spawn
/// the next one or the celebration.
fn advance_after_delay(
    time: Res<Time>,
    timer: Option<ResMut<AdvanceTimer>>,
    mut commands: Commands,
    mut session: ResMut<GameSession>,
    catalog: Res<PuzzleCatalog>,
    layout: Res<Layout>,
    old_puzzle: Query<Entity, With<PuzzleRoot>>,
    overlays: Query<Entity, With<SuccessOverlay>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let Some(mut timer) = timer else {
        return;
    };
    timer.0.tick(time.delta());
    if !timer.0.finished() {
        return;
    }

    commands.remove_resource::<AdvanceTimer>();
    for entity in &overlays {
        commands.entity(entity).despawn();
    }

    match session.advance() {
        Advance::Next(index) => {
            for entity in &old_puzzle {
                commands.entity(entity).despawn();
            }
            if let Some(puzzle) = catalog.get(index) {
                let mut kit = ShapeKit::new(&mut meshes, &mut materials);
                build_puzzle(&mut commands, &mut kit, puzzle, &layout);
            }
        }
        Advance::Finished => {
            info!(
                "all puzzles solved, {} stars, final score {}",
                session.stars_lit(),
                session.score()
            );
            for entity in &old_puzzle {
                commands.entity(entity).despawn();
            }
            let mut kit = ShapeKit::new(&mut meshes, &mut materials);
            spawn_celebration(&mut commands, &mut kit, session.score());
        }
        Advance::Blocked => {
            warn!("advance timer fired with nothing to advance");
        }
    }
}

fn spawn_celebration(commands: &mut Commands, kit: &mut ShapeKit, score: u32) {
    // World-space trophy with a pulse...
    commands
        .spawn((
            DespawnOnExit(Screen::Minigame),
            Transform::from_xyz(0.0, 90.0, 1.0),
            Visibility::default(),
            Pulse {
                base: 1.0,
                amplitude: 0.06,
                period: 1.6,
                phase: 0.0,
            },
        ))
        .with_children(|trophy| shapes::spawn_trophy(trophy, kit));

    // ...and the congratulations text below it.
    for (text, y, size, color) in [
        ("Congratulations!", 0.0, 34.0, TITLE_BLUE),
        ("You are an electricity expert!", -44.0, 18.0, BODY_GRAY),
    ] {
        commands.spawn((
            DespawnOnExit(Screen::Minigame),
            Text2d::new(text),
            TextFont {
                font_size: size,
                ..default()
            },
            TextColor(color),
            Transform::from_xyz(0.0, y, 1.0),
        ));
    }
    commands.spawn((
        DespawnOnExit(Screen::Minigame),
        Text2d::new(format!("{score} points")),
        TextFont {
            font_size: 30.0,
            ..default()
        },
        TextColor(GREEN),
        Transform::from_xyz(0.0, -95.0, 1.0),
    ));
}

fn sync_score_and_stars(
    session: Res<GameSession>,
    mut score_text: Query<&mut Text, With<ScoreText>>,
    mut stars: Query<(&StarSlot, &mut BackgroundColor)>,
) {
    if !session.is_changed() {
        return;
    }
    for mut text in &mut score_text {
        text.0 = session.score().to_string();
    }
    for (slot, mut bg) in &mut stars {
        *bg = if session.stars().get(slot.0).copied().unwrap_or(false) {
            GOLD.into()
        } else {
            Color::srgba(1.0, 1.0, 1.0, 0.5).into()
        };
    }
}
