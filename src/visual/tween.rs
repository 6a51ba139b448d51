//! Small component-based animation layer.
//!
//! Everything here is time-sliced interpolation run from the per-frame
//! update loop: looping idle motion (`Floating`, `Pulse`, `Twinkle`) and
//! one-shot moves (`EaseTo`, `ScaleIn`) that remove themselves when done.

use bevy::prelude::*;
use bevy::ui::UiTransform;
use std::f32::consts::TAU;

pub struct TweenPlugin;

impl Plugin for TweenPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                run_floating,
                run_pulse,
                run_twinkle,
                run_ease_to,
                run_scale_in,
                run_ui_pulse,
                run_ui_scale_in,
            ),
        );
    }
}

/// Looping vertical bob around an anchor point.
#[derive(Component, Debug, Clone, Copy)]
pub struct Floating {
    pub anchor: Vec2,
    pub amplitude: f32,
    pub period: f32,
    pub phase: f32,
}

/// Looping scale pulse around a base scale.
#[derive(Component, Debug, Clone, Copy)]
pub struct Pulse {
    pub base: f32,
    pub amplitude: f32,
    pub period: f32,
    pub phase: f32,
}

/// Looping alpha shimmer on a `ColorMaterial`.
#[derive(Component, Debug, Clone, Copy)]
pub struct Twinkle {
    pub base_alpha: f32,
    pub amplitude: f32,
    pub period: f32,
    pub phase: f32,
}

/// One-shot eased translation; removes itself when the timer finishes.
#[derive(Component, Debug, Clone)]
pub struct EaseTo {
    pub from: Vec3,
    pub to: Vec3,
    pub timer: Timer,
}

impl EaseTo {
    pub fn new(from: Vec3, to: Vec3, seconds: f32) -> Self {
        EaseTo {
            from,
            to,
            timer: Timer::from_seconds(seconds, TimerMode::Once),
        }
    }
}

/// Looping scale pulse for UI nodes, driven through `UiTransform` so the
/// layout itself stays put.
#[derive(Component, Debug, Clone, Copy)]
pub struct UiPulse {
    pub base: f32,
    pub amplitude: f32,
    pub period: f32,
    pub phase: f32,
}

/// One-shot entrance pop for a UI node; removes itself when done.
#[derive(Component, Debug, Clone)]
pub struct UiScaleIn {
    pub to: f32,
    pub timer: Timer,
}

impl UiScaleIn {
    pub fn new(seconds: f32) -> Self {
        UiScaleIn {
            to: 1.0,
            timer: Timer::from_seconds(seconds, TimerMode::Once),
        }
    }
}

/// One-shot entrance pop (back-out overshoot); removes itself when done.
#[derive(Component, Debug, Clone)]
pub struct ScaleIn {
    pub from: f32,
    pub to: f32,
    pub timer: Timer,
}

impl ScaleIn {
    pub fn new(seconds: f32) -> Self {
        ScaleIn {
            from: 0.0,
            to: 1.0,
            timer: Timer::from_seconds(seconds, TimerMode::Once),
        }
    }
}

// === Easing math ===

pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Overshooting ease used for entrances (Phaser's `Back.out` shape).
pub fn ease_out_back(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    const C1: f32 = 1.70158;
    const C3: f32 = C1 + 1.0;
    let u = t - 1.0;
    1.0 + C3 * u * u * u + C1 * u * u
}

fn sine(period: f32, phase: f32, elapsed: f32) -> f32 {
    (elapsed * TAU / period.max(f32::EPSILON) + phase).sin()
}

/// Sine shifted into [0, 1] so pulses only ever grow from their base.
fn raised_sine(period: f32, phase: f32, elapsed: f32) -> f32 {
    (sine(period, phase, elapsed) + 1.0) * 0.5
}

// === Systems ===

fn run_floating(time: Res<Time>, mut query: Query<(&Floating, &mut Transform)>) {
    let t = time.elapsed_secs();
    for (float, mut transform) in &mut query {
        let offset = sine(float.period, float.phase, t) * float.amplitude;
        transform.translation.x = float.anchor.x;
        transform.translation.y = float.anchor.y + offset;
    }
}

fn run_pulse(time: Res<Time>, mut query: Query<(&Pulse, &mut Transform)>) {
    let t = time.elapsed_secs();
    for (pulse, mut transform) in &mut query {
        let wave = raised_sine(pulse.period, pulse.phase, t);
        let scale = pulse.base + wave * pulse.amplitude;
        transform.scale = Vec3::splat(scale);
    }
}

fn run_ui_pulse(time: Res<Time>, mut query: Query<(&UiPulse, &mut UiTransform)>) {
    let t = time.elapsed_secs();
    for (pulse, mut ui) in &mut query {
        let wave = raised_sine(pulse.period, pulse.phase, t);
        ui.scale = Vec2::splat(pulse.base + wave * pulse.amplitude);
    }
}

fn run_ui_scale_in(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut UiScaleIn, &mut UiTransform)>,
) {
    for (entity, mut pop, mut ui) in &mut query {
        pop.timer.tick(time.delta());
        let t = ease_out_back(pop.timer.fraction());
        ui.scale = Vec2::splat(pop.to * t);

        if pop.timer.finished() {
            ui.scale = Vec2::splat(pop.to);
            commands.entity(entity).remove::<UiScaleIn>();
        }
    }
}

fn run_twinkle(
    time: Res<Time>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    query: Query<(&Twinkle, &MeshMaterial2d<ColorMaterial>)>,
) {
    let t = time.elapsed_secs();
    for (twinkle, material) in &query {
        let Some(material) = materials.get_mut(&material.0) else {
            continue;
        };
        let wave = raised_sine(twinkle.period, twinkle.phase, t);
        let alpha = (twinkle.base_alpha + wave * twinkle.amplitude).clamp(0.0, 1.0);
        material.color = material.color.with_alpha(alpha);
    }
}

fn run_ease_to(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut EaseTo, &mut Transform)>,
) {
    for (entity, mut ease, mut transform) in &mut query {
        ease.timer.tick(time.delta());
        let t = ease_out_quad(ease.timer.fraction());
        transform.translation = ease.from.lerp(ease.to, t);

        if ease.timer.finished() {
            transform.translation = ease.to;
            commands.entity(entity).remove::<EaseTo>();
        }
    }
}

fn run_scale_in(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut ScaleIn, &mut Transform)>,
) {
    for (entity, mut pop, mut transform) in &mut query {
        pop.timer.tick(time.delta());
        let t = ease_out_back(pop.timer.fraction());
        transform.scale = Vec3::splat(pop.from + (pop.to - pop.from) * t);

        if pop.timer.finished() {
            transform.scale = Vec3::splat(pop.to);
            commands.entity(entity).remove::<ScaleIn>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_quad_hits_endpoints() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        // Decelerating: the first half covers more than half the distance.
        assert!(ease_out_quad(0.5) > 0.5);
    }

    #[test]
    fn ease_out_quad_clamps_out_of_range_input() {
        assert_eq!(ease_out_quad(-2.0), 0.0);
        assert_eq!(ease_out_quad(3.0), 1.0);
    }

    #[test]
    fn ease_out_back_overshoots_then_settles() {
        assert!(ease_out_back(0.0).abs() < 1e-6);
        assert!((ease_out_back(1.0) - 1.0).abs() < 1e-6);

        // Somewhere in the back half the curve exceeds 1.0.
        let overshoot = (1..20)
            .map(|i| ease_out_back(i as f32 / 20.0))
            .fold(f32::MIN, f32::max);
        assert!(overshoot > 1.0);
    }

    #[test]
    fn raised_sine_keeps_pulses_at_or_above_base() {
        // A pulsing badge must never shrink below its base scale.
        for i in 0..100 {
            let wave = raised_sine(1.8, 0.0, i as f32 * 0.07);
            assert!((0.0..=1.0).contains(&wave), "wave {wave} out of range");
        }
        let base = 1.0;
        let scale = base + raised_sine(1.8, 0.0, 0.3) * 0.06;
        assert!(scale >= base);
    }

    #[test]
    fn sine_is_periodic() {
        let a = sine(2.0, 0.3, 0.4);
        let b = sine(2.0, 0.3, 2.4);
        assert!((a - b).abs() < 1e-4);
    }
}
