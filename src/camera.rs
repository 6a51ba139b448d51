use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Layout>()
            .add_systems(Startup, (setup_camera, initial_layout))
            .add_systems(Update, update_layout_on_resize);
    }
}

/// Marker for the single 2D camera both screens render through.
#[derive(Component)]
pub struct MainCamera;

/// Window width below which the compact ("mobile") layout is used.
const MOBILE_BREAKPOINT: f32 = 600.0;

/// Window-derived layout metrics shared by both screens.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub is_mobile: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Layout::from_window_size(960.0, 640.0)
    }
}

impl Layout {
    pub fn from_window_size(width: f32, height: f32) -> Self {
        Layout {
            width,
            height,
            is_mobile: width < MOBILE_BREAKPOINT,
        }
    }

    /// Scale a base font size down on narrow windows.
    pub fn font_size(&self, base: f32) -> f32 {
        if self.width < 400.0 {
            (base * 0.7).floor()
        } else if self.width < MOBILE_BREAKPOINT {
            (base * 0.85).floor()
        } else {
            base
        }
    }

    /// Pick between a compact and a full-size value.
    pub fn pick(&self, mobile: f32, desktop: f32) -> f32 {
        if self.is_mobile { mobile } else { desktop }
    }

    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }

    pub fn half_height(&self) -> f32 {
        self.height * 0.5
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

fn initial_layout(window: Query<&Window, With<PrimaryWindow>>, mut layout: ResMut<Layout>) {
    let Ok(window) = window.single() else {
        return;
    };
    *layout = Layout::from_window_size(window.width(), window.height());
}

fn update_layout_on_resize(
    mut resize_events: MessageReader<WindowResized>,
    mut layout: ResMut<Layout>,
) {
    for event in resize_events.read() {
        let next = Layout::from_window_size(event.width, event.height);
        if next.is_mobile != layout.is_mobile {
            info!(
                "layout switched to {}",
                if next.is_mobile { "mobile" } else { "desktop" }
            );
        }
        *layout = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_splits_mobile_and_desktop() {
        assert!(Layout::from_window_size(599.0, 800.0).is_mobile);
        assert!(!Layout::from_window_size(600.0, 800.0).is_mobile);
        assert!(!Layout::from_window_size(1920.0, 1080.0).is_mobile);
    }

    #[test]
    fn font_size_scales_with_window_width() {
        let narrow = Layout::from_window_size(360.0, 640.0);
        let mobile = Layout::from_window_size(480.0, 640.0);
        let desktop = Layout::from_window_size(1024.0, 768.0);

        assert_eq!(narrow.font_size(30.0), 21.0);
        assert_eq!(mobile.font_size(30.0), 25.0);
        assert_eq!(desktop.font_size(30.0), 30.0);
    }

    #[test]
    fn pick_follows_layout_branch() {
        let mobile = Layout::from_window_size(480.0, 640.0);
        let desktop = Layout::from_window_size(1024.0, 768.0);

        assert_eq!(mobile.pick(55.0, 70.0), 55.0);
        assert_eq!(desktop.pick(55.0, 70.0), 70.0);
    }
}
