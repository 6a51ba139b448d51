use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::CursorMoved;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LastMousePosition>()
            .add_message::<PointerEvent>()
            .add_systems(Update, (remember_mouse_position, emit_pointer_events));
    }
}

const MOUSE_POINTER_ID: u64 = 0;

/// One pointer stream for the drag systems, whether the player is on a
/// mouse or a touchscreen.
#[derive(Message, Debug, Clone)]
pub struct PointerEvent {
    /// Window (logical) coordinates
    pub position: Vec2,
    pub event_type: PointerEventType,
    /// Touch id, or `MOUSE_POINTER_ID` (0) for the mouse
    pub id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventType {
    Down,
    Move,
    Up,
}

impl PointerEvent {
    fn mouse(position: Vec2, event_type: PointerEventType) -> Self {
        PointerEvent {
            position,
            event_type,
            id: MOUSE_POINTER_ID,
        }
    }

    fn touch(touch: &TouchInput, event_type: PointerEventType) -> Self {
        PointerEvent {
            position: touch.position,
            event_type,
            id: touch.id,
        }
    }

    /// Project the window position into 2D world space.
    pub fn to_world_position(
        &self,
        camera: &Camera,
        camera_transform: &GlobalTransform,
    ) -> Option<Vec2> {
        camera
            .viewport_to_world_2d(camera_transform, self.position)
            .ok()
    }
}

/// Button presses arrive without a position attached, so the most recent
/// cursor position is kept around to pair with them.
#[derive(Resource, Default, Debug, Clone, Copy)]
struct LastMousePosition(Option<Vec2>);

fn remember_mouse_position(
    mut moves: MessageReader<CursorMoved>,
    mut last: ResMut<LastMousePosition>,
) {
    if let Some(latest) = moves.read().last() {
        last.0 = Some(latest.position);
    }
}

fn emit_pointer_events(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    last_mouse: Res<LastMousePosition>,
    mut touches: MessageReader<TouchInput>,
    mut out: MessageWriter<PointerEvent>,
) {
    if let Some(position) = last_mouse.0 {
        if mouse_buttons.just_pressed(MouseButton::Left) {
            out.write(PointerEvent::mouse(position, PointerEventType::Down));
        }
        // Held buttons report a move every frame; the drag system treats a
        // stationary move as a no-op.
        if mouse_buttons.pressed(MouseButton::Left) {
            out.write(PointerEvent::mouse(position, PointerEventType::Move));
        }
        if mouse_buttons.just_released(MouseButton::Left) {
            out.write(PointerEvent::mouse(position, PointerEventType::Up));
        }
    }

    for touch in touches.read() {
        let event_type = match touch.phase {
            TouchPhase::Started => PointerEventType::Down,
            TouchPhase::Moved => PointerEventType::Move,
            TouchPhase::Ended | TouchPhase::Canceled => PointerEventType::Up,
        };
        out.write(PointerEvent::touch(touch, event_type));
    }
}
