pub mod backdrop;
pub mod buttons;
pub mod shapes;
pub mod tween;
