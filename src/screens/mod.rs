/// The two screens of the app and the state that switches between them.
use bevy::prelude::*;

pub mod lessons;
pub mod minigame;

pub use lessons::LessonsPlugin;
pub use minigame::MinigamePlugin;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum Screen {
    /// The five-slide lesson slideshow
    #[default]
    Lessons,
    /// The drag-and-drop puzzle sequence
    Minigame,
}
