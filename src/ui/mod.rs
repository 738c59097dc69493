pub mod keymap;
pub mod render;
pub mod terminal;
pub mod theme;

pub use keymap::{char_to_app_event, key_to_app_event};
pub use terminal::TuiManager;
