//! Action-based keyboard input
//!
//! Maps macroquad key polling onto the fixed set of game/editor actions.
//! Keyboard only - the input surface is directional keys, jump, confirm,
//! cancel, tool switching and the editor save key.

use macroquad::prelude::*;

/// All actions that can be triggered by input
///
/// Key mappings:
/// - Left/Right arrows = move
/// - Space = jump
/// - Enter = confirm/start
/// - Escape = cancel/back (quits from the menu)
/// - Tab = switch tool (game <-> skin editor)
/// - S = save skin (editor only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Confirm,
    Cancel,
    SwitchTool,
    SaveSkin,
}

impl Action {
    fn key(self) -> KeyCode {
        match self {
            Action::MoveLeft => KeyCode::Left,
            Action::MoveRight => KeyCode::Right,
            Action::Jump => KeyCode::Space,
            Action::Confirm => KeyCode::Enter,
            Action::Cancel => KeyCode::Escape,
            Action::SwitchTool => KeyCode::Tab,
            Action::SaveSkin => KeyCode::S,
        }
    }
}

/// Check if an action's key is currently held down
pub fn down(action: Action) -> bool {
    is_key_down(action.key())
}

/// Check if an action's key was just pressed this frame
pub fn pressed(action: Action) -> bool {
    is_key_pressed(action.key())
}
