//! Application state and tool management
//!
//! Two tools, both alive for the whole run: the game and the skin editor.
//! The skin grid is shared state owned here so that edits made in the
//! editor are immediately visible on the player in the game view.

use macroquad::prelude::{FilterMode, Texture2D};

use crate::game::{GameToolState, Tuning};
use crate::skin::{SkinEditorState, SkinGrid};

/// The available tools (fixed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Game,
    SkinEditor,
}

impl Tool {
    /// The tool the switch key toggles to
    pub fn other(self) -> Tool {
        match self {
            Tool::Game => Tool::SkinEditor,
            Tool::SkinEditor => Tool::Game,
        }
    }
}

/// Main application state containing all tool states
pub struct AppState {
    pub active_tool: Tool,
    pub game: GameToolState,
    pub skin_editor: SkinEditorState,

    /// Single source of truth for the player skin bitmap
    pub skin: SkinGrid,
    /// GPU copy of the skin; None until a file is loaded or a cell painted,
    /// which is when the placeholder face gives way to the texture
    pub skin_texture: Option<Texture2D>,
}

impl AppState {
    pub fn new(tuning: Tuning, skin: SkinGrid, skin_texture: Option<Texture2D>) -> Self {
        Self {
            active_tool: Tool::Game,
            game: GameToolState::new(tuning),
            skin_editor: SkinEditorState::new(),
            skin,
            skin_texture,
        }
    }

    /// Rebuild the player texture from the grid after an edit
    pub fn refresh_skin_texture(&mut self) {
        self.skin_texture = Some(texture_from_grid(&self.skin));
    }
}

/// Upload the grid as a nearest-filtered texture (crisp pixels at any scale)
pub fn texture_from_grid(grid: &SkinGrid) -> Texture2D {
    let texture = Texture2D::from_rgba8(
        grid.width() as u16,
        grid.height() as u16,
        &grid.rgba_bytes(),
    );
    texture.set_filter(FilterMode::Nearest);
    texture
}
