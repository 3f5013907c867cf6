//! Player skin: the pixel grid asset and the editor tool that paints it

pub mod grid;
pub mod skin_editor;

pub use grid::{SkinError, SkinGrid, SKIN_FILE, SKIN_SIZE};
pub use skin_editor::{EditorAction, SkinEditorState};
