//! Skin editor tool
//!
//! Grid-paint canvas over the player skin bitmap: left-click (or drag)
//! paints the selected palette color, the swatch row picks the color, and
//! the save button or the S key exports the grid to the well-known path.
//! Clicks outside every region are ignored.

use macroquad::prelude::*;

use super::grid::SkinGrid;
use crate::input::{self, Action};
use crate::ui::{self, Rect};

/// Pixel size of one grid cell on screen
pub const CELL_PX: f32 = 16.0;
/// Pixel size of one palette swatch
pub const SWATCH_PX: f32 = 40.0;
const SWATCH_GAP: f32 = 4.0;

const GRID_LINE: Color = Color::new(0.2, 0.2, 0.2, 1.0);
const BACKDROP: Color = Color::new(0.12, 0.12, 0.13, 1.0);
const STATUS_SECONDS: f32 = 3.0;

/// Fixed paint palette
pub const PALETTE: [[u8; 4]; 8] = [
    [0, 0, 0, 255],
    [255, 255, 255, 255],
    [255, 0, 0, 255],
    [0, 255, 0, 255],
    [0, 0, 255, 255],
    [255, 255, 0, 255],
    [255, 0, 255, 255],
    [0, 255, 255, 255],
];

/// What the editor frame wants the host to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    None,
    /// The grid changed; refresh anything derived from it
    Edited,
    /// Export the grid to the skin file
    SaveRequested,
}

/// Screen regions for one frame of the editor
#[derive(Debug, Clone, Copy)]
pub struct EditorLayout {
    pub canvas: Rect,
    pub palette: Rect,
    pub save: Rect,
}

impl EditorLayout {
    pub fn compute(screen: Rect, grid_w: usize, grid_h: usize) -> Self {
        let canvas_w = grid_w as f32 * CELL_PX;
        let canvas_h = grid_h as f32 * CELL_PX;
        let canvas = Rect::new(screen.x + (screen.w - canvas_w) * 0.5, screen.y + 8.0, canvas_w, canvas_h);

        let n = PALETTE.len() as f32;
        let palette_w = n * SWATCH_PX + (n - 1.0) * SWATCH_GAP;
        let palette = Rect::new(
            screen.x + (screen.w - palette_w) * 0.5,
            canvas.bottom() + 8.0,
            palette_w,
            SWATCH_PX,
        );

        let save = Rect::new(screen.center_x() - 60.0, palette.bottom() + 6.0, 120.0, 22.0);

        Self {
            canvas,
            palette,
            save,
        }
    }

    /// Grid cell under the cursor, if any
    pub fn cell_at(&self, mx: f32, my: f32) -> Option<(usize, usize)> {
        if !self.canvas.contains(mx, my) {
            return None;
        }
        let x = ((mx - self.canvas.x) / CELL_PX) as usize;
        let y = ((my - self.canvas.y) / CELL_PX) as usize;
        Some((x, y))
    }

    /// Palette swatch under the cursor, if any (gaps don't count)
    pub fn swatch_at(&self, mx: f32, my: f32) -> Option<usize> {
        if !self.palette.contains(mx, my) {
            return None;
        }
        let pitch = SWATCH_PX + SWATCH_GAP;
        let index = ((mx - self.palette.x) / pitch) as usize;
        let local = mx - self.palette.x - index as f32 * pitch;
        if index < PALETTE.len() && local < SWATCH_PX {
            Some(index)
        } else {
            None
        }
    }

    fn swatch_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.palette.x + index as f32 * (SWATCH_PX + SWATCH_GAP),
            self.palette.y,
            SWATCH_PX,
            SWATCH_PX,
        )
    }
}

/// State for the skin editor tool
pub struct SkinEditorState {
    /// Selected palette index; green, like the default skin
    pub selected: usize,
    status: Option<(String, f32)>,
}

impl SkinEditorState {
    pub fn new() -> Self {
        Self {
            selected: 3,
            status: None,
        }
    }

    /// Show a transient message at the bottom of the screen
    pub fn set_status(&mut self, text: &str) {
        self.status = Some((text.to_string(), STATUS_SECONDS));
    }

    /// Run one frame of the editor: input, painting, drawing.
    pub fn frame(&mut self, grid: &mut SkinGrid, screen: Rect) -> EditorAction {
        let layout = EditorLayout::compute(screen, grid.width(), grid.height());
        let (mx, my) = mouse_position();
        let mut action = EditorAction::None;

        // Drag-painting: every cell the held cursor crosses gets the color
        if is_mouse_button_down(MouseButton::Left) {
            if let Some((x, y)) = layout.cell_at(mx, my) {
                grid.paint(x, y, PALETTE[self.selected]);
                action = EditorAction::Edited;
            }
        }
        if is_mouse_button_pressed(MouseButton::Left) {
            if let Some(index) = layout.swatch_at(mx, my) {
                self.selected = index;
            }
        }

        clear_background(BACKDROP);
        self.draw_canvas(grid, &layout);
        self.draw_palette(&layout);

        if ui::text_button(layout.save, "Save") || input::pressed(Action::SaveSkin) {
            action = EditorAction::SaveRequested;
        }

        self.draw_status(screen);
        action
    }

    fn draw_canvas(&self, grid: &SkinGrid, layout: &EditorLayout) {
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let Some([r, g, b, a]) = grid.cell(x, y) else {
                    continue;
                };
                let cx = layout.canvas.x + x as f32 * CELL_PX;
                let cy = layout.canvas.y + y as f32 * CELL_PX;
                draw_rectangle(cx, cy, CELL_PX, CELL_PX, Color::from_rgba(r, g, b, a));
                draw_rectangle_lines(cx, cy, CELL_PX, CELL_PX, 1.0, GRID_LINE);
            }
        }
    }

    fn draw_palette(&self, layout: &EditorLayout) {
        for (index, [r, g, b, a]) in PALETTE.iter().enumerate() {
            let rect = layout.swatch_rect(index);
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, Color::from_rgba(*r, *g, *b, *a));
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, GRID_LINE);
            if index == self.selected {
                draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 3.0, WHITE);
            }
        }
    }

    fn draw_status(&mut self, screen: Rect) {
        draw_text(
            "Tab: back to game    S: save",
            screen.x + 8.0,
            screen.bottom() - 8.0,
            16.0,
            GRAY,
        );
        if let Some((text, mut remaining)) = self.status.take() {
            draw_text(&text, screen.x + 8.0, screen.bottom() - 28.0, 18.0, WHITE);
            remaining -= get_frame_time();
            if remaining > 0.0 {
                self.status = Some((text, remaining));
            }
        }
    }
}
