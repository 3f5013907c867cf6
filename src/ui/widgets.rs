//! Basic UI widgets

use macroquad::prelude::*;

use super::Rect;

const BUTTON_BG: Color = Color::new(0.70, 0.70, 0.70, 1.0);
const BUTTON_BG_HOVER: Color = Color::new(0.80, 0.80, 0.80, 1.0);
const BUTTON_BORDER: Color = Color::new(0.20, 0.20, 0.20, 1.0);

/// Draw text centered on (cx, cy)
pub fn draw_text_centered(text: &str, cx: f32, cy: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    // Round to integer pixels for crisp rendering
    let x = (cx - dims.width * 0.5).round();
    let y = (cy + dims.height * 0.5).round();
    draw_text(text, x, y, font_size, color);
}

/// Draw a labelled button, returns true if clicked this frame
pub fn text_button(rect: Rect, label: &str) -> bool {
    let (mx, my) = mouse_position();
    let hovered = rect.contains(mx, my);

    let bg = if hovered { BUTTON_BG_HOVER } else { BUTTON_BG };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, BUTTON_BORDER);
    draw_text_centered(label, rect.center_x(), rect.center_y(), 18.0, BLACK);

    hovered && is_mouse_button_pressed(MouseButton::Left)
}
