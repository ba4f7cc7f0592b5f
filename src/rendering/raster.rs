//! The render entry point: style gating, color resolution, and the
//! outline-then-fill pass over the arm and dot rectangles.

use crate::rendering::geometry::{arm_rects, dot_rect, metrics};
use crate::rendering::{Paint, Pixmap};
use crate::CrosshairSettings;

/// Canvas side used by the in-game preview.
pub const DEFAULT_CANVAS_SIZE: u32 = 64;

/// Fixed preset colors for `color_index` 0..=4.
const PRESET_COLORS: [(u8, u8, u8); 5] = [
    (255, 0, 0),   // red
    (0, 255, 0),   // green
    (255, 255, 0), // yellow
    (0, 0, 255),   // blue
    (0, 255, 255), // cyan
];

/// Effective RGB: custom triple for index 5, presets for 0..=4, and the
/// green preset for anything else.
pub fn resolve_color(settings: &CrosshairSettings) -> (u8, u8, u8) {
    match settings.color_index {
        5 => (settings.color_r, settings.color_g, settings.color_b),
        i => PRESET_COLORS
            .get(i as usize)
            .copied()
            .unwrap_or(PRESET_COLORS[1]),
    }
}

/// Rasterize the crosshair into a transparent `canvas_size` × `canvas_size`
/// pixmap.
///
/// Only the two classic static styles (2 and 4) draw geometry; every other
/// style returns the blank image, matching the original preview's observed
/// behavior. Rendering is a single pure pass: nothing here fails, and a
/// `Settings` produced by a failed decode simply draws the stock crosshair.
pub fn render(settings: &CrosshairSettings, canvas_size: u32) -> Pixmap {
    let mut pixmap = Pixmap::new(canvas_size, canvas_size);

    if settings.style != 2 && settings.style != 4 {
        return pixmap;
    }

    let (r, g, b) = resolve_color(settings);
    let alpha = if settings.use_alpha {
        settings.alpha as f32 / 255.0
    } else {
        1.0
    };
    let stroke = Paint { r, g, b, alpha };
    let outline = Paint { r: 0, g: 0, b: 0, alpha };

    let m = metrics(settings, canvas_size);
    let arms = arm_rects(&m, settings.t_style);

    if settings.draw_outline && m.outline > 0.0 {
        for rect in &arms {
            pixmap.fill_rect(m.outline_align, rect.inflate(m.outline), outline);
        }
    }
    for rect in &arms {
        pixmap.fill_rect(m.stroke_align, *rect, stroke);
    }

    if settings.dot {
        let dot = dot_rect(&m);
        if settings.draw_outline && m.outline > 0.0 {
            pixmap.fill_rect(m.outline_align, dot.inflate(m.outline), outline);
        }
        pixmap.fill_rect(m.stroke_align, dot, stroke);
    }

    pixmap
}
