//! Arm/dot rectangle computation and sub-pixel alignment offsets.
//!
//! The formulas reproduce the original preview renderer exactly, including
//! its quirks: arm length truncation, the one-pixel compensation for
//! crosshairs larger than size 2, and the two independent half-pixel
//! offsets that keep odd-width strokes on pixel boundaries.

use crate::CrosshairSettings;

/// A rectangle in fractional canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl RectF {
    /// The rect enlarged by `outline` on every side.
    pub fn inflate(&self, outline: f32) -> RectF {
        RectF {
            x: self.x - outline,
            y: self.y - outline,
            w: self.w + outline * 2.0,
            h: self.h + outline * 2.0,
        }
    }
}

/// Resolved drawing measurements for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Canvas center (canvas_size / 2) on both axes
    pub center: f32,
    /// Arm length after the large-crosshair compensation
    pub arm_length: f32,
    /// Arm stroke width, at least one pixel
    pub arm_width: f32,
    /// Whole-pixel gap between center and each arm
    pub gap: f32,
    /// Outline width, zero when outlines are disabled
    pub outline: f32,
    /// Half-pixel offset applied to the colored strokes
    pub stroke_align: f32,
    /// Half-pixel offset applied to the outline pass
    pub outline_align: f32,
}

pub fn metrics(settings: &CrosshairSettings, canvas_size: u32) -> Metrics {
    let arm_length = (settings.size * 2.0).floor();
    let arm_width = (settings.thickness * 2.0).floor().max(1.0);
    let gap = (settings.gap + 4.0).ceil();

    // One-pixel compensation for larger crosshairs; the cutoff truncates
    // the size like the original renderer does.
    let arm_length = if settings.size.trunc() > 2.0 {
        arm_length + 1.0
    } else {
        arm_length
    };

    let outline = if settings.draw_outline {
        settings.outline_thickness
    } else {
        0.0
    };

    Metrics {
        center: canvas_size as f32 / 2.0,
        arm_length,
        arm_width,
        gap,
        outline,
        // Odd stroke widths need a half-pixel shift to land on boundaries.
        // The outline pass carries its own shift so its rounding stays
        // isolated from the main stroke's.
        stroke_align: (arm_width as i32 % 2) as f32 / 2.0,
        outline_align: arm_width / 2.0 - (arm_width / 2.0).floor(),
    }
}

/// The four arm rectangles in draw order: right, left, bottom, top.
/// The top arm is omitted for T-style crosshairs.
pub fn arm_rects(m: &Metrics, t_style: bool) -> Vec<RectF> {
    let c = m.center;
    let half_w = m.arm_width / 2.0;
    let reach = m.arm_length + half_w + m.gap;

    let mut rects = vec![
        RectF {
            x: c + half_w + m.gap,
            y: c - half_w,
            w: m.arm_length,
            h: m.arm_width,
        },
        RectF {
            x: c - reach,
            y: c - half_w,
            w: m.arm_length,
            h: m.arm_width,
        },
        RectF {
            x: c - half_w,
            y: c + half_w + m.gap,
            w: m.arm_width,
            h: m.arm_length,
        },
    ];
    if !t_style {
        rects.push(RectF {
            x: c - half_w,
            y: c - reach,
            w: m.arm_width,
            h: m.arm_length,
        });
    }
    rects
}

/// The centered dot square, `arm_width` on a side.
pub fn dot_rect(m: &Metrics) -> RectF {
    let half_w = m.arm_width / 2.0;
    RectF {
        x: m.center - half_w,
        y: m.center - half_w,
        w: m.arm_width,
        h: m.arm_width,
    }
}
