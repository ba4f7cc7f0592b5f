//! Crosshair rasterization: a pixel-exact replica of the in-game preview.
//!
//! Everything here is a pure function of `(settings, canvas size)`:
//! geometry computes the arm rectangles and sub-pixel alignment offsets,
//! and the rasterizer fills them into a straight-alpha RGBA [`Pixmap`]
//! with nearest-neighbor coverage and source-over blending.

pub mod geometry;
pub mod raster;

pub use raster::{render, DEFAULT_CANVAS_SIZE};

/// A solid fill color with fractional opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in 0.0..=1.0
    pub alpha: f32,
}

/// A square, row-major RGBA pixel buffer with straight (non-premultiplied)
/// alpha. Freshly created buffers are fully transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA of a single pixel.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// True when every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Source-over composite one pixel with straight alpha.
    fn blend(&mut self, x: i32, y: i32, paint: Paint) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let sa = paint.alpha.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let da = self.data[i + 3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        let src = [paint.r as f32, paint.g as f32, paint.b as f32];
        for c in 0..3 {
            let dc = self.data[i + c] as f32;
            self.data[i + c] = ((src[c] * sa + dc * da * (1.0 - sa)) / out_a).round() as u8;
        }
        self.data[i + 3] = (out_a * 255.0).round() as u8;
    }

    /// Fill a rectangle given in fractional canvas coordinates, shifted by
    /// the caller's alignment offset. Coverage is nearest-neighbor: pixel
    /// columns `round(x)..round(x + w)` and rows `round(y)..round(y + h)`,
    /// with ties rounding toward positive infinity like the original
    /// renderer, clipped to the canvas.
    pub fn fill_rect(&mut self, align: f32, rect: geometry::RectF, paint: Paint) {
        let x0 = js_round(rect.x + align);
        let x1 = js_round(rect.x + align + rect.w);
        let y0 = js_round(rect.y + align);
        let y1 = js_round(rect.y + align + rect.h);
        for y in y0.max(0)..y1.min(self.height as i32) {
            for x in x0.max(0)..x1.min(self.width as i32) {
                self.blend(x, y, paint);
            }
        }
    }
}

/// JavaScript `Math.round`: halves toward positive infinity.
fn js_round(v: f32) -> i32 {
    (v + 0.5).floor() as i32
}
