//! xhair — CS2 crosshair share codes, decoded and drawn
//!
//! A small library for turning the game's shareable `CSGO-xxxxx-...`
//! crosshair codes into typed settings and back, plus a deterministic
//! rasterizer that reproduces the in-game preview pixel for pixel.
//!
//! # Features
//!
//! - **Codec**: base-57 share-code string ⇄ 18-byte wire buffer ⇄
//!   [`CrosshairSettings`], with the game's checksum and bit layout
//! - **Rasterizer**: pure-function rendering of the two classic static
//!   styles into a straight-alpha RGBA [`Pixmap`](rendering::Pixmap)
//! - **Forgiving by default**: [`decode`] never fails — malformed input
//!   yields the stock crosshair; [`encode`] degrades to a sentinel string
//!
//! # Example
//!
//! ```
//! use xhair::{decode, encode, render};
//!
//! let settings = decode("CSGO-O4Jsi-V36wY-rTMGK-9w7qF-jQ8WB");
//! let preview = render(&settings, 64);
//! assert_eq!(preview.width(), 64);
//!
//! // Round-trip an edited copy back into a shareable code
//! let mut edited = settings.clone();
//! edited.dot = true;
//! let code = encode(&edited);
//! assert!(code.starts_with("CSGO-"));
//! ```

use serde::{Deserialize, Serialize};

pub mod codec;
pub mod error;
pub mod rendering;

pub use codec::{decode, encode, try_decode, try_encode};
pub use error::{Error, Result};
pub use rendering::render;

/// A fully-typed crosshair configuration.
///
/// Every field corresponds to one slot of the 18-byte wire format: a fixed
/// bit width and, for the fractional fields, a fixed-point scale (0.1 steps
/// for gaps/size/thickness, 0.5 steps for the outline). Values outside a
/// field's representable range are masked down on encode rather than
/// rejected, mirroring the game's own behavior.
///
/// The dynamic-split fields (`recoil`, `split_*`) are carried for
/// round-trip fidelity only; the rasterizer does not consume them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrosshairSettings {
    /// Spacing between the center and each arm; may be negative
    pub gap: f32,
    /// Gap used when the weapon-scaled gap is disabled
    pub fixed_gap: f32,
    /// Black outline stroke width (0.5 steps)
    pub outline_thickness: f32,
    /// Custom color, used when `color_index` is 5
    pub color_r: u8,
    pub color_g: u8,
    pub color_b: u8,
    /// Opacity channel; ignored unless `use_alpha` is set
    pub alpha: u8,
    /// If false, rendering is fully opaque regardless of `alpha`
    pub use_alpha: bool,
    /// 0–4 select a preset color, 5 selects the custom RGB triple
    pub color_index: u8,
    /// Whether a black outline is drawn beneath each colored stroke
    pub draw_outline: bool,
    /// Half-length of each arm before adjustment (0.1 steps, 13 bits)
    pub size: f32,
    /// Arm width (0.1 steps)
    pub thickness: f32,
    /// Rendering style; only 2 and 4 draw visible geometry
    pub style: u8,
    /// Draw a centered square dot
    pub dot: bool,
    /// Whether the gap scales with the equipped weapon
    pub gap_use_weapon_value: bool,
    /// Suppress the top arm (inverted-T crosshair)
    pub t_style: bool,
    /// Dynamic-crosshair recoil flag
    pub recoil: bool,
    /// Dynamic split distance (7 bits)
    pub split_dist: u8,
    /// Dynamic split inner alpha modifier (0.1 steps)
    pub split_alpha_inner: f32,
    /// Dynamic split outer alpha modifier (0.1 steps)
    pub split_alpha_outer: f32,
    /// Dynamic max-distance split ratio (0.1 steps)
    pub split_max_dist_ratio: f32,
}

impl Default for CrosshairSettings {
    /// The stock crosshair, also returned whenever a code cannot be decoded.
    fn default() -> Self {
        Self {
            gap: -2.0,
            fixed_gap: -2.0,
            outline_thickness: 1.0,
            color_r: 50,
            color_g: 250,
            color_b: 50,
            alpha: 255,
            use_alpha: true,
            color_index: 5,
            draw_outline: true,
            size: 2.0,
            thickness: 1.0,
            style: 4,
            dot: false,
            gap_use_weapon_value: false,
            t_style: false,
            recoil: false,
            split_dist: 7,
            split_alpha_inner: 1.0,
            split_alpha_outer: 0.5,
            split_max_dist_ratio: 0.35,
        }
    }
}

impl CrosshairSettings {
    /// Render the settings as the game's console commands, one per line,
    /// in the form crosshair sites surface to players.
    pub fn console_commands(&self) -> String {
        let flag = |b: bool| if b { "1" } else { "0" };
        // Fixed-point cvars print without trailing zeros, like the console does
        let num = |v: f32| {
            if v == v.trunc() {
                format!("{}", v as i32)
            } else {
                format!("{}", v)
            }
        };
        [
            format!("cl_crosshairstyle {}", self.style),
            format!("cl_crosshairsize {}", num(self.size)),
            format!("cl_crosshairthickness {}", num(self.thickness)),
            format!("cl_crosshairgap {}", num(self.gap)),
            format!("cl_fixedcrosshairgap {}", num(self.fixed_gap)),
            format!(
                "cl_crosshairgap_useweaponvalue {}",
                flag(self.gap_use_weapon_value)
            ),
            format!("cl_crosshair_drawoutline {}", flag(self.draw_outline)),
            format!(
                "cl_crosshair_outlinethickness {}",
                num(self.outline_thickness)
            ),
            format!("cl_crosshaircolor {}", self.color_index),
            format!("cl_crosshaircolor_r {}", self.color_r),
            format!("cl_crosshaircolor_g {}", self.color_g),
            format!("cl_crosshaircolor_b {}", self.color_b),
            format!("cl_crosshairusealpha {}", flag(self.use_alpha)),
            format!("cl_crosshairalpha {}", self.alpha),
            format!("cl_crosshairdot {}", flag(self.dot)),
            format!("cl_crosshair_t {}", flag(self.t_style)),
            format!("cl_crosshair_recoil {}", flag(self.recoil)),
            format!("cl_crosshair_dynamic_splitdist {}", self.split_dist),
            format!(
                "cl_crosshair_dynamic_splitalpha_innermod {}",
                num(self.split_alpha_inner)
            ),
            format!(
                "cl_crosshair_dynamic_splitalpha_outermod {}",
                num(self.split_alpha_outer)
            ),
            format!(
                "cl_crosshair_dynamic_maxdist_splitratio {}",
                num(self.split_max_dist_ratio)
            ),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let s = CrosshairSettings::default();
        assert_eq!(s.style, 4);
        assert_eq!(s.color_index, 5);
        assert_eq!((s.color_r, s.color_g, s.color_b), (50, 250, 50));
        assert_eq!(s.gap, -2.0);
        assert_eq!(s.size, 2.0);
        assert!(s.draw_outline);
        assert!(!s.dot);
        assert_eq!(s.split_dist, 7);
    }

    #[test]
    fn test_console_commands_format() {
        let s = CrosshairSettings::default();
        let cmds = s.console_commands();
        assert!(cmds.contains("cl_crosshairstyle 4"));
        assert!(cmds.contains("cl_crosshairgap -2"));
        assert!(cmds.contains("cl_crosshair_dynamic_maxdist_splitratio 0.35"));
        assert!(cmds.contains("cl_crosshairusealpha 1"));
    }
}
