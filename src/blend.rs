use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A blend mode combines a source color with the destination pixel it is
/// about to replace. Every mode is a pure function of the two colors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    /// Write the source color unconditionally.
    Replace,
    /// Source-over compositing using the source alpha as the mix factor.
    #[default]
    Alpha,
    /// Saturating component-wise addition (glows, light accumulation).
    Additive,
    /// Component-wise multiply normalized by 255 (shadows, masks).
    Multiply,
}

impl BlendMode {
    /// Combine `src` and `dst` into the new destination color.
    ///
    /// `Alpha` uses integer source-over with truncating division:
    /// `c = (src_c * a + dst_c * (255 - a)) / 255` for the color channels and
    /// `a_out = a + dst_a * (255 - a) / 255` for alpha, so an opaque source
    /// replaces the destination exactly and a fully transparent source leaves
    /// it untouched.
    pub fn blend(self, src: Color, dst: Color) -> Color {
        match self {
            BlendMode::Replace => src,
            BlendMode::Alpha => {
                let a = src.a as u32;
                let inv = 255 - a;
                Color {
                    r: ((src.r as u32 * a + dst.r as u32 * inv) / 255) as u8,
                    g: ((src.g as u32 * a + dst.g as u32 * inv) / 255) as u8,
                    b: ((src.b as u32 * a + dst.b as u32 * inv) / 255) as u8,
                    a: (a + dst.a as u32 * inv / 255) as u8,
                }
            }
            BlendMode::Additive => src + dst,
            BlendMode::Multiply => src * dst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_opaque_source_replaces() {
        let src = Color::new(10, 20, 30, 255);
        let dst = Color::new(200, 200, 200, 255);
        assert_eq!(BlendMode::Alpha.blend(src, dst), src);
    }

    #[test]
    fn test_alpha_transparent_source_keeps_destination() {
        let src = Color::new(10, 20, 30, 0);
        let dst = Color::new(200, 200, 200, 255);
        assert_eq!(BlendMode::Alpha.blend(src, dst), dst);
    }

    #[test]
    fn test_alpha_half_transparent_red_over_blue() {
        // Pins the integer rounding policy: truncating division by 255.
        let src = Color::new(255, 0, 0, 128);
        let dst = Color::new(0, 0, 255, 255);
        let out = BlendMode::Alpha.blend(src, dst);
        assert_eq!(out, Color::new(128, 0, 127, 255));
    }

    #[test]
    fn test_alpha_over_transparent_destination() {
        let src = Color::new(100, 100, 100, 128);
        let dst = Color::new(0, 0, 0, 0);
        let out = BlendMode::Alpha.blend(src, dst);
        assert_eq!(out.a, 128);
    }

    #[test]
    fn test_additive_saturates() {
        let out = BlendMode::Additive.blend(Color::new(200, 10, 0, 255), Color::new(100, 10, 5, 255));
        assert_eq!(out, Color::new(255, 20, 5, 255));
    }

    #[test]
    fn test_multiply_by_white_is_identity() {
        let dst = Color::new(12, 34, 56, 255);
        assert_eq!(BlendMode::Multiply.blend(Color::WHITE, dst), dst);
    }

    #[test]
    fn test_replace_ignores_destination() {
        let src = Color::new(1, 2, 3, 4);
        assert_eq!(BlendMode::Replace.blend(src, Color::WHITE), src);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&BlendMode::Alpha).unwrap(), "\"alpha\"");
        let mode: BlendMode = serde_json::from_str("\"additive\"").unwrap();
        assert_eq!(mode, BlendMode::Additive);
    }
}
