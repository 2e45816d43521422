use glam::Vec3;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Packed 8-bit RGBA color.
///
/// The four channels occupy exactly 32 bits with red in the lowest-order byte
/// and alpha in the highest-order byte, so a color can always be viewed as a
/// single `u32` via [`Color::rgba`] / [`Color::from_rgba_u32`].
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    bytemuck::Pod,
    bytemuck::Zeroable,
)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Mask of the red channel in the packed `u32` view.
pub const RED_MASK: u32 = 0x0000_00FF;
pub const GREEN_MASK: u32 = 0x0000_FF00;
pub const BLUE_MASK: u32 = 0x00FF_0000;
pub const ALPHA_MASK: u32 = 0xFF00_0000;

/// Bit offset of the red channel in the packed `u32` view.
pub const RED_SHIFT: u32 = 0;
pub const GREEN_SHIFT: u32 = 8;
pub const BLUE_SHIFT: u32 = 16;
pub const ALPHA_SHIFT: u32 = 24;

impl Color {
    /// Construct a color from red, green, blue, and alpha components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Construct a fully opaque color from red, green, and blue components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Construct a color from its packed `0xAABBGGRR` representation.
    ///
    /// Note the alpha channel occupies the high byte, so `0xFF` is
    /// *transparent* red and opaque black is `0xFF000000`.
    pub const fn from_rgba_u32(rgba: u32) -> Self {
        Self {
            r: ((rgba & RED_MASK) >> RED_SHIFT) as u8,
            g: ((rgba & GREEN_MASK) >> GREEN_SHIFT) as u8,
            b: ((rgba & BLUE_MASK) >> BLUE_SHIFT) as u8,
            a: ((rgba & ALPHA_MASK) >> ALPHA_SHIFT) as u8,
        }
    }

    /// The packed `0xAABBGGRR` view of this color.
    pub const fn rgba(self) -> u32 {
        (self.r as u32) << RED_SHIFT
            | (self.g as u32) << GREEN_SHIFT
            | (self.b as u32) << BLUE_SHIFT
            | (self.a as u32) << ALPHA_SHIFT
    }

    /// Construct a color from normalized floats. Components outside [0, 1]
    /// are clamped, not wrapped.
    pub fn from_floats(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: (r * 255.0).clamp(0.0, 255.0) as u8,
            g: (g * 255.0).clamp(0.0, 255.0) as u8,
            b: (b * 255.0).clamp(0.0, 255.0) as u8,
            a: (a * 255.0).clamp(0.0, 255.0) as u8,
        }
    }

    /// Construct an opaque color from hue (degrees), saturation, and value.
    ///
    /// Hue is normalized into [0, 360); saturation and value are clamped to
    /// [0, 1]. Standard hexagonal sector decomposition, 60 degrees per sector.
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let mut h = h % 360.0;
        if h < 0.0 {
            h += 360.0;
        }
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let c = v * s;
        let m = v - c;
        let h_prime = h / 60.0;
        let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());

        let (r, g, b) = match h_prime as i32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            5 => (c, 0.0, x),
            _ => (0.0, 0.0, 0.0),
        };

        Self::from_floats(r + m, g + m, b + m, 1.0)
    }

    /// Parse an HTML color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`,
    /// or a CSS color name such as `"cornflowerblue"` (case-insensitive).
    ///
    /// Returns `None` if the string is not a recognized color.
    pub fn from_html(html: &str) -> Option<Self> {
        let s = html.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        NAMED_COLORS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, color)| color)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        let v = u32::from_str_radix(hex, 16).ok()?;
        // Shorthand digits expand by repetition: #f80 == #ff8800.
        let nibble = |shift: u32| {
            let n = ((v >> shift) & 0xF) as u8;
            n << 4 | n
        };
        match hex.len() {
            3 => Some(Self::rgb(nibble(8), nibble(4), nibble(0))),
            4 => Some(Self::new(nibble(12), nibble(8), nibble(4), nibble(0))),
            6 => Some(Self::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)),
            8 => Some(Self::new(
                (v >> 24) as u8,
                (v >> 16) as u8,
                (v >> 8) as u8,
                v as u8,
            )),
            _ => None,
        }
    }

    /// This color with the alpha channel replaced.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { a: alpha, ..self }
    }

    /// This color with the alpha channel replaced by a normalized float,
    /// clamped to [0, 1].
    pub fn with_alpha_f32(self, alpha: f32) -> Self {
        self.with_alpha((alpha * 255.0).clamp(0.0, 255.0) as u8)
    }
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

/// Saturating component-wise addition.
impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color {
            r: self.r.saturating_add(rhs.r),
            g: self.g.saturating_add(rhs.g),
            b: self.b.saturating_add(rhs.b),
            a: self.a.saturating_add(rhs.a),
        }
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

/// Saturating component-wise subtraction.
impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        Color {
            r: self.r.saturating_sub(rhs.r),
            g: self.g.saturating_sub(rhs.g),
            b: self.b.saturating_sub(rhs.b),
            a: self.a.saturating_sub(rhs.a),
        }
    }
}

impl SubAssign for Color {
    fn sub_assign(&mut self, rhs: Color) {
        *self = *self - rhs;
    }
}

/// Component-wise multiply normalized by 255, truncating.
/// Multiplying by opaque white is the identity.
impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color {
            r: (self.r as u16 * rhs.r as u16 / 255) as u8,
            g: (self.g as u16 * rhs.g as u16 / 255) as u8,
            b: (self.b as u16 * rhs.b as u16 / 255) as u8,
            a: (self.a as u16 * rhs.a as u16 / 255) as u8,
        }
    }
}

impl MulAssign for Color {
    fn mul_assign(&mut self, rhs: Color) {
        *self = *self * rhs;
    }
}

/// Scalar multiply, each channel clamped to [0, 255].
impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, rhs: f32) -> Color {
        Color {
            r: (self.r as f32 * rhs).clamp(0.0, 255.0) as u8,
            g: (self.g as f32 * rhs).clamp(0.0, 255.0) as u8,
            b: (self.b as f32 * rhs).clamp(0.0, 255.0) as u8,
            a: (self.a as f32 * rhs).clamp(0.0, 255.0) as u8,
        }
    }
}

impl Mul<Color> for f32 {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        rhs * self
    }
}

impl MulAssign<f32> for Color {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

/// Scalar divide. Dividing by zero is a precondition violation.
impl Div<f32> for Color {
    type Output = Color;

    fn div(self, rhs: f32) -> Color {
        debug_assert!(rhs != 0.0, "Color division by zero");
        self * rhs.recip()
    }
}

impl DivAssign<f32> for Color {
    fn div_assign(&mut self, rhs: f32) {
        debug_assert!(rhs != 0.0, "Color division by zero");
        *self *= rhs.recip();
    }
}

/// Component-wise minimum of two colors.
pub fn min(c1: Color, c2: Color) -> Color {
    Color {
        r: c1.r.min(c2.r),
        g: c1.g.min(c2.g),
        b: c1.b.min(c2.b),
        a: c1.a.min(c2.a),
    }
}

/// Component-wise maximum of two colors.
pub fn max(c1: Color, c2: Color) -> Color {
    Color {
        r: c1.r.max(c2.r),
        g: c1.g.max(c2.g),
        b: c1.b.max(c2.b),
        a: c1.a.max(c2.a),
    }
}

/// Weighted sum of three vertex colors by barycentric weights,
/// `c0 * bc.x + c1 * bc.y + c2 * bc.z` per channel, truncated to bytes.
/// Used for per-fragment interpolation across a triangle face.
pub fn interpolate(c0: Color, c1: Color, c2: Color, bc: Vec3) -> Color {
    let mut r = c0.r as f32 * bc.x;
    let mut g = c0.g as f32 * bc.x;
    let mut b = c0.b as f32 * bc.x;
    let mut a = c0.a as f32 * bc.x;

    r = (c1.r as f32).mul_add(bc.y, r);
    g = (c1.g as f32).mul_add(bc.y, g);
    b = (c1.b as f32).mul_add(bc.y, b);
    a = (c1.a as f32).mul_add(bc.y, a);

    r = (c2.r as f32).mul_add(bc.z, r);
    g = (c2.g as f32).mul_add(bc.z, g);
    b = (c2.b as f32).mul_add(bc.z, b);
    a = (c2.a as f32).mul_add(bc.z, a);

    Color::new(r as u8, g as u8, b as u8, a as u8)
}

/// The CSS named colors, all fully opaque.
impl Color {
    pub const ALICE_BLUE: Color = Color::rgb(240, 248, 255);
    pub const ANTIQUE_WHITE: Color = Color::rgb(250, 235, 215);
    pub const AQUA: Color = Color::rgb(0, 255, 255);
    pub const AQUAMARINE: Color = Color::rgb(127, 255, 212);
    pub const AZURE: Color = Color::rgb(240, 255, 255);
    pub const BEIGE: Color = Color::rgb(245, 245, 220);
    pub const BISQUE: Color = Color::rgb(255, 228, 196);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const BLANCHED_ALMOND: Color = Color::rgb(255, 235, 205);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const BLUE_VIOLET: Color = Color::rgb(138, 43, 226);
    pub const BROWN: Color = Color::rgb(165, 42, 42);
    pub const BURLY_WOOD: Color = Color::rgb(222, 184, 135);
    pub const CADET_BLUE: Color = Color::rgb(95, 158, 160);
    pub const CHARTREUSE: Color = Color::rgb(127, 255, 0);
    pub const CHOCOLATE: Color = Color::rgb(210, 105, 30);
    pub const CORAL: Color = Color::rgb(255, 127, 80);
    pub const CORNFLOWER_BLUE: Color = Color::rgb(100, 149, 237);
    pub const CORNSILK: Color = Color::rgb(255, 248, 220);
    pub const CRIMSON: Color = Color::rgb(220, 20, 60);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const DARK_BLUE: Color = Color::rgb(0, 0, 139);
    pub const DARK_CYAN: Color = Color::rgb(0, 139, 139);
    pub const DARK_GOLDEN_ROD: Color = Color::rgb(184, 134, 11);
    pub const DARK_GRAY: Color = Color::rgb(169, 169, 169);
    pub const DARK_GREEN: Color = Color::rgb(0, 100, 0);
    pub const DARK_KHAKI: Color = Color::rgb(189, 183, 107);
    pub const DARK_MAGENTA: Color = Color::rgb(139, 0, 139);
    pub const DARK_OLIVE_GREEN: Color = Color::rgb(85, 107, 47);
    pub const DARK_ORANGE: Color = Color::rgb(255, 140, 0);
    pub const DARK_ORCHID: Color = Color::rgb(153, 50, 204);
    pub const DARK_RED: Color = Color::rgb(139, 0, 0);
    pub const DARK_SALMON: Color = Color::rgb(233, 150, 122);
    pub const DARK_SEA_GREEN: Color = Color::rgb(143, 188, 143);
    pub const DARK_SLATE_BLUE: Color = Color::rgb(72, 61, 139);
    pub const DARK_SLATE_GRAY: Color = Color::rgb(47, 79, 79);
    pub const DARK_TURQUOISE: Color = Color::rgb(0, 206, 209);
    pub const DARK_VIOLET: Color = Color::rgb(148, 0, 211);
    pub const DEEP_PINK: Color = Color::rgb(255, 20, 147);
    pub const DEEP_SKY_BLUE: Color = Color::rgb(0, 191, 255);
    pub const DIM_GRAY: Color = Color::rgb(105, 105, 105);
    pub const DODGER_BLUE: Color = Color::rgb(30, 144, 255);
    pub const FIRE_BRICK: Color = Color::rgb(178, 34, 34);
    pub const FLORAL_WHITE: Color = Color::rgb(255, 250, 240);
    pub const FOREST_GREEN: Color = Color::rgb(34, 139, 34);
    pub const FUCHSIA: Color = Color::rgb(255, 0, 255);
    pub const GAINSBORO: Color = Color::rgb(220, 220, 220);
    pub const GHOST_WHITE: Color = Color::rgb(248, 248, 255);
    pub const GOLD: Color = Color::rgb(255, 215, 0);
    pub const GOLDEN_ROD: Color = Color::rgb(218, 165, 32);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const GREEN_YELLOW: Color = Color::rgb(173, 255, 47);
    pub const HONEY_DEW: Color = Color::rgb(240, 255, 240);
    pub const HOT_PINK: Color = Color::rgb(255, 105, 180);
    pub const INDIAN_RED: Color = Color::rgb(205, 92, 92);
    pub const INDIGO: Color = Color::rgb(75, 0, 130);
    pub const IVORY: Color = Color::rgb(255, 255, 240);
    pub const KHAKI: Color = Color::rgb(240, 230, 140);
    pub const LAVENDER: Color = Color::rgb(230, 230, 250);
    pub const LAVENDER_BLUSH: Color = Color::rgb(255, 240, 245);
    pub const LAWN_GREEN: Color = Color::rgb(124, 252, 0);
    pub const LEMON_CHIFFON: Color = Color::rgb(255, 250, 205);
    pub const LIGHT_BLUE: Color = Color::rgb(173, 216, 230);
    pub const LIGHT_CORAL: Color = Color::rgb(240, 128, 128);
    pub const LIGHT_CYAN: Color = Color::rgb(224, 255, 255);
    pub const LIGHT_GOLDEN_ROD_YELLOW: Color = Color::rgb(250, 250, 210);
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);
    pub const LIGHT_GREEN: Color = Color::rgb(144, 238, 144);
    pub const LIGHT_PINK: Color = Color::rgb(255, 182, 193);
    pub const LIGHT_SALMON: Color = Color::rgb(255, 160, 122);
    pub const LIGHT_SEA_GREEN: Color = Color::rgb(32, 178, 170);
    pub const LIGHT_SKY_BLUE: Color = Color::rgb(135, 206, 250);
    pub const LIGHT_SLATE_GRAY: Color = Color::rgb(119, 136, 153);
    pub const LIGHT_STEEL_BLUE: Color = Color::rgb(176, 196, 222);
    pub const LIGHT_YELLOW: Color = Color::rgb(255, 255, 224);
    pub const LIME: Color = Color::rgb(0, 255, 0);
    pub const LIME_GREEN: Color = Color::rgb(50, 205, 50);
    pub const LINEN: Color = Color::rgb(250, 240, 230);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const MAROON: Color = Color::rgb(128, 0, 0);
    pub const MEDIUM_AQUAMARINE: Color = Color::rgb(102, 205, 170);
    pub const MEDIUM_BLUE: Color = Color::rgb(0, 0, 205);
    pub const MEDIUM_ORCHID: Color = Color::rgb(186, 85, 211);
    pub const MEDIUM_PURPLE: Color = Color::rgb(147, 112, 219);
    pub const MEDIUM_SEA_GREEN: Color = Color::rgb(60, 179, 113);
    pub const MEDIUM_SLATE_BLUE: Color = Color::rgb(123, 104, 238);
    pub const MEDIUM_SPRING_GREEN: Color = Color::rgb(0, 250, 154);
    pub const MEDIUM_TURQUOISE: Color = Color::rgb(72, 209, 204);
    pub const MEDIUM_VIOLET_RED: Color = Color::rgb(199, 21, 133);
    pub const MIDNIGHT_BLUE: Color = Color::rgb(25, 25, 112);
    pub const MINT_CREAM: Color = Color::rgb(245, 255, 250);
    pub const MISTY_ROSE: Color = Color::rgb(255, 228, 225);
    pub const MOCCASIN: Color = Color::rgb(255, 228, 181);
    pub const NAVAJO_WHITE: Color = Color::rgb(255, 222, 173);
    pub const NAVY: Color = Color::rgb(0, 0, 128);
    pub const OLD_LACE: Color = Color::rgb(253, 245, 230);
    pub const OLIVE: Color = Color::rgb(128, 128, 0);
    pub const OLIVE_DRAB: Color = Color::rgb(107, 142, 35);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const ORANGE_RED: Color = Color::rgb(255, 69, 0);
    pub const ORCHID: Color = Color::rgb(218, 112, 214);
    pub const PALE_GOLDEN_ROD: Color = Color::rgb(238, 232, 170);
    pub const PALE_GREEN: Color = Color::rgb(152, 251, 152);
    pub const PALE_TURQUOISE: Color = Color::rgb(175, 238, 238);
    pub const PALE_VIOLET_RED: Color = Color::rgb(219, 112, 147);
    pub const PAPAYA_WHIP: Color = Color::rgb(255, 239, 213);
    pub const PEACH_PUFF: Color = Color::rgb(255, 218, 185);
    pub const PERU: Color = Color::rgb(205, 133, 63);
    pub const PINK: Color = Color::rgb(255, 192, 203);
    pub const PLUM: Color = Color::rgb(221, 160, 221);
    pub const POWDER_BLUE: Color = Color::rgb(176, 224, 230);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const REBECCA_PURPLE: Color = Color::rgb(102, 51, 153);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const ROSY_BROWN: Color = Color::rgb(188, 143, 143);
    pub const ROYAL_BLUE: Color = Color::rgb(65, 105, 225);
    pub const SADDLE_BROWN: Color = Color::rgb(139, 69, 19);
    pub const SALMON: Color = Color::rgb(250, 128, 114);
    pub const SANDY_BROWN: Color = Color::rgb(244, 164, 96);
    pub const SEA_GREEN: Color = Color::rgb(46, 139, 87);
    pub const SEASHELL: Color = Color::rgb(255, 245, 238);
    pub const SIENNA: Color = Color::rgb(160, 82, 45);
    pub const SILVER: Color = Color::rgb(192, 192, 192);
    pub const SKY_BLUE: Color = Color::rgb(135, 206, 235);
    pub const SLATE_BLUE: Color = Color::rgb(106, 90, 205);
    pub const SLATE_GRAY: Color = Color::rgb(112, 128, 144);
    pub const SNOW: Color = Color::rgb(255, 250, 250);
    pub const SPRING_GREEN: Color = Color::rgb(0, 255, 127);
    pub const STEEL_BLUE: Color = Color::rgb(70, 130, 180);
    pub const TAN: Color = Color::rgb(210, 180, 140);
    pub const TEAL: Color = Color::rgb(0, 128, 128);
    pub const THISTLE: Color = Color::rgb(216, 191, 216);
    pub const TOMATO: Color = Color::rgb(255, 99, 71);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
    pub const TURQUOISE: Color = Color::rgb(64, 224, 208);
    pub const VIOLET: Color = Color::rgb(238, 130, 238);
    pub const WHEAT: Color = Color::rgb(245, 222, 179);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const WHITE_SMOKE: Color = Color::rgb(245, 245, 245);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const YELLOW_GREEN: Color = Color::rgb(154, 205, 50);
}

/// CSS color names in lookup form, including the "grey" spelling aliases.
/// Immutable after initialization; safe to read from any thread.
pub static NAMED_COLORS: &[(&str, Color)] = &[
    ("aliceblue", Color::ALICE_BLUE),
    ("antiquewhite", Color::ANTIQUE_WHITE),
    ("aqua", Color::AQUA),
    ("aquamarine", Color::AQUAMARINE),
    ("azure", Color::AZURE),
    ("beige", Color::BEIGE),
    ("bisque", Color::BISQUE),
    ("black", Color::BLACK),
    ("blanchedalmond", Color::BLANCHED_ALMOND),
    ("blue", Color::BLUE),
    ("blueviolet", Color::BLUE_VIOLET),
    ("brown", Color::BROWN),
    ("burlywood", Color::BURLY_WOOD),
    ("cadetblue", Color::CADET_BLUE),
    ("chartreuse", Color::CHARTREUSE),
    ("chocolate", Color::CHOCOLATE),
    ("coral", Color::CORAL),
    ("cornflowerblue", Color::CORNFLOWER_BLUE),
    ("cornsilk", Color::CORNSILK),
    ("crimson", Color::CRIMSON),
    ("cyan", Color::CYAN),
    ("darkblue", Color::DARK_BLUE),
    ("darkcyan", Color::DARK_CYAN),
    ("darkgoldenrod", Color::DARK_GOLDEN_ROD),
    ("darkgray", Color::DARK_GRAY),
    ("darkgreen", Color::DARK_GREEN),
    ("darkgrey", Color::DARK_GRAY),
    ("darkkhaki", Color::DARK_KHAKI),
    ("darkmagenta", Color::DARK_MAGENTA),
    ("darkolivegreen", Color::DARK_OLIVE_GREEN),
    ("darkorange", Color::DARK_ORANGE),
    ("darkorchid", Color::DARK_ORCHID),
    ("darkred", Color::DARK_RED),
    ("darksalmon", Color::DARK_SALMON),
    ("darkseagreen", Color::DARK_SEA_GREEN),
    ("darkslateblue", Color::DARK_SLATE_BLUE),
    ("darkslategray", Color::DARK_SLATE_GRAY),
    ("darkslategrey", Color::DARK_SLATE_GRAY),
    ("darkturquoise", Color::DARK_TURQUOISE),
    ("darkviolet", Color::DARK_VIOLET),
    ("deeppink", Color::DEEP_PINK),
    ("deepskyblue", Color::DEEP_SKY_BLUE),
    ("dimgray", Color::DIM_GRAY),
    ("dimgrey", Color::DIM_GRAY),
    ("dodgerblue", Color::DODGER_BLUE),
    ("firebrick", Color::FIRE_BRICK),
    ("floralwhite", Color::FLORAL_WHITE),
    ("forestgreen", Color::FOREST_GREEN),
    ("fuchsia", Color::FUCHSIA),
    ("gainsboro", Color::GAINSBORO),
    ("ghostwhite", Color::GHOST_WHITE),
    ("gold", Color::GOLD),
    ("goldenrod", Color::GOLDEN_ROD),
    ("gray", Color::GRAY),
    ("green", Color::GREEN),
    ("greenyellow", Color::GREEN_YELLOW),
    ("grey", Color::GRAY),
    ("honeydew", Color::HONEY_DEW),
    ("hotpink", Color::HOT_PINK),
    ("indianred", Color::INDIAN_RED),
    ("indigo", Color::INDIGO),
    ("ivory", Color::IVORY),
    ("khaki", Color::KHAKI),
    ("lavender", Color::LAVENDER),
    ("lavenderblush", Color::LAVENDER_BLUSH),
    ("lawngreen", Color::LAWN_GREEN),
    ("lemonchiffon", Color::LEMON_CHIFFON),
    ("lightblue", Color::LIGHT_BLUE),
    ("lightcoral", Color::LIGHT_CORAL),
    ("lightcyan", Color::LIGHT_CYAN),
    ("lightgoldenrodyellow", Color::LIGHT_GOLDEN_ROD_YELLOW),
    ("lightgray", Color::LIGHT_GRAY),
    ("lightgreen", Color::LIGHT_GREEN),
    ("lightgrey", Color::LIGHT_GRAY),
    ("lightpink", Color::LIGHT_PINK),
    ("lightsalmon", Color::LIGHT_SALMON),
    ("lightseagreen", Color::LIGHT_SEA_GREEN),
    ("lightskyblue", Color::LIGHT_SKY_BLUE),
    ("lightslategray", Color::LIGHT_SLATE_GRAY),
    ("lightslategrey", Color::LIGHT_SLATE_GRAY),
    ("lightsteelblue", Color::LIGHT_STEEL_BLUE),
    ("lightyellow", Color::LIGHT_YELLOW),
    ("lime", Color::LIME),
    ("limegreen", Color::LIME_GREEN),
    ("linen", Color::LINEN),
    ("magenta", Color::MAGENTA),
    ("maroon", Color::MAROON),
    ("mediumaquamarine", Color::MEDIUM_AQUAMARINE),
    ("mediumblue", Color::MEDIUM_BLUE),
    ("mediumorchid", Color::MEDIUM_ORCHID),
    ("mediumpurple", Color::MEDIUM_PURPLE),
    ("mediumseagreen", Color::MEDIUM_SEA_GREEN),
    ("mediumslateblue", Color::MEDIUM_SLATE_BLUE),
    ("mediumspringgreen", Color::MEDIUM_SPRING_GREEN),
    ("mediumturquoise", Color::MEDIUM_TURQUOISE),
    ("mediumvioletred", Color::MEDIUM_VIOLET_RED),
    ("midnightblue", Color::MIDNIGHT_BLUE),
    ("mintcream", Color::MINT_CREAM),
    ("mistyrose", Color::MISTY_ROSE),
    ("moccasin", Color::MOCCASIN),
    ("navajowhite", Color::NAVAJO_WHITE),
    ("navy", Color::NAVY),
    ("oldlace", Color::OLD_LACE),
    ("olive", Color::OLIVE),
    ("olivedrab", Color::OLIVE_DRAB),
    ("orange", Color::ORANGE),
    ("orangered", Color::ORANGE_RED),
    ("orchid", Color::ORCHID),
    ("palegoldenrod", Color::PALE_GOLDEN_ROD),
    ("palegreen", Color::PALE_GREEN),
    ("paleturquoise", Color::PALE_TURQUOISE),
    ("palevioletred", Color::PALE_VIOLET_RED),
    ("papayawhip", Color::PAPAYA_WHIP),
    ("peachpuff", Color::PEACH_PUFF),
    ("peru", Color::PERU),
    ("pink", Color::PINK),
    ("plum", Color::PLUM),
    ("powderblue", Color::POWDER_BLUE),
    ("purple", Color::PURPLE),
    ("rebeccapurple", Color::REBECCA_PURPLE),
    ("red", Color::RED),
    ("rosybrown", Color::ROSY_BROWN),
    ("royalblue", Color::ROYAL_BLUE),
    ("saddlebrown", Color::SADDLE_BROWN),
    ("salmon", Color::SALMON),
    ("sandybrown", Color::SANDY_BROWN),
    ("seagreen", Color::SEA_GREEN),
    ("seashell", Color::SEASHELL),
    ("sienna", Color::SIENNA),
    ("silver", Color::SILVER),
    ("skyblue", Color::SKY_BLUE),
    ("slateblue", Color::SLATE_BLUE),
    ("slategray", Color::SLATE_GRAY),
    ("slategrey", Color::SLATE_GRAY),
    ("snow", Color::SNOW),
    ("springgreen", Color::SPRING_GREEN),
    ("steelblue", Color::STEEL_BLUE),
    ("tan", Color::TAN),
    ("teal", Color::TEAL),
    ("thistle", Color::THISTLE),
    ("tomato", Color::TOMATO),
    ("transparent", Color::TRANSPARENT),
    ("turquoise", Color::TURQUOISE),
    ("violet", Color::VIOLET),
    ("wheat", Color::WHEAT),
    ("white", Color::WHITE),
    ("whitesmoke", Color::WHITE_SMOKE),
    ("yellow", Color::YELLOW),
    ("yellowgreen", Color::YELLOW_GREEN),
];
