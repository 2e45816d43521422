use glam::IVec2;

use crate::blend::BlendMode;
use crate::color::Color;
use crate::image::Image;

/// A rectangular, UV-mapped view into a source image.
///
/// A sprite borrows its source and is immutable once configured; the
/// rasterizer never mutates or outlives one. The UV offset is the top-left
/// sample coordinate within the source, the size is in pixels, and the tint
/// is multiplied into every sampled pixel before blending.
#[derive(Copy, Clone, Debug)]
pub struct Sprite<'a> {
    image: &'a Image,
    uv: IVec2,
    size: IVec2,
    color: Color,
    blend_mode: BlendMode,
}

impl<'a> Sprite<'a> {
    /// A sprite covering the whole source image, untinted, alpha-blended.
    pub fn new(image: &'a Image) -> Self {
        Self {
            image,
            uv: IVec2::ZERO,
            size: IVec2::new(image.width() as i32, image.height() as i32),
            color: Color::WHITE,
            blend_mode: BlendMode::default(),
        }
    }

    /// Set the top-left sample coordinate within the source image.
    pub fn with_uv(mut self, uv: IVec2) -> Self {
        self.uv = uv;
        self
    }

    /// Set the sprite's pixel size. Both components must be positive;
    /// the rasterizer does not defend against degenerate sizes.
    pub fn with_size(mut self, size: IVec2) -> Self {
        debug_assert!(
            size.x > 0 && size.y > 0,
            "sprite size must be positive, got {size}"
        );
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = blend_mode;
        self
    }

    pub fn image(&self) -> &'a Image {
        self.image
    }

    pub fn uv(&self) -> IVec2 {
        self.uv
    }

    pub fn size(&self) -> IVec2 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_whole_image() {
        let image = Image::new(8, 6);
        let sprite = Sprite::new(&image);
        assert_eq!(sprite.uv(), IVec2::ZERO);
        assert_eq!(sprite.size(), IVec2::new(8, 6));
        assert_eq!(sprite.color(), Color::WHITE);
        assert_eq!(sprite.blend_mode(), BlendMode::Alpha);
    }

    #[test]
    fn test_builder_configuration() {
        let image = Image::new(8, 8);
        let sprite = Sprite::new(&image)
            .with_uv(IVec2::new(2, 2))
            .with_size(IVec2::new(4, 4))
            .with_color(Color::RED)
            .with_blend_mode(BlendMode::Additive);
        assert_eq!(sprite.uv(), IVec2::new(2, 2));
        assert_eq!(sprite.size(), IVec2::new(4, 4));
        assert_eq!(sprite.color(), Color::RED);
        assert_eq!(sprite.blend_mode(), BlendMode::Additive);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_zero_size_is_rejected() {
        let image = Image::new(8, 8);
        let _ = Sprite::new(&image).with_size(IVec2::ZERO);
    }
}
