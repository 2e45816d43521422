use glam::Vec2;

use crate::color::Color;
use crate::math::Aabb;

/// An owned, row-major RGBA pixel buffer.
///
/// The pixel at `(x, y)` lives at linear offset `y * width + x`. Both the
/// rasterizer's source images and its color target have this shape; decoding
/// image files into one is a collaborator's job, not this crate's.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    /// Create an image filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; (width * height) as usize],
        }
    }

    /// Create an image from an existing pixel buffer.
    /// The buffer length must be exactly `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Self {
        assert_eq!(
            pixels.len(),
            (width * height) as usize,
            "pixel buffer length must match image dimensions"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Inclusive pixel bounds: (0, 0) through (width - 1, height - 1).
    pub fn aabb(&self) -> Aabb {
        Aabb::from_min_max(
            Vec2::ZERO,
            Vec2::new(self.width as f32 - 1.0, self.height as f32 - 1.0),
        )
    }

    /// The pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Write the pixel at `(x, y)`. Writes outside the buffer are dropped.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = color;
        }
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn data(&self) -> &[Color] {
        &self.pixels
    }

    pub fn data_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// The pixel buffer as raw bytes, `[r, g, b, a]` per pixel.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// The pixel buffer as packed `0xAABBGGRR` words.
    pub fn as_packed(&self) -> &[u32] {
        bytemuck::cast_slice(&self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_opaque_black() {
        let image = Image::new(2, 2);
        assert_eq!(image.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(image.pixel(1, 1), Some(Color::BLACK));
    }

    #[test]
    fn test_row_major_addressing() {
        let mut image = Image::new(3, 2);
        image.set_pixel(2, 1, Color::RED);
        assert_eq!(image.data()[1 * 3 + 2], Color::RED);
        assert_eq!(image.pixel(2, 1), Some(Color::RED));
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut image = Image::new(2, 2);
        assert_eq!(image.pixel(2, 0), None);
        assert_eq!(image.pixel(0, 2), None);
        image.set_pixel(5, 5, Color::RED); // dropped
        assert!(image.data().iter().all(|&c| c == Color::BLACK));
    }

    #[test]
    fn test_clear_fills_everything() {
        let mut image = Image::new(4, 3);
        image.clear(Color::GREEN);
        assert!(image.data().iter().all(|&c| c == Color::GREEN));
    }

    #[test]
    fn test_aabb_is_inclusive() {
        let image = Image::new(4, 4);
        let aabb = image.aabb();
        assert_eq!(aabb.max, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_byte_view_layout() {
        let image = Image::from_pixels(1, 1, vec![Color::new(1, 2, 3, 4)]);
        assert_eq!(image.as_bytes(), &[1, 2, 3, 4]);
        assert_eq!(image.as_packed(), &[0x0403_0201]);
    }

    #[test]
    #[should_panic]
    fn test_mismatched_buffer_panics() {
        Image::from_pixels(2, 2, vec![Color::BLACK; 3]);
    }
}
