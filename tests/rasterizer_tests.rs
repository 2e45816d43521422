use glam::IVec2;
use soft_raster::{BlendMode, Color, Image, Rasterizer, Sprite, Viewport};

#[cfg(test)]
mod rasterizer_tests {
    use super::*;

    fn solid_image(width: u32, height: u32, color: Color) -> Image {
        let mut image = Image::new(width, height);
        image.clear(color);
        image
    }

    #[test]
    fn test_partial_clip_scenario() {
        // 4x4 destination, 4x4 fully opaque red sprite at (2, 2), alpha-over
        // on black: only the 2x2 sub-region at rows/cols 2..=3 turns red.
        let source = solid_image(4, 4, Color::RED);
        let mut target = Image::new(4, 4);

        let sprite = Sprite::new(&source).with_blend_mode(BlendMode::Alpha);
        let mut rasterizer = Rasterizer {
            color_target: Some(&mut target),
            clip_rect: Viewport::MAX,
        };
        rasterizer.draw_sprite(&sprite, 2, 2);
        drop(rasterizer);

        for y in 0..4 {
            for x in 0..4 {
                let expected = if x >= 2 && y >= 2 {
                    Color::RED
                } else {
                    Color::BLACK
                };
                assert_eq!(target.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_offscreen_sprite_leaves_buffer_byte_identical() {
        let source = solid_image(8, 8, Color::WHITE);
        let mut target = Image::new(16, 16);
        target.clear(Color::TEAL);
        let before: Vec<u8> = target.as_bytes().to_vec();

        let sprite = Sprite::new(&source);
        let mut rasterizer = Rasterizer {
            color_target: Some(&mut target),
            clip_rect: Viewport::MAX,
        };
        rasterizer.draw_sprite(&sprite, 16, 0);
        rasterizer.draw_sprite(&sprite, 0, 16);
        rasterizer.draw_sprite(&sprite, -8, -8);
        drop(rasterizer);

        assert_eq!(target.as_bytes(), &before[..]);
    }

    #[test]
    fn test_sprite_outside_clip_rect_leaves_buffer_unchanged() {
        let source = solid_image(8, 8, Color::WHITE);
        let mut target = Image::new(32, 32);
        let before = target.clone();

        let sprite = Sprite::new(&source);
        let mut rasterizer = Rasterizer {
            color_target: Some(&mut target),
            clip_rect: Viewport::new(0, 0, 8, 8),
        };
        rasterizer.draw_sprite(&sprite, 16, 16);
        drop(rasterizer);

        assert_eq!(target, before);
    }

    #[test]
    fn test_clear_covers_full_buffer_regardless_of_clip() {
        let mut target = Image::new(16, 16);
        let mut rasterizer = Rasterizer {
            color_target: Some(&mut target),
            clip_rect: Viewport::new(4, 4, 2, 2),
        };
        rasterizer.clear(Color::GREEN);
        drop(rasterizer);

        assert!(target.data().iter().all(|&c| c == Color::GREEN));
    }

    #[test]
    fn test_alpha_over_formula_through_draw_path() {
        // Half-transparent red over opaque blue, truncating integer blend:
        // (255, 0, 0, 128) over (0, 0, 255, 255) -> (128, 0, 127, 255).
        let source = solid_image(2, 2, Color::new(255, 0, 0, 128));
        let mut target = Image::new(2, 2);
        target.clear(Color::new(0, 0, 255, 255));

        let sprite = Sprite::new(&source);
        let mut rasterizer = Rasterizer {
            color_target: Some(&mut target),
            clip_rect: Viewport::MAX,
        };
        rasterizer.draw_sprite(&sprite, 0, 0);
        drop(rasterizer);

        assert_eq!(target.pixel(0, 0), Some(Color::new(128, 0, 127, 255)));
    }

    #[test]
    fn test_clip_rect_restricts_but_does_not_offset_sampling() {
        // Clip away the left half of a sprite with distinct columns; visible
        // pixels must still show the columns that land there.
        let mut source = Image::new(4, 1);
        for x in 0..4 {
            source.set_pixel(x, 0, Color::new(x as u8 * 10, 0, 0, 255));
        }
        // Height 1 would collapse to a sliver, so use a taller copy.
        let mut tall = Image::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                tall.set_pixel(x, y, source.pixel(x, 0).unwrap());
            }
        }

        let mut target = Image::new(8, 8);
        let sprite = Sprite::new(&tall).with_blend_mode(BlendMode::Replace);
        let mut rasterizer = Rasterizer {
            color_target: Some(&mut target),
            clip_rect: Viewport::new(2, 0, 6, 8),
        };
        rasterizer.draw_sprite(&sprite, 0, 0);
        drop(rasterizer);

        // Columns 0 and 1 clipped away; column 2 shows source column 2.
        assert_eq!(target.pixel(1, 0), Some(Color::BLACK));
        assert_eq!(target.pixel(2, 0), Some(Color::new(20, 0, 0, 255)));
        assert_eq!(target.pixel(3, 0), Some(Color::new(30, 0, 0, 255)));
    }

    #[test]
    fn test_tinted_additive_compositing() {
        let source = solid_image(4, 4, Color::new(100, 100, 100, 255));
        let mut target = Image::new(4, 4);
        target.clear(Color::new(200, 0, 0, 255));

        let sprite = Sprite::new(&source)
            .with_color(Color::new(255, 127, 0, 255))
            .with_blend_mode(BlendMode::Additive);
        let mut rasterizer = Rasterizer {
            color_target: Some(&mut target),
            clip_rect: Viewport::MAX,
        };
        rasterizer.draw_sprite(&sprite, 0, 0);
        drop(rasterizer);

        // Tint first (100*255/255, 100*127/255, 100*0/255) = (100, 49, 0),
        // then saturating add onto (200, 0, 0).
        assert_eq!(target.pixel(0, 0), Some(Color::new(255, 49, 0, 255)));
    }

    #[test]
    fn test_sub_rectangle_sprite_with_uv_offset() {
        let mut source = Image::new(8, 8);
        source.set_pixel(5, 6, Color::MAGENTA);
        let mut target = Image::new(4, 4);

        let sprite = Sprite::new(&source)
            .with_uv(IVec2::new(4, 5))
            .with_size(IVec2::new(3, 3))
            .with_blend_mode(BlendMode::Replace);
        let mut rasterizer = Rasterizer {
            color_target: Some(&mut target),
            clip_rect: Viewport::MAX,
        };
        rasterizer.draw_sprite(&sprite, 0, 0);
        drop(rasterizer);

        // Source (5, 6) is at offset (1, 1) within the UV window.
        assert_eq!(target.pixel(1, 1), Some(Color::MAGENTA));
        assert_eq!(target.pixel(0, 0), Some(Color::BLACK));
    }
}
