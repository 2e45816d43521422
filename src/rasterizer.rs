use crate::color::Color;
use crate::image::Image;
use crate::math::{Aabb, Viewport};
use crate::sprite::Sprite;

/// Software rasterizer state.
///
/// Both fields are plain state with no validation on write; they are only
/// consulted at draw time. Drawing with no color target configured is a
/// no-op, not an error. Single-threaded by construction: the target is an
/// exclusive borrow and pixel writes are plain stores.
#[derive(Debug, Default)]
pub struct Rasterizer<'a> {
    /// The image to draw to.
    pub color_target: Option<&'a mut Image>,
    /// Restricts drawing to a region of the color target. Defaults to the
    /// maximal viewport, i.e. no clipping.
    pub clip_rect: Viewport,
}

impl<'a> Rasterizer<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the entire color target with `color`.
    ///
    /// Clearing is a full-buffer operation; the clip rectangle does not
    /// apply. No-op without a color target.
    pub fn clear(&mut self, color: Color) {
        if let Some(target) = self.color_target.as_deref_mut() {
            target.clear(color);
        }
    }

    /// Draw `sprite` with its top-left corner at `(x, y)` on the color
    /// target, clipped to the target bounds and the clip rectangle.
    ///
    /// The visible footprint is computed with inclusive integer bounds. A
    /// sprite whose clipped footprint collapses to a single row or column is
    /// skipped entirely, matching the inclusive-bounds clip arithmetic used
    /// throughout.
    pub fn draw_sprite(&mut self, sprite: &Sprite, x: i32, y: i32) {
        let Some(dst) = self.color_target.as_deref_mut() else {
            log::trace!("draw_sprite: no color target configured");
            return;
        };
        let src_image = sprite.image();

        let tint = sprite.color();
        let blend_mode = sprite.blend_mode();
        let clip_aabb = Aabb::from(self.clip_rect);
        let dst_aabb = dst.aabb().clamped(&clip_aabb);
        let size = sprite.size();
        let mut uv = sprite.uv();

        // Visible sub-rectangle of the sprite's footprint, inclusive bounds.
        let clip_left = (dst_aabb.min.x as i32).max(x);
        let clip_top = (dst_aabb.min.y as i32).max(y);
        let clip_right = (dst_aabb.max.x as i32).min(x + size.x - 1);
        let clip_bottom = (dst_aabb.max.y as i32).min(y + size.y - 1);

        if clip_left >= clip_right || clip_top >= clip_bottom {
            log::trace!("draw_sprite: footprint fully clipped at ({x}, {y})");
            return;
        }

        // Shift the UV origin by the same amount clipping shifted the
        // footprint, so sampling starts at the first visible source pixel.
        uv.x += clip_left - x;
        uv.y += clip_top - y;

        let src_width = src_image.width() as i32;
        let dst_width = dst.width() as i32;
        let src = src_image.data();
        let dst = dst.data_mut();

        for dy in clip_top..=clip_bottom {
            for dx in clip_left..=clip_right {
                let u = uv.x + (dx - clip_left);
                let v = uv.y + (dy - clip_top);

                let s = src[(v * src_width + u) as usize] * tint;
                let d = dst[(dy * dst_width + dx) as usize];

                dst[(dy * dst_width + dx) as usize] = blend_mode.blend(s, d);
            }
        }
    }
}
