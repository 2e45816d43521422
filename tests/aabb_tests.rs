use glam::Vec2;
use soft_raster::math::{Aabb, Viewport};

#[cfg(test)]
mod aabb_tests {
    use super::*;

    #[test]
    fn test_clip_against_self_is_identity() {
        let aabb = Aabb::from_min_max(Vec2::new(-3.0, 2.0), Vec2::new(7.0, 9.0));
        assert_eq!(aabb.clamped(&aabb), aabb);
    }

    #[test]
    fn test_clip_against_containing_region_is_identity() {
        let inner = Aabb::from_min_max(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0));
        let outer = Aabb::from_min_max(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert_eq!(inner.clamped(&outer), inner);
    }

    #[test]
    fn test_clip_produces_invalid_region_when_disjoint() {
        let a = Aabb::from_min_max(Vec2::ZERO, Vec2::ONE);
        let b = Aabb::from_min_max(Vec2::new(3.0, 3.0), Vec2::new(4.0, 4.0));
        let clipped = a.clamped(&b);
        assert!(!clipped.is_valid());
        // The cheap overlap test agrees.
        assert!(!a.intersect(&b));
    }

    #[test]
    fn test_in_place_clamp_matches_clamped() {
        let mut a = Aabb::from_min_max(Vec2::ZERO, Vec2::new(5.0, 5.0));
        let b = Aabb::from_min_max(Vec2::new(2.0, -1.0), Vec2::new(9.0, 4.0));
        let expected = a.clamped(&b);
        a.clamp(&b);
        assert_eq!(a, expected);
    }

    #[test]
    fn test_expanding_a_triangle_of_points() {
        let mut aabb = Aabb::default();
        aabb.expand_point(Vec2::new(0.0, 4.0));
        aabb.expand_point(Vec2::new(3.0, 0.0));
        aabb.expand_point(Vec2::new(-2.0, 2.0));
        assert_eq!(aabb.min, Vec2::new(-2.0, 0.0));
        assert_eq!(aabb.max, Vec2::new(3.0, 4.0));
        assert_eq!(
            aabb,
            Aabb::from_points(&[
                Vec2::new(0.0, 4.0),
                Vec2::new(3.0, 0.0),
                Vec2::new(-2.0, 2.0)
            ])
        );
    }

    #[test]
    fn test_viewport_conversion_uses_inclusive_pixel_bounds() {
        let aabb = Aabb::from(Viewport::new(10, 20, 640, 480));
        assert_eq!(aabb.min, Vec2::new(10.0, 20.0));
        assert_eq!(aabb.max, Vec2::new(649.0, 499.0));
    }

    #[test]
    fn test_max_viewport_covers_any_screen_region() {
        let screen = Aabb::from_min_max(Vec2::ZERO, Vec2::new(1919.0, 1079.0));
        let clip = Aabb::from(Viewport::MAX);
        assert_eq!(screen.clamped(&clip), screen);
    }
}
