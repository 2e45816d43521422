use glam::Vec2;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::Viewport;

/// 2D axis-aligned bounding box over floating-point coordinates.
///
/// Bounds are closed intervals on both axes. The default box is empty
/// (`min` at +infinity, `max` at -infinity) so expanding it with any real
/// point always succeeds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Construct from min and max points directly, without reordering.
    pub const fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// The smallest box containing all of the given points.
    /// With no points this is the empty default box.
    pub fn from_points(points: &[Vec2]) -> Self {
        points
            .iter()
            .fold(Self::default(), |aabb, &p| aabb.expanded_point(p))
    }

    /// A box is valid when `min <= max` on both axes. Clamping two boxes
    /// against each other can produce an invalid (empty) box; check this
    /// before using the result as an iteration range.
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// The vector from the min point to the max point.
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Half the size of the box.
    pub fn extent(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Grow this box to include a point.
    pub fn expand_point(&mut self, p: Vec2) -> &mut Self {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
        self
    }

    fn expanded_point(mut self, p: Vec2) -> Self {
        self.expand_point(p);
        self
    }

    /// Grow this box to include another box.
    pub fn expand(&mut self, other: &Aabb) -> &mut Self {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self
    }

    /// Intersect this box with another in place.
    ///
    /// The result may be invalid if the boxes do not overlap; test with
    /// [`Aabb::is_valid`] before iterating over it.
    pub fn clamp(&mut self, other: &Aabb) -> &mut Self {
        self.min = self.min.max(other.min);
        self.max = self.max.min(other.max);
        self
    }

    /// This box intersected with another. Same validity caveat as
    /// [`Aabb::clamp`].
    pub fn clamped(&self, other: &Aabb) -> Aabb {
        Aabb::from_min_max(self.min.max(other.min), self.max.min(other.max))
    }

    /// Cheap closed-interval overlap test, without computing the
    /// intersection itself.
    pub fn intersect(&self, other: &Aabb) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }

    /// Closed-interval containment test.
    pub fn contains(&self, p: Vec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// The closest point to `p` on or in this box; `p` itself if it is
    /// already inside.
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }

    /// Minimum-translation separation from another box, if they overlap.
    ///
    /// The returned vector is along whichever axis has the smaller
    /// penetration depth; ties prefer the x-axis. `None` when the boxes are
    /// disjoint or merely touching.
    pub fn overlap(&self, other: &Aabb) -> Option<Vec2> {
        let overlap = self.max.min(other.max) - self.min.max(other.min);

        if overlap.x > 0.0 && overlap.y > 0.0 {
            if overlap.x <= overlap.y {
                let x = if self.center().x < other.center().x {
                    self.max.x - other.min.x
                } else {
                    self.min.x - other.max.x
                };
                return Some(Vec2::new(x, 0.0));
            }

            let y = if self.center().y < other.center().y {
                self.max.y - other.min.y
            } else {
                self.min.y - other.max.y
            };
            return Some(Vec2::new(0.0, y));
        }

        None
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self {
            min: Vec2::splat(f32::MAX),
            max: Vec2::splat(f32::MIN),
        }
    }
}

/// Inclusive pixel bounds of a viewport: `max = origin + size - 1`.
/// A 1x1 viewport at the origin covers exactly the point (0, 0).
impl From<Viewport> for Aabb {
    fn from(viewport: Viewport) -> Self {
        Self {
            min: Vec2::new(viewport.x as f32, viewport.y as f32),
            max: Vec2::new(
                (viewport.x as i64 + viewport.width as i64 - 1) as f32,
                (viewport.y as i64 + viewport.height as i64 - 1) as f32,
            ),
        }
    }
}

impl Add<Vec2> for Aabb {
    type Output = Aabb;

    fn add(self, rhs: Vec2) -> Aabb {
        Aabb::from_min_max(self.min + rhs, self.max + rhs)
    }
}

impl AddAssign<Vec2> for Aabb {
    fn add_assign(&mut self, rhs: Vec2) {
        self.min += rhs;
        self.max += rhs;
    }
}

impl Sub<Vec2> for Aabb {
    type Output = Aabb;

    fn sub(self, rhs: Vec2) -> Aabb {
        Aabb::from_min_max(self.min - rhs, self.max - rhs)
    }
}

impl SubAssign<Vec2> for Aabb {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.min -= rhs;
        self.max -= rhs;
    }
}
