//! Axis-aligned bounding box broad-phase primitive.

use crate::geometry::{Point, Rotation2, Scalar, Vector2};
use crate::shape::PosedShape;

/// An axis-aligned box in world space, stored as a centre position and full
/// `(width, height)` extents. An empty AABB has both extents and the
/// position at zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub position: Point,
    pub width: Scalar,
    pub height: Scalar,
}

impl Aabb {
    pub fn empty() -> Self {
        Self {
            position: Point::ZERO,
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width.abs() < crate::geometry::EPS
            && self.height.abs() < crate::geometry::EPS
            && self.position.is_close_enough_to(Point::ZERO)
    }

    /// Tight box enclosing `shape` in world frame, optionally grown by
    /// `expansion` on every side.
    pub fn from_shape(shape: &PosedShape, expansion: Scalar) -> Self {
        let (half_w, half_h) = half_extents(shape);
        Self {
            position: shape.translation,
            width: 2.0 * half_w + 2.0 * expansion,
            height: 2.0 * half_h + 2.0 * expansion,
        }
    }

    /// Strict overlap test on both axes.
    pub fn overlap(a: &Aabb, b: &Aabb) -> bool {
        let a_min_x = a.position.0 - a.width / 2.0;
        let a_max_x = a.position.0 + a.width / 2.0;
        let b_min_x = b.position.0 - b.width / 2.0;
        let b_max_x = b.position.0 + b.width / 2.0;

        let a_min_y = a.position.1 - a.height / 2.0;
        let a_max_y = a.position.1 + a.height / 2.0;
        let b_min_y = b.position.1 - b.height / 2.0;
        let b_max_y = b.position.1 + b.height / 2.0;

        a_min_x < b_max_x && a_max_x > b_min_x && a_min_y < b_max_y && a_max_y > b_min_y
    }

    pub fn union(a: &Aabb, b: &Aabb) -> Aabb {
        if a.is_empty() {
            return *b;
        }
        if b.is_empty() {
            return *a;
        }

        let a_min_x = a.position.0 - a.width / 2.0;
        let a_max_x = a.position.0 + a.width / 2.0;
        let b_min_x = b.position.0 - b.width / 2.0;
        let b_max_x = b.position.0 + b.width / 2.0;

        let a_min_y = a.position.1 - a.height / 2.0;
        let a_max_y = a.position.1 + a.height / 2.0;
        let b_min_y = b.position.1 - b.height / 2.0;
        let b_max_y = b.position.1 + b.height / 2.0;

        let min_x = a_min_x.min(b_min_x);
        let max_x = a_max_x.max(b_max_x);
        let min_y = a_min_y.min(b_min_y);
        let max_y = a_max_y.max(b_max_y);

        Aabb {
            position: Point((min_x + max_x) / 2.0, (min_y + max_y) / 2.0),
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    pub fn surface_area(&self) -> Scalar {
        2.0 * (self.width + self.height)
    }

    pub fn volume(&self) -> Scalar {
        self.width * self.height
    }

    pub fn is_subset(&self, other: &Aabb) -> bool {
        let self_min_x = self.position.0 - self.width / 2.0;
        let self_max_x = self.position.0 + self.width / 2.0;
        let self_min_y = self.position.1 - self.height / 2.0;
        let self_max_y = self.position.1 + self.height / 2.0;

        let other_min_x = other.position.0 - other.width / 2.0;
        let other_max_x = other.position.0 + other.width / 2.0;
        let other_min_y = other.position.1 - other.height / 2.0;
        let other_max_y = other.position.1 + other.height / 2.0;

        self_min_x >= other_min_x
            && self_max_x <= other_max_x
            && self_min_y >= other_min_y
            && self_max_y <= other_max_y
    }

    /// Slab-method ray intersection, returning the entry point if the ray
    /// (from `origin`, direction `dir`, `dir` need not be normalised) hits
    /// the box at a non-negative parameter.
    pub fn raycast(&self, origin: Point, dir: Vector2) -> Option<Point> {
        let min_x = self.position.0 - self.width / 2.0;
        let max_x = self.position.0 + self.width / 2.0;
        let min_y = self.position.1 - self.height / 2.0;
        let max_y = self.position.1 + self.height / 2.0;

        let mut t_min = Scalar::MIN;
        let mut t_max = Scalar::MAX;

        for (origin_c, dir_c, min_c, max_c) in
            [(origin.0, dir.0, min_x, max_x), (origin.1, dir.1, min_y, max_y)]
        {
            if dir_c.abs() < crate::geometry::EPS {
                if origin_c < min_c || origin_c > max_c {
                    return None;
                }
                continue;
            }

            let inv = dir_c.recip();
            let mut t1 = (min_c - origin_c) * inv;
            let mut t2 = (max_c - origin_c) * inv;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }
            t_min = t_min.max(t1);
            t_max = t_max.min(t2);
            if t_min > t_max {
                return None;
            }
        }

        if t_max < 0.0 {
            return None;
        }
        let t = if t_min >= 0.0 { t_min } else { t_max };
        Some(origin + dir * t)
    }
}

fn half_extents(shape: &PosedShape) -> (Scalar, Scalar) {
    use crate::shape::Shape;

    match shape.shape {
        // A circle's world-frame extent is rotation-invariant; radius is
        // the half-extent on both axes regardless of `shape.rotation`.
        Shape::Circle(_) => shape.shape.local_half_extents(),
        Shape::Ellipse(ellipse) => {
            let (a, b) = (ellipse.a(), ellipse.b());
            let (cos, sin) = (shape.rotation.cos(), shape.rotation.sin());
            (
                ((a * cos).powi(2) + (b * sin).powi(2)).sqrt(),
                ((a * sin).powi(2) + (b * cos).powi(2)).sqrt(),
            )
        }
        Shape::Capsule(capsule) => {
            let (width, height) = (capsule.width(), capsule.height());
            let (radius, local_centre) = if width >= height {
                let radius = height / 2.0;
                (radius, Point(width / 2.0 - radius, 0.0))
            } else {
                let radius = width / 2.0;
                (radius, Point(0.0, height / 2.0 - radius))
            };
            let rotated_centre = Rotation2::new(shape.rotation).apply(local_centre);
            (
                rotated_centre.0.abs() + radius,
                rotated_centre.1.abs() + radius,
            )
        }
        Shape::Point(_) => (0.0, 0.0),
        Shape::Polygon(_) | Shape::Rectangle(_) | Shape::Edge(_) => {
            let points = shape.shape.local_corner_points();
            let rotation = Rotation2::new(shape.rotation);
            let mut min = Point(Scalar::MAX, Scalar::MAX);
            let mut max = Point(Scalar::MIN, Scalar::MIN);
            for point in points {
                let rotated = rotation.apply(point);
                min.0 = min.0.min(rotated.0);
                min.1 = min.1.min(rotated.1);
                max.0 = max.0.max(rotated.0);
                max.1 = max.1.max(rotated.1);
            }
            ((max.0 - min.0) / 2.0, (max.1 - min.1) / 2.0)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shape::{Capsule, Circle, Ellipse, PosedShape, Rectangle, Shape};

    #[test]
    fn circle_aabb_is_tight() {
        let circle = Shape::Circle(Circle::new(2.0));
        let posed = PosedShape::new(&circle, Point(1.0, 1.0), 0.0);
        let aabb = Aabb::from_shape(&posed, 0.0);
        assert!((aabb.width - 4.0).abs() < 1e-9);
        assert!((aabb.height - 4.0).abs() < 1e-9);
        assert!(aabb.position.is_close_enough_to(Point(1.0, 1.0)));
    }

    #[test]
    fn rotated_ellipse_aabb_tracks_the_rotated_axes() {
        // a wide, flat ellipse standing on end after a quarter turn: the box
        // must flip from wide-and-short to narrow-and-tall, not stay flat.
        let ellipse = Shape::Ellipse(Ellipse::new(2.0, 0.1));
        let posed = PosedShape::new(&ellipse, Point::ZERO, std::f64::consts::FRAC_PI_2 as Scalar);
        let aabb = Aabb::from_shape(&posed, 0.0);
        assert!((aabb.width - 0.2).abs() < 1e-6);
        assert!((aabb.height - 4.0).abs() < 1e-6);
    }

    #[test]
    fn rotated_ellipse_aabb_is_sound_against_unrotated_axis_aligned_box() {
        // The bug this guards against: treating the local (unrotated)
        // half-extents as the world-frame box dropped the shape's rotation
        // entirely, producing a box too small to contain the ellipse and
        // making AABB-reject report a false non-overlap.
        let ellipse = Shape::Ellipse(Ellipse::new(2.0, 0.1));
        let posed = PosedShape::new(&ellipse, Point::ZERO, std::f64::consts::FRAC_PI_2 as Scalar);
        let aabb = Aabb::from_shape(&posed, 0.0);

        for i in 0..=8 {
            let theta = std::f64::consts::TAU * (i as f64) / 8.0;
            let boundary = crate::geometry::ellipse_farthest_point(
                2.0,
                0.1,
                Point(theta.cos() as Scalar, theta.sin() as Scalar),
            );
            assert!(boundary.0.abs() <= aabb.width / 2.0 + 1e-6);
            assert!(boundary.1.abs() <= aabb.height / 2.0 + 1e-6);
        }
    }

    #[test]
    fn rotated_capsule_aabb_tracks_the_rotated_axes() {
        // a long horizontal capsule rotated onto its end.
        let capsule = Shape::Capsule(Capsule::new(4.0, 1.0));
        let posed = PosedShape::new(&capsule, Point::ZERO, std::f64::consts::FRAC_PI_2 as Scalar);
        let aabb = Aabb::from_shape(&posed, 0.0);
        assert!((aabb.width - 1.0).abs() < 1e-6);
        assert!((aabb.height - 4.0).abs() < 1e-6);
    }

    #[test]
    fn disjoint_boxes_do_not_overlap() {
        let a = Aabb {
            position: Point(0.0, 0.0),
            width: 1.0,
            height: 1.0,
        };
        let b = Aabb {
            position: Point(5.0, 0.0),
            width: 1.0,
            height: 1.0,
        };
        assert!(!Aabb::overlap(&a, &b));
    }

    #[test]
    fn touching_rectangles_overlap_after_expansion() {
        let rect = Shape::Rectangle(Rectangle::new(1.0, 1.0));
        let posed_a = PosedShape::new(&rect, Point(0.0, 0.0), 0.0);
        let posed_b = PosedShape::new(&rect, Point(1.01, 0.0), 0.0);
        let a = Aabb::from_shape(&posed_a, 0.0);
        let b = Aabb::from_shape(&posed_b, 0.0);
        assert!(!Aabb::overlap(&a, &b));

        let a = Aabb::from_shape(&posed_a, 0.1);
        let b = Aabb::from_shape(&posed_b, 0.1);
        assert!(Aabb::overlap(&a, &b));
    }

    #[test]
    fn union_contains_both_inputs() {
        let a = Aabb {
            position: Point(0.0, 0.0),
            width: 1.0,
            height: 1.0,
        };
        let b = Aabb {
            position: Point(3.0, 0.0),
            width: 1.0,
            height: 1.0,
        };
        let u = Aabb::union(&a, &b);
        assert!(a.is_subset(&u));
        assert!(b.is_subset(&u));
    }

    #[test]
    fn raycast_hits_box_from_outside() {
        let aabb = Aabb {
            position: Point(0.0, 0.0),
            width: 2.0,
            height: 2.0,
        };
        let hit = aabb.raycast(Point(-5.0, 0.0), Point(1.0, 0.0)).unwrap();
        assert!(hit.is_close_enough_to(Point(-1.0, 0.0)));
    }

    #[test]
    fn raycast_misses_box_entirely() {
        let aabb = Aabb {
            position: Point(0.0, 0.0),
            width: 2.0,
            height: 2.0,
        };
        assert!(aabb.raycast(Point(-5.0, 5.0), Point(1.0, 0.0)).is_none());
    }
}
