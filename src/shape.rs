//! The closed set of convex shape kinds the narrow-phase engine understands,
//! and the posed-shape view used to place one in world space.

use crate::geometry::{Point, Scalar, Vector2};

mod capsule;
mod circle;
mod edge;
mod ellipse;
mod polygon;
mod rectangle;

pub use capsule::Capsule;
pub use circle::Circle;
pub use edge::Edge;
pub use ellipse::Ellipse;
pub use polygon::Polygon;
pub use rectangle::Rectangle;

#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    #[error("polygon needs at least 3 distinct vertices, found {found}")]
    TooFewVertices { found: usize },
}

/// A convex shape in its own local frame, centred (for the analytic
/// primitives) or positioned (for `Point`/`Edge`/`Polygon`) at the origin of
/// that frame. Closed by design: the engine dispatches over this set by
/// exhaustive case analysis rather than an open trait-object hierarchy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Point(Point),
    Polygon(Polygon),
    Rectangle(Rectangle),
    Circle(Circle),
    Ellipse(Ellipse),
    Edge(Edge),
    Capsule(Capsule),
}

impl Shape {
    /// Centre of mass / geometric centre in the shape's local frame. All
    /// variants other than `Polygon` are already centred at the origin.
    pub fn local_centroid(&self) -> Point {
        match self {
            Shape::Point(p) => *p,
            Shape::Polygon(polygon) => polygon.centroid(),
            Shape::Rectangle(_)
            | Shape::Circle(_)
            | Shape::Ellipse(_)
            | Shape::Capsule(_) => Point::ZERO,
            Shape::Edge(edge) => (edge.start() + edge.end()) / 2.0,
        }
    }

    /// Half-extents `(width, height)` of a tight axis-aligned box around the
    /// shape in its own *local* frame, ignoring rotation entirely. A
    /// rotated ellipse or capsule's world-frame extent is generally larger
    /// than this on one axis and smaller on the other; the AABB primitive
    /// only uses this directly for `Circle`, whose extent is rotation
    /// invariant, and derives rotation-aware extents itself for the other
    /// variants.
    pub fn local_half_extents(&self) -> (Scalar, Scalar) {
        match self {
            Shape::Point(_) => (0.0, 0.0),
            Shape::Circle(circle) => (circle.radius(), circle.radius()),
            Shape::Ellipse(ellipse) => (ellipse.a(), ellipse.b()),
            Shape::Capsule(capsule) => (capsule.width() / 2.0, capsule.height() / 2.0),
            Shape::Rectangle(rect) => (rect.width() / 2.0, rect.height() / 2.0),
            Shape::Polygon(_) | Shape::Edge(_) => {
                // Not meaningful without the full vertex list; callers for
                // these variants go through `local_corner_points` instead.
                (0.0, 0.0)
            }
        }
    }

    /// Local-frame points whose convex hull is the shape, used by the AABB
    /// builder for the variants whose extent isn't a simple half-width/height
    /// pair.
    pub fn local_corner_points(&self) -> Vec<Point> {
        match self {
            Shape::Point(p) => vec![*p],
            Shape::Polygon(polygon) => polygon.vertices().to_vec(),
            Shape::Rectangle(rect) => rect.vertices().to_vec(),
            Shape::Edge(edge) => vec![edge.start(), edge.end()],
            Shape::Circle(_) | Shape::Ellipse(_) | Shape::Capsule(_) => Vec::new(),
        }
    }
}

/// A shape placed in world space: a non-owning reference to its local-frame
/// shape, a world translation, and a rotation in radians. Mutating the pose
/// never mutates the shape it refers to.
#[derive(Clone, Copy, Debug)]
pub struct PosedShape<'a> {
    pub shape: &'a Shape,
    pub translation: Vector2,
    pub rotation: Scalar,
}

impl<'a> PosedShape<'a> {
    pub fn new(shape: &'a Shape, translation: Vector2, rotation: Scalar) -> Self {
        Self {
            shape,
            translation,
            rotation,
        }
    }

    pub fn fuzzy_same_pose_as(&self, other: &PosedShape) -> bool {
        self.translation.is_close_enough_to(other.translation)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_polygon_with_too_few_vertices() {
        let err = Polygon::new(vec![Point(0.0, 0.0), Point(1.0, 1.0)]).unwrap_err();
        assert!(matches!(err, ShapeError::TooFewVertices { found: 2 }));
    }

    #[test]
    fn posed_shape_keeps_a_non_owning_view() {
        let circle = Shape::Circle(Circle::new(1.0));
        let posed = PosedShape::new(&circle, Point(3.0, 0.0), 0.0);
        assert_eq!(posed.translation, Point(3.0, 0.0));
    }
}
