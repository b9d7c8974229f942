//! Farthest-point projection of a posed shape in a world-space direction.

use crate::geometry::{capsule_farthest_point, ellipse_farthest_point, Point, Rotation2, Vector2};
use crate::shape::{PosedShape, Shape};

/// Farthest point of `shape` in world-space direction `direction`.
///
/// The direction is rotated into the shape's local frame before projecting,
/// and the result (for every variant but `Circle`/`Point`, which are already
/// symmetric/world-space) is rotated back out and translated to world space.
pub fn farthest_point(shape: &PosedShape, direction: Vector2) -> Point {
    // Circle and Point return directly in world space: a circle is
    // rotation-invariant around its own centre, and a point has no extent.
    match shape.shape {
        Shape::Circle(circle) => return direction.unit() * circle.radius() + shape.translation,
        Shape::Point(p) => return shape_to_world(shape, *p),
        _ => {}
    }

    let to_local = Rotation2::new(-shape.rotation);
    let local_direction = to_local.apply(direction);

    let local_target = match shape.shape {
        Shape::Polygon(polygon) => farthest_vertex(polygon.vertices(), local_direction),
        Shape::Rectangle(rect) => farthest_vertex(&rect.vertices(), local_direction),
        Shape::Ellipse(ellipse) => {
            ellipse_farthest_point(ellipse.a(), ellipse.b(), local_direction)
        }
        Shape::Edge(edge) => {
            if edge.start().dot(direction) > edge.end().dot(direction) {
                edge.start()
            } else {
                edge.end()
            }
        }
        Shape::Capsule(capsule) => {
            capsule_farthest_point(capsule.width(), capsule.height(), local_direction)
        }
        Shape::Circle(_) | Shape::Point(_) => unreachable!("handled above"),
    };

    shape_to_world(shape, local_target)
}

/// The vertex maximising `(v - v0) . direction`, breaking ties toward the
/// first vertex encountered.
fn farthest_vertex(vertices: &[Point], direction: Vector2) -> Point {
    let origin = vertices[0];
    let mut target = vertices[0];
    let mut max = 0.0;
    for &vertex in vertices {
        let candidate = (vertex - origin).dot(direction);
        if candidate > max {
            max = candidate;
            target = vertex;
        }
    }
    target
}

fn shape_to_world(shape: &PosedShape, local_point: Point) -> Point {
    Rotation2::new(shape.rotation).apply(local_point) + shape.translation
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shape::{Circle, PosedShape, Polygon, Rectangle, Shape};

    #[test]
    fn circle_farthest_point_along_axis() {
        let circle = Shape::Circle(Circle::new(2.0));
        let posed = PosedShape::new(&circle, Point(0.0, 0.0), 0.0);
        let p = farthest_point(&posed, Point(1.0, 0.0));
        assert!(p.is_close_enough_to(Point(2.0, 0.0)));
    }

    #[test]
    fn rectangle_farthest_corner() {
        let rect = Shape::Rectangle(Rectangle::new(2.0, 2.0));
        let posed = PosedShape::new(&rect, Point(0.0, 0.0), 0.0);
        let p = farthest_point(&posed, Point(1.0, 1.0));
        assert!(p.is_close_enough_to(Point(1.0, 1.0)));
    }

    #[test]
    fn translated_polygon_farthest_point_is_translated() {
        let triangle = Polygon::new(vec![Point(0.0, 0.0), Point(2.0, 0.0), Point(0.0, 2.0)])
            .unwrap();
        let shape = Shape::Polygon(triangle);
        let posed = PosedShape::new(&shape, Point(5.0, 0.0), 0.0);
        let p = farthest_point(&posed, Point(1.0, 0.0));
        assert!(p.is_close_enough_to(Point(7.0, 0.0)));
    }
}
