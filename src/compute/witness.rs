//! Closest-edge search, penetration extraction, and the contact-pair
//! barycentric lift shared by EPA's termination and the distance query.

use crate::geometry::{point_to_segment, Point, Scalar, Vector2};
use crate::shape::PosedShape;

use super::simplex::{support, Simplex};

const DEFAULT_MAX_ITER: usize = 20;

/// The pair `a1, a2` on shape A and `b1, b2` on shape B whose Minkowski
/// differences form the simplex edge closest to the origin.
#[derive(Clone, Copy, Debug)]
pub struct PenetrationSource {
    pub a1: Point,
    pub a2: Point,
    pub b1: Point,
    pub b2: Point,
}

/// A unit normal (pointing from B into A) and a non-negative penetration
/// depth.
#[derive(Clone, Copy, Debug)]
pub struct PenetrationInfo {
    pub normal: Vector2,
    pub penetration: Scalar,
}

/// A pair of witness points, one on each shape. Empty (both zero) when the
/// shapes have no separation to report.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointPair {
    pub point_a: Point,
    pub point_b: Point,
}

impl PointPair {
    pub fn is_empty(&self) -> bool {
        self.point_a.is_close_enough_to(Point::ZERO) && self.point_b.is_close_enough_to(Point::ZERO)
    }
}

/// Index pair of the simplex edge whose projection of the origin is nearest.
/// Ties (within `EPS_GEOMETRY`) favour the edge whose endpoints have the
/// smaller sum of squared lengths, biasing toward the edge nearer the origin
/// in absolute magnitude; this stabilises EPA on symmetric cases such as
/// ellipse-against-ellipse.
pub fn closest_edge_to_origin(simplex: &Simplex) -> (usize, usize) {
    if simplex.len() == 2 {
        return (0, 1);
    }

    let mut min_dist = Scalar::MAX;
    let mut index1 = 0;
    let mut index2 = 0;

    for i in 0..simplex.len() - 1 {
        let a = simplex.get(i).result;
        let b = simplex.get(i + 1).result;
        let projection = point_to_segment(a, b, Point::ZERO).norm();

        if min_dist > projection {
            index1 = i;
            index2 = i + 1;
            min_dist = projection;
        } else if (min_dist - projection).abs() < crate::geometry::EPS_GEOMETRY {
            let candidate_len = a.norm_squared() + b.norm_squared();
            let current_len =
                simplex.get(index1).result.norm_squared() + simplex.get(index2).result.norm_squared();
            if candidate_len < current_len {
                index1 = i;
                index2 = i + 1;
            }
        }
    }

    (index1, index2)
}

/// Perpendicular of `p2 - p1`, oriented by `point_to_origin`: toward the
/// origin when true, away from it when false. Independent of winding.
pub fn direction_from_edge(p1: Vector2, p2: Vector2, point_to_origin: bool) -> Vector2 {
    let ao = -p1;
    let ab = p2 - p1;
    let mut perpendicular = ab.perpendicular();

    if (ao.dot(perpendicular) < 0.0 && point_to_origin)
        || (ao.dot(perpendicular) > 0.0 && !point_to_origin)
    {
        perpendicular = -perpendicular;
    }
    perpendicular
}

/// Extracts the penetration normal and depth from the closest Minkowski
/// edge's pre-image points.
pub fn penetration_info(source: &PenetrationSource) -> PenetrationInfo {
    let edge1 = source.a1 - source.b1;
    let edge2 = source.a2 - source.b2;
    let normal = direction_from_edge(edge1, edge2, false).unit();
    let origin_to_edge = normal.dot(edge1).abs();

    PenetrationInfo {
        normal: -normal,
        penetration: origin_to_edge,
    }
}

/// Reads off the four pre-image points of the simplex's closest edge.
pub fn dump_source(simplex: &Simplex) -> PenetrationSource {
    let (index1, index2) = closest_edge_to_origin(simplex);
    PenetrationSource {
        a1: simplex.get(index1).point_a,
        a2: simplex.get(index2).point_a,
        b1: simplex.get(index1).point_b,
        b2: simplex.get(index2).point_b,
    }
}

/// Barycentric lift of a penetration/closest-edge source down to a single
/// witness point on each shape.
pub fn dump_points(source: &PenetrationSource) -> PointPair {
    let a = source.a1 - source.b1;
    let b = source.a2 - source.b2;

    let l = b - a;
    let ll = l.dot(l);
    let la = l.dot(a);
    let lambda2 = -la / ll;
    let lambda1 = 1.0 - lambda2;

    let mut point_a = source.a1 * lambda1 + source.a2 * lambda2;
    let mut point_b = source.b1 * lambda1 + source.b2 * lambda2;

    if l.is_close_enough_to(Vector2::ZERO) || lambda2 < 0.0 {
        point_a = source.a1;
        point_b = source.b1;
    }
    if lambda1 < 0.0 {
        point_a = source.a2;
        point_b = source.b2;
    }

    PointPair { point_a, point_b }
}

/// Closest-point query between two non-intersecting shapes: keeps only a
/// 2-simplex (augmented with the sentinel reuse of the closest-edge routine)
/// and refines until a supporting point is already present, exact or within
/// `epsilon`.
pub fn distance(a: &PosedShape, b: &PosedShape) -> PointPair {
    distance_with_params(a, b, DEFAULT_MAX_ITER, crate::geometry::EPS_GEOMETRY as f64)
}

pub fn distance_with_params(
    a: &PosedShape,
    b: &PosedShape,
    max_iter: usize,
    epsilon: f64,
) -> PointPair {
    let mut simplex = Simplex::new();

    let mut direction = b.translation - a.translation;
    simplex.push(support(a, b, direction));
    direction = -direction;
    simplex.push(support(a, b, direction));

    for _ in 0..max_iter {
        direction = direction_from_edge(simplex.get(0).result, simplex.get(1).result, true);
        let w = support(a, b, direction);

        if simplex.contains(&w) {
            break;
        }
        if simplex.fuzzy_contains(&w, epsilon) {
            break;
        }

        simplex.push(w);
        simplex.push(simplex.get(0));
        let (i1, i2) = closest_edge_to_origin(&simplex);
        collapse_to_edge(&mut simplex, i1, i2);
    }

    dump_points(&dump_source(&simplex))
}

/// Reduces a 4-simplex down to the 2-simplex `(closest_1, closest_2)`,
/// discarding the off-edge vertex and the sentinel.
fn collapse_to_edge(simplex: &mut Simplex, closest_1: usize, closest_2: usize) {
    if simplex.len() != 4 {
        return;
    }

    let mut index = None;
    for i in 0..simplex.len() - 1 {
        if i != closest_1 && i != closest_2 {
            index = Some(i);
        }
    }
    let index = index.expect("a 4-simplex always has exactly one vertex off the closest edge");

    simplex.remove(index);
    simplex.remove(simplex.len() - 1);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Point;
    use crate::shape::{Circle, PosedShape, Shape};

    #[test]
    fn closest_edge_of_segment_is_its_only_edge() {
        let point = Shape::Point(Point::ZERO);
        let posed = PosedShape::new(&point, Point::ZERO, 0.0);
        let mut simplex = Simplex::new();
        simplex.push(support(&posed, &posed, Point(1.0, 0.0)));
        simplex.push(support(&posed, &posed, Point(-1.0, 0.0)));
        assert_eq!(closest_edge_to_origin(&simplex), (0, 1));
    }

    #[test]
    fn distance_between_separated_circles() {
        let a = Shape::Circle(Circle::new(1.0));
        let b = Shape::Circle(Circle::new(1.0));
        let posed_a = PosedShape::new(&a, Point(0.0, 0.0), 0.0);
        let posed_b = PosedShape::new(&b, Point(4.0, 0.0), 0.0);
        let pair = distance(&posed_a, &posed_b);
        assert!(pair.point_a.is_close_enough_to(Point(1.0, 0.0)));
        assert!(pair.point_b.is_close_enough_to(Point(3.0, 0.0)));
    }

    #[test]
    fn dump_points_falls_back_to_verbatim_on_degenerate_edge() {
        let source = PenetrationSource {
            a1: Point(1.0, 0.0),
            a2: Point(1.0, 0.0),
            b1: Point(0.0, 0.0),
            b2: Point(0.0, 0.0),
        };
        let pair = dump_points(&source);
        assert!(pair.point_a.is_close_enough_to(Point(1.0, 0.0)));
        assert!(pair.point_b.is_close_enough_to(Point(0.0, 0.0)));
    }
}
