//! The Expanding Polytope Algorithm: refines a GJK-terminal simplex known to
//! contain the origin down to the Minkowski-boundary edge nearest it.

use crate::geometry::EPS_GEOMETRY;
use crate::shape::PosedShape;

use super::simplex::{support, Simplex};
use super::witness::{closest_edge_to_origin, direction_from_edge};

const DEFAULT_MAX_ITER: usize = 20;

/// Expands `simplex` (already known to enclose the origin) toward the
/// Minkowski-difference boundary.
pub fn epa(a: &PosedShape, b: &PosedShape, simplex: &Simplex) -> Simplex {
    epa_with_params(a, b, simplex, DEFAULT_MAX_ITER, EPS_GEOMETRY as f64)
}

pub fn epa_with_params(
    a: &PosedShape,
    b: &PosedShape,
    simplex: &Simplex,
    max_iter: usize,
    epsilon: f64,
) -> Simplex {
    let mut simplex = simplex.clone();

    for _ in 0..=max_iter {
        let (index1, index2) = closest_edge_to_origin(&simplex);
        let p1 = simplex.get(index1).result;
        let p2 = simplex.get(index2).result;

        let mut normal = direction_from_edge(p1, p2, false).unit();
        if crate::geometry::is_point_on_segment(p1, p2, crate::geometry::Point::ZERO) {
            normal = -normal;
        }

        let candidate = support(a, b, normal);

        if simplex.contains(&candidate) || simplex.fuzzy_contains(&candidate, epsilon) {
            break;
        }

        simplex.insert(index1, candidate);
    }

    simplex
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compute::witness::{dump_points, dump_source, penetration_info};
    use crate::compute::gjk::gjk;
    use crate::geometry::Point;
    use crate::shape::{Circle, Shape};

    #[test]
    fn epa_on_overlapping_circles_finds_expected_depth() {
        let a = Shape::Circle(Circle::new(1.0));
        let b = Shape::Circle(Circle::new(1.0));
        let posed_a = PosedShape::new(&a, Point(0.0, 0.0), 0.0);
        let posed_b = PosedShape::new(&b, Point(1.5, 0.0), 0.0);

        let (intersects, simplex) = gjk(&posed_a, &posed_b);
        assert!(intersects);

        let refined = epa(&posed_a, &posed_b, &simplex);
        let source = dump_source(&refined);
        let info = penetration_info(&source);

        assert!((info.penetration - 0.5).abs() < 1e-3);

        let contacts = dump_points(&source);
        assert!(!contacts.is_empty());
    }
}
