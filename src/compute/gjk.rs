//! The Gilbert-Johnson-Keerthi intersection test.

use crate::geometry::Vector2;
use crate::shape::PosedShape;

use super::simplex::{support, Minkowski, Simplex};
use super::witness::{closest_edge_to_origin, direction_from_edge};

const DEFAULT_MAX_ITER: usize = 20;

/// Runs GJK to decide whether `a` and `b` intersect, returning the terminal
/// simplex for downstream EPA refinement or distance extraction.
pub fn gjk(a: &PosedShape, b: &PosedShape) -> (bool, Simplex) {
    gjk_with_iterations(a, b, DEFAULT_MAX_ITER)
}

pub fn gjk_with_iterations(a: &PosedShape, b: &PosedShape, max_iter: usize) -> (bool, Simplex) {
    let mut simplex = Simplex::new();
    let mut found = false;

    let mut direction = b.translation - a.translation;
    if direction.is_close_enough_to(Vector2::ZERO) {
        direction = Vector2::new(1.0, 1.0);
    }

    simplex.push(support(a, b, direction));
    direction = -direction;

    let mut removed: Vec<Minkowski> = Vec::new();

    for _ in 0..=max_iter {
        simplex.push(support(a, b, direction));
        if simplex.len() == 3 {
            simplex.push(simplex.get(0));
        }

        if simplex.last_vertex().dot(direction) <= 0.0 {
            break;
        }
        if simplex.contains_origin(true) {
            found = true;
            break;
        }

        let (i1, i2) = closest_edge_to_origin(&simplex);
        direction = direction_from_edge(simplex.get(i1).result, simplex.get(i2).result, true);

        if let Some(dropped) = adjust_simplex(&mut simplex, i1, i2) {
            if removed.iter().any(|w| w.point_a == dropped.point_a && w.point_b == dropped.point_b) {
                break;
            }
            removed.push(dropped);
        }
    }

    (found, simplex)
}

/// Drops the triangle vertex not on the closest edge, collapsing a 4-simplex
/// back down to the 2-simplex `(closest_1, closest_2)`. No-op on any other
/// simplex length.
fn adjust_simplex(simplex: &mut Simplex, closest_1: usize, closest_2: usize) -> Option<Minkowski> {
    if simplex.len() != 4 {
        return None;
    }

    let mut index = None;
    for i in 0..simplex.len() - 1 {
        if i != closest_1 && i != closest_2 {
            index = Some(i);
        }
    }
    let index = index.expect("a 4-simplex always has exactly one vertex off the closest edge");

    let dropped = simplex.remove(index);
    simplex.remove(simplex.len() - 1);
    Some(dropped)
}
