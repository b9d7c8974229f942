use crate::geometry::{polygon_centroid, Point};
use crate::shape::ShapeError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A convex, counter-clockwise polygon in its local frame.
///
/// Accepts both an open vertex list (`n` distinct vertices) and a closed one
/// (the last vertex repeats the first); construction folds the closed form
/// down to the open one so the rest of the engine never special-cases it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self, ShapeError> {
        let mut vertices = vertices;

        if vertices.len() >= 2
            && vertices
                .first()
                .unwrap()
                .is_close_enough_to(*vertices.last().unwrap())
        {
            vertices.pop();
        }

        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices {
                found: vertices.len(),
            });
        }

        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn centroid(&self) -> Point {
        polygon_centroid(&self.vertices)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_degenerate_polygon() {
        assert!(Polygon::new(vec![Point(0.0, 0.0), Point(1.0, 0.0)]).is_err());
    }

    #[test]
    fn folds_closed_vertex_list() {
        let open = Polygon::new(vec![Point(0.0, 0.0), Point(1.0, 0.0), Point(0.0, 1.0)]).unwrap();
        let closed = Polygon::new(vec![
            Point(0.0, 0.0),
            Point(1.0, 0.0),
            Point(0.0, 1.0),
            Point(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(open.vertices(), closed.vertices());
    }

    #[test]
    fn centroid_of_triangle() {
        let triangle =
            Polygon::new(vec![Point(0.0, 0.0), Point(2.0, 0.0), Point(0.0, 2.0)]).unwrap();
        let c = triangle.centroid();
        assert!(c.is_close_enough_to(Point(2.0 / 3.0, 2.0 / 3.0)));
    }
}
