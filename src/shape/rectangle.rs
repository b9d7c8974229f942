use crate::geometry::{Point, Scalar};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned (in its own local frame) rectangle, centred at the origin.
/// A polygon specialisation: carries its own width/height rather than a
/// vertex list, but exposes one for the code paths that treat all polygonal
/// shapes uniformly.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rectangle {
    width: Scalar,
    height: Scalar,
}

impl Rectangle {
    pub fn new(width: Scalar, height: Scalar) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> Scalar {
        self.width
    }

    pub fn height(&self) -> Scalar {
        self.height
    }

    pub fn vertices(&self) -> [Point; 4] {
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        [
            Point(-hw, hh),
            Point(-hw, -hh),
            Point(hw, -hh),
            Point(hw, hh),
        ]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unit_square_vertices_are_centred() {
        let square = Rectangle::new(1.0, 1.0);
        for v in square.vertices() {
            assert!(v.0.abs() <= 0.5 + 1e-9 && v.1.abs() <= 0.5 + 1e-9);
        }
    }
}
