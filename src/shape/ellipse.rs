use crate::geometry::Scalar;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned ellipse centred at the origin of its local frame, given by
/// its half-width `a` and half-height `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ellipse {
    half_width: Scalar,
    half_height: Scalar,
}

impl Ellipse {
    pub fn new(half_width: Scalar, half_height: Scalar) -> Self {
        Self {
            half_width,
            half_height,
        }
    }

    pub fn a(&self) -> Scalar {
        self.half_width
    }

    pub fn b(&self) -> Scalar {
        self.half_height
    }
}
