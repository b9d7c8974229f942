use crate::geometry::Scalar;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A circle of the given radius, centred at the origin of its local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle {
    radius: Scalar,
}

impl Circle {
    pub fn new(radius: Scalar) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> Scalar {
        self.radius
    }
}
