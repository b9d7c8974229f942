use crate::geometry::Scalar;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A stadium shape (rectangle capped by two half-circles) centred at the
/// origin of its local frame. The long axis is whichever of `width`/`height`
/// is larger; a tie is read as horizontal.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Capsule {
    width: Scalar,
    height: Scalar,
}

impl Capsule {
    pub fn new(width: Scalar, height: Scalar) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> Scalar {
        self.width
    }

    pub fn height(&self) -> Scalar {
        self.height
    }
}
