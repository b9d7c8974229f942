//! A 2D narrow-phase collision-query core: GJK/EPA intersection and
//! penetration extraction, closest-point distance queries between
//! non-intersecting convex shapes, and an AABB broad-phase pre-filter.
//!
//! The query surface is [`body::collide`], [`body::detect`],
//! [`body::distance`], and [`body::aabb_from_shape`], built on top of the
//! [`body::Body`] trait callers implement for their own body representation.

pub mod aabb;
pub mod body;
pub mod compute;
pub mod geometry;
pub mod shape;

pub use aabb::Aabb;
pub use body::{collide, detect, distance, Body, Collision};
pub use compute::witness::PointPair;
pub use shape::{PosedShape, Shape};
