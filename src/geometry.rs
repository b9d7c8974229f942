//! 2D linear-algebra primitives and the stand-alone geometry predicates the
//! narrow-phase engine builds on: point/segment tests, triangle-contains-origin,
//! and the analytic farthest-point projections for ellipses and capsules.

use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The real-valued scalar the whole crate is generic over at build time.
/// Switch to single precision with the `f32` feature.
#[cfg(not(feature = "f32"))]
pub type Scalar = f64;
#[cfg(feature = "f32")]
pub type Scalar = f32;

/// Generic machine-epsilon tolerance, used where a fuzzy comparison would be
/// either too strict or not meaningful (e.g. detecting an exact division by
/// zero before it happens).
pub const EPS: Scalar = Scalar::EPSILON;

/// The tolerance `is_close_enough_to` and friends use for "two points are the
/// same point" comparisons throughout GJK/EPA. Loose relative to `EPS` because
/// it has to absorb floating-point drift accumulated over `max_iter` simplex
/// refinements, not just a single operation's rounding error.
#[cfg(not(feature = "f32"))]
pub const EPS_GEOMETRY: Scalar = 1e-7;
#[cfg(feature = "f32")]
pub const EPS_GEOMETRY: Scalar = 1e-4;

/// A point on the 2D plane or a vector.
///
/// The types of receivers and parameters are mostly specified explicitly
/// as either `Point` or the type alias `Vector2`, to suggest the correct
/// interpretation of these values within a given context.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point(pub Scalar, pub Scalar);

/// Used instead of `Point` to suggest that a value represents a displacement
/// or direction, and not a location on the 2D plane. Same representation.
pub type Vector2 = Point;

impl Point {
    pub const ZERO: Self = Self(0.0, 0.0);

    pub fn new(x: Scalar, y: Scalar) -> Self {
        Self(x, y)
    }

    pub fn dot(self: Vector2, other: Vector2) -> Scalar {
        self.0 * other.0 + self.1 * other.1
    }

    pub fn to(self: Point, other: Point) -> Vector2 {
        other - self
    }

    /// `|a - b| < EPS_GEOMETRY` on both components.
    pub fn is_close_enough_to(self, other: Self) -> bool {
        (other.0 - self.0).abs() < EPS_GEOMETRY && (other.1 - self.1).abs() < EPS_GEOMETRY
    }

    /// `x1*y2 - y1*x2`, the scalar z-component of the 3D cross product.
    pub fn cross(self: Vector2, other: Vector2) -> Scalar {
        self.0 * other.1 - self.1 * other.0
    }

    /// Rotates the vector -90 degrees (clockwise).
    pub fn perpendicular(self: Vector2) -> Vector2 {
        Self(self.1, -self.0)
    }

    pub fn rotate(self: Vector2, angle: Scalar) -> Vector2 {
        Self(
            self.0 * angle.cos() - self.1 * angle.sin(),
            self.0 * angle.sin() + self.1 * angle.cos(),
        )
    }

    pub fn norm_squared(self) -> Scalar {
        self.dot(self)
    }

    pub fn norm(self) -> Scalar {
        self.norm_squared().sqrt()
    }

    /// Normalizes the vector; returns `ZERO` unchanged rather than producing
    /// `NaN` when the vector has zero length.
    pub fn unit(self: Vector2) -> Vector2 {
        let len = self.norm();
        if len < EPS {
            self
        } else {
            self / len
        }
    }
}

impl ops::Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Point(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl ops::Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Self) -> Self::Output {
        Point(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl ops::AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}

impl ops::SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
        self.1 -= rhs.1;
    }
}

impl ops::Mul<Scalar> for Point {
    type Output = Self;
    fn mul(self, rhs: Scalar) -> Self::Output {
        Point(self.0 * rhs, self.1 * rhs)
    }
}

impl ops::Div<Scalar> for Point {
    type Output = Self;
    fn div(self, rhs: Scalar) -> Self::Output {
        Point(self.0 / rhs, self.1 / rhs)
    }
}

impl ops::Neg for Point {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Point(-self.0, -self.1)
    }
}

/// A 2x2 matrix stored as two column vectors, used to carry a posed shape's
/// rotation between its local frame and world space.
#[derive(Clone, Copy, Debug)]
pub struct Matrix2x2 {
    pub column1: Vector2,
    pub column2: Vector2,
}

impl Matrix2x2 {
    pub fn new(col1: Vector2, col2: Vector2) -> Self {
        Self {
            column1: col1,
            column2: col2,
        }
    }

    pub fn identity() -> Self {
        Self::new(Point(1.0, 0.0), Point(0.0, 1.0))
    }

    pub fn determinant(&self) -> Scalar {
        self.column1.0 * self.column2.1 - self.column2.0 * self.column1.1
    }

    pub fn transpose(&self) -> Self {
        Self::new(
            Point(self.column1.0, self.column2.0),
            Point(self.column1.1, self.column2.1),
        )
    }

    /// Returns `None` for a singular (non-invertible) matrix rather than
    /// propagating a `NaN`-poisoned result.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < EPS {
            return None;
        }
        let inv_det = det.recip();
        Some(Self::new(
            Point(self.column2.1, -self.column1.1) * inv_det,
            Point(-self.column2.0, self.column1.0) * inv_det,
        ))
    }

    pub fn multiply_vector(&self, rhs: Vector2) -> Vector2 {
        Point(
            self.column1.0 * rhs.0 + self.column2.0 * rhs.1,
            self.column1.1 * rhs.0 + self.column2.1 * rhs.1,
        )
    }
}

/// A rotation by a fixed angle, represented as the matrix it induces.
#[derive(Clone, Copy, Debug)]
pub struct Rotation2 {
    angle: Scalar,
    matrix: Matrix2x2,
}

impl Rotation2 {
    pub fn new(angle: Scalar) -> Self {
        Self {
            angle,
            matrix: Matrix2x2::new(
                Point(angle.cos(), angle.sin()),
                Point(-angle.sin(), angle.cos()),
            ),
        }
    }

    pub fn angle(&self) -> Scalar {
        self.angle
    }

    pub fn inverse(&self) -> Self {
        Self::new(-self.angle)
    }

    pub fn apply(&self, v: Vector2) -> Vector2 {
        self.matrix.multiply_vector(v)
    }
}

/// Returns true when `a`, `b`, `c` lie on a common line (zero-area triangle),
/// within `EPS_GEOMETRY`.
pub fn is_collinear(a: Point, b: Point, c: Point) -> bool {
    (a - b).cross(a - c).abs() < EPS_GEOMETRY
}

/// Exact (collinear-and-within-bounding-box) point-on-segment test.
pub fn is_point_on_segment(a: Point, b: Point, c: Point) -> bool {
    is_collinear(a, b, c) && fuzzy_is_collinear(a, b, c)
}

/// Bounding-box containment only, no collinearity check — used as the second
/// half of `is_point_on_segment` and directly by callers that already know
/// `c` lies on the infinite line through `a`/`b`.
fn fuzzy_is_collinear(a: Point, b: Point, c: Point) -> bool {
    c.0 <= a.0.max(b.0) + EPS_GEOMETRY
        && c.0 >= a.0.min(b.0) - EPS_GEOMETRY
        && c.1 <= a.1.max(b.1) + EPS_GEOMETRY
        && c.1 >= a.1.min(b.1) - EPS_GEOMETRY
}

/// Orthogonal projection of `p` onto the segment `a-b`, clamped to the
/// segment's endpoints. Returns `a` if the segment is degenerate.
pub fn point_to_segment(a: Point, b: Point, p: Point) -> Point {
    if a.is_close_enough_to(b) {
        return a;
    }

    let ap = p - a;
    let ab_normal = (b - a).unit();
    let projected = a + ab_normal * ab_normal.dot(ap);

    if fuzzy_is_collinear(a, b, projected) {
        projected
    } else if (p - a).norm_squared() > (p - b).norm_squared() {
        b
    } else {
        a
    }
}

/// Same-sign three-cross-product test: true iff the origin lies inside (or,
/// with ties, on the boundary of) the triangle `a, b, c`.
pub fn triangle_contains_origin(a: Point, b: Point, c: Point) -> bool {
    let ra = (b - a).cross(-a);
    let rb = (c - b).cross(-b);
    let rc = (a - c).cross(-c);
    (ra >= 0.0 && rb >= 0.0 && rc >= 0.0) || (ra <= 0.0 && rb <= 0.0 && rc <= 0.0)
}

/// Centroid of a (possibly open) simple polygon, via the signed-area formula.
/// <https://en.wikipedia.org/wiki/Centroid#Of_a_polygon>
pub fn polygon_centroid(vertices: &[Point]) -> Point {
    let (weighted_sum, doubled_area) = windows::Looped::from(vertices.iter().copied())
        .map(|[a, b]| (a + b, a.cross(b)))
        .fold(
            (Point::ZERO, 0.0),
            |(points_acc, area_acc), (point, area)| (points_acc + point * area, area_acc + area),
        );

    if doubled_area.abs() < EPS {
        vertices.first().copied().unwrap_or(Point::ZERO)
    } else {
        weighted_sum / (3.0 * doubled_area)
    }
}

/// Farthest point of an axis-aligned ellipse `(a, b)` centred at the origin
/// in direction `d`, by solving for the point whose tangent is perpendicular
/// to `d`.
pub fn ellipse_farthest_point(a: Scalar, b: Scalar, d: Vector2) -> Point {
    if a.abs() < EPS || b.abs() < EPS {
        return Point::ZERO;
    }

    if d.0.abs() < EPS_GEOMETRY {
        let sign = if d.1 < 0.0 { -1.0 } else { 1.0 };
        return Point(0.0, sign * b);
    }
    if d.1.abs() < EPS_GEOMETRY {
        let sign = if d.0 < 0.0 { -1.0 } else { 1.0 };
        return Point(sign * a, 0.0);
    }

    let k = d.1 / d.0;
    let a2 = a * a;
    let b2 = b * b;
    let k2 = k * k;
    let mut dist = ((a2 + b2 * k2) / k2).sqrt();
    if Point(0.0, dist).dot(d) < 0.0 {
        dist = -dist;
    }

    let x = k * dist - (b2 * k2 * k * dist) / (a2 + b2 * k2);
    let y = (b2 * k2 * dist) / (a2 + b2 * k2);
    Point(x, y)
}

/// Farthest point of a stadium (capsule) of `width`/`height` centred at the
/// origin in direction `d`. The long axis (whichever of `width`/`height` is
/// larger, ties toward horizontal) carries the two round ends.
pub fn capsule_farthest_point(width: Scalar, height: Scalar, d: Vector2) -> Point {
    if width < EPS || height < EPS {
        return Point::ZERO;
    }

    if width >= height {
        let radius = height / 2.0;
        let offset = if d.0 >= 0.0 {
            width / 2.0 - radius
        } else {
            radius - width / 2.0
        };
        let mut target = d.unit() * radius;
        target.0 += offset;
        target
    } else {
        let radius = width / 2.0;
        let offset = if d.1 >= 0.0 {
            height / 2.0 - radius
        } else {
            radius - height / 2.0
        };
        let mut target = d.unit() * radius;
        target.1 += offset;
        target
    }
}

/// An iterator very much like [`std::slice::Windows`], but it wraps around
/// and works over an owned iterator rather than a slice.
pub mod windows {
    use std::mem::{self, MaybeUninit};

    pub struct Looped<I: Iterator, const N: usize> {
        items: I,
        state: Option<State<I::Item, N>>,
    }

    struct State<T, const N: usize> {
        first: [T; N],
        next_from_beg_idx: usize,
        previous: [T; N],
    }

    impl<T: Copy, const N: usize> State<T, N> {
        fn new(items: &mut impl Iterator<Item = T>) -> Option<State<T, N>> {
            let mut first: [MaybeUninit<T>; N] = unsafe { MaybeUninit::uninit().assume_init() };

            for item in &mut first {
                item.write(items.next()?);
            }

            let first = unsafe { mem::transmute_copy(&first) };

            Some(Self {
                first,
                previous: first,
                next_from_beg_idx: 0,
            })
        }
    }

    impl<I: Iterator, const N: usize> From<I> for Looped<I, N>
    where
        I::Item: Copy,
    {
        fn from(items: I) -> Self {
            Looped { items, state: None }
        }
    }

    impl<I: Iterator, const N: usize> Iterator for Looped<I, N>
    where
        I::Item: Copy,
    {
        type Item = [I::Item; N];

        fn next(&mut self) -> Option<Self::Item> {
            Some(match &mut self.state {
                Some(state) => {
                    let next = self.items.next().or_else(|| {
                        if state.next_from_beg_idx >= N - 1 {
                            return None;
                        }

                        let next = state.first[state.next_from_beg_idx];
                        state.next_from_beg_idx += 1;
                        Some(next)
                    })?;

                    state.previous.copy_within(1.., 0);
                    state.previous[N - 1] = next;
                    state.previous
                }
                state @ None => {
                    let new_state = State::new(&mut self.items)?;
                    let previous = new_state.previous;
                    *state = Some(new_state);
                    previous
                }
            })
        }
    }

}
