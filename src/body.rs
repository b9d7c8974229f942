//! The external surface: a `Body` trait bodies implement, and the four
//! collision-query entry points built on top of it.

use crate::aabb::Aabb;
use crate::compute::epa::epa;
use crate::compute::gjk::gjk;
use crate::compute::witness::{dump_points, dump_source, penetration_info, PointPair};
use crate::geometry::{Scalar, Vector2};
use crate::shape::{PosedShape, Shape};

/// What a caller's body representation must expose for the core to query it.
/// Deliberately minimal: an ECS component, an `Rc<RefCell<_>>`, or a plain
/// struct can all implement this without adopting any other part of the
/// core's data model.
pub trait Body {
    fn shape(&self) -> &Shape;
    fn position(&self) -> Vector2;
    fn rotation(&self) -> Scalar;

    fn posed_shape(&self) -> PosedShape {
        PosedShape::new(self.shape(), self.position(), self.rotation())
    }
}

/// The result of a `detect` call: whether the two bodies collide, the two
/// bodies the report refers to, and (when they do collide) the penetration
/// normal/depth and the contact point(s). On non-intersection every field
/// but `body_a`/`body_b` is default-valued; `contacts` is empty.
#[derive(Clone)]
pub struct Collision<'a> {
    pub is_colliding: bool,
    pub body_a: Option<&'a dyn Body>,
    pub body_b: Option<&'a dyn Body>,
    pub normal: Vector2,
    pub penetration: Scalar,
    pub contacts: Vec<PointPair>,
}

impl<'a> Default for Collision<'a> {
    fn default() -> Self {
        Self {
            is_colliding: false,
            body_a: None,
            body_b: None,
            normal: Vector2::ZERO,
            penetration: 0.0,
            contacts: Vec::new(),
        }
    }
}

impl<'a> std::fmt::Debug for Collision<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collision")
            .field("is_colliding", &self.is_colliding)
            .field("body_a", &self.body_a.map(|body| body as *const dyn Body))
            .field("body_b", &self.body_b.map(|body| body as *const dyn Body))
            .field("normal", &self.normal)
            .field("penetration", &self.penetration)
            .field("contacts", &self.contacts)
            .finish()
    }
}

/// `true` iff the two posed shapes share any point.
pub fn collide(a: &dyn Body, b: &dyn Body) -> bool {
    let shape_a = a.posed_shape();
    let shape_b = b.posed_shape();

    let aabb_a = Aabb::from_shape(&shape_a, 0.0);
    let aabb_b = Aabb::from_shape(&shape_b, 0.0);
    if !Aabb::overlap(&aabb_a, &aabb_b) {
        return false;
    }

    let (mut is_colliding, simplex) = gjk(&shape_a, &shape_b);

    if shape_a.fuzzy_same_pose_as(&shape_b) && !is_colliding {
        is_colliding = simplex.contains_origin(true);
    }

    is_colliding
}

/// Full collision report: penetration normal/depth and contact point(s) when
/// the bodies intersect. Rejects null and identical-body inputs with an
/// empty (non-colliding) report — there is no sensible collision between a
/// body and itself.
pub fn detect<'a>(a: Option<&'a dyn Body>, b: Option<&'a dyn Body>) -> Collision<'a> {
    let Some(a) = a else {
        return Collision::default();
    };
    let Some(b) = b else {
        return Collision::default();
    };
    if std::ptr::eq(a, b) {
        return Collision {
            body_a: Some(a),
            body_b: Some(b),
            ..Collision::default()
        };
    }

    let shape_a = a.posed_shape();
    let shape_b = b.posed_shape();

    let aabb_a = Aabb::from_shape(&shape_a, 0.0);
    let aabb_b = Aabb::from_shape(&shape_b, 0.0);
    if !Aabb::overlap(&aabb_a, &aabb_b) {
        return Collision {
            body_a: Some(a),
            body_b: Some(b),
            ..Collision::default()
        };
    }

    let (mut is_colliding, mut simplex) = gjk(&shape_a, &shape_b);

    if shape_a.fuzzy_same_pose_as(&shape_b) && !is_colliding {
        is_colliding = simplex.contains_origin(true);
    }

    if !is_colliding {
        return Collision {
            body_a: Some(a),
            body_b: Some(b),
            ..Collision::default()
        };
    }

    simplex = epa(&shape_a, &shape_b, &simplex);
    let source = dump_source(&simplex);
    let info = penetration_info(&source);
    let contact = dump_points(&source);

    Collision {
        is_colliding: true,
        body_a: Some(a),
        body_b: Some(b),
        normal: info.normal,
        penetration: info.penetration,
        contacts: vec![contact],
    }
}

/// Closest-point pair between two bodies. `None` for null or identical
/// inputs; otherwise always returns a pair (zero-length when the shapes
/// touch exactly), without an AABB pre-reject.
pub fn distance(a: Option<&dyn Body>, b: Option<&dyn Body>) -> Option<PointPair> {
    let a = a?;
    let b = b?;
    if std::ptr::eq(a, b) {
        return None;
    }

    let shape_a = a.posed_shape();
    let shape_b = b.posed_shape();
    Some(crate::compute::witness::distance(&shape_a, &shape_b))
}

/// The AABB of a posed shape, optionally grown by `expansion` on each side.
pub fn aabb_from_shape(shape: &PosedShape, expansion: Scalar) -> Aabb {
    Aabb::from_shape(shape, expansion)
}
