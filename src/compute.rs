//! GJK/EPA narrow-phase machinery: support function, simplex, the two
//! refinement loops, and witness/penetration extraction.

pub mod epa;
pub mod gjk;
pub mod simplex;
pub mod support;
pub mod witness;
