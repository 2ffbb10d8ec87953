//! Projective geometric algebra of the plane.
//!
//! Basis `1, e1, e2, e3, e23, e31, e12, e123` with `e1² = e2² = 1` and the degenerate
//! `e3² = 0`. Points are vectors with `z = 1`, directions (points at infinity) have
//! `z = 0`, and lines are bivectors: the line `a x + b y + c = 0` is
//! `a e23 + b e31 + c e12`.
//!
//! Geometric operations work on the regressive side: `rwdg` intersects, `rgpr` composes
//! motors, and motors act with `rgpr(rgpr(m, x), rrev(m))`.

mod convert;
mod geometric;
mod inner;
mod motor;
mod norm;
mod project;
mod regressive;
mod sandwich;
mod unary;
mod wedge;

pub use motor::{motor, motor_from_lines, move2dp, translator};
pub use project::{central_project_onto, dist2dp};

use crate::storage::{MVec2, MVec4, MVec8, Scalar, Vec3};
use crate::traits::Wedge;
use num_traits::Float;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Scalar2dpTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vec2dpTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BiVec2dpTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PScalar2dpTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MVec2dpETag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MVec2dpUTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MVec2dpTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DualNum2dpTag;

pub type Scalar2dp<T> = Scalar<T, Scalar2dpTag>;

/// `x e1 + y e2 + z e3`
pub type Vec2dp<T> = Vec3<T, Vec2dpTag>;

/// `x e23 + y e31 + z e12`
pub type BiVec2dp<T> = Vec3<T, BiVec2dpTag>;

/// `value e123`
pub type PScalar2dp<T> = Scalar<T, PScalar2dpTag>;

/// `c0 + c1 e23 + c2 e31 + c3 e12`
pub type MVec2dpE<T> = MVec4<T, MVec2dpETag>;

/// `c0 e1 + c1 e2 + c2 e3 + c3 e123`. Motors live here.
pub type MVec2dpU<T> = MVec4<T, MVec2dpUTag>;

/// `c0 + c1 e1 + c2 e2 + c3 e3 + c4 e23 + c5 e31 + c6 e12 + c7 e123`
pub type MVec2dp<T> = MVec8<T, MVec2dpTag>;

/// `c0 + c1 e123`
pub type DualNum2dp<T> = MVec2<T, DualNum2dpTag>;

/// Unit pseudoscalar `e123`.
pub fn i2dp<T: Float>() -> PScalar2dp<T> {
    PScalar2dp::new(T::one())
}

/// Point at `(x, y)`.
pub fn point<T: Float>(x: T, y: T) -> Vec2dp<T> {
    Vec2dp::new(x, y, T::one())
}

/// Point at infinity in the direction `(x, y)`.
pub fn direction<T: Float>(x: T, y: T) -> Vec2dp<T> {
    Vec2dp::new(x, y, T::zero())
}

/// The origin, `e3`.
pub fn origin<T: Float>() -> Vec2dp<T> {
    point(T::zero(), T::zero())
}

/// The line at infinity, `e12`.
pub fn horizon<T: Float>() -> BiVec2dp<T> {
    BiVec2dp::new(T::zero(), T::zero(), T::one())
}

/// Line through `p` and `q`, oriented from `p` to `q`.
pub fn line<T: Float>(p: Vec2dp<T>, q: Vec2dp<T>) -> BiVec2dp<T> {
    p.wdg(q)
}
