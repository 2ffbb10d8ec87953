//! Projective geometric algebra of 3D space.
//!
//! Basis vectors `e1, e2, e3` square to one and `e4` to zero. Points are vectors with
//! `w = 1`, lines are bivectors stored as a direction `e41, e42, e43` followed by a
//! moment `e23, e31, e12`, and planes are trivectors: the plane `a x + b y + c z + d = 0`
//! is `a e423 + b e431 + c e412 + d e321`.
//!
//! As in [`crate::pga2dp`], joins use `wdg`, meets use `rwdg` and motors compose with
//! `rgpr`.

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

pub use motor::{motor, motor_from_planes, move3dp, translator};
pub use project::{central_project_onto, dist3dp};

use crate::storage::{BVec6, MVec16, MVec2, MVec8, Scalar, Vec4};
use crate::traits::Wedge;
use num_traits::Float;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Scalar3dpTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vec3dpTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BiVec3dpTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TriVec3dpTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PScalar3dpTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MVec3dpETag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MVec3dpUTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MVec3dpTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DualNum3dpTag;

pub type Scalar3dp<T> = Scalar<T, Scalar3dpTag>;

/// `x e1 + y e2 + z e3 + w e4`
pub type Vec3dp<T> = Vec4<T, Vec3dpTag>;

/// `vx e41 + vy e42 + vz e43 + mx e23 + my e31 + mz e12`
pub type BiVec3dp<T> = BVec6<T, BiVec3dpTag>;

/// `x e423 + y e431 + z e412 + w e321`
pub type TriVec3dp<T> = Vec4<T, TriVec3dpTag>;

/// `value e1234`
pub type PScalar3dp<T> = Scalar<T, PScalar3dpTag>;

/// `c0 + c1 e41 + c2 e42 + c3 e43 + c4 e23 + c5 e31 + c6 e12 + c7 e1234`. Motors live
/// here.
pub type MVec3dpE<T> = MVec8<T, MVec3dpETag>;

/// `c0 e1 + c1 e2 + c2 e3 + c3 e4 + c4 e423 + c5 e431 + c6 e412 + c7 e321`
pub type MVec3dpU<T> = MVec8<T, MVec3dpUTag>;

/// All sixteen components: scalar, `e1..e4`, the six bivectors in [`BiVec3dp`] order,
/// the four trivectors in [`TriVec3dp`] order and `e1234`.
pub type MVec3dp<T> = MVec16<T, MVec3dpTag>;

/// `c0 + c1 e1234`
pub type DualNum3dp<T> = MVec2<T, DualNum3dpTag>;

/// Unit pseudoscalar `e1234`.
pub fn i3dp<T: Float>() -> PScalar3dp<T> {
    PScalar3dp::new(T::one())
}

pub fn point<T: Float>(x: T, y: T, z: T) -> Vec3dp<T> {
    Vec3dp::new(x, y, z, T::one())
}

pub fn direction<T: Float>(x: T, y: T, z: T) -> Vec3dp<T> {
    Vec3dp::new(x, y, z, T::zero())
}

pub fn origin<T: Float>() -> Vec3dp<T> {
    point(T::zero(), T::zero(), T::zero())
}

/// The plane at infinity, `e321`.
pub fn horizon<T: Float>() -> TriVec3dp<T> {
    TriVec3dp::new(T::zero(), T::zero(), T::zero(), T::one())
}

/// Line through `p` and `q`, directed from `p` to `q`.
pub fn line<T: Float>(p: Vec3dp<T>, q: Vec3dp<T>) -> BiVec3dp<T> {
    p.wdg(q)
}

/// Plane through three points, oriented counter-clockwise when seen from the side its
/// normal points to.
pub fn plane<T: Float>(p: Vec3dp<T>, q: Vec3dp<T>, r: Vec3dp<T>) -> TriVec3dp<T> {
    p.wdg(q).wdg(r)
}
