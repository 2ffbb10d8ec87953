//! Euclidean geometric algebra of 3D space.
//!
//! Basis `1, e1, e2, e3, e23, e31, e12, e123` with `e1² = e2² = e3² = 1`. Bivectors are
//! stored in the order `e23, e31, e12`, so a bivector is the complement of the vector
//! with the same components. The even subalgebra [`MVec3dE`] holds the rotors.

mod convert;
mod geometric;
mod inner;
mod norm;
mod project;
mod rotor;
mod sandwich;
mod unary;
mod wedge;

pub use project::{project_onto_unitized, reject_from_unitized};
pub use rotor::{angle, exp, rotor};

use crate::storage::{MVec4, MVec8, Scalar, Vec3};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Scalar3dTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vec3dTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BiVec3dTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PScalar3dTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MVec3dETag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MVec3dUTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MVec3dTag;

pub type Scalar3d<T> = Scalar<T, Scalar3dTag>;

/// `x e1 + y e2 + z e3`
pub type Vec3d<T> = Vec3<T, Vec3dTag>;

/// `x e23 + y e31 + z e12`
pub type BiVec3d<T> = Vec3<T, BiVec3dTag>;

/// `value e123`
pub type PScalar3d<T> = Scalar<T, PScalar3dTag>;

/// `c0 + c1 e23 + c2 e31 + c3 e12`
pub type MVec3dE<T> = MVec4<T, MVec3dETag>;

/// `c0 e1 + c1 e2 + c2 e3 + c3 e123`
pub type MVec3dU<T> = MVec4<T, MVec3dUTag>;

/// `c0 + c1 e1 + c2 e2 + c3 e3 + c4 e23 + c5 e31 + c6 e12 + c7 e123`
pub type MVec3d<T> = MVec8<T, MVec3dTag>;

/// Unit pseudoscalar `e123`.
pub fn i3d<T: num_traits::Float>() -> PScalar3d<T> {
    PScalar3d::new(T::one())
}

impl<T: num_traits::Float> Vec3d<T> {
    /// Cross product, the dual of the wedge product.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        use crate::traits::{Complement, Wedge};
        self.wdg(rhs).cmpl()
    }
}
