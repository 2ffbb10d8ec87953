//! Euclidean geometric algebra of the plane.
//!
//! Basis `1, e1, e2, e12` with `e1² = e2² = 1`. The pseudoscalar `e12` squares to `-1`,
//! so the even subalgebra [`MVec2dE`] is isomorphic to the complex numbers.

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

use crate::storage::{MVec2, MVec4, Scalar, Vec2};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Scalar2dTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vec2dTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PScalar2dTag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MVec2dETag;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MVec2dTag;

pub type Scalar2d<T> = Scalar<T, Scalar2dTag>;

/// `x e1 + y e2`
pub type Vec2d<T> = Vec2<T, Vec2dTag>;

/// `value e12`
pub type PScalar2d<T> = Scalar<T, PScalar2dTag>;

/// `c0 + c1 e12`
pub type MVec2dE<T> = MVec2<T, MVec2dETag>;

/// `c0 + c1 e1 + c2 e2 + c3 e12`
pub type MVec2d<T> = MVec4<T, MVec2dTag>;

/// Unit pseudoscalar `e12`.
pub fn i2d<T: num_traits::Float>() -> PScalar2d<T> {
    PScalar2d::new(T::one())
}
