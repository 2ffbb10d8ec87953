//! Grade projection, assembly from grade parts, and widening conversions.

use super::{MVec2d, MVec2dE, PScalar2d, Scalar2d, Vec2d};
use num_traits::Float;

impl<T: Float> MVec2dE<T> {
    /// Assembles the multivector from its grade parts.
    pub fn from_parts(s: Scalar2d<T>, b: PScalar2d<T>) -> Self {
        MVec2dE::new(s.value, b.value)
    }

    #[inline]
    pub fn gr0(self) -> Scalar2d<T> {
        Scalar2d::new(self.c0)
    }

    #[inline]
    pub fn gr2(self) -> PScalar2d<T> {
        PScalar2d::new(self.c1)
    }
}

impl<T: Float> MVec2d<T> {
    /// Assembles the multivector from its grade parts.
    pub fn from_parts(s: Scalar2d<T>, v: Vec2d<T>, b: PScalar2d<T>) -> Self {
        MVec2d::new(s.value, v.x, v.y, b.value)
    }

    #[inline]
    pub fn gr0(self) -> Scalar2d<T> {
        Scalar2d::new(self.c0)
    }

    #[inline]
    pub fn gr1(self) -> Vec2d<T> {
        Vec2d::new(self.c1, self.c2)
    }

    #[inline]
    pub fn gr2(self) -> PScalar2d<T> {
        PScalar2d::new(self.c3)
    }
}

impl<T: Float> From<Scalar2d<T>> for MVec2dE<T> {
    #[inline]
    fn from(x: Scalar2d<T>) -> Self {
        MVec2dE::new(x.value, T::zero())
    }
}

impl<T: Float> From<PScalar2d<T>> for MVec2dE<T> {
    #[inline]
    fn from(x: PScalar2d<T>) -> Self {
        MVec2dE::new(T::zero(), x.value)
    }
}

impl<T: Float> From<Scalar2d<T>> for MVec2d<T> {
    #[inline]
    fn from(x: Scalar2d<T>) -> Self {
        MVec2d::new(x.value, T::zero(), T::zero(), T::zero())
    }
}

impl<T: Float> From<Vec2d<T>> for MVec2d<T> {
    #[inline]
    fn from(x: Vec2d<T>) -> Self {
        MVec2d::new(T::zero(), x.x, x.y, T::zero())
    }
}

impl<T: Float> From<PScalar2d<T>> for MVec2d<T> {
    #[inline]
    fn from(x: PScalar2d<T>) -> Self {
        MVec2d::new(T::zero(), T::zero(), T::zero(), x.value)
    }
}

impl<T: Float> From<MVec2dE<T>> for MVec2d<T> {
    #[inline]
    fn from(x: MVec2dE<T>) -> Self {
        MVec2d::new(x.c0, T::zero(), T::zero(), x.c1)
    }
}

impl_mixed_sum! {
    Scalar2d + Vec2d = MVec2d,
    Scalar2d + PScalar2d = MVec2dE,
    Scalar2d + MVec2dE = MVec2dE,
    Scalar2d + MVec2d = MVec2d,
    Vec2d + Scalar2d = MVec2d,
    Vec2d + PScalar2d = MVec2d,
    Vec2d + MVec2dE = MVec2d,
    Vec2d + MVec2d = MVec2d,
    PScalar2d + Scalar2d = MVec2dE,
    PScalar2d + Vec2d = MVec2d,
    PScalar2d + MVec2dE = MVec2dE,
    PScalar2d + MVec2d = MVec2d,
    MVec2dE + Scalar2d = MVec2dE,
    MVec2dE + Vec2d = MVec2d,
    MVec2dE + PScalar2d = MVec2dE,
    MVec2dE + MVec2d = MVec2d,
    MVec2d + Scalar2d = MVec2d,
    MVec2d + Vec2d = MVec2d,
    MVec2d + PScalar2d = MVec2d,
    MVec2d + MVec2dE = MVec2d,
}
