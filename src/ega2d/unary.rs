//! Sign flips, complements, duals, and the bulk/weight split.

use super::{MVec2d, MVec2dE, PScalar2d, Scalar2d, Vec2d};
use crate::traits::{Conjugate, Dual, GradeInvolution, LeftComplement, Reverse, RightComplement};
use num_traits::Float;

impl<T: Float> Reverse for Scalar2d<T> {
    #[inline]
    fn rev(self) -> Self {
        self
    }
}

impl<T: Float> Reverse for Vec2d<T> {
    #[inline]
    fn rev(self) -> Self {
        self
    }
}

impl<T: Float> Reverse for PScalar2d<T> {
    #[inline]
    fn rev(self) -> Self {
        PScalar2d::new(-self.value)
    }
}

impl<T: Float> Reverse for MVec2dE<T> {
    #[inline]
    fn rev(self) -> Self {
        MVec2dE::new(self.c0, -self.c1)
    }
}

impl<T: Float> Reverse for MVec2d<T> {
    #[inline]
    fn rev(self) -> Self {
        MVec2d::new(self.c0, self.c1, self.c2, -self.c3)
    }
}

impl<T: Float> GradeInvolution for Scalar2d<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        self
    }
}

impl<T: Float> GradeInvolution for Vec2d<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        Vec2d::new(-self.x, -self.y)
    }
}

impl<T: Float> GradeInvolution for PScalar2d<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        self
    }
}

impl<T: Float> GradeInvolution for MVec2dE<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        self
    }
}

impl<T: Float> GradeInvolution for MVec2d<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        MVec2d::new(self.c0, -self.c1, -self.c2, self.c3)
    }
}

impl<T: Float> Conjugate for Scalar2d<T> {
    #[inline]
    fn conj(self) -> Self {
        self
    }
}

impl<T: Float> Conjugate for Vec2d<T> {
    #[inline]
    fn conj(self) -> Self {
        Vec2d::new(-self.x, -self.y)
    }
}

impl<T: Float> Conjugate for PScalar2d<T> {
    #[inline]
    fn conj(self) -> Self {
        PScalar2d::new(-self.value)
    }
}

impl<T: Float> Conjugate for MVec2dE<T> {
    #[inline]
    fn conj(self) -> Self {
        MVec2dE::new(self.c0, -self.c1)
    }
}

impl<T: Float> Conjugate for MVec2d<T> {
    #[inline]
    fn conj(self) -> Self {
        MVec2d::new(self.c0, -self.c1, -self.c2, -self.c3)
    }
}

impl<T: Float> RightComplement for Scalar2d<T> {
    type Output = PScalar2d<T>;

    #[inline]
    fn rcmpl(self) -> Self::Output {
        PScalar2d::new(self.value)
    }
}

impl<T: Float> RightComplement for Vec2d<T> {
    type Output = Vec2d<T>;

    #[inline]
    fn rcmpl(self) -> Self::Output {
        Vec2d::new(-self.y, self.x)
    }
}

impl<T: Float> RightComplement for PScalar2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn rcmpl(self) -> Self::Output {
        Scalar2d::new(self.value)
    }
}

impl<T: Float> RightComplement for MVec2dE<T> {
    type Output = MVec2dE<T>;

    #[inline]
    fn rcmpl(self) -> Self::Output {
        MVec2dE::new(self.c1, self.c0)
    }
}

impl<T: Float> RightComplement for MVec2d<T> {
    type Output = MVec2d<T>;

    #[inline]
    fn rcmpl(self) -> Self::Output {
        MVec2d::new(self.c3, -self.c2, self.c1, self.c0)
    }
}

impl<T: Float> LeftComplement for Scalar2d<T> {
    type Output = PScalar2d<T>;

    #[inline]
    fn lcmpl(self) -> Self::Output {
        PScalar2d::new(self.value)
    }
}

impl<T: Float> LeftComplement for Vec2d<T> {
    type Output = Vec2d<T>;

    #[inline]
    fn lcmpl(self) -> Self::Output {
        Vec2d::new(self.y, -self.x)
    }
}

impl<T: Float> LeftComplement for PScalar2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn lcmpl(self) -> Self::Output {
        Scalar2d::new(self.value)
    }
}

impl<T: Float> LeftComplement for MVec2dE<T> {
    type Output = MVec2dE<T>;

    #[inline]
    fn lcmpl(self) -> Self::Output {
        MVec2dE::new(self.c1, self.c0)
    }
}

impl<T: Float> LeftComplement for MVec2d<T> {
    type Output = MVec2d<T>;

    #[inline]
    fn lcmpl(self) -> Self::Output {
        MVec2d::new(self.c3, self.c2, -self.c1, self.c0)
    }
}

impl<T: Float> Dual for Scalar2d<T> {
    type Output = PScalar2d<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.rcmpl()
    }
}

impl<T: Float> Dual for Vec2d<T> {
    type Output = Vec2d<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.rcmpl()
    }
}

impl<T: Float> Dual for PScalar2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.rcmpl()
    }
}

impl<T: Float> Dual for MVec2dE<T> {
    type Output = MVec2dE<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.rcmpl()
    }
}

impl<T: Float> Dual for MVec2d<T> {
    type Output = MVec2d<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.rcmpl()
    }
}
