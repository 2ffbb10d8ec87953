//! Sign flips, complements, duals, and the bulk/weight split.

use super::{BiVec3d, MVec3d, MVec3dE, MVec3dU, PScalar3d, Scalar3d, Vec3d};
use crate::traits::{Complement, Conjugate, Dual, GradeInvolution, Reverse};
use num_traits::Float;

impl<T: Float> Reverse for Scalar3d<T> {
    #[inline]
    fn rev(self) -> Self {
        self
    }
}

impl<T: Float> Reverse for Vec3d<T> {
    #[inline]
    fn rev(self) -> Self {
        self
    }
}

impl<T: Float> Reverse for BiVec3d<T> {
    #[inline]
    fn rev(self) -> Self {
        BiVec3d::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Float> Reverse for PScalar3d<T> {
    #[inline]
    fn rev(self) -> Self {
        PScalar3d::new(-self.value)
    }
}

impl<T: Float> Reverse for MVec3dE<T> {
    #[inline]
    fn rev(self) -> Self {
        MVec3dE::new(self.c0, -self.c1, -self.c2, -self.c3)
    }
}

impl<T: Float> Reverse for MVec3dU<T> {
    #[inline]
    fn rev(self) -> Self {
        MVec3dU::new(self.c0, self.c1, self.c2, -self.c3)
    }
}

impl<T: Float> Reverse for MVec3d<T> {
    #[inline]
    fn rev(self) -> Self {
        MVec3d::new(self.c0, self.c1, self.c2, self.c3, -self.c4, -self.c5, -self.c6, -self.c7)
    }
}

impl<T: Float> GradeInvolution for Scalar3d<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        self
    }
}

impl<T: Float> GradeInvolution for Vec3d<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        Vec3d::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Float> GradeInvolution for BiVec3d<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        BiVec3d::new(self.x, self.y, self.z)
    }
}

impl<T: Float> GradeInvolution for PScalar3d<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        PScalar3d::new(-self.value)
    }
}

impl<T: Float> GradeInvolution for MVec3dE<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        MVec3dE::new(self.c0, self.c1, self.c2, self.c3)
    }
}

impl<T: Float> GradeInvolution for MVec3dU<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        MVec3dU::new(-self.c0, -self.c1, -self.c2, -self.c3)
    }
}

impl<T: Float> GradeInvolution for MVec3d<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        MVec3d::new(self.c0, -self.c1, -self.c2, -self.c3, self.c4, self.c5, self.c6, -self.c7)
    }
}

impl<T: Float> Conjugate for Scalar3d<T> {
    #[inline]
    fn conj(self) -> Self {
        self
    }
}

impl<T: Float> Conjugate for Vec3d<T> {
    #[inline]
    fn conj(self) -> Self {
        Vec3d::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Float> Conjugate for BiVec3d<T> {
    #[inline]
    fn conj(self) -> Self {
        BiVec3d::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Float> Conjugate for PScalar3d<T> {
    #[inline]
    fn conj(self) -> Self {
        self
    }
}

impl<T: Float> Conjugate for MVec3dE<T> {
    #[inline]
    fn conj(self) -> Self {
        MVec3dE::new(self.c0, -self.c1, -self.c2, -self.c3)
    }
}

impl<T: Float> Conjugate for MVec3dU<T> {
    #[inline]
    fn conj(self) -> Self {
        MVec3dU::new(-self.c0, -self.c1, -self.c2, self.c3)
    }
}

impl<T: Float> Conjugate for MVec3d<T> {
    #[inline]
    fn conj(self) -> Self {
        MVec3d::new(self.c0, -self.c1, -self.c2, -self.c3, -self.c4, -self.c5, -self.c6, self.c7)
    }
}

impl<T: Float> Complement for Scalar3d<T> {
    type Output = PScalar3d<T>;

    #[inline]
    fn cmpl(self) -> Self::Output {
        PScalar3d::new(self.value)
    }
}

impl<T: Float> Complement for Vec3d<T> {
    type Output = BiVec3d<T>;

    #[inline]
    fn cmpl(self) -> Self::Output {
        BiVec3d::new(self.x, self.y, self.z)
    }
}

impl<T: Float> Complement for BiVec3d<T> {
    type Output = Vec3d<T>;

    #[inline]
    fn cmpl(self) -> Self::Output {
        Vec3d::new(self.x, self.y, self.z)
    }
}

impl<T: Float> Complement for PScalar3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn cmpl(self) -> Self::Output {
        Scalar3d::new(self.value)
    }
}

impl<T: Float> Complement for MVec3dE<T> {
    type Output = MVec3dU<T>;

    #[inline]
    fn cmpl(self) -> Self::Output {
        MVec3dU::new(self.c1, self.c2, self.c3, self.c0)
    }
}

impl<T: Float> Complement for MVec3dU<T> {
    type Output = MVec3dE<T>;

    #[inline]
    fn cmpl(self) -> Self::Output {
        MVec3dE::new(self.c3, self.c0, self.c1, self.c2)
    }
}

impl<T: Float> Complement for MVec3d<T> {
    type Output = MVec3d<T>;

    #[inline]
    fn cmpl(self) -> Self::Output {
        MVec3d::new(self.c7, self.c4, self.c5, self.c6, self.c1, self.c2, self.c3, self.c0)
    }
}

impl<T: Float> Dual for Scalar3d<T> {
    type Output = PScalar3d<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.cmpl()
    }
}

impl<T: Float> Dual for Vec3d<T> {
    type Output = BiVec3d<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.cmpl()
    }
}

impl<T: Float> Dual for BiVec3d<T> {
    type Output = Vec3d<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.cmpl()
    }
}

impl<T: Float> Dual for PScalar3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.cmpl()
    }
}

impl<T: Float> Dual for MVec3dE<T> {
    type Output = MVec3dU<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.cmpl()
    }
}

impl<T: Float> Dual for MVec3dU<T> {
    type Output = MVec3dE<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.cmpl()
    }
}

impl<T: Float> Dual for MVec3d<T> {
    type Output = MVec3d<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.cmpl()
    }
}
