//! Grade projection, assembly from grade parts, and widening conversions.

use super::{BiVec3d, MVec3d, MVec3dE, MVec3dU, PScalar3d, Scalar3d, Vec3d};
use num_traits::Float;

impl<T: Float> MVec3dE<T> {
    /// Assembles the multivector from its grade parts.
    pub fn from_parts(s: Scalar3d<T>, b: BiVec3d<T>) -> Self {
        MVec3dE::new(s.value, b.x, b.y, b.z)
    }

    #[inline]
    pub fn gr0(self) -> Scalar3d<T> {
        Scalar3d::new(self.c0)
    }

    #[inline]
    pub fn gr2(self) -> BiVec3d<T> {
        BiVec3d::new(self.c1, self.c2, self.c3)
    }
}

impl<T: Float> MVec3dU<T> {
    /// Assembles the multivector from its grade parts.
    pub fn from_parts(v: Vec3d<T>, t: PScalar3d<T>) -> Self {
        MVec3dU::new(v.x, v.y, v.z, t.value)
    }

    #[inline]
    pub fn gr1(self) -> Vec3d<T> {
        Vec3d::new(self.c0, self.c1, self.c2)
    }

    #[inline]
    pub fn gr3(self) -> PScalar3d<T> {
        PScalar3d::new(self.c3)
    }
}

impl<T: Float> MVec3d<T> {
    /// Assembles the multivector from its grade parts.
    pub fn from_parts(s: Scalar3d<T>, v: Vec3d<T>, b: BiVec3d<T>, t: PScalar3d<T>) -> Self {
        MVec3d::new(s.value, v.x, v.y, v.z, b.x, b.y, b.z, t.value)
    }

    #[inline]
    pub fn gr0(self) -> Scalar3d<T> {
        Scalar3d::new(self.c0)
    }

    #[inline]
    pub fn gr1(self) -> Vec3d<T> {
        Vec3d::new(self.c1, self.c2, self.c3)
    }

    #[inline]
    pub fn gr2(self) -> BiVec3d<T> {
        BiVec3d::new(self.c4, self.c5, self.c6)
    }

    #[inline]
    pub fn gr3(self) -> PScalar3d<T> {
        PScalar3d::new(self.c7)
    }
}

impl<T: Float> From<Scalar3d<T>> for MVec3dE<T> {
    #[inline]
    fn from(x: Scalar3d<T>) -> Self {
        MVec3dE::new(x.value, T::zero(), T::zero(), T::zero())
    }
}

impl<T: Float> From<BiVec3d<T>> for MVec3dE<T> {
    #[inline]
    fn from(x: BiVec3d<T>) -> Self {
        MVec3dE::new(T::zero(), x.x, x.y, x.z)
    }
}

impl<T: Float> From<Vec3d<T>> for MVec3dU<T> {
    #[inline]
    fn from(x: Vec3d<T>) -> Self {
        MVec3dU::new(x.x, x.y, x.z, T::zero())
    }
}

impl<T: Float> From<PScalar3d<T>> for MVec3dU<T> {
    #[inline]
    fn from(x: PScalar3d<T>) -> Self {
        MVec3dU::new(T::zero(), T::zero(), T::zero(), x.value)
    }
}

impl<T: Float> From<Scalar3d<T>> for MVec3d<T> {
    #[inline]
    fn from(x: Scalar3d<T>) -> Self {
        MVec3d::new(
            x.value,
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
        )
    }
}

impl<T: Float> From<Vec3d<T>> for MVec3d<T> {
    #[inline]
    fn from(x: Vec3d<T>) -> Self {
        MVec3d::new(T::zero(), x.x, x.y, x.z, T::zero(), T::zero(), T::zero(), T::zero())
    }
}

impl<T: Float> From<BiVec3d<T>> for MVec3d<T> {
    #[inline]
    fn from(x: BiVec3d<T>) -> Self {
        MVec3d::new(T::zero(), T::zero(), T::zero(), T::zero(), x.x, x.y, x.z, T::zero())
    }
}

impl<T: Float> From<PScalar3d<T>> for MVec3d<T> {
    #[inline]
    fn from(x: PScalar3d<T>) -> Self {
        MVec3d::new(
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            x.value,
        )
    }
}

impl<T: Float> From<MVec3dE<T>> for MVec3d<T> {
    #[inline]
    fn from(x: MVec3dE<T>) -> Self {
        MVec3d::new(x.c0, T::zero(), T::zero(), T::zero(), x.c1, x.c2, x.c3, T::zero())
    }
}

impl<T: Float> From<MVec3dU<T>> for MVec3d<T> {
    #[inline]
    fn from(x: MVec3dU<T>) -> Self {
        MVec3d::new(T::zero(), x.c0, x.c1, x.c2, T::zero(), T::zero(), T::zero(), x.c3)
    }
}

impl_mixed_sum! {
    Scalar3d + Vec3d = MVec3d,
    Scalar3d + BiVec3d = MVec3dE,
    Scalar3d + PScalar3d = MVec3d,
    Scalar3d + MVec3dE = MVec3dE,
    Scalar3d + MVec3dU = MVec3d,
    Scalar3d + MVec3d = MVec3d,
    Vec3d + Scalar3d = MVec3d,
    Vec3d + BiVec3d = MVec3d,
    Vec3d + PScalar3d = MVec3dU,
    Vec3d + MVec3dE = MVec3d,
    Vec3d + MVec3dU = MVec3dU,
    Vec3d + MVec3d = MVec3d,
    BiVec3d + Scalar3d = MVec3dE,
    BiVec3d + Vec3d = MVec3d,
    BiVec3d + PScalar3d = MVec3d,
    BiVec3d + MVec3dE = MVec3dE,
    BiVec3d + MVec3dU = MVec3d,
    BiVec3d + MVec3d = MVec3d,
    PScalar3d + Scalar3d = MVec3d,
    PScalar3d + Vec3d = MVec3dU,
    PScalar3d + BiVec3d = MVec3d,
    PScalar3d + MVec3dE = MVec3d,
    PScalar3d + MVec3dU = MVec3dU,
    PScalar3d + MVec3d = MVec3d,
    MVec3dE + Scalar3d = MVec3dE,
    MVec3dE + Vec3d = MVec3d,
    MVec3dE + BiVec3d = MVec3dE,
    MVec3dE + PScalar3d = MVec3d,
    MVec3dE + MVec3dU = MVec3d,
    MVec3dE + MVec3d = MVec3d,
    MVec3dU + Scalar3d = MVec3d,
    MVec3dU + Vec3d = MVec3dU,
    MVec3dU + BiVec3d = MVec3d,
    MVec3dU + PScalar3d = MVec3dU,
    MVec3dU + MVec3dE = MVec3d,
    MVec3dU + MVec3d = MVec3d,
    MVec3d + Scalar3d = MVec3d,
    MVec3d + Vec3d = MVec3d,
    MVec3d + BiVec3d = MVec3d,
    MVec3d + PScalar3d = MVec3d,
    MVec3d + MVec3dE = MVec3d,
    MVec3d + MVec3dU = MVec3d,
}
