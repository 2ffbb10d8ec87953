//! Grade projection, assembly from grade parts, and widening conversions.

use super::{BiVec2dp, DualNum2dp, MVec2dp, MVec2dpE, MVec2dpU, PScalar2dp, Scalar2dp, Vec2dp};
use num_traits::Float;

impl<T: Float> MVec2dpE<T> {
    /// Assembles the multivector from its grade parts.
    pub fn from_parts(s: Scalar2dp<T>, b: BiVec2dp<T>) -> Self {
        MVec2dpE::new(s.value, b.x, b.y, b.z)
    }

    #[inline]
    pub fn gr0(self) -> Scalar2dp<T> {
        Scalar2dp::new(self.c0)
    }

    #[inline]
    pub fn gr2(self) -> BiVec2dp<T> {
        BiVec2dp::new(self.c1, self.c2, self.c3)
    }
}

impl<T: Float> MVec2dpU<T> {
    /// Assembles the multivector from its grade parts.
    pub fn from_parts(v: Vec2dp<T>, t: PScalar2dp<T>) -> Self {
        MVec2dpU::new(v.x, v.y, v.z, t.value)
    }

    #[inline]
    pub fn gr1(self) -> Vec2dp<T> {
        Vec2dp::new(self.c0, self.c1, self.c2)
    }

    #[inline]
    pub fn gr3(self) -> PScalar2dp<T> {
        PScalar2dp::new(self.c3)
    }
}

impl<T: Float> MVec2dp<T> {
    /// Assembles the multivector from its grade parts.
    pub fn from_parts(s: Scalar2dp<T>, v: Vec2dp<T>, b: BiVec2dp<T>, t: PScalar2dp<T>) -> Self {
        MVec2dp::new(s.value, v.x, v.y, v.z, b.x, b.y, b.z, t.value)
    }

    #[inline]
    pub fn gr0(self) -> Scalar2dp<T> {
        Scalar2dp::new(self.c0)
    }

    #[inline]
    pub fn gr1(self) -> Vec2dp<T> {
        Vec2dp::new(self.c1, self.c2, self.c3)
    }

    #[inline]
    pub fn gr2(self) -> BiVec2dp<T> {
        BiVec2dp::new(self.c4, self.c5, self.c6)
    }

    #[inline]
    pub fn gr3(self) -> PScalar2dp<T> {
        PScalar2dp::new(self.c7)
    }
}

impl<T: Float> DualNum2dp<T> {
    /// Assembles the multivector from its grade parts.
    pub fn from_parts(s: Scalar2dp<T>, t: PScalar2dp<T>) -> Self {
        DualNum2dp::new(s.value, t.value)
    }

    #[inline]
    pub fn gr0(self) -> Scalar2dp<T> {
        Scalar2dp::new(self.c0)
    }

    #[inline]
    pub fn gr3(self) -> PScalar2dp<T> {
        PScalar2dp::new(self.c1)
    }
}

impl<T: Float> From<Scalar2dp<T>> for MVec2dpE<T> {
    #[inline]
    fn from(x: Scalar2dp<T>) -> Self {
        MVec2dpE::new(x.value, T::zero(), T::zero(), T::zero())
    }
}

impl<T: Float> From<BiVec2dp<T>> for MVec2dpE<T> {
    #[inline]
    fn from(x: BiVec2dp<T>) -> Self {
        MVec2dpE::new(T::zero(), x.x, x.y, x.z)
    }
}

impl<T: Float> From<Vec2dp<T>> for MVec2dpU<T> {
    #[inline]
    fn from(x: Vec2dp<T>) -> Self {
        MVec2dpU::new(x.x, x.y, x.z, T::zero())
    }
}

impl<T: Float> From<PScalar2dp<T>> for MVec2dpU<T> {
    #[inline]
    fn from(x: PScalar2dp<T>) -> Self {
        MVec2dpU::new(T::zero(), T::zero(), T::zero(), x.value)
    }
}

impl<T: Float> From<Scalar2dp<T>> for MVec2dp<T> {
    #[inline]
    fn from(x: Scalar2dp<T>) -> Self {
        MVec2dp::new(
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

impl<T: Float> From<Vec2dp<T>> for MVec2dp<T> {
    #[inline]
    fn from(x: Vec2dp<T>) -> Self {
        MVec2dp::new(T::zero(), x.x, x.y, x.z, T::zero(), T::zero(), T::zero(), T::zero())
    }
}

impl<T: Float> From<BiVec2dp<T>> for MVec2dp<T> {
    #[inline]
    fn from(x: BiVec2dp<T>) -> Self {
        MVec2dp::new(T::zero(), T::zero(), T::zero(), T::zero(), x.x, x.y, x.z, T::zero())
    }
}

impl<T: Float> From<PScalar2dp<T>> for MVec2dp<T> {
    #[inline]
    fn from(x: PScalar2dp<T>) -> Self {
        MVec2dp::new(
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

impl<T: Float> From<MVec2dpE<T>> for MVec2dp<T> {
    #[inline]
    fn from(x: MVec2dpE<T>) -> Self {
        MVec2dp::new(x.c0, T::zero(), T::zero(), T::zero(), x.c1, x.c2, x.c3, T::zero())
    }
}

impl<T: Float> From<MVec2dpU<T>> for MVec2dp<T> {
    #[inline]
    fn from(x: MVec2dpU<T>) -> Self {
        MVec2dp::new(T::zero(), x.c0, x.c1, x.c2, T::zero(), T::zero(), T::zero(), x.c3)
    }
}

impl<T: Float> From<DualNum2dp<T>> for MVec2dp<T> {
    #[inline]
    fn from(x: DualNum2dp<T>) -> Self {
        MVec2dp::new(x.c0, T::zero(), T::zero(), T::zero(), T::zero(), T::zero(), T::zero(), x.c1)
    }
}

impl<T: Float> From<Scalar2dp<T>> for DualNum2dp<T> {
    #[inline]
    fn from(x: Scalar2dp<T>) -> Self {
        DualNum2dp::new(x.value, T::zero())
    }
}

impl<T: Float> From<PScalar2dp<T>> for DualNum2dp<T> {
    #[inline]
    fn from(x: PScalar2dp<T>) -> Self {
        DualNum2dp::new(T::zero(), x.value)
    }
}

impl_mixed_sum! {
    Scalar2dp + Vec2dp = MVec2dp,
    Scalar2dp + BiVec2dp = MVec2dpE,
    Scalar2dp + PScalar2dp = DualNum2dp,
    Scalar2dp + MVec2dpE = MVec2dpE,
    Scalar2dp + MVec2dpU = MVec2dp,
    Scalar2dp + MVec2dp = MVec2dp,
    Scalar2dp + DualNum2dp = DualNum2dp,
    Vec2dp + Scalar2dp = MVec2dp,
    Vec2dp + BiVec2dp = MVec2dp,
    Vec2dp + PScalar2dp = MVec2dpU,
    Vec2dp + MVec2dpE = MVec2dp,
    Vec2dp + MVec2dpU = MVec2dpU,
    Vec2dp + MVec2dp = MVec2dp,
    Vec2dp + DualNum2dp = MVec2dp,
    BiVec2dp + Scalar2dp = MVec2dpE,
    BiVec2dp + Vec2dp = MVec2dp,
    BiVec2dp + PScalar2dp = MVec2dp,
    BiVec2dp + MVec2dpE = MVec2dpE,
    BiVec2dp + MVec2dpU = MVec2dp,
    BiVec2dp + MVec2dp = MVec2dp,
    BiVec2dp + DualNum2dp = MVec2dp,
    PScalar2dp + Scalar2dp = DualNum2dp,
    PScalar2dp + Vec2dp = MVec2dpU,
    PScalar2dp + BiVec2dp = MVec2dp,
    PScalar2dp + MVec2dpE = MVec2dp,
    PScalar2dp + MVec2dpU = MVec2dpU,
    PScalar2dp + MVec2dp = MVec2dp,
    PScalar2dp + DualNum2dp = DualNum2dp,
    MVec2dpE + Scalar2dp = MVec2dpE,
    MVec2dpE + Vec2dp = MVec2dp,
    MVec2dpE + BiVec2dp = MVec2dpE,
    MVec2dpE + PScalar2dp = MVec2dp,
    MVec2dpE + MVec2dpU = MVec2dp,
    MVec2dpE + MVec2dp = MVec2dp,
    MVec2dpE + DualNum2dp = MVec2dp,
    MVec2dpU + Scalar2dp = MVec2dp,
    MVec2dpU + Vec2dp = MVec2dpU,
    MVec2dpU + BiVec2dp = MVec2dp,
    MVec2dpU + PScalar2dp = MVec2dpU,
    MVec2dpU + MVec2dpE = MVec2dp,
    MVec2dpU + MVec2dp = MVec2dp,
    MVec2dpU + DualNum2dp = MVec2dp,
    MVec2dp + Scalar2dp = MVec2dp,
    MVec2dp + Vec2dp = MVec2dp,
    MVec2dp + BiVec2dp = MVec2dp,
    MVec2dp + PScalar2dp = MVec2dp,
    MVec2dp + MVec2dpE = MVec2dp,
    MVec2dp + MVec2dpU = MVec2dp,
    MVec2dp + DualNum2dp = MVec2dp,
    DualNum2dp + Scalar2dp = DualNum2dp,
    DualNum2dp + Vec2dp = MVec2dp,
    DualNum2dp + BiVec2dp = MVec2dp,
    DualNum2dp + PScalar2dp = DualNum2dp,
    DualNum2dp + MVec2dpE = MVec2dp,
    DualNum2dp + MVec2dpU = MVec2dp,
    DualNum2dp + MVec2dp = MVec2dp,
}
