//! Grade projection, assembly from grade parts, and widening conversions.

use super::{
    BiVec3dp, DualNum3dp, MVec3dp, MVec3dpE, MVec3dpU, PScalar3dp, Scalar3dp, TriVec3dp, Vec3dp,
};
use num_traits::Float;

impl<T: Float> MVec3dpE<T> {
    /// Assembles the multivector from its grade parts.
    pub fn from_parts(s: Scalar3dp<T>, b: BiVec3dp<T>, ps: PScalar3dp<T>) -> Self {
        MVec3dpE::new(s.value, b.vx, b.vy, b.vz, b.mx, b.my, b.mz, ps.value)
    }

    #[inline]
    pub fn gr0(self) -> Scalar3dp<T> {
        Scalar3dp::new(self.c0)
    }

    #[inline]
    pub fn gr2(self) -> BiVec3dp<T> {
        BiVec3dp::new(self.c1, self.c2, self.c3, self.c4, self.c5, self.c6)
    }

    #[inline]
    pub fn gr4(self) -> PScalar3dp<T> {
        PScalar3dp::new(self.c7)
    }
}

impl<T: Float> MVec3dpU<T> {
    /// Assembles the multivector from its grade parts.
    pub fn from_parts(v: Vec3dp<T>, t: TriVec3dp<T>) -> Self {
        MVec3dpU::new(v.x, v.y, v.z, v.w, t.x, t.y, t.z, t.w)
    }

    #[inline]
    pub fn gr1(self) -> Vec3dp<T> {
        Vec3dp::new(self.c0, self.c1, self.c2, self.c3)
    }

    #[inline]
    pub fn gr3(self) -> TriVec3dp<T> {
        TriVec3dp::new(self.c4, self.c5, self.c6, self.c7)
    }
}

impl<T: Float> MVec3dp<T> {
    /// Assembles the multivector from its grade parts.
    pub fn from_parts(
        s: Scalar3dp<T>,
        v: Vec3dp<T>,
        b: BiVec3dp<T>,
        t: TriVec3dp<T>,
        ps: PScalar3dp<T>,
    ) -> Self {
        MVec3dp::new(
            s.value,
            v.x,
            v.y,
            v.z,
            v.w,
            b.vx,
            b.vy,
            b.vz,
            b.mx,
            b.my,
            b.mz,
            t.x,
            t.y,
            t.z,
            t.w,
            ps.value,
        )
    }

    #[inline]
    pub fn gr0(self) -> Scalar3dp<T> {
        Scalar3dp::new(self.c0)
    }

    #[inline]
    pub fn gr1(self) -> Vec3dp<T> {
        Vec3dp::new(self.c1, self.c2, self.c3, self.c4)
    }

    #[inline]
    pub fn gr2(self) -> BiVec3dp<T> {
        BiVec3dp::new(self.c5, self.c6, self.c7, self.c8, self.c9, self.c10)
    }

    #[inline]
    pub fn gr3(self) -> TriVec3dp<T> {
        TriVec3dp::new(self.c11, self.c12, self.c13, self.c14)
    }

    #[inline]
    pub fn gr4(self) -> PScalar3dp<T> {
        PScalar3dp::new(self.c15)
    }
}

impl<T: Float> DualNum3dp<T> {
    /// Assembles the multivector from its grade parts.
    pub fn from_parts(s: Scalar3dp<T>, ps: PScalar3dp<T>) -> Self {
        DualNum3dp::new(s.value, ps.value)
    }

    #[inline]
    pub fn gr0(self) -> Scalar3dp<T> {
        Scalar3dp::new(self.c0)
    }

    #[inline]
    pub fn gr4(self) -> PScalar3dp<T> {
        PScalar3dp::new(self.c1)
    }
}

impl<T: Float> From<Scalar3dp<T>> for MVec3dpE<T> {
    #[inline]
    fn from(x: Scalar3dp<T>) -> Self {
        MVec3dpE::new(
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

impl<T: Float> From<BiVec3dp<T>> for MVec3dpE<T> {
    #[inline]
    fn from(x: BiVec3dp<T>) -> Self {
        MVec3dpE::new(T::zero(), x.vx, x.vy, x.vz, x.mx, x.my, x.mz, T::zero())
    }
}

impl<T: Float> From<PScalar3dp<T>> for MVec3dpE<T> {
    #[inline]
    fn from(x: PScalar3dp<T>) -> Self {
        MVec3dpE::new(
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

impl<T: Float> From<DualNum3dp<T>> for MVec3dpE<T> {
    #[inline]
    fn from(x: DualNum3dp<T>) -> Self {
        MVec3dpE::new(x.c0, T::zero(), T::zero(), T::zero(), T::zero(), T::zero(), T::zero(), x.c1)
    }
}

impl<T: Float> From<Vec3dp<T>> for MVec3dpU<T> {
    #[inline]
    fn from(x: Vec3dp<T>) -> Self {
        MVec3dpU::new(x.x, x.y, x.z, x.w, T::zero(), T::zero(), T::zero(), T::zero())
    }
}

impl<T: Float> From<TriVec3dp<T>> for MVec3dpU<T> {
    #[inline]
    fn from(x: TriVec3dp<T>) -> Self {
        MVec3dpU::new(T::zero(), T::zero(), T::zero(), T::zero(), x.x, x.y, x.z, x.w)
    }
}

impl<T: Float> From<Scalar3dp<T>> for MVec3dp<T> {
    #[inline]
    fn from(x: Scalar3dp<T>) -> Self {
        MVec3dp::new(
            x.value,
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
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

impl<T: Float> From<Vec3dp<T>> for MVec3dp<T> {
    #[inline]
    fn from(x: Vec3dp<T>) -> Self {
        MVec3dp::new(
            T::zero(),
            x.x,
            x.y,
            x.z,
            x.w,
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
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

impl<T: Float> From<BiVec3dp<T>> for MVec3dp<T> {
    #[inline]
    fn from(x: BiVec3dp<T>) -> Self {
        MVec3dp::new(
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            x.vx,
            x.vy,
            x.vz,
            x.mx,
            x.my,
            x.mz,
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
        )
    }
}

impl<T: Float> From<TriVec3dp<T>> for MVec3dp<T> {
    #[inline]
    fn from(x: TriVec3dp<T>) -> Self {
        MVec3dp::new(
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            x.x,
            x.y,
            x.z,
            x.w,
            T::zero(),
        )
    }
}

impl<T: Float> From<PScalar3dp<T>> for MVec3dp<T> {
    #[inline]
    fn from(x: PScalar3dp<T>) -> Self {
        MVec3dp::new(
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
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

impl<T: Float> From<MVec3dpE<T>> for MVec3dp<T> {
    #[inline]
    fn from(x: MVec3dpE<T>) -> Self {
        MVec3dp::new(
            x.c0,
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            x.c1,
            x.c2,
            x.c3,
            x.c4,
            x.c5,
            x.c6,
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            x.c7,
        )
    }
}

impl<T: Float> From<MVec3dpU<T>> for MVec3dp<T> {
    #[inline]
    fn from(x: MVec3dpU<T>) -> Self {
        MVec3dp::new(
            T::zero(),
            x.c0,
            x.c1,
            x.c2,
            x.c3,
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            x.c4,
            x.c5,
            x.c6,
            x.c7,
            T::zero(),
        )
    }
}

impl<T: Float> From<DualNum3dp<T>> for MVec3dp<T> {
    #[inline]
    fn from(x: DualNum3dp<T>) -> Self {
        MVec3dp::new(
            x.c0,
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            x.c1,
        )
    }
}

impl<T: Float> From<Scalar3dp<T>> for DualNum3dp<T> {
    #[inline]
    fn from(x: Scalar3dp<T>) -> Self {
        DualNum3dp::new(x.value, T::zero())
    }
}

impl<T: Float> From<PScalar3dp<T>> for DualNum3dp<T> {
    #[inline]
    fn from(x: PScalar3dp<T>) -> Self {
        DualNum3dp::new(T::zero(), x.value)
    }
}

impl_mixed_sum! {
    Scalar3dp + Vec3dp = MVec3dp,
    Scalar3dp + BiVec3dp = MVec3dpE,
    Scalar3dp + TriVec3dp = MVec3dp,
    Scalar3dp + PScalar3dp = DualNum3dp,
    Scalar3dp + MVec3dpE = MVec3dpE,
    Scalar3dp + MVec3dpU = MVec3dp,
    Scalar3dp + MVec3dp = MVec3dp,
    Scalar3dp + DualNum3dp = DualNum3dp,
    Vec3dp + Scalar3dp = MVec3dp,
    Vec3dp + BiVec3dp = MVec3dp,
    Vec3dp + TriVec3dp = MVec3dpU,
    Vec3dp + PScalar3dp = MVec3dp,
    Vec3dp + MVec3dpE = MVec3dp,
    Vec3dp + MVec3dpU = MVec3dpU,
    Vec3dp + MVec3dp = MVec3dp,
    Vec3dp + DualNum3dp = MVec3dp,
    BiVec3dp + Scalar3dp = MVec3dpE,
    BiVec3dp + Vec3dp = MVec3dp,
    BiVec3dp + TriVec3dp = MVec3dp,
    BiVec3dp + PScalar3dp = MVec3dpE,
    BiVec3dp + MVec3dpE = MVec3dpE,
    BiVec3dp + MVec3dpU = MVec3dp,
    BiVec3dp + MVec3dp = MVec3dp,
    BiVec3dp + DualNum3dp = MVec3dpE,
    TriVec3dp + Scalar3dp = MVec3dp,
    TriVec3dp + Vec3dp = MVec3dpU,
    TriVec3dp + BiVec3dp = MVec3dp,
    TriVec3dp + PScalar3dp = MVec3dp,
    TriVec3dp + MVec3dpE = MVec3dp,
    TriVec3dp + MVec3dpU = MVec3dpU,
    TriVec3dp + MVec3dp = MVec3dp,
    TriVec3dp + DualNum3dp = MVec3dp,
    PScalar3dp + Scalar3dp = DualNum3dp,
    PScalar3dp + Vec3dp = MVec3dp,
    PScalar3dp + BiVec3dp = MVec3dpE,
    PScalar3dp + TriVec3dp = MVec3dp,
    PScalar3dp + MVec3dpE = MVec3dpE,
    PScalar3dp + MVec3dpU = MVec3dp,
    PScalar3dp + MVec3dp = MVec3dp,
    PScalar3dp + DualNum3dp = DualNum3dp,
    MVec3dpE + Scalar3dp = MVec3dpE,
    MVec3dpE + Vec3dp = MVec3dp,
    MVec3dpE + BiVec3dp = MVec3dpE,
    MVec3dpE + TriVec3dp = MVec3dp,
    MVec3dpE + PScalar3dp = MVec3dpE,
    MVec3dpE + MVec3dpU = MVec3dp,
    MVec3dpE + MVec3dp = MVec3dp,
    MVec3dpE + DualNum3dp = MVec3dpE,
    MVec3dpU + Scalar3dp = MVec3dp,
    MVec3dpU + Vec3dp = MVec3dpU,
    MVec3dpU + BiVec3dp = MVec3dp,
    MVec3dpU + TriVec3dp = MVec3dpU,
    MVec3dpU + PScalar3dp = MVec3dp,
    MVec3dpU + MVec3dpE = MVec3dp,
    MVec3dpU + MVec3dp = MVec3dp,
    MVec3dpU + DualNum3dp = MVec3dp,
    MVec3dp + Scalar3dp = MVec3dp,
    MVec3dp + Vec3dp = MVec3dp,
    MVec3dp + BiVec3dp = MVec3dp,
    MVec3dp + TriVec3dp = MVec3dp,
    MVec3dp + PScalar3dp = MVec3dp,
    MVec3dp + MVec3dpE = MVec3dp,
    MVec3dp + MVec3dpU = MVec3dp,
    MVec3dp + DualNum3dp = MVec3dp,
    DualNum3dp + Scalar3dp = DualNum3dp,
    DualNum3dp + Vec3dp = MVec3dp,
    DualNum3dp + BiVec3dp = MVec3dpE,
    DualNum3dp + TriVec3dp = MVec3dp,
    DualNum3dp + PScalar3dp = DualNum3dp,
    DualNum3dp + MVec3dpE = MVec3dpE,
    DualNum3dp + MVec3dpU = MVec3dp,
    DualNum3dp + MVec3dp = MVec3dp,
}
