//! Dot products and left/right contractions.

use super::{BiVec3dp, MVec3dp, MVec3dpE, MVec3dpU, PScalar3dp, Scalar3dp, TriVec3dp, Vec3dp};
use crate::traits::{Dot, LeftContraction, RegressiveDot, RightContraction};
use num_traits::Float;

impl<T: Float> Dot<Scalar3dp<T>> for Scalar3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn dot(self, rhs: Scalar3dp<T>) -> Self::Output {
        Scalar3dp::new(self.value * rhs.value)
    }
}

impl<T: Float> Dot<Vec3dp<T>> for Vec3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn dot(self, rhs: Vec3dp<T>) -> Self::Output {
        Scalar3dp::new(self.x * rhs.x + self.y * rhs.y + self.z * rhs.z)
    }
}

impl<T: Float> Dot<BiVec3dp<T>> for BiVec3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn dot(self, rhs: BiVec3dp<T>) -> Self::Output {
        Scalar3dp::new(-self.mx * rhs.mx - self.my * rhs.my - self.mz * rhs.mz)
    }
}

impl<T: Float> Dot<TriVec3dp<T>> for TriVec3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn dot(self, rhs: TriVec3dp<T>) -> Self::Output {
        Scalar3dp::new(-self.w * rhs.w)
    }
}

impl<T: Float> Dot<MVec3dpE<T>> for MVec3dpE<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn dot(self, rhs: MVec3dpE<T>) -> Self::Output {
        Scalar3dp::new(self.c0 * rhs.c0 - self.c4 * rhs.c4 - self.c5 * rhs.c5 - self.c6 * rhs.c6)
    }
}

impl<T: Float> Dot<MVec3dpU<T>> for MVec3dpU<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn dot(self, rhs: MVec3dpU<T>) -> Self::Output {
        Scalar3dp::new(self.c0 * rhs.c0 + self.c1 * rhs.c1 + self.c2 * rhs.c2 - self.c7 * rhs.c7)
    }
}

impl<T: Float> Dot<MVec3dp<T>> for MVec3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn dot(self, rhs: MVec3dp<T>) -> Self::Output {
        Scalar3dp::new(
            self.c0 * rhs.c0 + self.c1 * rhs.c1 + self.c2 * rhs.c2 + self.c3 * rhs.c3
                - self.c8 * rhs.c8 - self.c9 * rhs.c9 - self.c10 * rhs.c10 - self.c14 * rhs.c14,
        )
    }
}

impl<T: Float> RegressiveDot<Vec3dp<T>> for Vec3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn rdot(self, rhs: Vec3dp<T>) -> Self::Output {
        PScalar3dp::new(-self.w * rhs.w)
    }
}

impl<T: Float> RegressiveDot<BiVec3dp<T>> for BiVec3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn rdot(self, rhs: BiVec3dp<T>) -> Self::Output {
        PScalar3dp::new(-self.vx * rhs.vx - self.vy * rhs.vy - self.vz * rhs.vz)
    }
}

impl<T: Float> RegressiveDot<TriVec3dp<T>> for TriVec3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn rdot(self, rhs: TriVec3dp<T>) -> Self::Output {
        PScalar3dp::new(self.x * rhs.x + self.y * rhs.y + self.z * rhs.z)
    }
}

impl<T: Float> RegressiveDot<PScalar3dp<T>> for PScalar3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn rdot(self, rhs: PScalar3dp<T>) -> Self::Output {
        PScalar3dp::new(self.value * rhs.value)
    }
}

impl<T: Float> RegressiveDot<MVec3dpE<T>> for MVec3dpE<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn rdot(self, rhs: MVec3dpE<T>) -> Self::Output {
        PScalar3dp::new(self.c7 * rhs.c7 - self.c1 * rhs.c1 - self.c2 * rhs.c2 - self.c3 * rhs.c3)
    }
}

impl<T: Float> RegressiveDot<MVec3dpU<T>> for MVec3dpU<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn rdot(self, rhs: MVec3dpU<T>) -> Self::Output {
        PScalar3dp::new(self.c4 * rhs.c4 - self.c3 * rhs.c3 + self.c5 * rhs.c5 + self.c6 * rhs.c6)
    }
}

impl<T: Float> RegressiveDot<MVec3dp<T>> for MVec3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn rdot(self, rhs: MVec3dp<T>) -> Self::Output {
        PScalar3dp::new(
            self.c11 * rhs.c11 - self.c4 * rhs.c4 - self.c5 * rhs.c5 - self.c6 * rhs.c6
                - self.c7 * rhs.c7 + self.c12 * rhs.c12 + self.c13 * rhs.c13 + self.c15 * rhs.c15,
        )
    }
}

impl<T: Float> LeftContraction<Scalar3dp<T>> for Scalar3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn lcontr(self, rhs: Scalar3dp<T>) -> Self::Output {
        Scalar3dp::new(self.value * rhs.value)
    }
}

impl<T: Float> LeftContraction<Vec3dp<T>> for Scalar3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn lcontr(self, rhs: Vec3dp<T>) -> Self::Output {
        Vec3dp::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z, self.value * rhs.w)
    }
}

impl<T: Float> LeftContraction<BiVec3dp<T>> for Scalar3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn lcontr(self, rhs: BiVec3dp<T>) -> Self::Output {
        BiVec3dp::new(
            self.value * rhs.vx,
            self.value * rhs.vy,
            self.value * rhs.vz,
            self.value * rhs.mx,
            self.value * rhs.my,
            self.value * rhs.mz,
        )
    }
}

impl<T: Float> LeftContraction<TriVec3dp<T>> for Scalar3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn lcontr(self, rhs: TriVec3dp<T>) -> Self::Output {
        TriVec3dp::new(
            self.value * rhs.x,
            self.value * rhs.y,
            self.value * rhs.z,
            self.value * rhs.w,
        )
    }
}

impl<T: Float> LeftContraction<PScalar3dp<T>> for Scalar3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn lcontr(self, rhs: PScalar3dp<T>) -> Self::Output {
        PScalar3dp::new(self.value * rhs.value)
    }
}

impl<T: Float> LeftContraction<Vec3dp<T>> for Vec3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn lcontr(self, rhs: Vec3dp<T>) -> Self::Output {
        Scalar3dp::new(self.x * rhs.x + self.y * rhs.y + self.z * rhs.z)
    }
}

impl<T: Float> LeftContraction<BiVec3dp<T>> for Vec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn lcontr(self, rhs: BiVec3dp<T>) -> Self::Output {
        Vec3dp::new(
            self.z * rhs.my - self.y * rhs.mz,
            self.x * rhs.mz - self.z * rhs.mx,
            self.y * rhs.mx - self.x * rhs.my,
            -self.x * rhs.vx - self.y * rhs.vy - self.z * rhs.vz,
        )
    }
}

impl<T: Float> LeftContraction<TriVec3dp<T>> for Vec3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn lcontr(self, rhs: TriVec3dp<T>) -> Self::Output {
        BiVec3dp::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
            -self.x * rhs.w,
            -self.y * rhs.w,
            -self.z * rhs.w,
        )
    }
}

impl<T: Float> LeftContraction<PScalar3dp<T>> for Vec3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn lcontr(self, rhs: PScalar3dp<T>) -> Self::Output {
        TriVec3dp::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value, T::zero())
    }
}

impl<T: Float> LeftContraction<BiVec3dp<T>> for BiVec3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn lcontr(self, rhs: BiVec3dp<T>) -> Self::Output {
        Scalar3dp::new(-self.mx * rhs.mx - self.my * rhs.my - self.mz * rhs.mz)
    }
}

impl<T: Float> LeftContraction<TriVec3dp<T>> for BiVec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn lcontr(self, rhs: TriVec3dp<T>) -> Self::Output {
        Vec3dp::new(
            self.mx * rhs.w,
            self.my * rhs.w,
            self.mz * rhs.w,
            -self.mx * rhs.x - self.my * rhs.y - self.mz * rhs.z,
        )
    }
}

impl<T: Float> LeftContraction<PScalar3dp<T>> for BiVec3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn lcontr(self, rhs: PScalar3dp<T>) -> Self::Output {
        BiVec3dp::new(
            self.mx * rhs.value,
            self.my * rhs.value,
            self.mz * rhs.value,
            T::zero(),
            T::zero(),
            T::zero(),
        )
    }
}

impl<T: Float> LeftContraction<TriVec3dp<T>> for TriVec3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn lcontr(self, rhs: TriVec3dp<T>) -> Self::Output {
        Scalar3dp::new(-self.w * rhs.w)
    }
}

impl<T: Float> LeftContraction<PScalar3dp<T>> for TriVec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn lcontr(self, rhs: PScalar3dp<T>) -> Self::Output {
        Vec3dp::new(T::zero(), T::zero(), T::zero(), self.w * rhs.value)
    }
}

impl<T: Float> LeftContraction<MVec3dp<T>> for MVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn lcontr(self, rhs: MVec3dp<T>) -> Self::Output {
        MVec3dp::new(
            self.c0 * rhs.c0 + self.c1 * rhs.c1 + self.c2 * rhs.c2 + self.c3 * rhs.c3
                - self.c8 * rhs.c8 - self.c9 * rhs.c9 - self.c10 * rhs.c10 - self.c14 * rhs.c14,
            self.c0 * rhs.c1 - self.c2 * rhs.c10 + self.c3 * rhs.c9 + self.c8 * rhs.c14,
            self.c0 * rhs.c2 + self.c1 * rhs.c10 - self.c3 * rhs.c8 + self.c9 * rhs.c14,
            self.c0 * rhs.c3 - self.c1 * rhs.c9 + self.c2 * rhs.c8 + self.c10 * rhs.c14,
            self.c0 * rhs.c4 - self.c1 * rhs.c5 - self.c2 * rhs.c6 - self.c3 * rhs.c7
                - self.c8 * rhs.c11 - self.c9 * rhs.c12 - self.c10 * rhs.c13 + self.c14 * rhs.c15,
            self.c0 * rhs.c5 + self.c2 * rhs.c13 - self.c3 * rhs.c12 + self.c8 * rhs.c15,
            self.c0 * rhs.c6 - self.c1 * rhs.c13 + self.c3 * rhs.c11 + self.c9 * rhs.c15,
            self.c0 * rhs.c7 + self.c1 * rhs.c12 - self.c2 * rhs.c11 + self.c10 * rhs.c15,
            self.c0 * rhs.c8 - self.c1 * rhs.c14,
            self.c0 * rhs.c9 - self.c2 * rhs.c14,
            self.c0 * rhs.c10 - self.c3 * rhs.c14,
            self.c0 * rhs.c11 + self.c1 * rhs.c15,
            self.c0 * rhs.c12 + self.c2 * rhs.c15,
            self.c0 * rhs.c13 + self.c3 * rhs.c15,
            self.c0 * rhs.c14,
            self.c0 * rhs.c15,
        )
    }
}

impl<T: Float> RightContraction<Scalar3dp<T>> for Scalar3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn rcontr(self, rhs: Scalar3dp<T>) -> Self::Output {
        Scalar3dp::new(self.value * rhs.value)
    }
}

impl<T: Float> RightContraction<Scalar3dp<T>> for Vec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn rcontr(self, rhs: Scalar3dp<T>) -> Self::Output {
        Vec3dp::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value, self.w * rhs.value)
    }
}

impl<T: Float> RightContraction<Vec3dp<T>> for Vec3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn rcontr(self, rhs: Vec3dp<T>) -> Self::Output {
        Scalar3dp::new(self.x * rhs.x + self.y * rhs.y + self.z * rhs.z)
    }
}

impl<T: Float> RightContraction<Scalar3dp<T>> for BiVec3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn rcontr(self, rhs: Scalar3dp<T>) -> Self::Output {
        BiVec3dp::new(
            self.vx * rhs.value,
            self.vy * rhs.value,
            self.vz * rhs.value,
            self.mx * rhs.value,
            self.my * rhs.value,
            self.mz * rhs.value,
        )
    }
}

impl<T: Float> RightContraction<Vec3dp<T>> for BiVec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn rcontr(self, rhs: Vec3dp<T>) -> Self::Output {
        Vec3dp::new(
            self.mz * rhs.y - self.my * rhs.z,
            self.mx * rhs.z - self.mz * rhs.x,
            self.my * rhs.x - self.mx * rhs.y,
            self.vx * rhs.x + self.vy * rhs.y + self.vz * rhs.z,
        )
    }
}

impl<T: Float> RightContraction<BiVec3dp<T>> for BiVec3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn rcontr(self, rhs: BiVec3dp<T>) -> Self::Output {
        Scalar3dp::new(-self.mx * rhs.mx - self.my * rhs.my - self.mz * rhs.mz)
    }
}

impl<T: Float> RightContraction<Scalar3dp<T>> for TriVec3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn rcontr(self, rhs: Scalar3dp<T>) -> Self::Output {
        TriVec3dp::new(
            self.x * rhs.value,
            self.y * rhs.value,
            self.z * rhs.value,
            self.w * rhs.value,
        )
    }
}

impl<T: Float> RightContraction<Vec3dp<T>> for TriVec3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn rcontr(self, rhs: Vec3dp<T>) -> Self::Output {
        BiVec3dp::new(
            self.z * rhs.y - self.y * rhs.z,
            self.x * rhs.z - self.z * rhs.x,
            self.y * rhs.x - self.x * rhs.y,
            -self.w * rhs.x,
            -self.w * rhs.y,
            -self.w * rhs.z,
        )
    }
}

impl<T: Float> RightContraction<BiVec3dp<T>> for TriVec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn rcontr(self, rhs: BiVec3dp<T>) -> Self::Output {
        Vec3dp::new(
            self.w * rhs.mx,
            self.w * rhs.my,
            self.w * rhs.mz,
            -self.x * rhs.mx - self.y * rhs.my - self.z * rhs.mz,
        )
    }
}

impl<T: Float> RightContraction<TriVec3dp<T>> for TriVec3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn rcontr(self, rhs: TriVec3dp<T>) -> Self::Output {
        Scalar3dp::new(-self.w * rhs.w)
    }
}

impl<T: Float> RightContraction<Scalar3dp<T>> for PScalar3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn rcontr(self, rhs: Scalar3dp<T>) -> Self::Output {
        PScalar3dp::new(self.value * rhs.value)
    }
}

impl<T: Float> RightContraction<Vec3dp<T>> for PScalar3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn rcontr(self, rhs: Vec3dp<T>) -> Self::Output {
        TriVec3dp::new(-self.value * rhs.x, -self.value * rhs.y, -self.value * rhs.z, T::zero())
    }
}

impl<T: Float> RightContraction<BiVec3dp<T>> for PScalar3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn rcontr(self, rhs: BiVec3dp<T>) -> Self::Output {
        BiVec3dp::new(
            self.value * rhs.mx,
            self.value * rhs.my,
            self.value * rhs.mz,
            T::zero(),
            T::zero(),
            T::zero(),
        )
    }
}

impl<T: Float> RightContraction<TriVec3dp<T>> for PScalar3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn rcontr(self, rhs: TriVec3dp<T>) -> Self::Output {
        Vec3dp::new(T::zero(), T::zero(), T::zero(), -self.value * rhs.w)
    }
}

impl<T: Float> RightContraction<MVec3dp<T>> for MVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn rcontr(self, rhs: MVec3dp<T>) -> Self::Output {
        MVec3dp::new(
            self.c0 * rhs.c0 + self.c1 * rhs.c1 + self.c2 * rhs.c2 + self.c3 * rhs.c3
                - self.c8 * rhs.c8 - self.c9 * rhs.c9 - self.c10 * rhs.c10 - self.c14 * rhs.c14,
            self.c1 * rhs.c0 - self.c9 * rhs.c3 + self.c10 * rhs.c2 + self.c14 * rhs.c8,
            self.c2 * rhs.c0 + self.c8 * rhs.c3 - self.c10 * rhs.c1 + self.c14 * rhs.c9,
            self.c3 * rhs.c0 - self.c8 * rhs.c2 + self.c9 * rhs.c1 + self.c14 * rhs.c10,
            self.c4 * rhs.c0 + self.c5 * rhs.c1 + self.c6 * rhs.c2 + self.c7 * rhs.c3
                - self.c11 * rhs.c8 - self.c12 * rhs.c9 - self.c13 * rhs.c10 - self.c15 * rhs.c14,
            self.c5 * rhs.c0 - self.c12 * rhs.c3 + self.c13 * rhs.c2 + self.c15 * rhs.c8,
            self.c6 * rhs.c0 + self.c11 * rhs.c3 - self.c13 * rhs.c1 + self.c15 * rhs.c9,
            self.c7 * rhs.c0 - self.c11 * rhs.c2 + self.c12 * rhs.c1 + self.c15 * rhs.c10,
            self.c8 * rhs.c0 - self.c14 * rhs.c1,
            self.c9 * rhs.c0 - self.c14 * rhs.c2,
            self.c10 * rhs.c0 - self.c14 * rhs.c3,
            self.c11 * rhs.c0 - self.c15 * rhs.c1,
            self.c12 * rhs.c0 - self.c15 * rhs.c2,
            self.c13 * rhs.c0 - self.c15 * rhs.c3,
            self.c14 * rhs.c0,
            self.c15 * rhs.c0,
        )
    }
}

impl_contraction_ops! {
    Scalar3dp << Scalar3dp,
    Scalar3dp << Vec3dp,
    Scalar3dp << BiVec3dp,
    Scalar3dp << TriVec3dp,
    Scalar3dp << PScalar3dp,
    Vec3dp << Vec3dp,
    Vec3dp << BiVec3dp,
    Vec3dp << TriVec3dp,
    Vec3dp << PScalar3dp,
    BiVec3dp << BiVec3dp,
    BiVec3dp << TriVec3dp,
    BiVec3dp << PScalar3dp,
    TriVec3dp << TriVec3dp,
    TriVec3dp << PScalar3dp,
    MVec3dp << MVec3dp,
}

impl_contraction_ops! {
    Scalar3dp >> Scalar3dp,
    Vec3dp >> Scalar3dp,
    Vec3dp >> Vec3dp,
    BiVec3dp >> Scalar3dp,
    BiVec3dp >> Vec3dp,
    BiVec3dp >> BiVec3dp,
    TriVec3dp >> Scalar3dp,
    TriVec3dp >> Vec3dp,
    TriVec3dp >> BiVec3dp,
    TriVec3dp >> TriVec3dp,
    PScalar3dp >> Scalar3dp,
    PScalar3dp >> Vec3dp,
    PScalar3dp >> BiVec3dp,
    PScalar3dp >> TriVec3dp,
    MVec3dp >> MVec3dp,
}
