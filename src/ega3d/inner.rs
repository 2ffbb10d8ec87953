//! Dot products and left/right contractions.

use super::{BiVec3d, MVec3d, MVec3dE, MVec3dU, PScalar3d, Scalar3d, Vec3d};
use crate::traits::{Dot, LeftContraction, RightContraction};
use num_traits::Float;

impl<T: Float> Dot<Scalar3d<T>> for Scalar3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn dot(self, rhs: Scalar3d<T>) -> Self::Output {
        Scalar3d::new(self.value * rhs.value)
    }
}

impl<T: Float> Dot<Vec3d<T>> for Vec3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn dot(self, rhs: Vec3d<T>) -> Self::Output {
        Scalar3d::new(self.x * rhs.x + self.y * rhs.y + self.z * rhs.z)
    }
}

impl<T: Float> Dot<BiVec3d<T>> for BiVec3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn dot(self, rhs: BiVec3d<T>) -> Self::Output {
        Scalar3d::new(-self.x * rhs.x - self.y * rhs.y - self.z * rhs.z)
    }
}

impl<T: Float> Dot<PScalar3d<T>> for PScalar3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn dot(self, rhs: PScalar3d<T>) -> Self::Output {
        Scalar3d::new(-self.value * rhs.value)
    }
}

impl<T: Float> Dot<MVec3dE<T>> for MVec3dE<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn dot(self, rhs: MVec3dE<T>) -> Self::Output {
        Scalar3d::new(self.c0 * rhs.c0 - self.c1 * rhs.c1 - self.c2 * rhs.c2 - self.c3 * rhs.c3)
    }
}

impl<T: Float> Dot<MVec3dU<T>> for MVec3dU<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn dot(self, rhs: MVec3dU<T>) -> Self::Output {
        Scalar3d::new(self.c0 * rhs.c0 + self.c1 * rhs.c1 + self.c2 * rhs.c2 - self.c3 * rhs.c3)
    }
}

impl<T: Float> Dot<MVec3d<T>> for MVec3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn dot(self, rhs: MVec3d<T>) -> Self::Output {
        Scalar3d::new(
            self.c0 * rhs.c0 + self.c1 * rhs.c1 + self.c2 * rhs.c2 + self.c3 * rhs.c3
                - self.c4 * rhs.c4 - self.c5 * rhs.c5 - self.c6 * rhs.c6 - self.c7 * rhs.c7,
        )
    }
}

impl<T: Float> LeftContraction<Scalar3d<T>> for Scalar3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn lcontr(self, rhs: Scalar3d<T>) -> Self::Output {
        Scalar3d::new(self.value * rhs.value)
    }
}

impl<T: Float> LeftContraction<Vec3d<T>> for Scalar3d<T> {
    type Output = Vec3d<T>;

    #[inline]
    fn lcontr(self, rhs: Vec3d<T>) -> Self::Output {
        Vec3d::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z)
    }
}

impl<T: Float> LeftContraction<BiVec3d<T>> for Scalar3d<T> {
    type Output = BiVec3d<T>;

    #[inline]
    fn lcontr(self, rhs: BiVec3d<T>) -> Self::Output {
        BiVec3d::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z)
    }
}

impl<T: Float> LeftContraction<PScalar3d<T>> for Scalar3d<T> {
    type Output = PScalar3d<T>;

    #[inline]
    fn lcontr(self, rhs: PScalar3d<T>) -> Self::Output {
        PScalar3d::new(self.value * rhs.value)
    }
}

impl<T: Float> LeftContraction<Vec3d<T>> for Vec3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn lcontr(self, rhs: Vec3d<T>) -> Self::Output {
        Scalar3d::new(self.x * rhs.x + self.y * rhs.y + self.z * rhs.z)
    }
}

impl<T: Float> LeftContraction<BiVec3d<T>> for Vec3d<T> {
    type Output = Vec3d<T>;

    #[inline]
    fn lcontr(self, rhs: BiVec3d<T>) -> Self::Output {
        Vec3d::new(
            self.z * rhs.y - self.y * rhs.z,
            self.x * rhs.z - self.z * rhs.x,
            self.y * rhs.x - self.x * rhs.y,
        )
    }
}

impl<T: Float> LeftContraction<PScalar3d<T>> for Vec3d<T> {
    type Output = BiVec3d<T>;

    #[inline]
    fn lcontr(self, rhs: PScalar3d<T>) -> Self::Output {
        BiVec3d::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value)
    }
}

impl<T: Float> LeftContraction<BiVec3d<T>> for BiVec3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn lcontr(self, rhs: BiVec3d<T>) -> Self::Output {
        Scalar3d::new(-self.x * rhs.x - self.y * rhs.y - self.z * rhs.z)
    }
}

impl<T: Float> LeftContraction<PScalar3d<T>> for BiVec3d<T> {
    type Output = Vec3d<T>;

    #[inline]
    fn lcontr(self, rhs: PScalar3d<T>) -> Self::Output {
        Vec3d::new(-self.x * rhs.value, -self.y * rhs.value, -self.z * rhs.value)
    }
}

impl<T: Float> LeftContraction<PScalar3d<T>> for PScalar3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn lcontr(self, rhs: PScalar3d<T>) -> Self::Output {
        Scalar3d::new(-self.value * rhs.value)
    }
}

impl<T: Float> LeftContraction<MVec3d<T>> for MVec3d<T> {
    type Output = MVec3d<T>;

    #[inline]
    fn lcontr(self, rhs: MVec3d<T>) -> Self::Output {
        MVec3d::new(
            self.c0 * rhs.c0 + self.c1 * rhs.c1 + self.c2 * rhs.c2 + self.c3 * rhs.c3
                - self.c4 * rhs.c4 - self.c5 * rhs.c5 - self.c6 * rhs.c6 - self.c7 * rhs.c7,
            self.c0 * rhs.c1 - self.c2 * rhs.c6 + self.c3 * rhs.c5 - self.c4 * rhs.c7,
            self.c0 * rhs.c2 + self.c1 * rhs.c6 - self.c3 * rhs.c4 - self.c5 * rhs.c7,
            self.c0 * rhs.c3 - self.c1 * rhs.c5 + self.c2 * rhs.c4 - self.c6 * rhs.c7,
            self.c0 * rhs.c4 + self.c1 * rhs.c7,
            self.c0 * rhs.c5 + self.c2 * rhs.c7,
            self.c0 * rhs.c6 + self.c3 * rhs.c7,
            self.c0 * rhs.c7,
        )
    }
}

impl<T: Float> RightContraction<Scalar3d<T>> for Scalar3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn rcontr(self, rhs: Scalar3d<T>) -> Self::Output {
        Scalar3d::new(self.value * rhs.value)
    }
}

impl<T: Float> RightContraction<Scalar3d<T>> for Vec3d<T> {
    type Output = Vec3d<T>;

    #[inline]
    fn rcontr(self, rhs: Scalar3d<T>) -> Self::Output {
        Vec3d::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value)
    }
}

impl<T: Float> RightContraction<Vec3d<T>> for Vec3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn rcontr(self, rhs: Vec3d<T>) -> Self::Output {
        Scalar3d::new(self.x * rhs.x + self.y * rhs.y + self.z * rhs.z)
    }
}

impl<T: Float> RightContraction<Scalar3d<T>> for BiVec3d<T> {
    type Output = BiVec3d<T>;

    #[inline]
    fn rcontr(self, rhs: Scalar3d<T>) -> Self::Output {
        BiVec3d::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value)
    }
}

impl<T: Float> RightContraction<Vec3d<T>> for BiVec3d<T> {
    type Output = Vec3d<T>;

    #[inline]
    fn rcontr(self, rhs: Vec3d<T>) -> Self::Output {
        Vec3d::new(
            self.z * rhs.y - self.y * rhs.z,
            self.x * rhs.z - self.z * rhs.x,
            self.y * rhs.x - self.x * rhs.y,
        )
    }
}

impl<T: Float> RightContraction<BiVec3d<T>> for BiVec3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn rcontr(self, rhs: BiVec3d<T>) -> Self::Output {
        Scalar3d::new(-self.x * rhs.x - self.y * rhs.y - self.z * rhs.z)
    }
}

impl<T: Float> RightContraction<Scalar3d<T>> for PScalar3d<T> {
    type Output = PScalar3d<T>;

    #[inline]
    fn rcontr(self, rhs: Scalar3d<T>) -> Self::Output {
        PScalar3d::new(self.value * rhs.value)
    }
}

impl<T: Float> RightContraction<Vec3d<T>> for PScalar3d<T> {
    type Output = BiVec3d<T>;

    #[inline]
    fn rcontr(self, rhs: Vec3d<T>) -> Self::Output {
        BiVec3d::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z)
    }
}

impl<T: Float> RightContraction<BiVec3d<T>> for PScalar3d<T> {
    type Output = Vec3d<T>;

    #[inline]
    fn rcontr(self, rhs: BiVec3d<T>) -> Self::Output {
        Vec3d::new(-self.value * rhs.x, -self.value * rhs.y, -self.value * rhs.z)
    }
}

impl<T: Float> RightContraction<PScalar3d<T>> for PScalar3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn rcontr(self, rhs: PScalar3d<T>) -> Self::Output {
        Scalar3d::new(-self.value * rhs.value)
    }
}

impl<T: Float> RightContraction<MVec3d<T>> for MVec3d<T> {
    type Output = MVec3d<T>;

    #[inline]
    fn rcontr(self, rhs: MVec3d<T>) -> Self::Output {
        MVec3d::new(
            self.c0 * rhs.c0 + self.c1 * rhs.c1 + self.c2 * rhs.c2 + self.c3 * rhs.c3
                - self.c4 * rhs.c4 - self.c5 * rhs.c5 - self.c6 * rhs.c6 - self.c7 * rhs.c7,
            self.c1 * rhs.c0 - self.c5 * rhs.c3 + self.c6 * rhs.c2 - self.c7 * rhs.c4,
            self.c2 * rhs.c0 + self.c4 * rhs.c3 - self.c6 * rhs.c1 - self.c7 * rhs.c5,
            self.c3 * rhs.c0 - self.c4 * rhs.c2 + self.c5 * rhs.c1 - self.c7 * rhs.c6,
            self.c4 * rhs.c0 + self.c7 * rhs.c1,
            self.c5 * rhs.c0 + self.c7 * rhs.c2,
            self.c6 * rhs.c0 + self.c7 * rhs.c3,
            self.c7 * rhs.c0,
        )
    }
}

impl_contraction_ops! {
    Scalar3d << Scalar3d,
    Scalar3d << Vec3d,
    Scalar3d << BiVec3d,
    Scalar3d << PScalar3d,
    Vec3d << Vec3d,
    Vec3d << BiVec3d,
    Vec3d << PScalar3d,
    BiVec3d << BiVec3d,
    BiVec3d << PScalar3d,
    PScalar3d << PScalar3d,
    MVec3d << MVec3d,
}

impl_contraction_ops! {
    Scalar3d >> Scalar3d,
    Vec3d >> Scalar3d,
    Vec3d >> Vec3d,
    BiVec3d >> Scalar3d,
    BiVec3d >> Vec3d,
    BiVec3d >> BiVec3d,
    PScalar3d >> Scalar3d,
    PScalar3d >> Vec3d,
    PScalar3d >> BiVec3d,
    PScalar3d >> PScalar3d,
    MVec3d >> MVec3d,
}
