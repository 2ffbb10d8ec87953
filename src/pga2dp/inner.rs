//! Dot products and left/right contractions.

use super::{BiVec2dp, MVec2dp, MVec2dpE, MVec2dpU, PScalar2dp, Scalar2dp, Vec2dp};
use crate::traits::{Dot, LeftContraction, RegressiveDot, RightContraction};
use num_traits::Float;

impl<T: Float> Dot<Scalar2dp<T>> for Scalar2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn dot(self, rhs: Scalar2dp<T>) -> Self::Output {
        Scalar2dp::new(self.value * rhs.value)
    }
}

impl<T: Float> Dot<Vec2dp<T>> for Vec2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn dot(self, rhs: Vec2dp<T>) -> Self::Output {
        Scalar2dp::new(self.x * rhs.x + self.y * rhs.y)
    }
}

impl<T: Float> Dot<BiVec2dp<T>> for BiVec2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn dot(self, rhs: BiVec2dp<T>) -> Self::Output {
        Scalar2dp::new(-self.z * rhs.z)
    }
}

impl<T: Float> Dot<MVec2dpE<T>> for MVec2dpE<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn dot(self, rhs: MVec2dpE<T>) -> Self::Output {
        Scalar2dp::new(self.c0 * rhs.c0 - self.c3 * rhs.c3)
    }
}

impl<T: Float> Dot<MVec2dpU<T>> for MVec2dpU<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn dot(self, rhs: MVec2dpU<T>) -> Self::Output {
        Scalar2dp::new(self.c0 * rhs.c0 + self.c1 * rhs.c1)
    }
}

impl<T: Float> Dot<MVec2dp<T>> for MVec2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn dot(self, rhs: MVec2dp<T>) -> Self::Output {
        Scalar2dp::new(self.c0 * rhs.c0 + self.c1 * rhs.c1 + self.c2 * rhs.c2 - self.c6 * rhs.c6)
    }
}

impl<T: Float> RegressiveDot<Vec2dp<T>> for Vec2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn rdot(self, rhs: Vec2dp<T>) -> Self::Output {
        PScalar2dp::new(-self.z * rhs.z)
    }
}

impl<T: Float> RegressiveDot<BiVec2dp<T>> for BiVec2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn rdot(self, rhs: BiVec2dp<T>) -> Self::Output {
        PScalar2dp::new(self.x * rhs.x + self.y * rhs.y)
    }
}

impl<T: Float> RegressiveDot<PScalar2dp<T>> for PScalar2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn rdot(self, rhs: PScalar2dp<T>) -> Self::Output {
        PScalar2dp::new(self.value * rhs.value)
    }
}

impl<T: Float> RegressiveDot<MVec2dpE<T>> for MVec2dpE<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn rdot(self, rhs: MVec2dpE<T>) -> Self::Output {
        PScalar2dp::new(self.c1 * rhs.c1 + self.c2 * rhs.c2)
    }
}

impl<T: Float> RegressiveDot<MVec2dpU<T>> for MVec2dpU<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn rdot(self, rhs: MVec2dpU<T>) -> Self::Output {
        PScalar2dp::new(self.c3 * rhs.c3 - self.c2 * rhs.c2)
    }
}

impl<T: Float> RegressiveDot<MVec2dp<T>> for MVec2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn rdot(self, rhs: MVec2dp<T>) -> Self::Output {
        PScalar2dp::new(self.c4 * rhs.c4 - self.c3 * rhs.c3 + self.c5 * rhs.c5 + self.c7 * rhs.c7)
    }
}

impl<T: Float> LeftContraction<Scalar2dp<T>> for Scalar2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn lcontr(self, rhs: Scalar2dp<T>) -> Self::Output {
        Scalar2dp::new(self.value * rhs.value)
    }
}

impl<T: Float> LeftContraction<Vec2dp<T>> for Scalar2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn lcontr(self, rhs: Vec2dp<T>) -> Self::Output {
        Vec2dp::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z)
    }
}

impl<T: Float> LeftContraction<BiVec2dp<T>> for Scalar2dp<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn lcontr(self, rhs: BiVec2dp<T>) -> Self::Output {
        BiVec2dp::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z)
    }
}

impl<T: Float> LeftContraction<PScalar2dp<T>> for Scalar2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn lcontr(self, rhs: PScalar2dp<T>) -> Self::Output {
        PScalar2dp::new(self.value * rhs.value)
    }
}

impl<T: Float> LeftContraction<Vec2dp<T>> for Vec2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn lcontr(self, rhs: Vec2dp<T>) -> Self::Output {
        Scalar2dp::new(self.x * rhs.x + self.y * rhs.y)
    }
}

impl<T: Float> LeftContraction<BiVec2dp<T>> for Vec2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn lcontr(self, rhs: BiVec2dp<T>) -> Self::Output {
        Vec2dp::new(-self.y * rhs.z, self.x * rhs.z, self.y * rhs.x - self.x * rhs.y)
    }
}

impl<T: Float> LeftContraction<PScalar2dp<T>> for Vec2dp<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn lcontr(self, rhs: PScalar2dp<T>) -> Self::Output {
        BiVec2dp::new(self.x * rhs.value, self.y * rhs.value, T::zero())
    }
}

impl<T: Float> LeftContraction<BiVec2dp<T>> for BiVec2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn lcontr(self, rhs: BiVec2dp<T>) -> Self::Output {
        Scalar2dp::new(-self.z * rhs.z)
    }
}

impl<T: Float> LeftContraction<PScalar2dp<T>> for BiVec2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn lcontr(self, rhs: PScalar2dp<T>) -> Self::Output {
        Vec2dp::new(T::zero(), T::zero(), -self.z * rhs.value)
    }
}

impl<T: Float> LeftContraction<MVec2dp<T>> for MVec2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn lcontr(self, rhs: MVec2dp<T>) -> Self::Output {
        MVec2dp::new(
            self.c0 * rhs.c0 + self.c1 * rhs.c1 + self.c2 * rhs.c2 - self.c6 * rhs.c6,
            self.c0 * rhs.c1 - self.c2 * rhs.c6,
            self.c0 * rhs.c2 + self.c1 * rhs.c6,
            self.c0 * rhs.c3 - self.c1 * rhs.c5 + self.c2 * rhs.c4 - self.c6 * rhs.c7,
            self.c0 * rhs.c4 + self.c1 * rhs.c7,
            self.c0 * rhs.c5 + self.c2 * rhs.c7,
            self.c0 * rhs.c6,
            self.c0 * rhs.c7,
        )
    }
}

impl<T: Float> RightContraction<Scalar2dp<T>> for Scalar2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn rcontr(self, rhs: Scalar2dp<T>) -> Self::Output {
        Scalar2dp::new(self.value * rhs.value)
    }
}

impl<T: Float> RightContraction<Scalar2dp<T>> for Vec2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn rcontr(self, rhs: Scalar2dp<T>) -> Self::Output {
        Vec2dp::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value)
    }
}

impl<T: Float> RightContraction<Vec2dp<T>> for Vec2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn rcontr(self, rhs: Vec2dp<T>) -> Self::Output {
        Scalar2dp::new(self.x * rhs.x + self.y * rhs.y)
    }
}

impl<T: Float> RightContraction<Scalar2dp<T>> for BiVec2dp<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn rcontr(self, rhs: Scalar2dp<T>) -> Self::Output {
        BiVec2dp::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value)
    }
}

impl<T: Float> RightContraction<Vec2dp<T>> for BiVec2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn rcontr(self, rhs: Vec2dp<T>) -> Self::Output {
        Vec2dp::new(self.z * rhs.y, -self.z * rhs.x, self.y * rhs.x - self.x * rhs.y)
    }
}

impl<T: Float> RightContraction<BiVec2dp<T>> for BiVec2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn rcontr(self, rhs: BiVec2dp<T>) -> Self::Output {
        Scalar2dp::new(-self.z * rhs.z)
    }
}

impl<T: Float> RightContraction<Scalar2dp<T>> for PScalar2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn rcontr(self, rhs: Scalar2dp<T>) -> Self::Output {
        PScalar2dp::new(self.value * rhs.value)
    }
}

impl<T: Float> RightContraction<Vec2dp<T>> for PScalar2dp<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn rcontr(self, rhs: Vec2dp<T>) -> Self::Output {
        BiVec2dp::new(self.value * rhs.x, self.value * rhs.y, T::zero())
    }
}

impl<T: Float> RightContraction<BiVec2dp<T>> for PScalar2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn rcontr(self, rhs: BiVec2dp<T>) -> Self::Output {
        Vec2dp::new(T::zero(), T::zero(), -self.value * rhs.z)
    }
}

impl<T: Float> RightContraction<MVec2dp<T>> for MVec2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn rcontr(self, rhs: MVec2dp<T>) -> Self::Output {
        MVec2dp::new(
            self.c0 * rhs.c0 + self.c1 * rhs.c1 + self.c2 * rhs.c2 - self.c6 * rhs.c6,
            self.c1 * rhs.c0 + self.c6 * rhs.c2,
            self.c2 * rhs.c0 - self.c6 * rhs.c1,
            self.c3 * rhs.c0 - self.c4 * rhs.c2 + self.c5 * rhs.c1 - self.c7 * rhs.c6,
            self.c4 * rhs.c0 + self.c7 * rhs.c1,
            self.c5 * rhs.c0 + self.c7 * rhs.c2,
            self.c6 * rhs.c0,
            self.c7 * rhs.c0,
        )
    }
}

impl_contraction_ops! {
    Scalar2dp << Scalar2dp,
    Scalar2dp << Vec2dp,
    Scalar2dp << BiVec2dp,
    Scalar2dp << PScalar2dp,
    Vec2dp << Vec2dp,
    Vec2dp << BiVec2dp,
    Vec2dp << PScalar2dp,
    BiVec2dp << BiVec2dp,
    BiVec2dp << PScalar2dp,
    MVec2dp << MVec2dp,
}

impl_contraction_ops! {
    Scalar2dp >> Scalar2dp,
    Vec2dp >> Scalar2dp,
    Vec2dp >> Vec2dp,
    BiVec2dp >> Scalar2dp,
    BiVec2dp >> Vec2dp,
    BiVec2dp >> BiVec2dp,
    PScalar2dp >> Scalar2dp,
    PScalar2dp >> Vec2dp,
    PScalar2dp >> BiVec2dp,
    MVec2dp >> MVec2dp,
}
