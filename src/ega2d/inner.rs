//! Dot products and left/right contractions.

use super::{MVec2d, MVec2dE, PScalar2d, Scalar2d, Vec2d};
use crate::traits::{Dot, LeftContraction, RightContraction};
use num_traits::Float;

impl<T: Float> Dot<Scalar2d<T>> for Scalar2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn dot(self, rhs: Scalar2d<T>) -> Self::Output {
        Scalar2d::new(self.value * rhs.value)
    }
}

impl<T: Float> Dot<Vec2d<T>> for Vec2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn dot(self, rhs: Vec2d<T>) -> Self::Output {
        Scalar2d::new(self.x * rhs.x + self.y * rhs.y)
    }
}

impl<T: Float> Dot<PScalar2d<T>> for PScalar2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn dot(self, rhs: PScalar2d<T>) -> Self::Output {
        Scalar2d::new(-self.value * rhs.value)
    }
}

impl<T: Float> Dot<MVec2dE<T>> for MVec2dE<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn dot(self, rhs: MVec2dE<T>) -> Self::Output {
        Scalar2d::new(self.c0 * rhs.c0 - self.c1 * rhs.c1)
    }
}

impl<T: Float> Dot<MVec2d<T>> for MVec2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn dot(self, rhs: MVec2d<T>) -> Self::Output {
        Scalar2d::new(self.c0 * rhs.c0 + self.c1 * rhs.c1 + self.c2 * rhs.c2 - self.c3 * rhs.c3)
    }
}

impl<T: Float> LeftContraction<Scalar2d<T>> for Scalar2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn lcontr(self, rhs: Scalar2d<T>) -> Self::Output {
        Scalar2d::new(self.value * rhs.value)
    }
}

impl<T: Float> LeftContraction<Vec2d<T>> for Scalar2d<T> {
    type Output = Vec2d<T>;

    #[inline]
    fn lcontr(self, rhs: Vec2d<T>) -> Self::Output {
        Vec2d::new(self.value * rhs.x, self.value * rhs.y)
    }
}

impl<T: Float> LeftContraction<PScalar2d<T>> for Scalar2d<T> {
    type Output = PScalar2d<T>;

    #[inline]
    fn lcontr(self, rhs: PScalar2d<T>) -> Self::Output {
        PScalar2d::new(self.value * rhs.value)
    }
}

impl<T: Float> LeftContraction<Vec2d<T>> for Vec2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn lcontr(self, rhs: Vec2d<T>) -> Self::Output {
        Scalar2d::new(self.x * rhs.x + self.y * rhs.y)
    }
}

impl<T: Float> LeftContraction<PScalar2d<T>> for Vec2d<T> {
    type Output = Vec2d<T>;

    #[inline]
    fn lcontr(self, rhs: PScalar2d<T>) -> Self::Output {
        Vec2d::new(-self.y * rhs.value, self.x * rhs.value)
    }
}

impl<T: Float> LeftContraction<PScalar2d<T>> for PScalar2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn lcontr(self, rhs: PScalar2d<T>) -> Self::Output {
        Scalar2d::new(-self.value * rhs.value)
    }
}

impl<T: Float> LeftContraction<MVec2d<T>> for MVec2d<T> {
    type Output = MVec2d<T>;

    #[inline]
    fn lcontr(self, rhs: MVec2d<T>) -> Self::Output {
        MVec2d::new(
            self.c0 * rhs.c0 + self.c1 * rhs.c1 + self.c2 * rhs.c2 - self.c3 * rhs.c3,
            self.c0 * rhs.c1 - self.c2 * rhs.c3,
            self.c0 * rhs.c2 + self.c1 * rhs.c3,
            self.c0 * rhs.c3,
        )
    }
}

impl<T: Float> RightContraction<Scalar2d<T>> for Scalar2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn rcontr(self, rhs: Scalar2d<T>) -> Self::Output {
        Scalar2d::new(self.value * rhs.value)
    }
}

impl<T: Float> RightContraction<Scalar2d<T>> for Vec2d<T> {
    type Output = Vec2d<T>;

    #[inline]
    fn rcontr(self, rhs: Scalar2d<T>) -> Self::Output {
        Vec2d::new(self.x * rhs.value, self.y * rhs.value)
    }
}

impl<T: Float> RightContraction<Vec2d<T>> for Vec2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn rcontr(self, rhs: Vec2d<T>) -> Self::Output {
        Scalar2d::new(self.x * rhs.x + self.y * rhs.y)
    }
}

impl<T: Float> RightContraction<Scalar2d<T>> for PScalar2d<T> {
    type Output = PScalar2d<T>;

    #[inline]
    fn rcontr(self, rhs: Scalar2d<T>) -> Self::Output {
        PScalar2d::new(self.value * rhs.value)
    }
}

impl<T: Float> RightContraction<Vec2d<T>> for PScalar2d<T> {
    type Output = Vec2d<T>;

    #[inline]
    fn rcontr(self, rhs: Vec2d<T>) -> Self::Output {
        Vec2d::new(self.value * rhs.y, -self.value * rhs.x)
    }
}

impl<T: Float> RightContraction<PScalar2d<T>> for PScalar2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn rcontr(self, rhs: PScalar2d<T>) -> Self::Output {
        Scalar2d::new(-self.value * rhs.value)
    }
}

impl<T: Float> RightContraction<MVec2d<T>> for MVec2d<T> {
    type Output = MVec2d<T>;

    #[inline]
    fn rcontr(self, rhs: MVec2d<T>) -> Self::Output {
        MVec2d::new(
            self.c0 * rhs.c0 + self.c1 * rhs.c1 + self.c2 * rhs.c2 - self.c3 * rhs.c3,
            self.c1 * rhs.c0 + self.c3 * rhs.c2,
            self.c2 * rhs.c0 - self.c3 * rhs.c1,
            self.c3 * rhs.c0,
        )
    }
}

impl_contraction_ops! {
    Scalar2d << Scalar2d,
    Scalar2d << Vec2d,
    Scalar2d << PScalar2d,
    Vec2d << Vec2d,
    Vec2d << PScalar2d,
    PScalar2d << PScalar2d,
    MVec2d << MVec2d,
}

impl_contraction_ops! {
    Scalar2d >> Scalar2d,
    Vec2d >> Scalar2d,
    Vec2d >> Vec2d,
    PScalar2d >> Scalar2d,
    PScalar2d >> Vec2d,
    PScalar2d >> PScalar2d,
    MVec2d >> MVec2d,
}
