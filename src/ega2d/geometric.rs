//! Geometric product and commutator product.

use super::{MVec2d, MVec2dE, PScalar2d, Scalar2d, Vec2d};
use crate::traits::{Commutator, Geometric};
use num_traits::Float;

impl<T: Float> Geometric<Scalar2d<T>> for Scalar2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn gpr(self, rhs: Scalar2d<T>) -> Self::Output {
        Scalar2d::new(self.value * rhs.value)
    }
}

impl<T: Float> Geometric<Vec2d<T>> for Scalar2d<T> {
    type Output = Vec2d<T>;

    #[inline]
    fn gpr(self, rhs: Vec2d<T>) -> Self::Output {
        Vec2d::new(self.value * rhs.x, self.value * rhs.y)
    }
}

impl<T: Float> Geometric<PScalar2d<T>> for Scalar2d<T> {
    type Output = PScalar2d<T>;

    #[inline]
    fn gpr(self, rhs: PScalar2d<T>) -> Self::Output {
        PScalar2d::new(self.value * rhs.value)
    }
}

impl<T: Float> Geometric<MVec2dE<T>> for Scalar2d<T> {
    type Output = MVec2dE<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dE<T>) -> Self::Output {
        MVec2dE::new(self.value * rhs.c0, self.value * rhs.c1)
    }
}

impl<T: Float> Geometric<MVec2d<T>> for Scalar2d<T> {
    type Output = MVec2d<T>;

    #[inline]
    fn gpr(self, rhs: MVec2d<T>) -> Self::Output {
        MVec2d::new(
            self.value * rhs.c0,
            self.value * rhs.c1,
            self.value * rhs.c2,
            self.value * rhs.c3,
        )
    }
}

impl<T: Float> Geometric<Scalar2d<T>> for Vec2d<T> {
    type Output = Vec2d<T>;

    #[inline]
    fn gpr(self, rhs: Scalar2d<T>) -> Self::Output {
        Vec2d::new(self.x * rhs.value, self.y * rhs.value)
    }
}

impl<T: Float> Geometric<Vec2d<T>> for Vec2d<T> {
    type Output = MVec2dE<T>;

    #[inline]
    fn gpr(self, rhs: Vec2d<T>) -> Self::Output {
        MVec2dE::new(self.x * rhs.x + self.y * rhs.y, self.x * rhs.y - self.y * rhs.x)
    }
}

impl<T: Float> Geometric<PScalar2d<T>> for Vec2d<T> {
    type Output = Vec2d<T>;

    #[inline]
    fn gpr(self, rhs: PScalar2d<T>) -> Self::Output {
        Vec2d::new(-self.y * rhs.value, self.x * rhs.value)
    }
}

impl<T: Float> Geometric<MVec2dE<T>> for Vec2d<T> {
    type Output = Vec2d<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dE<T>) -> Self::Output {
        Vec2d::new(self.x * rhs.c0 - self.y * rhs.c1, self.x * rhs.c1 + self.y * rhs.c0)
    }
}

impl<T: Float> Geometric<MVec2d<T>> for Vec2d<T> {
    type Output = MVec2d<T>;

    #[inline]
    fn gpr(self, rhs: MVec2d<T>) -> Self::Output {
        MVec2d::new(
            self.x * rhs.c1 + self.y * rhs.c2,
            self.x * rhs.c0 - self.y * rhs.c3,
            self.x * rhs.c3 + self.y * rhs.c0,
            self.x * rhs.c2 - self.y * rhs.c1,
        )
    }
}

impl<T: Float> Geometric<Scalar2d<T>> for PScalar2d<T> {
    type Output = PScalar2d<T>;

    #[inline]
    fn gpr(self, rhs: Scalar2d<T>) -> Self::Output {
        PScalar2d::new(self.value * rhs.value)
    }
}

impl<T: Float> Geometric<Vec2d<T>> for PScalar2d<T> {
    type Output = Vec2d<T>;

    #[inline]
    fn gpr(self, rhs: Vec2d<T>) -> Self::Output {
        Vec2d::new(self.value * rhs.y, -self.value * rhs.x)
    }
}

impl<T: Float> Geometric<PScalar2d<T>> for PScalar2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn gpr(self, rhs: PScalar2d<T>) -> Self::Output {
        Scalar2d::new(-self.value * rhs.value)
    }
}

impl<T: Float> Geometric<MVec2dE<T>> for PScalar2d<T> {
    type Output = MVec2dE<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dE<T>) -> Self::Output {
        MVec2dE::new(-self.value * rhs.c1, self.value * rhs.c0)
    }
}

impl<T: Float> Geometric<MVec2d<T>> for PScalar2d<T> {
    type Output = MVec2d<T>;

    #[inline]
    fn gpr(self, rhs: MVec2d<T>) -> Self::Output {
        MVec2d::new(
            -self.value * rhs.c3,
            self.value * rhs.c2,
            -self.value * rhs.c1,
            self.value * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<Scalar2d<T>> for MVec2dE<T> {
    type Output = MVec2dE<T>;

    #[inline]
    fn gpr(self, rhs: Scalar2d<T>) -> Self::Output {
        MVec2dE::new(self.c0 * rhs.value, self.c1 * rhs.value)
    }
}

impl<T: Float> Geometric<Vec2d<T>> for MVec2dE<T> {
    type Output = Vec2d<T>;

    #[inline]
    fn gpr(self, rhs: Vec2d<T>) -> Self::Output {
        Vec2d::new(self.c0 * rhs.x + self.c1 * rhs.y, self.c0 * rhs.y - self.c1 * rhs.x)
    }
}

impl<T: Float> Geometric<PScalar2d<T>> for MVec2dE<T> {
    type Output = MVec2dE<T>;

    #[inline]
    fn gpr(self, rhs: PScalar2d<T>) -> Self::Output {
        MVec2dE::new(-self.c1 * rhs.value, self.c0 * rhs.value)
    }
}

impl<T: Float> Geometric<MVec2dE<T>> for MVec2dE<T> {
    type Output = MVec2dE<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dE<T>) -> Self::Output {
        MVec2dE::new(self.c0 * rhs.c0 - self.c1 * rhs.c1, self.c0 * rhs.c1 + self.c1 * rhs.c0)
    }
}

impl<T: Float> Geometric<MVec2d<T>> for MVec2dE<T> {
    type Output = MVec2d<T>;

    #[inline]
    fn gpr(self, rhs: MVec2d<T>) -> Self::Output {
        MVec2d::new(
            self.c0 * rhs.c0 - self.c1 * rhs.c3,
            self.c0 * rhs.c1 + self.c1 * rhs.c2,
            self.c0 * rhs.c2 - self.c1 * rhs.c1,
            self.c0 * rhs.c3 + self.c1 * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<Scalar2d<T>> for MVec2d<T> {
    type Output = MVec2d<T>;

    #[inline]
    fn gpr(self, rhs: Scalar2d<T>) -> Self::Output {
        MVec2d::new(
            self.c0 * rhs.value,
            self.c1 * rhs.value,
            self.c2 * rhs.value,
            self.c3 * rhs.value,
        )
    }
}

impl<T: Float> Geometric<Vec2d<T>> for MVec2d<T> {
    type Output = MVec2d<T>;

    #[inline]
    fn gpr(self, rhs: Vec2d<T>) -> Self::Output {
        MVec2d::new(
            self.c1 * rhs.x + self.c2 * rhs.y,
            self.c0 * rhs.x + self.c3 * rhs.y,
            self.c0 * rhs.y - self.c3 * rhs.x,
            self.c1 * rhs.y - self.c2 * rhs.x,
        )
    }
}

impl<T: Float> Geometric<PScalar2d<T>> for MVec2d<T> {
    type Output = MVec2d<T>;

    #[inline]
    fn gpr(self, rhs: PScalar2d<T>) -> Self::Output {
        MVec2d::new(
            -self.c3 * rhs.value,
            -self.c2 * rhs.value,
            self.c1 * rhs.value,
            self.c0 * rhs.value,
        )
    }
}

impl<T: Float> Geometric<MVec2dE<T>> for MVec2d<T> {
    type Output = MVec2d<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dE<T>) -> Self::Output {
        MVec2d::new(
            self.c0 * rhs.c0 - self.c3 * rhs.c1,
            self.c1 * rhs.c0 - self.c2 * rhs.c1,
            self.c1 * rhs.c1 + self.c2 * rhs.c0,
            self.c0 * rhs.c1 + self.c3 * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<MVec2d<T>> for MVec2d<T> {
    type Output = MVec2d<T>;

    #[inline]
    fn gpr(self, rhs: MVec2d<T>) -> Self::Output {
        MVec2d::new(
            self.c0 * rhs.c0 + self.c1 * rhs.c1 + self.c2 * rhs.c2 - self.c3 * rhs.c3,
            self.c0 * rhs.c1 + self.c1 * rhs.c0 - self.c2 * rhs.c3 + self.c3 * rhs.c2,
            self.c0 * rhs.c2 + self.c1 * rhs.c3 + self.c2 * rhs.c0 - self.c3 * rhs.c1,
            self.c0 * rhs.c3 + self.c1 * rhs.c2 - self.c2 * rhs.c1 + self.c3 * rhs.c0,
        )
    }
}

impl_geometric_mul! {
    Scalar2d * Scalar2d,
    Scalar2d * Vec2d,
    Scalar2d * PScalar2d,
    Scalar2d * MVec2dE,
    Scalar2d * MVec2d,
    Vec2d * Scalar2d,
    Vec2d * Vec2d,
    Vec2d * PScalar2d,
    Vec2d * MVec2dE,
    Vec2d * MVec2d,
    PScalar2d * Scalar2d,
    PScalar2d * Vec2d,
    PScalar2d * PScalar2d,
    PScalar2d * MVec2dE,
    PScalar2d * MVec2d,
    MVec2dE * Scalar2d,
    MVec2dE * Vec2d,
    MVec2dE * PScalar2d,
    MVec2dE * MVec2dE,
    MVec2dE * MVec2d,
    MVec2d * Scalar2d,
    MVec2d * Vec2d,
    MVec2d * PScalar2d,
    MVec2d * MVec2dE,
    MVec2d * MVec2d,
}

impl<T: Float> Commutator<Vec2d<T>> for Vec2d<T> {
    type Output = PScalar2d<T>;

    #[inline]
    fn cmt(self, rhs: Vec2d<T>) -> Self::Output {
        PScalar2d::new(self.x * rhs.y - self.y * rhs.x)
    }
}

impl<T: Float> Commutator<PScalar2d<T>> for Vec2d<T> {
    type Output = Vec2d<T>;

    #[inline]
    fn cmt(self, rhs: PScalar2d<T>) -> Self::Output {
        Vec2d::new(-self.y * rhs.value, self.x * rhs.value)
    }
}

impl<T: Float> Commutator<Vec2d<T>> for PScalar2d<T> {
    type Output = Vec2d<T>;

    #[inline]
    fn cmt(self, rhs: Vec2d<T>) -> Self::Output {
        Vec2d::new(self.value * rhs.y, -self.value * rhs.x)
    }
}

impl<T: Float> Commutator<MVec2d<T>> for MVec2d<T> {
    type Output = MVec2d<T>;

    #[inline]
    fn cmt(self, rhs: MVec2d<T>) -> Self::Output {
        MVec2d::new(
            T::zero(),
            self.c3 * rhs.c2 - self.c2 * rhs.c3,
            self.c1 * rhs.c3 - self.c3 * rhs.c1,
            self.c1 * rhs.c2 - self.c2 * rhs.c1,
        )
    }
}
