//! Geometric product and commutator product.

use super::{BiVec2dp, MVec2dp, MVec2dpE, MVec2dpU, PScalar2dp, Scalar2dp, Vec2dp};
use crate::traits::{Commutator, Geometric};
use num_traits::Float;

impl<T: Float> Geometric<Scalar2dp<T>> for Scalar2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn gpr(self, rhs: Scalar2dp<T>) -> Self::Output {
        Scalar2dp::new(self.value * rhs.value)
    }
}

impl<T: Float> Geometric<Vec2dp<T>> for Scalar2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn gpr(self, rhs: Vec2dp<T>) -> Self::Output {
        Vec2dp::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z)
    }
}

impl<T: Float> Geometric<BiVec2dp<T>> for Scalar2dp<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn gpr(self, rhs: BiVec2dp<T>) -> Self::Output {
        BiVec2dp::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z)
    }
}

impl<T: Float> Geometric<PScalar2dp<T>> for Scalar2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn gpr(self, rhs: PScalar2dp<T>) -> Self::Output {
        PScalar2dp::new(self.value * rhs.value)
    }
}

impl<T: Float> Geometric<MVec2dpE<T>> for Scalar2dp<T> {
    type Output = MVec2dpE<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dpE<T>) -> Self::Output {
        MVec2dpE::new(
            self.value * rhs.c0,
            self.value * rhs.c1,
            self.value * rhs.c2,
            self.value * rhs.c3,
        )
    }
}

impl<T: Float> Geometric<MVec2dpU<T>> for Scalar2dp<T> {
    type Output = MVec2dpU<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dpU<T>) -> Self::Output {
        MVec2dpU::new(
            self.value * rhs.c0,
            self.value * rhs.c1,
            self.value * rhs.c2,
            self.value * rhs.c3,
        )
    }
}

impl<T: Float> Geometric<MVec2dp<T>> for Scalar2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dp<T>) -> Self::Output {
        MVec2dp::new(
            self.value * rhs.c0,
            self.value * rhs.c1,
            self.value * rhs.c2,
            self.value * rhs.c3,
            self.value * rhs.c4,
            self.value * rhs.c5,
            self.value * rhs.c6,
            self.value * rhs.c7,
        )
    }
}

impl<T: Float> Geometric<Scalar2dp<T>> for Vec2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn gpr(self, rhs: Scalar2dp<T>) -> Self::Output {
        Vec2dp::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value)
    }
}

impl<T: Float> Geometric<Vec2dp<T>> for Vec2dp<T> {
    type Output = MVec2dpE<T>;

    #[inline]
    fn gpr(self, rhs: Vec2dp<T>) -> Self::Output {
        MVec2dpE::new(
            self.x * rhs.x + self.y * rhs.y,
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl<T: Float> Geometric<BiVec2dp<T>> for Vec2dp<T> {
    type Output = MVec2dpU<T>;

    #[inline]
    fn gpr(self, rhs: BiVec2dp<T>) -> Self::Output {
        MVec2dpU::new(
            -self.y * rhs.z,
            self.x * rhs.z,
            self.y * rhs.x - self.x * rhs.y,
            self.x * rhs.x + self.y * rhs.y + self.z * rhs.z,
        )
    }
}

impl<T: Float> Geometric<PScalar2dp<T>> for Vec2dp<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn gpr(self, rhs: PScalar2dp<T>) -> Self::Output {
        BiVec2dp::new(self.x * rhs.value, self.y * rhs.value, T::zero())
    }
}

impl<T: Float> Geometric<MVec2dpE<T>> for Vec2dp<T> {
    type Output = MVec2dpU<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dpE<T>) -> Self::Output {
        MVec2dpU::new(
            self.x * rhs.c0 - self.y * rhs.c3,
            self.x * rhs.c3 + self.y * rhs.c0,
            self.y * rhs.c1 - self.x * rhs.c2 + self.z * rhs.c0,
            self.x * rhs.c1 + self.y * rhs.c2 + self.z * rhs.c3,
        )
    }
}

impl<T: Float> Geometric<MVec2dpU<T>> for Vec2dp<T> {
    type Output = MVec2dpE<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dpU<T>) -> Self::Output {
        MVec2dpE::new(
            self.x * rhs.c0 + self.y * rhs.c1,
            self.x * rhs.c3 + self.y * rhs.c2 - self.z * rhs.c1,
            self.y * rhs.c3 - self.x * rhs.c2 + self.z * rhs.c0,
            self.x * rhs.c1 - self.y * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<MVec2dp<T>> for Vec2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dp<T>) -> Self::Output {
        MVec2dp::new(
            self.x * rhs.c1 + self.y * rhs.c2,
            self.x * rhs.c0 - self.y * rhs.c6,
            self.x * rhs.c6 + self.y * rhs.c0,
            self.y * rhs.c4 - self.x * rhs.c5 + self.z * rhs.c0,
            self.x * rhs.c7 + self.y * rhs.c3 - self.z * rhs.c2,
            self.y * rhs.c7 - self.x * rhs.c3 + self.z * rhs.c1,
            self.x * rhs.c2 - self.y * rhs.c1,
            self.x * rhs.c4 + self.y * rhs.c5 + self.z * rhs.c6,
        )
    }
}

impl<T: Float> Geometric<Scalar2dp<T>> for BiVec2dp<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn gpr(self, rhs: Scalar2dp<T>) -> Self::Output {
        BiVec2dp::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value)
    }
}

impl<T: Float> Geometric<Vec2dp<T>> for BiVec2dp<T> {
    type Output = MVec2dpU<T>;

    #[inline]
    fn gpr(self, rhs: Vec2dp<T>) -> Self::Output {
        MVec2dpU::new(
            self.z * rhs.y,
            -self.z * rhs.x,
            self.y * rhs.x - self.x * rhs.y,
            self.x * rhs.x + self.y * rhs.y + self.z * rhs.z,
        )
    }
}

impl<T: Float> Geometric<BiVec2dp<T>> for BiVec2dp<T> {
    type Output = MVec2dpE<T>;

    #[inline]
    fn gpr(self, rhs: BiVec2dp<T>) -> Self::Output {
        MVec2dpE::new(
            -self.z * rhs.z,
            self.z * rhs.y - self.y * rhs.z,
            self.x * rhs.z - self.z * rhs.x,
            T::zero(),
        )
    }
}

impl<T: Float> Geometric<PScalar2dp<T>> for BiVec2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn gpr(self, rhs: PScalar2dp<T>) -> Self::Output {
        Vec2dp::new(T::zero(), T::zero(), -self.z * rhs.value)
    }
}

impl<T: Float> Geometric<MVec2dpE<T>> for BiVec2dp<T> {
    type Output = MVec2dpE<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dpE<T>) -> Self::Output {
        MVec2dpE::new(
            -self.z * rhs.c3,
            self.x * rhs.c0 - self.y * rhs.c3 + self.z * rhs.c2,
            self.x * rhs.c3 + self.y * rhs.c0 - self.z * rhs.c1,
            self.z * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<MVec2dpU<T>> for BiVec2dp<T> {
    type Output = MVec2dpU<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dpU<T>) -> Self::Output {
        MVec2dpU::new(
            self.z * rhs.c1,
            -self.z * rhs.c0,
            self.y * rhs.c0 - self.x * rhs.c1 - self.z * rhs.c3,
            self.x * rhs.c0 + self.y * rhs.c1 + self.z * rhs.c2,
        )
    }
}

impl<T: Float> Geometric<MVec2dp<T>> for BiVec2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dp<T>) -> Self::Output {
        MVec2dp::new(
            -self.z * rhs.c6,
            self.z * rhs.c2,
            -self.z * rhs.c1,
            self.y * rhs.c1 - self.x * rhs.c2 - self.z * rhs.c7,
            self.x * rhs.c0 - self.y * rhs.c6 + self.z * rhs.c5,
            self.x * rhs.c6 + self.y * rhs.c0 - self.z * rhs.c4,
            self.z * rhs.c0,
            self.x * rhs.c1 + self.y * rhs.c2 + self.z * rhs.c3,
        )
    }
}

impl<T: Float> Geometric<Scalar2dp<T>> for PScalar2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn gpr(self, rhs: Scalar2dp<T>) -> Self::Output {
        PScalar2dp::new(self.value * rhs.value)
    }
}

impl<T: Float> Geometric<Vec2dp<T>> for PScalar2dp<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn gpr(self, rhs: Vec2dp<T>) -> Self::Output {
        BiVec2dp::new(self.value * rhs.x, self.value * rhs.y, T::zero())
    }
}

impl<T: Float> Geometric<BiVec2dp<T>> for PScalar2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn gpr(self, rhs: BiVec2dp<T>) -> Self::Output {
        Vec2dp::new(T::zero(), T::zero(), -self.value * rhs.z)
    }
}

impl<T: Float> Geometric<MVec2dpE<T>> for PScalar2dp<T> {
    type Output = MVec2dpU<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dpE<T>) -> Self::Output {
        MVec2dpU::new(T::zero(), T::zero(), -self.value * rhs.c3, self.value * rhs.c0)
    }
}

impl<T: Float> Geometric<MVec2dpU<T>> for PScalar2dp<T> {
    type Output = MVec2dpE<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dpU<T>) -> Self::Output {
        MVec2dpE::new(T::zero(), self.value * rhs.c0, self.value * rhs.c1, T::zero())
    }
}

impl<T: Float> Geometric<MVec2dp<T>> for PScalar2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dp<T>) -> Self::Output {
        MVec2dp::new(
            T::zero(),
            T::zero(),
            T::zero(),
            -self.value * rhs.c6,
            self.value * rhs.c1,
            self.value * rhs.c2,
            T::zero(),
            self.value * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<Scalar2dp<T>> for MVec2dpE<T> {
    type Output = MVec2dpE<T>;

    #[inline]
    fn gpr(self, rhs: Scalar2dp<T>) -> Self::Output {
        MVec2dpE::new(
            self.c0 * rhs.value,
            self.c1 * rhs.value,
            self.c2 * rhs.value,
            self.c3 * rhs.value,
        )
    }
}

impl<T: Float> Geometric<Vec2dp<T>> for MVec2dpE<T> {
    type Output = MVec2dpU<T>;

    #[inline]
    fn gpr(self, rhs: Vec2dp<T>) -> Self::Output {
        MVec2dpU::new(
            self.c0 * rhs.x + self.c3 * rhs.y,
            self.c0 * rhs.y - self.c3 * rhs.x,
            self.c0 * rhs.z - self.c1 * rhs.y + self.c2 * rhs.x,
            self.c1 * rhs.x + self.c2 * rhs.y + self.c3 * rhs.z,
        )
    }
}

impl<T: Float> Geometric<BiVec2dp<T>> for MVec2dpE<T> {
    type Output = MVec2dpE<T>;

    #[inline]
    fn gpr(self, rhs: BiVec2dp<T>) -> Self::Output {
        MVec2dpE::new(
            -self.c3 * rhs.z,
            self.c0 * rhs.x - self.c2 * rhs.z + self.c3 * rhs.y,
            self.c0 * rhs.y + self.c1 * rhs.z - self.c3 * rhs.x,
            self.c0 * rhs.z,
        )
    }
}

impl<T: Float> Geometric<PScalar2dp<T>> for MVec2dpE<T> {
    type Output = MVec2dpU<T>;

    #[inline]
    fn gpr(self, rhs: PScalar2dp<T>) -> Self::Output {
        MVec2dpU::new(T::zero(), T::zero(), -self.c3 * rhs.value, self.c0 * rhs.value)
    }
}

impl<T: Float> Geometric<MVec2dpE<T>> for MVec2dpE<T> {
    type Output = MVec2dpE<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dpE<T>) -> Self::Output {
        MVec2dpE::new(
            self.c0 * rhs.c0 - self.c3 * rhs.c3,
            self.c0 * rhs.c1 + self.c1 * rhs.c0 - self.c2 * rhs.c3 + self.c3 * rhs.c2,
            self.c0 * rhs.c2 + self.c1 * rhs.c3 + self.c2 * rhs.c0 - self.c3 * rhs.c1,
            self.c0 * rhs.c3 + self.c3 * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<MVec2dpU<T>> for MVec2dpE<T> {
    type Output = MVec2dpU<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dpU<T>) -> Self::Output {
        MVec2dpU::new(
            self.c0 * rhs.c0 + self.c3 * rhs.c1,
            self.c0 * rhs.c1 - self.c3 * rhs.c0,
            self.c0 * rhs.c2 - self.c1 * rhs.c1 + self.c2 * rhs.c0 - self.c3 * rhs.c3,
            self.c0 * rhs.c3 + self.c1 * rhs.c0 + self.c2 * rhs.c1 + self.c3 * rhs.c2,
        )
    }
}

impl<T: Float> Geometric<MVec2dp<T>> for MVec2dpE<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dp<T>) -> Self::Output {
        MVec2dp::new(
            self.c0 * rhs.c0 - self.c3 * rhs.c6,
            self.c0 * rhs.c1 + self.c3 * rhs.c2,
            self.c0 * rhs.c2 - self.c3 * rhs.c1,
            self.c0 * rhs.c3 - self.c1 * rhs.c2 + self.c2 * rhs.c1 - self.c3 * rhs.c7,
            self.c0 * rhs.c4 + self.c1 * rhs.c0 - self.c2 * rhs.c6 + self.c3 * rhs.c5,
            self.c0 * rhs.c5 + self.c1 * rhs.c6 + self.c2 * rhs.c0 - self.c3 * rhs.c4,
            self.c0 * rhs.c6 + self.c3 * rhs.c0,
            self.c0 * rhs.c7 + self.c1 * rhs.c1 + self.c2 * rhs.c2 + self.c3 * rhs.c3,
        )
    }
}

impl<T: Float> Geometric<Scalar2dp<T>> for MVec2dpU<T> {
    type Output = MVec2dpU<T>;

    #[inline]
    fn gpr(self, rhs: Scalar2dp<T>) -> Self::Output {
        MVec2dpU::new(
            self.c0 * rhs.value,
            self.c1 * rhs.value,
            self.c2 * rhs.value,
            self.c3 * rhs.value,
        )
    }
}

impl<T: Float> Geometric<Vec2dp<T>> for MVec2dpU<T> {
    type Output = MVec2dpE<T>;

    #[inline]
    fn gpr(self, rhs: Vec2dp<T>) -> Self::Output {
        MVec2dpE::new(
            self.c0 * rhs.x + self.c1 * rhs.y,
            self.c1 * rhs.z - self.c2 * rhs.y + self.c3 * rhs.x,
            self.c2 * rhs.x - self.c0 * rhs.z + self.c3 * rhs.y,
            self.c0 * rhs.y - self.c1 * rhs.x,
        )
    }
}

impl<T: Float> Geometric<BiVec2dp<T>> for MVec2dpU<T> {
    type Output = MVec2dpU<T>;

    #[inline]
    fn gpr(self, rhs: BiVec2dp<T>) -> Self::Output {
        MVec2dpU::new(
            -self.c1 * rhs.z,
            self.c0 * rhs.z,
            self.c1 * rhs.x - self.c0 * rhs.y - self.c3 * rhs.z,
            self.c0 * rhs.x + self.c1 * rhs.y + self.c2 * rhs.z,
        )
    }
}

impl<T: Float> Geometric<PScalar2dp<T>> for MVec2dpU<T> {
    type Output = MVec2dpE<T>;

    #[inline]
    fn gpr(self, rhs: PScalar2dp<T>) -> Self::Output {
        MVec2dpE::new(T::zero(), self.c0 * rhs.value, self.c1 * rhs.value, T::zero())
    }
}

impl<T: Float> Geometric<MVec2dpE<T>> for MVec2dpU<T> {
    type Output = MVec2dpU<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dpE<T>) -> Self::Output {
        MVec2dpU::new(
            self.c0 * rhs.c0 - self.c1 * rhs.c3,
            self.c0 * rhs.c3 + self.c1 * rhs.c0,
            self.c1 * rhs.c1 - self.c0 * rhs.c2 + self.c2 * rhs.c0 - self.c3 * rhs.c3,
            self.c0 * rhs.c1 + self.c1 * rhs.c2 + self.c2 * rhs.c3 + self.c3 * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<MVec2dpU<T>> for MVec2dpU<T> {
    type Output = MVec2dpE<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dpU<T>) -> Self::Output {
        MVec2dpE::new(
            self.c0 * rhs.c0 + self.c1 * rhs.c1,
            self.c0 * rhs.c3 + self.c1 * rhs.c2 - self.c2 * rhs.c1 + self.c3 * rhs.c0,
            self.c1 * rhs.c3 - self.c0 * rhs.c2 + self.c2 * rhs.c0 + self.c3 * rhs.c1,
            self.c0 * rhs.c1 - self.c1 * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<MVec2dp<T>> for MVec2dpU<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dp<T>) -> Self::Output {
        MVec2dp::new(
            self.c0 * rhs.c1 + self.c1 * rhs.c2,
            self.c0 * rhs.c0 - self.c1 * rhs.c6,
            self.c0 * rhs.c6 + self.c1 * rhs.c0,
            self.c1 * rhs.c4 - self.c0 * rhs.c5 + self.c2 * rhs.c0 - self.c3 * rhs.c6,
            self.c0 * rhs.c7 + self.c1 * rhs.c3 - self.c2 * rhs.c2 + self.c3 * rhs.c1,
            self.c1 * rhs.c7 - self.c0 * rhs.c3 + self.c2 * rhs.c1 + self.c3 * rhs.c2,
            self.c0 * rhs.c2 - self.c1 * rhs.c1,
            self.c0 * rhs.c4 + self.c1 * rhs.c5 + self.c2 * rhs.c6 + self.c3 * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<Scalar2dp<T>> for MVec2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn gpr(self, rhs: Scalar2dp<T>) -> Self::Output {
        MVec2dp::new(
            self.c0 * rhs.value,
            self.c1 * rhs.value,
            self.c2 * rhs.value,
            self.c3 * rhs.value,
            self.c4 * rhs.value,
            self.c5 * rhs.value,
            self.c6 * rhs.value,
            self.c7 * rhs.value,
        )
    }
}

impl<T: Float> Geometric<Vec2dp<T>> for MVec2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn gpr(self, rhs: Vec2dp<T>) -> Self::Output {
        MVec2dp::new(
            self.c1 * rhs.x + self.c2 * rhs.y,
            self.c0 * rhs.x + self.c6 * rhs.y,
            self.c0 * rhs.y - self.c6 * rhs.x,
            self.c0 * rhs.z - self.c4 * rhs.y + self.c5 * rhs.x,
            self.c2 * rhs.z - self.c3 * rhs.y + self.c7 * rhs.x,
            self.c3 * rhs.x - self.c1 * rhs.z + self.c7 * rhs.y,
            self.c1 * rhs.y - self.c2 * rhs.x,
            self.c4 * rhs.x + self.c5 * rhs.y + self.c6 * rhs.z,
        )
    }
}

impl<T: Float> Geometric<BiVec2dp<T>> for MVec2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn gpr(self, rhs: BiVec2dp<T>) -> Self::Output {
        MVec2dp::new(
            -self.c6 * rhs.z,
            -self.c2 * rhs.z,
            self.c1 * rhs.z,
            self.c2 * rhs.x - self.c1 * rhs.y - self.c7 * rhs.z,
            self.c0 * rhs.x - self.c5 * rhs.z + self.c6 * rhs.y,
            self.c0 * rhs.y + self.c4 * rhs.z - self.c6 * rhs.x,
            self.c0 * rhs.z,
            self.c1 * rhs.x + self.c2 * rhs.y + self.c3 * rhs.z,
        )
    }
}

impl<T: Float> Geometric<PScalar2dp<T>> for MVec2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn gpr(self, rhs: PScalar2dp<T>) -> Self::Output {
        MVec2dp::new(
            T::zero(),
            T::zero(),
            T::zero(),
            -self.c6 * rhs.value,
            self.c1 * rhs.value,
            self.c2 * rhs.value,
            T::zero(),
            self.c0 * rhs.value,
        )
    }
}

impl<T: Float> Geometric<MVec2dpE<T>> for MVec2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dpE<T>) -> Self::Output {
        MVec2dp::new(
            self.c0 * rhs.c0 - self.c6 * rhs.c3,
            self.c1 * rhs.c0 - self.c2 * rhs.c3,
            self.c1 * rhs.c3 + self.c2 * rhs.c0,
            self.c2 * rhs.c1 - self.c1 * rhs.c2 + self.c3 * rhs.c0 - self.c7 * rhs.c3,
            self.c0 * rhs.c1 + self.c4 * rhs.c0 - self.c5 * rhs.c3 + self.c6 * rhs.c2,
            self.c0 * rhs.c2 + self.c4 * rhs.c3 + self.c5 * rhs.c0 - self.c6 * rhs.c1,
            self.c0 * rhs.c3 + self.c6 * rhs.c0,
            self.c1 * rhs.c1 + self.c2 * rhs.c2 + self.c3 * rhs.c3 + self.c7 * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<MVec2dpU<T>> for MVec2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dpU<T>) -> Self::Output {
        MVec2dp::new(
            self.c1 * rhs.c0 + self.c2 * rhs.c1,
            self.c0 * rhs.c0 + self.c6 * rhs.c1,
            self.c0 * rhs.c1 - self.c6 * rhs.c0,
            self.c0 * rhs.c2 - self.c4 * rhs.c1 + self.c5 * rhs.c0 - self.c6 * rhs.c3,
            self.c1 * rhs.c3 + self.c2 * rhs.c2 - self.c3 * rhs.c1 + self.c7 * rhs.c0,
            self.c2 * rhs.c3 - self.c1 * rhs.c2 + self.c3 * rhs.c0 + self.c7 * rhs.c1,
            self.c1 * rhs.c1 - self.c2 * rhs.c0,
            self.c0 * rhs.c3 + self.c4 * rhs.c0 + self.c5 * rhs.c1 + self.c6 * rhs.c2,
        )
    }
}

impl<T: Float> Geometric<MVec2dp<T>> for MVec2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn gpr(self, rhs: MVec2dp<T>) -> Self::Output {
        MVec2dp::new(
            self.c0 * rhs.c0 + self.c1 * rhs.c1 + self.c2 * rhs.c2 - self.c6 * rhs.c6,
            self.c0 * rhs.c1 + self.c1 * rhs.c0 - self.c2 * rhs.c6 + self.c6 * rhs.c2,
            self.c0 * rhs.c2 + self.c1 * rhs.c6 + self.c2 * rhs.c0 - self.c6 * rhs.c1,
            self.c0 * rhs.c3 - self.c1 * rhs.c5 + self.c2 * rhs.c4 + self.c3 * rhs.c0
                - self.c4 * rhs.c2 + self.c5 * rhs.c1 - self.c6 * rhs.c7 - self.c7 * rhs.c6,
            self.c0 * rhs.c4 + self.c1 * rhs.c7 + self.c2 * rhs.c3 - self.c3 * rhs.c2
                + self.c4 * rhs.c0 - self.c5 * rhs.c6 + self.c6 * rhs.c5 + self.c7 * rhs.c1,
            self.c0 * rhs.c5 - self.c1 * rhs.c3 + self.c2 * rhs.c7 + self.c3 * rhs.c1
                + self.c4 * rhs.c6 + self.c5 * rhs.c0 - self.c6 * rhs.c4 + self.c7 * rhs.c2,
            self.c0 * rhs.c6 + self.c1 * rhs.c2 - self.c2 * rhs.c1 + self.c6 * rhs.c0,
            self.c0 * rhs.c7 + self.c1 * rhs.c4 + self.c2 * rhs.c5 + self.c3 * rhs.c6
                + self.c4 * rhs.c1 + self.c5 * rhs.c2 + self.c6 * rhs.c3 + self.c7 * rhs.c0,
        )
    }
}

impl_geometric_mul! {
    Scalar2dp * Scalar2dp,
    Scalar2dp * Vec2dp,
    Scalar2dp * BiVec2dp,
    Scalar2dp * PScalar2dp,
    Scalar2dp * MVec2dpE,
    Scalar2dp * MVec2dpU,
    Scalar2dp * MVec2dp,
    Vec2dp * Scalar2dp,
    Vec2dp * Vec2dp,
    Vec2dp * BiVec2dp,
    Vec2dp * PScalar2dp,
    Vec2dp * MVec2dpE,
    Vec2dp * MVec2dpU,
    Vec2dp * MVec2dp,
    BiVec2dp * Scalar2dp,
    BiVec2dp * Vec2dp,
    BiVec2dp * BiVec2dp,
    BiVec2dp * PScalar2dp,
    BiVec2dp * MVec2dpE,
    BiVec2dp * MVec2dpU,
    BiVec2dp * MVec2dp,
    PScalar2dp * Scalar2dp,
    PScalar2dp * Vec2dp,
    PScalar2dp * BiVec2dp,
    PScalar2dp * MVec2dpE,
    PScalar2dp * MVec2dpU,
    PScalar2dp * MVec2dp,
    MVec2dpE * Scalar2dp,
    MVec2dpE * Vec2dp,
    MVec2dpE * BiVec2dp,
    MVec2dpE * PScalar2dp,
    MVec2dpE * MVec2dpE,
    MVec2dpE * MVec2dpU,
    MVec2dpE * MVec2dp,
    MVec2dpU * Scalar2dp,
    MVec2dpU * Vec2dp,
    MVec2dpU * BiVec2dp,
    MVec2dpU * PScalar2dp,
    MVec2dpU * MVec2dpE,
    MVec2dpU * MVec2dpU,
    MVec2dpU * MVec2dp,
    MVec2dp * Scalar2dp,
    MVec2dp * Vec2dp,
    MVec2dp * BiVec2dp,
    MVec2dp * PScalar2dp,
    MVec2dp * MVec2dpE,
    MVec2dp * MVec2dpU,
    MVec2dp * MVec2dp,
}

impl<T: Float> Commutator<Vec2dp<T>> for Vec2dp<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn cmt(self, rhs: Vec2dp<T>) -> Self::Output {
        BiVec2dp::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl<T: Float> Commutator<BiVec2dp<T>> for Vec2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn cmt(self, rhs: BiVec2dp<T>) -> Self::Output {
        Vec2dp::new(-self.y * rhs.z, self.x * rhs.z, self.y * rhs.x - self.x * rhs.y)
    }
}

impl<T: Float> Commutator<Vec2dp<T>> for BiVec2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn cmt(self, rhs: Vec2dp<T>) -> Self::Output {
        Vec2dp::new(self.z * rhs.y, -self.z * rhs.x, self.y * rhs.x - self.x * rhs.y)
    }
}

impl<T: Float> Commutator<BiVec2dp<T>> for BiVec2dp<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn cmt(self, rhs: BiVec2dp<T>) -> Self::Output {
        BiVec2dp::new(self.z * rhs.y - self.y * rhs.z, self.x * rhs.z - self.z * rhs.x, T::zero())
    }
}

impl<T: Float> Commutator<MVec2dpE<T>> for MVec2dpE<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn cmt(self, rhs: MVec2dpE<T>) -> Self::Output {
        BiVec2dp::new(
            self.c3 * rhs.c2 - self.c2 * rhs.c3,
            self.c1 * rhs.c3 - self.c3 * rhs.c1,
            T::zero(),
        )
    }
}

impl<T: Float> Commutator<MVec2dp<T>> for MVec2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn cmt(self, rhs: MVec2dp<T>) -> Self::Output {
        MVec2dp::new(
            T::zero(),
            self.c6 * rhs.c2 - self.c2 * rhs.c6,
            self.c1 * rhs.c6 - self.c6 * rhs.c1,
            self.c2 * rhs.c4 - self.c1 * rhs.c5 - self.c4 * rhs.c2 + self.c5 * rhs.c1,
            self.c2 * rhs.c3 - self.c3 * rhs.c2 - self.c5 * rhs.c6 + self.c6 * rhs.c5,
            self.c3 * rhs.c1 - self.c1 * rhs.c3 + self.c4 * rhs.c6 - self.c6 * rhs.c4,
            self.c1 * rhs.c2 - self.c2 * rhs.c1,
            T::zero(),
        )
    }
}
