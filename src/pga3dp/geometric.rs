//! Geometric product and commutator product.

use super::{BiVec3dp, MVec3dp, MVec3dpE, MVec3dpU, PScalar3dp, Scalar3dp, TriVec3dp, Vec3dp};
use crate::traits::{Commutator, Geometric};
use num_traits::Float;

impl<T: Float> Geometric<Scalar3dp<T>> for Scalar3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn gpr(self, rhs: Scalar3dp<T>) -> Self::Output {
        Scalar3dp::new(self.value * rhs.value)
    }
}

impl<T: Float> Geometric<Vec3dp<T>> for Scalar3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn gpr(self, rhs: Vec3dp<T>) -> Self::Output {
        Vec3dp::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z, self.value * rhs.w)
    }
}

impl<T: Float> Geometric<BiVec3dp<T>> for Scalar3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: BiVec3dp<T>) -> Self::Output {
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

impl<T: Float> Geometric<TriVec3dp<T>> for Scalar3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: TriVec3dp<T>) -> Self::Output {
        TriVec3dp::new(
            self.value * rhs.x,
            self.value * rhs.y,
            self.value * rhs.z,
            self.value * rhs.w,
        )
    }
}

impl<T: Float> Geometric<PScalar3dp<T>> for Scalar3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn gpr(self, rhs: PScalar3dp<T>) -> Self::Output {
        PScalar3dp::new(self.value * rhs.value)
    }
}

impl<T: Float> Geometric<MVec3dpE<T>> for Scalar3dp<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dpE<T>) -> Self::Output {
        MVec3dpE::new(
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

impl<T: Float> Geometric<MVec3dpU<T>> for Scalar3dp<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dpU<T>) -> Self::Output {
        MVec3dpU::new(
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

impl<T: Float> Geometric<MVec3dp<T>> for Scalar3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dp<T>) -> Self::Output {
        MVec3dp::new(
            self.value * rhs.c0,
            self.value * rhs.c1,
            self.value * rhs.c2,
            self.value * rhs.c3,
            self.value * rhs.c4,
            self.value * rhs.c5,
            self.value * rhs.c6,
            self.value * rhs.c7,
            self.value * rhs.c8,
            self.value * rhs.c9,
            self.value * rhs.c10,
            self.value * rhs.c11,
            self.value * rhs.c12,
            self.value * rhs.c13,
            self.value * rhs.c14,
            self.value * rhs.c15,
        )
    }
}

impl<T: Float> Geometric<Scalar3dp<T>> for Vec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn gpr(self, rhs: Scalar3dp<T>) -> Self::Output {
        Vec3dp::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value, self.w * rhs.value)
    }
}

impl<T: Float> Geometric<Vec3dp<T>> for Vec3dp<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn gpr(self, rhs: Vec3dp<T>) -> Self::Output {
        MVec3dpE::new(
            self.x * rhs.x + self.y * rhs.y + self.z * rhs.z,
            self.w * rhs.x - self.x * rhs.w,
            self.w * rhs.y - self.y * rhs.w,
            self.w * rhs.z - self.z * rhs.w,
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
            T::zero(),
        )
    }
}

impl<T: Float> Geometric<BiVec3dp<T>> for Vec3dp<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn gpr(self, rhs: BiVec3dp<T>) -> Self::Output {
        MVec3dpU::new(
            self.z * rhs.my - self.y * rhs.mz,
            self.x * rhs.mz - self.z * rhs.mx,
            self.y * rhs.mx - self.x * rhs.my,
            -self.x * rhs.vx - self.y * rhs.vy - self.z * rhs.vz,
            self.z * rhs.vy - self.y * rhs.vz + self.w * rhs.mx,
            self.x * rhs.vz - self.z * rhs.vx + self.w * rhs.my,
            self.y * rhs.vx - self.x * rhs.vy + self.w * rhs.mz,
            -self.x * rhs.mx - self.y * rhs.my - self.z * rhs.mz,
        )
    }
}

impl<T: Float> Geometric<TriVec3dp<T>> for Vec3dp<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn gpr(self, rhs: TriVec3dp<T>) -> Self::Output {
        MVec3dpE::new(
            T::zero(),
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
            -self.x * rhs.w,
            -self.y * rhs.w,
            -self.z * rhs.w,
            self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w,
        )
    }
}

impl<T: Float> Geometric<PScalar3dp<T>> for Vec3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: PScalar3dp<T>) -> Self::Output {
        TriVec3dp::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value, T::zero())
    }
}

impl<T: Float> Geometric<MVec3dpE<T>> for Vec3dp<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dpE<T>) -> Self::Output {
        MVec3dpU::new(
            self.x * rhs.c0 - self.y * rhs.c6 + self.z * rhs.c5,
            self.x * rhs.c6 + self.y * rhs.c0 - self.z * rhs.c4,
            self.y * rhs.c4 - self.x * rhs.c5 + self.z * rhs.c0,
            self.w * rhs.c0 - self.x * rhs.c1 - self.y * rhs.c2 - self.z * rhs.c3,
            self.x * rhs.c7 - self.y * rhs.c3 + self.z * rhs.c2 + self.w * rhs.c4,
            self.x * rhs.c3 + self.y * rhs.c7 - self.z * rhs.c1 + self.w * rhs.c5,
            self.y * rhs.c1 - self.x * rhs.c2 + self.z * rhs.c7 + self.w * rhs.c6,
            -self.x * rhs.c4 - self.y * rhs.c5 - self.z * rhs.c6,
        )
    }
}

impl<T: Float> Geometric<MVec3dpU<T>> for Vec3dp<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dpU<T>) -> Self::Output {
        MVec3dpE::new(
            self.x * rhs.c0 + self.y * rhs.c1 + self.z * rhs.c2,
            self.y * rhs.c6 - self.x * rhs.c3 - self.z * rhs.c5 + self.w * rhs.c0,
            self.z * rhs.c4 - self.x * rhs.c6 - self.y * rhs.c3 + self.w * rhs.c1,
            self.x * rhs.c5 - self.y * rhs.c4 - self.z * rhs.c3 + self.w * rhs.c2,
            self.y * rhs.c2 - self.x * rhs.c7 - self.z * rhs.c1,
            self.z * rhs.c0 - self.x * rhs.c2 - self.y * rhs.c7,
            self.x * rhs.c1 - self.y * rhs.c0 - self.z * rhs.c7,
            self.x * rhs.c4 + self.y * rhs.c5 + self.z * rhs.c6 + self.w * rhs.c7,
        )
    }
}

impl<T: Float> Geometric<MVec3dp<T>> for Vec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dp<T>) -> Self::Output {
        MVec3dp::new(
            self.x * rhs.c1 + self.y * rhs.c2 + self.z * rhs.c3,
            self.x * rhs.c0 - self.y * rhs.c10 + self.z * rhs.c9,
            self.x * rhs.c10 + self.y * rhs.c0 - self.z * rhs.c8,
            self.y * rhs.c8 - self.x * rhs.c9 + self.z * rhs.c0,
            self.w * rhs.c0 - self.x * rhs.c5 - self.y * rhs.c6 - self.z * rhs.c7,
            self.y * rhs.c13 - self.x * rhs.c4 - self.z * rhs.c12 + self.w * rhs.c1,
            self.z * rhs.c11 - self.x * rhs.c13 - self.y * rhs.c4 + self.w * rhs.c2,
            self.x * rhs.c12 - self.y * rhs.c11 - self.z * rhs.c4 + self.w * rhs.c3,
            self.y * rhs.c3 - self.x * rhs.c14 - self.z * rhs.c2,
            self.z * rhs.c1 - self.x * rhs.c3 - self.y * rhs.c14,
            self.x * rhs.c2 - self.y * rhs.c1 - self.z * rhs.c14,
            self.x * rhs.c15 - self.y * rhs.c7 + self.z * rhs.c6 + self.w * rhs.c8,
            self.x * rhs.c7 + self.y * rhs.c15 - self.z * rhs.c5 + self.w * rhs.c9,
            self.y * rhs.c5 - self.x * rhs.c6 + self.z * rhs.c15 + self.w * rhs.c10,
            -self.x * rhs.c8 - self.y * rhs.c9 - self.z * rhs.c10,
            self.x * rhs.c11 + self.y * rhs.c12 + self.z * rhs.c13 + self.w * rhs.c14,
        )
    }
}

impl<T: Float> Geometric<Scalar3dp<T>> for BiVec3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: Scalar3dp<T>) -> Self::Output {
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

impl<T: Float> Geometric<Vec3dp<T>> for BiVec3dp<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn gpr(self, rhs: Vec3dp<T>) -> Self::Output {
        MVec3dpU::new(
            self.mz * rhs.y - self.my * rhs.z,
            self.mx * rhs.z - self.mz * rhs.x,
            self.my * rhs.x - self.mx * rhs.y,
            self.vx * rhs.x + self.vy * rhs.y + self.vz * rhs.z,
            self.vy * rhs.z - self.vz * rhs.y + self.mx * rhs.w,
            self.vz * rhs.x - self.vx * rhs.z + self.my * rhs.w,
            self.vx * rhs.y - self.vy * rhs.x + self.mz * rhs.w,
            -self.mx * rhs.x - self.my * rhs.y - self.mz * rhs.z,
        )
    }
}

impl<T: Float> Geometric<BiVec3dp<T>> for BiVec3dp<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn gpr(self, rhs: BiVec3dp<T>) -> Self::Output {
        MVec3dpE::new(
            -self.mx * rhs.mx - self.my * rhs.my - self.mz * rhs.mz,
            self.vz * rhs.my - self.vy * rhs.mz - self.my * rhs.vz + self.mz * rhs.vy,
            self.vx * rhs.mz - self.vz * rhs.mx + self.mx * rhs.vz - self.mz * rhs.vx,
            self.vy * rhs.mx - self.vx * rhs.my - self.mx * rhs.vy + self.my * rhs.vx,
            self.mz * rhs.my - self.my * rhs.mz,
            self.mx * rhs.mz - self.mz * rhs.mx,
            self.my * rhs.mx - self.mx * rhs.my,
            -self.vx * rhs.mx - self.vy * rhs.my - self.vz * rhs.mz - self.mx * rhs.vx
                - self.my * rhs.vy - self.mz * rhs.vz,
        )
    }
}

impl<T: Float> Geometric<TriVec3dp<T>> for BiVec3dp<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn gpr(self, rhs: TriVec3dp<T>) -> Self::Output {
        MVec3dpU::new(
            self.mx * rhs.w,
            self.my * rhs.w,
            self.mz * rhs.w,
            -self.mx * rhs.x - self.my * rhs.y - self.mz * rhs.z,
            self.mz * rhs.y - self.vx * rhs.w - self.my * rhs.z,
            self.mx * rhs.z - self.vy * rhs.w - self.mz * rhs.x,
            self.my * rhs.x - self.vz * rhs.w - self.mx * rhs.y,
            T::zero(),
        )
    }
}

impl<T: Float> Geometric<PScalar3dp<T>> for BiVec3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: PScalar3dp<T>) -> Self::Output {
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

impl<T: Float> Geometric<MVec3dpE<T>> for BiVec3dp<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dpE<T>) -> Self::Output {
        MVec3dpE::new(
            -self.mx * rhs.c4 - self.my * rhs.c5 - self.mz * rhs.c6,
            self.vx * rhs.c0 - self.vy * rhs.c6 + self.vz * rhs.c5 + self.mx * rhs.c7
                - self.my * rhs.c3 + self.mz * rhs.c2,
            self.vx * rhs.c6 + self.vy * rhs.c0 - self.vz * rhs.c4 + self.mx * rhs.c3
                + self.my * rhs.c7 - self.mz * rhs.c1,
            self.vy * rhs.c4 - self.vx * rhs.c5 + self.vz * rhs.c0 - self.mx * rhs.c2
                + self.my * rhs.c1 + self.mz * rhs.c7,
            self.mx * rhs.c0 - self.my * rhs.c6 + self.mz * rhs.c5,
            self.mx * rhs.c6 + self.my * rhs.c0 - self.mz * rhs.c4,
            self.my * rhs.c4 - self.mx * rhs.c5 + self.mz * rhs.c0,
            -self.vx * rhs.c4 - self.vy * rhs.c5 - self.vz * rhs.c6 - self.mx * rhs.c1
                - self.my * rhs.c2 - self.mz * rhs.c3,
        )
    }
}

impl<T: Float> Geometric<MVec3dpU<T>> for BiVec3dp<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dpU<T>) -> Self::Output {
        MVec3dpU::new(
            self.mx * rhs.c7 - self.my * rhs.c2 + self.mz * rhs.c1,
            self.mx * rhs.c2 + self.my * rhs.c7 - self.mz * rhs.c0,
            self.my * rhs.c0 - self.mx * rhs.c1 + self.mz * rhs.c7,
            self.vx * rhs.c0 + self.vy * rhs.c1 + self.vz * rhs.c2 - self.mx * rhs.c4
                - self.my * rhs.c5 - self.mz * rhs.c6,
            self.vy * rhs.c2 - self.vx * rhs.c7 - self.vz * rhs.c1 + self.mx * rhs.c3
                - self.my * rhs.c6 + self.mz * rhs.c5,
            self.vz * rhs.c0 - self.vx * rhs.c2 - self.vy * rhs.c7 + self.mx * rhs.c6
                + self.my * rhs.c3 - self.mz * rhs.c4,
            self.vx * rhs.c1 - self.vy * rhs.c0 - self.vz * rhs.c7 - self.mx * rhs.c5
                + self.my * rhs.c4 + self.mz * rhs.c3,
            -self.mx * rhs.c0 - self.my * rhs.c1 - self.mz * rhs.c2,
        )
    }
}

impl<T: Float> Geometric<MVec3dp<T>> for BiVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dp<T>) -> Self::Output {
        MVec3dp::new(
            -self.mx * rhs.c8 - self.my * rhs.c9 - self.mz * rhs.c10,
            self.mx * rhs.c14 - self.my * rhs.c3 + self.mz * rhs.c2,
            self.mx * rhs.c3 + self.my * rhs.c14 - self.mz * rhs.c1,
            self.my * rhs.c1 - self.mx * rhs.c2 + self.mz * rhs.c14,
            self.vx * rhs.c1 + self.vy * rhs.c2 + self.vz * rhs.c3 - self.mx * rhs.c11
                - self.my * rhs.c12 - self.mz * rhs.c13,
            self.vx * rhs.c0 - self.vy * rhs.c10 + self.vz * rhs.c9 + self.mx * rhs.c15
                - self.my * rhs.c7 + self.mz * rhs.c6,
            self.vx * rhs.c10 + self.vy * rhs.c0 - self.vz * rhs.c8 + self.mx * rhs.c7
                + self.my * rhs.c15 - self.mz * rhs.c5,
            self.vy * rhs.c8 - self.vx * rhs.c9 + self.vz * rhs.c0 - self.mx * rhs.c6
                + self.my * rhs.c5 + self.mz * rhs.c15,
            self.mx * rhs.c0 - self.my * rhs.c10 + self.mz * rhs.c9,
            self.mx * rhs.c10 + self.my * rhs.c0 - self.mz * rhs.c8,
            self.my * rhs.c8 - self.mx * rhs.c9 + self.mz * rhs.c0,
            self.vy * rhs.c3 - self.vx * rhs.c14 - self.vz * rhs.c2 + self.mx * rhs.c4
                - self.my * rhs.c13 + self.mz * rhs.c12,
            self.vz * rhs.c1 - self.vx * rhs.c3 - self.vy * rhs.c14 + self.mx * rhs.c13
                + self.my * rhs.c4 - self.mz * rhs.c11,
            self.vx * rhs.c2 - self.vy * rhs.c1 - self.vz * rhs.c14 - self.mx * rhs.c12
                + self.my * rhs.c11 + self.mz * rhs.c4,
            -self.mx * rhs.c1 - self.my * rhs.c2 - self.mz * rhs.c3,
            -self.vx * rhs.c8 - self.vy * rhs.c9 - self.vz * rhs.c10 - self.mx * rhs.c5
                - self.my * rhs.c6 - self.mz * rhs.c7,
        )
    }
}

impl<T: Float> Geometric<Scalar3dp<T>> for TriVec3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: Scalar3dp<T>) -> Self::Output {
        TriVec3dp::new(
            self.x * rhs.value,
            self.y * rhs.value,
            self.z * rhs.value,
            self.w * rhs.value,
        )
    }
}

impl<T: Float> Geometric<Vec3dp<T>> for TriVec3dp<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn gpr(self, rhs: Vec3dp<T>) -> Self::Output {
        MVec3dpE::new(
            T::zero(),
            self.z * rhs.y - self.y * rhs.z,
            self.x * rhs.z - self.z * rhs.x,
            self.y * rhs.x - self.x * rhs.y,
            -self.w * rhs.x,
            -self.w * rhs.y,
            -self.w * rhs.z,
            -self.x * rhs.x - self.y * rhs.y - self.z * rhs.z - self.w * rhs.w,
        )
    }
}

impl<T: Float> Geometric<BiVec3dp<T>> for TriVec3dp<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn gpr(self, rhs: BiVec3dp<T>) -> Self::Output {
        MVec3dpU::new(
            self.w * rhs.mx,
            self.w * rhs.my,
            self.w * rhs.mz,
            -self.x * rhs.mx - self.y * rhs.my - self.z * rhs.mz,
            self.z * rhs.my - self.y * rhs.mz + self.w * rhs.vx,
            self.x * rhs.mz - self.z * rhs.mx + self.w * rhs.vy,
            self.y * rhs.mx - self.x * rhs.my + self.w * rhs.vz,
            T::zero(),
        )
    }
}

impl<T: Float> Geometric<TriVec3dp<T>> for TriVec3dp<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn gpr(self, rhs: TriVec3dp<T>) -> Self::Output {
        MVec3dpE::new(
            -self.w * rhs.w,
            self.x * rhs.w - self.w * rhs.x,
            self.y * rhs.w - self.w * rhs.y,
            self.z * rhs.w - self.w * rhs.z,
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
        )
    }
}

impl<T: Float> Geometric<PScalar3dp<T>> for TriVec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn gpr(self, rhs: PScalar3dp<T>) -> Self::Output {
        Vec3dp::new(T::zero(), T::zero(), T::zero(), self.w * rhs.value)
    }
}

impl<T: Float> Geometric<MVec3dpE<T>> for TriVec3dp<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dpE<T>) -> Self::Output {
        MVec3dpU::new(
            self.w * rhs.c4,
            self.w * rhs.c5,
            self.w * rhs.c6,
            self.w * rhs.c7 - self.x * rhs.c4 - self.y * rhs.c5 - self.z * rhs.c6,
            self.x * rhs.c0 - self.y * rhs.c6 + self.z * rhs.c5 + self.w * rhs.c1,
            self.x * rhs.c6 + self.y * rhs.c0 - self.z * rhs.c4 + self.w * rhs.c2,
            self.y * rhs.c4 - self.x * rhs.c5 + self.z * rhs.c0 + self.w * rhs.c3,
            self.w * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<MVec3dpU<T>> for TriVec3dp<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dpU<T>) -> Self::Output {
        MVec3dpE::new(
            -self.w * rhs.c7,
            self.x * rhs.c7 - self.y * rhs.c2 + self.z * rhs.c1 - self.w * rhs.c4,
            self.x * rhs.c2 + self.y * rhs.c7 - self.z * rhs.c0 - self.w * rhs.c5,
            self.y * rhs.c0 - self.x * rhs.c1 + self.z * rhs.c7 - self.w * rhs.c6,
            -self.w * rhs.c0,
            -self.w * rhs.c1,
            -self.w * rhs.c2,
            -self.x * rhs.c0 - self.y * rhs.c1 - self.z * rhs.c2 - self.w * rhs.c3,
        )
    }
}

impl<T: Float> Geometric<MVec3dp<T>> for TriVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dp<T>) -> Self::Output {
        MVec3dp::new(
            -self.w * rhs.c14,
            self.w * rhs.c8,
            self.w * rhs.c9,
            self.w * rhs.c10,
            self.w * rhs.c15 - self.x * rhs.c8 - self.y * rhs.c9 - self.z * rhs.c10,
            self.x * rhs.c14 - self.y * rhs.c3 + self.z * rhs.c2 - self.w * rhs.c11,
            self.x * rhs.c3 + self.y * rhs.c14 - self.z * rhs.c1 - self.w * rhs.c12,
            self.y * rhs.c1 - self.x * rhs.c2 + self.z * rhs.c14 - self.w * rhs.c13,
            -self.w * rhs.c1,
            -self.w * rhs.c2,
            -self.w * rhs.c3,
            self.x * rhs.c0 - self.y * rhs.c10 + self.z * rhs.c9 + self.w * rhs.c5,
            self.x * rhs.c10 + self.y * rhs.c0 - self.z * rhs.c8 + self.w * rhs.c6,
            self.y * rhs.c8 - self.x * rhs.c9 + self.z * rhs.c0 + self.w * rhs.c7,
            self.w * rhs.c0,
            -self.x * rhs.c1 - self.y * rhs.c2 - self.z * rhs.c3 - self.w * rhs.c4,
        )
    }
}

impl<T: Float> Geometric<Scalar3dp<T>> for PScalar3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn gpr(self, rhs: Scalar3dp<T>) -> Self::Output {
        PScalar3dp::new(self.value * rhs.value)
    }
}

impl<T: Float> Geometric<Vec3dp<T>> for PScalar3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: Vec3dp<T>) -> Self::Output {
        TriVec3dp::new(-self.value * rhs.x, -self.value * rhs.y, -self.value * rhs.z, T::zero())
    }
}

impl<T: Float> Geometric<BiVec3dp<T>> for PScalar3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: BiVec3dp<T>) -> Self::Output {
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

impl<T: Float> Geometric<TriVec3dp<T>> for PScalar3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn gpr(self, rhs: TriVec3dp<T>) -> Self::Output {
        Vec3dp::new(T::zero(), T::zero(), T::zero(), -self.value * rhs.w)
    }
}

impl<T: Float> Geometric<MVec3dpE<T>> for PScalar3dp<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dpE<T>) -> Self::Output {
        MVec3dpE::new(
            T::zero(),
            self.value * rhs.c4,
            self.value * rhs.c5,
            self.value * rhs.c6,
            T::zero(),
            T::zero(),
            T::zero(),
            self.value * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<MVec3dpU<T>> for PScalar3dp<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dpU<T>) -> Self::Output {
        MVec3dpU::new(
            T::zero(),
            T::zero(),
            T::zero(),
            -self.value * rhs.c7,
            -self.value * rhs.c0,
            -self.value * rhs.c1,
            -self.value * rhs.c2,
            T::zero(),
        )
    }
}

impl<T: Float> Geometric<MVec3dp<T>> for PScalar3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dp<T>) -> Self::Output {
        MVec3dp::new(
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            -self.value * rhs.c14,
            self.value * rhs.c8,
            self.value * rhs.c9,
            self.value * rhs.c10,
            T::zero(),
            T::zero(),
            T::zero(),
            -self.value * rhs.c1,
            -self.value * rhs.c2,
            -self.value * rhs.c3,
            T::zero(),
            self.value * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<Scalar3dp<T>> for MVec3dpE<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn gpr(self, rhs: Scalar3dp<T>) -> Self::Output {
        MVec3dpE::new(
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

impl<T: Float> Geometric<Vec3dp<T>> for MVec3dpE<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn gpr(self, rhs: Vec3dp<T>) -> Self::Output {
        MVec3dpU::new(
            self.c0 * rhs.x - self.c5 * rhs.z + self.c6 * rhs.y,
            self.c0 * rhs.y + self.c4 * rhs.z - self.c6 * rhs.x,
            self.c0 * rhs.z - self.c4 * rhs.y + self.c5 * rhs.x,
            self.c0 * rhs.w + self.c1 * rhs.x + self.c2 * rhs.y + self.c3 * rhs.z,
            self.c2 * rhs.z - self.c3 * rhs.y + self.c4 * rhs.w - self.c7 * rhs.x,
            self.c3 * rhs.x - self.c1 * rhs.z + self.c5 * rhs.w - self.c7 * rhs.y,
            self.c1 * rhs.y - self.c2 * rhs.x + self.c6 * rhs.w - self.c7 * rhs.z,
            -self.c4 * rhs.x - self.c5 * rhs.y - self.c6 * rhs.z,
        )
    }
}

impl<T: Float> Geometric<BiVec3dp<T>> for MVec3dpE<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn gpr(self, rhs: BiVec3dp<T>) -> Self::Output {
        MVec3dpE::new(
            -self.c4 * rhs.mx - self.c5 * rhs.my - self.c6 * rhs.mz,
            self.c0 * rhs.vx - self.c2 * rhs.mz + self.c3 * rhs.my - self.c5 * rhs.vz
                + self.c6 * rhs.vy + self.c7 * rhs.mx,
            self.c0 * rhs.vy + self.c1 * rhs.mz - self.c3 * rhs.mx + self.c4 * rhs.vz
                - self.c6 * rhs.vx + self.c7 * rhs.my,
            self.c0 * rhs.vz - self.c1 * rhs.my + self.c2 * rhs.mx - self.c4 * rhs.vy
                + self.c5 * rhs.vx + self.c7 * rhs.mz,
            self.c0 * rhs.mx - self.c5 * rhs.mz + self.c6 * rhs.my,
            self.c0 * rhs.my + self.c4 * rhs.mz - self.c6 * rhs.mx,
            self.c0 * rhs.mz - self.c4 * rhs.my + self.c5 * rhs.mx,
            -self.c1 * rhs.mx - self.c2 * rhs.my - self.c3 * rhs.mz - self.c4 * rhs.vx
                - self.c5 * rhs.vy - self.c6 * rhs.vz,
        )
    }
}

impl<T: Float> Geometric<TriVec3dp<T>> for MVec3dpE<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn gpr(self, rhs: TriVec3dp<T>) -> Self::Output {
        MVec3dpU::new(
            self.c4 * rhs.w,
            self.c5 * rhs.w,
            self.c6 * rhs.w,
            -self.c4 * rhs.x - self.c5 * rhs.y - self.c6 * rhs.z - self.c7 * rhs.w,
            self.c0 * rhs.x - self.c1 * rhs.w - self.c5 * rhs.z + self.c6 * rhs.y,
            self.c0 * rhs.y - self.c2 * rhs.w + self.c4 * rhs.z - self.c6 * rhs.x,
            self.c0 * rhs.z - self.c3 * rhs.w - self.c4 * rhs.y + self.c5 * rhs.x,
            self.c0 * rhs.w,
        )
    }
}

impl<T: Float> Geometric<PScalar3dp<T>> for MVec3dpE<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn gpr(self, rhs: PScalar3dp<T>) -> Self::Output {
        MVec3dpE::new(
            T::zero(),
            self.c4 * rhs.value,
            self.c5 * rhs.value,
            self.c6 * rhs.value,
            T::zero(),
            T::zero(),
            T::zero(),
            self.c0 * rhs.value,
        )
    }
}

impl<T: Float> Geometric<MVec3dpE<T>> for MVec3dpE<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dpE<T>) -> Self::Output {
        MVec3dpE::new(
            self.c0 * rhs.c0 - self.c4 * rhs.c4 - self.c5 * rhs.c5 - self.c6 * rhs.c6,
            self.c0 * rhs.c1 + self.c1 * rhs.c0 - self.c2 * rhs.c6 + self.c3 * rhs.c5
                + self.c4 * rhs.c7 - self.c5 * rhs.c3 + self.c6 * rhs.c2 + self.c7 * rhs.c4,
            self.c0 * rhs.c2 + self.c1 * rhs.c6 + self.c2 * rhs.c0 - self.c3 * rhs.c4
                + self.c4 * rhs.c3 + self.c5 * rhs.c7 - self.c6 * rhs.c1 + self.c7 * rhs.c5,
            self.c0 * rhs.c3 - self.c1 * rhs.c5 + self.c2 * rhs.c4 + self.c3 * rhs.c0
                - self.c4 * rhs.c2 + self.c5 * rhs.c1 + self.c6 * rhs.c7 + self.c7 * rhs.c6,
            self.c0 * rhs.c4 + self.c4 * rhs.c0 - self.c5 * rhs.c6 + self.c6 * rhs.c5,
            self.c0 * rhs.c5 + self.c4 * rhs.c6 + self.c5 * rhs.c0 - self.c6 * rhs.c4,
            self.c0 * rhs.c6 - self.c4 * rhs.c5 + self.c5 * rhs.c4 + self.c6 * rhs.c0,
            self.c0 * rhs.c7 - self.c1 * rhs.c4 - self.c2 * rhs.c5 - self.c3 * rhs.c6
                - self.c4 * rhs.c1 - self.c5 * rhs.c2 - self.c6 * rhs.c3 + self.c7 * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<MVec3dpU<T>> for MVec3dpE<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dpU<T>) -> Self::Output {
        MVec3dpU::new(
            self.c0 * rhs.c0 + self.c4 * rhs.c7 - self.c5 * rhs.c2 + self.c6 * rhs.c1,
            self.c0 * rhs.c1 + self.c4 * rhs.c2 + self.c5 * rhs.c7 - self.c6 * rhs.c0,
            self.c0 * rhs.c2 - self.c4 * rhs.c1 + self.c5 * rhs.c0 + self.c6 * rhs.c7,
            self.c0 * rhs.c3 + self.c1 * rhs.c0 + self.c2 * rhs.c1 + self.c3 * rhs.c2
                - self.c4 * rhs.c4 - self.c5 * rhs.c5 - self.c6 * rhs.c6 - self.c7 * rhs.c7,
            self.c0 * rhs.c4 - self.c1 * rhs.c7 + self.c2 * rhs.c2 - self.c3 * rhs.c1
                + self.c4 * rhs.c3 - self.c5 * rhs.c6 + self.c6 * rhs.c5 - self.c7 * rhs.c0,
            self.c0 * rhs.c5 - self.c1 * rhs.c2 - self.c2 * rhs.c7 + self.c3 * rhs.c0
                + self.c4 * rhs.c6 + self.c5 * rhs.c3 - self.c6 * rhs.c4 - self.c7 * rhs.c1,
            self.c0 * rhs.c6 + self.c1 * rhs.c1 - self.c2 * rhs.c0 - self.c3 * rhs.c7
                - self.c4 * rhs.c5 + self.c5 * rhs.c4 + self.c6 * rhs.c3 - self.c7 * rhs.c2,
            self.c0 * rhs.c7 - self.c4 * rhs.c0 - self.c5 * rhs.c1 - self.c6 * rhs.c2,
        )
    }
}

impl<T: Float> Geometric<MVec3dp<T>> for MVec3dpE<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dp<T>) -> Self::Output {
        MVec3dp::new(
            self.c0 * rhs.c0 - self.c4 * rhs.c8 - self.c5 * rhs.c9 - self.c6 * rhs.c10,
            self.c0 * rhs.c1 + self.c4 * rhs.c14 - self.c5 * rhs.c3 + self.c6 * rhs.c2,
            self.c0 * rhs.c2 + self.c4 * rhs.c3 + self.c5 * rhs.c14 - self.c6 * rhs.c1,
            self.c0 * rhs.c3 - self.c4 * rhs.c2 + self.c5 * rhs.c1 + self.c6 * rhs.c14,
            self.c0 * rhs.c4 + self.c1 * rhs.c1 + self.c2 * rhs.c2 + self.c3 * rhs.c3
                - self.c4 * rhs.c11 - self.c5 * rhs.c12 - self.c6 * rhs.c13 - self.c7 * rhs.c14,
            self.c0 * rhs.c5 + self.c1 * rhs.c0 - self.c2 * rhs.c10 + self.c3 * rhs.c9
                + self.c4 * rhs.c15 - self.c5 * rhs.c7 + self.c6 * rhs.c6 + self.c7 * rhs.c8,
            self.c0 * rhs.c6 + self.c1 * rhs.c10 + self.c2 * rhs.c0 - self.c3 * rhs.c8
                + self.c4 * rhs.c7 + self.c5 * rhs.c15 - self.c6 * rhs.c5 + self.c7 * rhs.c9,
            self.c0 * rhs.c7 - self.c1 * rhs.c9 + self.c2 * rhs.c8 + self.c3 * rhs.c0
                - self.c4 * rhs.c6 + self.c5 * rhs.c5 + self.c6 * rhs.c15 + self.c7 * rhs.c10,
            self.c0 * rhs.c8 + self.c4 * rhs.c0 - self.c5 * rhs.c10 + self.c6 * rhs.c9,
            self.c0 * rhs.c9 + self.c4 * rhs.c10 + self.c5 * rhs.c0 - self.c6 * rhs.c8,
            self.c0 * rhs.c10 - self.c4 * rhs.c9 + self.c5 * rhs.c8 + self.c6 * rhs.c0,
            self.c0 * rhs.c11 - self.c1 * rhs.c14 + self.c2 * rhs.c3 - self.c3 * rhs.c2
                + self.c4 * rhs.c4 - self.c5 * rhs.c13 + self.c6 * rhs.c12 - self.c7 * rhs.c1,
            self.c0 * rhs.c12 - self.c1 * rhs.c3 - self.c2 * rhs.c14 + self.c3 * rhs.c1
                + self.c4 * rhs.c13 + self.c5 * rhs.c4 - self.c6 * rhs.c11 - self.c7 * rhs.c2,
            self.c0 * rhs.c13 + self.c1 * rhs.c2 - self.c2 * rhs.c1 - self.c3 * rhs.c14
                - self.c4 * rhs.c12 + self.c5 * rhs.c11 + self.c6 * rhs.c4 - self.c7 * rhs.c3,
            self.c0 * rhs.c14 - self.c4 * rhs.c1 - self.c5 * rhs.c2 - self.c6 * rhs.c3,
            self.c0 * rhs.c15 - self.c1 * rhs.c8 - self.c2 * rhs.c9 - self.c3 * rhs.c10
                - self.c4 * rhs.c5 - self.c5 * rhs.c6 - self.c6 * rhs.c7 + self.c7 * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<Scalar3dp<T>> for MVec3dpU<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn gpr(self, rhs: Scalar3dp<T>) -> Self::Output {
        MVec3dpU::new(
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

impl<T: Float> Geometric<Vec3dp<T>> for MVec3dpU<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn gpr(self, rhs: Vec3dp<T>) -> Self::Output {
        MVec3dpE::new(
            self.c0 * rhs.x + self.c1 * rhs.y + self.c2 * rhs.z,
            self.c3 * rhs.x - self.c0 * rhs.w - self.c5 * rhs.z + self.c6 * rhs.y,
            self.c3 * rhs.y - self.c1 * rhs.w + self.c4 * rhs.z - self.c6 * rhs.x,
            self.c3 * rhs.z - self.c2 * rhs.w - self.c4 * rhs.y + self.c5 * rhs.x,
            self.c1 * rhs.z - self.c2 * rhs.y - self.c7 * rhs.x,
            self.c2 * rhs.x - self.c0 * rhs.z - self.c7 * rhs.y,
            self.c0 * rhs.y - self.c1 * rhs.x - self.c7 * rhs.z,
            -self.c4 * rhs.x - self.c5 * rhs.y - self.c6 * rhs.z - self.c7 * rhs.w,
        )
    }
}

impl<T: Float> Geometric<BiVec3dp<T>> for MVec3dpU<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn gpr(self, rhs: BiVec3dp<T>) -> Self::Output {
        MVec3dpU::new(
            self.c2 * rhs.my - self.c1 * rhs.mz + self.c7 * rhs.mx,
            self.c0 * rhs.mz - self.c2 * rhs.mx + self.c7 * rhs.my,
            self.c1 * rhs.mx - self.c0 * rhs.my + self.c7 * rhs.mz,
            -self.c0 * rhs.vx - self.c1 * rhs.vy - self.c2 * rhs.vz - self.c4 * rhs.mx
                - self.c5 * rhs.my - self.c6 * rhs.mz,
            self.c2 * rhs.vy - self.c1 * rhs.vz + self.c3 * rhs.mx - self.c5 * rhs.mz
                + self.c6 * rhs.my + self.c7 * rhs.vx,
            self.c0 * rhs.vz - self.c2 * rhs.vx + self.c3 * rhs.my + self.c4 * rhs.mz
                - self.c6 * rhs.mx + self.c7 * rhs.vy,
            self.c1 * rhs.vx - self.c0 * rhs.vy + self.c3 * rhs.mz - self.c4 * rhs.my
                + self.c5 * rhs.mx + self.c7 * rhs.vz,
            -self.c0 * rhs.mx - self.c1 * rhs.my - self.c2 * rhs.mz,
        )
    }
}

impl<T: Float> Geometric<TriVec3dp<T>> for MVec3dpU<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn gpr(self, rhs: TriVec3dp<T>) -> Self::Output {
        MVec3dpE::new(
            -self.c7 * rhs.w,
            self.c1 * rhs.z - self.c2 * rhs.y + self.c4 * rhs.w - self.c7 * rhs.x,
            self.c2 * rhs.x - self.c0 * rhs.z + self.c5 * rhs.w - self.c7 * rhs.y,
            self.c0 * rhs.y - self.c1 * rhs.x + self.c6 * rhs.w - self.c7 * rhs.z,
            -self.c0 * rhs.w,
            -self.c1 * rhs.w,
            -self.c2 * rhs.w,
            self.c0 * rhs.x + self.c1 * rhs.y + self.c2 * rhs.z + self.c3 * rhs.w,
        )
    }
}

impl<T: Float> Geometric<PScalar3dp<T>> for MVec3dpU<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn gpr(self, rhs: PScalar3dp<T>) -> Self::Output {
        MVec3dpU::new(
            T::zero(),
            T::zero(),
            T::zero(),
            self.c7 * rhs.value,
            self.c0 * rhs.value,
            self.c1 * rhs.value,
            self.c2 * rhs.value,
            T::zero(),
        )
    }
}

impl<T: Float> Geometric<MVec3dpE<T>> for MVec3dpU<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dpE<T>) -> Self::Output {
        MVec3dpU::new(
            self.c0 * rhs.c0 - self.c1 * rhs.c6 + self.c2 * rhs.c5 + self.c7 * rhs.c4,
            self.c0 * rhs.c6 + self.c1 * rhs.c0 - self.c2 * rhs.c4 + self.c7 * rhs.c5,
            self.c1 * rhs.c4 - self.c0 * rhs.c5 + self.c2 * rhs.c0 + self.c7 * rhs.c6,
            self.c3 * rhs.c0 - self.c0 * rhs.c1 - self.c1 * rhs.c2 - self.c2 * rhs.c3
                - self.c4 * rhs.c4 - self.c5 * rhs.c5 - self.c6 * rhs.c6 + self.c7 * rhs.c7,
            self.c0 * rhs.c7 - self.c1 * rhs.c3 + self.c2 * rhs.c2 + self.c3 * rhs.c4
                + self.c4 * rhs.c0 - self.c5 * rhs.c6 + self.c6 * rhs.c5 + self.c7 * rhs.c1,
            self.c0 * rhs.c3 + self.c1 * rhs.c7 - self.c2 * rhs.c1 + self.c3 * rhs.c5
                + self.c4 * rhs.c6 + self.c5 * rhs.c0 - self.c6 * rhs.c4 + self.c7 * rhs.c2,
            self.c1 * rhs.c1 - self.c0 * rhs.c2 + self.c2 * rhs.c7 + self.c3 * rhs.c6
                - self.c4 * rhs.c5 + self.c5 * rhs.c4 + self.c6 * rhs.c0 + self.c7 * rhs.c3,
            self.c7 * rhs.c0 - self.c0 * rhs.c4 - self.c1 * rhs.c5 - self.c2 * rhs.c6,
        )
    }
}

impl<T: Float> Geometric<MVec3dpU<T>> for MVec3dpU<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dpU<T>) -> Self::Output {
        MVec3dpE::new(
            self.c0 * rhs.c0 + self.c1 * rhs.c1 + self.c2 * rhs.c2 - self.c7 * rhs.c7,
            self.c1 * rhs.c6 - self.c0 * rhs.c3 - self.c2 * rhs.c5 + self.c3 * rhs.c0
                + self.c4 * rhs.c7 - self.c5 * rhs.c2 + self.c6 * rhs.c1 - self.c7 * rhs.c4,
            self.c2 * rhs.c4 - self.c0 * rhs.c6 - self.c1 * rhs.c3 + self.c3 * rhs.c1
                + self.c4 * rhs.c2 + self.c5 * rhs.c7 - self.c6 * rhs.c0 - self.c7 * rhs.c5,
            self.c0 * rhs.c5 - self.c1 * rhs.c4 - self.c2 * rhs.c3 + self.c3 * rhs.c2
                - self.c4 * rhs.c1 + self.c5 * rhs.c0 + self.c6 * rhs.c7 - self.c7 * rhs.c6,
            self.c1 * rhs.c2 - self.c0 * rhs.c7 - self.c2 * rhs.c1 - self.c7 * rhs.c0,
            self.c2 * rhs.c0 - self.c0 * rhs.c2 - self.c1 * rhs.c7 - self.c7 * rhs.c1,
            self.c0 * rhs.c1 - self.c1 * rhs.c0 - self.c2 * rhs.c7 - self.c7 * rhs.c2,
            self.c0 * rhs.c4 + self.c1 * rhs.c5 + self.c2 * rhs.c6 + self.c3 * rhs.c7
                - self.c4 * rhs.c0 - self.c5 * rhs.c1 - self.c6 * rhs.c2 - self.c7 * rhs.c3,
        )
    }
}

impl<T: Float> Geometric<MVec3dp<T>> for MVec3dpU<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dp<T>) -> Self::Output {
        MVec3dp::new(
            self.c0 * rhs.c1 + self.c1 * rhs.c2 + self.c2 * rhs.c3 - self.c7 * rhs.c14,
            self.c0 * rhs.c0 - self.c1 * rhs.c10 + self.c2 * rhs.c9 + self.c7 * rhs.c8,
            self.c0 * rhs.c10 + self.c1 * rhs.c0 - self.c2 * rhs.c8 + self.c7 * rhs.c9,
            self.c1 * rhs.c8 - self.c0 * rhs.c9 + self.c2 * rhs.c0 + self.c7 * rhs.c10,
            self.c3 * rhs.c0 - self.c0 * rhs.c5 - self.c1 * rhs.c6 - self.c2 * rhs.c7
                - self.c4 * rhs.c8 - self.c5 * rhs.c9 - self.c6 * rhs.c10 + self.c7 * rhs.c15,
            self.c1 * rhs.c13 - self.c0 * rhs.c4 - self.c2 * rhs.c12 + self.c3 * rhs.c1
                + self.c4 * rhs.c14 - self.c5 * rhs.c3 + self.c6 * rhs.c2 - self.c7 * rhs.c11,
            self.c2 * rhs.c11 - self.c0 * rhs.c13 - self.c1 * rhs.c4 + self.c3 * rhs.c2
                + self.c4 * rhs.c3 + self.c5 * rhs.c14 - self.c6 * rhs.c1 - self.c7 * rhs.c12,
            self.c0 * rhs.c12 - self.c1 * rhs.c11 - self.c2 * rhs.c4 + self.c3 * rhs.c3
                - self.c4 * rhs.c2 + self.c5 * rhs.c1 + self.c6 * rhs.c14 - self.c7 * rhs.c13,
            self.c1 * rhs.c3 - self.c0 * rhs.c14 - self.c2 * rhs.c2 - self.c7 * rhs.c1,
            self.c2 * rhs.c1 - self.c0 * rhs.c3 - self.c1 * rhs.c14 - self.c7 * rhs.c2,
            self.c0 * rhs.c2 - self.c1 * rhs.c1 - self.c2 * rhs.c14 - self.c7 * rhs.c3,
            self.c0 * rhs.c15 - self.c1 * rhs.c7 + self.c2 * rhs.c6 + self.c3 * rhs.c8
                + self.c4 * rhs.c0 - self.c5 * rhs.c10 + self.c6 * rhs.c9 + self.c7 * rhs.c5,
            self.c0 * rhs.c7 + self.c1 * rhs.c15 - self.c2 * rhs.c5 + self.c3 * rhs.c9
                + self.c4 * rhs.c10 + self.c5 * rhs.c0 - self.c6 * rhs.c8 + self.c7 * rhs.c6,
            self.c1 * rhs.c5 - self.c0 * rhs.c6 + self.c2 * rhs.c15 + self.c3 * rhs.c10
                - self.c4 * rhs.c9 + self.c5 * rhs.c8 + self.c6 * rhs.c0 + self.c7 * rhs.c7,
            self.c7 * rhs.c0 - self.c0 * rhs.c8 - self.c1 * rhs.c9 - self.c2 * rhs.c10,
            self.c0 * rhs.c11 + self.c1 * rhs.c12 + self.c2 * rhs.c13 + self.c3 * rhs.c14
                - self.c4 * rhs.c1 - self.c5 * rhs.c2 - self.c6 * rhs.c3 - self.c7 * rhs.c4,
        )
    }
}

impl<T: Float> Geometric<Scalar3dp<T>> for MVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: Scalar3dp<T>) -> Self::Output {
        MVec3dp::new(
            self.c0 * rhs.value,
            self.c1 * rhs.value,
            self.c2 * rhs.value,
            self.c3 * rhs.value,
            self.c4 * rhs.value,
            self.c5 * rhs.value,
            self.c6 * rhs.value,
            self.c7 * rhs.value,
            self.c8 * rhs.value,
            self.c9 * rhs.value,
            self.c10 * rhs.value,
            self.c11 * rhs.value,
            self.c12 * rhs.value,
            self.c13 * rhs.value,
            self.c14 * rhs.value,
            self.c15 * rhs.value,
        )
    }
}

impl<T: Float> Geometric<Vec3dp<T>> for MVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: Vec3dp<T>) -> Self::Output {
        MVec3dp::new(
            self.c1 * rhs.x + self.c2 * rhs.y + self.c3 * rhs.z,
            self.c0 * rhs.x - self.c9 * rhs.z + self.c10 * rhs.y,
            self.c0 * rhs.y + self.c8 * rhs.z - self.c10 * rhs.x,
            self.c0 * rhs.z - self.c8 * rhs.y + self.c9 * rhs.x,
            self.c0 * rhs.w + self.c5 * rhs.x + self.c6 * rhs.y + self.c7 * rhs.z,
            self.c4 * rhs.x - self.c1 * rhs.w - self.c12 * rhs.z + self.c13 * rhs.y,
            self.c4 * rhs.y - self.c2 * rhs.w + self.c11 * rhs.z - self.c13 * rhs.x,
            self.c4 * rhs.z - self.c3 * rhs.w - self.c11 * rhs.y + self.c12 * rhs.x,
            self.c2 * rhs.z - self.c3 * rhs.y - self.c14 * rhs.x,
            self.c3 * rhs.x - self.c1 * rhs.z - self.c14 * rhs.y,
            self.c1 * rhs.y - self.c2 * rhs.x - self.c14 * rhs.z,
            self.c6 * rhs.z - self.c7 * rhs.y + self.c8 * rhs.w - self.c15 * rhs.x,
            self.c7 * rhs.x - self.c5 * rhs.z + self.c9 * rhs.w - self.c15 * rhs.y,
            self.c5 * rhs.y - self.c6 * rhs.x + self.c10 * rhs.w - self.c15 * rhs.z,
            -self.c8 * rhs.x - self.c9 * rhs.y - self.c10 * rhs.z,
            -self.c11 * rhs.x - self.c12 * rhs.y - self.c13 * rhs.z - self.c14 * rhs.w,
        )
    }
}

impl<T: Float> Geometric<BiVec3dp<T>> for MVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: BiVec3dp<T>) -> Self::Output {
        MVec3dp::new(
            -self.c8 * rhs.mx - self.c9 * rhs.my - self.c10 * rhs.mz,
            self.c3 * rhs.my - self.c2 * rhs.mz + self.c14 * rhs.mx,
            self.c1 * rhs.mz - self.c3 * rhs.mx + self.c14 * rhs.my,
            self.c2 * rhs.mx - self.c1 * rhs.my + self.c14 * rhs.mz,
            -self.c1 * rhs.vx - self.c2 * rhs.vy - self.c3 * rhs.vz - self.c11 * rhs.mx
                - self.c12 * rhs.my - self.c13 * rhs.mz,
            self.c0 * rhs.vx - self.c6 * rhs.mz + self.c7 * rhs.my - self.c9 * rhs.vz
                + self.c10 * rhs.vy + self.c15 * rhs.mx,
            self.c0 * rhs.vy + self.c5 * rhs.mz - self.c7 * rhs.mx + self.c8 * rhs.vz
                - self.c10 * rhs.vx + self.c15 * rhs.my,
            self.c0 * rhs.vz - self.c5 * rhs.my + self.c6 * rhs.mx - self.c8 * rhs.vy
                + self.c9 * rhs.vx + self.c15 * rhs.mz,
            self.c0 * rhs.mx - self.c9 * rhs.mz + self.c10 * rhs.my,
            self.c0 * rhs.my + self.c8 * rhs.mz - self.c10 * rhs.mx,
            self.c0 * rhs.mz - self.c8 * rhs.my + self.c9 * rhs.mx,
            self.c3 * rhs.vy - self.c2 * rhs.vz + self.c4 * rhs.mx - self.c12 * rhs.mz
                + self.c13 * rhs.my + self.c14 * rhs.vx,
            self.c1 * rhs.vz - self.c3 * rhs.vx + self.c4 * rhs.my + self.c11 * rhs.mz
                - self.c13 * rhs.mx + self.c14 * rhs.vy,
            self.c2 * rhs.vx - self.c1 * rhs.vy + self.c4 * rhs.mz - self.c11 * rhs.my
                + self.c12 * rhs.mx + self.c14 * rhs.vz,
            -self.c1 * rhs.mx - self.c2 * rhs.my - self.c3 * rhs.mz,
            -self.c5 * rhs.mx - self.c6 * rhs.my - self.c7 * rhs.mz - self.c8 * rhs.vx
                - self.c9 * rhs.vy - self.c10 * rhs.vz,
        )
    }
}

impl<T: Float> Geometric<TriVec3dp<T>> for MVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: TriVec3dp<T>) -> Self::Output {
        MVec3dp::new(
            -self.c14 * rhs.w,
            self.c8 * rhs.w,
            self.c9 * rhs.w,
            self.c10 * rhs.w,
            -self.c8 * rhs.x - self.c9 * rhs.y - self.c10 * rhs.z - self.c15 * rhs.w,
            self.c2 * rhs.z - self.c3 * rhs.y + self.c11 * rhs.w - self.c14 * rhs.x,
            self.c3 * rhs.x - self.c1 * rhs.z + self.c12 * rhs.w - self.c14 * rhs.y,
            self.c1 * rhs.y - self.c2 * rhs.x + self.c13 * rhs.w - self.c14 * rhs.z,
            -self.c1 * rhs.w,
            -self.c2 * rhs.w,
            -self.c3 * rhs.w,
            self.c0 * rhs.x - self.c5 * rhs.w - self.c9 * rhs.z + self.c10 * rhs.y,
            self.c0 * rhs.y - self.c6 * rhs.w + self.c8 * rhs.z - self.c10 * rhs.x,
            self.c0 * rhs.z - self.c7 * rhs.w - self.c8 * rhs.y + self.c9 * rhs.x,
            self.c0 * rhs.w,
            self.c1 * rhs.x + self.c2 * rhs.y + self.c3 * rhs.z + self.c4 * rhs.w,
        )
    }
}

impl<T: Float> Geometric<PScalar3dp<T>> for MVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: PScalar3dp<T>) -> Self::Output {
        MVec3dp::new(
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            self.c14 * rhs.value,
            self.c8 * rhs.value,
            self.c9 * rhs.value,
            self.c10 * rhs.value,
            T::zero(),
            T::zero(),
            T::zero(),
            self.c1 * rhs.value,
            self.c2 * rhs.value,
            self.c3 * rhs.value,
            T::zero(),
            self.c0 * rhs.value,
        )
    }
}

impl<T: Float> Geometric<MVec3dpE<T>> for MVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dpE<T>) -> Self::Output {
        MVec3dp::new(
            self.c0 * rhs.c0 - self.c8 * rhs.c4 - self.c9 * rhs.c5 - self.c10 * rhs.c6,
            self.c1 * rhs.c0 - self.c2 * rhs.c6 + self.c3 * rhs.c5 + self.c14 * rhs.c4,
            self.c1 * rhs.c6 + self.c2 * rhs.c0 - self.c3 * rhs.c4 + self.c14 * rhs.c5,
            self.c2 * rhs.c4 - self.c1 * rhs.c5 + self.c3 * rhs.c0 + self.c14 * rhs.c6,
            self.c4 * rhs.c0 - self.c1 * rhs.c1 - self.c2 * rhs.c2 - self.c3 * rhs.c3
                - self.c11 * rhs.c4 - self.c12 * rhs.c5 - self.c13 * rhs.c6 + self.c14 * rhs.c7,
            self.c0 * rhs.c1 + self.c5 * rhs.c0 - self.c6 * rhs.c6 + self.c7 * rhs.c5
                + self.c8 * rhs.c7 - self.c9 * rhs.c3 + self.c10 * rhs.c2 + self.c15 * rhs.c4,
            self.c0 * rhs.c2 + self.c5 * rhs.c6 + self.c6 * rhs.c0 - self.c7 * rhs.c4
                + self.c8 * rhs.c3 + self.c9 * rhs.c7 - self.c10 * rhs.c1 + self.c15 * rhs.c5,
            self.c0 * rhs.c3 - self.c5 * rhs.c5 + self.c6 * rhs.c4 + self.c7 * rhs.c0
                - self.c8 * rhs.c2 + self.c9 * rhs.c1 + self.c10 * rhs.c7 + self.c15 * rhs.c6,
            self.c0 * rhs.c4 + self.c8 * rhs.c0 - self.c9 * rhs.c6 + self.c10 * rhs.c5,
            self.c0 * rhs.c5 + self.c8 * rhs.c6 + self.c9 * rhs.c0 - self.c10 * rhs.c4,
            self.c0 * rhs.c6 - self.c8 * rhs.c5 + self.c9 * rhs.c4 + self.c10 * rhs.c0,
            self.c1 * rhs.c7 - self.c2 * rhs.c3 + self.c3 * rhs.c2 + self.c4 * rhs.c4
                + self.c11 * rhs.c0 - self.c12 * rhs.c6 + self.c13 * rhs.c5 + self.c14 * rhs.c1,
            self.c1 * rhs.c3 + self.c2 * rhs.c7 - self.c3 * rhs.c1 + self.c4 * rhs.c5
                + self.c11 * rhs.c6 + self.c12 * rhs.c0 - self.c13 * rhs.c4 + self.c14 * rhs.c2,
            self.c2 * rhs.c1 - self.c1 * rhs.c2 + self.c3 * rhs.c7 + self.c4 * rhs.c6
                - self.c11 * rhs.c5 + self.c12 * rhs.c4 + self.c13 * rhs.c0 + self.c14 * rhs.c3,
            self.c14 * rhs.c0 - self.c1 * rhs.c4 - self.c2 * rhs.c5 - self.c3 * rhs.c6,
            self.c0 * rhs.c7 - self.c5 * rhs.c4 - self.c6 * rhs.c5 - self.c7 * rhs.c6
                - self.c8 * rhs.c1 - self.c9 * rhs.c2 - self.c10 * rhs.c3 + self.c15 * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<MVec3dpU<T>> for MVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dpU<T>) -> Self::Output {
        MVec3dp::new(
            self.c1 * rhs.c0 + self.c2 * rhs.c1 + self.c3 * rhs.c2 - self.c14 * rhs.c7,
            self.c0 * rhs.c0 + self.c8 * rhs.c7 - self.c9 * rhs.c2 + self.c10 * rhs.c1,
            self.c0 * rhs.c1 + self.c8 * rhs.c2 + self.c9 * rhs.c7 - self.c10 * rhs.c0,
            self.c0 * rhs.c2 - self.c8 * rhs.c1 + self.c9 * rhs.c0 + self.c10 * rhs.c7,
            self.c0 * rhs.c3 + self.c5 * rhs.c0 + self.c6 * rhs.c1 + self.c7 * rhs.c2
                - self.c8 * rhs.c4 - self.c9 * rhs.c5 - self.c10 * rhs.c6 - self.c15 * rhs.c7,
            self.c2 * rhs.c6 - self.c1 * rhs.c3 - self.c3 * rhs.c5 + self.c4 * rhs.c0
                + self.c11 * rhs.c7 - self.c12 * rhs.c2 + self.c13 * rhs.c1 - self.c14 * rhs.c4,
            self.c3 * rhs.c4 - self.c1 * rhs.c6 - self.c2 * rhs.c3 + self.c4 * rhs.c1
                + self.c11 * rhs.c2 + self.c12 * rhs.c7 - self.c13 * rhs.c0 - self.c14 * rhs.c5,
            self.c1 * rhs.c5 - self.c2 * rhs.c4 - self.c3 * rhs.c3 + self.c4 * rhs.c2
                - self.c11 * rhs.c1 + self.c12 * rhs.c0 + self.c13 * rhs.c7 - self.c14 * rhs.c6,
            self.c2 * rhs.c2 - self.c1 * rhs.c7 - self.c3 * rhs.c1 - self.c14 * rhs.c0,
            self.c3 * rhs.c0 - self.c1 * rhs.c2 - self.c2 * rhs.c7 - self.c14 * rhs.c1,
            self.c1 * rhs.c1 - self.c2 * rhs.c0 - self.c3 * rhs.c7 - self.c14 * rhs.c2,
            self.c0 * rhs.c4 - self.c5 * rhs.c7 + self.c6 * rhs.c2 - self.c7 * rhs.c1
                + self.c8 * rhs.c3 - self.c9 * rhs.c6 + self.c10 * rhs.c5 - self.c15 * rhs.c0,
            self.c0 * rhs.c5 - self.c5 * rhs.c2 - self.c6 * rhs.c7 + self.c7 * rhs.c0
                + self.c8 * rhs.c6 + self.c9 * rhs.c3 - self.c10 * rhs.c4 - self.c15 * rhs.c1,
            self.c0 * rhs.c6 + self.c5 * rhs.c1 - self.c6 * rhs.c0 - self.c7 * rhs.c7
                - self.c8 * rhs.c5 + self.c9 * rhs.c4 + self.c10 * rhs.c3 - self.c15 * rhs.c2,
            self.c0 * rhs.c7 - self.c8 * rhs.c0 - self.c9 * rhs.c1 - self.c10 * rhs.c2,
            self.c1 * rhs.c4 + self.c2 * rhs.c5 + self.c3 * rhs.c6 + self.c4 * rhs.c7
                - self.c11 * rhs.c0 - self.c12 * rhs.c1 - self.c13 * rhs.c2 - self.c14 * rhs.c3,
        )
    }
}

impl<T: Float> Geometric<MVec3dp<T>> for MVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dp<T>) -> Self::Output {
        MVec3dp::new(
            self.c0 * rhs.c0 + self.c1 * rhs.c1 + self.c2 * rhs.c2 + self.c3 * rhs.c3
                - self.c8 * rhs.c8 - self.c9 * rhs.c9 - self.c10 * rhs.c10 - self.c14 * rhs.c14,
            self.c0 * rhs.c1 + self.c1 * rhs.c0 - self.c2 * rhs.c10 + self.c3 * rhs.c9
                + self.c8 * rhs.c14 - self.c9 * rhs.c3 + self.c10 * rhs.c2 + self.c14 * rhs.c8,
            self.c0 * rhs.c2 + self.c1 * rhs.c10 + self.c2 * rhs.c0 - self.c3 * rhs.c8
                + self.c8 * rhs.c3 + self.c9 * rhs.c14 - self.c10 * rhs.c1 + self.c14 * rhs.c9,
            self.c0 * rhs.c3 - self.c1 * rhs.c9 + self.c2 * rhs.c8 + self.c3 * rhs.c0
                - self.c8 * rhs.c2 + self.c9 * rhs.c1 + self.c10 * rhs.c14 + self.c14 * rhs.c10,
            self.c0 * rhs.c4 - self.c1 * rhs.c5 - self.c2 * rhs.c6 - self.c3 * rhs.c7
                + self.c4 * rhs.c0 + self.c5 * rhs.c1 + self.c6 * rhs.c2 + self.c7 * rhs.c3
                - self.c8 * rhs.c11 - self.c9 * rhs.c12 - self.c10 * rhs.c13 - self.c11 * rhs.c8
                - self.c12 * rhs.c9 - self.c13 * rhs.c10 + self.c14 * rhs.c15 - self.c15 * rhs.c14,
            self.c0 * rhs.c5 - self.c1 * rhs.c4 + self.c2 * rhs.c13 - self.c3 * rhs.c12
                + self.c4 * rhs.c1 + self.c5 * rhs.c0 - self.c6 * rhs.c10 + self.c7 * rhs.c9
                + self.c8 * rhs.c15 - self.c9 * rhs.c7 + self.c10 * rhs.c6 + self.c11 * rhs.c14
                - self.c12 * rhs.c3 + self.c13 * rhs.c2 - self.c14 * rhs.c11 + self.c15 * rhs.c8,
            self.c0 * rhs.c6 - self.c1 * rhs.c13 - self.c2 * rhs.c4 + self.c3 * rhs.c11
                + self.c4 * rhs.c2 + self.c5 * rhs.c10 + self.c6 * rhs.c0 - self.c7 * rhs.c8
                + self.c8 * rhs.c7 + self.c9 * rhs.c15 - self.c10 * rhs.c5 + self.c11 * rhs.c3
                + self.c12 * rhs.c14 - self.c13 * rhs.c1 - self.c14 * rhs.c12 + self.c15 * rhs.c9,
            self.c0 * rhs.c7 + self.c1 * rhs.c12 - self.c2 * rhs.c11 - self.c3 * rhs.c4
                + self.c4 * rhs.c3 - self.c5 * rhs.c9 + self.c6 * rhs.c8 + self.c7 * rhs.c0
                - self.c8 * rhs.c6 + self.c9 * rhs.c5 + self.c10 * rhs.c15 - self.c11 * rhs.c2
                + self.c12 * rhs.c1 + self.c13 * rhs.c14 - self.c14 * rhs.c13 + self.c15 * rhs.c10,
            self.c0 * rhs.c8 - self.c1 * rhs.c14 + self.c2 * rhs.c3 - self.c3 * rhs.c2
                + self.c8 * rhs.c0 - self.c9 * rhs.c10 + self.c10 * rhs.c9 - self.c14 * rhs.c1,
            self.c0 * rhs.c9 - self.c1 * rhs.c3 - self.c2 * rhs.c14 + self.c3 * rhs.c1
                + self.c8 * rhs.c10 + self.c9 * rhs.c0 - self.c10 * rhs.c8 - self.c14 * rhs.c2,
            self.c0 * rhs.c10 + self.c1 * rhs.c2 - self.c2 * rhs.c1 - self.c3 * rhs.c14
                - self.c8 * rhs.c9 + self.c9 * rhs.c8 + self.c10 * rhs.c0 - self.c14 * rhs.c3,
            self.c0 * rhs.c11 + self.c1 * rhs.c15 - self.c2 * rhs.c7 + self.c3 * rhs.c6
                + self.c4 * rhs.c8 - self.c5 * rhs.c14 + self.c6 * rhs.c3 - self.c7 * rhs.c2
                + self.c8 * rhs.c4 - self.c9 * rhs.c13 + self.c10 * rhs.c12 + self.c11 * rhs.c0
                - self.c12 * rhs.c10 + self.c13 * rhs.c9 + self.c14 * rhs.c5 - self.c15 * rhs.c1,
            self.c0 * rhs.c12 + self.c1 * rhs.c7 + self.c2 * rhs.c15 - self.c3 * rhs.c5
                + self.c4 * rhs.c9 - self.c5 * rhs.c3 - self.c6 * rhs.c14 + self.c7 * rhs.c1
                + self.c8 * rhs.c13 + self.c9 * rhs.c4 - self.c10 * rhs.c11 + self.c11 * rhs.c10
                + self.c12 * rhs.c0 - self.c13 * rhs.c8 + self.c14 * rhs.c6 - self.c15 * rhs.c2,
            self.c0 * rhs.c13 - self.c1 * rhs.c6 + self.c2 * rhs.c5 + self.c3 * rhs.c15
                + self.c4 * rhs.c10 + self.c5 * rhs.c2 - self.c6 * rhs.c1 - self.c7 * rhs.c14
                - self.c8 * rhs.c12 + self.c9 * rhs.c11 + self.c10 * rhs.c4 - self.c11 * rhs.c9
                + self.c12 * rhs.c8 + self.c13 * rhs.c0 + self.c14 * rhs.c7 - self.c15 * rhs.c3,
            self.c0 * rhs.c14 - self.c1 * rhs.c8 - self.c2 * rhs.c9 - self.c3 * rhs.c10
                - self.c8 * rhs.c1 - self.c9 * rhs.c2 - self.c10 * rhs.c3 + self.c14 * rhs.c0,
            self.c0 * rhs.c15 + self.c1 * rhs.c11 + self.c2 * rhs.c12 + self.c3 * rhs.c13
                + self.c4 * rhs.c14 - self.c5 * rhs.c8 - self.c6 * rhs.c9 - self.c7 * rhs.c10
                - self.c8 * rhs.c5 - self.c9 * rhs.c6 - self.c10 * rhs.c7 - self.c11 * rhs.c1
                - self.c12 * rhs.c2 - self.c13 * rhs.c3 - self.c14 * rhs.c4 + self.c15 * rhs.c0,
        )
    }
}

impl_geometric_mul! {
    Scalar3dp * Scalar3dp,
    Scalar3dp * Vec3dp,
    Scalar3dp * BiVec3dp,
    Scalar3dp * TriVec3dp,
    Scalar3dp * PScalar3dp,
    Scalar3dp * MVec3dpE,
    Scalar3dp * MVec3dpU,
    Scalar3dp * MVec3dp,
    Vec3dp * Scalar3dp,
    Vec3dp * Vec3dp,
    Vec3dp * BiVec3dp,
    Vec3dp * TriVec3dp,
    Vec3dp * PScalar3dp,
    Vec3dp * MVec3dpE,
    Vec3dp * MVec3dpU,
    Vec3dp * MVec3dp,
    BiVec3dp * Scalar3dp,
    BiVec3dp * Vec3dp,
    BiVec3dp * BiVec3dp,
    BiVec3dp * TriVec3dp,
    BiVec3dp * PScalar3dp,
    BiVec3dp * MVec3dpE,
    BiVec3dp * MVec3dpU,
    BiVec3dp * MVec3dp,
    TriVec3dp * Scalar3dp,
    TriVec3dp * Vec3dp,
    TriVec3dp * BiVec3dp,
    TriVec3dp * TriVec3dp,
    TriVec3dp * PScalar3dp,
    TriVec3dp * MVec3dpE,
    TriVec3dp * MVec3dpU,
    TriVec3dp * MVec3dp,
    PScalar3dp * Scalar3dp,
    PScalar3dp * Vec3dp,
    PScalar3dp * BiVec3dp,
    PScalar3dp * TriVec3dp,
    PScalar3dp * MVec3dpE,
    PScalar3dp * MVec3dpU,
    PScalar3dp * MVec3dp,
    MVec3dpE * Scalar3dp,
    MVec3dpE * Vec3dp,
    MVec3dpE * BiVec3dp,
    MVec3dpE * TriVec3dp,
    MVec3dpE * PScalar3dp,
    MVec3dpE * MVec3dpE,
    MVec3dpE * MVec3dpU,
    MVec3dpE * MVec3dp,
    MVec3dpU * Scalar3dp,
    MVec3dpU * Vec3dp,
    MVec3dpU * BiVec3dp,
    MVec3dpU * TriVec3dp,
    MVec3dpU * PScalar3dp,
    MVec3dpU * MVec3dpE,
    MVec3dpU * MVec3dpU,
    MVec3dpU * MVec3dp,
    MVec3dp * Scalar3dp,
    MVec3dp * Vec3dp,
    MVec3dp * BiVec3dp,
    MVec3dp * TriVec3dp,
    MVec3dp * PScalar3dp,
    MVec3dp * MVec3dpE,
    MVec3dp * MVec3dpU,
    MVec3dp * MVec3dp,
}

impl<T: Float> Commutator<Vec3dp<T>> for Vec3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn cmt(self, rhs: Vec3dp<T>) -> Self::Output {
        BiVec3dp::new(
            self.w * rhs.x - self.x * rhs.w,
            self.w * rhs.y - self.y * rhs.w,
            self.w * rhs.z - self.z * rhs.w,
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl<T: Float> Commutator<BiVec3dp<T>> for Vec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn cmt(self, rhs: BiVec3dp<T>) -> Self::Output {
        Vec3dp::new(
            self.z * rhs.my - self.y * rhs.mz,
            self.x * rhs.mz - self.z * rhs.mx,
            self.y * rhs.mx - self.x * rhs.my,
            -self.x * rhs.vx - self.y * rhs.vy - self.z * rhs.vz,
        )
    }
}

impl<T: Float> Commutator<TriVec3dp<T>> for Vec3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn cmt(self, rhs: TriVec3dp<T>) -> Self::Output {
        PScalar3dp::new(self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w)
    }
}

impl<T: Float> Commutator<PScalar3dp<T>> for Vec3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn cmt(self, rhs: PScalar3dp<T>) -> Self::Output {
        TriVec3dp::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value, T::zero())
    }
}

impl<T: Float> Commutator<Vec3dp<T>> for BiVec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn cmt(self, rhs: Vec3dp<T>) -> Self::Output {
        Vec3dp::new(
            self.mz * rhs.y - self.my * rhs.z,
            self.mx * rhs.z - self.mz * rhs.x,
            self.my * rhs.x - self.mx * rhs.y,
            self.vx * rhs.x + self.vy * rhs.y + self.vz * rhs.z,
        )
    }
}

impl<T: Float> Commutator<BiVec3dp<T>> for BiVec3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn cmt(self, rhs: BiVec3dp<T>) -> Self::Output {
        BiVec3dp::new(
            self.vz * rhs.my - self.vy * rhs.mz - self.my * rhs.vz + self.mz * rhs.vy,
            self.vx * rhs.mz - self.vz * rhs.mx + self.mx * rhs.vz - self.mz * rhs.vx,
            self.vy * rhs.mx - self.vx * rhs.my - self.mx * rhs.vy + self.my * rhs.vx,
            self.mz * rhs.my - self.my * rhs.mz,
            self.mx * rhs.mz - self.mz * rhs.mx,
            self.my * rhs.mx - self.mx * rhs.my,
        )
    }
}

impl<T: Float> Commutator<TriVec3dp<T>> for BiVec3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn cmt(self, rhs: TriVec3dp<T>) -> Self::Output {
        TriVec3dp::new(
            self.mz * rhs.y - self.vx * rhs.w - self.my * rhs.z,
            self.mx * rhs.z - self.vy * rhs.w - self.mz * rhs.x,
            self.my * rhs.x - self.vz * rhs.w - self.mx * rhs.y,
            T::zero(),
        )
    }
}

impl<T: Float> Commutator<Vec3dp<T>> for TriVec3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn cmt(self, rhs: Vec3dp<T>) -> Self::Output {
        PScalar3dp::new(-self.x * rhs.x - self.y * rhs.y - self.z * rhs.z - self.w * rhs.w)
    }
}

impl<T: Float> Commutator<BiVec3dp<T>> for TriVec3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn cmt(self, rhs: BiVec3dp<T>) -> Self::Output {
        TriVec3dp::new(
            self.z * rhs.my - self.y * rhs.mz + self.w * rhs.vx,
            self.x * rhs.mz - self.z * rhs.mx + self.w * rhs.vy,
            self.y * rhs.mx - self.x * rhs.my + self.w * rhs.vz,
            T::zero(),
        )
    }
}

impl<T: Float> Commutator<TriVec3dp<T>> for TriVec3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn cmt(self, rhs: TriVec3dp<T>) -> Self::Output {
        BiVec3dp::new(
            self.x * rhs.w - self.w * rhs.x,
            self.y * rhs.w - self.w * rhs.y,
            self.z * rhs.w - self.w * rhs.z,
            T::zero(),
            T::zero(),
            T::zero(),
        )
    }
}

impl<T: Float> Commutator<PScalar3dp<T>> for TriVec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn cmt(self, rhs: PScalar3dp<T>) -> Self::Output {
        Vec3dp::new(T::zero(), T::zero(), T::zero(), self.w * rhs.value)
    }
}

impl<T: Float> Commutator<Vec3dp<T>> for PScalar3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn cmt(self, rhs: Vec3dp<T>) -> Self::Output {
        TriVec3dp::new(-self.value * rhs.x, -self.value * rhs.y, -self.value * rhs.z, T::zero())
    }
}

impl<T: Float> Commutator<TriVec3dp<T>> for PScalar3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn cmt(self, rhs: TriVec3dp<T>) -> Self::Output {
        Vec3dp::new(T::zero(), T::zero(), T::zero(), -self.value * rhs.w)
    }
}

impl<T: Float> Commutator<MVec3dpE<T>> for MVec3dpE<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn cmt(self, rhs: MVec3dpE<T>) -> Self::Output {
        BiVec3dp::new(
            self.c3 * rhs.c5 - self.c2 * rhs.c6 - self.c5 * rhs.c3 + self.c6 * rhs.c2,
            self.c1 * rhs.c6 - self.c3 * rhs.c4 + self.c4 * rhs.c3 - self.c6 * rhs.c1,
            self.c2 * rhs.c4 - self.c1 * rhs.c5 - self.c4 * rhs.c2 + self.c5 * rhs.c1,
            self.c6 * rhs.c5 - self.c5 * rhs.c6,
            self.c4 * rhs.c6 - self.c6 * rhs.c4,
            self.c5 * rhs.c4 - self.c4 * rhs.c5,
        )
    }
}

impl<T: Float> Commutator<MVec3dp<T>> for MVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn cmt(self, rhs: MVec3dp<T>) -> Self::Output {
        MVec3dp::new(
            T::zero(),
            self.c3 * rhs.c9 - self.c2 * rhs.c10 - self.c9 * rhs.c3 + self.c10 * rhs.c2,
            self.c1 * rhs.c10 - self.c3 * rhs.c8 + self.c8 * rhs.c3 - self.c10 * rhs.c1,
            self.c2 * rhs.c8 - self.c1 * rhs.c9 - self.c8 * rhs.c2 + self.c9 * rhs.c1,
            self.c5 * rhs.c1 - self.c1 * rhs.c5 - self.c2 * rhs.c6 - self.c3 * rhs.c7
                + self.c6 * rhs.c2 + self.c7 * rhs.c3 + self.c14 * rhs.c15 - self.c15 * rhs.c14,
            self.c4 * rhs.c1 - self.c1 * rhs.c4 - self.c6 * rhs.c10 + self.c7 * rhs.c9
                - self.c9 * rhs.c7 + self.c10 * rhs.c6 + self.c11 * rhs.c14 - self.c14 * rhs.c11,
            self.c4 * rhs.c2 - self.c2 * rhs.c4 + self.c5 * rhs.c10 - self.c7 * rhs.c8
                + self.c8 * rhs.c7 - self.c10 * rhs.c5 + self.c12 * rhs.c14 - self.c14 * rhs.c12,
            self.c4 * rhs.c3 - self.c3 * rhs.c4 - self.c5 * rhs.c9 + self.c6 * rhs.c8
                - self.c8 * rhs.c6 + self.c9 * rhs.c5 + self.c13 * rhs.c14 - self.c14 * rhs.c13,
            self.c2 * rhs.c3 - self.c3 * rhs.c2 - self.c9 * rhs.c10 + self.c10 * rhs.c9,
            self.c3 * rhs.c1 - self.c1 * rhs.c3 + self.c8 * rhs.c10 - self.c10 * rhs.c8,
            self.c1 * rhs.c2 - self.c2 * rhs.c1 - self.c8 * rhs.c9 + self.c9 * rhs.c8,
            self.c1 * rhs.c15 - self.c5 * rhs.c14 - self.c9 * rhs.c13 + self.c10 * rhs.c12
                - self.c12 * rhs.c10 + self.c13 * rhs.c9 + self.c14 * rhs.c5 - self.c15 * rhs.c1,
            self.c2 * rhs.c15 - self.c6 * rhs.c14 + self.c8 * rhs.c13 - self.c10 * rhs.c11
                + self.c11 * rhs.c10 - self.c13 * rhs.c8 + self.c14 * rhs.c6 - self.c15 * rhs.c2,
            self.c3 * rhs.c15 - self.c7 * rhs.c14 - self.c8 * rhs.c12 + self.c9 * rhs.c11
                - self.c11 * rhs.c9 + self.c12 * rhs.c8 + self.c14 * rhs.c7 - self.c15 * rhs.c3,
            T::zero(),
            self.c1 * rhs.c11 + self.c2 * rhs.c12 + self.c3 * rhs.c13 + self.c4 * rhs.c14
                - self.c11 * rhs.c1 - self.c12 * rhs.c2 - self.c13 * rhs.c3 - self.c14 * rhs.c4,
        )
    }
}
