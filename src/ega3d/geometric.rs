//! Geometric product and commutator product.

use super::{BiVec3d, MVec3d, MVec3dE, MVec3dU, PScalar3d, Scalar3d, Vec3d};
use crate::traits::{Commutator, Geometric};
use num_traits::Float;

impl<T: Float> Geometric<Scalar3d<T>> for Scalar3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn gpr(self, rhs: Scalar3d<T>) -> Self::Output {
        Scalar3d::new(self.value * rhs.value)
    }
}

impl<T: Float> Geometric<Vec3d<T>> for Scalar3d<T> {
    type Output = Vec3d<T>;

    #[inline]
    fn gpr(self, rhs: Vec3d<T>) -> Self::Output {
        Vec3d::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z)
    }
}

impl<T: Float> Geometric<BiVec3d<T>> for Scalar3d<T> {
    type Output = BiVec3d<T>;

    #[inline]
    fn gpr(self, rhs: BiVec3d<T>) -> Self::Output {
        BiVec3d::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z)
    }
}

impl<T: Float> Geometric<PScalar3d<T>> for Scalar3d<T> {
    type Output = PScalar3d<T>;

    #[inline]
    fn gpr(self, rhs: PScalar3d<T>) -> Self::Output {
        PScalar3d::new(self.value * rhs.value)
    }
}

impl<T: Float> Geometric<MVec3dE<T>> for Scalar3d<T> {
    type Output = MVec3dE<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dE<T>) -> Self::Output {
        MVec3dE::new(
            self.value * rhs.c0,
            self.value * rhs.c1,
            self.value * rhs.c2,
            self.value * rhs.c3,
        )
    }
}

impl<T: Float> Geometric<MVec3dU<T>> for Scalar3d<T> {
    type Output = MVec3dU<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dU<T>) -> Self::Output {
        MVec3dU::new(
            self.value * rhs.c0,
            self.value * rhs.c1,
            self.value * rhs.c2,
            self.value * rhs.c3,
        )
    }
}

impl<T: Float> Geometric<MVec3d<T>> for Scalar3d<T> {
    type Output = MVec3d<T>;

    #[inline]
    fn gpr(self, rhs: MVec3d<T>) -> Self::Output {
        MVec3d::new(
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

impl<T: Float> Geometric<Scalar3d<T>> for Vec3d<T> {
    type Output = Vec3d<T>;

    #[inline]
    fn gpr(self, rhs: Scalar3d<T>) -> Self::Output {
        Vec3d::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value)
    }
}

impl<T: Float> Geometric<Vec3d<T>> for Vec3d<T> {
    type Output = MVec3dE<T>;

    #[inline]
    fn gpr(self, rhs: Vec3d<T>) -> Self::Output {
        MVec3dE::new(
            self.x * rhs.x + self.y * rhs.y + self.z * rhs.z,
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl<T: Float> Geometric<BiVec3d<T>> for Vec3d<T> {
    type Output = MVec3dU<T>;

    #[inline]
    fn gpr(self, rhs: BiVec3d<T>) -> Self::Output {
        MVec3dU::new(
            self.z * rhs.y - self.y * rhs.z,
            self.x * rhs.z - self.z * rhs.x,
            self.y * rhs.x - self.x * rhs.y,
            self.x * rhs.x + self.y * rhs.y + self.z * rhs.z,
        )
    }
}

impl<T: Float> Geometric<PScalar3d<T>> for Vec3d<T> {
    type Output = BiVec3d<T>;

    #[inline]
    fn gpr(self, rhs: PScalar3d<T>) -> Self::Output {
        BiVec3d::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value)
    }
}

impl<T: Float> Geometric<MVec3dE<T>> for Vec3d<T> {
    type Output = MVec3dU<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dE<T>) -> Self::Output {
        MVec3dU::new(
            self.x * rhs.c0 - self.y * rhs.c3 + self.z * rhs.c2,
            self.x * rhs.c3 + self.y * rhs.c0 - self.z * rhs.c1,
            self.y * rhs.c1 - self.x * rhs.c2 + self.z * rhs.c0,
            self.x * rhs.c1 + self.y * rhs.c2 + self.z * rhs.c3,
        )
    }
}

impl<T: Float> Geometric<MVec3dU<T>> for Vec3d<T> {
    type Output = MVec3dE<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dU<T>) -> Self::Output {
        MVec3dE::new(
            self.x * rhs.c0 + self.y * rhs.c1 + self.z * rhs.c2,
            self.x * rhs.c3 + self.y * rhs.c2 - self.z * rhs.c1,
            self.y * rhs.c3 - self.x * rhs.c2 + self.z * rhs.c0,
            self.x * rhs.c1 - self.y * rhs.c0 + self.z * rhs.c3,
        )
    }
}

impl<T: Float> Geometric<MVec3d<T>> for Vec3d<T> {
    type Output = MVec3d<T>;

    #[inline]
    fn gpr(self, rhs: MVec3d<T>) -> Self::Output {
        MVec3d::new(
            self.x * rhs.c1 + self.y * rhs.c2 + self.z * rhs.c3,
            self.x * rhs.c0 - self.y * rhs.c6 + self.z * rhs.c5,
            self.x * rhs.c6 + self.y * rhs.c0 - self.z * rhs.c4,
            self.y * rhs.c4 - self.x * rhs.c5 + self.z * rhs.c0,
            self.x * rhs.c7 + self.y * rhs.c3 - self.z * rhs.c2,
            self.y * rhs.c7 - self.x * rhs.c3 + self.z * rhs.c1,
            self.x * rhs.c2 - self.y * rhs.c1 + self.z * rhs.c7,
            self.x * rhs.c4 + self.y * rhs.c5 + self.z * rhs.c6,
        )
    }
}

impl<T: Float> Geometric<Scalar3d<T>> for BiVec3d<T> {
    type Output = BiVec3d<T>;

    #[inline]
    fn gpr(self, rhs: Scalar3d<T>) -> Self::Output {
        BiVec3d::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value)
    }
}

impl<T: Float> Geometric<Vec3d<T>> for BiVec3d<T> {
    type Output = MVec3dU<T>;

    #[inline]
    fn gpr(self, rhs: Vec3d<T>) -> Self::Output {
        MVec3dU::new(
            self.z * rhs.y - self.y * rhs.z,
            self.x * rhs.z - self.z * rhs.x,
            self.y * rhs.x - self.x * rhs.y,
            self.x * rhs.x + self.y * rhs.y + self.z * rhs.z,
        )
    }
}

impl<T: Float> Geometric<BiVec3d<T>> for BiVec3d<T> {
    type Output = MVec3dE<T>;

    #[inline]
    fn gpr(self, rhs: BiVec3d<T>) -> Self::Output {
        MVec3dE::new(
            -self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.z * rhs.y - self.y * rhs.z,
            self.x * rhs.z - self.z * rhs.x,
            self.y * rhs.x - self.x * rhs.y,
        )
    }
}

impl<T: Float> Geometric<PScalar3d<T>> for BiVec3d<T> {
    type Output = Vec3d<T>;

    #[inline]
    fn gpr(self, rhs: PScalar3d<T>) -> Self::Output {
        Vec3d::new(-self.x * rhs.value, -self.y * rhs.value, -self.z * rhs.value)
    }
}

impl<T: Float> Geometric<MVec3dE<T>> for BiVec3d<T> {
    type Output = MVec3dE<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dE<T>) -> Self::Output {
        MVec3dE::new(
            -self.x * rhs.c1 - self.y * rhs.c2 - self.z * rhs.c3,
            self.x * rhs.c0 - self.y * rhs.c3 + self.z * rhs.c2,
            self.x * rhs.c3 + self.y * rhs.c0 - self.z * rhs.c1,
            self.y * rhs.c1 - self.x * rhs.c2 + self.z * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<MVec3dU<T>> for BiVec3d<T> {
    type Output = MVec3dU<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dU<T>) -> Self::Output {
        MVec3dU::new(
            self.z * rhs.c1 - self.x * rhs.c3 - self.y * rhs.c2,
            self.x * rhs.c2 - self.y * rhs.c3 - self.z * rhs.c0,
            self.y * rhs.c0 - self.x * rhs.c1 - self.z * rhs.c3,
            self.x * rhs.c0 + self.y * rhs.c1 + self.z * rhs.c2,
        )
    }
}

impl<T: Float> Geometric<MVec3d<T>> for BiVec3d<T> {
    type Output = MVec3d<T>;

    #[inline]
    fn gpr(self, rhs: MVec3d<T>) -> Self::Output {
        MVec3d::new(
            -self.x * rhs.c4 - self.y * rhs.c5 - self.z * rhs.c6,
            self.z * rhs.c2 - self.x * rhs.c7 - self.y * rhs.c3,
            self.x * rhs.c3 - self.y * rhs.c7 - self.z * rhs.c1,
            self.y * rhs.c1 - self.x * rhs.c2 - self.z * rhs.c7,
            self.x * rhs.c0 - self.y * rhs.c6 + self.z * rhs.c5,
            self.x * rhs.c6 + self.y * rhs.c0 - self.z * rhs.c4,
            self.y * rhs.c4 - self.x * rhs.c5 + self.z * rhs.c0,
            self.x * rhs.c1 + self.y * rhs.c2 + self.z * rhs.c3,
        )
    }
}

impl<T: Float> Geometric<Scalar3d<T>> for PScalar3d<T> {
    type Output = PScalar3d<T>;

    #[inline]
    fn gpr(self, rhs: Scalar3d<T>) -> Self::Output {
        PScalar3d::new(self.value * rhs.value)
    }
}

impl<T: Float> Geometric<Vec3d<T>> for PScalar3d<T> {
    type Output = BiVec3d<T>;

    #[inline]
    fn gpr(self, rhs: Vec3d<T>) -> Self::Output {
        BiVec3d::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z)
    }
}

impl<T: Float> Geometric<BiVec3d<T>> for PScalar3d<T> {
    type Output = Vec3d<T>;

    #[inline]
    fn gpr(self, rhs: BiVec3d<T>) -> Self::Output {
        Vec3d::new(-self.value * rhs.x, -self.value * rhs.y, -self.value * rhs.z)
    }
}

impl<T: Float> Geometric<PScalar3d<T>> for PScalar3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn gpr(self, rhs: PScalar3d<T>) -> Self::Output {
        Scalar3d::new(-self.value * rhs.value)
    }
}

impl<T: Float> Geometric<MVec3dE<T>> for PScalar3d<T> {
    type Output = MVec3dU<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dE<T>) -> Self::Output {
        MVec3dU::new(
            -self.value * rhs.c1,
            -self.value * rhs.c2,
            -self.value * rhs.c3,
            self.value * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<MVec3dU<T>> for PScalar3d<T> {
    type Output = MVec3dE<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dU<T>) -> Self::Output {
        MVec3dE::new(
            -self.value * rhs.c3,
            self.value * rhs.c0,
            self.value * rhs.c1,
            self.value * rhs.c2,
        )
    }
}

impl<T: Float> Geometric<MVec3d<T>> for PScalar3d<T> {
    type Output = MVec3d<T>;

    #[inline]
    fn gpr(self, rhs: MVec3d<T>) -> Self::Output {
        MVec3d::new(
            -self.value * rhs.c7,
            -self.value * rhs.c4,
            -self.value * rhs.c5,
            -self.value * rhs.c6,
            self.value * rhs.c1,
            self.value * rhs.c2,
            self.value * rhs.c3,
            self.value * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<Scalar3d<T>> for MVec3dE<T> {
    type Output = MVec3dE<T>;

    #[inline]
    fn gpr(self, rhs: Scalar3d<T>) -> Self::Output {
        MVec3dE::new(
            self.c0 * rhs.value,
            self.c1 * rhs.value,
            self.c2 * rhs.value,
            self.c3 * rhs.value,
        )
    }
}

impl<T: Float> Geometric<Vec3d<T>> for MVec3dE<T> {
    type Output = MVec3dU<T>;

    #[inline]
    fn gpr(self, rhs: Vec3d<T>) -> Self::Output {
        MVec3dU::new(
            self.c0 * rhs.x - self.c2 * rhs.z + self.c3 * rhs.y,
            self.c0 * rhs.y + self.c1 * rhs.z - self.c3 * rhs.x,
            self.c0 * rhs.z - self.c1 * rhs.y + self.c2 * rhs.x,
            self.c1 * rhs.x + self.c2 * rhs.y + self.c3 * rhs.z,
        )
    }
}

impl<T: Float> Geometric<BiVec3d<T>> for MVec3dE<T> {
    type Output = MVec3dE<T>;

    #[inline]
    fn gpr(self, rhs: BiVec3d<T>) -> Self::Output {
        MVec3dE::new(
            -self.c1 * rhs.x - self.c2 * rhs.y - self.c3 * rhs.z,
            self.c0 * rhs.x - self.c2 * rhs.z + self.c3 * rhs.y,
            self.c0 * rhs.y + self.c1 * rhs.z - self.c3 * rhs.x,
            self.c0 * rhs.z - self.c1 * rhs.y + self.c2 * rhs.x,
        )
    }
}

impl<T: Float> Geometric<PScalar3d<T>> for MVec3dE<T> {
    type Output = MVec3dU<T>;

    #[inline]
    fn gpr(self, rhs: PScalar3d<T>) -> Self::Output {
        MVec3dU::new(
            -self.c1 * rhs.value,
            -self.c2 * rhs.value,
            -self.c3 * rhs.value,
            self.c0 * rhs.value,
        )
    }
}

impl<T: Float> Geometric<MVec3dE<T>> for MVec3dE<T> {
    type Output = MVec3dE<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dE<T>) -> Self::Output {
        MVec3dE::new(
            self.c0 * rhs.c0 - self.c1 * rhs.c1 - self.c2 * rhs.c2 - self.c3 * rhs.c3,
            self.c0 * rhs.c1 + self.c1 * rhs.c0 - self.c2 * rhs.c3 + self.c3 * rhs.c2,
            self.c0 * rhs.c2 + self.c1 * rhs.c3 + self.c2 * rhs.c0 - self.c3 * rhs.c1,
            self.c0 * rhs.c3 - self.c1 * rhs.c2 + self.c2 * rhs.c1 + self.c3 * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<MVec3dU<T>> for MVec3dE<T> {
    type Output = MVec3dU<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dU<T>) -> Self::Output {
        MVec3dU::new(
            self.c0 * rhs.c0 - self.c1 * rhs.c3 - self.c2 * rhs.c2 + self.c3 * rhs.c1,
            self.c0 * rhs.c1 + self.c1 * rhs.c2 - self.c2 * rhs.c3 - self.c3 * rhs.c0,
            self.c0 * rhs.c2 - self.c1 * rhs.c1 + self.c2 * rhs.c0 - self.c3 * rhs.c3,
            self.c0 * rhs.c3 + self.c1 * rhs.c0 + self.c2 * rhs.c1 + self.c3 * rhs.c2,
        )
    }
}

impl<T: Float> Geometric<MVec3d<T>> for MVec3dE<T> {
    type Output = MVec3d<T>;

    #[inline]
    fn gpr(self, rhs: MVec3d<T>) -> Self::Output {
        MVec3d::new(
            self.c0 * rhs.c0 - self.c1 * rhs.c4 - self.c2 * rhs.c5 - self.c3 * rhs.c6,
            self.c0 * rhs.c1 - self.c1 * rhs.c7 - self.c2 * rhs.c3 + self.c3 * rhs.c2,
            self.c0 * rhs.c2 + self.c1 * rhs.c3 - self.c2 * rhs.c7 - self.c3 * rhs.c1,
            self.c0 * rhs.c3 - self.c1 * rhs.c2 + self.c2 * rhs.c1 - self.c3 * rhs.c7,
            self.c0 * rhs.c4 + self.c1 * rhs.c0 - self.c2 * rhs.c6 + self.c3 * rhs.c5,
            self.c0 * rhs.c5 + self.c1 * rhs.c6 + self.c2 * rhs.c0 - self.c3 * rhs.c4,
            self.c0 * rhs.c6 - self.c1 * rhs.c5 + self.c2 * rhs.c4 + self.c3 * rhs.c0,
            self.c0 * rhs.c7 + self.c1 * rhs.c1 + self.c2 * rhs.c2 + self.c3 * rhs.c3,
        )
    }
}

impl<T: Float> Geometric<Scalar3d<T>> for MVec3dU<T> {
    type Output = MVec3dU<T>;

    #[inline]
    fn gpr(self, rhs: Scalar3d<T>) -> Self::Output {
        MVec3dU::new(
            self.c0 * rhs.value,
            self.c1 * rhs.value,
            self.c2 * rhs.value,
            self.c3 * rhs.value,
        )
    }
}

impl<T: Float> Geometric<Vec3d<T>> for MVec3dU<T> {
    type Output = MVec3dE<T>;

    #[inline]
    fn gpr(self, rhs: Vec3d<T>) -> Self::Output {
        MVec3dE::new(
            self.c0 * rhs.x + self.c1 * rhs.y + self.c2 * rhs.z,
            self.c1 * rhs.z - self.c2 * rhs.y + self.c3 * rhs.x,
            self.c2 * rhs.x - self.c0 * rhs.z + self.c3 * rhs.y,
            self.c0 * rhs.y - self.c1 * rhs.x + self.c3 * rhs.z,
        )
    }
}

impl<T: Float> Geometric<BiVec3d<T>> for MVec3dU<T> {
    type Output = MVec3dU<T>;

    #[inline]
    fn gpr(self, rhs: BiVec3d<T>) -> Self::Output {
        MVec3dU::new(
            self.c2 * rhs.y - self.c1 * rhs.z - self.c3 * rhs.x,
            self.c0 * rhs.z - self.c2 * rhs.x - self.c3 * rhs.y,
            self.c1 * rhs.x - self.c0 * rhs.y - self.c3 * rhs.z,
            self.c0 * rhs.x + self.c1 * rhs.y + self.c2 * rhs.z,
        )
    }
}

impl<T: Float> Geometric<PScalar3d<T>> for MVec3dU<T> {
    type Output = MVec3dE<T>;

    #[inline]
    fn gpr(self, rhs: PScalar3d<T>) -> Self::Output {
        MVec3dE::new(
            -self.c3 * rhs.value,
            self.c0 * rhs.value,
            self.c1 * rhs.value,
            self.c2 * rhs.value,
        )
    }
}

impl<T: Float> Geometric<MVec3dE<T>> for MVec3dU<T> {
    type Output = MVec3dU<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dE<T>) -> Self::Output {
        MVec3dU::new(
            self.c0 * rhs.c0 - self.c1 * rhs.c3 + self.c2 * rhs.c2 - self.c3 * rhs.c1,
            self.c0 * rhs.c3 + self.c1 * rhs.c0 - self.c2 * rhs.c1 - self.c3 * rhs.c2,
            self.c1 * rhs.c1 - self.c0 * rhs.c2 + self.c2 * rhs.c0 - self.c3 * rhs.c3,
            self.c0 * rhs.c1 + self.c1 * rhs.c2 + self.c2 * rhs.c3 + self.c3 * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<MVec3dU<T>> for MVec3dU<T> {
    type Output = MVec3dE<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dU<T>) -> Self::Output {
        MVec3dE::new(
            self.c0 * rhs.c0 + self.c1 * rhs.c1 + self.c2 * rhs.c2 - self.c3 * rhs.c3,
            self.c0 * rhs.c3 + self.c1 * rhs.c2 - self.c2 * rhs.c1 + self.c3 * rhs.c0,
            self.c1 * rhs.c3 - self.c0 * rhs.c2 + self.c2 * rhs.c0 + self.c3 * rhs.c1,
            self.c0 * rhs.c1 - self.c1 * rhs.c0 + self.c2 * rhs.c3 + self.c3 * rhs.c2,
        )
    }
}

impl<T: Float> Geometric<MVec3d<T>> for MVec3dU<T> {
    type Output = MVec3d<T>;

    #[inline]
    fn gpr(self, rhs: MVec3d<T>) -> Self::Output {
        MVec3d::new(
            self.c0 * rhs.c1 + self.c1 * rhs.c2 + self.c2 * rhs.c3 - self.c3 * rhs.c7,
            self.c0 * rhs.c0 - self.c1 * rhs.c6 + self.c2 * rhs.c5 - self.c3 * rhs.c4,
            self.c0 * rhs.c6 + self.c1 * rhs.c0 - self.c2 * rhs.c4 - self.c3 * rhs.c5,
            self.c1 * rhs.c4 - self.c0 * rhs.c5 + self.c2 * rhs.c0 - self.c3 * rhs.c6,
            self.c0 * rhs.c7 + self.c1 * rhs.c3 - self.c2 * rhs.c2 + self.c3 * rhs.c1,
            self.c1 * rhs.c7 - self.c0 * rhs.c3 + self.c2 * rhs.c1 + self.c3 * rhs.c2,
            self.c0 * rhs.c2 - self.c1 * rhs.c1 + self.c2 * rhs.c7 + self.c3 * rhs.c3,
            self.c0 * rhs.c4 + self.c1 * rhs.c5 + self.c2 * rhs.c6 + self.c3 * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<Scalar3d<T>> for MVec3d<T> {
    type Output = MVec3d<T>;

    #[inline]
    fn gpr(self, rhs: Scalar3d<T>) -> Self::Output {
        MVec3d::new(
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

impl<T: Float> Geometric<Vec3d<T>> for MVec3d<T> {
    type Output = MVec3d<T>;

    #[inline]
    fn gpr(self, rhs: Vec3d<T>) -> Self::Output {
        MVec3d::new(
            self.c1 * rhs.x + self.c2 * rhs.y + self.c3 * rhs.z,
            self.c0 * rhs.x - self.c5 * rhs.z + self.c6 * rhs.y,
            self.c0 * rhs.y + self.c4 * rhs.z - self.c6 * rhs.x,
            self.c0 * rhs.z - self.c4 * rhs.y + self.c5 * rhs.x,
            self.c2 * rhs.z - self.c3 * rhs.y + self.c7 * rhs.x,
            self.c3 * rhs.x - self.c1 * rhs.z + self.c7 * rhs.y,
            self.c1 * rhs.y - self.c2 * rhs.x + self.c7 * rhs.z,
            self.c4 * rhs.x + self.c5 * rhs.y + self.c6 * rhs.z,
        )
    }
}

impl<T: Float> Geometric<BiVec3d<T>> for MVec3d<T> {
    type Output = MVec3d<T>;

    #[inline]
    fn gpr(self, rhs: BiVec3d<T>) -> Self::Output {
        MVec3d::new(
            -self.c4 * rhs.x - self.c5 * rhs.y - self.c6 * rhs.z,
            self.c3 * rhs.y - self.c2 * rhs.z - self.c7 * rhs.x,
            self.c1 * rhs.z - self.c3 * rhs.x - self.c7 * rhs.y,
            self.c2 * rhs.x - self.c1 * rhs.y - self.c7 * rhs.z,
            self.c0 * rhs.x - self.c5 * rhs.z + self.c6 * rhs.y,
            self.c0 * rhs.y + self.c4 * rhs.z - self.c6 * rhs.x,
            self.c0 * rhs.z - self.c4 * rhs.y + self.c5 * rhs.x,
            self.c1 * rhs.x + self.c2 * rhs.y + self.c3 * rhs.z,
        )
    }
}

impl<T: Float> Geometric<PScalar3d<T>> for MVec3d<T> {
    type Output = MVec3d<T>;

    #[inline]
    fn gpr(self, rhs: PScalar3d<T>) -> Self::Output {
        MVec3d::new(
            -self.c7 * rhs.value,
            -self.c4 * rhs.value,
            -self.c5 * rhs.value,
            -self.c6 * rhs.value,
            self.c1 * rhs.value,
            self.c2 * rhs.value,
            self.c3 * rhs.value,
            self.c0 * rhs.value,
        )
    }
}

impl<T: Float> Geometric<MVec3dE<T>> for MVec3d<T> {
    type Output = MVec3d<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dE<T>) -> Self::Output {
        MVec3d::new(
            self.c0 * rhs.c0 - self.c4 * rhs.c1 - self.c5 * rhs.c2 - self.c6 * rhs.c3,
            self.c1 * rhs.c0 - self.c2 * rhs.c3 + self.c3 * rhs.c2 - self.c7 * rhs.c1,
            self.c1 * rhs.c3 + self.c2 * rhs.c0 - self.c3 * rhs.c1 - self.c7 * rhs.c2,
            self.c2 * rhs.c1 - self.c1 * rhs.c2 + self.c3 * rhs.c0 - self.c7 * rhs.c3,
            self.c0 * rhs.c1 + self.c4 * rhs.c0 - self.c5 * rhs.c3 + self.c6 * rhs.c2,
            self.c0 * rhs.c2 + self.c4 * rhs.c3 + self.c5 * rhs.c0 - self.c6 * rhs.c1,
            self.c0 * rhs.c3 - self.c4 * rhs.c2 + self.c5 * rhs.c1 + self.c6 * rhs.c0,
            self.c1 * rhs.c1 + self.c2 * rhs.c2 + self.c3 * rhs.c3 + self.c7 * rhs.c0,
        )
    }
}

impl<T: Float> Geometric<MVec3dU<T>> for MVec3d<T> {
    type Output = MVec3d<T>;

    #[inline]
    fn gpr(self, rhs: MVec3dU<T>) -> Self::Output {
        MVec3d::new(
            self.c1 * rhs.c0 + self.c2 * rhs.c1 + self.c3 * rhs.c2 - self.c7 * rhs.c3,
            self.c0 * rhs.c0 - self.c4 * rhs.c3 - self.c5 * rhs.c2 + self.c6 * rhs.c1,
            self.c0 * rhs.c1 + self.c4 * rhs.c2 - self.c5 * rhs.c3 - self.c6 * rhs.c0,
            self.c0 * rhs.c2 - self.c4 * rhs.c1 + self.c5 * rhs.c0 - self.c6 * rhs.c3,
            self.c1 * rhs.c3 + self.c2 * rhs.c2 - self.c3 * rhs.c1 + self.c7 * rhs.c0,
            self.c2 * rhs.c3 - self.c1 * rhs.c2 + self.c3 * rhs.c0 + self.c7 * rhs.c1,
            self.c1 * rhs.c1 - self.c2 * rhs.c0 + self.c3 * rhs.c3 + self.c7 * rhs.c2,
            self.c0 * rhs.c3 + self.c4 * rhs.c0 + self.c5 * rhs.c1 + self.c6 * rhs.c2,
        )
    }
}

impl<T: Float> Geometric<MVec3d<T>> for MVec3d<T> {
    type Output = MVec3d<T>;

    #[inline]
    fn gpr(self, rhs: MVec3d<T>) -> Self::Output {
        MVec3d::new(
            self.c0 * rhs.c0 + self.c1 * rhs.c1 + self.c2 * rhs.c2 + self.c3 * rhs.c3
                - self.c4 * rhs.c4 - self.c5 * rhs.c5 - self.c6 * rhs.c6 - self.c7 * rhs.c7,
            self.c0 * rhs.c1 + self.c1 * rhs.c0 - self.c2 * rhs.c6 + self.c3 * rhs.c5
                - self.c4 * rhs.c7 - self.c5 * rhs.c3 + self.c6 * rhs.c2 - self.c7 * rhs.c4,
            self.c0 * rhs.c2 + self.c1 * rhs.c6 + self.c2 * rhs.c0 - self.c3 * rhs.c4
                + self.c4 * rhs.c3 - self.c5 * rhs.c7 - self.c6 * rhs.c1 - self.c7 * rhs.c5,
            self.c0 * rhs.c3 - self.c1 * rhs.c5 + self.c2 * rhs.c4 + self.c3 * rhs.c0
                - self.c4 * rhs.c2 + self.c5 * rhs.c1 - self.c6 * rhs.c7 - self.c7 * rhs.c6,
            self.c0 * rhs.c4 + self.c1 * rhs.c7 + self.c2 * rhs.c3 - self.c3 * rhs.c2
                + self.c4 * rhs.c0 - self.c5 * rhs.c6 + self.c6 * rhs.c5 + self.c7 * rhs.c1,
            self.c0 * rhs.c5 - self.c1 * rhs.c3 + self.c2 * rhs.c7 + self.c3 * rhs.c1
                + self.c4 * rhs.c6 + self.c5 * rhs.c0 - self.c6 * rhs.c4 + self.c7 * rhs.c2,
            self.c0 * rhs.c6 + self.c1 * rhs.c2 - self.c2 * rhs.c1 + self.c3 * rhs.c7
                - self.c4 * rhs.c5 + self.c5 * rhs.c4 + self.c6 * rhs.c0 + self.c7 * rhs.c3,
            self.c0 * rhs.c7 + self.c1 * rhs.c4 + self.c2 * rhs.c5 + self.c3 * rhs.c6
                + self.c4 * rhs.c1 + self.c5 * rhs.c2 + self.c6 * rhs.c3 + self.c7 * rhs.c0,
        )
    }
}

impl_geometric_mul! {
    Scalar3d * Scalar3d,
    Scalar3d * Vec3d,
    Scalar3d * BiVec3d,
    Scalar3d * PScalar3d,
    Scalar3d * MVec3dE,
    Scalar3d * MVec3dU,
    Scalar3d * MVec3d,
    Vec3d * Scalar3d,
    Vec3d * Vec3d,
    Vec3d * BiVec3d,
    Vec3d * PScalar3d,
    Vec3d * MVec3dE,
    Vec3d * MVec3dU,
    Vec3d * MVec3d,
    BiVec3d * Scalar3d,
    BiVec3d * Vec3d,
    BiVec3d * BiVec3d,
    BiVec3d * PScalar3d,
    BiVec3d * MVec3dE,
    BiVec3d * MVec3dU,
    BiVec3d * MVec3d,
    PScalar3d * Scalar3d,
    PScalar3d * Vec3d,
    PScalar3d * BiVec3d,
    PScalar3d * PScalar3d,
    PScalar3d * MVec3dE,
    PScalar3d * MVec3dU,
    PScalar3d * MVec3d,
    MVec3dE * Scalar3d,
    MVec3dE * Vec3d,
    MVec3dE * BiVec3d,
    MVec3dE * PScalar3d,
    MVec3dE * MVec3dE,
    MVec3dE * MVec3dU,
    MVec3dE * MVec3d,
    MVec3dU * Scalar3d,
    MVec3dU * Vec3d,
    MVec3dU * BiVec3d,
    MVec3dU * PScalar3d,
    MVec3dU * MVec3dE,
    MVec3dU * MVec3dU,
    MVec3dU * MVec3d,
    MVec3d * Scalar3d,
    MVec3d * Vec3d,
    MVec3d * BiVec3d,
    MVec3d * PScalar3d,
    MVec3d * MVec3dE,
    MVec3d * MVec3dU,
    MVec3d * MVec3d,
}

impl<T: Float> Commutator<Vec3d<T>> for Vec3d<T> {
    type Output = BiVec3d<T>;

    #[inline]
    fn cmt(self, rhs: Vec3d<T>) -> Self::Output {
        BiVec3d::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl<T: Float> Commutator<BiVec3d<T>> for Vec3d<T> {
    type Output = Vec3d<T>;

    #[inline]
    fn cmt(self, rhs: BiVec3d<T>) -> Self::Output {
        Vec3d::new(
            self.z * rhs.y - self.y * rhs.z,
            self.x * rhs.z - self.z * rhs.x,
            self.y * rhs.x - self.x * rhs.y,
        )
    }
}

impl<T: Float> Commutator<Vec3d<T>> for BiVec3d<T> {
    type Output = Vec3d<T>;

    #[inline]
    fn cmt(self, rhs: Vec3d<T>) -> Self::Output {
        Vec3d::new(
            self.z * rhs.y - self.y * rhs.z,
            self.x * rhs.z - self.z * rhs.x,
            self.y * rhs.x - self.x * rhs.y,
        )
    }
}

impl<T: Float> Commutator<BiVec3d<T>> for BiVec3d<T> {
    type Output = BiVec3d<T>;

    #[inline]
    fn cmt(self, rhs: BiVec3d<T>) -> Self::Output {
        BiVec3d::new(
            self.z * rhs.y - self.y * rhs.z,
            self.x * rhs.z - self.z * rhs.x,
            self.y * rhs.x - self.x * rhs.y,
        )
    }
}

impl<T: Float> Commutator<MVec3dE<T>> for MVec3dE<T> {
    type Output = BiVec3d<T>;

    #[inline]
    fn cmt(self, rhs: MVec3dE<T>) -> Self::Output {
        BiVec3d::new(
            self.c3 * rhs.c2 - self.c2 * rhs.c3,
            self.c1 * rhs.c3 - self.c3 * rhs.c1,
            self.c2 * rhs.c1 - self.c1 * rhs.c2,
        )
    }
}

impl<T: Float> Commutator<MVec3d<T>> for MVec3d<T> {
    type Output = MVec3d<T>;

    #[inline]
    fn cmt(self, rhs: MVec3d<T>) -> Self::Output {
        MVec3d::new(
            T::zero(),
            self.c3 * rhs.c5 - self.c2 * rhs.c6 - self.c5 * rhs.c3 + self.c6 * rhs.c2,
            self.c1 * rhs.c6 - self.c3 * rhs.c4 + self.c4 * rhs.c3 - self.c6 * rhs.c1,
            self.c2 * rhs.c4 - self.c1 * rhs.c5 - self.c4 * rhs.c2 + self.c5 * rhs.c1,
            self.c2 * rhs.c3 - self.c3 * rhs.c2 - self.c5 * rhs.c6 + self.c6 * rhs.c5,
            self.c3 * rhs.c1 - self.c1 * rhs.c3 + self.c4 * rhs.c6 - self.c6 * rhs.c4,
            self.c1 * rhs.c2 - self.c2 * rhs.c1 - self.c4 * rhs.c5 + self.c5 * rhs.c4,
            T::zero(),
        )
    }
}
