//! Exterior (wedge) and regressive wedge products.

use super::{BiVec3dp, MVec3dp, PScalar3dp, Scalar3dp, TriVec3dp, Vec3dp};
use crate::traits::{RegressiveWedge, Wedge};
use num_traits::Float;

impl<T: Float> Wedge<Scalar3dp<T>> for Scalar3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn wdg(self, rhs: Scalar3dp<T>) -> Self::Output {
        Scalar3dp::new(self.value * rhs.value)
    }
}

impl<T: Float> Wedge<Vec3dp<T>> for Scalar3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn wdg(self, rhs: Vec3dp<T>) -> Self::Output {
        Vec3dp::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z, self.value * rhs.w)
    }
}

impl<T: Float> Wedge<BiVec3dp<T>> for Scalar3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn wdg(self, rhs: BiVec3dp<T>) -> Self::Output {
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

impl<T: Float> Wedge<TriVec3dp<T>> for Scalar3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn wdg(self, rhs: TriVec3dp<T>) -> Self::Output {
        TriVec3dp::new(
            self.value * rhs.x,
            self.value * rhs.y,
            self.value * rhs.z,
            self.value * rhs.w,
        )
    }
}

impl<T: Float> Wedge<PScalar3dp<T>> for Scalar3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn wdg(self, rhs: PScalar3dp<T>) -> Self::Output {
        PScalar3dp::new(self.value * rhs.value)
    }
}

impl<T: Float> Wedge<Scalar3dp<T>> for Vec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn wdg(self, rhs: Scalar3dp<T>) -> Self::Output {
        Vec3dp::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value, self.w * rhs.value)
    }
}

impl<T: Float> Wedge<Vec3dp<T>> for Vec3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn wdg(self, rhs: Vec3dp<T>) -> Self::Output {
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

impl<T: Float> Wedge<BiVec3dp<T>> for Vec3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn wdg(self, rhs: BiVec3dp<T>) -> Self::Output {
        TriVec3dp::new(
            self.z * rhs.vy - self.y * rhs.vz + self.w * rhs.mx,
            self.x * rhs.vz - self.z * rhs.vx + self.w * rhs.my,
            self.y * rhs.vx - self.x * rhs.vy + self.w * rhs.mz,
            -self.x * rhs.mx - self.y * rhs.my - self.z * rhs.mz,
        )
    }
}

impl<T: Float> Wedge<TriVec3dp<T>> for Vec3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn wdg(self, rhs: TriVec3dp<T>) -> Self::Output {
        PScalar3dp::new(self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w)
    }
}

impl<T: Float> Wedge<PScalar3dp<T>> for Vec3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn wdg(self, _rhs: PScalar3dp<T>) -> Self::Output {
        PScalar3dp::new(T::zero())
    }
}

impl<T: Float> Wedge<Scalar3dp<T>> for BiVec3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn wdg(self, rhs: Scalar3dp<T>) -> Self::Output {
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

impl<T: Float> Wedge<Vec3dp<T>> for BiVec3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn wdg(self, rhs: Vec3dp<T>) -> Self::Output {
        TriVec3dp::new(
            self.vy * rhs.z - self.vz * rhs.y + self.mx * rhs.w,
            self.vz * rhs.x - self.vx * rhs.z + self.my * rhs.w,
            self.vx * rhs.y - self.vy * rhs.x + self.mz * rhs.w,
            -self.mx * rhs.x - self.my * rhs.y - self.mz * rhs.z,
        )
    }
}

impl<T: Float> Wedge<BiVec3dp<T>> for BiVec3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn wdg(self, rhs: BiVec3dp<T>) -> Self::Output {
        PScalar3dp::new(
            -self.vx * rhs.mx - self.vy * rhs.my - self.vz * rhs.mz - self.mx * rhs.vx
                - self.my * rhs.vy - self.mz * rhs.vz,
        )
    }
}

impl<T: Float> Wedge<TriVec3dp<T>> for BiVec3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn wdg(self, _rhs: TriVec3dp<T>) -> Self::Output {
        PScalar3dp::new(T::zero())
    }
}

impl<T: Float> Wedge<PScalar3dp<T>> for BiVec3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn wdg(self, _rhs: PScalar3dp<T>) -> Self::Output {
        PScalar3dp::new(T::zero())
    }
}

impl<T: Float> Wedge<Scalar3dp<T>> for TriVec3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn wdg(self, rhs: Scalar3dp<T>) -> Self::Output {
        TriVec3dp::new(
            self.x * rhs.value,
            self.y * rhs.value,
            self.z * rhs.value,
            self.w * rhs.value,
        )
    }
}

impl<T: Float> Wedge<Vec3dp<T>> for TriVec3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn wdg(self, rhs: Vec3dp<T>) -> Self::Output {
        PScalar3dp::new(-self.x * rhs.x - self.y * rhs.y - self.z * rhs.z - self.w * rhs.w)
    }
}

impl<T: Float> Wedge<BiVec3dp<T>> for TriVec3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn wdg(self, _rhs: BiVec3dp<T>) -> Self::Output {
        PScalar3dp::new(T::zero())
    }
}

impl<T: Float> Wedge<TriVec3dp<T>> for TriVec3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn wdg(self, _rhs: TriVec3dp<T>) -> Self::Output {
        PScalar3dp::new(T::zero())
    }
}

impl<T: Float> Wedge<PScalar3dp<T>> for TriVec3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn wdg(self, _rhs: PScalar3dp<T>) -> Self::Output {
        PScalar3dp::new(T::zero())
    }
}

impl<T: Float> Wedge<Scalar3dp<T>> for PScalar3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn wdg(self, rhs: Scalar3dp<T>) -> Self::Output {
        PScalar3dp::new(self.value * rhs.value)
    }
}

impl<T: Float> Wedge<Vec3dp<T>> for PScalar3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn wdg(self, _rhs: Vec3dp<T>) -> Self::Output {
        PScalar3dp::new(T::zero())
    }
}

impl<T: Float> Wedge<BiVec3dp<T>> for PScalar3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn wdg(self, _rhs: BiVec3dp<T>) -> Self::Output {
        PScalar3dp::new(T::zero())
    }
}

impl<T: Float> Wedge<TriVec3dp<T>> for PScalar3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn wdg(self, _rhs: TriVec3dp<T>) -> Self::Output {
        PScalar3dp::new(T::zero())
    }
}

impl<T: Float> Wedge<PScalar3dp<T>> for PScalar3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn wdg(self, _rhs: PScalar3dp<T>) -> Self::Output {
        PScalar3dp::new(T::zero())
    }
}

impl<T: Float> Wedge<MVec3dp<T>> for MVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn wdg(self, rhs: MVec3dp<T>) -> Self::Output {
        MVec3dp::new(
            self.c0 * rhs.c0,
            self.c0 * rhs.c1 + self.c1 * rhs.c0,
            self.c0 * rhs.c2 + self.c2 * rhs.c0,
            self.c0 * rhs.c3 + self.c3 * rhs.c0,
            self.c0 * rhs.c4 + self.c4 * rhs.c0,
            self.c0 * rhs.c5 - self.c1 * rhs.c4 + self.c4 * rhs.c1 + self.c5 * rhs.c0,
            self.c0 * rhs.c6 - self.c2 * rhs.c4 + self.c4 * rhs.c2 + self.c6 * rhs.c0,
            self.c0 * rhs.c7 - self.c3 * rhs.c4 + self.c4 * rhs.c3 + self.c7 * rhs.c0,
            self.c0 * rhs.c8 + self.c2 * rhs.c3 - self.c3 * rhs.c2 + self.c8 * rhs.c0,
            self.c0 * rhs.c9 - self.c1 * rhs.c3 + self.c3 * rhs.c1 + self.c9 * rhs.c0,
            self.c0 * rhs.c10 + self.c1 * rhs.c2 - self.c2 * rhs.c1 + self.c10 * rhs.c0,
            self.c0 * rhs.c11 - self.c2 * rhs.c7 + self.c3 * rhs.c6 + self.c4 * rhs.c8
                + self.c6 * rhs.c3 - self.c7 * rhs.c2 + self.c8 * rhs.c4 + self.c11 * rhs.c0,
            self.c0 * rhs.c12 + self.c1 * rhs.c7 - self.c3 * rhs.c5 + self.c4 * rhs.c9
                - self.c5 * rhs.c3 + self.c7 * rhs.c1 + self.c9 * rhs.c4 + self.c12 * rhs.c0,
            self.c0 * rhs.c13 - self.c1 * rhs.c6 + self.c2 * rhs.c5 + self.c4 * rhs.c10
                + self.c5 * rhs.c2 - self.c6 * rhs.c1 + self.c10 * rhs.c4 + self.c13 * rhs.c0,
            self.c0 * rhs.c14 - self.c1 * rhs.c8 - self.c2 * rhs.c9 - self.c3 * rhs.c10
                - self.c8 * rhs.c1 - self.c9 * rhs.c2 - self.c10 * rhs.c3 + self.c14 * rhs.c0,
            self.c0 * rhs.c15 + self.c1 * rhs.c11 + self.c2 * rhs.c12 + self.c3 * rhs.c13
                + self.c4 * rhs.c14 - self.c5 * rhs.c8 - self.c6 * rhs.c9 - self.c7 * rhs.c10
                - self.c8 * rhs.c5 - self.c9 * rhs.c6 - self.c10 * rhs.c7 - self.c11 * rhs.c1
                - self.c12 * rhs.c2 - self.c13 * rhs.c3 - self.c14 * rhs.c4 + self.c15 * rhs.c0,
        )
    }
}

impl<T: Float> RegressiveWedge<Scalar3dp<T>> for Scalar3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn rwdg(self, _rhs: Scalar3dp<T>) -> Self::Output {
        Scalar3dp::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<Vec3dp<T>> for Scalar3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn rwdg(self, _rhs: Vec3dp<T>) -> Self::Output {
        Scalar3dp::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<BiVec3dp<T>> for Scalar3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn rwdg(self, _rhs: BiVec3dp<T>) -> Self::Output {
        Scalar3dp::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<TriVec3dp<T>> for Scalar3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn rwdg(self, _rhs: TriVec3dp<T>) -> Self::Output {
        Scalar3dp::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<PScalar3dp<T>> for Scalar3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn rwdg(self, rhs: PScalar3dp<T>) -> Self::Output {
        Scalar3dp::new(self.value * rhs.value)
    }
}

impl<T: Float> RegressiveWedge<Scalar3dp<T>> for Vec3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn rwdg(self, _rhs: Scalar3dp<T>) -> Self::Output {
        Scalar3dp::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<Vec3dp<T>> for Vec3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn rwdg(self, _rhs: Vec3dp<T>) -> Self::Output {
        Scalar3dp::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<BiVec3dp<T>> for Vec3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn rwdg(self, _rhs: BiVec3dp<T>) -> Self::Output {
        Scalar3dp::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<TriVec3dp<T>> for Vec3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn rwdg(self, rhs: TriVec3dp<T>) -> Self::Output {
        Scalar3dp::new(self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w)
    }
}

impl<T: Float> RegressiveWedge<PScalar3dp<T>> for Vec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn rwdg(self, rhs: PScalar3dp<T>) -> Self::Output {
        Vec3dp::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value, self.w * rhs.value)
    }
}

impl<T: Float> RegressiveWedge<Scalar3dp<T>> for BiVec3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn rwdg(self, _rhs: Scalar3dp<T>) -> Self::Output {
        Scalar3dp::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<Vec3dp<T>> for BiVec3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn rwdg(self, _rhs: Vec3dp<T>) -> Self::Output {
        Scalar3dp::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<BiVec3dp<T>> for BiVec3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn rwdg(self, rhs: BiVec3dp<T>) -> Self::Output {
        Scalar3dp::new(
            -self.vx * rhs.mx - self.vy * rhs.my - self.vz * rhs.mz - self.mx * rhs.vx
                - self.my * rhs.vy - self.mz * rhs.vz,
        )
    }
}

impl<T: Float> RegressiveWedge<TriVec3dp<T>> for BiVec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn rwdg(self, rhs: TriVec3dp<T>) -> Self::Output {
        Vec3dp::new(
            self.vx * rhs.w + self.my * rhs.z - self.mz * rhs.y,
            self.vy * rhs.w - self.mx * rhs.z + self.mz * rhs.x,
            self.vz * rhs.w + self.mx * rhs.y - self.my * rhs.x,
            -self.vx * rhs.x - self.vy * rhs.y - self.vz * rhs.z,
        )
    }
}

impl<T: Float> RegressiveWedge<PScalar3dp<T>> for BiVec3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn rwdg(self, rhs: PScalar3dp<T>) -> Self::Output {
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

impl<T: Float> RegressiveWedge<Scalar3dp<T>> for TriVec3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn rwdg(self, _rhs: Scalar3dp<T>) -> Self::Output {
        Scalar3dp::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<Vec3dp<T>> for TriVec3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn rwdg(self, rhs: Vec3dp<T>) -> Self::Output {
        Scalar3dp::new(-self.x * rhs.x - self.y * rhs.y - self.z * rhs.z - self.w * rhs.w)
    }
}

impl<T: Float> RegressiveWedge<BiVec3dp<T>> for TriVec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn rwdg(self, rhs: BiVec3dp<T>) -> Self::Output {
        Vec3dp::new(
            self.z * rhs.my - self.y * rhs.mz + self.w * rhs.vx,
            self.x * rhs.mz - self.z * rhs.mx + self.w * rhs.vy,
            self.y * rhs.mx - self.x * rhs.my + self.w * rhs.vz,
            -self.x * rhs.vx - self.y * rhs.vy - self.z * rhs.vz,
        )
    }
}

impl<T: Float> RegressiveWedge<TriVec3dp<T>> for TriVec3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn rwdg(self, rhs: TriVec3dp<T>) -> Self::Output {
        BiVec3dp::new(
            self.z * rhs.y - self.y * rhs.z,
            self.x * rhs.z - self.z * rhs.x,
            self.y * rhs.x - self.x * rhs.y,
            self.x * rhs.w - self.w * rhs.x,
            self.y * rhs.w - self.w * rhs.y,
            self.z * rhs.w - self.w * rhs.z,
        )
    }
}

impl<T: Float> RegressiveWedge<PScalar3dp<T>> for TriVec3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn rwdg(self, rhs: PScalar3dp<T>) -> Self::Output {
        TriVec3dp::new(
            self.x * rhs.value,
            self.y * rhs.value,
            self.z * rhs.value,
            self.w * rhs.value,
        )
    }
}

impl<T: Float> RegressiveWedge<Scalar3dp<T>> for PScalar3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn rwdg(self, rhs: Scalar3dp<T>) -> Self::Output {
        Scalar3dp::new(self.value * rhs.value)
    }
}

impl<T: Float> RegressiveWedge<Vec3dp<T>> for PScalar3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn rwdg(self, rhs: Vec3dp<T>) -> Self::Output {
        Vec3dp::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z, self.value * rhs.w)
    }
}

impl<T: Float> RegressiveWedge<BiVec3dp<T>> for PScalar3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn rwdg(self, rhs: BiVec3dp<T>) -> Self::Output {
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

impl<T: Float> RegressiveWedge<TriVec3dp<T>> for PScalar3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn rwdg(self, rhs: TriVec3dp<T>) -> Self::Output {
        TriVec3dp::new(
            self.value * rhs.x,
            self.value * rhs.y,
            self.value * rhs.z,
            self.value * rhs.w,
        )
    }
}

impl<T: Float> RegressiveWedge<PScalar3dp<T>> for PScalar3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn rwdg(self, rhs: PScalar3dp<T>) -> Self::Output {
        PScalar3dp::new(self.value * rhs.value)
    }
}

impl<T: Float> RegressiveWedge<MVec3dp<T>> for MVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn rwdg(self, rhs: MVec3dp<T>) -> Self::Output {
        MVec3dp::new(
            self.c0 * rhs.c15 + self.c1 * rhs.c11 + self.c2 * rhs.c12 + self.c3 * rhs.c13
                + self.c4 * rhs.c14 - self.c5 * rhs.c8 - self.c6 * rhs.c9 - self.c7 * rhs.c10
                - self.c8 * rhs.c5 - self.c9 * rhs.c6 - self.c10 * rhs.c7 - self.c11 * rhs.c1
                - self.c12 * rhs.c2 - self.c13 * rhs.c3 - self.c14 * rhs.c4 + self.c15 * rhs.c0,
            self.c1 * rhs.c15 + self.c5 * rhs.c14 + self.c9 * rhs.c13 - self.c10 * rhs.c12
                - self.c12 * rhs.c10 + self.c13 * rhs.c9 + self.c14 * rhs.c5 + self.c15 * rhs.c1,
            self.c2 * rhs.c15 + self.c6 * rhs.c14 - self.c8 * rhs.c13 + self.c10 * rhs.c11
                + self.c11 * rhs.c10 - self.c13 * rhs.c8 + self.c14 * rhs.c6 + self.c15 * rhs.c2,
            self.c3 * rhs.c15 + self.c7 * rhs.c14 + self.c8 * rhs.c12 - self.c9 * rhs.c11
                - self.c11 * rhs.c9 + self.c12 * rhs.c8 + self.c14 * rhs.c7 + self.c15 * rhs.c3,
            self.c4 * rhs.c15 - self.c5 * rhs.c11 - self.c6 * rhs.c12 - self.c7 * rhs.c13
                - self.c11 * rhs.c5 - self.c12 * rhs.c6 - self.c13 * rhs.c7 + self.c15 * rhs.c4,
            self.c5 * rhs.c15 - self.c12 * rhs.c13 + self.c13 * rhs.c12 + self.c15 * rhs.c5,
            self.c6 * rhs.c15 + self.c11 * rhs.c13 - self.c13 * rhs.c11 + self.c15 * rhs.c6,
            self.c7 * rhs.c15 - self.c11 * rhs.c12 + self.c12 * rhs.c11 + self.c15 * rhs.c7,
            self.c8 * rhs.c15 + self.c11 * rhs.c14 - self.c14 * rhs.c11 + self.c15 * rhs.c8,
            self.c9 * rhs.c15 + self.c12 * rhs.c14 - self.c14 * rhs.c12 + self.c15 * rhs.c9,
            self.c10 * rhs.c15 + self.c13 * rhs.c14 - self.c14 * rhs.c13 + self.c15 * rhs.c10,
            self.c11 * rhs.c15 + self.c15 * rhs.c11,
            self.c12 * rhs.c15 + self.c15 * rhs.c12,
            self.c13 * rhs.c15 + self.c15 * rhs.c13,
            self.c14 * rhs.c15 + self.c15 * rhs.c14,
            self.c15 * rhs.c15,
        )
    }
}
