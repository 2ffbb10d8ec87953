//! Exterior (wedge) and regressive wedge products.

use super::{BiVec3d, MVec3d, PScalar3d, Scalar3d, Vec3d};
use crate::traits::{RegressiveWedge, Wedge};
use num_traits::Float;

impl<T: Float> Wedge<Scalar3d<T>> for Scalar3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn wdg(self, rhs: Scalar3d<T>) -> Self::Output {
        Scalar3d::new(self.value * rhs.value)
    }
}

impl<T: Float> Wedge<Vec3d<T>> for Scalar3d<T> {
    type Output = Vec3d<T>;

    #[inline]
    fn wdg(self, rhs: Vec3d<T>) -> Self::Output {
        Vec3d::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z)
    }
}

impl<T: Float> Wedge<BiVec3d<T>> for Scalar3d<T> {
    type Output = BiVec3d<T>;

    #[inline]
    fn wdg(self, rhs: BiVec3d<T>) -> Self::Output {
        BiVec3d::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z)
    }
}

impl<T: Float> Wedge<PScalar3d<T>> for Scalar3d<T> {
    type Output = PScalar3d<T>;

    #[inline]
    fn wdg(self, rhs: PScalar3d<T>) -> Self::Output {
        PScalar3d::new(self.value * rhs.value)
    }
}

impl<T: Float> Wedge<Scalar3d<T>> for Vec3d<T> {
    type Output = Vec3d<T>;

    #[inline]
    fn wdg(self, rhs: Scalar3d<T>) -> Self::Output {
        Vec3d::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value)
    }
}

impl<T: Float> Wedge<Vec3d<T>> for Vec3d<T> {
    type Output = BiVec3d<T>;

    #[inline]
    fn wdg(self, rhs: Vec3d<T>) -> Self::Output {
        BiVec3d::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl<T: Float> Wedge<BiVec3d<T>> for Vec3d<T> {
    type Output = PScalar3d<T>;

    #[inline]
    fn wdg(self, rhs: BiVec3d<T>) -> Self::Output {
        PScalar3d::new(self.x * rhs.x + self.y * rhs.y + self.z * rhs.z)
    }
}

impl<T: Float> Wedge<PScalar3d<T>> for Vec3d<T> {
    type Output = PScalar3d<T>;

    #[inline]
    fn wdg(self, _rhs: PScalar3d<T>) -> Self::Output {
        PScalar3d::new(T::zero())
    }
}

impl<T: Float> Wedge<Scalar3d<T>> for BiVec3d<T> {
    type Output = BiVec3d<T>;

    #[inline]
    fn wdg(self, rhs: Scalar3d<T>) -> Self::Output {
        BiVec3d::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value)
    }
}

impl<T: Float> Wedge<Vec3d<T>> for BiVec3d<T> {
    type Output = PScalar3d<T>;

    #[inline]
    fn wdg(self, rhs: Vec3d<T>) -> Self::Output {
        PScalar3d::new(self.x * rhs.x + self.y * rhs.y + self.z * rhs.z)
    }
}

impl<T: Float> Wedge<BiVec3d<T>> for BiVec3d<T> {
    type Output = PScalar3d<T>;

    #[inline]
    fn wdg(self, _rhs: BiVec3d<T>) -> Self::Output {
        PScalar3d::new(T::zero())
    }
}

impl<T: Float> Wedge<PScalar3d<T>> for BiVec3d<T> {
    type Output = PScalar3d<T>;

    #[inline]
    fn wdg(self, _rhs: PScalar3d<T>) -> Self::Output {
        PScalar3d::new(T::zero())
    }
}

impl<T: Float> Wedge<Scalar3d<T>> for PScalar3d<T> {
    type Output = PScalar3d<T>;

    #[inline]
    fn wdg(self, rhs: Scalar3d<T>) -> Self::Output {
        PScalar3d::new(self.value * rhs.value)
    }
}

impl<T: Float> Wedge<Vec3d<T>> for PScalar3d<T> {
    type Output = PScalar3d<T>;

    #[inline]
    fn wdg(self, _rhs: Vec3d<T>) -> Self::Output {
        PScalar3d::new(T::zero())
    }
}

impl<T: Float> Wedge<BiVec3d<T>> for PScalar3d<T> {
    type Output = PScalar3d<T>;

    #[inline]
    fn wdg(self, _rhs: BiVec3d<T>) -> Self::Output {
        PScalar3d::new(T::zero())
    }
}

impl<T: Float> Wedge<PScalar3d<T>> for PScalar3d<T> {
    type Output = PScalar3d<T>;

    #[inline]
    fn wdg(self, _rhs: PScalar3d<T>) -> Self::Output {
        PScalar3d::new(T::zero())
    }
}

impl<T: Float> Wedge<MVec3d<T>> for MVec3d<T> {
    type Output = MVec3d<T>;

    #[inline]
    fn wdg(self, rhs: MVec3d<T>) -> Self::Output {
        MVec3d::new(
            self.c0 * rhs.c0,
            self.c0 * rhs.c1 + self.c1 * rhs.c0,
            self.c0 * rhs.c2 + self.c2 * rhs.c0,
            self.c0 * rhs.c3 + self.c3 * rhs.c0,
            self.c0 * rhs.c4 + self.c2 * rhs.c3 - self.c3 * rhs.c2 + self.c4 * rhs.c0,
            self.c0 * rhs.c5 - self.c1 * rhs.c3 + self.c3 * rhs.c1 + self.c5 * rhs.c0,
            self.c0 * rhs.c6 + self.c1 * rhs.c2 - self.c2 * rhs.c1 + self.c6 * rhs.c0,
            self.c0 * rhs.c7 + self.c1 * rhs.c4 + self.c2 * rhs.c5 + self.c3 * rhs.c6
                + self.c4 * rhs.c1 + self.c5 * rhs.c2 + self.c6 * rhs.c3 + self.c7 * rhs.c0,
        )
    }
}

impl<T: Float> RegressiveWedge<Scalar3d<T>> for Scalar3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn rwdg(self, _rhs: Scalar3d<T>) -> Self::Output {
        Scalar3d::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<Vec3d<T>> for Scalar3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn rwdg(self, _rhs: Vec3d<T>) -> Self::Output {
        Scalar3d::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<BiVec3d<T>> for Scalar3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn rwdg(self, _rhs: BiVec3d<T>) -> Self::Output {
        Scalar3d::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<PScalar3d<T>> for Scalar3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn rwdg(self, rhs: PScalar3d<T>) -> Self::Output {
        Scalar3d::new(self.value * rhs.value)
    }
}

impl<T: Float> RegressiveWedge<Scalar3d<T>> for Vec3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn rwdg(self, _rhs: Scalar3d<T>) -> Self::Output {
        Scalar3d::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<Vec3d<T>> for Vec3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn rwdg(self, _rhs: Vec3d<T>) -> Self::Output {
        Scalar3d::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<BiVec3d<T>> for Vec3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn rwdg(self, rhs: BiVec3d<T>) -> Self::Output {
        Scalar3d::new(self.x * rhs.x + self.y * rhs.y + self.z * rhs.z)
    }
}

impl<T: Float> RegressiveWedge<PScalar3d<T>> for Vec3d<T> {
    type Output = Vec3d<T>;

    #[inline]
    fn rwdg(self, rhs: PScalar3d<T>) -> Self::Output {
        Vec3d::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value)
    }
}

impl<T: Float> RegressiveWedge<Scalar3d<T>> for BiVec3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn rwdg(self, _rhs: Scalar3d<T>) -> Self::Output {
        Scalar3d::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<Vec3d<T>> for BiVec3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn rwdg(self, rhs: Vec3d<T>) -> Self::Output {
        Scalar3d::new(self.x * rhs.x + self.y * rhs.y + self.z * rhs.z)
    }
}

impl<T: Float> RegressiveWedge<BiVec3d<T>> for BiVec3d<T> {
    type Output = Vec3d<T>;

    #[inline]
    fn rwdg(self, rhs: BiVec3d<T>) -> Self::Output {
        Vec3d::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl<T: Float> RegressiveWedge<PScalar3d<T>> for BiVec3d<T> {
    type Output = BiVec3d<T>;

    #[inline]
    fn rwdg(self, rhs: PScalar3d<T>) -> Self::Output {
        BiVec3d::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value)
    }
}

impl<T: Float> RegressiveWedge<Scalar3d<T>> for PScalar3d<T> {
    type Output = Scalar3d<T>;

    #[inline]
    fn rwdg(self, rhs: Scalar3d<T>) -> Self::Output {
        Scalar3d::new(self.value * rhs.value)
    }
}

impl<T: Float> RegressiveWedge<Vec3d<T>> for PScalar3d<T> {
    type Output = Vec3d<T>;

    #[inline]
    fn rwdg(self, rhs: Vec3d<T>) -> Self::Output {
        Vec3d::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z)
    }
}

impl<T: Float> RegressiveWedge<BiVec3d<T>> for PScalar3d<T> {
    type Output = BiVec3d<T>;

    #[inline]
    fn rwdg(self, rhs: BiVec3d<T>) -> Self::Output {
        BiVec3d::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z)
    }
}

impl<T: Float> RegressiveWedge<PScalar3d<T>> for PScalar3d<T> {
    type Output = PScalar3d<T>;

    #[inline]
    fn rwdg(self, rhs: PScalar3d<T>) -> Self::Output {
        PScalar3d::new(self.value * rhs.value)
    }
}

impl<T: Float> RegressiveWedge<MVec3d<T>> for MVec3d<T> {
    type Output = MVec3d<T>;

    #[inline]
    fn rwdg(self, rhs: MVec3d<T>) -> Self::Output {
        MVec3d::new(
            self.c0 * rhs.c7 + self.c1 * rhs.c4 + self.c2 * rhs.c5 + self.c3 * rhs.c6
                + self.c4 * rhs.c1 + self.c5 * rhs.c2 + self.c6 * rhs.c3 + self.c7 * rhs.c0,
            self.c1 * rhs.c7 + self.c5 * rhs.c6 - self.c6 * rhs.c5 + self.c7 * rhs.c1,
            self.c2 * rhs.c7 - self.c4 * rhs.c6 + self.c6 * rhs.c4 + self.c7 * rhs.c2,
            self.c3 * rhs.c7 + self.c4 * rhs.c5 - self.c5 * rhs.c4 + self.c7 * rhs.c3,
            self.c4 * rhs.c7 + self.c7 * rhs.c4,
            self.c5 * rhs.c7 + self.c7 * rhs.c5,
            self.c6 * rhs.c7 + self.c7 * rhs.c6,
            self.c7 * rhs.c7,
        )
    }
}
