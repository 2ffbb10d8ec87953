//! Exterior (wedge) and regressive wedge products.

use super::{BiVec2dp, MVec2dp, PScalar2dp, Scalar2dp, Vec2dp};
use crate::traits::{RegressiveWedge, Wedge};
use num_traits::Float;

impl<T: Float> Wedge<Scalar2dp<T>> for Scalar2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn wdg(self, rhs: Scalar2dp<T>) -> Self::Output {
        Scalar2dp::new(self.value * rhs.value)
    }
}

impl<T: Float> Wedge<Vec2dp<T>> for Scalar2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn wdg(self, rhs: Vec2dp<T>) -> Self::Output {
        Vec2dp::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z)
    }
}

impl<T: Float> Wedge<BiVec2dp<T>> for Scalar2dp<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn wdg(self, rhs: BiVec2dp<T>) -> Self::Output {
        BiVec2dp::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z)
    }
}

impl<T: Float> Wedge<PScalar2dp<T>> for Scalar2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn wdg(self, rhs: PScalar2dp<T>) -> Self::Output {
        PScalar2dp::new(self.value * rhs.value)
    }
}

impl<T: Float> Wedge<Scalar2dp<T>> for Vec2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn wdg(self, rhs: Scalar2dp<T>) -> Self::Output {
        Vec2dp::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value)
    }
}

impl<T: Float> Wedge<Vec2dp<T>> for Vec2dp<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn wdg(self, rhs: Vec2dp<T>) -> Self::Output {
        BiVec2dp::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl<T: Float> Wedge<BiVec2dp<T>> for Vec2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn wdg(self, rhs: BiVec2dp<T>) -> Self::Output {
        PScalar2dp::new(self.x * rhs.x + self.y * rhs.y + self.z * rhs.z)
    }
}

impl<T: Float> Wedge<PScalar2dp<T>> for Vec2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn wdg(self, _rhs: PScalar2dp<T>) -> Self::Output {
        PScalar2dp::new(T::zero())
    }
}

impl<T: Float> Wedge<Scalar2dp<T>> for BiVec2dp<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn wdg(self, rhs: Scalar2dp<T>) -> Self::Output {
        BiVec2dp::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value)
    }
}

impl<T: Float> Wedge<Vec2dp<T>> for BiVec2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn wdg(self, rhs: Vec2dp<T>) -> Self::Output {
        PScalar2dp::new(self.x * rhs.x + self.y * rhs.y + self.z * rhs.z)
    }
}

impl<T: Float> Wedge<BiVec2dp<T>> for BiVec2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn wdg(self, _rhs: BiVec2dp<T>) -> Self::Output {
        PScalar2dp::new(T::zero())
    }
}

impl<T: Float> Wedge<PScalar2dp<T>> for BiVec2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn wdg(self, _rhs: PScalar2dp<T>) -> Self::Output {
        PScalar2dp::new(T::zero())
    }
}

impl<T: Float> Wedge<Scalar2dp<T>> for PScalar2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn wdg(self, rhs: Scalar2dp<T>) -> Self::Output {
        PScalar2dp::new(self.value * rhs.value)
    }
}

impl<T: Float> Wedge<Vec2dp<T>> for PScalar2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn wdg(self, _rhs: Vec2dp<T>) -> Self::Output {
        PScalar2dp::new(T::zero())
    }
}

impl<T: Float> Wedge<BiVec2dp<T>> for PScalar2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn wdg(self, _rhs: BiVec2dp<T>) -> Self::Output {
        PScalar2dp::new(T::zero())
    }
}

impl<T: Float> Wedge<PScalar2dp<T>> for PScalar2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn wdg(self, _rhs: PScalar2dp<T>) -> Self::Output {
        PScalar2dp::new(T::zero())
    }
}

impl<T: Float> Wedge<MVec2dp<T>> for MVec2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn wdg(self, rhs: MVec2dp<T>) -> Self::Output {
        MVec2dp::new(
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

impl<T: Float> RegressiveWedge<Scalar2dp<T>> for Scalar2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn rwdg(self, _rhs: Scalar2dp<T>) -> Self::Output {
        Scalar2dp::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<Vec2dp<T>> for Scalar2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn rwdg(self, _rhs: Vec2dp<T>) -> Self::Output {
        Scalar2dp::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<BiVec2dp<T>> for Scalar2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn rwdg(self, _rhs: BiVec2dp<T>) -> Self::Output {
        Scalar2dp::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<PScalar2dp<T>> for Scalar2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn rwdg(self, rhs: PScalar2dp<T>) -> Self::Output {
        Scalar2dp::new(self.value * rhs.value)
    }
}

impl<T: Float> RegressiveWedge<Scalar2dp<T>> for Vec2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn rwdg(self, _rhs: Scalar2dp<T>) -> Self::Output {
        Scalar2dp::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<Vec2dp<T>> for Vec2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn rwdg(self, _rhs: Vec2dp<T>) -> Self::Output {
        Scalar2dp::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<BiVec2dp<T>> for Vec2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn rwdg(self, rhs: BiVec2dp<T>) -> Self::Output {
        Scalar2dp::new(self.x * rhs.x + self.y * rhs.y + self.z * rhs.z)
    }
}

impl<T: Float> RegressiveWedge<PScalar2dp<T>> for Vec2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn rwdg(self, rhs: PScalar2dp<T>) -> Self::Output {
        Vec2dp::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value)
    }
}

impl<T: Float> RegressiveWedge<Scalar2dp<T>> for BiVec2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn rwdg(self, _rhs: Scalar2dp<T>) -> Self::Output {
        Scalar2dp::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<Vec2dp<T>> for BiVec2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn rwdg(self, rhs: Vec2dp<T>) -> Self::Output {
        Scalar2dp::new(self.x * rhs.x + self.y * rhs.y + self.z * rhs.z)
    }
}

impl<T: Float> RegressiveWedge<BiVec2dp<T>> for BiVec2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn rwdg(self, rhs: BiVec2dp<T>) -> Self::Output {
        Vec2dp::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl<T: Float> RegressiveWedge<PScalar2dp<T>> for BiVec2dp<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn rwdg(self, rhs: PScalar2dp<T>) -> Self::Output {
        BiVec2dp::new(self.x * rhs.value, self.y * rhs.value, self.z * rhs.value)
    }
}

impl<T: Float> RegressiveWedge<Scalar2dp<T>> for PScalar2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn rwdg(self, rhs: Scalar2dp<T>) -> Self::Output {
        Scalar2dp::new(self.value * rhs.value)
    }
}

impl<T: Float> RegressiveWedge<Vec2dp<T>> for PScalar2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn rwdg(self, rhs: Vec2dp<T>) -> Self::Output {
        Vec2dp::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z)
    }
}

impl<T: Float> RegressiveWedge<BiVec2dp<T>> for PScalar2dp<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn rwdg(self, rhs: BiVec2dp<T>) -> Self::Output {
        BiVec2dp::new(self.value * rhs.x, self.value * rhs.y, self.value * rhs.z)
    }
}

impl<T: Float> RegressiveWedge<PScalar2dp<T>> for PScalar2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn rwdg(self, rhs: PScalar2dp<T>) -> Self::Output {
        PScalar2dp::new(self.value * rhs.value)
    }
}

impl<T: Float> RegressiveWedge<MVec2dp<T>> for MVec2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn rwdg(self, rhs: MVec2dp<T>) -> Self::Output {
        MVec2dp::new(
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
