//! Exterior (wedge) and regressive wedge products.

use super::{MVec2d, PScalar2d, Scalar2d, Vec2d};
use crate::traits::{RegressiveWedge, Wedge};
use num_traits::Float;

impl<T: Float> Wedge<Scalar2d<T>> for Scalar2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn wdg(self, rhs: Scalar2d<T>) -> Self::Output {
        Scalar2d::new(self.value * rhs.value)
    }
}

impl<T: Float> Wedge<Vec2d<T>> for Scalar2d<T> {
    type Output = Vec2d<T>;

    #[inline]
    fn wdg(self, rhs: Vec2d<T>) -> Self::Output {
        Vec2d::new(self.value * rhs.x, self.value * rhs.y)
    }
}

impl<T: Float> Wedge<PScalar2d<T>> for Scalar2d<T> {
    type Output = PScalar2d<T>;

    #[inline]
    fn wdg(self, rhs: PScalar2d<T>) -> Self::Output {
        PScalar2d::new(self.value * rhs.value)
    }
}

impl<T: Float> Wedge<Scalar2d<T>> for Vec2d<T> {
    type Output = Vec2d<T>;

    #[inline]
    fn wdg(self, rhs: Scalar2d<T>) -> Self::Output {
        Vec2d::new(self.x * rhs.value, self.y * rhs.value)
    }
}

impl<T: Float> Wedge<Vec2d<T>> for Vec2d<T> {
    type Output = PScalar2d<T>;

    #[inline]
    fn wdg(self, rhs: Vec2d<T>) -> Self::Output {
        PScalar2d::new(self.x * rhs.y - self.y * rhs.x)
    }
}

impl<T: Float> Wedge<PScalar2d<T>> for Vec2d<T> {
    type Output = PScalar2d<T>;

    #[inline]
    fn wdg(self, _rhs: PScalar2d<T>) -> Self::Output {
        PScalar2d::new(T::zero())
    }
}

impl<T: Float> Wedge<Scalar2d<T>> for PScalar2d<T> {
    type Output = PScalar2d<T>;

    #[inline]
    fn wdg(self, rhs: Scalar2d<T>) -> Self::Output {
        PScalar2d::new(self.value * rhs.value)
    }
}

impl<T: Float> Wedge<Vec2d<T>> for PScalar2d<T> {
    type Output = PScalar2d<T>;

    #[inline]
    fn wdg(self, _rhs: Vec2d<T>) -> Self::Output {
        PScalar2d::new(T::zero())
    }
}

impl<T: Float> Wedge<PScalar2d<T>> for PScalar2d<T> {
    type Output = PScalar2d<T>;

    #[inline]
    fn wdg(self, _rhs: PScalar2d<T>) -> Self::Output {
        PScalar2d::new(T::zero())
    }
}

impl<T: Float> Wedge<MVec2d<T>> for MVec2d<T> {
    type Output = MVec2d<T>;

    #[inline]
    fn wdg(self, rhs: MVec2d<T>) -> Self::Output {
        MVec2d::new(
            self.c0 * rhs.c0,
            self.c0 * rhs.c1 + self.c1 * rhs.c0,
            self.c0 * rhs.c2 + self.c2 * rhs.c0,
            self.c0 * rhs.c3 + self.c1 * rhs.c2 - self.c2 * rhs.c1 + self.c3 * rhs.c0,
        )
    }
}

impl<T: Float> RegressiveWedge<Scalar2d<T>> for Scalar2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn rwdg(self, _rhs: Scalar2d<T>) -> Self::Output {
        Scalar2d::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<Vec2d<T>> for Scalar2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn rwdg(self, _rhs: Vec2d<T>) -> Self::Output {
        Scalar2d::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<PScalar2d<T>> for Scalar2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn rwdg(self, rhs: PScalar2d<T>) -> Self::Output {
        Scalar2d::new(self.value * rhs.value)
    }
}

impl<T: Float> RegressiveWedge<Scalar2d<T>> for Vec2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn rwdg(self, _rhs: Scalar2d<T>) -> Self::Output {
        Scalar2d::new(T::zero())
    }
}

impl<T: Float> RegressiveWedge<Vec2d<T>> for Vec2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn rwdg(self, rhs: Vec2d<T>) -> Self::Output {
        Scalar2d::new(self.x * rhs.y - self.y * rhs.x)
    }
}

impl<T: Float> RegressiveWedge<PScalar2d<T>> for Vec2d<T> {
    type Output = Vec2d<T>;

    #[inline]
    fn rwdg(self, rhs: PScalar2d<T>) -> Self::Output {
        Vec2d::new(self.x * rhs.value, self.y * rhs.value)
    }
}

impl<T: Float> RegressiveWedge<Scalar2d<T>> for PScalar2d<T> {
    type Output = Scalar2d<T>;

    #[inline]
    fn rwdg(self, rhs: Scalar2d<T>) -> Self::Output {
        Scalar2d::new(self.value * rhs.value)
    }
}

impl<T: Float> RegressiveWedge<Vec2d<T>> for PScalar2d<T> {
    type Output = Vec2d<T>;

    #[inline]
    fn rwdg(self, rhs: Vec2d<T>) -> Self::Output {
        Vec2d::new(self.value * rhs.x, self.value * rhs.y)
    }
}

impl<T: Float> RegressiveWedge<PScalar2d<T>> for PScalar2d<T> {
    type Output = PScalar2d<T>;

    #[inline]
    fn rwdg(self, rhs: PScalar2d<T>) -> Self::Output {
        PScalar2d::new(self.value * rhs.value)
    }
}

impl<T: Float> RegressiveWedge<MVec2d<T>> for MVec2d<T> {
    type Output = MVec2d<T>;

    #[inline]
    fn rwdg(self, rhs: MVec2d<T>) -> Self::Output {
        MVec2d::new(
            self.c0 * rhs.c3 + self.c1 * rhs.c2 - self.c2 * rhs.c1 + self.c3 * rhs.c0,
            self.c1 * rhs.c3 + self.c3 * rhs.c1,
            self.c2 * rhs.c3 + self.c3 * rhs.c2,
            self.c3 * rhs.c3,
        )
    }
}
