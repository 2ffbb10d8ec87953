//! Regressive sandwich products expanded into direct coefficients.

use super::{BiVec3dp, MVec3dpE, TriVec3dp, Vec3dp};
use crate::traits::Move;
use num_traits::Float;

impl<T: Float> Move<MVec3dpE<T>> for Vec3dp<T> {
    #[inline]
    fn move_by(self, m: MVec3dpE<T>) -> Self {
        let two = T::one() + T::one();
        Vec3dp::new(
            (m.c1 * m.c1 - m.c2 * m.c2 - m.c3 * m.c3 + m.c7 * m.c7) * self.x
                + two * (m.c1 * m.c2 - m.c3 * m.c7) * self.y
                + two * (m.c1 * m.c3 + m.c2 * m.c7) * self.z
                + two * (m.c2 * m.c6 - m.c0 * m.c1 - m.c3 * m.c5 + m.c4 * m.c7) * self.w,
            two * (m.c1 * m.c2 + m.c3 * m.c7) * self.x
                + (m.c2 * m.c2 - m.c1 * m.c1 - m.c3 * m.c3 + m.c7 * m.c7) * self.y
                + two * (m.c2 * m.c3 - m.c1 * m.c7) * self.z
                + two * (m.c3 * m.c4 - m.c0 * m.c2 - m.c1 * m.c6 + m.c5 * m.c7) * self.w,
            two * (m.c1 * m.c3 - m.c2 * m.c7) * self.x + two * (m.c1 * m.c7 + m.c2 * m.c3) * self.y
                + (m.c3 * m.c3 - m.c1 * m.c1 - m.c2 * m.c2 + m.c7 * m.c7) * self.z
                + two * (m.c1 * m.c5 - m.c0 * m.c3 - m.c2 * m.c4 + m.c6 * m.c7) * self.w,
            (m.c1 * m.c1 + m.c2 * m.c2 + m.c3 * m.c3 + m.c7 * m.c7) * self.w,
        )
    }
}

impl<T: Float> Move<MVec3dpE<T>> for BiVec3dp<T> {
    #[inline]
    fn move_by(self, m: MVec3dpE<T>) -> Self {
        let two = T::one() + T::one();
        BiVec3dp::new(
            (m.c1 * m.c1 - m.c2 * m.c2 - m.c3 * m.c3 + m.c7 * m.c7) * self.vx
                + two * (m.c1 * m.c2 - m.c3 * m.c7) * self.vy
                + two * (m.c1 * m.c3 + m.c2 * m.c7) * self.vz,
            two * (m.c1 * m.c2 + m.c3 * m.c7) * self.vx
                + (m.c2 * m.c2 - m.c1 * m.c1 - m.c3 * m.c3 + m.c7 * m.c7) * self.vy
                + two * (m.c2 * m.c3 - m.c1 * m.c7) * self.vz,
            two * (m.c1 * m.c3 - m.c2 * m.c7) * self.vx
                + two * (m.c1 * m.c7 + m.c2 * m.c3) * self.vy
                + (m.c3 * m.c3 - m.c1 * m.c1 - m.c2 * m.c2 + m.c7 * m.c7) * self.vz,
            two * (m.c0 * m.c7 + m.c1 * m.c4 - m.c2 * m.c5 - m.c3 * m.c6) * self.vx
                + two * (m.c1 * m.c5 - m.c0 * m.c3 + m.c2 * m.c4 - m.c6 * m.c7) * self.vy
                + two * (m.c0 * m.c2 + m.c1 * m.c6 + m.c3 * m.c4 + m.c5 * m.c7) * self.vz
                + (m.c1 * m.c1 - m.c2 * m.c2 - m.c3 * m.c3 + m.c7 * m.c7) * self.mx
                + two * (m.c1 * m.c2 - m.c3 * m.c7) * self.my
                + two * (m.c1 * m.c3 + m.c2 * m.c7) * self.mz,
            two * (m.c0 * m.c3 + m.c1 * m.c5 + m.c2 * m.c4 + m.c6 * m.c7) * self.vx
                + two * (m.c0 * m.c7 - m.c1 * m.c4 + m.c2 * m.c5 - m.c3 * m.c6) * self.vy
                + two * (m.c2 * m.c6 - m.c0 * m.c1 + m.c3 * m.c5 - m.c4 * m.c7) * self.vz
                + two * (m.c1 * m.c2 + m.c3 * m.c7) * self.mx
                + (m.c2 * m.c2 - m.c1 * m.c1 - m.c3 * m.c3 + m.c7 * m.c7) * self.my
                + two * (m.c2 * m.c3 - m.c1 * m.c7) * self.mz,
            two * (m.c1 * m.c6 - m.c0 * m.c2 + m.c3 * m.c4 - m.c5 * m.c7) * self.vx
                + two * (m.c0 * m.c1 + m.c2 * m.c6 + m.c3 * m.c5 + m.c4 * m.c7) * self.vy
                + two * (m.c0 * m.c7 - m.c1 * m.c4 - m.c2 * m.c5 + m.c3 * m.c6) * self.vz
                + two * (m.c1 * m.c3 - m.c2 * m.c7) * self.mx
                + two * (m.c1 * m.c7 + m.c2 * m.c3) * self.my
                + (m.c3 * m.c3 - m.c1 * m.c1 - m.c2 * m.c2 + m.c7 * m.c7) * self.mz,
        )
    }
}

impl<T: Float> Move<MVec3dpE<T>> for TriVec3dp<T> {
    #[inline]
    fn move_by(self, m: MVec3dpE<T>) -> Self {
        let two = T::one() + T::one();
        TriVec3dp::new(
            (m.c1 * m.c1 - m.c2 * m.c2 - m.c3 * m.c3 + m.c7 * m.c7) * self.x
                + two * (m.c1 * m.c2 - m.c3 * m.c7) * self.y
                + two * (m.c1 * m.c3 + m.c2 * m.c7) * self.z,
            two * (m.c1 * m.c2 + m.c3 * m.c7) * self.x
                + (m.c2 * m.c2 - m.c1 * m.c1 - m.c3 * m.c3 + m.c7 * m.c7) * self.y
                + two * (m.c2 * m.c3 - m.c1 * m.c7) * self.z,
            two * (m.c1 * m.c3 - m.c2 * m.c7) * self.x + two * (m.c1 * m.c7 + m.c2 * m.c3) * self.y
                + (m.c3 * m.c3 - m.c1 * m.c1 - m.c2 * m.c2 + m.c7 * m.c7) * self.z,
            two * (m.c0 * m.c1 + m.c2 * m.c6 - m.c3 * m.c5 - m.c4 * m.c7) * self.x
                + two * (m.c0 * m.c2 - m.c1 * m.c6 + m.c3 * m.c4 - m.c5 * m.c7) * self.y
                + two * (m.c0 * m.c3 + m.c1 * m.c5 - m.c2 * m.c4 - m.c6 * m.c7) * self.z
                + (m.c1 * m.c1 + m.c2 * m.c2 + m.c3 * m.c3 + m.c7 * m.c7) * self.w,
        )
    }
}
