//! Regressive sandwich products expanded into direct coefficients.

use super::{BiVec2dp, MVec2dpU, Vec2dp};
use crate::traits::Move;
use num_traits::Float;

impl<T: Float> Move<MVec2dpU<T>> for Vec2dp<T> {
    #[inline]
    fn move_by(self, m: MVec2dpU<T>) -> Self {
        let two = T::one() + T::one();
        Vec2dp::new(
            (m.c3 * m.c3 - m.c2 * m.c2) * self.x
                + two * m.c2 * m.c3 * self.y
                + two * (m.c0 * m.c2 - m.c1 * m.c3) * self.z,
            (m.c3 * m.c3 - m.c2 * m.c2) * self.y
                - two * m.c2 * m.c3 * self.x
                + two * (m.c0 * m.c3 + m.c1 * m.c2) * self.z,
            (m.c2 * m.c2 + m.c3 * m.c3) * self.z,
        )
    }
}

impl<T: Float> Move<MVec2dpU<T>> for BiVec2dp<T> {
    #[inline]
    fn move_by(self, m: MVec2dpU<T>) -> Self {
        let two = T::one() + T::one();
        BiVec2dp::new(
            (m.c3 * m.c3 - m.c2 * m.c2) * self.x + two * m.c2 * m.c3 * self.y,
            (m.c3 * m.c3 - m.c2 * m.c2) * self.y - two * m.c2 * m.c3 * self.x,
            two * (m.c0 * m.c2 + m.c1 * m.c3) * self.x
                + two * (m.c1 * m.c2 - m.c0 * m.c3) * self.y
                + (m.c2 * m.c2 + m.c3 * m.c3) * self.z,
        )
    }
}
