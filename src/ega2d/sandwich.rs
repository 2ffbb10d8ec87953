//! Sandwich products expanded into direct coefficients.

use super::{MVec2dE, Vec2d};
use crate::traits::Rotate;
use num_traits::Float;

impl<T: Float> Rotate<MVec2dE<T>> for Vec2d<T> {
    #[inline]
    fn rotate(self, r: MVec2dE<T>) -> Self {
        let two = T::one() + T::one();
        Vec2d::new(
            (r.c0 * r.c0 - r.c1 * r.c1) * self.x + two * r.c0 * r.c1 * self.y,
            (r.c0 * r.c0 - r.c1 * r.c1) * self.y - two * r.c0 * r.c1 * self.x,
        )
    }
}
