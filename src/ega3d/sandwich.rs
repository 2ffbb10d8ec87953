//! Sandwich products expanded into direct coefficients.

use super::{BiVec3d, MVec3dE, Vec3d};
use crate::traits::Rotate;
use num_traits::Float;

impl<T: Float> Rotate<MVec3dE<T>> for Vec3d<T> {
    #[inline]
    fn rotate(self, r: MVec3dE<T>) -> Self {
        let two = T::one() + T::one();
        Vec3d::new(
            (r.c0 * r.c0 + r.c1 * r.c1 - r.c2 * r.c2 - r.c3 * r.c3) * self.x
                + two * (r.c0 * r.c3 + r.c1 * r.c2) * self.y
                + two * (r.c1 * r.c3 - r.c0 * r.c2) * self.z,
            two * (r.c1 * r.c2 - r.c0 * r.c3) * self.x
                + (r.c0 * r.c0 - r.c1 * r.c1 + r.c2 * r.c2 - r.c3 * r.c3) * self.y
                + two * (r.c0 * r.c1 + r.c2 * r.c3) * self.z,
            two * (r.c0 * r.c2 + r.c1 * r.c3) * self.x
                + two * (r.c2 * r.c3 - r.c0 * r.c1) * self.y
                + (r.c0 * r.c0 - r.c1 * r.c1 - r.c2 * r.c2 + r.c3 * r.c3) * self.z,
        )
    }
}

impl<T: Float> Rotate<MVec3dE<T>> for BiVec3d<T> {
    #[inline]
    fn rotate(self, r: MVec3dE<T>) -> Self {
        let two = T::one() + T::one();
        BiVec3d::new(
            (r.c0 * r.c0 + r.c1 * r.c1 - r.c2 * r.c2 - r.c3 * r.c3) * self.x
                + two * (r.c0 * r.c3 + r.c1 * r.c2) * self.y
                + two * (r.c1 * r.c3 - r.c0 * r.c2) * self.z,
            two * (r.c1 * r.c2 - r.c0 * r.c3) * self.x
                + (r.c0 * r.c0 - r.c1 * r.c1 + r.c2 * r.c2 - r.c3 * r.c3) * self.y
                + two * (r.c0 * r.c1 + r.c2 * r.c3) * self.z,
            two * (r.c0 * r.c2 + r.c1 * r.c3) * self.x
                + two * (r.c2 * r.c3 - r.c0 * r.c1) * self.y
                + (r.c0 * r.c0 - r.c1 * r.c1 - r.c2 * r.c2 + r.c3 * r.c3) * self.z,
        )
    }
}
