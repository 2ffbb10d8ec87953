//! Projection, rejection and reflection of vectors.

use super::Vec2d;
use crate::traits::{Dot, Inverse, ProjectOnto, ReflectOn, RejectFrom, Wedge};
use num_traits::Float;

/// `(v · u) u⁻¹`
impl<T: Float> ProjectOnto<Vec2d<T>> for Vec2d<T> {
    #[inline]
    fn project_onto(self, u: Vec2d<T>) -> Self {
        self.dot(u) * u.inv()
    }
}

/// `(v ∧ u) u⁻¹`
impl<T: Float> RejectFrom<Vec2d<T>> for Vec2d<T> {
    #[inline]
    fn reject_from(self, u: Vec2d<T>) -> Self {
        self.wdg(u) * u.inv()
    }
}

/// Mirror image in the line spanned by `u`: `u v u⁻¹`.
impl<T: Float> ReflectOn<Vec2d<T>> for Vec2d<T> {
    #[inline]
    fn reflect_on(self, u: Vec2d<T>) -> Self {
        u * self * u.inv()
    }
}

/// Projection onto a unit vector.
#[inline]
pub fn project_onto_unitized<T: Float>(v: Vec2d<T>, u: Vec2d<T>) -> Vec2d<T> {
    v.dot(u) * u
}

/// Rejection from a unit vector.
#[inline]
pub fn reject_from_unitized<T: Float>(v: Vec2d<T>, u: Vec2d<T>) -> Vec2d<T> {
    v.wdg(u) * u
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_and_rejection_sum_to_vector() {
        let v = Vec2d::new(3., -2.);
        let u = Vec2d::new(1., 1.);
        let p = v.project_onto(u);
        let r = v.reject_from(u);

        assert_eq!(Vec2d::new(0.5, 0.5), p);
        assert_eq!(v, p + r);
        assert_eq!(0., p.dot(r).value);
    }

    #[test]
    fn unitized_shortcuts_agree() {
        let v = Vec2d::new(3., -2.);
        let u = Vec2d::new(0.6, 0.8);
        assert_eq!(v.project_onto(u), project_onto_unitized(v, u));
        assert_eq!(v.reject_from(u), reject_from_unitized(v, u));
    }

    #[test]
    fn reflection_keeps_parallel_part() {
        let v = Vec2d::new(2., 3.);
        assert_eq!(Vec2d::new(2., -3.), v.reflect_on(Vec2d::new(5., 0.)));
    }
}
