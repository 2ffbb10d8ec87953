//! Projection, rejection and reflection of vectors on vectors and planes.

use super::{BiVec3d, Vec3d};
use crate::traits::{Dot, Inverse, LeftContraction, ProjectOnto, ReflectOn, RejectFrom, Wedge};
use num_traits::Float;

/// `(v · u) u⁻¹`
impl<T: Float> ProjectOnto<Vec3d<T>> for Vec3d<T> {
    #[inline]
    fn project_onto(self, u: Vec3d<T>) -> Self {
        self.dot(u) * u.inv()
    }
}

/// `(v ⌋ B) B⁻¹`
impl<T: Float> ProjectOnto<BiVec3d<T>> for Vec3d<T> {
    #[inline]
    fn project_onto(self, b: BiVec3d<T>) -> Self {
        (self.lcontr(b) * b.inv()).gr1()
    }
}

/// `(v ∧ u) u⁻¹`
impl<T: Float> RejectFrom<Vec3d<T>> for Vec3d<T> {
    #[inline]
    fn reject_from(self, u: Vec3d<T>) -> Self {
        (self.wdg(u) * u.inv()).gr1()
    }
}

/// `(v ∧ B) B⁻¹`
impl<T: Float> RejectFrom<BiVec3d<T>> for Vec3d<T> {
    #[inline]
    fn reject_from(self, b: BiVec3d<T>) -> Self {
        self.wdg(b) * b.inv()
    }
}

/// Mirror image in the line spanned by `u`: `u v u⁻¹`.
impl<T: Float> ReflectOn<Vec3d<T>> for Vec3d<T> {
    #[inline]
    fn reflect_on(self, u: Vec3d<T>) -> Self {
        (u * self * u.inv()).gr1()
    }
}

/// Mirror image in the plane of `B`: `-B v B⁻¹`.
impl<T: Float> ReflectOn<BiVec3d<T>> for Vec3d<T> {
    #[inline]
    fn reflect_on(self, b: BiVec3d<T>) -> Self {
        -(b * self * b.inv()).gr1()
    }
}

/// Projection onto a unit vector.
#[inline]
pub fn project_onto_unitized<T: Float>(v: Vec3d<T>, u: Vec3d<T>) -> Vec3d<T> {
    v.dot(u) * u
}

/// Rejection from a unit vector.
#[inline]
pub fn reject_from_unitized<T: Float>(v: Vec3d<T>, u: Vec3d<T>) -> Vec3d<T> {
    (v.wdg(u) * u).gr1()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Norm;
    use approx::assert_abs_diff_eq;

    #[test]
    fn vector_onto_vector() {
        let v = Vec3d::new(1., 2., 3.);
        let u = Vec3d::new(0., 0., 2.);
        assert_eq!(Vec3d::new(0., 0., 3.), v.project_onto(u));
        assert_eq!(Vec3d::new(1., 2., 0.), v.reject_from(u));
    }

    #[test]
    fn vector_onto_plane() {
        let v = Vec3d::new(1., 2., 3.);
        let b = BiVec3d::new(0., 0., 4.);
        assert_eq!(Vec3d::new(1., 2., 0.), v.project_onto(b));
        assert_eq!(Vec3d::new(0., 0., 3.), v.reject_from(b));
    }

    #[test]
    fn oblique_plane_decomposition() {
        let v = Vec3d::new(-1_f64, 0.5, 2.);
        let b = Vec3d::new(1_f64, 1., 0.).wdg(Vec3d::new(0_f64, 1., 1.));
        let p = v.project_onto(b);
        let r = v.reject_from(b);
        assert_abs_diff_eq!(v, p + r, epsilon = 1e-12);
        assert_abs_diff_eq!(0., p.dot(r).value, epsilon = 1e-12);
        assert_abs_diff_eq!(0., r.wdg(Vec3d::new(1_f64, -1., 1.)).nrm_sq(), epsilon = 1e-12);
    }

    #[test]
    fn reflections() {
        let v = Vec3d::new(1., 2., 3.);
        assert_eq!(Vec3d::new(1., -2., -3.), v.reflect_on(Vec3d::new(2., 0., 0.)));
        assert_eq!(Vec3d::new(1., 2., -3.), v.reflect_on(BiVec3d::new(0., 0., 1.)));
    }

    #[test]
    fn unitized_shortcuts_agree() {
        let v = Vec3d::new(1., 2., 3.);
        let u = Vec3d::new(0., 0.6, 0.8);
        assert_abs_diff_eq!(v.project_onto(u), project_onto_unitized(v, u), epsilon = 1e-12);
        assert_abs_diff_eq!(v.reject_from(u), reject_from_unitized(v, u), epsilon = 1e-12);
    }
}
