//! Rotors of 3D space.

use super::{BiVec3d, MVec3dE, Vec3d};
use crate::traits::{Complement, Dot, Norm, Normalize, Wedge};
use num_traits::{Float, Zero};

/// `exp(B θ) = cos θ + B sin θ` for the unit bivector `B` in the direction of `b`.
pub fn exp<T: Float>(b: BiVec3d<T>, theta: T) -> MVec3dE<T> {
    let (sin, cos) = theta.sin_cos();
    let b = b.normalize() * sin;
    MVec3dE::new(cos, b.x, b.y, b.z)
}

/// Rotor for a rotation by `theta` in the plane of `b`, to be applied with
/// [`Rotate`](crate::traits::Rotate).
///
/// Uses the half angle: `rotor(B, θ) = exp(-B θ / 2)`. The rotation turns `e1` towards
/// `e2` for `b = e12`.
pub fn rotor<T: Float>(b: BiVec3d<T>, theta: T) -> MVec3dE<T> {
    let half = theta / (T::one() + T::one());
    exp(-b, half)
}

/// Unsigned angle between two vectors in `[0, π]`.
pub fn angle<T: Float>(a: Vec3d<T>, b: Vec3d<T>) -> T {
    a.wdg(b).nrm().atan2(a.dot(b).value)
}

impl<T: Float> MVec3dE<T> {
    /// Rotor turning counter-clockwise by `angle` around `axis`.
    pub fn from_axis_angle(axis: Vec3d<T>, angle: T) -> Self {
        rotor(axis.cmpl(), angle)
    }

    /// Inverse of [`from_axis_angle`](Self::from_axis_angle) for unit rotors. The axis is
    /// zero for the identity rotor.
    pub fn angle_axis(self) -> (T, Vec3d<T>) {
        let two = T::one() + T::one();
        let c0 = self.c0.max(-T::one()).min(T::one());
        let bivector = -self.gr2();
        let axis = bivector.try_normalize().unwrap_or_else(|_| BiVec3d::zero());
        (two * c0.acos(), axis.cmpl())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Rotate;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    #[test]
    fn quarter_turn_about_z() {
        let r = rotor(BiVec3d::new(0., 0., 1.), FRAC_PI_2);
        let v = Vec3d::new(1., 0., 0.).rotate(r);
        assert_abs_diff_eq!(Vec3d::new(0., 1., 0.), v, epsilon = 1e-12);
    }

    #[test]
    fn rotor_is_unit() {
        let r = rotor(BiVec3d::new(1., -2., 0.5), 1.2);
        assert_abs_diff_eq!(1., r.nrm(), epsilon = 1e-12);
    }

    #[test]
    fn rotation_preserves_length() {
        let r = rotor(BiVec3d::new(3., 1., -2.), 0.7);
        let v = Vec3d::new(1., 2., 3.);
        assert_abs_diff_eq!(v.nrm(), v.rotate(r).nrm(), epsilon = 1e-12);
    }

    #[test]
    fn bivector_rotates_with_its_normal() {
        let r = rotor(BiVec3d::new(1., 1., 0.), 2.1);
        let v = Vec3d::new(0.3, -1., 2.);
        assert_abs_diff_eq!(v.rotate(r).cmpl(), v.cmpl().rotate(r), epsilon = 1e-12);
    }

    #[test]
    fn composition() {
        let b = BiVec3d::new(0., 1., 0.);
        let r = rotor(b, FRAC_PI_3) * rotor(b, FRAC_PI_3) * rotor(b, FRAC_PI_3);
        assert_abs_diff_eq!(rotor(b, PI), r, epsilon = 1e-12);
    }

    #[test]
    fn axis_angle_round_trip() {
        let axis = Vec3d::new(1., 0., 0.);
        let (angle, ax) = MVec3dE::from_axis_angle(axis, 0.4).angle_axis();
        assert_abs_diff_eq!(0.4, angle, epsilon = 1e-12);
        assert_abs_diff_eq!(axis, ax, epsilon = 1e-12);
    }

    #[test]
    fn axis_angle_rotation_is_counter_clockwise() {
        let r = MVec3dE::from_axis_angle(Vec3d::new(0., 0., 1.), FRAC_PI_2);
        let v = Vec3d::new(1., 0., 0.).rotate(r);
        assert_abs_diff_eq!(Vec3d::new(0., 1., 0.), v, epsilon = 1e-12);
    }

    #[test]
    fn angle_between_vectors() {
        let a = Vec3d::new(1., 0., 0.);
        assert_abs_diff_eq!(FRAC_PI_2, angle(a, Vec3d::new(0., 0., 3.)), epsilon = 1e-12);
        assert_abs_diff_eq!(PI, angle(a, Vec3d::new(-2., 0., 0.)), epsilon = 1e-12);
    }
}
