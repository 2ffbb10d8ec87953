//! Motors: screw motions about a line, translations, and their composition.

use super::{BiVec3dp, MVec3dpE, PScalar3dp, Scalar3dp, TriVec3dp, Vec3dp};
use crate::traits::{Move, RegressiveGeometric, Unitize};
use num_traits::Float;

/// Rotation by `theta` about the line `axis`, counter-clockwise when looking against
/// the line's direction: `â sin(θ/2) + e1234 cos(θ/2)`.
pub fn motor<T: Float>(axis: BiVec3dp<T>, theta: T) -> MVec3dpE<T> {
    let half = theta / (T::one() + T::one());
    let (s, c) = half.sin_cos();
    MVec3dpE::from_parts(Scalar3dp::new(T::zero()), axis.unitize() * s, PScalar3dp::new(c))
}

/// Translation by the direction `(x, y, z)`. The `w` component of `t` is ignored.
pub fn translator<T: Float>(t: Vec3dp<T>) -> MVec3dpE<T> {
    let half = (T::one() + T::one()).recip();
    let zero = T::zero();
    MVec3dpE::new(zero, zero, zero, zero, t.x * half, t.y * half, t.z * half, T::one())
}

/// Composition of the reflections in `p1` and then `p2`: a rotation by twice the
/// dihedral angle about their line of intersection, or a translation by twice their
/// distance when parallel. Both planes must be unitized.
#[inline]
pub fn motor_from_planes<T: Float>(p1: TriVec3dp<T>, p2: TriVec3dp<T>) -> MVec3dpE<T> {
    p2.rgpr(p1)
}

/// Applies the motor `m` to a point, line or plane.
#[inline]
pub fn move3dp<T: Float, X: Move<MVec3dpE<T>>>(x: X, m: MVec3dpE<T>) -> X {
    x.move_by(m)
}

impl<T: Float> MVec3dpE<T> {
    /// The motor applying `self` first and `next` second.
    #[inline]
    pub fn then(self, next: Self) -> Self {
        next.rgpr(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pga3dp::{direction, line, origin, plane, point};
    use crate::traits::RegressiveReverse;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn z_axis() -> BiVec3dp<f64> {
        line(origin(), point(0., 0., 1.))
    }

    #[test]
    fn rotation_about_axis() {
        let m = motor(z_axis(), FRAC_PI_2);
        assert_eq!(point(0., 1., 0.), move3dp(point(1., 0., 0.), m));
        assert_eq!(point(0., 0., 7.), move3dp(point(0., 0., 7.), m));
    }

    #[test]
    fn rotation_about_offset_axis() {
        let axis = line(point(1., 0., 0.), point(1., 0., 2.));
        assert_eq!(point(2., 0., 0.), move3dp(origin(), motor(axis, PI)));
    }

    #[test]
    fn translation_of_point_line_and_plane() {
        let m = translator(direction(0., 0., 3.));
        assert_eq!(point(1., 2., 6.), move3dp(point(1., 2., 3.), m));

        let l = line(origin(), point(1., 0., 0.));
        assert_eq!(line(point(0., 0., 3.), point(1., 0., 3.)), move3dp(l, m));

        let pl = plane(origin(), point(1., 0., 0.), point(0., 1., 0.));
        let expected = plane(point(0., 0., 3.), point(1., 0., 3.), point(0., 1., 3.));
        assert_eq!(expected, move3dp(pl, m));
    }

    #[test]
    fn optimized_sandwich_matches_product() {
        let axis = line(point(1_f64, -2., 0.5), point(0., 3., 2.));
        let m = translator(direction(0.25, 1., -2.)).then(motor(axis, 1.1));
        let mr = m.rrev();

        let p = Vec3dp::new(2_f64, -1., 3., 1.);
        assert_abs_diff_eq!(m.rgpr(p).rgpr(mr).gr1(), move3dp(p, m), epsilon = 1e-12);

        let l = line(point(0_f64, 1., 1.), point(3., -2., 4.));
        assert_abs_diff_eq!(m.rgpr(l).rgpr(mr).gr2(), move3dp(l, m), epsilon = 1e-12);

        let pl = plane(point(1_f64, 0., 0.), point(0., 2., 0.), point(0., 0., 3.));
        assert_abs_diff_eq!(m.rgpr(pl).rgpr(mr).gr3(), move3dp(pl, m), epsilon = 1e-12);
    }

    #[test]
    fn motor_keeps_incidence() {
        let m = motor(line(point(1., 1., 0.), point(2., 0., 1.)), 0.8);
        let p = point(1., 2., 3.);
        let q = point(-1., 0., 2.);
        let moved = move3dp(line(p, q), m);
        assert_abs_diff_eq!(line(move3dp(p, m), move3dp(q, m)), moved, epsilon = 1e-12);
    }

    #[test]
    fn two_reflections_make_a_rotation() {
        let p1 = plane(origin(), point(0., 0., 1.), point(0., 1., 0.)).unitize();
        let p2 = plane(origin(), point(0., 0., 1.), point(-1., 1., 0.)).unitize();
        let m = motor_from_planes(p1, p2);
        assert_abs_diff_eq!(point(0., 1., 0.), move3dp(point(1., 0., 0.), m), epsilon = 1e-12);
    }

    #[test]
    fn parallel_planes_make_a_translation() {
        let p1 = plane(origin(), point(0., 1., 0.), point(0., 0., 1.)).unitize();
        let p2 = plane(point(1., 0., 0.), point(1., 1., 0.), point(1., 0., 1.)).unitize();
        assert_eq!(point(2., 5., 0.), move3dp(point(0., 5., 0.), motor_from_planes(p1, p2)));
    }

    #[test]
    fn composition() {
        let m = translator(direction(1., 0., 0.)).then(motor(z_axis(), FRAC_PI_2));
        assert_abs_diff_eq!(point(0., 2., 0.), move3dp(point(1., 0., 0.), m), epsilon = 1e-12);
    }
}
