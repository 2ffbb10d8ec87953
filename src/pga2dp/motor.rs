//! Motors: rotations about a point and translations, applied with the regressive
//! sandwich product.

use super::{BiVec2dp, MVec2dpU, PScalar2dp, Vec2dp};
use crate::traits::{Move, RegressiveGeometric, Unitize};
use num_traits::Float;

/// Rotation by `theta` (counter-clockwise) about the point `center`:
/// `-c sin(θ/2) + e123 cos(θ/2)` with `c` unitized.
pub fn motor<T: Float>(center: Vec2dp<T>, theta: T) -> MVec2dpU<T> {
    let half = theta / (T::one() + T::one());
    let (s, c) = half.sin_cos();
    MVec2dpU::from_parts(center.unitize() * -s, PScalar2dp::new(c))
}

/// Translation by the direction `(x, y)`. The `z` component of `t` is ignored.
pub fn translator<T: Float>(t: Vec2dp<T>) -> MVec2dpU<T> {
    let half = (T::one() + T::one()).recip();
    MVec2dpU::new(t.y * half, -t.x * half, T::zero(), T::one())
}

/// Composition of the reflections in `l1` and then `l2`. Rotates by twice the angle
/// from `l1` to `l2` about their intersection, or translates by twice their distance
/// when they are parallel. Both lines must be unitized.
#[inline]
pub fn motor_from_lines<T: Float>(l1: BiVec2dp<T>, l2: BiVec2dp<T>) -> MVec2dpU<T> {
    l2.rgpr(l1)
}

/// Applies the motor `m` to a point or a line.
#[inline]
pub fn move2dp<T: Float, X: Move<MVec2dpU<T>>>(x: X, m: MVec2dpU<T>) -> X {
    x.move_by(m)
}

impl<T: Float> MVec2dpU<T> {
    /// The motor applying `self` first and `next` second.
    #[inline]
    pub fn then(self, next: Self) -> Self {
        next.rgpr(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pga2dp::{direction, line, origin, point};
    use crate::traits::RegressiveReverse;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn rotation_about_origin() {
        let m = motor(origin(), FRAC_PI_2);
        assert_eq!(point(0., 1.), move2dp(point(1., 0.), m));
        assert_eq!(point(-2., 0.), move2dp(point(0., 2.), m));
    }

    #[test]
    fn rotation_about_point() {
        let m = motor(point(1., 1.), PI);
        assert_eq!(point(2., 2.), move2dp(point(0., 0.), m));
        assert_eq!(point(1., 1.), move2dp(point(1., 1.), m));
    }

    #[test]
    fn translation() {
        let m = translator(direction(3., -2.));
        assert_eq!(point(4., -1.), move2dp(point(1., 1.), m));
        assert_eq!(direction(1., 0.), move2dp(direction(1., 0.), m));
    }

    #[test]
    fn translated_line_stays_parallel() {
        let l = line(point(0., 0.), point(1., 0.));
        let moved = move2dp(l, translator(direction(0., 2.)));
        assert_eq!(line(point(0., 2.), point(1., 2.)), moved);
    }

    #[test]
    fn optimized_sandwich_matches_product() {
        let m = motor(point(0.5_f64, -1.5), 0.7);
        let p = Vec2dp::new(2_f64, 3., 1.);
        let expected = m.rgpr(p).rgpr(m.rrev()).gr1();
        assert_abs_diff_eq!(expected, move2dp(p, m), epsilon = 1e-12);
    }

    #[test]
    fn two_reflections_make_a_rotation() {
        let l1 = line(point(0., 0.), point(1., 0.)).unitize();
        let l2 = line(point(0., 0.), point(1., 1.)).unitize();
        let m = motor_from_lines(l1, l2);
        assert_eq!(point(0., 1.), move2dp(point(1., 0.), m));

        let r = motor(origin(), 2. * FRAC_PI_4);
        assert_abs_diff_eq!(move2dp(point(3., 4.), r), move2dp(point(3., 4.), m), epsilon = 1e-12);
    }

    #[test]
    fn parallel_lines_make_a_translation() {
        let l1 = line(point(0., 0.), point(0., 1.)).unitize();
        let l2 = line(point(1., 0.), point(1., 1.)).unitize();
        let m = motor_from_lines(l1, l2);
        assert_eq!(point(2., 5.), move2dp(point(0., 5.), m));
    }

    #[test]
    fn composition() {
        let m = translator(direction(1., 0.)).then(motor(origin(), FRAC_PI_2));
        assert_eq!(point(0., 2.), move2dp(point(1., 0.), m));
    }
}
