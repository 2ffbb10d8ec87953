//! Rotors of the plane.

use super::{MVec2dE, PScalar2d, Vec2d};
use crate::traits::{Dot, Norm, Wedge};
use num_traits::Float;

/// `exp(I θ) = cos θ + I sin θ` where `I` is the unit pseudoscalar in the orientation of
/// `i`.
pub fn exp<T: Float>(i: PScalar2d<T>, theta: T) -> MVec2dE<T> {
    let (sin, cos) = theta.sin_cos();
    MVec2dE::new(cos, i.value.signum() * sin)
}

/// Rotor for a rotation by `theta` in the orientation of `i`, to be applied with
/// [`Rotate`](crate::traits::Rotate).
///
/// Uses the half angle: `rotor(I, θ) = exp(-I θ / 2)`.
pub fn rotor<T: Float>(i: PScalar2d<T>, theta: T) -> MVec2dE<T> {
    let half = theta / (T::one() + T::one());
    exp(-i, half)
}

/// Signed angle from `a` to `b` in `(-π, π]`.
pub fn angle<T: Float>(a: Vec2d<T>, b: Vec2d<T>) -> T {
    a.wdg(b).value.atan2(a.dot(b).value)
}

impl<T: Float> MVec2dE<T> {
    /// Rotation angle encoded by a unit rotor.
    pub fn rotation_angle(self) -> T {
        let two = T::one() + T::one();
        -two * self.c1.atan2(self.c0)
    }

    /// `true` when the rotor has unit norm within `sqrt(eps)`.
    pub fn is_unit(self) -> bool {
        (self.nrm_sq() - T::one()).abs() < T::epsilon().sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ega2d::i2d;
    use crate::traits::Rotate;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn quarter_turn() {
        let r = rotor(i2d(), FRAC_PI_2);
        assert_eq!(Vec2d::new(0., 1.), Vec2d::new(1., 0.).rotate(r));
        assert_eq!(Vec2d::new(-1., 0.), Vec2d::new(0., 1.).rotate(r));
    }

    #[test]
    fn negative_orientation_turns_clockwise() {
        let r = rotor(-i2d(), FRAC_PI_2);
        assert_eq!(Vec2d::new(0., -1.), Vec2d::new(1., 0.).rotate(r));
    }

    #[test]
    fn rotor_composition_adds_angles() {
        let r = rotor(i2d(), FRAC_PI_4) * rotor(i2d(), FRAC_PI_2);
        assert!(r.is_unit());
        assert!((3. * FRAC_PI_4 - r.rotation_angle()).abs() < 1e-12);
    }

    #[test]
    fn exp_of_pi() {
        assert_eq!(MVec2dE::new(-1., 0.), exp(i2d(), PI));
    }

    #[test]
    fn signed_angle() {
        let a = Vec2d::new(1., 0.);
        assert!((FRAC_PI_2 - angle(a, Vec2d::new(0., 2.))).abs() < 1e-12);
        assert!((-FRAC_PI_2 - angle(a, Vec2d::new(0., -2.))).abs() < 1e-12);
    }
}
