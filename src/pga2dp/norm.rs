//! Bulk, weight and geometric norms, unitization and inverses.

use super::{BiVec2dp, DualNum2dp, MVec2dp, MVec2dpE, MVec2dpU, PScalar2dp, Scalar2dp, Vec2dp};
use crate::error::{checked, guarded, DivisionError};
use crate::traits::Unitize;
use num_traits::Float;

impl_projective_norm! {
    Scalar2dp, PScalar2dp, DualNum2dp;
    bulk: Scalar2dp, Vec2dp, BiVec2dp, MVec2dpE, MVec2dpU, MVec2dp;
    weight: Vec2dp, BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp;
    geometric: Vec2dp, BiVec2dp, MVec2dpE, MVec2dpU, MVec2dp;
}

impl_weight_unitize!(BiVec2dp, PScalar2dp, MVec2dpE, MVec2dpU, MVec2dp);

impl_dual_num!(DualNum2dp, Scalar2dp, PScalar2dp);

/// Divides by the homogeneous coordinate `z` directly, keeping its sign.
impl<T: Float> Unitize for Vec2dp<T> {
    #[inline]
    fn unitize(self) -> Self {
        self * guarded("unitize", self.z).recip()
    }

    fn try_unitize(self) -> Result<Self, DivisionError> {
        Ok(self * checked("unitize", self.z)?.recip())
    }
}

impl_bulk_inverse!(Scalar2dp, Vec2dp, BiVec2dp, MVec2dpE, MVec2dpU);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pga2dp::{line, point};
    use crate::traits::{BulkNorm, GeometricNorm, Inverse, WeightNorm};
    use approx::assert_abs_diff_eq;

    #[test]
    fn unitize_point() {
        assert_eq!(Vec2dp::new(2., 3., 1.), Vec2dp::new(4., 6., 2.).unitize());
        assert_eq!(Vec2dp::new(2., 3., 1.), Vec2dp::new(-4., -6., -2.).unitize());
    }

    #[test]
    fn direction_cannot_be_unitized() {
        let err = Vec2dp::<f64>::new(1., 0., 0.).try_unitize().unwrap_err();
        assert_eq!("unitize", err.operation);
        assert_eq!(0., err.magnitude);
    }

    #[test]
    fn unitized_line_has_unit_weight() {
        let l = line(point(1., 1.), point(4., 5.)).unitize();
        assert_abs_diff_eq!(1., l.weight_nrm().value, epsilon = 1e-12);
    }

    #[test]
    fn geometric_norm_of_point_is_distance_to_origin() {
        let n = Vec2dp::new(6., 8., 2.).geom_nrm();
        assert_eq!(DualNum2dp::new(10., 2.), n);
        assert_eq!(DualNum2dp::new(5., 1.), n.unitize());
    }

    #[test]
    fn geometric_norm_of_line_is_distance_to_origin() {
        // y = 2
        let l = line(point(0., 2.), point(3., 2.));
        assert_abs_diff_eq!(2., l.geom_nrm().unitize().c0, epsilon = 1e-12);
    }

    #[test]
    fn vector_inverse() {
        let v = Vec2dp::new(3., 4., 7.);
        assert_abs_diff_eq!(Scalar2dp::new(1.), v.inv().bulk_nrm_sq() * 25., epsilon = 1e-12);
    }

    #[test]
    fn line_inverse() {
        let l = line(point(1., 1.), point(4., 5.));
        assert_abs_diff_eq!(MVec2dpE::new(1., 0., 0., 0.), l * l.inv(), epsilon = 1e-12);
        assert_abs_diff_eq!(MVec2dpE::new(1., 0., 0., 0.), l.inv() * l, epsilon = 1e-12);

        // lines through the origin have no bulk
        let err = line(point(0., 0.), point(1., 1.)).try_inv().unwrap_err();
        assert_eq!("inv", err.operation);
    }

    #[test]
    fn even_and_odd_inverses() {
        let one = MVec2dpE::new(1., 0., 0., 0.);
        let e = MVec2dpE::new(0.5, -1., 2., 1.5);
        let u = MVec2dpU::new(1., -2., 0.5, 3.);
        assert_abs_diff_eq!(one, e * e.inv(), epsilon = 1e-12);
        assert_abs_diff_eq!(one, u * u.inv(), epsilon = 1e-12);
        assert_eq!(e.inv(), e.try_inv().unwrap());
    }

    #[test]
    fn dual_number_arithmetic() {
        let a = DualNum2dp::new(2., 3.);
        assert_eq!(DualNum2dp::new(4., 12.), a * a);
        assert_eq!(DualNum2dp::new(1., 0.), a * a.inv());
        assert_eq!(a, (a * a).sqrt());
    }
}
