//! Bulk, weight and geometric norms, unitization and inverses.

use super::{
    BiVec3dp, DualNum3dp, MVec3dp, MVec3dpE, MVec3dpU, PScalar3dp, Scalar3dp, TriVec3dp, Vec3dp,
};
use crate::error::{checked, guarded, DivisionError};
use crate::traits::{Geometric, Inverse, Reverse, Unitize};
use num_traits::Float;

impl_projective_norm! {
    Scalar3dp, PScalar3dp, DualNum3dp;
    bulk: Scalar3dp, Vec3dp, BiVec3dp, TriVec3dp, MVec3dpE, MVec3dpU, MVec3dp;
    weight: Vec3dp, BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp;
    geometric: Vec3dp, BiVec3dp, TriVec3dp, MVec3dpE, MVec3dpU, MVec3dp;
}

impl_weight_unitize!(BiVec3dp, TriVec3dp, PScalar3dp, MVec3dpE, MVec3dpU, MVec3dp);

impl_dual_num!(DualNum3dp, Scalar3dp, PScalar3dp);

/// Divides by the homogeneous coordinate `w` directly, keeping its sign.
impl<T: Float> Unitize for Vec3dp<T> {
    #[inline]
    fn unitize(self) -> Self {
        self * guarded("unitize", self.w).recip()
    }

    fn try_unitize(self) -> Result<Self, DivisionError> {
        Ok(self * checked("unitize", self.w)?.recip())
    }
}

impl_bulk_inverse!(Scalar3dp, Vec3dp, TriVec3dp);

/// `a * rev(a)` as a dual number. For bivectors and even or odd multivectors the
/// product keeps an `e1234` part next to the scalar.
fn rev_square<T, A>(a: A) -> DualNum3dp<T>
where
    T: Float,
    A: Copy + Reverse + Geometric<A, Output = MVec3dpE<T>>,
{
    let n = a.gpr(a.rev());
    DualNum3dp::new(n.c0, n.c7)
}

/// `inv(a) = rev(a) * inv(a * rev(a))`, inverting the dual number `s + p e1234` with
/// `e1234² = 0`.
macro_rules! impl_dual_inverse {
    ($($ty:ident),+) => {
        $(
            impl<T: Float> Inverse for $ty<T> {
                #[inline]
                fn inv(self) -> Self {
                    let d = rev_square(self).inv();
                    let r = self.rev();
                    r * d.c0 + r.gpr(PScalar3dp::new(d.c1))
                }

                fn try_inv(self) -> Result<Self, DivisionError> {
                    let d = rev_square(self).try_inv()?;
                    let r = self.rev();
                    Ok(r * d.c0 + r.gpr(PScalar3dp::new(d.c1)))
                }
            }
        )+
    };
}

impl_dual_inverse!(BiVec3dp, MVec3dpE, MVec3dpU);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pga3dp::{direction, line, plane, point, translator};
    use crate::traits::{BulkNorm, GeometricNorm, WeightNorm};
    use approx::assert_abs_diff_eq;

    #[test]
    fn unitize_point() {
        assert_eq!(Vec3dp::new(1., 2., 3., 1.), Vec3dp::new(2., 4., 6., 2.).unitize());
        assert!(Vec3dp::<f64>::new(1., 2., 3., 0.).try_unitize().is_err());
    }

    #[test]
    fn unitized_plane_and_line_have_unit_weight() {
        let pl = plane(point(1., 0., 0.), point(0., 2., 0.), point(0., 0., 3.)).unitize();
        assert_abs_diff_eq!(1., pl.weight_nrm().value, epsilon = 1e-12);

        let l = line(point(1., 2., 3.), point(-2., 0., 5.)).unitize();
        assert_abs_diff_eq!(1., l.weight_nrm().value, epsilon = 1e-12);
    }

    #[test]
    fn geometric_norm_is_distance_to_origin() {
        let p = Vec3dp::new(4., 0., 3., 0.5);
        assert_abs_diff_eq!(10., p.geom_nrm().unitize().c0, epsilon = 1e-12);

        let pl = plane(point(0., 0., 2.), point(1., 0., 2.), point(0., 1., 2.));
        assert_eq!(DualNum3dp::new(2., 1.), pl.geom_nrm());

        let l = line(point(0., 1., 0.), point(1., 1., 0.));
        assert_eq!(DualNum3dp::new(1., 1.), l.geom_nrm());
    }

    #[test]
    fn weight_of_plane_is_normal_length() {
        let pl = TriVec3dp::new(3., 0., 4., -7.);
        assert_eq!(PScalar3dp::new(5.), pl.weight_nrm());
        assert_eq!(Scalar3dp::new(7.), pl.bulk_nrm());
    }

    #[test]
    fn vector_inverse() {
        let v = Vec3dp::new(1., 2., 2., 5.);
        assert_abs_diff_eq!(Vec3dp::new(1., 2., 2., 5.) / 9., v.inv(), epsilon = 1e-15);
    }

    #[test]
    fn blade_inverses() {
        let one = MVec3dpE::new(1., 0., 0., 0., 0., 0., 0., 0.);
        let l = line(point(1., 2., 3.), point(-2., 0., 5.));
        assert_abs_diff_eq!(one, l * l.inv(), epsilon = 1e-12);

        let pl = plane(point(1., 0., 0.), point(0., 2., 0.), point(0., 0., 3.));
        assert_abs_diff_eq!(one, pl * pl.inv(), epsilon = 1e-12);
        // planes through the origin have no bulk
        assert!(plane(point(0., 0., 0.), point(1., 0., 0.), point(0., 1., 0.)).try_inv().is_err());
    }

    #[test]
    fn non_simple_bivector_inverse() {
        let b = BiVec3dp::new(1., 2., 3., 4., 5., 6.);
        let one = MVec3dpE::new(1., 0., 0., 0., 0., 0., 0., 0.);
        assert!(b.gpr(b.rev()).c7 != 0.);
        assert_abs_diff_eq!(one, b * b.inv(), epsilon = 1e-12);
        assert_abs_diff_eq!(one, b.inv() * b, epsilon = 1e-12);
    }

    #[test]
    fn even_and_odd_inverses() {
        let one = MVec3dpE::new(1., 0., 0., 0., 0., 0., 0., 0.);
        let t = translator(direction(1., -2., 0.5));
        let e = MVec3dpE::new(0.5, -1., 2., 1.5, 0.25, -0.75, 1., 2.);
        let u = MVec3dpU::new(1., -2., 0.5, 3., -1., 0.5, 2., 1.5);

        assert_abs_diff_eq!(one, t * t.inv(), epsilon = 1e-12);
        assert_abs_diff_eq!(one, e * e.inv(), epsilon = 1e-12);
        assert_abs_diff_eq!(one, u * u.inv(), epsilon = 1e-12);
        assert!(MVec3dpE::from(PScalar3dp::new(2.)).try_inv().is_err());
    }

    #[test]
    fn dual_number_inverse() {
        let a = DualNum3dp::new(4., -2.);
        assert_eq!(DualNum3dp::new(1., 0.), a * a.inv());
        assert_eq!(Scalar3dp::new(4.), a.real());
        assert_eq!(PScalar3dp::new(-2.), a.dual_part());
    }
}
