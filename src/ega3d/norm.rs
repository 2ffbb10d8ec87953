//! Norms and inverses.

use super::{BiVec3d, MVec3d, MVec3dE, MVec3dU, PScalar3d, Scalar3d, Vec3d};
use crate::error::{checked, guarded, DivisionError};
use crate::traits::{Conjugate, Geometric, GradeInvolution, Inverse, Reverse};
use num_traits::Float;

impl_euclidean_norm!(Scalar3d, Vec3d, BiVec3d, PScalar3d, MVec3dE, MVec3dU, MVec3d);

impl_reverse_inverse!(Scalar3d, Vec3d, BiVec3d, PScalar3d, MVec3dE, MVec3dU);

impl<T: Float> MVec3d<T> {
    /// `conj(A) gr_inv(A) rev(A)`, whose product with `A` is a scalar.
    #[inline]
    fn adjugate(self) -> Self {
        self.conj().gpr(self.gr_inv()).gpr(self.rev())
    }
}

/// Hitzer and Sangwine's closed form for three dimensions.
impl<T: Float> Inverse for MVec3d<T> {
    #[inline]
    fn inv(self) -> Self {
        let adj = self.adjugate();
        let d = guarded("inv", self.gpr(adj).c0);
        adj * d.recip()
    }

    fn try_inv(self) -> Result<Self, DivisionError> {
        let adj = self.adjugate();
        let d = checked("inv", self.gpr(adj).c0)?;
        Ok(adj * d.recip())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Norm, Normalize};
    use approx::assert_abs_diff_eq;

    fn one() -> MVec3d<f64> {
        MVec3d::new(1., 0., 0., 0., 0., 0., 0., 0.)
    }

    #[test]
    fn bivector_norm_is_positive() {
        let b = BiVec3d::new(1., 2., 2.);
        assert_eq!(9., b.nrm_sq());
        assert_eq!(3., b.nrm());
    }

    #[test]
    fn blade_inverses() {
        let v = Vec3d::new(1., -2., 4.);
        assert_abs_diff_eq!(MVec3dE::new(1., 0., 0., 0.), v * v.inv(), epsilon = 1e-12);

        let b = BiVec3d::new(0.5, 3., -1.);
        assert_abs_diff_eq!(MVec3dE::new(1., 0., 0., 0.), b * b.inv(), epsilon = 1e-12);

        let i = PScalar3d::new(2.);
        assert_eq!(Scalar3d::new(1.), i * i.inv());
    }

    #[test]
    fn even_and_odd_inverses() {
        let e = MVec3dE::new(1., 2., 3., 4.);
        assert_abs_diff_eq!(MVec3dE::new(1., 0., 0., 0.), e * e.inv(), epsilon = 1e-12);

        let u = MVec3dU::new(1., -1., 2., 0.5);
        assert_abs_diff_eq!(MVec3dE::new(1., 0., 0., 0.), u * u.inv(), epsilon = 1e-12);
    }

    #[test]
    fn full_inverse() {
        let a = MVec3d::new(1., 2., -1., 0.5, 3., 0.25, -2., 1.5);
        assert_abs_diff_eq!(one(), a * a.inv(), epsilon = 1e-12);
        assert_abs_diff_eq!(one(), a.inv() * a, epsilon = 1e-12);
    }

    #[test]
    fn normalized_vector_has_unit_norm() {
        let v = Vec3d::new(2., -3., 6.).normalize();
        assert_abs_diff_eq!(1., v.nrm(), epsilon = 1e-15);
    }

    #[test]
    fn non_invertible_multivector() {
        // 1 + e1 is a null element: (1 + e1)(1 - e1) = 0
        let a = MVec3d::new(1., 1., 0., 0., 0., 0., 0., 0.);
        assert!(a.try_inv().is_err());
    }
}
