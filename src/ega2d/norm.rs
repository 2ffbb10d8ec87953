//! Norms and inverses.

use super::{MVec2d, MVec2dE, PScalar2d, Scalar2d, Vec2d};
use crate::error::{checked, guarded, DivisionError};
use crate::traits::{Conjugate, Geometric, Inverse};
use num_traits::Float;

impl_euclidean_norm!(Scalar2d, Vec2d, PScalar2d, MVec2dE, MVec2d);

impl_reverse_inverse!(Scalar2d, Vec2d, PScalar2d, MVec2dE);

/// `A * conj(A)` is a scalar for every 2D multivector.
impl<T: Float> Inverse for MVec2d<T> {
    #[inline]
    fn inv(self) -> Self {
        let conj = self.conj();
        let d = guarded("inv", self.gpr(conj).c0);
        conj * d.recip()
    }

    fn try_inv(self) -> Result<Self, DivisionError> {
        let conj = self.conj();
        let d = checked("inv", self.gpr(conj).c0)?;
        Ok(conj * d.recip())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Norm, Normalize};
    use approx::assert_abs_diff_eq;

    #[test]
    fn vector_norm() {
        let v = Vec2d::new(3., 4.);
        assert_eq!(25., v.nrm_sq());
        assert_eq!(5., v.nrm());
        assert_eq!(Vec2d::new(0.6, 0.8), v.normalize());
    }

    #[test]
    fn multivector_inverse() {
        let a = MVec2d::new(1., 2., -3., 0.5);
        let one = MVec2d::new(1., 0., 0., 0.);
        assert_abs_diff_eq!(one, a * a.inv(), epsilon = 1e-12);
        assert_abs_diff_eq!(one, a.inv() * a, epsilon = 1e-12);
    }

    #[test]
    fn zero_vector_cannot_be_normalized() {
        let err = Vec2d::<f64>::new(0., 0.).try_normalize().unwrap_err();
        assert_eq!("normalize", err.operation);
    }

    #[test]
    fn null_multivector_has_no_inverse() {
        // (1 + e1) * conj(1 + e1) = 1 - e1 e1 = 0
        assert!(MVec2d::<f64>::new(1., 1., 0., 0.).try_inv().is_err());
    }
}
