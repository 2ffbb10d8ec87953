//! Sign flips, complements, duals, and the bulk/weight split.

use super::{BiVec2dp, MVec2dp, MVec2dpE, MVec2dpU, PScalar2dp, Scalar2dp, Vec2dp};
use crate::traits::{
    Attitude, Bulk, BulkDual, Complement, Conjugate, Dual, GradeInvolution, RegressiveReverse,
    Reverse, Weight, WeightDual,
};
use num_traits::Float;

impl<T: Float> Reverse for Scalar2dp<T> {
    #[inline]
    fn rev(self) -> Self {
        self
    }
}

impl<T: Float> Reverse for Vec2dp<T> {
    #[inline]
    fn rev(self) -> Self {
        self
    }
}

impl<T: Float> Reverse for BiVec2dp<T> {
    #[inline]
    fn rev(self) -> Self {
        BiVec2dp::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Float> Reverse for PScalar2dp<T> {
    #[inline]
    fn rev(self) -> Self {
        PScalar2dp::new(-self.value)
    }
}

impl<T: Float> Reverse for MVec2dpE<T> {
    #[inline]
    fn rev(self) -> Self {
        MVec2dpE::new(self.c0, -self.c1, -self.c2, -self.c3)
    }
}

impl<T: Float> Reverse for MVec2dpU<T> {
    #[inline]
    fn rev(self) -> Self {
        MVec2dpU::new(self.c0, self.c1, self.c2, -self.c3)
    }
}

impl<T: Float> Reverse for MVec2dp<T> {
    #[inline]
    fn rev(self) -> Self {
        MVec2dp::new(self.c0, self.c1, self.c2, self.c3, -self.c4, -self.c5, -self.c6, -self.c7)
    }
}

impl<T: Float> GradeInvolution for Scalar2dp<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        self
    }
}

impl<T: Float> GradeInvolution for Vec2dp<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        Vec2dp::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Float> GradeInvolution for BiVec2dp<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        BiVec2dp::new(self.x, self.y, self.z)
    }
}

impl<T: Float> GradeInvolution for PScalar2dp<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        PScalar2dp::new(-self.value)
    }
}

impl<T: Float> GradeInvolution for MVec2dpE<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        MVec2dpE::new(self.c0, self.c1, self.c2, self.c3)
    }
}

impl<T: Float> GradeInvolution for MVec2dpU<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        MVec2dpU::new(-self.c0, -self.c1, -self.c2, -self.c3)
    }
}

impl<T: Float> GradeInvolution for MVec2dp<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        MVec2dp::new(self.c0, -self.c1, -self.c2, -self.c3, self.c4, self.c5, self.c6, -self.c7)
    }
}

impl<T: Float> Conjugate for Scalar2dp<T> {
    #[inline]
    fn conj(self) -> Self {
        self
    }
}

impl<T: Float> Conjugate for Vec2dp<T> {
    #[inline]
    fn conj(self) -> Self {
        Vec2dp::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Float> Conjugate for BiVec2dp<T> {
    #[inline]
    fn conj(self) -> Self {
        BiVec2dp::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Float> Conjugate for PScalar2dp<T> {
    #[inline]
    fn conj(self) -> Self {
        self
    }
}

impl<T: Float> Conjugate for MVec2dpE<T> {
    #[inline]
    fn conj(self) -> Self {
        MVec2dpE::new(self.c0, -self.c1, -self.c2, -self.c3)
    }
}

impl<T: Float> Conjugate for MVec2dpU<T> {
    #[inline]
    fn conj(self) -> Self {
        MVec2dpU::new(-self.c0, -self.c1, -self.c2, self.c3)
    }
}

impl<T: Float> Conjugate for MVec2dp<T> {
    #[inline]
    fn conj(self) -> Self {
        MVec2dp::new(self.c0, -self.c1, -self.c2, -self.c3, -self.c4, -self.c5, -self.c6, self.c7)
    }
}

impl<T: Float> RegressiveReverse for Scalar2dp<T> {
    #[inline]
    fn rrev(self) -> Self {
        Scalar2dp::new(-self.value)
    }
}

impl<T: Float> RegressiveReverse for Vec2dp<T> {
    #[inline]
    fn rrev(self) -> Self {
        Vec2dp::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Float> RegressiveReverse for BiVec2dp<T> {
    #[inline]
    fn rrev(self) -> Self {
        BiVec2dp::new(self.x, self.y, self.z)
    }
}

impl<T: Float> RegressiveReverse for PScalar2dp<T> {
    #[inline]
    fn rrev(self) -> Self {
        self
    }
}

impl<T: Float> RegressiveReverse for MVec2dpE<T> {
    #[inline]
    fn rrev(self) -> Self {
        MVec2dpE::new(-self.c0, self.c1, self.c2, self.c3)
    }
}

impl<T: Float> RegressiveReverse for MVec2dpU<T> {
    #[inline]
    fn rrev(self) -> Self {
        MVec2dpU::new(-self.c0, -self.c1, -self.c2, self.c3)
    }
}

impl<T: Float> RegressiveReverse for MVec2dp<T> {
    #[inline]
    fn rrev(self) -> Self {
        MVec2dp::new(-self.c0, -self.c1, -self.c2, -self.c3, self.c4, self.c5, self.c6, self.c7)
    }
}

impl<T: Float> Complement for Scalar2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn cmpl(self) -> Self::Output {
        PScalar2dp::new(self.value)
    }
}

impl<T: Float> Complement for Vec2dp<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn cmpl(self) -> Self::Output {
        BiVec2dp::new(self.x, self.y, self.z)
    }
}

impl<T: Float> Complement for BiVec2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn cmpl(self) -> Self::Output {
        Vec2dp::new(self.x, self.y, self.z)
    }
}

impl<T: Float> Complement for PScalar2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn cmpl(self) -> Self::Output {
        Scalar2dp::new(self.value)
    }
}

impl<T: Float> Complement for MVec2dpE<T> {
    type Output = MVec2dpU<T>;

    #[inline]
    fn cmpl(self) -> Self::Output {
        MVec2dpU::new(self.c1, self.c2, self.c3, self.c0)
    }
}

impl<T: Float> Complement for MVec2dpU<T> {
    type Output = MVec2dpE<T>;

    #[inline]
    fn cmpl(self) -> Self::Output {
        MVec2dpE::new(self.c3, self.c0, self.c1, self.c2)
    }
}

impl<T: Float> Complement for MVec2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn cmpl(self) -> Self::Output {
        MVec2dp::new(self.c7, self.c4, self.c5, self.c6, self.c1, self.c2, self.c3, self.c0)
    }
}

impl<T: Float> Dual for Scalar2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.bulk_dual()
    }
}

impl<T: Float> Dual for Vec2dp<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.bulk_dual()
    }
}

impl<T: Float> Dual for BiVec2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.bulk_dual()
    }
}

impl<T: Float> Dual for PScalar2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.bulk_dual()
    }
}

impl<T: Float> Dual for MVec2dpE<T> {
    type Output = MVec2dpU<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.bulk_dual()
    }
}

impl<T: Float> Dual for MVec2dpU<T> {
    type Output = MVec2dpE<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.bulk_dual()
    }
}

impl<T: Float> Dual for MVec2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.bulk_dual()
    }
}

impl<T: Float> Bulk for Scalar2dp<T> {
    #[inline]
    fn bulk(self) -> Self {
        Scalar2dp::new(self.value)
    }
}

impl<T: Float> Bulk for Vec2dp<T> {
    #[inline]
    fn bulk(self) -> Self {
        Vec2dp::new(self.x, self.y, T::zero())
    }
}

impl<T: Float> Bulk for BiVec2dp<T> {
    #[inline]
    fn bulk(self) -> Self {
        BiVec2dp::new(T::zero(), T::zero(), self.z)
    }
}

impl<T: Float> Bulk for PScalar2dp<T> {
    #[inline]
    fn bulk(self) -> Self {
        PScalar2dp::new(T::zero())
    }
}

impl<T: Float> Bulk for MVec2dpE<T> {
    #[inline]
    fn bulk(self) -> Self {
        MVec2dpE::new(self.c0, T::zero(), T::zero(), self.c3)
    }
}

impl<T: Float> Bulk for MVec2dpU<T> {
    #[inline]
    fn bulk(self) -> Self {
        MVec2dpU::new(self.c0, self.c1, T::zero(), T::zero())
    }
}

impl<T: Float> Bulk for MVec2dp<T> {
    #[inline]
    fn bulk(self) -> Self {
        MVec2dp::new(self.c0, self.c1, self.c2, T::zero(), T::zero(), T::zero(), self.c6, T::zero())
    }
}

impl<T: Float> Weight for Scalar2dp<T> {
    #[inline]
    fn weight(self) -> Self {
        Scalar2dp::new(T::zero())
    }
}

impl<T: Float> Weight for Vec2dp<T> {
    #[inline]
    fn weight(self) -> Self {
        Vec2dp::new(T::zero(), T::zero(), self.z)
    }
}

impl<T: Float> Weight for BiVec2dp<T> {
    #[inline]
    fn weight(self) -> Self {
        BiVec2dp::new(self.x, self.y, T::zero())
    }
}

impl<T: Float> Weight for PScalar2dp<T> {
    #[inline]
    fn weight(self) -> Self {
        PScalar2dp::new(self.value)
    }
}

impl<T: Float> Weight for MVec2dpE<T> {
    #[inline]
    fn weight(self) -> Self {
        MVec2dpE::new(T::zero(), self.c1, self.c2, T::zero())
    }
}

impl<T: Float> Weight for MVec2dpU<T> {
    #[inline]
    fn weight(self) -> Self {
        MVec2dpU::new(T::zero(), T::zero(), self.c2, self.c3)
    }
}

impl<T: Float> Weight for MVec2dp<T> {
    #[inline]
    fn weight(self) -> Self {
        MVec2dp::new(T::zero(), T::zero(), T::zero(), self.c3, self.c4, self.c5, T::zero(), self.c7)
    }
}

impl<T: Float> BulkDual for Scalar2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn bulk_dual(self) -> Self::Output {
        PScalar2dp::new(self.value)
    }
}

impl<T: Float> BulkDual for Vec2dp<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn bulk_dual(self) -> Self::Output {
        BiVec2dp::new(self.x, self.y, T::zero())
    }
}

impl<T: Float> BulkDual for BiVec2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn bulk_dual(self) -> Self::Output {
        Vec2dp::new(T::zero(), T::zero(), self.z)
    }
}

impl<T: Float> BulkDual for PScalar2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn bulk_dual(self) -> Self::Output {
        Scalar2dp::new(T::zero())
    }
}

impl<T: Float> BulkDual for MVec2dpE<T> {
    type Output = MVec2dpU<T>;

    #[inline]
    fn bulk_dual(self) -> Self::Output {
        MVec2dpU::new(T::zero(), T::zero(), self.c3, self.c0)
    }
}

impl<T: Float> BulkDual for MVec2dpU<T> {
    type Output = MVec2dpE<T>;

    #[inline]
    fn bulk_dual(self) -> Self::Output {
        MVec2dpE::new(T::zero(), self.c0, self.c1, T::zero())
    }
}

impl<T: Float> BulkDual for MVec2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn bulk_dual(self) -> Self::Output {
        MVec2dp::new(T::zero(), T::zero(), T::zero(), self.c6, self.c1, self.c2, T::zero(), self.c0)
    }
}

impl<T: Float> WeightDual for Scalar2dp<T> {
    type Output = PScalar2dp<T>;

    #[inline]
    fn weight_dual(self) -> Self::Output {
        PScalar2dp::new(T::zero())
    }
}

impl<T: Float> WeightDual for Vec2dp<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn weight_dual(self) -> Self::Output {
        BiVec2dp::new(T::zero(), T::zero(), self.z)
    }
}

impl<T: Float> WeightDual for BiVec2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn weight_dual(self) -> Self::Output {
        Vec2dp::new(self.x, self.y, T::zero())
    }
}

impl<T: Float> WeightDual for PScalar2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn weight_dual(self) -> Self::Output {
        Scalar2dp::new(self.value)
    }
}

impl<T: Float> WeightDual for MVec2dpE<T> {
    type Output = MVec2dpU<T>;

    #[inline]
    fn weight_dual(self) -> Self::Output {
        MVec2dpU::new(self.c1, self.c2, T::zero(), T::zero())
    }
}

impl<T: Float> WeightDual for MVec2dpU<T> {
    type Output = MVec2dpE<T>;

    #[inline]
    fn weight_dual(self) -> Self::Output {
        MVec2dpE::new(self.c3, T::zero(), T::zero(), self.c2)
    }
}

impl<T: Float> WeightDual for MVec2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn weight_dual(self) -> Self::Output {
        MVec2dp::new(self.c7, self.c4, self.c5, T::zero(), T::zero(), T::zero(), self.c3, T::zero())
    }
}

impl<T: Float> Attitude for Vec2dp<T> {
    type Output = Scalar2dp<T>;

    #[inline]
    fn att(self) -> Self::Output {
        Scalar2dp::new(self.z)
    }
}

impl<T: Float> Attitude for BiVec2dp<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn att(self) -> Self::Output {
        Vec2dp::new(self.y, -self.x, T::zero())
    }
}

impl<T: Float> Attitude for PScalar2dp<T> {
    type Output = BiVec2dp<T>;

    #[inline]
    fn att(self) -> Self::Output {
        BiVec2dp::new(T::zero(), T::zero(), self.value)
    }
}

impl<T: Float> Attitude for MVec2dpE<T> {
    type Output = Vec2dp<T>;

    #[inline]
    fn att(self) -> Self::Output {
        Vec2dp::new(self.c2, -self.c1, T::zero())
    }
}

impl<T: Float> Attitude for MVec2dpU<T> {
    type Output = MVec2dpE<T>;

    #[inline]
    fn att(self) -> Self::Output {
        MVec2dpE::new(self.c2, T::zero(), T::zero(), self.c3)
    }
}

impl<T: Float> Attitude for MVec2dp<T> {
    type Output = MVec2dp<T>;

    #[inline]
    fn att(self) -> Self::Output {
        MVec2dp::new(
            self.c3,
            self.c5,
            -self.c4,
            T::zero(),
            T::zero(),
            T::zero(),
            self.c7,
            T::zero(),
        )
    }
}
