//! Sign flips, complements, duals, and the bulk/weight split.

use super::{BiVec3dp, MVec3dp, MVec3dpE, MVec3dpU, PScalar3dp, Scalar3dp, TriVec3dp, Vec3dp};
use crate::traits::{
    Attitude, Bulk, BulkDual, Conjugate, Dual, GradeInvolution, LeftComplement, RegressiveReverse,
    Reverse, RightComplement, Weight, WeightDual,
};
use num_traits::Float;

impl<T: Float> Reverse for Scalar3dp<T> {
    #[inline]
    fn rev(self) -> Self {
        self
    }
}

impl<T: Float> Reverse for Vec3dp<T> {
    #[inline]
    fn rev(self) -> Self {
        self
    }
}

impl<T: Float> Reverse for BiVec3dp<T> {
    #[inline]
    fn rev(self) -> Self {
        BiVec3dp::new(-self.vx, -self.vy, -self.vz, -self.mx, -self.my, -self.mz)
    }
}

impl<T: Float> Reverse for TriVec3dp<T> {
    #[inline]
    fn rev(self) -> Self {
        TriVec3dp::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: Float> Reverse for PScalar3dp<T> {
    #[inline]
    fn rev(self) -> Self {
        self
    }
}

impl<T: Float> Reverse for MVec3dpE<T> {
    #[inline]
    fn rev(self) -> Self {
        MVec3dpE::new(self.c0, -self.c1, -self.c2, -self.c3, -self.c4, -self.c5, -self.c6, self.c7)
    }
}

impl<T: Float> Reverse for MVec3dpU<T> {
    #[inline]
    fn rev(self) -> Self {
        MVec3dpU::new(self.c0, self.c1, self.c2, self.c3, -self.c4, -self.c5, -self.c6, -self.c7)
    }
}

impl<T: Float> Reverse for MVec3dp<T> {
    #[inline]
    fn rev(self) -> Self {
        MVec3dp::new(
            self.c0,
            self.c1,
            self.c2,
            self.c3,
            self.c4,
            -self.c5,
            -self.c6,
            -self.c7,
            -self.c8,
            -self.c9,
            -self.c10,
            -self.c11,
            -self.c12,
            -self.c13,
            -self.c14,
            self.c15,
        )
    }
}

impl<T: Float> GradeInvolution for Scalar3dp<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        self
    }
}

impl<T: Float> GradeInvolution for Vec3dp<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        Vec3dp::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: Float> GradeInvolution for BiVec3dp<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        BiVec3dp::new(self.vx, self.vy, self.vz, self.mx, self.my, self.mz)
    }
}

impl<T: Float> GradeInvolution for TriVec3dp<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        TriVec3dp::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: Float> GradeInvolution for PScalar3dp<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        self
    }
}

impl<T: Float> GradeInvolution for MVec3dpE<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        MVec3dpE::new(self.c0, self.c1, self.c2, self.c3, self.c4, self.c5, self.c6, self.c7)
    }
}

impl<T: Float> GradeInvolution for MVec3dpU<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        MVec3dpU::new(
            -self.c0,
            -self.c1,
            -self.c2,
            -self.c3,
            -self.c4,
            -self.c5,
            -self.c6,
            -self.c7,
        )
    }
}

impl<T: Float> GradeInvolution for MVec3dp<T> {
    #[inline]
    fn gr_inv(self) -> Self {
        MVec3dp::new(
            self.c0,
            -self.c1,
            -self.c2,
            -self.c3,
            -self.c4,
            self.c5,
            self.c6,
            self.c7,
            self.c8,
            self.c9,
            self.c10,
            -self.c11,
            -self.c12,
            -self.c13,
            -self.c14,
            self.c15,
        )
    }
}

impl<T: Float> Conjugate for Scalar3dp<T> {
    #[inline]
    fn conj(self) -> Self {
        self
    }
}

impl<T: Float> Conjugate for Vec3dp<T> {
    #[inline]
    fn conj(self) -> Self {
        Vec3dp::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: Float> Conjugate for BiVec3dp<T> {
    #[inline]
    fn conj(self) -> Self {
        BiVec3dp::new(-self.vx, -self.vy, -self.vz, -self.mx, -self.my, -self.mz)
    }
}

impl<T: Float> Conjugate for TriVec3dp<T> {
    #[inline]
    fn conj(self) -> Self {
        TriVec3dp::new(self.x, self.y, self.z, self.w)
    }
}

impl<T: Float> Conjugate for PScalar3dp<T> {
    #[inline]
    fn conj(self) -> Self {
        self
    }
}

impl<T: Float> Conjugate for MVec3dpE<T> {
    #[inline]
    fn conj(self) -> Self {
        MVec3dpE::new(self.c0, -self.c1, -self.c2, -self.c3, -self.c4, -self.c5, -self.c6, self.c7)
    }
}

impl<T: Float> Conjugate for MVec3dpU<T> {
    #[inline]
    fn conj(self) -> Self {
        MVec3dpU::new(-self.c0, -self.c1, -self.c2, -self.c3, self.c4, self.c5, self.c6, self.c7)
    }
}

impl<T: Float> Conjugate for MVec3dp<T> {
    #[inline]
    fn conj(self) -> Self {
        MVec3dp::new(
            self.c0,
            -self.c1,
            -self.c2,
            -self.c3,
            -self.c4,
            -self.c5,
            -self.c6,
            -self.c7,
            -self.c8,
            -self.c9,
            -self.c10,
            self.c11,
            self.c12,
            self.c13,
            self.c14,
            self.c15,
        )
    }
}

impl<T: Float> RegressiveReverse for Scalar3dp<T> {
    #[inline]
    fn rrev(self) -> Self {
        self
    }
}

impl<T: Float> RegressiveReverse for Vec3dp<T> {
    #[inline]
    fn rrev(self) -> Self {
        Vec3dp::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: Float> RegressiveReverse for BiVec3dp<T> {
    #[inline]
    fn rrev(self) -> Self {
        BiVec3dp::new(-self.vx, -self.vy, -self.vz, -self.mx, -self.my, -self.mz)
    }
}

impl<T: Float> RegressiveReverse for TriVec3dp<T> {
    #[inline]
    fn rrev(self) -> Self {
        TriVec3dp::new(self.x, self.y, self.z, self.w)
    }
}

impl<T: Float> RegressiveReverse for PScalar3dp<T> {
    #[inline]
    fn rrev(self) -> Self {
        self
    }
}

impl<T: Float> RegressiveReverse for MVec3dpE<T> {
    #[inline]
    fn rrev(self) -> Self {
        MVec3dpE::new(self.c0, -self.c1, -self.c2, -self.c3, -self.c4, -self.c5, -self.c6, self.c7)
    }
}

impl<T: Float> RegressiveReverse for MVec3dpU<T> {
    #[inline]
    fn rrev(self) -> Self {
        MVec3dpU::new(-self.c0, -self.c1, -self.c2, -self.c3, self.c4, self.c5, self.c6, self.c7)
    }
}

impl<T: Float> RegressiveReverse for MVec3dp<T> {
    #[inline]
    fn rrev(self) -> Self {
        MVec3dp::new(
            self.c0,
            -self.c1,
            -self.c2,
            -self.c3,
            -self.c4,
            -self.c5,
            -self.c6,
            -self.c7,
            -self.c8,
            -self.c9,
            -self.c10,
            self.c11,
            self.c12,
            self.c13,
            self.c14,
            self.c15,
        )
    }
}

impl<T: Float> RightComplement for Scalar3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn rcmpl(self) -> Self::Output {
        PScalar3dp::new(self.value)
    }
}

impl<T: Float> RightComplement for Vec3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn rcmpl(self) -> Self::Output {
        TriVec3dp::new(self.x, self.y, self.z, self.w)
    }
}

impl<T: Float> RightComplement for BiVec3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn rcmpl(self) -> Self::Output {
        BiVec3dp::new(-self.mx, -self.my, -self.mz, -self.vx, -self.vy, -self.vz)
    }
}

impl<T: Float> RightComplement for TriVec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn rcmpl(self) -> Self::Output {
        Vec3dp::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: Float> RightComplement for PScalar3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn rcmpl(self) -> Self::Output {
        Scalar3dp::new(self.value)
    }
}

impl<T: Float> RightComplement for MVec3dpE<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn rcmpl(self) -> Self::Output {
        MVec3dpE::new(self.c7, -self.c4, -self.c5, -self.c6, -self.c1, -self.c2, -self.c3, self.c0)
    }
}

impl<T: Float> RightComplement for MVec3dpU<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn rcmpl(self) -> Self::Output {
        MVec3dpU::new(-self.c4, -self.c5, -self.c6, -self.c7, self.c0, self.c1, self.c2, self.c3)
    }
}

impl<T: Float> RightComplement for MVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn rcmpl(self) -> Self::Output {
        MVec3dp::new(
            self.c15,
            -self.c11,
            -self.c12,
            -self.c13,
            -self.c14,
            -self.c8,
            -self.c9,
            -self.c10,
            -self.c5,
            -self.c6,
            -self.c7,
            self.c1,
            self.c2,
            self.c3,
            self.c4,
            self.c0,
        )
    }
}

impl<T: Float> LeftComplement for Scalar3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn lcmpl(self) -> Self::Output {
        PScalar3dp::new(self.value)
    }
}

impl<T: Float> LeftComplement for Vec3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn lcmpl(self) -> Self::Output {
        TriVec3dp::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: Float> LeftComplement for BiVec3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn lcmpl(self) -> Self::Output {
        BiVec3dp::new(-self.mx, -self.my, -self.mz, -self.vx, -self.vy, -self.vz)
    }
}

impl<T: Float> LeftComplement for TriVec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn lcmpl(self) -> Self::Output {
        Vec3dp::new(self.x, self.y, self.z, self.w)
    }
}

impl<T: Float> LeftComplement for PScalar3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn lcmpl(self) -> Self::Output {
        Scalar3dp::new(self.value)
    }
}

impl<T: Float> LeftComplement for MVec3dpE<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn lcmpl(self) -> Self::Output {
        MVec3dpE::new(self.c7, -self.c4, -self.c5, -self.c6, -self.c1, -self.c2, -self.c3, self.c0)
    }
}

impl<T: Float> LeftComplement for MVec3dpU<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn lcmpl(self) -> Self::Output {
        MVec3dpU::new(self.c4, self.c5, self.c6, self.c7, -self.c0, -self.c1, -self.c2, -self.c3)
    }
}

impl<T: Float> LeftComplement for MVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn lcmpl(self) -> Self::Output {
        MVec3dp::new(
            self.c15,
            self.c11,
            self.c12,
            self.c13,
            self.c14,
            -self.c8,
            -self.c9,
            -self.c10,
            -self.c5,
            -self.c6,
            -self.c7,
            -self.c1,
            -self.c2,
            -self.c3,
            -self.c4,
            self.c0,
        )
    }
}

impl<T: Float> Dual for Scalar3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.bulk_dual()
    }
}

impl<T: Float> Dual for Vec3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.bulk_dual()
    }
}

impl<T: Float> Dual for BiVec3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.bulk_dual()
    }
}

impl<T: Float> Dual for TriVec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.bulk_dual()
    }
}

impl<T: Float> Dual for PScalar3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.bulk_dual()
    }
}

impl<T: Float> Dual for MVec3dpE<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.bulk_dual()
    }
}

impl<T: Float> Dual for MVec3dpU<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.bulk_dual()
    }
}

impl<T: Float> Dual for MVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn dual(self) -> Self::Output {
        self.bulk_dual()
    }
}

impl<T: Float> Bulk for Scalar3dp<T> {
    #[inline]
    fn bulk(self) -> Self {
        Scalar3dp::new(self.value)
    }
}

impl<T: Float> Bulk for Vec3dp<T> {
    #[inline]
    fn bulk(self) -> Self {
        Vec3dp::new(self.x, self.y, self.z, T::zero())
    }
}

impl<T: Float> Bulk for BiVec3dp<T> {
    #[inline]
    fn bulk(self) -> Self {
        BiVec3dp::new(T::zero(), T::zero(), T::zero(), self.mx, self.my, self.mz)
    }
}

impl<T: Float> Bulk for TriVec3dp<T> {
    #[inline]
    fn bulk(self) -> Self {
        TriVec3dp::new(T::zero(), T::zero(), T::zero(), self.w)
    }
}

impl<T: Float> Bulk for PScalar3dp<T> {
    #[inline]
    fn bulk(self) -> Self {
        PScalar3dp::new(T::zero())
    }
}

impl<T: Float> Bulk for MVec3dpE<T> {
    #[inline]
    fn bulk(self) -> Self {
        MVec3dpE::new(
            self.c0,
            T::zero(),
            T::zero(),
            T::zero(),
            self.c4,
            self.c5,
            self.c6,
            T::zero(),
        )
    }
}

impl<T: Float> Bulk for MVec3dpU<T> {
    #[inline]
    fn bulk(self) -> Self {
        MVec3dpU::new(
            self.c0,
            self.c1,
            self.c2,
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            self.c7,
        )
    }
}

impl<T: Float> Bulk for MVec3dp<T> {
    #[inline]
    fn bulk(self) -> Self {
        MVec3dp::new(
            self.c0,
            self.c1,
            self.c2,
            self.c3,
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            self.c8,
            self.c9,
            self.c10,
            T::zero(),
            T::zero(),
            T::zero(),
            self.c14,
            T::zero(),
        )
    }
}

impl<T: Float> Weight for Scalar3dp<T> {
    #[inline]
    fn weight(self) -> Self {
        Scalar3dp::new(T::zero())
    }
}

impl<T: Float> Weight for Vec3dp<T> {
    #[inline]
    fn weight(self) -> Self {
        Vec3dp::new(T::zero(), T::zero(), T::zero(), self.w)
    }
}

impl<T: Float> Weight for BiVec3dp<T> {
    #[inline]
    fn weight(self) -> Self {
        BiVec3dp::new(self.vx, self.vy, self.vz, T::zero(), T::zero(), T::zero())
    }
}

impl<T: Float> Weight for TriVec3dp<T> {
    #[inline]
    fn weight(self) -> Self {
        TriVec3dp::new(self.x, self.y, self.z, T::zero())
    }
}

impl<T: Float> Weight for PScalar3dp<T> {
    #[inline]
    fn weight(self) -> Self {
        PScalar3dp::new(self.value)
    }
}

impl<T: Float> Weight for MVec3dpE<T> {
    #[inline]
    fn weight(self) -> Self {
        MVec3dpE::new(
            T::zero(),
            self.c1,
            self.c2,
            self.c3,
            T::zero(),
            T::zero(),
            T::zero(),
            self.c7,
        )
    }
}

impl<T: Float> Weight for MVec3dpU<T> {
    #[inline]
    fn weight(self) -> Self {
        MVec3dpU::new(
            T::zero(),
            T::zero(),
            T::zero(),
            self.c3,
            self.c4,
            self.c5,
            self.c6,
            T::zero(),
        )
    }
}

impl<T: Float> Weight for MVec3dp<T> {
    #[inline]
    fn weight(self) -> Self {
        MVec3dp::new(
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            self.c4,
            self.c5,
            self.c6,
            self.c7,
            T::zero(),
            T::zero(),
            T::zero(),
            self.c11,
            self.c12,
            self.c13,
            T::zero(),
            self.c15,
        )
    }
}

impl<T: Float> BulkDual for Scalar3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn bulk_dual(self) -> Self::Output {
        PScalar3dp::new(self.value)
    }
}

impl<T: Float> BulkDual for Vec3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn bulk_dual(self) -> Self::Output {
        TriVec3dp::new(self.x, self.y, self.z, T::zero())
    }
}

impl<T: Float> BulkDual for BiVec3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn bulk_dual(self) -> Self::Output {
        BiVec3dp::new(-self.mx, -self.my, -self.mz, T::zero(), T::zero(), T::zero())
    }
}

impl<T: Float> BulkDual for TriVec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn bulk_dual(self) -> Self::Output {
        Vec3dp::new(T::zero(), T::zero(), T::zero(), -self.w)
    }
}

impl<T: Float> BulkDual for PScalar3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn bulk_dual(self) -> Self::Output {
        Scalar3dp::new(T::zero())
    }
}

impl<T: Float> BulkDual for MVec3dpE<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn bulk_dual(self) -> Self::Output {
        MVec3dpE::new(
            T::zero(),
            -self.c4,
            -self.c5,
            -self.c6,
            T::zero(),
            T::zero(),
            T::zero(),
            self.c0,
        )
    }
}

impl<T: Float> BulkDual for MVec3dpU<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn bulk_dual(self) -> Self::Output {
        MVec3dpU::new(
            T::zero(),
            T::zero(),
            T::zero(),
            -self.c7,
            self.c0,
            self.c1,
            self.c2,
            T::zero(),
        )
    }
}

impl<T: Float> BulkDual for MVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn bulk_dual(self) -> Self::Output {
        MVec3dp::new(
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            -self.c14,
            -self.c8,
            -self.c9,
            -self.c10,
            T::zero(),
            T::zero(),
            T::zero(),
            self.c1,
            self.c2,
            self.c3,
            T::zero(),
            self.c0,
        )
    }
}

impl<T: Float> WeightDual for Scalar3dp<T> {
    type Output = PScalar3dp<T>;

    #[inline]
    fn weight_dual(self) -> Self::Output {
        PScalar3dp::new(T::zero())
    }
}

impl<T: Float> WeightDual for Vec3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn weight_dual(self) -> Self::Output {
        TriVec3dp::new(T::zero(), T::zero(), T::zero(), self.w)
    }
}

impl<T: Float> WeightDual for BiVec3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn weight_dual(self) -> Self::Output {
        BiVec3dp::new(T::zero(), T::zero(), T::zero(), -self.vx, -self.vy, -self.vz)
    }
}

impl<T: Float> WeightDual for TriVec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn weight_dual(self) -> Self::Output {
        Vec3dp::new(-self.x, -self.y, -self.z, T::zero())
    }
}

impl<T: Float> WeightDual for PScalar3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn weight_dual(self) -> Self::Output {
        Scalar3dp::new(self.value)
    }
}

impl<T: Float> WeightDual for MVec3dpE<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn weight_dual(self) -> Self::Output {
        MVec3dpE::new(
            self.c7,
            T::zero(),
            T::zero(),
            T::zero(),
            -self.c1,
            -self.c2,
            -self.c3,
            T::zero(),
        )
    }
}

impl<T: Float> WeightDual for MVec3dpU<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn weight_dual(self) -> Self::Output {
        MVec3dpU::new(
            -self.c4,
            -self.c5,
            -self.c6,
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            self.c3,
        )
    }
}

impl<T: Float> WeightDual for MVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn weight_dual(self) -> Self::Output {
        MVec3dp::new(
            self.c15,
            -self.c11,
            -self.c12,
            -self.c13,
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            -self.c5,
            -self.c6,
            -self.c7,
            T::zero(),
            T::zero(),
            T::zero(),
            self.c4,
            T::zero(),
        )
    }
}

impl<T: Float> Attitude for Vec3dp<T> {
    type Output = Scalar3dp<T>;

    #[inline]
    fn att(self) -> Self::Output {
        Scalar3dp::new(self.w)
    }
}

impl<T: Float> Attitude for BiVec3dp<T> {
    type Output = Vec3dp<T>;

    #[inline]
    fn att(self) -> Self::Output {
        Vec3dp::new(self.vx, self.vy, self.vz, T::zero())
    }
}

impl<T: Float> Attitude for TriVec3dp<T> {
    type Output = BiVec3dp<T>;

    #[inline]
    fn att(self) -> Self::Output {
        BiVec3dp::new(T::zero(), T::zero(), T::zero(), self.x, self.y, self.z)
    }
}

impl<T: Float> Attitude for PScalar3dp<T> {
    type Output = TriVec3dp<T>;

    #[inline]
    fn att(self) -> Self::Output {
        TriVec3dp::new(T::zero(), T::zero(), T::zero(), self.value)
    }
}

impl<T: Float> Attitude for MVec3dpE<T> {
    type Output = MVec3dpU<T>;

    #[inline]
    fn att(self) -> Self::Output {
        MVec3dpU::new(
            self.c1,
            self.c2,
            self.c3,
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            self.c7,
        )
    }
}

impl<T: Float> Attitude for MVec3dpU<T> {
    type Output = MVec3dpE<T>;

    #[inline]
    fn att(self) -> Self::Output {
        MVec3dpE::new(
            self.c3,
            T::zero(),
            T::zero(),
            T::zero(),
            self.c4,
            self.c5,
            self.c6,
            T::zero(),
        )
    }
}

impl<T: Float> Attitude for MVec3dp<T> {
    type Output = MVec3dp<T>;

    #[inline]
    fn att(self) -> Self::Output {
        MVec3dp::new(
            self.c4,
            self.c5,
            self.c6,
            self.c7,
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            self.c11,
            self.c12,
            self.c13,
            T::zero(),
            T::zero(),
            T::zero(),
            self.c15,
            T::zero(),
        )
    }
}
