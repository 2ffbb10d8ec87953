//! Free function spelling of the operator traits.

use crate::error::DivisionError;
use crate::traits::*;

#[inline]
pub fn wdg<A: Wedge<B>, B>(a: A, b: B) -> A::Output {
    a.wdg(b)
}

#[inline]
pub fn rwdg<A: RegressiveWedge<B>, B>(a: A, b: B) -> A::Output {
    a.rwdg(b)
}

#[inline]
pub fn join<A: Join<B>, B>(a: A, b: B) -> A::Output {
    a.join(b)
}

#[inline]
pub fn meet<A: Meet<B>, B>(a: A, b: B) -> A::Output {
    a.meet(b)
}

#[inline]
pub fn dot<A: Dot<B>, B>(a: A, b: B) -> A::Output {
    a.dot(b)
}

#[inline]
pub fn rdot<A: RegressiveDot<B>, B>(a: A, b: B) -> A::Output {
    a.rdot(b)
}

#[inline]
pub fn lcontr<A: LeftContraction<B>, B>(a: A, b: B) -> A::Output {
    a.lcontr(b)
}

#[inline]
pub fn rcontr<A: RightContraction<B>, B>(a: A, b: B) -> A::Output {
    a.rcontr(b)
}

#[inline]
pub fn cmt<A: Commutator<B>, B>(a: A, b: B) -> A::Output {
    a.cmt(b)
}

#[inline]
pub fn rcmt<A: RegressiveCommutator<B>, B>(a: A, b: B) -> A::Output {
    a.rcmt(b)
}

#[inline]
pub fn gpr<A: Geometric<B>, B>(a: A, b: B) -> A::Output {
    a.gpr(b)
}

#[inline]
pub fn rgpr<A: RegressiveGeometric<B>, B>(a: A, b: B) -> A::Output {
    a.rgpr(b)
}

#[inline]
pub fn left_bulk_contract<A: LeftBulkContraction<B>, B>(a: A, b: B) -> A::Output {
    a.left_bulk_contract(b)
}

#[inline]
pub fn right_bulk_contract<A: RightBulkContraction<B>, B>(a: A, b: B) -> A::Output {
    a.right_bulk_contract(b)
}

#[inline]
pub fn left_weight_contract<A: LeftWeightContraction<B>, B>(a: A, b: B) -> A::Output {
    a.left_weight_contract(b)
}

#[inline]
pub fn right_weight_contract<A: RightWeightContraction<B>, B>(a: A, b: B) -> A::Output {
    a.right_weight_contract(b)
}

#[inline]
pub fn left_bulk_expand<A: LeftBulkExpansion<B>, B>(a: A, b: B) -> A::Output {
    a.left_bulk_expand(b)
}

#[inline]
pub fn right_bulk_expand<A: RightBulkExpansion<B>, B>(a: A, b: B) -> A::Output {
    a.right_bulk_expand(b)
}

#[inline]
pub fn left_weight_expand<A: LeftWeightExpansion<B>, B>(a: A, b: B) -> A::Output {
    a.left_weight_expand(b)
}

#[inline]
pub fn right_weight_expand<A: RightWeightExpansion<B>, B>(a: A, b: B) -> A::Output {
    a.right_weight_expand(b)
}

#[inline]
pub fn rev<A: Reverse>(a: A) -> A {
    a.rev()
}

#[inline]
pub fn rrev<A: RegressiveReverse>(a: A) -> A {
    a.rrev()
}

#[inline]
pub fn gr_inv<A: GradeInvolution>(a: A) -> A {
    a.gr_inv()
}

#[inline]
pub fn conj<A: Conjugate>(a: A) -> A {
    a.conj()
}

#[inline]
pub fn cmpl<A: Complement>(a: A) -> A::Output {
    a.cmpl()
}

#[inline]
pub fn lcmpl<A: LeftComplement>(a: A) -> A::Output {
    a.lcmpl()
}

#[inline]
pub fn rcmpl<A: RightComplement>(a: A) -> A::Output {
    a.rcmpl()
}

#[inline]
pub fn dual<A: Dual>(a: A) -> A::Output {
    a.dual()
}

#[inline]
pub fn bulk<A: Bulk>(a: A) -> A {
    a.bulk()
}

#[inline]
pub fn weight<A: Weight>(a: A) -> A {
    a.weight()
}

#[inline]
pub fn bulk_dual<A: BulkDual>(a: A) -> A::Output {
    a.bulk_dual()
}

#[inline]
pub fn weight_dual<A: WeightDual>(a: A) -> A::Output {
    a.weight_dual()
}

#[inline]
pub fn att<A: Attitude>(a: A) -> A::Output {
    a.att()
}

#[inline]
pub fn nrm_sq<A: Norm>(a: A) -> A::Output {
    a.nrm_sq()
}

#[inline]
pub fn nrm<A: Norm>(a: A) -> A::Output {
    a.nrm()
}

#[inline]
pub fn bulk_nrm_sq<A: BulkNorm>(a: A) -> A::Output {
    a.bulk_nrm_sq()
}

#[inline]
pub fn bulk_nrm<A: BulkNorm>(a: A) -> A::Output {
    a.bulk_nrm()
}

#[inline]
pub fn weight_nrm_sq<A: WeightNorm>(a: A) -> A::Output {
    a.weight_nrm_sq()
}

#[inline]
pub fn weight_nrm<A: WeightNorm>(a: A) -> A::Output {
    a.weight_nrm()
}

#[inline]
pub fn geom_nrm<A: GeometricNorm>(a: A) -> A::Output {
    a.geom_nrm()
}

#[inline]
pub fn normalize<A: Normalize>(a: A) -> A {
    a.normalize()
}

pub fn try_normalize<A: Normalize>(a: A) -> Result<A, DivisionError> {
    a.try_normalize()
}

#[inline]
pub fn unitize<A: Unitize>(a: A) -> A {
    a.unitize()
}

pub fn try_unitize<A: Unitize>(a: A) -> Result<A, DivisionError> {
    a.try_unitize()
}

#[inline]
pub fn inv<A: Inverse>(a: A) -> A {
    a.inv()
}

pub fn try_inv<A: Inverse>(a: A) -> Result<A, DivisionError> {
    a.try_inv()
}

#[inline]
pub fn rotate<A: Rotate<R>, R>(a: A, rotor: R) -> A {
    a.rotate(rotor)
}

/// `move` is a keyword, hence the suffix.
#[inline]
pub fn move_by<A: Move<M>, M>(a: A, motor: M) -> A {
    a.move_by(motor)
}

#[inline]
pub fn project_onto<A: ProjectOnto<B>, B>(a: A, b: B) -> A {
    a.project_onto(b)
}

#[inline]
pub fn reject_from<A: RejectFrom<B>, B>(a: A, b: B) -> A {
    a.reject_from(b)
}

#[inline]
pub fn reflect_on<A: ReflectOn<B>, B>(a: A, b: B) -> A {
    a.reflect_on(b)
}
