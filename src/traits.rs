//! One trait per operator.
//!
//! Products take both operands by value and pick their output type from the operand
//! grades, so an unsupported grade combination is a missing impl rather than a runtime
//! error. Operators that are compositions of other operators (join, meet, the bulk and
//! weight contractions and expansions) are blanket impls.

use crate::error::DivisionError;

pub trait Wedge<Rhs> {
    type Output;
    fn wdg(self, rhs: Rhs) -> Self::Output;
}

pub trait RegressiveWedge<Rhs> {
    type Output;
    fn rwdg(self, rhs: Rhs) -> Self::Output;
}

/// Scalar valued inner product of operands of equal grade.
pub trait Dot<Rhs> {
    type Output;
    fn dot(self, rhs: Rhs) -> Self::Output;
}

/// Pseudoscalar valued inner product.
pub trait RegressiveDot<Rhs> {
    type Output;
    fn rdot(self, rhs: Rhs) -> Self::Output;
}

/// `a << b`, the part of `a * b` of grade `gr(b) - gr(a)`.
pub trait LeftContraction<Rhs> {
    type Output;
    fn lcontr(self, rhs: Rhs) -> Self::Output;
}

/// `a >> b`, the part of `a * b` of grade `gr(a) - gr(b)`.
pub trait RightContraction<Rhs> {
    type Output;
    fn rcontr(self, rhs: Rhs) -> Self::Output;
}

/// Antisymmetric part of the geometric product, `(a * b - b * a) / 2`.
pub trait Commutator<Rhs> {
    type Output;
    fn cmt(self, rhs: Rhs) -> Self::Output;
}

pub trait RegressiveCommutator<Rhs> {
    type Output;
    fn rcmt(self, rhs: Rhs) -> Self::Output;
}

pub trait Geometric<Rhs> {
    type Output;
    fn gpr(self, rhs: Rhs) -> Self::Output;
}

pub trait RegressiveGeometric<Rhs> {
    type Output;
    fn rgpr(self, rhs: Rhs) -> Self::Output;
}

/// Sign pattern `+ + - -` over grades 0, 1, 2, 3.
pub trait Reverse {
    fn rev(self) -> Self;
}

/// Reversion of the complement, the antireverse.
pub trait RegressiveReverse {
    fn rrev(self) -> Self;
}

/// Sign pattern `+ - + -`.
pub trait GradeInvolution {
    fn gr_inv(self) -> Self;
}

/// Sign pattern `+ - - +`.
pub trait Conjugate {
    fn conj(self) -> Self;
}

/// `a.wdg(a.cmpl())` is the unit pseudoscalar. Only for odd dimensional spaces, where
/// the left and right complements coincide.
pub trait Complement {
    type Output;
    fn cmpl(self) -> Self::Output;
}

/// `a.lcmpl().wdg(a)` is the unit pseudoscalar.
pub trait LeftComplement {
    type Output;
    fn lcmpl(self) -> Self::Output;
}

/// `a.wdg(a.rcmpl())` is the unit pseudoscalar.
pub trait RightComplement {
    type Output;
    fn rcmpl(self) -> Self::Output;
}

pub trait Dual {
    type Output;
    fn dual(self) -> Self::Output;
}

/// Components along non-degenerate directions.
pub trait Bulk {
    fn bulk(self) -> Self;
}

/// Components touching the degenerate direction.
pub trait Weight {
    fn weight(self) -> Self;
}

pub trait BulkDual {
    type Output;
    fn bulk_dual(self) -> Self::Output;
}

pub trait WeightDual {
    type Output;
    fn weight_dual(self) -> Self::Output;
}

/// Meet with the horizon: the direction of a flat object.
pub trait Attitude {
    type Output;
    fn att(self) -> Self::Output;
}

pub trait Norm {
    type Output;
    fn nrm_sq(self) -> Self::Output;
    fn nrm(self) -> Self::Output;
}

pub trait BulkNorm {
    type Output;
    fn bulk_nrm_sq(self) -> Self::Output;
    fn bulk_nrm(self) -> Self::Output;
}

pub trait WeightNorm {
    type Output;
    fn weight_nrm_sq(self) -> Self::Output;
    fn weight_nrm(self) -> Self::Output;
}

/// Bulk and weight norm packed into a dual number.
pub trait GeometricNorm {
    type Output;
    fn geom_nrm(self) -> Self::Output;
}

pub trait Normalize: Sized {
    fn normalize(self) -> Self;
    fn try_normalize(self) -> Result<Self, DivisionError>;
}

/// Scales a projective object so that its weight norm is one.
pub trait Unitize: Sized {
    fn unitize(self) -> Self;
    fn try_unitize(self) -> Result<Self, DivisionError>;
}

/// Multiplicative inverse with respect to the geometric product.
pub trait Inverse: Sized {
    fn inv(self) -> Self;
    fn try_inv(self) -> Result<Self, DivisionError>;
}

pub trait Rotate<Rotor> {
    fn rotate(self, rotor: Rotor) -> Self;
}

/// Applies a motor with the regressive sandwich `rgpr(rgpr(m, x), rrev(m))`.
pub trait Move<Motor> {
    fn move_by(self, motor: Motor) -> Self;
}

pub trait ProjectOnto<Target> {
    fn project_onto(self, target: Target) -> Self;
}

pub trait RejectFrom<Target> {
    fn reject_from(self, target: Target) -> Self;
}

pub trait ReflectOn<Target> {
    fn reflect_on(self, target: Target) -> Self;
}

pub trait Join<Rhs> {
    type Output;
    fn join(self, rhs: Rhs) -> Self::Output;
}

impl<Lhs, Rhs> Join<Rhs> for Lhs
where
    Lhs: Wedge<Rhs>,
{
    type Output = Lhs::Output;

    fn join(self, rhs: Rhs) -> Self::Output {
        self.wdg(rhs)
    }
}

pub trait Meet<Rhs> {
    type Output;
    fn meet(self, rhs: Rhs) -> Self::Output;
}

impl<Lhs, Rhs> Meet<Rhs> for Lhs
where
    Lhs: RegressiveWedge<Rhs>,
{
    type Output = Lhs::Output;

    fn meet(self, rhs: Rhs) -> Self::Output {
        self.rwdg(rhs)
    }
}

macro_rules! dual_composition {
    ($(#[$meta:meta])* $trait_:ident :: $fn_:ident = left $dual:ident :: $dual_fn:ident, $op:ident :: $op_fn:ident) => {
        $(#[$meta])*
        pub trait $trait_<Rhs> {
            type Output;
            fn $fn_(self, rhs: Rhs) -> Self::Output;
        }

        impl<Lhs, Rhs, LhsDual> $trait_<Rhs> for Lhs
        where
            Lhs: $dual<Output = LhsDual>,
            LhsDual: $op<Rhs>,
        {
            type Output = LhsDual::Output;

            #[inline]
            fn $fn_(self, rhs: Rhs) -> Self::Output {
                self.$dual_fn().$op_fn(rhs)
            }
        }
    };
    ($(#[$meta:meta])* $trait_:ident :: $fn_:ident = right $dual:ident :: $dual_fn:ident, $op:ident :: $op_fn:ident) => {
        $(#[$meta])*
        pub trait $trait_<Rhs> {
            type Output;
            fn $fn_(self, rhs: Rhs) -> Self::Output;
        }

        impl<Lhs, Rhs, RhsDual> $trait_<Rhs> for Lhs
        where
            Rhs: $dual<Output = RhsDual>,
            Lhs: $op<RhsDual>,
        {
            type Output = Lhs::Output;

            #[inline]
            fn $fn_(self, rhs: Rhs) -> Self::Output {
                self.$op_fn(rhs.$dual_fn())
            }
        }
    };
}

dual_composition! {
    /// `rwdg(bulk_dual(a), b)`
    LeftBulkContraction::left_bulk_contract = left BulkDual::bulk_dual, RegressiveWedge::rwdg
}

dual_composition! {
    /// `rwdg(a, bulk_dual(b))`
    RightBulkContraction::right_bulk_contract = right BulkDual::bulk_dual, RegressiveWedge::rwdg
}

dual_composition! {
    /// `rwdg(weight_dual(a), b)`
    LeftWeightContraction::left_weight_contract = left WeightDual::weight_dual, RegressiveWedge::rwdg
}

dual_composition! {
    /// `rwdg(a, weight_dual(b))`
    RightWeightContraction::right_weight_contract = right WeightDual::weight_dual, RegressiveWedge::rwdg
}

dual_composition! {
    /// `wdg(bulk_dual(a), b)`
    LeftBulkExpansion::left_bulk_expand = left BulkDual::bulk_dual, Wedge::wdg
}

dual_composition! {
    /// `wdg(a, bulk_dual(b))`
    RightBulkExpansion::right_bulk_expand = right BulkDual::bulk_dual, Wedge::wdg
}

dual_composition! {
    /// `wdg(weight_dual(a), b)`
    LeftWeightExpansion::left_weight_expand = left WeightDual::weight_dual, Wedge::wdg
}

dual_composition! {
    /// `wdg(a, weight_dual(b))`
    RightWeightExpansion::right_weight_expand = right WeightDual::weight_dual, Wedge::wdg
}
