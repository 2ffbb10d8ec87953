//! Mixed precision: an `f32` operand meets an `f64` operand.
//!
//! The `f32` side is widened with `to_f64` and the same-precision impl does the work, so
//! every product between two types also exists between their `f32` and `f64` versions
//! and returns the `f64` result. The impls are written against the storage shapes and
//! stay generic over the tags; the `where` clause picks out the tag pairs that have a
//! product.

use crate::storage::{approx_eq_eps, BVec6, MVec16, MVec2, MVec4, MVec8, Scalar, Vec2, Vec3, Vec4};
use crate::traits::{
    Commutator, Dot, Geometric, LeftContraction, RegressiveCommutator, RegressiveDot,
    RegressiveGeometric, RegressiveWedge, RightContraction, Wedge,
};
use std::ops::{Add, Mul, Shl, Shr, Sub};

/// `5 · max(eps(f32), eps(f64))`
const MIXED_EPSILON: f64 = 5.0 * f32::EPSILON as f64;

macro_rules! widen {
    // one call per trait, every left shape against every right shape
    ($tr:ident::$method:ident; [$($lhs:ident),+] x $rhs:tt) => {
        $(widen!(@row $tr::$method; $lhs; $rhs);)+
    };
    (@row $tr:ident::$method:ident; $lhs:ident; [$($rhs:ident),+]) => {
        $(
            impl<Tl, Tr> $tr<$rhs<f64, Tr>> for $lhs<f32, Tl>
            where
                $lhs<f64, Tl>: $tr<$rhs<f64, Tr>>,
            {
                type Output = <$lhs<f64, Tl> as $tr<$rhs<f64, Tr>>>::Output;

                #[inline]
                fn $method(self, rhs: $rhs<f64, Tr>) -> Self::Output {
                    <$lhs<f64, Tl> as $tr<$rhs<f64, Tr>>>::$method(self.to_f64(), rhs)
                }
            }

            impl<Tl, Tr> $tr<$rhs<f32, Tr>> for $lhs<f64, Tl>
            where
                $lhs<f64, Tl>: $tr<$rhs<f64, Tr>>,
            {
                type Output = <$lhs<f64, Tl> as $tr<$rhs<f64, Tr>>>::Output;

                #[inline]
                fn $method(self, rhs: $rhs<f32, Tr>) -> Self::Output {
                    <$lhs<f64, Tl> as $tr<$rhs<f64, Tr>>>::$method(self, rhs.to_f64())
                }
            }
        )+
    };
}

macro_rules! widen_all {
    ($($tr:ident::$method:ident),+ $(,)?) => {
        $(
            widen! {
                $tr::$method;
                [Scalar, Vec2, Vec3, Vec4, BVec6, MVec2, MVec4, MVec8, MVec16]
                x [Scalar, Vec2, Vec3, Vec4, BVec6, MVec2, MVec4, MVec8, MVec16]
            }
        )+
    };
}

widen_all! {
    Wedge::wdg,
    RegressiveWedge::rwdg,
    Dot::dot,
    RegressiveDot::rdot,
    LeftContraction::lcontr,
    RightContraction::rcontr,
    Commutator::cmt,
    RegressiveCommutator::rcmt,
    Geometric::gpr,
    RegressiveGeometric::rgpr,
    Mul::mul,
    Shl::shl,
    Shr::shr,
    Add::add,
    Sub::sub,
}

macro_rules! mixed_eq {
    ($($name:ident { $($field:ident),+ }),+ $(,)?) => {
        $(
            impl<Tag> PartialEq<$name<f64, Tag>> for $name<f32, Tag> {
                fn eq(&self, other: &$name<f64, Tag>) -> bool {
                    $(approx_eq_eps(self.$field as f64, other.$field, MIXED_EPSILON))&&+
                }
            }

            impl<Tag> PartialEq<$name<f32, Tag>> for $name<f64, Tag> {
                fn eq(&self, other: &$name<f32, Tag>) -> bool {
                    other == self
                }
            }
        )+
    };
}

mixed_eq! {
    Scalar { value },
    Vec2 { x, y },
    Vec3 { x, y, z },
    Vec4 { x, y, z, w },
    BVec6 { vx, vy, vz, mx, my, mz },
    MVec2 { c0, c1 },
    MVec4 { c0, c1, c2, c3 },
    MVec8 { c0, c1, c2, c3, c4, c5, c6, c7 },
    MVec16 { c0, c1, c2, c3, c4, c5, c6, c7, c8, c9, c10, c11, c12, c13, c14, c15 },
}

#[cfg(test)]
mod tests {
    use crate::ega3d::{BiVec3d, MVec3dE, Scalar3d, Vec3d};
    use crate::traits::{Dot, Wedge};

    #[test]
    fn wider_type_wins() {
        let a = Vec3d::<f32>::new(1., 2., 3.);
        let b = Vec3d::<f64>::new(-2., 0., 5.);

        let ab: BiVec3d<f64> = a.wdg(b);
        let ba: BiVec3d<f64> = b.wdg(a);
        assert_eq!(ab, -ba);
        assert_eq!(a.to_f64().wdg(b), ab);
        assert_eq!(Scalar3d::<f64>::new(13.), a.dot(b));

        let m: MVec3dE<f64> = a * b;
        assert_eq!(a.to_f64() * b, m);
        assert_eq!(b * b, b.to_f32() * b);
        assert_eq!(MVec3dE::<f64>::new(13., 10., -11., 4.), m);
    }

    #[test]
    fn mixed_equality_uses_the_wider_epsilon() {
        let third = 1. / 3.;
        let a = Vec3d::<f32>::new(third as f32, 1., 0.);
        let b = Vec3d::<f64>::new(third, 1., 0.);

        assert!(a == b);
        assert!(b == a);
        assert!(a.to_f64() != b);
        assert!(a != Vec3d::<f64>::new(third + 1e-5, 1., 0.));
    }
}
