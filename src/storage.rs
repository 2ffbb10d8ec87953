//! Fixed-size component containers shared by every algebra.
//!
//! A container only knows how many components it holds. The `Tag` parameter names the
//! algebra and grade the components belong to, so `Vec3<T, Vec3dTag>` and
//! `Vec3<T, BiVec3dTag>` are unrelated types that happen to share a layout.
//!
//! Componentwise arithmetic lives here. Everything that depends on the algebra is
//! implemented on the tagged aliases in the algebra modules.

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use num_traits::{Float, NumCast};
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::guarded;

/// Approximate equality used by every `PartialEq` impl in the crate:
/// `|a - b| <= 5 * eps * max(1, |a|, |b|)`.
#[inline]
pub fn approx_eq<T: Float>(a: T, b: T) -> bool {
    let five = T::one() + T::one() + T::one() + T::one() + T::one();
    approx_eq_eps(a, b, five * T::epsilon())
}

/// `|a - b| <= eps * max(1, |a|, |b|)`
#[inline]
pub fn approx_eq_eps<T: Float>(a: T, b: T, eps: T) -> bool {
    if a == b {
        return true;
    }
    let scale = T::one().max(a.abs()).max(b.abs());
    (a - b).abs() <= eps * scale
}

macro_rules! storage {
    ($(#[$meta:meta])* $name:ident { $($field:ident),+ }) => {
        $(#[$meta])*
        #[derive(Debug, Default, Copy, Clone)]
        #[repr(C)]
        pub struct $name<T, Tag> {
            $(pub $field: T,)+
            marker: PhantomData<Tag>,
        }

        impl<T, Tag> $name<T, Tag> {
            #[inline]
            pub const fn new($($field: T),+) -> Self {
                $name {
                    $($field,)+
                    marker: PhantomData,
                }
            }
        }

        impl<T: Float, Tag> $name<T, Tag> {
            /// Converts every component to another float type.
            pub fn cast<U: Float>(self) -> Option<$name<U, Tag>> {
                Some($name::new($(<U as NumCast>::from(self.$field)?),+))
            }

            /// Applies `f` to every component.
            #[inline]
            pub fn map(self, mut f: impl FnMut(T) -> T) -> Self {
                $name::new($(f(self.$field)),+)
            }
        }

        impl<Tag> $name<f64, Tag> {
            pub fn to_f32(self) -> $name<f32, Tag> {
                $name::new($(self.$field as f32),+)
            }
        }

        impl<Tag> $name<f32, Tag> {
            pub fn to_f64(self) -> $name<f64, Tag> {
                $name::new($(self.$field as f64),+)
            }
        }

        impl<T: Float, Tag> PartialEq for $name<T, Tag> {
            fn eq(&self, other: &Self) -> bool {
                $(approx_eq(self.$field, other.$field))&&+
            }
        }

        impl<T: Float + AbsDiffEq<Epsilon = T>, Tag> AbsDiffEq for $name<T, Tag> {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                $(self.$field.abs_diff_eq(&other.$field, epsilon))&&+
            }
        }

        impl<T: Float + RelativeEq<Epsilon = T>, Tag> RelativeEq for $name<T, Tag> {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                $(self.$field.relative_eq(&other.$field, epsilon, max_relative))&&+
            }
        }

        unsafe impl<T: Zeroable, Tag> Zeroable for $name<T, Tag> {}

        unsafe impl<T: Pod, Tag: Copy + 'static> Pod for $name<T, Tag> {}

        impl<T: Float, Tag> Add for $name<T, Tag> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                $name::new($(self.$field + rhs.$field),+)
            }
        }

        impl<T: Float, Tag> Sub for $name<T, Tag> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                $name::new($(self.$field - rhs.$field),+)
            }
        }

        impl<T: Float, Tag> Neg for $name<T, Tag> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                $name::new($(-self.$field),+)
            }
        }

        impl<T: Float, Tag> Mul<T> for $name<T, Tag> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: T) -> Self {
                $name::new($(self.$field * rhs),+)
            }
        }

        impl<T: Float, Tag> Div<T> for $name<T, Tag> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: T) -> Self {
                let rhs = guarded("div", rhs);
                $name::new($(self.$field / rhs),+)
            }
        }

        impl<Tag> Mul<$name<f64, Tag>> for f64 {
            type Output = $name<f64, Tag>;

            #[inline]
            fn mul(self, rhs: $name<f64, Tag>) -> Self::Output {
                rhs * self
            }
        }

        impl<Tag> Mul<$name<f32, Tag>> for f32 {
            type Output = $name<f32, Tag>;

            #[inline]
            fn mul(self, rhs: $name<f32, Tag>) -> Self::Output {
                rhs * self
            }
        }

        impl<T: Float, Tag> AddAssign for $name<T, Tag> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field + rhs.$field;)+
            }
        }

        impl<T: Float, Tag> SubAssign for $name<T, Tag> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field - rhs.$field;)+
            }
        }

        impl<T: Float, Tag> MulAssign<T> for $name<T, Tag> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                $(self.$field = self.$field * rhs;)+
            }
        }

        impl<T: Float, Tag> DivAssign<T> for $name<T, Tag> {
            #[inline]
            fn div_assign(&mut self, rhs: T) {
                let rhs = guarded("div", rhs);
                $(self.$field = self.$field / rhs;)+
            }
        }

        impl<T: Float, Tag> Sum for $name<T, Tag> {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(num_traits::Zero::zero(), Add::add)
            }
        }

        impl<T: Float, Tag> num_traits::Zero for $name<T, Tag> {
            #[inline]
            fn zero() -> Self {
                $name {
                    $($field: T::zero(),)+
                    marker: PhantomData,
                }
            }

            fn is_zero(&self) -> bool {
                $(self.$field.is_zero())&&+
            }
        }
    };
}

storage! {
    /// A single component: scalars and pseudoscalars.
    Scalar { value }
}

storage! {
    /// Two components: 2D vectors.
    Vec2 { x, y }
}

storage! {
    /// Three components: 3D vectors and bivectors, 2D projective vectors and bivectors.
    Vec3 { x, y, z }
}

storage! {
    /// Four components: 3D projective vectors and trivectors.
    Vec4 { x, y, z, w }
}

storage! {
    /// Six components: 3D projective bivectors (lines).
    ///
    /// `vx, vy, vz` hold the direction (e41, e42, e43), `mx, my, mz` the moment
    /// (e23, e31, e12).
    BVec6 { vx, vy, vz, mx, my, mz }
}

storage! {
    /// Two-component multivector: even 2D multivectors and dual numbers.
    MVec2 { c0, c1 }
}

storage! {
    /// Four-component multivector.
    MVec4 { c0, c1, c2, c3 }
}

storage! {
    /// Eight-component multivector.
    MVec8 { c0, c1, c2, c3, c4, c5, c6, c7 }
}

storage! {
    /// Sixteen-component multivector: the full 3D projective algebra.
    MVec16 { c0, c1, c2, c3, c4, c5, c6, c7, c8, c9, c10, c11, c12, c13, c14, c15 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
    struct Tag;

    #[test]
    fn approx_eq_scales_with_magnitude() {
        assert!(approx_eq(1.0_f64, 1.0 + f64::EPSILON));
        assert!(approx_eq(1e6_f64, 1e6 + 1e6 * 4.0 * f64::EPSILON));
        assert!(!approx_eq(1.0_f64, 1.0 + 10.0 * f64::EPSILON));
        assert!(!approx_eq(0.0_f32, 1e-3));
    }

    #[test]
    fn componentwise_ops() {
        let a = Vec3::<f64, Tag>::new(1., 2., 3.);
        let b = Vec3::<f64, Tag>::new(4., 5., 6.);

        assert_eq!(Vec3::new(5., 7., 9.), a + b);
        assert_eq!(Vec3::new(-3., -3., -3.), a - b);
        assert_eq!(Vec3::new(2., 4., 6.), a * 2.);
        assert_eq!(Vec3::new(2., 4., 6.), 2. * a);
        assert_eq!(Vec3::new(0.5, 1., 1.5), a / 2.);
        assert_eq!(Vec3::new(5., 7., 9.), [a, b].into_iter().sum::<Vec3<f64, Tag>>());
    }

    #[test]
    fn assign_ops() {
        let mut a = MVec4::<f32, Tag>::new(1., 2., 3., 4.);
        a += MVec4::new(1., 1., 1., 1.);
        a *= 2.;
        a -= MVec4::new(4., 4., 4., 4.);
        a /= 2.;
        assert_eq!(MVec4::<f32, Tag>::new(0., 1., 2., 3.), a);
    }

    #[test]
    fn precision_conversion() {
        let a = BVec6::<f64, Tag>::new(1., 2., 3., 4., 5., 6.);
        assert_eq!(a, a.to_f32().to_f64());
        assert_eq!(Some(a.to_f32()), a.cast::<f32>());
    }

    #[test]
    fn pod_layout() {
        let a = Vec4::<f32, Tag>::new(1., 2., 3., 4.);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&a));
        assert_eq!(&[1., 2., 3., 4.], floats);
        assert_eq!(16, std::mem::size_of::<Vec4<f32, Tag>>());
    }

    #[test]
    fn zero() {
        use num_traits::Zero;
        let z = MVec16::<f64, Tag>::zero();
        assert!(z.is_zero());
        assert_eq!(z, MVec16::<f64, Tag>::default());
    }

    #[test]
    #[cfg(not(feature = "checked-division"))]
    fn unchecked_division_by_zero_is_infinite() {
        let a = Vec2::<f64, Tag>::new(1., -1.) / 0.;
        assert!(a.x.is_infinite() && a.y.is_infinite());
    }
}
